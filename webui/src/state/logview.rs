//! Log tail cache for the log view.

#[cfg(test)]
#[path = "logview_test.rs"]
mod logview_test;

/// Last successfully fetched log content.
///
/// Empty until the first poll succeeds; a failed poll leaves the previous
/// content in place (last-known-good).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogState {
    pub content: String,
}

impl LogState {
    /// Record a freshly fetched log tail.
    pub fn record(&mut self, content: String) {
        self.content = content;
    }
}
