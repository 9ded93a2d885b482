//! Cached capture flag and falling-edge detection.

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

/// Cached copy of the device's capture flag, plus the bookkeeping needed to
/// detect the capturing-to-idle transition.
///
/// The default is "not capturing", so a falling edge can only fire after a
/// poll actually observed the flag high. The state is shared above the
/// routes so the preview stamp stays monotonic across view switches; the
/// control view calls [`reset_flag`](Self::reset_flag) on mount, so edge
/// detection still restarts from the safe default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureState {
    /// Most recently polled value of the capture flag.
    pub is_capturing: bool,
    /// Bumped on every capturing-to-idle transition; appended to the
    /// preview URL to defeat the image cache.
    pub preview_stamp: u64,
}

impl CaptureState {
    /// Record a freshly polled flag value.
    ///
    /// Returns true exactly when capture just finished: the previous value
    /// was capturing and the new one is idle. The preview stamp is bumped
    /// on that edge so the next render reloads the image. No effect on
    /// idle-to-idle, capturing-to-capturing, or idle-to-capturing.
    pub fn observe(&mut self, is_capturing: bool) -> bool {
        let finished = self.is_capturing && !is_capturing;
        self.is_capturing = is_capturing;
        if finished {
            self.preview_stamp += 1;
        }
        finished
    }

    /// Forget the cached flag, keeping the stamp.
    ///
    /// The flag is only meaningful while a poller is feeding it. Called
    /// when the control view mounts, so a value left over from before the
    /// previous teardown can never fire a spurious finish edge.
    pub fn reset_flag(&mut self) {
        self.is_capturing = false;
    }

    /// Preview image URL carrying the current cache-busting stamp.
    #[must_use]
    pub fn preview_url(&self) -> String {
        format!("{}?ts={}", crate::consts::PREVIEW_PATH, self.preview_stamp)
    }
}
