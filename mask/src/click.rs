//! Click vs double-click disambiguation.
//!
//! A browser fires `click` immediately before `dblclick`, so adding a
//! vertex straight from the `click` handler would also add one for every
//! double click that closes a polygon. The arbiter holds the first click
//! back for [`CLICK_CONFIRM_DELAY_MS`](crate::consts::CLICK_CONFIRM_DELAY_MS)
//! and only confirms it as a single click when no double click arrived in
//! the meantime. The delay is deliberate input latency traded for "at most
//! one vertex per single click, zero per double click".

#[cfg(test)]
#[path = "click_test.rs"]
mod click_test;

use crate::geometry::Point;

/// State of the disambiguation machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ClickPhase {
    /// No click pending.
    #[default]
    Idle,
    /// A primary click is being held back until its delay timer fires.
    PendingSingle {
        /// Pixel-space location of the held click.
        at: Point,
        /// Sequence number of the timer armed for this click.
        seq: u64,
    },
}

/// One input observed by the arbiter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickInput {
    /// Primary-button click at a pixel-space point.
    Press(Point),
    /// Primary-button double click.
    DoublePress,
    /// Secondary-button press (context menu gesture).
    SecondaryPress,
    /// The delay timer armed with this sequence number elapsed.
    TimerFired { seq: u64 },
}

/// What the host must do in response to an input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickEffect {
    /// Arm a delay timer that feeds back [`ClickInput::TimerFired`] with
    /// the same sequence number.
    ArmTimer { seq: u64 },
    /// The held click was confirmed as a single click: add a vertex.
    AddVertex(Point),
    /// Double click confirmed: complete the draft polygon.
    CompleteDraft,
    /// Secondary press: discard the draft polygon.
    CancelDraft,
}

/// Timer-based click/double-click state machine.
///
/// Sequence numbers make stale timers inert: the browser timeout armed for
/// a click cannot be revoked from pure code, so a fire whose `seq` no
/// longer matches the pending click is ignored instead.
#[derive(Debug, Default)]
pub struct ClickArbiter {
    phase: ClickPhase,
    next_seq: u64,
}

impl ClickArbiter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase, for rendering and tests.
    #[must_use]
    pub fn phase(&self) -> ClickPhase {
        self.phase
    }

    /// Apply one input, returning the effect the host must perform, if any.
    pub fn apply(&mut self, input: ClickInput) -> Option<ClickEffect> {
        match input {
            ClickInput::Press(at) => {
                // A second press before the first confirmed re-arms; the
                // superseded timer becomes stale via its sequence number.
                let seq = self.next_seq;
                self.next_seq += 1;
                self.phase = ClickPhase::PendingSingle { at, seq };
                Some(ClickEffect::ArmTimer { seq })
            }
            ClickInput::DoublePress => {
                self.phase = ClickPhase::Idle;
                Some(ClickEffect::CompleteDraft)
            }
            ClickInput::SecondaryPress => {
                self.phase = ClickPhase::Idle;
                Some(ClickEffect::CancelDraft)
            }
            ClickInput::TimerFired { seq } => match self.phase {
                ClickPhase::PendingSingle { at, seq: pending } if pending == seq => {
                    self.phase = ClickPhase::Idle;
                    Some(ClickEffect::AddVertex(at))
                }
                _ => None,
            },
        }
    }
}
