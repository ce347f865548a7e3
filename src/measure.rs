//! Post-paint size tracking for the rendered tooltip box.
//!
//! The box's size is unknown until the host has painted it once. After each
//! paint the host reports the box's bounding size, or `None` when there is
//! no backing node (e.g. headless rendering). The measurer keeps the last
//! accepted value and ignores sub-pixel jitter, which is what bounds the
//! render → measure → re-render loop.

use iced::Size;

/// Reported changes at or below this threshold are layout jitter, not real
/// size changes, and must not trigger another render pass.
const SIZE_EPS: f32 = 1.0;

const UNMEASURED: f32 = -1.0;

/// Tracks the last reported bounding size of the tooltip box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxMeasurer {
    measured: Size,
}

impl Default for BoxMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxMeasurer {
    /// Create a measurer in the unmeasured state.
    pub fn new() -> Self {
        Self {
            measured: Size::new(UNMEASURED, UNMEASURED),
        }
    }

    /// The last accepted size, or the `(-1, -1)` sentinel while unmeasured.
    pub fn box_size(&self) -> Size {
        self.measured
    }

    /// Whether no size has been accepted yet.
    pub fn is_unmeasured(&self) -> bool {
        self.measured.width == UNMEASURED && self.measured.height == UNMEASURED
    }

    /// Whether `report` would change the stored size.
    ///
    /// The read-only half of [`observe`](Self::observe), for hosts that
    /// publish a message first and apply it later.
    pub fn needs_update(&self, report: Option<Size>) -> bool {
        match report {
            Some(size) => {
                (size.width - self.measured.width).abs() > SIZE_EPS
                    || (size.height - self.measured.height).abs() > SIZE_EPS
            }
            None => !self.is_unmeasured(),
        }
    }

    /// Fold one post-paint report into the stored size.
    ///
    /// Returns whether the stored size changed; `true` means placement must
    /// be recomputed once with the new size. Repeating a report is a no-op,
    /// the fixed point that stops the feedback loop.
    pub fn observe(&mut self, report: Option<Size>) -> bool {
        if !self.needs_update(report) {
            return false;
        }

        match report {
            Some(size) => {
                log::trace!("tooltip box measured at {}x{}", size.width, size.height);
                self.measured = size;
            }
            None => {
                log::trace!("tooltip box lost its backing node, resetting measurement");
                self.measured = Size::new(UNMEASURED, UNMEASURED);
            }
        }
        true
    }
}
