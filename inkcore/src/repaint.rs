//! Repaint governor for inkpad
//!
//! egui is an immediate-mode GUI: every frame redraws everything. An idle
//! notepad has no reason to redraw, so this controller tracks *why* a
//! repaint is needed and schedules nothing when the app is idle:
//!
//! 1. **Input-driven** — user typed, clicked, or scrolled. Always repaint.
//! 2. **State change** — the app marked itself dirty outside an input
//!    event (e.g. a dialog opened from a deferred action).
//! 3. **Idle** — nothing happened. Do *not* repaint; egui sleeps until
//!    the next input event wakes it.

/// Why this frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame — always paint.
    Init,
    /// User input (mouse move, key press, scroll).
    Input,
    /// App-requested repaint (state changed internally).
    StateChange,
}

/// Controls when the egui context should request repaints.
///
/// Drop this into your app struct and call [`Self::begin_frame`] at the
/// top of `update()` and [`Self::end_frame`] at the bottom.
pub struct RepaintController {
    /// Whether a one-shot repaint has been requested.
    needs_repaint: bool,
    /// Frame counter (0 = first frame).
    frame: u64,
    /// Why the current frame is being painted (set by begin_frame).
    reason: RepaintReason,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            needs_repaint: false,
            frame: 0,
            reason: RepaintReason::Init,
        }
    }

    /// Request a single repaint on the next opportunity.
    ///
    /// Call this when internal state changes outside of user input.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    /// Returns why the current frame is being painted.
    pub fn reason(&self) -> RepaintReason {
        self.reason
    }

    /// Current frame counter.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Call at the **start** of your `update()` method.
    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.pointer.any_click()
                || i.raw_scroll_delta != egui::Vec2::ZERO
                || i.pointer.is_moving()
        });

        self.reason = if self.frame == 0 {
            RepaintReason::Init
        } else if had_input {
            RepaintReason::Input
        } else if self.needs_repaint {
            RepaintReason::StateChange
        } else {
            // Frame was triggered by something we did not classify;
            // treat it as input-driven.
            RepaintReason::Input
        };

        // Clear the one-shot flag now that we've consumed it.
        self.needs_repaint = false;
    }

    /// Call at the **end** of your `update()` method.
    ///
    /// Issues a repaint only if one was requested during this frame's UI
    /// code; otherwise egui sleeps until the next input event.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;
        if self.needs_repaint {
            ctx.request_repaint();
        }
    }
}
