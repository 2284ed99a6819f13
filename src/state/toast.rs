//! Success toast animation state

use std::time::{Duration, Instant};

/// Animation phase for the success toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Sliding in from the top edge
    SlideIn,
    /// Fully visible
    Hold,
    /// Expired, ready to be dropped
    Done,
}

/// Confirmation banner shown after a successful submit
#[derive(Debug)]
pub struct Toast {
    start_time: Instant,
    /// Short submission reference shown in the banner
    pub reference: String,
    pub phase: ToastPhase,
    /// Slide progress, 0.0 (off-screen) to 1.0 (in place)
    pub progress: f32,
}

impl Toast {
    /// Slide-in duration
    const SLIDE_DURATION: Duration = Duration::from_millis(250);
    /// How long the banner stays before expiring
    const HOLD_DURATION: Duration = Duration::from_secs(4);

    pub fn new(reference: String) -> Self {
        Self {
            start_time: Instant::now(),
            reference,
            phase: ToastPhase::SlideIn,
            progress: 0.0,
        }
    }

    /// Advance the animation based on elapsed time
    pub fn update(&mut self) {
        if self.phase == ToastPhase::Done {
            return;
        }
        let elapsed = self.start_time.elapsed();

        if elapsed < Self::SLIDE_DURATION {
            self.phase = ToastPhase::SlideIn;
            let raw = elapsed.as_secs_f32() / Self::SLIDE_DURATION.as_secs_f32();
            // Cubic ease-out, decelerating into place
            self.progress = simple_easing::cubic_out(raw);
        } else if elapsed < Self::SLIDE_DURATION + Self::HOLD_DURATION {
            self.phase = ToastPhase::Hold;
            self.progress = 1.0;
        } else {
            self.phase = ToastPhase::Done;
        }
    }

    /// Dismiss early (user pressed Esc)
    pub fn dismiss(&mut self) {
        self.phase = ToastPhase::Done;
    }

    pub fn is_done(&self) -> bool {
        self.phase == ToastPhase::Done
    }
}
