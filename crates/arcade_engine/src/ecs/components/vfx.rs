//! Visual state components
//!
//! The core computes these values each tick; the presentation layer only
//! reads them.

use crate::foundation::math::utils::lerp;

/// Alpha ramp over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Fade {
    /// Alpha at the start of the ramp
    pub start_alpha: f32,
    /// Alpha at the end of the ramp
    pub end_alpha: f32,
    /// Ramp length in seconds
    pub duration: f32,
    /// Seconds elapsed
    pub elapsed: f32,
}

impl Fade {
    /// Create a fade
    pub const fn new(start_alpha: f32, end_alpha: f32, duration: f32) -> Self {
        Self {
            start_alpha,
            end_alpha,
            duration,
            elapsed: 0.0,
        }
    }

    /// Current alpha
    pub fn alpha(&self) -> f32 {
        lerp(self.start_alpha, self.end_alpha, progress(self.elapsed, self.duration))
    }
}

/// Scale ramp over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Grow {
    /// Scale at the start of the ramp
    pub start_scale: f32,
    /// Scale at the end of the ramp
    pub end_scale: f32,
    /// Ramp length in seconds
    pub duration: f32,
    /// Seconds elapsed
    pub elapsed: f32,
}

impl Grow {
    /// Create a scale ramp
    pub const fn new(start_scale: f32, end_scale: f32, duration: f32) -> Self {
        Self {
            start_scale,
            end_scale,
            duration,
            elapsed: 0.0,
        }
    }

    /// Current scale
    pub fn scale(&self) -> f32 {
        lerp(self.start_scale, self.end_scale, progress(self.elapsed, self.duration))
    }
}

fn progress(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        1.0
    } else {
        (elapsed / duration).clamp(0.0, 1.0)
    }
}
