use std::fmt;

use serde::{Deserialize, Serialize};

/// Size of the target the overlay draws into, in logical pixels.
///
/// Grid bounds and tiling are derived from it at setup time, so a resize
/// takes effect on the next full setup.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both sides finite and strictly positive.
    #[inline]
    pub fn is_valid(self) -> bool {
        [self.width, self.height].iter().all(|v| v.is_finite() && *v > 0.0)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(Viewport::new(1280.0, 720.0).is_valid());
        assert!(!Viewport::new(0.0, 720.0).is_valid());
        assert!(!Viewport::new(1280.0, f32::NAN).is_valid());
        assert!(!Viewport::default().is_valid());
    }

    #[test]
    fn displays_as_size() {
        assert_eq!(Viewport::new(1280.0, 720.0).to_string(), "1280x720");
    }
}
