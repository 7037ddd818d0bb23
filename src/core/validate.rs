//! # Coordinate Validation
//!
//! Screen coordinates are checked before any pointer action reaches the
//! provider. Bounds are inclusive on both edges (`0..=width`, `0..=height`)
//! and always passed in fresh; resolution can change between invocations.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    NegativeX(i32),
    NegativeY(i32),
    ExceedsWidth { x: i32, width: i32 },
    ExceedsHeight { y: i32, height: i32 },
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::NegativeX(x) => write!(f, "x coordinate cannot be negative: {x}"),
            CoordinateError::NegativeY(y) => write!(f, "y coordinate cannot be negative: {y}"),
            CoordinateError::ExceedsWidth { x, width } => {
                write!(f, "x coordinate {x} exceeds screen width {width}")
            }
            CoordinateError::ExceedsHeight { y, height } => {
                write!(f, "y coordinate {y} exceeds screen height {height}")
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

/// Check `(x, y)` against a `width` x `height` screen.
pub fn validate(x: i32, y: i32, width: i32, height: i32) -> Result<(), CoordinateError> {
    if x < 0 {
        return Err(CoordinateError::NegativeX(x));
    }
    if y < 0 {
        return Err(CoordinateError::NegativeY(y));
    }
    if x > width {
        return Err(CoordinateError::ExceedsWidth { x, width });
    }
    if y > height {
        return Err(CoordinateError::ExceedsHeight { y, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_iff_within_inclusive_bounds() {
        for (w, h) in [(0, 0), (3, 2), (1920, 1080)] {
            for x in -3..=w + 3 {
                for y in -3..=h + 3 {
                    let inside = (0..=w).contains(&x) && (0..=h).contains(&y);
                    assert_eq!(validate(x, y, w, h).is_ok(), inside, "({x}, {y}) on {w}x{h}");
                }
            }
        }
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(validate(-5, 10, 1920, 1080), Err(CoordinateError::NegativeX(-5)));
        assert_eq!(validate(10, -1, 1920, 1080), Err(CoordinateError::NegativeY(-1)));
        assert_eq!(validate(i32::MIN, 0, 1920, 1080), Err(CoordinateError::NegativeX(i32::MIN)));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        assert_eq!(
            validate(1921, 0, 1920, 1080),
            Err(CoordinateError::ExceedsWidth { x: 1921, width: 1920 })
        );
        assert_eq!(
            validate(0, 1081, 1920, 1080),
            Err(CoordinateError::ExceedsHeight { y: 1081, height: 1080 })
        );
    }

    #[test]
    fn test_edges_accepted() {
        assert!(validate(0, 0, 1920, 1080).is_ok());
        assert!(validate(1920, 1080, 1920, 1080).is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoordinateError::NegativeX(-5).to_string(),
            "x coordinate cannot be negative: -5"
        );
        assert_eq!(
            CoordinateError::ExceedsHeight { y: 2000, height: 1080 }.to_string(),
            "y coordinate 2000 exceeds screen height 1080"
        );
    }
}
