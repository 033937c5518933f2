use crate::Error;

/// Ordered finite bounds for a bisection bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    pub(super) left: f64,
    pub(super) right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is non-finite or the bracket has
    /// zero width.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, Error> {
        let [left, right] = bracket;

        if !left.is_finite() {
            return Err(Error::NonFiniteBracket { value: left });
        }
        if !right.is_finite() {
            return Err(Error::NonFiniteBracket { value: right });
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(Error::ZeroWidthBracket { value: left });
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns half the bracket width.
    pub(super) fn half_width(&self) -> f64 {
        0.5 * (self.right - self.left)
    }

    /// Returns the bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}
