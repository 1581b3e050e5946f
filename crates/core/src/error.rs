use thiserror::Error;

/// Two sequences that must be combined elementwise have different lengths.
///
/// Returned when building a [`BinaryOpView`](crate::BinaryOpView) or taking
/// an inner product over views of unequal size.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("length mismatch: left has {left} elements, right has {right}")]
pub struct LengthMismatch {
    /// Length of the left-hand operand.
    pub left: usize,

    /// Length of the right-hand operand.
    pub right: usize,
}

impl LengthMismatch {
    /// Returns `Ok(())` if the lengths agree.
    ///
    /// # Errors
    ///
    /// Returns a [`LengthMismatch`] carrying both lengths if they differ.
    pub fn check(left: usize, right: usize) -> Result<(), Self> {
        if left == right {
            Ok(())
        } else {
            Err(Self { left, right })
        }
    }
}
