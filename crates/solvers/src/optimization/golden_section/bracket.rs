/// The inverse golden ratio: 1/φ = (√5 − 1) / 2.
///
/// The bracket width shrinks by this factor on every iteration.
pub const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// The squared inverse golden ratio: 1/φ² = 1 − 1/φ.
///
/// Fraction of the width between the left bound and the inner left point.
pub const INV_PHI_SQ: f64 = 1.0 - INV_PHI;

/// Golden section search bracket.
///
/// Maintains the outer interval `[left, right]` and two interior points
/// positioned according to the golden ratio. The width is tracked separately
/// and contracted by [`INV_PHI`] per shrink, so after `k` shrinks it is
/// `initial_width · INV_PHI^k` regardless of round-off in the bounds.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    /// Outer left bound.
    pub(super) left: f64,

    /// Outer right bound.
    pub(super) right: f64,

    /// Inner left point at `left + φ⁻² · width`.
    pub(super) inner_left: f64,

    /// Inner right point at `left + φ⁻¹ · width`.
    pub(super) inner_right: f64,

    /// Current bracket width.
    pub(super) width: f64,
}

impl GoldenBracket {
    /// Creates a bracket from bounds with interior points positioned by the golden ratio.
    ///
    /// If the bounds are reversed, they are automatically swapped.
    pub(super) fn new(bounds: [f64; 2]) -> Self {
        let [a, b] = bounds;
        let (left, right) = if a <= b { (a, b) } else { (b, a) };
        let width = right - left;
        Self {
            left,
            right,
            inner_left: left + INV_PHI_SQ * width,
            inner_right: left + INV_PHI * width,
            width,
        }
    }

    /// Returns the width after one more shrink.
    pub(super) fn next_width(&self) -> f64 {
        self.width * INV_PHI
    }

    /// Shrinks the bounds to `[left, inner_right]` and computes a new `inner_left`.
    ///
    /// The old `inner_left` becomes the new `inner_right`.
    pub(super) fn shrink_right(&mut self) {
        self.right = self.inner_right;
        self.inner_right = self.inner_left;
        self.width = self.next_width();
        self.inner_left = self.left + INV_PHI_SQ * self.width;
    }

    /// Shrinks the bounds to `[inner_left, right]` and computes a new `inner_right`.
    ///
    /// The old `inner_right` becomes the new `inner_left`.
    pub(super) fn shrink_left(&mut self) {
        self.left = self.inner_left;
        self.inner_left = self.inner_right;
        self.width = self.next_width();
        self.inner_right = self.left + INV_PHI * self.width;
    }

    /// Returns x for new `inner_left` after shrinking right (without mutating).
    pub(super) fn new_inner_left(&self) -> f64 {
        self.left + INV_PHI_SQ * self.next_width()
    }

    /// Returns x for new `inner_right` after shrinking left (without mutating).
    pub(super) fn new_inner_right(&self) -> f64 {
        self.inner_left + INV_PHI * self.next_width()
    }

    /// Midpoint of `[left, inner_right]`, the window kept when the left point is better.
    pub(super) fn left_window_mid(&self) -> f64 {
        0.5 * (self.left + self.inner_right)
    }

    /// Midpoint of `[inner_left, right]`, the window kept when the right point is better.
    pub(super) fn right_window_mid(&self) -> f64 {
        0.5 * (self.inner_left + self.right)
    }
}
