/// A central finite-difference stencil.
///
/// Each stencil pairs symmetric sample offsets (in units of the step `h`)
/// with numerator coefficients and one shared denominator multiplier:
///
/// ```text
/// f'(x) ≈ Σ coefficient[k] · f(x + offset[k] · h) / (denominator · h)
/// ```
///
/// | Stencil      | Offsets            | Coefficients     | Denominator |
/// |--------------|--------------------|------------------|-------------|
/// | `ThreePoint` | −1, 0, +1          | −1, 0, +1        | 2           |
/// | `FivePoint`  | −2, −1, 0, +1, +2  | 1, −8, 0, 8, −1  | 12          |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stencil {
    /// Second-order accurate, three evaluations per derivative.
    ThreePoint,

    /// Fourth-order accurate, five evaluations per derivative.
    #[default]
    FivePoint,
}

const THREE_OFFSETS: [f64; 3] = [-1.0, 0.0, 1.0];
const THREE_COEFFICIENTS: [f64; 3] = [-1.0, 0.0, 1.0];

const FIVE_OFFSETS: [f64; 5] = [-2.0, -1.0, 0.0, 1.0, 2.0];
const FIVE_COEFFICIENTS: [f64; 5] = [1.0, -8.0, 0.0, 8.0, -1.0];

impl Stencil {
    /// Sample offsets in units of the step.
    #[must_use]
    pub const fn offsets(self) -> &'static [f64] {
        match self {
            Self::ThreePoint => &THREE_OFFSETS,
            Self::FivePoint => &FIVE_OFFSETS,
        }
    }

    /// Numerator coefficients, aligned with [`offsets`](Self::offsets).
    #[must_use]
    pub const fn coefficients(self) -> &'static [f64] {
        match self {
            Self::ThreePoint => &THREE_COEFFICIENTS,
            Self::FivePoint => &FIVE_COEFFICIENTS,
        }
    }

    /// Denominator multiplier applied to the step.
    #[must_use]
    pub const fn denominator(self) -> f64 {
        match self {
            Self::ThreePoint => 2.0,
            Self::FivePoint => 12.0,
        }
    }

    /// Number of function evaluations per derivative.
    #[must_use]
    pub const fn points(self) -> usize {
        self.offsets().len()
    }

    /// Order of the truncation error, `O(h^order)`.
    #[must_use]
    pub const fn order(self) -> u32 {
        match self {
            Self::ThreePoint => 2,
            Self::FivePoint => 4,
        }
    }

    /// Applies the stencil with step `h`.
    ///
    /// `sample` is called once per offset, in offset order, with the
    /// absolute shift `offset · h`; the weighted sum of its results is
    /// divided by `denominator · h`.
    pub fn apply<S>(self, h: f64, mut sample: S) -> f64
    where
        S: FnMut(f64) -> f64,
    {
        let weighted: f64 = self
            .offsets()
            .iter()
            .zip(self.coefficients())
            .map(|(offset, coefficient)| coefficient * sample(offset * h))
            .sum();
        weighted / (self.denominator() * h)
    }
}
