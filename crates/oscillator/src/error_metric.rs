/// Default shift of [`relerr`].
pub const REGULARIZATION_SHIFT: f64 = 10.0;

/// Regularized relative error `|(shift + approx) / (shift + reference) − 1|`.
///
/// Both values are moved away from zero by `shift` before the ratio is
/// taken, so small solutions near their zero crossings do not blow the
/// error up.
#[must_use]
pub fn relerr(reference: f64, approx: f64, shift: f64) -> f64 {
    ((shift + approx) / (shift + reference) - 1.0).abs()
}

/// [`relerr`] with [`REGULARIZATION_SHIFT`].
#[must_use]
pub fn relerr_default(reference: f64, approx: f64) -> f64 {
    relerr(reference, approx, REGULARIZATION_SHIFT)
}
