/// Returns the first-iteration step guess (HZ stage I0).
///
/// With `g` the gradient at `x` and `f` the value there:
///
/// - `psi0 * max|x| / max|g|` when `x` is nonzero
/// - `psi0 * |f| / ||g||` when `x` is all zeros
/// - `1` when `g` is all zeros, or when both `x` and `f` are zero
#[must_use]
pub fn from_gradient<const N: usize>(
    x: &[f64; N],
    gradient: &[f64; N],
    value: f64,
    psi0: f64,
) -> f64 {
    let gradient_max = max_abs(gradient);
    if gradient_max == 0.0 {
        return 1.0;
    }

    let x_max = max_abs(x);
    if x_max != 0.0 {
        psi0 * x_max / gradient_max
    } else if value != 0.0 {
        let norm = gradient.iter().map(|g| g * g).sum::<f64>().sqrt();
        psi0 * value.abs() / norm
    } else {
        1.0
    }
}

fn max_abs<const N: usize>(v: &[f64; N]) -> f64 {
    v.iter().fold(0.0, |max, x| x.abs().max(max))
}
