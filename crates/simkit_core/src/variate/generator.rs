//! Single-draw variate generators.
//!
//! The public functions validate their parameters on every call. Bulk
//! generation goes through [`generate_sample`](super::generate_sample), which
//! validates once and then uses the unchecked kernels below.

use std::f64::consts::PI;

use super::{round4, Distribution};
use crate::error::Result;
use crate::rng::UniformSource;

/// Draws one Uniform[a, b] variate: `round(u(b - a) + a, 4)`.
///
/// # Errors
///
/// `InvalidParameter` if `b <= a` or a bound is not finite.
///
/// # Examples
///
/// ```rust
/// use simkit_core::rng::ReplaySource;
/// use simkit_core::variate::generate_uniform;
///
/// let mut source = ReplaySource::constant(0.5).unwrap();
/// assert_eq!(generate_uniform(&mut source, 0.0, 1.0).unwrap(), 0.5);
/// ```
pub fn generate_uniform<S>(source: &mut S, a: f64, b: f64) -> Result<f64>
where
    S: UniformSource + ?Sized,
{
    Distribution::uniform(a, b).validate()?;
    Ok(uniform_unchecked(source, a, b))
}

/// Draws one Exponential(λ) variate by inverse transform: `round(-ln(1 - u) / λ, 4)`.
///
/// Uses `1 - u` so that `u = 0` maps to `0` instead of `ln(0)`.
///
/// # Errors
///
/// `InvalidParameter` if `λ <= 0` or not finite.
///
/// # Examples
///
/// ```rust
/// use simkit_core::rng::ReplaySource;
/// use simkit_core::variate::generate_exponential;
///
/// let mut source = ReplaySource::constant(0.5).unwrap();
/// assert_eq!(generate_exponential(&mut source, 1.0).unwrap(), 0.6931);
/// ```
pub fn generate_exponential<S>(source: &mut S, lambda: f64) -> Result<f64>
where
    S: UniformSource + ?Sized,
{
    Distribution::exponential(lambda).validate()?;
    Ok(exponential_unchecked(source, lambda))
}

/// Draws a pair of Normal(μ, σ) variates with the Box–Muller transform.
///
/// With `r = sqrt(-2 ln u1)` the pair is
/// `(r sin(2π u2) σ + μ, r cos(2π u2) σ + μ)`, each rounded to 4 decimals.
/// `u1` is clamped to the smallest positive normal `f64`, so a zero draw
/// yields a large but finite radius.
///
/// # Algorithm Reference
///
/// Box, G. E. P. & Muller, M. E. (1958). "A Note on the Generation of
/// Random Normal Deviates". The Annals of Mathematical Statistics 29(2).
///
/// # Errors
///
/// `InvalidParameter` if `σ <= 0` or a parameter is not finite.
pub fn generate_normal_pair<S>(source: &mut S, mean: f64, std_dev: f64) -> Result<(f64, f64)>
where
    S: UniformSource + ?Sized,
{
    Distribution::normal(mean, std_dev).validate()?;
    Ok(normal_pair_unchecked(source, mean, std_dev))
}

#[inline]
pub(crate) fn uniform_unchecked<S>(source: &mut S, a: f64, b: f64) -> f64
where
    S: UniformSource + ?Sized,
{
    let u = source.next_uniform();
    round4(u * (b - a) + a)
}

#[inline]
pub(crate) fn exponential_unchecked<S>(source: &mut S, lambda: f64) -> f64
where
    S: UniformSource + ?Sized,
{
    let u = source.next_uniform();
    round4(-(1.0 - u).ln() / lambda)
}

#[inline]
pub(crate) fn normal_pair_unchecked<S>(source: &mut S, mean: f64, std_dev: f64) -> (f64, f64)
where
    S: UniformSource + ?Sized,
{
    let u1 = source.next_uniform().max(f64::MIN_POSITIVE);
    let u2 = source.next_uniform();

    let radius = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * PI * u2;

    (
        round4(radius * theta.sin() * std_dev + mean),
        round4(radius * theta.cos() * std_dev + mean),
    )
}
