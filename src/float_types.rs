// Re-export parry for the appropriate float size
#[cfg(feature = "f64")]
pub use parry3d_f64 as parry3d;

#[cfg(feature = "f32")]
pub use parry3d;

// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized tolerance used by the plane solver, the inside test and
/// vertex merging.
/// Defaults depend on precision (`f32` vs `f64`), but can be overridden:
///  1) **Build-time**: set env var `BRUSHY_TOLERANCE` (e.g. `BRUSHY_TOLERANCE=1e-6 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before building any brush
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-4
    }
    #[cfg(feature = "f64")]
    {
        1e-5
    }
}

/// Returns the current tolerance.
/// If not set yet, it tries `BRUSHY_TOLERANCE` (parsed as the active `Real`) and
/// falls back to the precision default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("BRUSHY_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `brushy::float_types::set_tolerance(1e-6);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// Approximate scalar equality: the allowed error grows with the magnitude of
/// `a` and never drops below `eps`.
#[inline]
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    if a == b {
        return true;
    }
    let allowed = (eps * a.abs()).max(eps);
    (a - b).abs() < allowed
}

/// `true` when `x` is within `eps` of zero.
#[inline]
pub fn is_zero_approx(x: Real, eps: Real) -> bool {
    x.abs() <= eps
}

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
#[cfg(feature = "f32")]
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;
/// π/2
#[cfg(feature = "f64")]
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

/// Texels per world unit used when no density is configured.
pub const DEFAULT_TEXEL_DENSITY: [Real; 2] = [1024.0, 1024.0];
