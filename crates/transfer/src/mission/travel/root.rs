//! Derivative-free Newton iteration (the slope is a forward difference of the objective),
//! plus a sampled scan that brackets the first downward crossing and bisects it.

use solar_orbits::KeplerError;

/// Iteration bound and acceptance thresholds for a single root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootSettings {
    pub max_iterations: usize,
    /// Relative step size below which the iterate is considered settled.
    pub step_tolerance: f64,
    /// Largest accepted `|f(x)|` at a settled iterate.
    pub residual_tolerance: f64,
}

/// Upper bound on samples taken by [`first_crossing`]; coarser steps are used past it.
pub const MAX_SCAN_SAMPLES: usize = 1 << 16;

const BISECTION_LIMIT: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConvergenceError {
    #[error("objective evaluation failed: {0}")]
    Objective(#[from] KeplerError),
    #[error("objective is flat near {at}")]
    FlatSlope { at: f64 },
    #[error("iterate diverged")]
    Diverged,
    #[error("settled at {at} with residual {residual:e} above tolerance")]
    Stalled { at: f64, residual: f64 },
    #[error("no root within {iterations} iterations (last residual {residual:e})")]
    Exhausted { iterations: usize, residual: f64 },
}

pub fn find_root<F>(objective: F, guess: f64, settings: &RootSettings) -> Result<f64, ConvergenceError>
where
    F: Fn(f64) -> Result<f64, KeplerError>,
{
    let relative_step = f64::EPSILON.sqrt();
    let mut x = guess;
    let mut fx = objective(x)?;

    for _ in 0..settings.max_iterations {
        if !fx.is_finite() {
            return Err(ConvergenceError::Diverged);
        }
        let h = relative_step * x.abs().max(1.0);
        let slope = (objective(x + h)? - fx) / h;
        if slope == 0.0 || !slope.is_finite() {
            return Err(ConvergenceError::FlatSlope { at: x });
        }

        let step = fx / slope;
        x -= step;
        if !x.is_finite() {
            return Err(ConvergenceError::Diverged);
        }
        fx = objective(x)?;

        if step.abs() <= settings.step_tolerance * (1.0 + x.abs()) {
            if fx.abs() <= settings.residual_tolerance {
                return Ok(x);
            }
            return Err(ConvergenceError::Stalled { at: x, residual: fx });
        }
    }

    Err(ConvergenceError::Exhausted {
        iterations: settings.max_iterations,
        residual: fx,
    })
}

/// Earliest point in `(start, end]` where `objective` goes from positive to non-positive.
///
/// The interval is sampled every `step` (widened so no more than [`MAX_SCAN_SAMPLES`] are
/// taken, and `end` is always sampled). A dip that starts and ends between two samples is
/// not seen. The bracketing pair is narrowed by bisection until its width falls under
/// `settings.step_tolerance`, and the non-positive end is returned.
pub fn first_crossing<F>(
    objective: F,
    start: f64,
    end: f64,
    step: f64,
    settings: &RootSettings,
) -> Result<Option<f64>, ConvergenceError>
where
    F: Fn(f64) -> Result<f64, KeplerError>,
{
    let span = end - start;
    if !(span.is_finite() && span > 0.0 && step > 0.0) {
        return Ok(None);
    }
    let step = step.max(span / MAX_SCAN_SAMPLES as f64);
    let samples = (span / step).ceil() as usize;

    let mut previous = (start, objective(start)?);
    for k in 1..=samples {
        let t = if k == samples { end } else { start + k as f64 * step };
        let ft = objective(t)?;
        if previous.1 > 0.0 && ft <= 0.0 {
            return bisect(&objective, previous.0, t, settings).map(Some);
        }
        previous = (t, ft);
    }
    Ok(None)
}

/// Narrow a bracket with `f(low) > 0 >= f(high)`.
fn bisect<F>(
    objective: &F,
    mut low: f64,
    mut high: f64,
    settings: &RootSettings,
) -> Result<f64, ConvergenceError>
where
    F: Fn(f64) -> Result<f64, KeplerError>,
{
    for _ in 0..BISECTION_LIMIT {
        if high - low <= settings.step_tolerance * (1.0 + high.abs()) {
            break;
        }
        let mid = 0.5 * (low + high);
        if objective(mid)? > 0.0 {
            low = mid;
        } else {
            high = mid;
        }
    }
    Ok(high)
}
