//! Evaluation of the ripple-curve family.
//!
//! The curve is a straight ray rotated by θ, carrying a sinusoidal ripple
//! whose amplitude grows or decays exponentially with rate M, shifted
//! horizontally by X:
//!
//! ```text
//! x(t) = t·cos(θ) − e^(M·t)·sin(0.3·t)·sin(θ) + X
//! y(t) = 42 + t·sin(θ) + e^(M·t)·sin(0.3·t)·cos(θ)
//! ```
//!
//! with θ supplied in degrees. The expression is defined for all real t.
//! The exponential term can overflow for large |M·t|; that is not guarded
//! here — a non-finite value propagates into the residuals and surfaces as a
//! solver failure.

use crate::domain::CurveParams;

/// Constant vertical offset of the curve family.
pub const Y_BASELINE: f64 = 42.0;
/// Angular frequency of the ripple term.
pub const RIPPLE_FREQ: f64 = 0.3;

/// Evaluate (x(t), y(t)) at a single t.
pub fn evaluate(params: &CurveParams, t: f64) -> (f64, f64) {
    let theta = params.theta_rad();
    let (sin_th, cos_th) = theta.sin_cos();
    // Ripple amplitude at t: exponential envelope times the sinusoid.
    let a = (params.rate * t).exp() * (RIPPLE_FREQ * t).sin();

    let x = t * cos_th - a * sin_th + params.offset;
    let y = Y_BASELINE + t * sin_th + a * cos_th;
    (x, y)
}

/// Evaluate the curve over a t-grid, returning equal-length x and y sequences.
pub fn evaluate_grid(params: &CurveParams, ts: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let mut xs = Vec::with_capacity(ts.len());
    let mut ys = Vec::with_capacity(ts.len());
    for &t in ts {
        let (x, y) = evaluate(params, t);
        xs.push(x);
        ys.push(y);
    }
    (xs, ys)
}

/// Partial derivatives of one curve point wrt the parameter triple.
///
/// Order matches `CurveParams`: (θ in degrees, M, X).
#[derive(Debug, Clone, Copy)]
pub struct Partials {
    pub dx: [f64; 3],
    pub dy: [f64; 3],
}

/// Analytic partial derivatives of (x(t), y(t)) wrt (θ_deg, M, X).
///
/// θ enters the model in radians, so the angle derivatives carry a π/180
/// factor to stay in degree units.
pub fn partials(params: &CurveParams, t: f64) -> Partials {
    let theta = params.theta_rad();
    let (sin_th, cos_th) = theta.sin_cos();
    let a = (params.rate * t).exp() * (RIPPLE_FREQ * t).sin();
    let deg = std::f64::consts::PI / 180.0;

    Partials {
        dx: [
            (-t * sin_th - a * cos_th) * deg,
            -t * a * sin_th,
            1.0,
        ],
        dy: [
            (t * cos_th - a * sin_th) * deg,
            t * a * cos_th,
            0.0,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_parameters_reduce_to_ray_plus_ripple() {
        // With θ=0, M=0, X=0 the rotation and envelope drop out exactly:
        // x(t) = t, y(t) = 42 + sin(0.3 t).
        let p = CurveParams::new(0.0, 0.0, 0.0);
        for t in [6.0, 30.0, 60.0] {
            let (x, y) = evaluate(&p, t);
            assert_eq!(x, t);
            assert_eq!(y, Y_BASELINE + (RIPPLE_FREQ * t).sin());
        }
    }

    #[test]
    fn finite_over_the_parameter_box() {
        // No NaN/Inf anywhere in the constrained box for t in [6, 60].
        for theta in [0.0, 12.5, 25.0, 37.5, 50.0] {
            for rate in [-0.05, -0.01, 0.0, 0.01, 0.05] {
                for offset in [0.0, 50.0, 100.0] {
                    let p = CurveParams::new(theta, rate, offset);
                    let mut t = 6.0;
                    while t <= 60.0 {
                        let (x, y) = evaluate(&p, t);
                        assert!(x.is_finite(), "x not finite at θ={theta} M={rate} t={t}");
                        assert!(y.is_finite(), "y not finite at θ={theta} M={rate} t={t}");
                        t += 1.5;
                    }
                }
            }
        }
    }

    #[test]
    fn grid_evaluation_matches_pointwise() {
        let p = CurveParams::new(25.0, 0.01, 40.0);
        let ts = [6.0, 17.3, 42.0, 60.0];
        let (xs, ys) = evaluate_grid(&p, &ts);
        assert_eq!(xs.len(), ts.len());
        assert_eq!(ys.len(), ts.len());
        for (i, &t) in ts.iter().enumerate() {
            let (x, y) = evaluate(&p, t);
            assert_eq!(xs[i], x);
            assert_eq!(ys[i], y);
        }
    }

    #[test]
    fn partials_agree_with_finite_differences() {
        let p = CurveParams::new(23.0, 0.012, 41.0);
        let t = 27.5;
        let d = partials(&p, t);

        let h = 1e-6;
        let bump = |dth: f64, dm: f64, dx: f64| {
            CurveParams::new(p.theta_deg + dth, p.rate + dm, p.offset + dx)
        };
        let fd = |plus: CurveParams, minus: CurveParams| {
            let (xp, yp) = evaluate(&plus, t);
            let (xm, ym) = evaluate(&minus, t);
            ((xp - xm) / (2.0 * h), (yp - ym) / (2.0 * h))
        };

        let (dx_th, dy_th) = fd(bump(h, 0.0, 0.0), bump(-h, 0.0, 0.0));
        let (dx_m, dy_m) = fd(bump(0.0, h, 0.0), bump(0.0, -h, 0.0));
        let (dx_x, dy_x) = fd(bump(0.0, 0.0, h), bump(0.0, 0.0, -h));

        assert_relative_eq!(d.dx[0], dx_th, epsilon = 1e-6);
        assert_relative_eq!(d.dy[0], dy_th, epsilon = 1e-6);
        assert_relative_eq!(d.dx[1], dx_m, epsilon = 1e-4, max_relative = 1e-5);
        assert_relative_eq!(d.dy[1], dy_m, epsilon = 1e-4, max_relative = 1e-5);
        assert_relative_eq!(d.dx[2], dx_x, epsilon = 1e-8);
        assert_relative_eq!(d.dy[2], dy_x, epsilon = 1e-8);
    }
}
