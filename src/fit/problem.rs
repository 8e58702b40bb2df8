//! `LeastSquaresProblem` implementation for the solver.
//!
//! The problem is posed over *internal* (unbounded) coordinates; every
//! residual/Jacobian evaluation maps back through the bounds transform, so the
//! solver only ever sees feasible parameter values. Residual order matches
//! `stack`: x-residuals for each t, then y-residuals.

use levenberg_marquardt::LeastSquaresProblem;
use nalgebra::storage::Owned;
use nalgebra::{DVector, Dyn, OMatrix, OVector, U3, Vector3};

use crate::domain::CurveParams;
use crate::fit::stack::stack;
use crate::math::BoundedTransform;
use crate::model;

pub struct CurveProblem {
    /// t sample for each observation row.
    pub ts: Vec<f64>,
    /// Stacked observation vector (length 2N).
    pub observed: DVector<f64>,
    /// Box-constraint transform shared with the fitter.
    pub transform: BoundedTransform,
    /// Current internal coordinates.
    pub u: Vector3<f64>,
}

impl CurveProblem {
    pub fn external_params(&self) -> CurveParams {
        CurveParams::from_vector(&self.transform.to_external(&self.u))
    }
}

impl LeastSquaresProblem<f64, Dyn, U3> for CurveProblem {
    type ResidualStorage = Owned<f64, Dyn>;
    type JacobianStorage = Owned<f64, Dyn, U3>;
    type ParameterStorage = Owned<f64, U3>;

    fn set_params(&mut self, u: &Vector3<f64>) {
        self.u = *u;
    }

    fn params(&self) -> Vector3<f64> {
        self.u
    }

    fn residuals(&self) -> Option<OVector<f64, Dyn>> {
        let p = self.external_params();
        let (xs, ys) = model::evaluate_grid(&p, &self.ts);
        let r = stack(&xs, &ys) - &self.observed;
        if r.iter().all(|v| v.is_finite()) {
            Some(r)
        } else {
            None
        }
    }

    fn jacobian(&self) -> Option<OMatrix<f64, Dyn, U3>> {
        let p = self.external_params();
        // Chain rule through the bounds transform: dr/du = dr/dp · dp/du.
        let scale = self.transform.scale(&self.u);
        let n = self.ts.len();

        let mut jac = OMatrix::<f64, Dyn, U3>::zeros(2 * n);
        for (i, &t) in self.ts.iter().enumerate() {
            let d = model::partials(&p, t);
            for j in 0..3 {
                jac[(i, j)] = d.dx[j] * scale[j];
                jac[(n + i, j)] = d.dy[j] * scale[j];
            }
        }

        if jac.iter().all(|v| v.is_finite()) {
            Some(jac)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FitConfig;
    use crate::fit::t_grid::t_grid;

    fn problem_at(guess: CurveParams) -> CurveProblem {
        let config = FitConfig::default();
        let truth = CurveParams::new(25.0, 0.01, 40.0);
        let ts = t_grid(20);
        let (xs, ys) = model::evaluate_grid(&truth, &ts);
        let transform = BoundedTransform::new(&config.bounds);
        let u = transform.to_internal(&guess.to_vector()).unwrap();
        CurveProblem {
            observed: stack(&xs, &ys),
            ts,
            transform,
            u,
        }
    }

    #[test]
    fn residuals_vanish_at_the_generating_parameters() {
        let problem = problem_at(CurveParams::new(25.0, 0.01, 40.0));
        let r = problem.residuals().unwrap();
        assert_eq!(r.len(), 40);
        assert!(r.norm() < 1e-9);
    }

    #[test]
    fn jacobian_matches_residual_finite_differences() {
        let mut problem = problem_at(CurveParams::new(20.0, 0.0, 50.0));
        let jac = problem.jacobian().unwrap();
        let r0 = problem.residuals().unwrap();
        let u0 = problem.params();

        let h = 1e-7;
        for j in 0..3 {
            let mut u = u0;
            u[j] += h;
            problem.set_params(&u);
            let r1 = problem.residuals().unwrap();
            for i in 0..r0.len() {
                let fd = (r1[i] - r0[i]) / h;
                assert!(
                    (jac[(i, j)] - fd).abs() < 1e-4 * (1.0 + fd.abs()),
                    "row {i} col {j}: analytic {} vs fd {fd}",
                    jac[(i, j)]
                );
            }
        }
    }
}
