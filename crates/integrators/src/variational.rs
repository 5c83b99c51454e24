use std::convert::Infallible;

use contiv_core::{
    Forcing, Integrator, LinearRestoring, NoForcing, Restoring, RestoringFn, State, TimeSpan,
    Trajectory,
};

/// Second-order forced variational integrator for linear damping.
///
/// The damping is treated as an external force in the discrete
/// Lagrange–d'Alembert principle rather than through a contact structure
/// (Martín de Diego & Sato Martín de Almagro, Nonlinearity 31, 2018):
///
/// ```text
/// xnew = (x + h·p − h²/2·V'(x)) / (1 + h·a/2)
/// pnew = p − h/2·(V'(x) + V'(xnew)) − a·(xnew − x)/2 + h/2·(f(tᵢ) + f(tᵢ₊₁))
/// ```
#[must_use]
pub fn variational_noncontact(
    initial: State,
    span: TimeSpan,
    h: f64,
    damping: f64,
    restoring: impl Restoring,
    forcing: impl Forcing,
) -> Trajectory {
    let a = damping;
    Trajectory::unfold(initial, span.steps(h), |i, State { p, x }| {
        let v0 = restoring.restoring(x);
        let x_new = (x + h * p - h * h / 2.0 * v0) / (1.0 + h * a / 2.0);

        let forces = forcing.force(span.time_at(i, h)) + forcing.force(span.time_at(i + 1, h));
        let p_new = p - h / 2.0 * (v0 + restoring.restoring(x_new)) - a * (x_new - x) / 2.0
            + h / 2.0 * forces;
        State::new(p_new, x_new)
    })
}

/// [`variational_noncontact`] as an [`Integrator`].
#[derive(Debug, Clone, Copy)]
pub struct Variational<R = LinearRestoring, F = NoForcing> {
    pub damping: f64,
    pub restoring: R,
    pub forcing: F,
}

impl Variational {
    /// Linear restoring term and no forcing.
    #[must_use]
    pub fn new(damping: f64) -> Self {
        Self {
            damping,
            restoring: LinearRestoring,
            forcing: NoForcing,
        }
    }
}

impl<R: Restoring, F: Forcing> Integrator for Variational<R, F> {
    type Error = Infallible;

    fn integrate(&self, initial: State, span: TimeSpan, h: f64) -> Result<Trajectory, Infallible> {
        let restoring = RestoringFn(|x: f64| self.restoring.restoring(x));
        let forcing = |t: f64| self.forcing.force(t);
        Ok(variational_noncontact(
            initial,
            span,
            h,
            self.damping,
            restoring,
            forcing,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn step_by_hand() {
        let (h, a, beta) = (0.1, 0.4, 2.0);
        let scheme = Variational {
            damping: a,
            restoring: LinearRestoring,
            forcing: move |_t: f64| beta,
        };
        let next = scheme
            .integrate(State::new(1.0, 1.0), TimeSpan::new(0.0, 0.25), h)
            .expect("infallible")[1];

        let x_new = (1.0 + h - h * h / 2.0) / (1.0 + h * a / 2.0);
        let p_new = 1.0 - h / 2.0 * (1.0 + x_new) - a * (x_new - 1.0) / 2.0 + h * beta;
        assert_relative_eq!(next.x, x_new, epsilon = 1e-15);
        assert_relative_eq!(next.p, p_new, epsilon = 1e-15);
    }

    #[test]
    fn damps_free_oscillation() {
        let trajectory = Variational::new(0.3)
            .integrate(State::new(0.0, 1.0), TimeSpan::new(0.0, 50.0), 0.05)
            .expect("infallible");

        let last = trajectory.last().expect("non-empty");
        assert!(last.energy() < 1e-3);
    }
}
