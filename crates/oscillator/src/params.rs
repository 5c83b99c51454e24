/// The sinusoidal forcing `β·sin(ω·t)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Forcing {
    /// Amplitude `β`.
    pub beta: f64,

    /// Angular frequency `ω`.
    pub omega: f64,
}

impl Forcing {
    #[must_use]
    pub fn new(beta: f64, omega: f64) -> Self {
        Self { beta, omega }
    }

    /// The zero forcing, `β = 0`.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Evaluates `β·sin(ω·t)`.
    #[must_use]
    pub fn at(&self, t: f64) -> f64 {
        self.beta * (self.omega * t).sin()
    }
}

impl contiv_core::Forcing for Forcing {
    fn force(&self, t: f64) -> f64 {
        self.at(t)
    }
}

/// Returns the forcing `t ↦ β·sin(ω·t)`.
#[must_use]
pub fn forcing(beta: f64, omega: f64) -> Forcing {
    Forcing::new(beta, omega)
}

/// A unit-frequency oscillator with linear damping and sinusoidal forcing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Oscillator {
    /// Damping factor `a`.
    pub damping: f64,

    pub forcing: Forcing,
}

impl Oscillator {
    /// An unforced oscillator with damping `a`.
    #[must_use]
    pub fn damped(damping: f64) -> Self {
        Self {
            damping,
            forcing: Forcing::none(),
        }
    }

    #[must_use]
    pub fn forced(damping: f64, forcing: Forcing) -> Self {
        Self { damping, forcing }
    }

    /// The acceleration `−x − a·p + β·sin(ω·t)`.
    #[must_use]
    pub fn acceleration(&self, x: f64, p: f64, t: f64) -> f64 {
        -x - self.damping * p + self.forcing.at(t)
    }
}
