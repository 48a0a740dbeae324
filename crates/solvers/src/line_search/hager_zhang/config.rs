use thiserror::Error;

/// Configuration for the Hager–Zhang line search.
///
/// Start from [`Config::default`] and adjust with the `with_*` builders, each
/// of which validates its argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    delta: f64,
    sigma: f64,
    alpha_max: f64,
    rho: f64,
    epsilon: f64,
    gamma: f64,
    max_iters: usize,
    psi3: f64,
}

/// Errors that can occur when validating a Hager–Zhang config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("delta must satisfy 0 < delta < 0.5")]
    Delta,

    #[error("sigma must satisfy delta <= sigma < 1")]
    Sigma,

    #[error("alpha_max must be positive")]
    AlphaMax,

    #[error("rho must be finite and greater than 1")]
    Rho,

    #[error("epsilon must be finite and non-negative")]
    Epsilon,

    #[error("gamma must satisfy 0 < gamma < 1")]
    Gamma,

    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("psi3 must satisfy 0 < psi3 < 1")]
    Psi3,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delta: 0.1,
            sigma: 0.9,
            alpha_max: f64::INFINITY,
            rho: 5.0,
            epsilon: 1e-6,
            gamma: 0.66,
            max_iters: 50,
            psi3: 0.1,
        }
    }
}

impl Config {
    /// Sets the Wolfe parameters.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < delta < 0.5` and `delta <= sigma < 1`.
    pub fn with_wolfe(self, delta: f64, sigma: f64) -> Result<Self, ConfigError> {
        if delta.is_nan() || delta <= 0.0 || delta >= 0.5 {
            return Err(ConfigError::Delta);
        }
        if sigma.is_nan() || sigma < delta || sigma >= 1.0 {
            return Err(ConfigError::Sigma);
        }
        Ok(Self {
            delta,
            sigma,
            ..self
        })
    }

    /// Sets the largest step the search may return.
    ///
    /// # Errors
    ///
    /// Returns an error if `alpha_max` is `NaN` or not positive.
    pub fn with_alpha_max(self, alpha_max: f64) -> Result<Self, ConfigError> {
        if alpha_max.is_nan() || alpha_max <= 0.0 {
            return Err(ConfigError::AlphaMax);
        }
        Ok(Self { alpha_max, ..self })
    }

    /// Sets the expansion factor used while bracketing.
    ///
    /// # Errors
    ///
    /// Returns an error if `rho` is non-finite or not greater than 1.
    pub fn with_rho(self, rho: f64) -> Result<Self, ConfigError> {
        if !rho.is_finite() || rho <= 1.0 {
            return Err(ConfigError::Rho);
        }
        Ok(Self { rho, ..self })
    }

    /// Sets the relative slack on `phi(0)` used by the approximate Wolfe test.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is non-finite or negative.
    pub fn with_epsilon(self, epsilon: f64) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ConfigError::Epsilon);
        }
        Ok(Self { epsilon, ..self })
    }

    /// Sets the shrink ratio below which a secant step counts as progress.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < gamma < 1`.
    pub fn with_gamma(self, gamma: f64) -> Result<Self, ConfigError> {
        if gamma.is_nan() || gamma <= 0.0 || gamma >= 1.0 {
            return Err(ConfigError::Gamma);
        }
        Ok(Self { gamma, ..self })
    }

    /// Sets the iteration limit shared by bracketing and refinement.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero.
    pub fn with_max_iters(self, max_iters: usize) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(Self { max_iters, ..self })
    }

    /// Sets the factor that shrinks a first trial step evaluating non-finite.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < psi3 < 1`.
    pub fn with_psi3(self, psi3: f64) -> Result<Self, ConfigError> {
        if psi3.is_nan() || psi3 <= 0.0 || psi3 >= 1.0 {
            return Err(ConfigError::Psi3);
        }
        Ok(Self { psi3, ..self })
    }

    /// Returns the sufficient-decrease parameter.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Returns the curvature parameter.
    #[must_use]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Returns the largest step the search may return.
    #[must_use]
    pub fn alpha_max(&self) -> f64 {
        self.alpha_max
    }

    /// Returns the bracketing expansion factor.
    #[must_use]
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Returns the approximate Wolfe slack.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the required shrink ratio per secant step.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns the iteration limit.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the non-finite shrink factor.
    #[must_use]
    pub fn psi3(&self) -> f64 {
        self.psi3
    }
}
