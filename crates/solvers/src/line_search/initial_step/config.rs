use thiserror::Error;

/// Configuration for the initial step estimator.
///
/// Unlike a line-search config, this one usually lives as long as the outer
/// optimizer and is reused for every iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    psi0: f64,
    psi1: f64,
    psi2: f64,
    psi3: f64,
    alpha_max: f64,
    alpha0: Option<f64>,
}

/// Errors that can occur when validating an initial step config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("psi0 must be finite and positive")]
    Psi0,

    #[error("psi1 must satisfy 0 < psi1 < 1")]
    Psi1,

    #[error("psi2 must be finite and greater than 1")]
    Psi2,

    #[error("psi3 must satisfy 0 < psi3 < 1")]
    Psi3,

    #[error("alpha_max must be positive")]
    AlphaMax,

    #[error("alpha0 must be finite and positive")]
    Alpha0,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            psi0: 0.01,
            psi1: 0.2,
            psi2: 2.0,
            psi3: 0.1,
            alpha_max: f64::INFINITY,
            alpha0: None,
        }
    }
}

impl Config {
    /// Sets the scale of the gradient-based first guess.
    ///
    /// # Errors
    ///
    /// Returns an error if `psi0` is non-finite or not positive.
    pub fn with_psi0(self, psi0: f64) -> Result<Self, ConfigError> {
        if !psi0.is_finite() || psi0 <= 0.0 {
            return Err(ConfigError::Psi0);
        }
        Ok(Self { psi0, ..self })
    }

    /// Sets the fraction of the previous step used as the test step.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < psi1 < 1`.
    pub fn with_psi1(self, psi1: f64) -> Result<Self, ConfigError> {
        if psi1.is_nan() || psi1 <= 0.0 || psi1 >= 1.0 {
            return Err(ConfigError::Psi1);
        }
        Ok(Self { psi1, ..self })
    }

    /// Sets the growth factor applied when the quadratic fit is unusable.
    ///
    /// # Errors
    ///
    /// Returns an error if `psi2` is non-finite or not greater than 1.
    pub fn with_psi2(self, psi2: f64) -> Result<Self, ConfigError> {
        if !psi2.is_finite() || psi2 <= 1.0 {
            return Err(ConfigError::Psi2);
        }
        Ok(Self { psi2, ..self })
    }

    /// Sets the factor that shrinks a test step evaluating non-finite.
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

    /// Sets the largest step the estimator may propose.
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

    /// Sets a fixed step to use in place of a missing previous step.
    ///
    /// # Errors
    ///
    /// Returns an error if `alpha0` is non-finite or not positive.
    pub fn with_alpha0(self, alpha0: f64) -> Result<Self, ConfigError> {
        if !alpha0.is_finite() || alpha0 <= 0.0 {
            return Err(ConfigError::Alpha0);
        }
        Ok(Self {
            alpha0: Some(alpha0),
            ..self
        })
    }

    #[must_use]
    pub fn psi0(&self) -> f64 {
        self.psi0
    }

    #[must_use]
    pub fn psi1(&self) -> f64 {
        self.psi1
    }

    #[must_use]
    pub fn psi2(&self) -> f64 {
        self.psi2
    }

    #[must_use]
    pub fn psi3(&self) -> f64 {
        self.psi3
    }

    #[must_use]
    pub fn alpha_max(&self) -> f64 {
        self.alpha_max
    }

    /// Returns the step used when no previous step is known, if configured.
    #[must_use]
    pub fn alpha0(&self) -> Option<f64> {
        self.alpha0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha0_is_unset_by_default() {
        assert_eq!(Config::default().alpha0(), None);
        assert_eq!(
            Config::default().with_alpha0(0.5).map(|c| c.alpha0()),
            Ok(Some(0.5))
        );
    }

    #[test]
    fn rejects_out_of_range_values() {
        let config = Config::default();

        assert_eq!(config.with_psi0(0.0), Err(ConfigError::Psi0));
        assert_eq!(config.with_psi1(1.0), Err(ConfigError::Psi1));
        assert_eq!(config.with_psi2(1.0), Err(ConfigError::Psi2));
        assert_eq!(config.with_psi3(f64::NAN), Err(ConfigError::Psi3));
        assert_eq!(config.with_alpha_max(-1.0), Err(ConfigError::AlphaMax));
        assert_eq!(config.with_alpha0(f64::INFINITY), Err(ConfigError::Alpha0));
    }
}
