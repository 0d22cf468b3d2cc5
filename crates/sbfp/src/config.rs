//! Encoder configuration

use std::str::FromStr;

use crate::error::SbfpError;

/// Environment variable read by [`EncodeConfig::from_env`]
pub const NON_FINITE_ENV: &str = "SBFP_NON_FINITE";

/// What the encoder does with host infinities and NaNs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NonFinitePolicy {
    /// Map ±∞ to the signed infinity encodings and NaN to [`crate::Sbfp::NAN`]
    #[default]
    Propagate,
    /// Fail with [`SbfpError::NonFinite`]
    Reject,
}

impl FromStr for NonFinitePolicy {
    type Err = SbfpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "propagate" => Ok(Self::Propagate),
            "reject" => Ok(Self::Reject),
            _ => Err(SbfpError::InvalidPolicy(s.to_string())),
        }
    }
}

/// Encoder configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeConfig {
    /// Handling of non-finite host input
    pub non_finite: NonFinitePolicy,
}

impl EncodeConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(policy) = std::env::var(NON_FINITE_ENV) {
            match policy.parse() {
                Ok(p) => config.non_finite = p,
                Err(e) => tracing::warn!("Ignoring {}: {}", NON_FINITE_ENV, e),
            }
        }

        config
    }

    pub fn with_non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.non_finite = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_propagates() {
        assert_eq!(EncodeConfig::default().non_finite, NonFinitePolicy::Propagate);
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!("propagate".parse::<NonFinitePolicy>(), Ok(NonFinitePolicy::Propagate));
        assert_eq!(" Reject ".parse::<NonFinitePolicy>(), Ok(NonFinitePolicy::Reject));
        assert!(matches!(
            "saturate".parse::<NonFinitePolicy>(),
            Err(SbfpError::InvalidPolicy(_))
        ));
    }

    #[test]
    fn test_from_env() {
        // Single test so nothing else races on the variable
        std::env::set_var(NON_FINITE_ENV, "REJECT");
        assert_eq!(EncodeConfig::from_env().non_finite, NonFinitePolicy::Reject);

        std::env::set_var(NON_FINITE_ENV, "bogus");
        assert_eq!(EncodeConfig::from_env().non_finite, NonFinitePolicy::Propagate);

        std::env::remove_var(NON_FINITE_ENV);
        assert_eq!(EncodeConfig::from_env(), EncodeConfig::default());
    }

    #[test]
    fn test_with_non_finite() {
        let config = EncodeConfig::default().with_non_finite(NonFinitePolicy::Reject);
        assert_eq!(config.non_finite, NonFinitePolicy::Reject);
    }
}
