//! Centralized configuration values shared across the py2rust pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Maximum nesting depth accepted by the literal front end.
///
/// Lowering a literal expression recurses once per container level; inputs
/// nested deeper than this are rejected instead of risking stack exhaustion.
///
/// # Examples
/// ```
/// use config::constants::MAX_LITERAL_DEPTH;
/// assert!(MAX_LITERAL_DEPTH >= 16);
/// ```
pub const MAX_LITERAL_DEPTH: usize = 64;

/// Number of decimal digits used when demo programs print floating-point
/// results.
///
/// # Examples
/// ```
/// use config::constants::FLOAT_DISPLAY_PRECISION;
/// assert!(FLOAT_DISPLAY_PRECISION >= 1);
/// ```
pub const FLOAT_DISPLAY_PRECISION: usize = 5;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.max_literal_depth > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Nesting depth cap enforced by the literal front end.
    pub max_literal_depth: usize,
    /// Decimal digits for printed floating-point values.
    pub float_display_precision: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// limits.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(32, 5).expect("valid config");
    /// assert_eq!(cfg.max_literal_depth, 32);
    /// ```
    pub fn new(
        max_literal_depth: usize,
        float_display_precision: usize,
    ) -> Result<Self, ConfigError> {
        if max_literal_depth == 0 {
            return Err(ConfigError::InvalidDepth(max_literal_depth));
        }
        if float_display_precision == 0 {
            return Err(ConfigError::InvalidPrecision(float_display_precision));
        }
        Ok(Self {
            max_literal_depth,
            float_display_precision,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            max_literal_depth: MAX_LITERAL_DEPTH,
            float_display_precision: FLOAT_DISPLAY_PRECISION,
        }
    }
}

/// Validation failures raised by [`GlobalConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Literal depth cap must be non-zero.
    InvalidDepth(usize),
    /// Display precision must be non-zero.
    InvalidPrecision(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDepth(v) => {
                write!(f, "invalid literal depth limit: {}", v)
            }
            ConfigError::InvalidPrecision(v) => {
                write!(f, "invalid display precision: {}", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
