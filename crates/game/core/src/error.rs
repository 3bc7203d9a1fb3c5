//! Common error infrastructure for game-core.
//!
//! The simulation itself has almost nothing that can fail: degenerate geometry
//! and rejected actions (attacking on cooldown, hitting a corpse) are ordinary
//! `bool`/`Option` results. What remains are construction-time configuration
//! problems, which are reported through [`ConfigError`].

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Temporary conditions that may succeed with different input
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: The simulation cannot be constructed or continued
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// Use `#[derive(thiserror::Error)]` for the Display/Error impl and classify
/// severity by recoverability, not impact.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Invalid configuration reference detected while constructing entities.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("class '{name}' not found in class table")]
    UnknownClass { name: String },

    #[error("class table is empty")]
    EmptyClassTable,

    #[error("class '{class}' has invalid {stat}: value must be finite and non-negative")]
    InvalidStat { class: String, stat: &'static str },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownClass { .. } | Self::EmptyClassTable => ErrorSeverity::Fatal,
            Self::InvalidStat { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownClass { .. } => "CONFIG_UNKNOWN_CLASS",
            Self::EmptyClassTable => "CONFIG_EMPTY_CLASS_TABLE",
            Self::InvalidStat { .. } => "CONFIG_INVALID_STAT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_class_is_fatal() {
        let err = ConfigError::UnknownClass {
            name: "bard".into(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert!(err.severity().is_internal());
        assert_eq!(err.to_string(), "class 'bard' not found in class table");
    }
}
