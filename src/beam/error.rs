//! Error types for building beam definitions.
//!
//! Errors are grouped by source: vocabulary validation, capability
//! checks on setters, value checks and configuration parsing. Writing a
//! finished definition reports [`crate::io::Error`] instead.

use thiserror::Error;

use super::setter::Setter;
use crate::model::types::{DistributionType, ParseDistributionTypeError, ParseParticleTypeError};

/// Errors that can occur while building a [`Beam`](crate::Beam).
///
/// A beam that returned an error from an update is left as it was before
/// the failing call.
#[derive(Debug, Error)]
pub enum Error {
    /// The particle species is not one the engine knows.
    #[error(transparent)]
    InvalidParticleType(#[from] ParseParticleTypeError),

    /// The distribution name is not one the engine knows.
    ///
    /// Also returned when a composite axis names an unknown type.
    #[error(transparent)]
    InvalidDistributionType(#[from] ParseDistributionTypeError),

    /// The setter is not activated for the beam's distribution type.
    #[error("'{setter}' cannot be set on a beam with the '{distribution}' distribution")]
    InvalidOperation {
        /// The rejected setter.
        setter: Setter,
        /// Current distribution type of the beam.
        distribution: DistributionType,
    },

    /// The value does not fit the setter.
    #[error("invalid value for '{key}': {detail}")]
    InvalidValue {
        /// Key the value was meant for.
        key: String,
        /// Description of the problem.
        detail: String,
    },

    /// A configuration names a parameter no setter writes.
    #[error("unknown beam parameter '{0}'")]
    UnknownParameter(String),

    /// Failed to parse a beam configuration TOML document.
    #[error("failed to parse beam configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl Error {
    /// Creates an [`InvalidOperation`](Error::InvalidOperation) error.
    pub fn invalid_operation(setter: Setter, distribution: DistributionType) -> Self {
        Self::InvalidOperation {
            setter,
            distribution,
        }
    }

    /// Creates an [`InvalidValue`](Error::InvalidValue) error.
    pub fn invalid_value(key: impl Into<String>, details: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            detail: details.into(),
        }
    }
}
