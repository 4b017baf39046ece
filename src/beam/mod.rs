//! Distribution-gated parameter setters and beam configuration.
//!
//! Each [`DistributionType`](crate::DistributionType) activates a fixed set
//! of [`Setter`]s. The active set of a beam lives in [`Capabilities`] and is
//! checked before every write.
//!
//! # Overview
//!
//! - [`Setter`] — Identifier, output key and [`ValueKind`] of each setter
//! - [`Capabilities`] — Active setters, computed from the distribution type
//! - [`BeamConfig`] — TOML description of a complete beam
//! - [`Error`] — Failures while building a beam

mod capability;
mod config;
mod error;
pub(crate) mod setter;

pub use capability::{Capabilities, setters_for};
pub use config::{BeamConfig, CompositeAxes, ParameterValue, UnitValue};
pub use error::Error;
pub use setter::{Setter, Value, ValueKind};
