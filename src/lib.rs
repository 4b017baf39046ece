//! A pure Rust library for writing beam definitions for the BDSIM
//! accelerator simulation engine.
//! It validates the particle species and distribution type, restricts the
//! parameters that can be set to those the chosen distribution reads, and
//! emits the `beam` statement of a GMAD input file together with optional
//! per-particle coordinate files.
//!
//! # Features
//!
//! - **Validated vocabularies** — [`ParticleType`] and [`DistributionType`]
//!   cover exactly the names the engine accepts
//! - **Distribution-gated setters** — a setter that the selected
//!   distribution does not read fails with [`BeamError::InvalidOperation`]
//!   instead of writing a parameter the engine would ignore
//! - **Units** — every numeric setter has a default unit that a
//!   [`Quantity`] can override
//! - **Composite beams** — independent x, y and z sub-distributions
//! - **Configuration** — build a beam from a TOML document with
//!   [`BeamConfig`]
//! - **User files** — tab-separated coordinate files, gzip-compressed when
//!   the name ends in `.gz`
//!
//! # Quick Start
//!
//! ```
//! use bdsim_beam::{Beam, BeamError, Quantity};
//!
//! let mut beam = Beam::new("proton", Quantity::new(6.5, "TeV"), "gausstwiss")?;
//! beam.set_beta_x(0.55)?
//!     .set_beta_y(0.55)?
//!     .set_alpha_x(0.0)?
//!     .set_emittance_nx(3.75)?
//!     .set_sigma_e(1.1e-4)?;
//!
//! assert_eq!(
//!     beam.to_string(),
//!     "beam,\talfx=0.0,\n\
//!      \tbetx=0.55*m,\n\
//!      \tbety=0.55*m,\n\
//!      \tdistrType=\"gausstwiss\",\n\
//!      \temitnx=3.75*mm*mrad,\n\
//!      \tenergy=6.5*TeV,\n\
//!      \tparticle=\"proton\",\n\
//!      \tsigmaE=0.00011;"
//! );
//!
//! // A ring-distribution parameter is rejected on a Twiss beam.
//! assert!(matches!(beam.set_r_min(1.0), Err(BeamError::InvalidOperation { .. })));
//! # Ok::<(), BeamError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`beam`] — Setters, capability sets and TOML configuration
//! - [`io`] — Writers for the beam statement and coordinate files
//!
//! # Data Types
//!
//! - [`Beam`] — The beam record
//! - [`ParticleType`] — Particle species
//! - [`DistributionType`] — Phase-space distribution
//! - [`Quantity`] — Number with optional unit
//! - [`Setter`] — Identifier of one parameter setter
//! - [`Capabilities`] — Setters active on a beam
//! - [`BeamConfig`] — Declarative beam description

mod model;

pub mod beam;
pub mod io;

pub use model::beam::Beam;
pub use model::quantity::Quantity;
pub use model::types::{
    DistributionType, ParseDistributionTypeError, ParseParticleTypeError, ParticleType,
};

pub use beam::{BeamConfig, Capabilities, CompositeAxes, ParameterValue, Setter, Value, ValueKind};

pub use beam::Error as BeamError;
pub use io::Error as IoError;
pub use io::userfile::write_file as write_user_file;
