//! Core data structures of a beam definition.
//!
//! - [`types`] – Particle species and distribution types the engine accepts.
//! - [`quantity`] – Numeric values with optional units, and how they render.
//! - [`beam`] – The beam record itself, with its distribution-gated setters.
//!
//! The record stores already-rendered text, so what a setter writes is
//! exactly what [`crate::io::gmad`] emits.

pub mod beam;
pub mod quantity;
pub mod types;
