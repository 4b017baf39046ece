//! Declarative beam descriptions in TOML.
//!
//! A [`BeamConfig`] names the particle, energy and distribution, the
//! composite axes if any, and a table of parameters keyed by the names the
//! engine reads:
//!
//! ```toml
//! particle = "proton"
//! energy = { value = 6.5, unit = "TeV" }
//! distribution = "composite"
//!
//! [composite]
//! x = "gauss"
//! y = "gausstwiss"
//!
//! [parameters]
//! sigmaX = 2.0
//! betx = { value = 10.0, unit = "m" }
//! offsetSampleMean = true
//! ```

use std::collections::BTreeMap;

use log::debug;
use serde::Deserialize;

use super::error::Error;
use super::setter::{Setter, Value};
use crate::model::beam::Beam;
use crate::model::quantity::Quantity;

/// A parameter value as written in TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Flag(bool),
    Integer(i64),
    Number(f64),
    Text(String),
    /// A number with an explicit unit: `{ value = 1.0, unit = "mm" }`.
    Quantity(UnitValue),
}

/// Table form of a number with a unit. Fields other than `value` and
/// `unit` are rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitValue {
    pub value: f64,
    pub unit: String,
}

impl From<UnitValue> for Quantity {
    fn from(UnitValue { value, unit }: UnitValue) -> Self {
        Quantity::new(value, unit)
    }
}

impl From<ParameterValue> for Value {
    fn from(value: ParameterValue) -> Self {
        match value {
            ParameterValue::Flag(on) => Value::Flag(on),
            ParameterValue::Integer(i) => Value::Integer(i),
            ParameterValue::Number(x) => Value::Number(Quantity::unitless(x)),
            ParameterValue::Text(text) => Value::Text(text),
            ParameterValue::Quantity(quantity) => Value::Number(quantity.into()),
        }
    }
}

/// Sub-distribution of each axis of a `composite` beam.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompositeAxes {
    pub x: Option<String>,
    pub y: Option<String>,
    pub z: Option<String>,
}

/// Declarative description of a [`Beam`].
///
/// Missing top-level fields default to an `e-` beam at 1 GeV with the
/// `reference` distribution.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BeamConfig {
    #[serde(default = "default_particle")]
    pub particle: String,
    #[serde(default = "default_energy")]
    pub energy: ParameterValue,
    #[serde(default = "default_distribution")]
    pub distribution: String,
    #[serde(default)]
    pub composite: CompositeAxes,
    #[serde(default)]
    pub parameters: BTreeMap<String, ParameterValue>,
}

fn default_particle() -> String {
    "e-".to_string()
}
fn default_energy() -> ParameterValue {
    ParameterValue::Number(1.0)
}
fn default_distribution() -> String {
    "reference".to_string()
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            particle: default_particle(),
            energy: default_energy(),
            distribution: default_distribution(),
            composite: CompositeAxes::default(),
            parameters: BTreeMap::new(),
        }
    }
}

impl BeamConfig {
    pub fn from_toml_str(toml: &str) -> Result<Self, Error> {
        let config: BeamConfig = toml::from_str(toml)?;
        Ok(config)
    }

    /// Builds the beam: composite axes first, then parameters in key order.
    pub fn build(&self) -> Result<Beam, Error> {
        let energy = match self.energy.clone() {
            ParameterValue::Number(x) => Quantity::unitless(x),
            ParameterValue::Integer(i) => Quantity::unitless(i as f64),
            ParameterValue::Quantity(quantity) => quantity.into(),
            ParameterValue::Flag(_) | ParameterValue::Text(_) => {
                return Err(Error::invalid_value("energy", "expected a number"));
            }
        };

        let mut beam = Beam::new(&self.particle, energy, &self.distribution)?;

        let axes = [
            (Setter::XDistrType, &self.composite.x),
            (Setter::YDistrType, &self.composite.y),
            (Setter::ZDistrType, &self.composite.z),
        ];
        for (setter, name) in axes {
            if let Some(name) = name {
                beam.set(setter, name.as_str())?;
            }
        }

        for (key, value) in &self.parameters {
            beam.set_named(key, value.clone())?;
        }

        debug!(
            "built {} beam from configuration with {} entries",
            beam.distribution(),
            beam.len()
        );
        Ok(beam)
    }
}

impl Beam {
    /// Parses a [`BeamConfig`] and builds the beam it describes.
    pub fn from_toml_str(toml: &str) -> Result<Self, Error> {
        BeamConfig::from_toml_str(toml)?.build()
    }
}
