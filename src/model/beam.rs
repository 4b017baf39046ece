use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use log::{debug, trace};

use super::quantity::Quantity;
use super::types::{DistributionType, ParticleType};
use crate::beam::setter::parse_sigma_key;
use crate::beam::{Capabilities, Error, Setter, Value, ValueKind};

const PARTICLE_KEY: &str = "particle";
const ENERGY_KEY: &str = "energy";
const DISTRIBUTION_KEY: &str = "distrType";

/// Generates setters that take a numeric [`Quantity`].
macro_rules! quantity_setters {
    ($($(#[$meta:meta])* $name:ident => $setter:ident;)*) => {
        $(
            $(#[$meta])*
            pub fn $name(&mut self, value: impl Into<Quantity>) -> Result<&mut Self, Error> {
                self.set(Setter::$setter, Value::Number(value.into()))
            }
        )*
    };
}

/// Generates setters that take a string written in double quotes.
macro_rules! text_setters {
    ($($(#[$meta:meta])* $name:ident => $setter:ident;)*) => {
        $(
            $(#[$meta])*
            pub fn $name(&mut self, value: impl Into<String>) -> Result<&mut Self, Error> {
                self.set(Setter::$setter, Value::Text(value.into()))
            }
        )*
    };
}

/// A beam definition for the simulation engine.
///
/// The record always holds `particle`, `energy` and `distrType`. Further
/// parameters are written through setters; each setter is either always
/// available or activated by the distribution type (see
/// [`Capabilities`]). Calling a setter that is not active fails with
/// [`Error::InvalidOperation`] and leaves the beam unchanged.
///
/// ```
/// use bdsim_beam::{Beam, BeamError};
///
/// let mut beam = Beam::new("proton", 6500.0, "gauss")?;
/// beam.set_sigma_x(2.0)?.set_sigma_y(1.5)?;
///
/// assert_eq!(beam.get("sigmaX"), Some("2.0*um"));
/// assert!(matches!(beam.set_r_min(1.0), Err(BeamError::InvalidOperation { .. })));
/// # Ok::<(), BeamError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Beam {
    particle: ParticleType,
    distribution: DistributionType,
    capabilities: Capabilities,
    parameters: HashMap<String, String>,
}

impl Default for Beam {
    /// An `e-` beam at `1.0*GeV` with the `reference` distribution.
    fn default() -> Self {
        let mut beam = Self::empty(ParticleType::default(), DistributionType::default());
        beam.insert(ENERGY_KEY, Quantity::from(1.0).render(Some("GeV")));
        beam
    }
}

impl Beam {
    /// Creates a beam from engine names.
    ///
    /// `energy` uses GeV unless the quantity carries its own unit.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParticleType`] or [`Error::InvalidDistributionType`]
    /// when a name is outside the fixed vocabulary, and
    /// [`Error::InvalidValue`] for a non-finite energy or a malformed unit.
    pub fn new(
        particle: &str,
        energy: impl Into<Quantity>,
        distribution: &str,
    ) -> Result<Self, Error> {
        let particle: ParticleType = particle.parse()?;
        let distribution: DistributionType = distribution.parse()?;
        Self::with_types(particle, energy, distribution)
    }

    /// Creates a beam from already validated types.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidValue`] for a non-finite energy or a malformed unit.
    pub fn with_types(
        particle: ParticleType,
        energy: impl Into<Quantity>,
        distribution: DistributionType,
    ) -> Result<Self, Error> {
        let mut beam = Self::empty(particle, distribution);
        beam.set_energy(energy)?;
        Ok(beam)
    }

    fn empty(particle: ParticleType, distribution: DistributionType) -> Self {
        let mut beam = Self {
            particle,
            distribution,
            capabilities: Capabilities::for_distribution(distribution),
            parameters: HashMap::new(),
        };
        beam.insert(PARTICLE_KEY, quoted(particle.name()));
        beam.insert(DISTRIBUTION_KEY, quoted(distribution.name()));
        debug!(
            "created {} beam with '{}' distribution ({} setters active)",
            particle,
            distribution,
            beam.capabilities.len()
        );
        beam
    }

    pub fn particle(&self) -> ParticleType {
        self.particle
    }

    pub fn distribution(&self) -> DistributionType {
        self.distribution
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    #[inline]
    pub fn is_available(&self, setter: Setter) -> bool {
        self.capabilities.contains(setter)
    }

    /// The formatted value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.parameters.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// All entries sorted by key in byte order, the order the engine reads
    /// them in.
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .parameters
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Writes the beam definition to `path`, replacing any existing file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), crate::io::Error> {
        crate::io::gmad::write_file(path, self)
    }

    pub fn set_particle_type(&mut self, particle: &str) -> Result<&mut Self, Error> {
        let particle: ParticleType = particle.parse()?;
        Ok(self.set_particle(particle))
    }

    pub fn set_particle(&mut self, particle: ParticleType) -> &mut Self {
        self.particle = particle;
        self.insert(PARTICLE_KEY, quoted(particle.name()));
        self
    }

    /// Sets the total energy; GeV unless the quantity carries a unit.
    pub fn set_energy(&mut self, energy: impl Into<Quantity>) -> Result<&mut Self, Error> {
        let energy: Quantity = energy.into();
        check_quantity(ENERGY_KEY, &energy)?;
        self.insert(ENERGY_KEY, energy.render(Some("GeV")));
        Ok(self)
    }

    pub fn set_distribution_type(&mut self, distribution: &str) -> Result<&mut Self, Error> {
        let distribution: DistributionType = distribution.parse()?;
        Ok(self.set_distribution(distribution))
    }

    /// Switches the distribution type.
    ///
    /// The active setters are recomputed from the new type alone. Values
    /// already written stay in the record.
    pub fn set_distribution(&mut self, distribution: DistributionType) -> &mut Self {
        self.distribution = distribution;
        self.capabilities = Capabilities::for_distribution(distribution);
        self.insert(DISTRIBUTION_KEY, quoted(distribution.name()));
        debug!(
            "switched to '{}' distribution ({} setters active)",
            distribution,
            self.capabilities.len()
        );
        self
    }

    /// Applies `setter` with `value`.
    ///
    /// Every typed setter routes through here.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidOperation`] if the setter is not active.
    /// - [`Error::InvalidValue`] if the value does not fit the setter's
    ///   [`ValueKind`], is not finite, carries a malformed unit, or is text
    ///   containing a double quote.
    /// - [`Error::InvalidDistributionType`] if a composite axis names an
    ///   unknown distribution.
    pub fn set(&mut self, setter: Setter, value: impl Into<Value>) -> Result<&mut Self, Error> {
        if !self.capabilities.contains(setter) {
            return Err(Error::invalid_operation(setter, self.distribution));
        }

        let key = setter.key();
        let value: Value = value.into();
        let rendered = match (setter.kind(), value) {
            (ValueKind::Number(unit), Value::Number(quantity)) => {
                check_quantity(key, &quantity)?;
                quantity.render(unit)
            }
            (ValueKind::Number(unit), Value::Integer(i)) => Quantity::from(i as f64).render(unit),
            (ValueKind::Text, Value::Text(text)) => {
                check_quotable(key, &text)?;
                quoted(&text)
            }
            (ValueKind::Distribution, Value::Text(name)) => {
                let sub: DistributionType = name.parse()?;
                let added = self.capabilities.activate(sub);
                debug!("{key} = '{sub}' activated {added} additional setters");
                quoted(sub.name())
            }
            (ValueKind::Integer, Value::Integer(i)) => i.to_string(),
            (ValueKind::Flag, Value::Flag(on)) => String::from(if on { "1" } else { "0" }),
            (ValueKind::Matrix, _) => {
                return Err(Error::invalid_value(
                    key,
                    "sigma matrix elements are set with set_sigma_nm",
                ));
            }
            (kind, value) => {
                return Err(Error::invalid_value(
                    key,
                    format!("expected {}, got {}", expected(kind), describe(&value)),
                ));
            }
        };

        self.insert(key, rendered);
        Ok(self)
    }

    /// Applies the setter that writes `key`.
    ///
    /// Keys are the names written to the output (`"sigmaX"`, `"betx"`,
    /// `"sigma16"`). When more than one setter writes the key, the one
    /// active on this beam is used.
    pub fn set_named(&mut self, key: &str, value: impl Into<Value>) -> Result<&mut Self, Error> {
        let value: Value = value.into();

        if let Some((n, m)) = parse_sigma_key(key) {
            return match value {
                Value::Number(quantity) => self.set_sigma_nm(n, m, quantity),
                Value::Integer(i) => self.set_sigma_nm(n, m, i as f64),
                other => Err(Error::invalid_value(
                    key,
                    format!("expected a number, got {}", describe(&other)),
                )),
            };
        }

        let candidates: Vec<Setter> = Setter::for_key(key).collect();
        let setter = candidates
            .iter()
            .copied()
            .find(|s| self.capabilities.contains(*s))
            .or_else(|| candidates.first().copied())
            .ok_or_else(|| Error::UnknownParameter(key.to_string()))?;

        self.set(setter, value)
    }

    /// Sets element `(n, m)` of the beam sigma matrix, written as
    /// `sigma{n}{m}`. Only the upper triangle `1 <= n <= m <= 6` exists.
    pub fn set_sigma_nm(
        &mut self,
        n: u8,
        m: u8,
        value: impl Into<Quantity>,
    ) -> Result<&mut Self, Error> {
        if !self.capabilities.contains(Setter::SigmaMatrix) {
            return Err(Error::invalid_operation(
                Setter::SigmaMatrix,
                self.distribution,
            ));
        }

        let key = format!("sigma{n}{m}");
        if !(1..=6).contains(&n) || !(n..=6).contains(&m) {
            return Err(Error::invalid_value(
                key,
                "indices must satisfy 1 <= n <= m <= 6",
            ));
        }

        let value: Quantity = value.into();
        check_quantity(&key, &value)?;
        let rendered = value.render(None);
        self.insert(key, rendered);
        Ok(self)
    }

    pub fn set_distr_file_loop(&mut self, count: i64) -> Result<&mut Self, Error> {
        self.set(Setter::DistrFileLoop, Value::Integer(count))
    }

    pub fn set_offset_sample_mean(&mut self, on: bool) -> Result<&mut Self, Error> {
        self.set(Setter::OffsetSampleMean, Value::Flag(on))
    }

    pub fn set_x_distr_type(&mut self, name: &str) -> Result<&mut Self, Error> {
        self.set(Setter::XDistrType, name)
    }

    pub fn set_y_distr_type(&mut self, name: &str) -> Result<&mut Self, Error> {
        self.set(Setter::YDistrType, name)
    }

    pub fn set_z_distr_type(&mut self, name: &str) -> Result<&mut Self, Error> {
        self.set(Setter::ZDistrType, name)
    }

    quantity_setters! {
        /// Horizontal offset of the reference particle, default unit `m`.
        set_x0 => X0;
        set_y0 => Y0;
        set_z0 => Z0;
        /// Horizontal divergence of the reference particle.
        set_xp0 => Xp0;
        set_yp0 => Yp0;
        set_zp0 => Zp0;
        /// Curvilinear starting position, default unit `m`.
        set_s0 => S0;
        /// Energy of the reference particle when it differs from `energy`.
        set_e0 => E0;
        set_t0 => T0;

        set_sigma_x => SigmaX;
        set_sigma_y => SigmaY;
        /// Fractional energy spread.
        set_sigma_e => SigmaE;
        set_sigma_xp => SigmaXp;
        set_sigma_yp => SigmaYp;
        set_sigma_t => SigmaT;

        set_beta_x => BetaX;
        set_beta_y => BetaY;
        set_alpha_x => AlphaX;
        set_alpha_y => AlphaY;
        /// Geometric emittance, default unit `um`.
        set_emittance_x => EmittanceX;
        set_emittance_y => EmittanceY;
        /// Normalised emittance, default unit `mm*mrad`.
        set_emittance_nx => EmittanceNX;
        set_emittance_ny => EmittanceNY;
        set_disp_x => DispX;
        set_disp_y => DispY;
        set_disp_xp => DispXp;
        set_disp_yp => DispYp;

        set_envelope_r => EnvelopeR;
        set_envelope_rp => EnvelopeRp;
        set_envelope_t => EnvelopeT;
        set_envelope_e => EnvelopeE;
        set_envelope_x => EnvelopeX;
        set_envelope_y => EnvelopeY;
        set_envelope_xp => EnvelopeXp;
        set_envelope_yp => EnvelopeYp;

        set_r_min => RMin;
        set_r_max => RMax;

        set_shell_x => ShellX;
        set_shell_y => ShellY;
        set_shell_xp => ShellXp;
        set_shell_yp => ShellYp;

        set_halo_n_sigma_x_inner => HaloNSigmaXInner;
        set_halo_n_sigma_x_outer => HaloNSigmaXOuter;
        set_halo_n_sigma_y_inner => HaloNSigmaYInner;
        set_halo_n_sigma_y_outer => HaloNSigmaYOuter;
        set_halo_ps_weight_parameter => HaloPsWeightParameter;
        set_halo_x_cut_inner => HaloXCutInner;
        set_halo_y_cut_inner => HaloYCutInner;
    }

    text_setters! {
        /// Name of the phase-space weighting function of the halo.
        set_halo_ps_weight_function => HaloPsWeightFunction;
        /// Input file of a `ptc` distribution, written to `distrFile`.
        set_distrib_file_name => DistribFileName;
        /// Coordinate file of a `userfile` distribution.
        set_distr_file => DistrFile;
        /// Column layout of the coordinate file, e.g. `"x[mm]:xp[mrad]:E[GeV]"`.
        set_distr_file_format => DistrFileFormat;
    }

    fn insert(&mut self, key: impl Into<String>, value: String) {
        let key = key.into();
        trace!("{key} = {value}");
        self.parameters.insert(key, value);
    }
}

impl fmt::Display for Beam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::io::gmad::format(self))
    }
}

fn quoted(text: &str) -> String {
    format!("\"{text}\"")
}

fn check_quantity(key: &str, quantity: &Quantity) -> Result<(), Error> {
    check_finite(key, quantity.value)?;
    match quantity.unit.as_deref() {
        Some(unit) => check_unit(key, unit),
        None => Ok(()),
    }
}

fn check_finite(key: &str, value: f64) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid_value(
            key,
            format!("{value} is not a finite number"),
        ))
    }
}

/// Units are products and quotients of unit names with optional powers,
/// e.g. `mm*mrad` or `m^-1`.
fn check_unit(key: &str, unit: &str) -> Result<(), Error> {
    if !unit.is_empty() && unit.chars().all(is_unit_char) {
        Ok(())
    } else {
        Err(Error::invalid_value(
            key,
            format!("'{unit}' is not a valid unit"),
        ))
    }
}

fn is_unit_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '*' | '/' | '^' | '.' | '-')
}

fn check_quotable(key: &str, text: &str) -> Result<(), Error> {
    if text.contains('"') {
        Err(Error::invalid_value(key, "text cannot contain '\"'"))
    } else {
        Ok(())
    }
}

fn expected(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Number(_) | ValueKind::Matrix => "a number",
        ValueKind::Text => "text",
        ValueKind::Distribution => "a distribution type name",
        ValueKind::Integer => "an integer",
        ValueKind::Flag => "a boolean",
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Number(_) => "a number",
        Value::Text(_) => "text",
        Value::Integer(_) => "an integer",
        Value::Flag(_) => "a boolean",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gauss_beam() -> Beam {
        Beam::new("e-", 1.0, "gauss").expect("valid beam")
    }

    #[test]
    fn new_stores_mandatory_entries() {
        let beam = Beam::new("proton", 6500.0, "reference").unwrap();
        assert_eq!(beam.get("particle"), Some("\"proton\""));
        assert_eq!(beam.get("energy"), Some("6500.0*GeV"));
        assert_eq!(beam.get("distrType"), Some("\"reference\""));
        assert_eq!(beam.len(), 3);
        assert_eq!(beam.particle(), ParticleType::Proton);
        assert_eq!(beam.distribution(), DistributionType::Reference);
    }

    #[test]
    fn new_rejects_unknown_names() {
        let err = Beam::new("electron", 1.0, "gauss").unwrap_err();
        assert!(matches!(err, Error::InvalidParticleType(_)));

        let err = Beam::new("e-", 1.0, "gaussian").unwrap_err();
        assert!(matches!(err, Error::InvalidDistributionType(_)));
        assert_eq!(
            err.to_string(),
            "invalid or unsupported distribution type: 'gaussian'"
        );
    }

    #[test]
    fn energy_unit_can_be_overridden() {
        let beam = Beam::new("e+", Quantity::new(250.0, "MeV"), "reference").unwrap();
        assert_eq!(beam.get("energy"), Some("250.0*MeV"));
    }

    #[test]
    fn units_outside_the_unit_syntax_are_rejected() {
        let err = Beam::new(
            "e-",
            Quantity::new(1.0, "GeV,\n\tparticle=\"e+\""),
            "reference",
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref key, .. } if key == "energy"));

        let mut beam = Beam::default();
        let before = beam.clone();
        for unit in ["m;", "", "m m", "m,"] {
            let err = beam.set_x0(Quantity::new(1.0, unit)).unwrap_err();
            assert!(matches!(err, Error::InvalidValue { ref key, .. } if key == "X0"));
        }
        assert!(beam.set_energy(Quantity::new(2.0, "Ge\"V")).is_err());
        assert_eq!(beam, before);

        let mut beam = Beam::new("e-", 1.0, "gaussmatrix").unwrap();
        assert!(beam.set_sigma_nm(1, 2, Quantity::new(1.0, "m;")).is_err());
        assert!(!beam.contains_key("sigma12"));
    }

    #[test]
    fn compound_units_are_accepted() {
        let mut beam = Beam::new("e-", 1.0, "gausstwiss").unwrap();
        beam.set_emittance_nx(Quantity::new(2.0, "um*mrad"))
            .unwrap()
            .set_disp_x(Quantity::new(0.1, "m/GeV"))
            .unwrap()
            .set_beta_y(Quantity::new(1.0, "m^-1"))
            .unwrap();
        assert_eq!(beam.get("emitnx"), Some("2.0*um*mrad"));
        assert_eq!(beam.get("dispx"), Some("0.1*m/GeV"));
        assert_eq!(beam.get("bety"), Some("1.0*m^-1"));
        assert_eq!(beam.to_string().matches(",\n\t").count() + 1, beam.len());
    }

    #[test]
    fn non_finite_energy_is_rejected() {
        let err = Beam::new("e-", f64::NAN, "reference").unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref key, .. } if key == "energy"));
    }

    #[test]
    fn default_is_reference_electron() {
        let beam = Beam::default();
        assert_eq!(beam, Beam::new("e-", 1.0, "reference").unwrap());
    }

    #[test]
    fn gauss_setters_use_default_units() {
        let mut beam = gauss_beam();
        beam.set_sigma_x(2.0)
            .unwrap()
            .set_sigma_xp(0.5)
            .unwrap()
            .set_sigma_e(0.001)
            .unwrap()
            .set_sigma_t(1e-12)
            .unwrap();

        assert_eq!(beam.get("sigmaX"), Some("2.0*um"));
        assert_eq!(beam.get("sigmaXp"), Some("0.5*mrad"));
        assert_eq!(beam.get("sigmaE"), Some("0.001"));
        assert_eq!(beam.get("sigmaT"), Some("1e-12*s"));
    }

    #[test]
    fn explicit_unit_overrides_default() {
        let mut beam = gauss_beam();
        beam.set_sigma_y(Quantity::new(3.0, "mm")).unwrap();
        assert_eq!(beam.get("sigmaY"), Some("3.0*mm"));
    }

    #[test]
    fn inactive_setter_is_rejected_without_mutation() {
        let mut beam = gauss_beam();
        let before = beam.clone();

        let err = beam.set_r_min(0.9).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidOperation {
                setter: Setter::RMin,
                distribution: DistributionType::Gauss,
            }
        ));
        assert_eq!(
            err.to_string(),
            "'Rmin' cannot be set on a beam with the 'gauss' distribution"
        );
        assert_eq!(beam, before);
    }

    #[test]
    fn repeated_set_overwrites() {
        let mut beam = gauss_beam();
        beam.set_sigma_x(1.0).unwrap();
        beam.set_sigma_x(4.0).unwrap();
        assert_eq!(beam.get("sigmaX"), Some("4.0*um"));
        assert_eq!(beam.len(), 4);
    }

    #[test]
    fn unconditional_setters_work_everywhere() {
        for distribution in DistributionType::ALL {
            let mut beam = Beam::with_types(ParticleType::Proton, 1.0, distribution).unwrap();
            beam.set_x0(0.1)
                .unwrap()
                .set_xp0(0.0)
                .unwrap()
                .set_e0(2.0)
                .unwrap()
                .set_t0(0.0)
                .unwrap()
                .set_distr_file_loop(3)
                .unwrap();
            assert_eq!(beam.get("X0"), Some("0.1*m"));
            assert_eq!(beam.get("Xp0"), Some("0.0"));
            assert_eq!(beam.get("E0"), Some("2.0*GeV"));
            assert_eq!(beam.get("T0"), Some("0.0*s"));
            assert_eq!(beam.get("distrFileLoop"), Some("3"));
        }
    }

    #[test]
    fn offset_sample_mean_uses_one_key() {
        let mut beam = Beam::default();
        beam.set_offset_sample_mean(true).unwrap();
        assert_eq!(beam.get("offsetSampleMean"), Some("1"));
        beam.set_offset_sample_mean(false).unwrap();
        assert_eq!(beam.get("offsetSampleMean"), Some("0"));
        assert!(!beam.contains_key("OffsetSampleMean"));
    }

    #[test]
    fn halo_has_twiss_and_halo_setters() {
        let mut beam = Beam::new("proton", 7000.0, "halo").unwrap();
        beam.set_beta_x(10.0)
            .unwrap()
            .set_alpha_x(-1.5)
            .unwrap()
            .set_emittance_nx(2.5)
            .unwrap()
            .set_halo_n_sigma_x_inner(5.0)
            .unwrap()
            .set_halo_ps_weight_function("oneoverr")
            .unwrap()
            .set_halo_ps_weight_parameter(1.0)
            .unwrap();

        assert_eq!(beam.get("betx"), Some("10.0*m"));
        assert_eq!(beam.get("alfx"), Some("-1.5"));
        assert_eq!(beam.get("emitnx"), Some("2.5*mm*mrad"));
        assert_eq!(beam.get("haloNSigmaXInner"), Some("5.0"));
        assert_eq!(beam.get("haloPSWeightFunction"), Some("\"oneoverr\""));
        assert_eq!(beam.get("haloPSWeightParameter"), Some("1.0"));
    }

    #[test]
    fn composite_axis_activates_sub_type() {
        let mut beam = Beam::new("e-", 1.0, "composite").unwrap();
        assert!(beam.set_sigma_x(2.0).is_err());

        beam.set_x_distr_type("gauss").unwrap();
        beam.set_sigma_x(2.0).unwrap();
        beam.set_y_distr_type("ring").unwrap();
        beam.set_r_max(1.0).unwrap();

        assert_eq!(beam.get("xDistrType"), Some("\"gauss\""));
        assert_eq!(beam.get("yDistrType"), Some("\"ring\""));
        assert_eq!(beam.get("sigmaX"), Some("2.0*um"));
        assert_eq!(beam.get("Rmax"), Some("1.0*mm"));
        assert!(beam.is_available(Setter::ZDistrType));
    }

    #[test]
    fn composite_axis_rejects_unknown_type() {
        let mut beam = Beam::new("e-", 1.0, "composite").unwrap();
        let before = beam.clone();
        let err = beam.set_z_distr_type("flat").unwrap_err();
        assert!(matches!(err, Error::InvalidDistributionType(_)));
        assert_eq!(beam, before);
    }

    #[test]
    fn composite_axes_share_overlapping_setters() {
        let mut beam = Beam::new("e-", 1.0, "composite").unwrap();
        beam.set_x_distr_type("gauss").unwrap();
        beam.set_y_distr_type("gausstwiss").unwrap();
        beam.set_sigma_e(0.1).unwrap();
        beam.set_sigma_e(0.2).unwrap();

        let out = crate::io::gmad::format(&beam);
        assert_eq!(out.matches("sigmaE=").count(), 1);
        assert!(out.contains("sigmaE=0.2"));
        assert!(out.contains("xDistrType=\"gauss\""));
        assert!(out.contains("yDistrType=\"gausstwiss\""));
    }

    #[test]
    fn switching_distribution_recomputes_setters() {
        let mut beam = gauss_beam();
        beam.set_sigma_x(2.0).unwrap();
        beam.set_distribution_type("ring").unwrap();

        assert!(beam.set_sigma_x(3.0).is_err());
        beam.set_r_min(0.5).unwrap();
        assert_eq!(beam.get("sigmaX"), Some("2.0*um"));
        assert_eq!(beam.get("distrType"), Some("\"ring\""));
    }

    #[test]
    fn set_particle_type_validates() {
        let mut beam = Beam::default();
        beam.set_particle_type("mu-").unwrap();
        assert_eq!(beam.get("particle"), Some("\"mu-\""));
        assert!(matches!(
            beam.set_particle_type("muon"),
            Err(Error::InvalidParticleType(_))
        ));
        assert_eq!(beam.particle(), ParticleType::MuMinus);
    }

    #[test]
    fn sigma_matrix_elements() {
        let mut beam = Beam::new("e-", 1.0, "gaussmatrix").unwrap();
        beam.set_sigma_nm(1, 1, 1e-6).unwrap();
        beam.set_sigma_nm(2, 6, 0.5).unwrap();
        assert_eq!(beam.get("sigma11"), Some("1e-6"));
        assert_eq!(beam.get("sigma26"), Some("0.5"));

        assert!(matches!(
            beam.set_sigma_nm(3, 2, 1.0),
            Err(Error::InvalidValue { .. })
        ));
        assert!(matches!(
            beam.set_sigma_nm(0, 7, 1.0),
            Err(Error::InvalidValue { .. })
        ));
        assert!(matches!(
            gauss_beam().set_sigma_nm(1, 1, 1.0),
            Err(Error::InvalidOperation { .. })
        ));
    }

    #[test]
    fn text_values_are_quoted_and_checked() {
        let mut beam = Beam::new("e-", 1.0, "userfile").unwrap();
        beam.set_distr_file("beam.dat.gz")
            .unwrap()
            .set_distr_file_format("x[mm]:xp[mrad]:E[GeV]")
            .unwrap();
        assert_eq!(beam.get("distrFile"), Some("\"beam.dat.gz\""));
        assert_eq!(beam.get("distrFileFormat"), Some("\"x[mm]:xp[mrad]:E[GeV]\""));

        let err = beam.set_distr_file("bad\"name").unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
    }

    #[test]
    fn value_kind_mismatch_is_rejected() {
        let mut beam = gauss_beam();
        let err = beam.set(Setter::SigmaX, "wide").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for 'sigmaX': expected a number, got text"
        );
        assert!(beam.set(Setter::DistrFileLoop, true).is_err());
        assert!(beam.set(Setter::SigmaX, f64::INFINITY).is_err());
    }

    #[test]
    fn set_named_resolves_keys() {
        let mut beam = Beam::new("e-", 1.0, "ptc").unwrap();
        beam.set_named("distrFile", "tracks.ptc").unwrap();
        beam.set_named("sigmaE", 0.002).unwrap();
        beam.set_named("X0", Quantity::new(1.0, "mm")).unwrap();
        assert_eq!(beam.get("distrFile"), Some("\"tracks.ptc\""));
        assert_eq!(beam.get("sigmaE"), Some("0.002"));
        assert_eq!(beam.get("X0"), Some("1.0*mm"));

        assert!(matches!(
            beam.set_named("wibble", 1.0),
            Err(Error::UnknownParameter(_))
        ));
        assert!(matches!(
            beam.set_named("betx", 1.0),
            Err(Error::InvalidOperation { .. })
        ));
    }

    #[test]
    fn set_named_handles_sigma_matrix_keys() {
        let mut beam = Beam::new("e-", 1.0, "gaussmatrix").unwrap();
        beam.set_named("sigma33", 2i64).unwrap();
        assert_eq!(beam.get("sigma33"), Some("2.0"));
    }

    #[test]
    fn beam_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Beam>();
    }

    #[test]
    fn sorted_entries_are_in_byte_order() {
        let mut beam = gauss_beam();
        beam.set_sigma_y(1.0).unwrap();
        beam.set_x0(0.0).unwrap();
        beam.set_sigma_e(0.1).unwrap();
        let keys: Vec<&str> = beam.sorted_entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["X0", "distrType", "energy", "particle", "sigmaE", "sigmaY"]
        );
    }
}
