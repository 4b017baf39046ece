use std::fmt;

use crate::model::quantity::Quantity;

/// Identifies one parameter setter of a [`Beam`](crate::Beam).
///
/// Every setter writes exactly one key. Most setters are gated by the
/// distribution type of the beam (see [`Capabilities`](super::Capabilities));
/// the positional offsets, `distrFileLoop` and `offsetSampleMean` are always
/// available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Setter {
    // Always available.
    X0,
    Y0,
    Z0,
    Xp0,
    Yp0,
    Zp0,
    S0,
    E0,
    T0,
    DistrFileLoop,
    OffsetSampleMean,

    // gaussmatrix
    SigmaMatrix,

    // gauss
    SigmaX,
    SigmaY,
    SigmaE,
    SigmaXp,
    SigmaYp,
    SigmaT,

    // gausstwiss
    BetaX,
    BetaY,
    AlphaX,
    AlphaY,
    EmittanceX,
    EmittanceY,
    EmittanceNX,
    EmittanceNY,
    DispX,
    DispY,
    DispXp,
    DispYp,

    // circle, square
    EnvelopeR,
    EnvelopeRp,
    EnvelopeT,
    EnvelopeE,
    EnvelopeX,
    EnvelopeY,
    EnvelopeXp,
    EnvelopeYp,

    // ring
    RMin,
    RMax,

    // eshell
    ShellX,
    ShellY,
    ShellXp,
    ShellYp,

    // halo
    HaloNSigmaXInner,
    HaloNSigmaXOuter,
    HaloNSigmaYInner,
    HaloNSigmaYOuter,
    HaloPsWeightParameter,
    HaloPsWeightFunction,
    HaloXCutInner,
    HaloYCutInner,

    // composite
    XDistrType,
    YDistrType,
    ZDistrType,

    // ptc
    DistribFileName,

    // userfile
    DistrFile,
    DistrFileFormat,
}

/// The shape of value a setter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A number rendered with the given default unit, if any.
    Number(Option<&'static str>),
    /// A string written in double quotes.
    Text,
    /// A distribution type name, validated and written in double quotes.
    Distribution,
    /// A plain integer.
    Integer,
    /// A boolean written as `1` or `0`.
    Flag,
    /// One element of the 6×6 sigma matrix, addressed by two indices.
    Matrix,
}

/// A value passed to [`Beam::set`](crate::Beam::set).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(Quantity),
    Text(String),
    Integer(i64),
    Flag(bool),
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value.into())
    }
}

impl From<Quantity> for Value {
    fn from(value: Quantity) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Flag(value)
    }
}

impl Setter {
    pub const ALL: [Setter; 58] = [
        Setter::X0,
        Setter::Y0,
        Setter::Z0,
        Setter::Xp0,
        Setter::Yp0,
        Setter::Zp0,
        Setter::S0,
        Setter::E0,
        Setter::T0,
        Setter::DistrFileLoop,
        Setter::OffsetSampleMean,
        Setter::SigmaMatrix,
        Setter::SigmaX,
        Setter::SigmaY,
        Setter::SigmaE,
        Setter::SigmaXp,
        Setter::SigmaYp,
        Setter::SigmaT,
        Setter::BetaX,
        Setter::BetaY,
        Setter::AlphaX,
        Setter::AlphaY,
        Setter::EmittanceX,
        Setter::EmittanceY,
        Setter::EmittanceNX,
        Setter::EmittanceNY,
        Setter::DispX,
        Setter::DispY,
        Setter::DispXp,
        Setter::DispYp,
        Setter::EnvelopeR,
        Setter::EnvelopeRp,
        Setter::EnvelopeT,
        Setter::EnvelopeE,
        Setter::EnvelopeX,
        Setter::EnvelopeY,
        Setter::EnvelopeXp,
        Setter::EnvelopeYp,
        Setter::RMin,
        Setter::RMax,
        Setter::ShellX,
        Setter::ShellY,
        Setter::ShellXp,
        Setter::ShellYp,
        Setter::HaloNSigmaXInner,
        Setter::HaloNSigmaXOuter,
        Setter::HaloNSigmaYInner,
        Setter::HaloNSigmaYOuter,
        Setter::HaloPsWeightParameter,
        Setter::HaloPsWeightFunction,
        Setter::HaloXCutInner,
        Setter::HaloYCutInner,
        Setter::XDistrType,
        Setter::YDistrType,
        Setter::ZDistrType,
        Setter::DistribFileName,
        Setter::DistrFile,
        Setter::DistrFileFormat,
    ];

    /// Key the setter writes.
    ///
    /// [`Setter::SigmaMatrix`] writes `sigma{n}{m}`; its key here is the
    /// family name `sigmaNM`.
    pub fn key(&self) -> &'static str {
        match self {
            Setter::X0 => "X0",
            Setter::Y0 => "Y0",
            Setter::Z0 => "Z0",
            Setter::Xp0 => "Xp0",
            Setter::Yp0 => "Yp0",
            Setter::Zp0 => "Zp0",
            Setter::S0 => "S0",
            Setter::E0 => "E0",
            Setter::T0 => "T0",
            Setter::DistrFileLoop => "distrFileLoop",
            Setter::OffsetSampleMean => "offsetSampleMean",
            Setter::SigmaMatrix => "sigmaNM",
            Setter::SigmaX => "sigmaX",
            Setter::SigmaY => "sigmaY",
            Setter::SigmaE => "sigmaE",
            Setter::SigmaXp => "sigmaXp",
            Setter::SigmaYp => "sigmaYp",
            Setter::SigmaT => "sigmaT",
            Setter::BetaX => "betx",
            Setter::BetaY => "bety",
            Setter::AlphaX => "alfx",
            Setter::AlphaY => "alfy",
            Setter::EmittanceX => "emitx",
            Setter::EmittanceY => "emity",
            Setter::EmittanceNX => "emitnx",
            Setter::EmittanceNY => "emitny",
            Setter::DispX => "dispx",
            Setter::DispY => "dispy",
            Setter::DispXp => "dispxp",
            Setter::DispYp => "dispyp",
            Setter::EnvelopeR => "envelopeR",
            Setter::EnvelopeRp => "envelopeRp",
            Setter::EnvelopeT => "envelopeT",
            Setter::EnvelopeE => "envelopeE",
            Setter::EnvelopeX => "envelopeX",
            Setter::EnvelopeY => "envelopeY",
            Setter::EnvelopeXp => "envelopeXp",
            Setter::EnvelopeYp => "envelopeYp",
            Setter::RMin => "Rmin",
            Setter::RMax => "Rmax",
            Setter::ShellX => "shellX",
            Setter::ShellY => "shellY",
            Setter::ShellXp => "shellXp",
            Setter::ShellYp => "shellYp",
            Setter::HaloNSigmaXInner => "haloNSigmaXInner",
            Setter::HaloNSigmaXOuter => "haloNSigmaXOuter",
            Setter::HaloNSigmaYInner => "haloNSigmaYInner",
            Setter::HaloNSigmaYOuter => "haloNSigmaYOuter",
            Setter::HaloPsWeightParameter => "haloPSWeightParameter",
            Setter::HaloPsWeightFunction => "haloPSWeightFunction",
            Setter::HaloXCutInner => "haloXCutInner",
            Setter::HaloYCutInner => "haloYCutInner",
            Setter::XDistrType => "xDistrType",
            Setter::YDistrType => "yDistrType",
            Setter::ZDistrType => "zDistrType",
            Setter::DistribFileName | Setter::DistrFile => "distrFile",
            Setter::DistrFileFormat => "distrFileFormat",
        }
    }

    pub fn kind(&self) -> ValueKind {
        use ValueKind::*;

        match self {
            Setter::X0 | Setter::Y0 | Setter::Z0 | Setter::S0 => Number(Some("m")),
            Setter::E0 => Number(Some("GeV")),
            Setter::T0 => Number(Some("s")),
            Setter::DistrFileLoop => Integer,
            Setter::OffsetSampleMean => Flag,
            Setter::SigmaMatrix => Matrix,

            Setter::SigmaX | Setter::SigmaY => Number(Some("um")),
            Setter::SigmaXp | Setter::SigmaYp => Number(Some("mrad")),
            Setter::SigmaT => Number(Some("s")),

            Setter::BetaX | Setter::BetaY | Setter::DispX | Setter::DispY => Number(Some("m")),
            Setter::EmittanceX | Setter::EmittanceY => Number(Some("um")),
            Setter::EmittanceNX | Setter::EmittanceNY => Number(Some("mm*mrad")),

            Setter::EnvelopeR => Number(Some("um")),
            Setter::EnvelopeRp | Setter::EnvelopeXp | Setter::EnvelopeYp => Number(Some("mrad")),
            Setter::EnvelopeT => Number(Some("s")),
            Setter::EnvelopeE => Number(Some("GeV")),
            Setter::EnvelopeX | Setter::EnvelopeY => Number(Some("m")),

            Setter::RMin | Setter::RMax => Number(Some("mm")),
            Setter::ShellX | Setter::ShellY => Number(Some("m")),

            Setter::HaloPsWeightFunction => Text,
            Setter::XDistrType | Setter::YDistrType | Setter::ZDistrType => Distribution,
            Setter::DistribFileName | Setter::DistrFile | Setter::DistrFileFormat => Text,

            Setter::Xp0
            | Setter::Yp0
            | Setter::Zp0
            | Setter::SigmaE
            | Setter::AlphaX
            | Setter::AlphaY
            | Setter::DispXp
            | Setter::DispYp
            | Setter::ShellXp
            | Setter::ShellYp
            | Setter::HaloNSigmaXInner
            | Setter::HaloNSigmaXOuter
            | Setter::HaloNSigmaYInner
            | Setter::HaloNSigmaYOuter
            | Setter::HaloPsWeightParameter
            | Setter::HaloXCutInner
            | Setter::HaloYCutInner => Number(None),
        }
    }

    /// Whether the setter is available regardless of distribution type.
    pub fn is_unconditional(&self) -> bool {
        matches!(
            self,
            Setter::X0
                | Setter::Y0
                | Setter::Z0
                | Setter::Xp0
                | Setter::Yp0
                | Setter::Zp0
                | Setter::S0
                | Setter::E0
                | Setter::T0
                | Setter::DistrFileLoop
                | Setter::OffsetSampleMean
        )
    }

    /// All setters writing `key`, in declaration order.
    ///
    /// `distrFile` is written by both the `ptc` and `userfile` setters, so a
    /// key may name more than one setter.
    pub fn for_key(key: &str) -> impl Iterator<Item = Setter> + '_ {
        Setter::ALL.into_iter().filter(move |s| s.key() == key)
    }
}

impl fmt::Display for Setter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Parses a sigma matrix key `sigma{n}{m}` into its indices.
pub(crate) fn parse_sigma_key(key: &str) -> Option<(u8, u8)> {
    let digits = key.strip_prefix("sigma")?.as_bytes();
    match digits {
        [n, m] if n.is_ascii_digit() && m.is_ascii_digit() => Some((n - b'0', m - b'0')),
        _ => None,
    }
}
