use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported particle type: '{0}'")]
pub struct ParseParticleTypeError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported distribution type: '{0}'")]
pub struct ParseDistributionTypeError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ParticleType {
    #[default]
    Electron,
    Positron,
    Proton,
    Gamma,
    AntiProton,
    PiPlus,
    PiMinus,
    Neutron,
    Photon,
    MuPlus,
    MuMinus,
    KaonMinus,
    KaonPlus,
    Kaon0L,
}

impl ParticleType {
    pub const ALL: [ParticleType; 14] = [
        ParticleType::Electron,
        ParticleType::Positron,
        ParticleType::Proton,
        ParticleType::Gamma,
        ParticleType::AntiProton,
        ParticleType::PiPlus,
        ParticleType::PiMinus,
        ParticleType::Neutron,
        ParticleType::Photon,
        ParticleType::MuPlus,
        ParticleType::MuMinus,
        ParticleType::KaonMinus,
        ParticleType::KaonPlus,
        ParticleType::Kaon0L,
    ];

    /// Name of the species as the engine spells it.
    pub fn name(&self) -> &'static str {
        match self {
            ParticleType::Electron => "e-",
            ParticleType::Positron => "e+",
            ParticleType::Proton => "proton",
            ParticleType::Gamma => "gamma",
            ParticleType::AntiProton => "antiproton",
            ParticleType::PiPlus => "pi+",
            ParticleType::PiMinus => "pi-",
            ParticleType::Neutron => "neutron",
            ParticleType::Photon => "photon",
            ParticleType::MuPlus => "mu+",
            ParticleType::MuMinus => "mu-",
            ParticleType::KaonMinus => "kaon-",
            ParticleType::KaonPlus => "kaon+",
            ParticleType::Kaon0L => "kaon0L",
        }
    }
}

impl fmt::Display for ParticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParticleType {
    type Err = ParseParticleTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "e-" => Ok(ParticleType::Electron),
            "e+" => Ok(ParticleType::Positron),
            "proton" => Ok(ParticleType::Proton),
            "gamma" => Ok(ParticleType::Gamma),
            "antiproton" => Ok(ParticleType::AntiProton),
            "pi+" => Ok(ParticleType::PiPlus),
            "pi-" => Ok(ParticleType::PiMinus),
            "neutron" => Ok(ParticleType::Neutron),
            "photon" => Ok(ParticleType::Photon),
            "mu+" => Ok(ParticleType::MuPlus),
            "mu-" => Ok(ParticleType::MuMinus),
            "kaon-" => Ok(ParticleType::KaonMinus),
            "kaon+" => Ok(ParticleType::KaonPlus),
            "kaon0L" => Ok(ParticleType::Kaon0L),
            _ => Err(ParseParticleTypeError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum DistributionType {
    #[default]
    Reference,
    GaussMatrix,
    Gauss,
    GaussTwiss,
    Circle,
    Square,
    Ring,
    EShell,
    Halo,
    Composite,
    UserFile,
    Ptc,
    SixTrack,
    EventGeneratorFile,
    Sphere,
    CompositeSde,
    Box,
    BdsimSampler,
    HaloSigma,
}

impl DistributionType {
    pub const ALL: [DistributionType; 19] = [
        DistributionType::Reference,
        DistributionType::GaussMatrix,
        DistributionType::Gauss,
        DistributionType::GaussTwiss,
        DistributionType::Circle,
        DistributionType::Square,
        DistributionType::Ring,
        DistributionType::EShell,
        DistributionType::Halo,
        DistributionType::Composite,
        DistributionType::UserFile,
        DistributionType::Ptc,
        DistributionType::SixTrack,
        DistributionType::EventGeneratorFile,
        DistributionType::Sphere,
        DistributionType::CompositeSde,
        DistributionType::Box,
        DistributionType::BdsimSampler,
        DistributionType::HaloSigma,
    ];

    /// Name of the distribution as written to `distrType`.
    pub fn name(&self) -> &'static str {
        match self {
            DistributionType::Reference => "reference",
            DistributionType::GaussMatrix => "gaussmatrix",
            DistributionType::Gauss => "gauss",
            DistributionType::GaussTwiss => "gausstwiss",
            DistributionType::Circle => "circle",
            DistributionType::Square => "square",
            DistributionType::Ring => "ring",
            DistributionType::EShell => "eshell",
            DistributionType::Halo => "halo",
            DistributionType::Composite => "composite",
            DistributionType::UserFile => "userfile",
            DistributionType::Ptc => "ptc",
            DistributionType::SixTrack => "sixtrack",
            DistributionType::EventGeneratorFile => "eventgeneratorfile",
            DistributionType::Sphere => "sphere",
            DistributionType::CompositeSde => "compositesde",
            DistributionType::Box => "box",
            DistributionType::BdsimSampler => "bdsimsampler",
            DistributionType::HaloSigma => "halosigma",
        }
    }
}

impl fmt::Display for DistributionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistributionType {
    type Err = ParseDistributionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reference" => Ok(DistributionType::Reference),
            "gaussmatrix" => Ok(DistributionType::GaussMatrix),
            "gauss" => Ok(DistributionType::Gauss),
            "gausstwiss" => Ok(DistributionType::GaussTwiss),
            "circle" => Ok(DistributionType::Circle),
            "square" => Ok(DistributionType::Square),
            "ring" => Ok(DistributionType::Ring),
            "eshell" => Ok(DistributionType::EShell),
            "halo" => Ok(DistributionType::Halo),
            "composite" => Ok(DistributionType::Composite),
            "userfile" => Ok(DistributionType::UserFile),
            "ptc" => Ok(DistributionType::Ptc),
            "sixtrack" => Ok(DistributionType::SixTrack),
            "eventgeneratorfile" => Ok(DistributionType::EventGeneratorFile),
            "sphere" => Ok(DistributionType::Sphere),
            "compositesde" => Ok(DistributionType::CompositeSde),
            "box" => Ok(DistributionType::Box),
            "bdsimsampler" => Ok(DistributionType::BdsimSampler),
            "halosigma" => Ok(DistributionType::HaloSigma),
            _ => Err(ParseDistributionTypeError(s.to_string())),
        }
    }
}
