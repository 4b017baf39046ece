use std::collections::BTreeSet;

use super::setter::Setter;
use crate::model::types::DistributionType;

const GAUSS: &[Setter] = &[
    Setter::SigmaX,
    Setter::SigmaY,
    Setter::SigmaE,
    Setter::SigmaXp,
    Setter::SigmaYp,
    Setter::SigmaT,
];

const GAUSS_TWISS: &[Setter] = &[
    Setter::BetaX,
    Setter::BetaY,
    Setter::AlphaX,
    Setter::AlphaY,
    Setter::EmittanceX,
    Setter::EmittanceY,
    Setter::EmittanceNX,
    Setter::EmittanceNY,
    Setter::SigmaE,
    Setter::SigmaT,
    Setter::DispX,
    Setter::DispY,
    Setter::DispXp,
    Setter::DispYp,
];

const HALO: &[Setter] = &[
    Setter::HaloNSigmaXInner,
    Setter::HaloNSigmaXOuter,
    Setter::HaloNSigmaYInner,
    Setter::HaloNSigmaYOuter,
    Setter::HaloPsWeightParameter,
    Setter::HaloPsWeightFunction,
    Setter::HaloXCutInner,
    Setter::HaloYCutInner,
];

const CIRCLE: &[Setter] = &[
    Setter::EnvelopeR,
    Setter::EnvelopeRp,
    Setter::EnvelopeT,
    Setter::EnvelopeE,
];

const SQUARE: &[Setter] = &[
    Setter::EnvelopeX,
    Setter::EnvelopeXp,
    Setter::EnvelopeY,
    Setter::EnvelopeYp,
    Setter::EnvelopeT,
    Setter::EnvelopeE,
];

const RING: &[Setter] = &[Setter::RMin, Setter::RMax];

const ESHELL: &[Setter] = &[
    Setter::ShellX,
    Setter::ShellY,
    Setter::ShellXp,
    Setter::ShellYp,
];

const COMPOSITE: &[Setter] = &[Setter::XDistrType, Setter::YDistrType, Setter::ZDistrType];

const PTC: &[Setter] = &[Setter::SigmaE, Setter::DistribFileName];

const USER_FILE: &[Setter] = &[Setter::DistrFile, Setter::DistrFileFormat];

/// Setters a distribution type makes available, in activation order.
pub fn setters_for(distribution: DistributionType) -> Vec<Setter> {
    match distribution {
        DistributionType::GaussMatrix => vec![Setter::SigmaMatrix],
        DistributionType::Gauss => GAUSS.to_vec(),
        DistributionType::GaussTwiss => GAUSS_TWISS.to_vec(),
        DistributionType::Circle => CIRCLE.to_vec(),
        DistributionType::Square => SQUARE.to_vec(),
        DistributionType::Ring => RING.to_vec(),
        DistributionType::EShell => ESHELL.to_vec(),
        DistributionType::Halo => [GAUSS_TWISS, HALO].concat(),
        DistributionType::Composite => COMPOSITE.to_vec(),
        DistributionType::Ptc => PTC.to_vec(),
        DistributionType::UserFile => USER_FILE.to_vec(),
        DistributionType::Reference
        | DistributionType::SixTrack
        | DistributionType::EventGeneratorFile
        | DistributionType::Sphere
        | DistributionType::CompositeSde
        | DistributionType::Box
        | DistributionType::BdsimSampler
        | DistributionType::HaloSigma => Vec::new(),
    }
}

/// The set of gated setters currently usable on a beam.
///
/// Activation is cumulative: activating a second distribution type (a
/// composite axis) adds its setters to the set and never removes any.
/// Unconditional setters are always reported as available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    active: BTreeSet<Setter>,
}

impl Capabilities {
    pub fn for_distribution(distribution: DistributionType) -> Self {
        let mut caps = Self::default();
        caps.activate(distribution);
        caps
    }

    /// Adds the setters of `distribution`, returning how many were new.
    pub fn activate(&mut self, distribution: DistributionType) -> usize {
        setters_for(distribution)
            .into_iter()
            .filter(|s| self.active.insert(*s))
            .count()
    }

    pub fn contains(&self, setter: Setter) -> bool {
        setter.is_unconditional() || self.active.contains(&setter)
    }

    /// Gated setters that are active, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Setter> + '_ {
        self.active.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
