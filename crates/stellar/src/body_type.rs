use std::fmt;

use serde::{Deserialize, Serialize};

/// Every kind of node that can appear in a generated star system.
///
/// The discriminants are stable: star ranges are contiguous, which lets
/// range checks such as [`BodyType::is_star`] stay cheap and lets random
/// star selection draw an index.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BodyType {
    GravPoint = 0,
    BrownDwarf = 1,
    WhiteDwarf = 2,

    // Main sequence
    StarM = 3,
    StarK = 4,
    StarG = 5,
    StarF = 6,
    StarA = 7,
    StarB = 8,
    StarO = 9,

    // Giants
    StarMGiant = 10,
    StarKGiant = 11,
    StarGGiant = 12,
    StarFGiant = 13,
    StarAGiant = 14,
    StarBGiant = 15,
    StarOGiant = 16,

    // Super-giants
    StarMSuperGiant = 17,
    StarKSuperGiant = 18,
    StarGSuperGiant = 19,
    StarFSuperGiant = 20,
    StarASuperGiant = 21,
    StarBSuperGiant = 22,
    StarOSuperGiant = 23,

    // Hyper-giants
    StarMHyperGiant = 24,
    StarKHyperGiant = 25,
    StarGHyperGiant = 26,
    StarFHyperGiant = 27,
    StarAHyperGiant = 28,
    StarBHyperGiant = 29,
    StarOHyperGiant = 30,

    // Wolf-Rayet
    StarMWf = 31,
    StarBWf = 32,
    StarOWf = 33,

    // Black holes
    StarSBH = 34,
    StarIMBH = 35,
    StarSMBH = 36,

    GasGiant = 37,
    Asteroid = 38,
    Terrestrial = 39,
    OrbitalStarport = 40,
    SurfaceStarport = 41,
    HyperspaceCloud = 42,
}

/// Coarse classification of a [`BodyType`]. The ordering matters: callers
/// compare against [`BodySuperType::Star`] to mean "grav point or star".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BodySuperType {
    None,
    Star,
    RockyPlanet,
    GasGiant,
    Starport,
    HyperspaceCloud,
}

impl BodyType {
    pub const STAR_MIN: BodyType = BodyType::BrownDwarf;
    pub const STAR_MAX: BodyType = BodyType::StarSMBH;

    pub const ALL: [BodyType; 43] = [
        BodyType::GravPoint,
        BodyType::BrownDwarf,
        BodyType::WhiteDwarf,
        BodyType::StarM,
        BodyType::StarK,
        BodyType::StarG,
        BodyType::StarF,
        BodyType::StarA,
        BodyType::StarB,
        BodyType::StarO,
        BodyType::StarMGiant,
        BodyType::StarKGiant,
        BodyType::StarGGiant,
        BodyType::StarFGiant,
        BodyType::StarAGiant,
        BodyType::StarBGiant,
        BodyType::StarOGiant,
        BodyType::StarMSuperGiant,
        BodyType::StarKSuperGiant,
        BodyType::StarGSuperGiant,
        BodyType::StarFSuperGiant,
        BodyType::StarASuperGiant,
        BodyType::StarBSuperGiant,
        BodyType::StarOSuperGiant,
        BodyType::StarMHyperGiant,
        BodyType::StarKHyperGiant,
        BodyType::StarGHyperGiant,
        BodyType::StarFHyperGiant,
        BodyType::StarAHyperGiant,
        BodyType::StarBHyperGiant,
        BodyType::StarOHyperGiant,
        BodyType::StarMWf,
        BodyType::StarBWf,
        BodyType::StarOWf,
        BodyType::StarSBH,
        BodyType::StarIMBH,
        BodyType::StarSMBH,
        BodyType::GasGiant,
        BodyType::Asteroid,
        BodyType::Terrestrial,
        BodyType::OrbitalStarport,
        BodyType::SurfaceStarport,
        BodyType::HyperspaceCloud,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<BodyType> {
        Self::ALL.get(index).copied()
    }

    pub fn super_type(self) -> BodySuperType {
        match self {
            BodyType::GravPoint => BodySuperType::None,
            BodyType::GasGiant => BodySuperType::GasGiant,
            BodyType::Asteroid | BodyType::Terrestrial => BodySuperType::RockyPlanet,
            BodyType::OrbitalStarport | BodyType::SurfaceStarport => BodySuperType::Starport,
            BodyType::HyperspaceCloud => BodySuperType::HyperspaceCloud,
            _ => BodySuperType::Star,
        }
    }

    /// True for every star kind, brown dwarfs and black holes included.
    pub fn is_star(self) -> bool {
        (Self::STAR_MIN..=Self::STAR_MAX).contains(&self)
    }

    /// True for grav points and stars: the kinds the star tables cover.
    pub fn is_star_or_grav_point(self) -> bool {
        self <= Self::STAR_MAX
    }

    pub fn is_starport(self) -> bool {
        self.super_type() == BodySuperType::Starport
    }

    /// Bright classes whose rapid rotation gives them a visible equatorial
    /// bulge.
    pub fn is_rapid_rotator(self) -> bool {
        matches!(
            self,
            BodyType::StarF
                | BodyType::StarFGiant
                | BodyType::StarFHyperGiant
                | BodyType::StarFSuperGiant
                | BodyType::StarA
                | BodyType::StarAGiant
                | BodyType::StarAHyperGiant
                | BodyType::StarASuperGiant
                | BodyType::StarB
                | BodyType::StarBGiant
                | BodyType::StarBSuperGiant
                | BodyType::StarBWf
                | BodyType::StarO
                | BodyType::StarOGiant
                | BodyType::StarOHyperGiant
                | BodyType::StarOSuperGiant
                | BodyType::StarOWf
        )
    }

    /// Catalogue description of a star kind, `None` for non-stars.
    pub fn star_description(self) -> Option<&'static str> {
        let text = match self {
            BodyType::BrownDwarf => "Brown dwarf sub-stellar object",
            BodyType::WhiteDwarf => "White dwarf stellar remnant",
            BodyType::StarM => "Type 'M' red star",
            BodyType::StarK => "Type 'K' orange star",
            BodyType::StarG => "Type 'G' yellow star",
            BodyType::StarF => "Type 'F' white star",
            BodyType::StarA => "Type 'A' hot white star",
            BodyType::StarB => "Bright type 'B' blue star",
            BodyType::StarO => "Hot, massive type 'O' star",
            BodyType::StarMGiant => "Red giant star",
            BodyType::StarKGiant => "Orange giant star",
            BodyType::StarGGiant => "Yellow giant star",
            BodyType::StarFGiant | BodyType::StarAGiant => "White giant star",
            BodyType::StarBGiant => "Blue giant star",
            BodyType::StarOGiant => "Hot blue giant star",
            BodyType::StarMSuperGiant => "Red super giant star",
            BodyType::StarKSuperGiant => "Orange super giant star",
            BodyType::StarGSuperGiant => "Yellow super giant star",
            BodyType::StarFSuperGiant | BodyType::StarASuperGiant => "White super giant star",
            BodyType::StarBSuperGiant => "Blue super giant star",
            BodyType::StarOSuperGiant => "Hot blue super giant star",
            BodyType::StarMHyperGiant => "Red hyper giant star",
            BodyType::StarKHyperGiant => "Orange hyper giant star",
            BodyType::StarGHyperGiant => "Yellow hyper giant star",
            BodyType::StarFHyperGiant | BodyType::StarAHyperGiant => "White hyper giant star",
            BodyType::StarBHyperGiant => "Blue hyper giant star",
            BodyType::StarOHyperGiant => "Hot blue hyper giant star",
            BodyType::StarMWf => "Wolf-Rayet star, unstable",
            BodyType::StarBWf => "Wolf-Rayet star, risk of collapse",
            BodyType::StarOWf => "Wolf-Rayet star, imminent collapse",
            BodyType::StarSBH => "A stellar black hole",
            BodyType::StarIMBH => "An intermediate-mass black hole",
            BodyType::StarSMBH => "Our galactic anchor",
            _ => return None,
        };
        Some(text)
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            BodyType::GravPoint => "Gravity point",
            BodyType::BrownDwarf => "Brown dwarf",
            BodyType::WhiteDwarf => "White dwarf",
            BodyType::StarM => "M",
            BodyType::StarK => "K",
            BodyType::StarG => "G",
            BodyType::StarF => "F",
            BodyType::StarA => "A",
            BodyType::StarB => "B",
            BodyType::StarO => "O",
            BodyType::StarMGiant => "M giant",
            BodyType::StarKGiant => "K giant",
            BodyType::StarGGiant => "G giant",
            BodyType::StarFGiant => "F giant",
            BodyType::StarAGiant => "A giant",
            BodyType::StarBGiant => "B giant",
            BodyType::StarOGiant => "O giant",
            BodyType::StarMSuperGiant => "M super-giant",
            BodyType::StarKSuperGiant => "K super-giant",
            BodyType::StarGSuperGiant => "G super-giant",
            BodyType::StarFSuperGiant => "F super-giant",
            BodyType::StarASuperGiant => "A super-giant",
            BodyType::StarBSuperGiant => "B super-giant",
            BodyType::StarOSuperGiant => "O super-giant",
            BodyType::StarMHyperGiant => "M hyper-giant",
            BodyType::StarKHyperGiant => "K hyper-giant",
            BodyType::StarGHyperGiant => "G hyper-giant",
            BodyType::StarFHyperGiant => "F hyper-giant",
            BodyType::StarAHyperGiant => "A hyper-giant",
            BodyType::StarBHyperGiant => "B hyper-giant",
            BodyType::StarOHyperGiant => "O hyper-giant",
            BodyType::StarMWf => "M Wolf-Rayet",
            BodyType::StarBWf => "B Wolf-Rayet",
            BodyType::StarOWf => "O Wolf-Rayet",
            BodyType::StarSBH => "Stellar black hole",
            BodyType::StarIMBH => "Intermediate-mass black hole",
            BodyType::StarSMBH => "Super-massive black hole",
            BodyType::GasGiant => "Gas giant",
            BodyType::Asteroid => "Asteroid",
            BodyType::Terrestrial => "Terrestrial planet",
            BodyType::OrbitalStarport => "Orbital starport",
            BodyType::SurfaceStarport => "Surface starport",
            BodyType::HyperspaceCloud => "Hyperspace cloud",
        };
        write!(f, "{}", str)
    }
}

impl fmt::Display for BodySuperType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            BodySuperType::None => "None",
            BodySuperType::Star => "Star",
            BodySuperType::RockyPlanet => "Rocky planet",
            BodySuperType::GasGiant => "Gas giant",
            BodySuperType::Starport => "Starport",
            BodySuperType::HyperspaceCloud => "Hyperspace cloud",
        };
        write!(f, "{}", str)
    }
}
