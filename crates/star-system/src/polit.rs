//! System government and lawlessness.

use std::fmt;

use serde::{Deserialize, Serialize};
use units::Fixed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GovType {
    None,
    Anarchy,
    Corporate,
    Democracy,
    Dictatorship,
    Military,
    Theocracy,
    Colonial,
}

impl GovType {
    /// Governments a populated system can draw from.
    pub const SELECTABLE: [GovType; 7] = [
        GovType::Anarchy,
        GovType::Corporate,
        GovType::Democracy,
        GovType::Dictatorship,
        GovType::Military,
        GovType::Theocracy,
        GovType::Colonial,
    ];

    /// Lawlessness range `[min, max]` in hundredths.
    pub fn lawlessness_range(self) -> (i32, i32) {
        match self {
            GovType::None => (0, 0),
            GovType::Anarchy => (90, 100),
            GovType::Corporate => (40, 60),
            GovType::Democracy => (5, 30),
            GovType::Dictatorship => (20, 40),
            GovType::Military => (5, 20),
            GovType::Theocracy => (10, 40),
            GovType::Colonial => (30, 70),
        }
    }
}

impl fmt::Display for GovType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            GovType::None => "No central governance",
            GovType::Anarchy => "Anarchy",
            GovType::Corporate => "Corporate system",
            GovType::Democracy => "Democracy",
            GovType::Dictatorship => "Dictatorship",
            GovType::Military => "Military dictatorship",
            GovType::Theocracy => "Theocracy",
            GovType::Colonial => "Colonial rule",
        };
        write!(f, "{}", str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SysPolit {
    pub gov_type: GovType,
    /// 0 is perfectly policed, 1 is lawless
    pub lawlessness: Fixed,
}

impl Default for SysPolit {
    fn default() -> Self {
        Self {
            gov_type: GovType::None,
            lawlessness: Fixed::ZERO,
        }
    }
}
