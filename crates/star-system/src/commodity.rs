//! Tradeable commodities and the production economy they belong to.

use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// Set of economy kinds, stored as bit flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EconType(u8);

impl EconType {
    pub const NONE: EconType = EconType(0);
    pub const AGRICULTURE: EconType = EconType(1);
    pub const INDUSTRY: EconType = EconType(1 << 1);
    pub const MINING: EconType = EconType(1 << 2);

    pub fn contains(self, other: EconType) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }
}

impl BitOr for EconType {
    type Output = EconType;

    fn bitor(self, rhs: EconType) -> EconType {
        EconType(self.0 | rhs.0)
    }
}

impl fmt::Display for EconType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut parts = Vec::new();
        if self.contains(EconType::AGRICULTURE) {
            parts.push("agriculture");
        }
        if self.contains(EconType::INDUSTRY) {
            parts.push("industry");
        }
        if self.contains(EconType::MINING) {
            parts.push("mining");
        }
        if parts.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Commodity {
    Hydrogen,
    LiquidOxygen,
    MetalOre,
    CarbonOre,
    MetalAlloys,
    Plastics,
    FruitAndVeg,
    AnimalMeat,
    LiveAnimals,
    Liquor,
    Grain,
    Textiles,
    Fertilizer,
    Water,
    Medicines,
    ConsumerGoods,
    Computers,
    Robots,
    PreciousMetals,
    IndustrialMachinery,
    FarmMachinery,
    MiningMachinery,
    AirProcessors,
    Slaves,
    HandWeapons,
    BattleWeapons,
    NerveGas,
    Narcotics,
    MilitaryFuel,
    Rubbish,
    Radioactives,
}

impl Commodity {
    pub const COUNT: usize = 31;

    pub const ALL: [Commodity; Commodity::COUNT] = [
        Commodity::Hydrogen,
        Commodity::LiquidOxygen,
        Commodity::MetalOre,
        Commodity::CarbonOre,
        Commodity::MetalAlloys,
        Commodity::Plastics,
        Commodity::FruitAndVeg,
        Commodity::AnimalMeat,
        Commodity::LiveAnimals,
        Commodity::Liquor,
        Commodity::Grain,
        Commodity::Textiles,
        Commodity::Fertilizer,
        Commodity::Water,
        Commodity::Medicines,
        Commodity::ConsumerGoods,
        Commodity::Computers,
        Commodity::Robots,
        Commodity::PreciousMetals,
        Commodity::IndustrialMachinery,
        Commodity::FarmMachinery,
        Commodity::MiningMachinery,
        Commodity::AirProcessors,
        Commodity::Slaves,
        Commodity::HandWeapons,
        Commodity::BattleWeapons,
        Commodity::NerveGas,
        Commodity::Narcotics,
        Commodity::MilitaryFuel,
        Commodity::Rubbish,
        Commodity::Radioactives,
    ];

    /// Goods every populated world imports.
    pub const CONSUMABLES: [Commodity; 10] = [
        Commodity::AirProcessors,
        Commodity::Grain,
        Commodity::FruitAndVeg,
        Commodity::AnimalMeat,
        Commodity::Liquor,
        Commodity::ConsumerGoods,
        Commodity::Medicines,
        Commodity::HandWeapons,
        Commodity::Narcotics,
        Commodity::LiquidOxygen,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn econ_type(self) -> EconType {
        use Commodity::*;
        match self {
            Hydrogen | MetalOre | CarbonOre | Water | PreciousMetals => EconType::MINING,
            FruitAndVeg | AnimalMeat | LiveAnimals | Liquor | Grain | Slaves => {
                EconType::AGRICULTURE
            }
            Rubbish | Radioactives => EconType::NONE,
            _ => EconType::INDUSTRY,
        }
    }

    /// Commodities consumed to produce this one.
    pub fn inputs(self) -> &'static [Commodity] {
        use Commodity::*;
        match self {
            LiquidOxygen => &[Water, IndustrialMachinery],
            MetalOre | CarbonOre | Water | PreciousMetals => &[MiningMachinery],
            MetalAlloys => &[MetalOre, IndustrialMachinery],
            Plastics => &[CarbonOre, IndustrialMachinery],
            FruitAndVeg | AnimalMeat | LiveAnimals | Liquor | Grain => {
                &[FarmMachinery, Fertilizer]
            }
            Textiles => &[Plastics],
            Fertilizer => &[CarbonOre],
            Medicines => &[Computers, CarbonOre],
            ConsumerGoods => &[Plastics, Textiles],
            Computers => &[PreciousMetals, IndustrialMachinery],
            Robots => &[Plastics, Computers],
            IndustrialMachinery | FarmMachinery | MiningMachinery => &[MetalAlloys, Robots],
            AirProcessors => &[Plastics, IndustrialMachinery],
            HandWeapons => &[Computers],
            BattleWeapons => &[IndustrialMachinery, MetalAlloys],
            NerveGas | Narcotics => &[Medicines],
            MilitaryFuel => &[Hydrogen],
            Hydrogen | Slaves | Rubbish | Radioactives => &[],
        }
    }

    pub fn is_consumable(self) -> bool {
        Self::CONSUMABLES.contains(&self)
    }

    /// Consumables a world with a rich biosphere can supply for itself.
    pub fn is_life_supplied(self) -> bool {
        matches!(
            self,
            Commodity::AirProcessors
                | Commodity::LiquidOxygen
                | Commodity::Grain
                | Commodity::FruitAndVeg
                | Commodity::AnimalMeat
        )
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            Commodity::Hydrogen => "Hydrogen",
            Commodity::LiquidOxygen => "Liquid Oxygen",
            Commodity::MetalOre => "Metal ore",
            Commodity::CarbonOre => "Carbon ore",
            Commodity::MetalAlloys => "Metal alloys",
            Commodity::Plastics => "Plastics",
            Commodity::FruitAndVeg => "Fruit and Veg",
            Commodity::AnimalMeat => "Animal Meat",
            Commodity::LiveAnimals => "Live Animals",
            Commodity::Liquor => "Liquor",
            Commodity::Grain => "Grain",
            Commodity::Textiles => "Textiles",
            Commodity::Fertilizer => "Fertilizer",
            Commodity::Water => "Water",
            Commodity::Medicines => "Medicines",
            Commodity::ConsumerGoods => "Consumer goods",
            Commodity::Computers => "Computers",
            Commodity::Robots => "Robots",
            Commodity::PreciousMetals => "Precious metals",
            Commodity::IndustrialMachinery => "Industrial machinery",
            Commodity::FarmMachinery => "Farm machinery",
            Commodity::MiningMachinery => "Mining machinery",
            Commodity::AirProcessors => "Air processors",
            Commodity::Slaves => "Slaves",
            Commodity::HandWeapons => "Hand weapons",
            Commodity::BattleWeapons => "Battle weapons",
            Commodity::NerveGas => "Nerve Gas",
            Commodity::Narcotics => "Narcotics",
            Commodity::MilitaryFuel => "Military fuel",
            Commodity::Rubbish => "Rubbish",
            Commodity::Radioactives => "Radioactives",
        };
        write!(f, "{}", str)
    }
}
