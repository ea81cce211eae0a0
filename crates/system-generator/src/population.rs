//! Population, trade and politics.
//!
//! Settlement runs bottom-up over the body tree. Each habitable body gets a
//! population from how well it suits every commodity's economy, and its
//! production and consumption shift the system's balance of trade. The
//! system then picks a government, grows starports where people live and
//! summarises itself in a one-line description.

use star_system::{BodyId, Commodity, EconType, GovType, Random, StarSystem, SysPolit};
use stellar::BodyType;
use tracing::debug;
use units::{isqrt, Fixed, CELSIUS};

use crate::context::GenContext;
use crate::naming::NameGenerator;
use crate::stations::populate_add_stations;

const UNEXPLORED_DESC: &str = "Unexplored system. No available data.";
const UNSETTLED_DESC: &str = "Small-scale prospecting. No registered settlements.";

/// Population of the orbital starports of otherwise empty bodies, billions.
fn orbital_port_population() -> Fixed {
    Fixed::from_ratio(1, 100_000)
}

/// 2/3 for the home system, otherwise falling off with the sector's
/// distance from the galactic origin: `3 / isqrt(9 + 10 d²)`.
pub fn human_proximity(ctx: &GenContext) -> Fixed {
    if ctx.is_home_system {
        return Fixed::from_ratio(2, 3);
    }
    let d2 = ctx.path.sector_distance_squared().max(0) as u64;
    let root = isqrt(9u64.saturating_add(d2.saturating_mul(10))).max(1);
    Fixed::from_int(3) / Fixed::from_int(root as i64)
}

/// Settles the system: populations, trade levels, politics, starports
/// (when `add_stations` is set) and the short description.
pub fn populate(system: &mut StarSystem, ctx: &GenContext, add_stations: bool) {
    let mut rng = ctx.stream(&[ctx.universe_seed()]);

    system.human_prox = human_proximity(ctx);
    system.econ_type = EconType::INDUSTRY;
    system.industrial = rng.fixed();
    system.agricultural = Fixed::ZERO;
    system.total_pop = Fixed::ZERO;

    let Some(root) = system.root() else {
        return;
    };
    system.total_pop = populate_stage1(system, ctx, root);

    normalize_trade(system, ctx, &mut rng);
    system.polit = pick_polit(system, ctx, &mut rng);

    if add_stations {
        populate_add_stations(system, ctx, root);
    }

    system.econ_type = dominant_econ_type(system.industrial, system.metallicity, system.agricultural);
    if system.short_desc.is_empty() {
        system.short_desc = make_short_description(system);
    }

    debug!(
        system = %system.name,
        total_pop = %system.total_pop,
        econ = %system.econ_type,
        gov = %system.polit.gov_type,
        "populated"
    );
}

/// Settles `id` and everything under it, children first. Returns the
/// population added, billions.
pub fn populate_stage1(system: &mut StarSystem, ctx: &GenContext, id: BodyId) -> Fixed {
    let children = system.children_of(id).to_vec();
    let mut total = Fixed::ZERO;
    for child in children {
        total += populate_stage1(system, ctx, child);
    }
    if system.unexplored {
        // Nothing is known about unexplored systems
        system[id].population = Fixed::ZERO;
        return Fixed::ZERO;
    }
    total + settle_body(system, ctx, id)
}

fn settle_body(system: &mut StarSystem, ctx: &GenContext, id: BodyId) -> Fixed {
    let body_type = system[id].body_type;
    system[id].population = Fixed::ZERO;
    if body_type == BodyType::GravPoint {
        return Fixed::ZERO;
    }

    let seed = system[id].seed;
    let mut rng = ctx.stream(&[ctx.universe_seed(), seed]);
    let name_rng = ctx.stream(&[ctx.universe_seed(), seed]);

    let temp = system[id].average_temp;
    let settleable = matches!(body_type, BodyType::Terrestrial | BodyType::Asteroid);
    if temp > CELSIUS + 100 || temp < 100 || !settleable {
        if body_type == BodyType::OrbitalStarport {
            system[id].population = orbital_port_population();
            return orbital_port_population();
        }
        return Fixed::ZERO;
    }

    let life = system[id].life;
    let metallicity = system[id].metallicity;
    let human_prox = system.human_prox;
    let industrial = system.industrial;

    let mut agricultural = Fixed::ZERO;
    if life > Fixed::from_ratio(9, 10) {
        agricultural = (Fixed::ONE - Fixed::from_ratio((CELSIUS + 25 - temp) as i64, 40))
            .clamp(Fixed::ZERO, Fixed::ONE);
        system.agricultural += agricultural * 2;
    } else if life > Fixed::from_ratio(1, 2) {
        agricultural = (Fixed::ONE - Fixed::from_ratio((CELSIUS + 30 - temp) as i64, 50))
            .clamp(Fixed::ZERO, Fixed::ONE);
        system.agricultural += agricultural;
    } else if metallicity < Fixed::from_ratio(1, 2) && metallicity < Fixed::ONE - human_prox {
        // Dead and poor: not worth settling
        return Fixed::ZERO;
    }
    system[id].agricultural = agricultural;

    let mut population = Fixed::ZERO;
    for commodity in Commodity::ALL {
        let econ = commodity.econ_type();
        let mut affinity = Fixed::ONE;
        if econ.contains(EconType::AGRICULTURE) {
            affinity *= agricultural * 2;
        }
        if econ.contains(EconType::INDUSTRY) {
            affinity *= industrial;
        }
        if econ.contains(EconType::MINING) {
            affinity *= metallicity;
        }
        affinity *= rng.fixed();
        if commodity.is_consumable() {
            affinity *= 2;
        }

        population += affinity * human_prox;

        let amount = (affinity * 256).to_i32();
        system.trade_level[commodity.index()] -= 2 * amount;
        for input in commodity.inputs() {
            system.trade_level[input.index()] += amount;
        }
    }

    if !system.has_custom_bodies && population > Fixed::ZERO {
        system[id].name = NameGenerator::new(name_rng).body_name(body_type);
    }

    for commodity in Commodity::CONSUMABLES {
        if life > Fixed::from_ratio(1, 2) && commodity.is_life_supplied() {
            continue;
        }
        system.trade_level[commodity.index()] += rng.int32_range(32, 128);
    }

    // Outdoor worlds hold far more people
    let population = population / 10 + population * agricultural;
    system[id].population = population;
    population
}

/// Rescales the balance of trade to percentage price adjustments of at
/// most the configured maximum, plus a little jitter.
pub fn normalize_trade(system: &mut StarSystem, ctx: &GenContext, rng: &mut Random) {
    let maximum = system.trade_level.iter().map(|t| t.abs()).max().unwrap_or(0);
    if maximum == 0 {
        return;
    }
    let max_adjustment = ctx.config.max_trade_adjustment as i64;
    let jitter = ctx.config.trade_jitter;
    for level in system.trade_level.iter_mut() {
        *level = (*level as i64 * max_adjustment / maximum as i64) as i32;
        *level += rng.int32_range(-jitter, jitter);
    }
}

/// Government and lawlessness. A government fixed by a custom definition
/// wins; unexplored or empty systems have none.
pub fn pick_polit(system: &StarSystem, ctx: &GenContext, rng: &mut Random) -> SysPolit {
    let gov_type = match ctx.gov_type {
        Some(gov_type) => gov_type,
        None if system.unexplored || system.total_pop <= Fixed::ZERO => GovType::None,
        None => {
            let index = rng.int32_below(GovType::SELECTABLE.len() as u32) as usize;
            GovType::SELECTABLE[index]
        }
    };
    let (min, max) = gov_type.lawlessness_range();
    SysPolit {
        gov_type,
        lawlessness: Fixed::from_ratio(rng.int32_range(min, max) as i64, 100),
    }
}

/// Industry when industry outweighs both other aggregates, then mining,
/// else agriculture.
pub fn dominant_econ_type(industrial: Fixed, metallicity: Fixed, agricultural: Fixed) -> EconType {
    if industrial > metallicity && industrial > agricultural {
        EconType::INDUSTRY
    } else if metallicity > agricultural {
        EconType::MINING
    } else {
        EconType::AGRICULTURE
    }
}

/// One-line summary from the economy type and total population.
pub fn make_short_description(system: &StarSystem) -> String {
    if system.unexplored {
        return UNEXPLORED_DESC.to_string();
    }
    let pop = system.total_pop;
    if pop <= Fixed::ZERO {
        return UNSETTLED_DESC.to_string();
    }

    let industry = system.econ_type == EconType::INDUSTRY;
    let mining = system.econ_type == EconType::MINING;
    let pick = |i: &'static str, m: &'static str, a: &'static str| {
        if industry {
            i
        } else if mining {
            m
        } else {
            a
        }
    };

    let text = if pop < Fixed::from_ratio(1, 10) {
        pick(
            "Small industrial outpost.",
            "Some established mining.",
            "Young farming colony.",
        )
    } else if pop < Fixed::from_ratio(1, 2) {
        pick(
            "Industrial colony.",
            "Mining colony.",
            "Outdoor agricultural world.",
        )
    } else if pop < Fixed::from_int(5) {
        pick(
            "Heavy industry.",
            "Extensive mining operations.",
            "Thriving outdoor world.",
        )
    } else {
        pick(
            "Industrial hub system.",
            "Vast strip-mine.",
            "High population outdoor world.",
        )
    };
    text.to_string()
}
