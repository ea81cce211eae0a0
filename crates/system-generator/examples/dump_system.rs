//! Generate one system and print its body tree
//!
//! Usage: cargo run -p system-generator --example dump_system -- [x y z index] [config.json]
//!
//! Set `RUST_LOG=system_generator=debug` to watch the generation steps.

use std::sync::Arc;

use anyhow::{bail, Context};
use star_system::{BodyId, SectorSystem, SectorTable, StarSystem, SystemPath};
use stellar::BodyType;
use system_generator::{load_config, GeneratorConfig, SystemCache};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn parse_path(args: &[String]) -> anyhow::Result<SystemPath> {
    if args.len() < 4 {
        return Ok(SystemPath::new(0, 0, 0, 0));
    }
    let coord = |i: usize| -> anyhow::Result<i32> {
        args[i]
            .parse()
            .with_context(|| format!("bad sector coordinate {:?}", args[i]))
    };
    let index = args[3]
        .parse()
        .with_context(|| format!("bad system index {:?}", args[3]))?;
    Ok(SystemPath::new(coord(0)?, coord(1)?, coord(2)?, index))
}

fn print_tree(system: &StarSystem, id: BodyId, depth: usize) {
    let body = &system[id];
    let mut line = format!("{}{} [{}]", "  ".repeat(depth), body.name, body.body_type);
    if body.parent().is_some() && body.body_type != BodyType::SurfaceStarport {
        line.push_str(&format!(" a={:.4} AU e={:.3}", body.semi_major_axis.to_f64(), body.eccentricity.to_f64()));
    }
    if body.average_temp > 0 {
        line.push_str(&format!(" {}K", body.average_temp));
    }
    if body.population.to_f64() > 0.0 {
        line.push_str(&format!(" pop={:.3}bn", body.population.to_f64()));
    }
    println!("{}", line);

    for child in system.children_of(id) {
        print_tree(system, *child, depth + 1);
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = parse_path(&args)?;
    let config_file = match args.len() {
        1 => args.first(),
        5 => args.get(4),
        _ => None,
    };
    let config = match config_file {
        Some(file) => load_config(file).with_context(|| format!("loading {}", file))?,
        None => GeneratorConfig::default(),
    };

    let seed = path.system_index.wrapping_mul(7919) ^ (path.sector_x as u32).wrapping_mul(104_729);
    let sector = SectorSystem::new(
        format!("Sys-{}", path.system_index),
        seed,
        vec![BodyType::StarG, BodyType::StarM],
    );
    let mut table = SectorTable::new();
    table.insert(path, sector);

    let cache = SystemCache::new(Arc::new(table), config);
    let system = cache.get_cached(&path)?;
    let Some(root) = system.root() else {
        bail!("system {} has no bodies", path);
    };

    info!(path = %path, bodies = system.body_count(), "generated");
    println!("{} ({})", system.name, path);
    println!("  {}", system.short_desc);
    println!(
        "  {} stars, population {:.3}bn, {}, {}",
        system.num_stars,
        system.total_pop.to_f64(),
        system.econ_type,
        system.polit.gov_type
    );
    println!();
    print_tree(&system, root, 0);
    Ok(())
}
