//! raceway-calc — headless NBR 5410 raceway sizing and packing simulation.
//!
//! Reads a bill of cables from a config file and/or repeated `--cable` args,
//! sizes the raceway, prints the calculation memory, settles the packing
//! layout for a fixed number of ticks, and exports it as SVG.

use std::path::Path;

use raceway_catalog::{category_by_id, draft_cable, size_by_id};
use raceway_core::{CableList, CommercialSize, RacewayType};
use raceway_layout::{expand_cables, Lcg, LayoutSim};
use raceway_sizing::{assess_compliance, perform_calculations, suggest_commercial_size};

mod config;
mod svg;

use config::Config;

const DEFAULT_RESERVE: f64 = 20.0;
const DEFAULT_TICKS: usize = 300;
const DEFAULT_SEED: u64 = 123456789;

fn usage() -> ! {
    eprintln!("Usage: raceway-calc [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>      Config file (default: raceway.toml)");
    eprintln!("  --type <t>           Raceway type: tray | conduit (default: tray)");
    eprintln!("  --reserve <pct>      Reserve margin 0-50 (default: 20)");
    eprintln!("  --cable <spec>       category:section:qty[:diameter], repeatable");
    eprintln!("  --size <id>          Manual commercial size override");
    eprintln!("  --ticks <n>          Layout iterations (default: 300)");
    eprintln!("  --seed <n>           Layout jitter seed");
    eprintln!("  --export <path>      Output SVG path (default: raceway.svg)");
    eprintln!();
    eprintln!("Cable categories: fio_solido_750v, cabo_uni_750v, cabo_uni_1kv, cabo_multi_1kv");
    std::process::exit(1);
}

fn find_arg(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn find_args(args: &[String], name: &str) -> Vec<String> {
    let mut out = Vec::new();
    for (i, a) in args.iter().enumerate() {
        if a == name {
            if let Some(v) = args.get(i + 1) {
                out.push(v.clone());
            }
        }
    }
    out
}

/// Parsed "category:section:qty[:diameter]" cable spec.
#[derive(Debug, Clone, PartialEq)]
struct CableSpec {
    category: String,
    section: f64,
    quantity: u32,
    diameter: Option<f64>,
}

fn parse_cable_spec(spec: &str) -> Result<CableSpec, String> {
    let parts: Vec<&str> = spec.split(':').collect();
    if parts.len() < 3 || parts.len() > 4 {
        return Err(format!(
            "bad cable spec '{}': expected category:section:qty[:diameter]",
            spec
        ));
    }
    let section: f64 = parts[1]
        .parse()
        .map_err(|_| format!("bad section in '{}'", spec))?;
    let quantity: u32 = parts[2]
        .parse()
        .map_err(|_| format!("bad quantity in '{}'", spec))?;
    let diameter = match parts.get(3) {
        Some(d) => Some(d.parse().map_err(|_| format!("bad diameter in '{}'", spec))?),
        None => None,
    };
    Ok(CableSpec {
        category: parts[0].to_string(),
        section,
        quantity,
        diameter,
    })
}

fn build_cable_list(specs: &[CableSpec]) -> Result<CableList, String> {
    let mut list = CableList::new();
    for spec in specs {
        let category = category_by_id(&spec.category)
            .ok_or_else(|| format!("unknown cable category '{}'", spec.category))?;
        let draft = draft_cable(category, spec.section, spec.quantity, spec.diameter)
            .ok_or_else(|| {
                format!(
                    "category '{}' has no {}mm² preset",
                    spec.category, spec.section
                )
            })?;
        list.add(draft).map_err(|e| e.to_string())?;
    }
    Ok(list)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        usage();
    }

    let config_path = find_arg(&args, "--config").unwrap_or_else(|| "raceway.toml".to_string());
    let cfg = Config::load(Path::new(&config_path));

    let type_key = find_arg(&args, "--type")
        .or_else(|| cfg.get("raceway.type").map(String::from))
        .unwrap_or_else(|| "tray".to_string());
    let raceway_type = match RacewayType::from_key(&type_key) {
        Some(t) => t,
        None => {
            eprintln!("Unknown raceway type '{}'", type_key);
            usage();
        }
    };

    let reserve = find_arg(&args, "--reserve")
        .and_then(|s| s.parse().ok())
        .or_else(|| cfg.get_f64("raceway.reserve"))
        .unwrap_or(DEFAULT_RESERVE);
    if !(0.0..=50.0).contains(&reserve) {
        eprintln!("Reserve must be between 0 and 50 percent (got {})", reserve);
        std::process::exit(1);
    }

    let ticks = find_arg(&args, "--ticks")
        .and_then(|s| s.parse().ok())
        .or_else(|| cfg.get_u64("raceway.ticks").map(|v| v as usize))
        .unwrap_or(DEFAULT_TICKS);
    let seed = find_arg(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .or_else(|| cfg.get_u64("raceway.seed"))
        .unwrap_or(DEFAULT_SEED);
    let export_path = find_arg(&args, "--export")
        .or_else(|| cfg.get("raceway.export").map(String::from))
        .unwrap_or_else(|| "raceway.svg".to_string());
    let override_id =
        find_arg(&args, "--size").or_else(|| cfg.get("raceway.size").map(String::from));

    // Bill of materials: config entries in file order first, then CLI args.
    let mut specs = Vec::new();
    for (key, value) in cfg.section_values("cables") {
        match parse_cable_spec(&value) {
            Ok(spec) => specs.push(spec),
            Err(e) => {
                eprintln!("Config cable '{}': {}", key, e);
                std::process::exit(1);
            }
        }
    }
    for value in find_args(&args, "--cable") {
        match parse_cable_spec(&value) {
            Ok(spec) => specs.push(spec),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }

    let list = match build_cable_list(&specs) {
        Ok(list) => list,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let result = perform_calculations(list.cables(), reserve);
    if result.total_cable_count == 0 {
        eprintln!("No cables given; nothing to size. Add --cable or a [cables] section.");
        return;
    }

    // min_required_area > 0 here, so a suggestion always exists.
    let ideal = match suggest_commercial_size(result.min_required_area, raceway_type) {
        Some(size) => size,
        None => {
            eprintln!("Empty size catalog for {}", raceway_type.label());
            std::process::exit(1);
        }
    };

    // Manual override: any catalog id replaces the ideal size for the
    // simulation; the ideal suggestion itself is unchanged.
    let active: &CommercialSize = match &override_id {
        Some(id) => match size_by_id(raceway_type, id) {
            Some(size) => size,
            None => {
                eprintln!(
                    "No {} size with id '{}'; using the suggested {}",
                    raceway_type.label(),
                    id,
                    ideal.label
                );
                ideal
            }
        },
        None => ideal,
    };

    print_report(&list, &result, raceway_type, reserve, ideal, active);

    // Settle the packing layout and export it.
    let scale = svg::fit_scale(&active.dims);
    let container = svg::container_for(&active.dims, scale);
    let mut rng = Lcg::new(seed);
    let nodes = expand_cables(list.cables(), scale, &mut rng);
    let mut sim = LayoutSim::new(container, nodes, seed);
    sim.run(ticks);

    let document = svg::render(&sim, active);
    if let Err(e) = std::fs::write(&export_path, document) {
        eprintln!("Failed to write {}: {}", export_path, e);
        std::process::exit(1);
    }
    eprintln!();
    eprintln!("Layout ({} ticks) written to {}", ticks, export_path);
}

fn print_report(
    list: &CableList,
    result: &raceway_core::CalculationResult,
    raceway_type: RacewayType,
    reserve: f64,
    ideal: &CommercialSize,
    active: &CommercialSize,
) {
    let compliance = assess_compliance(result, active);

    eprintln!("Raceway sizing (NBR 5410)");
    eprintln!("  Type:            {}", raceway_type.label());
    for cable in list.cables() {
        eprintln!(
            "  Cable:           {}x {} (Ø {:.1}mm)",
            cable.quantity, cable.name, cable.diameter
        );
    }
    eprintln!("  Conductors:      {}", result.total_cable_count);
    eprintln!("  Cable area:      {:.2} mm²", result.total_cable_area);
    eprintln!("  Fill-rate limit: {:.0}%", result.fill_rate_limit * 100.0);
    eprintln!("  Reserve:         {:.0}%", reserve);
    eprintln!("  Required area:   {:.2} mm²", result.min_required_area);
    if raceway_type == RacewayType::Conduit {
        eprintln!("  Required Ø:      {:.1} mm", result.min_required_diameter());
    }

    eprintln!();
    match ideal.ref_code {
        Some(code) => eprintln!("  Suggested size:  {} ({})", ideal.label, code),
        None => eprintln!("  Suggested size:  {}", ideal.label),
    }
    if ideal.area < result.min_required_area {
        eprintln!(
            "  WARNING: requirement exceeds the largest catalog size ({:.0} mm²)",
            ideal.area
        );
    }
    if active.id != ideal.id {
        eprintln!("  Simulated size:  {} (manual override)", active.label);
    }
    eprintln!(
        "  Occupation:      {:.1}% of {:.2} mm² (max {:.0}%)",
        compliance.occupation * 100.0,
        active.area,
        compliance.limit * 100.0
    );
    eprintln!("  Free area:       {:.2} mm²", compliance.free_area);
    eprintln!(
        "  Compliance:      {}",
        if compliance.compliant { "OK" } else { "NOT COMPLIANT" }
    );
}
