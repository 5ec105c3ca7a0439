use orbitsim::{ScenarioConfig, Simulation, ViewerConfig};
use orbitsim::{run_2d, run_headless, bench_step};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Sun and planets under Newtonian gravity")]
struct Args {
    /// Scenario file under `scenarios/`, built-in inner solar system if omitted
    #[arg(short, long)]
    file: Option<String>,

    /// Run this many steps without a window and print the final state
    #[arg(long, value_name = "STEPS")]
    headless: Option<usize>,

    /// Time steps for both update orders
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader).with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (mut simulation, viewer) = match &args.file {
        Some(file_name) => {
            let scenario_cfg = load_scenario_from_yaml(file_name)?;
            let simulation = scenario_cfg.build_simulation().context("invalid scenario")?;
            (simulation, scenario_cfg.viewer)
        }
        None => (Simulation::solar_system(), ViewerConfig::default()),
    };

    if args.bench {
        bench_step(&simulation, 10_000)?;
    } else if let Some(steps) = args.headless {
        run_headless(&mut simulation, steps)?;
    } else {
        run_2d(simulation, viewer);
    }

    Ok(())
}
