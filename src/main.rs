use lfsim::{Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(about = "Leapfrog n-body simulation, prints every body's trajectory")]
struct Args {
    /// Scenario YAML; the built-in four-body system runs when omitted
    #[arg(short, long)]
    file_name: Option<PathBuf>,

    /// Write snapshots here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

// relative names that do not exist are looked up in the crate's scenarios/ folder
fn resolve_scenario_path(file_name: &Path) -> PathBuf {
    if file_name.is_absolute() || file_name.exists() {
        return file_name.to_path_buf();
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn load_scenario_config(file_name: Option<&Path>) -> Result<ScenarioConfig> {
    let Some(file_name) = file_name else {
        info!("no scenario file given, using the built-in system");
        return Ok(ScenarioConfig::default());
    };

    let config_path = resolve_scenario_path(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let scenario_cfg = ScenarioConfig::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    info!("loaded scenario {}", config_path.display());
    Ok(scenario_cfg)
}

fn run_to<W: Write>(scenario: &mut Scenario, out: W) -> Result<u64> {
    let mut reporter = scenario.reporter(out);
    scenario.run(&mut reporter).context("failed to write snapshot")?;
    Ok(reporter.lines())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario_cfg = load_scenario_config(args.file_name.as_deref())?;
    let mut scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    let lines = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            run_to(&mut scenario, BufWriter::new(file))?
        }
        None => run_to(&mut scenario, BufWriter::new(io::stdout().lock()))?,
    };

    let sys = &scenario.system;
    info!(
        "finished {} steps, {} snapshots, elapsed time {}",
        scenario.parameters.iterations, lines, sys.t
    );
    debug!(
        "center of mass {:?}, total momentum {:?}, kinetic energy {}",
        sys.center_of_mass(),
        sys.total_momentum(),
        sys.kinetic_energy()
    );

    Ok(())
}
