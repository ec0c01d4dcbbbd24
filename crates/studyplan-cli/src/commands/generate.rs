use std::path::PathBuf;

use clap::Args;
use studyplan_core::{Config, ScheduleGenerator, ScheduleSnapshot};

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to a JSON preferences record
    prefs: PathBuf,
    /// Shuffle seed (overrides config)
    #[arg(long)]
    seed: Option<u64>,
    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
    /// Also write a timestamped snapshot to this path
    #[arg(long)]
    save: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(&args.prefs)?;

    let mut config = Config::load_or_default().generator;
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    tracing::debug!(prefs = %args.prefs.display(), seed = ?config.seed, "generating schedule");
    let report = ScheduleGenerator::with_config(config).generate_from_json(&content)?;

    if let Some(path) = &args.save {
        ScheduleSnapshot::stamp(&report.schedule).save_to(path)?;
        eprintln!("snapshot saved to {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.schedule.render_text());
        for fallback in &report.fallbacks {
            eprintln!("note: {fallback}");
        }
    }
    Ok(())
}
