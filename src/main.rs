use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use team_analysis::{AnalysisConfig, AnalysisError, AnalysisService};

#[derive(Debug, Parser)]
#[command(name = "team-analysis", about = "Type synergy and evolution analysis for creature rosters")]
struct Cli {
    /// Config file (RON); falls back to TEAM_ANALYSIS_CONFIG, then defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of the text report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Offense/defense synergy for a profile's active party
    Synergy { profile_id: String },
    /// Evolution options for a single creature
    Evolutions { creature_id: String },
    /// List the profiles in the loaded roster data
    Profiles,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) if e.is_client_error() => {
            eprintln!("{}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, AnalysisError> {
    let config = AnalysisConfig::resolve(cli.config.as_deref())?;
    let service = AnalysisService::from_config(&config)?;

    let output = match &cli.command {
        Command::Synergy { profile_id } => {
            let report = service.roster_synergy(profile_id)?;
            if cli.json {
                to_json(&report)
            } else {
                report.to_string()
            }
        }
        Command::Evolutions { creature_id } => {
            let report = service.evolution_options(creature_id)?;
            if cli.json {
                to_json(&report)
            } else {
                report.to_string()
            }
        }
        Command::Profiles => {
            let ids = service.store().profile_ids();
            if cli.json {
                to_json(&ids)
            } else {
                ids.join("\n")
            }
        }
    };
    Ok(output)
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}
