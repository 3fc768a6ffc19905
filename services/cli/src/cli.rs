use crate::rank::{run_dps, run_rank};
use alien_bounty::config::{AppConfig, DataPaths};
use alien_bounty::error::AppError;
use alien_bounty::report::ReportFormat;
use alien_bounty::telemetry;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "alien-bounty",
    about = "Rank aliens by net uridium per hour for a ship loadout",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate every alien, write the ranked report and print it (default command)
    Rank(RankArgs),
    /// Show the damage and uridium cost rates of the configured loadout
    Dps(DpsArgs),
}

#[derive(Args, Debug, Default, Clone)]
pub(crate) struct DataArgs {
    /// Weapon catalog document (overrides APP_WEAPONS_FILE)
    #[arg(long)]
    pub(crate) weapons: Option<PathBuf>,
    /// Alien roster document (overrides APP_ALIENS_FILE)
    #[arg(long)]
    pub(crate) aliens: Option<PathBuf>,
    /// Loadout document (overrides APP_LOADOUT_FILE)
    #[arg(long)]
    pub(crate) loadout: Option<PathBuf>,
}

impl DataArgs {
    pub(crate) fn resolve(&self, defaults: &DataPaths) -> DataPaths {
        DataPaths {
            weapons: self
                .weapons
                .clone()
                .unwrap_or_else(|| defaults.weapons.clone()),
            aliens: self
                .aliens
                .clone()
                .unwrap_or_else(|| defaults.aliens.clone()),
            loadout: self
                .loadout
                .clone()
                .unwrap_or_else(|| defaults.loadout.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Csv => ReportFormat::Csv,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct RankArgs {
    #[command(flatten)]
    pub(crate) data: DataArgs,
    /// Report destination (overrides APP_OUTPUT_FILE)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub(crate) format: OutputFormat,
    /// Uptime derating in (0, 1], replacing the loadout's own value
    #[arg(long)]
    pub(crate) efficiency: Option<f64>,
    /// Only print the best N aliens
    #[arg(long)]
    pub(crate) top: Option<usize>,
    /// Skip the printed ranking
    #[arg(long)]
    pub(crate) quiet: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DpsArgs {
    #[command(flatten)]
    pub(crate) data: DataArgs,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = config.environment.label(), "alien bounty ranker starting");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Rank(RankArgs::default()));

    match command {
        Command::Rank(args) => run_rank(&config, args),
        Command::Dps(args) => run_dps(&config, args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_ranking() {
        let cli = Cli::try_parse_from(["alien-bounty"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn rank_flags_are_parsed() {
        let cli = Cli::try_parse_from([
            "alien-bounty",
            "rank",
            "--loadout",
            "fleet/pvp.json",
            "--format",
            "json",
            "--efficiency",
            "0.6",
            "--top",
            "5",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Rank(args)) => {
                assert_eq!(args.data.loadout, Some(PathBuf::from("fleet/pvp.json")));
                assert_eq!(args.format, OutputFormat::Json);
                assert_eq!(args.efficiency, Some(0.6));
                assert_eq!(args.top, Some(5));
                assert!(!args.quiet);
            }
            other => panic!("expected rank command, got {other:?}"),
        }
    }

    #[test]
    fn data_overrides_fall_back_to_configured_paths() {
        let args = DataArgs {
            aliens: Some(PathBuf::from("event/aliens.json")),
            ..DataArgs::default()
        };
        let paths = args.resolve(&DataPaths::default());

        assert_eq!(paths.aliens, PathBuf::from("event/aliens.json"));
        assert_eq!(paths.weapons, DataPaths::default().weapons);
        assert_eq!(paths.loadout, DataPaths::default().loadout);
    }
}
