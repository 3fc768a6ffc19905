use crate::cli::{DpsArgs, RankArgs};
use alien_bounty::bounty::{
    compute_cost_per_second, damage_breakdown, BountyEvaluator, DamageBreakdown, RewardResult,
    WeaponClass,
};
use alien_bounty::catalog::{validate_efficiency, BountyInputs, LoadoutSelection, WeaponCatalog};
use alien_bounty::config::AppConfig;
use alien_bounty::error::AppError;
use alien_bounty::report::{write_report_to_path, ReportFormat};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub(crate) fn run_rank(config: &AppConfig, args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        data,
        output,
        format,
        efficiency,
        top,
        quiet,
    } = args;

    let paths = data.resolve(&config.data);
    let inputs = BountyInputs::load(&paths)?;
    let efficiency = match efficiency {
        Some(value) => validate_efficiency(value)?,
        None => inputs.efficiency,
    };

    let evaluator = BountyEvaluator::new(&inputs.loadout, efficiency);
    for (tier, low_tier) in [("low-tier", true), ("high-tier", false)] {
        if evaluator.dps_for(low_tier) <= 0.0 {
            warn!(tier, "loadout deals no damage; these aliens cannot be killed");
        }
    }

    let results = evaluator.rank(&inputs.targets);
    let format = ReportFormat::from(format);
    let output = output.unwrap_or_else(|| default_output(config, format));
    write_report_to_path(&output, format, &results)?;

    if let Some(best) = results.first() {
        info!(alien = %best.target_name, uri_per_hour = best.yield_per_hour, "best bounty");
    }

    if !quiet {
        render_rankings(&results, top, efficiency, &output);
    }

    Ok(())
}

pub(crate) fn run_dps(config: &AppConfig, args: DpsArgs) -> Result<(), AppError> {
    let paths = args.data.resolve(&config.data);
    let catalog = WeaponCatalog::from_path(&paths.weapons)?;
    let LoadoutSelection {
        loadout,
        efficiency,
    } = LoadoutSelection::from_path(&paths.loadout, &catalog)?;

    let low = damage_breakdown(&loadout, true);
    let high = damage_breakdown(&loadout, false);

    println!("Loadout damage");
    println!(
        "{} lasers, launcher {}, efficiency {:.2}",
        loadout.beam_count(),
        loadout.launcher.name,
        efficiency
    );
    render_breakdown("Low-tier aliens", &low);
    render_breakdown("High-tier aliens", &high);
    println!("\nUridium cost: {:.3} per second", compute_cost_per_second(&loadout));

    Ok(())
}

fn default_output(config: &AppConfig, format: ReportFormat) -> PathBuf {
    match format {
        ReportFormat::Csv => config.output.clone(),
        ReportFormat::Json => config.output.with_extension("json"),
    }
}

fn render_breakdown(heading: &str, breakdown: &DamageBreakdown) {
    println!("\n{heading}");
    for class in WeaponClass::ordered() {
        println!("- {}: {:.1}", class.label(), breakdown.subtotal(class));
    }
    println!("- Effective DPS: {:.1}", breakdown.total());
}

fn render_rankings(results: &[RewardResult], top: Option<usize>, efficiency: f64, output: &Path) {
    println!("Alien bounty ranking (efficiency {:.2})", efficiency);
    println!("Report written to {}", output.display());

    if results.is_empty() {
        println!("\nNo aliens configured");
        return;
    }

    let shown = top.unwrap_or(results.len()).min(results.len());
    println!(
        "\n{:<4} {:<20} {:>8} {:>10} {:>12} {:>14}",
        "#", "Alien", "ttk", "raw uri", "uri/kill", "uri/hour"
    );
    for (rank, result) in results.iter().take(shown).enumerate() {
        println!(
            "{:<4} {:<20} {:>8.1} {:>10.1} {:>12.2} {:>14.0}",
            rank + 1,
            result.target_name,
            result.time_to_kill,
            result.raw_reward,
            result.net_reward_per_kill,
            result.yield_per_hour
        );
    }

    if shown < results.len() {
        println!("... {} more in the report", results.len() - shown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alien_bounty::config::{AppEnvironment, DataPaths, TelemetryConfig};

    fn config() -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            data: DataPaths::default(),
            output: PathBuf::from("reports/output.csv"),
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
        }
    }

    #[test]
    fn json_reports_default_to_json_extension() {
        let config = config();
        assert_eq!(
            default_output(&config, ReportFormat::Csv),
            PathBuf::from("reports/output.csv")
        );
        assert_eq!(
            default_output(&config, ReportFormat::Json),
            PathBuf::from("reports/output.json")
        );
    }

    #[test]
    fn invalid_efficiency_override_is_rejected_before_writing() {
        let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data");
        let mut config = config();
        config.data = DataPaths {
            weapons: data_dir.join("weapons.json"),
            aliens: data_dir.join("aliens.json"),
            loadout: data_dir.join("loadout.json"),
        };
        config.output = PathBuf::from("./never-written.csv");

        let args = RankArgs {
            efficiency: Some(0.0),
            quiet: true,
            ..RankArgs::default()
        };
        let error = run_rank(&config, args).expect_err("efficiency rejected");

        assert!(matches!(error, AppError::Catalog(_)));
        assert!(!config.output.exists());
    }
}
