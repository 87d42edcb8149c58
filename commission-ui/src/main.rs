use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use commission_ui::{app, config::AppConfig, gui, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Sales commission calculator.
///
/// Opens a window showing the commission tiers for a monthly sales target,
/// or prints them with `--print`.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial monthly target, e.g. `40000` or `40.000,00`.
    #[arg(long)]
    target: Option<String>,

    /// Print both tables for the target and exit instead of opening a window.
    #[arg(long)]
    print: bool,

    /// Log filter, overrides the configuration file (e.g. `debug`).
    #[arg(long)]
    log_level: Option<String>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(target) = cli.target {
        config.default_target = target;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = Some(level);
    }
    logging::apply_config(&config.logging)?;

    if cli.print {
        let report = app::build_report(&config.default_target)
            .with_context(|| format!("cannot calculate for target '{}'", config.default_target))?;
        println!("{report}");
        info!(target_text = %config.default_target, "printed commission report");
        return Ok(());
    }

    debug!(target_text = %config.default_target, "starting window");
    gui::run(config);

    Ok(())
}
