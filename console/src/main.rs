//! Console entry-point: loads configuration, composes the console, and
//! replays an optional intent script, logging the read models as it goes.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use admin_console::domain::Notifier;
use admin_console::{Console, ConsoleSettings, Intent};
use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `admin-console` command arguments.
///
/// Console configuration is read from `ADMIN_CONSOLE_*` environment
/// variables and configuration files.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "admin-console",
    about = "Compose the admin console core and replay intents against it",
    version
)]
struct CliArgs {
    /// JSON array of intents applied in order.
    #[arg(long = "script", value_name = "path")]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    let config = ConsoleSettings::load_from_iter([OsString::from("admin-console")])
        .map_err(|err| eyre!("failed to load console configuration: {err}"))?;
    init_tracing(config.json_logs());

    let mut console = Console::from_config(&config).wrap_err("invalid console configuration")?;
    if let Some(path) = args.script.as_deref() {
        for intent in load_script(path)? {
            match console.dispatch(intent) {
                Ok(outcome) => info!(outcome = ?outcome, "intent applied"),
                Err(err) => warn!(error = %err, "intent failed"),
            }
            for notice in console.notifier_mut().drain() {
                info!(message = %notice.message, severity = ?notice.severity, "notice");
            }
        }
    }
    log_views(&console)
}

fn init_tracing(json: bool) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

fn load_script(path: &Path) -> Result<Vec<Intent>> {
    let raw = fs::read(path).with_context(|| format!("failed to read script at {path:?}"))?;
    serde_json::from_slice(&raw).with_context(|| format!("failed to parse script at {path:?}"))
}

fn log_views<N: Notifier>(console: &Console<N>) -> Result<()> {
    let users = serde_json::to_string(&console.user_list()).wrap_err("serialise user list")?;
    let overview = serde_json::to_string(&console.overview()).wrap_err("serialise overview")?;
    let dialog = serde_json::to_string(&console.dialog_view()).wrap_err("serialise dialog")?;
    info!(users = %users, "user list");
    info!(overview = %overview, "overview");
    info!(dialog = %dialog, "dialog");
    Ok(())
}
