use crate::session::Session;
use bakery_inventory::config::AppConfig;
use bakery_inventory::error::AppError;
use bakery_inventory::telemetry;
use clap::Parser;
use std::io;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "bakery-inventory",
    about = "Track bakery ingredient stock for the length of one session",
    version
)]
struct Cli {
    /// Override the configured tracing filter (e.g. `debug` or `bakery_inventory=info`)
    #[arg(long, value_parser = non_blank)]
    log_level: Option<String>,
    /// Override the shop name shown above the menu
    #[arg(long, value_parser = non_blank)]
    title: Option<String>,
}

fn non_blank(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("value must not be blank".to_string());
    }
    Ok(trimmed.to_string())
}

impl Cli {
    fn apply(self, config: &mut AppConfig) {
        if let Some(level) = self.log_level {
            config.telemetry.log_level = level;
        }
        if let Some(title) = self.title {
            config.console.title = title;
        }
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    cli.apply(&mut config);

    telemetry::init(&config.telemetry)?;
    info!(?config.environment, title = %config.console.title, "inventory session starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config.console.menu_heading());
    session.run()?;

    info!(
        ingredients = session.inventory().listing().rows().len(),
        "inventory session ended"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakery_inventory::config::{AppEnvironment, ConsoleConfig, TelemetryConfig};
    use clap::CommandFactory;

    fn base_config() -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            telemetry: TelemetryConfig {
                log_level: "warn".to_string(),
            },
            console: ConsoleConfig::default(),
        }
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_loaded_config() {
        let cli = Cli::try_parse_from([
            "bakery-inventory",
            "--log-level",
            "debug",
            "--title",
            " Crumbs ",
        ])
        .expect("flags parse");

        let mut config = base_config();
        cli.apply(&mut config);

        assert_eq!(config.telemetry.log_level, "debug");
        assert_eq!(config.console.menu_heading(), "Crumbs Inventory");
    }

    #[test]
    fn no_flags_keep_loaded_config() {
        let cli = Cli::try_parse_from(["bakery-inventory"]).expect("no flags parse");

        let mut config = base_config();
        cli.apply(&mut config);

        assert_eq!(config.telemetry.log_level, "warn");
        assert_eq!(config.console.title, "Sweet Surrender");
    }

    #[test]
    fn blank_title_is_rejected() {
        assert!(Cli::try_parse_from(["bakery-inventory", "--title", "  "]).is_err());
    }
}
