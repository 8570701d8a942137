//! Logging setup for the CLI.

use prism_core::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber from configuration.
///
/// CLI flags override the config file: `--verbose` forces debug-level
/// output and `--json-logs` forces the JSON format. `RUST_LOG` wins over
/// both when set. Logs go to stderr so stdout stays clean for pipelines.
pub fn init_from_config(config: &Config, verbose: bool, json_logs: bool) {
    let default_level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("prism={0},prism_core={0}", default_level)));

    let use_json = json_logs || config.logging.format == "json";

    if use_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
