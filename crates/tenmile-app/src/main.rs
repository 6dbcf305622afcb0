mod app_state;
mod cli;
mod view;

use std::process::ExitCode;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use tenmile_config::{config_to_json, load_config, resolve_session_id};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// `RUST_LOG` wins, then `--log-level`. `None` leaves the choice to config.
fn explicit_filter(cli_level: Option<&str>) -> Option<EnvFilter> {
    EnvFilter::try_from_default_env()
        .ok()
        .or_else(|| cli_level.and_then(|level| EnvFilter::try_new(level).ok()))
}

/// Install the stderr subscriber before anything logs. Returns a handle for
/// swapping in the configured level when no explicit filter was given.
fn init_logging(explicit: Option<EnvFilter>) -> Option<FilterHandle> {
    let pinned = explicit.is_some();
    let (filter, handle) = reload::Layer::new(explicit.unwrap_or_else(|| EnvFilter::new("info")));

    // stderr, so logs never interleave with the redrawn view on stdout.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    (!pinned).then_some(handle)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();
    let filter_handle = init_logging(explicit_filter(args.log_level.as_deref()));

    let config = match load_config(args.config.as_deref(), args.endpoint.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(handle) = filter_handle {
        if let Err(e) = handle.reload(EnvFilter::new(config.logging.level.as_directive())) {
            tracing::warn!("could not apply configured log level: {e}");
        }
    }

    if args.print_config {
        println!("{}", config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    let session_id = resolve_session_id(
        args.session_id.as_deref(),
        args.query.as_deref(),
        &config.connection,
    );
    tracing::info!(
        "Tenmile v{} starting (session {session_id})",
        env!("CARGO_PKG_VERSION")
    );

    let app = app_state::ChatApp::new(config, session_id);
    match app.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("session ended with error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_flag_pins_the_filter() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        assert!(explicit_filter(Some("debug")).is_some());
        assert!(explicit_filter(Some("tenmile=loudest")).is_none());
    }

    #[test]
    fn without_flags_the_config_level_decides() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        assert!(explicit_filter(None).is_none());
    }
}
