use crate::config::toml_config::LogFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "course_catalog=info,tower_http=info";
const VERBOSE_DIRECTIVES: &str = "course_catalog=debug,tower_http=debug,info";

fn build_filter(level: Option<&str>, verbose: bool) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    resolve_filter(from_env.as_deref(), level, verbose)
}

/// Precedence: a valid `RUST_LOG`, then `--verbose`, then the configured
/// level, then the crate default. An unparsable level falls back to the
/// default; `TomlConfig::validate` reports it once logging is up.
fn resolve_filter(from_env: Option<&str>, level: Option<&str>, verbose: bool) -> EnvFilter {
    if let Some(filter) = from_env
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
    {
        return filter;
    }
    if verbose {
        return EnvFilter::new(VERBOSE_DIRECTIVES);
    }
    level
        .and_then(|level| EnvFilter::try_new(format!("course_catalog={},tower_http={}", level, level)).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// RUST_LOG 優先；其次 verbose (debug)，再來設定檔的 level
pub fn init_logger(format: LogFormat, level: Option<&str>, verbose: bool) {
    match format {
        LogFormat::Compact => init_compact_logger(level, verbose),
        LogFormat::Json => init_json_logger(level, verbose),
    }
}

pub fn init_compact_logger(level: Option<&str>, verbose: bool) {
    tracing_subscriber::registry()
        .with(build_filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(level: Option<&str>, verbose: bool) {
    tracing_subscriber::registry()
        .with(build_filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // JSON lines for container log collection (CloudWatch)
        )
        .init();
}
