/*!
 * Structured Tracing
 * tracing-subscriber setup shared by the supervisor and workers
 *
 * Environment variables:
 * - RUST_LOG: set log level (default: info)
 * - GRADER_TRACE_JSON: enable JSON output (default: false)
 */

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured tracing for a binary.
///
/// Workers run with an empty environment, so they fall back to the
/// defaults: info level, human-readable output.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("GRADER_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).compact())
            .init();
    }
}
