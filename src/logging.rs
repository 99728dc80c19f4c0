//! Diagnostic output on stderr.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, or `debug` with
/// `--verbose`. Output goes to stderr so stdout carries only the message
/// preview and prompts.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .without_time()
        .with_target(false)
        .try_init();
}
