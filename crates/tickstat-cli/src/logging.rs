use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber for `directives`, falling back to `warn` when
/// they do not parse.
pub fn init(directives: &str) {
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
