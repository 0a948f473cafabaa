use log::LevelFilter;

/// Install the env_logger backend. Level defaults to `info`; `RUST_LOG`
/// overrides it. Safe to call more than once.
pub fn init() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    let result = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_millis()
        .try_init();
    if result.is_ok() {
        log::debug!("logger initialized (level: {level})");
    }
}
