use log::LevelFilter;

/// Maps `-v` repetitions to a level: none is `warn`, then `info`, `debug`, `trace`.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs `env_logger`. `RUST_LOG`, when set, overrides the verbosity flag.
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for(verbosity)).format_timestamp(None);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    // a second init (e.g. from tests) keeps the first logger
    let _ = builder.try_init();
}
