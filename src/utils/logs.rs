use tracing::Level;

// maps the number of -v flags to a max level, warnings only by default
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

// logs go to stderr so they never interleave with the menu on stdout
pub fn setup_tracing(level: Level, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder
            .with_ansi(false)
            .json()
            .init();
    } else {
        builder.init();
    }
}
