use log::LevelFilter;

/// Initialize the fern dispatcher. Diagnostics go to stderr so stdout stays
/// machine-readable (csv/json/latex are piped into other tools).
pub fn init_logging(level: Option<&str>, color: Option<&str>) {
    match color {
        Some("on") => console::set_colors_enabled(true),
        Some("off") => console::set_colors_enabled(false),
        // Anything else: let console auto-detect the terminal.
        _ => {}
    }

    let level = match level.unwrap_or("info").to_ascii_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            if record.level() == log::Level::Info {
                out.finish(format_args!("{message}"))
            } else {
                out.finish(format_args!("[{}] {message}", record.level()))
            }
        })
        .level(level)
        .chain(std::io::stderr())
        .apply();

    // A second apply() only happens in tests that share a process.
    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {e}");
    }
}
