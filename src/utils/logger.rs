use colored::Colorize;
use env_logger::Builder;
use log::Level;
use std::io::Write;

/// Initialise the logger: dependencies at warn, this crate at info (debug when `verbose`).
/// When `RUST_LOG` is set, its directives replace these defaults entirely (`RUST_LOG=off`
/// silences everything). Safe to call more than once; later calls are ignored.
pub fn setup_logging(verbose: bool) {
    use log::LevelFilter;

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    match std::env::var(env_logger::DEFAULT_FILTER_ENV) {
        Ok(filters) => builder.parse_filters(&filters),
        Err(_) => builder
            .filter_level(LevelFilter::Warn)
            .filter_module(env!("CARGO_PKG_NAME"), level),
    };

    let _ = builder
        .format(|buf, record| {
            let name = env!("CARGO_PKG_NAME");
            let line = match record.level() {
                Level::Error | Level::Warn => {
                    let level_str = match record.level() {
                        Level::Warn => "WARN".yellow(),
                        _ => "ERROR".red(),
                    };
                    let path = record.target().to_string().white();
                    format!("[{} {} {}] {}", name.cyan(), level_str, path, record.args())
                }
                _ => format!("[{}] {}", name.cyan(), record.args()),
            };
            writeln!(buf, "{}", line)
        })
        .try_init();
}
