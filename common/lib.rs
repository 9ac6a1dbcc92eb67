pub mod trace {
    use colored::Colorize;
    use regex::Regex;
    use std::io::Write;
    use std::time::Instant;

    pub const DEFAULT_FILTER: &str = "(.*)";

    /// Installs the process-wide logger. `maybe_filter` is a regex whose first
    /// capture group is printed in place of the record target; records whose
    /// target does not match are printed with a `<target>` placeholder.
    ///
    /// Returns false when a logger was already installed.
    pub fn init(maybe_filter: Option<String>) -> bool {
        let launch_time = Instant::now();
        let filter = maybe_filter.unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let target_regex = Regex::new(filter.as_str())
            .unwrap_or_else(|_| Regex::new(DEFAULT_FILTER).expect("default filter is valid"));

        let mut binding = env_logger::builder();
        let builder = binding.format(move |buf, record| {
            let target_str = match target_regex
                .captures(record.target())
                .and_then(|c| c.get(1).or_else(|| c.get(0)))
            {
                Some(target) => target.as_str().to_string(),
                None => return writeln!(buf, "<target> {}", record.args()),
            };

            let elapsed = launch_time.elapsed().as_millis() as f32 / 1000.;

            let level_str = match record.level() {
                log::Level::Error => "ERROR".red().bold(),
                log::Level::Warn => "WARN".yellow().bold(),
                log::Level::Info => "INFO".green().bold(),
                log::Level::Debug => "DEBUG".cyan(),
                log::Level::Trace => "TRACE".normal(),
            };

            writeln!(
                buf,
                "{:<8}{:<6}{:<15}{}",
                elapsed.to_string().blue().bold(),
                level_str,
                target_str.red().bold(),
                record.args(),
            )
        });
        builder.try_init().is_ok()
    }
}
