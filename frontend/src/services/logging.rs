use log::{Level, LevelFilter, Log, Metadata, Record};

/// Forwards `log` records to the browser console
pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    /// Install the console logger; later calls are ignored
    pub fn init(level: LevelFilter) {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_record(record.level(), record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    // Drop the crate prefix so lines read "calendar: ..." instead of the full path
    let component = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}: {}", level, component, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_uses_last_path_segment() {
        assert_eq!(
            format_record(Level::Warn, "referee_calendar_domain::config_resolver", "waiting"),
            "[WARN] config_resolver: waiting"
        );
        assert_eq!(
            format_record(Level::Info, "sidebar", "ready"),
            "[INFO] sidebar: ready"
        );
    }
}
