use chrono::Utc;
use log::{max_level, Level, Metadata, Record};

pub struct StdLogger;

impl log::Log for StdLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let time_str = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");

            if record.level() <= Level::Warn {
                eprintln!("{0} {1:<8}: {2}", time_str, record.level(), record.args())
            } else {
                println!("{0} {1:<8}: {2}", time_str, record.level(), record.args())
            }
        }
    }

    fn flush(&self) {}
}
