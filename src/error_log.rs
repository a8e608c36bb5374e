use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn new(path: impl AsRef<Path>) -> ErrorLog {
        ErrorLog {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn append(&self, message: &str) -> std::io::Result<()> {
        let stamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
        let entry = format!("\nError:\n{} UTC\n{}\n", stamp, message);

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        file.write_all(entry.as_bytes())
    }
}
