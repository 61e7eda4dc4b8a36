use anyhow::Result;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 追加式文件日志：info.log 记查询，error.log 记失败。
/// 每行格式 `YYYY-MM-DD HH:MM:SS - {message}`。
pub struct Logger {
    info_log: PathBuf,
    error_log: PathBuf,
}

impl Logger {
    /// 在 ~/.dict/log 下建立日志文件
    pub fn new(dict_dir: &Path) -> Result<Logger> {
        let log_dir = dict_dir.join("log");
        std::fs::create_dir_all(&log_dir)?;
        Ok(Logger {
            info_log: log_dir.join("info.log"),
            error_log: log_dir.join("error.log"),
        })
    }

    pub fn log_info(&self, message: &str) -> Result<()> {
        append_line(&self.info_log, message)
    }

    pub fn log_error(&self, message: &str) -> Result<()> {
        append_line(&self.error_log, message)
    }
}

fn append_line(path: &Path, message: &str) -> Result<()> {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{} - {}", timestamp, message)?;
    Ok(())
}
