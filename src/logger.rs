use chrono::Utc;
use colored::*;
use log::{Level, Metadata, Record};
use once_cell::sync::Lazy;
use std::sync::Mutex;

static CONSOLE_LOGGER: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::new);

pub fn init() -> Result<(), String> {
    init_with_config(LoggerConfig::default())
}

pub fn init_with_config(config: LoggerConfig) -> Result<(), String> {
    CONSOLE_LOGGER.update_config(config.clone());

    if let Err(e) = log::set_logger(&*CONSOLE_LOGGER) {
        return Err(format!("Failed to set logger: {:?}", e));
    }

    log::set_max_level(config.min_level.to_level_filter());
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn color(&self) -> Color {
        match self {
            LogLevel::Trace => Color::Cyan,
            LogLevel::Debug => Color::Blue,
            LogLevel::Info => Color::Green,
            LogLevel::Warn => Color::Yellow,
            LogLevel::Error => Color::Red,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            LogLevel::Trace => "🔍",
            LogLevel::Debug => "🐛",
            LogLevel::Info => "💡",
            LogLevel::Warn => "⚠️",
            LogLevel::Error => "❌",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }

    pub fn from_log_level(level: Level) -> Self {
        match level {
            Level::Trace => LogLevel::Trace,
            Level::Debug => LogLevel::Debug,
            Level::Info => LogLevel::Info,
            Level::Warn => LogLevel::Warn,
            Level::Error => LogLevel::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    pub use_colors: bool,
    pub use_emojis: bool,
    pub show_timestamps: bool,
    pub show_module: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            min_level: LogLevel::Info,
            use_colors: true,
            use_emojis: true,
            show_timestamps: true,
            show_module: false,
        }
    }
}

impl LoggerConfig {
    pub fn development() -> Self {
        LoggerConfig {
            min_level: LogLevel::Debug,
            show_module: true,
            ..Default::default()
        }
    }

    pub fn production() -> Self {
        LoggerConfig {
            min_level: LogLevel::Info,
            use_colors: false,
            use_emojis: false,
            show_timestamps: true,
            show_module: true,
        }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }
}

struct ConsoleLogger {
    config: Mutex<LoggerConfig>,
}

impl ConsoleLogger {
    fn new() -> Self {
        ConsoleLogger {
            config: Mutex::new(LoggerConfig::default()),
        }
    }

    fn update_config(&self, config: LoggerConfig) {
        if let Ok(mut guard) = self.config.lock() {
            *guard = config;
        }
    }

    fn format_line(&self, record: &Record, config: &LoggerConfig) -> String {
        let level = LogLevel::from_log_level(record.level());
        let mut parts = Vec::new();

        if config.show_timestamps {
            let ts = Utc::now().format("%H:%M:%S%.3f").to_string();
            if config.use_colors {
                parts.push(ts.dimmed().to_string());
            } else {
                parts.push(ts);
            }
        }

        let tag = if config.use_emojis {
            format!("{} {:5}", level.emoji(), level.as_str())
        } else {
            format!("{:5}", level.as_str())
        };
        if config.use_colors {
            parts.push(tag.color(level.color()).bold().to_string());
        } else {
            parts.push(tag);
        }

        if config.show_module {
            let module = record.module_path().unwrap_or("unknown");
            if config.use_colors {
                parts.push(module.dimmed().to_string());
            } else {
                parts.push(module.to_string());
            }
        }

        parts.push(record.args().to_string());
        parts.join(" ")
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let min_level = self
            .config
            .lock()
            .map(|c| c.min_level)
            .unwrap_or(LogLevel::Info);
        LogLevel::from_log_level(metadata.level()) >= min_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let config = match self.config.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => return,
        };

        let line = self.format_line(record, &config);
        if record.level() <= Level::Warn {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    fn flush(&self) {}
}
