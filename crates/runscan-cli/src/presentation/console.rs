use crate::types::LogLevel;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::fmt::Display;

/// Leveled status lines on stderr.
pub struct Console {
    level: LogLevel,
    color: bool,
}

impl Console {
    /// Colour only when stderr is a terminal.
    pub fn stderr(level: LogLevel) -> Self {
        Self {
            level,
            color: std::io::stderr().is_terminal(),
        }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.level
    }

    pub fn error(&self, msg: impl Display) {
        self.emit(LogLevel::Error, msg);
    }

    pub fn warn(&self, msg: impl Display) {
        self.emit(LogLevel::Warn, msg);
    }

    pub fn info(&self, msg: impl Display) {
        self.emit(LogLevel::Info, msg);
    }

    pub fn debug(&self, msg: impl Display) {
        self.emit(LogLevel::Debug, msg);
    }

    /// Info line with a success mark.
    pub fn success(&self, msg: impl Display) {
        if !self.enabled(LogLevel::Info) {
            return;
        }
        if self.color {
            eprintln!("{} {}", "✓".green().bold(), msg);
        } else {
            eprintln!("✓ {}", msg);
        }
    }

    fn emit(&self, level: LogLevel, msg: impl Display) {
        if !self.enabled(level) {
            return;
        }

        let tag = match level {
            LogLevel::Error => "error:",
            LogLevel::Warn => "warning:",
            LogLevel::Info => {
                eprintln!("{}", msg);
                return;
            }
            LogLevel::Debug => "debug:",
        };

        if !self.color {
            eprintln!("{} {}", tag, msg);
            return;
        }

        match level {
            LogLevel::Error => eprintln!("{} {}", tag.red().bold(), msg),
            LogLevel::Warn => eprintln!("{} {}", tag.yellow().bold(), msg),
            _ => eprintln!("{} {}", tag.dimmed(), msg.dimmed()),
        }
    }
}
