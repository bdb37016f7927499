use shared::LogLevel;
use std::cell::Cell;

thread_local! {
    static MAX_LEVEL: Cell<LogLevel> = Cell::new(LogLevel::Info);
}

/// Component-tagged logging to the browser console.
pub struct Logger;

impl Logger {
    pub fn init(level: LogLevel) {
        MAX_LEVEL.with(|max| max.set(level));
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Error, component, message);
    }

    fn enabled(level: LogLevel) -> bool {
        MAX_LEVEL.with(|max| level >= max.get())
    }

    fn log(level: LogLevel, component: &str, message: &str) {
        if !Self::enabled(level) {
            return;
        }
        let line = format!("[{}] {}", component, message);
        match level {
            LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }
    }
}
