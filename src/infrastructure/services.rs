//! Browser implementations of the domain platform abstractions.

use std::rc::Rc;

use gloo_timers::callback::Interval;

use crate::application::auto_refresh::{IntervalGuard, IntervalScheduler};
use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};

/// Console logger for the WASM environment
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    fn format_entry(&self, entry: &LogEntry) -> String {
        format!(
            "[{}] {} {} | {}",
            BrowserTimeProvider::new().format_timestamp(entry.timestamp),
            entry.level,
            entry.component,
            entry.message
        )
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }

        let formatted = self.format_entry(&entry);
        match entry.level {
            LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&formatted.into()),
            LogLevel::Info => web_sys::console::info_1(&formatted.into()),
            LogLevel::Warn => web_sys::console::warn_1(&formatted.into()),
            LogLevel::Error => web_sys::console::error_1(&formatted.into()),
        }
    }
}

/// Wall clock backed by `Date`
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn format_timestamp(&self, timestamp: f64) -> String {
        let date = js_sys::Date::new(&timestamp.into());
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}

/// Repeating timers backed by `setInterval`
pub struct BrowserIntervalScheduler;

impl IntervalScheduler for BrowserIntervalScheduler {
    fn repeat(&self, interval_ms: u32, callback: Rc<dyn Fn()>) -> IntervalGuard {
        let interval = Interval::new(interval_ms, move || callback());
        IntervalGuard::new(move || {
            interval.cancel();
        })
    }
}
