//! Diagnostic Logging
//!
//! Estimators report what they reject or infer on two channels:
//!
//! 1. The [`log`] facade (feature `log`, enabled with `std`), so a host
//!    with `env_logger` or similar sees every decision.
//! 2. An optional hook injected by the device layer, typically forwarding to
//!    the device's own log so lines show up next to the device that
//!    produced them.
//!
//! Both are side channels only. A missing hook changes nothing, and with
//! `std` a panicking hook is caught so it can never abort a validation.
//!
//! Lines are formatted into a fixed-capacity buffer; overlong lines are
//! truncated rather than allocated.

use alloc::boxed::Box;
use core::fmt::{self, Write};

use crate::constants::buffers::LOG_LINE_CAPACITY;

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_at {
    (warn, $($arg:tt)*) => { log::warn!($($arg)*) };
    (info, $($arg:tt)*) => { log::info!($($arg)*) };
    (debug, $($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_at {
    ($level:ident, $($arg:tt)*) => { () };
}

/// Callback receiving formatted diagnostic lines
pub type LogHook = Box<dyn Fn(&str) + Send>;

/// Severity of a diagnostic line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Routine inference (motion detected, environmental jump accepted)
    Info,
    /// Reading rejected, smoothed or contradicting a correlated channel
    Warn,
    /// Bookkeeping noise (dropped samples)
    Debug,
}

/// Fan-out of diagnostic lines to the `log` facade and the injected hook
#[derive(Default)]
pub struct Logger {
    hook: Option<LogHook>,
}

impl Logger {
    /// Logger without hook
    pub fn new() -> Self {
        Self { hook: None }
    }

    /// Install or replace the hook
    pub fn set_hook(&mut self, hook: LogHook) {
        self.hook = Some(hook);
    }

    /// Remove the hook
    pub fn clear_hook(&mut self) {
        self.hook = None;
    }

    /// Check if a hook is installed
    pub fn has_hook(&self) -> bool {
        self.hook.is_some()
    }

    /// Emit one line
    pub fn emit(&self, severity: Severity, args: fmt::Arguments<'_>) {
        let mut line: heapless::String<LOG_LINE_CAPACITY> = heapless::String::new();
        // Overflow truncates the line
        let _ = line.write_fmt(args);

        match severity {
            Severity::Warn => log_at!(warn, "{}", line),
            Severity::Info => log_at!(info, "{}", line),
            Severity::Debug => log_at!(debug, "{}", line),
        }

        if let Some(hook) = &self.hook {
            call_guarded(hook, &line);
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("hook", &self.hook.is_some()).finish()
    }
}

#[cfg(feature = "std")]
fn call_guarded(hook: &LogHook, line: &str) {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    if catch_unwind(AssertUnwindSafe(|| hook(line))).is_err() {
        log_at!(debug, "log hook panicked, line dropped");
    }
}

#[cfg(not(feature = "std"))]
fn call_guarded(hook: &LogHook, line: &str) {
    hook(line);
}
