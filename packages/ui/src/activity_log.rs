use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
}

impl ActivityLog {
    /// Most recent entry, for inline status banners.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Most recent entry if it reports a failure.
    ///
    /// Returns `None` once a later success/info entry has been logged, so a
    /// banner driven by this clears itself when the next operation succeeds.
    pub fn latest_failure(&self) -> Option<&LogEntry> {
        self.latest()
            .filter(|e| matches!(e.level, LogLevel::Warning | LogLevel::Error))
    }
}

/// Inline banner surfacing the most recent failed operation.
///
/// Views include this below their content; it stays empty until the latest
/// log entry is a warning or error.
#[component]
pub fn ActivityBanner() -> Element {
    let log = use_activity_log();
    let latest = log();
    let Some(entry) = latest.latest_failure() else {
        return rsx! {};
    };

    rsx! {
        div { class: "alert-banner",
            span { class: "alert-banner-time", "{entry.timestamp}" }
            span { " {entry.message}" }
        }
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    match level {
        LogLevel::Warning => tracing::warn!("{message}"),
        LogLevel::Error => tracing::error!("{message}"),
        _ => tracing::info!("{message}"),
    }

    let ts = current_time();
    log.write().entries.push(LogEntry {
        timestamp: ts,
        level,
        message: message.to_string(),
    });
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let of_day = secs % 86_400;
    format!(
        "{:02}:{:02}:{:02}",
        of_day / 3600,
        (of_day % 3600) / 60,
        of_day % 60
    )
}
