//! Status colors shared by dashboard, copilot, and advisory views.
//!
//! DESIGN
//! ======
//! Backend labels are matched exactly; anything unrecognized falls back to
//! a neutral color instead of failing the render.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

pub const RED: &str = "#f87171";
pub const AMBER: &str = "#f59e0b";
pub const GREEN: &str = "#22c55e";
pub const BLUE: &str = "#60a5fa";
pub const SLATE: &str = "#94a3b8";

/// Lead category accent (`Hot`, `Warm`, `Cold`).
pub fn category_color(category: &str) -> &'static str {
    match category {
        "Hot" => RED,
        "Warm" => AMBER,
        "Cold" => SLATE,
        _ => BLUE,
    }
}

/// Sales-trend badge color keyed by the machine trend value.
pub fn trend_color(trend: &str) -> &'static str {
    match trend {
        "improving" => GREEN,
        "declining" => RED,
        "stable" => AMBER,
        _ => SLATE,
    }
}

/// Alert accent keyed by level.
pub fn alert_level_color(level: &str) -> &'static str {
    match level {
        "warning" => AMBER,
        "error" => RED,
        "info" => BLUE,
        _ => SLATE,
    }
}

/// Urgency or risk accent (`High`, `Medium`, `Low`).
pub fn severity_color(level: &str) -> &'static str {
    match level {
        "High" => RED,
        "Medium" => AMBER,
        "Low" => GREEN,
        _ => SLATE,
    }
}

/// Prediction risk accent. Anything not `Low` or `Medium` reads as high.
pub fn risk_color(level: &str) -> &'static str {
    match level {
        "Low" => GREEN,
        "Medium" => AMBER,
        _ => RED,
    }
}

/// Icon and color for a data-source badge.
pub fn data_source_badge(live: bool) -> (&'static str, &'static str) {
    if live { ("🟢", GREEN) } else { ("🟡", AMBER) }
}
