//! Duration parsing and formatting for the native commands.

use std::time::{SystemTime, UNIX_EPOCH};

/// Parse a trailing `<amount> <unit>` pair into a ban-expiry timestamp
/// (unix millis). Returns `None` when the amount is not a non-negative
/// number or the unit is unknown; callers fold the tokens back into the
/// ban reason in that case.
pub fn parse_expiry(amount: &str, unit: &str) -> Option<i64> {
    let amount: i64 = amount.parse().ok()?;
    if amount < 0 {
        return None;
    }
    let millis = unit_millis(unit)?.checked_mul(amount)?;
    let now = i64::try_from(
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .ok()?
            .as_millis(),
    )
    .ok()?;
    now.checked_add(millis)
}

fn unit_millis(unit: &str) -> Option<i64> {
    let unit = unit.to_ascii_lowercase();
    let unit = unit.strip_suffix('s').unwrap_or(&unit);
    match unit {
        "second" | "sec" => Some(1_000),
        "minute" | "min" => Some(60_000),
        "hour" | "h" => Some(3_600_000),
        "day" | "d" => Some(86_400_000),
        "week" | "w" => Some(604_800_000),
        _ => None,
    }
}

/// Render a playtime in seconds as `1d 2h 3m 4s`, dropping zero leading
/// components.
pub fn format_duration(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if hours > 0 || !parts.is_empty() {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 || !parts.is_empty() {
        parts.push(format!("{minutes}m"));
    }
    parts.push(format!("{seconds}s"));
    parts.join(" ")
}
