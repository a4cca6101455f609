use chrono::{DateTime, Local};

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const KIB: u64 = 1024;

/// 字节数格式化为两位小数（单位按整数计算，超过 TB 仍以 TB 显示）
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut index = 0usize;
    let mut threshold = KIB;
    while index + 1 < SIZE_UNITS.len() && bytes >= threshold {
        index += 1;
        threshold = match threshold.checked_mul(KIB) {
            Some(t) => t,
            None => break,
        };
    }

    let value = bytes as f64 / (KIB as f64).powi(index as i32);
    format!("{:.2} {}", value, SIZE_UNITS[index])
}

/// Relative age of a unix timestamp, measured against the wall clock now.
pub fn format_relative_time(unix_seconds: i64) -> String {
    format_relative_time_at(unix_seconds, Local::now().timestamp())
}

/// 以 `now` 为基准的相对时间；超过一周显示本地日期，未来时间显示 "Just now"
pub fn format_relative_time_at(unix_seconds: i64, now: i64) -> String {
    let elapsed = now.saturating_sub(unix_seconds);
    let minutes = elapsed.div_euclid(60);
    let hours = minutes.div_euclid(60);
    let days = hours.div_euclid(24);

    if days > 7 {
        absolute_date(unix_seconds)
    } else if days > 0 {
        ago(days, "day")
    } else if hours > 0 {
        ago(hours, "hour")
    } else if minutes > 0 {
        ago(minutes, "minute")
    } else {
        "Just now".to_string()
    }
}

fn ago(count: i64, unit: &str) -> String {
    let plural = if count > 1 { "s" } else { "" };
    format!("{count} {unit}{plural} ago")
}

fn absolute_date(unix_seconds: i64) -> String {
    DateTime::from_timestamp(unix_seconds, 0)
        .map(|utc| utc.with_timezone(&Local).format("%-m/%-d/%Y").to_string())
        .unwrap_or_default()
}
