const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable file size using base 1024.
///
/// Two decimals at most, trailing zeros dropped: `1536` → `"1.5 KB"`,
/// `5070446` → `"4.84 MB"`, `0` → `"0 Bytes"`. Sizes beyond the gigabyte
/// range stay in `GB`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}
