//! Human-readable byte sizes

pub const KB: u64 = 1024;
pub const MB: u64 = KB * 1024;
pub const GB: u64 = MB * 1024;

/// Unit ladder, largest first. The first threshold the size reaches wins.
pub const UNIT_LADDER: [(u64, &str); 3] = [(GB, "GB"), (MB, "MB"), (KB, "KB")];

/// Format a size in bytes to human-readable format.
///
/// Sizes below one kilobyte are printed as a plain integer (`"512 bytes"`),
/// everything else with two decimals (`"1.50 KB"`). Rounding is whatever
/// `{:.2}` does with the `f64` quotient.
pub fn format_size(bytes: u64) -> String {
    for (divisor, unit) in UNIT_LADDER {
        if bytes >= divisor {
            return format!("{:.2} {}", bytes as f64 / divisor as f64, unit);
        }
    }
    format!("{} bytes", bytes)
}
