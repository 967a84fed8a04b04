/// Format a byte count for display.
///
/// Exact mode prints `"<size> bytes"`. Human-readable mode scales by powers
/// of 1024 and prints one decimal place, e.g. `"1.5 KB"`.
pub fn format_size(size: u64, human_readable: bool) -> String {
    if !human_readable {
        return format!("{} bytes", size);
    }

    const BASE: u64 = 1024;
    const UNITS: &[u8] = b"KMGTPE";

    if size < BASE {
        return format!("{} B", size);
    }

    // Unit is picked on the integer quotient, so 1048575 stays in KB.
    let mut divisor = BASE;
    let mut exponent = 0;
    let mut quotient = size / BASE;
    while quotient >= BASE {
        divisor *= BASE;
        exponent += 1;
        quotient /= BASE;
    }

    format!(
        "{:.1} {}B",
        size as f64 / divisor as f64,
        UNITS[exponent] as char
    )
}
