//! Formatting Helpers
//!
//! Rupiah display plus the date stamps exchanged with the service.

use chrono::{Local, Locale};

/// Integer rupiah, no decimals, dot thousands separators: `Rp 1.000.000`
pub fn format_rupiah(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    format!("{sign}Rp {grouped}")
}

/// Today's record key: `YYYY-MM-DD`
pub fn today_stamp() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Wall-clock attribution for a toggle: `HH:MM`
pub fn clock_stamp() -> String {
    Local::now().format("%H:%M").to_string()
}

/// Localized header date, e.g. `Kamis, 7 Agustus 2025`
pub fn display_date() -> String {
    Local::now()
        .format_localized("%A, %-d %B %Y", Locale::id_ID)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupiah_groups_thousands() {
        assert_eq!(format_rupiah(700_000), "Rp 700.000");
        assert_eq!(format_rupiah(1_000_000), "Rp 1.000.000");
        assert_eq!(format_rupiah(1_234_567), "Rp 1.234.567");
    }

    #[test]
    fn test_rupiah_small_amounts() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(999), "Rp 999");
        assert_eq!(format_rupiah(1_000), "Rp 1.000");
    }

    #[test]
    fn test_rupiah_negative() {
        assert_eq!(format_rupiah(-50_000), "-Rp 50.000");
    }

    #[test]
    fn test_today_stamp_shape() {
        let stamp = today_stamp();
        assert_eq!(stamp.len(), 10);
        assert_eq!(stamp.as_bytes()[4], b'-');
        assert_eq!(stamp.as_bytes()[7], b'-');
    }
}
