use chrono::{Datelike, NaiveDate};

const MONTHS_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

const MONTHS_ID_LONG: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Whole-unit amount with Indonesian thousands grouping: `39818` -> `39.818`.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.abs().round() as u64;
    let digits = rounded.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if value < 0.0 && rounded > 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// `Rp 39.818`
pub fn format_rupiah(value: f64) -> String {
    format!("Rp {}", format_thousands(value))
}

/// Short day-month label: `25 Jul`, `17 Agu`.
pub fn format_short_date(date: NaiveDate) -> String {
    format!("{:02} {}", date.day(), MONTHS_ID[date.month0() as usize])
}

/// Full date label: `7 Agustus 2025`.
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_ID_LONG[date.month0() as usize],
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1_000.0), "1.000");
        assert_eq!(format_thousands(39_818.0), "39.818");
        assert_eq!(format_thousands(1_234_567.4), "1.234.567");
        assert_eq!(format_thousands(-2_050.0), "-2.050");
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(13_397.0), "Rp 13.397");
    }

    #[test]
    fn test_format_short_date() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();
        assert_eq!(format_short_date(date), "07 Agu");
        assert_eq!(format_long_date(date), "7 Agustus 2025");
    }
}
