//! Brazilian Portuguese long date formatting for card footers.

use chrono::{Datelike, NaiveDate};

/// Shown when a review's timestamp cannot be parsed.
pub const INVALID_DATE_LABEL: &str = "data inválida";

/// Formats `date` as `DD de <mês> de YYYY`, e.g. `05 de março de 2024`.
#[must_use]
pub fn format_long_pt_br(date: NaiveDate) -> String {
    format!(
        "{:02} de {} de {}",
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

/// Formats an optional date, falling back to [`INVALID_DATE_LABEL`].
#[must_use]
pub fn format_posted_on(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| INVALID_DATE_LABEL.to_owned(), format_long_pt_br)
}

const fn month_name(month: u32) -> &'static str {
    match month {
        1 => "janeiro",
        2 => "fevereiro",
        3 => "março",
        4 => "abril",
        5 => "maio",
        6 => "junho",
        7 => "julho",
        8 => "agosto",
        9 => "setembro",
        10 => "outubro",
        11 => "novembro",
        _ => "dezembro",
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;

    use super::{INVALID_DATE_LABEL, format_long_pt_br, format_posted_on};

    #[rstest]
    #[case(2024, 3, 5, "05 de março de 2024")]
    #[case(2023, 12, 31, "31 de dezembro de 2023")]
    #[case(2025, 1, 1, "01 de janeiro de 2025")]
    fn formats_long_portuguese_dates(
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] expected: &str,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");

        assert_eq!(format_long_pt_br(date), expected);
    }

    #[test]
    fn missing_date_uses_placeholder() {
        assert_eq!(format_posted_on(None), INVALID_DATE_LABEL);
    }
}
