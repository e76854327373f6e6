//! Cell to text conversion.
//!
//! Tables are text-only, so every worksheet cell is rendered as a string
//! here and never carries a type past ingestion.

use calamine::{Data, ExcelDateTime};
use chrono::NaiveDateTime;

/// Largest magnitude rendered as an integer when a float has no fraction.
const MAX_INTEGRAL_FLOAT: f64 = 1e15;

/// Renders a worksheet cell as text. Empty cells become `""`.
pub fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) | Data::DateTimeIso(value) | Data::DurationIso(value) => {
            value.clone()
        }
        Data::Int(value) => value.to_string(),
        Data::Float(value) => format_number(*value),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::DateTime(value) => format_excel_datetime(value),
        Data::Error(value) => value.to_string(),
    }
}

/// Formats a number, dropping the fraction of integral values (`3.0` -> `"3"`).
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_INTEGRAL_FLOAT {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Formats a date-time as `YYYY-MM-DD HH:MM:SS`.
pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn format_excel_datetime(value: &ExcelDateTime) -> String {
    if value.is_duration() {
        return format_number(value.as_f64());
    }
    value
        .as_datetime()
        .map(format_datetime)
        .unwrap_or_else(|| format_number(value.as_f64()))
}

#[cfg(test)]
mod tests {
    use calamine::{CellErrorType, ExcelDateTimeType};

    use super::*;

    #[test]
    fn integral_floats_drop_fraction() {
        assert_eq!(cell_to_text(&Data::Float(3.0)), "3");
        assert_eq!(cell_to_text(&Data::Float(-12.0)), "-12");
        assert_eq!(cell_to_text(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_text(&Data::Float(1e20)), "100000000000000000000");
    }

    #[test]
    fn scalar_cells() {
        assert_eq!(cell_to_text(&Data::Empty), "");
        assert_eq!(cell_to_text(&Data::Int(42)), "42");
        assert_eq!(cell_to_text(&Data::String(" Ann ".to_string())), " Ann ");
        assert_eq!(cell_to_text(&Data::Bool(true)), "True");
        assert_eq!(cell_to_text(&Data::Bool(false)), "False");
        assert_eq!(cell_to_text(&Data::Error(CellErrorType::NA)), "#N/A");
    }

    #[test]
    fn datetimes_use_iso_like_layout() {
        // 45306.5 is 2024-01-15 12:00 in the 1900 date system.
        let value = ExcelDateTime::new(45306.5, ExcelDateTimeType::DateTime, false);
        assert_eq!(cell_to_text(&Data::DateTime(value)), "2024-01-15 12:00:00");
        assert_eq!(
            cell_to_text(&Data::DateTimeIso("2024-01-15T08:30:00".to_string())),
            "2024-01-15T08:30:00"
        );
    }

    #[test]
    fn durations_render_as_numbers() {
        let value = ExcelDateTime::new(1.5, ExcelDateTimeType::TimeDelta, false);
        assert_eq!(cell_to_text(&Data::DateTime(value)), "1.5");
    }
}
