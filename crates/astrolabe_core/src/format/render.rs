use super::pattern::{Field, Item, Pattern};
use crate::calendar::month_name;
use crate::model::date::Date;
use std::fmt::Write;

impl Pattern {
    /// Renders `date` with this pattern.
    pub fn render(&self, date: Date) -> String {
        let mut out = String::new();
        for item in &self.items {
            match item {
                Item::Literal(text) => out.push_str(text),
                Item::Field { field, width } => render_field(&mut out, date, *field, *width),
            }
        }
        out
    }
}

fn render_field(out: &mut String, date: Date, field: Field, width: usize) {
    let (year, month, day) = date.ymd();
    // Writing into a String cannot fail.
    let _ = match field {
        Field::Year => match width {
            1 => write!(out, "{year}"),
            2 => write!(out, "{:02}", year.rem_euclid(100)),
            _ => write_padded(out, year, width),
        },
        Field::Quarter => {
            let quarter = (month - 1) / 3 + 1;
            match width {
                1 | 5 => write!(out, "{quarter}"),
                2 => write!(out, "{quarter:02}"),
                3 => write!(out, "Q{quarter}"),
                _ => write!(out, "{} quarter", ordinal(quarter)),
            }
        }
        Field::Month => match width {
            1 => write!(out, "{month}"),
            2 => write!(out, "{month:02}"),
            3 => out.write_str(&month_name(month)[..3]),
            4 => out.write_str(month_name(month)),
            _ => out.write_str(&month_name(month)[..1]),
        },
        Field::Day => write!(out, "{day:0width$}"),
        Field::DayOfYear => write!(out, "{:0width$}", date.day_of_year()),
        Field::WeekdayNumber => write!(out, "{:0width$}", date.weekday().number_from_monday()),
        Field::WeekdayName => {
            let name = date.weekday().name();
            match width {
                1..=3 => out.write_str(&name[..3]),
                4 => out.write_str(name),
                _ => out.write_str(&name[..1]),
            }
        }
    };
}

fn write_padded(out: &mut String, year: i32, width: usize) -> std::fmt::Result {
    if year < 0 {
        write!(out, "-{:0width$}", year.unsigned_abs())
    } else {
        write!(out, "{year:0width$}")
    }
}

fn ordinal(quarter: u32) -> &'static str {
    match quarter {
        1 => "1st",
        2 => "2nd",
        3 => "3rd",
        _ => "4th",
    }
}
