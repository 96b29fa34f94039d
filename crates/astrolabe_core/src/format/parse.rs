use super::pattern::{Field, Item, Pattern};
use crate::calendar::month_name;
use crate::calendar::Weekday;
use crate::error::{DateError, DateResult};
use crate::model::date::Date;

#[derive(Debug, Default)]
struct Parsed {
    year: Option<i64>,
    month: Option<u32>,
    day: Option<u32>,
    weekday: Option<Weekday>,
}

impl Pattern {
    /// Reads a date laid out as this pattern.
    ///
    /// Supported fields are years (except `yy`), months, days of month and
    /// weekday names. A weekday name must agree with the parsed date. A numeric
    /// field directly followed by another numeric field consumes exactly its
    /// run length in digits, so `yyyyMMdd` works.
    ///
    /// # Errors
    /// - `InvalidFormat` when the text does not match or the pattern uses a
    ///   field that cannot be read back.
    /// - `OutOfRange` when the fields do not form a valid date, or when the
    ///   weekday name contradicts it.
    pub fn parse(&self, text: &str) -> DateResult<Date> {
        let mut rest = text;
        let mut parsed = Parsed::default();

        for (index, item) in self.items.iter().enumerate() {
            match item {
                Item::Literal(expected) => {
                    rest = rest.strip_prefix(expected.as_str()).ok_or_else(|| {
                        mismatch(text, rest, &format!("`{expected}`"))
                    })?;
                }
                Item::Field { field, width } => {
                    let fixed = matches!(
                        self.items.get(index + 1),
                        Some(Item::Field { field: next, width: next_width })
                            if next.is_numeric_at(*next_width)
                    ) && field.is_numeric_at(*width);
                    rest = read_field(text, rest, *field, *width, fixed, &mut parsed)?;
                }
            }
        }

        if !rest.is_empty() {
            return Err(DateError::invalid_format(format!(
                "unexpected trailing input `{rest}` in `{text}`"
            )));
        }

        let year = parsed.year.ok_or_else(|| {
            DateError::invalid_format("pattern has no year field to parse".to_string())
        })?;
        let year = i32::try_from(year).map_err(|_| {
            DateError::out_of_range(format!("year {year} is outside the representable range"))
        })?;
        let date = Date::from_ymd(year, parsed.month.unwrap_or(1), parsed.day.unwrap_or(1))?;
        match parsed.weekday {
            Some(weekday) if weekday != date.weekday() => Err(DateError::out_of_range(format!(
                "{date} is a {}, not a {}",
                date.weekday().name(),
                weekday.name()
            ))),
            _ => Ok(date),
        }
    }
}

fn read_field<'a>(
    text: &str,
    rest: &'a str,
    field: Field,
    width: usize,
    fixed: bool,
    parsed: &mut Parsed,
) -> DateResult<&'a str> {
    match (field, width) {
        (Field::Year, 2) => Err(DateError::invalid_format(
            "two-digit years cannot be parsed".to_string(),
        )),
        (Field::Year, _) => {
            let (negative, unsigned) = match rest.strip_prefix('-') {
                Some(tail) => (true, tail),
                None => (false, rest.strip_prefix('+').unwrap_or(rest)),
            };
            let (digits, tail) = take_digits(unsigned, fixed.then_some(width), usize::MAX);
            if digits.is_empty() {
                return Err(mismatch(text, rest, "a year"));
            }
            let magnitude = digits.parse::<i64>().map_err(|_| {
                DateError::out_of_range(format!("year `{digits}` is too large"))
            })?;
            parsed.year = Some(if negative { -magnitude } else { magnitude });
            Ok(tail)
        }
        (Field::Month, 1 | 2) => {
            let (value, tail) = read_number(text, rest, width, fixed, "a month")?;
            parsed.month = Some(value);
            Ok(tail)
        }
        (Field::Month, 3 | 4) => {
            let (month, tail) = (1..=12)
                .find_map(|month| {
                    let name = month_name(month);
                    let name = if width == 3 { &name[..3] } else { name };
                    strip_prefix_ignore_case(rest, name).map(|tail| (month, tail))
                })
                .ok_or_else(|| mismatch(text, rest, "a month name"))?;
            parsed.month = Some(month);
            Ok(tail)
        }
        (Field::Day, _) => {
            let (value, tail) = read_number(text, rest, width, fixed, "a day")?;
            parsed.day = Some(value);
            Ok(tail)
        }
        (Field::WeekdayName, 1..=4) => {
            let (weekday, tail) = Weekday::all()
                .find_map(|weekday| {
                    let name = weekday.name();
                    let name = if width == 4 { name } else { &name[..3] };
                    strip_prefix_ignore_case(rest, name).map(|tail| (weekday, tail))
                })
                .ok_or_else(|| mismatch(text, rest, "a weekday name"))?;
            parsed.weekday = Some(weekday);
            Ok(tail)
        }
        _ => Err(DateError::invalid_format(format!(
            "{field:?} with width {width} cannot be parsed"
        ))),
    }
}

fn read_number<'a>(
    text: &str,
    rest: &'a str,
    width: usize,
    fixed: bool,
    what: &str,
) -> DateResult<(u32, &'a str)> {
    let exact = (fixed || width == 2).then_some(width);
    let (digits, tail) = take_digits(rest, exact, 2);
    if digits.is_empty() || exact.is_some_and(|exact| digits.len() != exact) {
        return Err(mismatch(text, rest, what));
    }
    // At most two ASCII digits.
    let value = digits.parse::<u32>().unwrap_or(0);
    Ok((value, tail))
}

/// Splits leading ASCII digits off `input`: exactly `exact` when given
/// (fewer if the input runs out), otherwise up to `max`.
fn take_digits(input: &str, exact: Option<usize>, max: usize) -> (&str, &str) {
    let limit = exact.unwrap_or(max);
    let end = input
        .bytes()
        .take(limit)
        .take_while(u8::is_ascii_digit)
        .count();
    input.split_at(end)
}

fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &input[prefix.len()..])
}

fn mismatch(text: &str, rest: &str, expected: &str) -> DateError {
    let position = text.len() - rest.len();
    DateError::invalid_format(format!(
        "expected {expected} at byte {position} of `{text}`"
    ))
}
