use crate::error::{DateError, DateResult};

/// Widest year run; `i32` years have at most 7 digits plus a sign.
pub(crate) const MAX_YEAR_WIDTH: usize = 10;

/// Calendar field referenced by a pattern token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Year,
    Quarter,
    Month,
    Day,
    DayOfYear,
    WeekdayNumber,
    WeekdayName,
}

impl Field {
    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'y' => Some(Self::Year),
            'q' => Some(Self::Quarter),
            'M' => Some(Self::Month),
            'd' => Some(Self::Day),
            'D' => Some(Self::DayOfYear),
            'e' => Some(Self::WeekdayNumber),
            'E' => Some(Self::WeekdayName),
            _ => None,
        }
    }

    fn max_width(self) -> usize {
        match self {
            Self::Year => MAX_YEAR_WIDTH,
            Self::Quarter | Self::Month | Self::WeekdayName => 5,
            Self::DayOfYear => 3,
            Self::Day | Self::WeekdayNumber => 2,
        }
    }

    pub(crate) fn is_numeric_at(self, width: usize) -> bool {
        match self {
            Self::Year | Self::DayOfYear | Self::Day | Self::WeekdayNumber => true,
            Self::Quarter | Self::Month => width <= 2,
            Self::WeekdayName => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Item {
    Literal(String),
    Field { field: Field, width: usize },
}

/// A compiled date pattern.
///
/// Compile once and reuse when rendering many dates with the same layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub(crate) items: Vec<Item>,
}

impl Pattern {
    /// Compiles `pattern`.
    ///
    /// # Errors
    /// - `InvalidFormat` for unknown letters, runs longer than the field
    ///   allows, and unterminated quotes.
    pub fn compile(pattern: &str) -> DateResult<Self> {
        let mut items = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars().peekable();

        while let Some(current) = chars.next() {
            if current == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    literal.push('\'');
                    continue;
                }
                loop {
                    match chars.next() {
                        Some('\'') if chars.peek() == Some(&'\'') => {
                            chars.next();
                            literal.push('\'');
                        }
                        Some('\'') => break,
                        Some(other) => literal.push(other),
                        None => {
                            return Err(DateError::invalid_format(format!(
                                "unterminated quote in pattern `{pattern}`"
                            )))
                        }
                    }
                }
                continue;
            }

            if !current.is_ascii_alphabetic() {
                literal.push(current);
                continue;
            }

            let mut width = 1;
            while chars.peek() == Some(&current) {
                chars.next();
                width += 1;
            }
            let field = Field::from_letter(current).ok_or_else(|| {
                DateError::invalid_format(format!(
                    "unknown pattern letter `{current}` in `{pattern}`"
                ))
            })?;
            if width > field.max_width() {
                return Err(DateError::invalid_format(format!(
                    "run of {width} `{current}` exceeds the maximum of {}",
                    field.max_width()
                )));
            }

            if !literal.is_empty() {
                items.push(Item::Literal(std::mem::take(&mut literal)));
            }
            items.push(Item::Field { field, width });
        }

        if !literal.is_empty() {
            items.push(Item::Literal(literal));
        }
        Ok(Self { items })
    }
}
