use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// An ISO 8601 duration such as `P1Y2M3DT4H5M6.5S` or `P2W`.
///
/// Components are kept as written, `PT90M` is not normalized into `PT1H30M`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IsoDuration {
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl IsoDuration {
    fn has_time(&self) -> bool {
        self.hours > 0 || self.minutes > 0 || self.seconds > 0.0
    }

    fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.weeks == 0 && self.days == 0 && !self.has_time()
    }
}

impl FromStr for IsoDuration {
    type Err = IsoDurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let rest = value.strip_prefix('P').ok_or(IsoDurationError::MissingDesignator)?;
        let (date_part, time_part) = match rest.split_once('T') {
            Some((date_part, time_part)) => (date_part, Some(time_part)),
            None => (rest, None),
        };

        if time_part == Some("") || (date_part.is_empty() && time_part.is_none()) {
            return Err(IsoDurationError::Empty);
        }

        let mut duration = IsoDuration::default();

        let mut last = None;
        for (number, unit) in components(date_part)? {
            check_order(unit, "YMWD", &mut last)?;
            match unit {
                'Y' => duration.years = parse_whole(number, unit)?,
                'M' => duration.months = parse_whole(number, unit)?,
                'W' => duration.weeks = parse_whole(number, unit)?,
                'D' => duration.days = parse_whole(number, unit)?,
                _ => return Err(IsoDurationError::UnexpectedUnit(unit)),
            }
        }

        let mut last = None;
        for (number, unit) in components(time_part.unwrap_or_default())? {
            check_order(unit, "HMS", &mut last)?;
            match unit {
                'H' => duration.hours = parse_whole(number, unit)?,
                'M' => duration.minutes = parse_whole(number, unit)?,
                'S' => {
                    duration.seconds = number
                        .replace(',', ".")
                        .parse()
                        .map_err(|_| IsoDurationError::InvalidNumber(number.to_owned()))?
                }
                _ => return Err(IsoDurationError::UnexpectedUnit(unit)),
            }
        }

        Ok(duration)
    }
}

// Each unit of `units` may appear once, in that order
fn check_order(unit: char, units: &str, last: &mut Option<usize>) -> Result<(), IsoDurationError> {
    let Some(rank) = units.find(unit) else {
        return Err(IsoDurationError::UnexpectedUnit(unit));
    };
    if last.is_some_and(|last| rank <= last) {
        return Err(IsoDurationError::OutOfOrder(unit));
    }
    *last = Some(rank);
    Ok(())
}

// Splits "1Y2M" into [("1", 'Y'), ("2", 'M')]
fn components(part: &str) -> Result<Vec<(&str, char)>, IsoDurationError> {
    let mut components = Vec::new();
    let mut start = 0;

    for (index, c) in part.char_indices() {
        if c.is_ascii_digit() || c == '.' || c == ',' {
            continue;
        }

        let number = &part[start..index];
        if number.is_empty() {
            return Err(IsoDurationError::MissingValue(c));
        }

        components.push((number, c));
        start = index + c.len_utf8();
    }

    if start != part.len() {
        return Err(IsoDurationError::MissingUnit(part[start..].to_owned()));
    }

    Ok(components)
}

fn parse_whole(number: &str, unit: char) -> Result<u32, IsoDurationError> {
    number.parse().map_err(|_| match number.contains(['.', ',']) {
        true => IsoDurationError::FractionNotAllowed(unit),
        false => IsoDurationError::InvalidNumber(number.to_owned()),
    })
}

impl Display for IsoDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "PT0S");
        }

        write!(f, "P")?;
        for (value, unit) in [(self.years, 'Y'), (self.months, 'M'), (self.weeks, 'W'), (self.days, 'D')] {
            if value > 0 {
                write!(f, "{}{}", value, unit)?;
            }
        }

        if self.has_time() {
            write!(f, "T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds > 0.0 {
                write!(f, "{}S", self.seconds)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
impl IsoDuration {
    pub fn from_hours(hours: u32) -> Self {
        IsoDuration { hours, ..Default::default() }
    }

    pub fn from_days(days: u32) -> Self {
        IsoDuration { days, ..Default::default() }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum IsoDurationError {
    #[error("a duration must start with 'P'")]
    MissingDesignator,
    #[error("a duration must contain at least one component")]
    Empty,
    #[error("missing value before unit '{0}'")]
    MissingValue(char),
    #[error("missing unit after '{0}'")]
    MissingUnit(String),
    #[error("unexpected unit '{0}'")]
    UnexpectedUnit(char),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("only seconds may have a fraction, found one for '{0}'")]
    FractionNotAllowed(char),
    #[error("unit '{0}' is repeated or out of order")]
    OutOfOrder(char),
}
