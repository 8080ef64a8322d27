use std::fmt;

use chrono::{Local, NaiveDate};

pub const DATE_FORMAT: &str = "%Y%m%d";

#[derive(Debug)]
pub enum DateError {
    Malformed { input: String },
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::Malformed { input } => {
                write!(f, "invalid build date '{input}', expected YYYYMMDD")
            }
        }
    }
}

impl std::error::Error for DateError {}

/// Calendar date stamped into build identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildDate(NaiveDate);

impl BuildDate {
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parses an explicit `YYYYMMDD` date. Anything other than eight digits naming
    /// a real calendar day is rejected.
    pub fn parse(input: &str) -> Result<Self, DateError> {
        let malformed = || DateError::Malformed {
            input: input.to_string(),
        };
        if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        NaiveDate::parse_from_str(input, DATE_FORMAT)
            .map(Self)
            .map_err(|_| malformed())
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl fmt::Display for BuildDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
