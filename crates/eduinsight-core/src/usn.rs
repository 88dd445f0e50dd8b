//! Decoding a University Seat Number.
//!
//! Layout: region digit, two-letter college code, two-digit batch year,
//! two- or three-letter branch code, then an optional three-digit roll number
//! (`2AG21CS` or `2AG21CS001`).

use crate::validate::is_valid_usn;
use std::fmt;
use thiserror::Error;

/// Known branch codes and their programme names.
const BRANCH_NAMES: &[(&str, &str)] = &[
    ("AD", "Artificial Intelligence & Data Science"),
    ("CS", "Computer Science & Engineering"),
    ("CV", "Civil Engineering"),
    ("EC", "Electronics & Communication Engineering"),
    ("EE", "Electrical & Electronics Engineering"),
    ("ME", "Mechanical Engineering"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsnError {
    #[error("invalid USN {0:?}: expected a form like 2AG21CS or 2AG21CS001")]
    Format(String),
}

/// A decoded USN. Letter parts are upper-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usn {
    pub region: char,
    pub college: String,
    pub batch_year: u16,
    pub branch: String,
    pub roll: Option<u16>,
}

impl Usn {
    pub fn parse(input: &str) -> Result<Self, UsnError> {
        let format_err = || UsnError::Format(input.to_string());
        if !is_valid_usn(input) {
            return Err(format_err());
        }

        // All ASCII once the pattern matched, so byte slicing is safe.
        let upper = input.to_ascii_uppercase();
        let region = char::from(upper.as_bytes()[0]);
        let college = upper[1..3].to_string();
        let year: u16 = upper[3..5].parse().map_err(|_| format_err())?;
        let rest = &upper[5..];
        let branch_len = rest.bytes().take_while(u8::is_ascii_alphabetic).count();
        let branch = rest[..branch_len].to_string();
        let roll = match &rest[branch_len..] {
            "" => None,
            digits => Some(digits.parse().map_err(|_| format_err())?),
        };

        Ok(Self {
            region,
            college,
            batch_year: 2000 + year,
            branch,
            roll,
        })
    }

    /// The part the service expands with a seat range, e.g. `2AG21CS`.
    pub fn prefix(&self) -> String {
        format!(
            "{}{}{:02}{}",
            self.region,
            self.college,
            self.batch_year % 100,
            self.branch
        )
    }

    pub fn branch_name(&self) -> Option<&'static str> {
        BRANCH_NAMES
            .iter()
            .find(|(code, _)| *code == self.branch)
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for Usn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())?;
        if let Some(roll) = self.roll {
            write!(f, "{roll:03}")?;
        }
        Ok(())
    }
}
