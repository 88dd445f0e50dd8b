//! Expanding a seat range like `1-20,45,50-52` into seat numbers.
//!
//! The form only checks the pattern; the service additionally rejects spans
//! that run backwards or chain two dashes (`1-5-9`). Expanding locally lets the
//! client report how many seats a request covers and catch those early.

use crate::validate::is_valid_range;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("invalid range {0:?}: use numbers like 1-60 or 1,5,9")]
    Format(String),
    #[error("in range {start}-{end}, start must not exceed end")]
    Descending { start: u16, end: u16 },
}

/// Sorted, de-duplicated seat numbers covered by `input`.
pub fn expand_range(input: &str) -> Result<Vec<u16>, RangeError> {
    let format_err = || RangeError::Format(input.to_string());
    if !is_valid_range(input) {
        return Err(format_err());
    }

    let mut seats = BTreeSet::new();
    for part in input.split(',') {
        let bounds: Vec<u16> = part
            .split('-')
            .map(|n| n.parse::<u16>().map_err(|_| format_err()))
            .collect::<Result<_, _>>()?;
        match bounds[..] {
            [seat] => {
                seats.insert(seat);
            }
            [start, end] if start > end => return Err(RangeError::Descending { start, end }),
            [start, end] => seats.extend(start..=end),
            _ => return Err(format_err()),
        }
    }
    Ok(seats.into_iter().collect())
}
