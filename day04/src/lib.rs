use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Range},
};

use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;

pub const DEFAULT_START: u32 = 264360;
pub const DEFAULT_END: u32 = 746325;

/// Decimal digits of `n`, most significant first. `digits(0)` is empty.
pub fn digits(mut n: u32) -> Vec<u8> {
    let mut buf = Vec::new();
    while n > 0 {
        buf.push((n % 10) as u8);
        n /= 10;
    }
    buf.reverse();
    buf
}

pub fn is_monotonic(digits: &[u8]) -> bool {
    digits.windows(2).all(|w| w[0] <= w[1])
}

pub fn has_adjacent_equal(digits: &[u8]) -> bool {
    digits.windows(2).any(|w| w[0] == w[1])
}

/// True if some maximal run of equal digits has length exactly 2.
pub fn has_run_of_two(digits: &[u8]) -> bool {
    let Some((&first, rest)) = digits.split_first() else {
        return false;
    };
    let mut current = first;
    let mut len = 1;
    for &d in rest {
        if d == current {
            len += 1;
        } else {
            if len == 2 {
                return true;
            }
            current = d;
            len = 1;
        }
    }
    // trailing run is never closed by a differing digit
    len == 2
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub rule1: usize,
    pub rule2: usize,
}

impl Counts {
    pub fn of(n: u32) -> Self {
        let d = digits(n);
        if !is_monotonic(&d) {
            return Counts::default();
        }
        let counts = if has_run_of_two(&d) {
            Counts { rule1: 1, rule2: 1 }
        } else if has_adjacent_equal(&d) {
            Counts { rule1: 1, rule2: 0 }
        } else {
            return Counts::default();
        };
        log::trace!("{} -> {:?}", n, counts);
        counts
    }
}

impl Add for Counts {
    type Output = Counts;

    fn add(self, rhs: Self) -> Self {
        Counts {
            rule1: self.rule1 + rhs.rule1,
            rule2: self.rule2 + rhs.rule2,
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Counts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Counts::default(), |acc, c| acc + c)
    }
}

pub fn scan(range: Range<u32>) -> Counts {
    range.map(Counts::of).sum()
}

pub fn par_scan(range: Range<u32>) -> Counts {
    range.into_par_iter().map(Counts::of).sum()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseRangeError {
    Malformed(String),
    Overflow(String),
    Reversed { start: u32, end: u32 },
}

impl fmt::Display for ParseRangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseRangeError::Malformed(s) => write!(f, "expected <start>-<end>, got {:?}", s),
            ParseRangeError::Overflow(s) => write!(f, "bound out of range: {}", s),
            ParseRangeError::Reversed { start, end } => {
                write!(f, "start {} is greater than end {}", start, end)
            }
        }
    }
}

impl std::error::Error for ParseRangeError {}

/// Parses `<start>-<end>` into a half-open range.
pub fn parse_range(input: &str) -> Result<Range<u32>, ParseRangeError> {
    static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)-(\d+)\s*$").unwrap());
    let (_, [start, end]) = PATTERN
        .captures(input)
        .ok_or_else(|| ParseRangeError::Malformed(input.to_string()))?
        .extract();
    let bound = |s: &str| {
        s.parse::<u32>()
            .map_err(|_| ParseRangeError::Overflow(s.to_string()))
    };
    let (start, end) = (bound(start)?, bound(end)?);
    if start > end {
        return Err(ParseRangeError::Reversed { start, end });
    }
    Ok(start..end)
}
