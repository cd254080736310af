use std::fmt::{Display, Formatter, Result as FmtResult};

use time::{format_description::BorrowedFormatItem, macros::format_description};

pub const NAIVE_DATETIME_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Formats seconds as `m:ss`
#[derive(Copy, Clone)]
pub struct SecToMinSec {
    secs: u32,
}

impl SecToMinSec {
    /// Fractional seconds are cut off, negative ones become zero.
    pub fn from_secs_f64(secs: f64) -> Self {
        Self {
            secs: secs.max(0.0) as u32,
        }
    }
}

impl Display for SecToMinSec {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}:{:02}", self.secs / 60, self.secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minsec() {
        assert_eq!(SecToMinSec::from_secs_f64(125.0).to_string(), "2:05");
        assert_eq!(SecToMinSec::from_secs_f64(59.0).to_string(), "0:59");
        assert_eq!(SecToMinSec::from_secs_f64(3600.0).to_string(), "60:00");
    }

    #[test]
    fn minsec_from_f64() {
        assert_eq!(SecToMinSec::from_secs_f64(120.0 / 1.5).to_string(), "1:20");
        assert_eq!(SecToMinSec::from_secs_f64(80.9).to_string(), "1:20");
        assert_eq!(SecToMinSec::from_secs_f64(-3.0).to_string(), "0:00");
    }
}
