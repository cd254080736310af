use std::fmt::{Display, Formatter, Result as FmtResult};

/// Round to the given amount of decimal positions, resolving midpoints
/// towards the even neighbour.
pub fn round_ties_even(n: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);

    (n * factor).round_ties_even() / factor
}

/// Display a float with at most `N` decimal positions and without trailing
/// zeros, e.g. `Decimals::<1>(7.0)` is shown as `7` and
/// `Decimals::<1>(10.333)` as `10.3`.
#[derive(Copy, Clone, Debug)]
pub struct Decimals<const N: usize>(pub f64);

impl<const N: usize> Display for Decimals<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let factor = 10_f64.powi(N as i32);
        let mut n = (self.0 * factor).round() / factor;

        // Avoid displaying "-0"
        if n == 0.0 {
            n = 0.0;
        }

        let s = format!("{n:.prec$}", prec = N);

        let trimmed = if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.')
        } else {
            s.as_str()
        };

        f.write_str(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_ties_even() {
        assert_eq!(round_ties_even(270.0, 2), 270.0);
        assert_eq!(round_ties_even(260.25, 2), 260.25);
        assert_eq!(round_ties_even(200.0 / 1.5, 2), 133.33);
        assert_eq!(round_ties_even(0.5, 0), 0.0);
        assert_eq!(round_ties_even(1.5, 0), 2.0);
    }

    #[test]
    fn test_decimals_one() {
        assert_eq!(Decimals::<1>(7.0).to_string(), "7");
        assert_eq!(Decimals::<1>(10.333).to_string(), "10.3");
        assert_eq!(Decimals::<1>(9.96).to_string(), "10");
        assert_eq!(Decimals::<1>(5.28).to_string(), "5.3");
        assert_eq!(Decimals::<1>(-0.01).to_string(), "0");
    }

    #[test]
    fn test_decimals_three() {
        assert_eq!(Decimals::<3>(180.0).to_string(), "180");
        assert_eq!(Decimals::<3>(270.123456).to_string(), "270.123");
        assert_eq!(Decimals::<3>(133.33).to_string(), "133.33");
    }
}
