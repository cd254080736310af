use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use super::{ar_to_ms, AttributeAdjuster, GameMods};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AttributeKind {
    Ar,
    Cs,
    Hp,
    Od,
}

impl AttributeKind {
    pub fn adjust(self, value: f64, mods: &GameMods) -> f64 {
        let adjuster = AttributeAdjuster::new(mods);

        match self {
            Self::Ar => adjuster.ar(value),
            Self::Cs => adjuster.cs(value),
            Self::Hp => adjuster.hp(value),
            Self::Od => adjuster.od(value),
        }
    }

    /// Preempt of an approach rate in whole milliseconds, `None` for other
    /// attributes.
    pub fn preempt_ms(self, value: f64) -> Option<i32> {
        match self {
            Self::Ar => Some(ar_to_ms(value) as i32),
            Self::Cs | Self::Hp | Self::Od => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ar => "AR",
            Self::Cs => "CS",
            Self::Hp => "HP",
            Self::Od => "OD",
        }
    }
}

impl Display for AttributeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeKind {
    type Err = UnknownAttributeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.to_ascii_lowercase().as_str() {
            "ar" | "approach_rate" => Self::Ar,
            "cs" | "circle_size" => Self::Cs,
            "hp" | "drain_rate" => Self::Hp,
            "od" | "overall_difficulty" => Self::Od,
            _ => return Err(UnknownAttributeKind(Box::from(s))),
        };

        Ok(kind)
    }
}

#[derive(Debug)]
pub struct UnknownAttributeKind(Box<str>);

impl Display for UnknownAttributeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "unknown attribute `{}`; expected one of `ar`, `cs`, `hp`, `od`",
            self.0
        )
    }
}

impl StdError for UnknownAttributeKind {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kind() {
        assert_eq!("AR".parse::<AttributeKind>().unwrap(), AttributeKind::Ar);
        assert_eq!("od".parse::<AttributeKind>().unwrap(), AttributeKind::Od);
        assert_eq!(
            "circle_size".parse::<AttributeKind>().unwrap(),
            AttributeKind::Cs
        );

        let err = "bpm".parse::<AttributeKind>().unwrap_err();
        assert!(err.to_string().contains("`bpm`"));
    }

    #[test]
    fn adjust_matches_adjuster() {
        let mods = GameMods::parse("HRDT");
        let adjuster = AttributeAdjuster::new(&mods);

        assert_eq!(AttributeKind::Ar.adjust(9.0, &mods), adjuster.ar(9.0));
        assert_eq!(AttributeKind::Cs.adjust(4.0, &mods), adjuster.cs(4.0));
        assert_eq!(AttributeKind::Hp.adjust(6.0, &mods), adjuster.hp(6.0));
        assert_eq!(AttributeKind::Od.adjust(8.0, &mods), adjuster.od(8.0));
    }

    #[test]
    fn preempt_only_for_ar() {
        assert_eq!(AttributeKind::Ar.preempt_ms(9.0), Some(600));
        assert_eq!(AttributeKind::Ar.preempt_ms(9.3), Some(554));
        assert_eq!(AttributeKind::Od.preempt_ms(9.0), None);
        assert_eq!(AttributeKind::Cs.preempt_ms(4.0), None);
    }
}
