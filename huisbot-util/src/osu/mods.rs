use std::{
    collections::{btree_set::Iter, BTreeSet},
    fmt::{Display, Formatter, Result as FmtResult},
};

use serde::{Serialize, Serializer};

/// A single gameplay modifier.
///
/// `DT` and `NC` share the same clock rate so both are parsed into
/// [`GameMod::DoubleTime`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GameMod {
    HardRock,
    Easy,
    DoubleTime,
    HalfTime,
    Other(Box<str>),
}

impl GameMod {
    pub fn from_code(code: &str) -> Self {
        match code {
            "HR" => Self::HardRock,
            "EZ" => Self::Easy,
            "DT" | "NC" => Self::DoubleTime,
            "HT" => Self::HalfTime,
            other => Self::Other(Box::from(other)),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::HardRock => "HR",
            Self::Easy => "EZ",
            Self::DoubleTime => "DT",
            Self::HalfTime => "HT",
            Self::Other(code) => code,
        }
    }
}

/// Set of modifiers, usually parsed from a string of two-letter codes such as
/// `"HRDT"`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GameMods {
    inner: BTreeSet<GameMod>,
}

impl GameMods {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split the string into consecutive two-character codes.
    ///
    /// A trailing single character is kept as its own code and will never
    /// match a known modifier.
    pub fn parse(s: &str) -> Self {
        let mut mods = Self::new();
        let mut rest = s;

        while !rest.is_empty() {
            let split = rest
                .char_indices()
                .nth(2)
                .map_or(rest.len(), |(idx, _)| idx);

            let (code, tail) = rest.split_at(split);
            mods.insert(GameMod::from_code(code));
            rest = tail;
        }

        mods
    }

    pub fn insert(&mut self, gamemod: GameMod) -> bool {
        self.inner.insert(gamemod)
    }

    pub fn contains(&self, gamemod: &GameMod) -> bool {
        self.inner.contains(gamemod)
    }

    pub fn hard_rock(&self) -> bool {
        self.contains(&GameMod::HardRock)
    }

    pub fn easy(&self) -> bool {
        self.contains(&GameMod::Easy)
    }

    /// Either `DT` or `NC`
    pub fn double_time(&self) -> bool {
        self.contains(&GameMod::DoubleTime)
    }

    pub fn half_time(&self) -> bool {
        self.contains(&GameMod::HalfTime)
    }

    /// Whether any modifier changes the clock rate.
    pub fn changes_rate(&self) -> bool {
        self.double_time() || self.half_time()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn iter(&self) -> Iter<'_, GameMod> {
        self.inner.iter()
    }
}

/// Writes all codes without separator, i.e. `HRDT`. No mods write nothing.
impl Display for GameMods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for gamemod in self.iter() {
            f.write_str(gamemod.code())?;
        }

        Ok(())
    }
}

impl Serialize for GameMods {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}
