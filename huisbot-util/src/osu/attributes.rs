use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use super::{ar_to_ms, ms_to_ar, GameMods};
use crate::{
    datetime::SecToMinSec,
    numbers::{round_ties_even, Decimals},
};

const CS_MAX: f64 = 10.0;
const HP_MAX: f64 = 10.0;
const OD_MAX: f64 = 11.1;
const AR_MAX: f64 = 11.11;
const HR_CAP: f64 = 10.0;

const CLOCK_RATE_DT: f64 = 1.5;
const OD_MULTIPLIER_HT: f64 = 0.66;

/// Unmodified difficulty settings of a beatmap.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct BeatmapAttributes {
    pub cs: f64,
    pub ar: f64,
    pub od: f64,
    pub hp: f64,
    pub bpm: f64,
    pub length_secs: f64,
}

impl BeatmapAttributes {
    pub fn adjusted(&self, mods: &GameMods) -> AdjustedAttributes {
        AttributeAdjuster::new(mods).adjust(self)
    }
}

/// Difficulty settings after applying mods.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct AdjustedAttributes {
    pub cs: f64,
    pub ar: f64,
    pub od: f64,
    pub hp: f64,
    pub bpm: f64,
    pub length_secs: f64,
}

/// Applies mods onto single attribute values.
///
/// `HR` takes precedence over `EZ`, and `DT`/`NC` over `HT`, except for the
/// preempt scaling of the approach rate which checks for `HT` first.
#[derive(Copy, Clone, Debug)]
pub struct AttributeAdjuster<'m> {
    mods: &'m GameMods,
}

impl<'m> AttributeAdjuster<'m> {
    pub fn new(mods: &'m GameMods) -> Self {
        Self { mods }
    }

    pub fn adjust(&self, attrs: &BeatmapAttributes) -> AdjustedAttributes {
        AdjustedAttributes {
            cs: self.cs(attrs.cs),
            ar: self.ar(attrs.ar),
            od: self.od(attrs.od),
            hp: self.hp(attrs.hp),
            bpm: self.bpm(attrs.bpm),
            length_secs: self.length(attrs.length_secs),
        }
    }

    pub fn length(&self, secs: f64) -> f64 {
        if self.mods.double_time() {
            secs / CLOCK_RATE_DT
        } else if self.mods.half_time() {
            secs * CLOCK_RATE_DT
        } else {
            secs
        }
    }

    /// Rounded to two decimals if the clock rate changes.
    pub fn bpm(&self, bpm: f64) -> f64 {
        if self.mods.double_time() {
            round_ties_even(bpm * CLOCK_RATE_DT, 2)
        } else if self.mods.half_time() {
            round_ties_even(bpm / CLOCK_RATE_DT, 2)
        } else {
            bpm
        }
    }

    pub fn cs(&self, cs: f64) -> f64 {
        let cs = if self.mods.hard_rock() {
            cs * 1.3
        } else if self.mods.easy() {
            cs * 0.5
        } else {
            cs
        };

        cs.min(CS_MAX)
    }

    pub fn ar(&self, ar: f64) -> f64 {
        let ar = if self.mods.hard_rock() {
            (ar * 1.4).min(HR_CAP)
        } else if self.mods.easy() {
            ar * 0.5
        } else {
            ar
        };

        if !self.mods.changes_rate() {
            return ar;
        }

        // Preempt is handled in whole milliseconds
        let ms = ar_to_ms(ar) as i32;

        let multiplier = if self.mods.half_time() {
            4.0 / 3.0
        } else {
            2.0 / 3.0
        };

        let ms = (f64::from(ms) * multiplier) as i32;

        ms_to_ar(ms).min(AR_MAX)
    }

    pub fn od(&self, od: f64) -> f64 {
        let mut od = if self.mods.hard_rock() {
            (od * 1.4).min(HR_CAP)
        } else if self.mods.easy() {
            od * 0.5
        } else {
            od
        };

        if self.mods.double_time() {
            od *= CLOCK_RATE_DT;
        } else if self.mods.half_time() {
            od *= OD_MULTIPLIER_HT;
        }

        od.min(OD_MAX)
    }

    pub fn hp(&self, hp: f64) -> f64 {
        let hp = if self.mods.hard_rock() {
            hp * 1.4
        } else if self.mods.easy() {
            hp * 0.5
        } else {
            hp
        };

        hp.min(HP_MAX)
    }
}

/// Single line summary, e.g. `CS 5.2 AR 10.3 OD 9.9 HP 7 ▸ 270 BPM ▸ 1:20`
pub struct AttributesFormatter<'a> {
    attrs: &'a AdjustedAttributes,
}

impl<'a> AttributesFormatter<'a> {
    pub fn new(attrs: &'a AdjustedAttributes) -> Self {
        Self { attrs }
    }
}

impl Display for AttributesFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let AdjustedAttributes {
            cs,
            ar,
            od,
            hp,
            bpm,
            length_secs,
        } = *self.attrs;

        write!(
            f,
            "CS {cs} AR {ar} OD {od} HP {hp} ▸ {bpm} BPM ▸ {len}",
            cs = Decimals::<1>(cs),
            ar = Decimals::<1>(ar),
            od = Decimals::<1>(od),
            hp = Decimals::<1>(hp),
            bpm = Decimals::<3>(bpm),
            len = SecToMinSec::from_secs_f64(length_secs),
        )
    }
}
