mod attributes;
mod kind;
mod mods;
mod preempt;

pub use self::{
    attributes::{AdjustedAttributes, AttributeAdjuster, AttributesFormatter, BeatmapAttributes},
    kind::{AttributeKind, UnknownAttributeKind},
    mods::{GameMod, GameMods},
    preempt::{ar_to_ms, ms_to_ar},
};
