mod deser;
mod error;
mod huis;
mod osu;

pub use self::{error::BeatmapError, huis::parse_huis_mods, osu::OsuBeatmap};
