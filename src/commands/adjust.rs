use eyre::Result;
use huisbot_util::osu::{AdjustedAttributes, AttributesFormatter, BeatmapAttributes, GameMods};
use serde::Serialize;

use super::{print_json, print_lines, ModsArgs, ModsLabel, OutputArgs};

#[derive(clap::Args)]
pub struct Args {
    /// Circle size
    #[arg(long)]
    cs: f64,
    /// Approach rate
    #[arg(long)]
    ar: f64,
    /// Overall difficulty
    #[arg(long)]
    od: f64,
    /// Drain rate
    #[arg(long)]
    hp: f64,
    #[arg(long)]
    bpm: f64,
    /// Length in seconds
    #[arg(long = "length")]
    length_secs: f64,
    #[command(flatten)]
    mods: ModsArgs,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Serialize)]
struct AdjustOutput<'a> {
    mods: &'a GameMods,
    base: &'a BeatmapAttributes,
    adjusted: &'a AdjustedAttributes,
}

pub fn run(args: Args) -> Result<()> {
    let attrs = BeatmapAttributes {
        cs: args.cs,
        ar: args.ar,
        od: args.od,
        hp: args.hp,
        bpm: args.bpm,
        length_secs: args.length_secs,
    };

    let mods = args.mods.resolve();
    let adjusted = attrs.adjusted(&mods);

    info!(%mods, ?attrs, ?adjusted, "Adjusted attributes");

    if args.output.json {
        let output = AdjustOutput {
            mods: &mods,
            base: &attrs,
            adjusted: &adjusted,
        };

        return print_json(&output);
    }

    print_lines([format!(
        "{} ▸ {}",
        ModsLabel(&mods),
        AttributesFormatter::new(&adjusted)
    )])
}
