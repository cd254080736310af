use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use huisbot_model::OsuBeatmap;
use huisbot_util::osu::{AdjustedAttributes, AttributesFormatter, BeatmapAttributes, GameMods};
use serde::Serialize;

use super::{print_json, print_lines, ModsArgs, ModsLabel, OutputArgs};

#[derive(clap::Args)]
pub struct Args {
    /// File containing a `get_beatmaps` response, `-` for stdin
    path: PathBuf,
    #[command(flatten)]
    mods: ModsArgs,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Serialize)]
struct BeatmapOutput<'a> {
    map_id: u32,
    mapset_id: u32,
    artist: &'a str,
    title: &'a str,
    version: &'a str,
    max_combo: Option<u32>,
    mods: &'a GameMods,
    base: &'a BeatmapAttributes,
    adjusted: &'a AdjustedAttributes,
}

pub fn run(args: Args) -> Result<()> {
    let bytes = read_input(&args.path)?;
    let map = OsuBeatmap::from_response(&bytes).wrap_err("failed to parse beatmap")?;

    debug!(map_id = map.map_id, "Parsed beatmap");

    let mods = args.mods.resolve();
    let attrs = map.attributes();
    let adjusted = attrs.adjusted(&mods);

    info!(map_id = map.map_id, %mods, ?adjusted, "Adjusted beatmap attributes");

    if args.output.json {
        let output = BeatmapOutput {
            map_id: map.map_id,
            mapset_id: map.mapset_id,
            artist: &map.artist,
            title: &map.title,
            version: &map.version,
            max_combo: map.max_combo,
            mods: &mods,
            base: &attrs,
            adjusted: &adjusted,
        };

        return print_json(&output);
    }

    let title = format!(
        "{artist} - {title} [{version}] {mods}",
        artist = map.artist,
        title = map.title,
        version = map.version,
        mods = ModsLabel(&mods),
    );

    let summary = AttributesFormatter::new(&adjusted).to_string();
    let url = format!("https://osu.ppy.sh/b/{}", map.map_id);

    print_lines([title, summary, url])
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut bytes = Vec::new();

        io::stdin()
            .read_to_end(&mut bytes)
            .wrap_err("failed to read stdin")?;

        return Ok(bytes);
    }

    fs::read(path).wrap_err_with(|| format!("failed to read `{}`", path.display()))
}
