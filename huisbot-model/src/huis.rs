use huisbot_util::osu::GameMods;

/// Parse mods as listed by the Huismetbenen API, e.g. `"HD, DT, CL"`.
///
/// Whitespace around the commas and the `CL` code are dropped before the
/// codes are chunked.
pub fn parse_huis_mods(mods: &str) -> GameMods {
    let codes: String = mods
        .split(',')
        .map(str::trim)
        .filter(|code| *code != "CL")
        .collect();

    GameMods::parse(&codes)
}
