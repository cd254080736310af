use huisbot_util::osu::BeatmapAttributes;
use serde::Deserialize;

use crate::{deser, BeatmapError};

/// A beatmap as returned by the osu!api v1 `get_beatmaps` endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct OsuBeatmap {
    #[serde(rename = "beatmap_id", deserialize_with = "deser::u32_string::deserialize")]
    pub map_id: u32,
    #[serde(
        rename = "beatmapset_id",
        deserialize_with = "deser::u32_string::deserialize"
    )]
    pub mapset_id: u32,
    pub artist: Box<str>,
    pub title: Box<str>,
    pub version: Box<str>,
    #[serde(rename = "diff_size", deserialize_with = "deser::f64_string::deserialize")]
    pub cs: f64,
    #[serde(
        rename = "diff_approach",
        deserialize_with = "deser::f64_string::deserialize"
    )]
    pub ar: f64,
    #[serde(
        rename = "diff_overall",
        deserialize_with = "deser::f64_string::deserialize"
    )]
    pub od: f64,
    #[serde(rename = "diff_drain", deserialize_with = "deser::f64_string::deserialize")]
    pub hp: f64,
    #[serde(deserialize_with = "deser::f64_string::deserialize")]
    pub bpm: f64,
    #[serde(
        rename = "total_length",
        deserialize_with = "deser::u32_string::deserialize"
    )]
    pub seconds_total: u32,
    #[serde(default, deserialize_with = "deser::option_u32_string::deserialize")]
    pub max_combo: Option<u32>,
}

impl OsuBeatmap {
    /// Takes the first beatmap of a `get_beatmaps` response.
    pub fn from_response(bytes: &[u8]) -> Result<Self, BeatmapError> {
        let maps: Vec<Self> = serde_json::from_slice(bytes)?;

        maps.into_iter().next().ok_or(BeatmapError::NotFound)
    }

    pub fn attributes(&self) -> BeatmapAttributes {
        BeatmapAttributes {
            cs: self.cs,
            ar: self.ar,
            od: self.od,
            hp: self.hp,
            bpm: self.bpm,
            length_secs: f64::from(self.seconds_total),
        }
    }
}

#[cfg(test)]
mod tests {
    use huisbot_util::osu::GameMods;

    use super::*;

    const RESPONSE: &str = r#"[{
        "beatmapset_id": "39804",
        "beatmap_id": "129891",
        "approved": "1",
        "total_length": "209",
        "hit_length": "201",
        "version": "FOUR DIMENSIONS",
        "file_md5": "da8aae79c8f3306b5d65ec951874a7fb",
        "diff_size": "4",
        "diff_overall": "8",
        "diff_approach": "9",
        "diff_drain": "7",
        "mode": "0",
        "artist": "xi",
        "title": "FREEDOM DiVE",
        "creator": "Nakagawa-Kanon",
        "bpm": "222.22",
        "max_combo": "2385",
        "difficultyrating": "7.0615"
    }]"#;

    #[test]
    fn deserialize_response() {
        let map = OsuBeatmap::from_response(RESPONSE.as_bytes()).unwrap();

        assert_eq!(map.map_id, 129891);
        assert_eq!(map.mapset_id, 39804);
        assert_eq!(&*map.title, "FREEDOM DiVE");
        assert_eq!(map.max_combo, Some(2385));

        let attrs = map.attributes();

        assert_eq!(
            attrs,
            BeatmapAttributes {
                cs: 4.0,
                ar: 9.0,
                od: 8.0,
                hp: 7.0,
                bpm: 222.22,
                length_secs: 209.0,
            }
        );
    }

    #[test]
    fn adjust_deserialized() {
        let map = OsuBeatmap::from_response(RESPONSE.as_bytes()).unwrap();
        let adjusted = map.attributes().adjusted(&GameMods::parse("DT"));

        assert_eq!(adjusted.bpm, 333.33);
        assert_eq!(adjusted.length_secs, 209.0 / 1.5);
    }

    #[test]
    fn missing_max_combo() {
        let json = RESPONSE.replace(r#""max_combo": "2385","#, r#""max_combo": null,"#);
        let map = OsuBeatmap::from_response(json.as_bytes()).unwrap();

        assert_eq!(map.max_combo, None);

        let json = RESPONSE.replace(r#""max_combo": "2385","#, "");
        let map = OsuBeatmap::from_response(json.as_bytes()).unwrap();

        assert_eq!(map.max_combo, None);
    }

    #[test]
    fn empty_response() {
        let err = OsuBeatmap::from_response(b"[]").unwrap_err();

        assert!(matches!(err, BeatmapError::NotFound));
    }

    #[test]
    fn invalid_number() {
        let json = RESPONSE.replace(r#""diff_size": "4""#, r#""diff_size": "four""#);
        let err = OsuBeatmap::from_response(json.as_bytes()).unwrap_err();

        assert!(matches!(err, BeatmapError::Deserialize(_)));
    }
}
