use thiserror::Error;

#[derive(Debug, Error)]
pub enum BeatmapError {
    #[error("no beatmap found")]
    NotFound,
    #[error("failed to deserialize beatmap")]
    Deserialize(#[from] serde_json::Error),
}
