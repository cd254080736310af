pub mod datetime;
pub mod numbers;
pub mod osu;
