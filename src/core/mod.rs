pub use self::config::AppConfig;

mod config;

pub mod logging;
