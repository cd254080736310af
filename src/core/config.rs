use std::{
    env::{self, VarError},
    path::PathBuf,
};

use eyre::Result;
use huisbot_util::osu::GameMods;
use once_cell::sync::OnceCell;

use crate::commands::mods_from_input;

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

const DEFAULT_LOG_PATH: &str = "./logs";
const DEFAULT_CONSOLE_FILTER: &str = "huisbot=info,warn";

#[derive(Debug)]
pub struct AppConfig {
    /// Directory of the daily rolling log files
    pub log_path: PathBuf,
    /// Directives for logs written to stderr
    pub console_filter: Box<str>,
    /// Mods to use if none are specified
    pub default_mods: GameMods,
}

impl AppConfig {
    pub fn get() -> &'static Self {
        CONFIG
            .get()
            .expect("`AppConfig::init` must be called first")
    }

    pub fn init() -> Result<()> {
        let config = AppConfig {
            log_path: env_var_or("LOG_PATH", || PathBuf::from(DEFAULT_LOG_PATH))?,
            console_filter: env_var_or("CONSOLE_LOG", || Box::from(DEFAULT_CONSOLE_FILTER))?,
            default_mods: env_var_or("DEFAULT_MODS", GameMods::new)?,
        };

        if CONFIG.set(config).is_err() {
            warn!("CONFIG was already set");
        }

        Ok(())
    }
}

trait EnvKind: Sized {
    const EXPECTED: &'static str;

    fn from_str(s: String) -> Result<Self, String>;
}

macro_rules! env_kind {
    ($($ty:ty: |$arg:ident| $impl:block,)*) => {
        $(
            impl EnvKind for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                fn from_str($arg: String) -> Result<Self, String> {
                    $impl
                }
            }
        )*
    };
}

env_kind! {
    Box<str>: |s| { Ok(s.into_boxed_str()) },
    PathBuf: |s| { s.parse().map_err(|_| s) },
}

impl EnvKind for GameMods {
    const EXPECTED: &'static str = "mods such as `HRDT`, `+hrdt`, or `HR, DT`";

    fn from_str(s: String) -> Result<Self, String> {
        let valid = s
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || matches!(c, '+' | ','));

        if valid {
            Ok(mods_from_input(&s))
        } else {
            Err(s)
        }
    }
}

fn env_var<T: EnvKind>(name: &str) -> Result<Option<T>> {
    let value = match env::var(name) {
        Ok(value) => value,
        Err(VarError::NotPresent) => return Ok(None),
        Err(VarError::NotUnicode(_)) => bail!("env variable `{name}` is not valid unicode"),
    };

    T::from_str(value).map(Some).map_err(|value| {
        eyre!(
            "failed to parse env variable `{name}={value}`; expected {expected}",
            expected = T::EXPECTED
        )
    })
}

fn env_var_or<T: EnvKind>(name: &str, default: impl FnOnce() -> T) -> Result<T> {
    env_var(name).map(|value| value.unwrap_or_else(default))
}
