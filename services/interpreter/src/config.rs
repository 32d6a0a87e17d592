use rocket::figment::{providers::Env, Figment};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct InterpreterConfig {
    // Longest accepted expression in bytes
    pub max_input_len: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            max_input_len: 4096,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub interpreter: InterpreterConfig,
}

/// Rocket's figment with `APP_` environment overrides, e.g. `APP_INTERPRETER_MAX_INPUT_LEN`
pub fn figment() -> Figment {
    rocket::Config::figment()
        .merge(Env::prefixed("APP_").map(|s| s.as_str().replacen('_', ".", 1).into()))
}
