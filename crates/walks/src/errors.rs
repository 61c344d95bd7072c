use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: f64 },

    #[error("Failed to parse {name}: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: ParseFloatError,
    },
}
