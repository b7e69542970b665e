//! Errors raised while setting values and parsing flags.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors a flag value can raise from `set`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// A comma-delimited token is not a valid base-10 integer.
    #[error("invalid list element '{token}': {source}")]
    Parse {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Errors raised while registering or parsing flags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagError {
    #[error("flag redefined: {name}")]
    Redefined { name: String },

    #[error("flag provided but not defined: -{name}")]
    Undefined { name: String },

    #[error("flag needs an argument: -{name}")]
    MissingValue { name: String },

    #[error("bad flag syntax: {arg}")]
    BadSyntax { arg: String },

    #[error("invalid value \"{value}\" for flag -{name}: {source}")]
    InvalidValue {
        name: String,
        value: String,
        #[source]
        source: ValueError,
    },
}
