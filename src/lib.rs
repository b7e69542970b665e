//! Comma-separated list flags for single-dash command-line parsing.
//!
//! ```
//! use listflags::FlagSet;
//!
//! let mut regions = Vec::new();
//! let mut ids = Vec::new();
//! let mut flags = FlagSet::new("images");
//! flags.string_list_var(&mut regions, &[], "to", "Regions to be used")?;
//! flags.int_list_var(&mut ids, "ids", "IDs to be used")?;
//! flags.parse(["-to", "us-east-1,eu-west-2", "-ids", "123,456"])?;
//! drop(flags);
//!
//! assert_eq!(regions, ["us-east-1", "eu-west-2"]);
//! assert_eq!(ids, [123, 456]);
//! # Ok::<(), listflags::FlagError>(())
//! ```

pub mod config;
pub mod flags;
pub mod logging;

pub use flags::global::{
    args, command_line, configure, int_list_var, parse, parse_from, parsed, string_list,
    string_list_var,
};
pub use flags::{
    join_list, split_list, Flag, FlagError, FlagSet, Getter, IntList, ListElement, ListValue,
    SharedList, StringList, Value, ValueError, SEPARATOR,
};
