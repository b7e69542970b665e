//! Comma-separated list flags and the flag set they plug into.
//!
//! ```text
//! register (var / string_list / int_list_var) → parse(args) → Value::set per occurrence
//! ```
//!
//! A [`FlagSet`] is the injectable registry; [`global`] wraps one
//! process-wide instance for CLI ergonomics.

mod element;
mod error;
pub mod global;
mod list;
mod parser;
mod registry;
mod value;

pub use element::ListElement;
pub use error::{FlagError, ValueError};
pub use list::{join_list, split_list, IntList, ListValue, SharedList, StringList, SEPARATOR};
pub use registry::{Flag, FlagSet};
pub use value::{Getter, Value};
