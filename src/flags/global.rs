//! The process-wide flag set.
//!
//! A convenience layer over one shared [`FlagSet`] for binaries that don't
//! want to thread a registry through their setup code. Everything here
//! delegates to [`command_line`].

use std::path::Path;
use std::sync::LazyLock;

use parking_lot::{Mutex, MutexGuard};

use crate::config::ParseConfig;
use crate::flags::error::FlagError;
use crate::flags::list::SharedList;
use crate::flags::registry::FlagSet;

static COMMAND_LINE: LazyLock<Mutex<FlagSet<'static>>> =
    LazyLock::new(|| Mutex::new(FlagSet::new(program_name())));

fn program_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "listflags".to_string())
}

/// Lock and return the process-wide flag set.
///
/// Don't hold the guard across a call to another function in this module.
pub fn command_line() -> MutexGuard<'static, FlagSet<'static>> {
    COMMAND_LINE.lock()
}

/// Replace the process-wide parse configuration.
pub fn configure(config: ParseConfig) {
    command_line().set_config(config);
}

/// Register a string list flag on the process-wide set, backed by a freshly
/// allocated sequence holding `default`.
pub fn string_list(
    default: &[&str],
    name: &str,
    usage: &str,
) -> Result<SharedList<String>, FlagError> {
    command_line().string_list(default, name, usage)
}

/// Register a string list flag on the process-wide set that writes into
/// `target`, which is first overwritten with `default`.
pub fn string_list_var(
    target: &SharedList<String>,
    default: &[&str],
    name: &str,
    usage: &str,
) -> Result<(), FlagError> {
    let default = default.iter().map(|s| s.to_string()).collect();
    command_line().shared_list_var(target, Some(default), name, usage)
}

/// Register an integer list flag on the process-wide set that writes into
/// `target`. Its current contents are the default.
pub fn int_list_var(target: &SharedList<i64>, name: &str, usage: &str) -> Result<(), FlagError> {
    command_line().shared_list_var(target, None, name, usage)
}

/// Parse `args` (without the program name) against the process-wide set.
pub fn parse_from<I, S>(args: I) -> Result<(), FlagError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    command_line().parse(args)
}

/// Parse the process arguments against the process-wide set.
pub fn parse() -> Result<(), FlagError> {
    parse_from(std::env::args().skip(1))
}

pub fn parsed() -> bool {
    command_line().parsed()
}

/// Arguments remaining after the last process-wide parse.
pub fn args() -> Vec<String> {
    command_line().args().to_vec()
}
