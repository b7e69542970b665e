//! Flag registry — single source of truth for a parser's flags.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::config::ParseConfig;
use crate::flags::element::ListElement;
use crate::flags::error::{FlagError, ValueError};
use crate::flags::list::{ListValue, SharedList};
use crate::flags::value::Value;

/// A single registered flag.
pub struct Flag<'a> {
    name: String,
    usage: String,
    /// Rendering of the value at registration time.
    default_text: String,
    value: Box<dyn Value + Send + 'a>,
}

impl Flag<'_> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    /// Current value rendered as text.
    pub fn value_text(&self) -> String {
        self.value.to_string()
    }

    pub(super) fn set(&mut self, text: &str) -> Result<(), ValueError> {
        self.value.set(text)
    }
}

impl fmt::Debug for Flag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flag")
            .field("name", &self.name)
            .field("usage", &self.usage)
            .field("default_text", &self.default_text)
            .field("value", &self.value_text())
            .finish()
    }
}

/// A named set of flags plus the state of its last parse.
///
/// Values are borrowed for `'a`, so caller-owned vectors can be read again
/// once the set is dropped.
pub struct FlagSet<'a> {
    name: String,
    pub(super) config: ParseConfig,
    pub(super) flags: BTreeMap<String, Flag<'a>>,
    /// Flags set during parsing, by name.
    pub(super) actual: BTreeSet<String>,
    /// Arguments left after the flags.
    pub(super) args: Vec<String>,
    pub(super) warnings: Vec<String>,
    pub(super) parsed: bool,
}

impl<'a> FlagSet<'a> {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, ParseConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: ParseConfig) -> Self {
        Self {
            name: name.into(),
            config,
            flags: BTreeMap::new(),
            actual: BTreeSet::new(),
            args: Vec::new(),
            warnings: Vec::new(),
            parsed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ParseConfig) {
        self.config = config;
    }

    /// Register `value` under `name`.
    ///
    /// The value's current rendering becomes the flag's default text.
    pub fn var<V>(&mut self, value: V, name: &str, usage: &str) -> Result<(), FlagError>
    where
        V: Value + Send + 'a,
    {
        self.ensure_available(name)?;
        let default_text = value.to_string();
        tracing::trace!(
            flag_set = %self.name,
            flag = name,
            default = %default_text,
            "flag registered"
        );
        self.flags.insert(
            name.to_string(),
            Flag {
                name: name.to_string(),
                usage: usage.to_string(),
                default_text,
                value: Box::new(value),
            },
        );
        Ok(())
    }

    /// Register a string list flag backed by a freshly allocated sequence
    /// holding `default`. Read the returned handle after parsing.
    pub fn string_list(
        &mut self,
        default: &[&str],
        name: &str,
        usage: &str,
    ) -> Result<SharedList<String>, FlagError> {
        let list = SharedList::from_vec(owned(default));
        self.var(list.clone(), name, usage)?;
        Ok(list)
    }

    /// Register a string list flag that writes into `target`, which is first
    /// overwritten with `default`.
    pub fn string_list_var(
        &mut self,
        target: &'a mut Vec<String>,
        default: &[&str],
        name: &str,
        usage: &str,
    ) -> Result<(), FlagError> {
        self.ensure_available(name)?;
        self.var(ListValue::with_default(target, owned(default)), name, usage)
    }

    /// Register an integer list flag that writes into `target`. Whatever
    /// `target` holds is the default.
    pub fn int_list_var(
        &mut self,
        target: &'a mut Vec<i64>,
        name: &str,
        usage: &str,
    ) -> Result<(), FlagError> {
        self.var(ListValue::new(target), name, usage)
    }

    /// Register a list flag of any element type against a shared handle,
    /// overwriting its contents with `default` when one is given.
    pub fn shared_list_var<T>(
        &mut self,
        target: &SharedList<T>,
        default: Option<Vec<T>>,
        name: &str,
        usage: &str,
    ) -> Result<(), FlagError>
    where
        T: ListElement + Send + 'a,
    {
        self.ensure_available(name)?;
        if let Some(default) = default {
            target.replace(default);
        }
        self.var(target.clone(), name, usage)
    }

    pub fn lookup(&self, name: &str) -> Option<&Flag<'a>> {
        self.flags.get(name)
    }

    /// Visit every registered flag in lexicographic order.
    pub fn visit_all(&self, mut f: impl FnMut(&Flag<'a>)) {
        self.flags.values().for_each(|flag| f(flag));
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    fn ensure_available(&self, name: &str) -> Result<(), FlagError> {
        if name.is_empty() || name.starts_with('-') || name.contains('=') {
            return Err(FlagError::BadSyntax {
                arg: name.to_string(),
            });
        }
        if self.flags.contains_key(name) {
            return Err(FlagError::Redefined {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for FlagSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagSet")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("flags", &self.flags.values().collect::<Vec<_>>())
            .field("parsed", &self.parsed)
            .finish()
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
