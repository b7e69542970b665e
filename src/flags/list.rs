//! List values — comma-separated text ↔ `Vec<T>`.
//!
//! Two destinations are supported:
//!
//! - [`ListValue`] borrows a caller-owned `Vec<T>` for the lifetime of the
//!   flag set it is registered with.
//! - [`SharedList`] is a cloneable handle, used where the registry has to
//!   outlive any borrow (the process-wide flag set).
//!
//! Both replace the whole sequence on every non-empty `set`; an empty text is
//! a no-op so a default survives.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::flags::element::ListElement;
use crate::flags::error::ValueError;
use crate::flags::value::{Getter, Value};

/// Separator between list elements. Not escapable.
pub const SEPARATOR: char = ',';

/// Split `text` on [`SEPARATOR`] and parse every token.
///
/// Fails on the first bad token; nothing is returned for the tokens before it.
pub fn split_list<T: ListElement>(text: &str) -> Result<Vec<T>, ValueError> {
    text.split(SEPARATOR).map(T::parse_element).collect()
}

/// Render `items` joined by [`SEPARATOR`].
pub fn join_list<T: fmt::Display>(items: &[T]) -> String {
    let mut out = String::new();
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(&item.to_string());
    }
    out
}

/// Parse `text` into a fresh list, or `None` when the text is empty.
fn parse_replacement<T: ListElement>(text: &str) -> Result<Option<Vec<T>>, ValueError> {
    if text.is_empty() {
        return Ok(None);
    }
    split_list(text).map(Some)
}

/// A list flag bound to a caller-owned `Vec<T>`.
#[derive(Debug)]
pub struct ListValue<'a, T> {
    target: &'a mut Vec<T>,
}

/// A list of strings, e.g. `-to us-east-1,eu-west-2`.
pub type StringList<'a> = ListValue<'a, String>;

/// A list of integers, e.g. `-ids 123,456`.
pub type IntList<'a> = ListValue<'a, i64>;

impl<'a, T: ListElement> ListValue<'a, T> {
    /// Bind to `target`, keeping whatever it already holds as the default.
    pub fn new(target: &'a mut Vec<T>) -> Self {
        Self { target }
    }

    /// Bind to `target` after overwriting it with `default`.
    pub fn with_default(target: &'a mut Vec<T>, default: Vec<T>) -> Self {
        *target = default;
        Self { target }
    }

    pub fn as_slice(&self) -> &[T] {
        self.target.as_slice()
    }
}

impl<T: ListElement> Value for ListValue<'_, T> {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        if let Some(items) = parse_replacement(text)? {
            *self.target = items;
        }
        Ok(())
    }
}

impl<T: ListElement + Clone> Getter for ListValue<'_, T> {
    type Output = Vec<T>;

    fn get(&self) -> Vec<T> {
        self.target.clone()
    }
}

impl<T: fmt::Display> fmt::Display for ListValue<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_list(self.target.as_slice()))
    }
}

/// A list flag whose backing sequence is shared between the registry and the
/// caller. Clones point at the same sequence.
#[derive(Debug)]
pub struct SharedList<T> {
    inner: Arc<Mutex<Vec<T>>>,
}

impl<T> Clone for SharedList<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedList<T> {
    fn default() -> Self {
        Self::from_vec(Vec::new())
    }
}

impl<T> SharedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(items)),
        }
    }

    /// Overwrite the backing sequence.
    pub fn replace(&self, items: Vec<T>) {
        *self.inner.lock() = items;
    }

    /// Run `f` against the current contents without copying them.
    pub fn with<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(self.inner.lock().as_slice())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl<T: Clone> SharedList<T> {
    /// Copy of the current contents.
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.lock().clone()
    }
}

impl<T: ListElement> Value for SharedList<T> {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        if let Some(items) = parse_replacement(text)? {
            self.replace(items);
        }
        Ok(())
    }
}

impl<T: ListElement + Clone> Getter for SharedList<T> {
    type Output = Vec<T>;

    fn get(&self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T: fmt::Display> fmt::Display for SharedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_list(self.inner.lock().as_slice()))
    }
}
