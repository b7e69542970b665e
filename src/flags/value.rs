//! Pluggable value contract — what a flag needs from its destination.

use std::fmt;

use crate::flags::error::ValueError;

/// A flag destination that can be set from command-line text.
///
/// `Display` renders the current contents back to text; the registry uses it
/// to record a flag's default and to report its current value.
pub trait Value: fmt::Display {
    /// Called once per occurrence of the flag with the raw text.
    fn set(&mut self, text: &str) -> Result<(), ValueError>;
}

/// A [`Value`] whose contents can be read back as a native value.
pub trait Getter: Value {
    type Output;

    fn get(&self) -> Self::Output;
}
