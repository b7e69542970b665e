//! List elements — how a single comma-delimited token becomes a value.

use std::fmt;

use crate::flags::error::ValueError;

/// An element type that a list flag can hold.
pub trait ListElement: Sized + fmt::Display {
    /// Parse one token. The token is passed verbatim: no trimming.
    fn parse_element(token: &str) -> Result<Self, ValueError>;
}

impl ListElement for String {
    fn parse_element(token: &str) -> Result<Self, ValueError> {
        Ok(token.to_string())
    }
}

macro_rules! impl_integer_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ListElement for $ty {
                fn parse_element(token: &str) -> Result<Self, ValueError> {
                    token.parse::<$ty>().map_err(|source| ValueError::Parse {
                        token: token.to_string(),
                        source,
                    })
                }
            }
        )*
    };
}

impl_integer_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
