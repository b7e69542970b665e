//! Parse loop — raw args → values set on registered flags.
//!
//! Accepted forms: `-name value`, `--name value`, `-name=value`,
//! `--name=value`. Every flag takes a value. Flag parsing stops at `--`
//! (consumed), at `-`, or at the first non-flag argument (both kept).

use crate::flags::error::FlagError;
use crate::flags::registry::FlagSet;

/// How a single raw argument reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'s> {
    Flag { name: &'s str, value: Option<&'s str> },
    /// `--`
    Terminator,
    /// Anything that is not a flag, including `-`.
    Positional,
}

fn classify(arg: &str) -> Result<Token<'_>, FlagError> {
    if arg.len() < 2 || !arg.starts_with('-') {
        return Ok(Token::Positional);
    }
    let body = match arg.strip_prefix("--") {
        Some("") => return Ok(Token::Terminator),
        Some(rest) => rest,
        None => &arg[1..],
    };
    if body.is_empty() || body.starts_with('-') || body.starts_with('=') {
        return Err(FlagError::BadSyntax {
            arg: arg.to_string(),
        });
    }
    Ok(match body.split_once('=') {
        Some((name, value)) => Token::Flag {
            name,
            value: Some(value),
        },
        None => Token::Flag {
            name: body,
            value: None,
        },
    })
}

fn looks_like_flag(arg: &str) -> bool {
    arg.len() >= 2 && arg.starts_with('-')
}

impl FlagSet<'_> {
    /// Parse `args` (without the program name), calling `set` on each
    /// matching flag once per occurrence.
    ///
    /// Stops at the first error; values set before it stay set.
    pub fn parse<I, S>(&mut self, args: I) -> Result<(), FlagError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parsed = true;
        self.actual.clear();
        self.args.clear();
        self.warnings.clear();
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut idx = 0;

        while let Some(arg) = args.get(idx) {
            let (name, inline_value) = match classify(arg)? {
                Token::Positional => break,
                Token::Terminator => {
                    idx += 1;
                    break;
                }
                Token::Flag { name, value } => (name, value),
            };
            idx += 1;

            if !self.flags.contains_key(name) {
                if !self.config.ignore_unknown {
                    return Err(FlagError::Undefined {
                        name: name.to_string(),
                    });
                }
                let warning = format!("-{}: unknown flag, ignored", name);
                tracing::warn!("{}", warning);
                self.warnings.push(warning);
                // Skip its value too, unless the next arg looks like a flag
                let next_is_value = args.get(idx).is_some_and(|next| !looks_like_flag(next));
                if inline_value.is_none() && next_is_value {
                    idx += 1;
                }
                continue;
            }

            let value = match inline_value {
                Some(value) => value,
                None => match args.get(idx) {
                    Some(next) => {
                        idx += 1;
                        next.as_str()
                    }
                    None => {
                        return Err(FlagError::MissingValue {
                            name: name.to_string(),
                        })
                    }
                },
            };
            self.set(name, value)?;
        }

        self.args = args[idx..].to_vec();
        Ok(())
    }

    /// Set a flag by name, as if it appeared once on the command line.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), FlagError> {
        let flag = self
            .flags
            .get_mut(name)
            .ok_or_else(|| FlagError::Undefined {
                name: name.to_string(),
            })?;
        flag.set(value).map_err(|source| FlagError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
            source,
        })?;
        tracing::debug!(flag = name, value, "flag set");
        self.actual.insert(name.to_string());
        Ok(())
    }

    /// Whether `name` was set by the last parse or by [`FlagSet::set`].
    pub fn is_set(&self, name: &str) -> bool {
        self.actual.contains(name)
    }

    pub fn parsed(&self) -> bool {
        self.parsed
    }

    /// Arguments remaining after the flags.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Warnings from the last parse (ignored unknown flags).
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
