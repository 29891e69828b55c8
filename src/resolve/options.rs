//! Declared command-line options and name-based lookup.
//!
//! The command-line layer hands over one [`CommandOption`] per declared
//! argument. Steps look options up through an [`OptionRegistry`] keyed by a
//! per-command [`OptionId`] enum instead of passing names around.

use crate::error::ResolveError;
use std::collections::HashMap;
use std::hash::Hash;

/// How an option takes values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// A flag; present or not.
    NoValue,
    SingleValue,
    /// May appear bare or with one value.
    SingleOrNoValue,
    MultipleValue,
}

/// A declared command-line option and whatever the parser put in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOption {
    long_name: String,
    kind: OptionKind,
    present: bool,
    values: Vec<String>,
}

impl CommandOption {
    pub fn new(long_name: impl Into<String>, kind: OptionKind) -> Self {
        Self {
            long_name: long_name.into(),
            kind,
            present: false,
            values: Vec::new(),
        }
    }

    /// Mark the option as supplied with `values` (empty for a bare flag).
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.present = true;
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn has_value(&self) -> bool {
        self.present
    }

    /// First supplied value.
    pub fn value(&self) -> Option<&str> {
        if self.present {
            self.values.first().map(String::as_str)
        } else {
            None
        }
    }

    /// `"true"` when a flag was supplied, `None` otherwise.
    pub fn flag_value(&self) -> Option<&'static str> {
        self.present.then_some("true")
    }

    /// Declared long name without `-`/`_` separators.
    pub fn normalized_name(&self) -> String {
        self.long_name.replace(['-', '_'], "")
    }
}

/// Find the option whose long name matches `name`.
///
/// The declared long name is compared case-insensitively with `-` and `_`
/// removed. Flag and single-value kinds match on name alone; other kinds
/// must also hold a value, and with `throw_on_not_found` set an empty one is
/// `OptionHasNoValue`. An option declared with a blank long name is
/// `InvalidOptionName`.
pub fn find_option<'a>(
    options: &'a [CommandOption],
    name: &str,
    throw_on_not_found: bool,
) -> Result<Option<&'a CommandOption>, ResolveError> {
    for option in options {
        if option.long_name.trim().is_empty() {
            return Err(ResolveError::InvalidOptionName);
        }

        if !option.normalized_name().eq_ignore_ascii_case(name) {
            continue;
        }

        match option.kind {
            OptionKind::NoValue | OptionKind::SingleValue | OptionKind::SingleOrNoValue => {
                return Ok(Some(option));
            }
            _ if option.has_value() => return Ok(Some(option)),
            _ if throw_on_not_found => {
                return Err(ResolveError::OptionHasNoValue(option.long_name.clone()));
            }
            _ => {}
        }
    }

    if throw_on_not_found {
        Err(ResolveError::OptionNotFound(name.to_string()))
    } else {
        Ok(None)
    }
}

/// Options declared by one command invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    options: Vec<CommandOption>,
}

impl OptionSet {
    pub fn new(options: Vec<CommandOption>) -> Self {
        Self { options }
    }

    pub fn push(&mut self, option: CommandOption) {
        self.options.push(option);
    }

    pub fn as_slice(&self) -> &[CommandOption] {
        &self.options
    }

    pub fn find(
        &self,
        name: &str,
        throw_on_not_found: bool,
    ) -> Result<Option<&CommandOption>, ResolveError> {
        find_option(&self.options, name, throw_on_not_found)
    }
}

/// Typed identifier for an option a command declares.
///
/// `property` is the name the resolved value is stored under; it doubles as
/// the lookup name and as the leaf of the command's configuration key.
pub trait OptionId: Copy + Eq + Hash {
    fn property(&self) -> &'static str;
}

/// Options bound to typed identifiers once per pass.
#[derive(Debug)]
pub struct OptionRegistry<'a, K: OptionId> {
    bound: HashMap<K, &'a CommandOption>,
}

impl<'a, K: OptionId> OptionRegistry<'a, K> {
    /// Bind each identifier to its declared option. Identifiers with no
    /// matching declaration stay unbound and read as absent.
    pub fn bind(options: &'a OptionSet, ids: &[K]) -> Result<Self, ResolveError> {
        let mut bound = HashMap::with_capacity(ids.len());
        for id in ids {
            if let Some(option) = options.find(id.property(), false)? {
                bound.insert(*id, option);
            }
        }
        Ok(Self { bound })
    }

    pub fn option(&self, id: K) -> Option<&'a CommandOption> {
        self.bound.get(&id).copied()
    }

    /// The option's raw value; flags read as `"true"` when supplied.
    pub fn value(&self, id: K) -> Option<&'a str> {
        let option = self.option(id)?;
        match option.kind {
            OptionKind::NoValue => option.flag_value(),
            _ => option.value(),
        }
    }
}
