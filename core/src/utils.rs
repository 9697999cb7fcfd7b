//! # Core Utility
//!
//! The named entity every domain model is built on, and the [`Greet`]
//! capability that carries its greeting to anything exposing a name.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::ArgumentError;

/// Anything with a name that can announce itself with the core greeting.
pub trait Greet {
    /// The entity's name, as given at construction.
    fn name(&self) -> &str;

    /// Returns `"Core utility {name} is now ready!"`.
    fn greet(&self) -> String {
        format!("Core utility {} is now ready!", self.name())
    }
}

/// Minimal named entity. The name is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoreUtility {
    name: String,
}

impl CoreUtility {
    /// Stores `name` verbatim. Empty names are accepted.
    pub fn new(name: impl Into<String>) -> Self {
        let name: String = name.into();
        debug!(name = %name, "core utility created");
        Self { name }
    }

    /// Builds a utility from a single untyped argument: `[name]`.
    pub fn from_args<I, S>(args: I) -> Result<Self, ArgumentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let [name] = collect_args::<1, _, _>(args)
            .inspect_err(|e| debug!(error = %e, "rejected core utility arguments"))?;
        Ok(Self::new(name))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Greet for CoreUtility {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for CoreUtility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.greet())
    }
}

/// Collects exactly `N` untyped arguments, failing with [`ArgumentError::Arity`] otherwise.
pub fn collect_args<const N: usize, I, S>(args: I) -> Result<[String; N], ArgumentError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let found: usize = args.len();
    args.try_into()
        .map_err(|_| ArgumentError::Arity { expected: N, found })
}

/// Converts one untyped argument into `T`, exactly as given.
///
/// `expected` names the type in the error, e.g. `"integer"`.
pub fn parse_arg<T: FromStr>(
    field: &'static str,
    value: &str,
    expected: &'static str,
) -> Result<T, ArgumentError> {
    value.parse::<T>().map_err(|_| ArgumentError::InvalidType {
        field,
        value: value.to_string(),
        expected,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
