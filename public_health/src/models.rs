use std::fmt;

use simsci_core::utils::{collect_args, parse_arg};
use simsci_core::{ArgumentError, CoreUtility, Greet};
use tracing::debug;

const GREETING: &str = "Greetings from sim_sci_test_monorepo.public_health!";

/// A simple hello from the public health library.
pub fn hello_public_health() -> &'static str {
    GREETING
}

/// An example health model composed over a [`CoreUtility`].
///
/// All fields are fixed at construction. `population_size` is not
/// range-checked, so negative values are kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HealthModel {
    core: CoreUtility,
    population_size: i64,
    location: String,
}

impl HealthModel {
    pub fn new(name: impl Into<String>, population_size: i64, location: impl Into<String>) -> Self {
        let core = CoreUtility::new(name);
        let location: String = location.into();
        debug!(
            name = core.name(),
            population_size,
            location = %location,
            "health model created"
        );
        Self {
            core,
            population_size,
            location,
        }
    }

    /// Builds a model from untyped `[name, population_size, location]`.
    ///
    /// `population_size` must parse as an integer as given, with no surrounding whitespace.
    pub fn from_args<I, S>(args: I) -> Result<Self, ArgumentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let [name, population_size, location] = collect_args::<3, _, _>(args)
            .inspect_err(|e| debug!(error = %e, "rejected health model arguments"))?;
        let population_size: i64 = parse_arg("population_size", &population_size, "integer")
            .inspect_err(|e| debug!(error = %e, "rejected health model arguments"))?;

        Ok(Self::new(name, population_size, location))
    }

    pub fn core(&self) -> &CoreUtility {
        &self.core
    }

    pub fn population_size(&self) -> i64 {
        self.population_size
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn simulate(&self) -> String {
        format!(
            "Simulating {} for population of {} at {}",
            self.name(),
            self.population_size,
            self.location
        )
    }

    pub fn end(&self) -> String {
        format!("Ending simulation for {}", self.name())
    }
}

impl Greet for HealthModel {
    fn name(&self) -> &str {
        self.core.name()
    }
}

impl fmt::Display for HealthModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.simulate())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
