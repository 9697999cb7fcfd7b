use thiserror::Error;

/// Raised when an entity is built from untyped arguments that do not fit its constructor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// The number of arguments does not match the constructor.
    #[error("expected {expected} argument(s), found {found}")]
    Arity { expected: usize, found: usize },
    /// An argument could not be converted into the field's type.
    #[error("invalid value '{value}' for {field}: expected {expected}")]
    InvalidType {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
