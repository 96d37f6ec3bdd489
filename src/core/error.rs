//! Error handling logic

use thiserror::Error;

/// Error types raised at the boundaries of the panel system.
///
/// Gate and rotation-family dispatch is total by construction, so these
/// errors only appear where text or numbers enter the crate: label parsing,
/// parameter binding, configuration loading and state validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    /// A label (gate, rotation family, reference state, command) is not one of
    /// the known options.
    #[error("Unknown {kind} '{label}'")]
    UnknownLabel {
        /// What kind of label was being parsed (e.g. "gate").
        kind: &'static str,
        /// The rejected label.
        label: String,
    },

    /// A circuit was evaluated while a symbolic angle was still unbound.
    #[error("Unbound parameter '{parameter}': assign a value before evaluating the circuit")]
    UnboundParameter {
        /// Name of the unbound parameter
        parameter: String,
    },

    /// A state failed the normalization check.
    #[error("Incoherent state: {message}")]
    Incoherence {
        /// Incoherence failure message
        message: String,
    },

    /// An operation is inconsistent with the circuit or state it is applied to.
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// InvalidOperation failure message
        message: String,
    },

    /// Configuration could not be read, parsed or serialized.
    #[error("Configuration error ({source_name}): {message}")]
    Config {
        /// File path or "<inline>" for in-memory documents.
        source_name: String,
        /// Underlying failure message
        message: String,
    },

    /// Host input/output failure (stdin/stdout in the interactive session).
    #[error("I/O error: {message}")]
    Io {
        /// Io failure message
        message: String,
    },
}

impl PanelError {
    /// Shorthand for [`PanelError::UnknownLabel`].
    pub fn unknown_label(kind: &'static str, label: impl Into<String>) -> Self {
        Self::UnknownLabel { kind, label: label.into() }
    }
}

impl From<std::io::Error> for PanelError {
    fn from(err: std::io::Error) -> Self {
        PanelError::Io { message: err.to_string() }
    }
}
