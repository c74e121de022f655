//! Error types for the engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during startup, export, and serving.

/// Top-level error for the engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: alertgen_core::ConfigError,
    },

    /// Writing the CSV export failed.
    #[error("export error: {source}")]
    Export {
        /// The underlying export error.
        #[from]
        source: alertgen_core::ExportError,
    },

    /// The query server failed to start.
    #[error("observer error: {source}")]
    Observer {
        /// The underlying startup error.
        #[from]
        source: alertgen_observer::StartupError,
    },

    /// The query server task panicked or was cancelled.
    #[error("observer task failed: {message}")]
    ObserverTask {
        /// Description of the task failure.
        message: String,
    },
}
