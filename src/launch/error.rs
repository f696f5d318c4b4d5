//! Error types surfaced by launch resolution.

use thiserror::Error;

/// Errors from the baseline launch-argument lookup.
///
/// These originate in the argument gateway and propagate to the caller
/// unchanged; the resolver never defaults a main class or classpath after a
/// failed lookup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolutionError {
    /// The requested test target does not exist in the workspace.
    #[error("test target not found: {message}")]
    TargetNotFound {
        /// Detail reported by the argument gateway.
        message: String,
    },

    /// The target name matched more than one candidate.
    #[error("test target is ambiguous: {message}")]
    AmbiguousTarget {
        /// Detail describing the competing candidates.
        message: String,
    },

    /// The containing project could not be resolved.
    #[error("project not resolvable: {message}")]
    ProjectNotResolvable {
        /// Detail about the project lookup failure.
        message: String,
    },

    /// The argument gateway backend failed.
    #[error("argument lookup failed: {message}")]
    Backend {
        /// Transport or backend error detail.
        message: String,
    },
}

/// Errors from TestNG runner artifact lookups.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArtifactLookupError {
    /// The runner jar could not be located.
    #[error("runner jar unavailable: {message}")]
    ArchiveUnavailable {
        /// Detail about the missing archive.
        message: String,
    },

    /// The runner support library could not be located.
    #[error("runner library unavailable: {message}")]
    LibraryUnavailable {
        /// Detail about the missing library.
        message: String,
    },
}

/// Top-level resolution failure.
///
/// Wraps collaborator errors transparently so they reach the caller without
/// losing their original message or variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LaunchError {
    /// The baseline argument lookup failed.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// A runner artifact lookup failed.
    #[error(transparent)]
    ArtifactLookup(#[from] ArtifactLookupError),
}
