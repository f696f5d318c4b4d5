//! Collaborator contracts consumed by the launch resolver.
//!
//! All decision logic lives in the resolver; these traits cover the external
//! lookups it depends on. The trait-based design enables mocking in tests
//! while production implementations talk to the Java language server and the
//! bundled runner assets.

use async_trait::async_trait;
use camino::Utf8PathBuf;

use super::error::{ArtifactLookupError, ResolutionError};
use super::model::{JUnitLaunchArguments, JUnitLaunchQuery};
use super::overrides::ExecutionConfig;

/// Gateway that resolves baseline launch arguments for a test run.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TestArgumentGateway: Send + Sync {
    /// Resolve per-target launch arguments for JUnit-style kinds.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError`] when the target cannot be found, is
    /// ambiguous, or its project cannot be resolved.
    async fn junit_launch_arguments(
        &self,
        query: &JUnitLaunchQuery,
    ) -> Result<JUnitLaunchArguments, ResolutionError>;

    /// Resolve project-level launch arguments for TestNG runs.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError`] when the project cannot be resolved.
    async fn testng_launch_arguments(
        &self,
        project_name: &str,
    ) -> Result<JUnitLaunchArguments, ResolutionError>;
}

/// Runner-specific assets and argument derivation, used only for TestNG.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TestRunner: Send + Sync {
    /// Fully-qualified entry-point class of the runner.
    fn main_class_name(&self) -> &str;

    /// Filesystem path of the runner jar, appended to the classpath.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactLookupError`] when the jar cannot be located.
    async fn runner_jar_path(&self) -> Result<Utf8PathBuf, ArtifactLookupError>;

    /// Filesystem path of the runner support library, appended after the
    /// jar.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactLookupError`] when the library cannot be located.
    async fn runner_lib_path(&self) -> Result<Utf8PathBuf, ArtifactLookupError>;

    /// Derives application arguments from the override configuration. An
    /// absent override is presented as an empty configuration.
    fn application_args(&self, config: &ExecutionConfig) -> Vec<String>;
}

/// Process-wide source of unique launch-name tokens.
///
/// Implementations must be safe under concurrent use and must never emit
/// the same token twice within a process.
pub trait NameSequence: Send + Sync {
    /// Returns the next token.
    fn next_token(&self) -> String;
}
