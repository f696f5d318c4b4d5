//! Request and baseline-argument models for launch resolution.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Test framework that produced an execution request.
///
/// The kind decides which baseline lookup path is used: JUnit kinds resolve
/// per target, while TestNG resolves per project and borrows its entry class
/// and artifacts from the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestKind {
    /// JUnit 4 runner.
    JUnit,
    /// JUnit 5 (Jupiter) runner; the only kind that supports sub-method
    /// source-range filtering.
    JUnit5,
    /// TestNG runner.
    TestNg,
}

/// Granularity of a test-execution request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestScope {
    /// The whole project.
    Root,
    /// A single test class.
    Class,
    /// A single test method.
    Method,
}

/// Zero-based line/character position in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePosition {
    /// Zero-based line number.
    pub line: u32,
    /// Zero-based character offset within the line.
    pub character: u32,
}

/// Start and end of a test method's span in its source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRange {
    /// First position of the span.
    pub start: SourcePosition,
    /// Position just past the end of the span.
    pub end: SourcePosition,
}

/// Immutable description of what to execute and how.
///
/// Produced upstream by the test explorer; the resolver only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    /// URI of the document containing the target.
    pub test_uri: String,
    /// Qualified target identity, optionally `Type#member`.
    pub full_name: String,
    /// Identifier of the project that owns the target.
    pub project_name: String,
    /// Framework that will execute the tests.
    pub kind: TestKind,
    /// Granularity of the run.
    pub scope: TestScope,
    /// Span of the target method in its source file. Only meaningful when
    /// `scope` is [`TestScope::Method`] and `kind` is [`TestKind::JUnit5`].
    pub range: Option<SourceRange>,
    /// Whether the user asked for a debug session.
    pub is_debug: bool,
    /// Whether the project uses hierarchical package presentation.
    pub hierarchical_package: bool,
}

impl RunRequest {
    /// Splits [`full_name`](Self::full_name) into class and method parts on
    /// `#`. The method part is empty when the target is a class or project.
    #[must_use]
    pub fn class_and_method(&self) -> (&str, &str) {
        self.full_name
            .split_once('#')
            .unwrap_or((self.full_name.as_str(), ""))
    }
}

/// Parameters of the per-target baseline lookup.
///
/// TestNG requests never build a query: their lookup is keyed by project
/// name alone (in the original client both funnel through one language
/// server command, with blank target fields for TestNG).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JUnitLaunchQuery {
    /// URI of the document containing the target.
    pub test_uri: String,
    /// Class part of the target identity.
    pub class_name: String,
    /// Method part of the target identity; empty when absent.
    pub method_name: String,
    /// Identifier of the project that owns the target.
    pub project_name: String,
    /// Granularity of the run.
    pub scope: TestScope,
    /// Framework that will execute the tests.
    pub kind: TestKind,
    /// Source span for sub-method filtering. Populated only for
    /// method-scoped JUnit 5 requests.
    pub range: Option<SourceRange>,
    /// Whether the project uses hierarchical package presentation.
    pub hierarchical_package: bool,
}

impl From<&RunRequest> for JUnitLaunchQuery {
    fn from(request: &RunRequest) -> Self {
        let (class_name, method_name) = request.class_and_method();
        let range = match (request.scope, request.kind) {
            (TestScope::Method, TestKind::JUnit5) => request.range,
            _ => None,
        };
        Self {
            test_uri: request.test_uri.clone(),
            class_name: class_name.to_owned(),
            method_name: method_name.to_owned(),
            project_name: request.project_name.clone(),
            scope: request.scope,
            kind: request.kind,
            range,
            hierarchical_package: request.hierarchical_package,
        }
    }
}

/// Baseline launch arguments resolved by the argument gateway.
///
/// This is the canonical per-target execution shape before any user override
/// is applied. Field names follow the language-server wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JUnitLaunchArguments {
    /// Identifier of the resolved project.
    pub project_name: String,
    /// Fully-qualified entry-point class for the run.
    pub main_class: String,
    /// Working directory for the launched JVM.
    pub working_directory: Utf8PathBuf,
    /// Ordered classpath entries.
    pub classpath: Vec<Utf8PathBuf>,
    /// Ordered module path entries.
    pub modulepath: Vec<Utf8PathBuf>,
    /// Ordered program arguments.
    pub program_arguments: Vec<String>,
    /// Ordered VM arguments.
    pub vm_arguments: Vec<String>,
}
