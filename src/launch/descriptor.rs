//! Resolved launch descriptor handed to the debugger front end.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fully-resolved launch configuration for a Java test run.
///
/// The serialised field names are a wire contract: the debugger front end
/// reads `projectName`, `mainClass`, `classPaths`, `modulePaths`, `vmArgs`
/// and `noDebug` exactly as spelled here. Pass-through entries from the
/// user's override configuration are flattened alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchDescriptor {
    /// Unique, human-readable session name.
    pub name: String,

    /// Debug configuration type discriminator; always [`Self::TYPE`].
    #[serde(rename = "type")]
    pub config_type: String,

    /// Request discriminator; always [`Self::REQUEST`].
    pub request: String,

    /// Identifier of the project that owns the tests.
    pub project_name: String,

    /// Fully-qualified entry-point class.
    pub main_class: String,

    /// Working directory for the launched JVM.
    pub cwd: Utf8PathBuf,

    /// Classpath entries: override entries first, then the baseline, then
    /// runner artifacts for TestNG runs.
    pub class_paths: Vec<Utf8PathBuf>,

    /// Module path entries: the override list verbatim when supplied,
    /// otherwise the baseline list verbatim. Never a concatenation, because
    /// the JVM rejects duplicate module path entries (JEP 261).
    pub module_paths: Vec<Utf8PathBuf>,

    /// Program arguments.
    pub args: Vec<String>,

    /// VM arguments: baseline entries first, then filtered override entries.
    pub vm_args: Vec<String>,

    /// True when the process launches without a debugger attached.
    pub no_debug: bool,

    /// Pass-through entries copied verbatim from the override configuration.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LaunchDescriptor {
    /// Debug configuration type understood by the Java debugger.
    pub const TYPE: &'static str = "java";

    /// Request discriminator for a fresh launch (as opposed to attach).
    pub const REQUEST: &'static str = "launch";
}
