//! User-supplied execution overrides.
//!
//! An [`ExecutionConfig`] is a loosely-typed partial descriptor: the fields
//! the resolver understands are typed, and everything else lands in an open
//! map that is copied verbatim onto the resolved descriptor. Two fields
//! accept a second, legacy spelling (`cwd` for `workingDirectory` and
//! `vmargs` for `vmArgs`); the precedence between spellings is fixed here
//! rather than scattered through the merge.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Override keys the resolver consumes itself.
///
/// These never pass through to the descriptor: supplying one of them under
/// an unrecognised casing or alongside the typed field cannot double-assign
/// a resolved field.
pub(crate) const PARSED_KEYS: [&str; 12] = [
    "name",
    "type",
    "request",
    "projectName",
    "mainClass",
    "cwd",
    "workingDirectory",
    "classPaths",
    "modulePaths",
    "args",
    "vmargs",
    "vmArgs",
];

/// User-supplied partial launch configuration.
///
/// No schema validation is applied: malformed values in recognised fields
/// fail deserialisation upstream, and unrecognised keys are accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Working directory override, preferred spelling.
    #[serde(rename = "workingDirectory", skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<Utf8PathBuf>,

    /// Working directory override, legacy spelling with lower precedence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<Utf8PathBuf>,

    /// Classpath entries prepended before the baseline classpath.
    #[serde(rename = "classPaths", skip_serializing_if = "Option::is_none")]
    pub class_paths: Option<Vec<Utf8PathBuf>>,

    /// Module path entries that fully replace the baseline module path.
    #[serde(rename = "modulePaths", skip_serializing_if = "Option::is_none")]
    pub module_paths: Option<Vec<Utf8PathBuf>>,

    /// Program arguments, consumed only by the TestNG application-argument
    /// derivation; JUnit runs keep the baseline program arguments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,

    /// VM arguments appended after the baseline VM arguments, preferred
    /// spelling. Entries are raw JSON values because user configuration may
    /// contain nulls and blanks, which the resolver drops.
    #[serde(rename = "vmArgs", skip_serializing_if = "Option::is_none")]
    pub vm_args: Option<Vec<Value>>,

    /// VM arguments, legacy spelling. Consulted only when `vmArgs` is
    /// absent; ignored entirely when both spellings are present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vmargs: Option<Vec<Value>>,

    /// Unrecognised keys, passed through to the descriptor verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExecutionConfig {
    /// Working directory by spelling precedence: `workingDirectory` wins
    /// over `cwd`.
    #[must_use]
    pub fn effective_working_directory(&self) -> Option<&Utf8Path> {
        self.working_directory
            .as_deref()
            .or_else(|| self.cwd.as_deref())
    }

    /// VM arguments by spelling precedence, with null and blank entries
    /// dropped.
    ///
    /// When both spellings are present only `vmArgs` is consulted and
    /// `vmargs` is silently ignored. This mirrors the original client's
    /// first-present-wins branching and is kept for compatibility even
    /// though it can surprise users who set both.
    #[must_use]
    pub fn effective_vm_args(&self) -> Option<Vec<String>> {
        self.vm_args
            .as_ref()
            .or_else(|| self.vmargs.as_ref())
            .map(|values| {
                values
                    .iter()
                    .filter_map(Value::as_str)
                    .filter(|arg| !arg.is_empty())
                    .map(ToOwned::to_owned)
                    .collect()
            })
    }

    /// Unrecognised entries eligible for pass-through: everything in the
    /// open map except the reserved keys.
    pub(crate) fn pass_through(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.extra
            .iter()
            .filter(|(key, _)| !PARSED_KEYS.contains(&key.as_str()))
    }
}
