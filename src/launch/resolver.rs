//! Launch-descriptor resolution.
//!
//! Merges baseline launch arguments, runner-supplied assets, and the user's
//! override configuration into a single [`LaunchDescriptor`] under a fixed
//! precedence policy:
//!
//! - working directory: override `workingDirectory`, else override `cwd`,
//!   else baseline;
//! - classpath: override entries, then baseline entries, then (TestNG only)
//!   the runner jar and library;
//! - module path: override list verbatim when supplied, else baseline list
//!   verbatim, never concatenated;
//! - VM arguments: baseline entries, then filtered override entries;
//! - unrecognised override keys: copied verbatim onto the descriptor.

use camino::Utf8Path;
use serde_json::Map;

use super::descriptor::LaunchDescriptor;
use super::error::LaunchError;
use super::gateway::{NameSequence, TestArgumentGateway, TestRunner};
use super::model::{JUnitLaunchArguments, JUnitLaunchQuery, RunRequest, TestKind};
use super::overrides::ExecutionConfig;

/// Prefix of every generated launch name.
const NAME_PREFIX: &str = "Launch Java Tests";

/// Resolves run requests into launch descriptors.
///
/// Holds no state of its own: concurrent calls only share the name
/// sequence, which is safe under concurrent use by contract.
pub struct LaunchResolver<'collab, Gateway, Runner, Sequence>
where
    Gateway: TestArgumentGateway,
    Runner: TestRunner,
    Sequence: NameSequence,
{
    gateway: &'collab Gateway,
    runner: &'collab Runner,
    sequence: &'collab Sequence,
}

impl<'collab, Gateway, Runner, Sequence> LaunchResolver<'collab, Gateway, Runner, Sequence>
where
    Gateway: TestArgumentGateway,
    Runner: TestRunner,
    Sequence: NameSequence,
{
    /// Creates a resolver over the given collaborators.
    #[must_use]
    pub const fn new(
        gateway: &'collab Gateway,
        runner: &'collab Runner,
        sequence: &'collab Sequence,
    ) -> Self {
        Self {
            gateway,
            runner,
            sequence,
        }
    }

    /// Resolves a run request and optional override configuration into a
    /// complete launch descriptor.
    ///
    /// Resolution either fully succeeds or fails; there is no partial
    /// result. Malformed override fields are accepted as-is and surface
    /// only as a downstream launch failure.
    ///
    /// # Errors
    ///
    /// Propagates [`super::error::ResolutionError`] from the baseline
    /// lookup and, for TestNG runs, [`super::error::ArtifactLookupError`]
    /// from the runner artifact lookups, both unchanged.
    pub async fn resolve(
        &self,
        request: &RunRequest,
        config: Option<&ExecutionConfig>,
    ) -> Result<LaunchDescriptor, LaunchError> {
        let baseline = match request.kind {
            TestKind::TestNg => {
                self.gateway
                    .testng_launch_arguments(&request.project_name)
                    .await?
            }
            TestKind::JUnit | TestKind::JUnit5 => {
                let query = JUnitLaunchQuery::from(request);
                self.gateway.junit_launch_arguments(&query).await?
            }
        };
        tracing::debug!(
            project = %baseline.project_name,
            kind = ?request.kind,
            scope = ?request.scope,
            "resolved baseline launch arguments"
        );

        let JUnitLaunchArguments {
            project_name,
            main_class: baseline_main_class,
            working_directory,
            classpath,
            modulepath,
            program_arguments,
            vm_arguments,
        } = baseline;

        let name = format!("{NAME_PREFIX} - {token}", token = self.sequence.next_token());

        let main_class = match request.kind {
            TestKind::TestNg => self.runner.main_class_name().to_owned(),
            TestKind::JUnit | TestKind::JUnit5 => baseline_main_class,
        };

        let cwd = config
            .and_then(ExecutionConfig::effective_working_directory)
            .map_or(working_directory, Utf8Path::to_path_buf);

        let mut class_paths = Vec::new();
        if let Some(prepended) = config.and_then(|overrides| overrides.class_paths.as_ref()) {
            class_paths.extend(prepended.iter().cloned());
        }
        class_paths.extend(classpath);
        if request.kind == TestKind::TestNg {
            class_paths.push(self.runner.runner_jar_path().await?);
            class_paths.push(self.runner.runner_lib_path().await?);
        }

        // Module paths replace rather than concatenate: the JVM rejects
        // duplicate module path entries (JEP 261).
        let module_paths = config
            .and_then(|overrides| overrides.module_paths.clone())
            .unwrap_or(modulepath);

        let args = match request.kind {
            TestKind::TestNg => config.map_or_else(
                || self.runner.application_args(&ExecutionConfig::default()),
                |overrides| self.runner.application_args(overrides),
            ),
            TestKind::JUnit | TestKind::JUnit5 => program_arguments,
        };

        let mut vm_args = vm_arguments;
        if let Some(appended) = config.and_then(ExecutionConfig::effective_vm_args) {
            vm_args.extend(appended);
        }

        // The debug flag is assigned after pass-through merging, so an
        // override `noDebug` entry never survives.
        let mut extra = Map::new();
        if let Some(overrides) = config {
            for (key, value) in overrides.pass_through() {
                if key != "noDebug" {
                    extra.insert(key.clone(), value.clone());
                }
            }
        }

        Ok(LaunchDescriptor {
            name,
            config_type: LaunchDescriptor::TYPE.to_owned(),
            request: LaunchDescriptor::REQUEST.to_owned(),
            project_name,
            main_class,
            cwd,
            class_paths,
            module_paths,
            args,
            vm_args,
            no_debug: !request.is_debug,
            extra,
        })
    }
}
