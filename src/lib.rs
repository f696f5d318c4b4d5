//! Launch-configuration resolution for Java test execution.
//!
//! This crate turns a test-execution request and an optional user override
//! configuration into a single fully-resolved launch descriptor for a
//! debuggable Java process. Baseline argument lookup, runner artifact
//! discovery, and name-token generation are consumed through traits so the
//! engine itself stays a pure, re-entrant merge.

pub mod launch;

pub use launch::{
    ArtifactLookupError, AtomicNameSequence, ExecutionConfig, JUnitLaunchArguments,
    JUnitLaunchQuery, LaunchDescriptor, LaunchError, LaunchResolver, NameSequence, ResolutionError,
    RunRequest, SourcePosition, SourceRange, TestArgumentGateway, TestKind, TestRunner, TestScope,
};
