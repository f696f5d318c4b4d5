//! Launch-configuration resolution for Java test execution.
//!
//! Given a [`RunRequest`] describing what to run and an optional
//! [`ExecutionConfig`] of user overrides, the [`LaunchResolver`] consults an
//! argument gateway for the canonical baseline arguments and merges
//! baseline, computed, and override data into one [`LaunchDescriptor`]
//! ready to hand to the debugger front end.

pub mod descriptor;
pub mod error;
pub mod gateway;
pub mod model;
pub mod overrides;
pub mod resolver;
pub mod sequence;

pub use descriptor::LaunchDescriptor;
pub use error::{ArtifactLookupError, LaunchError, ResolutionError};
pub use gateway::{NameSequence, TestArgumentGateway, TestRunner};
pub use model::{
    JUnitLaunchArguments, JUnitLaunchQuery, RunRequest, SourcePosition, SourceRange, TestKind,
    TestScope,
};
pub use overrides::ExecutionConfig;
pub use resolver::LaunchResolver;
pub use sequence::AtomicNameSequence;

#[cfg(test)]
pub use gateway::{MockTestArgumentGateway, MockTestRunner};

#[cfg(test)]
mod tests;
