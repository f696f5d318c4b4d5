//! Tests for error propagation from collaborators.

use super::helpers::{idle_runner, sample_baseline, sample_request, testng_gateway};
use crate::launch::{
    ArtifactLookupError, AtomicNameSequence, LaunchError, LaunchResolver,
    MockTestArgumentGateway, MockTestRunner, ResolutionError, TestKind, TestScope,
};

#[tokio::test]
async fn baseline_lookup_failure_propagates_unchanged() {
    let mut gateway = MockTestArgumentGateway::new();
    gateway.expect_junit_launch_arguments().returning(|_| {
        Err(ResolutionError::TargetNotFound {
            message: "com.acme.MissingTest".to_owned(),
        })
    });
    let runner = idle_runner();
    let sequence = AtomicNameSequence::new();
    let resolver = LaunchResolver::new(&gateway, &runner, &sequence);

    let request = sample_request(TestKind::JUnit, TestScope::Class, true);
    let error = resolver
        .resolve(&request, None)
        .await
        .expect_err("resolution should fail");

    assert_eq!(
        error,
        LaunchError::Resolution(ResolutionError::TargetNotFound {
            message: "com.acme.MissingTest".to_owned(),
        }),
        "the gateway error must surface without modification"
    );
}

#[tokio::test]
async fn ambiguous_target_failure_propagates_unchanged() {
    let mut gateway = MockTestArgumentGateway::new();
    gateway.expect_junit_launch_arguments().returning(|_| {
        Err(ResolutionError::AmbiguousTarget {
            message: "two candidates for FooTest".to_owned(),
        })
    });
    let runner = idle_runner();
    let sequence = AtomicNameSequence::new();
    let resolver = LaunchResolver::new(&gateway, &runner, &sequence);

    let request = sample_request(TestKind::JUnit5, TestScope::Class, false);
    let error = resolver
        .resolve(&request, None)
        .await
        .expect_err("resolution should fail");

    assert!(matches!(
        error,
        LaunchError::Resolution(ResolutionError::AmbiguousTarget { .. })
    ));
}

#[tokio::test]
async fn runner_artifact_failure_propagates_unchanged() {
    let gateway = testng_gateway(sample_baseline());
    let mut runner = MockTestRunner::new();
    runner
        .expect_main_class_name()
        .return_const("com.microsoft.java.test.runner.Launcher".to_owned());
    runner.expect_runner_jar_path().returning(|| {
        Err(ArtifactLookupError::ArchiveUnavailable {
            message: "extension bundle not installed".to_owned(),
        })
    });
    let sequence = AtomicNameSequence::new();
    let resolver = LaunchResolver::new(&gateway, &runner, &sequence);

    let request = sample_request(TestKind::TestNg, TestScope::Root, true);
    let error = resolver
        .resolve(&request, None)
        .await
        .expect_err("resolution should fail");

    assert_eq!(
        error,
        LaunchError::ArtifactLookup(ArtifactLookupError::ArchiveUnavailable {
            message: "extension bundle not installed".to_owned(),
        })
    );
}
