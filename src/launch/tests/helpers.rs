//! Shared fixtures for launch resolution tests.

use camino::Utf8PathBuf;

use crate::launch::{
    JUnitLaunchArguments, MockTestArgumentGateway, MockTestRunner, RunRequest, TestKind, TestScope,
};

/// Entry class reported by the stub TestNG runner.
pub(super) const TESTNG_MAIN_CLASS: &str = "com.microsoft.java.test.runner.Launcher";

/// Jar path reported by the stub TestNG runner.
pub(super) const TESTNG_JAR: &str = "/ext/runner/testng-runner.jar";

/// Library path reported by the stub TestNG runner.
pub(super) const TESTNG_LIB: &str = "/ext/runner/lib/testng-lib.jar";

pub(super) fn sample_baseline() -> JUnitLaunchArguments {
    JUnitLaunchArguments {
        project_name: "demo".to_owned(),
        main_class: "org.eclipse.jdt.internal.junit.runner.RemoteTestRunner".to_owned(),
        working_directory: Utf8PathBuf::from("/workspace/demo"),
        classpath: vec![
            Utf8PathBuf::from("/workspace/demo/bin"),
            Utf8PathBuf::from("/libs/junit.jar"),
        ],
        modulepath: vec![Utf8PathBuf::from("/mods/demo")],
        program_arguments: vec!["-version".to_owned(), "3".to_owned()],
        vm_arguments: vec!["-ea".to_owned()],
    }
}

pub(super) fn sample_request(kind: TestKind, scope: TestScope, is_debug: bool) -> RunRequest {
    RunRequest {
        test_uri: "file:///workspace/demo/src/com/acme/FooTest.java".to_owned(),
        full_name: "com.acme.FooTest#bar".to_owned(),
        project_name: "demo".to_owned(),
        kind,
        scope,
        range: None,
        is_debug,
        hierarchical_package: false,
    }
}

/// Gateway stub that answers the per-target lookup with the given baseline.
pub(super) fn junit_gateway(baseline: JUnitLaunchArguments) -> MockTestArgumentGateway {
    let mut gateway = MockTestArgumentGateway::new();
    gateway
        .expect_junit_launch_arguments()
        .returning(move |_| Ok(baseline.clone()));
    gateway
}

/// Gateway stub that answers the project-only lookup with the given
/// baseline.
pub(super) fn testng_gateway(baseline: JUnitLaunchArguments) -> MockTestArgumentGateway {
    let mut gateway = MockTestArgumentGateway::new();
    gateway
        .expect_testng_launch_arguments()
        .returning(move |_| Ok(baseline.clone()));
    gateway
}

/// Runner stub with no expectations: any call fails the test, which pins
/// down that JUnit resolution never consults the runner.
pub(super) fn idle_runner() -> MockTestRunner {
    MockTestRunner::new()
}

/// Runner stub serving the TestNG entry class, artifacts, and derived args.
pub(super) fn testng_runner() -> MockTestRunner {
    let mut runner = MockTestRunner::new();
    runner
        .expect_main_class_name()
        .return_const(TESTNG_MAIN_CLASS.to_owned());
    runner
        .expect_runner_jar_path()
        .returning(|| Ok(Utf8PathBuf::from(TESTNG_JAR)));
    runner
        .expect_runner_lib_path()
        .returning(|| Ok(Utf8PathBuf::from(TESTNG_LIB)));
    runner
        .expect_application_args()
        .returning(|config| config.args.clone().unwrap_or_default());
    runner
}
