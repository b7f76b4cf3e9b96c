/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::input::{CreateProjectInput, ImportSourceCredentialsInput, StartBuildInput};
use crate::model::{
    Build, BuildPhaseType, ComputeType, EnvironmentType, EnvironmentVariable, EnvironmentVariableType, GitSubmodulesConfig,
    ProjectEnvironment, ProjectSource, SourceAuth, SourceAuthType, SourceType, StatusType,
    WebhookFilter, WebhookFilterType,
};
use crate::{Config, Credentials, Region};
use protocol_test_helpers::{assert_ok, validate_body, validate_headers};
use smithy_http::operation::BuildError;
use smithy_json::deserialize::json_token_iter;
use smithy_json::serialize::JsonObjectWriter;
use smithy_types::Instant;

fn write_object(write: impl FnOnce(&mut JsonObjectWriter<'_>)) -> String {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    write(&mut object);
    object.finish();
    out
}

fn read_project_source(json: &str) -> ProjectSource {
    let mut tokens = json_token_iter(json.as_bytes()).peekable();
    crate::json_deser::deser_structure_project_source(&mut tokens)
        .expect("valid document")
        .expect("not null")
}

fn test_config() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys("ANOTREAL", "notrealrnrELgWzOk3IfjzDKtFBhDby", None))
        .build()
}

#[test]
fn github_source_writes_only_set_members() {
    let source = ProjectSource::builder()
        .r#type(SourceType::Github)
        .location("https://github.com/x/y")
        .build();
    let json = write_object(|object| {
        crate::json_ser::serialize_structure_project_source(object, &source)
    });
    assert_eq!(json, r#"{"type":"GITHUB","location":"https://github.com/x/y"}"#);
}

#[test]
fn project_source_document_survives_read_then_write() {
    let document = r#"{
        "type": "GITHUB",
        "location": "https://github.com/x/y",
        "gitCloneDepth": 1,
        "gitSubmodulesConfig": { "fetchSubmodules": true },
        "buildspec": "version: 0.2",
        "auth": { "type": "OAUTH", "resource": "token-arn" },
        "reportBuildStatus": false,
        "insecureSsl": false,
        "sourceIdentifier": "primary"
    }"#;
    let source = read_project_source(document);
    assert_eq!(source.git_clone_depth, Some(1));
    assert_eq!(
        source.git_submodules_config,
        Some(GitSubmodulesConfig::builder().fetch_submodules(true).build())
    );
    let written = write_object(|object| {
        crate::json_ser::serialize_structure_project_source(object, &source)
    });
    assert_ok(validate_body(written.as_bytes(), document));
}

#[test]
fn project_environment_value_survives_write_then_read() {
    let environment = ProjectEnvironment::builder()
        .r#type(EnvironmentType::LinuxContainer)
        .image("aws/codebuild/standard:5.0")
        .compute_type(ComputeType::BuildGeneral12Xlarge)
        .environment_variables(
            EnvironmentVariable::builder()
                .name("STAGE")
                .value("prod")
                .r#type(EnvironmentVariableType::Plaintext)
                .build(),
        )
        .environment_variables(
            EnvironmentVariable::builder()
                .name("TOKEN")
                .value("/build/token")
                .r#type(EnvironmentVariableType::ParameterStore)
                .build(),
        )
        .privileged_mode(true)
        .build();
    let written = write_object(|object| {
        crate::json_ser::serialize_structure_project_environment(object, &environment)
    });
    assert!(written.contains(r#""computeType":"BUILD_GENERAL1_2XLARGE""#));
    let mut tokens = json_token_iter(written.as_bytes()).peekable();
    let read = crate::json_deser::deser_structure_project_environment(&mut tokens)
        .expect("valid document")
        .expect("not null");
    assert_eq!(read, environment);
}

#[test]
fn unknown_members_are_skipped() {
    let body = br#"{
        "projects": [{
            "name": "p",
            "futureField": { "nested": [1, 2, { "a": null }], "flag": true },
            "source": { "type": "S3", "location": "bucket/key", "extra": "ignored" },
            "created": 1612345678
        }],
        "projectsNotFound": ["missing"],
        "somethingNew": 3.5
    }"#;
    let output = crate::json_deser::deser_operation_batch_get_projects(
        body,
        crate::output::batch_get_projects_output::Builder::default(),
    )
    .expect("unknown members are ignored")
    .build();
    let projects = output.projects.expect("projects present");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name.as_deref(), Some("p"));
    assert_eq!(
        projects[0].source.as_ref().and_then(|s| s.r#type.clone()),
        Some(SourceType::S3)
    );
    assert_eq!(projects[0].created, Some(Instant::from_epoch_seconds(1612345678)));
    assert_eq!(output.projects_not_found, Some(vec!["missing".to_owned()]));
}

#[test]
fn null_and_absent_members_stay_unset() {
    let output = crate::json_deser::deser_operation_list_projects(
        br#"{"nextToken": null, "projects": ["a", "b"]}"#,
        crate::output::list_projects_output::Builder::default(),
    )
    .unwrap()
    .build();
    assert_eq!(output.next_token, None);
    assert_eq!(output.projects, Some(vec!["a".to_owned(), "b".to_owned()]));

    let empty = crate::json_deser::deser_operation_list_projects(
        b"",
        crate::output::list_projects_output::Builder::default(),
    )
    .unwrap()
    .build();
    assert_eq!(empty.projects, None);
}

#[test]
fn trailing_tokens_are_rejected() {
    let result = crate::json_deser::deser_operation_list_projects(
        br#"{"projects": []} {}"#,
        crate::output::list_projects_output::Builder::default(),
    );
    assert!(result.is_err());
}

#[test]
fn build_phases_and_fractional_timestamps() {
    let output = crate::json_deser::deser_operation_batch_get_builds(
        br#"{"builds": [{
            "id": "p:1",
            "buildNumber": 7,
            "startTime": 1612345678.5,
            "buildStatus": "SUCCEEDED",
            "buildComplete": true,
            "phases": [
                {"phaseType": "SUBMITTED", "phaseStatus": "SUCCEEDED", "durationInSeconds": 0},
                {"phaseType": "BUILD", "phaseStatus": "FAILED", "contexts": [{"statusCode": "COMMAND_EXECUTION_ERROR", "message": "exit 1"}]}
            ]
        }], "buildsNotFound": []}"#,
        crate::output::batch_get_builds_output::Builder::default(),
    )
    .unwrap()
    .build();
    let builds = output.builds.unwrap();
    let build = &builds[0];
    assert_eq!(build.build_number, Some(7));
    assert_eq!(build.start_time, Some(Instant::from_fractional_seconds(1612345678, 0.5)));
    assert_eq!(build.build_status, Some(StatusType::Succeeded));
    let phases = build.phases.as_ref().unwrap();
    assert_eq!(phases.len(), 2);
    assert_eq!(phases[1].phase_status, Some(StatusType::Failed));
    assert_eq!(
        phases[1].contexts.as_ref().unwrap()[0].message.as_deref(),
        Some("exit 1")
    );
    assert_eq!(output.builds_not_found, Some(vec![]));
}

#[test]
fn test_report_summary_status_counts() {
    let output = crate::json_deser::deser_operation_batch_get_reports(
        br#"{"reports": [{"arn": "r", "testSummary": {"total": 4, "statusCounts": {"SUCCEEDED": 3, "FAILED": 1}, "durationInNanoSeconds": 120000}}]}"#,
        crate::output::batch_get_reports_output::Builder::default(),
    )
    .unwrap()
    .build();
    let summary = output.reports.unwrap()[0].test_summary.clone().unwrap();
    assert_eq!(summary.total, Some(4));
    let counts = summary.status_counts.unwrap();
    assert_eq!(counts.get("SUCCEEDED"), Some(&3));
    assert_eq!(counts.get("FAILED"), Some(&1));
    assert_eq!(summary.duration_in_nano_seconds, Some(120000));
}

#[test]
fn unrecognized_enum_values_are_preserved() {
    let source = read_project_source(r#"{"type": "GITLAB", "location": "x"}"#);
    assert_eq!(source.r#type, Some(SourceType::Unknown("GITLAB".to_owned())));
    let written = write_object(|object| {
        crate::json_ser::serialize_structure_project_source(object, &source)
    });
    assert_eq!(written, r#"{"type":"GITLAB","location":"x"}"#);
    assert_eq!("GITHUB".parse::<SourceType>(), Ok(SourceType::Github));
    assert!(SourceType::values().contains(&"NO_SOURCE"));
}

#[test]
fn start_build_request() {
    let input = StartBuildInput::builder()
        .project_name("my-project")
        .source_version("refs/heads/main")
        .environment_variables_override(
            EnvironmentVariable::builder().name("A").value("1").build(),
        )
        .build()
        .unwrap();
    let op = input.make_operation(&test_config()).unwrap();
    let (request, _) = op.into_request_response();
    let request = request.http();
    assert_eq!(request.method(), "POST");
    assert_eq!(request.uri(), "/");
    assert_ok(validate_headers(
        request,
        &[
            ("content-type", "application/x-amz-json-1.1"),
            ("x-amz-target", "CodeBuild_20161006.StartBuild"),
        ],
    ));
    assert_ok(validate_body(
        request.body().bytes().unwrap(),
        r#"{"projectName":"my-project","sourceVersion":"refs/heads/main","environmentVariablesOverride":[{"name":"A","value":"1"}]}"#,
    ));
}

#[test]
fn nested_webhook_filter_groups() {
    let input = crate::input::CreateWebhookInput::builder()
        .project_name("p")
        .filter_groups(vec![
            WebhookFilter::builder()
                .r#type(WebhookFilterType::Event)
                .pattern("PUSH")
                .build(),
            WebhookFilter::builder()
                .r#type(WebhookFilterType::HeadRef)
                .pattern("^refs/heads/main$")
                .exclude_matched_pattern(false)
                .build(),
        ])
        .build()
        .unwrap();
    let op = input.make_operation(&test_config()).unwrap();
    let (request, _) = op.into_request_response();
    assert_ok(validate_body(
        request.http().body().bytes().unwrap(),
        r#"{"projectName":"p","filterGroups":[[{"type":"EVENT","pattern":"PUSH"},{"type":"HEAD_REF","pattern":"^refs/heads/main$","excludeMatchedPattern":false}]]}"#,
    ));
}

#[test]
fn operation_without_members_sends_empty_object() {
    let op = crate::input::ListCuratedEnvironmentImagesInput::builder()
        .build()
        .unwrap()
        .make_operation(&test_config())
        .unwrap();
    let (request, _) = op.into_request_response();
    assert_eq!(request.http().body().bytes(), Some(&b"{}"[..]));
    assert_ok(validate_headers(
        request.http(),
        &[("x-amz-target", "CodeBuild_20161006.ListCuratedEnvironmentImages")],
    ));
}

#[test]
fn missing_required_member_fails_to_build() {
    let err = CreateProjectInput::builder()
        .name("p")
        .service_role("arn:aws:iam::123456789012:role/build")
        .build()
        .expect_err("source is required");
    assert!(matches!(err, BuildError::MissingField { field: "source", .. }));
}

#[test]
fn sensitive_members_are_redacted() {
    let input = ImportSourceCredentialsInput::builder()
        .token("ghp_secret")
        .server_type(crate::model::ServerType::Github)
        .auth_type(crate::model::AuthType::PersonalAccessToken)
        .build()
        .unwrap();
    let debug = format!("{:?}", input);
    assert!(!debug.contains("ghp_secret"));
    assert!(debug.contains("*** Sensitive Data Redacted ***"));
}

#[test]
fn source_auth_round_trip() {
    let auth = SourceAuth::builder()
        .r#type(SourceAuthType::Oauth)
        .resource("arn")
        .build();
    let written = write_object(|object| crate::json_ser::serialize_structure_source_auth(object, &auth));
    let mut tokens = json_token_iter(written.as_bytes()).peekable();
    assert_eq!(
        crate::json_deser::deser_structure_source_auth(&mut tokens).unwrap(),
        Some(auth)
    );
}

fn error_response(status: u16, body: &'static str) -> http::Response<bytes::Bytes> {
    http::Response::builder()
        .status(status)
        .header("x-amzn-requestid", "req-1")
        .body(bytes::Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn modeled_error_is_mapped_by_name() {
    let response = error_response(
        400,
        r#"{"__type": "com.amazonaws.codebuild#ResourceAlreadyExistsException", "message": "Project already exists: p"}"#,
    );
    let err = crate::operation_deser::parse_create_project_error(&response).unwrap_err();
    assert!(err.is_resource_already_exists_exception());
    assert_eq!(err.code(), Some("ResourceAlreadyExistsException"));
    assert_eq!(err.request_id(), Some("req-1"));
    match err.kind {
        crate::error::CreateProjectErrorKind::ResourceAlreadyExistsException(inner) => {
            assert_eq!(inner.message(), Some("Project already exists: p"))
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[test]
fn unmodeled_error_is_generic() {
    let response = error_response(400, r#"{"__type": "SomeNewException", "Message": "nope"}"#);
    let err = crate::operation_deser::parse_stop_build_error(&response).unwrap_err();
    assert_eq!(err.code(), Some("SomeNewException"));
    assert_eq!(err.message(), Some("nope"));
    assert!(matches!(err.kind, crate::error::StopBuildErrorKind::Unhandled(_)));
}

#[test]
fn exception_from_another_operation_is_typed_service_wide() {
    // OAuthProviderException is only listed for the webhook operations
    let response = error_response(
        400,
        r#"{"__type": "OAuthProviderException", "message": "token revoked"}"#,
    );
    let err = crate::operation_deser::parse_list_builds_error(&response).unwrap_err();
    assert!(matches!(err.kind, crate::error::ListBuildsErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("OAuthProviderException"));

    let err: crate::Error = smithy_http::result::SdkError::ServiceError {
        raw: http::Response::builder().status(400).body("").unwrap(),
        err,
    }
    .into();
    match err {
        crate::Error::OAuthProviderException(inner) => {
            assert_eq!(inner.message(), Some("token revoked"))
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn unknown_code_stays_unhandled_service_wide() {
    let response = error_response(400, r#"{"__type": "SomeNewException"}"#);
    let err = crate::operation_deser::parse_list_builds_error(&response).unwrap_err();
    let err: crate::Error = smithy_http::result::SdkError::ServiceError {
        raw: http::Response::builder().status(400).body("").unwrap(),
        err,
    }
    .into();
    assert!(matches!(err, crate::Error::Unhandled(_)));
}

#[test]
fn out_of_range_integer_is_rejected() {
    let mut tokens = json_token_iter(br#"{"type": "GITHUB", "gitCloneDepth": 4294967297}"#).peekable();
    assert!(crate::json_deser::deser_structure_project_source(&mut tokens).is_err());
}

fn build_response(body: &'static str) -> http::Response<bytes::Bytes> {
    http::Response::builder()
        .status(200)
        .body(bytes::Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn start_build_response() {
    let output = crate::operation_deser::parse_start_build_response(&build_response(
        r#"{"build": {
            "id": "my-project:0b6a",
            "arn": "arn:aws:codebuild:us-east-1:123456789012:build/my-project:0b6a",
            "buildNumber": 12,
            "startTime": 1612345678.123,
            "currentPhase": "SUBMITTED",
            "buildStatus": "IN_PROGRESS",
            "projectName": "my-project",
            "phases": [{"phaseType": "SUBMITTED", "phaseStatus": "SUCCEEDED", "startTime": 1612345678.123}],
            "source": {"type": "GITHUB", "location": "https://github.com/x/y"},
            "logs": {"deepLink": "https://console.aws.amazon.com/cloudwatch", "cloudWatchLogs": {"status": "ENABLED"}},
            "timeoutInMinutes": 60,
            "buildComplete": false,
            "initiator": "alice",
            "exportedEnvironmentVariables": [{"name": "VERSION", "value": "1.2.3"}]
        }}"#,
    ))
    .expect("valid response");
    let build = output.build.expect("build present");
    assert_eq!(build.id.as_deref(), Some("my-project:0b6a"));
    assert_eq!(build.build_number, Some(12));
    assert_eq!(build.build_status, Some(StatusType::InProgress));
    assert_eq!(
        build.start_time,
        Some(Instant::from_secs_and_nanos(1612345678, 123_000_000))
    );
    assert_eq!(
        build.phases.as_ref().unwrap()[0].phase_type,
        Some(BuildPhaseType::Submitted)
    );
    assert_eq!(build.timeout_in_minutes, Some(60));
    assert_eq!(build.build_complete, Some(false));
    assert_eq!(
        build.exported_environment_variables.as_ref().unwrap()[0].value.as_deref(),
        Some("1.2.3")
    );
}

#[test]
fn stop_build_response() {
    let output = crate::operation_deser::parse_stop_build_response(&build_response(
        r#"{"build": {"id": "p:1", "buildStatus": "STOPPED", "buildComplete": true, "endTime": 1612345999}}"#,
    ))
    .expect("valid response");
    let expected = Build::builder()
        .id("p:1")
        .build_status(StatusType::Stopped)
        .build_complete(true)
        .end_time(Instant::from_epoch_seconds(1612345999))
        .build();
    assert_eq!(output.build, Some(expected.clone()));
    assert_eq!(
        crate::output::StopBuildOutput::builder()
            .build_value(expected)
            .build(),
        output
    );
}

/// Reads a document into a shape and writes the shape back out.
macro_rules! read_then_write {
    ($deser:path, $ser:path) => {
        (|document: &str| -> String {
            let mut tokens = json_token_iter(document.as_bytes()).peekable();
            let shape = $deser(&mut tokens).expect("valid document").expect("not null");
            write_object(|object| $ser(object, &shape))
        }) as fn(&str) -> String
    };
}

#[test]
fn shapes_survive_read_then_write() {
    use crate::json_deser::*;
    use crate::json_ser::*;
    let cases: Vec<(&str, fn(&str) -> String)> = vec![
        (
            r#"{"status": "ENABLED", "groupName": "/codebuild/p", "streamName": "build"}"#,
            read_then_write!(deser_structure_cloud_watch_logs_config, serialize_structure_cloud_watch_logs_config),
        ),
        (
            r#"{"name": "DB_PASSWORD", "value": "prod/db", "type": "SECRETS_MANAGER"}"#,
            read_then_write!(deser_structure_environment_variable, serialize_structure_environment_variable),
        ),
        (
            r#"{"fetchSubmodules": false}"#,
            read_then_write!(deser_structure_git_submodules_config, serialize_structure_git_submodules_config),
        ),
        (
            r#"{"cloudWatchLogs": {"status": "DISABLED"}, "s3Logs": {"status": "ENABLED", "location": "logs-bucket/p", "encryptionDisabled": true}}"#,
            read_then_write!(deser_structure_logs_config, serialize_structure_logs_config),
        ),
        (
            r#"{"type": "S3", "location": "artifacts", "path": "out", "namespaceType": "BUILD_ID", "name": "app.zip", "packaging": "ZIP", "overrideArtifactName": true, "encryptionDisabled": false, "artifactIdentifier": "primary"}"#,
            read_then_write!(deser_structure_project_artifacts, serialize_structure_project_artifacts),
        ),
        (
            r#"{"type": "LOCAL", "modes": ["LOCAL_DOCKER_LAYER_CACHE", "LOCAL_SOURCE_CACHE"]}"#,
            read_then_write!(deser_structure_project_cache, serialize_structure_project_cache),
        ),
        (
            r#"{"type": "ARM_CONTAINER", "image": "aws/codebuild/amazonlinux2-aarch64-standard:2.0", "computeType": "BUILD_GENERAL1_LARGE", "environmentVariables": [{"name": "A", "value": "1"}], "privilegedMode": false, "certificate": "certs/ca.pem", "registryCredential": {"credential": "arn:aws:secretsmanager:us-east-1:123456789012:secret:hub", "credentialProvider": "SECRETS_MANAGER"}, "imagePullCredentialsType": "SERVICE_ROLE"}"#,
            read_then_write!(deser_structure_project_environment, serialize_structure_project_environment),
        ),
        (
            r#"{"type": "EFS", "location": "fs-1.efs.us-east-1.amazonaws.com:/cache", "mountPoint": "/mnt/cache", "identifier": "cache", "mountOptions": "nfsvers=4.1"}"#,
            read_then_write!(deser_structure_project_file_system_location, serialize_structure_project_file_system_location),
        ),
        (
            r#"{"type": "CODECOMMIT", "location": "https://git-codecommit.us-east-1.amazonaws.com/v1/repos/r", "gitCloneDepth": 0, "insecureSsl": true}"#,
            read_then_write!(deser_structure_project_source, serialize_structure_project_source),
        ),
        (
            r#"{"sourceIdentifier": "secondary", "sourceVersion": "refs/tags/v1"}"#,
            read_then_write!(deser_structure_project_source_version, serialize_structure_project_source_version),
        ),
        (
            r#"{"credential": "hub-credentials", "credentialProvider": "SECRETS_MANAGER"}"#,
            read_then_write!(deser_structure_registry_credential, serialize_structure_registry_credential),
        ),
        (
            r#"{"exportConfigType": "S3", "s3Destination": {"bucket": "reports", "path": "unit", "packaging": "ZIP", "encryptionKey": "alias/reports", "encryptionDisabled": false}}"#,
            read_then_write!(deser_structure_report_export_config, serialize_structure_report_export_config),
        ),
        (
            r#"{"status": "DISABLED", "encryptionDisabled": false}"#,
            read_then_write!(deser_structure_s3_logs_config, serialize_structure_s3_logs_config),
        ),
        (
            r#"{"bucket": "reports", "packaging": "NONE"}"#,
            read_then_write!(deser_structure_s3_report_export_config, serialize_structure_s3_report_export_config),
        ),
        (
            r#"{"type": "OAUTH", "resource": "arn:aws:codebuild:us-east-1:123456789012:token/github"}"#,
            read_then_write!(deser_structure_source_auth, serialize_structure_source_auth),
        ),
        (
            r#"{"key": "team", "value": "ci"}"#,
            read_then_write!(deser_structure_tag, serialize_structure_tag),
        ),
        (
            r#"{"vpcId": "vpc-1", "subnets": ["subnet-a", "subnet-b"], "securityGroupIds": ["sg-1"]}"#,
            read_then_write!(deser_structure_vpc_config, serialize_structure_vpc_config),
        ),
        (
            r#"{"type": "FILE_PATH", "pattern": "^src/", "excludeMatchedPattern": true}"#,
            read_then_write!(deser_structure_webhook_filter, serialize_structure_webhook_filter),
        ),
    ];
    for (document, read_then_write) in cases {
        let written = read_then_write(document);
        assert_ok(validate_body(written.as_bytes(), document));
        assert_eq!(read_then_write(&written), written, "{}", document);
    }
}
