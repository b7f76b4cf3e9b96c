/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_hyper::conn::Standard;
use aws_hyper::test_connection::TestConnection;
use codebuild::error::{CreateProjectErrorKind, ListProjectsErrorKind};
use codebuild::model::{
    ArtifactsType, ComputeType, EnvironmentType, ProjectArtifacts, ProjectEnvironment,
    ProjectSource, SortOrderType, SourceType,
};
use codebuild::{Client, Config, Credentials, Region, SdkError};
use http::header::{HeaderName, AUTHORIZATION, USER_AGENT};
use http::Uri;
use smithy_http::body::SdkBody;

fn client(conn: TestConnection<&'static str>) -> Client {
    let conf = Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys(
            "ANOTREAL",
            "notrealrnrELgWzOk3IfjzDKtFBhDby",
            None,
        ))
        .build();
    Client::from_conf_conn(conf, Standard::new(conn))
}

fn expected_request(target: &str, body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .method("POST")
        .uri(Uri::from_static("https://codebuild.us-east-1.amazonaws.com/"))
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", target)
        .body(SdkBody::from(body))
        .unwrap()
}

fn ignored_headers() -> Vec<HeaderName> {
    vec![
        AUTHORIZATION,
        USER_AGENT,
        HeaderName::from_static("x-amz-user-agent"),
        HeaderName::from_static("x-amz-date"),
    ]
}

#[tokio::test]
async fn list_projects() {
    let conn = TestConnection::new(vec![(
        expected_request(
            "CodeBuild_20161006.ListProjects",
            r#"{"sortBy":"NAME","sortOrder":"ASCENDING"}"#,
        ),
        http::Response::builder()
            .status(200)
            .header("x-amzn-requestid", "bd1e1d2e")
            .body(r#"{"projects":["api","web"],"nextToken":"abc"}"#)
            .unwrap(),
    )]);
    let client = client(conn.clone());
    let resp = client
        .list_projects()
        .sort_by(codebuild::model::ProjectSortByType::Name)
        .sort_order(SortOrderType::Ascending)
        .send()
        .await
        .expect("success");
    assert_eq!(resp.projects, Some(vec!["api".to_owned(), "web".to_owned()]));
    assert_eq!(resp.next_token.as_deref(), Some("abc"));
    assert_eq!(conn.requests().len(), 1);
    conn.requests()[0].assert_matches(ignored_headers());
}

#[tokio::test]
async fn create_project() {
    let conn = TestConnection::new(vec![(
        expected_request(
            "CodeBuild_20161006.CreateProject",
            r#"{
                "name": "demo",
                "source": {"type": "GITHUB", "location": "https://github.com/x/y"},
                "artifacts": {"type": "NO_ARTIFACTS"},
                "environment": {"type": "LINUX_CONTAINER", "image": "aws/codebuild/standard:5.0", "computeType": "BUILD_GENERAL1_SMALL"},
                "serviceRole": "arn:aws:iam::123456789012:role/codebuild"
            }"#,
        ),
        http::Response::builder()
            .status(200)
            .body(
                r#"{"project": {"name": "demo", "arn": "arn:aws:codebuild:us-east-1:123456789012:project/demo", "created": 1612345678.25, "source": {"type": "GITHUB", "location": "https://github.com/x/y"}}}"#,
            )
            .unwrap(),
    )]);
    let client = client(conn.clone());
    let resp = client
        .create_project()
        .name("demo")
        .source(
            ProjectSource::builder()
                .r#type(SourceType::Github)
                .location("https://github.com/x/y")
                .build(),
        )
        .artifacts(
            ProjectArtifacts::builder()
                .r#type(ArtifactsType::NoArtifacts)
                .build(),
        )
        .environment(
            ProjectEnvironment::builder()
                .r#type(EnvironmentType::LinuxContainer)
                .image("aws/codebuild/standard:5.0")
                .compute_type(ComputeType::BuildGeneral1Small)
                .build(),
        )
        .service_role("arn:aws:iam::123456789012:role/codebuild")
        .send()
        .await
        .expect("success");
    let project = resp.project.unwrap();
    assert_eq!(project.name.as_deref(), Some("demo"));
    assert_eq!(
        project.created,
        Some(smithy_types::Instant::from_fractional_seconds(1612345678, 0.25))
    );
    conn.requests()[0].assert_matches(ignored_headers());
}

#[tokio::test]
async fn modeled_error() {
    let conn = TestConnection::new(vec![(
        expected_request("CodeBuild_20161006.CreateProject", ""),
        http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "req-42")
            .body(
                r#"{"__type":"com.amazonaws.codebuild#AccountLimitExceededException","message":"too many projects"}"#,
            )
            .unwrap(),
    )]);
    let client = client(conn.clone());
    let err = client
        .create_project()
        .name("demo")
        .source(ProjectSource::builder().r#type(SourceType::NoSource).build())
        .artifacts(ProjectArtifacts::builder().r#type(ArtifactsType::NoArtifacts).build())
        .environment(ProjectEnvironment::builder().build())
        .service_role("role")
        .send()
        .await
        .expect_err("service returned an error");
    match err {
        SdkError::ServiceError { err, .. } => {
            assert_eq!(err.request_id(), Some("req-42"));
            assert_eq!(err.message(), Some("too many projects"));
            assert!(matches!(
                err.kind,
                CreateProjectErrorKind::AccountLimitExceededException(_)
            ));
        }
        other => panic!("expected a service error, got {:?}", other),
    }
    assert_eq!(conn.requests().len(), 1);
}

#[tokio::test]
async fn unmodeled_error_converts_to_unhandled() {
    let conn = TestConnection::new(vec![(
        expected_request("CodeBuild_20161006.ListProjects", "{}"),
        http::Response::builder()
            .status(400)
            .body(r#"{"__type":"UnrecognizedClientException","message":"bad token"}"#)
            .unwrap(),
    )]);
    let client = client(conn);
    let err = client.list_projects().send().await.unwrap_err();
    if let SdkError::ServiceError { err, .. } = &err {
        assert_eq!(err.code(), Some("UnrecognizedClientException"));
        assert!(matches!(err.kind, ListProjectsErrorKind::Unhandled(_)));
    } else {
        panic!("expected a service error, got {:?}", err);
    }
    let err: codebuild::Error = err.into();
    assert!(matches!(err, codebuild::Error::Unhandled(_)));
}

#[tokio::test]
async fn modeled_error_converts_to_service_error() {
    let conn = TestConnection::new(vec![(
        expected_request("CodeBuild_20161006.StopBuild", ""),
        http::Response::builder()
            .status(400)
            .body(r#"{"__type":"ResourceNotFoundException","message":"Build not found"}"#)
            .unwrap(),
    )]);
    let client = client(conn);
    let err: codebuild::Error = client
        .stop_build()
        .id("p:1")
        .send()
        .await
        .unwrap_err()
        .into();
    match err {
        codebuild::Error::ResourceNotFoundException(inner) => {
            assert_eq!(inner.message(), Some("Build not found"))
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn missing_required_member_is_not_sent() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = client(conn.clone());
    let err = client.batch_get_builds().send().await.unwrap_err();
    assert!(matches!(err, SdkError::ConstructionFailure(_)));
    assert!(conn.requests().is_empty());
}

#[tokio::test]
async fn start_build_returns_the_build() {
    let conn = TestConnection::new(vec![(
        expected_request(
            "CodeBuild_20161006.StartBuild",
            r#"{"projectName":"demo","sourceVersion":"main"}"#,
        ),
        http::Response::builder()
            .status(200)
            .body(r#"{"build":{"id":"demo:7f3c","buildNumber":3,"buildStatus":"IN_PROGRESS","currentPhase":"QUEUED"}}"#)
            .unwrap(),
    )]);
    let client = client(conn.clone());
    let resp = client
        .start_build()
        .project_name("demo")
        .source_version("main")
        .send()
        .await
        .expect("success");
    let build = resp.build.expect("build present");
    assert_eq!(build.id.as_deref(), Some("demo:7f3c"));
    assert_eq!(build.build_number, Some(3));
    assert_eq!(build.current_phase.as_deref(), Some("QUEUED"));
    conn.requests()[0].assert_matches(ignored_headers());
}

#[tokio::test]
async fn exception_outside_operation_errors_is_typed_by_code() {
    let conn = TestConnection::new(vec![(
        expected_request("CodeBuild_20161006.ListProjects", "{}"),
        http::Response::builder()
            .status(400)
            .body(r#"{"__type":"ResourceNotFoundException","message":"no such account"}"#)
            .unwrap(),
    )]);
    let client = client(conn);
    let err = client.list_projects().send().await.unwrap_err();
    assert!(matches!(
        err.service_error().map(|e| &e.kind),
        Some(ListProjectsErrorKind::Unhandled(_))
    ));
    let err: codebuild::Error = err.into();
    assert!(matches!(err, codebuild::Error::ResourceNotFoundException(_)));
}
