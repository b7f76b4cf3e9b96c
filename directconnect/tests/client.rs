/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_hyper::conn::Standard;
use aws_hyper::test_connection::TestConnection;
use directconnect::error::TagResourceErrorKind;
use directconnect::model::{ConnectionState, LagState, Tag};
use directconnect::{Client, Config, Credentials, Region, SdkError};
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
        .uri(Uri::from_static("https://directconnect.us-east-1.amazonaws.com/"))
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
async fn describe_locations() {
    let conn = TestConnection::new(vec![(
        expected_request("OvertureService.DescribeLocations", "{}"),
        http::Response::builder()
            .status(200)
            .body(
                r#"{"locations":[{"locationCode":"EqDC2","locationName":"Equinix DC1 - DC6, DC10, DC11","region":"us-east-1","availablePortSpeeds":["1Gbps","10Gbps"],"availableProviders":[]}]}"#,
            )
            .unwrap(),
    )]);
    let client = client(conn.clone());
    let resp = client.describe_locations().send().await.expect("success");
    let locations = resp.locations.unwrap();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].location_code.as_deref(), Some("EqDC2"));
    assert_eq!(
        locations[0].available_port_speeds,
        Some(vec!["1Gbps".to_owned(), "10Gbps".to_owned()])
    );
    assert_eq!(locations[0].available_providers, Some(vec![]));
    conn.requests()[0].assert_matches(ignored_headers());
}

#[tokio::test]
async fn create_connection() {
    let conn = TestConnection::new(vec![(
        expected_request(
            "OvertureService.CreateConnection",
            r#"{"location":"EqDC2","bandwidth":"1Gbps","connectionName":"primary","tags":[{"key":"env","value":"prod"}]}"#,
        ),
        http::Response::builder()
            .status(200)
            .body(
                r#"{"ownerAccount":"123456789012","connectionId":"dxcon-fg5678gh","connectionName":"primary","connectionState":"requested","region":"us-east-1","location":"EqDC2","bandwidth":"1Gbps","tags":[{"key":"env","value":"prod"}]}"#,
            )
            .unwrap(),
    )]);
    let client = client(conn.clone());
    let resp = client
        .create_connection()
        .location("EqDC2")
        .bandwidth("1Gbps")
        .connection_name("primary")
        .tags(Tag::builder().key("env").value("prod").build())
        .send()
        .await
        .expect("success");
    assert_eq!(resp.connection_id.as_deref(), Some("dxcon-fg5678gh"));
    assert_eq!(resp.connection_state, Some(ConnectionState::Requested));
    conn.requests()[0].assert_matches(ignored_headers());
}

#[tokio::test]
#[allow(deprecated)]
async fn deprecated_operation_still_dispatches() {
    let conn = TestConnection::new(vec![(
        expected_request(
            "OvertureService.DescribeConnectionsOnInterconnect",
            r#"{"interconnectId":"dxcon-ffabc123"}"#,
        ),
        http::Response::builder()
            .status(200)
            .body(r#"{"connections":[{"connectionId":"dxcon-1","lagId":"dxlag-1","connectionState":"available"}]}"#)
            .unwrap(),
    )]);
    let client = client(conn.clone());
    let resp = client
        .describe_connections_on_interconnect()
        .interconnect_id("dxcon-ffabc123")
        .send()
        .await
        .expect("success");
    assert_eq!(resp.connections.unwrap()[0].lag_id.as_deref(), Some("dxlag-1"));
    conn.requests()[0].assert_matches(ignored_headers());
}

#[tokio::test]
async fn update_lag() {
    let conn = TestConnection::new(vec![(
        expected_request(
            "OvertureService.UpdateLag",
            r#"{"lagId":"dxlag-1","minimumLinks":2}"#,
        ),
        http::Response::builder()
            .status(200)
            .body(r#"{"lagId":"dxlag-1","lagState":"available","minimumLinks":2,"numberOfConnections":2,"connections":[{"connectionId":"dxcon-1"},{"connectionId":"dxcon-2"}]}"#)
            .unwrap(),
    )]);
    let client = client(conn.clone());
    let resp = client
        .update_lag()
        .lag_id("dxlag-1")
        .minimum_links(2)
        .send()
        .await
        .expect("success");
    assert_eq!(resp.lag_state, Some(LagState::Available));
    assert_eq!(resp.connections.map(|c| c.len()), Some(2));
    conn.requests()[0].assert_matches(ignored_headers());
}

#[tokio::test]
async fn too_many_tags() {
    let conn = TestConnection::new(vec![(
        expected_request("OvertureService.TagResource", ""),
        http::Response::builder()
            .status(400)
            .body(r#"{"__type":"TooManyTagsException","message":"limit is 50"}"#)
            .unwrap(),
    )]);
    let client = client(conn);
    let err = client
        .tag_resource()
        .resource_arn("arn:aws:directconnect:us-east-1:123456789012:dxcon/dxcon-1")
        .tags(Tag::builder().key("k").build())
        .send()
        .await
        .unwrap_err();
    match &err {
        SdkError::ServiceError { err, .. } => {
            assert!(matches!(err.kind, TagResourceErrorKind::TooManyTagsException(_)));
            assert_eq!(err.message(), Some("limit is 50"));
        }
        other => panic!("expected a service error, got {:?}", other),
    }
    let err: directconnect::Error = err.into();
    assert!(matches!(err, directconnect::Error::TooManyTagsException(_)));
}

#[tokio::test]
async fn unknown_error_code_is_unhandled() {
    let conn = TestConnection::new(vec![(
        expected_request("OvertureService.DescribeVirtualGateways", "{}"),
        http::Response::builder()
            .status(403)
            .body(r#"{"__type":"AccessDeniedException","message":"denied"}"#)
            .unwrap(),
    )]);
    let client = client(conn);
    let err: directconnect::Error = client
        .describe_virtual_gateways()
        .send()
        .await
        .unwrap_err()
        .into();
    assert!(matches!(err, directconnect::Error::Unhandled(_)));
    assert!(err.to_string().contains("AccessDeniedException"));
}

#[tokio::test]
async fn missing_required_member_is_not_sent() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = client(conn.clone());
    let err = client.delete_lag().send().await.unwrap_err();
    assert!(matches!(err, SdkError::ConstructionFailure(_)));
    assert!(conn.requests().is_empty());
}
