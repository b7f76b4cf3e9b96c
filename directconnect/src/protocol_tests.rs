/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::input::{CreateBgpPeerInput, CreatePrivateVirtualInterfaceInput, TagResourceInput};
use crate::model::{
    AddressFamily, BgpStatus, ConnectionState, HasLogicalRedundancy, LoaContentType, NewBgpPeer,
    NewPrivateVirtualInterface, RouteFilterPrefix, Tag, VirtualInterfaceState,
};
use crate::{Config, Credentials, Region};
use protocol_test_helpers::{assert_ok, validate_body, validate_headers};
use smithy_http::operation::BuildError;
use smithy_json::deserialize::json_token_iter;
use smithy_json::serialize::JsonObjectWriter;
use smithy_types::{Blob, Instant};

fn test_config() -> Config {
    Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(Credentials::from_keys("ANOTREAL", "notrealrnrELgWzOk3IfjzDKtFBhDby", None))
        .build()
}

fn body_of<H, R>(op: smithy_http::operation::Operation<H, R>) -> (http::HeaderMap, Vec<u8>) {
    let (request, _) = op.into_request_response();
    let request = request.http();
    (
        request.headers().clone(),
        request.body().bytes().unwrap_or_default().to_vec(),
    )
}

#[test]
fn connection_states_and_unknown_values() {
    let output = crate::json_deser::deser_operation_describe_connections(
        br#"{"connections": [
            {"connectionId": "dxcon-1", "connectionState": "ordering", "hasLogicalRedundancy": "unknown", "vlan": 101, "loaIssueTime": 1600000000, "jumboFrameCapable": true},
            {"connectionId": "dxcon-2", "connectionState": "unknown", "hasLogicalRedundancy": "yes"},
            {"connectionId": "dxcon-3", "connectionState": "retired", "someNewField": [1, 2]}
        ]}"#,
        crate::output::describe_connections_output::Builder::default(),
    )
    .unwrap()
    .build();
    let connections = output.connections.unwrap();
    assert_eq!(connections.len(), 3);
    assert_eq!(connections[0].connection_state, Some(ConnectionState::Ordering));
    assert_eq!(
        connections[0].has_logical_redundancy,
        Some(HasLogicalRedundancy::UnknownValue)
    );
    assert_eq!(connections[0].vlan, Some(101));
    assert_eq!(connections[0].loa_issue_time, Some(Instant::from_epoch_seconds(1600000000)));
    assert_eq!(connections[0].jumbo_frame_capable, Some(true));
    assert_eq!(connections[1].connection_state, Some(ConnectionState::UnknownValue));
    assert_eq!(ConnectionState::UnknownValue.as_str(), "unknown");
    assert_eq!(
        connections[2].connection_state,
        Some(ConnectionState::Unknown("retired".to_owned()))
    );
}

#[test]
fn virtual_interface_fields_are_flattened_into_output() {
    let output = crate::json_deser::deser_operation_create_private_virtual_interface(
        br#"{
            "virtualInterfaceId": "dxvif-1",
            "virtualInterfaceState": "pending",
            "amazonSideAsn": 4294967294,
            "asn": 65000,
            "addressFamily": "ipv4",
            "routeFilterPrefixes": [{"cidr": "10.0.0.0/24"}],
            "bgpPeers": [{"bgpPeerId": "dxpeer-1", "bgpStatus": "up", "awsDeviceV2": "EqDC2-1"}],
            "tags": [{"key": "env", "value": "prod"}]
        }"#,
        crate::output::create_private_virtual_interface_output::Builder::default(),
    )
    .unwrap()
    .build();
    assert_eq!(output.virtual_interface_id.as_deref(), Some("dxvif-1"));
    assert_eq!(output.virtual_interface_state, Some(VirtualInterfaceState::Pending));
    assert_eq!(output.amazon_side_asn, Some(4294967294));
    assert_eq!(output.address_family, Some(AddressFamily::Ipv4));
    let peers = output.bgp_peers.unwrap();
    assert_eq!(peers[0].bgp_status, Some(BgpStatus::Up));
    assert_eq!(peers[0].aws_device_v2.as_deref(), Some("EqDC2-1"));
    assert_eq!(
        output.tags,
        Some(vec![Tag::builder().key("env").value("prod").build()])
    );
}

#[test]
fn loa_content_is_base64_decoded() {
    let output = crate::json_deser::deser_operation_describe_loa(
        br#"{"loaContent": "JVBERi0xLjQ=", "loaContentType": "application/pdf"}"#,
        crate::output::describe_loa_output::Builder::default(),
    )
    .unwrap()
    .build();
    assert_eq!(output.loa_content, Some(Blob::new(&b"%PDF-1.4"[..])));
    assert_eq!(output.loa_content_type, Some(LoaContentType::ApplicationPdf));
}

#[test]
fn tag_survives_write_then_read() {
    let tag = Tag::builder().key("team").value("networking").build();
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_tag(&mut object, &tag);
    object.finish();
    assert_eq!(out, r#"{"key":"team","value":"networking"}"#);
    let mut tokens = json_token_iter(out.as_bytes()).peekable();
    assert_eq!(
        crate::json_deser::deser_structure_tag(&mut tokens).unwrap(),
        Some(tag)
    );
}

#[test]
fn create_private_virtual_interface_request() {
    let input = CreatePrivateVirtualInterfaceInput::builder()
        .connection_id("dxcon-1")
        .new_private_virtual_interface(
            NewPrivateVirtualInterface::builder()
                .virtual_interface_name("vif")
                .vlan(101)
                .asn(65000)
                .mtu(9001)
                .address_family(AddressFamily::Ipv6)
                .direct_connect_gateway_id("dxgw-1")
                .tags(Tag::builder().key("env").value("prod").build())
                .build(),
        )
        .build()
        .unwrap();
    let (headers, body) = body_of(input.make_operation(&test_config()).unwrap());
    assert_eq!(
        headers.get("x-amz-target").unwrap(),
        "OvertureService.CreatePrivateVirtualInterface"
    );
    assert_eq!(
        headers.get("content-type").unwrap(),
        "application/x-amz-json-1.1"
    );
    assert_ok(validate_body(
        &body,
        r#"{"connectionId":"dxcon-1","newPrivateVirtualInterface":{"virtualInterfaceName":"vif","vlan":101,"asn":65000,"mtu":9001,"addressFamily":"ipv6","directConnectGatewayId":"dxgw-1","tags":[{"key":"env","value":"prod"}]}}"#,
    ));
}

#[test]
fn bgp_peer_operation_keeps_wire_names() {
    let input = CreateBgpPeerInput::builder()
        .virtual_interface_id("dxvif-1")
        .new_bgp_peer(
            NewBgpPeer::builder()
                .asn(65001)
                .auth_key("secret")
                .address_family(AddressFamily::Ipv4)
                .build(),
        )
        .build()
        .unwrap();
    let op = input.make_operation(&test_config()).unwrap();
    let (request, _) = op.into_request_response();
    assert_ok(validate_headers(
        request.http(),
        &[("x-amz-target", "OvertureService.CreateBGPPeer")],
    ));
    assert_ok(validate_body(
        request.http().body().bytes().unwrap(),
        r#"{"virtualInterfaceId":"dxvif-1","newBGPPeer":{"asn":65001,"authKey":"secret","addressFamily":"ipv4"}}"#,
    ));
}

#[test]
fn public_interface_route_filters() {
    let input = crate::input::UpdateDirectConnectGatewayAssociationInput::builder()
        .association_id("assoc-1")
        .add_allowed_prefixes_to_direct_connect_gateway(
            RouteFilterPrefix::builder().cidr("10.1.0.0/16").build(),
        )
        .remove_allowed_prefixes_to_direct_connect_gateway(
            RouteFilterPrefix::builder().cidr("10.2.0.0/16").build(),
        )
        .build()
        .unwrap();
    let (_, body) = body_of(input.make_operation(&test_config()).unwrap());
    assert_ok(validate_body(
        &body,
        r#"{"associationId":"assoc-1","addAllowedPrefixesToDirectConnectGateway":[{"cidr":"10.1.0.0/16"}],"removeAllowedPrefixesToDirectConnectGateway":[{"cidr":"10.2.0.0/16"}]}"#,
    ));
}

#[test]
fn required_tags_on_tag_resource() {
    let err = TagResourceInput::builder()
        .resource_arn("arn:aws:directconnect:us-west-2:123456789012:dxcon/dxcon-1")
        .build()
        .expect_err("tags are required");
    assert!(matches!(err, BuildError::MissingField { field: "tags", .. }));
}

#[test]
fn empty_output_accepts_empty_body() {
    let response = http::Response::builder()
        .status(200)
        .body(bytes::Bytes::new())
        .unwrap();
    assert!(crate::operation_deser::parse_tag_resource_response(&response).is_ok());
}

#[test]
fn tag_errors_are_modeled_for_tagging_operations() {
    let response = http::Response::builder()
        .status(400)
        .body(bytes::Bytes::from_static(
            br#"{"__type": "DuplicateTagKeysException", "message": "duplicate key env"}"#,
        ))
        .unwrap();
    let err = crate::operation_deser::parse_tag_resource_error(&response).unwrap_err();
    assert!(err.is_duplicate_tag_keys_exception());
    assert_eq!(err.message(), Some("duplicate key env"));

    let err = crate::operation_deser::parse_describe_locations_error(&response).unwrap_err();
    assert!(matches!(
        err.kind,
        crate::error::DescribeLocationsErrorKind::Unhandled(_)
    ));
    let err: crate::Error = smithy_http::result::SdkError::ServiceError {
        raw: http::Response::builder().status(400).body("").unwrap(),
        err,
    }
    .into();
    match err {
        crate::Error::DuplicateTagKeysException(inner) => {
            assert_eq!(inner.message(), Some("duplicate key env"))
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn client_exception_with_capitalized_message() {
    let response = http::Response::builder()
        .status(400)
        .body(bytes::Bytes::from_static(
            br#"{"__type": "DirectConnectClientException", "Message": "Connection ID dxcon-x is not valid"}"#,
        ))
        .unwrap();
    let err = crate::operation_deser::parse_describe_connections_error(&response).unwrap_err();
    match err.kind {
        crate::error::DescribeConnectionsErrorKind::DirectConnectClientException(inner) => {
            assert_eq!(inner.message(), Some("Connection ID dxcon-x is not valid"));
            assert_eq!(
                inner.to_string(),
                "DirectConnectClientException: Connection ID dxcon-x is not valid"
            );
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[test]
fn shapes_survive_read_then_write() {
    let documents = [
        r#"{"cidr": "203.0.113.0/24"}"#,
        r#"{"key": "env", "value": "prod"}"#,
        r#"{"key": "owner"}"#,
    ];
    let route_filter = |document: &str| {
        let mut tokens = json_token_iter(document.as_bytes()).peekable();
        let prefix = crate::json_deser::deser_structure_route_filter_prefix(&mut tokens)
            .unwrap()
            .unwrap();
        let mut out = String::new();
        let mut object = JsonObjectWriter::new(&mut out);
        crate::json_ser::serialize_structure_route_filter_prefix(&mut object, &prefix);
        object.finish();
        out
    };
    let tag = |document: &str| {
        let mut tokens = json_token_iter(document.as_bytes()).peekable();
        let tag = crate::json_deser::deser_structure_tag(&mut tokens).unwrap().unwrap();
        let mut out = String::new();
        let mut object = JsonObjectWriter::new(&mut out);
        crate::json_ser::serialize_structure_tag(&mut object, &tag);
        object.finish();
        out
    };
    let written = route_filter(documents[0]);
    assert_ok(validate_body(written.as_bytes(), documents[0]));
    assert_eq!(route_filter(&written), written);
    for document in documents[1..].iter().copied() {
        let written = tag(document);
        assert_ok(validate_body(written.as_bytes(), document));
        assert_eq!(tag(&written), written);
    }
}

#[test]
fn asn_outside_32_bits_is_rejected() {
    let result = crate::json_deser::deser_operation_describe_virtual_interfaces(
        br#"{"virtualInterfaces": [{"virtualInterfaceId": "dxvif-1", "asn": 4294967296}]}"#,
        crate::output::describe_virtual_interfaces_output::Builder::default(),
    );
    assert!(result.is_err());
}
