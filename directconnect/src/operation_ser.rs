/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn serialize_operation_accept_direct_connect_gateway_association_proposal(
    input: &crate::input::AcceptDirectConnectGatewayAssociationProposalInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_accept_direct_connect_gateway_association_proposal_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_allocate_connection_on_interconnect(
    input: &crate::input::AllocateConnectionOnInterconnectInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_allocate_connection_on_interconnect_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_allocate_hosted_connection(
    input: &crate::input::AllocateHostedConnectionInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_allocate_hosted_connection_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_allocate_private_virtual_interface(
    input: &crate::input::AllocatePrivateVirtualInterfaceInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_allocate_private_virtual_interface_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_allocate_public_virtual_interface(
    input: &crate::input::AllocatePublicVirtualInterfaceInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_allocate_public_virtual_interface_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_allocate_transit_virtual_interface(
    input: &crate::input::AllocateTransitVirtualInterfaceInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_allocate_transit_virtual_interface_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_associate_connection_with_lag(
    input: &crate::input::AssociateConnectionWithLagInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_associate_connection_with_lag_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_associate_hosted_connection(
    input: &crate::input::AssociateHostedConnectionInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_associate_hosted_connection_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_associate_virtual_interface(
    input: &crate::input::AssociateVirtualInterfaceInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_associate_virtual_interface_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_confirm_connection(
    input: &crate::input::ConfirmConnectionInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_confirm_connection_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_confirm_private_virtual_interface(
    input: &crate::input::ConfirmPrivateVirtualInterfaceInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_confirm_private_virtual_interface_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_confirm_public_virtual_interface(
    input: &crate::input::ConfirmPublicVirtualInterfaceInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_confirm_public_virtual_interface_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_confirm_transit_virtual_interface(
    input: &crate::input::ConfirmTransitVirtualInterfaceInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_confirm_transit_virtual_interface_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_create_bgp_peer(
    input: &crate::input::CreateBgpPeerInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_create_bgp_peer_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_create_connection(
    input: &crate::input::CreateConnectionInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_create_connection_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_create_direct_connect_gateway(
    input: &crate::input::CreateDirectConnectGatewayInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_create_direct_connect_gateway_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_create_direct_connect_gateway_association(
    input: &crate::input::CreateDirectConnectGatewayAssociationInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_create_direct_connect_gateway_association_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_create_direct_connect_gateway_association_proposal(
    input: &crate::input::CreateDirectConnectGatewayAssociationProposalInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_create_direct_connect_gateway_association_proposal_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_create_interconnect(
    input: &crate::input::CreateInterconnectInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_create_interconnect_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_create_lag(
    input: &crate::input::CreateLagInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_create_lag_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_create_private_virtual_interface(
    input: &crate::input::CreatePrivateVirtualInterfaceInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_create_private_virtual_interface_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_create_public_virtual_interface(
    input: &crate::input::CreatePublicVirtualInterfaceInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_create_public_virtual_interface_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_create_transit_virtual_interface(
    input: &crate::input::CreateTransitVirtualInterfaceInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_create_transit_virtual_interface_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_delete_bgp_peer(
    input: &crate::input::DeleteBgpPeerInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_delete_bgp_peer_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_delete_connection(
    input: &crate::input::DeleteConnectionInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_delete_connection_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_delete_direct_connect_gateway(
    input: &crate::input::DeleteDirectConnectGatewayInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_delete_direct_connect_gateway_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_delete_direct_connect_gateway_association(
    input: &crate::input::DeleteDirectConnectGatewayAssociationInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_delete_direct_connect_gateway_association_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_delete_direct_connect_gateway_association_proposal(
    input: &crate::input::DeleteDirectConnectGatewayAssociationProposalInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_delete_direct_connect_gateway_association_proposal_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_delete_interconnect(
    input: &crate::input::DeleteInterconnectInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_delete_interconnect_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_delete_lag(
    input: &crate::input::DeleteLagInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_delete_lag_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_delete_virtual_interface(
    input: &crate::input::DeleteVirtualInterfaceInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_delete_virtual_interface_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_describe_connection_loa(
    input: &crate::input::DescribeConnectionLoaInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_describe_connection_loa_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_describe_connections(
    input: &crate::input::DescribeConnectionsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_describe_connections_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_describe_connections_on_interconnect(
    input: &crate::input::DescribeConnectionsOnInterconnectInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_describe_connections_on_interconnect_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_describe_direct_connect_gateway_association_proposals(
    input: &crate::input::DescribeDirectConnectGatewayAssociationProposalsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_describe_direct_connect_gateway_association_proposals_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_describe_direct_connect_gateway_associations(
    input: &crate::input::DescribeDirectConnectGatewayAssociationsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_describe_direct_connect_gateway_associations_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_describe_direct_connect_gateway_attachments(
    input: &crate::input::DescribeDirectConnectGatewayAttachmentsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_describe_direct_connect_gateway_attachments_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_describe_direct_connect_gateways(
    input: &crate::input::DescribeDirectConnectGatewaysInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_describe_direct_connect_gateways_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_describe_hosted_connections(
    input: &crate::input::DescribeHostedConnectionsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_describe_hosted_connections_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_describe_interconnect_loa(
    input: &crate::input::DescribeInterconnectLoaInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_describe_interconnect_loa_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_describe_interconnects(
    input: &crate::input::DescribeInterconnectsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_describe_interconnects_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_describe_lags(
    input: &crate::input::DescribeLagsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_describe_lags_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_describe_loa(
    input: &crate::input::DescribeLoaInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_describe_loa_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_describe_locations(
    _input: &crate::input::DescribeLocationsInput,
) -> smithy_http::body::SdkBody {
    smithy_http::body::SdkBody::from("{}")
}

pub fn serialize_operation_describe_tags(
    input: &crate::input::DescribeTagsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_describe_tags_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_describe_virtual_gateways(
    _input: &crate::input::DescribeVirtualGatewaysInput,
) -> smithy_http::body::SdkBody {
    smithy_http::body::SdkBody::from("{}")
}

pub fn serialize_operation_describe_virtual_interfaces(
    input: &crate::input::DescribeVirtualInterfacesInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_describe_virtual_interfaces_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_disassociate_connection_from_lag(
    input: &crate::input::DisassociateConnectionFromLagInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_disassociate_connection_from_lag_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_list_virtual_interface_test_history(
    input: &crate::input::ListVirtualInterfaceTestHistoryInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_list_virtual_interface_test_history_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_start_bgp_failover_test(
    input: &crate::input::StartBgpFailoverTestInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_start_bgp_failover_test_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_stop_bgp_failover_test(
    input: &crate::input::StopBgpFailoverTestInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_stop_bgp_failover_test_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_tag_resource(
    input: &crate::input::TagResourceInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_tag_resource_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_untag_resource(
    input: &crate::input::UntagResourceInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_untag_resource_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_update_direct_connect_gateway_association(
    input: &crate::input::UpdateDirectConnectGatewayAssociationInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_update_direct_connect_gateway_association_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_update_lag(
    input: &crate::input::UpdateLagInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_update_lag_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_update_virtual_interface_attributes(
    input: &crate::input::UpdateVirtualInterfaceAttributesInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_update_virtual_interface_attributes_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}
