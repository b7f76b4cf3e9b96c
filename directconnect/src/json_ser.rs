/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn serialize_structure_accept_direct_connect_gateway_association_proposal_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::AcceptDirectConnectGatewayAssociationProposalInput,
) {
    if let Some(var_1) = &input.direct_connect_gateway_id {
        object.key("directConnectGatewayId").string(var_1);
    }
    if let Some(var_2) = &input.proposal_id {
        object.key("proposalId").string(var_2);
    }
    if let Some(var_3) = &input.associated_gateway_owner_account {
        object.key("associatedGatewayOwnerAccount").string(var_3);
    }
    if let Some(var_4) = &input.override_allowed_prefixes_to_direct_connect_gateway {
        {
            let mut array_5 = object.key("overrideAllowedPrefixesToDirectConnectGateway").start_array();
            for item_6 in var_4 {
                {
                    let mut object_7 = array_5.value().start_object();
                    crate::json_ser::serialize_structure_route_filter_prefix(&mut object_7, item_6);
                    object_7.finish();
                }
            }
            array_5.finish();
        }
    }
}

pub fn serialize_structure_allocate_connection_on_interconnect_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::AllocateConnectionOnInterconnectInput,
) {
    if let Some(var_1) = &input.bandwidth {
        object.key("bandwidth").string(var_1);
    }
    if let Some(var_2) = &input.connection_name {
        object.key("connectionName").string(var_2);
    }
    if let Some(var_3) = &input.owner_account {
        object.key("ownerAccount").string(var_3);
    }
    if let Some(var_4) = &input.interconnect_id {
        object.key("interconnectId").string(var_4);
    }
    if let Some(var_5) = &input.vlan {
        object.key("vlan").number(smithy_types::Number::from(*var_5));
    }
}

pub fn serialize_structure_allocate_hosted_connection_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::AllocateHostedConnectionInput,
) {
    if let Some(var_1) = &input.connection_id {
        object.key("connectionId").string(var_1);
    }
    if let Some(var_2) = &input.owner_account {
        object.key("ownerAccount").string(var_2);
    }
    if let Some(var_3) = &input.bandwidth {
        object.key("bandwidth").string(var_3);
    }
    if let Some(var_4) = &input.connection_name {
        object.key("connectionName").string(var_4);
    }
    if let Some(var_5) = &input.vlan {
        object.key("vlan").number(smithy_types::Number::from(*var_5));
    }
    if let Some(var_6) = &input.tags {
        {
            let mut array_7 = object.key("tags").start_array();
            for item_8 in var_6 {
                {
                    let mut object_9 = array_7.value().start_object();
                    crate::json_ser::serialize_structure_tag(&mut object_9, item_8);
                    object_9.finish();
                }
            }
            array_7.finish();
        }
    }
}

pub fn serialize_structure_allocate_private_virtual_interface_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::AllocatePrivateVirtualInterfaceInput,
) {
    if let Some(var_1) = &input.connection_id {
        object.key("connectionId").string(var_1);
    }
    if let Some(var_2) = &input.owner_account {
        object.key("ownerAccount").string(var_2);
    }
    if let Some(var_3) = &input.new_private_virtual_interface_allocation {
        {
            let mut object_4 = object.key("newPrivateVirtualInterfaceAllocation").start_object();
            crate::json_ser::serialize_structure_new_private_virtual_interface_allocation(&mut object_4, var_3);
            object_4.finish();
        }
    }
}

pub fn serialize_structure_allocate_public_virtual_interface_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::AllocatePublicVirtualInterfaceInput,
) {
    if let Some(var_1) = &input.connection_id {
        object.key("connectionId").string(var_1);
    }
    if let Some(var_2) = &input.owner_account {
        object.key("ownerAccount").string(var_2);
    }
    if let Some(var_3) = &input.new_public_virtual_interface_allocation {
        {
            let mut object_4 = object.key("newPublicVirtualInterfaceAllocation").start_object();
            crate::json_ser::serialize_structure_new_public_virtual_interface_allocation(&mut object_4, var_3);
            object_4.finish();
        }
    }
}

pub fn serialize_structure_allocate_transit_virtual_interface_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::AllocateTransitVirtualInterfaceInput,
) {
    if let Some(var_1) = &input.connection_id {
        object.key("connectionId").string(var_1);
    }
    if let Some(var_2) = &input.owner_account {
        object.key("ownerAccount").string(var_2);
    }
    if let Some(var_3) = &input.new_transit_virtual_interface_allocation {
        {
            let mut object_4 = object.key("newTransitVirtualInterfaceAllocation").start_object();
            crate::json_ser::serialize_structure_new_transit_virtual_interface_allocation(&mut object_4, var_3);
            object_4.finish();
        }
    }
}

pub fn serialize_structure_associate_connection_with_lag_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::AssociateConnectionWithLagInput,
) {
    if let Some(var_1) = &input.connection_id {
        object.key("connectionId").string(var_1);
    }
    if let Some(var_2) = &input.lag_id {
        object.key("lagId").string(var_2);
    }
}

pub fn serialize_structure_associate_hosted_connection_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::AssociateHostedConnectionInput,
) {
    if let Some(var_1) = &input.connection_id {
        object.key("connectionId").string(var_1);
    }
    if let Some(var_2) = &input.parent_connection_id {
        object.key("parentConnectionId").string(var_2);
    }
}

pub fn serialize_structure_associate_virtual_interface_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::AssociateVirtualInterfaceInput,
) {
    if let Some(var_1) = &input.virtual_interface_id {
        object.key("virtualInterfaceId").string(var_1);
    }
    if let Some(var_2) = &input.connection_id {
        object.key("connectionId").string(var_2);
    }
}

pub fn serialize_structure_confirm_connection_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::ConfirmConnectionInput,
) {
    if let Some(var_1) = &input.connection_id {
        object.key("connectionId").string(var_1);
    }
}

pub fn serialize_structure_confirm_private_virtual_interface_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::ConfirmPrivateVirtualInterfaceInput,
) {
    if let Some(var_1) = &input.virtual_interface_id {
        object.key("virtualInterfaceId").string(var_1);
    }
    if let Some(var_2) = &input.virtual_gateway_id {
        object.key("virtualGatewayId").string(var_2);
    }
    if let Some(var_3) = &input.direct_connect_gateway_id {
        object.key("directConnectGatewayId").string(var_3);
    }
}

pub fn serialize_structure_confirm_public_virtual_interface_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::ConfirmPublicVirtualInterfaceInput,
) {
    if let Some(var_1) = &input.virtual_interface_id {
        object.key("virtualInterfaceId").string(var_1);
    }
}

pub fn serialize_structure_confirm_transit_virtual_interface_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::ConfirmTransitVirtualInterfaceInput,
) {
    if let Some(var_1) = &input.virtual_interface_id {
        object.key("virtualInterfaceId").string(var_1);
    }
    if let Some(var_2) = &input.direct_connect_gateway_id {
        object.key("directConnectGatewayId").string(var_2);
    }
}

pub fn serialize_structure_create_bgp_peer_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreateBgpPeerInput,
) {
    if let Some(var_1) = &input.virtual_interface_id {
        object.key("virtualInterfaceId").string(var_1);
    }
    if let Some(var_2) = &input.new_bgp_peer {
        {
            let mut object_3 = object.key("newBGPPeer").start_object();
            crate::json_ser::serialize_structure_new_bgp_peer(&mut object_3, var_2);
            object_3.finish();
        }
    }
}

pub fn serialize_structure_create_connection_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreateConnectionInput,
) {
    if let Some(var_1) = &input.location {
        object.key("location").string(var_1);
    }
    if let Some(var_2) = &input.bandwidth {
        object.key("bandwidth").string(var_2);
    }
    if let Some(var_3) = &input.connection_name {
        object.key("connectionName").string(var_3);
    }
    if let Some(var_4) = &input.lag_id {
        object.key("lagId").string(var_4);
    }
    if let Some(var_5) = &input.tags {
        {
            let mut array_6 = object.key("tags").start_array();
            for item_7 in var_5 {
                {
                    let mut object_8 = array_6.value().start_object();
                    crate::json_ser::serialize_structure_tag(&mut object_8, item_7);
                    object_8.finish();
                }
            }
            array_6.finish();
        }
    }
    if let Some(var_9) = &input.provider_name {
        object.key("providerName").string(var_9);
    }
}

pub fn serialize_structure_create_direct_connect_gateway_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreateDirectConnectGatewayInput,
) {
    if let Some(var_1) = &input.direct_connect_gateway_name {
        object.key("directConnectGatewayName").string(var_1);
    }
    if let Some(var_2) = &input.amazon_side_asn {
        object.key("amazonSideAsn").number(smithy_types::Number::from(*var_2));
    }
}

pub fn serialize_structure_create_direct_connect_gateway_association_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreateDirectConnectGatewayAssociationInput,
) {
    if let Some(var_1) = &input.direct_connect_gateway_id {
        object.key("directConnectGatewayId").string(var_1);
    }
    if let Some(var_2) = &input.gateway_id {
        object.key("gatewayId").string(var_2);
    }
    if let Some(var_3) = &input.add_allowed_prefixes_to_direct_connect_gateway {
        {
            let mut array_4 = object.key("addAllowedPrefixesToDirectConnectGateway").start_array();
            for item_5 in var_3 {
                {
                    let mut object_6 = array_4.value().start_object();
                    crate::json_ser::serialize_structure_route_filter_prefix(&mut object_6, item_5);
                    object_6.finish();
                }
            }
            array_4.finish();
        }
    }
    if let Some(var_7) = &input.virtual_gateway_id {
        object.key("virtualGatewayId").string(var_7);
    }
}

pub fn serialize_structure_create_direct_connect_gateway_association_proposal_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreateDirectConnectGatewayAssociationProposalInput,
) {
    if let Some(var_1) = &input.direct_connect_gateway_id {
        object.key("directConnectGatewayId").string(var_1);
    }
    if let Some(var_2) = &input.direct_connect_gateway_owner_account {
        object.key("directConnectGatewayOwnerAccount").string(var_2);
    }
    if let Some(var_3) = &input.gateway_id {
        object.key("gatewayId").string(var_3);
    }
    if let Some(var_4) = &input.add_allowed_prefixes_to_direct_connect_gateway {
        {
            let mut array_5 = object.key("addAllowedPrefixesToDirectConnectGateway").start_array();
            for item_6 in var_4 {
                {
                    let mut object_7 = array_5.value().start_object();
                    crate::json_ser::serialize_structure_route_filter_prefix(&mut object_7, item_6);
                    object_7.finish();
                }
            }
            array_5.finish();
        }
    }
    if let Some(var_8) = &input.remove_allowed_prefixes_to_direct_connect_gateway {
        {
            let mut array_9 = object.key("removeAllowedPrefixesToDirectConnectGateway").start_array();
            for item_10 in var_8 {
                {
                    let mut object_11 = array_9.value().start_object();
                    crate::json_ser::serialize_structure_route_filter_prefix(&mut object_11, item_10);
                    object_11.finish();
                }
            }
            array_9.finish();
        }
    }
}

pub fn serialize_structure_create_interconnect_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreateInterconnectInput,
) {
    if let Some(var_1) = &input.interconnect_name {
        object.key("interconnectName").string(var_1);
    }
    if let Some(var_2) = &input.bandwidth {
        object.key("bandwidth").string(var_2);
    }
    if let Some(var_3) = &input.location {
        object.key("location").string(var_3);
    }
    if let Some(var_4) = &input.lag_id {
        object.key("lagId").string(var_4);
    }
    if let Some(var_5) = &input.tags {
        {
            let mut array_6 = object.key("tags").start_array();
            for item_7 in var_5 {
                {
                    let mut object_8 = array_6.value().start_object();
                    crate::json_ser::serialize_structure_tag(&mut object_8, item_7);
                    object_8.finish();
                }
            }
            array_6.finish();
        }
    }
    if let Some(var_9) = &input.provider_name {
        object.key("providerName").string(var_9);
    }
}

pub fn serialize_structure_create_lag_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreateLagInput,
) {
    if let Some(var_1) = &input.number_of_connections {
        object.key("numberOfConnections").number(smithy_types::Number::from(*var_1));
    }
    if let Some(var_2) = &input.location {
        object.key("location").string(var_2);
    }
    if let Some(var_3) = &input.connections_bandwidth {
        object.key("connectionsBandwidth").string(var_3);
    }
    if let Some(var_4) = &input.lag_name {
        object.key("lagName").string(var_4);
    }
    if let Some(var_5) = &input.connection_id {
        object.key("connectionId").string(var_5);
    }
    if let Some(var_6) = &input.tags {
        {
            let mut array_7 = object.key("tags").start_array();
            for item_8 in var_6 {
                {
                    let mut object_9 = array_7.value().start_object();
                    crate::json_ser::serialize_structure_tag(&mut object_9, item_8);
                    object_9.finish();
                }
            }
            array_7.finish();
        }
    }
    if let Some(var_10) = &input.child_connection_tags {
        {
            let mut array_11 = object.key("childConnectionTags").start_array();
            for item_12 in var_10 {
                {
                    let mut object_13 = array_11.value().start_object();
                    crate::json_ser::serialize_structure_tag(&mut object_13, item_12);
                    object_13.finish();
                }
            }
            array_11.finish();
        }
    }
    if let Some(var_14) = &input.provider_name {
        object.key("providerName").string(var_14);
    }
}

pub fn serialize_structure_create_private_virtual_interface_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreatePrivateVirtualInterfaceInput,
) {
    if let Some(var_1) = &input.connection_id {
        object.key("connectionId").string(var_1);
    }
    if let Some(var_2) = &input.new_private_virtual_interface {
        {
            let mut object_3 = object.key("newPrivateVirtualInterface").start_object();
            crate::json_ser::serialize_structure_new_private_virtual_interface(&mut object_3, var_2);
            object_3.finish();
        }
    }
}

pub fn serialize_structure_create_public_virtual_interface_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreatePublicVirtualInterfaceInput,
) {
    if let Some(var_1) = &input.connection_id {
        object.key("connectionId").string(var_1);
    }
    if let Some(var_2) = &input.new_public_virtual_interface {
        {
            let mut object_3 = object.key("newPublicVirtualInterface").start_object();
            crate::json_ser::serialize_structure_new_public_virtual_interface(&mut object_3, var_2);
            object_3.finish();
        }
    }
}

pub fn serialize_structure_create_transit_virtual_interface_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreateTransitVirtualInterfaceInput,
) {
    if let Some(var_1) = &input.connection_id {
        object.key("connectionId").string(var_1);
    }
    if let Some(var_2) = &input.new_transit_virtual_interface {
        {
            let mut object_3 = object.key("newTransitVirtualInterface").start_object();
            crate::json_ser::serialize_structure_new_transit_virtual_interface(&mut object_3, var_2);
            object_3.finish();
        }
    }
}

pub fn serialize_structure_delete_bgp_peer_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DeleteBgpPeerInput,
) {
    if let Some(var_1) = &input.virtual_interface_id {
        object.key("virtualInterfaceId").string(var_1);
    }
    if let Some(var_2) = &input.asn {
        object.key("asn").number(smithy_types::Number::from(*var_2));
    }
    if let Some(var_3) = &input.customer_address {
        object.key("customerAddress").string(var_3);
    }
    if let Some(var_4) = &input.bgp_peer_id {
        object.key("bgpPeerId").string(var_4);
    }
}

pub fn serialize_structure_delete_connection_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DeleteConnectionInput,
) {
    if let Some(var_1) = &input.connection_id {
        object.key("connectionId").string(var_1);
    }
}

pub fn serialize_structure_delete_direct_connect_gateway_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DeleteDirectConnectGatewayInput,
) {
    if let Some(var_1) = &input.direct_connect_gateway_id {
        object.key("directConnectGatewayId").string(var_1);
    }
}

pub fn serialize_structure_delete_direct_connect_gateway_association_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DeleteDirectConnectGatewayAssociationInput,
) {
    if let Some(var_1) = &input.association_id {
        object.key("associationId").string(var_1);
    }
    if let Some(var_2) = &input.direct_connect_gateway_id {
        object.key("directConnectGatewayId").string(var_2);
    }
    if let Some(var_3) = &input.virtual_gateway_id {
        object.key("virtualGatewayId").string(var_3);
    }
}

pub fn serialize_structure_delete_direct_connect_gateway_association_proposal_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DeleteDirectConnectGatewayAssociationProposalInput,
) {
    if let Some(var_1) = &input.proposal_id {
        object.key("proposalId").string(var_1);
    }
}

pub fn serialize_structure_delete_interconnect_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DeleteInterconnectInput,
) {
    if let Some(var_1) = &input.interconnect_id {
        object.key("interconnectId").string(var_1);
    }
}

pub fn serialize_structure_delete_lag_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DeleteLagInput,
) {
    if let Some(var_1) = &input.lag_id {
        object.key("lagId").string(var_1);
    }
}

pub fn serialize_structure_delete_virtual_interface_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DeleteVirtualInterfaceInput,
) {
    if let Some(var_1) = &input.virtual_interface_id {
        object.key("virtualInterfaceId").string(var_1);
    }
}

pub fn serialize_structure_describe_connection_loa_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DescribeConnectionLoaInput,
) {
    if let Some(var_1) = &input.connection_id {
        object.key("connectionId").string(var_1);
    }
    if let Some(var_2) = &input.provider_name {
        object.key("providerName").string(var_2);
    }
    if let Some(var_3) = &input.loa_content_type {
        object.key("loaContentType").string(var_3.as_str());
    }
}

pub fn serialize_structure_describe_connections_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DescribeConnectionsInput,
) {
    if let Some(var_1) = &input.connection_id {
        object.key("connectionId").string(var_1);
    }
}

pub fn serialize_structure_describe_connections_on_interconnect_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DescribeConnectionsOnInterconnectInput,
) {
    if let Some(var_1) = &input.interconnect_id {
        object.key("interconnectId").string(var_1);
    }
}

pub fn serialize_structure_describe_direct_connect_gateway_association_proposals_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DescribeDirectConnectGatewayAssociationProposalsInput,
) {
    if let Some(var_1) = &input.direct_connect_gateway_id {
        object.key("directConnectGatewayId").string(var_1);
    }
    if let Some(var_2) = &input.proposal_id {
        object.key("proposalId").string(var_2);
    }
    if let Some(var_3) = &input.associated_gateway_id {
        object.key("associatedGatewayId").string(var_3);
    }
    if let Some(var_4) = &input.max_results {
        object.key("maxResults").number(smithy_types::Number::from(*var_4));
    }
    if let Some(var_5) = &input.next_token {
        object.key("nextToken").string(var_5);
    }
}

pub fn serialize_structure_describe_direct_connect_gateway_associations_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DescribeDirectConnectGatewayAssociationsInput,
) {
    if let Some(var_1) = &input.association_id {
        object.key("associationId").string(var_1);
    }
    if let Some(var_2) = &input.associated_gateway_id {
        object.key("associatedGatewayId").string(var_2);
    }
    if let Some(var_3) = &input.direct_connect_gateway_id {
        object.key("directConnectGatewayId").string(var_3);
    }
    if let Some(var_4) = &input.max_results {
        object.key("maxResults").number(smithy_types::Number::from(*var_4));
    }
    if let Some(var_5) = &input.next_token {
        object.key("nextToken").string(var_5);
    }
    if let Some(var_6) = &input.virtual_gateway_id {
        object.key("virtualGatewayId").string(var_6);
    }
}

pub fn serialize_structure_describe_direct_connect_gateway_attachments_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DescribeDirectConnectGatewayAttachmentsInput,
) {
    if let Some(var_1) = &input.direct_connect_gateway_id {
        object.key("directConnectGatewayId").string(var_1);
    }
    if let Some(var_2) = &input.virtual_interface_id {
        object.key("virtualInterfaceId").string(var_2);
    }
    if let Some(var_3) = &input.max_results {
        object.key("maxResults").number(smithy_types::Number::from(*var_3));
    }
    if let Some(var_4) = &input.next_token {
        object.key("nextToken").string(var_4);
    }
}

pub fn serialize_structure_describe_direct_connect_gateways_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DescribeDirectConnectGatewaysInput,
) {
    if let Some(var_1) = &input.direct_connect_gateway_id {
        object.key("directConnectGatewayId").string(var_1);
    }
    if let Some(var_2) = &input.max_results {
        object.key("maxResults").number(smithy_types::Number::from(*var_2));
    }
    if let Some(var_3) = &input.next_token {
        object.key("nextToken").string(var_3);
    }
}

pub fn serialize_structure_describe_hosted_connections_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DescribeHostedConnectionsInput,
) {
    if let Some(var_1) = &input.connection_id {
        object.key("connectionId").string(var_1);
    }
}

pub fn serialize_structure_describe_interconnect_loa_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DescribeInterconnectLoaInput,
) {
    if let Some(var_1) = &input.interconnect_id {
        object.key("interconnectId").string(var_1);
    }
    if let Some(var_2) = &input.provider_name {
        object.key("providerName").string(var_2);
    }
    if let Some(var_3) = &input.loa_content_type {
        object.key("loaContentType").string(var_3.as_str());
    }
}

pub fn serialize_structure_describe_interconnects_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DescribeInterconnectsInput,
) {
    if let Some(var_1) = &input.interconnect_id {
        object.key("interconnectId").string(var_1);
    }
}

pub fn serialize_structure_describe_lags_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DescribeLagsInput,
) {
    if let Some(var_1) = &input.lag_id {
        object.key("lagId").string(var_1);
    }
}

pub fn serialize_structure_describe_loa_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DescribeLoaInput,
) {
    if let Some(var_1) = &input.connection_id {
        object.key("connectionId").string(var_1);
    }
    if let Some(var_2) = &input.provider_name {
        object.key("providerName").string(var_2);
    }
    if let Some(var_3) = &input.loa_content_type {
        object.key("loaContentType").string(var_3.as_str());
    }
}

pub fn serialize_structure_describe_tags_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DescribeTagsInput,
) {
    if let Some(var_1) = &input.resource_arns {
        {
            let mut array_2 = object.key("resourceArns").start_array();
            for item_3 in var_1 {
                array_2.value().string(item_3);
            }
            array_2.finish();
        }
    }
}

pub fn serialize_structure_describe_virtual_interfaces_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DescribeVirtualInterfacesInput,
) {
    if let Some(var_1) = &input.connection_id {
        object.key("connectionId").string(var_1);
    }
    if let Some(var_2) = &input.virtual_interface_id {
        object.key("virtualInterfaceId").string(var_2);
    }
}

pub fn serialize_structure_disassociate_connection_from_lag_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DisassociateConnectionFromLagInput,
) {
    if let Some(var_1) = &input.connection_id {
        object.key("connectionId").string(var_1);
    }
    if let Some(var_2) = &input.lag_id {
        object.key("lagId").string(var_2);
    }
}

pub fn serialize_structure_list_virtual_interface_test_history_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::ListVirtualInterfaceTestHistoryInput,
) {
    if let Some(var_1) = &input.test_id {
        object.key("testId").string(var_1);
    }
    if let Some(var_2) = &input.virtual_interface_id {
        object.key("virtualInterfaceId").string(var_2);
    }
    if let Some(var_3) = &input.bgp_peers {
        {
            let mut array_4 = object.key("bgpPeers").start_array();
            for item_5 in var_3 {
                array_4.value().string(item_5);
            }
            array_4.finish();
        }
    }
    if let Some(var_6) = &input.status {
        object.key("status").string(var_6);
    }
    if let Some(var_7) = &input.max_results {
        object.key("maxResults").number(smithy_types::Number::from(*var_7));
    }
    if let Some(var_8) = &input.next_token {
        object.key("nextToken").string(var_8);
    }
}

pub fn serialize_structure_start_bgp_failover_test_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::StartBgpFailoverTestInput,
) {
    if let Some(var_1) = &input.virtual_interface_id {
        object.key("virtualInterfaceId").string(var_1);
    }
    if let Some(var_2) = &input.bgp_peers {
        {
            let mut array_3 = object.key("bgpPeers").start_array();
            for item_4 in var_2 {
                array_3.value().string(item_4);
            }
            array_3.finish();
        }
    }
    if let Some(var_5) = &input.test_duration_in_minutes {
        object.key("testDurationInMinutes").number(smithy_types::Number::from(*var_5));
    }
}

pub fn serialize_structure_stop_bgp_failover_test_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::StopBgpFailoverTestInput,
) {
    if let Some(var_1) = &input.virtual_interface_id {
        object.key("virtualInterfaceId").string(var_1);
    }
}

pub fn serialize_structure_tag_resource_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::TagResourceInput,
) {
    if let Some(var_1) = &input.resource_arn {
        object.key("resourceArn").string(var_1);
    }
    if let Some(var_2) = &input.tags {
        {
            let mut array_3 = object.key("tags").start_array();
            for item_4 in var_2 {
                {
                    let mut object_5 = array_3.value().start_object();
                    crate::json_ser::serialize_structure_tag(&mut object_5, item_4);
                    object_5.finish();
                }
            }
            array_3.finish();
        }
    }
}

pub fn serialize_structure_untag_resource_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::UntagResourceInput,
) {
    if let Some(var_1) = &input.resource_arn {
        object.key("resourceArn").string(var_1);
    }
    if let Some(var_2) = &input.tag_keys {
        {
            let mut array_3 = object.key("tagKeys").start_array();
            for item_4 in var_2 {
                array_3.value().string(item_4);
            }
            array_3.finish();
        }
    }
}

pub fn serialize_structure_update_direct_connect_gateway_association_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::UpdateDirectConnectGatewayAssociationInput,
) {
    if let Some(var_1) = &input.association_id {
        object.key("associationId").string(var_1);
    }
    if let Some(var_2) = &input.add_allowed_prefixes_to_direct_connect_gateway {
        {
            let mut array_3 = object.key("addAllowedPrefixesToDirectConnectGateway").start_array();
            for item_4 in var_2 {
                {
                    let mut object_5 = array_3.value().start_object();
                    crate::json_ser::serialize_structure_route_filter_prefix(&mut object_5, item_4);
                    object_5.finish();
                }
            }
            array_3.finish();
        }
    }
    if let Some(var_6) = &input.remove_allowed_prefixes_to_direct_connect_gateway {
        {
            let mut array_7 = object.key("removeAllowedPrefixesToDirectConnectGateway").start_array();
            for item_8 in var_6 {
                {
                    let mut object_9 = array_7.value().start_object();
                    crate::json_ser::serialize_structure_route_filter_prefix(&mut object_9, item_8);
                    object_9.finish();
                }
            }
            array_7.finish();
        }
    }
}

pub fn serialize_structure_update_lag_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::UpdateLagInput,
) {
    if let Some(var_1) = &input.lag_id {
        object.key("lagId").string(var_1);
    }
    if let Some(var_2) = &input.lag_name {
        object.key("lagName").string(var_2);
    }
    if let Some(var_3) = &input.minimum_links {
        object.key("minimumLinks").number(smithy_types::Number::from(*var_3));
    }
}

pub fn serialize_structure_update_virtual_interface_attributes_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::UpdateVirtualInterfaceAttributesInput,
) {
    if let Some(var_1) = &input.virtual_interface_id {
        object.key("virtualInterfaceId").string(var_1);
    }
    if let Some(var_2) = &input.mtu {
        object.key("mtu").number(smithy_types::Number::from(*var_2));
    }
}

pub fn serialize_structure_tag(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::Tag,
) {
    if let Some(var_1) = &input.key {
        object.key("key").string(var_1);
    }
    if let Some(var_2) = &input.value {
        object.key("value").string(var_2);
    }
}

pub fn serialize_structure_route_filter_prefix(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::RouteFilterPrefix,
) {
    if let Some(var_1) = &input.cidr {
        object.key("cidr").string(var_1);
    }
}

pub fn serialize_structure_new_bgp_peer(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::NewBgpPeer,
) {
    if let Some(var_1) = &input.asn {
        object.key("asn").number(smithy_types::Number::from(*var_1));
    }
    if let Some(var_2) = &input.auth_key {
        object.key("authKey").string(var_2);
    }
    if let Some(var_3) = &input.address_family {
        object.key("addressFamily").string(var_3.as_str());
    }
    if let Some(var_4) = &input.amazon_address {
        object.key("amazonAddress").string(var_4);
    }
    if let Some(var_5) = &input.customer_address {
        object.key("customerAddress").string(var_5);
    }
}

pub fn serialize_structure_new_private_virtual_interface(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::NewPrivateVirtualInterface,
) {
    if let Some(var_1) = &input.virtual_interface_name {
        object.key("virtualInterfaceName").string(var_1);
    }
    if let Some(var_2) = &input.vlan {
        object.key("vlan").number(smithy_types::Number::from(*var_2));
    }
    if let Some(var_3) = &input.asn {
        object.key("asn").number(smithy_types::Number::from(*var_3));
    }
    if let Some(var_4) = &input.mtu {
        object.key("mtu").number(smithy_types::Number::from(*var_4));
    }
    if let Some(var_5) = &input.auth_key {
        object.key("authKey").string(var_5);
    }
    if let Some(var_6) = &input.amazon_address {
        object.key("amazonAddress").string(var_6);
    }
    if let Some(var_7) = &input.customer_address {
        object.key("customerAddress").string(var_7);
    }
    if let Some(var_8) = &input.address_family {
        object.key("addressFamily").string(var_8.as_str());
    }
    if let Some(var_9) = &input.virtual_gateway_id {
        object.key("virtualGatewayId").string(var_9);
    }
    if let Some(var_10) = &input.direct_connect_gateway_id {
        object.key("directConnectGatewayId").string(var_10);
    }
    if let Some(var_11) = &input.tags {
        {
            let mut array_12 = object.key("tags").start_array();
            for item_13 in var_11 {
                {
                    let mut object_14 = array_12.value().start_object();
                    crate::json_ser::serialize_structure_tag(&mut object_14, item_13);
                    object_14.finish();
                }
            }
            array_12.finish();
        }
    }
}

pub fn serialize_structure_new_private_virtual_interface_allocation(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::NewPrivateVirtualInterfaceAllocation,
) {
    if let Some(var_1) = &input.virtual_interface_name {
        object.key("virtualInterfaceName").string(var_1);
    }
    if let Some(var_2) = &input.vlan {
        object.key("vlan").number(smithy_types::Number::from(*var_2));
    }
    if let Some(var_3) = &input.asn {
        object.key("asn").number(smithy_types::Number::from(*var_3));
    }
    if let Some(var_4) = &input.mtu {
        object.key("mtu").number(smithy_types::Number::from(*var_4));
    }
    if let Some(var_5) = &input.auth_key {
        object.key("authKey").string(var_5);
    }
    if let Some(var_6) = &input.amazon_address {
        object.key("amazonAddress").string(var_6);
    }
    if let Some(var_7) = &input.customer_address {
        object.key("customerAddress").string(var_7);
    }
    if let Some(var_8) = &input.address_family {
        object.key("addressFamily").string(var_8.as_str());
    }
    if let Some(var_9) = &input.tags {
        {
            let mut array_10 = object.key("tags").start_array();
            for item_11 in var_9 {
                {
                    let mut object_12 = array_10.value().start_object();
                    crate::json_ser::serialize_structure_tag(&mut object_12, item_11);
                    object_12.finish();
                }
            }
            array_10.finish();
        }
    }
}

pub fn serialize_structure_new_public_virtual_interface(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::NewPublicVirtualInterface,
) {
    if let Some(var_1) = &input.virtual_interface_name {
        object.key("virtualInterfaceName").string(var_1);
    }
    if let Some(var_2) = &input.vlan {
        object.key("vlan").number(smithy_types::Number::from(*var_2));
    }
    if let Some(var_3) = &input.asn {
        object.key("asn").number(smithy_types::Number::from(*var_3));
    }
    if let Some(var_4) = &input.auth_key {
        object.key("authKey").string(var_4);
    }
    if let Some(var_5) = &input.amazon_address {
        object.key("amazonAddress").string(var_5);
    }
    if let Some(var_6) = &input.customer_address {
        object.key("customerAddress").string(var_6);
    }
    if let Some(var_7) = &input.address_family {
        object.key("addressFamily").string(var_7.as_str());
    }
    if let Some(var_8) = &input.route_filter_prefixes {
        {
            let mut array_9 = object.key("routeFilterPrefixes").start_array();
            for item_10 in var_8 {
                {
                    let mut object_11 = array_9.value().start_object();
                    crate::json_ser::serialize_structure_route_filter_prefix(&mut object_11, item_10);
                    object_11.finish();
                }
            }
            array_9.finish();
        }
    }
    if let Some(var_12) = &input.tags {
        {
            let mut array_13 = object.key("tags").start_array();
            for item_14 in var_12 {
                {
                    let mut object_15 = array_13.value().start_object();
                    crate::json_ser::serialize_structure_tag(&mut object_15, item_14);
                    object_15.finish();
                }
            }
            array_13.finish();
        }
    }
}

pub fn serialize_structure_new_public_virtual_interface_allocation(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::NewPublicVirtualInterfaceAllocation,
) {
    if let Some(var_1) = &input.virtual_interface_name {
        object.key("virtualInterfaceName").string(var_1);
    }
    if let Some(var_2) = &input.vlan {
        object.key("vlan").number(smithy_types::Number::from(*var_2));
    }
    if let Some(var_3) = &input.asn {
        object.key("asn").number(smithy_types::Number::from(*var_3));
    }
    if let Some(var_4) = &input.auth_key {
        object.key("authKey").string(var_4);
    }
    if let Some(var_5) = &input.amazon_address {
        object.key("amazonAddress").string(var_5);
    }
    if let Some(var_6) = &input.customer_address {
        object.key("customerAddress").string(var_6);
    }
    if let Some(var_7) = &input.address_family {
        object.key("addressFamily").string(var_7.as_str());
    }
    if let Some(var_8) = &input.route_filter_prefixes {
        {
            let mut array_9 = object.key("routeFilterPrefixes").start_array();
            for item_10 in var_8 {
                {
                    let mut object_11 = array_9.value().start_object();
                    crate::json_ser::serialize_structure_route_filter_prefix(&mut object_11, item_10);
                    object_11.finish();
                }
            }
            array_9.finish();
        }
    }
    if let Some(var_12) = &input.tags {
        {
            let mut array_13 = object.key("tags").start_array();
            for item_14 in var_12 {
                {
                    let mut object_15 = array_13.value().start_object();
                    crate::json_ser::serialize_structure_tag(&mut object_15, item_14);
                    object_15.finish();
                }
            }
            array_13.finish();
        }
    }
}

pub fn serialize_structure_new_transit_virtual_interface(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::NewTransitVirtualInterface,
) {
    if let Some(var_1) = &input.virtual_interface_name {
        object.key("virtualInterfaceName").string(var_1);
    }
    if let Some(var_2) = &input.vlan {
        object.key("vlan").number(smithy_types::Number::from(*var_2));
    }
    if let Some(var_3) = &input.asn {
        object.key("asn").number(smithy_types::Number::from(*var_3));
    }
    if let Some(var_4) = &input.mtu {
        object.key("mtu").number(smithy_types::Number::from(*var_4));
    }
    if let Some(var_5) = &input.auth_key {
        object.key("authKey").string(var_5);
    }
    if let Some(var_6) = &input.amazon_address {
        object.key("amazonAddress").string(var_6);
    }
    if let Some(var_7) = &input.customer_address {
        object.key("customerAddress").string(var_7);
    }
    if let Some(var_8) = &input.address_family {
        object.key("addressFamily").string(var_8.as_str());
    }
    if let Some(var_9) = &input.direct_connect_gateway_id {
        object.key("directConnectGatewayId").string(var_9);
    }
    if let Some(var_10) = &input.tags {
        {
            let mut array_11 = object.key("tags").start_array();
            for item_12 in var_10 {
                {
                    let mut object_13 = array_11.value().start_object();
                    crate::json_ser::serialize_structure_tag(&mut object_13, item_12);
                    object_13.finish();
                }
            }
            array_11.finish();
        }
    }
}

pub fn serialize_structure_new_transit_virtual_interface_allocation(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::NewTransitVirtualInterfaceAllocation,
) {
    if let Some(var_1) = &input.virtual_interface_name {
        object.key("virtualInterfaceName").string(var_1);
    }
    if let Some(var_2) = &input.vlan {
        object.key("vlan").number(smithy_types::Number::from(*var_2));
    }
    if let Some(var_3) = &input.asn {
        object.key("asn").number(smithy_types::Number::from(*var_3));
    }
    if let Some(var_4) = &input.mtu {
        object.key("mtu").number(smithy_types::Number::from(*var_4));
    }
    if let Some(var_5) = &input.auth_key {
        object.key("authKey").string(var_5);
    }
    if let Some(var_6) = &input.amazon_address {
        object.key("amazonAddress").string(var_6);
    }
    if let Some(var_7) = &input.customer_address {
        object.key("customerAddress").string(var_7);
    }
    if let Some(var_8) = &input.address_family {
        object.key("addressFamily").string(var_8.as_str());
    }
    if let Some(var_9) = &input.tags {
        {
            let mut array_10 = object.key("tags").start_array();
            for item_11 in var_9 {
                {
                    let mut object_12 = array_10.value().start_object();
                    crate::json_ser::serialize_structure_tag(&mut object_12, item_11);
                    object_12.finish();
                }
            }
            array_10.finish();
        }
    }
}
