/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn deser_operation_accept_direct_connect_gateway_association_proposal(
    input: &[u8],
    mut builder: crate::output::accept_direct_connect_gateway_association_proposal_output::Builder,
) -> Result<crate::output::accept_direct_connect_gateway_association_proposal_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "directConnectGatewayAssociation" => {
                        builder = builder.set_direct_connect_gateway_association(
                            crate::json_deser::deser_structure_direct_connect_gateway_association(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_allocate_connection_on_interconnect(
    input: &[u8],
    mut builder: crate::output::allocate_connection_on_interconnect_output::Builder,
) -> Result<crate::output::allocate_connection_on_interconnect_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "ownerAccount" => {
                        builder = builder.set_owner_account(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionId" => {
                        builder = builder.set_connection_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionName" => {
                        builder = builder.set_connection_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionState" => {
                        builder = builder.set_connection_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::ConnectionState::from(s.as_str()))
                        );
                    }
                    "region" => {
                        builder = builder.set_region(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "location" => {
                        builder = builder.set_location(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "bandwidth" => {
                        builder = builder.set_bandwidth(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "vlan" => {
                        builder = builder.set_vlan(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "partnerName" => {
                        builder = builder.set_partner_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "loaIssueTime" => {
                        builder = builder.set_loa_issue_time(
                            smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                        );
                    }
                    "lagId" => {
                        builder = builder.set_lag_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "awsDevice" => {
                        builder = builder.set_aws_device(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "jumboFrameCapable" => {
                        builder = builder.set_jumbo_frame_capable(
                            smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                        );
                    }
                    "awsDeviceV2" => {
                        builder = builder.set_aws_device_v2(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "hasLogicalRedundancy" => {
                        builder = builder.set_has_logical_redundancy(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::HasLogicalRedundancy::from(s.as_str()))
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_list_tag(tokens)?
                        );
                    }
                    "providerName" => {
                        builder = builder.set_provider_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_allocate_hosted_connection(
    input: &[u8],
    mut builder: crate::output::allocate_hosted_connection_output::Builder,
) -> Result<crate::output::allocate_hosted_connection_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "ownerAccount" => {
                        builder = builder.set_owner_account(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionId" => {
                        builder = builder.set_connection_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionName" => {
                        builder = builder.set_connection_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionState" => {
                        builder = builder.set_connection_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::ConnectionState::from(s.as_str()))
                        );
                    }
                    "region" => {
                        builder = builder.set_region(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "location" => {
                        builder = builder.set_location(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "bandwidth" => {
                        builder = builder.set_bandwidth(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "vlan" => {
                        builder = builder.set_vlan(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "partnerName" => {
                        builder = builder.set_partner_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "loaIssueTime" => {
                        builder = builder.set_loa_issue_time(
                            smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                        );
                    }
                    "lagId" => {
                        builder = builder.set_lag_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "awsDevice" => {
                        builder = builder.set_aws_device(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "jumboFrameCapable" => {
                        builder = builder.set_jumbo_frame_capable(
                            smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                        );
                    }
                    "awsDeviceV2" => {
                        builder = builder.set_aws_device_v2(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "hasLogicalRedundancy" => {
                        builder = builder.set_has_logical_redundancy(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::HasLogicalRedundancy::from(s.as_str()))
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_list_tag(tokens)?
                        );
                    }
                    "providerName" => {
                        builder = builder.set_provider_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_allocate_private_virtual_interface(
    input: &[u8],
    mut builder: crate::output::allocate_private_virtual_interface_output::Builder,
) -> Result<crate::output::allocate_private_virtual_interface_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "ownerAccount" => {
                        builder = builder.set_owner_account(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "virtualInterfaceId" => {
                        builder = builder.set_virtual_interface_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "location" => {
                        builder = builder.set_location(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionId" => {
                        builder = builder.set_connection_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "virtualInterfaceType" => {
                        builder = builder.set_virtual_interface_type(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "virtualInterfaceName" => {
                        builder = builder.set_virtual_interface_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "vlan" => {
                        builder = builder.set_vlan(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "asn" => {
                        builder = builder.set_asn(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "amazonSideAsn" => {
                        builder = builder.set_amazon_side_asn(
                            smithy_json::deserialize::token::expect_i64_or_null(tokens.next())?
                        );
                    }
                    "authKey" => {
                        builder = builder.set_auth_key(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "amazonAddress" => {
                        builder = builder.set_amazon_address(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "customerAddress" => {
                        builder = builder.set_customer_address(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "addressFamily" => {
                        builder = builder.set_address_family(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::AddressFamily::from(s.as_str()))
                        );
                    }
                    "virtualInterfaceState" => {
                        builder = builder.set_virtual_interface_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::VirtualInterfaceState::from(s.as_str()))
                        );
                    }
                    "customerRouterConfig" => {
                        builder = builder.set_customer_router_config(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "mtu" => {
                        builder = builder.set_mtu(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "jumboFrameCapable" => {
                        builder = builder.set_jumbo_frame_capable(
                            smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                        );
                    }
                    "virtualGatewayId" => {
                        builder = builder.set_virtual_gateway_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "directConnectGatewayId" => {
                        builder = builder.set_direct_connect_gateway_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "routeFilterPrefixes" => {
                        builder = builder.set_route_filter_prefixes(
                            crate::json_deser::deser_list_route_filter_prefix(tokens)?
                        );
                    }
                    "bgpPeers" => {
                        builder = builder.set_bgp_peers(
                            crate::json_deser::deser_list_bgp_peer(tokens)?
                        );
                    }
                    "region" => {
                        builder = builder.set_region(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "awsDeviceV2" => {
                        builder = builder.set_aws_device_v2(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_list_tag(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_allocate_public_virtual_interface(
    input: &[u8],
    mut builder: crate::output::allocate_public_virtual_interface_output::Builder,
) -> Result<crate::output::allocate_public_virtual_interface_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "ownerAccount" => {
                        builder = builder.set_owner_account(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "virtualInterfaceId" => {
                        builder = builder.set_virtual_interface_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "location" => {
                        builder = builder.set_location(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionId" => {
                        builder = builder.set_connection_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "virtualInterfaceType" => {
                        builder = builder.set_virtual_interface_type(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "virtualInterfaceName" => {
                        builder = builder.set_virtual_interface_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "vlan" => {
                        builder = builder.set_vlan(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "asn" => {
                        builder = builder.set_asn(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "amazonSideAsn" => {
                        builder = builder.set_amazon_side_asn(
                            smithy_json::deserialize::token::expect_i64_or_null(tokens.next())?
                        );
                    }
                    "authKey" => {
                        builder = builder.set_auth_key(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "amazonAddress" => {
                        builder = builder.set_amazon_address(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "customerAddress" => {
                        builder = builder.set_customer_address(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "addressFamily" => {
                        builder = builder.set_address_family(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::AddressFamily::from(s.as_str()))
                        );
                    }
                    "virtualInterfaceState" => {
                        builder = builder.set_virtual_interface_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::VirtualInterfaceState::from(s.as_str()))
                        );
                    }
                    "customerRouterConfig" => {
                        builder = builder.set_customer_router_config(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "mtu" => {
                        builder = builder.set_mtu(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "jumboFrameCapable" => {
                        builder = builder.set_jumbo_frame_capable(
                            smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                        );
                    }
                    "virtualGatewayId" => {
                        builder = builder.set_virtual_gateway_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "directConnectGatewayId" => {
                        builder = builder.set_direct_connect_gateway_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "routeFilterPrefixes" => {
                        builder = builder.set_route_filter_prefixes(
                            crate::json_deser::deser_list_route_filter_prefix(tokens)?
                        );
                    }
                    "bgpPeers" => {
                        builder = builder.set_bgp_peers(
                            crate::json_deser::deser_list_bgp_peer(tokens)?
                        );
                    }
                    "region" => {
                        builder = builder.set_region(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "awsDeviceV2" => {
                        builder = builder.set_aws_device_v2(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_list_tag(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_allocate_transit_virtual_interface(
    input: &[u8],
    mut builder: crate::output::allocate_transit_virtual_interface_output::Builder,
) -> Result<crate::output::allocate_transit_virtual_interface_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "virtualInterface" => {
                        builder = builder.set_virtual_interface(
                            crate::json_deser::deser_structure_virtual_interface(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_associate_connection_with_lag(
    input: &[u8],
    mut builder: crate::output::associate_connection_with_lag_output::Builder,
) -> Result<crate::output::associate_connection_with_lag_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "ownerAccount" => {
                        builder = builder.set_owner_account(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionId" => {
                        builder = builder.set_connection_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionName" => {
                        builder = builder.set_connection_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionState" => {
                        builder = builder.set_connection_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::ConnectionState::from(s.as_str()))
                        );
                    }
                    "region" => {
                        builder = builder.set_region(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "location" => {
                        builder = builder.set_location(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "bandwidth" => {
                        builder = builder.set_bandwidth(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "vlan" => {
                        builder = builder.set_vlan(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "partnerName" => {
                        builder = builder.set_partner_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "loaIssueTime" => {
                        builder = builder.set_loa_issue_time(
                            smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                        );
                    }
                    "lagId" => {
                        builder = builder.set_lag_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "awsDevice" => {
                        builder = builder.set_aws_device(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "jumboFrameCapable" => {
                        builder = builder.set_jumbo_frame_capable(
                            smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                        );
                    }
                    "awsDeviceV2" => {
                        builder = builder.set_aws_device_v2(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "hasLogicalRedundancy" => {
                        builder = builder.set_has_logical_redundancy(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::HasLogicalRedundancy::from(s.as_str()))
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_list_tag(tokens)?
                        );
                    }
                    "providerName" => {
                        builder = builder.set_provider_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_associate_hosted_connection(
    input: &[u8],
    mut builder: crate::output::associate_hosted_connection_output::Builder,
) -> Result<crate::output::associate_hosted_connection_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "ownerAccount" => {
                        builder = builder.set_owner_account(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionId" => {
                        builder = builder.set_connection_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionName" => {
                        builder = builder.set_connection_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionState" => {
                        builder = builder.set_connection_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::ConnectionState::from(s.as_str()))
                        );
                    }
                    "region" => {
                        builder = builder.set_region(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "location" => {
                        builder = builder.set_location(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "bandwidth" => {
                        builder = builder.set_bandwidth(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "vlan" => {
                        builder = builder.set_vlan(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "partnerName" => {
                        builder = builder.set_partner_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "loaIssueTime" => {
                        builder = builder.set_loa_issue_time(
                            smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                        );
                    }
                    "lagId" => {
                        builder = builder.set_lag_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "awsDevice" => {
                        builder = builder.set_aws_device(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "jumboFrameCapable" => {
                        builder = builder.set_jumbo_frame_capable(
                            smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                        );
                    }
                    "awsDeviceV2" => {
                        builder = builder.set_aws_device_v2(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "hasLogicalRedundancy" => {
                        builder = builder.set_has_logical_redundancy(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::HasLogicalRedundancy::from(s.as_str()))
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_list_tag(tokens)?
                        );
                    }
                    "providerName" => {
                        builder = builder.set_provider_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_associate_virtual_interface(
    input: &[u8],
    mut builder: crate::output::associate_virtual_interface_output::Builder,
) -> Result<crate::output::associate_virtual_interface_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "ownerAccount" => {
                        builder = builder.set_owner_account(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "virtualInterfaceId" => {
                        builder = builder.set_virtual_interface_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "location" => {
                        builder = builder.set_location(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionId" => {
                        builder = builder.set_connection_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "virtualInterfaceType" => {
                        builder = builder.set_virtual_interface_type(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "virtualInterfaceName" => {
                        builder = builder.set_virtual_interface_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "vlan" => {
                        builder = builder.set_vlan(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "asn" => {
                        builder = builder.set_asn(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "amazonSideAsn" => {
                        builder = builder.set_amazon_side_asn(
                            smithy_json::deserialize::token::expect_i64_or_null(tokens.next())?
                        );
                    }
                    "authKey" => {
                        builder = builder.set_auth_key(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "amazonAddress" => {
                        builder = builder.set_amazon_address(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "customerAddress" => {
                        builder = builder.set_customer_address(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "addressFamily" => {
                        builder = builder.set_address_family(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::AddressFamily::from(s.as_str()))
                        );
                    }
                    "virtualInterfaceState" => {
                        builder = builder.set_virtual_interface_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::VirtualInterfaceState::from(s.as_str()))
                        );
                    }
                    "customerRouterConfig" => {
                        builder = builder.set_customer_router_config(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "mtu" => {
                        builder = builder.set_mtu(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "jumboFrameCapable" => {
                        builder = builder.set_jumbo_frame_capable(
                            smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                        );
                    }
                    "virtualGatewayId" => {
                        builder = builder.set_virtual_gateway_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "directConnectGatewayId" => {
                        builder = builder.set_direct_connect_gateway_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "routeFilterPrefixes" => {
                        builder = builder.set_route_filter_prefixes(
                            crate::json_deser::deser_list_route_filter_prefix(tokens)?
                        );
                    }
                    "bgpPeers" => {
                        builder = builder.set_bgp_peers(
                            crate::json_deser::deser_list_bgp_peer(tokens)?
                        );
                    }
                    "region" => {
                        builder = builder.set_region(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "awsDeviceV2" => {
                        builder = builder.set_aws_device_v2(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_list_tag(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_confirm_connection(
    input: &[u8],
    mut builder: crate::output::confirm_connection_output::Builder,
) -> Result<crate::output::confirm_connection_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "connectionState" => {
                        builder = builder.set_connection_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::ConnectionState::from(s.as_str()))
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_confirm_private_virtual_interface(
    input: &[u8],
    mut builder: crate::output::confirm_private_virtual_interface_output::Builder,
) -> Result<crate::output::confirm_private_virtual_interface_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "virtualInterfaceState" => {
                        builder = builder.set_virtual_interface_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::VirtualInterfaceState::from(s.as_str()))
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_confirm_public_virtual_interface(
    input: &[u8],
    mut builder: crate::output::confirm_public_virtual_interface_output::Builder,
) -> Result<crate::output::confirm_public_virtual_interface_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "virtualInterfaceState" => {
                        builder = builder.set_virtual_interface_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::VirtualInterfaceState::from(s.as_str()))
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_confirm_transit_virtual_interface(
    input: &[u8],
    mut builder: crate::output::confirm_transit_virtual_interface_output::Builder,
) -> Result<crate::output::confirm_transit_virtual_interface_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "virtualInterfaceState" => {
                        builder = builder.set_virtual_interface_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::VirtualInterfaceState::from(s.as_str()))
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_create_bgp_peer(
    input: &[u8],
    mut builder: crate::output::create_bgp_peer_output::Builder,
) -> Result<crate::output::create_bgp_peer_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "virtualInterface" => {
                        builder = builder.set_virtual_interface(
                            crate::json_deser::deser_structure_virtual_interface(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_create_connection(
    input: &[u8],
    mut builder: crate::output::create_connection_output::Builder,
) -> Result<crate::output::create_connection_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "ownerAccount" => {
                        builder = builder.set_owner_account(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionId" => {
                        builder = builder.set_connection_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionName" => {
                        builder = builder.set_connection_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionState" => {
                        builder = builder.set_connection_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::ConnectionState::from(s.as_str()))
                        );
                    }
                    "region" => {
                        builder = builder.set_region(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "location" => {
                        builder = builder.set_location(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "bandwidth" => {
                        builder = builder.set_bandwidth(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "vlan" => {
                        builder = builder.set_vlan(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "partnerName" => {
                        builder = builder.set_partner_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "loaIssueTime" => {
                        builder = builder.set_loa_issue_time(
                            smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                        );
                    }
                    "lagId" => {
                        builder = builder.set_lag_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "awsDevice" => {
                        builder = builder.set_aws_device(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "jumboFrameCapable" => {
                        builder = builder.set_jumbo_frame_capable(
                            smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                        );
                    }
                    "awsDeviceV2" => {
                        builder = builder.set_aws_device_v2(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "hasLogicalRedundancy" => {
                        builder = builder.set_has_logical_redundancy(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::HasLogicalRedundancy::from(s.as_str()))
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_list_tag(tokens)?
                        );
                    }
                    "providerName" => {
                        builder = builder.set_provider_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_create_direct_connect_gateway(
    input: &[u8],
    mut builder: crate::output::create_direct_connect_gateway_output::Builder,
) -> Result<crate::output::create_direct_connect_gateway_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "directConnectGateway" => {
                        builder = builder.set_direct_connect_gateway(
                            crate::json_deser::deser_structure_direct_connect_gateway(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_create_direct_connect_gateway_association(
    input: &[u8],
    mut builder: crate::output::create_direct_connect_gateway_association_output::Builder,
) -> Result<crate::output::create_direct_connect_gateway_association_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "directConnectGatewayAssociation" => {
                        builder = builder.set_direct_connect_gateway_association(
                            crate::json_deser::deser_structure_direct_connect_gateway_association(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_create_direct_connect_gateway_association_proposal(
    input: &[u8],
    mut builder: crate::output::create_direct_connect_gateway_association_proposal_output::Builder,
) -> Result<crate::output::create_direct_connect_gateway_association_proposal_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "directConnectGatewayAssociationProposal" => {
                        builder = builder.set_direct_connect_gateway_association_proposal(
                            crate::json_deser::deser_structure_direct_connect_gateway_association_proposal(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_create_interconnect(
    input: &[u8],
    mut builder: crate::output::create_interconnect_output::Builder,
) -> Result<crate::output::create_interconnect_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "interconnectId" => {
                        builder = builder.set_interconnect_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "interconnectName" => {
                        builder = builder.set_interconnect_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "interconnectState" => {
                        builder = builder.set_interconnect_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::InterconnectState::from(s.as_str()))
                        );
                    }
                    "region" => {
                        builder = builder.set_region(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "location" => {
                        builder = builder.set_location(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "bandwidth" => {
                        builder = builder.set_bandwidth(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "loaIssueTime" => {
                        builder = builder.set_loa_issue_time(
                            smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                        );
                    }
                    "lagId" => {
                        builder = builder.set_lag_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "awsDevice" => {
                        builder = builder.set_aws_device(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "jumboFrameCapable" => {
                        builder = builder.set_jumbo_frame_capable(
                            smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                        );
                    }
                    "awsDeviceV2" => {
                        builder = builder.set_aws_device_v2(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "hasLogicalRedundancy" => {
                        builder = builder.set_has_logical_redundancy(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::HasLogicalRedundancy::from(s.as_str()))
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_list_tag(tokens)?
                        );
                    }
                    "providerName" => {
                        builder = builder.set_provider_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_create_lag(
    input: &[u8],
    mut builder: crate::output::create_lag_output::Builder,
) -> Result<crate::output::create_lag_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "connectionsBandwidth" => {
                        builder = builder.set_connections_bandwidth(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "numberOfConnections" => {
                        builder = builder.set_number_of_connections(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "lagId" => {
                        builder = builder.set_lag_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "ownerAccount" => {
                        builder = builder.set_owner_account(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "lagName" => {
                        builder = builder.set_lag_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "lagState" => {
                        builder = builder.set_lag_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::LagState::from(s.as_str()))
                        );
                    }
                    "region" => {
                        builder = builder.set_region(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "location" => {
                        builder = builder.set_location(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "minimumLinks" => {
                        builder = builder.set_minimum_links(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "awsDevice" => {
                        builder = builder.set_aws_device(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "awsDeviceV2" => {
                        builder = builder.set_aws_device_v2(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connections" => {
                        builder = builder.set_connections(
                            crate::json_deser::deser_list_connection(tokens)?
                        );
                    }
                    "allowsHostedConnections" => {
                        builder = builder.set_allows_hosted_connections(
                            smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                        );
                    }
                    "jumboFrameCapable" => {
                        builder = builder.set_jumbo_frame_capable(
                            smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                        );
                    }
                    "hasLogicalRedundancy" => {
                        builder = builder.set_has_logical_redundancy(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::HasLogicalRedundancy::from(s.as_str()))
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_list_tag(tokens)?
                        );
                    }
                    "providerName" => {
                        builder = builder.set_provider_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_create_private_virtual_interface(
    input: &[u8],
    mut builder: crate::output::create_private_virtual_interface_output::Builder,
) -> Result<crate::output::create_private_virtual_interface_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "ownerAccount" => {
                        builder = builder.set_owner_account(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "virtualInterfaceId" => {
                        builder = builder.set_virtual_interface_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "location" => {
                        builder = builder.set_location(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionId" => {
                        builder = builder.set_connection_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "virtualInterfaceType" => {
                        builder = builder.set_virtual_interface_type(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "virtualInterfaceName" => {
                        builder = builder.set_virtual_interface_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "vlan" => {
                        builder = builder.set_vlan(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "asn" => {
                        builder = builder.set_asn(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "amazonSideAsn" => {
                        builder = builder.set_amazon_side_asn(
                            smithy_json::deserialize::token::expect_i64_or_null(tokens.next())?
                        );
                    }
                    "authKey" => {
                        builder = builder.set_auth_key(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "amazonAddress" => {
                        builder = builder.set_amazon_address(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "customerAddress" => {
                        builder = builder.set_customer_address(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "addressFamily" => {
                        builder = builder.set_address_family(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::AddressFamily::from(s.as_str()))
                        );
                    }
                    "virtualInterfaceState" => {
                        builder = builder.set_virtual_interface_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::VirtualInterfaceState::from(s.as_str()))
                        );
                    }
                    "customerRouterConfig" => {
                        builder = builder.set_customer_router_config(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "mtu" => {
                        builder = builder.set_mtu(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "jumboFrameCapable" => {
                        builder = builder.set_jumbo_frame_capable(
                            smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                        );
                    }
                    "virtualGatewayId" => {
                        builder = builder.set_virtual_gateway_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "directConnectGatewayId" => {
                        builder = builder.set_direct_connect_gateway_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "routeFilterPrefixes" => {
                        builder = builder.set_route_filter_prefixes(
                            crate::json_deser::deser_list_route_filter_prefix(tokens)?
                        );
                    }
                    "bgpPeers" => {
                        builder = builder.set_bgp_peers(
                            crate::json_deser::deser_list_bgp_peer(tokens)?
                        );
                    }
                    "region" => {
                        builder = builder.set_region(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "awsDeviceV2" => {
                        builder = builder.set_aws_device_v2(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_list_tag(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_create_public_virtual_interface(
    input: &[u8],
    mut builder: crate::output::create_public_virtual_interface_output::Builder,
) -> Result<crate::output::create_public_virtual_interface_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "ownerAccount" => {
                        builder = builder.set_owner_account(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "virtualInterfaceId" => {
                        builder = builder.set_virtual_interface_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "location" => {
                        builder = builder.set_location(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionId" => {
                        builder = builder.set_connection_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "virtualInterfaceType" => {
                        builder = builder.set_virtual_interface_type(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "virtualInterfaceName" => {
                        builder = builder.set_virtual_interface_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "vlan" => {
                        builder = builder.set_vlan(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "asn" => {
                        builder = builder.set_asn(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "amazonSideAsn" => {
                        builder = builder.set_amazon_side_asn(
                            smithy_json::deserialize::token::expect_i64_or_null(tokens.next())?
                        );
                    }
                    "authKey" => {
                        builder = builder.set_auth_key(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "amazonAddress" => {
                        builder = builder.set_amazon_address(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "customerAddress" => {
                        builder = builder.set_customer_address(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "addressFamily" => {
                        builder = builder.set_address_family(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::AddressFamily::from(s.as_str()))
                        );
                    }
                    "virtualInterfaceState" => {
                        builder = builder.set_virtual_interface_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::VirtualInterfaceState::from(s.as_str()))
                        );
                    }
                    "customerRouterConfig" => {
                        builder = builder.set_customer_router_config(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "mtu" => {
                        builder = builder.set_mtu(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "jumboFrameCapable" => {
                        builder = builder.set_jumbo_frame_capable(
                            smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                        );
                    }
                    "virtualGatewayId" => {
                        builder = builder.set_virtual_gateway_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "directConnectGatewayId" => {
                        builder = builder.set_direct_connect_gateway_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "routeFilterPrefixes" => {
                        builder = builder.set_route_filter_prefixes(
                            crate::json_deser::deser_list_route_filter_prefix(tokens)?
                        );
                    }
                    "bgpPeers" => {
                        builder = builder.set_bgp_peers(
                            crate::json_deser::deser_list_bgp_peer(tokens)?
                        );
                    }
                    "region" => {
                        builder = builder.set_region(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "awsDeviceV2" => {
                        builder = builder.set_aws_device_v2(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_list_tag(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_create_transit_virtual_interface(
    input: &[u8],
    mut builder: crate::output::create_transit_virtual_interface_output::Builder,
) -> Result<crate::output::create_transit_virtual_interface_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "virtualInterface" => {
                        builder = builder.set_virtual_interface(
                            crate::json_deser::deser_structure_virtual_interface(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_delete_bgp_peer(
    input: &[u8],
    mut builder: crate::output::delete_bgp_peer_output::Builder,
) -> Result<crate::output::delete_bgp_peer_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "virtualInterface" => {
                        builder = builder.set_virtual_interface(
                            crate::json_deser::deser_structure_virtual_interface(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_delete_connection(
    input: &[u8],
    mut builder: crate::output::delete_connection_output::Builder,
) -> Result<crate::output::delete_connection_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "ownerAccount" => {
                        builder = builder.set_owner_account(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionId" => {
                        builder = builder.set_connection_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionName" => {
                        builder = builder.set_connection_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionState" => {
                        builder = builder.set_connection_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::ConnectionState::from(s.as_str()))
                        );
                    }
                    "region" => {
                        builder = builder.set_region(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "location" => {
                        builder = builder.set_location(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "bandwidth" => {
                        builder = builder.set_bandwidth(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "vlan" => {
                        builder = builder.set_vlan(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "partnerName" => {
                        builder = builder.set_partner_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "loaIssueTime" => {
                        builder = builder.set_loa_issue_time(
                            smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                        );
                    }
                    "lagId" => {
                        builder = builder.set_lag_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "awsDevice" => {
                        builder = builder.set_aws_device(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "jumboFrameCapable" => {
                        builder = builder.set_jumbo_frame_capable(
                            smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                        );
                    }
                    "awsDeviceV2" => {
                        builder = builder.set_aws_device_v2(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "hasLogicalRedundancy" => {
                        builder = builder.set_has_logical_redundancy(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::HasLogicalRedundancy::from(s.as_str()))
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_list_tag(tokens)?
                        );
                    }
                    "providerName" => {
                        builder = builder.set_provider_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_delete_direct_connect_gateway(
    input: &[u8],
    mut builder: crate::output::delete_direct_connect_gateway_output::Builder,
) -> Result<crate::output::delete_direct_connect_gateway_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "directConnectGateway" => {
                        builder = builder.set_direct_connect_gateway(
                            crate::json_deser::deser_structure_direct_connect_gateway(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_delete_direct_connect_gateway_association(
    input: &[u8],
    mut builder: crate::output::delete_direct_connect_gateway_association_output::Builder,
) -> Result<crate::output::delete_direct_connect_gateway_association_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "directConnectGatewayAssociation" => {
                        builder = builder.set_direct_connect_gateway_association(
                            crate::json_deser::deser_structure_direct_connect_gateway_association(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_delete_direct_connect_gateway_association_proposal(
    input: &[u8],
    mut builder: crate::output::delete_direct_connect_gateway_association_proposal_output::Builder,
) -> Result<crate::output::delete_direct_connect_gateway_association_proposal_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "directConnectGatewayAssociationProposal" => {
                        builder = builder.set_direct_connect_gateway_association_proposal(
                            crate::json_deser::deser_structure_direct_connect_gateway_association_proposal(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_delete_interconnect(
    input: &[u8],
    mut builder: crate::output::delete_interconnect_output::Builder,
) -> Result<crate::output::delete_interconnect_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "interconnectState" => {
                        builder = builder.set_interconnect_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::InterconnectState::from(s.as_str()))
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_delete_lag(
    input: &[u8],
    mut builder: crate::output::delete_lag_output::Builder,
) -> Result<crate::output::delete_lag_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "connectionsBandwidth" => {
                        builder = builder.set_connections_bandwidth(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "numberOfConnections" => {
                        builder = builder.set_number_of_connections(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "lagId" => {
                        builder = builder.set_lag_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "ownerAccount" => {
                        builder = builder.set_owner_account(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "lagName" => {
                        builder = builder.set_lag_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "lagState" => {
                        builder = builder.set_lag_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::LagState::from(s.as_str()))
                        );
                    }
                    "region" => {
                        builder = builder.set_region(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "location" => {
                        builder = builder.set_location(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "minimumLinks" => {
                        builder = builder.set_minimum_links(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "awsDevice" => {
                        builder = builder.set_aws_device(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "awsDeviceV2" => {
                        builder = builder.set_aws_device_v2(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connections" => {
                        builder = builder.set_connections(
                            crate::json_deser::deser_list_connection(tokens)?
                        );
                    }
                    "allowsHostedConnections" => {
                        builder = builder.set_allows_hosted_connections(
                            smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                        );
                    }
                    "jumboFrameCapable" => {
                        builder = builder.set_jumbo_frame_capable(
                            smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                        );
                    }
                    "hasLogicalRedundancy" => {
                        builder = builder.set_has_logical_redundancy(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::HasLogicalRedundancy::from(s.as_str()))
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_list_tag(tokens)?
                        );
                    }
                    "providerName" => {
                        builder = builder.set_provider_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_delete_virtual_interface(
    input: &[u8],
    mut builder: crate::output::delete_virtual_interface_output::Builder,
) -> Result<crate::output::delete_virtual_interface_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "virtualInterfaceState" => {
                        builder = builder.set_virtual_interface_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::VirtualInterfaceState::from(s.as_str()))
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_describe_connection_loa(
    input: &[u8],
    mut builder: crate::output::describe_connection_loa_output::Builder,
) -> Result<crate::output::describe_connection_loa_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "loa" => {
                        builder = builder.set_loa(
                            crate::json_deser::deser_structure_loa(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_describe_connections(
    input: &[u8],
    mut builder: crate::output::describe_connections_output::Builder,
) -> Result<crate::output::describe_connections_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "connections" => {
                        builder = builder.set_connections(
                            crate::json_deser::deser_list_connection(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_describe_connections_on_interconnect(
    input: &[u8],
    mut builder: crate::output::describe_connections_on_interconnect_output::Builder,
) -> Result<crate::output::describe_connections_on_interconnect_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "connections" => {
                        builder = builder.set_connections(
                            crate::json_deser::deser_list_connection(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_describe_direct_connect_gateway_association_proposals(
    input: &[u8],
    mut builder: crate::output::describe_direct_connect_gateway_association_proposals_output::Builder,
) -> Result<crate::output::describe_direct_connect_gateway_association_proposals_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "directConnectGatewayAssociationProposals" => {
                        builder = builder.set_direct_connect_gateway_association_proposals(
                            crate::json_deser::deser_list_direct_connect_gateway_association_proposal(tokens)?
                        );
                    }
                    "nextToken" => {
                        builder = builder.set_next_token(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_describe_direct_connect_gateway_associations(
    input: &[u8],
    mut builder: crate::output::describe_direct_connect_gateway_associations_output::Builder,
) -> Result<crate::output::describe_direct_connect_gateway_associations_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "directConnectGatewayAssociations" => {
                        builder = builder.set_direct_connect_gateway_associations(
                            crate::json_deser::deser_list_direct_connect_gateway_association(tokens)?
                        );
                    }
                    "nextToken" => {
                        builder = builder.set_next_token(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_describe_direct_connect_gateway_attachments(
    input: &[u8],
    mut builder: crate::output::describe_direct_connect_gateway_attachments_output::Builder,
) -> Result<crate::output::describe_direct_connect_gateway_attachments_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "directConnectGatewayAttachments" => {
                        builder = builder.set_direct_connect_gateway_attachments(
                            crate::json_deser::deser_list_direct_connect_gateway_attachment(tokens)?
                        );
                    }
                    "nextToken" => {
                        builder = builder.set_next_token(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_describe_direct_connect_gateways(
    input: &[u8],
    mut builder: crate::output::describe_direct_connect_gateways_output::Builder,
) -> Result<crate::output::describe_direct_connect_gateways_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "directConnectGateways" => {
                        builder = builder.set_direct_connect_gateways(
                            crate::json_deser::deser_list_direct_connect_gateway(tokens)?
                        );
                    }
                    "nextToken" => {
                        builder = builder.set_next_token(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_describe_hosted_connections(
    input: &[u8],
    mut builder: crate::output::describe_hosted_connections_output::Builder,
) -> Result<crate::output::describe_hosted_connections_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "connections" => {
                        builder = builder.set_connections(
                            crate::json_deser::deser_list_connection(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_describe_interconnect_loa(
    input: &[u8],
    mut builder: crate::output::describe_interconnect_loa_output::Builder,
) -> Result<crate::output::describe_interconnect_loa_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "loa" => {
                        builder = builder.set_loa(
                            crate::json_deser::deser_structure_loa(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_describe_interconnects(
    input: &[u8],
    mut builder: crate::output::describe_interconnects_output::Builder,
) -> Result<crate::output::describe_interconnects_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "interconnects" => {
                        builder = builder.set_interconnects(
                            crate::json_deser::deser_list_interconnect(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_describe_lags(
    input: &[u8],
    mut builder: crate::output::describe_lags_output::Builder,
) -> Result<crate::output::describe_lags_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "lags" => {
                        builder = builder.set_lags(
                            crate::json_deser::deser_list_lag(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_describe_loa(
    input: &[u8],
    mut builder: crate::output::describe_loa_output::Builder,
) -> Result<crate::output::describe_loa_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "loaContent" => {
                        builder = builder.set_loa_content(
                            smithy_json::deserialize::token::expect_blob_or_null(tokens.next())?
                        );
                    }
                    "loaContentType" => {
                        builder = builder.set_loa_content_type(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::LoaContentType::from(s.as_str()))
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_describe_locations(
    input: &[u8],
    mut builder: crate::output::describe_locations_output::Builder,
) -> Result<crate::output::describe_locations_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "locations" => {
                        builder = builder.set_locations(
                            crate::json_deser::deser_list_location(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_describe_tags(
    input: &[u8],
    mut builder: crate::output::describe_tags_output::Builder,
) -> Result<crate::output::describe_tags_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "resourceTags" => {
                        builder = builder.set_resource_tags(
                            crate::json_deser::deser_list_resource_tag(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_describe_virtual_gateways(
    input: &[u8],
    mut builder: crate::output::describe_virtual_gateways_output::Builder,
) -> Result<crate::output::describe_virtual_gateways_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "virtualGateways" => {
                        builder = builder.set_virtual_gateways(
                            crate::json_deser::deser_list_virtual_gateway(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_describe_virtual_interfaces(
    input: &[u8],
    mut builder: crate::output::describe_virtual_interfaces_output::Builder,
) -> Result<crate::output::describe_virtual_interfaces_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "virtualInterfaces" => {
                        builder = builder.set_virtual_interfaces(
                            crate::json_deser::deser_list_virtual_interface(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_disassociate_connection_from_lag(
    input: &[u8],
    mut builder: crate::output::disassociate_connection_from_lag_output::Builder,
) -> Result<crate::output::disassociate_connection_from_lag_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "ownerAccount" => {
                        builder = builder.set_owner_account(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionId" => {
                        builder = builder.set_connection_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionName" => {
                        builder = builder.set_connection_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionState" => {
                        builder = builder.set_connection_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::ConnectionState::from(s.as_str()))
                        );
                    }
                    "region" => {
                        builder = builder.set_region(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "location" => {
                        builder = builder.set_location(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "bandwidth" => {
                        builder = builder.set_bandwidth(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "vlan" => {
                        builder = builder.set_vlan(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "partnerName" => {
                        builder = builder.set_partner_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "loaIssueTime" => {
                        builder = builder.set_loa_issue_time(
                            smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                        );
                    }
                    "lagId" => {
                        builder = builder.set_lag_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "awsDevice" => {
                        builder = builder.set_aws_device(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "jumboFrameCapable" => {
                        builder = builder.set_jumbo_frame_capable(
                            smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                        );
                    }
                    "awsDeviceV2" => {
                        builder = builder.set_aws_device_v2(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "hasLogicalRedundancy" => {
                        builder = builder.set_has_logical_redundancy(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::HasLogicalRedundancy::from(s.as_str()))
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_list_tag(tokens)?
                        );
                    }
                    "providerName" => {
                        builder = builder.set_provider_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_list_virtual_interface_test_history(
    input: &[u8],
    mut builder: crate::output::list_virtual_interface_test_history_output::Builder,
) -> Result<crate::output::list_virtual_interface_test_history_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "virtualInterfaceTestHistory" => {
                        builder = builder.set_virtual_interface_test_history(
                            crate::json_deser::deser_list_virtual_interface_test_history(tokens)?
                        );
                    }
                    "nextToken" => {
                        builder = builder.set_next_token(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_start_bgp_failover_test(
    input: &[u8],
    mut builder: crate::output::start_bgp_failover_test_output::Builder,
) -> Result<crate::output::start_bgp_failover_test_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "virtualInterfaceTest" => {
                        builder = builder.set_virtual_interface_test(
                            crate::json_deser::deser_structure_virtual_interface_test_history(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_stop_bgp_failover_test(
    input: &[u8],
    mut builder: crate::output::stop_bgp_failover_test_output::Builder,
) -> Result<crate::output::stop_bgp_failover_test_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "virtualInterfaceTest" => {
                        builder = builder.set_virtual_interface_test(
                            crate::json_deser::deser_structure_virtual_interface_test_history(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_update_direct_connect_gateway_association(
    input: &[u8],
    mut builder: crate::output::update_direct_connect_gateway_association_output::Builder,
) -> Result<crate::output::update_direct_connect_gateway_association_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "directConnectGatewayAssociation" => {
                        builder = builder.set_direct_connect_gateway_association(
                            crate::json_deser::deser_structure_direct_connect_gateway_association(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_update_lag(
    input: &[u8],
    mut builder: crate::output::update_lag_output::Builder,
) -> Result<crate::output::update_lag_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "connectionsBandwidth" => {
                        builder = builder.set_connections_bandwidth(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "numberOfConnections" => {
                        builder = builder.set_number_of_connections(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "lagId" => {
                        builder = builder.set_lag_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "ownerAccount" => {
                        builder = builder.set_owner_account(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "lagName" => {
                        builder = builder.set_lag_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "lagState" => {
                        builder = builder.set_lag_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::LagState::from(s.as_str()))
                        );
                    }
                    "region" => {
                        builder = builder.set_region(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "location" => {
                        builder = builder.set_location(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "minimumLinks" => {
                        builder = builder.set_minimum_links(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "awsDevice" => {
                        builder = builder.set_aws_device(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "awsDeviceV2" => {
                        builder = builder.set_aws_device_v2(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connections" => {
                        builder = builder.set_connections(
                            crate::json_deser::deser_list_connection(tokens)?
                        );
                    }
                    "allowsHostedConnections" => {
                        builder = builder.set_allows_hosted_connections(
                            smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                        );
                    }
                    "jumboFrameCapable" => {
                        builder = builder.set_jumbo_frame_capable(
                            smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                        );
                    }
                    "hasLogicalRedundancy" => {
                        builder = builder.set_has_logical_redundancy(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::HasLogicalRedundancy::from(s.as_str()))
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_list_tag(tokens)?
                        );
                    }
                    "providerName" => {
                        builder = builder.set_provider_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_update_virtual_interface_attributes(
    input: &[u8],
    mut builder: crate::output::update_virtual_interface_attributes_output::Builder,
) -> Result<crate::output::update_virtual_interface_attributes_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "ownerAccount" => {
                        builder = builder.set_owner_account(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "virtualInterfaceId" => {
                        builder = builder.set_virtual_interface_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "location" => {
                        builder = builder.set_location(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "connectionId" => {
                        builder = builder.set_connection_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "virtualInterfaceType" => {
                        builder = builder.set_virtual_interface_type(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "virtualInterfaceName" => {
                        builder = builder.set_virtual_interface_name(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "vlan" => {
                        builder = builder.set_vlan(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "asn" => {
                        builder = builder.set_asn(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "amazonSideAsn" => {
                        builder = builder.set_amazon_side_asn(
                            smithy_json::deserialize::token::expect_i64_or_null(tokens.next())?
                        );
                    }
                    "authKey" => {
                        builder = builder.set_auth_key(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "amazonAddress" => {
                        builder = builder.set_amazon_address(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "customerAddress" => {
                        builder = builder.set_customer_address(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "addressFamily" => {
                        builder = builder.set_address_family(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::AddressFamily::from(s.as_str()))
                        );
                    }
                    "virtualInterfaceState" => {
                        builder = builder.set_virtual_interface_state(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::VirtualInterfaceState::from(s.as_str()))
                        );
                    }
                    "customerRouterConfig" => {
                        builder = builder.set_customer_router_config(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "mtu" => {
                        builder = builder.set_mtu(
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                        );
                    }
                    "jumboFrameCapable" => {
                        builder = builder.set_jumbo_frame_capable(
                            smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                        );
                    }
                    "virtualGatewayId" => {
                        builder = builder.set_virtual_gateway_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "directConnectGatewayId" => {
                        builder = builder.set_direct_connect_gateway_id(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "routeFilterPrefixes" => {
                        builder = builder.set_route_filter_prefixes(
                            crate::json_deser::deser_list_route_filter_prefix(tokens)?
                        );
                    }
                    "bgpPeers" => {
                        builder = builder.set_bgp_peers(
                            crate::json_deser::deser_list_bgp_peer(tokens)?
                        );
                    }
                    "region" => {
                        builder = builder.set_region(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "awsDeviceV2" => {
                        builder = builder.set_aws_device_v2(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "tags" => {
                        builder = builder.set_tags(
                            crate::json_deser::deser_list_tag(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_structure_direct_connect_client_exceptionjson_err(
    input: &[u8],
    mut builder: crate::error::direct_connect_client_exception::Builder,
) -> Result<crate::error::direct_connect_client_exception::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "message" | "Message" => {
                        builder = builder.set_message(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_structure_direct_connect_server_exceptionjson_err(
    input: &[u8],
    mut builder: crate::error::direct_connect_server_exception::Builder,
) -> Result<crate::error::direct_connect_server_exception::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "message" | "Message" => {
                        builder = builder.set_message(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_structure_duplicate_tag_keys_exceptionjson_err(
    input: &[u8],
    mut builder: crate::error::duplicate_tag_keys_exception::Builder,
) -> Result<crate::error::duplicate_tag_keys_exception::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "message" | "Message" => {
                        builder = builder.set_message(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_structure_too_many_tags_exceptionjson_err(
    input: &[u8],
    mut builder: crate::error::too_many_tags_exception::Builder,
) -> Result<crate::error::too_many_tags_exception::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "message" | "Message" => {
                        builder = builder.set_message(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn or_empty_doc(data: &[u8]) -> &[u8] {
    if data.is_empty() {
        b"{}"
    } else {
        data
    }
}

pub fn deser_structure_tag<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::Tag>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::Tag::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "key" => {
                                builder = builder.set_key(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "value" => {
                                builder = builder.set_value(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_route_filter_prefix<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::RouteFilterPrefix>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::RouteFilterPrefix::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "cidr" => {
                                builder = builder.set_cidr(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_bgp_peer<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::BgpPeer>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::BgpPeer::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "bgpPeerId" => {
                                builder = builder.set_bgp_peer_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "asn" => {
                                builder = builder.set_asn(
                                    smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                                );
                            }
                            "authKey" => {
                                builder = builder.set_auth_key(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "addressFamily" => {
                                builder = builder.set_address_family(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::AddressFamily::from(s.as_str()))
                                );
                            }
                            "amazonAddress" => {
                                builder = builder.set_amazon_address(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "customerAddress" => {
                                builder = builder.set_customer_address(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "bgpPeerState" => {
                                builder = builder.set_bgp_peer_state(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::BgpPeerState::from(s.as_str()))
                                );
                            }
                            "bgpStatus" => {
                                builder = builder.set_bgp_status(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::BgpStatus::from(s.as_str()))
                                );
                            }
                            "awsDeviceV2" => {
                                builder = builder.set_aws_device_v2(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_connection<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::Connection>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::Connection::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "ownerAccount" => {
                                builder = builder.set_owner_account(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "connectionId" => {
                                builder = builder.set_connection_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "connectionName" => {
                                builder = builder.set_connection_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "connectionState" => {
                                builder = builder.set_connection_state(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::ConnectionState::from(s.as_str()))
                                );
                            }
                            "region" => {
                                builder = builder.set_region(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "location" => {
                                builder = builder.set_location(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "bandwidth" => {
                                builder = builder.set_bandwidth(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "vlan" => {
                                builder = builder.set_vlan(
                                    smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                                );
                            }
                            "partnerName" => {
                                builder = builder.set_partner_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "loaIssueTime" => {
                                builder = builder.set_loa_issue_time(
                                    smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                                );
                            }
                            "lagId" => {
                                builder = builder.set_lag_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "awsDevice" => {
                                builder = builder.set_aws_device(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "jumboFrameCapable" => {
                                builder = builder.set_jumbo_frame_capable(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "awsDeviceV2" => {
                                builder = builder.set_aws_device_v2(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "hasLogicalRedundancy" => {
                                builder = builder.set_has_logical_redundancy(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::HasLogicalRedundancy::from(s.as_str()))
                                );
                            }
                            "tags" => {
                                builder = builder.set_tags(
                                    crate::json_deser::deser_list_tag(tokens)?
                                );
                            }
                            "providerName" => {
                                builder = builder.set_provider_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_interconnect<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::Interconnect>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::Interconnect::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "interconnectId" => {
                                builder = builder.set_interconnect_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "interconnectName" => {
                                builder = builder.set_interconnect_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "interconnectState" => {
                                builder = builder.set_interconnect_state(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::InterconnectState::from(s.as_str()))
                                );
                            }
                            "region" => {
                                builder = builder.set_region(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "location" => {
                                builder = builder.set_location(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "bandwidth" => {
                                builder = builder.set_bandwidth(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "loaIssueTime" => {
                                builder = builder.set_loa_issue_time(
                                    smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                                );
                            }
                            "lagId" => {
                                builder = builder.set_lag_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "awsDevice" => {
                                builder = builder.set_aws_device(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "jumboFrameCapable" => {
                                builder = builder.set_jumbo_frame_capable(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "awsDeviceV2" => {
                                builder = builder.set_aws_device_v2(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "hasLogicalRedundancy" => {
                                builder = builder.set_has_logical_redundancy(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::HasLogicalRedundancy::from(s.as_str()))
                                );
                            }
                            "tags" => {
                                builder = builder.set_tags(
                                    crate::json_deser::deser_list_tag(tokens)?
                                );
                            }
                            "providerName" => {
                                builder = builder.set_provider_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_lag<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::Lag>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::Lag::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "connectionsBandwidth" => {
                                builder = builder.set_connections_bandwidth(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "numberOfConnections" => {
                                builder = builder.set_number_of_connections(
                                    smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                                );
                            }
                            "lagId" => {
                                builder = builder.set_lag_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "ownerAccount" => {
                                builder = builder.set_owner_account(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "lagName" => {
                                builder = builder.set_lag_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "lagState" => {
                                builder = builder.set_lag_state(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::LagState::from(s.as_str()))
                                );
                            }
                            "region" => {
                                builder = builder.set_region(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "location" => {
                                builder = builder.set_location(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "minimumLinks" => {
                                builder = builder.set_minimum_links(
                                    smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                                );
                            }
                            "awsDevice" => {
                                builder = builder.set_aws_device(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "awsDeviceV2" => {
                                builder = builder.set_aws_device_v2(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "connections" => {
                                builder = builder.set_connections(
                                    crate::json_deser::deser_list_connection(tokens)?
                                );
                            }
                            "allowsHostedConnections" => {
                                builder = builder.set_allows_hosted_connections(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "jumboFrameCapable" => {
                                builder = builder.set_jumbo_frame_capable(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "hasLogicalRedundancy" => {
                                builder = builder.set_has_logical_redundancy(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::HasLogicalRedundancy::from(s.as_str()))
                                );
                            }
                            "tags" => {
                                builder = builder.set_tags(
                                    crate::json_deser::deser_list_tag(tokens)?
                                );
                            }
                            "providerName" => {
                                builder = builder.set_provider_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_virtual_interface<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::VirtualInterface>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::VirtualInterface::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "ownerAccount" => {
                                builder = builder.set_owner_account(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "virtualInterfaceId" => {
                                builder = builder.set_virtual_interface_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "location" => {
                                builder = builder.set_location(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "connectionId" => {
                                builder = builder.set_connection_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "virtualInterfaceType" => {
                                builder = builder.set_virtual_interface_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "virtualInterfaceName" => {
                                builder = builder.set_virtual_interface_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "vlan" => {
                                builder = builder.set_vlan(
                                    smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                                );
                            }
                            "asn" => {
                                builder = builder.set_asn(
                                    smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                                );
                            }
                            "amazonSideAsn" => {
                                builder = builder.set_amazon_side_asn(
                                    smithy_json::deserialize::token::expect_i64_or_null(tokens.next())?
                                );
                            }
                            "authKey" => {
                                builder = builder.set_auth_key(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "amazonAddress" => {
                                builder = builder.set_amazon_address(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "customerAddress" => {
                                builder = builder.set_customer_address(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "addressFamily" => {
                                builder = builder.set_address_family(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::AddressFamily::from(s.as_str()))
                                );
                            }
                            "virtualInterfaceState" => {
                                builder = builder.set_virtual_interface_state(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::VirtualInterfaceState::from(s.as_str()))
                                );
                            }
                            "customerRouterConfig" => {
                                builder = builder.set_customer_router_config(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "mtu" => {
                                builder = builder.set_mtu(
                                    smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                                );
                            }
                            "jumboFrameCapable" => {
                                builder = builder.set_jumbo_frame_capable(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "virtualGatewayId" => {
                                builder = builder.set_virtual_gateway_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "directConnectGatewayId" => {
                                builder = builder.set_direct_connect_gateway_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "routeFilterPrefixes" => {
                                builder = builder.set_route_filter_prefixes(
                                    crate::json_deser::deser_list_route_filter_prefix(tokens)?
                                );
                            }
                            "bgpPeers" => {
                                builder = builder.set_bgp_peers(
                                    crate::json_deser::deser_list_bgp_peer(tokens)?
                                );
                            }
                            "region" => {
                                builder = builder.set_region(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "awsDeviceV2" => {
                                builder = builder.set_aws_device_v2(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "tags" => {
                                builder = builder.set_tags(
                                    crate::json_deser::deser_list_tag(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_direct_connect_gateway<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::DirectConnectGateway>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::DirectConnectGateway::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "directConnectGatewayId" => {
                                builder = builder.set_direct_connect_gateway_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "directConnectGatewayName" => {
                                builder = builder.set_direct_connect_gateway_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "amazonSideAsn" => {
                                builder = builder.set_amazon_side_asn(
                                    smithy_json::deserialize::token::expect_i64_or_null(tokens.next())?
                                );
                            }
                            "ownerAccount" => {
                                builder = builder.set_owner_account(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "directConnectGatewayState" => {
                                builder = builder.set_direct_connect_gateway_state(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::DirectConnectGatewayState::from(s.as_str()))
                                );
                            }
                            "stateChangeError" => {
                                builder = builder.set_state_change_error(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_associated_gateway<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::AssociatedGateway>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::AssociatedGateway::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "id" => {
                                builder = builder.set_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "type" => {
                                builder = builder.set_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::GatewayType::from(s.as_str()))
                                );
                            }
                            "ownerAccount" => {
                                builder = builder.set_owner_account(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "region" => {
                                builder = builder.set_region(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_direct_connect_gateway_association<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::DirectConnectGatewayAssociation>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::DirectConnectGatewayAssociation::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "directConnectGatewayId" => {
                                builder = builder.set_direct_connect_gateway_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "directConnectGatewayOwnerAccount" => {
                                builder = builder.set_direct_connect_gateway_owner_account(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "associationState" => {
                                builder = builder.set_association_state(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::DirectConnectGatewayAssociationState::from(s.as_str()))
                                );
                            }
                            "stateChangeError" => {
                                builder = builder.set_state_change_error(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "associatedGateway" => {
                                builder = builder.set_associated_gateway(
                                    crate::json_deser::deser_structure_associated_gateway(tokens)?
                                );
                            }
                            "associationId" => {
                                builder = builder.set_association_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "allowedPrefixesToDirectConnectGateway" => {
                                builder = builder.set_allowed_prefixes_to_direct_connect_gateway(
                                    crate::json_deser::deser_list_route_filter_prefix(tokens)?
                                );
                            }
                            "virtualGatewayId" => {
                                builder = builder.set_virtual_gateway_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "virtualGatewayRegion" => {
                                builder = builder.set_virtual_gateway_region(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "virtualGatewayOwnerAccount" => {
                                builder = builder.set_virtual_gateway_owner_account(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_direct_connect_gateway_association_proposal<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::DirectConnectGatewayAssociationProposal>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::DirectConnectGatewayAssociationProposal::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "proposalId" => {
                                builder = builder.set_proposal_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "directConnectGatewayId" => {
                                builder = builder.set_direct_connect_gateway_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "directConnectGatewayOwnerAccount" => {
                                builder = builder.set_direct_connect_gateway_owner_account(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "proposalState" => {
                                builder = builder.set_proposal_state(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::DirectConnectGatewayAssociationProposalState::from(s.as_str()))
                                );
                            }
                            "associatedGateway" => {
                                builder = builder.set_associated_gateway(
                                    crate::json_deser::deser_structure_associated_gateway(tokens)?
                                );
                            }
                            "existingAllowedPrefixesToDirectConnectGateway" => {
                                builder = builder.set_existing_allowed_prefixes_to_direct_connect_gateway(
                                    crate::json_deser::deser_list_route_filter_prefix(tokens)?
                                );
                            }
                            "requestedAllowedPrefixesToDirectConnectGateway" => {
                                builder = builder.set_requested_allowed_prefixes_to_direct_connect_gateway(
                                    crate::json_deser::deser_list_route_filter_prefix(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_direct_connect_gateway_attachment<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::DirectConnectGatewayAttachment>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::DirectConnectGatewayAttachment::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "directConnectGatewayId" => {
                                builder = builder.set_direct_connect_gateway_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "virtualInterfaceId" => {
                                builder = builder.set_virtual_interface_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "virtualInterfaceRegion" => {
                                builder = builder.set_virtual_interface_region(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "virtualInterfaceOwnerAccount" => {
                                builder = builder.set_virtual_interface_owner_account(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "attachmentState" => {
                                builder = builder.set_attachment_state(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::DirectConnectGatewayAttachmentState::from(s.as_str()))
                                );
                            }
                            "attachmentType" => {
                                builder = builder.set_attachment_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::DirectConnectGatewayAttachmentType::from(s.as_str()))
                                );
                            }
                            "stateChangeError" => {
                                builder = builder.set_state_change_error(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_loa<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::Loa>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::Loa::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "loaContent" => {
                                builder = builder.set_loa_content(
                                    smithy_json::deserialize::token::expect_blob_or_null(tokens.next())?
                                );
                            }
                            "loaContentType" => {
                                builder = builder.set_loa_content_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::LoaContentType::from(s.as_str()))
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_location<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::Location>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::Location::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "locationCode" => {
                                builder = builder.set_location_code(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "locationName" => {
                                builder = builder.set_location_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "region" => {
                                builder = builder.set_region(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "availablePortSpeeds" => {
                                builder = builder.set_available_port_speeds(
                                    crate::json_deser::deser_list_string(tokens)?
                                );
                            }
                            "availableProviders" => {
                                builder = builder.set_available_providers(
                                    crate::json_deser::deser_list_string(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_resource_tag<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::ResourceTag>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::ResourceTag::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "resourceArn" => {
                                builder = builder.set_resource_arn(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "tags" => {
                                builder = builder.set_tags(
                                    crate::json_deser::deser_list_tag(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_virtual_gateway<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::VirtualGateway>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::VirtualGateway::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "virtualGatewayId" => {
                                builder = builder.set_virtual_gateway_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "virtualGatewayState" => {
                                builder = builder.set_virtual_gateway_state(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_virtual_interface_test_history<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::VirtualInterfaceTestHistory>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::VirtualInterfaceTestHistory::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "testId" => {
                                builder = builder.set_test_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "virtualInterfaceId" => {
                                builder = builder.set_virtual_interface_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "bgpPeers" => {
                                builder = builder.set_bgp_peers(
                                    crate::json_deser::deser_list_string(tokens)?
                                );
                            }
                            "status" => {
                                builder = builder.set_status(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "ownerAccount" => {
                                builder = builder.set_owner_account(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "testDurationInMinutes" => {
                                builder = builder.set_test_duration_in_minutes(
                                    smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                                );
                            }
                            "startTime" => {
                                builder = builder.set_start_time(
                                    smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                                );
                            }
                            "endTime" => {
                                builder = builder.set_end_time(
                                    smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_bgp_peer<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::BgpPeer>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_bgp_peer(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_connection<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::Connection>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_connection(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_direct_connect_gateway<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::DirectConnectGateway>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_direct_connect_gateway(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_direct_connect_gateway_association<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::DirectConnectGatewayAssociation>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_direct_connect_gateway_association(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_direct_connect_gateway_association_proposal<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::DirectConnectGatewayAssociationProposal>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_direct_connect_gateway_association_proposal(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_direct_connect_gateway_attachment<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::DirectConnectGatewayAttachment>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_direct_connect_gateway_attachment(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_interconnect<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::Interconnect>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_interconnect(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_lag<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::Lag>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_lag(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_location<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::Location>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_location(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_resource_tag<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::ResourceTag>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_resource_tag(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_route_filter_prefix<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::RouteFilterPrefix>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_route_filter_prefix(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_string<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<std::string::String>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_tag<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::Tag>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_tag(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_virtual_gateway<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::VirtualGateway>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_virtual_gateway(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_virtual_interface<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::VirtualInterface>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_virtual_interface(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_virtual_interface_test_history<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::VirtualInterfaceTestHistory>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_virtual_interface_test_history(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}
