/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Information about the associated gateway.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct AssociatedGateway {
    pub id: std::option::Option<std::string::String>,
    pub r#type: std::option::Option<crate::model::GatewayType>,
    pub owner_account: std::option::Option<std::string::String>,
    pub region: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for AssociatedGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AssociatedGateway");
        formatter.field("id", &self.id);
        formatter.field("type", &self.r#type);
        formatter.field("owner_account", &self.owner_account);
        formatter.field("region", &self.region);
        formatter.finish()
    }
}
/// See [`AssociatedGateway`](crate::model::AssociatedGateway)
pub mod associated_gateway {
    /// A builder for [`AssociatedGateway`](crate::model::AssociatedGateway)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) r#type: std::option::Option<crate::model::GatewayType>,
        pub(crate) owner_account: std::option::Option<std::string::String>,
        pub(crate) region: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn r#type(mut self, input: crate::model::GatewayType) -> Self {
            self.r#type = Some(input);
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::GatewayType>) -> Self {
            self.r#type = input;
            self
        }
        pub fn owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner_account = Some(input.into());
            self
        }
        pub fn set_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner_account = input;
            self
        }
        pub fn region(mut self, input: impl Into<std::string::String>) -> Self {
            self.region = Some(input.into());
            self
        }
        pub fn set_region(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.region = input;
            self
        }
        /// Consumes the builder and constructs a [`AssociatedGateway`](crate::model::AssociatedGateway)
        pub fn build(self) -> crate::model::AssociatedGateway {
            crate::model::AssociatedGateway {
                id: self.id,
                r#type: self.r#type,
                owner_account: self.owner_account,
                region: self.region,
            }
        }
    }
}
impl AssociatedGateway {
    /// Creates a new builder-style object to manufacture [`AssociatedGateway`](crate::model::AssociatedGateway)
    pub fn builder() -> crate::model::associated_gateway::Builder {
        crate::model::associated_gateway::Builder::default()
    }
}

/// Information about a BGP peer.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct BgpPeer {
    pub bgp_peer_id: std::option::Option<std::string::String>,
    /// The autonomous system (AS) number for Border Gateway Protocol (BGP) configuration.
    pub asn: std::option::Option<i32>,
    pub auth_key: std::option::Option<std::string::String>,
    pub address_family: std::option::Option<crate::model::AddressFamily>,
    pub amazon_address: std::option::Option<std::string::String>,
    pub customer_address: std::option::Option<std::string::String>,
    pub bgp_peer_state: std::option::Option<crate::model::BgpPeerState>,
    pub bgp_status: std::option::Option<crate::model::BgpStatus>,
    pub aws_device_v2: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for BgpPeer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("BgpPeer");
        formatter.field("bgp_peer_id", &self.bgp_peer_id);
        formatter.field("asn", &self.asn);
        formatter.field("auth_key", &self.auth_key);
        formatter.field("address_family", &self.address_family);
        formatter.field("amazon_address", &self.amazon_address);
        formatter.field("customer_address", &self.customer_address);
        formatter.field("bgp_peer_state", &self.bgp_peer_state);
        formatter.field("bgp_status", &self.bgp_status);
        formatter.field("aws_device_v2", &self.aws_device_v2);
        formatter.finish()
    }
}
/// See [`BgpPeer`](crate::model::BgpPeer)
pub mod bgp_peer {
    /// A builder for [`BgpPeer`](crate::model::BgpPeer)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) bgp_peer_id: std::option::Option<std::string::String>,
        pub(crate) asn: std::option::Option<i32>,
        pub(crate) auth_key: std::option::Option<std::string::String>,
        pub(crate) address_family: std::option::Option<crate::model::AddressFamily>,
        pub(crate) amazon_address: std::option::Option<std::string::String>,
        pub(crate) customer_address: std::option::Option<std::string::String>,
        pub(crate) bgp_peer_state: std::option::Option<crate::model::BgpPeerState>,
        pub(crate) bgp_status: std::option::Option<crate::model::BgpStatus>,
        pub(crate) aws_device_v2: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn bgp_peer_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.bgp_peer_id = Some(input.into());
            self
        }
        pub fn set_bgp_peer_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.bgp_peer_id = input;
            self
        }
        /// The autonomous system (AS) number for Border Gateway Protocol (BGP) configuration.
        pub fn asn(mut self, input: i32) -> Self {
            self.asn = Some(input);
            self
        }
        pub fn set_asn(mut self, input: std::option::Option<i32>) -> Self {
            self.asn = input;
            self
        }
        pub fn auth_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.auth_key = Some(input.into());
            self
        }
        pub fn set_auth_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.auth_key = input;
            self
        }
        pub fn address_family(mut self, input: crate::model::AddressFamily) -> Self {
            self.address_family = Some(input);
            self
        }
        pub fn set_address_family(mut self, input: std::option::Option<crate::model::AddressFamily>) -> Self {
            self.address_family = input;
            self
        }
        pub fn amazon_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.amazon_address = Some(input.into());
            self
        }
        pub fn set_amazon_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.amazon_address = input;
            self
        }
        pub fn customer_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.customer_address = Some(input.into());
            self
        }
        pub fn set_customer_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.customer_address = input;
            self
        }
        pub fn bgp_peer_state(mut self, input: crate::model::BgpPeerState) -> Self {
            self.bgp_peer_state = Some(input);
            self
        }
        pub fn set_bgp_peer_state(mut self, input: std::option::Option<crate::model::BgpPeerState>) -> Self {
            self.bgp_peer_state = input;
            self
        }
        pub fn bgp_status(mut self, input: crate::model::BgpStatus) -> Self {
            self.bgp_status = Some(input);
            self
        }
        pub fn set_bgp_status(mut self, input: std::option::Option<crate::model::BgpStatus>) -> Self {
            self.bgp_status = input;
            self
        }
        pub fn aws_device_v2(mut self, input: impl Into<std::string::String>) -> Self {
            self.aws_device_v2 = Some(input.into());
            self
        }
        pub fn set_aws_device_v2(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.aws_device_v2 = input;
            self
        }
        /// Consumes the builder and constructs a [`BgpPeer`](crate::model::BgpPeer)
        pub fn build(self) -> crate::model::BgpPeer {
            crate::model::BgpPeer {
                bgp_peer_id: self.bgp_peer_id,
                asn: self.asn,
                auth_key: self.auth_key,
                address_family: self.address_family,
                amazon_address: self.amazon_address,
                customer_address: self.customer_address,
                bgp_peer_state: self.bgp_peer_state,
                bgp_status: self.bgp_status,
                aws_device_v2: self.aws_device_v2,
            }
        }
    }
}
impl BgpPeer {
    /// Creates a new builder-style object to manufacture [`BgpPeer`](crate::model::BgpPeer)
    pub fn builder() -> crate::model::bgp_peer::Builder {
        crate::model::bgp_peer::Builder::default()
    }
}

/// Information about an AWS Direct Connect connection.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct Connection {
    /// The ID of the AWS account that owns the connection.
    pub owner_account: std::option::Option<std::string::String>,
    pub connection_id: std::option::Option<std::string::String>,
    pub connection_name: std::option::Option<std::string::String>,
    /// The state of the connection.
    pub connection_state: std::option::Option<crate::model::ConnectionState>,
    pub region: std::option::Option<std::string::String>,
    pub location: std::option::Option<std::string::String>,
    /// The bandwidth of the connection.
    pub bandwidth: std::option::Option<std::string::String>,
    pub vlan: std::option::Option<i32>,
    pub partner_name: std::option::Option<std::string::String>,
    /// The time of the most recent call to DescribeLoa for this connection.
    pub loa_issue_time: std::option::Option<smithy_types::Instant>,
    pub lag_id: std::option::Option<std::string::String>,
    pub aws_device: std::option::Option<std::string::String>,
    pub jumbo_frame_capable: std::option::Option<bool>,
    pub aws_device_v2: std::option::Option<std::string::String>,
    pub has_logical_redundancy: std::option::Option<crate::model::HasLogicalRedundancy>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    pub provider_name: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Connection");
        formatter.field("owner_account", &self.owner_account);
        formatter.field("connection_id", &self.connection_id);
        formatter.field("connection_name", &self.connection_name);
        formatter.field("connection_state", &self.connection_state);
        formatter.field("region", &self.region);
        formatter.field("location", &self.location);
        formatter.field("bandwidth", &self.bandwidth);
        formatter.field("vlan", &self.vlan);
        formatter.field("partner_name", &self.partner_name);
        formatter.field("loa_issue_time", &self.loa_issue_time);
        formatter.field("lag_id", &self.lag_id);
        formatter.field("aws_device", &self.aws_device);
        formatter.field("jumbo_frame_capable", &self.jumbo_frame_capable);
        formatter.field("aws_device_v2", &self.aws_device_v2);
        formatter.field("has_logical_redundancy", &self.has_logical_redundancy);
        formatter.field("tags", &self.tags);
        formatter.field("provider_name", &self.provider_name);
        formatter.finish()
    }
}
/// See [`Connection`](crate::model::Connection)
pub mod connection {
    /// A builder for [`Connection`](crate::model::Connection)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) owner_account: std::option::Option<std::string::String>,
        pub(crate) connection_id: std::option::Option<std::string::String>,
        pub(crate) connection_name: std::option::Option<std::string::String>,
        pub(crate) connection_state: std::option::Option<crate::model::ConnectionState>,
        pub(crate) region: std::option::Option<std::string::String>,
        pub(crate) location: std::option::Option<std::string::String>,
        pub(crate) bandwidth: std::option::Option<std::string::String>,
        pub(crate) vlan: std::option::Option<i32>,
        pub(crate) partner_name: std::option::Option<std::string::String>,
        pub(crate) loa_issue_time: std::option::Option<smithy_types::Instant>,
        pub(crate) lag_id: std::option::Option<std::string::String>,
        pub(crate) aws_device: std::option::Option<std::string::String>,
        pub(crate) jumbo_frame_capable: std::option::Option<bool>,
        pub(crate) aws_device_v2: std::option::Option<std::string::String>,
        pub(crate) has_logical_redundancy: std::option::Option<crate::model::HasLogicalRedundancy>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        pub(crate) provider_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// The ID of the AWS account that owns the connection.
        pub fn owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner_account = Some(input.into());
            self
        }
        pub fn set_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner_account = input;
            self
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(input.into());
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_id = input;
            self
        }
        pub fn connection_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_name = Some(input.into());
            self
        }
        pub fn set_connection_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_name = input;
            self
        }
        /// The state of the connection.
        pub fn connection_state(mut self, input: crate::model::ConnectionState) -> Self {
            self.connection_state = Some(input);
            self
        }
        pub fn set_connection_state(mut self, input: std::option::Option<crate::model::ConnectionState>) -> Self {
            self.connection_state = input;
            self
        }
        pub fn region(mut self, input: impl Into<std::string::String>) -> Self {
            self.region = Some(input.into());
            self
        }
        pub fn set_region(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.region = input;
            self
        }
        pub fn location(mut self, input: impl Into<std::string::String>) -> Self {
            self.location = Some(input.into());
            self
        }
        pub fn set_location(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.location = input;
            self
        }
        /// The bandwidth of the connection.
        pub fn bandwidth(mut self, input: impl Into<std::string::String>) -> Self {
            self.bandwidth = Some(input.into());
            self
        }
        pub fn set_bandwidth(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.bandwidth = input;
            self
        }
        pub fn vlan(mut self, input: i32) -> Self {
            self.vlan = Some(input);
            self
        }
        pub fn set_vlan(mut self, input: std::option::Option<i32>) -> Self {
            self.vlan = input;
            self
        }
        pub fn partner_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.partner_name = Some(input.into());
            self
        }
        pub fn set_partner_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.partner_name = input;
            self
        }
        /// The time of the most recent call to DescribeLoa for this connection.
        pub fn loa_issue_time(mut self, input: smithy_types::Instant) -> Self {
            self.loa_issue_time = Some(input);
            self
        }
        pub fn set_loa_issue_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.loa_issue_time = input;
            self
        }
        pub fn lag_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.lag_id = Some(input.into());
            self
        }
        pub fn set_lag_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.lag_id = input;
            self
        }
        pub fn aws_device(mut self, input: impl Into<std::string::String>) -> Self {
            self.aws_device = Some(input.into());
            self
        }
        pub fn set_aws_device(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.aws_device = input;
            self
        }
        pub fn jumbo_frame_capable(mut self, input: bool) -> Self {
            self.jumbo_frame_capable = Some(input);
            self
        }
        pub fn set_jumbo_frame_capable(mut self, input: std::option::Option<bool>) -> Self {
            self.jumbo_frame_capable = input;
            self
        }
        pub fn aws_device_v2(mut self, input: impl Into<std::string::String>) -> Self {
            self.aws_device_v2 = Some(input.into());
            self
        }
        pub fn set_aws_device_v2(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.aws_device_v2 = input;
            self
        }
        pub fn has_logical_redundancy(mut self, input: crate::model::HasLogicalRedundancy) -> Self {
            self.has_logical_redundancy = Some(input);
            self
        }
        pub fn set_has_logical_redundancy(mut self, input: std::option::Option<crate::model::HasLogicalRedundancy>) -> Self {
            self.has_logical_redundancy = input;
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        pub fn provider_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.provider_name = Some(input.into());
            self
        }
        pub fn set_provider_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.provider_name = input;
            self
        }
        /// Consumes the builder and constructs a [`Connection`](crate::model::Connection)
        pub fn build(self) -> crate::model::Connection {
            crate::model::Connection {
                owner_account: self.owner_account,
                connection_id: self.connection_id,
                connection_name: self.connection_name,
                connection_state: self.connection_state,
                region: self.region,
                location: self.location,
                bandwidth: self.bandwidth,
                vlan: self.vlan,
                partner_name: self.partner_name,
                loa_issue_time: self.loa_issue_time,
                lag_id: self.lag_id,
                aws_device: self.aws_device,
                jumbo_frame_capable: self.jumbo_frame_capable,
                aws_device_v2: self.aws_device_v2,
                has_logical_redundancy: self.has_logical_redundancy,
                tags: self.tags,
                provider_name: self.provider_name,
            }
        }
    }
}
impl Connection {
    /// Creates a new builder-style object to manufacture [`Connection`](crate::model::Connection)
    pub fn builder() -> crate::model::connection::Builder {
        crate::model::connection::Builder::default()
    }
}

/// Information about a Direct Connect gateway, which enables you to connect virtual interfaces and
/// virtual private gateway or transit gateways.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DirectConnectGateway {
    pub direct_connect_gateway_id: std::option::Option<std::string::String>,
    pub direct_connect_gateway_name: std::option::Option<std::string::String>,
    pub amazon_side_asn: std::option::Option<i64>,
    pub owner_account: std::option::Option<std::string::String>,
    pub direct_connect_gateway_state: std::option::Option<crate::model::DirectConnectGatewayState>,
    pub state_change_error: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DirectConnectGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DirectConnectGateway");
        formatter.field("direct_connect_gateway_id", &self.direct_connect_gateway_id);
        formatter.field("direct_connect_gateway_name", &self.direct_connect_gateway_name);
        formatter.field("amazon_side_asn", &self.amazon_side_asn);
        formatter.field("owner_account", &self.owner_account);
        formatter.field("direct_connect_gateway_state", &self.direct_connect_gateway_state);
        formatter.field("state_change_error", &self.state_change_error);
        formatter.finish()
    }
}
/// See [`DirectConnectGateway`](crate::model::DirectConnectGateway)
pub mod direct_connect_gateway {
    /// A builder for [`DirectConnectGateway`](crate::model::DirectConnectGateway)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) direct_connect_gateway_id: std::option::Option<std::string::String>,
        pub(crate) direct_connect_gateway_name: std::option::Option<std::string::String>,
        pub(crate) amazon_side_asn: std::option::Option<i64>,
        pub(crate) owner_account: std::option::Option<std::string::String>,
        pub(crate) direct_connect_gateway_state: std::option::Option<crate::model::DirectConnectGatewayState>,
        pub(crate) state_change_error: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn direct_connect_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.direct_connect_gateway_id = Some(input.into());
            self
        }
        pub fn set_direct_connect_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.direct_connect_gateway_id = input;
            self
        }
        pub fn direct_connect_gateway_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.direct_connect_gateway_name = Some(input.into());
            self
        }
        pub fn set_direct_connect_gateway_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.direct_connect_gateway_name = input;
            self
        }
        pub fn amazon_side_asn(mut self, input: i64) -> Self {
            self.amazon_side_asn = Some(input);
            self
        }
        pub fn set_amazon_side_asn(mut self, input: std::option::Option<i64>) -> Self {
            self.amazon_side_asn = input;
            self
        }
        pub fn owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner_account = Some(input.into());
            self
        }
        pub fn set_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner_account = input;
            self
        }
        pub fn direct_connect_gateway_state(mut self, input: crate::model::DirectConnectGatewayState) -> Self {
            self.direct_connect_gateway_state = Some(input);
            self
        }
        pub fn set_direct_connect_gateway_state(mut self, input: std::option::Option<crate::model::DirectConnectGatewayState>) -> Self {
            self.direct_connect_gateway_state = input;
            self
        }
        pub fn state_change_error(mut self, input: impl Into<std::string::String>) -> Self {
            self.state_change_error = Some(input.into());
            self
        }
        pub fn set_state_change_error(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.state_change_error = input;
            self
        }
        /// Consumes the builder and constructs a [`DirectConnectGateway`](crate::model::DirectConnectGateway)
        pub fn build(self) -> crate::model::DirectConnectGateway {
            crate::model::DirectConnectGateway {
                direct_connect_gateway_id: self.direct_connect_gateway_id,
                direct_connect_gateway_name: self.direct_connect_gateway_name,
                amazon_side_asn: self.amazon_side_asn,
                owner_account: self.owner_account,
                direct_connect_gateway_state: self.direct_connect_gateway_state,
                state_change_error: self.state_change_error,
            }
        }
    }
}
impl DirectConnectGateway {
    /// Creates a new builder-style object to manufacture [`DirectConnectGateway`](crate::model::DirectConnectGateway)
    pub fn builder() -> crate::model::direct_connect_gateway::Builder {
        crate::model::direct_connect_gateway::Builder::default()
    }
}

/// Information about an association between a Direct Connect gateway and a virtual private gateway
/// or transit gateway.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DirectConnectGatewayAssociation {
    pub direct_connect_gateway_id: std::option::Option<std::string::String>,
    pub direct_connect_gateway_owner_account: std::option::Option<std::string::String>,
    pub association_state: std::option::Option<crate::model::DirectConnectGatewayAssociationState>,
    pub state_change_error: std::option::Option<std::string::String>,
    pub associated_gateway: std::option::Option<crate::model::AssociatedGateway>,
    pub association_id: std::option::Option<std::string::String>,
    pub allowed_prefixes_to_direct_connect_gateway: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
    pub virtual_gateway_id: std::option::Option<std::string::String>,
    pub virtual_gateway_region: std::option::Option<std::string::String>,
    pub virtual_gateway_owner_account: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DirectConnectGatewayAssociation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DirectConnectGatewayAssociation");
        formatter.field("direct_connect_gateway_id", &self.direct_connect_gateway_id);
        formatter.field("direct_connect_gateway_owner_account", &self.direct_connect_gateway_owner_account);
        formatter.field("association_state", &self.association_state);
        formatter.field("state_change_error", &self.state_change_error);
        formatter.field("associated_gateway", &self.associated_gateway);
        formatter.field("association_id", &self.association_id);
        formatter.field("allowed_prefixes_to_direct_connect_gateway", &self.allowed_prefixes_to_direct_connect_gateway);
        formatter.field("virtual_gateway_id", &self.virtual_gateway_id);
        formatter.field("virtual_gateway_region", &self.virtual_gateway_region);
        formatter.field("virtual_gateway_owner_account", &self.virtual_gateway_owner_account);
        formatter.finish()
    }
}
/// See [`DirectConnectGatewayAssociation`](crate::model::DirectConnectGatewayAssociation)
pub mod direct_connect_gateway_association {
    /// A builder for [`DirectConnectGatewayAssociation`](crate::model::DirectConnectGatewayAssociation)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) direct_connect_gateway_id: std::option::Option<std::string::String>,
        pub(crate) direct_connect_gateway_owner_account: std::option::Option<std::string::String>,
        pub(crate) association_state: std::option::Option<crate::model::DirectConnectGatewayAssociationState>,
        pub(crate) state_change_error: std::option::Option<std::string::String>,
        pub(crate) associated_gateway: std::option::Option<crate::model::AssociatedGateway>,
        pub(crate) association_id: std::option::Option<std::string::String>,
        pub(crate) allowed_prefixes_to_direct_connect_gateway: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
        pub(crate) virtual_gateway_id: std::option::Option<std::string::String>,
        pub(crate) virtual_gateway_region: std::option::Option<std::string::String>,
        pub(crate) virtual_gateway_owner_account: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn direct_connect_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.direct_connect_gateway_id = Some(input.into());
            self
        }
        pub fn set_direct_connect_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.direct_connect_gateway_id = input;
            self
        }
        pub fn direct_connect_gateway_owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.direct_connect_gateway_owner_account = Some(input.into());
            self
        }
        pub fn set_direct_connect_gateway_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.direct_connect_gateway_owner_account = input;
            self
        }
        pub fn association_state(mut self, input: crate::model::DirectConnectGatewayAssociationState) -> Self {
            self.association_state = Some(input);
            self
        }
        pub fn set_association_state(mut self, input: std::option::Option<crate::model::DirectConnectGatewayAssociationState>) -> Self {
            self.association_state = input;
            self
        }
        pub fn state_change_error(mut self, input: impl Into<std::string::String>) -> Self {
            self.state_change_error = Some(input.into());
            self
        }
        pub fn set_state_change_error(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.state_change_error = input;
            self
        }
        pub fn associated_gateway(mut self, input: crate::model::AssociatedGateway) -> Self {
            self.associated_gateway = Some(input);
            self
        }
        pub fn set_associated_gateway(mut self, input: std::option::Option<crate::model::AssociatedGateway>) -> Self {
            self.associated_gateway = input;
            self
        }
        pub fn association_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.association_id = Some(input.into());
            self
        }
        pub fn set_association_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.association_id = input;
            self
        }
        /// Appends an item to `allowed_prefixes_to_direct_connect_gateway`.
        pub fn allowed_prefixes_to_direct_connect_gateway(mut self, input: impl Into<crate::model::RouteFilterPrefix>) -> Self {
            let mut v = self.allowed_prefixes_to_direct_connect_gateway.unwrap_or_default();
            v.push(input.into());
            self.allowed_prefixes_to_direct_connect_gateway = Some(v);
            self
        }
        pub fn set_allowed_prefixes_to_direct_connect_gateway(mut self, input: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>) -> Self {
            self.allowed_prefixes_to_direct_connect_gateway = input;
            self
        }
        pub fn virtual_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_gateway_id = Some(input.into());
            self
        }
        pub fn set_virtual_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_gateway_id = input;
            self
        }
        pub fn virtual_gateway_region(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_gateway_region = Some(input.into());
            self
        }
        pub fn set_virtual_gateway_region(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_gateway_region = input;
            self
        }
        pub fn virtual_gateway_owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_gateway_owner_account = Some(input.into());
            self
        }
        pub fn set_virtual_gateway_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_gateway_owner_account = input;
            self
        }
        /// Consumes the builder and constructs a [`DirectConnectGatewayAssociation`](crate::model::DirectConnectGatewayAssociation)
        pub fn build(self) -> crate::model::DirectConnectGatewayAssociation {
            crate::model::DirectConnectGatewayAssociation {
                direct_connect_gateway_id: self.direct_connect_gateway_id,
                direct_connect_gateway_owner_account: self.direct_connect_gateway_owner_account,
                association_state: self.association_state,
                state_change_error: self.state_change_error,
                associated_gateway: self.associated_gateway,
                association_id: self.association_id,
                allowed_prefixes_to_direct_connect_gateway: self.allowed_prefixes_to_direct_connect_gateway,
                virtual_gateway_id: self.virtual_gateway_id,
                virtual_gateway_region: self.virtual_gateway_region,
                virtual_gateway_owner_account: self.virtual_gateway_owner_account,
            }
        }
    }
}
impl DirectConnectGatewayAssociation {
    /// Creates a new builder-style object to manufacture [`DirectConnectGatewayAssociation`](crate::model::DirectConnectGatewayAssociation)
    pub fn builder() -> crate::model::direct_connect_gateway_association::Builder {
        crate::model::direct_connect_gateway_association::Builder::default()
    }
}

/// Information about the proposal request to attach a virtual private gateway to a Direct Connect gateway.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DirectConnectGatewayAssociationProposal {
    pub proposal_id: std::option::Option<std::string::String>,
    pub direct_connect_gateway_id: std::option::Option<std::string::String>,
    pub direct_connect_gateway_owner_account: std::option::Option<std::string::String>,
    pub proposal_state: std::option::Option<crate::model::DirectConnectGatewayAssociationProposalState>,
    pub associated_gateway: std::option::Option<crate::model::AssociatedGateway>,
    pub existing_allowed_prefixes_to_direct_connect_gateway: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
    pub requested_allowed_prefixes_to_direct_connect_gateway: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
}
impl std::fmt::Debug for DirectConnectGatewayAssociationProposal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DirectConnectGatewayAssociationProposal");
        formatter.field("proposal_id", &self.proposal_id);
        formatter.field("direct_connect_gateway_id", &self.direct_connect_gateway_id);
        formatter.field("direct_connect_gateway_owner_account", &self.direct_connect_gateway_owner_account);
        formatter.field("proposal_state", &self.proposal_state);
        formatter.field("associated_gateway", &self.associated_gateway);
        formatter.field("existing_allowed_prefixes_to_direct_connect_gateway", &self.existing_allowed_prefixes_to_direct_connect_gateway);
        formatter.field("requested_allowed_prefixes_to_direct_connect_gateway", &self.requested_allowed_prefixes_to_direct_connect_gateway);
        formatter.finish()
    }
}
/// See [`DirectConnectGatewayAssociationProposal`](crate::model::DirectConnectGatewayAssociationProposal)
pub mod direct_connect_gateway_association_proposal {
    /// A builder for [`DirectConnectGatewayAssociationProposal`](crate::model::DirectConnectGatewayAssociationProposal)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) proposal_id: std::option::Option<std::string::String>,
        pub(crate) direct_connect_gateway_id: std::option::Option<std::string::String>,
        pub(crate) direct_connect_gateway_owner_account: std::option::Option<std::string::String>,
        pub(crate) proposal_state: std::option::Option<crate::model::DirectConnectGatewayAssociationProposalState>,
        pub(crate) associated_gateway: std::option::Option<crate::model::AssociatedGateway>,
        pub(crate) existing_allowed_prefixes_to_direct_connect_gateway: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
        pub(crate) requested_allowed_prefixes_to_direct_connect_gateway: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
    }
    impl Builder {
        pub fn proposal_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.proposal_id = Some(input.into());
            self
        }
        pub fn set_proposal_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.proposal_id = input;
            self
        }
        pub fn direct_connect_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.direct_connect_gateway_id = Some(input.into());
            self
        }
        pub fn set_direct_connect_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.direct_connect_gateway_id = input;
            self
        }
        pub fn direct_connect_gateway_owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.direct_connect_gateway_owner_account = Some(input.into());
            self
        }
        pub fn set_direct_connect_gateway_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.direct_connect_gateway_owner_account = input;
            self
        }
        pub fn proposal_state(mut self, input: crate::model::DirectConnectGatewayAssociationProposalState) -> Self {
            self.proposal_state = Some(input);
            self
        }
        pub fn set_proposal_state(mut self, input: std::option::Option<crate::model::DirectConnectGatewayAssociationProposalState>) -> Self {
            self.proposal_state = input;
            self
        }
        pub fn associated_gateway(mut self, input: crate::model::AssociatedGateway) -> Self {
            self.associated_gateway = Some(input);
            self
        }
        pub fn set_associated_gateway(mut self, input: std::option::Option<crate::model::AssociatedGateway>) -> Self {
            self.associated_gateway = input;
            self
        }
        /// Appends an item to `existing_allowed_prefixes_to_direct_connect_gateway`.
        pub fn existing_allowed_prefixes_to_direct_connect_gateway(mut self, input: impl Into<crate::model::RouteFilterPrefix>) -> Self {
            let mut v = self.existing_allowed_prefixes_to_direct_connect_gateway.unwrap_or_default();
            v.push(input.into());
            self.existing_allowed_prefixes_to_direct_connect_gateway = Some(v);
            self
        }
        pub fn set_existing_allowed_prefixes_to_direct_connect_gateway(mut self, input: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>) -> Self {
            self.existing_allowed_prefixes_to_direct_connect_gateway = input;
            self
        }
        /// Appends an item to `requested_allowed_prefixes_to_direct_connect_gateway`.
        pub fn requested_allowed_prefixes_to_direct_connect_gateway(mut self, input: impl Into<crate::model::RouteFilterPrefix>) -> Self {
            let mut v = self.requested_allowed_prefixes_to_direct_connect_gateway.unwrap_or_default();
            v.push(input.into());
            self.requested_allowed_prefixes_to_direct_connect_gateway = Some(v);
            self
        }
        pub fn set_requested_allowed_prefixes_to_direct_connect_gateway(mut self, input: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>) -> Self {
            self.requested_allowed_prefixes_to_direct_connect_gateway = input;
            self
        }
        /// Consumes the builder and constructs a [`DirectConnectGatewayAssociationProposal`](crate::model::DirectConnectGatewayAssociationProposal)
        pub fn build(self) -> crate::model::DirectConnectGatewayAssociationProposal {
            crate::model::DirectConnectGatewayAssociationProposal {
                proposal_id: self.proposal_id,
                direct_connect_gateway_id: self.direct_connect_gateway_id,
                direct_connect_gateway_owner_account: self.direct_connect_gateway_owner_account,
                proposal_state: self.proposal_state,
                associated_gateway: self.associated_gateway,
                existing_allowed_prefixes_to_direct_connect_gateway: self.existing_allowed_prefixes_to_direct_connect_gateway,
                requested_allowed_prefixes_to_direct_connect_gateway: self.requested_allowed_prefixes_to_direct_connect_gateway,
            }
        }
    }
}
impl DirectConnectGatewayAssociationProposal {
    /// Creates a new builder-style object to manufacture [`DirectConnectGatewayAssociationProposal`](crate::model::DirectConnectGatewayAssociationProposal)
    pub fn builder() -> crate::model::direct_connect_gateway_association_proposal::Builder {
        crate::model::direct_connect_gateway_association_proposal::Builder::default()
    }
}

/// Information about an attachment between a Direct Connect gateway and a virtual interface.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DirectConnectGatewayAttachment {
    pub direct_connect_gateway_id: std::option::Option<std::string::String>,
    pub virtual_interface_id: std::option::Option<std::string::String>,
    pub virtual_interface_region: std::option::Option<std::string::String>,
    pub virtual_interface_owner_account: std::option::Option<std::string::String>,
    pub attachment_state: std::option::Option<crate::model::DirectConnectGatewayAttachmentState>,
    pub attachment_type: std::option::Option<crate::model::DirectConnectGatewayAttachmentType>,
    pub state_change_error: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DirectConnectGatewayAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DirectConnectGatewayAttachment");
        formatter.field("direct_connect_gateway_id", &self.direct_connect_gateway_id);
        formatter.field("virtual_interface_id", &self.virtual_interface_id);
        formatter.field("virtual_interface_region", &self.virtual_interface_region);
        formatter.field("virtual_interface_owner_account", &self.virtual_interface_owner_account);
        formatter.field("attachment_state", &self.attachment_state);
        formatter.field("attachment_type", &self.attachment_type);
        formatter.field("state_change_error", &self.state_change_error);
        formatter.finish()
    }
}
/// See [`DirectConnectGatewayAttachment`](crate::model::DirectConnectGatewayAttachment)
pub mod direct_connect_gateway_attachment {
    /// A builder for [`DirectConnectGatewayAttachment`](crate::model::DirectConnectGatewayAttachment)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) direct_connect_gateway_id: std::option::Option<std::string::String>,
        pub(crate) virtual_interface_id: std::option::Option<std::string::String>,
        pub(crate) virtual_interface_region: std::option::Option<std::string::String>,
        pub(crate) virtual_interface_owner_account: std::option::Option<std::string::String>,
        pub(crate) attachment_state: std::option::Option<crate::model::DirectConnectGatewayAttachmentState>,
        pub(crate) attachment_type: std::option::Option<crate::model::DirectConnectGatewayAttachmentType>,
        pub(crate) state_change_error: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn direct_connect_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.direct_connect_gateway_id = Some(input.into());
            self
        }
        pub fn set_direct_connect_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.direct_connect_gateway_id = input;
            self
        }
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_id = Some(input.into());
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_id = input;
            self
        }
        pub fn virtual_interface_region(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_region = Some(input.into());
            self
        }
        pub fn set_virtual_interface_region(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_region = input;
            self
        }
        pub fn virtual_interface_owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_owner_account = Some(input.into());
            self
        }
        pub fn set_virtual_interface_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_owner_account = input;
            self
        }
        pub fn attachment_state(mut self, input: crate::model::DirectConnectGatewayAttachmentState) -> Self {
            self.attachment_state = Some(input);
            self
        }
        pub fn set_attachment_state(mut self, input: std::option::Option<crate::model::DirectConnectGatewayAttachmentState>) -> Self {
            self.attachment_state = input;
            self
        }
        pub fn attachment_type(mut self, input: crate::model::DirectConnectGatewayAttachmentType) -> Self {
            self.attachment_type = Some(input);
            self
        }
        pub fn set_attachment_type(mut self, input: std::option::Option<crate::model::DirectConnectGatewayAttachmentType>) -> Self {
            self.attachment_type = input;
            self
        }
        pub fn state_change_error(mut self, input: impl Into<std::string::String>) -> Self {
            self.state_change_error = Some(input.into());
            self
        }
        pub fn set_state_change_error(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.state_change_error = input;
            self
        }
        /// Consumes the builder and constructs a [`DirectConnectGatewayAttachment`](crate::model::DirectConnectGatewayAttachment)
        pub fn build(self) -> crate::model::DirectConnectGatewayAttachment {
            crate::model::DirectConnectGatewayAttachment {
                direct_connect_gateway_id: self.direct_connect_gateway_id,
                virtual_interface_id: self.virtual_interface_id,
                virtual_interface_region: self.virtual_interface_region,
                virtual_interface_owner_account: self.virtual_interface_owner_account,
                attachment_state: self.attachment_state,
                attachment_type: self.attachment_type,
                state_change_error: self.state_change_error,
            }
        }
    }
}
impl DirectConnectGatewayAttachment {
    /// Creates a new builder-style object to manufacture [`DirectConnectGatewayAttachment`](crate::model::DirectConnectGatewayAttachment)
    pub fn builder() -> crate::model::direct_connect_gateway_attachment::Builder {
        crate::model::direct_connect_gateway_attachment::Builder::default()
    }
}

/// Information about an interconnect.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct Interconnect {
    pub interconnect_id: std::option::Option<std::string::String>,
    pub interconnect_name: std::option::Option<std::string::String>,
    pub interconnect_state: std::option::Option<crate::model::InterconnectState>,
    pub region: std::option::Option<std::string::String>,
    pub location: std::option::Option<std::string::String>,
    pub bandwidth: std::option::Option<std::string::String>,
    pub loa_issue_time: std::option::Option<smithy_types::Instant>,
    pub lag_id: std::option::Option<std::string::String>,
    pub aws_device: std::option::Option<std::string::String>,
    pub jumbo_frame_capable: std::option::Option<bool>,
    pub aws_device_v2: std::option::Option<std::string::String>,
    pub has_logical_redundancy: std::option::Option<crate::model::HasLogicalRedundancy>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    pub provider_name: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for Interconnect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Interconnect");
        formatter.field("interconnect_id", &self.interconnect_id);
        formatter.field("interconnect_name", &self.interconnect_name);
        formatter.field("interconnect_state", &self.interconnect_state);
        formatter.field("region", &self.region);
        formatter.field("location", &self.location);
        formatter.field("bandwidth", &self.bandwidth);
        formatter.field("loa_issue_time", &self.loa_issue_time);
        formatter.field("lag_id", &self.lag_id);
        formatter.field("aws_device", &self.aws_device);
        formatter.field("jumbo_frame_capable", &self.jumbo_frame_capable);
        formatter.field("aws_device_v2", &self.aws_device_v2);
        formatter.field("has_logical_redundancy", &self.has_logical_redundancy);
        formatter.field("tags", &self.tags);
        formatter.field("provider_name", &self.provider_name);
        formatter.finish()
    }
}
/// See [`Interconnect`](crate::model::Interconnect)
pub mod interconnect {
    /// A builder for [`Interconnect`](crate::model::Interconnect)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) interconnect_id: std::option::Option<std::string::String>,
        pub(crate) interconnect_name: std::option::Option<std::string::String>,
        pub(crate) interconnect_state: std::option::Option<crate::model::InterconnectState>,
        pub(crate) region: std::option::Option<std::string::String>,
        pub(crate) location: std::option::Option<std::string::String>,
        pub(crate) bandwidth: std::option::Option<std::string::String>,
        pub(crate) loa_issue_time: std::option::Option<smithy_types::Instant>,
        pub(crate) lag_id: std::option::Option<std::string::String>,
        pub(crate) aws_device: std::option::Option<std::string::String>,
        pub(crate) jumbo_frame_capable: std::option::Option<bool>,
        pub(crate) aws_device_v2: std::option::Option<std::string::String>,
        pub(crate) has_logical_redundancy: std::option::Option<crate::model::HasLogicalRedundancy>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        pub(crate) provider_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn interconnect_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.interconnect_id = Some(input.into());
            self
        }
        pub fn set_interconnect_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.interconnect_id = input;
            self
        }
        pub fn interconnect_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.interconnect_name = Some(input.into());
            self
        }
        pub fn set_interconnect_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.interconnect_name = input;
            self
        }
        pub fn interconnect_state(mut self, input: crate::model::InterconnectState) -> Self {
            self.interconnect_state = Some(input);
            self
        }
        pub fn set_interconnect_state(mut self, input: std::option::Option<crate::model::InterconnectState>) -> Self {
            self.interconnect_state = input;
            self
        }
        pub fn region(mut self, input: impl Into<std::string::String>) -> Self {
            self.region = Some(input.into());
            self
        }
        pub fn set_region(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.region = input;
            self
        }
        pub fn location(mut self, input: impl Into<std::string::String>) -> Self {
            self.location = Some(input.into());
            self
        }
        pub fn set_location(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.location = input;
            self
        }
        pub fn bandwidth(mut self, input: impl Into<std::string::String>) -> Self {
            self.bandwidth = Some(input.into());
            self
        }
        pub fn set_bandwidth(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.bandwidth = input;
            self
        }
        pub fn loa_issue_time(mut self, input: smithy_types::Instant) -> Self {
            self.loa_issue_time = Some(input);
            self
        }
        pub fn set_loa_issue_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.loa_issue_time = input;
            self
        }
        pub fn lag_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.lag_id = Some(input.into());
            self
        }
        pub fn set_lag_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.lag_id = input;
            self
        }
        pub fn aws_device(mut self, input: impl Into<std::string::String>) -> Self {
            self.aws_device = Some(input.into());
            self
        }
        pub fn set_aws_device(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.aws_device = input;
            self
        }
        pub fn jumbo_frame_capable(mut self, input: bool) -> Self {
            self.jumbo_frame_capable = Some(input);
            self
        }
        pub fn set_jumbo_frame_capable(mut self, input: std::option::Option<bool>) -> Self {
            self.jumbo_frame_capable = input;
            self
        }
        pub fn aws_device_v2(mut self, input: impl Into<std::string::String>) -> Self {
            self.aws_device_v2 = Some(input.into());
            self
        }
        pub fn set_aws_device_v2(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.aws_device_v2 = input;
            self
        }
        pub fn has_logical_redundancy(mut self, input: crate::model::HasLogicalRedundancy) -> Self {
            self.has_logical_redundancy = Some(input);
            self
        }
        pub fn set_has_logical_redundancy(mut self, input: std::option::Option<crate::model::HasLogicalRedundancy>) -> Self {
            self.has_logical_redundancy = input;
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        pub fn provider_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.provider_name = Some(input.into());
            self
        }
        pub fn set_provider_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.provider_name = input;
            self
        }
        /// Consumes the builder and constructs a [`Interconnect`](crate::model::Interconnect)
        pub fn build(self) -> crate::model::Interconnect {
            crate::model::Interconnect {
                interconnect_id: self.interconnect_id,
                interconnect_name: self.interconnect_name,
                interconnect_state: self.interconnect_state,
                region: self.region,
                location: self.location,
                bandwidth: self.bandwidth,
                loa_issue_time: self.loa_issue_time,
                lag_id: self.lag_id,
                aws_device: self.aws_device,
                jumbo_frame_capable: self.jumbo_frame_capable,
                aws_device_v2: self.aws_device_v2,
                has_logical_redundancy: self.has_logical_redundancy,
                tags: self.tags,
                provider_name: self.provider_name,
            }
        }
    }
}
impl Interconnect {
    /// Creates a new builder-style object to manufacture [`Interconnect`](crate::model::Interconnect)
    pub fn builder() -> crate::model::interconnect::Builder {
        crate::model::interconnect::Builder::default()
    }
}

/// Information about a link aggregation group (LAG).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct Lag {
    pub connections_bandwidth: std::option::Option<std::string::String>,
    pub number_of_connections: std::option::Option<i32>,
    pub lag_id: std::option::Option<std::string::String>,
    pub owner_account: std::option::Option<std::string::String>,
    pub lag_name: std::option::Option<std::string::String>,
    pub lag_state: std::option::Option<crate::model::LagState>,
    pub region: std::option::Option<std::string::String>,
    pub location: std::option::Option<std::string::String>,
    /// The minimum number of physical dedicated connections that must be operational for the LAG itself to be operational.
    pub minimum_links: std::option::Option<i32>,
    pub aws_device: std::option::Option<std::string::String>,
    pub aws_device_v2: std::option::Option<std::string::String>,
    pub connections: std::option::Option<std::vec::Vec<crate::model::Connection>>,
    pub allows_hosted_connections: std::option::Option<bool>,
    pub jumbo_frame_capable: std::option::Option<bool>,
    pub has_logical_redundancy: std::option::Option<crate::model::HasLogicalRedundancy>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    pub provider_name: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for Lag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Lag");
        formatter.field("connections_bandwidth", &self.connections_bandwidth);
        formatter.field("number_of_connections", &self.number_of_connections);
        formatter.field("lag_id", &self.lag_id);
        formatter.field("owner_account", &self.owner_account);
        formatter.field("lag_name", &self.lag_name);
        formatter.field("lag_state", &self.lag_state);
        formatter.field("region", &self.region);
        formatter.field("location", &self.location);
        formatter.field("minimum_links", &self.minimum_links);
        formatter.field("aws_device", &self.aws_device);
        formatter.field("aws_device_v2", &self.aws_device_v2);
        formatter.field("connections", &self.connections);
        formatter.field("allows_hosted_connections", &self.allows_hosted_connections);
        formatter.field("jumbo_frame_capable", &self.jumbo_frame_capable);
        formatter.field("has_logical_redundancy", &self.has_logical_redundancy);
        formatter.field("tags", &self.tags);
        formatter.field("provider_name", &self.provider_name);
        formatter.finish()
    }
}
/// See [`Lag`](crate::model::Lag)
pub mod lag {
    /// A builder for [`Lag`](crate::model::Lag)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) connections_bandwidth: std::option::Option<std::string::String>,
        pub(crate) number_of_connections: std::option::Option<i32>,
        pub(crate) lag_id: std::option::Option<std::string::String>,
        pub(crate) owner_account: std::option::Option<std::string::String>,
        pub(crate) lag_name: std::option::Option<std::string::String>,
        pub(crate) lag_state: std::option::Option<crate::model::LagState>,
        pub(crate) region: std::option::Option<std::string::String>,
        pub(crate) location: std::option::Option<std::string::String>,
        pub(crate) minimum_links: std::option::Option<i32>,
        pub(crate) aws_device: std::option::Option<std::string::String>,
        pub(crate) aws_device_v2: std::option::Option<std::string::String>,
        pub(crate) connections: std::option::Option<std::vec::Vec<crate::model::Connection>>,
        pub(crate) allows_hosted_connections: std::option::Option<bool>,
        pub(crate) jumbo_frame_capable: std::option::Option<bool>,
        pub(crate) has_logical_redundancy: std::option::Option<crate::model::HasLogicalRedundancy>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        pub(crate) provider_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn connections_bandwidth(mut self, input: impl Into<std::string::String>) -> Self {
            self.connections_bandwidth = Some(input.into());
            self
        }
        pub fn set_connections_bandwidth(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connections_bandwidth = input;
            self
        }
        pub fn number_of_connections(mut self, input: i32) -> Self {
            self.number_of_connections = Some(input);
            self
        }
        pub fn set_number_of_connections(mut self, input: std::option::Option<i32>) -> Self {
            self.number_of_connections = input;
            self
        }
        pub fn lag_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.lag_id = Some(input.into());
            self
        }
        pub fn set_lag_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.lag_id = input;
            self
        }
        pub fn owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner_account = Some(input.into());
            self
        }
        pub fn set_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner_account = input;
            self
        }
        pub fn lag_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.lag_name = Some(input.into());
            self
        }
        pub fn set_lag_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.lag_name = input;
            self
        }
        pub fn lag_state(mut self, input: crate::model::LagState) -> Self {
            self.lag_state = Some(input);
            self
        }
        pub fn set_lag_state(mut self, input: std::option::Option<crate::model::LagState>) -> Self {
            self.lag_state = input;
            self
        }
        pub fn region(mut self, input: impl Into<std::string::String>) -> Self {
            self.region = Some(input.into());
            self
        }
        pub fn set_region(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.region = input;
            self
        }
        pub fn location(mut self, input: impl Into<std::string::String>) -> Self {
            self.location = Some(input.into());
            self
        }
        pub fn set_location(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.location = input;
            self
        }
        /// The minimum number of physical dedicated connections that must be operational for the LAG itself to be operational.
        pub fn minimum_links(mut self, input: i32) -> Self {
            self.minimum_links = Some(input);
            self
        }
        pub fn set_minimum_links(mut self, input: std::option::Option<i32>) -> Self {
            self.minimum_links = input;
            self
        }
        pub fn aws_device(mut self, input: impl Into<std::string::String>) -> Self {
            self.aws_device = Some(input.into());
            self
        }
        pub fn set_aws_device(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.aws_device = input;
            self
        }
        pub fn aws_device_v2(mut self, input: impl Into<std::string::String>) -> Self {
            self.aws_device_v2 = Some(input.into());
            self
        }
        pub fn set_aws_device_v2(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.aws_device_v2 = input;
            self
        }
        /// Appends an item to `connections`.
        pub fn connections(mut self, input: impl Into<crate::model::Connection>) -> Self {
            let mut v = self.connections.unwrap_or_default();
            v.push(input.into());
            self.connections = Some(v);
            self
        }
        pub fn set_connections(mut self, input: std::option::Option<std::vec::Vec<crate::model::Connection>>) -> Self {
            self.connections = input;
            self
        }
        pub fn allows_hosted_connections(mut self, input: bool) -> Self {
            self.allows_hosted_connections = Some(input);
            self
        }
        pub fn set_allows_hosted_connections(mut self, input: std::option::Option<bool>) -> Self {
            self.allows_hosted_connections = input;
            self
        }
        pub fn jumbo_frame_capable(mut self, input: bool) -> Self {
            self.jumbo_frame_capable = Some(input);
            self
        }
        pub fn set_jumbo_frame_capable(mut self, input: std::option::Option<bool>) -> Self {
            self.jumbo_frame_capable = input;
            self
        }
        pub fn has_logical_redundancy(mut self, input: crate::model::HasLogicalRedundancy) -> Self {
            self.has_logical_redundancy = Some(input);
            self
        }
        pub fn set_has_logical_redundancy(mut self, input: std::option::Option<crate::model::HasLogicalRedundancy>) -> Self {
            self.has_logical_redundancy = input;
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        pub fn provider_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.provider_name = Some(input.into());
            self
        }
        pub fn set_provider_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.provider_name = input;
            self
        }
        /// Consumes the builder and constructs a [`Lag`](crate::model::Lag)
        pub fn build(self) -> crate::model::Lag {
            crate::model::Lag {
                connections_bandwidth: self.connections_bandwidth,
                number_of_connections: self.number_of_connections,
                lag_id: self.lag_id,
                owner_account: self.owner_account,
                lag_name: self.lag_name,
                lag_state: self.lag_state,
                region: self.region,
                location: self.location,
                minimum_links: self.minimum_links,
                aws_device: self.aws_device,
                aws_device_v2: self.aws_device_v2,
                connections: self.connections,
                allows_hosted_connections: self.allows_hosted_connections,
                jumbo_frame_capable: self.jumbo_frame_capable,
                has_logical_redundancy: self.has_logical_redundancy,
                tags: self.tags,
                provider_name: self.provider_name,
            }
        }
    }
}
impl Lag {
    /// Creates a new builder-style object to manufacture [`Lag`](crate::model::Lag)
    pub fn builder() -> crate::model::lag::Builder {
        crate::model::lag::Builder::default()
    }
}

/// Information about a Letter of Authorization - Connecting Facility Assignment (LOA-CFA) for a connection.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct Loa {
    /// The binary contents of the LOA-CFA document.
    pub loa_content: std::option::Option<smithy_types::Blob>,
    pub loa_content_type: std::option::Option<crate::model::LoaContentType>,
}
impl std::fmt::Debug for Loa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Loa");
        formatter.field("loa_content", &self.loa_content);
        formatter.field("loa_content_type", &self.loa_content_type);
        formatter.finish()
    }
}
/// See [`Loa`](crate::model::Loa)
pub mod loa {
    /// A builder for [`Loa`](crate::model::Loa)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) loa_content: std::option::Option<smithy_types::Blob>,
        pub(crate) loa_content_type: std::option::Option<crate::model::LoaContentType>,
    }
    impl Builder {
        /// The binary contents of the LOA-CFA document.
        pub fn loa_content(mut self, input: smithy_types::Blob) -> Self {
            self.loa_content = Some(input);
            self
        }
        pub fn set_loa_content(mut self, input: std::option::Option<smithy_types::Blob>) -> Self {
            self.loa_content = input;
            self
        }
        pub fn loa_content_type(mut self, input: crate::model::LoaContentType) -> Self {
            self.loa_content_type = Some(input);
            self
        }
        pub fn set_loa_content_type(mut self, input: std::option::Option<crate::model::LoaContentType>) -> Self {
            self.loa_content_type = input;
            self
        }
        /// Consumes the builder and constructs a [`Loa`](crate::model::Loa)
        pub fn build(self) -> crate::model::Loa {
            crate::model::Loa {
                loa_content: self.loa_content,
                loa_content_type: self.loa_content_type,
            }
        }
    }
}
impl Loa {
    /// Creates a new builder-style object to manufacture [`Loa`](crate::model::Loa)
    pub fn builder() -> crate::model::loa::Builder {
        crate::model::loa::Builder::default()
    }
}

/// Information about an AWS Direct Connect location.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct Location {
    pub location_code: std::option::Option<std::string::String>,
    pub location_name: std::option::Option<std::string::String>,
    pub region: std::option::Option<std::string::String>,
    pub available_port_speeds: std::option::Option<std::vec::Vec<std::string::String>>,
    pub available_providers: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl std::fmt::Debug for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Location");
        formatter.field("location_code", &self.location_code);
        formatter.field("location_name", &self.location_name);
        formatter.field("region", &self.region);
        formatter.field("available_port_speeds", &self.available_port_speeds);
        formatter.field("available_providers", &self.available_providers);
        formatter.finish()
    }
}
/// See [`Location`](crate::model::Location)
pub mod location {
    /// A builder for [`Location`](crate::model::Location)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) location_code: std::option::Option<std::string::String>,
        pub(crate) location_name: std::option::Option<std::string::String>,
        pub(crate) region: std::option::Option<std::string::String>,
        pub(crate) available_port_speeds: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) available_providers: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        pub fn location_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.location_code = Some(input.into());
            self
        }
        pub fn set_location_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.location_code = input;
            self
        }
        pub fn location_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.location_name = Some(input.into());
            self
        }
        pub fn set_location_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.location_name = input;
            self
        }
        pub fn region(mut self, input: impl Into<std::string::String>) -> Self {
            self.region = Some(input.into());
            self
        }
        pub fn set_region(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.region = input;
            self
        }
        /// Appends an item to `available_port_speeds`.
        pub fn available_port_speeds(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.available_port_speeds.unwrap_or_default();
            v.push(input.into());
            self.available_port_speeds = Some(v);
            self
        }
        pub fn set_available_port_speeds(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.available_port_speeds = input;
            self
        }
        /// Appends an item to `available_providers`.
        pub fn available_providers(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.available_providers.unwrap_or_default();
            v.push(input.into());
            self.available_providers = Some(v);
            self
        }
        pub fn set_available_providers(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.available_providers = input;
            self
        }
        /// Consumes the builder and constructs a [`Location`](crate::model::Location)
        pub fn build(self) -> crate::model::Location {
            crate::model::Location {
                location_code: self.location_code,
                location_name: self.location_name,
                region: self.region,
                available_port_speeds: self.available_port_speeds,
                available_providers: self.available_providers,
            }
        }
    }
}
impl Location {
    /// Creates a new builder-style object to manufacture [`Location`](crate::model::Location)
    pub fn builder() -> crate::model::location::Builder {
        crate::model::location::Builder::default()
    }
}

/// Information about a new BGP peer.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct NewBgpPeer {
    pub asn: std::option::Option<i32>,
    pub auth_key: std::option::Option<std::string::String>,
    pub address_family: std::option::Option<crate::model::AddressFamily>,
    pub amazon_address: std::option::Option<std::string::String>,
    pub customer_address: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for NewBgpPeer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("NewBgpPeer");
        formatter.field("asn", &self.asn);
        formatter.field("auth_key", &self.auth_key);
        formatter.field("address_family", &self.address_family);
        formatter.field("amazon_address", &self.amazon_address);
        formatter.field("customer_address", &self.customer_address);
        formatter.finish()
    }
}
/// See [`NewBgpPeer`](crate::model::NewBgpPeer)
pub mod new_bgp_peer {
    /// A builder for [`NewBgpPeer`](crate::model::NewBgpPeer)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) asn: std::option::Option<i32>,
        pub(crate) auth_key: std::option::Option<std::string::String>,
        pub(crate) address_family: std::option::Option<crate::model::AddressFamily>,
        pub(crate) amazon_address: std::option::Option<std::string::String>,
        pub(crate) customer_address: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn asn(mut self, input: i32) -> Self {
            self.asn = Some(input);
            self
        }
        pub fn set_asn(mut self, input: std::option::Option<i32>) -> Self {
            self.asn = input;
            self
        }
        pub fn auth_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.auth_key = Some(input.into());
            self
        }
        pub fn set_auth_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.auth_key = input;
            self
        }
        pub fn address_family(mut self, input: crate::model::AddressFamily) -> Self {
            self.address_family = Some(input);
            self
        }
        pub fn set_address_family(mut self, input: std::option::Option<crate::model::AddressFamily>) -> Self {
            self.address_family = input;
            self
        }
        pub fn amazon_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.amazon_address = Some(input.into());
            self
        }
        pub fn set_amazon_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.amazon_address = input;
            self
        }
        pub fn customer_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.customer_address = Some(input.into());
            self
        }
        pub fn set_customer_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.customer_address = input;
            self
        }
        /// Consumes the builder and constructs a [`NewBgpPeer`](crate::model::NewBgpPeer)
        pub fn build(self) -> crate::model::NewBgpPeer {
            crate::model::NewBgpPeer {
                asn: self.asn,
                auth_key: self.auth_key,
                address_family: self.address_family,
                amazon_address: self.amazon_address,
                customer_address: self.customer_address,
            }
        }
    }
}
impl NewBgpPeer {
    /// Creates a new builder-style object to manufacture [`NewBgpPeer`](crate::model::NewBgpPeer)
    pub fn builder() -> crate::model::new_bgp_peer::Builder {
        crate::model::new_bgp_peer::Builder::default()
    }
}

/// Information about a private virtual interface.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct NewPrivateVirtualInterface {
    pub virtual_interface_name: std::option::Option<std::string::String>,
    pub vlan: std::option::Option<i32>,
    pub asn: std::option::Option<i32>,
    pub mtu: std::option::Option<i32>,
    pub auth_key: std::option::Option<std::string::String>,
    pub amazon_address: std::option::Option<std::string::String>,
    pub customer_address: std::option::Option<std::string::String>,
    pub address_family: std::option::Option<crate::model::AddressFamily>,
    pub virtual_gateway_id: std::option::Option<std::string::String>,
    pub direct_connect_gateway_id: std::option::Option<std::string::String>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl std::fmt::Debug for NewPrivateVirtualInterface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("NewPrivateVirtualInterface");
        formatter.field("virtual_interface_name", &self.virtual_interface_name);
        formatter.field("vlan", &self.vlan);
        formatter.field("asn", &self.asn);
        formatter.field("mtu", &self.mtu);
        formatter.field("auth_key", &self.auth_key);
        formatter.field("amazon_address", &self.amazon_address);
        formatter.field("customer_address", &self.customer_address);
        formatter.field("address_family", &self.address_family);
        formatter.field("virtual_gateway_id", &self.virtual_gateway_id);
        formatter.field("direct_connect_gateway_id", &self.direct_connect_gateway_id);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`NewPrivateVirtualInterface`](crate::model::NewPrivateVirtualInterface)
pub mod new_private_virtual_interface {
    /// A builder for [`NewPrivateVirtualInterface`](crate::model::NewPrivateVirtualInterface)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) virtual_interface_name: std::option::Option<std::string::String>,
        pub(crate) vlan: std::option::Option<i32>,
        pub(crate) asn: std::option::Option<i32>,
        pub(crate) mtu: std::option::Option<i32>,
        pub(crate) auth_key: std::option::Option<std::string::String>,
        pub(crate) amazon_address: std::option::Option<std::string::String>,
        pub(crate) customer_address: std::option::Option<std::string::String>,
        pub(crate) address_family: std::option::Option<crate::model::AddressFamily>,
        pub(crate) virtual_gateway_id: std::option::Option<std::string::String>,
        pub(crate) direct_connect_gateway_id: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn virtual_interface_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_name = Some(input.into());
            self
        }
        pub fn set_virtual_interface_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_name = input;
            self
        }
        pub fn vlan(mut self, input: i32) -> Self {
            self.vlan = Some(input);
            self
        }
        pub fn set_vlan(mut self, input: std::option::Option<i32>) -> Self {
            self.vlan = input;
            self
        }
        pub fn asn(mut self, input: i32) -> Self {
            self.asn = Some(input);
            self
        }
        pub fn set_asn(mut self, input: std::option::Option<i32>) -> Self {
            self.asn = input;
            self
        }
        pub fn mtu(mut self, input: i32) -> Self {
            self.mtu = Some(input);
            self
        }
        pub fn set_mtu(mut self, input: std::option::Option<i32>) -> Self {
            self.mtu = input;
            self
        }
        pub fn auth_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.auth_key = Some(input.into());
            self
        }
        pub fn set_auth_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.auth_key = input;
            self
        }
        pub fn amazon_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.amazon_address = Some(input.into());
            self
        }
        pub fn set_amazon_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.amazon_address = input;
            self
        }
        pub fn customer_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.customer_address = Some(input.into());
            self
        }
        pub fn set_customer_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.customer_address = input;
            self
        }
        pub fn address_family(mut self, input: crate::model::AddressFamily) -> Self {
            self.address_family = Some(input);
            self
        }
        pub fn set_address_family(mut self, input: std::option::Option<crate::model::AddressFamily>) -> Self {
            self.address_family = input;
            self
        }
        pub fn virtual_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_gateway_id = Some(input.into());
            self
        }
        pub fn set_virtual_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_gateway_id = input;
            self
        }
        pub fn direct_connect_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.direct_connect_gateway_id = Some(input.into());
            self
        }
        pub fn set_direct_connect_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.direct_connect_gateway_id = input;
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`NewPrivateVirtualInterface`](crate::model::NewPrivateVirtualInterface)
        pub fn build(self) -> crate::model::NewPrivateVirtualInterface {
            crate::model::NewPrivateVirtualInterface {
                virtual_interface_name: self.virtual_interface_name,
                vlan: self.vlan,
                asn: self.asn,
                mtu: self.mtu,
                auth_key: self.auth_key,
                amazon_address: self.amazon_address,
                customer_address: self.customer_address,
                address_family: self.address_family,
                virtual_gateway_id: self.virtual_gateway_id,
                direct_connect_gateway_id: self.direct_connect_gateway_id,
                tags: self.tags,
            }
        }
    }
}
impl NewPrivateVirtualInterface {
    /// Creates a new builder-style object to manufacture [`NewPrivateVirtualInterface`](crate::model::NewPrivateVirtualInterface)
    pub fn builder() -> crate::model::new_private_virtual_interface::Builder {
        crate::model::new_private_virtual_interface::Builder::default()
    }
}

/// Information about a private virtual interface to be provisioned on a connection.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct NewPrivateVirtualInterfaceAllocation {
    pub virtual_interface_name: std::option::Option<std::string::String>,
    pub vlan: std::option::Option<i32>,
    pub asn: std::option::Option<i32>,
    pub mtu: std::option::Option<i32>,
    pub auth_key: std::option::Option<std::string::String>,
    pub amazon_address: std::option::Option<std::string::String>,
    pub customer_address: std::option::Option<std::string::String>,
    pub address_family: std::option::Option<crate::model::AddressFamily>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl std::fmt::Debug for NewPrivateVirtualInterfaceAllocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("NewPrivateVirtualInterfaceAllocation");
        formatter.field("virtual_interface_name", &self.virtual_interface_name);
        formatter.field("vlan", &self.vlan);
        formatter.field("asn", &self.asn);
        formatter.field("mtu", &self.mtu);
        formatter.field("auth_key", &self.auth_key);
        formatter.field("amazon_address", &self.amazon_address);
        formatter.field("customer_address", &self.customer_address);
        formatter.field("address_family", &self.address_family);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`NewPrivateVirtualInterfaceAllocation`](crate::model::NewPrivateVirtualInterfaceAllocation)
pub mod new_private_virtual_interface_allocation {
    /// A builder for [`NewPrivateVirtualInterfaceAllocation`](crate::model::NewPrivateVirtualInterfaceAllocation)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) virtual_interface_name: std::option::Option<std::string::String>,
        pub(crate) vlan: std::option::Option<i32>,
        pub(crate) asn: std::option::Option<i32>,
        pub(crate) mtu: std::option::Option<i32>,
        pub(crate) auth_key: std::option::Option<std::string::String>,
        pub(crate) amazon_address: std::option::Option<std::string::String>,
        pub(crate) customer_address: std::option::Option<std::string::String>,
        pub(crate) address_family: std::option::Option<crate::model::AddressFamily>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn virtual_interface_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_name = Some(input.into());
            self
        }
        pub fn set_virtual_interface_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_name = input;
            self
        }
        pub fn vlan(mut self, input: i32) -> Self {
            self.vlan = Some(input);
            self
        }
        pub fn set_vlan(mut self, input: std::option::Option<i32>) -> Self {
            self.vlan = input;
            self
        }
        pub fn asn(mut self, input: i32) -> Self {
            self.asn = Some(input);
            self
        }
        pub fn set_asn(mut self, input: std::option::Option<i32>) -> Self {
            self.asn = input;
            self
        }
        pub fn mtu(mut self, input: i32) -> Self {
            self.mtu = Some(input);
            self
        }
        pub fn set_mtu(mut self, input: std::option::Option<i32>) -> Self {
            self.mtu = input;
            self
        }
        pub fn auth_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.auth_key = Some(input.into());
            self
        }
        pub fn set_auth_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.auth_key = input;
            self
        }
        pub fn amazon_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.amazon_address = Some(input.into());
            self
        }
        pub fn set_amazon_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.amazon_address = input;
            self
        }
        pub fn customer_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.customer_address = Some(input.into());
            self
        }
        pub fn set_customer_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.customer_address = input;
            self
        }
        pub fn address_family(mut self, input: crate::model::AddressFamily) -> Self {
            self.address_family = Some(input);
            self
        }
        pub fn set_address_family(mut self, input: std::option::Option<crate::model::AddressFamily>) -> Self {
            self.address_family = input;
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`NewPrivateVirtualInterfaceAllocation`](crate::model::NewPrivateVirtualInterfaceAllocation)
        pub fn build(self) -> crate::model::NewPrivateVirtualInterfaceAllocation {
            crate::model::NewPrivateVirtualInterfaceAllocation {
                virtual_interface_name: self.virtual_interface_name,
                vlan: self.vlan,
                asn: self.asn,
                mtu: self.mtu,
                auth_key: self.auth_key,
                amazon_address: self.amazon_address,
                customer_address: self.customer_address,
                address_family: self.address_family,
                tags: self.tags,
            }
        }
    }
}
impl NewPrivateVirtualInterfaceAllocation {
    /// Creates a new builder-style object to manufacture [`NewPrivateVirtualInterfaceAllocation`](crate::model::NewPrivateVirtualInterfaceAllocation)
    pub fn builder() -> crate::model::new_private_virtual_interface_allocation::Builder {
        crate::model::new_private_virtual_interface_allocation::Builder::default()
    }
}

/// Information about a public virtual interface.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct NewPublicVirtualInterface {
    pub virtual_interface_name: std::option::Option<std::string::String>,
    pub vlan: std::option::Option<i32>,
    pub asn: std::option::Option<i32>,
    pub auth_key: std::option::Option<std::string::String>,
    pub amazon_address: std::option::Option<std::string::String>,
    pub customer_address: std::option::Option<std::string::String>,
    pub address_family: std::option::Option<crate::model::AddressFamily>,
    pub route_filter_prefixes: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl std::fmt::Debug for NewPublicVirtualInterface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("NewPublicVirtualInterface");
        formatter.field("virtual_interface_name", &self.virtual_interface_name);
        formatter.field("vlan", &self.vlan);
        formatter.field("asn", &self.asn);
        formatter.field("auth_key", &self.auth_key);
        formatter.field("amazon_address", &self.amazon_address);
        formatter.field("customer_address", &self.customer_address);
        formatter.field("address_family", &self.address_family);
        formatter.field("route_filter_prefixes", &self.route_filter_prefixes);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`NewPublicVirtualInterface`](crate::model::NewPublicVirtualInterface)
pub mod new_public_virtual_interface {
    /// A builder for [`NewPublicVirtualInterface`](crate::model::NewPublicVirtualInterface)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) virtual_interface_name: std::option::Option<std::string::String>,
        pub(crate) vlan: std::option::Option<i32>,
        pub(crate) asn: std::option::Option<i32>,
        pub(crate) auth_key: std::option::Option<std::string::String>,
        pub(crate) amazon_address: std::option::Option<std::string::String>,
        pub(crate) customer_address: std::option::Option<std::string::String>,
        pub(crate) address_family: std::option::Option<crate::model::AddressFamily>,
        pub(crate) route_filter_prefixes: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn virtual_interface_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_name = Some(input.into());
            self
        }
        pub fn set_virtual_interface_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_name = input;
            self
        }
        pub fn vlan(mut self, input: i32) -> Self {
            self.vlan = Some(input);
            self
        }
        pub fn set_vlan(mut self, input: std::option::Option<i32>) -> Self {
            self.vlan = input;
            self
        }
        pub fn asn(mut self, input: i32) -> Self {
            self.asn = Some(input);
            self
        }
        pub fn set_asn(mut self, input: std::option::Option<i32>) -> Self {
            self.asn = input;
            self
        }
        pub fn auth_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.auth_key = Some(input.into());
            self
        }
        pub fn set_auth_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.auth_key = input;
            self
        }
        pub fn amazon_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.amazon_address = Some(input.into());
            self
        }
        pub fn set_amazon_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.amazon_address = input;
            self
        }
        pub fn customer_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.customer_address = Some(input.into());
            self
        }
        pub fn set_customer_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.customer_address = input;
            self
        }
        pub fn address_family(mut self, input: crate::model::AddressFamily) -> Self {
            self.address_family = Some(input);
            self
        }
        pub fn set_address_family(mut self, input: std::option::Option<crate::model::AddressFamily>) -> Self {
            self.address_family = input;
            self
        }
        /// Appends an item to `route_filter_prefixes`.
        pub fn route_filter_prefixes(mut self, input: impl Into<crate::model::RouteFilterPrefix>) -> Self {
            let mut v = self.route_filter_prefixes.unwrap_or_default();
            v.push(input.into());
            self.route_filter_prefixes = Some(v);
            self
        }
        pub fn set_route_filter_prefixes(mut self, input: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>) -> Self {
            self.route_filter_prefixes = input;
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`NewPublicVirtualInterface`](crate::model::NewPublicVirtualInterface)
        pub fn build(self) -> crate::model::NewPublicVirtualInterface {
            crate::model::NewPublicVirtualInterface {
                virtual_interface_name: self.virtual_interface_name,
                vlan: self.vlan,
                asn: self.asn,
                auth_key: self.auth_key,
                amazon_address: self.amazon_address,
                customer_address: self.customer_address,
                address_family: self.address_family,
                route_filter_prefixes: self.route_filter_prefixes,
                tags: self.tags,
            }
        }
    }
}
impl NewPublicVirtualInterface {
    /// Creates a new builder-style object to manufacture [`NewPublicVirtualInterface`](crate::model::NewPublicVirtualInterface)
    pub fn builder() -> crate::model::new_public_virtual_interface::Builder {
        crate::model::new_public_virtual_interface::Builder::default()
    }
}

/// Information about a public virtual interface to be provisioned on a connection.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct NewPublicVirtualInterfaceAllocation {
    pub virtual_interface_name: std::option::Option<std::string::String>,
    pub vlan: std::option::Option<i32>,
    pub asn: std::option::Option<i32>,
    pub auth_key: std::option::Option<std::string::String>,
    pub amazon_address: std::option::Option<std::string::String>,
    pub customer_address: std::option::Option<std::string::String>,
    pub address_family: std::option::Option<crate::model::AddressFamily>,
    pub route_filter_prefixes: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl std::fmt::Debug for NewPublicVirtualInterfaceAllocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("NewPublicVirtualInterfaceAllocation");
        formatter.field("virtual_interface_name", &self.virtual_interface_name);
        formatter.field("vlan", &self.vlan);
        formatter.field("asn", &self.asn);
        formatter.field("auth_key", &self.auth_key);
        formatter.field("amazon_address", &self.amazon_address);
        formatter.field("customer_address", &self.customer_address);
        formatter.field("address_family", &self.address_family);
        formatter.field("route_filter_prefixes", &self.route_filter_prefixes);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`NewPublicVirtualInterfaceAllocation`](crate::model::NewPublicVirtualInterfaceAllocation)
pub mod new_public_virtual_interface_allocation {
    /// A builder for [`NewPublicVirtualInterfaceAllocation`](crate::model::NewPublicVirtualInterfaceAllocation)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) virtual_interface_name: std::option::Option<std::string::String>,
        pub(crate) vlan: std::option::Option<i32>,
        pub(crate) asn: std::option::Option<i32>,
        pub(crate) auth_key: std::option::Option<std::string::String>,
        pub(crate) amazon_address: std::option::Option<std::string::String>,
        pub(crate) customer_address: std::option::Option<std::string::String>,
        pub(crate) address_family: std::option::Option<crate::model::AddressFamily>,
        pub(crate) route_filter_prefixes: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn virtual_interface_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_name = Some(input.into());
            self
        }
        pub fn set_virtual_interface_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_name = input;
            self
        }
        pub fn vlan(mut self, input: i32) -> Self {
            self.vlan = Some(input);
            self
        }
        pub fn set_vlan(mut self, input: std::option::Option<i32>) -> Self {
            self.vlan = input;
            self
        }
        pub fn asn(mut self, input: i32) -> Self {
            self.asn = Some(input);
            self
        }
        pub fn set_asn(mut self, input: std::option::Option<i32>) -> Self {
            self.asn = input;
            self
        }
        pub fn auth_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.auth_key = Some(input.into());
            self
        }
        pub fn set_auth_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.auth_key = input;
            self
        }
        pub fn amazon_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.amazon_address = Some(input.into());
            self
        }
        pub fn set_amazon_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.amazon_address = input;
            self
        }
        pub fn customer_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.customer_address = Some(input.into());
            self
        }
        pub fn set_customer_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.customer_address = input;
            self
        }
        pub fn address_family(mut self, input: crate::model::AddressFamily) -> Self {
            self.address_family = Some(input);
            self
        }
        pub fn set_address_family(mut self, input: std::option::Option<crate::model::AddressFamily>) -> Self {
            self.address_family = input;
            self
        }
        /// Appends an item to `route_filter_prefixes`.
        pub fn route_filter_prefixes(mut self, input: impl Into<crate::model::RouteFilterPrefix>) -> Self {
            let mut v = self.route_filter_prefixes.unwrap_or_default();
            v.push(input.into());
            self.route_filter_prefixes = Some(v);
            self
        }
        pub fn set_route_filter_prefixes(mut self, input: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>) -> Self {
            self.route_filter_prefixes = input;
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`NewPublicVirtualInterfaceAllocation`](crate::model::NewPublicVirtualInterfaceAllocation)
        pub fn build(self) -> crate::model::NewPublicVirtualInterfaceAllocation {
            crate::model::NewPublicVirtualInterfaceAllocation {
                virtual_interface_name: self.virtual_interface_name,
                vlan: self.vlan,
                asn: self.asn,
                auth_key: self.auth_key,
                amazon_address: self.amazon_address,
                customer_address: self.customer_address,
                address_family: self.address_family,
                route_filter_prefixes: self.route_filter_prefixes,
                tags: self.tags,
            }
        }
    }
}
impl NewPublicVirtualInterfaceAllocation {
    /// Creates a new builder-style object to manufacture [`NewPublicVirtualInterfaceAllocation`](crate::model::NewPublicVirtualInterfaceAllocation)
    pub fn builder() -> crate::model::new_public_virtual_interface_allocation::Builder {
        crate::model::new_public_virtual_interface_allocation::Builder::default()
    }
}

/// Information about a transit virtual interface.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct NewTransitVirtualInterface {
    pub virtual_interface_name: std::option::Option<std::string::String>,
    pub vlan: std::option::Option<i32>,
    pub asn: std::option::Option<i32>,
    pub mtu: std::option::Option<i32>,
    pub auth_key: std::option::Option<std::string::String>,
    pub amazon_address: std::option::Option<std::string::String>,
    pub customer_address: std::option::Option<std::string::String>,
    pub address_family: std::option::Option<crate::model::AddressFamily>,
    pub direct_connect_gateway_id: std::option::Option<std::string::String>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl std::fmt::Debug for NewTransitVirtualInterface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("NewTransitVirtualInterface");
        formatter.field("virtual_interface_name", &self.virtual_interface_name);
        formatter.field("vlan", &self.vlan);
        formatter.field("asn", &self.asn);
        formatter.field("mtu", &self.mtu);
        formatter.field("auth_key", &self.auth_key);
        formatter.field("amazon_address", &self.amazon_address);
        formatter.field("customer_address", &self.customer_address);
        formatter.field("address_family", &self.address_family);
        formatter.field("direct_connect_gateway_id", &self.direct_connect_gateway_id);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`NewTransitVirtualInterface`](crate::model::NewTransitVirtualInterface)
pub mod new_transit_virtual_interface {
    /// A builder for [`NewTransitVirtualInterface`](crate::model::NewTransitVirtualInterface)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) virtual_interface_name: std::option::Option<std::string::String>,
        pub(crate) vlan: std::option::Option<i32>,
        pub(crate) asn: std::option::Option<i32>,
        pub(crate) mtu: std::option::Option<i32>,
        pub(crate) auth_key: std::option::Option<std::string::String>,
        pub(crate) amazon_address: std::option::Option<std::string::String>,
        pub(crate) customer_address: std::option::Option<std::string::String>,
        pub(crate) address_family: std::option::Option<crate::model::AddressFamily>,
        pub(crate) direct_connect_gateway_id: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn virtual_interface_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_name = Some(input.into());
            self
        }
        pub fn set_virtual_interface_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_name = input;
            self
        }
        pub fn vlan(mut self, input: i32) -> Self {
            self.vlan = Some(input);
            self
        }
        pub fn set_vlan(mut self, input: std::option::Option<i32>) -> Self {
            self.vlan = input;
            self
        }
        pub fn asn(mut self, input: i32) -> Self {
            self.asn = Some(input);
            self
        }
        pub fn set_asn(mut self, input: std::option::Option<i32>) -> Self {
            self.asn = input;
            self
        }
        pub fn mtu(mut self, input: i32) -> Self {
            self.mtu = Some(input);
            self
        }
        pub fn set_mtu(mut self, input: std::option::Option<i32>) -> Self {
            self.mtu = input;
            self
        }
        pub fn auth_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.auth_key = Some(input.into());
            self
        }
        pub fn set_auth_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.auth_key = input;
            self
        }
        pub fn amazon_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.amazon_address = Some(input.into());
            self
        }
        pub fn set_amazon_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.amazon_address = input;
            self
        }
        pub fn customer_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.customer_address = Some(input.into());
            self
        }
        pub fn set_customer_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.customer_address = input;
            self
        }
        pub fn address_family(mut self, input: crate::model::AddressFamily) -> Self {
            self.address_family = Some(input);
            self
        }
        pub fn set_address_family(mut self, input: std::option::Option<crate::model::AddressFamily>) -> Self {
            self.address_family = input;
            self
        }
        pub fn direct_connect_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.direct_connect_gateway_id = Some(input.into());
            self
        }
        pub fn set_direct_connect_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.direct_connect_gateway_id = input;
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`NewTransitVirtualInterface`](crate::model::NewTransitVirtualInterface)
        pub fn build(self) -> crate::model::NewTransitVirtualInterface {
            crate::model::NewTransitVirtualInterface {
                virtual_interface_name: self.virtual_interface_name,
                vlan: self.vlan,
                asn: self.asn,
                mtu: self.mtu,
                auth_key: self.auth_key,
                amazon_address: self.amazon_address,
                customer_address: self.customer_address,
                address_family: self.address_family,
                direct_connect_gateway_id: self.direct_connect_gateway_id,
                tags: self.tags,
            }
        }
    }
}
impl NewTransitVirtualInterface {
    /// Creates a new builder-style object to manufacture [`NewTransitVirtualInterface`](crate::model::NewTransitVirtualInterface)
    pub fn builder() -> crate::model::new_transit_virtual_interface::Builder {
        crate::model::new_transit_virtual_interface::Builder::default()
    }
}

/// Information about a transit virtual interface to be provisioned on a connection.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct NewTransitVirtualInterfaceAllocation {
    pub virtual_interface_name: std::option::Option<std::string::String>,
    pub vlan: std::option::Option<i32>,
    pub asn: std::option::Option<i32>,
    pub mtu: std::option::Option<i32>,
    pub auth_key: std::option::Option<std::string::String>,
    pub amazon_address: std::option::Option<std::string::String>,
    pub customer_address: std::option::Option<std::string::String>,
    pub address_family: std::option::Option<crate::model::AddressFamily>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl std::fmt::Debug for NewTransitVirtualInterfaceAllocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("NewTransitVirtualInterfaceAllocation");
        formatter.field("virtual_interface_name", &self.virtual_interface_name);
        formatter.field("vlan", &self.vlan);
        formatter.field("asn", &self.asn);
        formatter.field("mtu", &self.mtu);
        formatter.field("auth_key", &self.auth_key);
        formatter.field("amazon_address", &self.amazon_address);
        formatter.field("customer_address", &self.customer_address);
        formatter.field("address_family", &self.address_family);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`NewTransitVirtualInterfaceAllocation`](crate::model::NewTransitVirtualInterfaceAllocation)
pub mod new_transit_virtual_interface_allocation {
    /// A builder for [`NewTransitVirtualInterfaceAllocation`](crate::model::NewTransitVirtualInterfaceAllocation)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) virtual_interface_name: std::option::Option<std::string::String>,
        pub(crate) vlan: std::option::Option<i32>,
        pub(crate) asn: std::option::Option<i32>,
        pub(crate) mtu: std::option::Option<i32>,
        pub(crate) auth_key: std::option::Option<std::string::String>,
        pub(crate) amazon_address: std::option::Option<std::string::String>,
        pub(crate) customer_address: std::option::Option<std::string::String>,
        pub(crate) address_family: std::option::Option<crate::model::AddressFamily>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn virtual_interface_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_name = Some(input.into());
            self
        }
        pub fn set_virtual_interface_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_name = input;
            self
        }
        pub fn vlan(mut self, input: i32) -> Self {
            self.vlan = Some(input);
            self
        }
        pub fn set_vlan(mut self, input: std::option::Option<i32>) -> Self {
            self.vlan = input;
            self
        }
        pub fn asn(mut self, input: i32) -> Self {
            self.asn = Some(input);
            self
        }
        pub fn set_asn(mut self, input: std::option::Option<i32>) -> Self {
            self.asn = input;
            self
        }
        pub fn mtu(mut self, input: i32) -> Self {
            self.mtu = Some(input);
            self
        }
        pub fn set_mtu(mut self, input: std::option::Option<i32>) -> Self {
            self.mtu = input;
            self
        }
        pub fn auth_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.auth_key = Some(input.into());
            self
        }
        pub fn set_auth_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.auth_key = input;
            self
        }
        pub fn amazon_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.amazon_address = Some(input.into());
            self
        }
        pub fn set_amazon_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.amazon_address = input;
            self
        }
        pub fn customer_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.customer_address = Some(input.into());
            self
        }
        pub fn set_customer_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.customer_address = input;
            self
        }
        pub fn address_family(mut self, input: crate::model::AddressFamily) -> Self {
            self.address_family = Some(input);
            self
        }
        pub fn set_address_family(mut self, input: std::option::Option<crate::model::AddressFamily>) -> Self {
            self.address_family = input;
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`NewTransitVirtualInterfaceAllocation`](crate::model::NewTransitVirtualInterfaceAllocation)
        pub fn build(self) -> crate::model::NewTransitVirtualInterfaceAllocation {
            crate::model::NewTransitVirtualInterfaceAllocation {
                virtual_interface_name: self.virtual_interface_name,
                vlan: self.vlan,
                asn: self.asn,
                mtu: self.mtu,
                auth_key: self.auth_key,
                amazon_address: self.amazon_address,
                customer_address: self.customer_address,
                address_family: self.address_family,
                tags: self.tags,
            }
        }
    }
}
impl NewTransitVirtualInterfaceAllocation {
    /// Creates a new builder-style object to manufacture [`NewTransitVirtualInterfaceAllocation`](crate::model::NewTransitVirtualInterfaceAllocation)
    pub fn builder() -> crate::model::new_transit_virtual_interface_allocation::Builder {
        crate::model::new_transit_virtual_interface_allocation::Builder::default()
    }
}

/// Information about a tag associated with an AWS Direct Connect resource.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ResourceTag {
    pub resource_arn: std::option::Option<std::string::String>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl std::fmt::Debug for ResourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ResourceTag");
        formatter.field("resource_arn", &self.resource_arn);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`ResourceTag`](crate::model::ResourceTag)
pub mod resource_tag {
    /// A builder for [`ResourceTag`](crate::model::ResourceTag)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) resource_arn: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`ResourceTag`](crate::model::ResourceTag)
        pub fn build(self) -> crate::model::ResourceTag {
            crate::model::ResourceTag {
                resource_arn: self.resource_arn,
                tags: self.tags,
            }
        }
    }
}
impl ResourceTag {
    /// Creates a new builder-style object to manufacture [`ResourceTag`](crate::model::ResourceTag)
    pub fn builder() -> crate::model::resource_tag::Builder {
        crate::model::resource_tag::Builder::default()
    }
}

/// A route filter prefix that a customer can advertise through BGP over a public virtual interface.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct RouteFilterPrefix {
    pub cidr: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for RouteFilterPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("RouteFilterPrefix");
        formatter.field("cidr", &self.cidr);
        formatter.finish()
    }
}
/// See [`RouteFilterPrefix`](crate::model::RouteFilterPrefix)
pub mod route_filter_prefix {
    /// A builder for [`RouteFilterPrefix`](crate::model::RouteFilterPrefix)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cidr: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn cidr(mut self, input: impl Into<std::string::String>) -> Self {
            self.cidr = Some(input.into());
            self
        }
        pub fn set_cidr(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cidr = input;
            self
        }
        /// Consumes the builder and constructs a [`RouteFilterPrefix`](crate::model::RouteFilterPrefix)
        pub fn build(self) -> crate::model::RouteFilterPrefix {
            crate::model::RouteFilterPrefix {
                cidr: self.cidr,
            }
        }
    }
}
impl RouteFilterPrefix {
    /// Creates a new builder-style object to manufacture [`RouteFilterPrefix`](crate::model::RouteFilterPrefix)
    pub fn builder() -> crate::model::route_filter_prefix::Builder {
        crate::model::route_filter_prefix::Builder::default()
    }
}

/// Information about a tag.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct Tag {
    pub key: std::option::Option<std::string::String>,
    pub value: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Tag");
        formatter.field("key", &self.key);
        formatter.field("value", &self.value);
        formatter.finish()
    }
}
/// See [`Tag`](crate::model::Tag)
pub mod tag {
    /// A builder for [`Tag`](crate::model::Tag)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) key: std::option::Option<std::string::String>,
        pub(crate) value: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn key(mut self, input: impl Into<std::string::String>) -> Self {
            self.key = Some(input.into());
            self
        }
        pub fn set_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key = input;
            self
        }
        pub fn value(mut self, input: impl Into<std::string::String>) -> Self {
            self.value = Some(input.into());
            self
        }
        pub fn set_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.value = input;
            self
        }
        /// Consumes the builder and constructs a [`Tag`](crate::model::Tag)
        pub fn build(self) -> crate::model::Tag {
            crate::model::Tag {
                key: self.key,
                value: self.value,
            }
        }
    }
}
impl Tag {
    /// Creates a new builder-style object to manufacture [`Tag`](crate::model::Tag)
    pub fn builder() -> crate::model::tag::Builder {
        crate::model::tag::Builder::default()
    }
}

/// Information about a virtual private gateway for a private virtual interface.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct VirtualGateway {
    pub virtual_gateway_id: std::option::Option<std::string::String>,
    pub virtual_gateway_state: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for VirtualGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("VirtualGateway");
        formatter.field("virtual_gateway_id", &self.virtual_gateway_id);
        formatter.field("virtual_gateway_state", &self.virtual_gateway_state);
        formatter.finish()
    }
}
/// See [`VirtualGateway`](crate::model::VirtualGateway)
pub mod virtual_gateway {
    /// A builder for [`VirtualGateway`](crate::model::VirtualGateway)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) virtual_gateway_id: std::option::Option<std::string::String>,
        pub(crate) virtual_gateway_state: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn virtual_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_gateway_id = Some(input.into());
            self
        }
        pub fn set_virtual_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_gateway_id = input;
            self
        }
        pub fn virtual_gateway_state(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_gateway_state = Some(input.into());
            self
        }
        pub fn set_virtual_gateway_state(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_gateway_state = input;
            self
        }
        /// Consumes the builder and constructs a [`VirtualGateway`](crate::model::VirtualGateway)
        pub fn build(self) -> crate::model::VirtualGateway {
            crate::model::VirtualGateway {
                virtual_gateway_id: self.virtual_gateway_id,
                virtual_gateway_state: self.virtual_gateway_state,
            }
        }
    }
}
impl VirtualGateway {
    /// Creates a new builder-style object to manufacture [`VirtualGateway`](crate::model::VirtualGateway)
    pub fn builder() -> crate::model::virtual_gateway::Builder {
        crate::model::virtual_gateway::Builder::default()
    }
}

/// Information about a virtual interface.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct VirtualInterface {
    pub owner_account: std::option::Option<std::string::String>,
    pub virtual_interface_id: std::option::Option<std::string::String>,
    pub location: std::option::Option<std::string::String>,
    pub connection_id: std::option::Option<std::string::String>,
    /// The type of virtual interface. The possible values are `private` and `public`.
    pub virtual_interface_type: std::option::Option<std::string::String>,
    pub virtual_interface_name: std::option::Option<std::string::String>,
    pub vlan: std::option::Option<i32>,
    pub asn: std::option::Option<i32>,
    pub amazon_side_asn: std::option::Option<i64>,
    pub auth_key: std::option::Option<std::string::String>,
    pub amazon_address: std::option::Option<std::string::String>,
    pub customer_address: std::option::Option<std::string::String>,
    pub address_family: std::option::Option<crate::model::AddressFamily>,
    pub virtual_interface_state: std::option::Option<crate::model::VirtualInterfaceState>,
    /// The customer router configuration.
    pub customer_router_config: std::option::Option<std::string::String>,
    /// The maximum transmission unit (MTU), in bytes. Supported values are 1500 and 9001.
    pub mtu: std::option::Option<i32>,
    pub jumbo_frame_capable: std::option::Option<bool>,
    pub virtual_gateway_id: std::option::Option<std::string::String>,
    pub direct_connect_gateway_id: std::option::Option<std::string::String>,
    pub route_filter_prefixes: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
    pub bgp_peers: std::option::Option<std::vec::Vec<crate::model::BgpPeer>>,
    pub region: std::option::Option<std::string::String>,
    pub aws_device_v2: std::option::Option<std::string::String>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl std::fmt::Debug for VirtualInterface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("VirtualInterface");
        formatter.field("owner_account", &self.owner_account);
        formatter.field("virtual_interface_id", &self.virtual_interface_id);
        formatter.field("location", &self.location);
        formatter.field("connection_id", &self.connection_id);
        formatter.field("virtual_interface_type", &self.virtual_interface_type);
        formatter.field("virtual_interface_name", &self.virtual_interface_name);
        formatter.field("vlan", &self.vlan);
        formatter.field("asn", &self.asn);
        formatter.field("amazon_side_asn", &self.amazon_side_asn);
        formatter.field("auth_key", &self.auth_key);
        formatter.field("amazon_address", &self.amazon_address);
        formatter.field("customer_address", &self.customer_address);
        formatter.field("address_family", &self.address_family);
        formatter.field("virtual_interface_state", &self.virtual_interface_state);
        formatter.field("customer_router_config", &self.customer_router_config);
        formatter.field("mtu", &self.mtu);
        formatter.field("jumbo_frame_capable", &self.jumbo_frame_capable);
        formatter.field("virtual_gateway_id", &self.virtual_gateway_id);
        formatter.field("direct_connect_gateway_id", &self.direct_connect_gateway_id);
        formatter.field("route_filter_prefixes", &self.route_filter_prefixes);
        formatter.field("bgp_peers", &self.bgp_peers);
        formatter.field("region", &self.region);
        formatter.field("aws_device_v2", &self.aws_device_v2);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`VirtualInterface`](crate::model::VirtualInterface)
pub mod virtual_interface {
    /// A builder for [`VirtualInterface`](crate::model::VirtualInterface)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) owner_account: std::option::Option<std::string::String>,
        pub(crate) virtual_interface_id: std::option::Option<std::string::String>,
        pub(crate) location: std::option::Option<std::string::String>,
        pub(crate) connection_id: std::option::Option<std::string::String>,
        pub(crate) virtual_interface_type: std::option::Option<std::string::String>,
        pub(crate) virtual_interface_name: std::option::Option<std::string::String>,
        pub(crate) vlan: std::option::Option<i32>,
        pub(crate) asn: std::option::Option<i32>,
        pub(crate) amazon_side_asn: std::option::Option<i64>,
        pub(crate) auth_key: std::option::Option<std::string::String>,
        pub(crate) amazon_address: std::option::Option<std::string::String>,
        pub(crate) customer_address: std::option::Option<std::string::String>,
        pub(crate) address_family: std::option::Option<crate::model::AddressFamily>,
        pub(crate) virtual_interface_state: std::option::Option<crate::model::VirtualInterfaceState>,
        pub(crate) customer_router_config: std::option::Option<std::string::String>,
        pub(crate) mtu: std::option::Option<i32>,
        pub(crate) jumbo_frame_capable: std::option::Option<bool>,
        pub(crate) virtual_gateway_id: std::option::Option<std::string::String>,
        pub(crate) direct_connect_gateway_id: std::option::Option<std::string::String>,
        pub(crate) route_filter_prefixes: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
        pub(crate) bgp_peers: std::option::Option<std::vec::Vec<crate::model::BgpPeer>>,
        pub(crate) region: std::option::Option<std::string::String>,
        pub(crate) aws_device_v2: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner_account = Some(input.into());
            self
        }
        pub fn set_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner_account = input;
            self
        }
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_id = Some(input.into());
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_id = input;
            self
        }
        pub fn location(mut self, input: impl Into<std::string::String>) -> Self {
            self.location = Some(input.into());
            self
        }
        pub fn set_location(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.location = input;
            self
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(input.into());
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_id = input;
            self
        }
        /// The type of virtual interface. The possible values are `private` and `public`.
        pub fn virtual_interface_type(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_type = Some(input.into());
            self
        }
        pub fn set_virtual_interface_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_type = input;
            self
        }
        pub fn virtual_interface_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_name = Some(input.into());
            self
        }
        pub fn set_virtual_interface_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_name = input;
            self
        }
        pub fn vlan(mut self, input: i32) -> Self {
            self.vlan = Some(input);
            self
        }
        pub fn set_vlan(mut self, input: std::option::Option<i32>) -> Self {
            self.vlan = input;
            self
        }
        pub fn asn(mut self, input: i32) -> Self {
            self.asn = Some(input);
            self
        }
        pub fn set_asn(mut self, input: std::option::Option<i32>) -> Self {
            self.asn = input;
            self
        }
        pub fn amazon_side_asn(mut self, input: i64) -> Self {
            self.amazon_side_asn = Some(input);
            self
        }
        pub fn set_amazon_side_asn(mut self, input: std::option::Option<i64>) -> Self {
            self.amazon_side_asn = input;
            self
        }
        pub fn auth_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.auth_key = Some(input.into());
            self
        }
        pub fn set_auth_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.auth_key = input;
            self
        }
        pub fn amazon_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.amazon_address = Some(input.into());
            self
        }
        pub fn set_amazon_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.amazon_address = input;
            self
        }
        pub fn customer_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.customer_address = Some(input.into());
            self
        }
        pub fn set_customer_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.customer_address = input;
            self
        }
        pub fn address_family(mut self, input: crate::model::AddressFamily) -> Self {
            self.address_family = Some(input);
            self
        }
        pub fn set_address_family(mut self, input: std::option::Option<crate::model::AddressFamily>) -> Self {
            self.address_family = input;
            self
        }
        pub fn virtual_interface_state(mut self, input: crate::model::VirtualInterfaceState) -> Self {
            self.virtual_interface_state = Some(input);
            self
        }
        pub fn set_virtual_interface_state(mut self, input: std::option::Option<crate::model::VirtualInterfaceState>) -> Self {
            self.virtual_interface_state = input;
            self
        }
        /// The customer router configuration.
        pub fn customer_router_config(mut self, input: impl Into<std::string::String>) -> Self {
            self.customer_router_config = Some(input.into());
            self
        }
        pub fn set_customer_router_config(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.customer_router_config = input;
            self
        }
        /// The maximum transmission unit (MTU), in bytes. Supported values are 1500 and 9001.
        pub fn mtu(mut self, input: i32) -> Self {
            self.mtu = Some(input);
            self
        }
        pub fn set_mtu(mut self, input: std::option::Option<i32>) -> Self {
            self.mtu = input;
            self
        }
        pub fn jumbo_frame_capable(mut self, input: bool) -> Self {
            self.jumbo_frame_capable = Some(input);
            self
        }
        pub fn set_jumbo_frame_capable(mut self, input: std::option::Option<bool>) -> Self {
            self.jumbo_frame_capable = input;
            self
        }
        pub fn virtual_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_gateway_id = Some(input.into());
            self
        }
        pub fn set_virtual_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_gateway_id = input;
            self
        }
        pub fn direct_connect_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.direct_connect_gateway_id = Some(input.into());
            self
        }
        pub fn set_direct_connect_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.direct_connect_gateway_id = input;
            self
        }
        /// Appends an item to `route_filter_prefixes`.
        pub fn route_filter_prefixes(mut self, input: impl Into<crate::model::RouteFilterPrefix>) -> Self {
            let mut v = self.route_filter_prefixes.unwrap_or_default();
            v.push(input.into());
            self.route_filter_prefixes = Some(v);
            self
        }
        pub fn set_route_filter_prefixes(mut self, input: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>) -> Self {
            self.route_filter_prefixes = input;
            self
        }
        /// Appends an item to `bgp_peers`.
        pub fn bgp_peers(mut self, input: impl Into<crate::model::BgpPeer>) -> Self {
            let mut v = self.bgp_peers.unwrap_or_default();
            v.push(input.into());
            self.bgp_peers = Some(v);
            self
        }
        pub fn set_bgp_peers(mut self, input: std::option::Option<std::vec::Vec<crate::model::BgpPeer>>) -> Self {
            self.bgp_peers = input;
            self
        }
        pub fn region(mut self, input: impl Into<std::string::String>) -> Self {
            self.region = Some(input.into());
            self
        }
        pub fn set_region(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.region = input;
            self
        }
        pub fn aws_device_v2(mut self, input: impl Into<std::string::String>) -> Self {
            self.aws_device_v2 = Some(input.into());
            self
        }
        pub fn set_aws_device_v2(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.aws_device_v2 = input;
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`VirtualInterface`](crate::model::VirtualInterface)
        pub fn build(self) -> crate::model::VirtualInterface {
            crate::model::VirtualInterface {
                owner_account: self.owner_account,
                virtual_interface_id: self.virtual_interface_id,
                location: self.location,
                connection_id: self.connection_id,
                virtual_interface_type: self.virtual_interface_type,
                virtual_interface_name: self.virtual_interface_name,
                vlan: self.vlan,
                asn: self.asn,
                amazon_side_asn: self.amazon_side_asn,
                auth_key: self.auth_key,
                amazon_address: self.amazon_address,
                customer_address: self.customer_address,
                address_family: self.address_family,
                virtual_interface_state: self.virtual_interface_state,
                customer_router_config: self.customer_router_config,
                mtu: self.mtu,
                jumbo_frame_capable: self.jumbo_frame_capable,
                virtual_gateway_id: self.virtual_gateway_id,
                direct_connect_gateway_id: self.direct_connect_gateway_id,
                route_filter_prefixes: self.route_filter_prefixes,
                bgp_peers: self.bgp_peers,
                region: self.region,
                aws_device_v2: self.aws_device_v2,
                tags: self.tags,
            }
        }
    }
}
impl VirtualInterface {
    /// Creates a new builder-style object to manufacture [`VirtualInterface`](crate::model::VirtualInterface)
    pub fn builder() -> crate::model::virtual_interface::Builder {
        crate::model::virtual_interface::Builder::default()
    }
}

/// Information about the virtual interface failover test.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct VirtualInterfaceTestHistory {
    pub test_id: std::option::Option<std::string::String>,
    pub virtual_interface_id: std::option::Option<std::string::String>,
    pub bgp_peers: std::option::Option<std::vec::Vec<std::string::String>>,
    pub status: std::option::Option<std::string::String>,
    pub owner_account: std::option::Option<std::string::String>,
    pub test_duration_in_minutes: std::option::Option<i32>,
    pub start_time: std::option::Option<smithy_types::Instant>,
    pub end_time: std::option::Option<smithy_types::Instant>,
}
impl std::fmt::Debug for VirtualInterfaceTestHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("VirtualInterfaceTestHistory");
        formatter.field("test_id", &self.test_id);
        formatter.field("virtual_interface_id", &self.virtual_interface_id);
        formatter.field("bgp_peers", &self.bgp_peers);
        formatter.field("status", &self.status);
        formatter.field("owner_account", &self.owner_account);
        formatter.field("test_duration_in_minutes", &self.test_duration_in_minutes);
        formatter.field("start_time", &self.start_time);
        formatter.field("end_time", &self.end_time);
        formatter.finish()
    }
}
/// See [`VirtualInterfaceTestHistory`](crate::model::VirtualInterfaceTestHistory)
pub mod virtual_interface_test_history {
    /// A builder for [`VirtualInterfaceTestHistory`](crate::model::VirtualInterfaceTestHistory)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) test_id: std::option::Option<std::string::String>,
        pub(crate) virtual_interface_id: std::option::Option<std::string::String>,
        pub(crate) bgp_peers: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) status: std::option::Option<std::string::String>,
        pub(crate) owner_account: std::option::Option<std::string::String>,
        pub(crate) test_duration_in_minutes: std::option::Option<i32>,
        pub(crate) start_time: std::option::Option<smithy_types::Instant>,
        pub(crate) end_time: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn test_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.test_id = Some(input.into());
            self
        }
        pub fn set_test_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.test_id = input;
            self
        }
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_id = Some(input.into());
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_id = input;
            self
        }
        /// Appends an item to `bgp_peers`.
        pub fn bgp_peers(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.bgp_peers.unwrap_or_default();
            v.push(input.into());
            self.bgp_peers = Some(v);
            self
        }
        pub fn set_bgp_peers(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.bgp_peers = input;
            self
        }
        pub fn status(mut self, input: impl Into<std::string::String>) -> Self {
            self.status = Some(input.into());
            self
        }
        pub fn set_status(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.status = input;
            self
        }
        pub fn owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner_account = Some(input.into());
            self
        }
        pub fn set_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner_account = input;
            self
        }
        pub fn test_duration_in_minutes(mut self, input: i32) -> Self {
            self.test_duration_in_minutes = Some(input);
            self
        }
        pub fn set_test_duration_in_minutes(mut self, input: std::option::Option<i32>) -> Self {
            self.test_duration_in_minutes = input;
            self
        }
        pub fn start_time(mut self, input: smithy_types::Instant) -> Self {
            self.start_time = Some(input);
            self
        }
        pub fn set_start_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.start_time = input;
            self
        }
        pub fn end_time(mut self, input: smithy_types::Instant) -> Self {
            self.end_time = Some(input);
            self
        }
        pub fn set_end_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.end_time = input;
            self
        }
        /// Consumes the builder and constructs a [`VirtualInterfaceTestHistory`](crate::model::VirtualInterfaceTestHistory)
        pub fn build(self) -> crate::model::VirtualInterfaceTestHistory {
            crate::model::VirtualInterfaceTestHistory {
                test_id: self.test_id,
                virtual_interface_id: self.virtual_interface_id,
                bgp_peers: self.bgp_peers,
                status: self.status,
                owner_account: self.owner_account,
                test_duration_in_minutes: self.test_duration_in_minutes,
                start_time: self.start_time,
                end_time: self.end_time,
            }
        }
    }
}
impl VirtualInterfaceTestHistory {
    /// Creates a new builder-style object to manufacture [`VirtualInterfaceTestHistory`](crate::model::VirtualInterfaceTestHistory)
    pub fn builder() -> crate::model::virtual_interface_test_history::Builder {
        crate::model::virtual_interface_test_history::Builder::default()
    }
}

/// The address family for a BGP peer.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for AddressFamily {
    fn from(s: &str) -> Self {
        match s {
            "ipv4" => AddressFamily::Ipv4,
            "ipv6" => AddressFamily::Ipv6,
            other => AddressFamily::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for AddressFamily {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(AddressFamily::from(s))
    }
}
impl AddressFamily {
    pub fn as_str(&self) -> &str {
        match self {
            AddressFamily::Ipv4 => "ipv4",
            AddressFamily::Ipv6 => "ipv6",
            AddressFamily::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["ipv4", "ipv6"]
    }
}
impl AsRef<str> for AddressFamily {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum BgpPeerState {
    Available,
    Deleted,
    Deleting,
    Pending,
    Verifying,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for BgpPeerState {
    fn from(s: &str) -> Self {
        match s {
            "verifying" => BgpPeerState::Verifying,
            "pending" => BgpPeerState::Pending,
            "available" => BgpPeerState::Available,
            "deleting" => BgpPeerState::Deleting,
            "deleted" => BgpPeerState::Deleted,
            other => BgpPeerState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for BgpPeerState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(BgpPeerState::from(s))
    }
}
impl BgpPeerState {
    pub fn as_str(&self) -> &str {
        match self {
            BgpPeerState::Verifying => "verifying",
            BgpPeerState::Pending => "pending",
            BgpPeerState::Available => "available",
            BgpPeerState::Deleting => "deleting",
            BgpPeerState::Deleted => "deleted",
            BgpPeerState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["verifying", "pending", "available", "deleting", "deleted"]
    }
}
impl AsRef<str> for BgpPeerState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum BgpStatus {
    Down,
    UnknownValue,
    Up,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for BgpStatus {
    fn from(s: &str) -> Self {
        match s {
            "up" => BgpStatus::Up,
            "down" => BgpStatus::Down,
            "unknown" => BgpStatus::UnknownValue,
            other => BgpStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for BgpStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(BgpStatus::from(s))
    }
}
impl BgpStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BgpStatus::Up => "up",
            BgpStatus::Down => "down",
            BgpStatus::UnknownValue => "unknown",
            BgpStatus::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["up", "down", "unknown"]
    }
}
impl AsRef<str> for BgpStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// The lifecycle state of a connection.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ConnectionState {
    Available,
    Deleted,
    Deleting,
    Down,
    Ordering,
    Pending,
    Rejected,
    Requested,
    UnknownValue,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ConnectionState {
    fn from(s: &str) -> Self {
        match s {
            "ordering" => ConnectionState::Ordering,
            "requested" => ConnectionState::Requested,
            "pending" => ConnectionState::Pending,
            "available" => ConnectionState::Available,
            "down" => ConnectionState::Down,
            "deleting" => ConnectionState::Deleting,
            "deleted" => ConnectionState::Deleted,
            "rejected" => ConnectionState::Rejected,
            "unknown" => ConnectionState::UnknownValue,
            other => ConnectionState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ConnectionState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ConnectionState::from(s))
    }
}
impl ConnectionState {
    pub fn as_str(&self) -> &str {
        match self {
            ConnectionState::Ordering => "ordering",
            ConnectionState::Requested => "requested",
            ConnectionState::Pending => "pending",
            ConnectionState::Available => "available",
            ConnectionState::Down => "down",
            ConnectionState::Deleting => "deleting",
            ConnectionState::Deleted => "deleted",
            ConnectionState::Rejected => "rejected",
            ConnectionState::UnknownValue => "unknown",
            ConnectionState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["ordering", "requested", "pending", "available", "down", "deleting", "deleted", "rejected", "unknown"]
    }
}
impl AsRef<str> for ConnectionState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum DirectConnectGatewayAssociationProposalState {
    Accepted,
    Deleted,
    Requested,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for DirectConnectGatewayAssociationProposalState {
    fn from(s: &str) -> Self {
        match s {
            "requested" => DirectConnectGatewayAssociationProposalState::Requested,
            "accepted" => DirectConnectGatewayAssociationProposalState::Accepted,
            "deleted" => DirectConnectGatewayAssociationProposalState::Deleted,
            other => DirectConnectGatewayAssociationProposalState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for DirectConnectGatewayAssociationProposalState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DirectConnectGatewayAssociationProposalState::from(s))
    }
}
impl DirectConnectGatewayAssociationProposalState {
    pub fn as_str(&self) -> &str {
        match self {
            DirectConnectGatewayAssociationProposalState::Requested => "requested",
            DirectConnectGatewayAssociationProposalState::Accepted => "accepted",
            DirectConnectGatewayAssociationProposalState::Deleted => "deleted",
            DirectConnectGatewayAssociationProposalState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["requested", "accepted", "deleted"]
    }
}
impl AsRef<str> for DirectConnectGatewayAssociationProposalState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum DirectConnectGatewayAssociationState {
    Associated,
    Associating,
    Disassociated,
    Disassociating,
    Updating,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for DirectConnectGatewayAssociationState {
    fn from(s: &str) -> Self {
        match s {
            "associating" => DirectConnectGatewayAssociationState::Associating,
            "associated" => DirectConnectGatewayAssociationState::Associated,
            "disassociating" => DirectConnectGatewayAssociationState::Disassociating,
            "disassociated" => DirectConnectGatewayAssociationState::Disassociated,
            "updating" => DirectConnectGatewayAssociationState::Updating,
            other => DirectConnectGatewayAssociationState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for DirectConnectGatewayAssociationState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DirectConnectGatewayAssociationState::from(s))
    }
}
impl DirectConnectGatewayAssociationState {
    pub fn as_str(&self) -> &str {
        match self {
            DirectConnectGatewayAssociationState::Associating => "associating",
            DirectConnectGatewayAssociationState::Associated => "associated",
            DirectConnectGatewayAssociationState::Disassociating => "disassociating",
            DirectConnectGatewayAssociationState::Disassociated => "disassociated",
            DirectConnectGatewayAssociationState::Updating => "updating",
            DirectConnectGatewayAssociationState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["associating", "associated", "disassociating", "disassociated", "updating"]
    }
}
impl AsRef<str> for DirectConnectGatewayAssociationState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum DirectConnectGatewayAttachmentState {
    Attached,
    Attaching,
    Detached,
    Detaching,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for DirectConnectGatewayAttachmentState {
    fn from(s: &str) -> Self {
        match s {
            "attaching" => DirectConnectGatewayAttachmentState::Attaching,
            "attached" => DirectConnectGatewayAttachmentState::Attached,
            "detaching" => DirectConnectGatewayAttachmentState::Detaching,
            "detached" => DirectConnectGatewayAttachmentState::Detached,
            other => DirectConnectGatewayAttachmentState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for DirectConnectGatewayAttachmentState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DirectConnectGatewayAttachmentState::from(s))
    }
}
impl DirectConnectGatewayAttachmentState {
    pub fn as_str(&self) -> &str {
        match self {
            DirectConnectGatewayAttachmentState::Attaching => "attaching",
            DirectConnectGatewayAttachmentState::Attached => "attached",
            DirectConnectGatewayAttachmentState::Detaching => "detaching",
            DirectConnectGatewayAttachmentState::Detached => "detached",
            DirectConnectGatewayAttachmentState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["attaching", "attached", "detaching", "detached"]
    }
}
impl AsRef<str> for DirectConnectGatewayAttachmentState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum DirectConnectGatewayAttachmentType {
    PrivateVirtualInterface,
    TransitVirtualInterface,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for DirectConnectGatewayAttachmentType {
    fn from(s: &str) -> Self {
        match s {
            "TransitVirtualInterface" => DirectConnectGatewayAttachmentType::TransitVirtualInterface,
            "PrivateVirtualInterface" => DirectConnectGatewayAttachmentType::PrivateVirtualInterface,
            other => DirectConnectGatewayAttachmentType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for DirectConnectGatewayAttachmentType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DirectConnectGatewayAttachmentType::from(s))
    }
}
impl DirectConnectGatewayAttachmentType {
    pub fn as_str(&self) -> &str {
        match self {
            DirectConnectGatewayAttachmentType::TransitVirtualInterface => "TransitVirtualInterface",
            DirectConnectGatewayAttachmentType::PrivateVirtualInterface => "PrivateVirtualInterface",
            DirectConnectGatewayAttachmentType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["TransitVirtualInterface", "PrivateVirtualInterface"]
    }
}
impl AsRef<str> for DirectConnectGatewayAttachmentType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum DirectConnectGatewayState {
    Available,
    Deleted,
    Deleting,
    Pending,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for DirectConnectGatewayState {
    fn from(s: &str) -> Self {
        match s {
            "pending" => DirectConnectGatewayState::Pending,
            "available" => DirectConnectGatewayState::Available,
            "deleting" => DirectConnectGatewayState::Deleting,
            "deleted" => DirectConnectGatewayState::Deleted,
            other => DirectConnectGatewayState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for DirectConnectGatewayState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DirectConnectGatewayState::from(s))
    }
}
impl DirectConnectGatewayState {
    pub fn as_str(&self) -> &str {
        match self {
            DirectConnectGatewayState::Pending => "pending",
            DirectConnectGatewayState::Available => "available",
            DirectConnectGatewayState::Deleting => "deleting",
            DirectConnectGatewayState::Deleted => "deleted",
            DirectConnectGatewayState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["pending", "available", "deleting", "deleted"]
    }
}
impl AsRef<str> for DirectConnectGatewayState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum GatewayType {
    TransitGateway,
    VirtualPrivateGateway,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for GatewayType {
    fn from(s: &str) -> Self {
        match s {
            "virtualPrivateGateway" => GatewayType::VirtualPrivateGateway,
            "transitGateway" => GatewayType::TransitGateway,
            other => GatewayType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for GatewayType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(GatewayType::from(s))
    }
}
impl GatewayType {
    pub fn as_str(&self) -> &str {
        match self {
            GatewayType::VirtualPrivateGateway => "virtualPrivateGateway",
            GatewayType::TransitGateway => "transitGateway",
            GatewayType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["virtualPrivateGateway", "transitGateway"]
    }
}
impl AsRef<str> for GatewayType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum HasLogicalRedundancy {
    No,
    UnknownValue,
    Yes,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for HasLogicalRedundancy {
    fn from(s: &str) -> Self {
        match s {
            "unknown" => HasLogicalRedundancy::UnknownValue,
            "yes" => HasLogicalRedundancy::Yes,
            "no" => HasLogicalRedundancy::No,
            other => HasLogicalRedundancy::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for HasLogicalRedundancy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(HasLogicalRedundancy::from(s))
    }
}
impl HasLogicalRedundancy {
    pub fn as_str(&self) -> &str {
        match self {
            HasLogicalRedundancy::UnknownValue => "unknown",
            HasLogicalRedundancy::Yes => "yes",
            HasLogicalRedundancy::No => "no",
            HasLogicalRedundancy::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["unknown", "yes", "no"]
    }
}
impl AsRef<str> for HasLogicalRedundancy {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum InterconnectState {
    Available,
    Deleted,
    Deleting,
    Down,
    Pending,
    Requested,
    UnknownValue,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for InterconnectState {
    fn from(s: &str) -> Self {
        match s {
            "requested" => InterconnectState::Requested,
            "pending" => InterconnectState::Pending,
            "available" => InterconnectState::Available,
            "down" => InterconnectState::Down,
            "deleting" => InterconnectState::Deleting,
            "deleted" => InterconnectState::Deleted,
            "unknown" => InterconnectState::UnknownValue,
            other => InterconnectState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for InterconnectState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InterconnectState::from(s))
    }
}
impl InterconnectState {
    pub fn as_str(&self) -> &str {
        match self {
            InterconnectState::Requested => "requested",
            InterconnectState::Pending => "pending",
            InterconnectState::Available => "available",
            InterconnectState::Down => "down",
            InterconnectState::Deleting => "deleting",
            InterconnectState::Deleted => "deleted",
            InterconnectState::UnknownValue => "unknown",
            InterconnectState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["requested", "pending", "available", "down", "deleting", "deleted", "unknown"]
    }
}
impl AsRef<str> for InterconnectState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum LagState {
    Available,
    Deleted,
    Deleting,
    Down,
    Pending,
    Requested,
    UnknownValue,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for LagState {
    fn from(s: &str) -> Self {
        match s {
            "requested" => LagState::Requested,
            "pending" => LagState::Pending,
            "available" => LagState::Available,
            "down" => LagState::Down,
            "deleting" => LagState::Deleting,
            "deleted" => LagState::Deleted,
            "unknown" => LagState::UnknownValue,
            other => LagState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for LagState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(LagState::from(s))
    }
}
impl LagState {
    pub fn as_str(&self) -> &str {
        match self {
            LagState::Requested => "requested",
            LagState::Pending => "pending",
            LagState::Available => "available",
            LagState::Down => "down",
            LagState::Deleting => "deleting",
            LagState::Deleted => "deleted",
            LagState::UnknownValue => "unknown",
            LagState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["requested", "pending", "available", "down", "deleting", "deleted", "unknown"]
    }
}
impl AsRef<str> for LagState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum LoaContentType {
    ApplicationPdf,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for LoaContentType {
    fn from(s: &str) -> Self {
        match s {
            "application/pdf" => LoaContentType::ApplicationPdf,
            other => LoaContentType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for LoaContentType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(LoaContentType::from(s))
    }
}
impl LoaContentType {
    pub fn as_str(&self) -> &str {
        match self {
            LoaContentType::ApplicationPdf => "application/pdf",
            LoaContentType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["application/pdf"]
    }
}
impl AsRef<str> for LoaContentType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// The lifecycle state of a virtual interface.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum VirtualInterfaceState {
    Available,
    Confirming,
    Deleted,
    Deleting,
    Down,
    Pending,
    Rejected,
    UnknownValue,
    Verifying,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for VirtualInterfaceState {
    fn from(s: &str) -> Self {
        match s {
            "confirming" => VirtualInterfaceState::Confirming,
            "verifying" => VirtualInterfaceState::Verifying,
            "pending" => VirtualInterfaceState::Pending,
            "available" => VirtualInterfaceState::Available,
            "down" => VirtualInterfaceState::Down,
            "deleting" => VirtualInterfaceState::Deleting,
            "deleted" => VirtualInterfaceState::Deleted,
            "rejected" => VirtualInterfaceState::Rejected,
            "unknown" => VirtualInterfaceState::UnknownValue,
            other => VirtualInterfaceState::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for VirtualInterfaceState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(VirtualInterfaceState::from(s))
    }
}
impl VirtualInterfaceState {
    pub fn as_str(&self) -> &str {
        match self {
            VirtualInterfaceState::Confirming => "confirming",
            VirtualInterfaceState::Verifying => "verifying",
            VirtualInterfaceState::Pending => "pending",
            VirtualInterfaceState::Available => "available",
            VirtualInterfaceState::Down => "down",
            VirtualInterfaceState::Deleting => "deleting",
            VirtualInterfaceState::Deleted => "deleted",
            VirtualInterfaceState::Rejected => "rejected",
            VirtualInterfaceState::UnknownValue => "unknown",
            VirtualInterfaceState::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["confirming", "verifying", "pending", "available", "down", "deleting", "deleted", "rejected", "unknown"]
    }
}
impl AsRef<str> for VirtualInterfaceState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
