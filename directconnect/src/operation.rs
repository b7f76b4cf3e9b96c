/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Accepts a proposal request to attach a virtual private gateway or transit gateway to a Direct Connect gateway.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct AcceptDirectConnectGatewayAssociationProposal {
    _private: (),
}
impl AcceptDirectConnectGatewayAssociationProposal {
    /// Creates a new builder-style object to manufacture [`AcceptDirectConnectGatewayAssociationProposalInput`](crate::input::AcceptDirectConnectGatewayAssociationProposalInput)
    pub fn builder() -> crate::input::accept_direct_connect_gateway_association_proposal_input::Builder {
        crate::input::accept_direct_connect_gateway_association_proposal_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for AcceptDirectConnectGatewayAssociationProposal {
    type Output = std::result::Result<
        crate::output::AcceptDirectConnectGatewayAssociationProposalOutput,
        crate::error::AcceptDirectConnectGatewayAssociationProposalError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_accept_direct_connect_gateway_association_proposal_error(response)
        } else {
            crate::operation_deser::parse_accept_direct_connect_gateway_association_proposal_response(response)
        }
    }
}

/// Creates a hosted connection on the specified interconnect.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct AllocateConnectionOnInterconnect {
    _private: (),
}
impl AllocateConnectionOnInterconnect {
    /// Creates a new builder-style object to manufacture [`AllocateConnectionOnInterconnectInput`](crate::input::AllocateConnectionOnInterconnectInput)
    pub fn builder() -> crate::input::allocate_connection_on_interconnect_input::Builder {
        crate::input::allocate_connection_on_interconnect_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for AllocateConnectionOnInterconnect {
    type Output = std::result::Result<
        crate::output::AllocateConnectionOnInterconnectOutput,
        crate::error::AllocateConnectionOnInterconnectError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_allocate_connection_on_interconnect_error(response)
        } else {
            crate::operation_deser::parse_allocate_connection_on_interconnect_response(response)
        }
    }
}

/// Creates a hosted connection on the specified interconnect or a link aggregation group (LAG) of interconnects.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct AllocateHostedConnection {
    _private: (),
}
impl AllocateHostedConnection {
    /// Creates a new builder-style object to manufacture [`AllocateHostedConnectionInput`](crate::input::AllocateHostedConnectionInput)
    pub fn builder() -> crate::input::allocate_hosted_connection_input::Builder {
        crate::input::allocate_hosted_connection_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for AllocateHostedConnection {
    type Output = std::result::Result<
        crate::output::AllocateHostedConnectionOutput,
        crate::error::AllocateHostedConnectionError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_allocate_hosted_connection_error(response)
        } else {
            crate::operation_deser::parse_allocate_hosted_connection_response(response)
        }
    }
}

/// Provisions a private virtual interface to be owned by the specified AWS account.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct AllocatePrivateVirtualInterface {
    _private: (),
}
impl AllocatePrivateVirtualInterface {
    /// Creates a new builder-style object to manufacture [`AllocatePrivateVirtualInterfaceInput`](crate::input::AllocatePrivateVirtualInterfaceInput)
    pub fn builder() -> crate::input::allocate_private_virtual_interface_input::Builder {
        crate::input::allocate_private_virtual_interface_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for AllocatePrivateVirtualInterface {
    type Output = std::result::Result<
        crate::output::AllocatePrivateVirtualInterfaceOutput,
        crate::error::AllocatePrivateVirtualInterfaceError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_allocate_private_virtual_interface_error(response)
        } else {
            crate::operation_deser::parse_allocate_private_virtual_interface_response(response)
        }
    }
}

/// Provisions a public virtual interface to be owned by the specified AWS account.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct AllocatePublicVirtualInterface {
    _private: (),
}
impl AllocatePublicVirtualInterface {
    /// Creates a new builder-style object to manufacture [`AllocatePublicVirtualInterfaceInput`](crate::input::AllocatePublicVirtualInterfaceInput)
    pub fn builder() -> crate::input::allocate_public_virtual_interface_input::Builder {
        crate::input::allocate_public_virtual_interface_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for AllocatePublicVirtualInterface {
    type Output = std::result::Result<
        crate::output::AllocatePublicVirtualInterfaceOutput,
        crate::error::AllocatePublicVirtualInterfaceError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_allocate_public_virtual_interface_error(response)
        } else {
            crate::operation_deser::parse_allocate_public_virtual_interface_response(response)
        }
    }
}

/// Provisions a transit virtual interface to be owned by the specified AWS account.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct AllocateTransitVirtualInterface {
    _private: (),
}
impl AllocateTransitVirtualInterface {
    /// Creates a new builder-style object to manufacture [`AllocateTransitVirtualInterfaceInput`](crate::input::AllocateTransitVirtualInterfaceInput)
    pub fn builder() -> crate::input::allocate_transit_virtual_interface_input::Builder {
        crate::input::allocate_transit_virtual_interface_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for AllocateTransitVirtualInterface {
    type Output = std::result::Result<
        crate::output::AllocateTransitVirtualInterfaceOutput,
        crate::error::AllocateTransitVirtualInterfaceError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_allocate_transit_virtual_interface_error(response)
        } else {
            crate::operation_deser::parse_allocate_transit_virtual_interface_response(response)
        }
    }
}

/// Associates an existing connection with a link aggregation group (LAG).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct AssociateConnectionWithLag {
    _private: (),
}
impl AssociateConnectionWithLag {
    /// Creates a new builder-style object to manufacture [`AssociateConnectionWithLagInput`](crate::input::AssociateConnectionWithLagInput)
    pub fn builder() -> crate::input::associate_connection_with_lag_input::Builder {
        crate::input::associate_connection_with_lag_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for AssociateConnectionWithLag {
    type Output = std::result::Result<
        crate::output::AssociateConnectionWithLagOutput,
        crate::error::AssociateConnectionWithLagError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_associate_connection_with_lag_error(response)
        } else {
            crate::operation_deser::parse_associate_connection_with_lag_response(response)
        }
    }
}

/// Associates a hosted connection and its virtual interfaces with a link aggregation group (LAG) or interconnect.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct AssociateHostedConnection {
    _private: (),
}
impl AssociateHostedConnection {
    /// Creates a new builder-style object to manufacture [`AssociateHostedConnectionInput`](crate::input::AssociateHostedConnectionInput)
    pub fn builder() -> crate::input::associate_hosted_connection_input::Builder {
        crate::input::associate_hosted_connection_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for AssociateHostedConnection {
    type Output = std::result::Result<
        crate::output::AssociateHostedConnectionOutput,
        crate::error::AssociateHostedConnectionError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_associate_hosted_connection_error(response)
        } else {
            crate::operation_deser::parse_associate_hosted_connection_response(response)
        }
    }
}

/// Associates a virtual interface with a specified link aggregation group (LAG) or connection.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct AssociateVirtualInterface {
    _private: (),
}
impl AssociateVirtualInterface {
    /// Creates a new builder-style object to manufacture [`AssociateVirtualInterfaceInput`](crate::input::AssociateVirtualInterfaceInput)
    pub fn builder() -> crate::input::associate_virtual_interface_input::Builder {
        crate::input::associate_virtual_interface_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for AssociateVirtualInterface {
    type Output = std::result::Result<
        crate::output::AssociateVirtualInterfaceOutput,
        crate::error::AssociateVirtualInterfaceError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_associate_virtual_interface_error(response)
        } else {
            crate::operation_deser::parse_associate_virtual_interface_response(response)
        }
    }
}

/// Confirms the creation of the specified hosted connection on an interconnect.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ConfirmConnection {
    _private: (),
}
impl ConfirmConnection {
    /// Creates a new builder-style object to manufacture [`ConfirmConnectionInput`](crate::input::ConfirmConnectionInput)
    pub fn builder() -> crate::input::confirm_connection_input::Builder {
        crate::input::confirm_connection_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ConfirmConnection {
    type Output = std::result::Result<
        crate::output::ConfirmConnectionOutput,
        crate::error::ConfirmConnectionError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_confirm_connection_error(response)
        } else {
            crate::operation_deser::parse_confirm_connection_response(response)
        }
    }
}

/// Accepts ownership of a private virtual interface created by another AWS account.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ConfirmPrivateVirtualInterface {
    _private: (),
}
impl ConfirmPrivateVirtualInterface {
    /// Creates a new builder-style object to manufacture [`ConfirmPrivateVirtualInterfaceInput`](crate::input::ConfirmPrivateVirtualInterfaceInput)
    pub fn builder() -> crate::input::confirm_private_virtual_interface_input::Builder {
        crate::input::confirm_private_virtual_interface_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ConfirmPrivateVirtualInterface {
    type Output = std::result::Result<
        crate::output::ConfirmPrivateVirtualInterfaceOutput,
        crate::error::ConfirmPrivateVirtualInterfaceError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_confirm_private_virtual_interface_error(response)
        } else {
            crate::operation_deser::parse_confirm_private_virtual_interface_response(response)
        }
    }
}

/// Accepts ownership of a public virtual interface created by another AWS account.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ConfirmPublicVirtualInterface {
    _private: (),
}
impl ConfirmPublicVirtualInterface {
    /// Creates a new builder-style object to manufacture [`ConfirmPublicVirtualInterfaceInput`](crate::input::ConfirmPublicVirtualInterfaceInput)
    pub fn builder() -> crate::input::confirm_public_virtual_interface_input::Builder {
        crate::input::confirm_public_virtual_interface_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ConfirmPublicVirtualInterface {
    type Output = std::result::Result<
        crate::output::ConfirmPublicVirtualInterfaceOutput,
        crate::error::ConfirmPublicVirtualInterfaceError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_confirm_public_virtual_interface_error(response)
        } else {
            crate::operation_deser::parse_confirm_public_virtual_interface_response(response)
        }
    }
}

/// Accepts ownership of a transit virtual interface created by another AWS account.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ConfirmTransitVirtualInterface {
    _private: (),
}
impl ConfirmTransitVirtualInterface {
    /// Creates a new builder-style object to manufacture [`ConfirmTransitVirtualInterfaceInput`](crate::input::ConfirmTransitVirtualInterfaceInput)
    pub fn builder() -> crate::input::confirm_transit_virtual_interface_input::Builder {
        crate::input::confirm_transit_virtual_interface_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ConfirmTransitVirtualInterface {
    type Output = std::result::Result<
        crate::output::ConfirmTransitVirtualInterfaceOutput,
        crate::error::ConfirmTransitVirtualInterfaceError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_confirm_transit_virtual_interface_error(response)
        } else {
            crate::operation_deser::parse_confirm_transit_virtual_interface_response(response)
        }
    }
}

/// Creates a BGP peer on the specified virtual interface.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateBgpPeer {
    _private: (),
}
impl CreateBgpPeer {
    /// Creates a new builder-style object to manufacture [`CreateBgpPeerInput`](crate::input::CreateBgpPeerInput)
    pub fn builder() -> crate::input::create_bgp_peer_input::Builder {
        crate::input::create_bgp_peer_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateBgpPeer {
    type Output = std::result::Result<
        crate::output::CreateBgpPeerOutput,
        crate::error::CreateBgpPeerError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_bgp_peer_error(response)
        } else {
            crate::operation_deser::parse_create_bgp_peer_response(response)
        }
    }
}

/// Creates a connection between a customer network and a specific AWS Direct Connect location.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateConnection {
    _private: (),
}
impl CreateConnection {
    /// Creates a new builder-style object to manufacture [`CreateConnectionInput`](crate::input::CreateConnectionInput)
    pub fn builder() -> crate::input::create_connection_input::Builder {
        crate::input::create_connection_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateConnection {
    type Output = std::result::Result<
        crate::output::CreateConnectionOutput,
        crate::error::CreateConnectionError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_connection_error(response)
        } else {
            crate::operation_deser::parse_create_connection_response(response)
        }
    }
}

/// Creates a Direct Connect gateway.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateDirectConnectGateway {
    _private: (),
}
impl CreateDirectConnectGateway {
    /// Creates a new builder-style object to manufacture [`CreateDirectConnectGatewayInput`](crate::input::CreateDirectConnectGatewayInput)
    pub fn builder() -> crate::input::create_direct_connect_gateway_input::Builder {
        crate::input::create_direct_connect_gateway_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateDirectConnectGateway {
    type Output = std::result::Result<
        crate::output::CreateDirectConnectGatewayOutput,
        crate::error::CreateDirectConnectGatewayError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_direct_connect_gateway_error(response)
        } else {
            crate::operation_deser::parse_create_direct_connect_gateway_response(response)
        }
    }
}

/// Creates an association between a Direct Connect gateway and a virtual private gateway.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateDirectConnectGatewayAssociation {
    _private: (),
}
impl CreateDirectConnectGatewayAssociation {
    /// Creates a new builder-style object to manufacture [`CreateDirectConnectGatewayAssociationInput`](crate::input::CreateDirectConnectGatewayAssociationInput)
    pub fn builder() -> crate::input::create_direct_connect_gateway_association_input::Builder {
        crate::input::create_direct_connect_gateway_association_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateDirectConnectGatewayAssociation {
    type Output = std::result::Result<
        crate::output::CreateDirectConnectGatewayAssociationOutput,
        crate::error::CreateDirectConnectGatewayAssociationError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_direct_connect_gateway_association_error(response)
        } else {
            crate::operation_deser::parse_create_direct_connect_gateway_association_response(response)
        }
    }
}

/// Creates a proposal to associate the specified virtual private gateway or transit gateway with the
/// specified Direct Connect gateway.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateDirectConnectGatewayAssociationProposal {
    _private: (),
}
impl CreateDirectConnectGatewayAssociationProposal {
    /// Creates a new builder-style object to manufacture [`CreateDirectConnectGatewayAssociationProposalInput`](crate::input::CreateDirectConnectGatewayAssociationProposalInput)
    pub fn builder() -> crate::input::create_direct_connect_gateway_association_proposal_input::Builder {
        crate::input::create_direct_connect_gateway_association_proposal_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateDirectConnectGatewayAssociationProposal {
    type Output = std::result::Result<
        crate::output::CreateDirectConnectGatewayAssociationProposalOutput,
        crate::error::CreateDirectConnectGatewayAssociationProposalError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_direct_connect_gateway_association_proposal_error(response)
        } else {
            crate::operation_deser::parse_create_direct_connect_gateway_association_proposal_response(response)
        }
    }
}

/// Creates an interconnect between an AWS Direct Connect Partner's network and a specific location.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateInterconnect {
    _private: (),
}
impl CreateInterconnect {
    /// Creates a new builder-style object to manufacture [`CreateInterconnectInput`](crate::input::CreateInterconnectInput)
    pub fn builder() -> crate::input::create_interconnect_input::Builder {
        crate::input::create_interconnect_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateInterconnect {
    type Output = std::result::Result<
        crate::output::CreateInterconnectOutput,
        crate::error::CreateInterconnectError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_interconnect_error(response)
        } else {
            crate::operation_deser::parse_create_interconnect_response(response)
        }
    }
}

/// Creates a link aggregation group (LAG) with the specified number of bundled physical dedicated connections.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateLag {
    _private: (),
}
impl CreateLag {
    /// Creates a new builder-style object to manufacture [`CreateLagInput`](crate::input::CreateLagInput)
    pub fn builder() -> crate::input::create_lag_input::Builder {
        crate::input::create_lag_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateLag {
    type Output = std::result::Result<
        crate::output::CreateLagOutput,
        crate::error::CreateLagError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_lag_error(response)
        } else {
            crate::operation_deser::parse_create_lag_response(response)
        }
    }
}

/// Creates a private virtual interface.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreatePrivateVirtualInterface {
    _private: (),
}
impl CreatePrivateVirtualInterface {
    /// Creates a new builder-style object to manufacture [`CreatePrivateVirtualInterfaceInput`](crate::input::CreatePrivateVirtualInterfaceInput)
    pub fn builder() -> crate::input::create_private_virtual_interface_input::Builder {
        crate::input::create_private_virtual_interface_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreatePrivateVirtualInterface {
    type Output = std::result::Result<
        crate::output::CreatePrivateVirtualInterfaceOutput,
        crate::error::CreatePrivateVirtualInterfaceError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_private_virtual_interface_error(response)
        } else {
            crate::operation_deser::parse_create_private_virtual_interface_response(response)
        }
    }
}

/// Creates a public virtual interface.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreatePublicVirtualInterface {
    _private: (),
}
impl CreatePublicVirtualInterface {
    /// Creates a new builder-style object to manufacture [`CreatePublicVirtualInterfaceInput`](crate::input::CreatePublicVirtualInterfaceInput)
    pub fn builder() -> crate::input::create_public_virtual_interface_input::Builder {
        crate::input::create_public_virtual_interface_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreatePublicVirtualInterface {
    type Output = std::result::Result<
        crate::output::CreatePublicVirtualInterfaceOutput,
        crate::error::CreatePublicVirtualInterfaceError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_public_virtual_interface_error(response)
        } else {
            crate::operation_deser::parse_create_public_virtual_interface_response(response)
        }
    }
}

/// Creates a transit virtual interface.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateTransitVirtualInterface {
    _private: (),
}
impl CreateTransitVirtualInterface {
    /// Creates a new builder-style object to manufacture [`CreateTransitVirtualInterfaceInput`](crate::input::CreateTransitVirtualInterfaceInput)
    pub fn builder() -> crate::input::create_transit_virtual_interface_input::Builder {
        crate::input::create_transit_virtual_interface_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateTransitVirtualInterface {
    type Output = std::result::Result<
        crate::output::CreateTransitVirtualInterfaceOutput,
        crate::error::CreateTransitVirtualInterfaceError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_transit_virtual_interface_error(response)
        } else {
            crate::operation_deser::parse_create_transit_virtual_interface_response(response)
        }
    }
}

/// Deletes the specified BGP peer on the specified virtual interface.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteBgpPeer {
    _private: (),
}
impl DeleteBgpPeer {
    /// Creates a new builder-style object to manufacture [`DeleteBgpPeerInput`](crate::input::DeleteBgpPeerInput)
    pub fn builder() -> crate::input::delete_bgp_peer_input::Builder {
        crate::input::delete_bgp_peer_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteBgpPeer {
    type Output = std::result::Result<
        crate::output::DeleteBgpPeerOutput,
        crate::error::DeleteBgpPeerError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_bgp_peer_error(response)
        } else {
            crate::operation_deser::parse_delete_bgp_peer_response(response)
        }
    }
}

/// Deletes the specified connection.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteConnection {
    _private: (),
}
impl DeleteConnection {
    /// Creates a new builder-style object to manufacture [`DeleteConnectionInput`](crate::input::DeleteConnectionInput)
    pub fn builder() -> crate::input::delete_connection_input::Builder {
        crate::input::delete_connection_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteConnection {
    type Output = std::result::Result<
        crate::output::DeleteConnectionOutput,
        crate::error::DeleteConnectionError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_connection_error(response)
        } else {
            crate::operation_deser::parse_delete_connection_response(response)
        }
    }
}

/// Deletes the specified Direct Connect gateway.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteDirectConnectGateway {
    _private: (),
}
impl DeleteDirectConnectGateway {
    /// Creates a new builder-style object to manufacture [`DeleteDirectConnectGatewayInput`](crate::input::DeleteDirectConnectGatewayInput)
    pub fn builder() -> crate::input::delete_direct_connect_gateway_input::Builder {
        crate::input::delete_direct_connect_gateway_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteDirectConnectGateway {
    type Output = std::result::Result<
        crate::output::DeleteDirectConnectGatewayOutput,
        crate::error::DeleteDirectConnectGatewayError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_direct_connect_gateway_error(response)
        } else {
            crate::operation_deser::parse_delete_direct_connect_gateway_response(response)
        }
    }
}

/// Deletes the association between the specified Direct Connect gateway and virtual private gateway.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteDirectConnectGatewayAssociation {
    _private: (),
}
impl DeleteDirectConnectGatewayAssociation {
    /// Creates a new builder-style object to manufacture [`DeleteDirectConnectGatewayAssociationInput`](crate::input::DeleteDirectConnectGatewayAssociationInput)
    pub fn builder() -> crate::input::delete_direct_connect_gateway_association_input::Builder {
        crate::input::delete_direct_connect_gateway_association_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteDirectConnectGatewayAssociation {
    type Output = std::result::Result<
        crate::output::DeleteDirectConnectGatewayAssociationOutput,
        crate::error::DeleteDirectConnectGatewayAssociationError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_direct_connect_gateway_association_error(response)
        } else {
            crate::operation_deser::parse_delete_direct_connect_gateway_association_response(response)
        }
    }
}

/// Deletes the association proposal request between the specified Direct Connect gateway and gateway.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteDirectConnectGatewayAssociationProposal {
    _private: (),
}
impl DeleteDirectConnectGatewayAssociationProposal {
    /// Creates a new builder-style object to manufacture [`DeleteDirectConnectGatewayAssociationProposalInput`](crate::input::DeleteDirectConnectGatewayAssociationProposalInput)
    pub fn builder() -> crate::input::delete_direct_connect_gateway_association_proposal_input::Builder {
        crate::input::delete_direct_connect_gateway_association_proposal_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteDirectConnectGatewayAssociationProposal {
    type Output = std::result::Result<
        crate::output::DeleteDirectConnectGatewayAssociationProposalOutput,
        crate::error::DeleteDirectConnectGatewayAssociationProposalError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_direct_connect_gateway_association_proposal_error(response)
        } else {
            crate::operation_deser::parse_delete_direct_connect_gateway_association_proposal_response(response)
        }
    }
}

/// Deletes the specified interconnect.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteInterconnect {
    _private: (),
}
impl DeleteInterconnect {
    /// Creates a new builder-style object to manufacture [`DeleteInterconnectInput`](crate::input::DeleteInterconnectInput)
    pub fn builder() -> crate::input::delete_interconnect_input::Builder {
        crate::input::delete_interconnect_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteInterconnect {
    type Output = std::result::Result<
        crate::output::DeleteInterconnectOutput,
        crate::error::DeleteInterconnectError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_interconnect_error(response)
        } else {
            crate::operation_deser::parse_delete_interconnect_response(response)
        }
    }
}

/// Deletes the specified link aggregation group (LAG).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteLag {
    _private: (),
}
impl DeleteLag {
    /// Creates a new builder-style object to manufacture [`DeleteLagInput`](crate::input::DeleteLagInput)
    pub fn builder() -> crate::input::delete_lag_input::Builder {
        crate::input::delete_lag_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteLag {
    type Output = std::result::Result<
        crate::output::DeleteLagOutput,
        crate::error::DeleteLagError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_lag_error(response)
        } else {
            crate::operation_deser::parse_delete_lag_response(response)
        }
    }
}

/// Deletes a virtual interface.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteVirtualInterface {
    _private: (),
}
impl DeleteVirtualInterface {
    /// Creates a new builder-style object to manufacture [`DeleteVirtualInterfaceInput`](crate::input::DeleteVirtualInterfaceInput)
    pub fn builder() -> crate::input::delete_virtual_interface_input::Builder {
        crate::input::delete_virtual_interface_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteVirtualInterface {
    type Output = std::result::Result<
        crate::output::DeleteVirtualInterfaceOutput,
        crate::error::DeleteVirtualInterfaceError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_virtual_interface_error(response)
        } else {
            crate::operation_deser::parse_delete_virtual_interface_response(response)
        }
    }
}

/// Gets the LOA-CFA for a connection.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeConnectionLoa {
    _private: (),
}
impl DescribeConnectionLoa {
    /// Creates a new builder-style object to manufacture [`DescribeConnectionLoaInput`](crate::input::DescribeConnectionLoaInput)
    pub fn builder() -> crate::input::describe_connection_loa_input::Builder {
        crate::input::describe_connection_loa_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeConnectionLoa {
    type Output = std::result::Result<
        crate::output::DescribeConnectionLoaOutput,
        crate::error::DescribeConnectionLoaError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_connection_loa_error(response)
        } else {
            crate::operation_deser::parse_describe_connection_loa_response(response)
        }
    }
}

/// Displays the specified connection or all connections in this Region.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeConnections {
    _private: (),
}
impl DescribeConnections {
    /// Creates a new builder-style object to manufacture [`DescribeConnectionsInput`](crate::input::DescribeConnectionsInput)
    pub fn builder() -> crate::input::describe_connections_input::Builder {
        crate::input::describe_connections_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeConnections {
    type Output = std::result::Result<
        crate::output::DescribeConnectionsOutput,
        crate::error::DescribeConnectionsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_connections_error(response)
        } else {
            crate::operation_deser::parse_describe_connections_response(response)
        }
    }
}

/// Lists the connections that have been provisioned on the specified interconnect.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeConnectionsOnInterconnect {
    _private: (),
}
impl DescribeConnectionsOnInterconnect {
    /// Creates a new builder-style object to manufacture [`DescribeConnectionsOnInterconnectInput`](crate::input::DescribeConnectionsOnInterconnectInput)
    pub fn builder() -> crate::input::describe_connections_on_interconnect_input::Builder {
        crate::input::describe_connections_on_interconnect_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeConnectionsOnInterconnect {
    type Output = std::result::Result<
        crate::output::DescribeConnectionsOnInterconnectOutput,
        crate::error::DescribeConnectionsOnInterconnectError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_connections_on_interconnect_error(response)
        } else {
            crate::operation_deser::parse_describe_connections_on_interconnect_response(response)
        }
    }
}

/// Describes one or more association proposals for connection between a virtual private gateway or
/// transit gateway and a Direct Connect gateway.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeDirectConnectGatewayAssociationProposals {
    _private: (),
}
impl DescribeDirectConnectGatewayAssociationProposals {
    /// Creates a new builder-style object to manufacture [`DescribeDirectConnectGatewayAssociationProposalsInput`](crate::input::DescribeDirectConnectGatewayAssociationProposalsInput)
    pub fn builder() -> crate::input::describe_direct_connect_gateway_association_proposals_input::Builder {
        crate::input::describe_direct_connect_gateway_association_proposals_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeDirectConnectGatewayAssociationProposals {
    type Output = std::result::Result<
        crate::output::DescribeDirectConnectGatewayAssociationProposalsOutput,
        crate::error::DescribeDirectConnectGatewayAssociationProposalsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_direct_connect_gateway_association_proposals_error(response)
        } else {
            crate::operation_deser::parse_describe_direct_connect_gateway_association_proposals_response(response)
        }
    }
}

/// Lists the associations between your Direct Connect gateways and virtual private gateways and transit gateways.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeDirectConnectGatewayAssociations {
    _private: (),
}
impl DescribeDirectConnectGatewayAssociations {
    /// Creates a new builder-style object to manufacture [`DescribeDirectConnectGatewayAssociationsInput`](crate::input::DescribeDirectConnectGatewayAssociationsInput)
    pub fn builder() -> crate::input::describe_direct_connect_gateway_associations_input::Builder {
        crate::input::describe_direct_connect_gateway_associations_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeDirectConnectGatewayAssociations {
    type Output = std::result::Result<
        crate::output::DescribeDirectConnectGatewayAssociationsOutput,
        crate::error::DescribeDirectConnectGatewayAssociationsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_direct_connect_gateway_associations_error(response)
        } else {
            crate::operation_deser::parse_describe_direct_connect_gateway_associations_response(response)
        }
    }
}

/// Lists the attachments between your Direct Connect gateways and virtual interfaces.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeDirectConnectGatewayAttachments {
    _private: (),
}
impl DescribeDirectConnectGatewayAttachments {
    /// Creates a new builder-style object to manufacture [`DescribeDirectConnectGatewayAttachmentsInput`](crate::input::DescribeDirectConnectGatewayAttachmentsInput)
    pub fn builder() -> crate::input::describe_direct_connect_gateway_attachments_input::Builder {
        crate::input::describe_direct_connect_gateway_attachments_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeDirectConnectGatewayAttachments {
    type Output = std::result::Result<
        crate::output::DescribeDirectConnectGatewayAttachmentsOutput,
        crate::error::DescribeDirectConnectGatewayAttachmentsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_direct_connect_gateway_attachments_error(response)
        } else {
            crate::operation_deser::parse_describe_direct_connect_gateway_attachments_response(response)
        }
    }
}

/// Lists all your Direct Connect gateways or only the specified Direct Connect gateway.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeDirectConnectGateways {
    _private: (),
}
impl DescribeDirectConnectGateways {
    /// Creates a new builder-style object to manufacture [`DescribeDirectConnectGatewaysInput`](crate::input::DescribeDirectConnectGatewaysInput)
    pub fn builder() -> crate::input::describe_direct_connect_gateways_input::Builder {
        crate::input::describe_direct_connect_gateways_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeDirectConnectGateways {
    type Output = std::result::Result<
        crate::output::DescribeDirectConnectGatewaysOutput,
        crate::error::DescribeDirectConnectGatewaysError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_direct_connect_gateways_error(response)
        } else {
            crate::operation_deser::parse_describe_direct_connect_gateways_response(response)
        }
    }
}

/// Lists the hosted connections that have been provisioned on the specified interconnect or link
/// aggregation group (LAG).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeHostedConnections {
    _private: (),
}
impl DescribeHostedConnections {
    /// Creates a new builder-style object to manufacture [`DescribeHostedConnectionsInput`](crate::input::DescribeHostedConnectionsInput)
    pub fn builder() -> crate::input::describe_hosted_connections_input::Builder {
        crate::input::describe_hosted_connections_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeHostedConnections {
    type Output = std::result::Result<
        crate::output::DescribeHostedConnectionsOutput,
        crate::error::DescribeHostedConnectionsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_hosted_connections_error(response)
        } else {
            crate::operation_deser::parse_describe_hosted_connections_response(response)
        }
    }
}

/// Gets the LOA-CFA for the specified interconnect.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeInterconnectLoa {
    _private: (),
}
impl DescribeInterconnectLoa {
    /// Creates a new builder-style object to manufacture [`DescribeInterconnectLoaInput`](crate::input::DescribeInterconnectLoaInput)
    pub fn builder() -> crate::input::describe_interconnect_loa_input::Builder {
        crate::input::describe_interconnect_loa_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeInterconnectLoa {
    type Output = std::result::Result<
        crate::output::DescribeInterconnectLoaOutput,
        crate::error::DescribeInterconnectLoaError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_interconnect_loa_error(response)
        } else {
            crate::operation_deser::parse_describe_interconnect_loa_response(response)
        }
    }
}

/// Lists the interconnects owned by the AWS account or only the specified interconnect.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeInterconnects {
    _private: (),
}
impl DescribeInterconnects {
    /// Creates a new builder-style object to manufacture [`DescribeInterconnectsInput`](crate::input::DescribeInterconnectsInput)
    pub fn builder() -> crate::input::describe_interconnects_input::Builder {
        crate::input::describe_interconnects_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeInterconnects {
    type Output = std::result::Result<
        crate::output::DescribeInterconnectsOutput,
        crate::error::DescribeInterconnectsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_interconnects_error(response)
        } else {
            crate::operation_deser::parse_describe_interconnects_response(response)
        }
    }
}

/// Describes all your link aggregation groups (LAG) or the specified LAG.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeLags {
    _private: (),
}
impl DescribeLags {
    /// Creates a new builder-style object to manufacture [`DescribeLagsInput`](crate::input::DescribeLagsInput)
    pub fn builder() -> crate::input::describe_lags_input::Builder {
        crate::input::describe_lags_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeLags {
    type Output = std::result::Result<
        crate::output::DescribeLagsOutput,
        crate::error::DescribeLagsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_lags_error(response)
        } else {
            crate::operation_deser::parse_describe_lags_response(response)
        }
    }
}

/// Gets the LOA-CFA for a connection, interconnect, or link aggregation group (LAG).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeLoa {
    _private: (),
}
impl DescribeLoa {
    /// Creates a new builder-style object to manufacture [`DescribeLoaInput`](crate::input::DescribeLoaInput)
    pub fn builder() -> crate::input::describe_loa_input::Builder {
        crate::input::describe_loa_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeLoa {
    type Output = std::result::Result<
        crate::output::DescribeLoaOutput,
        crate::error::DescribeLoaError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_loa_error(response)
        } else {
            crate::operation_deser::parse_describe_loa_response(response)
        }
    }
}

/// Lists the AWS Direct Connect locations in the current AWS Region.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeLocations {
    _private: (),
}
impl DescribeLocations {
    /// Creates a new builder-style object to manufacture [`DescribeLocationsInput`](crate::input::DescribeLocationsInput)
    pub fn builder() -> crate::input::describe_locations_input::Builder {
        crate::input::describe_locations_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeLocations {
    type Output = std::result::Result<
        crate::output::DescribeLocationsOutput,
        crate::error::DescribeLocationsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_locations_error(response)
        } else {
            crate::operation_deser::parse_describe_locations_response(response)
        }
    }
}

/// Describes the tags associated with the specified AWS Direct Connect resources.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeTags {
    _private: (),
}
impl DescribeTags {
    /// Creates a new builder-style object to manufacture [`DescribeTagsInput`](crate::input::DescribeTagsInput)
    pub fn builder() -> crate::input::describe_tags_input::Builder {
        crate::input::describe_tags_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeTags {
    type Output = std::result::Result<
        crate::output::DescribeTagsOutput,
        crate::error::DescribeTagsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_tags_error(response)
        } else {
            crate::operation_deser::parse_describe_tags_response(response)
        }
    }
}

/// Lists the virtual private gateways owned by the AWS account.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeVirtualGateways {
    _private: (),
}
impl DescribeVirtualGateways {
    /// Creates a new builder-style object to manufacture [`DescribeVirtualGatewaysInput`](crate::input::DescribeVirtualGatewaysInput)
    pub fn builder() -> crate::input::describe_virtual_gateways_input::Builder {
        crate::input::describe_virtual_gateways_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeVirtualGateways {
    type Output = std::result::Result<
        crate::output::DescribeVirtualGatewaysOutput,
        crate::error::DescribeVirtualGatewaysError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_virtual_gateways_error(response)
        } else {
            crate::operation_deser::parse_describe_virtual_gateways_response(response)
        }
    }
}

/// Displays all virtual interfaces for an AWS account.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeVirtualInterfaces {
    _private: (),
}
impl DescribeVirtualInterfaces {
    /// Creates a new builder-style object to manufacture [`DescribeVirtualInterfacesInput`](crate::input::DescribeVirtualInterfacesInput)
    pub fn builder() -> crate::input::describe_virtual_interfaces_input::Builder {
        crate::input::describe_virtual_interfaces_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeVirtualInterfaces {
    type Output = std::result::Result<
        crate::output::DescribeVirtualInterfacesOutput,
        crate::error::DescribeVirtualInterfacesError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_virtual_interfaces_error(response)
        } else {
            crate::operation_deser::parse_describe_virtual_interfaces_response(response)
        }
    }
}

/// Disassociates a connection from a link aggregation group (LAG).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DisassociateConnectionFromLag {
    _private: (),
}
impl DisassociateConnectionFromLag {
    /// Creates a new builder-style object to manufacture [`DisassociateConnectionFromLagInput`](crate::input::DisassociateConnectionFromLagInput)
    pub fn builder() -> crate::input::disassociate_connection_from_lag_input::Builder {
        crate::input::disassociate_connection_from_lag_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DisassociateConnectionFromLag {
    type Output = std::result::Result<
        crate::output::DisassociateConnectionFromLagOutput,
        crate::error::DisassociateConnectionFromLagError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_disassociate_connection_from_lag_error(response)
        } else {
            crate::operation_deser::parse_disassociate_connection_from_lag_response(response)
        }
    }
}

/// Lists the virtual interface failover test history.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListVirtualInterfaceTestHistory {
    _private: (),
}
impl ListVirtualInterfaceTestHistory {
    /// Creates a new builder-style object to manufacture [`ListVirtualInterfaceTestHistoryInput`](crate::input::ListVirtualInterfaceTestHistoryInput)
    pub fn builder() -> crate::input::list_virtual_interface_test_history_input::Builder {
        crate::input::list_virtual_interface_test_history_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListVirtualInterfaceTestHistory {
    type Output = std::result::Result<
        crate::output::ListVirtualInterfaceTestHistoryOutput,
        crate::error::ListVirtualInterfaceTestHistoryError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_virtual_interface_test_history_error(response)
        } else {
            crate::operation_deser::parse_list_virtual_interface_test_history_response(response)
        }
    }
}

/// Starts the virtual interface failover test that verifies your configuration meets your resiliency
/// requirements by placing the BGP peering session in the DOWN state.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct StartBgpFailoverTest {
    _private: (),
}
impl StartBgpFailoverTest {
    /// Creates a new builder-style object to manufacture [`StartBgpFailoverTestInput`](crate::input::StartBgpFailoverTestInput)
    pub fn builder() -> crate::input::start_bgp_failover_test_input::Builder {
        crate::input::start_bgp_failover_test_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for StartBgpFailoverTest {
    type Output = std::result::Result<
        crate::output::StartBgpFailoverTestOutput,
        crate::error::StartBgpFailoverTestError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_start_bgp_failover_test_error(response)
        } else {
            crate::operation_deser::parse_start_bgp_failover_test_response(response)
        }
    }
}

/// Stops the virtual interface failover test.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct StopBgpFailoverTest {
    _private: (),
}
impl StopBgpFailoverTest {
    /// Creates a new builder-style object to manufacture [`StopBgpFailoverTestInput`](crate::input::StopBgpFailoverTestInput)
    pub fn builder() -> crate::input::stop_bgp_failover_test_input::Builder {
        crate::input::stop_bgp_failover_test_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for StopBgpFailoverTest {
    type Output = std::result::Result<
        crate::output::StopBgpFailoverTestOutput,
        crate::error::StopBgpFailoverTestError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_stop_bgp_failover_test_error(response)
        } else {
            crate::operation_deser::parse_stop_bgp_failover_test_response(response)
        }
    }
}

/// Adds the specified tags to the specified AWS Direct Connect resource.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct TagResource {
    _private: (),
}
impl TagResource {
    /// Creates a new builder-style object to manufacture [`TagResourceInput`](crate::input::TagResourceInput)
    pub fn builder() -> crate::input::tag_resource_input::Builder {
        crate::input::tag_resource_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for TagResource {
    type Output = std::result::Result<
        crate::output::TagResourceOutput,
        crate::error::TagResourceError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_tag_resource_error(response)
        } else {
            crate::operation_deser::parse_tag_resource_response(response)
        }
    }
}

/// Removes one or more tags from the specified AWS Direct Connect resource.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UntagResource {
    _private: (),
}
impl UntagResource {
    /// Creates a new builder-style object to manufacture [`UntagResourceInput`](crate::input::UntagResourceInput)
    pub fn builder() -> crate::input::untag_resource_input::Builder {
        crate::input::untag_resource_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UntagResource {
    type Output = std::result::Result<
        crate::output::UntagResourceOutput,
        crate::error::UntagResourceError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_untag_resource_error(response)
        } else {
            crate::operation_deser::parse_untag_resource_response(response)
        }
    }
}

/// Updates the specified attributes of the Direct Connect gateway association.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateDirectConnectGatewayAssociation {
    _private: (),
}
impl UpdateDirectConnectGatewayAssociation {
    /// Creates a new builder-style object to manufacture [`UpdateDirectConnectGatewayAssociationInput`](crate::input::UpdateDirectConnectGatewayAssociationInput)
    pub fn builder() -> crate::input::update_direct_connect_gateway_association_input::Builder {
        crate::input::update_direct_connect_gateway_association_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateDirectConnectGatewayAssociation {
    type Output = std::result::Result<
        crate::output::UpdateDirectConnectGatewayAssociationOutput,
        crate::error::UpdateDirectConnectGatewayAssociationError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_update_direct_connect_gateway_association_error(response)
        } else {
            crate::operation_deser::parse_update_direct_connect_gateway_association_response(response)
        }
    }
}

/// Updates the attributes of the specified link aggregation group (LAG).
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateLag {
    _private: (),
}
impl UpdateLag {
    /// Creates a new builder-style object to manufacture [`UpdateLagInput`](crate::input::UpdateLagInput)
    pub fn builder() -> crate::input::update_lag_input::Builder {
        crate::input::update_lag_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateLag {
    type Output = std::result::Result<
        crate::output::UpdateLagOutput,
        crate::error::UpdateLagError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_update_lag_error(response)
        } else {
            crate::operation_deser::parse_update_lag_response(response)
        }
    }
}

/// Updates the specified attributes of the specified virtual private interface.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateVirtualInterfaceAttributes {
    _private: (),
}
impl UpdateVirtualInterfaceAttributes {
    /// Creates a new builder-style object to manufacture [`UpdateVirtualInterfaceAttributesInput`](crate::input::UpdateVirtualInterfaceAttributesInput)
    pub fn builder() -> crate::input::update_virtual_interface_attributes_input::Builder {
        crate::input::update_virtual_interface_attributes_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateVirtualInterfaceAttributes {
    type Output = std::result::Result<
        crate::output::UpdateVirtualInterfaceAttributesOutput,
        crate::error::UpdateVirtualInterfaceAttributesError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_update_virtual_interface_attributes_error(response)
        } else {
            crate::operation_deser::parse_update_virtual_interface_attributes_response(response)
        }
    }
}
