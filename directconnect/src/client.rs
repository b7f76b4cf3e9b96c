/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[derive(std::fmt::Debug)]
pub(crate) struct Handle {
    client: aws_hyper::Client<aws_hyper::conn::Standard>,
    conf: crate::Config,
}

/// An ergonomic service client for AWS Direct Connect.
///
/// Each operation returns a fluent builder. Calling `send()` on the builder validates the
/// input, dispatches the request and parses the response.
#[derive(std::fmt::Debug, std::clone::Clone)]
pub struct Client {
    handle: std::sync::Arc<Handle>,
}
impl Client {
    /// Creates a client from configuration read from the environment
    pub fn from_env() -> Self {
        Self::from_conf(crate::Config::builder().build())
    }

    pub fn from_conf(conf: crate::Config) -> Self {
        Self::from_conf_conn(conf, aws_hyper::conn::Standard::https())
    }

    pub fn from_conf_conn(conf: crate::Config, conn: aws_hyper::conn::Standard) -> Self {
        let client = aws_hyper::Client::new(conn);
        Self {
            handle: std::sync::Arc::new(Handle { client, conf }),
        }
    }

    pub fn conf(&self) -> &crate::Config {
        &self.handle.conf
    }

    pub fn client(&self) -> &aws_hyper::Client<aws_hyper::conn::Standard> {
        &self.handle.client
    }

    pub fn accept_direct_connect_gateway_association_proposal(&self) -> fluent_builders::AcceptDirectConnectGatewayAssociationProposal {
        fluent_builders::AcceptDirectConnectGatewayAssociationProposal::new(self.handle.clone())
    }

    #[deprecated(note = "use `allocate_hosted_connection` instead")]
    pub fn allocate_connection_on_interconnect(&self) -> fluent_builders::AllocateConnectionOnInterconnect {
        fluent_builders::AllocateConnectionOnInterconnect::new(self.handle.clone())
    }

    pub fn allocate_hosted_connection(&self) -> fluent_builders::AllocateHostedConnection {
        fluent_builders::AllocateHostedConnection::new(self.handle.clone())
    }

    pub fn allocate_private_virtual_interface(&self) -> fluent_builders::AllocatePrivateVirtualInterface {
        fluent_builders::AllocatePrivateVirtualInterface::new(self.handle.clone())
    }

    pub fn allocate_public_virtual_interface(&self) -> fluent_builders::AllocatePublicVirtualInterface {
        fluent_builders::AllocatePublicVirtualInterface::new(self.handle.clone())
    }

    pub fn allocate_transit_virtual_interface(&self) -> fluent_builders::AllocateTransitVirtualInterface {
        fluent_builders::AllocateTransitVirtualInterface::new(self.handle.clone())
    }

    pub fn associate_connection_with_lag(&self) -> fluent_builders::AssociateConnectionWithLag {
        fluent_builders::AssociateConnectionWithLag::new(self.handle.clone())
    }

    pub fn associate_hosted_connection(&self) -> fluent_builders::AssociateHostedConnection {
        fluent_builders::AssociateHostedConnection::new(self.handle.clone())
    }

    pub fn associate_virtual_interface(&self) -> fluent_builders::AssociateVirtualInterface {
        fluent_builders::AssociateVirtualInterface::new(self.handle.clone())
    }

    pub fn confirm_connection(&self) -> fluent_builders::ConfirmConnection {
        fluent_builders::ConfirmConnection::new(self.handle.clone())
    }

    pub fn confirm_private_virtual_interface(&self) -> fluent_builders::ConfirmPrivateVirtualInterface {
        fluent_builders::ConfirmPrivateVirtualInterface::new(self.handle.clone())
    }

    pub fn confirm_public_virtual_interface(&self) -> fluent_builders::ConfirmPublicVirtualInterface {
        fluent_builders::ConfirmPublicVirtualInterface::new(self.handle.clone())
    }

    pub fn confirm_transit_virtual_interface(&self) -> fluent_builders::ConfirmTransitVirtualInterface {
        fluent_builders::ConfirmTransitVirtualInterface::new(self.handle.clone())
    }

    pub fn create_bgp_peer(&self) -> fluent_builders::CreateBgpPeer {
        fluent_builders::CreateBgpPeer::new(self.handle.clone())
    }

    pub fn create_connection(&self) -> fluent_builders::CreateConnection {
        fluent_builders::CreateConnection::new(self.handle.clone())
    }

    pub fn create_direct_connect_gateway(&self) -> fluent_builders::CreateDirectConnectGateway {
        fluent_builders::CreateDirectConnectGateway::new(self.handle.clone())
    }

    pub fn create_direct_connect_gateway_association(&self) -> fluent_builders::CreateDirectConnectGatewayAssociation {
        fluent_builders::CreateDirectConnectGatewayAssociation::new(self.handle.clone())
    }

    pub fn create_direct_connect_gateway_association_proposal(&self) -> fluent_builders::CreateDirectConnectGatewayAssociationProposal {
        fluent_builders::CreateDirectConnectGatewayAssociationProposal::new(self.handle.clone())
    }

    pub fn create_interconnect(&self) -> fluent_builders::CreateInterconnect {
        fluent_builders::CreateInterconnect::new(self.handle.clone())
    }

    pub fn create_lag(&self) -> fluent_builders::CreateLag {
        fluent_builders::CreateLag::new(self.handle.clone())
    }

    pub fn create_private_virtual_interface(&self) -> fluent_builders::CreatePrivateVirtualInterface {
        fluent_builders::CreatePrivateVirtualInterface::new(self.handle.clone())
    }

    pub fn create_public_virtual_interface(&self) -> fluent_builders::CreatePublicVirtualInterface {
        fluent_builders::CreatePublicVirtualInterface::new(self.handle.clone())
    }

    pub fn create_transit_virtual_interface(&self) -> fluent_builders::CreateTransitVirtualInterface {
        fluent_builders::CreateTransitVirtualInterface::new(self.handle.clone())
    }

    pub fn delete_bgp_peer(&self) -> fluent_builders::DeleteBgpPeer {
        fluent_builders::DeleteBgpPeer::new(self.handle.clone())
    }

    pub fn delete_connection(&self) -> fluent_builders::DeleteConnection {
        fluent_builders::DeleteConnection::new(self.handle.clone())
    }

    pub fn delete_direct_connect_gateway(&self) -> fluent_builders::DeleteDirectConnectGateway {
        fluent_builders::DeleteDirectConnectGateway::new(self.handle.clone())
    }

    pub fn delete_direct_connect_gateway_association(&self) -> fluent_builders::DeleteDirectConnectGatewayAssociation {
        fluent_builders::DeleteDirectConnectGatewayAssociation::new(self.handle.clone())
    }

    pub fn delete_direct_connect_gateway_association_proposal(&self) -> fluent_builders::DeleteDirectConnectGatewayAssociationProposal {
        fluent_builders::DeleteDirectConnectGatewayAssociationProposal::new(self.handle.clone())
    }

    pub fn delete_interconnect(&self) -> fluent_builders::DeleteInterconnect {
        fluent_builders::DeleteInterconnect::new(self.handle.clone())
    }

    pub fn delete_lag(&self) -> fluent_builders::DeleteLag {
        fluent_builders::DeleteLag::new(self.handle.clone())
    }

    pub fn delete_virtual_interface(&self) -> fluent_builders::DeleteVirtualInterface {
        fluent_builders::DeleteVirtualInterface::new(self.handle.clone())
    }

    #[deprecated(note = "use `describe_loa` instead")]
    pub fn describe_connection_loa(&self) -> fluent_builders::DescribeConnectionLoa {
        fluent_builders::DescribeConnectionLoa::new(self.handle.clone())
    }

    pub fn describe_connections(&self) -> fluent_builders::DescribeConnections {
        fluent_builders::DescribeConnections::new(self.handle.clone())
    }

    #[deprecated(note = "use `describe_hosted_connections` instead")]
    pub fn describe_connections_on_interconnect(&self) -> fluent_builders::DescribeConnectionsOnInterconnect {
        fluent_builders::DescribeConnectionsOnInterconnect::new(self.handle.clone())
    }

    pub fn describe_direct_connect_gateway_association_proposals(&self) -> fluent_builders::DescribeDirectConnectGatewayAssociationProposals {
        fluent_builders::DescribeDirectConnectGatewayAssociationProposals::new(self.handle.clone())
    }

    pub fn describe_direct_connect_gateway_associations(&self) -> fluent_builders::DescribeDirectConnectGatewayAssociations {
        fluent_builders::DescribeDirectConnectGatewayAssociations::new(self.handle.clone())
    }

    pub fn describe_direct_connect_gateway_attachments(&self) -> fluent_builders::DescribeDirectConnectGatewayAttachments {
        fluent_builders::DescribeDirectConnectGatewayAttachments::new(self.handle.clone())
    }

    pub fn describe_direct_connect_gateways(&self) -> fluent_builders::DescribeDirectConnectGateways {
        fluent_builders::DescribeDirectConnectGateways::new(self.handle.clone())
    }

    pub fn describe_hosted_connections(&self) -> fluent_builders::DescribeHostedConnections {
        fluent_builders::DescribeHostedConnections::new(self.handle.clone())
    }

    #[deprecated(note = "use `describe_loa` instead")]
    pub fn describe_interconnect_loa(&self) -> fluent_builders::DescribeInterconnectLoa {
        fluent_builders::DescribeInterconnectLoa::new(self.handle.clone())
    }

    pub fn describe_interconnects(&self) -> fluent_builders::DescribeInterconnects {
        fluent_builders::DescribeInterconnects::new(self.handle.clone())
    }

    pub fn describe_lags(&self) -> fluent_builders::DescribeLags {
        fluent_builders::DescribeLags::new(self.handle.clone())
    }

    pub fn describe_loa(&self) -> fluent_builders::DescribeLoa {
        fluent_builders::DescribeLoa::new(self.handle.clone())
    }

    pub fn describe_locations(&self) -> fluent_builders::DescribeLocations {
        fluent_builders::DescribeLocations::new(self.handle.clone())
    }

    pub fn describe_tags(&self) -> fluent_builders::DescribeTags {
        fluent_builders::DescribeTags::new(self.handle.clone())
    }

    pub fn describe_virtual_gateways(&self) -> fluent_builders::DescribeVirtualGateways {
        fluent_builders::DescribeVirtualGateways::new(self.handle.clone())
    }

    pub fn describe_virtual_interfaces(&self) -> fluent_builders::DescribeVirtualInterfaces {
        fluent_builders::DescribeVirtualInterfaces::new(self.handle.clone())
    }

    pub fn disassociate_connection_from_lag(&self) -> fluent_builders::DisassociateConnectionFromLag {
        fluent_builders::DisassociateConnectionFromLag::new(self.handle.clone())
    }

    pub fn list_virtual_interface_test_history(&self) -> fluent_builders::ListVirtualInterfaceTestHistory {
        fluent_builders::ListVirtualInterfaceTestHistory::new(self.handle.clone())
    }

    pub fn start_bgp_failover_test(&self) -> fluent_builders::StartBgpFailoverTest {
        fluent_builders::StartBgpFailoverTest::new(self.handle.clone())
    }

    pub fn stop_bgp_failover_test(&self) -> fluent_builders::StopBgpFailoverTest {
        fluent_builders::StopBgpFailoverTest::new(self.handle.clone())
    }

    pub fn tag_resource(&self) -> fluent_builders::TagResource {
        fluent_builders::TagResource::new(self.handle.clone())
    }

    pub fn untag_resource(&self) -> fluent_builders::UntagResource {
        fluent_builders::UntagResource::new(self.handle.clone())
    }

    pub fn update_direct_connect_gateway_association(&self) -> fluent_builders::UpdateDirectConnectGatewayAssociation {
        fluent_builders::UpdateDirectConnectGatewayAssociation::new(self.handle.clone())
    }

    pub fn update_lag(&self) -> fluent_builders::UpdateLag {
        fluent_builders::UpdateLag::new(self.handle.clone())
    }

    pub fn update_virtual_interface_attributes(&self) -> fluent_builders::UpdateVirtualInterfaceAttributes {
        fluent_builders::UpdateVirtualInterfaceAttributes::new(self.handle.clone())
    }
}
pub mod fluent_builders {
    /// Accepts a proposal request to attach a virtual private gateway or transit gateway to a Direct Connect gateway.
    #[derive(std::fmt::Debug)]
    pub struct AcceptDirectConnectGatewayAssociationProposal {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::accept_direct_connect_gateway_association_proposal_input::Builder,
    }
    impl AcceptDirectConnectGatewayAssociationProposal {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::accept_direct_connect_gateway_association_proposal_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::AcceptDirectConnectGatewayAssociationProposalOutput,
            aws_hyper::SdkError<crate::error::AcceptDirectConnectGatewayAssociationProposalError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn direct_connect_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.direct_connect_gateway_id(input);
            self
        }
        pub fn set_direct_connect_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_direct_connect_gateway_id(input);
            self
        }
        pub fn proposal_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.proposal_id(input);
            self
        }
        pub fn set_proposal_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_proposal_id(input);
            self
        }
        pub fn associated_gateway_owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.associated_gateway_owner_account(input);
            self
        }
        pub fn set_associated_gateway_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_associated_gateway_owner_account(input);
            self
        }
        /// Appends an item to `override_allowed_prefixes_to_direct_connect_gateway`.
        pub fn override_allowed_prefixes_to_direct_connect_gateway(mut self, input: impl Into<crate::model::RouteFilterPrefix>) -> Self {
            self.inner = self.inner.override_allowed_prefixes_to_direct_connect_gateway(input);
            self
        }
        pub fn set_override_allowed_prefixes_to_direct_connect_gateway(mut self, input: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>) -> Self {
            self.inner = self.inner.set_override_allowed_prefixes_to_direct_connect_gateway(input);
            self
        }
    }
    /// Creates a hosted connection on the specified interconnect.
    #[derive(std::fmt::Debug)]
    pub struct AllocateConnectionOnInterconnect {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::allocate_connection_on_interconnect_input::Builder,
    }
    impl AllocateConnectionOnInterconnect {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::allocate_connection_on_interconnect_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::AllocateConnectionOnInterconnectOutput,
            aws_hyper::SdkError<crate::error::AllocateConnectionOnInterconnectError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn bandwidth(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.bandwidth(input);
            self
        }
        pub fn set_bandwidth(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_bandwidth(input);
            self
        }
        pub fn connection_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_name(input);
            self
        }
        pub fn set_connection_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_name(input);
            self
        }
        pub fn owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.owner_account(input);
            self
        }
        pub fn set_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_owner_account(input);
            self
        }
        pub fn interconnect_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.interconnect_id(input);
            self
        }
        pub fn set_interconnect_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_interconnect_id(input);
            self
        }
        pub fn vlan(mut self, input: i32) -> Self {
            self.inner = self.inner.vlan(input);
            self
        }
        pub fn set_vlan(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_vlan(input);
            self
        }
    }
    /// Creates a hosted connection on the specified interconnect or a link aggregation group (LAG) of interconnects.
    #[derive(std::fmt::Debug)]
    pub struct AllocateHostedConnection {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::allocate_hosted_connection_input::Builder,
    }
    impl AllocateHostedConnection {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::allocate_hosted_connection_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::AllocateHostedConnectionOutput,
            aws_hyper::SdkError<crate::error::AllocateHostedConnectionError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_id(input);
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_id(input);
            self
        }
        pub fn owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.owner_account(input);
            self
        }
        pub fn set_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_owner_account(input);
            self
        }
        pub fn bandwidth(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.bandwidth(input);
            self
        }
        pub fn set_bandwidth(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_bandwidth(input);
            self
        }
        pub fn connection_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_name(input);
            self
        }
        pub fn set_connection_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_name(input);
            self
        }
        pub fn vlan(mut self, input: i32) -> Self {
            self.inner = self.inner.vlan(input);
            self
        }
        pub fn set_vlan(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_vlan(input);
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
    }
    /// Provisions a private virtual interface to be owned by the specified AWS account.
    #[derive(std::fmt::Debug)]
    pub struct AllocatePrivateVirtualInterface {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::allocate_private_virtual_interface_input::Builder,
    }
    impl AllocatePrivateVirtualInterface {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::allocate_private_virtual_interface_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::AllocatePrivateVirtualInterfaceOutput,
            aws_hyper::SdkError<crate::error::AllocatePrivateVirtualInterfaceError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_id(input);
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_id(input);
            self
        }
        pub fn owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.owner_account(input);
            self
        }
        pub fn set_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_owner_account(input);
            self
        }
        pub fn new_private_virtual_interface_allocation(mut self, input: crate::model::NewPrivateVirtualInterfaceAllocation) -> Self {
            self.inner = self.inner.new_private_virtual_interface_allocation(input);
            self
        }
        pub fn set_new_private_virtual_interface_allocation(mut self, input: std::option::Option<crate::model::NewPrivateVirtualInterfaceAllocation>) -> Self {
            self.inner = self.inner.set_new_private_virtual_interface_allocation(input);
            self
        }
    }
    /// Provisions a public virtual interface to be owned by the specified AWS account.
    #[derive(std::fmt::Debug)]
    pub struct AllocatePublicVirtualInterface {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::allocate_public_virtual_interface_input::Builder,
    }
    impl AllocatePublicVirtualInterface {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::allocate_public_virtual_interface_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::AllocatePublicVirtualInterfaceOutput,
            aws_hyper::SdkError<crate::error::AllocatePublicVirtualInterfaceError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_id(input);
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_id(input);
            self
        }
        pub fn owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.owner_account(input);
            self
        }
        pub fn set_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_owner_account(input);
            self
        }
        pub fn new_public_virtual_interface_allocation(mut self, input: crate::model::NewPublicVirtualInterfaceAllocation) -> Self {
            self.inner = self.inner.new_public_virtual_interface_allocation(input);
            self
        }
        pub fn set_new_public_virtual_interface_allocation(mut self, input: std::option::Option<crate::model::NewPublicVirtualInterfaceAllocation>) -> Self {
            self.inner = self.inner.set_new_public_virtual_interface_allocation(input);
            self
        }
    }
    /// Provisions a transit virtual interface to be owned by the specified AWS account.
    #[derive(std::fmt::Debug)]
    pub struct AllocateTransitVirtualInterface {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::allocate_transit_virtual_interface_input::Builder,
    }
    impl AllocateTransitVirtualInterface {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::allocate_transit_virtual_interface_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::AllocateTransitVirtualInterfaceOutput,
            aws_hyper::SdkError<crate::error::AllocateTransitVirtualInterfaceError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_id(input);
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_id(input);
            self
        }
        pub fn owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.owner_account(input);
            self
        }
        pub fn set_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_owner_account(input);
            self
        }
        pub fn new_transit_virtual_interface_allocation(mut self, input: crate::model::NewTransitVirtualInterfaceAllocation) -> Self {
            self.inner = self.inner.new_transit_virtual_interface_allocation(input);
            self
        }
        pub fn set_new_transit_virtual_interface_allocation(mut self, input: std::option::Option<crate::model::NewTransitVirtualInterfaceAllocation>) -> Self {
            self.inner = self.inner.set_new_transit_virtual_interface_allocation(input);
            self
        }
    }
    /// Associates an existing connection with a link aggregation group (LAG).
    #[derive(std::fmt::Debug)]
    pub struct AssociateConnectionWithLag {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::associate_connection_with_lag_input::Builder,
    }
    impl AssociateConnectionWithLag {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::associate_connection_with_lag_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::AssociateConnectionWithLagOutput,
            aws_hyper::SdkError<crate::error::AssociateConnectionWithLagError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_id(input);
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_id(input);
            self
        }
        pub fn lag_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.lag_id(input);
            self
        }
        pub fn set_lag_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_lag_id(input);
            self
        }
    }
    /// Associates a hosted connection and its virtual interfaces with a link aggregation group (LAG) or interconnect.
    #[derive(std::fmt::Debug)]
    pub struct AssociateHostedConnection {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::associate_hosted_connection_input::Builder,
    }
    impl AssociateHostedConnection {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::associate_hosted_connection_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::AssociateHostedConnectionOutput,
            aws_hyper::SdkError<crate::error::AssociateHostedConnectionError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_id(input);
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_id(input);
            self
        }
        pub fn parent_connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.parent_connection_id(input);
            self
        }
        pub fn set_parent_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_parent_connection_id(input);
            self
        }
    }
    /// Associates a virtual interface with a specified link aggregation group (LAG) or connection.
    #[derive(std::fmt::Debug)]
    pub struct AssociateVirtualInterface {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::associate_virtual_interface_input::Builder,
    }
    impl AssociateVirtualInterface {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::associate_virtual_interface_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::AssociateVirtualInterfaceOutput,
            aws_hyper::SdkError<crate::error::AssociateVirtualInterfaceError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.virtual_interface_id(input);
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_virtual_interface_id(input);
            self
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_id(input);
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_id(input);
            self
        }
    }
    /// Confirms the creation of the specified hosted connection on an interconnect.
    #[derive(std::fmt::Debug)]
    pub struct ConfirmConnection {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::confirm_connection_input::Builder,
    }
    impl ConfirmConnection {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::confirm_connection_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ConfirmConnectionOutput,
            aws_hyper::SdkError<crate::error::ConfirmConnectionError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_id(input);
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_id(input);
            self
        }
    }
    /// Accepts ownership of a private virtual interface created by another AWS account.
    #[derive(std::fmt::Debug)]
    pub struct ConfirmPrivateVirtualInterface {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::confirm_private_virtual_interface_input::Builder,
    }
    impl ConfirmPrivateVirtualInterface {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::confirm_private_virtual_interface_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ConfirmPrivateVirtualInterfaceOutput,
            aws_hyper::SdkError<crate::error::ConfirmPrivateVirtualInterfaceError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.virtual_interface_id(input);
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_virtual_interface_id(input);
            self
        }
        pub fn virtual_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.virtual_gateway_id(input);
            self
        }
        pub fn set_virtual_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_virtual_gateway_id(input);
            self
        }
        pub fn direct_connect_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.direct_connect_gateway_id(input);
            self
        }
        pub fn set_direct_connect_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_direct_connect_gateway_id(input);
            self
        }
    }
    /// Accepts ownership of a public virtual interface created by another AWS account.
    #[derive(std::fmt::Debug)]
    pub struct ConfirmPublicVirtualInterface {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::confirm_public_virtual_interface_input::Builder,
    }
    impl ConfirmPublicVirtualInterface {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::confirm_public_virtual_interface_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ConfirmPublicVirtualInterfaceOutput,
            aws_hyper::SdkError<crate::error::ConfirmPublicVirtualInterfaceError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.virtual_interface_id(input);
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_virtual_interface_id(input);
            self
        }
    }
    /// Accepts ownership of a transit virtual interface created by another AWS account.
    #[derive(std::fmt::Debug)]
    pub struct ConfirmTransitVirtualInterface {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::confirm_transit_virtual_interface_input::Builder,
    }
    impl ConfirmTransitVirtualInterface {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::confirm_transit_virtual_interface_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ConfirmTransitVirtualInterfaceOutput,
            aws_hyper::SdkError<crate::error::ConfirmTransitVirtualInterfaceError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.virtual_interface_id(input);
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_virtual_interface_id(input);
            self
        }
        pub fn direct_connect_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.direct_connect_gateway_id(input);
            self
        }
        pub fn set_direct_connect_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_direct_connect_gateway_id(input);
            self
        }
    }
    /// Creates a BGP peer on the specified virtual interface.
    #[derive(std::fmt::Debug)]
    pub struct CreateBgpPeer {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_bgp_peer_input::Builder,
    }
    impl CreateBgpPeer {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::create_bgp_peer_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateBgpPeerOutput,
            aws_hyper::SdkError<crate::error::CreateBgpPeerError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.virtual_interface_id(input);
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_virtual_interface_id(input);
            self
        }
        pub fn new_bgp_peer(mut self, input: crate::model::NewBgpPeer) -> Self {
            self.inner = self.inner.new_bgp_peer(input);
            self
        }
        pub fn set_new_bgp_peer(mut self, input: std::option::Option<crate::model::NewBgpPeer>) -> Self {
            self.inner = self.inner.set_new_bgp_peer(input);
            self
        }
    }
    /// Creates a connection between a customer network and a specific AWS Direct Connect location.
    #[derive(std::fmt::Debug)]
    pub struct CreateConnection {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_connection_input::Builder,
    }
    impl CreateConnection {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::create_connection_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateConnectionOutput,
            aws_hyper::SdkError<crate::error::CreateConnectionError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn location(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.location(input);
            self
        }
        pub fn set_location(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_location(input);
            self
        }
        /// The bandwidth of the connection.
        pub fn bandwidth(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.bandwidth(input);
            self
        }
        pub fn set_bandwidth(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_bandwidth(input);
            self
        }
        pub fn connection_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_name(input);
            self
        }
        pub fn set_connection_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_name(input);
            self
        }
        pub fn lag_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.lag_id(input);
            self
        }
        pub fn set_lag_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_lag_id(input);
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
        pub fn provider_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.provider_name(input);
            self
        }
        pub fn set_provider_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_provider_name(input);
            self
        }
    }
    /// Creates a Direct Connect gateway.
    #[derive(std::fmt::Debug)]
    pub struct CreateDirectConnectGateway {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_direct_connect_gateway_input::Builder,
    }
    impl CreateDirectConnectGateway {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::create_direct_connect_gateway_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateDirectConnectGatewayOutput,
            aws_hyper::SdkError<crate::error::CreateDirectConnectGatewayError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn direct_connect_gateway_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.direct_connect_gateway_name(input);
            self
        }
        pub fn set_direct_connect_gateway_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_direct_connect_gateway_name(input);
            self
        }
        pub fn amazon_side_asn(mut self, input: i64) -> Self {
            self.inner = self.inner.amazon_side_asn(input);
            self
        }
        pub fn set_amazon_side_asn(mut self, input: std::option::Option<i64>) -> Self {
            self.inner = self.inner.set_amazon_side_asn(input);
            self
        }
    }
    /// Creates an association between a Direct Connect gateway and a virtual private gateway.
    #[derive(std::fmt::Debug)]
    pub struct CreateDirectConnectGatewayAssociation {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_direct_connect_gateway_association_input::Builder,
    }
    impl CreateDirectConnectGatewayAssociation {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::create_direct_connect_gateway_association_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateDirectConnectGatewayAssociationOutput,
            aws_hyper::SdkError<crate::error::CreateDirectConnectGatewayAssociationError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn direct_connect_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.direct_connect_gateway_id(input);
            self
        }
        pub fn set_direct_connect_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_direct_connect_gateway_id(input);
            self
        }
        pub fn gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.gateway_id(input);
            self
        }
        pub fn set_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_gateway_id(input);
            self
        }
        /// Appends an item to `add_allowed_prefixes_to_direct_connect_gateway`.
        pub fn add_allowed_prefixes_to_direct_connect_gateway(mut self, input: impl Into<crate::model::RouteFilterPrefix>) -> Self {
            self.inner = self.inner.add_allowed_prefixes_to_direct_connect_gateway(input);
            self
        }
        pub fn set_add_allowed_prefixes_to_direct_connect_gateway(mut self, input: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>) -> Self {
            self.inner = self.inner.set_add_allowed_prefixes_to_direct_connect_gateway(input);
            self
        }
        pub fn virtual_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.virtual_gateway_id(input);
            self
        }
        pub fn set_virtual_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_virtual_gateway_id(input);
            self
        }
    }
    /// Creates a proposal to associate the specified virtual private gateway or transit gateway with the
    /// specified Direct Connect gateway.
    #[derive(std::fmt::Debug)]
    pub struct CreateDirectConnectGatewayAssociationProposal {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_direct_connect_gateway_association_proposal_input::Builder,
    }
    impl CreateDirectConnectGatewayAssociationProposal {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::create_direct_connect_gateway_association_proposal_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateDirectConnectGatewayAssociationProposalOutput,
            aws_hyper::SdkError<crate::error::CreateDirectConnectGatewayAssociationProposalError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn direct_connect_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.direct_connect_gateway_id(input);
            self
        }
        pub fn set_direct_connect_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_direct_connect_gateway_id(input);
            self
        }
        pub fn direct_connect_gateway_owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.direct_connect_gateway_owner_account(input);
            self
        }
        pub fn set_direct_connect_gateway_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_direct_connect_gateway_owner_account(input);
            self
        }
        pub fn gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.gateway_id(input);
            self
        }
        pub fn set_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_gateway_id(input);
            self
        }
        /// Appends an item to `add_allowed_prefixes_to_direct_connect_gateway`.
        pub fn add_allowed_prefixes_to_direct_connect_gateway(mut self, input: impl Into<crate::model::RouteFilterPrefix>) -> Self {
            self.inner = self.inner.add_allowed_prefixes_to_direct_connect_gateway(input);
            self
        }
        pub fn set_add_allowed_prefixes_to_direct_connect_gateway(mut self, input: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>) -> Self {
            self.inner = self.inner.set_add_allowed_prefixes_to_direct_connect_gateway(input);
            self
        }
        /// Appends an item to `remove_allowed_prefixes_to_direct_connect_gateway`.
        pub fn remove_allowed_prefixes_to_direct_connect_gateway(mut self, input: impl Into<crate::model::RouteFilterPrefix>) -> Self {
            self.inner = self.inner.remove_allowed_prefixes_to_direct_connect_gateway(input);
            self
        }
        pub fn set_remove_allowed_prefixes_to_direct_connect_gateway(mut self, input: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>) -> Self {
            self.inner = self.inner.set_remove_allowed_prefixes_to_direct_connect_gateway(input);
            self
        }
    }
    /// Creates an interconnect between an AWS Direct Connect Partner's network and a specific location.
    #[derive(std::fmt::Debug)]
    pub struct CreateInterconnect {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_interconnect_input::Builder,
    }
    impl CreateInterconnect {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::create_interconnect_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateInterconnectOutput,
            aws_hyper::SdkError<crate::error::CreateInterconnectError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn interconnect_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.interconnect_name(input);
            self
        }
        pub fn set_interconnect_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_interconnect_name(input);
            self
        }
        pub fn bandwidth(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.bandwidth(input);
            self
        }
        pub fn set_bandwidth(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_bandwidth(input);
            self
        }
        pub fn location(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.location(input);
            self
        }
        pub fn set_location(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_location(input);
            self
        }
        pub fn lag_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.lag_id(input);
            self
        }
        pub fn set_lag_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_lag_id(input);
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
        pub fn provider_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.provider_name(input);
            self
        }
        pub fn set_provider_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_provider_name(input);
            self
        }
    }
    /// Creates a link aggregation group (LAG) with the specified number of bundled physical dedicated connections.
    #[derive(std::fmt::Debug)]
    pub struct CreateLag {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_lag_input::Builder,
    }
    impl CreateLag {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::create_lag_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateLagOutput,
            aws_hyper::SdkError<crate::error::CreateLagError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn number_of_connections(mut self, input: i32) -> Self {
            self.inner = self.inner.number_of_connections(input);
            self
        }
        pub fn set_number_of_connections(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_number_of_connections(input);
            self
        }
        pub fn location(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.location(input);
            self
        }
        pub fn set_location(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_location(input);
            self
        }
        pub fn connections_bandwidth(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connections_bandwidth(input);
            self
        }
        pub fn set_connections_bandwidth(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connections_bandwidth(input);
            self
        }
        pub fn lag_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.lag_name(input);
            self
        }
        pub fn set_lag_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_lag_name(input);
            self
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_id(input);
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_id(input);
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
        /// Appends an item to `child_connection_tags`.
        pub fn child_connection_tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.child_connection_tags(input);
            self
        }
        pub fn set_child_connection_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_child_connection_tags(input);
            self
        }
        pub fn provider_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.provider_name(input);
            self
        }
        pub fn set_provider_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_provider_name(input);
            self
        }
    }
    /// Creates a private virtual interface.
    #[derive(std::fmt::Debug)]
    pub struct CreatePrivateVirtualInterface {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_private_virtual_interface_input::Builder,
    }
    impl CreatePrivateVirtualInterface {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::create_private_virtual_interface_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreatePrivateVirtualInterfaceOutput,
            aws_hyper::SdkError<crate::error::CreatePrivateVirtualInterfaceError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_id(input);
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_id(input);
            self
        }
        pub fn new_private_virtual_interface(mut self, input: crate::model::NewPrivateVirtualInterface) -> Self {
            self.inner = self.inner.new_private_virtual_interface(input);
            self
        }
        pub fn set_new_private_virtual_interface(mut self, input: std::option::Option<crate::model::NewPrivateVirtualInterface>) -> Self {
            self.inner = self.inner.set_new_private_virtual_interface(input);
            self
        }
    }
    /// Creates a public virtual interface.
    #[derive(std::fmt::Debug)]
    pub struct CreatePublicVirtualInterface {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_public_virtual_interface_input::Builder,
    }
    impl CreatePublicVirtualInterface {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::create_public_virtual_interface_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreatePublicVirtualInterfaceOutput,
            aws_hyper::SdkError<crate::error::CreatePublicVirtualInterfaceError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_id(input);
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_id(input);
            self
        }
        pub fn new_public_virtual_interface(mut self, input: crate::model::NewPublicVirtualInterface) -> Self {
            self.inner = self.inner.new_public_virtual_interface(input);
            self
        }
        pub fn set_new_public_virtual_interface(mut self, input: std::option::Option<crate::model::NewPublicVirtualInterface>) -> Self {
            self.inner = self.inner.set_new_public_virtual_interface(input);
            self
        }
    }
    /// Creates a transit virtual interface.
    #[derive(std::fmt::Debug)]
    pub struct CreateTransitVirtualInterface {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_transit_virtual_interface_input::Builder,
    }
    impl CreateTransitVirtualInterface {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::create_transit_virtual_interface_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateTransitVirtualInterfaceOutput,
            aws_hyper::SdkError<crate::error::CreateTransitVirtualInterfaceError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_id(input);
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_id(input);
            self
        }
        pub fn new_transit_virtual_interface(mut self, input: crate::model::NewTransitVirtualInterface) -> Self {
            self.inner = self.inner.new_transit_virtual_interface(input);
            self
        }
        pub fn set_new_transit_virtual_interface(mut self, input: std::option::Option<crate::model::NewTransitVirtualInterface>) -> Self {
            self.inner = self.inner.set_new_transit_virtual_interface(input);
            self
        }
    }
    /// Deletes the specified BGP peer on the specified virtual interface.
    #[derive(std::fmt::Debug)]
    pub struct DeleteBgpPeer {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_bgp_peer_input::Builder,
    }
    impl DeleteBgpPeer {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::delete_bgp_peer_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteBgpPeerOutput,
            aws_hyper::SdkError<crate::error::DeleteBgpPeerError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.virtual_interface_id(input);
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_virtual_interface_id(input);
            self
        }
        pub fn asn(mut self, input: i32) -> Self {
            self.inner = self.inner.asn(input);
            self
        }
        pub fn set_asn(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_asn(input);
            self
        }
        pub fn customer_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.customer_address(input);
            self
        }
        pub fn set_customer_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_customer_address(input);
            self
        }
        pub fn bgp_peer_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.bgp_peer_id(input);
            self
        }
        pub fn set_bgp_peer_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_bgp_peer_id(input);
            self
        }
    }
    /// Deletes the specified connection.
    #[derive(std::fmt::Debug)]
    pub struct DeleteConnection {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_connection_input::Builder,
    }
    impl DeleteConnection {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::delete_connection_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteConnectionOutput,
            aws_hyper::SdkError<crate::error::DeleteConnectionError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_id(input);
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_id(input);
            self
        }
    }
    /// Deletes the specified Direct Connect gateway.
    #[derive(std::fmt::Debug)]
    pub struct DeleteDirectConnectGateway {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_direct_connect_gateway_input::Builder,
    }
    impl DeleteDirectConnectGateway {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::delete_direct_connect_gateway_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteDirectConnectGatewayOutput,
            aws_hyper::SdkError<crate::error::DeleteDirectConnectGatewayError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn direct_connect_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.direct_connect_gateway_id(input);
            self
        }
        pub fn set_direct_connect_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_direct_connect_gateway_id(input);
            self
        }
    }
    /// Deletes the association between the specified Direct Connect gateway and virtual private gateway.
    #[derive(std::fmt::Debug)]
    pub struct DeleteDirectConnectGatewayAssociation {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_direct_connect_gateway_association_input::Builder,
    }
    impl DeleteDirectConnectGatewayAssociation {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::delete_direct_connect_gateway_association_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteDirectConnectGatewayAssociationOutput,
            aws_hyper::SdkError<crate::error::DeleteDirectConnectGatewayAssociationError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn association_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.association_id(input);
            self
        }
        pub fn set_association_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_association_id(input);
            self
        }
        pub fn direct_connect_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.direct_connect_gateway_id(input);
            self
        }
        pub fn set_direct_connect_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_direct_connect_gateway_id(input);
            self
        }
        pub fn virtual_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.virtual_gateway_id(input);
            self
        }
        pub fn set_virtual_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_virtual_gateway_id(input);
            self
        }
    }
    /// Deletes the association proposal request between the specified Direct Connect gateway and gateway.
    #[derive(std::fmt::Debug)]
    pub struct DeleteDirectConnectGatewayAssociationProposal {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_direct_connect_gateway_association_proposal_input::Builder,
    }
    impl DeleteDirectConnectGatewayAssociationProposal {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::delete_direct_connect_gateway_association_proposal_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteDirectConnectGatewayAssociationProposalOutput,
            aws_hyper::SdkError<crate::error::DeleteDirectConnectGatewayAssociationProposalError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn proposal_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.proposal_id(input);
            self
        }
        pub fn set_proposal_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_proposal_id(input);
            self
        }
    }
    /// Deletes the specified interconnect.
    #[derive(std::fmt::Debug)]
    pub struct DeleteInterconnect {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_interconnect_input::Builder,
    }
    impl DeleteInterconnect {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::delete_interconnect_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteInterconnectOutput,
            aws_hyper::SdkError<crate::error::DeleteInterconnectError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn interconnect_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.interconnect_id(input);
            self
        }
        pub fn set_interconnect_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_interconnect_id(input);
            self
        }
    }
    /// Deletes the specified link aggregation group (LAG).
    #[derive(std::fmt::Debug)]
    pub struct DeleteLag {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_lag_input::Builder,
    }
    impl DeleteLag {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::delete_lag_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteLagOutput,
            aws_hyper::SdkError<crate::error::DeleteLagError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn lag_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.lag_id(input);
            self
        }
        pub fn set_lag_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_lag_id(input);
            self
        }
    }
    /// Deletes a virtual interface.
    #[derive(std::fmt::Debug)]
    pub struct DeleteVirtualInterface {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_virtual_interface_input::Builder,
    }
    impl DeleteVirtualInterface {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::delete_virtual_interface_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteVirtualInterfaceOutput,
            aws_hyper::SdkError<crate::error::DeleteVirtualInterfaceError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.virtual_interface_id(input);
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_virtual_interface_id(input);
            self
        }
    }
    /// Gets the LOA-CFA for a connection.
    #[derive(std::fmt::Debug)]
    pub struct DescribeConnectionLoa {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_connection_loa_input::Builder,
    }
    impl DescribeConnectionLoa {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::describe_connection_loa_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeConnectionLoaOutput,
            aws_hyper::SdkError<crate::error::DescribeConnectionLoaError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_id(input);
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_id(input);
            self
        }
        pub fn provider_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.provider_name(input);
            self
        }
        pub fn set_provider_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_provider_name(input);
            self
        }
        pub fn loa_content_type(mut self, input: crate::model::LoaContentType) -> Self {
            self.inner = self.inner.loa_content_type(input);
            self
        }
        pub fn set_loa_content_type(mut self, input: std::option::Option<crate::model::LoaContentType>) -> Self {
            self.inner = self.inner.set_loa_content_type(input);
            self
        }
    }
    /// Displays the specified connection or all connections in this Region.
    #[derive(std::fmt::Debug)]
    pub struct DescribeConnections {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_connections_input::Builder,
    }
    impl DescribeConnections {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::describe_connections_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeConnectionsOutput,
            aws_hyper::SdkError<crate::error::DescribeConnectionsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_id(input);
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_id(input);
            self
        }
    }
    /// Lists the connections that have been provisioned on the specified interconnect.
    #[derive(std::fmt::Debug)]
    pub struct DescribeConnectionsOnInterconnect {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_connections_on_interconnect_input::Builder,
    }
    impl DescribeConnectionsOnInterconnect {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::describe_connections_on_interconnect_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeConnectionsOnInterconnectOutput,
            aws_hyper::SdkError<crate::error::DescribeConnectionsOnInterconnectError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn interconnect_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.interconnect_id(input);
            self
        }
        pub fn set_interconnect_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_interconnect_id(input);
            self
        }
    }
    /// Describes one or more association proposals for connection between a virtual private gateway or
    /// transit gateway and a Direct Connect gateway.
    #[derive(std::fmt::Debug)]
    pub struct DescribeDirectConnectGatewayAssociationProposals {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_direct_connect_gateway_association_proposals_input::Builder,
    }
    impl DescribeDirectConnectGatewayAssociationProposals {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::describe_direct_connect_gateway_association_proposals_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeDirectConnectGatewayAssociationProposalsOutput,
            aws_hyper::SdkError<crate::error::DescribeDirectConnectGatewayAssociationProposalsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn direct_connect_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.direct_connect_gateway_id(input);
            self
        }
        pub fn set_direct_connect_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_direct_connect_gateway_id(input);
            self
        }
        pub fn proposal_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.proposal_id(input);
            self
        }
        pub fn set_proposal_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_proposal_id(input);
            self
        }
        pub fn associated_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.associated_gateway_id(input);
            self
        }
        pub fn set_associated_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_associated_gateway_id(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
    }
    /// Lists the associations between your Direct Connect gateways and virtual private gateways and transit gateways.
    #[derive(std::fmt::Debug)]
    pub struct DescribeDirectConnectGatewayAssociations {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_direct_connect_gateway_associations_input::Builder,
    }
    impl DescribeDirectConnectGatewayAssociations {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::describe_direct_connect_gateway_associations_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeDirectConnectGatewayAssociationsOutput,
            aws_hyper::SdkError<crate::error::DescribeDirectConnectGatewayAssociationsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn association_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.association_id(input);
            self
        }
        pub fn set_association_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_association_id(input);
            self
        }
        pub fn associated_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.associated_gateway_id(input);
            self
        }
        pub fn set_associated_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_associated_gateway_id(input);
            self
        }
        pub fn direct_connect_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.direct_connect_gateway_id(input);
            self
        }
        pub fn set_direct_connect_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_direct_connect_gateway_id(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
        pub fn virtual_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.virtual_gateway_id(input);
            self
        }
        pub fn set_virtual_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_virtual_gateway_id(input);
            self
        }
    }
    /// Lists the attachments between your Direct Connect gateways and virtual interfaces.
    #[derive(std::fmt::Debug)]
    pub struct DescribeDirectConnectGatewayAttachments {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_direct_connect_gateway_attachments_input::Builder,
    }
    impl DescribeDirectConnectGatewayAttachments {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::describe_direct_connect_gateway_attachments_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeDirectConnectGatewayAttachmentsOutput,
            aws_hyper::SdkError<crate::error::DescribeDirectConnectGatewayAttachmentsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn direct_connect_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.direct_connect_gateway_id(input);
            self
        }
        pub fn set_direct_connect_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_direct_connect_gateway_id(input);
            self
        }
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.virtual_interface_id(input);
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_virtual_interface_id(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
    }
    /// Lists all your Direct Connect gateways or only the specified Direct Connect gateway.
    #[derive(std::fmt::Debug)]
    pub struct DescribeDirectConnectGateways {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_direct_connect_gateways_input::Builder,
    }
    impl DescribeDirectConnectGateways {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::describe_direct_connect_gateways_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeDirectConnectGatewaysOutput,
            aws_hyper::SdkError<crate::error::DescribeDirectConnectGatewaysError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn direct_connect_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.direct_connect_gateway_id(input);
            self
        }
        pub fn set_direct_connect_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_direct_connect_gateway_id(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
    }
    /// Lists the hosted connections that have been provisioned on the specified interconnect or link
    /// aggregation group (LAG).
    #[derive(std::fmt::Debug)]
    pub struct DescribeHostedConnections {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_hosted_connections_input::Builder,
    }
    impl DescribeHostedConnections {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::describe_hosted_connections_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeHostedConnectionsOutput,
            aws_hyper::SdkError<crate::error::DescribeHostedConnectionsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_id(input);
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_id(input);
            self
        }
    }
    /// Gets the LOA-CFA for the specified interconnect.
    #[derive(std::fmt::Debug)]
    pub struct DescribeInterconnectLoa {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_interconnect_loa_input::Builder,
    }
    impl DescribeInterconnectLoa {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::describe_interconnect_loa_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeInterconnectLoaOutput,
            aws_hyper::SdkError<crate::error::DescribeInterconnectLoaError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn interconnect_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.interconnect_id(input);
            self
        }
        pub fn set_interconnect_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_interconnect_id(input);
            self
        }
        pub fn provider_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.provider_name(input);
            self
        }
        pub fn set_provider_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_provider_name(input);
            self
        }
        pub fn loa_content_type(mut self, input: crate::model::LoaContentType) -> Self {
            self.inner = self.inner.loa_content_type(input);
            self
        }
        pub fn set_loa_content_type(mut self, input: std::option::Option<crate::model::LoaContentType>) -> Self {
            self.inner = self.inner.set_loa_content_type(input);
            self
        }
    }
    /// Lists the interconnects owned by the AWS account or only the specified interconnect.
    #[derive(std::fmt::Debug)]
    pub struct DescribeInterconnects {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_interconnects_input::Builder,
    }
    impl DescribeInterconnects {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::describe_interconnects_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeInterconnectsOutput,
            aws_hyper::SdkError<crate::error::DescribeInterconnectsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn interconnect_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.interconnect_id(input);
            self
        }
        pub fn set_interconnect_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_interconnect_id(input);
            self
        }
    }
    /// Describes all your link aggregation groups (LAG) or the specified LAG.
    #[derive(std::fmt::Debug)]
    pub struct DescribeLags {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_lags_input::Builder,
    }
    impl DescribeLags {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::describe_lags_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeLagsOutput,
            aws_hyper::SdkError<crate::error::DescribeLagsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn lag_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.lag_id(input);
            self
        }
        pub fn set_lag_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_lag_id(input);
            self
        }
    }
    /// Gets the LOA-CFA for a connection, interconnect, or link aggregation group (LAG).
    #[derive(std::fmt::Debug)]
    pub struct DescribeLoa {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_loa_input::Builder,
    }
    impl DescribeLoa {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::describe_loa_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeLoaOutput,
            aws_hyper::SdkError<crate::error::DescribeLoaError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_id(input);
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_id(input);
            self
        }
        pub fn provider_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.provider_name(input);
            self
        }
        pub fn set_provider_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_provider_name(input);
            self
        }
        pub fn loa_content_type(mut self, input: crate::model::LoaContentType) -> Self {
            self.inner = self.inner.loa_content_type(input);
            self
        }
        pub fn set_loa_content_type(mut self, input: std::option::Option<crate::model::LoaContentType>) -> Self {
            self.inner = self.inner.set_loa_content_type(input);
            self
        }
    }
    /// Lists the AWS Direct Connect locations in the current AWS Region.
    #[derive(std::fmt::Debug)]
    pub struct DescribeLocations {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_locations_input::Builder,
    }
    impl DescribeLocations {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::describe_locations_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeLocationsOutput,
            aws_hyper::SdkError<crate::error::DescribeLocationsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
    }
    /// Describes the tags associated with the specified AWS Direct Connect resources.
    #[derive(std::fmt::Debug)]
    pub struct DescribeTags {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_tags_input::Builder,
    }
    impl DescribeTags {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::describe_tags_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeTagsOutput,
            aws_hyper::SdkError<crate::error::DescribeTagsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        /// Appends an item to `resource_arns`.
        pub fn resource_arns(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.resource_arns(input);
            self
        }
        pub fn set_resource_arns(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.inner = self.inner.set_resource_arns(input);
            self
        }
    }
    /// Lists the virtual private gateways owned by the AWS account.
    #[derive(std::fmt::Debug)]
    pub struct DescribeVirtualGateways {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_virtual_gateways_input::Builder,
    }
    impl DescribeVirtualGateways {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::describe_virtual_gateways_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeVirtualGatewaysOutput,
            aws_hyper::SdkError<crate::error::DescribeVirtualGatewaysError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
    }
    /// Displays all virtual interfaces for an AWS account.
    #[derive(std::fmt::Debug)]
    pub struct DescribeVirtualInterfaces {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_virtual_interfaces_input::Builder,
    }
    impl DescribeVirtualInterfaces {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::describe_virtual_interfaces_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeVirtualInterfacesOutput,
            aws_hyper::SdkError<crate::error::DescribeVirtualInterfacesError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_id(input);
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_id(input);
            self
        }
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.virtual_interface_id(input);
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_virtual_interface_id(input);
            self
        }
    }
    /// Disassociates a connection from a link aggregation group (LAG).
    #[derive(std::fmt::Debug)]
    pub struct DisassociateConnectionFromLag {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::disassociate_connection_from_lag_input::Builder,
    }
    impl DisassociateConnectionFromLag {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::disassociate_connection_from_lag_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DisassociateConnectionFromLagOutput,
            aws_hyper::SdkError<crate::error::DisassociateConnectionFromLagError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.connection_id(input);
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_connection_id(input);
            self
        }
        pub fn lag_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.lag_id(input);
            self
        }
        pub fn set_lag_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_lag_id(input);
            self
        }
    }
    /// Lists the virtual interface failover test history.
    #[derive(std::fmt::Debug)]
    pub struct ListVirtualInterfaceTestHistory {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_virtual_interface_test_history_input::Builder,
    }
    impl ListVirtualInterfaceTestHistory {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::list_virtual_interface_test_history_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListVirtualInterfaceTestHistoryOutput,
            aws_hyper::SdkError<crate::error::ListVirtualInterfaceTestHistoryError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn test_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.test_id(input);
            self
        }
        pub fn set_test_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_test_id(input);
            self
        }
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.virtual_interface_id(input);
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_virtual_interface_id(input);
            self
        }
        /// Appends an item to `bgp_peers`.
        pub fn bgp_peers(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.bgp_peers(input);
            self
        }
        pub fn set_bgp_peers(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.inner = self.inner.set_bgp_peers(input);
            self
        }
        pub fn status(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.status(input);
            self
        }
        pub fn set_status(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_status(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
    }
    /// Starts the virtual interface failover test that verifies your configuration meets your resiliency
    /// requirements by placing the BGP peering session in the DOWN state.
    #[derive(std::fmt::Debug)]
    pub struct StartBgpFailoverTest {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::start_bgp_failover_test_input::Builder,
    }
    impl StartBgpFailoverTest {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::start_bgp_failover_test_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::StartBgpFailoverTestOutput,
            aws_hyper::SdkError<crate::error::StartBgpFailoverTestError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.virtual_interface_id(input);
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_virtual_interface_id(input);
            self
        }
        /// Appends an item to `bgp_peers`.
        pub fn bgp_peers(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.bgp_peers(input);
            self
        }
        pub fn set_bgp_peers(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.inner = self.inner.set_bgp_peers(input);
            self
        }
        pub fn test_duration_in_minutes(mut self, input: i32) -> Self {
            self.inner = self.inner.test_duration_in_minutes(input);
            self
        }
        pub fn set_test_duration_in_minutes(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_test_duration_in_minutes(input);
            self
        }
    }
    /// Stops the virtual interface failover test.
    #[derive(std::fmt::Debug)]
    pub struct StopBgpFailoverTest {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::stop_bgp_failover_test_input::Builder,
    }
    impl StopBgpFailoverTest {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::stop_bgp_failover_test_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::StopBgpFailoverTestOutput,
            aws_hyper::SdkError<crate::error::StopBgpFailoverTestError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.virtual_interface_id(input);
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_virtual_interface_id(input);
            self
        }
    }
    /// Adds the specified tags to the specified AWS Direct Connect resource.
    #[derive(std::fmt::Debug)]
    pub struct TagResource {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::tag_resource_input::Builder,
    }
    impl TagResource {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::tag_resource_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::TagResourceOutput,
            aws_hyper::SdkError<crate::error::TagResourceError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.resource_arn(input);
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_resource_arn(input);
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
    }
    /// Removes one or more tags from the specified AWS Direct Connect resource.
    #[derive(std::fmt::Debug)]
    pub struct UntagResource {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::untag_resource_input::Builder,
    }
    impl UntagResource {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::untag_resource_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UntagResourceOutput,
            aws_hyper::SdkError<crate::error::UntagResourceError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.resource_arn(input);
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_resource_arn(input);
            self
        }
        /// Appends an item to `tag_keys`.
        pub fn tag_keys(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.tag_keys(input);
            self
        }
        pub fn set_tag_keys(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.inner = self.inner.set_tag_keys(input);
            self
        }
    }
    /// Updates the specified attributes of the Direct Connect gateway association.
    #[derive(std::fmt::Debug)]
    pub struct UpdateDirectConnectGatewayAssociation {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::update_direct_connect_gateway_association_input::Builder,
    }
    impl UpdateDirectConnectGatewayAssociation {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::update_direct_connect_gateway_association_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UpdateDirectConnectGatewayAssociationOutput,
            aws_hyper::SdkError<crate::error::UpdateDirectConnectGatewayAssociationError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn association_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.association_id(input);
            self
        }
        pub fn set_association_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_association_id(input);
            self
        }
        /// Appends an item to `add_allowed_prefixes_to_direct_connect_gateway`.
        pub fn add_allowed_prefixes_to_direct_connect_gateway(mut self, input: impl Into<crate::model::RouteFilterPrefix>) -> Self {
            self.inner = self.inner.add_allowed_prefixes_to_direct_connect_gateway(input);
            self
        }
        pub fn set_add_allowed_prefixes_to_direct_connect_gateway(mut self, input: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>) -> Self {
            self.inner = self.inner.set_add_allowed_prefixes_to_direct_connect_gateway(input);
            self
        }
        /// Appends an item to `remove_allowed_prefixes_to_direct_connect_gateway`.
        pub fn remove_allowed_prefixes_to_direct_connect_gateway(mut self, input: impl Into<crate::model::RouteFilterPrefix>) -> Self {
            self.inner = self.inner.remove_allowed_prefixes_to_direct_connect_gateway(input);
            self
        }
        pub fn set_remove_allowed_prefixes_to_direct_connect_gateway(mut self, input: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>) -> Self {
            self.inner = self.inner.set_remove_allowed_prefixes_to_direct_connect_gateway(input);
            self
        }
    }
    /// Updates the attributes of the specified link aggregation group (LAG).
    #[derive(std::fmt::Debug)]
    pub struct UpdateLag {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::update_lag_input::Builder,
    }
    impl UpdateLag {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::update_lag_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UpdateLagOutput,
            aws_hyper::SdkError<crate::error::UpdateLagError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn lag_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.lag_id(input);
            self
        }
        pub fn set_lag_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_lag_id(input);
            self
        }
        pub fn lag_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.lag_name(input);
            self
        }
        pub fn set_lag_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_lag_name(input);
            self
        }
        pub fn minimum_links(mut self, input: i32) -> Self {
            self.inner = self.inner.minimum_links(input);
            self
        }
        pub fn set_minimum_links(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_minimum_links(input);
            self
        }
    }
    /// Updates the specified attributes of the specified virtual private interface.
    #[derive(std::fmt::Debug)]
    pub struct UpdateVirtualInterfaceAttributes {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::update_virtual_interface_attributes_input::Builder,
    }
    impl UpdateVirtualInterfaceAttributes {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::update_virtual_interface_attributes_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UpdateVirtualInterfaceAttributesOutput,
            aws_hyper::SdkError<crate::error::UpdateVirtualInterfaceAttributesError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.virtual_interface_id(input);
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_virtual_interface_id(input);
            self
        }
        pub fn mtu(mut self, input: i32) -> Self {
            self.inner = self.inner.mtu(input);
            self
        }
        pub fn set_mtu(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_mtu(input);
            self
        }
    }
}
