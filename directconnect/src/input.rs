/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_http::body::SdkBody;
use smithy_http::operation::{BuildError, Metadata, Operation, Request};

/// Wraps a serialized JSON 1.1 body into an operation carrying everything the middleware
/// stack needs: target header, signing configuration, endpoint resolver and credentials.
fn assemble_operation<O>(
    config: &crate::config::Config,
    operation_name: &'static str,
    handler: O,
    body: SdkBody,
) -> std::result::Result<Operation<O, aws_http::AwsErrorRetryPolicy>, BuildError> {
    let content_length = body.content_length().unwrap_or(0);
    let request = http::Request::builder()
        .method("POST")
        .uri("/")
        .header(http::header::CONTENT_TYPE, crate::CONTENT_TYPE)
        .header(
            "x-amz-target",
            format!("{}.{}", crate::TARGET_PREFIX, operation_name),
        )
        .header(http::header::CONTENT_LENGTH, content_length)
        .body(body)?;
    let mut request = Request::new(request);
    {
        let mut props = request.config_mut();
        props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
            crate::API_METADATA.clone(),
        ));
        props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
        props.insert(aws_types::SigningService::from_static(
            crate::ENDPOINT_PREFIX,
        ));
        aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
        if let Some(region) = &config.region {
            props.insert(region.clone());
        }
        aws_auth::set_provider(&mut props, config.credentials_provider.clone());
    }
    Ok(Operation::new(request, handler)
        .with_metadata(Metadata::new(operation_name, crate::ENDPOINT_PREFIX))
        .with_retry_policy(aws_http::AwsErrorRetryPolicy::new()))
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct AcceptDirectConnectGatewayAssociationProposalInput {
    pub direct_connect_gateway_id: std::option::Option<std::string::String>,
    pub proposal_id: std::option::Option<std::string::String>,
    pub associated_gateway_owner_account: std::option::Option<std::string::String>,
    pub override_allowed_prefixes_to_direct_connect_gateway: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
}
impl std::fmt::Debug for AcceptDirectConnectGatewayAssociationProposalInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AcceptDirectConnectGatewayAssociationProposalInput");
        formatter.field("direct_connect_gateway_id", &self.direct_connect_gateway_id);
        formatter.field("proposal_id", &self.proposal_id);
        formatter.field("associated_gateway_owner_account", &self.associated_gateway_owner_account);
        formatter.field("override_allowed_prefixes_to_direct_connect_gateway", &self.override_allowed_prefixes_to_direct_connect_gateway);
        formatter.finish()
    }
}
/// See [`AcceptDirectConnectGatewayAssociationProposalInput`](crate::input::AcceptDirectConnectGatewayAssociationProposalInput)
pub mod accept_direct_connect_gateway_association_proposal_input {
    /// A builder for [`AcceptDirectConnectGatewayAssociationProposalInput`](crate::input::AcceptDirectConnectGatewayAssociationProposalInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) direct_connect_gateway_id: std::option::Option<std::string::String>,
        pub(crate) proposal_id: std::option::Option<std::string::String>,
        pub(crate) associated_gateway_owner_account: std::option::Option<std::string::String>,
        pub(crate) override_allowed_prefixes_to_direct_connect_gateway: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
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
        pub fn proposal_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.proposal_id = Some(input.into());
            self
        }
        pub fn set_proposal_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.proposal_id = input;
            self
        }
        pub fn associated_gateway_owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.associated_gateway_owner_account = Some(input.into());
            self
        }
        pub fn set_associated_gateway_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.associated_gateway_owner_account = input;
            self
        }
        /// Appends an item to `override_allowed_prefixes_to_direct_connect_gateway`.
        pub fn override_allowed_prefixes_to_direct_connect_gateway(mut self, input: impl Into<crate::model::RouteFilterPrefix>) -> Self {
            let mut v = self.override_allowed_prefixes_to_direct_connect_gateway.unwrap_or_default();
            v.push(input.into());
            self.override_allowed_prefixes_to_direct_connect_gateway = Some(v);
            self
        }
        pub fn set_override_allowed_prefixes_to_direct_connect_gateway(mut self, input: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>) -> Self {
            self.override_allowed_prefixes_to_direct_connect_gateway = input;
            self
        }
        /// Consumes the builder and constructs a [`AcceptDirectConnectGatewayAssociationProposalInput`](crate::input::AcceptDirectConnectGatewayAssociationProposalInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::AcceptDirectConnectGatewayAssociationProposalInput, smithy_http::operation::BuildError> {
            if self.direct_connect_gateway_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "direct_connect_gateway_id",
                    details: "direct_connect_gateway_id was not specified but it is required when building AcceptDirectConnectGatewayAssociationProposalInput",
                });
            }
            if self.proposal_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "proposal_id",
                    details: "proposal_id was not specified but it is required when building AcceptDirectConnectGatewayAssociationProposalInput",
                });
            }
            if self.associated_gateway_owner_account.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "associated_gateway_owner_account",
                    details: "associated_gateway_owner_account was not specified but it is required when building AcceptDirectConnectGatewayAssociationProposalInput",
                });
            }
            Ok(crate::input::AcceptDirectConnectGatewayAssociationProposalInput {
                direct_connect_gateway_id: self.direct_connect_gateway_id,
                proposal_id: self.proposal_id,
                associated_gateway_owner_account: self.associated_gateway_owner_account,
                override_allowed_prefixes_to_direct_connect_gateway: self.override_allowed_prefixes_to_direct_connect_gateway,
            })
        }
    }
}
impl AcceptDirectConnectGatewayAssociationProposalInput {
    /// Creates a new builder-style object to manufacture [`AcceptDirectConnectGatewayAssociationProposalInput`](crate::input::AcceptDirectConnectGatewayAssociationProposalInput)
    pub fn builder() -> crate::input::accept_direct_connect_gateway_association_proposal_input::Builder {
        crate::input::accept_direct_connect_gateway_association_proposal_input::Builder::default()
    }
}
impl AcceptDirectConnectGatewayAssociationProposalInput {
    /// Consumes the builder and constructs an Operation<[`AcceptDirectConnectGatewayAssociationProposal`](crate::operation::AcceptDirectConnectGatewayAssociationProposal)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::AcceptDirectConnectGatewayAssociationProposal, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_accept_direct_connect_gateway_association_proposal(self);
        assemble_operation(config, "AcceptDirectConnectGatewayAssociationProposal", crate::operation::AcceptDirectConnectGatewayAssociationProposal::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct AllocateConnectionOnInterconnectInput {
    pub bandwidth: std::option::Option<std::string::String>,
    pub connection_name: std::option::Option<std::string::String>,
    pub owner_account: std::option::Option<std::string::String>,
    pub interconnect_id: std::option::Option<std::string::String>,
    pub vlan: std::option::Option<i32>,
}
impl std::fmt::Debug for AllocateConnectionOnInterconnectInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AllocateConnectionOnInterconnectInput");
        formatter.field("bandwidth", &self.bandwidth);
        formatter.field("connection_name", &self.connection_name);
        formatter.field("owner_account", &self.owner_account);
        formatter.field("interconnect_id", &self.interconnect_id);
        formatter.field("vlan", &self.vlan);
        formatter.finish()
    }
}
/// See [`AllocateConnectionOnInterconnectInput`](crate::input::AllocateConnectionOnInterconnectInput)
pub mod allocate_connection_on_interconnect_input {
    /// A builder for [`AllocateConnectionOnInterconnectInput`](crate::input::AllocateConnectionOnInterconnectInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) bandwidth: std::option::Option<std::string::String>,
        pub(crate) connection_name: std::option::Option<std::string::String>,
        pub(crate) owner_account: std::option::Option<std::string::String>,
        pub(crate) interconnect_id: std::option::Option<std::string::String>,
        pub(crate) vlan: std::option::Option<i32>,
    }
    impl Builder {
        pub fn bandwidth(mut self, input: impl Into<std::string::String>) -> Self {
            self.bandwidth = Some(input.into());
            self
        }
        pub fn set_bandwidth(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.bandwidth = input;
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
        pub fn owner_account(mut self, input: impl Into<std::string::String>) -> Self {
            self.owner_account = Some(input.into());
            self
        }
        pub fn set_owner_account(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.owner_account = input;
            self
        }
        pub fn interconnect_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.interconnect_id = Some(input.into());
            self
        }
        pub fn set_interconnect_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.interconnect_id = input;
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
        /// Consumes the builder and constructs a [`AllocateConnectionOnInterconnectInput`](crate::input::AllocateConnectionOnInterconnectInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::AllocateConnectionOnInterconnectInput, smithy_http::operation::BuildError> {
            if self.bandwidth.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "bandwidth",
                    details: "bandwidth was not specified but it is required when building AllocateConnectionOnInterconnectInput",
                });
            }
            if self.connection_name.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "connection_name",
                    details: "connection_name was not specified but it is required when building AllocateConnectionOnInterconnectInput",
                });
            }
            if self.owner_account.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "owner_account",
                    details: "owner_account was not specified but it is required when building AllocateConnectionOnInterconnectInput",
                });
            }
            if self.interconnect_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "interconnect_id",
                    details: "interconnect_id was not specified but it is required when building AllocateConnectionOnInterconnectInput",
                });
            }
            if self.vlan.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "vlan",
                    details: "vlan was not specified but it is required when building AllocateConnectionOnInterconnectInput",
                });
            }
            Ok(crate::input::AllocateConnectionOnInterconnectInput {
                bandwidth: self.bandwidth,
                connection_name: self.connection_name,
                owner_account: self.owner_account,
                interconnect_id: self.interconnect_id,
                vlan: self.vlan,
            })
        }
    }
}
impl AllocateConnectionOnInterconnectInput {
    /// Creates a new builder-style object to manufacture [`AllocateConnectionOnInterconnectInput`](crate::input::AllocateConnectionOnInterconnectInput)
    pub fn builder() -> crate::input::allocate_connection_on_interconnect_input::Builder {
        crate::input::allocate_connection_on_interconnect_input::Builder::default()
    }
}
impl AllocateConnectionOnInterconnectInput {
    /// Consumes the builder and constructs an Operation<[`AllocateConnectionOnInterconnect`](crate::operation::AllocateConnectionOnInterconnect)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::AllocateConnectionOnInterconnect, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_allocate_connection_on_interconnect(self);
        assemble_operation(config, "AllocateConnectionOnInterconnect", crate::operation::AllocateConnectionOnInterconnect::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct AllocateHostedConnectionInput {
    pub connection_id: std::option::Option<std::string::String>,
    pub owner_account: std::option::Option<std::string::String>,
    pub bandwidth: std::option::Option<std::string::String>,
    pub connection_name: std::option::Option<std::string::String>,
    pub vlan: std::option::Option<i32>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl std::fmt::Debug for AllocateHostedConnectionInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AllocateHostedConnectionInput");
        formatter.field("connection_id", &self.connection_id);
        formatter.field("owner_account", &self.owner_account);
        formatter.field("bandwidth", &self.bandwidth);
        formatter.field("connection_name", &self.connection_name);
        formatter.field("vlan", &self.vlan);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`AllocateHostedConnectionInput`](crate::input::AllocateHostedConnectionInput)
pub mod allocate_hosted_connection_input {
    /// A builder for [`AllocateHostedConnectionInput`](crate::input::AllocateHostedConnectionInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) connection_id: std::option::Option<std::string::String>,
        pub(crate) owner_account: std::option::Option<std::string::String>,
        pub(crate) bandwidth: std::option::Option<std::string::String>,
        pub(crate) connection_name: std::option::Option<std::string::String>,
        pub(crate) vlan: std::option::Option<i32>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(input.into());
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_id = input;
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
        pub fn bandwidth(mut self, input: impl Into<std::string::String>) -> Self {
            self.bandwidth = Some(input.into());
            self
        }
        pub fn set_bandwidth(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.bandwidth = input;
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
        pub fn vlan(mut self, input: i32) -> Self {
            self.vlan = Some(input);
            self
        }
        pub fn set_vlan(mut self, input: std::option::Option<i32>) -> Self {
            self.vlan = input;
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
        /// Consumes the builder and constructs a [`AllocateHostedConnectionInput`](crate::input::AllocateHostedConnectionInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::AllocateHostedConnectionInput, smithy_http::operation::BuildError> {
            if self.connection_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "connection_id",
                    details: "connection_id was not specified but it is required when building AllocateHostedConnectionInput",
                });
            }
            if self.owner_account.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "owner_account",
                    details: "owner_account was not specified but it is required when building AllocateHostedConnectionInput",
                });
            }
            if self.bandwidth.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "bandwidth",
                    details: "bandwidth was not specified but it is required when building AllocateHostedConnectionInput",
                });
            }
            if self.connection_name.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "connection_name",
                    details: "connection_name was not specified but it is required when building AllocateHostedConnectionInput",
                });
            }
            if self.vlan.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "vlan",
                    details: "vlan was not specified but it is required when building AllocateHostedConnectionInput",
                });
            }
            Ok(crate::input::AllocateHostedConnectionInput {
                connection_id: self.connection_id,
                owner_account: self.owner_account,
                bandwidth: self.bandwidth,
                connection_name: self.connection_name,
                vlan: self.vlan,
                tags: self.tags,
            })
        }
    }
}
impl AllocateHostedConnectionInput {
    /// Creates a new builder-style object to manufacture [`AllocateHostedConnectionInput`](crate::input::AllocateHostedConnectionInput)
    pub fn builder() -> crate::input::allocate_hosted_connection_input::Builder {
        crate::input::allocate_hosted_connection_input::Builder::default()
    }
}
impl AllocateHostedConnectionInput {
    /// Consumes the builder and constructs an Operation<[`AllocateHostedConnection`](crate::operation::AllocateHostedConnection)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::AllocateHostedConnection, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_allocate_hosted_connection(self);
        assemble_operation(config, "AllocateHostedConnection", crate::operation::AllocateHostedConnection::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct AllocatePrivateVirtualInterfaceInput {
    pub connection_id: std::option::Option<std::string::String>,
    pub owner_account: std::option::Option<std::string::String>,
    pub new_private_virtual_interface_allocation: std::option::Option<crate::model::NewPrivateVirtualInterfaceAllocation>,
}
impl std::fmt::Debug for AllocatePrivateVirtualInterfaceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AllocatePrivateVirtualInterfaceInput");
        formatter.field("connection_id", &self.connection_id);
        formatter.field("owner_account", &self.owner_account);
        formatter.field("new_private_virtual_interface_allocation", &self.new_private_virtual_interface_allocation);
        formatter.finish()
    }
}
/// See [`AllocatePrivateVirtualInterfaceInput`](crate::input::AllocatePrivateVirtualInterfaceInput)
pub mod allocate_private_virtual_interface_input {
    /// A builder for [`AllocatePrivateVirtualInterfaceInput`](crate::input::AllocatePrivateVirtualInterfaceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) connection_id: std::option::Option<std::string::String>,
        pub(crate) owner_account: std::option::Option<std::string::String>,
        pub(crate) new_private_virtual_interface_allocation: std::option::Option<crate::model::NewPrivateVirtualInterfaceAllocation>,
    }
    impl Builder {
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(input.into());
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_id = input;
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
        pub fn new_private_virtual_interface_allocation(mut self, input: crate::model::NewPrivateVirtualInterfaceAllocation) -> Self {
            self.new_private_virtual_interface_allocation = Some(input);
            self
        }
        pub fn set_new_private_virtual_interface_allocation(mut self, input: std::option::Option<crate::model::NewPrivateVirtualInterfaceAllocation>) -> Self {
            self.new_private_virtual_interface_allocation = input;
            self
        }
        /// Consumes the builder and constructs a [`AllocatePrivateVirtualInterfaceInput`](crate::input::AllocatePrivateVirtualInterfaceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::AllocatePrivateVirtualInterfaceInput, smithy_http::operation::BuildError> {
            if self.connection_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "connection_id",
                    details: "connection_id was not specified but it is required when building AllocatePrivateVirtualInterfaceInput",
                });
            }
            if self.owner_account.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "owner_account",
                    details: "owner_account was not specified but it is required when building AllocatePrivateVirtualInterfaceInput",
                });
            }
            if self.new_private_virtual_interface_allocation.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "new_private_virtual_interface_allocation",
                    details: "new_private_virtual_interface_allocation was not specified but it is required when building AllocatePrivateVirtualInterfaceInput",
                });
            }
            Ok(crate::input::AllocatePrivateVirtualInterfaceInput {
                connection_id: self.connection_id,
                owner_account: self.owner_account,
                new_private_virtual_interface_allocation: self.new_private_virtual_interface_allocation,
            })
        }
    }
}
impl AllocatePrivateVirtualInterfaceInput {
    /// Creates a new builder-style object to manufacture [`AllocatePrivateVirtualInterfaceInput`](crate::input::AllocatePrivateVirtualInterfaceInput)
    pub fn builder() -> crate::input::allocate_private_virtual_interface_input::Builder {
        crate::input::allocate_private_virtual_interface_input::Builder::default()
    }
}
impl AllocatePrivateVirtualInterfaceInput {
    /// Consumes the builder and constructs an Operation<[`AllocatePrivateVirtualInterface`](crate::operation::AllocatePrivateVirtualInterface)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::AllocatePrivateVirtualInterface, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_allocate_private_virtual_interface(self);
        assemble_operation(config, "AllocatePrivateVirtualInterface", crate::operation::AllocatePrivateVirtualInterface::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct AllocatePublicVirtualInterfaceInput {
    pub connection_id: std::option::Option<std::string::String>,
    pub owner_account: std::option::Option<std::string::String>,
    pub new_public_virtual_interface_allocation: std::option::Option<crate::model::NewPublicVirtualInterfaceAllocation>,
}
impl std::fmt::Debug for AllocatePublicVirtualInterfaceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AllocatePublicVirtualInterfaceInput");
        formatter.field("connection_id", &self.connection_id);
        formatter.field("owner_account", &self.owner_account);
        formatter.field("new_public_virtual_interface_allocation", &self.new_public_virtual_interface_allocation);
        formatter.finish()
    }
}
/// See [`AllocatePublicVirtualInterfaceInput`](crate::input::AllocatePublicVirtualInterfaceInput)
pub mod allocate_public_virtual_interface_input {
    /// A builder for [`AllocatePublicVirtualInterfaceInput`](crate::input::AllocatePublicVirtualInterfaceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) connection_id: std::option::Option<std::string::String>,
        pub(crate) owner_account: std::option::Option<std::string::String>,
        pub(crate) new_public_virtual_interface_allocation: std::option::Option<crate::model::NewPublicVirtualInterfaceAllocation>,
    }
    impl Builder {
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(input.into());
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_id = input;
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
        pub fn new_public_virtual_interface_allocation(mut self, input: crate::model::NewPublicVirtualInterfaceAllocation) -> Self {
            self.new_public_virtual_interface_allocation = Some(input);
            self
        }
        pub fn set_new_public_virtual_interface_allocation(mut self, input: std::option::Option<crate::model::NewPublicVirtualInterfaceAllocation>) -> Self {
            self.new_public_virtual_interface_allocation = input;
            self
        }
        /// Consumes the builder and constructs a [`AllocatePublicVirtualInterfaceInput`](crate::input::AllocatePublicVirtualInterfaceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::AllocatePublicVirtualInterfaceInput, smithy_http::operation::BuildError> {
            if self.connection_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "connection_id",
                    details: "connection_id was not specified but it is required when building AllocatePublicVirtualInterfaceInput",
                });
            }
            if self.owner_account.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "owner_account",
                    details: "owner_account was not specified but it is required when building AllocatePublicVirtualInterfaceInput",
                });
            }
            if self.new_public_virtual_interface_allocation.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "new_public_virtual_interface_allocation",
                    details: "new_public_virtual_interface_allocation was not specified but it is required when building AllocatePublicVirtualInterfaceInput",
                });
            }
            Ok(crate::input::AllocatePublicVirtualInterfaceInput {
                connection_id: self.connection_id,
                owner_account: self.owner_account,
                new_public_virtual_interface_allocation: self.new_public_virtual_interface_allocation,
            })
        }
    }
}
impl AllocatePublicVirtualInterfaceInput {
    /// Creates a new builder-style object to manufacture [`AllocatePublicVirtualInterfaceInput`](crate::input::AllocatePublicVirtualInterfaceInput)
    pub fn builder() -> crate::input::allocate_public_virtual_interface_input::Builder {
        crate::input::allocate_public_virtual_interface_input::Builder::default()
    }
}
impl AllocatePublicVirtualInterfaceInput {
    /// Consumes the builder and constructs an Operation<[`AllocatePublicVirtualInterface`](crate::operation::AllocatePublicVirtualInterface)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::AllocatePublicVirtualInterface, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_allocate_public_virtual_interface(self);
        assemble_operation(config, "AllocatePublicVirtualInterface", crate::operation::AllocatePublicVirtualInterface::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct AllocateTransitVirtualInterfaceInput {
    pub connection_id: std::option::Option<std::string::String>,
    pub owner_account: std::option::Option<std::string::String>,
    pub new_transit_virtual_interface_allocation: std::option::Option<crate::model::NewTransitVirtualInterfaceAllocation>,
}
impl std::fmt::Debug for AllocateTransitVirtualInterfaceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AllocateTransitVirtualInterfaceInput");
        formatter.field("connection_id", &self.connection_id);
        formatter.field("owner_account", &self.owner_account);
        formatter.field("new_transit_virtual_interface_allocation", &self.new_transit_virtual_interface_allocation);
        formatter.finish()
    }
}
/// See [`AllocateTransitVirtualInterfaceInput`](crate::input::AllocateTransitVirtualInterfaceInput)
pub mod allocate_transit_virtual_interface_input {
    /// A builder for [`AllocateTransitVirtualInterfaceInput`](crate::input::AllocateTransitVirtualInterfaceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) connection_id: std::option::Option<std::string::String>,
        pub(crate) owner_account: std::option::Option<std::string::String>,
        pub(crate) new_transit_virtual_interface_allocation: std::option::Option<crate::model::NewTransitVirtualInterfaceAllocation>,
    }
    impl Builder {
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(input.into());
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_id = input;
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
        pub fn new_transit_virtual_interface_allocation(mut self, input: crate::model::NewTransitVirtualInterfaceAllocation) -> Self {
            self.new_transit_virtual_interface_allocation = Some(input);
            self
        }
        pub fn set_new_transit_virtual_interface_allocation(mut self, input: std::option::Option<crate::model::NewTransitVirtualInterfaceAllocation>) -> Self {
            self.new_transit_virtual_interface_allocation = input;
            self
        }
        /// Consumes the builder and constructs a [`AllocateTransitVirtualInterfaceInput`](crate::input::AllocateTransitVirtualInterfaceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::AllocateTransitVirtualInterfaceInput, smithy_http::operation::BuildError> {
            if self.connection_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "connection_id",
                    details: "connection_id was not specified but it is required when building AllocateTransitVirtualInterfaceInput",
                });
            }
            if self.owner_account.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "owner_account",
                    details: "owner_account was not specified but it is required when building AllocateTransitVirtualInterfaceInput",
                });
            }
            if self.new_transit_virtual_interface_allocation.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "new_transit_virtual_interface_allocation",
                    details: "new_transit_virtual_interface_allocation was not specified but it is required when building AllocateTransitVirtualInterfaceInput",
                });
            }
            Ok(crate::input::AllocateTransitVirtualInterfaceInput {
                connection_id: self.connection_id,
                owner_account: self.owner_account,
                new_transit_virtual_interface_allocation: self.new_transit_virtual_interface_allocation,
            })
        }
    }
}
impl AllocateTransitVirtualInterfaceInput {
    /// Creates a new builder-style object to manufacture [`AllocateTransitVirtualInterfaceInput`](crate::input::AllocateTransitVirtualInterfaceInput)
    pub fn builder() -> crate::input::allocate_transit_virtual_interface_input::Builder {
        crate::input::allocate_transit_virtual_interface_input::Builder::default()
    }
}
impl AllocateTransitVirtualInterfaceInput {
    /// Consumes the builder and constructs an Operation<[`AllocateTransitVirtualInterface`](crate::operation::AllocateTransitVirtualInterface)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::AllocateTransitVirtualInterface, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_allocate_transit_virtual_interface(self);
        assemble_operation(config, "AllocateTransitVirtualInterface", crate::operation::AllocateTransitVirtualInterface::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct AssociateConnectionWithLagInput {
    pub connection_id: std::option::Option<std::string::String>,
    pub lag_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for AssociateConnectionWithLagInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AssociateConnectionWithLagInput");
        formatter.field("connection_id", &self.connection_id);
        formatter.field("lag_id", &self.lag_id);
        formatter.finish()
    }
}
/// See [`AssociateConnectionWithLagInput`](crate::input::AssociateConnectionWithLagInput)
pub mod associate_connection_with_lag_input {
    /// A builder for [`AssociateConnectionWithLagInput`](crate::input::AssociateConnectionWithLagInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) connection_id: std::option::Option<std::string::String>,
        pub(crate) lag_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(input.into());
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_id = input;
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
        /// Consumes the builder and constructs a [`AssociateConnectionWithLagInput`](crate::input::AssociateConnectionWithLagInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::AssociateConnectionWithLagInput, smithy_http::operation::BuildError> {
            if self.connection_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "connection_id",
                    details: "connection_id was not specified but it is required when building AssociateConnectionWithLagInput",
                });
            }
            if self.lag_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "lag_id",
                    details: "lag_id was not specified but it is required when building AssociateConnectionWithLagInput",
                });
            }
            Ok(crate::input::AssociateConnectionWithLagInput {
                connection_id: self.connection_id,
                lag_id: self.lag_id,
            })
        }
    }
}
impl AssociateConnectionWithLagInput {
    /// Creates a new builder-style object to manufacture [`AssociateConnectionWithLagInput`](crate::input::AssociateConnectionWithLagInput)
    pub fn builder() -> crate::input::associate_connection_with_lag_input::Builder {
        crate::input::associate_connection_with_lag_input::Builder::default()
    }
}
impl AssociateConnectionWithLagInput {
    /// Consumes the builder and constructs an Operation<[`AssociateConnectionWithLag`](crate::operation::AssociateConnectionWithLag)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::AssociateConnectionWithLag, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_associate_connection_with_lag(self);
        assemble_operation(config, "AssociateConnectionWithLag", crate::operation::AssociateConnectionWithLag::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct AssociateHostedConnectionInput {
    pub connection_id: std::option::Option<std::string::String>,
    pub parent_connection_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for AssociateHostedConnectionInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AssociateHostedConnectionInput");
        formatter.field("connection_id", &self.connection_id);
        formatter.field("parent_connection_id", &self.parent_connection_id);
        formatter.finish()
    }
}
/// See [`AssociateHostedConnectionInput`](crate::input::AssociateHostedConnectionInput)
pub mod associate_hosted_connection_input {
    /// A builder for [`AssociateHostedConnectionInput`](crate::input::AssociateHostedConnectionInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) connection_id: std::option::Option<std::string::String>,
        pub(crate) parent_connection_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(input.into());
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_id = input;
            self
        }
        pub fn parent_connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.parent_connection_id = Some(input.into());
            self
        }
        pub fn set_parent_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.parent_connection_id = input;
            self
        }
        /// Consumes the builder and constructs a [`AssociateHostedConnectionInput`](crate::input::AssociateHostedConnectionInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::AssociateHostedConnectionInput, smithy_http::operation::BuildError> {
            if self.connection_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "connection_id",
                    details: "connection_id was not specified but it is required when building AssociateHostedConnectionInput",
                });
            }
            if self.parent_connection_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "parent_connection_id",
                    details: "parent_connection_id was not specified but it is required when building AssociateHostedConnectionInput",
                });
            }
            Ok(crate::input::AssociateHostedConnectionInput {
                connection_id: self.connection_id,
                parent_connection_id: self.parent_connection_id,
            })
        }
    }
}
impl AssociateHostedConnectionInput {
    /// Creates a new builder-style object to manufacture [`AssociateHostedConnectionInput`](crate::input::AssociateHostedConnectionInput)
    pub fn builder() -> crate::input::associate_hosted_connection_input::Builder {
        crate::input::associate_hosted_connection_input::Builder::default()
    }
}
impl AssociateHostedConnectionInput {
    /// Consumes the builder and constructs an Operation<[`AssociateHostedConnection`](crate::operation::AssociateHostedConnection)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::AssociateHostedConnection, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_associate_hosted_connection(self);
        assemble_operation(config, "AssociateHostedConnection", crate::operation::AssociateHostedConnection::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct AssociateVirtualInterfaceInput {
    pub virtual_interface_id: std::option::Option<std::string::String>,
    pub connection_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for AssociateVirtualInterfaceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AssociateVirtualInterfaceInput");
        formatter.field("virtual_interface_id", &self.virtual_interface_id);
        formatter.field("connection_id", &self.connection_id);
        formatter.finish()
    }
}
/// See [`AssociateVirtualInterfaceInput`](crate::input::AssociateVirtualInterfaceInput)
pub mod associate_virtual_interface_input {
    /// A builder for [`AssociateVirtualInterfaceInput`](crate::input::AssociateVirtualInterfaceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) virtual_interface_id: std::option::Option<std::string::String>,
        pub(crate) connection_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_id = Some(input.into());
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_id = input;
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
        /// Consumes the builder and constructs a [`AssociateVirtualInterfaceInput`](crate::input::AssociateVirtualInterfaceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::AssociateVirtualInterfaceInput, smithy_http::operation::BuildError> {
            if self.virtual_interface_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "virtual_interface_id",
                    details: "virtual_interface_id was not specified but it is required when building AssociateVirtualInterfaceInput",
                });
            }
            if self.connection_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "connection_id",
                    details: "connection_id was not specified but it is required when building AssociateVirtualInterfaceInput",
                });
            }
            Ok(crate::input::AssociateVirtualInterfaceInput {
                virtual_interface_id: self.virtual_interface_id,
                connection_id: self.connection_id,
            })
        }
    }
}
impl AssociateVirtualInterfaceInput {
    /// Creates a new builder-style object to manufacture [`AssociateVirtualInterfaceInput`](crate::input::AssociateVirtualInterfaceInput)
    pub fn builder() -> crate::input::associate_virtual_interface_input::Builder {
        crate::input::associate_virtual_interface_input::Builder::default()
    }
}
impl AssociateVirtualInterfaceInput {
    /// Consumes the builder and constructs an Operation<[`AssociateVirtualInterface`](crate::operation::AssociateVirtualInterface)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::AssociateVirtualInterface, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_associate_virtual_interface(self);
        assemble_operation(config, "AssociateVirtualInterface", crate::operation::AssociateVirtualInterface::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ConfirmConnectionInput {
    pub connection_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ConfirmConnectionInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ConfirmConnectionInput");
        formatter.field("connection_id", &self.connection_id);
        formatter.finish()
    }
}
/// See [`ConfirmConnectionInput`](crate::input::ConfirmConnectionInput)
pub mod confirm_connection_input {
    /// A builder for [`ConfirmConnectionInput`](crate::input::ConfirmConnectionInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) connection_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(input.into());
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_id = input;
            self
        }
        /// Consumes the builder and constructs a [`ConfirmConnectionInput`](crate::input::ConfirmConnectionInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ConfirmConnectionInput, smithy_http::operation::BuildError> {
            if self.connection_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "connection_id",
                    details: "connection_id was not specified but it is required when building ConfirmConnectionInput",
                });
            }
            Ok(crate::input::ConfirmConnectionInput {
                connection_id: self.connection_id,
            })
        }
    }
}
impl ConfirmConnectionInput {
    /// Creates a new builder-style object to manufacture [`ConfirmConnectionInput`](crate::input::ConfirmConnectionInput)
    pub fn builder() -> crate::input::confirm_connection_input::Builder {
        crate::input::confirm_connection_input::Builder::default()
    }
}
impl ConfirmConnectionInput {
    /// Consumes the builder and constructs an Operation<[`ConfirmConnection`](crate::operation::ConfirmConnection)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::ConfirmConnection, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_confirm_connection(self);
        assemble_operation(config, "ConfirmConnection", crate::operation::ConfirmConnection::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ConfirmPrivateVirtualInterfaceInput {
    pub virtual_interface_id: std::option::Option<std::string::String>,
    pub virtual_gateway_id: std::option::Option<std::string::String>,
    pub direct_connect_gateway_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ConfirmPrivateVirtualInterfaceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ConfirmPrivateVirtualInterfaceInput");
        formatter.field("virtual_interface_id", &self.virtual_interface_id);
        formatter.field("virtual_gateway_id", &self.virtual_gateway_id);
        formatter.field("direct_connect_gateway_id", &self.direct_connect_gateway_id);
        formatter.finish()
    }
}
/// See [`ConfirmPrivateVirtualInterfaceInput`](crate::input::ConfirmPrivateVirtualInterfaceInput)
pub mod confirm_private_virtual_interface_input {
    /// A builder for [`ConfirmPrivateVirtualInterfaceInput`](crate::input::ConfirmPrivateVirtualInterfaceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) virtual_interface_id: std::option::Option<std::string::String>,
        pub(crate) virtual_gateway_id: std::option::Option<std::string::String>,
        pub(crate) direct_connect_gateway_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_id = Some(input.into());
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_id = input;
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
        /// Consumes the builder and constructs a [`ConfirmPrivateVirtualInterfaceInput`](crate::input::ConfirmPrivateVirtualInterfaceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ConfirmPrivateVirtualInterfaceInput, smithy_http::operation::BuildError> {
            if self.virtual_interface_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "virtual_interface_id",
                    details: "virtual_interface_id was not specified but it is required when building ConfirmPrivateVirtualInterfaceInput",
                });
            }
            Ok(crate::input::ConfirmPrivateVirtualInterfaceInput {
                virtual_interface_id: self.virtual_interface_id,
                virtual_gateway_id: self.virtual_gateway_id,
                direct_connect_gateway_id: self.direct_connect_gateway_id,
            })
        }
    }
}
impl ConfirmPrivateVirtualInterfaceInput {
    /// Creates a new builder-style object to manufacture [`ConfirmPrivateVirtualInterfaceInput`](crate::input::ConfirmPrivateVirtualInterfaceInput)
    pub fn builder() -> crate::input::confirm_private_virtual_interface_input::Builder {
        crate::input::confirm_private_virtual_interface_input::Builder::default()
    }
}
impl ConfirmPrivateVirtualInterfaceInput {
    /// Consumes the builder and constructs an Operation<[`ConfirmPrivateVirtualInterface`](crate::operation::ConfirmPrivateVirtualInterface)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::ConfirmPrivateVirtualInterface, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_confirm_private_virtual_interface(self);
        assemble_operation(config, "ConfirmPrivateVirtualInterface", crate::operation::ConfirmPrivateVirtualInterface::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ConfirmPublicVirtualInterfaceInput {
    pub virtual_interface_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ConfirmPublicVirtualInterfaceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ConfirmPublicVirtualInterfaceInput");
        formatter.field("virtual_interface_id", &self.virtual_interface_id);
        formatter.finish()
    }
}
/// See [`ConfirmPublicVirtualInterfaceInput`](crate::input::ConfirmPublicVirtualInterfaceInput)
pub mod confirm_public_virtual_interface_input {
    /// A builder for [`ConfirmPublicVirtualInterfaceInput`](crate::input::ConfirmPublicVirtualInterfaceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) virtual_interface_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_id = Some(input.into());
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_id = input;
            self
        }
        /// Consumes the builder and constructs a [`ConfirmPublicVirtualInterfaceInput`](crate::input::ConfirmPublicVirtualInterfaceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ConfirmPublicVirtualInterfaceInput, smithy_http::operation::BuildError> {
            if self.virtual_interface_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "virtual_interface_id",
                    details: "virtual_interface_id was not specified but it is required when building ConfirmPublicVirtualInterfaceInput",
                });
            }
            Ok(crate::input::ConfirmPublicVirtualInterfaceInput {
                virtual_interface_id: self.virtual_interface_id,
            })
        }
    }
}
impl ConfirmPublicVirtualInterfaceInput {
    /// Creates a new builder-style object to manufacture [`ConfirmPublicVirtualInterfaceInput`](crate::input::ConfirmPublicVirtualInterfaceInput)
    pub fn builder() -> crate::input::confirm_public_virtual_interface_input::Builder {
        crate::input::confirm_public_virtual_interface_input::Builder::default()
    }
}
impl ConfirmPublicVirtualInterfaceInput {
    /// Consumes the builder and constructs an Operation<[`ConfirmPublicVirtualInterface`](crate::operation::ConfirmPublicVirtualInterface)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::ConfirmPublicVirtualInterface, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_confirm_public_virtual_interface(self);
        assemble_operation(config, "ConfirmPublicVirtualInterface", crate::operation::ConfirmPublicVirtualInterface::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ConfirmTransitVirtualInterfaceInput {
    pub virtual_interface_id: std::option::Option<std::string::String>,
    pub direct_connect_gateway_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ConfirmTransitVirtualInterfaceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ConfirmTransitVirtualInterfaceInput");
        formatter.field("virtual_interface_id", &self.virtual_interface_id);
        formatter.field("direct_connect_gateway_id", &self.direct_connect_gateway_id);
        formatter.finish()
    }
}
/// See [`ConfirmTransitVirtualInterfaceInput`](crate::input::ConfirmTransitVirtualInterfaceInput)
pub mod confirm_transit_virtual_interface_input {
    /// A builder for [`ConfirmTransitVirtualInterfaceInput`](crate::input::ConfirmTransitVirtualInterfaceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) virtual_interface_id: std::option::Option<std::string::String>,
        pub(crate) direct_connect_gateway_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_id = Some(input.into());
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_id = input;
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
        /// Consumes the builder and constructs a [`ConfirmTransitVirtualInterfaceInput`](crate::input::ConfirmTransitVirtualInterfaceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ConfirmTransitVirtualInterfaceInput, smithy_http::operation::BuildError> {
            if self.virtual_interface_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "virtual_interface_id",
                    details: "virtual_interface_id was not specified but it is required when building ConfirmTransitVirtualInterfaceInput",
                });
            }
            if self.direct_connect_gateway_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "direct_connect_gateway_id",
                    details: "direct_connect_gateway_id was not specified but it is required when building ConfirmTransitVirtualInterfaceInput",
                });
            }
            Ok(crate::input::ConfirmTransitVirtualInterfaceInput {
                virtual_interface_id: self.virtual_interface_id,
                direct_connect_gateway_id: self.direct_connect_gateway_id,
            })
        }
    }
}
impl ConfirmTransitVirtualInterfaceInput {
    /// Creates a new builder-style object to manufacture [`ConfirmTransitVirtualInterfaceInput`](crate::input::ConfirmTransitVirtualInterfaceInput)
    pub fn builder() -> crate::input::confirm_transit_virtual_interface_input::Builder {
        crate::input::confirm_transit_virtual_interface_input::Builder::default()
    }
}
impl ConfirmTransitVirtualInterfaceInput {
    /// Consumes the builder and constructs an Operation<[`ConfirmTransitVirtualInterface`](crate::operation::ConfirmTransitVirtualInterface)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::ConfirmTransitVirtualInterface, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_confirm_transit_virtual_interface(self);
        assemble_operation(config, "ConfirmTransitVirtualInterface", crate::operation::ConfirmTransitVirtualInterface::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CreateBgpPeerInput {
    pub virtual_interface_id: std::option::Option<std::string::String>,
    pub new_bgp_peer: std::option::Option<crate::model::NewBgpPeer>,
}
impl std::fmt::Debug for CreateBgpPeerInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateBgpPeerInput");
        formatter.field("virtual_interface_id", &self.virtual_interface_id);
        formatter.field("new_bgp_peer", &self.new_bgp_peer);
        formatter.finish()
    }
}
/// See [`CreateBgpPeerInput`](crate::input::CreateBgpPeerInput)
pub mod create_bgp_peer_input {
    /// A builder for [`CreateBgpPeerInput`](crate::input::CreateBgpPeerInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) virtual_interface_id: std::option::Option<std::string::String>,
        pub(crate) new_bgp_peer: std::option::Option<crate::model::NewBgpPeer>,
    }
    impl Builder {
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_id = Some(input.into());
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_id = input;
            self
        }
        pub fn new_bgp_peer(mut self, input: crate::model::NewBgpPeer) -> Self {
            self.new_bgp_peer = Some(input);
            self
        }
        pub fn set_new_bgp_peer(mut self, input: std::option::Option<crate::model::NewBgpPeer>) -> Self {
            self.new_bgp_peer = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateBgpPeerInput`](crate::input::CreateBgpPeerInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateBgpPeerInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateBgpPeerInput {
                virtual_interface_id: self.virtual_interface_id,
                new_bgp_peer: self.new_bgp_peer,
            })
        }
    }
}
impl CreateBgpPeerInput {
    /// Creates a new builder-style object to manufacture [`CreateBgpPeerInput`](crate::input::CreateBgpPeerInput)
    pub fn builder() -> crate::input::create_bgp_peer_input::Builder {
        crate::input::create_bgp_peer_input::Builder::default()
    }
}
impl CreateBgpPeerInput {
    /// Consumes the builder and constructs an Operation<[`CreateBgpPeer`](crate::operation::CreateBgpPeer)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::CreateBgpPeer, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_create_bgp_peer(self);
        assemble_operation(config, "CreateBGPPeer", crate::operation::CreateBgpPeer::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CreateConnectionInput {
    pub location: std::option::Option<std::string::String>,
    /// The bandwidth of the connection.
    pub bandwidth: std::option::Option<std::string::String>,
    pub connection_name: std::option::Option<std::string::String>,
    pub lag_id: std::option::Option<std::string::String>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    pub provider_name: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for CreateConnectionInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateConnectionInput");
        formatter.field("location", &self.location);
        formatter.field("bandwidth", &self.bandwidth);
        formatter.field("connection_name", &self.connection_name);
        formatter.field("lag_id", &self.lag_id);
        formatter.field("tags", &self.tags);
        formatter.field("provider_name", &self.provider_name);
        formatter.finish()
    }
}
/// See [`CreateConnectionInput`](crate::input::CreateConnectionInput)
pub mod create_connection_input {
    /// A builder for [`CreateConnectionInput`](crate::input::CreateConnectionInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) location: std::option::Option<std::string::String>,
        pub(crate) bandwidth: std::option::Option<std::string::String>,
        pub(crate) connection_name: std::option::Option<std::string::String>,
        pub(crate) lag_id: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        pub(crate) provider_name: std::option::Option<std::string::String>,
    }
    impl Builder {
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
        pub fn connection_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_name = Some(input.into());
            self
        }
        pub fn set_connection_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_name = input;
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
        /// Consumes the builder and constructs a [`CreateConnectionInput`](crate::input::CreateConnectionInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateConnectionInput, smithy_http::operation::BuildError> {
            if self.location.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "location",
                    details: "location was not specified but it is required when building CreateConnectionInput",
                });
            }
            if self.bandwidth.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "bandwidth",
                    details: "bandwidth was not specified but it is required when building CreateConnectionInput",
                });
            }
            if self.connection_name.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "connection_name",
                    details: "connection_name was not specified but it is required when building CreateConnectionInput",
                });
            }
            Ok(crate::input::CreateConnectionInput {
                location: self.location,
                bandwidth: self.bandwidth,
                connection_name: self.connection_name,
                lag_id: self.lag_id,
                tags: self.tags,
                provider_name: self.provider_name,
            })
        }
    }
}
impl CreateConnectionInput {
    /// Creates a new builder-style object to manufacture [`CreateConnectionInput`](crate::input::CreateConnectionInput)
    pub fn builder() -> crate::input::create_connection_input::Builder {
        crate::input::create_connection_input::Builder::default()
    }
}
impl CreateConnectionInput {
    /// Consumes the builder and constructs an Operation<[`CreateConnection`](crate::operation::CreateConnection)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::CreateConnection, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_create_connection(self);
        assemble_operation(config, "CreateConnection", crate::operation::CreateConnection::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CreateDirectConnectGatewayInput {
    pub direct_connect_gateway_name: std::option::Option<std::string::String>,
    pub amazon_side_asn: std::option::Option<i64>,
}
impl std::fmt::Debug for CreateDirectConnectGatewayInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateDirectConnectGatewayInput");
        formatter.field("direct_connect_gateway_name", &self.direct_connect_gateway_name);
        formatter.field("amazon_side_asn", &self.amazon_side_asn);
        formatter.finish()
    }
}
/// See [`CreateDirectConnectGatewayInput`](crate::input::CreateDirectConnectGatewayInput)
pub mod create_direct_connect_gateway_input {
    /// A builder for [`CreateDirectConnectGatewayInput`](crate::input::CreateDirectConnectGatewayInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) direct_connect_gateway_name: std::option::Option<std::string::String>,
        pub(crate) amazon_side_asn: std::option::Option<i64>,
    }
    impl Builder {
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
        /// Consumes the builder and constructs a [`CreateDirectConnectGatewayInput`](crate::input::CreateDirectConnectGatewayInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateDirectConnectGatewayInput, smithy_http::operation::BuildError> {
            if self.direct_connect_gateway_name.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "direct_connect_gateway_name",
                    details: "direct_connect_gateway_name was not specified but it is required when building CreateDirectConnectGatewayInput",
                });
            }
            Ok(crate::input::CreateDirectConnectGatewayInput {
                direct_connect_gateway_name: self.direct_connect_gateway_name,
                amazon_side_asn: self.amazon_side_asn,
            })
        }
    }
}
impl CreateDirectConnectGatewayInput {
    /// Creates a new builder-style object to manufacture [`CreateDirectConnectGatewayInput`](crate::input::CreateDirectConnectGatewayInput)
    pub fn builder() -> crate::input::create_direct_connect_gateway_input::Builder {
        crate::input::create_direct_connect_gateway_input::Builder::default()
    }
}
impl CreateDirectConnectGatewayInput {
    /// Consumes the builder and constructs an Operation<[`CreateDirectConnectGateway`](crate::operation::CreateDirectConnectGateway)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::CreateDirectConnectGateway, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_create_direct_connect_gateway(self);
        assemble_operation(config, "CreateDirectConnectGateway", crate::operation::CreateDirectConnectGateway::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CreateDirectConnectGatewayAssociationInput {
    pub direct_connect_gateway_id: std::option::Option<std::string::String>,
    pub gateway_id: std::option::Option<std::string::String>,
    pub add_allowed_prefixes_to_direct_connect_gateway: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
    pub virtual_gateway_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for CreateDirectConnectGatewayAssociationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateDirectConnectGatewayAssociationInput");
        formatter.field("direct_connect_gateway_id", &self.direct_connect_gateway_id);
        formatter.field("gateway_id", &self.gateway_id);
        formatter.field("add_allowed_prefixes_to_direct_connect_gateway", &self.add_allowed_prefixes_to_direct_connect_gateway);
        formatter.field("virtual_gateway_id", &self.virtual_gateway_id);
        formatter.finish()
    }
}
/// See [`CreateDirectConnectGatewayAssociationInput`](crate::input::CreateDirectConnectGatewayAssociationInput)
pub mod create_direct_connect_gateway_association_input {
    /// A builder for [`CreateDirectConnectGatewayAssociationInput`](crate::input::CreateDirectConnectGatewayAssociationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) direct_connect_gateway_id: std::option::Option<std::string::String>,
        pub(crate) gateway_id: std::option::Option<std::string::String>,
        pub(crate) add_allowed_prefixes_to_direct_connect_gateway: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
        pub(crate) virtual_gateway_id: std::option::Option<std::string::String>,
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
        pub fn gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.gateway_id = Some(input.into());
            self
        }
        pub fn set_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.gateway_id = input;
            self
        }
        /// Appends an item to `add_allowed_prefixes_to_direct_connect_gateway`.
        pub fn add_allowed_prefixes_to_direct_connect_gateway(mut self, input: impl Into<crate::model::RouteFilterPrefix>) -> Self {
            let mut v = self.add_allowed_prefixes_to_direct_connect_gateway.unwrap_or_default();
            v.push(input.into());
            self.add_allowed_prefixes_to_direct_connect_gateway = Some(v);
            self
        }
        pub fn set_add_allowed_prefixes_to_direct_connect_gateway(mut self, input: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>) -> Self {
            self.add_allowed_prefixes_to_direct_connect_gateway = input;
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
        /// Consumes the builder and constructs a [`CreateDirectConnectGatewayAssociationInput`](crate::input::CreateDirectConnectGatewayAssociationInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateDirectConnectGatewayAssociationInput, smithy_http::operation::BuildError> {
            if self.direct_connect_gateway_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "direct_connect_gateway_id",
                    details: "direct_connect_gateway_id was not specified but it is required when building CreateDirectConnectGatewayAssociationInput",
                });
            }
            Ok(crate::input::CreateDirectConnectGatewayAssociationInput {
                direct_connect_gateway_id: self.direct_connect_gateway_id,
                gateway_id: self.gateway_id,
                add_allowed_prefixes_to_direct_connect_gateway: self.add_allowed_prefixes_to_direct_connect_gateway,
                virtual_gateway_id: self.virtual_gateway_id,
            })
        }
    }
}
impl CreateDirectConnectGatewayAssociationInput {
    /// Creates a new builder-style object to manufacture [`CreateDirectConnectGatewayAssociationInput`](crate::input::CreateDirectConnectGatewayAssociationInput)
    pub fn builder() -> crate::input::create_direct_connect_gateway_association_input::Builder {
        crate::input::create_direct_connect_gateway_association_input::Builder::default()
    }
}
impl CreateDirectConnectGatewayAssociationInput {
    /// Consumes the builder and constructs an Operation<[`CreateDirectConnectGatewayAssociation`](crate::operation::CreateDirectConnectGatewayAssociation)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::CreateDirectConnectGatewayAssociation, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_create_direct_connect_gateway_association(self);
        assemble_operation(config, "CreateDirectConnectGatewayAssociation", crate::operation::CreateDirectConnectGatewayAssociation::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CreateDirectConnectGatewayAssociationProposalInput {
    pub direct_connect_gateway_id: std::option::Option<std::string::String>,
    pub direct_connect_gateway_owner_account: std::option::Option<std::string::String>,
    pub gateway_id: std::option::Option<std::string::String>,
    pub add_allowed_prefixes_to_direct_connect_gateway: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
    pub remove_allowed_prefixes_to_direct_connect_gateway: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
}
impl std::fmt::Debug for CreateDirectConnectGatewayAssociationProposalInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateDirectConnectGatewayAssociationProposalInput");
        formatter.field("direct_connect_gateway_id", &self.direct_connect_gateway_id);
        formatter.field("direct_connect_gateway_owner_account", &self.direct_connect_gateway_owner_account);
        formatter.field("gateway_id", &self.gateway_id);
        formatter.field("add_allowed_prefixes_to_direct_connect_gateway", &self.add_allowed_prefixes_to_direct_connect_gateway);
        formatter.field("remove_allowed_prefixes_to_direct_connect_gateway", &self.remove_allowed_prefixes_to_direct_connect_gateway);
        formatter.finish()
    }
}
/// See [`CreateDirectConnectGatewayAssociationProposalInput`](crate::input::CreateDirectConnectGatewayAssociationProposalInput)
pub mod create_direct_connect_gateway_association_proposal_input {
    /// A builder for [`CreateDirectConnectGatewayAssociationProposalInput`](crate::input::CreateDirectConnectGatewayAssociationProposalInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) direct_connect_gateway_id: std::option::Option<std::string::String>,
        pub(crate) direct_connect_gateway_owner_account: std::option::Option<std::string::String>,
        pub(crate) gateway_id: std::option::Option<std::string::String>,
        pub(crate) add_allowed_prefixes_to_direct_connect_gateway: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
        pub(crate) remove_allowed_prefixes_to_direct_connect_gateway: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
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
        pub fn gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.gateway_id = Some(input.into());
            self
        }
        pub fn set_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.gateway_id = input;
            self
        }
        /// Appends an item to `add_allowed_prefixes_to_direct_connect_gateway`.
        pub fn add_allowed_prefixes_to_direct_connect_gateway(mut self, input: impl Into<crate::model::RouteFilterPrefix>) -> Self {
            let mut v = self.add_allowed_prefixes_to_direct_connect_gateway.unwrap_or_default();
            v.push(input.into());
            self.add_allowed_prefixes_to_direct_connect_gateway = Some(v);
            self
        }
        pub fn set_add_allowed_prefixes_to_direct_connect_gateway(mut self, input: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>) -> Self {
            self.add_allowed_prefixes_to_direct_connect_gateway = input;
            self
        }
        /// Appends an item to `remove_allowed_prefixes_to_direct_connect_gateway`.
        pub fn remove_allowed_prefixes_to_direct_connect_gateway(mut self, input: impl Into<crate::model::RouteFilterPrefix>) -> Self {
            let mut v = self.remove_allowed_prefixes_to_direct_connect_gateway.unwrap_or_default();
            v.push(input.into());
            self.remove_allowed_prefixes_to_direct_connect_gateway = Some(v);
            self
        }
        pub fn set_remove_allowed_prefixes_to_direct_connect_gateway(mut self, input: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>) -> Self {
            self.remove_allowed_prefixes_to_direct_connect_gateway = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateDirectConnectGatewayAssociationProposalInput`](crate::input::CreateDirectConnectGatewayAssociationProposalInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateDirectConnectGatewayAssociationProposalInput, smithy_http::operation::BuildError> {
            if self.direct_connect_gateway_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "direct_connect_gateway_id",
                    details: "direct_connect_gateway_id was not specified but it is required when building CreateDirectConnectGatewayAssociationProposalInput",
                });
            }
            if self.direct_connect_gateway_owner_account.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "direct_connect_gateway_owner_account",
                    details: "direct_connect_gateway_owner_account was not specified but it is required when building CreateDirectConnectGatewayAssociationProposalInput",
                });
            }
            if self.gateway_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "gateway_id",
                    details: "gateway_id was not specified but it is required when building CreateDirectConnectGatewayAssociationProposalInput",
                });
            }
            Ok(crate::input::CreateDirectConnectGatewayAssociationProposalInput {
                direct_connect_gateway_id: self.direct_connect_gateway_id,
                direct_connect_gateway_owner_account: self.direct_connect_gateway_owner_account,
                gateway_id: self.gateway_id,
                add_allowed_prefixes_to_direct_connect_gateway: self.add_allowed_prefixes_to_direct_connect_gateway,
                remove_allowed_prefixes_to_direct_connect_gateway: self.remove_allowed_prefixes_to_direct_connect_gateway,
            })
        }
    }
}
impl CreateDirectConnectGatewayAssociationProposalInput {
    /// Creates a new builder-style object to manufacture [`CreateDirectConnectGatewayAssociationProposalInput`](crate::input::CreateDirectConnectGatewayAssociationProposalInput)
    pub fn builder() -> crate::input::create_direct_connect_gateway_association_proposal_input::Builder {
        crate::input::create_direct_connect_gateway_association_proposal_input::Builder::default()
    }
}
impl CreateDirectConnectGatewayAssociationProposalInput {
    /// Consumes the builder and constructs an Operation<[`CreateDirectConnectGatewayAssociationProposal`](crate::operation::CreateDirectConnectGatewayAssociationProposal)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::CreateDirectConnectGatewayAssociationProposal, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_create_direct_connect_gateway_association_proposal(self);
        assemble_operation(config, "CreateDirectConnectGatewayAssociationProposal", crate::operation::CreateDirectConnectGatewayAssociationProposal::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CreateInterconnectInput {
    pub interconnect_name: std::option::Option<std::string::String>,
    pub bandwidth: std::option::Option<std::string::String>,
    pub location: std::option::Option<std::string::String>,
    pub lag_id: std::option::Option<std::string::String>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    pub provider_name: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for CreateInterconnectInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateInterconnectInput");
        formatter.field("interconnect_name", &self.interconnect_name);
        formatter.field("bandwidth", &self.bandwidth);
        formatter.field("location", &self.location);
        formatter.field("lag_id", &self.lag_id);
        formatter.field("tags", &self.tags);
        formatter.field("provider_name", &self.provider_name);
        formatter.finish()
    }
}
/// See [`CreateInterconnectInput`](crate::input::CreateInterconnectInput)
pub mod create_interconnect_input {
    /// A builder for [`CreateInterconnectInput`](crate::input::CreateInterconnectInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) interconnect_name: std::option::Option<std::string::String>,
        pub(crate) bandwidth: std::option::Option<std::string::String>,
        pub(crate) location: std::option::Option<std::string::String>,
        pub(crate) lag_id: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        pub(crate) provider_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn interconnect_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.interconnect_name = Some(input.into());
            self
        }
        pub fn set_interconnect_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.interconnect_name = input;
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
        pub fn location(mut self, input: impl Into<std::string::String>) -> Self {
            self.location = Some(input.into());
            self
        }
        pub fn set_location(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.location = input;
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
        /// Consumes the builder and constructs a [`CreateInterconnectInput`](crate::input::CreateInterconnectInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateInterconnectInput, smithy_http::operation::BuildError> {
            if self.interconnect_name.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "interconnect_name",
                    details: "interconnect_name was not specified but it is required when building CreateInterconnectInput",
                });
            }
            if self.bandwidth.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "bandwidth",
                    details: "bandwidth was not specified but it is required when building CreateInterconnectInput",
                });
            }
            if self.location.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "location",
                    details: "location was not specified but it is required when building CreateInterconnectInput",
                });
            }
            Ok(crate::input::CreateInterconnectInput {
                interconnect_name: self.interconnect_name,
                bandwidth: self.bandwidth,
                location: self.location,
                lag_id: self.lag_id,
                tags: self.tags,
                provider_name: self.provider_name,
            })
        }
    }
}
impl CreateInterconnectInput {
    /// Creates a new builder-style object to manufacture [`CreateInterconnectInput`](crate::input::CreateInterconnectInput)
    pub fn builder() -> crate::input::create_interconnect_input::Builder {
        crate::input::create_interconnect_input::Builder::default()
    }
}
impl CreateInterconnectInput {
    /// Consumes the builder and constructs an Operation<[`CreateInterconnect`](crate::operation::CreateInterconnect)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::CreateInterconnect, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_create_interconnect(self);
        assemble_operation(config, "CreateInterconnect", crate::operation::CreateInterconnect::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CreateLagInput {
    pub number_of_connections: std::option::Option<i32>,
    pub location: std::option::Option<std::string::String>,
    pub connections_bandwidth: std::option::Option<std::string::String>,
    pub lag_name: std::option::Option<std::string::String>,
    pub connection_id: std::option::Option<std::string::String>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    pub child_connection_tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    pub provider_name: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for CreateLagInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateLagInput");
        formatter.field("number_of_connections", &self.number_of_connections);
        formatter.field("location", &self.location);
        formatter.field("connections_bandwidth", &self.connections_bandwidth);
        formatter.field("lag_name", &self.lag_name);
        formatter.field("connection_id", &self.connection_id);
        formatter.field("tags", &self.tags);
        formatter.field("child_connection_tags", &self.child_connection_tags);
        formatter.field("provider_name", &self.provider_name);
        formatter.finish()
    }
}
/// See [`CreateLagInput`](crate::input::CreateLagInput)
pub mod create_lag_input {
    /// A builder for [`CreateLagInput`](crate::input::CreateLagInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) number_of_connections: std::option::Option<i32>,
        pub(crate) location: std::option::Option<std::string::String>,
        pub(crate) connections_bandwidth: std::option::Option<std::string::String>,
        pub(crate) lag_name: std::option::Option<std::string::String>,
        pub(crate) connection_id: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        pub(crate) child_connection_tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        pub(crate) provider_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn number_of_connections(mut self, input: i32) -> Self {
            self.number_of_connections = Some(input);
            self
        }
        pub fn set_number_of_connections(mut self, input: std::option::Option<i32>) -> Self {
            self.number_of_connections = input;
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
        pub fn connections_bandwidth(mut self, input: impl Into<std::string::String>) -> Self {
            self.connections_bandwidth = Some(input.into());
            self
        }
        pub fn set_connections_bandwidth(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connections_bandwidth = input;
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
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(input.into());
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_id = input;
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
        /// Appends an item to `child_connection_tags`.
        pub fn child_connection_tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.child_connection_tags.unwrap_or_default();
            v.push(input.into());
            self.child_connection_tags = Some(v);
            self
        }
        pub fn set_child_connection_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.child_connection_tags = input;
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
        /// Consumes the builder and constructs a [`CreateLagInput`](crate::input::CreateLagInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateLagInput, smithy_http::operation::BuildError> {
            if self.number_of_connections.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "number_of_connections",
                    details: "number_of_connections was not specified but it is required when building CreateLagInput",
                });
            }
            if self.location.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "location",
                    details: "location was not specified but it is required when building CreateLagInput",
                });
            }
            if self.connections_bandwidth.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "connections_bandwidth",
                    details: "connections_bandwidth was not specified but it is required when building CreateLagInput",
                });
            }
            if self.lag_name.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "lag_name",
                    details: "lag_name was not specified but it is required when building CreateLagInput",
                });
            }
            Ok(crate::input::CreateLagInput {
                number_of_connections: self.number_of_connections,
                location: self.location,
                connections_bandwidth: self.connections_bandwidth,
                lag_name: self.lag_name,
                connection_id: self.connection_id,
                tags: self.tags,
                child_connection_tags: self.child_connection_tags,
                provider_name: self.provider_name,
            })
        }
    }
}
impl CreateLagInput {
    /// Creates a new builder-style object to manufacture [`CreateLagInput`](crate::input::CreateLagInput)
    pub fn builder() -> crate::input::create_lag_input::Builder {
        crate::input::create_lag_input::Builder::default()
    }
}
impl CreateLagInput {
    /// Consumes the builder and constructs an Operation<[`CreateLag`](crate::operation::CreateLag)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::CreateLag, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_create_lag(self);
        assemble_operation(config, "CreateLag", crate::operation::CreateLag::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CreatePrivateVirtualInterfaceInput {
    pub connection_id: std::option::Option<std::string::String>,
    pub new_private_virtual_interface: std::option::Option<crate::model::NewPrivateVirtualInterface>,
}
impl std::fmt::Debug for CreatePrivateVirtualInterfaceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreatePrivateVirtualInterfaceInput");
        formatter.field("connection_id", &self.connection_id);
        formatter.field("new_private_virtual_interface", &self.new_private_virtual_interface);
        formatter.finish()
    }
}
/// See [`CreatePrivateVirtualInterfaceInput`](crate::input::CreatePrivateVirtualInterfaceInput)
pub mod create_private_virtual_interface_input {
    /// A builder for [`CreatePrivateVirtualInterfaceInput`](crate::input::CreatePrivateVirtualInterfaceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) connection_id: std::option::Option<std::string::String>,
        pub(crate) new_private_virtual_interface: std::option::Option<crate::model::NewPrivateVirtualInterface>,
    }
    impl Builder {
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(input.into());
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_id = input;
            self
        }
        pub fn new_private_virtual_interface(mut self, input: crate::model::NewPrivateVirtualInterface) -> Self {
            self.new_private_virtual_interface = Some(input);
            self
        }
        pub fn set_new_private_virtual_interface(mut self, input: std::option::Option<crate::model::NewPrivateVirtualInterface>) -> Self {
            self.new_private_virtual_interface = input;
            self
        }
        /// Consumes the builder and constructs a [`CreatePrivateVirtualInterfaceInput`](crate::input::CreatePrivateVirtualInterfaceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreatePrivateVirtualInterfaceInput, smithy_http::operation::BuildError> {
            if self.connection_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "connection_id",
                    details: "connection_id was not specified but it is required when building CreatePrivateVirtualInterfaceInput",
                });
            }
            if self.new_private_virtual_interface.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "new_private_virtual_interface",
                    details: "new_private_virtual_interface was not specified but it is required when building CreatePrivateVirtualInterfaceInput",
                });
            }
            Ok(crate::input::CreatePrivateVirtualInterfaceInput {
                connection_id: self.connection_id,
                new_private_virtual_interface: self.new_private_virtual_interface,
            })
        }
    }
}
impl CreatePrivateVirtualInterfaceInput {
    /// Creates a new builder-style object to manufacture [`CreatePrivateVirtualInterfaceInput`](crate::input::CreatePrivateVirtualInterfaceInput)
    pub fn builder() -> crate::input::create_private_virtual_interface_input::Builder {
        crate::input::create_private_virtual_interface_input::Builder::default()
    }
}
impl CreatePrivateVirtualInterfaceInput {
    /// Consumes the builder and constructs an Operation<[`CreatePrivateVirtualInterface`](crate::operation::CreatePrivateVirtualInterface)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::CreatePrivateVirtualInterface, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_create_private_virtual_interface(self);
        assemble_operation(config, "CreatePrivateVirtualInterface", crate::operation::CreatePrivateVirtualInterface::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CreatePublicVirtualInterfaceInput {
    pub connection_id: std::option::Option<std::string::String>,
    pub new_public_virtual_interface: std::option::Option<crate::model::NewPublicVirtualInterface>,
}
impl std::fmt::Debug for CreatePublicVirtualInterfaceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreatePublicVirtualInterfaceInput");
        formatter.field("connection_id", &self.connection_id);
        formatter.field("new_public_virtual_interface", &self.new_public_virtual_interface);
        formatter.finish()
    }
}
/// See [`CreatePublicVirtualInterfaceInput`](crate::input::CreatePublicVirtualInterfaceInput)
pub mod create_public_virtual_interface_input {
    /// A builder for [`CreatePublicVirtualInterfaceInput`](crate::input::CreatePublicVirtualInterfaceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) connection_id: std::option::Option<std::string::String>,
        pub(crate) new_public_virtual_interface: std::option::Option<crate::model::NewPublicVirtualInterface>,
    }
    impl Builder {
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(input.into());
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_id = input;
            self
        }
        pub fn new_public_virtual_interface(mut self, input: crate::model::NewPublicVirtualInterface) -> Self {
            self.new_public_virtual_interface = Some(input);
            self
        }
        pub fn set_new_public_virtual_interface(mut self, input: std::option::Option<crate::model::NewPublicVirtualInterface>) -> Self {
            self.new_public_virtual_interface = input;
            self
        }
        /// Consumes the builder and constructs a [`CreatePublicVirtualInterfaceInput`](crate::input::CreatePublicVirtualInterfaceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreatePublicVirtualInterfaceInput, smithy_http::operation::BuildError> {
            if self.connection_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "connection_id",
                    details: "connection_id was not specified but it is required when building CreatePublicVirtualInterfaceInput",
                });
            }
            if self.new_public_virtual_interface.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "new_public_virtual_interface",
                    details: "new_public_virtual_interface was not specified but it is required when building CreatePublicVirtualInterfaceInput",
                });
            }
            Ok(crate::input::CreatePublicVirtualInterfaceInput {
                connection_id: self.connection_id,
                new_public_virtual_interface: self.new_public_virtual_interface,
            })
        }
    }
}
impl CreatePublicVirtualInterfaceInput {
    /// Creates a new builder-style object to manufacture [`CreatePublicVirtualInterfaceInput`](crate::input::CreatePublicVirtualInterfaceInput)
    pub fn builder() -> crate::input::create_public_virtual_interface_input::Builder {
        crate::input::create_public_virtual_interface_input::Builder::default()
    }
}
impl CreatePublicVirtualInterfaceInput {
    /// Consumes the builder and constructs an Operation<[`CreatePublicVirtualInterface`](crate::operation::CreatePublicVirtualInterface)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::CreatePublicVirtualInterface, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_create_public_virtual_interface(self);
        assemble_operation(config, "CreatePublicVirtualInterface", crate::operation::CreatePublicVirtualInterface::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CreateTransitVirtualInterfaceInput {
    pub connection_id: std::option::Option<std::string::String>,
    pub new_transit_virtual_interface: std::option::Option<crate::model::NewTransitVirtualInterface>,
}
impl std::fmt::Debug for CreateTransitVirtualInterfaceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateTransitVirtualInterfaceInput");
        formatter.field("connection_id", &self.connection_id);
        formatter.field("new_transit_virtual_interface", &self.new_transit_virtual_interface);
        formatter.finish()
    }
}
/// See [`CreateTransitVirtualInterfaceInput`](crate::input::CreateTransitVirtualInterfaceInput)
pub mod create_transit_virtual_interface_input {
    /// A builder for [`CreateTransitVirtualInterfaceInput`](crate::input::CreateTransitVirtualInterfaceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) connection_id: std::option::Option<std::string::String>,
        pub(crate) new_transit_virtual_interface: std::option::Option<crate::model::NewTransitVirtualInterface>,
    }
    impl Builder {
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(input.into());
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_id = input;
            self
        }
        pub fn new_transit_virtual_interface(mut self, input: crate::model::NewTransitVirtualInterface) -> Self {
            self.new_transit_virtual_interface = Some(input);
            self
        }
        pub fn set_new_transit_virtual_interface(mut self, input: std::option::Option<crate::model::NewTransitVirtualInterface>) -> Self {
            self.new_transit_virtual_interface = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateTransitVirtualInterfaceInput`](crate::input::CreateTransitVirtualInterfaceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateTransitVirtualInterfaceInput, smithy_http::operation::BuildError> {
            if self.connection_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "connection_id",
                    details: "connection_id was not specified but it is required when building CreateTransitVirtualInterfaceInput",
                });
            }
            if self.new_transit_virtual_interface.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "new_transit_virtual_interface",
                    details: "new_transit_virtual_interface was not specified but it is required when building CreateTransitVirtualInterfaceInput",
                });
            }
            Ok(crate::input::CreateTransitVirtualInterfaceInput {
                connection_id: self.connection_id,
                new_transit_virtual_interface: self.new_transit_virtual_interface,
            })
        }
    }
}
impl CreateTransitVirtualInterfaceInput {
    /// Creates a new builder-style object to manufacture [`CreateTransitVirtualInterfaceInput`](crate::input::CreateTransitVirtualInterfaceInput)
    pub fn builder() -> crate::input::create_transit_virtual_interface_input::Builder {
        crate::input::create_transit_virtual_interface_input::Builder::default()
    }
}
impl CreateTransitVirtualInterfaceInput {
    /// Consumes the builder and constructs an Operation<[`CreateTransitVirtualInterface`](crate::operation::CreateTransitVirtualInterface)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::CreateTransitVirtualInterface, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_create_transit_virtual_interface(self);
        assemble_operation(config, "CreateTransitVirtualInterface", crate::operation::CreateTransitVirtualInterface::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteBgpPeerInput {
    pub virtual_interface_id: std::option::Option<std::string::String>,
    pub asn: std::option::Option<i32>,
    pub customer_address: std::option::Option<std::string::String>,
    pub bgp_peer_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DeleteBgpPeerInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteBgpPeerInput");
        formatter.field("virtual_interface_id", &self.virtual_interface_id);
        formatter.field("asn", &self.asn);
        formatter.field("customer_address", &self.customer_address);
        formatter.field("bgp_peer_id", &self.bgp_peer_id);
        formatter.finish()
    }
}
/// See [`DeleteBgpPeerInput`](crate::input::DeleteBgpPeerInput)
pub mod delete_bgp_peer_input {
    /// A builder for [`DeleteBgpPeerInput`](crate::input::DeleteBgpPeerInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) virtual_interface_id: std::option::Option<std::string::String>,
        pub(crate) asn: std::option::Option<i32>,
        pub(crate) customer_address: std::option::Option<std::string::String>,
        pub(crate) bgp_peer_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_id = Some(input.into());
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_id = input;
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
        pub fn customer_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.customer_address = Some(input.into());
            self
        }
        pub fn set_customer_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.customer_address = input;
            self
        }
        pub fn bgp_peer_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.bgp_peer_id = Some(input.into());
            self
        }
        pub fn set_bgp_peer_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.bgp_peer_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteBgpPeerInput`](crate::input::DeleteBgpPeerInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteBgpPeerInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteBgpPeerInput {
                virtual_interface_id: self.virtual_interface_id,
                asn: self.asn,
                customer_address: self.customer_address,
                bgp_peer_id: self.bgp_peer_id,
            })
        }
    }
}
impl DeleteBgpPeerInput {
    /// Creates a new builder-style object to manufacture [`DeleteBgpPeerInput`](crate::input::DeleteBgpPeerInput)
    pub fn builder() -> crate::input::delete_bgp_peer_input::Builder {
        crate::input::delete_bgp_peer_input::Builder::default()
    }
}
impl DeleteBgpPeerInput {
    /// Consumes the builder and constructs an Operation<[`DeleteBgpPeer`](crate::operation::DeleteBgpPeer)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DeleteBgpPeer, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_delete_bgp_peer(self);
        assemble_operation(config, "DeleteBGPPeer", crate::operation::DeleteBgpPeer::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteConnectionInput {
    pub connection_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DeleteConnectionInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteConnectionInput");
        formatter.field("connection_id", &self.connection_id);
        formatter.finish()
    }
}
/// See [`DeleteConnectionInput`](crate::input::DeleteConnectionInput)
pub mod delete_connection_input {
    /// A builder for [`DeleteConnectionInput`](crate::input::DeleteConnectionInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) connection_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(input.into());
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteConnectionInput`](crate::input::DeleteConnectionInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteConnectionInput, smithy_http::operation::BuildError> {
            if self.connection_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "connection_id",
                    details: "connection_id was not specified but it is required when building DeleteConnectionInput",
                });
            }
            Ok(crate::input::DeleteConnectionInput {
                connection_id: self.connection_id,
            })
        }
    }
}
impl DeleteConnectionInput {
    /// Creates a new builder-style object to manufacture [`DeleteConnectionInput`](crate::input::DeleteConnectionInput)
    pub fn builder() -> crate::input::delete_connection_input::Builder {
        crate::input::delete_connection_input::Builder::default()
    }
}
impl DeleteConnectionInput {
    /// Consumes the builder and constructs an Operation<[`DeleteConnection`](crate::operation::DeleteConnection)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DeleteConnection, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_delete_connection(self);
        assemble_operation(config, "DeleteConnection", crate::operation::DeleteConnection::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteDirectConnectGatewayInput {
    pub direct_connect_gateway_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DeleteDirectConnectGatewayInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteDirectConnectGatewayInput");
        formatter.field("direct_connect_gateway_id", &self.direct_connect_gateway_id);
        formatter.finish()
    }
}
/// See [`DeleteDirectConnectGatewayInput`](crate::input::DeleteDirectConnectGatewayInput)
pub mod delete_direct_connect_gateway_input {
    /// A builder for [`DeleteDirectConnectGatewayInput`](crate::input::DeleteDirectConnectGatewayInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) direct_connect_gateway_id: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DeleteDirectConnectGatewayInput`](crate::input::DeleteDirectConnectGatewayInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteDirectConnectGatewayInput, smithy_http::operation::BuildError> {
            if self.direct_connect_gateway_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "direct_connect_gateway_id",
                    details: "direct_connect_gateway_id was not specified but it is required when building DeleteDirectConnectGatewayInput",
                });
            }
            Ok(crate::input::DeleteDirectConnectGatewayInput {
                direct_connect_gateway_id: self.direct_connect_gateway_id,
            })
        }
    }
}
impl DeleteDirectConnectGatewayInput {
    /// Creates a new builder-style object to manufacture [`DeleteDirectConnectGatewayInput`](crate::input::DeleteDirectConnectGatewayInput)
    pub fn builder() -> crate::input::delete_direct_connect_gateway_input::Builder {
        crate::input::delete_direct_connect_gateway_input::Builder::default()
    }
}
impl DeleteDirectConnectGatewayInput {
    /// Consumes the builder and constructs an Operation<[`DeleteDirectConnectGateway`](crate::operation::DeleteDirectConnectGateway)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DeleteDirectConnectGateway, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_delete_direct_connect_gateway(self);
        assemble_operation(config, "DeleteDirectConnectGateway", crate::operation::DeleteDirectConnectGateway::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteDirectConnectGatewayAssociationInput {
    pub association_id: std::option::Option<std::string::String>,
    pub direct_connect_gateway_id: std::option::Option<std::string::String>,
    pub virtual_gateway_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DeleteDirectConnectGatewayAssociationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteDirectConnectGatewayAssociationInput");
        formatter.field("association_id", &self.association_id);
        formatter.field("direct_connect_gateway_id", &self.direct_connect_gateway_id);
        formatter.field("virtual_gateway_id", &self.virtual_gateway_id);
        formatter.finish()
    }
}
/// See [`DeleteDirectConnectGatewayAssociationInput`](crate::input::DeleteDirectConnectGatewayAssociationInput)
pub mod delete_direct_connect_gateway_association_input {
    /// A builder for [`DeleteDirectConnectGatewayAssociationInput`](crate::input::DeleteDirectConnectGatewayAssociationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) association_id: std::option::Option<std::string::String>,
        pub(crate) direct_connect_gateway_id: std::option::Option<std::string::String>,
        pub(crate) virtual_gateway_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn association_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.association_id = Some(input.into());
            self
        }
        pub fn set_association_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.association_id = input;
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
        pub fn virtual_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_gateway_id = Some(input.into());
            self
        }
        pub fn set_virtual_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_gateway_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteDirectConnectGatewayAssociationInput`](crate::input::DeleteDirectConnectGatewayAssociationInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteDirectConnectGatewayAssociationInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteDirectConnectGatewayAssociationInput {
                association_id: self.association_id,
                direct_connect_gateway_id: self.direct_connect_gateway_id,
                virtual_gateway_id: self.virtual_gateway_id,
            })
        }
    }
}
impl DeleteDirectConnectGatewayAssociationInput {
    /// Creates a new builder-style object to manufacture [`DeleteDirectConnectGatewayAssociationInput`](crate::input::DeleteDirectConnectGatewayAssociationInput)
    pub fn builder() -> crate::input::delete_direct_connect_gateway_association_input::Builder {
        crate::input::delete_direct_connect_gateway_association_input::Builder::default()
    }
}
impl DeleteDirectConnectGatewayAssociationInput {
    /// Consumes the builder and constructs an Operation<[`DeleteDirectConnectGatewayAssociation`](crate::operation::DeleteDirectConnectGatewayAssociation)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DeleteDirectConnectGatewayAssociation, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_delete_direct_connect_gateway_association(self);
        assemble_operation(config, "DeleteDirectConnectGatewayAssociation", crate::operation::DeleteDirectConnectGatewayAssociation::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteDirectConnectGatewayAssociationProposalInput {
    pub proposal_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DeleteDirectConnectGatewayAssociationProposalInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteDirectConnectGatewayAssociationProposalInput");
        formatter.field("proposal_id", &self.proposal_id);
        formatter.finish()
    }
}
/// See [`DeleteDirectConnectGatewayAssociationProposalInput`](crate::input::DeleteDirectConnectGatewayAssociationProposalInput)
pub mod delete_direct_connect_gateway_association_proposal_input {
    /// A builder for [`DeleteDirectConnectGatewayAssociationProposalInput`](crate::input::DeleteDirectConnectGatewayAssociationProposalInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) proposal_id: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DeleteDirectConnectGatewayAssociationProposalInput`](crate::input::DeleteDirectConnectGatewayAssociationProposalInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteDirectConnectGatewayAssociationProposalInput, smithy_http::operation::BuildError> {
            if self.proposal_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "proposal_id",
                    details: "proposal_id was not specified but it is required when building DeleteDirectConnectGatewayAssociationProposalInput",
                });
            }
            Ok(crate::input::DeleteDirectConnectGatewayAssociationProposalInput {
                proposal_id: self.proposal_id,
            })
        }
    }
}
impl DeleteDirectConnectGatewayAssociationProposalInput {
    /// Creates a new builder-style object to manufacture [`DeleteDirectConnectGatewayAssociationProposalInput`](crate::input::DeleteDirectConnectGatewayAssociationProposalInput)
    pub fn builder() -> crate::input::delete_direct_connect_gateway_association_proposal_input::Builder {
        crate::input::delete_direct_connect_gateway_association_proposal_input::Builder::default()
    }
}
impl DeleteDirectConnectGatewayAssociationProposalInput {
    /// Consumes the builder and constructs an Operation<[`DeleteDirectConnectGatewayAssociationProposal`](crate::operation::DeleteDirectConnectGatewayAssociationProposal)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DeleteDirectConnectGatewayAssociationProposal, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_delete_direct_connect_gateway_association_proposal(self);
        assemble_operation(config, "DeleteDirectConnectGatewayAssociationProposal", crate::operation::DeleteDirectConnectGatewayAssociationProposal::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteInterconnectInput {
    pub interconnect_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DeleteInterconnectInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteInterconnectInput");
        formatter.field("interconnect_id", &self.interconnect_id);
        formatter.finish()
    }
}
/// See [`DeleteInterconnectInput`](crate::input::DeleteInterconnectInput)
pub mod delete_interconnect_input {
    /// A builder for [`DeleteInterconnectInput`](crate::input::DeleteInterconnectInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) interconnect_id: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DeleteInterconnectInput`](crate::input::DeleteInterconnectInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteInterconnectInput, smithy_http::operation::BuildError> {
            if self.interconnect_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "interconnect_id",
                    details: "interconnect_id was not specified but it is required when building DeleteInterconnectInput",
                });
            }
            Ok(crate::input::DeleteInterconnectInput {
                interconnect_id: self.interconnect_id,
            })
        }
    }
}
impl DeleteInterconnectInput {
    /// Creates a new builder-style object to manufacture [`DeleteInterconnectInput`](crate::input::DeleteInterconnectInput)
    pub fn builder() -> crate::input::delete_interconnect_input::Builder {
        crate::input::delete_interconnect_input::Builder::default()
    }
}
impl DeleteInterconnectInput {
    /// Consumes the builder and constructs an Operation<[`DeleteInterconnect`](crate::operation::DeleteInterconnect)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DeleteInterconnect, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_delete_interconnect(self);
        assemble_operation(config, "DeleteInterconnect", crate::operation::DeleteInterconnect::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteLagInput {
    pub lag_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DeleteLagInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteLagInput");
        formatter.field("lag_id", &self.lag_id);
        formatter.finish()
    }
}
/// See [`DeleteLagInput`](crate::input::DeleteLagInput)
pub mod delete_lag_input {
    /// A builder for [`DeleteLagInput`](crate::input::DeleteLagInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) lag_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn lag_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.lag_id = Some(input.into());
            self
        }
        pub fn set_lag_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.lag_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteLagInput`](crate::input::DeleteLagInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteLagInput, smithy_http::operation::BuildError> {
            if self.lag_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "lag_id",
                    details: "lag_id was not specified but it is required when building DeleteLagInput",
                });
            }
            Ok(crate::input::DeleteLagInput {
                lag_id: self.lag_id,
            })
        }
    }
}
impl DeleteLagInput {
    /// Creates a new builder-style object to manufacture [`DeleteLagInput`](crate::input::DeleteLagInput)
    pub fn builder() -> crate::input::delete_lag_input::Builder {
        crate::input::delete_lag_input::Builder::default()
    }
}
impl DeleteLagInput {
    /// Consumes the builder and constructs an Operation<[`DeleteLag`](crate::operation::DeleteLag)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DeleteLag, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_delete_lag(self);
        assemble_operation(config, "DeleteLag", crate::operation::DeleteLag::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteVirtualInterfaceInput {
    pub virtual_interface_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DeleteVirtualInterfaceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteVirtualInterfaceInput");
        formatter.field("virtual_interface_id", &self.virtual_interface_id);
        formatter.finish()
    }
}
/// See [`DeleteVirtualInterfaceInput`](crate::input::DeleteVirtualInterfaceInput)
pub mod delete_virtual_interface_input {
    /// A builder for [`DeleteVirtualInterfaceInput`](crate::input::DeleteVirtualInterfaceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) virtual_interface_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_id = Some(input.into());
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteVirtualInterfaceInput`](crate::input::DeleteVirtualInterfaceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteVirtualInterfaceInput, smithy_http::operation::BuildError> {
            if self.virtual_interface_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "virtual_interface_id",
                    details: "virtual_interface_id was not specified but it is required when building DeleteVirtualInterfaceInput",
                });
            }
            Ok(crate::input::DeleteVirtualInterfaceInput {
                virtual_interface_id: self.virtual_interface_id,
            })
        }
    }
}
impl DeleteVirtualInterfaceInput {
    /// Creates a new builder-style object to manufacture [`DeleteVirtualInterfaceInput`](crate::input::DeleteVirtualInterfaceInput)
    pub fn builder() -> crate::input::delete_virtual_interface_input::Builder {
        crate::input::delete_virtual_interface_input::Builder::default()
    }
}
impl DeleteVirtualInterfaceInput {
    /// Consumes the builder and constructs an Operation<[`DeleteVirtualInterface`](crate::operation::DeleteVirtualInterface)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DeleteVirtualInterface, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_delete_virtual_interface(self);
        assemble_operation(config, "DeleteVirtualInterface", crate::operation::DeleteVirtualInterface::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DescribeConnectionLoaInput {
    pub connection_id: std::option::Option<std::string::String>,
    pub provider_name: std::option::Option<std::string::String>,
    pub loa_content_type: std::option::Option<crate::model::LoaContentType>,
}
impl std::fmt::Debug for DescribeConnectionLoaInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeConnectionLoaInput");
        formatter.field("connection_id", &self.connection_id);
        formatter.field("provider_name", &self.provider_name);
        formatter.field("loa_content_type", &self.loa_content_type);
        formatter.finish()
    }
}
/// See [`DescribeConnectionLoaInput`](crate::input::DescribeConnectionLoaInput)
pub mod describe_connection_loa_input {
    /// A builder for [`DescribeConnectionLoaInput`](crate::input::DescribeConnectionLoaInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) connection_id: std::option::Option<std::string::String>,
        pub(crate) provider_name: std::option::Option<std::string::String>,
        pub(crate) loa_content_type: std::option::Option<crate::model::LoaContentType>,
    }
    impl Builder {
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(input.into());
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_id = input;
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
        pub fn loa_content_type(mut self, input: crate::model::LoaContentType) -> Self {
            self.loa_content_type = Some(input);
            self
        }
        pub fn set_loa_content_type(mut self, input: std::option::Option<crate::model::LoaContentType>) -> Self {
            self.loa_content_type = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeConnectionLoaInput`](crate::input::DescribeConnectionLoaInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeConnectionLoaInput, smithy_http::operation::BuildError> {
            if self.connection_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "connection_id",
                    details: "connection_id was not specified but it is required when building DescribeConnectionLoaInput",
                });
            }
            Ok(crate::input::DescribeConnectionLoaInput {
                connection_id: self.connection_id,
                provider_name: self.provider_name,
                loa_content_type: self.loa_content_type,
            })
        }
    }
}
impl DescribeConnectionLoaInput {
    /// Creates a new builder-style object to manufacture [`DescribeConnectionLoaInput`](crate::input::DescribeConnectionLoaInput)
    pub fn builder() -> crate::input::describe_connection_loa_input::Builder {
        crate::input::describe_connection_loa_input::Builder::default()
    }
}
impl DescribeConnectionLoaInput {
    /// Consumes the builder and constructs an Operation<[`DescribeConnectionLoa`](crate::operation::DescribeConnectionLoa)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DescribeConnectionLoa, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_describe_connection_loa(self);
        assemble_operation(config, "DescribeConnectionLoa", crate::operation::DescribeConnectionLoa::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DescribeConnectionsInput {
    pub connection_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DescribeConnectionsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeConnectionsInput");
        formatter.field("connection_id", &self.connection_id);
        formatter.finish()
    }
}
/// See [`DescribeConnectionsInput`](crate::input::DescribeConnectionsInput)
pub mod describe_connections_input {
    /// A builder for [`DescribeConnectionsInput`](crate::input::DescribeConnectionsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) connection_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(input.into());
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeConnectionsInput`](crate::input::DescribeConnectionsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeConnectionsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeConnectionsInput {
                connection_id: self.connection_id,
            })
        }
    }
}
impl DescribeConnectionsInput {
    /// Creates a new builder-style object to manufacture [`DescribeConnectionsInput`](crate::input::DescribeConnectionsInput)
    pub fn builder() -> crate::input::describe_connections_input::Builder {
        crate::input::describe_connections_input::Builder::default()
    }
}
impl DescribeConnectionsInput {
    /// Consumes the builder and constructs an Operation<[`DescribeConnections`](crate::operation::DescribeConnections)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DescribeConnections, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_describe_connections(self);
        assemble_operation(config, "DescribeConnections", crate::operation::DescribeConnections::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DescribeConnectionsOnInterconnectInput {
    pub interconnect_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DescribeConnectionsOnInterconnectInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeConnectionsOnInterconnectInput");
        formatter.field("interconnect_id", &self.interconnect_id);
        formatter.finish()
    }
}
/// See [`DescribeConnectionsOnInterconnectInput`](crate::input::DescribeConnectionsOnInterconnectInput)
pub mod describe_connections_on_interconnect_input {
    /// A builder for [`DescribeConnectionsOnInterconnectInput`](crate::input::DescribeConnectionsOnInterconnectInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) interconnect_id: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DescribeConnectionsOnInterconnectInput`](crate::input::DescribeConnectionsOnInterconnectInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeConnectionsOnInterconnectInput, smithy_http::operation::BuildError> {
            if self.interconnect_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "interconnect_id",
                    details: "interconnect_id was not specified but it is required when building DescribeConnectionsOnInterconnectInput",
                });
            }
            Ok(crate::input::DescribeConnectionsOnInterconnectInput {
                interconnect_id: self.interconnect_id,
            })
        }
    }
}
impl DescribeConnectionsOnInterconnectInput {
    /// Creates a new builder-style object to manufacture [`DescribeConnectionsOnInterconnectInput`](crate::input::DescribeConnectionsOnInterconnectInput)
    pub fn builder() -> crate::input::describe_connections_on_interconnect_input::Builder {
        crate::input::describe_connections_on_interconnect_input::Builder::default()
    }
}
impl DescribeConnectionsOnInterconnectInput {
    /// Consumes the builder and constructs an Operation<[`DescribeConnectionsOnInterconnect`](crate::operation::DescribeConnectionsOnInterconnect)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DescribeConnectionsOnInterconnect, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_describe_connections_on_interconnect(self);
        assemble_operation(config, "DescribeConnectionsOnInterconnect", crate::operation::DescribeConnectionsOnInterconnect::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DescribeDirectConnectGatewayAssociationProposalsInput {
    pub direct_connect_gateway_id: std::option::Option<std::string::String>,
    pub proposal_id: std::option::Option<std::string::String>,
    pub associated_gateway_id: std::option::Option<std::string::String>,
    pub max_results: std::option::Option<i32>,
    pub next_token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DescribeDirectConnectGatewayAssociationProposalsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeDirectConnectGatewayAssociationProposalsInput");
        formatter.field("direct_connect_gateway_id", &self.direct_connect_gateway_id);
        formatter.field("proposal_id", &self.proposal_id);
        formatter.field("associated_gateway_id", &self.associated_gateway_id);
        formatter.field("max_results", &self.max_results);
        formatter.field("next_token", &self.next_token);
        formatter.finish()
    }
}
/// See [`DescribeDirectConnectGatewayAssociationProposalsInput`](crate::input::DescribeDirectConnectGatewayAssociationProposalsInput)
pub mod describe_direct_connect_gateway_association_proposals_input {
    /// A builder for [`DescribeDirectConnectGatewayAssociationProposalsInput`](crate::input::DescribeDirectConnectGatewayAssociationProposalsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) direct_connect_gateway_id: std::option::Option<std::string::String>,
        pub(crate) proposal_id: std::option::Option<std::string::String>,
        pub(crate) associated_gateway_id: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) next_token: std::option::Option<std::string::String>,
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
        pub fn proposal_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.proposal_id = Some(input.into());
            self
        }
        pub fn set_proposal_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.proposal_id = input;
            self
        }
        pub fn associated_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.associated_gateway_id = Some(input.into());
            self
        }
        pub fn set_associated_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.associated_gateway_id = input;
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeDirectConnectGatewayAssociationProposalsInput`](crate::input::DescribeDirectConnectGatewayAssociationProposalsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeDirectConnectGatewayAssociationProposalsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeDirectConnectGatewayAssociationProposalsInput {
                direct_connect_gateway_id: self.direct_connect_gateway_id,
                proposal_id: self.proposal_id,
                associated_gateway_id: self.associated_gateway_id,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}
impl DescribeDirectConnectGatewayAssociationProposalsInput {
    /// Creates a new builder-style object to manufacture [`DescribeDirectConnectGatewayAssociationProposalsInput`](crate::input::DescribeDirectConnectGatewayAssociationProposalsInput)
    pub fn builder() -> crate::input::describe_direct_connect_gateway_association_proposals_input::Builder {
        crate::input::describe_direct_connect_gateway_association_proposals_input::Builder::default()
    }
}
impl DescribeDirectConnectGatewayAssociationProposalsInput {
    /// Consumes the builder and constructs an Operation<[`DescribeDirectConnectGatewayAssociationProposals`](crate::operation::DescribeDirectConnectGatewayAssociationProposals)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DescribeDirectConnectGatewayAssociationProposals, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_describe_direct_connect_gateway_association_proposals(self);
        assemble_operation(config, "DescribeDirectConnectGatewayAssociationProposals", crate::operation::DescribeDirectConnectGatewayAssociationProposals::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DescribeDirectConnectGatewayAssociationsInput {
    pub association_id: std::option::Option<std::string::String>,
    pub associated_gateway_id: std::option::Option<std::string::String>,
    pub direct_connect_gateway_id: std::option::Option<std::string::String>,
    pub max_results: std::option::Option<i32>,
    pub next_token: std::option::Option<std::string::String>,
    pub virtual_gateway_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DescribeDirectConnectGatewayAssociationsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeDirectConnectGatewayAssociationsInput");
        formatter.field("association_id", &self.association_id);
        formatter.field("associated_gateway_id", &self.associated_gateway_id);
        formatter.field("direct_connect_gateway_id", &self.direct_connect_gateway_id);
        formatter.field("max_results", &self.max_results);
        formatter.field("next_token", &self.next_token);
        formatter.field("virtual_gateway_id", &self.virtual_gateway_id);
        formatter.finish()
    }
}
/// See [`DescribeDirectConnectGatewayAssociationsInput`](crate::input::DescribeDirectConnectGatewayAssociationsInput)
pub mod describe_direct_connect_gateway_associations_input {
    /// A builder for [`DescribeDirectConnectGatewayAssociationsInput`](crate::input::DescribeDirectConnectGatewayAssociationsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) association_id: std::option::Option<std::string::String>,
        pub(crate) associated_gateway_id: std::option::Option<std::string::String>,
        pub(crate) direct_connect_gateway_id: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) virtual_gateway_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn association_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.association_id = Some(input.into());
            self
        }
        pub fn set_association_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.association_id = input;
            self
        }
        pub fn associated_gateway_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.associated_gateway_id = Some(input.into());
            self
        }
        pub fn set_associated_gateway_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.associated_gateway_id = input;
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
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
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
        /// Consumes the builder and constructs a [`DescribeDirectConnectGatewayAssociationsInput`](crate::input::DescribeDirectConnectGatewayAssociationsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeDirectConnectGatewayAssociationsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeDirectConnectGatewayAssociationsInput {
                association_id: self.association_id,
                associated_gateway_id: self.associated_gateway_id,
                direct_connect_gateway_id: self.direct_connect_gateway_id,
                max_results: self.max_results,
                next_token: self.next_token,
                virtual_gateway_id: self.virtual_gateway_id,
            })
        }
    }
}
impl DescribeDirectConnectGatewayAssociationsInput {
    /// Creates a new builder-style object to manufacture [`DescribeDirectConnectGatewayAssociationsInput`](crate::input::DescribeDirectConnectGatewayAssociationsInput)
    pub fn builder() -> crate::input::describe_direct_connect_gateway_associations_input::Builder {
        crate::input::describe_direct_connect_gateway_associations_input::Builder::default()
    }
}
impl DescribeDirectConnectGatewayAssociationsInput {
    /// Consumes the builder and constructs an Operation<[`DescribeDirectConnectGatewayAssociations`](crate::operation::DescribeDirectConnectGatewayAssociations)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DescribeDirectConnectGatewayAssociations, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_describe_direct_connect_gateway_associations(self);
        assemble_operation(config, "DescribeDirectConnectGatewayAssociations", crate::operation::DescribeDirectConnectGatewayAssociations::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DescribeDirectConnectGatewayAttachmentsInput {
    pub direct_connect_gateway_id: std::option::Option<std::string::String>,
    pub virtual_interface_id: std::option::Option<std::string::String>,
    pub max_results: std::option::Option<i32>,
    pub next_token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DescribeDirectConnectGatewayAttachmentsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeDirectConnectGatewayAttachmentsInput");
        formatter.field("direct_connect_gateway_id", &self.direct_connect_gateway_id);
        formatter.field("virtual_interface_id", &self.virtual_interface_id);
        formatter.field("max_results", &self.max_results);
        formatter.field("next_token", &self.next_token);
        formatter.finish()
    }
}
/// See [`DescribeDirectConnectGatewayAttachmentsInput`](crate::input::DescribeDirectConnectGatewayAttachmentsInput)
pub mod describe_direct_connect_gateway_attachments_input {
    /// A builder for [`DescribeDirectConnectGatewayAttachmentsInput`](crate::input::DescribeDirectConnectGatewayAttachmentsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) direct_connect_gateway_id: std::option::Option<std::string::String>,
        pub(crate) virtual_interface_id: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) next_token: std::option::Option<std::string::String>,
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
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeDirectConnectGatewayAttachmentsInput`](crate::input::DescribeDirectConnectGatewayAttachmentsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeDirectConnectGatewayAttachmentsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeDirectConnectGatewayAttachmentsInput {
                direct_connect_gateway_id: self.direct_connect_gateway_id,
                virtual_interface_id: self.virtual_interface_id,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}
impl DescribeDirectConnectGatewayAttachmentsInput {
    /// Creates a new builder-style object to manufacture [`DescribeDirectConnectGatewayAttachmentsInput`](crate::input::DescribeDirectConnectGatewayAttachmentsInput)
    pub fn builder() -> crate::input::describe_direct_connect_gateway_attachments_input::Builder {
        crate::input::describe_direct_connect_gateway_attachments_input::Builder::default()
    }
}
impl DescribeDirectConnectGatewayAttachmentsInput {
    /// Consumes the builder and constructs an Operation<[`DescribeDirectConnectGatewayAttachments`](crate::operation::DescribeDirectConnectGatewayAttachments)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DescribeDirectConnectGatewayAttachments, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_describe_direct_connect_gateway_attachments(self);
        assemble_operation(config, "DescribeDirectConnectGatewayAttachments", crate::operation::DescribeDirectConnectGatewayAttachments::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DescribeDirectConnectGatewaysInput {
    pub direct_connect_gateway_id: std::option::Option<std::string::String>,
    pub max_results: std::option::Option<i32>,
    pub next_token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DescribeDirectConnectGatewaysInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeDirectConnectGatewaysInput");
        formatter.field("direct_connect_gateway_id", &self.direct_connect_gateway_id);
        formatter.field("max_results", &self.max_results);
        formatter.field("next_token", &self.next_token);
        formatter.finish()
    }
}
/// See [`DescribeDirectConnectGatewaysInput`](crate::input::DescribeDirectConnectGatewaysInput)
pub mod describe_direct_connect_gateways_input {
    /// A builder for [`DescribeDirectConnectGatewaysInput`](crate::input::DescribeDirectConnectGatewaysInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) direct_connect_gateway_id: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) next_token: std::option::Option<std::string::String>,
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
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeDirectConnectGatewaysInput`](crate::input::DescribeDirectConnectGatewaysInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeDirectConnectGatewaysInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeDirectConnectGatewaysInput {
                direct_connect_gateway_id: self.direct_connect_gateway_id,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}
impl DescribeDirectConnectGatewaysInput {
    /// Creates a new builder-style object to manufacture [`DescribeDirectConnectGatewaysInput`](crate::input::DescribeDirectConnectGatewaysInput)
    pub fn builder() -> crate::input::describe_direct_connect_gateways_input::Builder {
        crate::input::describe_direct_connect_gateways_input::Builder::default()
    }
}
impl DescribeDirectConnectGatewaysInput {
    /// Consumes the builder and constructs an Operation<[`DescribeDirectConnectGateways`](crate::operation::DescribeDirectConnectGateways)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DescribeDirectConnectGateways, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_describe_direct_connect_gateways(self);
        assemble_operation(config, "DescribeDirectConnectGateways", crate::operation::DescribeDirectConnectGateways::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DescribeHostedConnectionsInput {
    pub connection_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DescribeHostedConnectionsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeHostedConnectionsInput");
        formatter.field("connection_id", &self.connection_id);
        formatter.finish()
    }
}
/// See [`DescribeHostedConnectionsInput`](crate::input::DescribeHostedConnectionsInput)
pub mod describe_hosted_connections_input {
    /// A builder for [`DescribeHostedConnectionsInput`](crate::input::DescribeHostedConnectionsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) connection_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(input.into());
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeHostedConnectionsInput`](crate::input::DescribeHostedConnectionsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeHostedConnectionsInput, smithy_http::operation::BuildError> {
            if self.connection_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "connection_id",
                    details: "connection_id was not specified but it is required when building DescribeHostedConnectionsInput",
                });
            }
            Ok(crate::input::DescribeHostedConnectionsInput {
                connection_id: self.connection_id,
            })
        }
    }
}
impl DescribeHostedConnectionsInput {
    /// Creates a new builder-style object to manufacture [`DescribeHostedConnectionsInput`](crate::input::DescribeHostedConnectionsInput)
    pub fn builder() -> crate::input::describe_hosted_connections_input::Builder {
        crate::input::describe_hosted_connections_input::Builder::default()
    }
}
impl DescribeHostedConnectionsInput {
    /// Consumes the builder and constructs an Operation<[`DescribeHostedConnections`](crate::operation::DescribeHostedConnections)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DescribeHostedConnections, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_describe_hosted_connections(self);
        assemble_operation(config, "DescribeHostedConnections", crate::operation::DescribeHostedConnections::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DescribeInterconnectLoaInput {
    pub interconnect_id: std::option::Option<std::string::String>,
    pub provider_name: std::option::Option<std::string::String>,
    pub loa_content_type: std::option::Option<crate::model::LoaContentType>,
}
impl std::fmt::Debug for DescribeInterconnectLoaInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeInterconnectLoaInput");
        formatter.field("interconnect_id", &self.interconnect_id);
        formatter.field("provider_name", &self.provider_name);
        formatter.field("loa_content_type", &self.loa_content_type);
        formatter.finish()
    }
}
/// See [`DescribeInterconnectLoaInput`](crate::input::DescribeInterconnectLoaInput)
pub mod describe_interconnect_loa_input {
    /// A builder for [`DescribeInterconnectLoaInput`](crate::input::DescribeInterconnectLoaInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) interconnect_id: std::option::Option<std::string::String>,
        pub(crate) provider_name: std::option::Option<std::string::String>,
        pub(crate) loa_content_type: std::option::Option<crate::model::LoaContentType>,
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
        pub fn provider_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.provider_name = Some(input.into());
            self
        }
        pub fn set_provider_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.provider_name = input;
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
        /// Consumes the builder and constructs a [`DescribeInterconnectLoaInput`](crate::input::DescribeInterconnectLoaInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeInterconnectLoaInput, smithy_http::operation::BuildError> {
            if self.interconnect_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "interconnect_id",
                    details: "interconnect_id was not specified but it is required when building DescribeInterconnectLoaInput",
                });
            }
            Ok(crate::input::DescribeInterconnectLoaInput {
                interconnect_id: self.interconnect_id,
                provider_name: self.provider_name,
                loa_content_type: self.loa_content_type,
            })
        }
    }
}
impl DescribeInterconnectLoaInput {
    /// Creates a new builder-style object to manufacture [`DescribeInterconnectLoaInput`](crate::input::DescribeInterconnectLoaInput)
    pub fn builder() -> crate::input::describe_interconnect_loa_input::Builder {
        crate::input::describe_interconnect_loa_input::Builder::default()
    }
}
impl DescribeInterconnectLoaInput {
    /// Consumes the builder and constructs an Operation<[`DescribeInterconnectLoa`](crate::operation::DescribeInterconnectLoa)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DescribeInterconnectLoa, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_describe_interconnect_loa(self);
        assemble_operation(config, "DescribeInterconnectLoa", crate::operation::DescribeInterconnectLoa::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DescribeInterconnectsInput {
    pub interconnect_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DescribeInterconnectsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeInterconnectsInput");
        formatter.field("interconnect_id", &self.interconnect_id);
        formatter.finish()
    }
}
/// See [`DescribeInterconnectsInput`](crate::input::DescribeInterconnectsInput)
pub mod describe_interconnects_input {
    /// A builder for [`DescribeInterconnectsInput`](crate::input::DescribeInterconnectsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) interconnect_id: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DescribeInterconnectsInput`](crate::input::DescribeInterconnectsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeInterconnectsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeInterconnectsInput {
                interconnect_id: self.interconnect_id,
            })
        }
    }
}
impl DescribeInterconnectsInput {
    /// Creates a new builder-style object to manufacture [`DescribeInterconnectsInput`](crate::input::DescribeInterconnectsInput)
    pub fn builder() -> crate::input::describe_interconnects_input::Builder {
        crate::input::describe_interconnects_input::Builder::default()
    }
}
impl DescribeInterconnectsInput {
    /// Consumes the builder and constructs an Operation<[`DescribeInterconnects`](crate::operation::DescribeInterconnects)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DescribeInterconnects, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_describe_interconnects(self);
        assemble_operation(config, "DescribeInterconnects", crate::operation::DescribeInterconnects::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DescribeLagsInput {
    pub lag_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DescribeLagsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeLagsInput");
        formatter.field("lag_id", &self.lag_id);
        formatter.finish()
    }
}
/// See [`DescribeLagsInput`](crate::input::DescribeLagsInput)
pub mod describe_lags_input {
    /// A builder for [`DescribeLagsInput`](crate::input::DescribeLagsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) lag_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn lag_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.lag_id = Some(input.into());
            self
        }
        pub fn set_lag_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.lag_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeLagsInput`](crate::input::DescribeLagsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeLagsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeLagsInput {
                lag_id: self.lag_id,
            })
        }
    }
}
impl DescribeLagsInput {
    /// Creates a new builder-style object to manufacture [`DescribeLagsInput`](crate::input::DescribeLagsInput)
    pub fn builder() -> crate::input::describe_lags_input::Builder {
        crate::input::describe_lags_input::Builder::default()
    }
}
impl DescribeLagsInput {
    /// Consumes the builder and constructs an Operation<[`DescribeLags`](crate::operation::DescribeLags)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DescribeLags, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_describe_lags(self);
        assemble_operation(config, "DescribeLags", crate::operation::DescribeLags::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DescribeLoaInput {
    pub connection_id: std::option::Option<std::string::String>,
    pub provider_name: std::option::Option<std::string::String>,
    pub loa_content_type: std::option::Option<crate::model::LoaContentType>,
}
impl std::fmt::Debug for DescribeLoaInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeLoaInput");
        formatter.field("connection_id", &self.connection_id);
        formatter.field("provider_name", &self.provider_name);
        formatter.field("loa_content_type", &self.loa_content_type);
        formatter.finish()
    }
}
/// See [`DescribeLoaInput`](crate::input::DescribeLoaInput)
pub mod describe_loa_input {
    /// A builder for [`DescribeLoaInput`](crate::input::DescribeLoaInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) connection_id: std::option::Option<std::string::String>,
        pub(crate) provider_name: std::option::Option<std::string::String>,
        pub(crate) loa_content_type: std::option::Option<crate::model::LoaContentType>,
    }
    impl Builder {
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(input.into());
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_id = input;
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
        pub fn loa_content_type(mut self, input: crate::model::LoaContentType) -> Self {
            self.loa_content_type = Some(input);
            self
        }
        pub fn set_loa_content_type(mut self, input: std::option::Option<crate::model::LoaContentType>) -> Self {
            self.loa_content_type = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeLoaInput`](crate::input::DescribeLoaInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeLoaInput, smithy_http::operation::BuildError> {
            if self.connection_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "connection_id",
                    details: "connection_id was not specified but it is required when building DescribeLoaInput",
                });
            }
            Ok(crate::input::DescribeLoaInput {
                connection_id: self.connection_id,
                provider_name: self.provider_name,
                loa_content_type: self.loa_content_type,
            })
        }
    }
}
impl DescribeLoaInput {
    /// Creates a new builder-style object to manufacture [`DescribeLoaInput`](crate::input::DescribeLoaInput)
    pub fn builder() -> crate::input::describe_loa_input::Builder {
        crate::input::describe_loa_input::Builder::default()
    }
}
impl DescribeLoaInput {
    /// Consumes the builder and constructs an Operation<[`DescribeLoa`](crate::operation::DescribeLoa)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DescribeLoa, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_describe_loa(self);
        assemble_operation(config, "DescribeLoa", crate::operation::DescribeLoa::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DescribeLocationsInput {}
impl std::fmt::Debug for DescribeLocationsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescribeLocationsInput").finish()
    }
}
/// See [`DescribeLocationsInput`](crate::input::DescribeLocationsInput)
pub mod describe_locations_input {
    /// A builder for [`DescribeLocationsInput`](crate::input::DescribeLocationsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`DescribeLocationsInput`](crate::input::DescribeLocationsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeLocationsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeLocationsInput {
            })
        }
    }
}
impl DescribeLocationsInput {
    /// Creates a new builder-style object to manufacture [`DescribeLocationsInput`](crate::input::DescribeLocationsInput)
    pub fn builder() -> crate::input::describe_locations_input::Builder {
        crate::input::describe_locations_input::Builder::default()
    }
}
impl DescribeLocationsInput {
    /// Consumes the builder and constructs an Operation<[`DescribeLocations`](crate::operation::DescribeLocations)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DescribeLocations, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_describe_locations(self);
        assemble_operation(config, "DescribeLocations", crate::operation::DescribeLocations::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DescribeTagsInput {
    pub resource_arns: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl std::fmt::Debug for DescribeTagsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeTagsInput");
        formatter.field("resource_arns", &self.resource_arns);
        formatter.finish()
    }
}
/// See [`DescribeTagsInput`](crate::input::DescribeTagsInput)
pub mod describe_tags_input {
    /// A builder for [`DescribeTagsInput`](crate::input::DescribeTagsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) resource_arns: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// Appends an item to `resource_arns`.
        pub fn resource_arns(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.resource_arns.unwrap_or_default();
            v.push(input.into());
            self.resource_arns = Some(v);
            self
        }
        pub fn set_resource_arns(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.resource_arns = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeTagsInput`](crate::input::DescribeTagsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeTagsInput, smithy_http::operation::BuildError> {
            if self.resource_arns.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "resource_arns",
                    details: "resource_arns was not specified but it is required when building DescribeTagsInput",
                });
            }
            Ok(crate::input::DescribeTagsInput {
                resource_arns: self.resource_arns,
            })
        }
    }
}
impl DescribeTagsInput {
    /// Creates a new builder-style object to manufacture [`DescribeTagsInput`](crate::input::DescribeTagsInput)
    pub fn builder() -> crate::input::describe_tags_input::Builder {
        crate::input::describe_tags_input::Builder::default()
    }
}
impl DescribeTagsInput {
    /// Consumes the builder and constructs an Operation<[`DescribeTags`](crate::operation::DescribeTags)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DescribeTags, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_describe_tags(self);
        assemble_operation(config, "DescribeTags", crate::operation::DescribeTags::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DescribeVirtualGatewaysInput {}
impl std::fmt::Debug for DescribeVirtualGatewaysInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescribeVirtualGatewaysInput").finish()
    }
}
/// See [`DescribeVirtualGatewaysInput`](crate::input::DescribeVirtualGatewaysInput)
pub mod describe_virtual_gateways_input {
    /// A builder for [`DescribeVirtualGatewaysInput`](crate::input::DescribeVirtualGatewaysInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`DescribeVirtualGatewaysInput`](crate::input::DescribeVirtualGatewaysInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeVirtualGatewaysInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeVirtualGatewaysInput {
            })
        }
    }
}
impl DescribeVirtualGatewaysInput {
    /// Creates a new builder-style object to manufacture [`DescribeVirtualGatewaysInput`](crate::input::DescribeVirtualGatewaysInput)
    pub fn builder() -> crate::input::describe_virtual_gateways_input::Builder {
        crate::input::describe_virtual_gateways_input::Builder::default()
    }
}
impl DescribeVirtualGatewaysInput {
    /// Consumes the builder and constructs an Operation<[`DescribeVirtualGateways`](crate::operation::DescribeVirtualGateways)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DescribeVirtualGateways, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_describe_virtual_gateways(self);
        assemble_operation(config, "DescribeVirtualGateways", crate::operation::DescribeVirtualGateways::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DescribeVirtualInterfacesInput {
    pub connection_id: std::option::Option<std::string::String>,
    pub virtual_interface_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DescribeVirtualInterfacesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeVirtualInterfacesInput");
        formatter.field("connection_id", &self.connection_id);
        formatter.field("virtual_interface_id", &self.virtual_interface_id);
        formatter.finish()
    }
}
/// See [`DescribeVirtualInterfacesInput`](crate::input::DescribeVirtualInterfacesInput)
pub mod describe_virtual_interfaces_input {
    /// A builder for [`DescribeVirtualInterfacesInput`](crate::input::DescribeVirtualInterfacesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) connection_id: std::option::Option<std::string::String>,
        pub(crate) virtual_interface_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(input.into());
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_id = input;
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
        /// Consumes the builder and constructs a [`DescribeVirtualInterfacesInput`](crate::input::DescribeVirtualInterfacesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeVirtualInterfacesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeVirtualInterfacesInput {
                connection_id: self.connection_id,
                virtual_interface_id: self.virtual_interface_id,
            })
        }
    }
}
impl DescribeVirtualInterfacesInput {
    /// Creates a new builder-style object to manufacture [`DescribeVirtualInterfacesInput`](crate::input::DescribeVirtualInterfacesInput)
    pub fn builder() -> crate::input::describe_virtual_interfaces_input::Builder {
        crate::input::describe_virtual_interfaces_input::Builder::default()
    }
}
impl DescribeVirtualInterfacesInput {
    /// Consumes the builder and constructs an Operation<[`DescribeVirtualInterfaces`](crate::operation::DescribeVirtualInterfaces)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DescribeVirtualInterfaces, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_describe_virtual_interfaces(self);
        assemble_operation(config, "DescribeVirtualInterfaces", crate::operation::DescribeVirtualInterfaces::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DisassociateConnectionFromLagInput {
    pub connection_id: std::option::Option<std::string::String>,
    pub lag_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DisassociateConnectionFromLagInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DisassociateConnectionFromLagInput");
        formatter.field("connection_id", &self.connection_id);
        formatter.field("lag_id", &self.lag_id);
        formatter.finish()
    }
}
/// See [`DisassociateConnectionFromLagInput`](crate::input::DisassociateConnectionFromLagInput)
pub mod disassociate_connection_from_lag_input {
    /// A builder for [`DisassociateConnectionFromLagInput`](crate::input::DisassociateConnectionFromLagInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) connection_id: std::option::Option<std::string::String>,
        pub(crate) lag_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn connection_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.connection_id = Some(input.into());
            self
        }
        pub fn set_connection_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.connection_id = input;
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
        /// Consumes the builder and constructs a [`DisassociateConnectionFromLagInput`](crate::input::DisassociateConnectionFromLagInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DisassociateConnectionFromLagInput, smithy_http::operation::BuildError> {
            if self.connection_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "connection_id",
                    details: "connection_id was not specified but it is required when building DisassociateConnectionFromLagInput",
                });
            }
            if self.lag_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "lag_id",
                    details: "lag_id was not specified but it is required when building DisassociateConnectionFromLagInput",
                });
            }
            Ok(crate::input::DisassociateConnectionFromLagInput {
                connection_id: self.connection_id,
                lag_id: self.lag_id,
            })
        }
    }
}
impl DisassociateConnectionFromLagInput {
    /// Creates a new builder-style object to manufacture [`DisassociateConnectionFromLagInput`](crate::input::DisassociateConnectionFromLagInput)
    pub fn builder() -> crate::input::disassociate_connection_from_lag_input::Builder {
        crate::input::disassociate_connection_from_lag_input::Builder::default()
    }
}
impl DisassociateConnectionFromLagInput {
    /// Consumes the builder and constructs an Operation<[`DisassociateConnectionFromLag`](crate::operation::DisassociateConnectionFromLag)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DisassociateConnectionFromLag, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_disassociate_connection_from_lag(self);
        assemble_operation(config, "DisassociateConnectionFromLag", crate::operation::DisassociateConnectionFromLag::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ListVirtualInterfaceTestHistoryInput {
    pub test_id: std::option::Option<std::string::String>,
    pub virtual_interface_id: std::option::Option<std::string::String>,
    pub bgp_peers: std::option::Option<std::vec::Vec<std::string::String>>,
    pub status: std::option::Option<std::string::String>,
    pub max_results: std::option::Option<i32>,
    pub next_token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ListVirtualInterfaceTestHistoryInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListVirtualInterfaceTestHistoryInput");
        formatter.field("test_id", &self.test_id);
        formatter.field("virtual_interface_id", &self.virtual_interface_id);
        formatter.field("bgp_peers", &self.bgp_peers);
        formatter.field("status", &self.status);
        formatter.field("max_results", &self.max_results);
        formatter.field("next_token", &self.next_token);
        formatter.finish()
    }
}
/// See [`ListVirtualInterfaceTestHistoryInput`](crate::input::ListVirtualInterfaceTestHistoryInput)
pub mod list_virtual_interface_test_history_input {
    /// A builder for [`ListVirtualInterfaceTestHistoryInput`](crate::input::ListVirtualInterfaceTestHistoryInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) test_id: std::option::Option<std::string::String>,
        pub(crate) virtual_interface_id: std::option::Option<std::string::String>,
        pub(crate) bgp_peers: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) status: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) next_token: std::option::Option<std::string::String>,
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
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListVirtualInterfaceTestHistoryInput`](crate::input::ListVirtualInterfaceTestHistoryInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListVirtualInterfaceTestHistoryInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListVirtualInterfaceTestHistoryInput {
                test_id: self.test_id,
                virtual_interface_id: self.virtual_interface_id,
                bgp_peers: self.bgp_peers,
                status: self.status,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}
impl ListVirtualInterfaceTestHistoryInput {
    /// Creates a new builder-style object to manufacture [`ListVirtualInterfaceTestHistoryInput`](crate::input::ListVirtualInterfaceTestHistoryInput)
    pub fn builder() -> crate::input::list_virtual_interface_test_history_input::Builder {
        crate::input::list_virtual_interface_test_history_input::Builder::default()
    }
}
impl ListVirtualInterfaceTestHistoryInput {
    /// Consumes the builder and constructs an Operation<[`ListVirtualInterfaceTestHistory`](crate::operation::ListVirtualInterfaceTestHistory)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::ListVirtualInterfaceTestHistory, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_list_virtual_interface_test_history(self);
        assemble_operation(config, "ListVirtualInterfaceTestHistory", crate::operation::ListVirtualInterfaceTestHistory::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct StartBgpFailoverTestInput {
    pub virtual_interface_id: std::option::Option<std::string::String>,
    pub bgp_peers: std::option::Option<std::vec::Vec<std::string::String>>,
    pub test_duration_in_minutes: std::option::Option<i32>,
}
impl std::fmt::Debug for StartBgpFailoverTestInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("StartBgpFailoverTestInput");
        formatter.field("virtual_interface_id", &self.virtual_interface_id);
        formatter.field("bgp_peers", &self.bgp_peers);
        formatter.field("test_duration_in_minutes", &self.test_duration_in_minutes);
        formatter.finish()
    }
}
/// See [`StartBgpFailoverTestInput`](crate::input::StartBgpFailoverTestInput)
pub mod start_bgp_failover_test_input {
    /// A builder for [`StartBgpFailoverTestInput`](crate::input::StartBgpFailoverTestInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) virtual_interface_id: std::option::Option<std::string::String>,
        pub(crate) bgp_peers: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) test_duration_in_minutes: std::option::Option<i32>,
    }
    impl Builder {
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
        pub fn test_duration_in_minutes(mut self, input: i32) -> Self {
            self.test_duration_in_minutes = Some(input);
            self
        }
        pub fn set_test_duration_in_minutes(mut self, input: std::option::Option<i32>) -> Self {
            self.test_duration_in_minutes = input;
            self
        }
        /// Consumes the builder and constructs a [`StartBgpFailoverTestInput`](crate::input::StartBgpFailoverTestInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::StartBgpFailoverTestInput, smithy_http::operation::BuildError> {
            if self.virtual_interface_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "virtual_interface_id",
                    details: "virtual_interface_id was not specified but it is required when building StartBgpFailoverTestInput",
                });
            }
            Ok(crate::input::StartBgpFailoverTestInput {
                virtual_interface_id: self.virtual_interface_id,
                bgp_peers: self.bgp_peers,
                test_duration_in_minutes: self.test_duration_in_minutes,
            })
        }
    }
}
impl StartBgpFailoverTestInput {
    /// Creates a new builder-style object to manufacture [`StartBgpFailoverTestInput`](crate::input::StartBgpFailoverTestInput)
    pub fn builder() -> crate::input::start_bgp_failover_test_input::Builder {
        crate::input::start_bgp_failover_test_input::Builder::default()
    }
}
impl StartBgpFailoverTestInput {
    /// Consumes the builder and constructs an Operation<[`StartBgpFailoverTest`](crate::operation::StartBgpFailoverTest)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::StartBgpFailoverTest, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_start_bgp_failover_test(self);
        assemble_operation(config, "StartBgpFailoverTest", crate::operation::StartBgpFailoverTest::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct StopBgpFailoverTestInput {
    pub virtual_interface_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for StopBgpFailoverTestInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("StopBgpFailoverTestInput");
        formatter.field("virtual_interface_id", &self.virtual_interface_id);
        formatter.finish()
    }
}
/// See [`StopBgpFailoverTestInput`](crate::input::StopBgpFailoverTestInput)
pub mod stop_bgp_failover_test_input {
    /// A builder for [`StopBgpFailoverTestInput`](crate::input::StopBgpFailoverTestInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) virtual_interface_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_id = Some(input.into());
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_id = input;
            self
        }
        /// Consumes the builder and constructs a [`StopBgpFailoverTestInput`](crate::input::StopBgpFailoverTestInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::StopBgpFailoverTestInput, smithy_http::operation::BuildError> {
            if self.virtual_interface_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "virtual_interface_id",
                    details: "virtual_interface_id was not specified but it is required when building StopBgpFailoverTestInput",
                });
            }
            Ok(crate::input::StopBgpFailoverTestInput {
                virtual_interface_id: self.virtual_interface_id,
            })
        }
    }
}
impl StopBgpFailoverTestInput {
    /// Creates a new builder-style object to manufacture [`StopBgpFailoverTestInput`](crate::input::StopBgpFailoverTestInput)
    pub fn builder() -> crate::input::stop_bgp_failover_test_input::Builder {
        crate::input::stop_bgp_failover_test_input::Builder::default()
    }
}
impl StopBgpFailoverTestInput {
    /// Consumes the builder and constructs an Operation<[`StopBgpFailoverTest`](crate::operation::StopBgpFailoverTest)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::StopBgpFailoverTest, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_stop_bgp_failover_test(self);
        assemble_operation(config, "StopBgpFailoverTest", crate::operation::StopBgpFailoverTest::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct TagResourceInput {
    pub resource_arn: std::option::Option<std::string::String>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl std::fmt::Debug for TagResourceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("TagResourceInput");
        formatter.field("resource_arn", &self.resource_arn);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`TagResourceInput`](crate::input::TagResourceInput)
pub mod tag_resource_input {
    /// A builder for [`TagResourceInput`](crate::input::TagResourceInput)
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
        /// Consumes the builder and constructs a [`TagResourceInput`](crate::input::TagResourceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::TagResourceInput, smithy_http::operation::BuildError> {
            if self.resource_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "resource_arn",
                    details: "resource_arn was not specified but it is required when building TagResourceInput",
                });
            }
            if self.tags.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "tags",
                    details: "tags was not specified but it is required when building TagResourceInput",
                });
            }
            Ok(crate::input::TagResourceInput {
                resource_arn: self.resource_arn,
                tags: self.tags,
            })
        }
    }
}
impl TagResourceInput {
    /// Creates a new builder-style object to manufacture [`TagResourceInput`](crate::input::TagResourceInput)
    pub fn builder() -> crate::input::tag_resource_input::Builder {
        crate::input::tag_resource_input::Builder::default()
    }
}
impl TagResourceInput {
    /// Consumes the builder and constructs an Operation<[`TagResource`](crate::operation::TagResource)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::TagResource, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_tag_resource(self);
        assemble_operation(config, "TagResource", crate::operation::TagResource::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UntagResourceInput {
    pub resource_arn: std::option::Option<std::string::String>,
    pub tag_keys: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl std::fmt::Debug for UntagResourceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UntagResourceInput");
        formatter.field("resource_arn", &self.resource_arn);
        formatter.field("tag_keys", &self.tag_keys);
        formatter.finish()
    }
}
/// See [`UntagResourceInput`](crate::input::UntagResourceInput)
pub mod untag_resource_input {
    /// A builder for [`UntagResourceInput`](crate::input::UntagResourceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) resource_arn: std::option::Option<std::string::String>,
        pub(crate) tag_keys: std::option::Option<std::vec::Vec<std::string::String>>,
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
        /// Appends an item to `tag_keys`.
        pub fn tag_keys(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.tag_keys.unwrap_or_default();
            v.push(input.into());
            self.tag_keys = Some(v);
            self
        }
        pub fn set_tag_keys(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.tag_keys = input;
            self
        }
        /// Consumes the builder and constructs a [`UntagResourceInput`](crate::input::UntagResourceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UntagResourceInput, smithy_http::operation::BuildError> {
            if self.resource_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "resource_arn",
                    details: "resource_arn was not specified but it is required when building UntagResourceInput",
                });
            }
            if self.tag_keys.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "tag_keys",
                    details: "tag_keys was not specified but it is required when building UntagResourceInput",
                });
            }
            Ok(crate::input::UntagResourceInput {
                resource_arn: self.resource_arn,
                tag_keys: self.tag_keys,
            })
        }
    }
}
impl UntagResourceInput {
    /// Creates a new builder-style object to manufacture [`UntagResourceInput`](crate::input::UntagResourceInput)
    pub fn builder() -> crate::input::untag_resource_input::Builder {
        crate::input::untag_resource_input::Builder::default()
    }
}
impl UntagResourceInput {
    /// Consumes the builder and constructs an Operation<[`UntagResource`](crate::operation::UntagResource)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::UntagResource, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_untag_resource(self);
        assemble_operation(config, "UntagResource", crate::operation::UntagResource::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateDirectConnectGatewayAssociationInput {
    pub association_id: std::option::Option<std::string::String>,
    pub add_allowed_prefixes_to_direct_connect_gateway: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
    pub remove_allowed_prefixes_to_direct_connect_gateway: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
}
impl std::fmt::Debug for UpdateDirectConnectGatewayAssociationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateDirectConnectGatewayAssociationInput");
        formatter.field("association_id", &self.association_id);
        formatter.field("add_allowed_prefixes_to_direct_connect_gateway", &self.add_allowed_prefixes_to_direct_connect_gateway);
        formatter.field("remove_allowed_prefixes_to_direct_connect_gateway", &self.remove_allowed_prefixes_to_direct_connect_gateway);
        formatter.finish()
    }
}
/// See [`UpdateDirectConnectGatewayAssociationInput`](crate::input::UpdateDirectConnectGatewayAssociationInput)
pub mod update_direct_connect_gateway_association_input {
    /// A builder for [`UpdateDirectConnectGatewayAssociationInput`](crate::input::UpdateDirectConnectGatewayAssociationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) association_id: std::option::Option<std::string::String>,
        pub(crate) add_allowed_prefixes_to_direct_connect_gateway: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
        pub(crate) remove_allowed_prefixes_to_direct_connect_gateway: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>,
    }
    impl Builder {
        pub fn association_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.association_id = Some(input.into());
            self
        }
        pub fn set_association_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.association_id = input;
            self
        }
        /// Appends an item to `add_allowed_prefixes_to_direct_connect_gateway`.
        pub fn add_allowed_prefixes_to_direct_connect_gateway(mut self, input: impl Into<crate::model::RouteFilterPrefix>) -> Self {
            let mut v = self.add_allowed_prefixes_to_direct_connect_gateway.unwrap_or_default();
            v.push(input.into());
            self.add_allowed_prefixes_to_direct_connect_gateway = Some(v);
            self
        }
        pub fn set_add_allowed_prefixes_to_direct_connect_gateway(mut self, input: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>) -> Self {
            self.add_allowed_prefixes_to_direct_connect_gateway = input;
            self
        }
        /// Appends an item to `remove_allowed_prefixes_to_direct_connect_gateway`.
        pub fn remove_allowed_prefixes_to_direct_connect_gateway(mut self, input: impl Into<crate::model::RouteFilterPrefix>) -> Self {
            let mut v = self.remove_allowed_prefixes_to_direct_connect_gateway.unwrap_or_default();
            v.push(input.into());
            self.remove_allowed_prefixes_to_direct_connect_gateway = Some(v);
            self
        }
        pub fn set_remove_allowed_prefixes_to_direct_connect_gateway(mut self, input: std::option::Option<std::vec::Vec<crate::model::RouteFilterPrefix>>) -> Self {
            self.remove_allowed_prefixes_to_direct_connect_gateway = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateDirectConnectGatewayAssociationInput`](crate::input::UpdateDirectConnectGatewayAssociationInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateDirectConnectGatewayAssociationInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateDirectConnectGatewayAssociationInput {
                association_id: self.association_id,
                add_allowed_prefixes_to_direct_connect_gateway: self.add_allowed_prefixes_to_direct_connect_gateway,
                remove_allowed_prefixes_to_direct_connect_gateway: self.remove_allowed_prefixes_to_direct_connect_gateway,
            })
        }
    }
}
impl UpdateDirectConnectGatewayAssociationInput {
    /// Creates a new builder-style object to manufacture [`UpdateDirectConnectGatewayAssociationInput`](crate::input::UpdateDirectConnectGatewayAssociationInput)
    pub fn builder() -> crate::input::update_direct_connect_gateway_association_input::Builder {
        crate::input::update_direct_connect_gateway_association_input::Builder::default()
    }
}
impl UpdateDirectConnectGatewayAssociationInput {
    /// Consumes the builder and constructs an Operation<[`UpdateDirectConnectGatewayAssociation`](crate::operation::UpdateDirectConnectGatewayAssociation)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::UpdateDirectConnectGatewayAssociation, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_update_direct_connect_gateway_association(self);
        assemble_operation(config, "UpdateDirectConnectGatewayAssociation", crate::operation::UpdateDirectConnectGatewayAssociation::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateLagInput {
    pub lag_id: std::option::Option<std::string::String>,
    pub lag_name: std::option::Option<std::string::String>,
    pub minimum_links: std::option::Option<i32>,
}
impl std::fmt::Debug for UpdateLagInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateLagInput");
        formatter.field("lag_id", &self.lag_id);
        formatter.field("lag_name", &self.lag_name);
        formatter.field("minimum_links", &self.minimum_links);
        formatter.finish()
    }
}
/// See [`UpdateLagInput`](crate::input::UpdateLagInput)
pub mod update_lag_input {
    /// A builder for [`UpdateLagInput`](crate::input::UpdateLagInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) lag_id: std::option::Option<std::string::String>,
        pub(crate) lag_name: std::option::Option<std::string::String>,
        pub(crate) minimum_links: std::option::Option<i32>,
    }
    impl Builder {
        pub fn lag_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.lag_id = Some(input.into());
            self
        }
        pub fn set_lag_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.lag_id = input;
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
        pub fn minimum_links(mut self, input: i32) -> Self {
            self.minimum_links = Some(input);
            self
        }
        pub fn set_minimum_links(mut self, input: std::option::Option<i32>) -> Self {
            self.minimum_links = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateLagInput`](crate::input::UpdateLagInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateLagInput, smithy_http::operation::BuildError> {
            if self.lag_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "lag_id",
                    details: "lag_id was not specified but it is required when building UpdateLagInput",
                });
            }
            Ok(crate::input::UpdateLagInput {
                lag_id: self.lag_id,
                lag_name: self.lag_name,
                minimum_links: self.minimum_links,
            })
        }
    }
}
impl UpdateLagInput {
    /// Creates a new builder-style object to manufacture [`UpdateLagInput`](crate::input::UpdateLagInput)
    pub fn builder() -> crate::input::update_lag_input::Builder {
        crate::input::update_lag_input::Builder::default()
    }
}
impl UpdateLagInput {
    /// Consumes the builder and constructs an Operation<[`UpdateLag`](crate::operation::UpdateLag)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::UpdateLag, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_update_lag(self);
        assemble_operation(config, "UpdateLag", crate::operation::UpdateLag::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateVirtualInterfaceAttributesInput {
    pub virtual_interface_id: std::option::Option<std::string::String>,
    pub mtu: std::option::Option<i32>,
}
impl std::fmt::Debug for UpdateVirtualInterfaceAttributesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateVirtualInterfaceAttributesInput");
        formatter.field("virtual_interface_id", &self.virtual_interface_id);
        formatter.field("mtu", &self.mtu);
        formatter.finish()
    }
}
/// See [`UpdateVirtualInterfaceAttributesInput`](crate::input::UpdateVirtualInterfaceAttributesInput)
pub mod update_virtual_interface_attributes_input {
    /// A builder for [`UpdateVirtualInterfaceAttributesInput`](crate::input::UpdateVirtualInterfaceAttributesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) virtual_interface_id: std::option::Option<std::string::String>,
        pub(crate) mtu: std::option::Option<i32>,
    }
    impl Builder {
        pub fn virtual_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_interface_id = Some(input.into());
            self
        }
        pub fn set_virtual_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_interface_id = input;
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
        /// Consumes the builder and constructs a [`UpdateVirtualInterfaceAttributesInput`](crate::input::UpdateVirtualInterfaceAttributesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateVirtualInterfaceAttributesInput, smithy_http::operation::BuildError> {
            if self.virtual_interface_id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "virtual_interface_id",
                    details: "virtual_interface_id was not specified but it is required when building UpdateVirtualInterfaceAttributesInput",
                });
            }
            Ok(crate::input::UpdateVirtualInterfaceAttributesInput {
                virtual_interface_id: self.virtual_interface_id,
                mtu: self.mtu,
            })
        }
    }
}
impl UpdateVirtualInterfaceAttributesInput {
    /// Creates a new builder-style object to manufacture [`UpdateVirtualInterfaceAttributesInput`](crate::input::UpdateVirtualInterfaceAttributesInput)
    pub fn builder() -> crate::input::update_virtual_interface_attributes_input::Builder {
        crate::input::update_virtual_interface_attributes_input::Builder::default()
    }
}
impl UpdateVirtualInterfaceAttributesInput {
    /// Consumes the builder and constructs an Operation<[`UpdateVirtualInterfaceAttributes`](crate::operation::UpdateVirtualInterfaceAttributes)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::UpdateVirtualInterfaceAttributes, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_update_virtual_interface_attributes(self);
        assemble_operation(config, "UpdateVirtualInterfaceAttributes", crate::operation::UpdateVirtualInterfaceAttributes::new(), body)
    }
}
