/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Error type for the `AcceptDirectConnectGatewayAssociationProposal` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct AcceptDirectConnectGatewayAssociationProposalError {
    pub kind: AcceptDirectConnectGatewayAssociationProposalErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `AcceptDirectConnectGatewayAssociationProposal` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum AcceptDirectConnectGatewayAssociationProposalErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for AcceptDirectConnectGatewayAssociationProposalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            AcceptDirectConnectGatewayAssociationProposalErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            AcceptDirectConnectGatewayAssociationProposalErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            AcceptDirectConnectGatewayAssociationProposalErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for AcceptDirectConnectGatewayAssociationProposalError {
    fn code(&self) -> Option<&str> {
        AcceptDirectConnectGatewayAssociationProposalError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl AcceptDirectConnectGatewayAssociationProposalError {
    pub fn new(kind: AcceptDirectConnectGatewayAssociationProposalErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: AcceptDirectConnectGatewayAssociationProposalErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: AcceptDirectConnectGatewayAssociationProposalErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, AcceptDirectConnectGatewayAssociationProposalErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, AcceptDirectConnectGatewayAssociationProposalErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for AcceptDirectConnectGatewayAssociationProposalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            AcceptDirectConnectGatewayAssociationProposalErrorKind::DirectConnectServerException(inner) => Some(inner),
            AcceptDirectConnectGatewayAssociationProposalErrorKind::DirectConnectClientException(inner) => Some(inner),
            AcceptDirectConnectGatewayAssociationProposalErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `AllocateConnectionOnInterconnect` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct AllocateConnectionOnInterconnectError {
    pub kind: AllocateConnectionOnInterconnectErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `AllocateConnectionOnInterconnect` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum AllocateConnectionOnInterconnectErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for AllocateConnectionOnInterconnectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            AllocateConnectionOnInterconnectErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            AllocateConnectionOnInterconnectErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            AllocateConnectionOnInterconnectErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for AllocateConnectionOnInterconnectError {
    fn code(&self) -> Option<&str> {
        AllocateConnectionOnInterconnectError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl AllocateConnectionOnInterconnectError {
    pub fn new(kind: AllocateConnectionOnInterconnectErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: AllocateConnectionOnInterconnectErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: AllocateConnectionOnInterconnectErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, AllocateConnectionOnInterconnectErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, AllocateConnectionOnInterconnectErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for AllocateConnectionOnInterconnectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            AllocateConnectionOnInterconnectErrorKind::DirectConnectServerException(inner) => Some(inner),
            AllocateConnectionOnInterconnectErrorKind::DirectConnectClientException(inner) => Some(inner),
            AllocateConnectionOnInterconnectErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `AllocateHostedConnection` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct AllocateHostedConnectionError {
    pub kind: AllocateHostedConnectionErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `AllocateHostedConnection` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum AllocateHostedConnectionErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    DuplicateTagKeysException(crate::error::DuplicateTagKeysException),
    TooManyTagsException(crate::error::TooManyTagsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for AllocateHostedConnectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            AllocateHostedConnectionErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            AllocateHostedConnectionErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            AllocateHostedConnectionErrorKind::DuplicateTagKeysException(inner) => inner.fmt(f),
            AllocateHostedConnectionErrorKind::TooManyTagsException(inner) => inner.fmt(f),
            AllocateHostedConnectionErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for AllocateHostedConnectionError {
    fn code(&self) -> Option<&str> {
        AllocateHostedConnectionError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl AllocateHostedConnectionError {
    pub fn new(kind: AllocateHostedConnectionErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: AllocateHostedConnectionErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: AllocateHostedConnectionErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, AllocateHostedConnectionErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, AllocateHostedConnectionErrorKind::DirectConnectClientException(_))
    }
    pub fn is_duplicate_tag_keys_exception(&self) -> bool {
        matches!(&self.kind, AllocateHostedConnectionErrorKind::DuplicateTagKeysException(_))
    }
    pub fn is_too_many_tags_exception(&self) -> bool {
        matches!(&self.kind, AllocateHostedConnectionErrorKind::TooManyTagsException(_))
    }
}
impl std::error::Error for AllocateHostedConnectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            AllocateHostedConnectionErrorKind::DirectConnectServerException(inner) => Some(inner),
            AllocateHostedConnectionErrorKind::DirectConnectClientException(inner) => Some(inner),
            AllocateHostedConnectionErrorKind::DuplicateTagKeysException(inner) => Some(inner),
            AllocateHostedConnectionErrorKind::TooManyTagsException(inner) => Some(inner),
            AllocateHostedConnectionErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `AllocatePrivateVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct AllocatePrivateVirtualInterfaceError {
    pub kind: AllocatePrivateVirtualInterfaceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `AllocatePrivateVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum AllocatePrivateVirtualInterfaceErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    DuplicateTagKeysException(crate::error::DuplicateTagKeysException),
    TooManyTagsException(crate::error::TooManyTagsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for AllocatePrivateVirtualInterfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            AllocatePrivateVirtualInterfaceErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            AllocatePrivateVirtualInterfaceErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            AllocatePrivateVirtualInterfaceErrorKind::DuplicateTagKeysException(inner) => inner.fmt(f),
            AllocatePrivateVirtualInterfaceErrorKind::TooManyTagsException(inner) => inner.fmt(f),
            AllocatePrivateVirtualInterfaceErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for AllocatePrivateVirtualInterfaceError {
    fn code(&self) -> Option<&str> {
        AllocatePrivateVirtualInterfaceError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl AllocatePrivateVirtualInterfaceError {
    pub fn new(kind: AllocatePrivateVirtualInterfaceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: AllocatePrivateVirtualInterfaceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: AllocatePrivateVirtualInterfaceErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, AllocatePrivateVirtualInterfaceErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, AllocatePrivateVirtualInterfaceErrorKind::DirectConnectClientException(_))
    }
    pub fn is_duplicate_tag_keys_exception(&self) -> bool {
        matches!(&self.kind, AllocatePrivateVirtualInterfaceErrorKind::DuplicateTagKeysException(_))
    }
    pub fn is_too_many_tags_exception(&self) -> bool {
        matches!(&self.kind, AllocatePrivateVirtualInterfaceErrorKind::TooManyTagsException(_))
    }
}
impl std::error::Error for AllocatePrivateVirtualInterfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            AllocatePrivateVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Some(inner),
            AllocatePrivateVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Some(inner),
            AllocatePrivateVirtualInterfaceErrorKind::DuplicateTagKeysException(inner) => Some(inner),
            AllocatePrivateVirtualInterfaceErrorKind::TooManyTagsException(inner) => Some(inner),
            AllocatePrivateVirtualInterfaceErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `AllocatePublicVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct AllocatePublicVirtualInterfaceError {
    pub kind: AllocatePublicVirtualInterfaceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `AllocatePublicVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum AllocatePublicVirtualInterfaceErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    DuplicateTagKeysException(crate::error::DuplicateTagKeysException),
    TooManyTagsException(crate::error::TooManyTagsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for AllocatePublicVirtualInterfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            AllocatePublicVirtualInterfaceErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            AllocatePublicVirtualInterfaceErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            AllocatePublicVirtualInterfaceErrorKind::DuplicateTagKeysException(inner) => inner.fmt(f),
            AllocatePublicVirtualInterfaceErrorKind::TooManyTagsException(inner) => inner.fmt(f),
            AllocatePublicVirtualInterfaceErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for AllocatePublicVirtualInterfaceError {
    fn code(&self) -> Option<&str> {
        AllocatePublicVirtualInterfaceError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl AllocatePublicVirtualInterfaceError {
    pub fn new(kind: AllocatePublicVirtualInterfaceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: AllocatePublicVirtualInterfaceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: AllocatePublicVirtualInterfaceErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, AllocatePublicVirtualInterfaceErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, AllocatePublicVirtualInterfaceErrorKind::DirectConnectClientException(_))
    }
    pub fn is_duplicate_tag_keys_exception(&self) -> bool {
        matches!(&self.kind, AllocatePublicVirtualInterfaceErrorKind::DuplicateTagKeysException(_))
    }
    pub fn is_too_many_tags_exception(&self) -> bool {
        matches!(&self.kind, AllocatePublicVirtualInterfaceErrorKind::TooManyTagsException(_))
    }
}
impl std::error::Error for AllocatePublicVirtualInterfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            AllocatePublicVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Some(inner),
            AllocatePublicVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Some(inner),
            AllocatePublicVirtualInterfaceErrorKind::DuplicateTagKeysException(inner) => Some(inner),
            AllocatePublicVirtualInterfaceErrorKind::TooManyTagsException(inner) => Some(inner),
            AllocatePublicVirtualInterfaceErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `AllocateTransitVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct AllocateTransitVirtualInterfaceError {
    pub kind: AllocateTransitVirtualInterfaceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `AllocateTransitVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum AllocateTransitVirtualInterfaceErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    DuplicateTagKeysException(crate::error::DuplicateTagKeysException),
    TooManyTagsException(crate::error::TooManyTagsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for AllocateTransitVirtualInterfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            AllocateTransitVirtualInterfaceErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            AllocateTransitVirtualInterfaceErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            AllocateTransitVirtualInterfaceErrorKind::DuplicateTagKeysException(inner) => inner.fmt(f),
            AllocateTransitVirtualInterfaceErrorKind::TooManyTagsException(inner) => inner.fmt(f),
            AllocateTransitVirtualInterfaceErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for AllocateTransitVirtualInterfaceError {
    fn code(&self) -> Option<&str> {
        AllocateTransitVirtualInterfaceError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl AllocateTransitVirtualInterfaceError {
    pub fn new(kind: AllocateTransitVirtualInterfaceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: AllocateTransitVirtualInterfaceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: AllocateTransitVirtualInterfaceErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, AllocateTransitVirtualInterfaceErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, AllocateTransitVirtualInterfaceErrorKind::DirectConnectClientException(_))
    }
    pub fn is_duplicate_tag_keys_exception(&self) -> bool {
        matches!(&self.kind, AllocateTransitVirtualInterfaceErrorKind::DuplicateTagKeysException(_))
    }
    pub fn is_too_many_tags_exception(&self) -> bool {
        matches!(&self.kind, AllocateTransitVirtualInterfaceErrorKind::TooManyTagsException(_))
    }
}
impl std::error::Error for AllocateTransitVirtualInterfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            AllocateTransitVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Some(inner),
            AllocateTransitVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Some(inner),
            AllocateTransitVirtualInterfaceErrorKind::DuplicateTagKeysException(inner) => Some(inner),
            AllocateTransitVirtualInterfaceErrorKind::TooManyTagsException(inner) => Some(inner),
            AllocateTransitVirtualInterfaceErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `AssociateConnectionWithLag` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct AssociateConnectionWithLagError {
    pub kind: AssociateConnectionWithLagErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `AssociateConnectionWithLag` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum AssociateConnectionWithLagErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for AssociateConnectionWithLagError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            AssociateConnectionWithLagErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            AssociateConnectionWithLagErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            AssociateConnectionWithLagErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for AssociateConnectionWithLagError {
    fn code(&self) -> Option<&str> {
        AssociateConnectionWithLagError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl AssociateConnectionWithLagError {
    pub fn new(kind: AssociateConnectionWithLagErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: AssociateConnectionWithLagErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: AssociateConnectionWithLagErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, AssociateConnectionWithLagErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, AssociateConnectionWithLagErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for AssociateConnectionWithLagError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            AssociateConnectionWithLagErrorKind::DirectConnectServerException(inner) => Some(inner),
            AssociateConnectionWithLagErrorKind::DirectConnectClientException(inner) => Some(inner),
            AssociateConnectionWithLagErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `AssociateHostedConnection` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct AssociateHostedConnectionError {
    pub kind: AssociateHostedConnectionErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `AssociateHostedConnection` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum AssociateHostedConnectionErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for AssociateHostedConnectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            AssociateHostedConnectionErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            AssociateHostedConnectionErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            AssociateHostedConnectionErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for AssociateHostedConnectionError {
    fn code(&self) -> Option<&str> {
        AssociateHostedConnectionError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl AssociateHostedConnectionError {
    pub fn new(kind: AssociateHostedConnectionErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: AssociateHostedConnectionErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: AssociateHostedConnectionErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, AssociateHostedConnectionErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, AssociateHostedConnectionErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for AssociateHostedConnectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            AssociateHostedConnectionErrorKind::DirectConnectServerException(inner) => Some(inner),
            AssociateHostedConnectionErrorKind::DirectConnectClientException(inner) => Some(inner),
            AssociateHostedConnectionErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `AssociateVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct AssociateVirtualInterfaceError {
    pub kind: AssociateVirtualInterfaceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `AssociateVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum AssociateVirtualInterfaceErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for AssociateVirtualInterfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            AssociateVirtualInterfaceErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            AssociateVirtualInterfaceErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            AssociateVirtualInterfaceErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for AssociateVirtualInterfaceError {
    fn code(&self) -> Option<&str> {
        AssociateVirtualInterfaceError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl AssociateVirtualInterfaceError {
    pub fn new(kind: AssociateVirtualInterfaceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: AssociateVirtualInterfaceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: AssociateVirtualInterfaceErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, AssociateVirtualInterfaceErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, AssociateVirtualInterfaceErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for AssociateVirtualInterfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            AssociateVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Some(inner),
            AssociateVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Some(inner),
            AssociateVirtualInterfaceErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ConfirmConnection` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ConfirmConnectionError {
    pub kind: ConfirmConnectionErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ConfirmConnection` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ConfirmConnectionErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ConfirmConnectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ConfirmConnectionErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            ConfirmConnectionErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            ConfirmConnectionErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ConfirmConnectionError {
    fn code(&self) -> Option<&str> {
        ConfirmConnectionError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl ConfirmConnectionError {
    pub fn new(kind: ConfirmConnectionErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ConfirmConnectionErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ConfirmConnectionErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, ConfirmConnectionErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, ConfirmConnectionErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for ConfirmConnectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ConfirmConnectionErrorKind::DirectConnectServerException(inner) => Some(inner),
            ConfirmConnectionErrorKind::DirectConnectClientException(inner) => Some(inner),
            ConfirmConnectionErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ConfirmPrivateVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ConfirmPrivateVirtualInterfaceError {
    pub kind: ConfirmPrivateVirtualInterfaceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ConfirmPrivateVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ConfirmPrivateVirtualInterfaceErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ConfirmPrivateVirtualInterfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ConfirmPrivateVirtualInterfaceErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            ConfirmPrivateVirtualInterfaceErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            ConfirmPrivateVirtualInterfaceErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ConfirmPrivateVirtualInterfaceError {
    fn code(&self) -> Option<&str> {
        ConfirmPrivateVirtualInterfaceError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl ConfirmPrivateVirtualInterfaceError {
    pub fn new(kind: ConfirmPrivateVirtualInterfaceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ConfirmPrivateVirtualInterfaceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ConfirmPrivateVirtualInterfaceErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, ConfirmPrivateVirtualInterfaceErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, ConfirmPrivateVirtualInterfaceErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for ConfirmPrivateVirtualInterfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ConfirmPrivateVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Some(inner),
            ConfirmPrivateVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Some(inner),
            ConfirmPrivateVirtualInterfaceErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ConfirmPublicVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ConfirmPublicVirtualInterfaceError {
    pub kind: ConfirmPublicVirtualInterfaceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ConfirmPublicVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ConfirmPublicVirtualInterfaceErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ConfirmPublicVirtualInterfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ConfirmPublicVirtualInterfaceErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            ConfirmPublicVirtualInterfaceErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            ConfirmPublicVirtualInterfaceErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ConfirmPublicVirtualInterfaceError {
    fn code(&self) -> Option<&str> {
        ConfirmPublicVirtualInterfaceError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl ConfirmPublicVirtualInterfaceError {
    pub fn new(kind: ConfirmPublicVirtualInterfaceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ConfirmPublicVirtualInterfaceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ConfirmPublicVirtualInterfaceErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, ConfirmPublicVirtualInterfaceErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, ConfirmPublicVirtualInterfaceErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for ConfirmPublicVirtualInterfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ConfirmPublicVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Some(inner),
            ConfirmPublicVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Some(inner),
            ConfirmPublicVirtualInterfaceErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ConfirmTransitVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ConfirmTransitVirtualInterfaceError {
    pub kind: ConfirmTransitVirtualInterfaceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ConfirmTransitVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ConfirmTransitVirtualInterfaceErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ConfirmTransitVirtualInterfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ConfirmTransitVirtualInterfaceErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            ConfirmTransitVirtualInterfaceErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            ConfirmTransitVirtualInterfaceErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ConfirmTransitVirtualInterfaceError {
    fn code(&self) -> Option<&str> {
        ConfirmTransitVirtualInterfaceError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl ConfirmTransitVirtualInterfaceError {
    pub fn new(kind: ConfirmTransitVirtualInterfaceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ConfirmTransitVirtualInterfaceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ConfirmTransitVirtualInterfaceErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, ConfirmTransitVirtualInterfaceErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, ConfirmTransitVirtualInterfaceErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for ConfirmTransitVirtualInterfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ConfirmTransitVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Some(inner),
            ConfirmTransitVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Some(inner),
            ConfirmTransitVirtualInterfaceErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreateBgpPeer` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateBgpPeerError {
    pub kind: CreateBgpPeerErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateBgpPeer` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateBgpPeerErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateBgpPeerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateBgpPeerErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            CreateBgpPeerErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            CreateBgpPeerErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for CreateBgpPeerError {
    fn code(&self) -> Option<&str> {
        CreateBgpPeerError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl CreateBgpPeerError {
    pub fn new(kind: CreateBgpPeerErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateBgpPeerErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateBgpPeerErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, CreateBgpPeerErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, CreateBgpPeerErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for CreateBgpPeerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateBgpPeerErrorKind::DirectConnectServerException(inner) => Some(inner),
            CreateBgpPeerErrorKind::DirectConnectClientException(inner) => Some(inner),
            CreateBgpPeerErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreateConnection` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateConnectionError {
    pub kind: CreateConnectionErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateConnection` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateConnectionErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    DuplicateTagKeysException(crate::error::DuplicateTagKeysException),
    TooManyTagsException(crate::error::TooManyTagsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateConnectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateConnectionErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            CreateConnectionErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            CreateConnectionErrorKind::DuplicateTagKeysException(inner) => inner.fmt(f),
            CreateConnectionErrorKind::TooManyTagsException(inner) => inner.fmt(f),
            CreateConnectionErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for CreateConnectionError {
    fn code(&self) -> Option<&str> {
        CreateConnectionError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl CreateConnectionError {
    pub fn new(kind: CreateConnectionErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateConnectionErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateConnectionErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, CreateConnectionErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, CreateConnectionErrorKind::DirectConnectClientException(_))
    }
    pub fn is_duplicate_tag_keys_exception(&self) -> bool {
        matches!(&self.kind, CreateConnectionErrorKind::DuplicateTagKeysException(_))
    }
    pub fn is_too_many_tags_exception(&self) -> bool {
        matches!(&self.kind, CreateConnectionErrorKind::TooManyTagsException(_))
    }
}
impl std::error::Error for CreateConnectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateConnectionErrorKind::DirectConnectServerException(inner) => Some(inner),
            CreateConnectionErrorKind::DirectConnectClientException(inner) => Some(inner),
            CreateConnectionErrorKind::DuplicateTagKeysException(inner) => Some(inner),
            CreateConnectionErrorKind::TooManyTagsException(inner) => Some(inner),
            CreateConnectionErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreateDirectConnectGateway` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateDirectConnectGatewayError {
    pub kind: CreateDirectConnectGatewayErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateDirectConnectGateway` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateDirectConnectGatewayErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateDirectConnectGatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateDirectConnectGatewayErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            CreateDirectConnectGatewayErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            CreateDirectConnectGatewayErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for CreateDirectConnectGatewayError {
    fn code(&self) -> Option<&str> {
        CreateDirectConnectGatewayError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl CreateDirectConnectGatewayError {
    pub fn new(kind: CreateDirectConnectGatewayErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateDirectConnectGatewayErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateDirectConnectGatewayErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, CreateDirectConnectGatewayErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, CreateDirectConnectGatewayErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for CreateDirectConnectGatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateDirectConnectGatewayErrorKind::DirectConnectServerException(inner) => Some(inner),
            CreateDirectConnectGatewayErrorKind::DirectConnectClientException(inner) => Some(inner),
            CreateDirectConnectGatewayErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreateDirectConnectGatewayAssociation` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateDirectConnectGatewayAssociationError {
    pub kind: CreateDirectConnectGatewayAssociationErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateDirectConnectGatewayAssociation` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateDirectConnectGatewayAssociationErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateDirectConnectGatewayAssociationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateDirectConnectGatewayAssociationErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            CreateDirectConnectGatewayAssociationErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            CreateDirectConnectGatewayAssociationErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for CreateDirectConnectGatewayAssociationError {
    fn code(&self) -> Option<&str> {
        CreateDirectConnectGatewayAssociationError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl CreateDirectConnectGatewayAssociationError {
    pub fn new(kind: CreateDirectConnectGatewayAssociationErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateDirectConnectGatewayAssociationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateDirectConnectGatewayAssociationErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, CreateDirectConnectGatewayAssociationErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, CreateDirectConnectGatewayAssociationErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for CreateDirectConnectGatewayAssociationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateDirectConnectGatewayAssociationErrorKind::DirectConnectServerException(inner) => Some(inner),
            CreateDirectConnectGatewayAssociationErrorKind::DirectConnectClientException(inner) => Some(inner),
            CreateDirectConnectGatewayAssociationErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreateDirectConnectGatewayAssociationProposal` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateDirectConnectGatewayAssociationProposalError {
    pub kind: CreateDirectConnectGatewayAssociationProposalErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateDirectConnectGatewayAssociationProposal` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateDirectConnectGatewayAssociationProposalErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateDirectConnectGatewayAssociationProposalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateDirectConnectGatewayAssociationProposalErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            CreateDirectConnectGatewayAssociationProposalErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            CreateDirectConnectGatewayAssociationProposalErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for CreateDirectConnectGatewayAssociationProposalError {
    fn code(&self) -> Option<&str> {
        CreateDirectConnectGatewayAssociationProposalError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl CreateDirectConnectGatewayAssociationProposalError {
    pub fn new(kind: CreateDirectConnectGatewayAssociationProposalErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateDirectConnectGatewayAssociationProposalErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateDirectConnectGatewayAssociationProposalErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, CreateDirectConnectGatewayAssociationProposalErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, CreateDirectConnectGatewayAssociationProposalErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for CreateDirectConnectGatewayAssociationProposalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateDirectConnectGatewayAssociationProposalErrorKind::DirectConnectServerException(inner) => Some(inner),
            CreateDirectConnectGatewayAssociationProposalErrorKind::DirectConnectClientException(inner) => Some(inner),
            CreateDirectConnectGatewayAssociationProposalErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreateInterconnect` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateInterconnectError {
    pub kind: CreateInterconnectErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateInterconnect` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateInterconnectErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    DuplicateTagKeysException(crate::error::DuplicateTagKeysException),
    TooManyTagsException(crate::error::TooManyTagsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateInterconnectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateInterconnectErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            CreateInterconnectErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            CreateInterconnectErrorKind::DuplicateTagKeysException(inner) => inner.fmt(f),
            CreateInterconnectErrorKind::TooManyTagsException(inner) => inner.fmt(f),
            CreateInterconnectErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for CreateInterconnectError {
    fn code(&self) -> Option<&str> {
        CreateInterconnectError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl CreateInterconnectError {
    pub fn new(kind: CreateInterconnectErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateInterconnectErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateInterconnectErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, CreateInterconnectErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, CreateInterconnectErrorKind::DirectConnectClientException(_))
    }
    pub fn is_duplicate_tag_keys_exception(&self) -> bool {
        matches!(&self.kind, CreateInterconnectErrorKind::DuplicateTagKeysException(_))
    }
    pub fn is_too_many_tags_exception(&self) -> bool {
        matches!(&self.kind, CreateInterconnectErrorKind::TooManyTagsException(_))
    }
}
impl std::error::Error for CreateInterconnectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateInterconnectErrorKind::DirectConnectServerException(inner) => Some(inner),
            CreateInterconnectErrorKind::DirectConnectClientException(inner) => Some(inner),
            CreateInterconnectErrorKind::DuplicateTagKeysException(inner) => Some(inner),
            CreateInterconnectErrorKind::TooManyTagsException(inner) => Some(inner),
            CreateInterconnectErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreateLag` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateLagError {
    pub kind: CreateLagErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateLag` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateLagErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    DuplicateTagKeysException(crate::error::DuplicateTagKeysException),
    TooManyTagsException(crate::error::TooManyTagsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateLagError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateLagErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            CreateLagErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            CreateLagErrorKind::DuplicateTagKeysException(inner) => inner.fmt(f),
            CreateLagErrorKind::TooManyTagsException(inner) => inner.fmt(f),
            CreateLagErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for CreateLagError {
    fn code(&self) -> Option<&str> {
        CreateLagError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl CreateLagError {
    pub fn new(kind: CreateLagErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateLagErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateLagErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, CreateLagErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, CreateLagErrorKind::DirectConnectClientException(_))
    }
    pub fn is_duplicate_tag_keys_exception(&self) -> bool {
        matches!(&self.kind, CreateLagErrorKind::DuplicateTagKeysException(_))
    }
    pub fn is_too_many_tags_exception(&self) -> bool {
        matches!(&self.kind, CreateLagErrorKind::TooManyTagsException(_))
    }
}
impl std::error::Error for CreateLagError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateLagErrorKind::DirectConnectServerException(inner) => Some(inner),
            CreateLagErrorKind::DirectConnectClientException(inner) => Some(inner),
            CreateLagErrorKind::DuplicateTagKeysException(inner) => Some(inner),
            CreateLagErrorKind::TooManyTagsException(inner) => Some(inner),
            CreateLagErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreatePrivateVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreatePrivateVirtualInterfaceError {
    pub kind: CreatePrivateVirtualInterfaceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreatePrivateVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreatePrivateVirtualInterfaceErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    DuplicateTagKeysException(crate::error::DuplicateTagKeysException),
    TooManyTagsException(crate::error::TooManyTagsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreatePrivateVirtualInterfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreatePrivateVirtualInterfaceErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            CreatePrivateVirtualInterfaceErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            CreatePrivateVirtualInterfaceErrorKind::DuplicateTagKeysException(inner) => inner.fmt(f),
            CreatePrivateVirtualInterfaceErrorKind::TooManyTagsException(inner) => inner.fmt(f),
            CreatePrivateVirtualInterfaceErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for CreatePrivateVirtualInterfaceError {
    fn code(&self) -> Option<&str> {
        CreatePrivateVirtualInterfaceError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl CreatePrivateVirtualInterfaceError {
    pub fn new(kind: CreatePrivateVirtualInterfaceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreatePrivateVirtualInterfaceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreatePrivateVirtualInterfaceErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, CreatePrivateVirtualInterfaceErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, CreatePrivateVirtualInterfaceErrorKind::DirectConnectClientException(_))
    }
    pub fn is_duplicate_tag_keys_exception(&self) -> bool {
        matches!(&self.kind, CreatePrivateVirtualInterfaceErrorKind::DuplicateTagKeysException(_))
    }
    pub fn is_too_many_tags_exception(&self) -> bool {
        matches!(&self.kind, CreatePrivateVirtualInterfaceErrorKind::TooManyTagsException(_))
    }
}
impl std::error::Error for CreatePrivateVirtualInterfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreatePrivateVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Some(inner),
            CreatePrivateVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Some(inner),
            CreatePrivateVirtualInterfaceErrorKind::DuplicateTagKeysException(inner) => Some(inner),
            CreatePrivateVirtualInterfaceErrorKind::TooManyTagsException(inner) => Some(inner),
            CreatePrivateVirtualInterfaceErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreatePublicVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreatePublicVirtualInterfaceError {
    pub kind: CreatePublicVirtualInterfaceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreatePublicVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreatePublicVirtualInterfaceErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    DuplicateTagKeysException(crate::error::DuplicateTagKeysException),
    TooManyTagsException(crate::error::TooManyTagsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreatePublicVirtualInterfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreatePublicVirtualInterfaceErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            CreatePublicVirtualInterfaceErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            CreatePublicVirtualInterfaceErrorKind::DuplicateTagKeysException(inner) => inner.fmt(f),
            CreatePublicVirtualInterfaceErrorKind::TooManyTagsException(inner) => inner.fmt(f),
            CreatePublicVirtualInterfaceErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for CreatePublicVirtualInterfaceError {
    fn code(&self) -> Option<&str> {
        CreatePublicVirtualInterfaceError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl CreatePublicVirtualInterfaceError {
    pub fn new(kind: CreatePublicVirtualInterfaceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreatePublicVirtualInterfaceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreatePublicVirtualInterfaceErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, CreatePublicVirtualInterfaceErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, CreatePublicVirtualInterfaceErrorKind::DirectConnectClientException(_))
    }
    pub fn is_duplicate_tag_keys_exception(&self) -> bool {
        matches!(&self.kind, CreatePublicVirtualInterfaceErrorKind::DuplicateTagKeysException(_))
    }
    pub fn is_too_many_tags_exception(&self) -> bool {
        matches!(&self.kind, CreatePublicVirtualInterfaceErrorKind::TooManyTagsException(_))
    }
}
impl std::error::Error for CreatePublicVirtualInterfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreatePublicVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Some(inner),
            CreatePublicVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Some(inner),
            CreatePublicVirtualInterfaceErrorKind::DuplicateTagKeysException(inner) => Some(inner),
            CreatePublicVirtualInterfaceErrorKind::TooManyTagsException(inner) => Some(inner),
            CreatePublicVirtualInterfaceErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreateTransitVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateTransitVirtualInterfaceError {
    pub kind: CreateTransitVirtualInterfaceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateTransitVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateTransitVirtualInterfaceErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    DuplicateTagKeysException(crate::error::DuplicateTagKeysException),
    TooManyTagsException(crate::error::TooManyTagsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateTransitVirtualInterfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateTransitVirtualInterfaceErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            CreateTransitVirtualInterfaceErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            CreateTransitVirtualInterfaceErrorKind::DuplicateTagKeysException(inner) => inner.fmt(f),
            CreateTransitVirtualInterfaceErrorKind::TooManyTagsException(inner) => inner.fmt(f),
            CreateTransitVirtualInterfaceErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for CreateTransitVirtualInterfaceError {
    fn code(&self) -> Option<&str> {
        CreateTransitVirtualInterfaceError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl CreateTransitVirtualInterfaceError {
    pub fn new(kind: CreateTransitVirtualInterfaceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateTransitVirtualInterfaceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateTransitVirtualInterfaceErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, CreateTransitVirtualInterfaceErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, CreateTransitVirtualInterfaceErrorKind::DirectConnectClientException(_))
    }
    pub fn is_duplicate_tag_keys_exception(&self) -> bool {
        matches!(&self.kind, CreateTransitVirtualInterfaceErrorKind::DuplicateTagKeysException(_))
    }
    pub fn is_too_many_tags_exception(&self) -> bool {
        matches!(&self.kind, CreateTransitVirtualInterfaceErrorKind::TooManyTagsException(_))
    }
}
impl std::error::Error for CreateTransitVirtualInterfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateTransitVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Some(inner),
            CreateTransitVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Some(inner),
            CreateTransitVirtualInterfaceErrorKind::DuplicateTagKeysException(inner) => Some(inner),
            CreateTransitVirtualInterfaceErrorKind::TooManyTagsException(inner) => Some(inner),
            CreateTransitVirtualInterfaceErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteBgpPeer` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteBgpPeerError {
    pub kind: DeleteBgpPeerErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteBgpPeer` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteBgpPeerErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteBgpPeerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteBgpPeerErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DeleteBgpPeerErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DeleteBgpPeerErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteBgpPeerError {
    fn code(&self) -> Option<&str> {
        DeleteBgpPeerError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DeleteBgpPeerError {
    pub fn new(kind: DeleteBgpPeerErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteBgpPeerErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteBgpPeerErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DeleteBgpPeerErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DeleteBgpPeerErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DeleteBgpPeerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteBgpPeerErrorKind::DirectConnectServerException(inner) => Some(inner),
            DeleteBgpPeerErrorKind::DirectConnectClientException(inner) => Some(inner),
            DeleteBgpPeerErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteConnection` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteConnectionError {
    pub kind: DeleteConnectionErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteConnection` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteConnectionErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteConnectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteConnectionErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DeleteConnectionErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DeleteConnectionErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteConnectionError {
    fn code(&self) -> Option<&str> {
        DeleteConnectionError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DeleteConnectionError {
    pub fn new(kind: DeleteConnectionErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteConnectionErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteConnectionErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DeleteConnectionErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DeleteConnectionErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DeleteConnectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteConnectionErrorKind::DirectConnectServerException(inner) => Some(inner),
            DeleteConnectionErrorKind::DirectConnectClientException(inner) => Some(inner),
            DeleteConnectionErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteDirectConnectGateway` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteDirectConnectGatewayError {
    pub kind: DeleteDirectConnectGatewayErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteDirectConnectGateway` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteDirectConnectGatewayErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteDirectConnectGatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteDirectConnectGatewayErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DeleteDirectConnectGatewayErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DeleteDirectConnectGatewayErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteDirectConnectGatewayError {
    fn code(&self) -> Option<&str> {
        DeleteDirectConnectGatewayError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DeleteDirectConnectGatewayError {
    pub fn new(kind: DeleteDirectConnectGatewayErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteDirectConnectGatewayErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteDirectConnectGatewayErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DeleteDirectConnectGatewayErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DeleteDirectConnectGatewayErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DeleteDirectConnectGatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteDirectConnectGatewayErrorKind::DirectConnectServerException(inner) => Some(inner),
            DeleteDirectConnectGatewayErrorKind::DirectConnectClientException(inner) => Some(inner),
            DeleteDirectConnectGatewayErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteDirectConnectGatewayAssociation` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteDirectConnectGatewayAssociationError {
    pub kind: DeleteDirectConnectGatewayAssociationErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteDirectConnectGatewayAssociation` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteDirectConnectGatewayAssociationErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteDirectConnectGatewayAssociationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteDirectConnectGatewayAssociationErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DeleteDirectConnectGatewayAssociationErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DeleteDirectConnectGatewayAssociationErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteDirectConnectGatewayAssociationError {
    fn code(&self) -> Option<&str> {
        DeleteDirectConnectGatewayAssociationError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DeleteDirectConnectGatewayAssociationError {
    pub fn new(kind: DeleteDirectConnectGatewayAssociationErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteDirectConnectGatewayAssociationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteDirectConnectGatewayAssociationErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DeleteDirectConnectGatewayAssociationErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DeleteDirectConnectGatewayAssociationErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DeleteDirectConnectGatewayAssociationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteDirectConnectGatewayAssociationErrorKind::DirectConnectServerException(inner) => Some(inner),
            DeleteDirectConnectGatewayAssociationErrorKind::DirectConnectClientException(inner) => Some(inner),
            DeleteDirectConnectGatewayAssociationErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteDirectConnectGatewayAssociationProposal` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteDirectConnectGatewayAssociationProposalError {
    pub kind: DeleteDirectConnectGatewayAssociationProposalErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteDirectConnectGatewayAssociationProposal` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteDirectConnectGatewayAssociationProposalErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteDirectConnectGatewayAssociationProposalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteDirectConnectGatewayAssociationProposalErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DeleteDirectConnectGatewayAssociationProposalErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DeleteDirectConnectGatewayAssociationProposalErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteDirectConnectGatewayAssociationProposalError {
    fn code(&self) -> Option<&str> {
        DeleteDirectConnectGatewayAssociationProposalError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DeleteDirectConnectGatewayAssociationProposalError {
    pub fn new(kind: DeleteDirectConnectGatewayAssociationProposalErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteDirectConnectGatewayAssociationProposalErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteDirectConnectGatewayAssociationProposalErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DeleteDirectConnectGatewayAssociationProposalErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DeleteDirectConnectGatewayAssociationProposalErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DeleteDirectConnectGatewayAssociationProposalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteDirectConnectGatewayAssociationProposalErrorKind::DirectConnectServerException(inner) => Some(inner),
            DeleteDirectConnectGatewayAssociationProposalErrorKind::DirectConnectClientException(inner) => Some(inner),
            DeleteDirectConnectGatewayAssociationProposalErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteInterconnect` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteInterconnectError {
    pub kind: DeleteInterconnectErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteInterconnect` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteInterconnectErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteInterconnectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteInterconnectErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DeleteInterconnectErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DeleteInterconnectErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteInterconnectError {
    fn code(&self) -> Option<&str> {
        DeleteInterconnectError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DeleteInterconnectError {
    pub fn new(kind: DeleteInterconnectErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteInterconnectErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteInterconnectErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DeleteInterconnectErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DeleteInterconnectErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DeleteInterconnectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteInterconnectErrorKind::DirectConnectServerException(inner) => Some(inner),
            DeleteInterconnectErrorKind::DirectConnectClientException(inner) => Some(inner),
            DeleteInterconnectErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteLag` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteLagError {
    pub kind: DeleteLagErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteLag` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteLagErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteLagError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteLagErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DeleteLagErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DeleteLagErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteLagError {
    fn code(&self) -> Option<&str> {
        DeleteLagError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DeleteLagError {
    pub fn new(kind: DeleteLagErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteLagErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteLagErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DeleteLagErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DeleteLagErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DeleteLagError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteLagErrorKind::DirectConnectServerException(inner) => Some(inner),
            DeleteLagErrorKind::DirectConnectClientException(inner) => Some(inner),
            DeleteLagErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteVirtualInterfaceError {
    pub kind: DeleteVirtualInterfaceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteVirtualInterface` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteVirtualInterfaceErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteVirtualInterfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteVirtualInterfaceErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DeleteVirtualInterfaceErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DeleteVirtualInterfaceErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteVirtualInterfaceError {
    fn code(&self) -> Option<&str> {
        DeleteVirtualInterfaceError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DeleteVirtualInterfaceError {
    pub fn new(kind: DeleteVirtualInterfaceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteVirtualInterfaceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteVirtualInterfaceErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DeleteVirtualInterfaceErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DeleteVirtualInterfaceErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DeleteVirtualInterfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Some(inner),
            DeleteVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Some(inner),
            DeleteVirtualInterfaceErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeConnectionLoa` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeConnectionLoaError {
    pub kind: DescribeConnectionLoaErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeConnectionLoa` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeConnectionLoaErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeConnectionLoaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeConnectionLoaErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DescribeConnectionLoaErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DescribeConnectionLoaErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeConnectionLoaError {
    fn code(&self) -> Option<&str> {
        DescribeConnectionLoaError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeConnectionLoaError {
    pub fn new(kind: DescribeConnectionLoaErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeConnectionLoaErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeConnectionLoaErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DescribeConnectionLoaErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DescribeConnectionLoaErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DescribeConnectionLoaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeConnectionLoaErrorKind::DirectConnectServerException(inner) => Some(inner),
            DescribeConnectionLoaErrorKind::DirectConnectClientException(inner) => Some(inner),
            DescribeConnectionLoaErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeConnections` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeConnectionsError {
    pub kind: DescribeConnectionsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeConnections` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeConnectionsErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeConnectionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeConnectionsErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DescribeConnectionsErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DescribeConnectionsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeConnectionsError {
    fn code(&self) -> Option<&str> {
        DescribeConnectionsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeConnectionsError {
    pub fn new(kind: DescribeConnectionsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeConnectionsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeConnectionsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DescribeConnectionsErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DescribeConnectionsErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DescribeConnectionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeConnectionsErrorKind::DirectConnectServerException(inner) => Some(inner),
            DescribeConnectionsErrorKind::DirectConnectClientException(inner) => Some(inner),
            DescribeConnectionsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeConnectionsOnInterconnect` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeConnectionsOnInterconnectError {
    pub kind: DescribeConnectionsOnInterconnectErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeConnectionsOnInterconnect` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeConnectionsOnInterconnectErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeConnectionsOnInterconnectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeConnectionsOnInterconnectErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DescribeConnectionsOnInterconnectErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DescribeConnectionsOnInterconnectErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeConnectionsOnInterconnectError {
    fn code(&self) -> Option<&str> {
        DescribeConnectionsOnInterconnectError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeConnectionsOnInterconnectError {
    pub fn new(kind: DescribeConnectionsOnInterconnectErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeConnectionsOnInterconnectErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeConnectionsOnInterconnectErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DescribeConnectionsOnInterconnectErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DescribeConnectionsOnInterconnectErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DescribeConnectionsOnInterconnectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeConnectionsOnInterconnectErrorKind::DirectConnectServerException(inner) => Some(inner),
            DescribeConnectionsOnInterconnectErrorKind::DirectConnectClientException(inner) => Some(inner),
            DescribeConnectionsOnInterconnectErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeDirectConnectGatewayAssociationProposals` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeDirectConnectGatewayAssociationProposalsError {
    pub kind: DescribeDirectConnectGatewayAssociationProposalsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeDirectConnectGatewayAssociationProposals` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeDirectConnectGatewayAssociationProposalsErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeDirectConnectGatewayAssociationProposalsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeDirectConnectGatewayAssociationProposalsErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DescribeDirectConnectGatewayAssociationProposalsErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DescribeDirectConnectGatewayAssociationProposalsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeDirectConnectGatewayAssociationProposalsError {
    fn code(&self) -> Option<&str> {
        DescribeDirectConnectGatewayAssociationProposalsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeDirectConnectGatewayAssociationProposalsError {
    pub fn new(kind: DescribeDirectConnectGatewayAssociationProposalsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeDirectConnectGatewayAssociationProposalsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeDirectConnectGatewayAssociationProposalsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DescribeDirectConnectGatewayAssociationProposalsErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DescribeDirectConnectGatewayAssociationProposalsErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DescribeDirectConnectGatewayAssociationProposalsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeDirectConnectGatewayAssociationProposalsErrorKind::DirectConnectServerException(inner) => Some(inner),
            DescribeDirectConnectGatewayAssociationProposalsErrorKind::DirectConnectClientException(inner) => Some(inner),
            DescribeDirectConnectGatewayAssociationProposalsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeDirectConnectGatewayAssociations` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeDirectConnectGatewayAssociationsError {
    pub kind: DescribeDirectConnectGatewayAssociationsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeDirectConnectGatewayAssociations` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeDirectConnectGatewayAssociationsErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeDirectConnectGatewayAssociationsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeDirectConnectGatewayAssociationsErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DescribeDirectConnectGatewayAssociationsErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DescribeDirectConnectGatewayAssociationsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeDirectConnectGatewayAssociationsError {
    fn code(&self) -> Option<&str> {
        DescribeDirectConnectGatewayAssociationsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeDirectConnectGatewayAssociationsError {
    pub fn new(kind: DescribeDirectConnectGatewayAssociationsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeDirectConnectGatewayAssociationsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeDirectConnectGatewayAssociationsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DescribeDirectConnectGatewayAssociationsErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DescribeDirectConnectGatewayAssociationsErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DescribeDirectConnectGatewayAssociationsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeDirectConnectGatewayAssociationsErrorKind::DirectConnectServerException(inner) => Some(inner),
            DescribeDirectConnectGatewayAssociationsErrorKind::DirectConnectClientException(inner) => Some(inner),
            DescribeDirectConnectGatewayAssociationsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeDirectConnectGatewayAttachments` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeDirectConnectGatewayAttachmentsError {
    pub kind: DescribeDirectConnectGatewayAttachmentsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeDirectConnectGatewayAttachments` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeDirectConnectGatewayAttachmentsErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeDirectConnectGatewayAttachmentsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeDirectConnectGatewayAttachmentsErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DescribeDirectConnectGatewayAttachmentsErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DescribeDirectConnectGatewayAttachmentsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeDirectConnectGatewayAttachmentsError {
    fn code(&self) -> Option<&str> {
        DescribeDirectConnectGatewayAttachmentsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeDirectConnectGatewayAttachmentsError {
    pub fn new(kind: DescribeDirectConnectGatewayAttachmentsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeDirectConnectGatewayAttachmentsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeDirectConnectGatewayAttachmentsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DescribeDirectConnectGatewayAttachmentsErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DescribeDirectConnectGatewayAttachmentsErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DescribeDirectConnectGatewayAttachmentsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeDirectConnectGatewayAttachmentsErrorKind::DirectConnectServerException(inner) => Some(inner),
            DescribeDirectConnectGatewayAttachmentsErrorKind::DirectConnectClientException(inner) => Some(inner),
            DescribeDirectConnectGatewayAttachmentsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeDirectConnectGateways` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeDirectConnectGatewaysError {
    pub kind: DescribeDirectConnectGatewaysErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeDirectConnectGateways` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeDirectConnectGatewaysErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeDirectConnectGatewaysError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeDirectConnectGatewaysErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DescribeDirectConnectGatewaysErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DescribeDirectConnectGatewaysErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeDirectConnectGatewaysError {
    fn code(&self) -> Option<&str> {
        DescribeDirectConnectGatewaysError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeDirectConnectGatewaysError {
    pub fn new(kind: DescribeDirectConnectGatewaysErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeDirectConnectGatewaysErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeDirectConnectGatewaysErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DescribeDirectConnectGatewaysErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DescribeDirectConnectGatewaysErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DescribeDirectConnectGatewaysError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeDirectConnectGatewaysErrorKind::DirectConnectServerException(inner) => Some(inner),
            DescribeDirectConnectGatewaysErrorKind::DirectConnectClientException(inner) => Some(inner),
            DescribeDirectConnectGatewaysErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeHostedConnections` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeHostedConnectionsError {
    pub kind: DescribeHostedConnectionsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeHostedConnections` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeHostedConnectionsErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeHostedConnectionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeHostedConnectionsErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DescribeHostedConnectionsErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DescribeHostedConnectionsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeHostedConnectionsError {
    fn code(&self) -> Option<&str> {
        DescribeHostedConnectionsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeHostedConnectionsError {
    pub fn new(kind: DescribeHostedConnectionsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeHostedConnectionsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeHostedConnectionsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DescribeHostedConnectionsErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DescribeHostedConnectionsErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DescribeHostedConnectionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeHostedConnectionsErrorKind::DirectConnectServerException(inner) => Some(inner),
            DescribeHostedConnectionsErrorKind::DirectConnectClientException(inner) => Some(inner),
            DescribeHostedConnectionsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeInterconnectLoa` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeInterconnectLoaError {
    pub kind: DescribeInterconnectLoaErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeInterconnectLoa` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeInterconnectLoaErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeInterconnectLoaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeInterconnectLoaErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DescribeInterconnectLoaErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DescribeInterconnectLoaErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeInterconnectLoaError {
    fn code(&self) -> Option<&str> {
        DescribeInterconnectLoaError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeInterconnectLoaError {
    pub fn new(kind: DescribeInterconnectLoaErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeInterconnectLoaErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeInterconnectLoaErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DescribeInterconnectLoaErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DescribeInterconnectLoaErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DescribeInterconnectLoaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeInterconnectLoaErrorKind::DirectConnectServerException(inner) => Some(inner),
            DescribeInterconnectLoaErrorKind::DirectConnectClientException(inner) => Some(inner),
            DescribeInterconnectLoaErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeInterconnects` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeInterconnectsError {
    pub kind: DescribeInterconnectsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeInterconnects` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeInterconnectsErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeInterconnectsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeInterconnectsErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DescribeInterconnectsErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DescribeInterconnectsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeInterconnectsError {
    fn code(&self) -> Option<&str> {
        DescribeInterconnectsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeInterconnectsError {
    pub fn new(kind: DescribeInterconnectsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeInterconnectsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeInterconnectsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DescribeInterconnectsErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DescribeInterconnectsErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DescribeInterconnectsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeInterconnectsErrorKind::DirectConnectServerException(inner) => Some(inner),
            DescribeInterconnectsErrorKind::DirectConnectClientException(inner) => Some(inner),
            DescribeInterconnectsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeLags` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeLagsError {
    pub kind: DescribeLagsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeLags` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeLagsErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeLagsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeLagsErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DescribeLagsErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DescribeLagsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeLagsError {
    fn code(&self) -> Option<&str> {
        DescribeLagsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeLagsError {
    pub fn new(kind: DescribeLagsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeLagsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeLagsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DescribeLagsErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DescribeLagsErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DescribeLagsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeLagsErrorKind::DirectConnectServerException(inner) => Some(inner),
            DescribeLagsErrorKind::DirectConnectClientException(inner) => Some(inner),
            DescribeLagsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeLoa` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeLoaError {
    pub kind: DescribeLoaErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeLoa` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeLoaErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeLoaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeLoaErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DescribeLoaErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DescribeLoaErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeLoaError {
    fn code(&self) -> Option<&str> {
        DescribeLoaError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeLoaError {
    pub fn new(kind: DescribeLoaErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeLoaErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeLoaErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DescribeLoaErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DescribeLoaErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DescribeLoaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeLoaErrorKind::DirectConnectServerException(inner) => Some(inner),
            DescribeLoaErrorKind::DirectConnectClientException(inner) => Some(inner),
            DescribeLoaErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeLocations` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeLocationsError {
    pub kind: DescribeLocationsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeLocations` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeLocationsErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeLocationsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeLocationsErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DescribeLocationsErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DescribeLocationsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeLocationsError {
    fn code(&self) -> Option<&str> {
        DescribeLocationsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeLocationsError {
    pub fn new(kind: DescribeLocationsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeLocationsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeLocationsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DescribeLocationsErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DescribeLocationsErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DescribeLocationsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeLocationsErrorKind::DirectConnectServerException(inner) => Some(inner),
            DescribeLocationsErrorKind::DirectConnectClientException(inner) => Some(inner),
            DescribeLocationsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeTags` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeTagsError {
    pub kind: DescribeTagsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeTags` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeTagsErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeTagsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeTagsErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DescribeTagsErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DescribeTagsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeTagsError {
    fn code(&self) -> Option<&str> {
        DescribeTagsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeTagsError {
    pub fn new(kind: DescribeTagsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeTagsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeTagsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DescribeTagsErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DescribeTagsErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DescribeTagsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeTagsErrorKind::DirectConnectServerException(inner) => Some(inner),
            DescribeTagsErrorKind::DirectConnectClientException(inner) => Some(inner),
            DescribeTagsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeVirtualGateways` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeVirtualGatewaysError {
    pub kind: DescribeVirtualGatewaysErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeVirtualGateways` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeVirtualGatewaysErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeVirtualGatewaysError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeVirtualGatewaysErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DescribeVirtualGatewaysErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DescribeVirtualGatewaysErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeVirtualGatewaysError {
    fn code(&self) -> Option<&str> {
        DescribeVirtualGatewaysError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeVirtualGatewaysError {
    pub fn new(kind: DescribeVirtualGatewaysErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeVirtualGatewaysErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeVirtualGatewaysErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DescribeVirtualGatewaysErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DescribeVirtualGatewaysErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DescribeVirtualGatewaysError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeVirtualGatewaysErrorKind::DirectConnectServerException(inner) => Some(inner),
            DescribeVirtualGatewaysErrorKind::DirectConnectClientException(inner) => Some(inner),
            DescribeVirtualGatewaysErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeVirtualInterfaces` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeVirtualInterfacesError {
    pub kind: DescribeVirtualInterfacesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeVirtualInterfaces` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeVirtualInterfacesErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeVirtualInterfacesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeVirtualInterfacesErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DescribeVirtualInterfacesErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DescribeVirtualInterfacesErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeVirtualInterfacesError {
    fn code(&self) -> Option<&str> {
        DescribeVirtualInterfacesError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeVirtualInterfacesError {
    pub fn new(kind: DescribeVirtualInterfacesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeVirtualInterfacesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeVirtualInterfacesErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DescribeVirtualInterfacesErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DescribeVirtualInterfacesErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DescribeVirtualInterfacesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeVirtualInterfacesErrorKind::DirectConnectServerException(inner) => Some(inner),
            DescribeVirtualInterfacesErrorKind::DirectConnectClientException(inner) => Some(inner),
            DescribeVirtualInterfacesErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DisassociateConnectionFromLag` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DisassociateConnectionFromLagError {
    pub kind: DisassociateConnectionFromLagErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DisassociateConnectionFromLag` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DisassociateConnectionFromLagErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DisassociateConnectionFromLagError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DisassociateConnectionFromLagErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            DisassociateConnectionFromLagErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            DisassociateConnectionFromLagErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DisassociateConnectionFromLagError {
    fn code(&self) -> Option<&str> {
        DisassociateConnectionFromLagError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DisassociateConnectionFromLagError {
    pub fn new(kind: DisassociateConnectionFromLagErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DisassociateConnectionFromLagErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DisassociateConnectionFromLagErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, DisassociateConnectionFromLagErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, DisassociateConnectionFromLagErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for DisassociateConnectionFromLagError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DisassociateConnectionFromLagErrorKind::DirectConnectServerException(inner) => Some(inner),
            DisassociateConnectionFromLagErrorKind::DirectConnectClientException(inner) => Some(inner),
            DisassociateConnectionFromLagErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListVirtualInterfaceTestHistory` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListVirtualInterfaceTestHistoryError {
    pub kind: ListVirtualInterfaceTestHistoryErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListVirtualInterfaceTestHistory` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListVirtualInterfaceTestHistoryErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListVirtualInterfaceTestHistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListVirtualInterfaceTestHistoryErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            ListVirtualInterfaceTestHistoryErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            ListVirtualInterfaceTestHistoryErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListVirtualInterfaceTestHistoryError {
    fn code(&self) -> Option<&str> {
        ListVirtualInterfaceTestHistoryError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl ListVirtualInterfaceTestHistoryError {
    pub fn new(kind: ListVirtualInterfaceTestHistoryErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListVirtualInterfaceTestHistoryErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListVirtualInterfaceTestHistoryErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, ListVirtualInterfaceTestHistoryErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, ListVirtualInterfaceTestHistoryErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for ListVirtualInterfaceTestHistoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListVirtualInterfaceTestHistoryErrorKind::DirectConnectServerException(inner) => Some(inner),
            ListVirtualInterfaceTestHistoryErrorKind::DirectConnectClientException(inner) => Some(inner),
            ListVirtualInterfaceTestHistoryErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `StartBgpFailoverTest` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct StartBgpFailoverTestError {
    pub kind: StartBgpFailoverTestErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `StartBgpFailoverTest` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum StartBgpFailoverTestErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for StartBgpFailoverTestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            StartBgpFailoverTestErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            StartBgpFailoverTestErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            StartBgpFailoverTestErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for StartBgpFailoverTestError {
    fn code(&self) -> Option<&str> {
        StartBgpFailoverTestError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl StartBgpFailoverTestError {
    pub fn new(kind: StartBgpFailoverTestErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: StartBgpFailoverTestErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: StartBgpFailoverTestErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, StartBgpFailoverTestErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, StartBgpFailoverTestErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for StartBgpFailoverTestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            StartBgpFailoverTestErrorKind::DirectConnectServerException(inner) => Some(inner),
            StartBgpFailoverTestErrorKind::DirectConnectClientException(inner) => Some(inner),
            StartBgpFailoverTestErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `StopBgpFailoverTest` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct StopBgpFailoverTestError {
    pub kind: StopBgpFailoverTestErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `StopBgpFailoverTest` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum StopBgpFailoverTestErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for StopBgpFailoverTestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            StopBgpFailoverTestErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            StopBgpFailoverTestErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            StopBgpFailoverTestErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for StopBgpFailoverTestError {
    fn code(&self) -> Option<&str> {
        StopBgpFailoverTestError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl StopBgpFailoverTestError {
    pub fn new(kind: StopBgpFailoverTestErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: StopBgpFailoverTestErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: StopBgpFailoverTestErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, StopBgpFailoverTestErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, StopBgpFailoverTestErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for StopBgpFailoverTestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            StopBgpFailoverTestErrorKind::DirectConnectServerException(inner) => Some(inner),
            StopBgpFailoverTestErrorKind::DirectConnectClientException(inner) => Some(inner),
            StopBgpFailoverTestErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `TagResource` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct TagResourceError {
    pub kind: TagResourceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `TagResource` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum TagResourceErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    DuplicateTagKeysException(crate::error::DuplicateTagKeysException),
    TooManyTagsException(crate::error::TooManyTagsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for TagResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TagResourceErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            TagResourceErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            TagResourceErrorKind::DuplicateTagKeysException(inner) => inner.fmt(f),
            TagResourceErrorKind::TooManyTagsException(inner) => inner.fmt(f),
            TagResourceErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for TagResourceError {
    fn code(&self) -> Option<&str> {
        TagResourceError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl TagResourceError {
    pub fn new(kind: TagResourceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: TagResourceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: TagResourceErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, TagResourceErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, TagResourceErrorKind::DirectConnectClientException(_))
    }
    pub fn is_duplicate_tag_keys_exception(&self) -> bool {
        matches!(&self.kind, TagResourceErrorKind::DuplicateTagKeysException(_))
    }
    pub fn is_too_many_tags_exception(&self) -> bool {
        matches!(&self.kind, TagResourceErrorKind::TooManyTagsException(_))
    }
}
impl std::error::Error for TagResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            TagResourceErrorKind::DirectConnectServerException(inner) => Some(inner),
            TagResourceErrorKind::DirectConnectClientException(inner) => Some(inner),
            TagResourceErrorKind::DuplicateTagKeysException(inner) => Some(inner),
            TagResourceErrorKind::TooManyTagsException(inner) => Some(inner),
            TagResourceErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `UntagResource` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UntagResourceError {
    pub kind: UntagResourceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UntagResource` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UntagResourceErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UntagResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UntagResourceErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            UntagResourceErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            UntagResourceErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for UntagResourceError {
    fn code(&self) -> Option<&str> {
        UntagResourceError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl UntagResourceError {
    pub fn new(kind: UntagResourceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UntagResourceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UntagResourceErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, UntagResourceErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, UntagResourceErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for UntagResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UntagResourceErrorKind::DirectConnectServerException(inner) => Some(inner),
            UntagResourceErrorKind::DirectConnectClientException(inner) => Some(inner),
            UntagResourceErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateDirectConnectGatewayAssociation` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateDirectConnectGatewayAssociationError {
    pub kind: UpdateDirectConnectGatewayAssociationErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UpdateDirectConnectGatewayAssociation` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateDirectConnectGatewayAssociationErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateDirectConnectGatewayAssociationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateDirectConnectGatewayAssociationErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            UpdateDirectConnectGatewayAssociationErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            UpdateDirectConnectGatewayAssociationErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for UpdateDirectConnectGatewayAssociationError {
    fn code(&self) -> Option<&str> {
        UpdateDirectConnectGatewayAssociationError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl UpdateDirectConnectGatewayAssociationError {
    pub fn new(kind: UpdateDirectConnectGatewayAssociationErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateDirectConnectGatewayAssociationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateDirectConnectGatewayAssociationErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, UpdateDirectConnectGatewayAssociationErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, UpdateDirectConnectGatewayAssociationErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for UpdateDirectConnectGatewayAssociationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateDirectConnectGatewayAssociationErrorKind::DirectConnectServerException(inner) => Some(inner),
            UpdateDirectConnectGatewayAssociationErrorKind::DirectConnectClientException(inner) => Some(inner),
            UpdateDirectConnectGatewayAssociationErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateLag` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateLagError {
    pub kind: UpdateLagErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UpdateLag` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateLagErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateLagError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateLagErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            UpdateLagErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            UpdateLagErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for UpdateLagError {
    fn code(&self) -> Option<&str> {
        UpdateLagError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl UpdateLagError {
    pub fn new(kind: UpdateLagErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateLagErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateLagErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, UpdateLagErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, UpdateLagErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for UpdateLagError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateLagErrorKind::DirectConnectServerException(inner) => Some(inner),
            UpdateLagErrorKind::DirectConnectClientException(inner) => Some(inner),
            UpdateLagErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateVirtualInterfaceAttributes` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateVirtualInterfaceAttributesError {
    pub kind: UpdateVirtualInterfaceAttributesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UpdateVirtualInterfaceAttributes` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateVirtualInterfaceAttributesErrorKind {
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DirectConnectClientException(crate::error::DirectConnectClientException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateVirtualInterfaceAttributesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateVirtualInterfaceAttributesErrorKind::DirectConnectServerException(inner) => inner.fmt(f),
            UpdateVirtualInterfaceAttributesErrorKind::DirectConnectClientException(inner) => inner.fmt(f),
            UpdateVirtualInterfaceAttributesErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for UpdateVirtualInterfaceAttributesError {
    fn code(&self) -> Option<&str> {
        UpdateVirtualInterfaceAttributesError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl UpdateVirtualInterfaceAttributesError {
    pub fn new(kind: UpdateVirtualInterfaceAttributesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateVirtualInterfaceAttributesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateVirtualInterfaceAttributesErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(&self.kind, UpdateVirtualInterfaceAttributesErrorKind::DirectConnectServerException(_))
    }
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(&self.kind, UpdateVirtualInterfaceAttributesErrorKind::DirectConnectClientException(_))
    }
}
impl std::error::Error for UpdateVirtualInterfaceAttributesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateVirtualInterfaceAttributesErrorKind::DirectConnectServerException(inner) => Some(inner),
            UpdateVirtualInterfaceAttributesErrorKind::DirectConnectClientException(inner) => Some(inner),
            UpdateVirtualInterfaceAttributesErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// One or more parameters are not valid.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DirectConnectClientException {
    pub message: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DirectConnectClientException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DirectConnectClientException");
        formatter.field("message", &self.message);
        formatter.finish()
    }
}
impl DirectConnectClientException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for DirectConnectClientException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DirectConnectClientException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for DirectConnectClientException {}
/// See [`DirectConnectClientException`](crate::error::DirectConnectClientException)
pub mod direct_connect_client_exception {
    /// A builder for [`DirectConnectClientException`](crate::error::DirectConnectClientException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`DirectConnectClientException`](crate::error::DirectConnectClientException)
        pub fn build(self) -> crate::error::DirectConnectClientException {
            crate::error::DirectConnectClientException {
                message: self.message,
            }
        }
    }
}
impl DirectConnectClientException {
    /// Creates a new builder-style object to manufacture [`DirectConnectClientException`](crate::error::DirectConnectClientException)
    pub fn builder() -> crate::error::direct_connect_client_exception::Builder {
        crate::error::direct_connect_client_exception::Builder::default()
    }
}

/// A server-side error occurred.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DirectConnectServerException {
    pub message: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DirectConnectServerException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DirectConnectServerException");
        formatter.field("message", &self.message);
        formatter.finish()
    }
}
impl DirectConnectServerException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for DirectConnectServerException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DirectConnectServerException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for DirectConnectServerException {}
/// See [`DirectConnectServerException`](crate::error::DirectConnectServerException)
pub mod direct_connect_server_exception {
    /// A builder for [`DirectConnectServerException`](crate::error::DirectConnectServerException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`DirectConnectServerException`](crate::error::DirectConnectServerException)
        pub fn build(self) -> crate::error::DirectConnectServerException {
            crate::error::DirectConnectServerException {
                message: self.message,
            }
        }
    }
}
impl DirectConnectServerException {
    /// Creates a new builder-style object to manufacture [`DirectConnectServerException`](crate::error::DirectConnectServerException)
    pub fn builder() -> crate::error::direct_connect_server_exception::Builder {
        crate::error::direct_connect_server_exception::Builder::default()
    }
}

/// A tag key was specified more than once.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DuplicateTagKeysException {
    pub message: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DuplicateTagKeysException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DuplicateTagKeysException");
        formatter.field("message", &self.message);
        formatter.finish()
    }
}
impl DuplicateTagKeysException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for DuplicateTagKeysException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DuplicateTagKeysException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for DuplicateTagKeysException {}
/// See [`DuplicateTagKeysException`](crate::error::DuplicateTagKeysException)
pub mod duplicate_tag_keys_exception {
    /// A builder for [`DuplicateTagKeysException`](crate::error::DuplicateTagKeysException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`DuplicateTagKeysException`](crate::error::DuplicateTagKeysException)
        pub fn build(self) -> crate::error::DuplicateTagKeysException {
            crate::error::DuplicateTagKeysException {
                message: self.message,
            }
        }
    }
}
impl DuplicateTagKeysException {
    /// Creates a new builder-style object to manufacture [`DuplicateTagKeysException`](crate::error::DuplicateTagKeysException)
    pub fn builder() -> crate::error::duplicate_tag_keys_exception::Builder {
        crate::error::duplicate_tag_keys_exception::Builder::default()
    }
}

/// You have reached the limit on the number of tags that can be assigned.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct TooManyTagsException {
    pub message: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for TooManyTagsException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("TooManyTagsException");
        formatter.field("message", &self.message);
        formatter.finish()
    }
}
impl TooManyTagsException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for TooManyTagsException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TooManyTagsException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for TooManyTagsException {}
/// See [`TooManyTagsException`](crate::error::TooManyTagsException)
pub mod too_many_tags_exception {
    /// A builder for [`TooManyTagsException`](crate::error::TooManyTagsException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`TooManyTagsException`](crate::error::TooManyTagsException)
        pub fn build(self) -> crate::error::TooManyTagsException {
            crate::error::TooManyTagsException {
                message: self.message,
            }
        }
    }
}
impl TooManyTagsException {
    /// Creates a new builder-style object to manufacture [`TooManyTagsException`](crate::error::TooManyTagsException)
    pub fn builder() -> crate::error::too_many_tags_exception::Builder {
        crate::error::too_many_tags_exception::Builder::default()
    }
}
