/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// All possible error types for this service.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum Error {
    DirectConnectClientException(crate::error::DirectConnectClientException),
    DirectConnectServerException(crate::error::DirectConnectServerException),
    DuplicateTagKeysException(crate::error::DuplicateTagKeysException),
    TooManyTagsException(crate::error::TooManyTagsException),
    /// An unhandled error occurred.
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DirectConnectClientException(inner) => inner.fmt(f),
            Error::DirectConnectServerException(inner) => inner.fmt(f),
            Error::DuplicateTagKeysException(inner) => inner.fmt(f),
            Error::TooManyTagsException(inner) => inner.fmt(f),
            Error::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl Error {
    /// Types an error whose code names one of this service's exceptions, even when the
    /// operation that returned it does not list that exception.
    fn from_code(
        meta: &smithy_types::Error,
        unhandled: Box<dyn std::error::Error + Send + Sync + 'static>,
    ) -> Self {
        let message = meta.message().map(|message| message.to_owned());
        match meta.code() {
            Some("DirectConnectClientException") => Error::DirectConnectClientException(
                crate::error::DirectConnectClientException::builder()
                    .set_message(message)
                    .build(),
            ),
            Some("DirectConnectServerException") => Error::DirectConnectServerException(
                crate::error::DirectConnectServerException::builder()
                    .set_message(message)
                    .build(),
            ),
            Some("DuplicateTagKeysException") => Error::DuplicateTagKeysException(
                crate::error::DuplicateTagKeysException::builder()
                    .set_message(message)
                    .build(),
            ),
            Some("TooManyTagsException") => Error::TooManyTagsException(
                crate::error::TooManyTagsException::builder()
                    .set_message(message)
                    .build(),
            ),
            _ => Error::Unhandled(unhandled),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::AcceptDirectConnectGatewayAssociationProposalError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::AcceptDirectConnectGatewayAssociationProposalError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::AcceptDirectConnectGatewayAssociationProposalErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::AcceptDirectConnectGatewayAssociationProposalErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::AcceptDirectConnectGatewayAssociationProposalErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::AllocateConnectionOnInterconnectError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::AllocateConnectionOnInterconnectError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::AllocateConnectionOnInterconnectErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::AllocateConnectionOnInterconnectErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::AllocateConnectionOnInterconnectErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::AllocateHostedConnectionError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::AllocateHostedConnectionError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::AllocateHostedConnectionErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::AllocateHostedConnectionErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::AllocateHostedConnectionErrorKind::DuplicateTagKeysException(inner) => Error::DuplicateTagKeysException(inner),
                crate::error::AllocateHostedConnectionErrorKind::TooManyTagsException(inner) => Error::TooManyTagsException(inner),
                crate::error::AllocateHostedConnectionErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::AllocatePrivateVirtualInterfaceError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::AllocatePrivateVirtualInterfaceError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::AllocatePrivateVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::AllocatePrivateVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::AllocatePrivateVirtualInterfaceErrorKind::DuplicateTagKeysException(inner) => Error::DuplicateTagKeysException(inner),
                crate::error::AllocatePrivateVirtualInterfaceErrorKind::TooManyTagsException(inner) => Error::TooManyTagsException(inner),
                crate::error::AllocatePrivateVirtualInterfaceErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::AllocatePublicVirtualInterfaceError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::AllocatePublicVirtualInterfaceError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::AllocatePublicVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::AllocatePublicVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::AllocatePublicVirtualInterfaceErrorKind::DuplicateTagKeysException(inner) => Error::DuplicateTagKeysException(inner),
                crate::error::AllocatePublicVirtualInterfaceErrorKind::TooManyTagsException(inner) => Error::TooManyTagsException(inner),
                crate::error::AllocatePublicVirtualInterfaceErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::AllocateTransitVirtualInterfaceError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::AllocateTransitVirtualInterfaceError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::AllocateTransitVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::AllocateTransitVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::AllocateTransitVirtualInterfaceErrorKind::DuplicateTagKeysException(inner) => Error::DuplicateTagKeysException(inner),
                crate::error::AllocateTransitVirtualInterfaceErrorKind::TooManyTagsException(inner) => Error::TooManyTagsException(inner),
                crate::error::AllocateTransitVirtualInterfaceErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::AssociateConnectionWithLagError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::AssociateConnectionWithLagError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::AssociateConnectionWithLagErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::AssociateConnectionWithLagErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::AssociateConnectionWithLagErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::AssociateHostedConnectionError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::AssociateHostedConnectionError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::AssociateHostedConnectionErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::AssociateHostedConnectionErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::AssociateHostedConnectionErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::AssociateVirtualInterfaceError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::AssociateVirtualInterfaceError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::AssociateVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::AssociateVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::AssociateVirtualInterfaceErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ConfirmConnectionError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ConfirmConnectionError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ConfirmConnectionErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::ConfirmConnectionErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::ConfirmConnectionErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ConfirmPrivateVirtualInterfaceError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ConfirmPrivateVirtualInterfaceError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ConfirmPrivateVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::ConfirmPrivateVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::ConfirmPrivateVirtualInterfaceErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ConfirmPublicVirtualInterfaceError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ConfirmPublicVirtualInterfaceError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ConfirmPublicVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::ConfirmPublicVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::ConfirmPublicVirtualInterfaceErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ConfirmTransitVirtualInterfaceError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ConfirmTransitVirtualInterfaceError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ConfirmTransitVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::ConfirmTransitVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::ConfirmTransitVirtualInterfaceErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateBgpPeerError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::CreateBgpPeerError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateBgpPeerErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::CreateBgpPeerErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::CreateBgpPeerErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateConnectionError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::CreateConnectionError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateConnectionErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::CreateConnectionErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::CreateConnectionErrorKind::DuplicateTagKeysException(inner) => Error::DuplicateTagKeysException(inner),
                crate::error::CreateConnectionErrorKind::TooManyTagsException(inner) => Error::TooManyTagsException(inner),
                crate::error::CreateConnectionErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateDirectConnectGatewayError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::CreateDirectConnectGatewayError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateDirectConnectGatewayErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::CreateDirectConnectGatewayErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::CreateDirectConnectGatewayErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateDirectConnectGatewayAssociationError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::CreateDirectConnectGatewayAssociationError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateDirectConnectGatewayAssociationErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::CreateDirectConnectGatewayAssociationErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::CreateDirectConnectGatewayAssociationErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateDirectConnectGatewayAssociationProposalError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::CreateDirectConnectGatewayAssociationProposalError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateDirectConnectGatewayAssociationProposalErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::CreateDirectConnectGatewayAssociationProposalErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::CreateDirectConnectGatewayAssociationProposalErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateInterconnectError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::CreateInterconnectError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateInterconnectErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::CreateInterconnectErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::CreateInterconnectErrorKind::DuplicateTagKeysException(inner) => Error::DuplicateTagKeysException(inner),
                crate::error::CreateInterconnectErrorKind::TooManyTagsException(inner) => Error::TooManyTagsException(inner),
                crate::error::CreateInterconnectErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateLagError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::CreateLagError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateLagErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::CreateLagErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::CreateLagErrorKind::DuplicateTagKeysException(inner) => Error::DuplicateTagKeysException(inner),
                crate::error::CreateLagErrorKind::TooManyTagsException(inner) => Error::TooManyTagsException(inner),
                crate::error::CreateLagErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreatePrivateVirtualInterfaceError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::CreatePrivateVirtualInterfaceError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreatePrivateVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::CreatePrivateVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::CreatePrivateVirtualInterfaceErrorKind::DuplicateTagKeysException(inner) => Error::DuplicateTagKeysException(inner),
                crate::error::CreatePrivateVirtualInterfaceErrorKind::TooManyTagsException(inner) => Error::TooManyTagsException(inner),
                crate::error::CreatePrivateVirtualInterfaceErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreatePublicVirtualInterfaceError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::CreatePublicVirtualInterfaceError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreatePublicVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::CreatePublicVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::CreatePublicVirtualInterfaceErrorKind::DuplicateTagKeysException(inner) => Error::DuplicateTagKeysException(inner),
                crate::error::CreatePublicVirtualInterfaceErrorKind::TooManyTagsException(inner) => Error::TooManyTagsException(inner),
                crate::error::CreatePublicVirtualInterfaceErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateTransitVirtualInterfaceError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::CreateTransitVirtualInterfaceError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateTransitVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::CreateTransitVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::CreateTransitVirtualInterfaceErrorKind::DuplicateTagKeysException(inner) => Error::DuplicateTagKeysException(inner),
                crate::error::CreateTransitVirtualInterfaceErrorKind::TooManyTagsException(inner) => Error::TooManyTagsException(inner),
                crate::error::CreateTransitVirtualInterfaceErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteBgpPeerError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteBgpPeerError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteBgpPeerErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DeleteBgpPeerErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DeleteBgpPeerErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteConnectionError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteConnectionError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteConnectionErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DeleteConnectionErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DeleteConnectionErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteDirectConnectGatewayError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteDirectConnectGatewayError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteDirectConnectGatewayErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DeleteDirectConnectGatewayErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DeleteDirectConnectGatewayErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteDirectConnectGatewayAssociationError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteDirectConnectGatewayAssociationError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteDirectConnectGatewayAssociationErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DeleteDirectConnectGatewayAssociationErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DeleteDirectConnectGatewayAssociationErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteDirectConnectGatewayAssociationProposalError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteDirectConnectGatewayAssociationProposalError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteDirectConnectGatewayAssociationProposalErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DeleteDirectConnectGatewayAssociationProposalErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DeleteDirectConnectGatewayAssociationProposalErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteInterconnectError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteInterconnectError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteInterconnectErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DeleteInterconnectErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DeleteInterconnectErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteLagError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteLagError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteLagErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DeleteLagErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DeleteLagErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteVirtualInterfaceError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteVirtualInterfaceError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteVirtualInterfaceErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DeleteVirtualInterfaceErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DeleteVirtualInterfaceErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeConnectionLoaError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeConnectionLoaError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeConnectionLoaErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DescribeConnectionLoaErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DescribeConnectionLoaErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeConnectionsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeConnectionsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeConnectionsErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DescribeConnectionsErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DescribeConnectionsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeConnectionsOnInterconnectError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeConnectionsOnInterconnectError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeConnectionsOnInterconnectErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DescribeConnectionsOnInterconnectErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DescribeConnectionsOnInterconnectErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeDirectConnectGatewayAssociationProposalsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeDirectConnectGatewayAssociationProposalsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeDirectConnectGatewayAssociationProposalsErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DescribeDirectConnectGatewayAssociationProposalsErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DescribeDirectConnectGatewayAssociationProposalsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeDirectConnectGatewayAssociationsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeDirectConnectGatewayAssociationsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeDirectConnectGatewayAssociationsErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DescribeDirectConnectGatewayAssociationsErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DescribeDirectConnectGatewayAssociationsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeDirectConnectGatewayAttachmentsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeDirectConnectGatewayAttachmentsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeDirectConnectGatewayAttachmentsErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DescribeDirectConnectGatewayAttachmentsErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DescribeDirectConnectGatewayAttachmentsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeDirectConnectGatewaysError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeDirectConnectGatewaysError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeDirectConnectGatewaysErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DescribeDirectConnectGatewaysErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DescribeDirectConnectGatewaysErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeHostedConnectionsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeHostedConnectionsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeHostedConnectionsErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DescribeHostedConnectionsErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DescribeHostedConnectionsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeInterconnectLoaError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeInterconnectLoaError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeInterconnectLoaErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DescribeInterconnectLoaErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DescribeInterconnectLoaErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeInterconnectsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeInterconnectsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeInterconnectsErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DescribeInterconnectsErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DescribeInterconnectsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeLagsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeLagsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeLagsErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DescribeLagsErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DescribeLagsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeLoaError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeLoaError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeLoaErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DescribeLoaErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DescribeLoaErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeLocationsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeLocationsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeLocationsErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DescribeLocationsErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DescribeLocationsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeTagsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeTagsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeTagsErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DescribeTagsErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DescribeTagsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeVirtualGatewaysError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeVirtualGatewaysError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeVirtualGatewaysErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DescribeVirtualGatewaysErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DescribeVirtualGatewaysErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeVirtualInterfacesError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeVirtualInterfacesError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeVirtualInterfacesErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DescribeVirtualInterfacesErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DescribeVirtualInterfacesErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DisassociateConnectionFromLagError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DisassociateConnectionFromLagError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DisassociateConnectionFromLagErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::DisassociateConnectionFromLagErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::DisassociateConnectionFromLagErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListVirtualInterfaceTestHistoryError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ListVirtualInterfaceTestHistoryError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListVirtualInterfaceTestHistoryErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::ListVirtualInterfaceTestHistoryErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::ListVirtualInterfaceTestHistoryErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::StartBgpFailoverTestError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::StartBgpFailoverTestError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::StartBgpFailoverTestErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::StartBgpFailoverTestErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::StartBgpFailoverTestErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::StopBgpFailoverTestError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::StopBgpFailoverTestError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::StopBgpFailoverTestErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::StopBgpFailoverTestErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::StopBgpFailoverTestErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::TagResourceError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::TagResourceError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::TagResourceErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::TagResourceErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::TagResourceErrorKind::DuplicateTagKeysException(inner) => Error::DuplicateTagKeysException(inner),
                crate::error::TagResourceErrorKind::TooManyTagsException(inner) => Error::TooManyTagsException(inner),
                crate::error::TagResourceErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::UntagResourceError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::UntagResourceError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UntagResourceErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::UntagResourceErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::UntagResourceErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::UpdateDirectConnectGatewayAssociationError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::UpdateDirectConnectGatewayAssociationError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UpdateDirectConnectGatewayAssociationErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::UpdateDirectConnectGatewayAssociationErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::UpdateDirectConnectGatewayAssociationErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::UpdateLagError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::UpdateLagError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UpdateLagErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::UpdateLagErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::UpdateLagErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::UpdateVirtualInterfaceAttributesError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::UpdateVirtualInterfaceAttributesError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UpdateVirtualInterfaceAttributesErrorKind::DirectConnectServerException(inner) => Error::DirectConnectServerException(inner),
                crate::error::UpdateVirtualInterfaceAttributesErrorKind::DirectConnectClientException(inner) => Error::DirectConnectClientException(inner),
                crate::error::UpdateVirtualInterfaceAttributesErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl std::error::Error for Error {}
