/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// All possible error types for this service.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum Error {
    AccountLimitExceededException(crate::error::AccountLimitExceededException),
    InvalidInputException(crate::error::InvalidInputException),
    OAuthProviderException(crate::error::OAuthProviderException),
    ResourceAlreadyExistsException(crate::error::ResourceAlreadyExistsException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    /// An unhandled error occurred.
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::AccountLimitExceededException(inner) => inner.fmt(f),
            Error::InvalidInputException(inner) => inner.fmt(f),
            Error::OAuthProviderException(inner) => inner.fmt(f),
            Error::ResourceAlreadyExistsException(inner) => inner.fmt(f),
            Error::ResourceNotFoundException(inner) => inner.fmt(f),
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
            Some("AccountLimitExceededException") => Error::AccountLimitExceededException(
                crate::error::AccountLimitExceededException::builder()
                    .set_message(message)
                    .build(),
            ),
            Some("InvalidInputException") => Error::InvalidInputException(
                crate::error::InvalidInputException::builder()
                    .set_message(message)
                    .build(),
            ),
            Some("OAuthProviderException") => Error::OAuthProviderException(
                crate::error::OAuthProviderException::builder()
                    .set_message(message)
                    .build(),
            ),
            Some("ResourceAlreadyExistsException") => Error::ResourceAlreadyExistsException(
                crate::error::ResourceAlreadyExistsException::builder()
                    .set_message(message)
                    .build(),
            ),
            Some("ResourceNotFoundException") => Error::ResourceNotFoundException(
                crate::error::ResourceNotFoundException::builder()
                    .set_message(message)
                    .build(),
            ),
            _ => Error::Unhandled(unhandled),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::BatchDeleteBuildsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::BatchDeleteBuildsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::BatchDeleteBuildsErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::BatchDeleteBuildsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::BatchGetBuildsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::BatchGetBuildsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::BatchGetBuildsErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::BatchGetBuildsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::BatchGetProjectsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::BatchGetProjectsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::BatchGetProjectsErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::BatchGetProjectsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::BatchGetReportGroupsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::BatchGetReportGroupsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::BatchGetReportGroupsErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::BatchGetReportGroupsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::BatchGetReportsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::BatchGetReportsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::BatchGetReportsErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::BatchGetReportsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateProjectError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::CreateProjectError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateProjectErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::CreateProjectErrorKind::ResourceAlreadyExistsException(inner) => Error::ResourceAlreadyExistsException(inner),
                crate::error::CreateProjectErrorKind::AccountLimitExceededException(inner) => Error::AccountLimitExceededException(inner),
                crate::error::CreateProjectErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateReportGroupError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::CreateReportGroupError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateReportGroupErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::CreateReportGroupErrorKind::ResourceAlreadyExistsException(inner) => Error::ResourceAlreadyExistsException(inner),
                crate::error::CreateReportGroupErrorKind::AccountLimitExceededException(inner) => Error::AccountLimitExceededException(inner),
                crate::error::CreateReportGroupErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateWebhookError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::CreateWebhookError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateWebhookErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::CreateWebhookErrorKind::OAuthProviderException(inner) => Error::OAuthProviderException(inner),
                crate::error::CreateWebhookErrorKind::ResourceAlreadyExistsException(inner) => Error::ResourceAlreadyExistsException(inner),
                crate::error::CreateWebhookErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::CreateWebhookErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteProjectError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteProjectError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteProjectErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::DeleteProjectErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteReportError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteReportError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteReportErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::DeleteReportErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteReportGroupError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteReportGroupError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteReportGroupErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::DeleteReportGroupErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteResourcePolicyError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteResourcePolicyError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteResourcePolicyErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::DeleteResourcePolicyErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteSourceCredentialsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteSourceCredentialsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteSourceCredentialsErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::DeleteSourceCredentialsErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::DeleteSourceCredentialsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteWebhookError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteWebhookError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteWebhookErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::DeleteWebhookErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::DeleteWebhookErrorKind::OAuthProviderException(inner) => Error::OAuthProviderException(inner),
                crate::error::DeleteWebhookErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeTestCasesError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeTestCasesError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeTestCasesErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::DescribeTestCasesErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::DescribeTestCasesErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::GetResourcePolicyError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::GetResourcePolicyError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::GetResourcePolicyErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::GetResourcePolicyErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::GetResourcePolicyErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ImportSourceCredentialsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ImportSourceCredentialsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ImportSourceCredentialsErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::ImportSourceCredentialsErrorKind::AccountLimitExceededException(inner) => Error::AccountLimitExceededException(inner),
                crate::error::ImportSourceCredentialsErrorKind::ResourceAlreadyExistsException(inner) => Error::ResourceAlreadyExistsException(inner),
                crate::error::ImportSourceCredentialsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::InvalidateProjectCacheError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::InvalidateProjectCacheError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::InvalidateProjectCacheErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::InvalidateProjectCacheErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::InvalidateProjectCacheErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListBuildsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ListBuildsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListBuildsErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::ListBuildsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListBuildsForProjectError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ListBuildsForProjectError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListBuildsForProjectErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::ListBuildsForProjectErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::ListBuildsForProjectErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListCuratedEnvironmentImagesError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ListCuratedEnvironmentImagesError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListCuratedEnvironmentImagesErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListProjectsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ListProjectsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListProjectsErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::ListProjectsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListReportGroupsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ListReportGroupsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListReportGroupsErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::ListReportGroupsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListReportsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ListReportsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListReportsErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::ListReportsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListReportsForReportGroupError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ListReportsForReportGroupError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListReportsForReportGroupErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::ListReportsForReportGroupErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::ListReportsForReportGroupErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListSharedProjectsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ListSharedProjectsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListSharedProjectsErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::ListSharedProjectsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListSharedReportGroupsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ListSharedReportGroupsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListSharedReportGroupsErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::ListSharedReportGroupsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListSourceCredentialsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ListSourceCredentialsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListSourceCredentialsErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::PutResourcePolicyError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::PutResourcePolicyError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::PutResourcePolicyErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::PutResourcePolicyErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::PutResourcePolicyErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::StartBuildError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::StartBuildError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::StartBuildErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::StartBuildErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::StartBuildErrorKind::AccountLimitExceededException(inner) => Error::AccountLimitExceededException(inner),
                crate::error::StartBuildErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::StopBuildError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::StopBuildError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::StopBuildErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::StopBuildErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::StopBuildErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::UpdateProjectError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::UpdateProjectError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UpdateProjectErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::UpdateProjectErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::UpdateProjectErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::UpdateReportGroupError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::UpdateReportGroupError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UpdateReportGroupErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::UpdateReportGroupErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::UpdateReportGroupErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::UpdateWebhookError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::UpdateWebhookError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UpdateWebhookErrorKind::InvalidInputException(inner) => Error::InvalidInputException(inner),
                crate::error::UpdateWebhookErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::UpdateWebhookErrorKind::OAuthProviderException(inner) => Error::OAuthProviderException(inner),
                crate::error::UpdateWebhookErrorKind::Unhandled(inner) => Error::from_code(&err.meta, inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl std::error::Error for Error {}
