/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Error type for the `BatchDeleteBuilds` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct BatchDeleteBuildsError {
    pub kind: BatchDeleteBuildsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `BatchDeleteBuilds` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum BatchDeleteBuildsErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for BatchDeleteBuildsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            BatchDeleteBuildsErrorKind::InvalidInputException(inner) => inner.fmt(f),
            BatchDeleteBuildsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for BatchDeleteBuildsError {
    fn code(&self) -> Option<&str> {
        BatchDeleteBuildsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl BatchDeleteBuildsError {
    pub fn new(kind: BatchDeleteBuildsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: BatchDeleteBuildsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: BatchDeleteBuildsErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, BatchDeleteBuildsErrorKind::InvalidInputException(_))
    }
}
impl std::error::Error for BatchDeleteBuildsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            BatchDeleteBuildsErrorKind::InvalidInputException(inner) => Some(inner),
            BatchDeleteBuildsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `BatchGetBuilds` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct BatchGetBuildsError {
    pub kind: BatchGetBuildsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `BatchGetBuilds` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum BatchGetBuildsErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for BatchGetBuildsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            BatchGetBuildsErrorKind::InvalidInputException(inner) => inner.fmt(f),
            BatchGetBuildsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for BatchGetBuildsError {
    fn code(&self) -> Option<&str> {
        BatchGetBuildsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl BatchGetBuildsError {
    pub fn new(kind: BatchGetBuildsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: BatchGetBuildsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: BatchGetBuildsErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, BatchGetBuildsErrorKind::InvalidInputException(_))
    }
}
impl std::error::Error for BatchGetBuildsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            BatchGetBuildsErrorKind::InvalidInputException(inner) => Some(inner),
            BatchGetBuildsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `BatchGetProjects` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct BatchGetProjectsError {
    pub kind: BatchGetProjectsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `BatchGetProjects` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum BatchGetProjectsErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for BatchGetProjectsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            BatchGetProjectsErrorKind::InvalidInputException(inner) => inner.fmt(f),
            BatchGetProjectsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for BatchGetProjectsError {
    fn code(&self) -> Option<&str> {
        BatchGetProjectsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl BatchGetProjectsError {
    pub fn new(kind: BatchGetProjectsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: BatchGetProjectsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: BatchGetProjectsErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, BatchGetProjectsErrorKind::InvalidInputException(_))
    }
}
impl std::error::Error for BatchGetProjectsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            BatchGetProjectsErrorKind::InvalidInputException(inner) => Some(inner),
            BatchGetProjectsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `BatchGetReportGroups` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct BatchGetReportGroupsError {
    pub kind: BatchGetReportGroupsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `BatchGetReportGroups` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum BatchGetReportGroupsErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for BatchGetReportGroupsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            BatchGetReportGroupsErrorKind::InvalidInputException(inner) => inner.fmt(f),
            BatchGetReportGroupsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for BatchGetReportGroupsError {
    fn code(&self) -> Option<&str> {
        BatchGetReportGroupsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl BatchGetReportGroupsError {
    pub fn new(kind: BatchGetReportGroupsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: BatchGetReportGroupsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: BatchGetReportGroupsErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, BatchGetReportGroupsErrorKind::InvalidInputException(_))
    }
}
impl std::error::Error for BatchGetReportGroupsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            BatchGetReportGroupsErrorKind::InvalidInputException(inner) => Some(inner),
            BatchGetReportGroupsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `BatchGetReports` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct BatchGetReportsError {
    pub kind: BatchGetReportsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `BatchGetReports` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum BatchGetReportsErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for BatchGetReportsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            BatchGetReportsErrorKind::InvalidInputException(inner) => inner.fmt(f),
            BatchGetReportsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for BatchGetReportsError {
    fn code(&self) -> Option<&str> {
        BatchGetReportsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl BatchGetReportsError {
    pub fn new(kind: BatchGetReportsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: BatchGetReportsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: BatchGetReportsErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, BatchGetReportsErrorKind::InvalidInputException(_))
    }
}
impl std::error::Error for BatchGetReportsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            BatchGetReportsErrorKind::InvalidInputException(inner) => Some(inner),
            BatchGetReportsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreateProject` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateProjectError {
    pub kind: CreateProjectErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateProject` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateProjectErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    ResourceAlreadyExistsException(crate::error::ResourceAlreadyExistsException),
    AccountLimitExceededException(crate::error::AccountLimitExceededException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateProjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateProjectErrorKind::InvalidInputException(inner) => inner.fmt(f),
            CreateProjectErrorKind::ResourceAlreadyExistsException(inner) => inner.fmt(f),
            CreateProjectErrorKind::AccountLimitExceededException(inner) => inner.fmt(f),
            CreateProjectErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for CreateProjectError {
    fn code(&self) -> Option<&str> {
        CreateProjectError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl CreateProjectError {
    pub fn new(kind: CreateProjectErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateProjectErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateProjectErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, CreateProjectErrorKind::InvalidInputException(_))
    }
    pub fn is_resource_already_exists_exception(&self) -> bool {
        matches!(&self.kind, CreateProjectErrorKind::ResourceAlreadyExistsException(_))
    }
    pub fn is_account_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, CreateProjectErrorKind::AccountLimitExceededException(_))
    }
}
impl std::error::Error for CreateProjectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateProjectErrorKind::InvalidInputException(inner) => Some(inner),
            CreateProjectErrorKind::ResourceAlreadyExistsException(inner) => Some(inner),
            CreateProjectErrorKind::AccountLimitExceededException(inner) => Some(inner),
            CreateProjectErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreateReportGroup` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateReportGroupError {
    pub kind: CreateReportGroupErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateReportGroup` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateReportGroupErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    ResourceAlreadyExistsException(crate::error::ResourceAlreadyExistsException),
    AccountLimitExceededException(crate::error::AccountLimitExceededException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateReportGroupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateReportGroupErrorKind::InvalidInputException(inner) => inner.fmt(f),
            CreateReportGroupErrorKind::ResourceAlreadyExistsException(inner) => inner.fmt(f),
            CreateReportGroupErrorKind::AccountLimitExceededException(inner) => inner.fmt(f),
            CreateReportGroupErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for CreateReportGroupError {
    fn code(&self) -> Option<&str> {
        CreateReportGroupError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl CreateReportGroupError {
    pub fn new(kind: CreateReportGroupErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateReportGroupErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateReportGroupErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, CreateReportGroupErrorKind::InvalidInputException(_))
    }
    pub fn is_resource_already_exists_exception(&self) -> bool {
        matches!(&self.kind, CreateReportGroupErrorKind::ResourceAlreadyExistsException(_))
    }
    pub fn is_account_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, CreateReportGroupErrorKind::AccountLimitExceededException(_))
    }
}
impl std::error::Error for CreateReportGroupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateReportGroupErrorKind::InvalidInputException(inner) => Some(inner),
            CreateReportGroupErrorKind::ResourceAlreadyExistsException(inner) => Some(inner),
            CreateReportGroupErrorKind::AccountLimitExceededException(inner) => Some(inner),
            CreateReportGroupErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreateWebhook` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateWebhookError {
    pub kind: CreateWebhookErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateWebhook` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateWebhookErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    OAuthProviderException(crate::error::OAuthProviderException),
    ResourceAlreadyExistsException(crate::error::ResourceAlreadyExistsException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateWebhookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateWebhookErrorKind::InvalidInputException(inner) => inner.fmt(f),
            CreateWebhookErrorKind::OAuthProviderException(inner) => inner.fmt(f),
            CreateWebhookErrorKind::ResourceAlreadyExistsException(inner) => inner.fmt(f),
            CreateWebhookErrorKind::ResourceNotFoundException(inner) => inner.fmt(f),
            CreateWebhookErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for CreateWebhookError {
    fn code(&self) -> Option<&str> {
        CreateWebhookError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl CreateWebhookError {
    pub fn new(kind: CreateWebhookErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateWebhookErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateWebhookErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, CreateWebhookErrorKind::InvalidInputException(_))
    }
    pub fn is_o_auth_provider_exception(&self) -> bool {
        matches!(&self.kind, CreateWebhookErrorKind::OAuthProviderException(_))
    }
    pub fn is_resource_already_exists_exception(&self) -> bool {
        matches!(&self.kind, CreateWebhookErrorKind::ResourceAlreadyExistsException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, CreateWebhookErrorKind::ResourceNotFoundException(_))
    }
}
impl std::error::Error for CreateWebhookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateWebhookErrorKind::InvalidInputException(inner) => Some(inner),
            CreateWebhookErrorKind::OAuthProviderException(inner) => Some(inner),
            CreateWebhookErrorKind::ResourceAlreadyExistsException(inner) => Some(inner),
            CreateWebhookErrorKind::ResourceNotFoundException(inner) => Some(inner),
            CreateWebhookErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteProject` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteProjectError {
    pub kind: DeleteProjectErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteProject` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteProjectErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteProjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteProjectErrorKind::InvalidInputException(inner) => inner.fmt(f),
            DeleteProjectErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteProjectError {
    fn code(&self) -> Option<&str> {
        DeleteProjectError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DeleteProjectError {
    pub fn new(kind: DeleteProjectErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteProjectErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteProjectErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, DeleteProjectErrorKind::InvalidInputException(_))
    }
}
impl std::error::Error for DeleteProjectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteProjectErrorKind::InvalidInputException(inner) => Some(inner),
            DeleteProjectErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteReport` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteReportError {
    pub kind: DeleteReportErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteReport` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteReportErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteReportErrorKind::InvalidInputException(inner) => inner.fmt(f),
            DeleteReportErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteReportError {
    fn code(&self) -> Option<&str> {
        DeleteReportError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DeleteReportError {
    pub fn new(kind: DeleteReportErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteReportErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteReportErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, DeleteReportErrorKind::InvalidInputException(_))
    }
}
impl std::error::Error for DeleteReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteReportErrorKind::InvalidInputException(inner) => Some(inner),
            DeleteReportErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteReportGroup` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteReportGroupError {
    pub kind: DeleteReportGroupErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteReportGroup` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteReportGroupErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteReportGroupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteReportGroupErrorKind::InvalidInputException(inner) => inner.fmt(f),
            DeleteReportGroupErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteReportGroupError {
    fn code(&self) -> Option<&str> {
        DeleteReportGroupError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DeleteReportGroupError {
    pub fn new(kind: DeleteReportGroupErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteReportGroupErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteReportGroupErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, DeleteReportGroupErrorKind::InvalidInputException(_))
    }
}
impl std::error::Error for DeleteReportGroupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteReportGroupErrorKind::InvalidInputException(inner) => Some(inner),
            DeleteReportGroupErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteResourcePolicy` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteResourcePolicyError {
    pub kind: DeleteResourcePolicyErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteResourcePolicy` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteResourcePolicyErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteResourcePolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteResourcePolicyErrorKind::InvalidInputException(inner) => inner.fmt(f),
            DeleteResourcePolicyErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteResourcePolicyError {
    fn code(&self) -> Option<&str> {
        DeleteResourcePolicyError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DeleteResourcePolicyError {
    pub fn new(kind: DeleteResourcePolicyErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteResourcePolicyErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteResourcePolicyErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, DeleteResourcePolicyErrorKind::InvalidInputException(_))
    }
}
impl std::error::Error for DeleteResourcePolicyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteResourcePolicyErrorKind::InvalidInputException(inner) => Some(inner),
            DeleteResourcePolicyErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteSourceCredentials` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteSourceCredentialsError {
    pub kind: DeleteSourceCredentialsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteSourceCredentials` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteSourceCredentialsErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteSourceCredentialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteSourceCredentialsErrorKind::InvalidInputException(inner) => inner.fmt(f),
            DeleteSourceCredentialsErrorKind::ResourceNotFoundException(inner) => inner.fmt(f),
            DeleteSourceCredentialsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteSourceCredentialsError {
    fn code(&self) -> Option<&str> {
        DeleteSourceCredentialsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DeleteSourceCredentialsError {
    pub fn new(kind: DeleteSourceCredentialsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteSourceCredentialsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteSourceCredentialsErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, DeleteSourceCredentialsErrorKind::InvalidInputException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, DeleteSourceCredentialsErrorKind::ResourceNotFoundException(_))
    }
}
impl std::error::Error for DeleteSourceCredentialsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteSourceCredentialsErrorKind::InvalidInputException(inner) => Some(inner),
            DeleteSourceCredentialsErrorKind::ResourceNotFoundException(inner) => Some(inner),
            DeleteSourceCredentialsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteWebhook` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteWebhookError {
    pub kind: DeleteWebhookErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteWebhook` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteWebhookErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    OAuthProviderException(crate::error::OAuthProviderException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteWebhookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteWebhookErrorKind::InvalidInputException(inner) => inner.fmt(f),
            DeleteWebhookErrorKind::ResourceNotFoundException(inner) => inner.fmt(f),
            DeleteWebhookErrorKind::OAuthProviderException(inner) => inner.fmt(f),
            DeleteWebhookErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteWebhookError {
    fn code(&self) -> Option<&str> {
        DeleteWebhookError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DeleteWebhookError {
    pub fn new(kind: DeleteWebhookErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteWebhookErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteWebhookErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, DeleteWebhookErrorKind::InvalidInputException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, DeleteWebhookErrorKind::ResourceNotFoundException(_))
    }
    pub fn is_o_auth_provider_exception(&self) -> bool {
        matches!(&self.kind, DeleteWebhookErrorKind::OAuthProviderException(_))
    }
}
impl std::error::Error for DeleteWebhookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteWebhookErrorKind::InvalidInputException(inner) => Some(inner),
            DeleteWebhookErrorKind::ResourceNotFoundException(inner) => Some(inner),
            DeleteWebhookErrorKind::OAuthProviderException(inner) => Some(inner),
            DeleteWebhookErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeTestCases` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeTestCasesError {
    pub kind: DescribeTestCasesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeTestCases` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeTestCasesErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeTestCasesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeTestCasesErrorKind::InvalidInputException(inner) => inner.fmt(f),
            DescribeTestCasesErrorKind::ResourceNotFoundException(inner) => inner.fmt(f),
            DescribeTestCasesErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeTestCasesError {
    fn code(&self) -> Option<&str> {
        DescribeTestCasesError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeTestCasesError {
    pub fn new(kind: DescribeTestCasesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeTestCasesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeTestCasesErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, DescribeTestCasesErrorKind::InvalidInputException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, DescribeTestCasesErrorKind::ResourceNotFoundException(_))
    }
}
impl std::error::Error for DescribeTestCasesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeTestCasesErrorKind::InvalidInputException(inner) => Some(inner),
            DescribeTestCasesErrorKind::ResourceNotFoundException(inner) => Some(inner),
            DescribeTestCasesErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `GetResourcePolicy` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetResourcePolicyError {
    pub kind: GetResourcePolicyErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetResourcePolicy` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetResourcePolicyErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    InvalidInputException(crate::error::InvalidInputException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetResourcePolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetResourcePolicyErrorKind::ResourceNotFoundException(inner) => inner.fmt(f),
            GetResourcePolicyErrorKind::InvalidInputException(inner) => inner.fmt(f),
            GetResourcePolicyErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for GetResourcePolicyError {
    fn code(&self) -> Option<&str> {
        GetResourcePolicyError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl GetResourcePolicyError {
    pub fn new(kind: GetResourcePolicyErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetResourcePolicyErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetResourcePolicyErrorKind::Unhandled(err.into()),
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
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetResourcePolicyErrorKind::ResourceNotFoundException(_))
    }
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, GetResourcePolicyErrorKind::InvalidInputException(_))
    }
}
impl std::error::Error for GetResourcePolicyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetResourcePolicyErrorKind::ResourceNotFoundException(inner) => Some(inner),
            GetResourcePolicyErrorKind::InvalidInputException(inner) => Some(inner),
            GetResourcePolicyErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ImportSourceCredentials` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ImportSourceCredentialsError {
    pub kind: ImportSourceCredentialsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ImportSourceCredentials` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ImportSourceCredentialsErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    AccountLimitExceededException(crate::error::AccountLimitExceededException),
    ResourceAlreadyExistsException(crate::error::ResourceAlreadyExistsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ImportSourceCredentialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ImportSourceCredentialsErrorKind::InvalidInputException(inner) => inner.fmt(f),
            ImportSourceCredentialsErrorKind::AccountLimitExceededException(inner) => inner.fmt(f),
            ImportSourceCredentialsErrorKind::ResourceAlreadyExistsException(inner) => inner.fmt(f),
            ImportSourceCredentialsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ImportSourceCredentialsError {
    fn code(&self) -> Option<&str> {
        ImportSourceCredentialsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl ImportSourceCredentialsError {
    pub fn new(kind: ImportSourceCredentialsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ImportSourceCredentialsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ImportSourceCredentialsErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, ImportSourceCredentialsErrorKind::InvalidInputException(_))
    }
    pub fn is_account_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, ImportSourceCredentialsErrorKind::AccountLimitExceededException(_))
    }
    pub fn is_resource_already_exists_exception(&self) -> bool {
        matches!(&self.kind, ImportSourceCredentialsErrorKind::ResourceAlreadyExistsException(_))
    }
}
impl std::error::Error for ImportSourceCredentialsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ImportSourceCredentialsErrorKind::InvalidInputException(inner) => Some(inner),
            ImportSourceCredentialsErrorKind::AccountLimitExceededException(inner) => Some(inner),
            ImportSourceCredentialsErrorKind::ResourceAlreadyExistsException(inner) => Some(inner),
            ImportSourceCredentialsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `InvalidateProjectCache` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct InvalidateProjectCacheError {
    pub kind: InvalidateProjectCacheErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `InvalidateProjectCache` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum InvalidateProjectCacheErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for InvalidateProjectCacheError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            InvalidateProjectCacheErrorKind::InvalidInputException(inner) => inner.fmt(f),
            InvalidateProjectCacheErrorKind::ResourceNotFoundException(inner) => inner.fmt(f),
            InvalidateProjectCacheErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for InvalidateProjectCacheError {
    fn code(&self) -> Option<&str> {
        InvalidateProjectCacheError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl InvalidateProjectCacheError {
    pub fn new(kind: InvalidateProjectCacheErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: InvalidateProjectCacheErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: InvalidateProjectCacheErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, InvalidateProjectCacheErrorKind::InvalidInputException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, InvalidateProjectCacheErrorKind::ResourceNotFoundException(_))
    }
}
impl std::error::Error for InvalidateProjectCacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            InvalidateProjectCacheErrorKind::InvalidInputException(inner) => Some(inner),
            InvalidateProjectCacheErrorKind::ResourceNotFoundException(inner) => Some(inner),
            InvalidateProjectCacheErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListBuilds` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListBuildsError {
    pub kind: ListBuildsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListBuilds` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListBuildsErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListBuildsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListBuildsErrorKind::InvalidInputException(inner) => inner.fmt(f),
            ListBuildsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListBuildsError {
    fn code(&self) -> Option<&str> {
        ListBuildsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl ListBuildsError {
    pub fn new(kind: ListBuildsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListBuildsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListBuildsErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, ListBuildsErrorKind::InvalidInputException(_))
    }
}
impl std::error::Error for ListBuildsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListBuildsErrorKind::InvalidInputException(inner) => Some(inner),
            ListBuildsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListBuildsForProject` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListBuildsForProjectError {
    pub kind: ListBuildsForProjectErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListBuildsForProject` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListBuildsForProjectErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListBuildsForProjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListBuildsForProjectErrorKind::InvalidInputException(inner) => inner.fmt(f),
            ListBuildsForProjectErrorKind::ResourceNotFoundException(inner) => inner.fmt(f),
            ListBuildsForProjectErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListBuildsForProjectError {
    fn code(&self) -> Option<&str> {
        ListBuildsForProjectError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl ListBuildsForProjectError {
    pub fn new(kind: ListBuildsForProjectErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListBuildsForProjectErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListBuildsForProjectErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, ListBuildsForProjectErrorKind::InvalidInputException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, ListBuildsForProjectErrorKind::ResourceNotFoundException(_))
    }
}
impl std::error::Error for ListBuildsForProjectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListBuildsForProjectErrorKind::InvalidInputException(inner) => Some(inner),
            ListBuildsForProjectErrorKind::ResourceNotFoundException(inner) => Some(inner),
            ListBuildsForProjectErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListCuratedEnvironmentImages` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListCuratedEnvironmentImagesError {
    pub kind: ListCuratedEnvironmentImagesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListCuratedEnvironmentImages` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListCuratedEnvironmentImagesErrorKind {
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListCuratedEnvironmentImagesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListCuratedEnvironmentImagesErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListCuratedEnvironmentImagesError {
    fn code(&self) -> Option<&str> {
        ListCuratedEnvironmentImagesError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl ListCuratedEnvironmentImagesError {
    pub fn new(kind: ListCuratedEnvironmentImagesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListCuratedEnvironmentImagesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListCuratedEnvironmentImagesErrorKind::Unhandled(err.into()),
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
}
impl std::error::Error for ListCuratedEnvironmentImagesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListCuratedEnvironmentImagesErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListProjects` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListProjectsError {
    pub kind: ListProjectsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListProjects` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListProjectsErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListProjectsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListProjectsErrorKind::InvalidInputException(inner) => inner.fmt(f),
            ListProjectsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListProjectsError {
    fn code(&self) -> Option<&str> {
        ListProjectsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl ListProjectsError {
    pub fn new(kind: ListProjectsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListProjectsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListProjectsErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, ListProjectsErrorKind::InvalidInputException(_))
    }
}
impl std::error::Error for ListProjectsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListProjectsErrorKind::InvalidInputException(inner) => Some(inner),
            ListProjectsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListReportGroups` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListReportGroupsError {
    pub kind: ListReportGroupsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListReportGroups` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListReportGroupsErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListReportGroupsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListReportGroupsErrorKind::InvalidInputException(inner) => inner.fmt(f),
            ListReportGroupsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListReportGroupsError {
    fn code(&self) -> Option<&str> {
        ListReportGroupsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl ListReportGroupsError {
    pub fn new(kind: ListReportGroupsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListReportGroupsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListReportGroupsErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, ListReportGroupsErrorKind::InvalidInputException(_))
    }
}
impl std::error::Error for ListReportGroupsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListReportGroupsErrorKind::InvalidInputException(inner) => Some(inner),
            ListReportGroupsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListReports` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListReportsError {
    pub kind: ListReportsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListReports` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListReportsErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListReportsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListReportsErrorKind::InvalidInputException(inner) => inner.fmt(f),
            ListReportsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListReportsError {
    fn code(&self) -> Option<&str> {
        ListReportsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl ListReportsError {
    pub fn new(kind: ListReportsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListReportsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListReportsErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, ListReportsErrorKind::InvalidInputException(_))
    }
}
impl std::error::Error for ListReportsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListReportsErrorKind::InvalidInputException(inner) => Some(inner),
            ListReportsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListReportsForReportGroup` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListReportsForReportGroupError {
    pub kind: ListReportsForReportGroupErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListReportsForReportGroup` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListReportsForReportGroupErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListReportsForReportGroupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListReportsForReportGroupErrorKind::InvalidInputException(inner) => inner.fmt(f),
            ListReportsForReportGroupErrorKind::ResourceNotFoundException(inner) => inner.fmt(f),
            ListReportsForReportGroupErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListReportsForReportGroupError {
    fn code(&self) -> Option<&str> {
        ListReportsForReportGroupError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl ListReportsForReportGroupError {
    pub fn new(kind: ListReportsForReportGroupErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListReportsForReportGroupErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListReportsForReportGroupErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, ListReportsForReportGroupErrorKind::InvalidInputException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, ListReportsForReportGroupErrorKind::ResourceNotFoundException(_))
    }
}
impl std::error::Error for ListReportsForReportGroupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListReportsForReportGroupErrorKind::InvalidInputException(inner) => Some(inner),
            ListReportsForReportGroupErrorKind::ResourceNotFoundException(inner) => Some(inner),
            ListReportsForReportGroupErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListSharedProjects` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListSharedProjectsError {
    pub kind: ListSharedProjectsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListSharedProjects` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListSharedProjectsErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListSharedProjectsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListSharedProjectsErrorKind::InvalidInputException(inner) => inner.fmt(f),
            ListSharedProjectsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListSharedProjectsError {
    fn code(&self) -> Option<&str> {
        ListSharedProjectsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl ListSharedProjectsError {
    pub fn new(kind: ListSharedProjectsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListSharedProjectsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListSharedProjectsErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, ListSharedProjectsErrorKind::InvalidInputException(_))
    }
}
impl std::error::Error for ListSharedProjectsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListSharedProjectsErrorKind::InvalidInputException(inner) => Some(inner),
            ListSharedProjectsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListSharedReportGroups` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListSharedReportGroupsError {
    pub kind: ListSharedReportGroupsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListSharedReportGroups` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListSharedReportGroupsErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListSharedReportGroupsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListSharedReportGroupsErrorKind::InvalidInputException(inner) => inner.fmt(f),
            ListSharedReportGroupsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListSharedReportGroupsError {
    fn code(&self) -> Option<&str> {
        ListSharedReportGroupsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl ListSharedReportGroupsError {
    pub fn new(kind: ListSharedReportGroupsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListSharedReportGroupsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListSharedReportGroupsErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, ListSharedReportGroupsErrorKind::InvalidInputException(_))
    }
}
impl std::error::Error for ListSharedReportGroupsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListSharedReportGroupsErrorKind::InvalidInputException(inner) => Some(inner),
            ListSharedReportGroupsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListSourceCredentials` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListSourceCredentialsError {
    pub kind: ListSourceCredentialsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListSourceCredentials` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListSourceCredentialsErrorKind {
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListSourceCredentialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListSourceCredentialsErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListSourceCredentialsError {
    fn code(&self) -> Option<&str> {
        ListSourceCredentialsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl ListSourceCredentialsError {
    pub fn new(kind: ListSourceCredentialsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListSourceCredentialsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListSourceCredentialsErrorKind::Unhandled(err.into()),
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
}
impl std::error::Error for ListSourceCredentialsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListSourceCredentialsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `PutResourcePolicy` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct PutResourcePolicyError {
    pub kind: PutResourcePolicyErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `PutResourcePolicy` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum PutResourcePolicyErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    InvalidInputException(crate::error::InvalidInputException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for PutResourcePolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            PutResourcePolicyErrorKind::ResourceNotFoundException(inner) => inner.fmt(f),
            PutResourcePolicyErrorKind::InvalidInputException(inner) => inner.fmt(f),
            PutResourcePolicyErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for PutResourcePolicyError {
    fn code(&self) -> Option<&str> {
        PutResourcePolicyError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl PutResourcePolicyError {
    pub fn new(kind: PutResourcePolicyErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: PutResourcePolicyErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: PutResourcePolicyErrorKind::Unhandled(err.into()),
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
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, PutResourcePolicyErrorKind::ResourceNotFoundException(_))
    }
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, PutResourcePolicyErrorKind::InvalidInputException(_))
    }
}
impl std::error::Error for PutResourcePolicyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            PutResourcePolicyErrorKind::ResourceNotFoundException(inner) => Some(inner),
            PutResourcePolicyErrorKind::InvalidInputException(inner) => Some(inner),
            PutResourcePolicyErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `StartBuild` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct StartBuildError {
    pub kind: StartBuildErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `StartBuild` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum StartBuildErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    AccountLimitExceededException(crate::error::AccountLimitExceededException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for StartBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            StartBuildErrorKind::InvalidInputException(inner) => inner.fmt(f),
            StartBuildErrorKind::ResourceNotFoundException(inner) => inner.fmt(f),
            StartBuildErrorKind::AccountLimitExceededException(inner) => inner.fmt(f),
            StartBuildErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for StartBuildError {
    fn code(&self) -> Option<&str> {
        StartBuildError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl StartBuildError {
    pub fn new(kind: StartBuildErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: StartBuildErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: StartBuildErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, StartBuildErrorKind::InvalidInputException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, StartBuildErrorKind::ResourceNotFoundException(_))
    }
    pub fn is_account_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, StartBuildErrorKind::AccountLimitExceededException(_))
    }
}
impl std::error::Error for StartBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            StartBuildErrorKind::InvalidInputException(inner) => Some(inner),
            StartBuildErrorKind::ResourceNotFoundException(inner) => Some(inner),
            StartBuildErrorKind::AccountLimitExceededException(inner) => Some(inner),
            StartBuildErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `StopBuild` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct StopBuildError {
    pub kind: StopBuildErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `StopBuild` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum StopBuildErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for StopBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            StopBuildErrorKind::InvalidInputException(inner) => inner.fmt(f),
            StopBuildErrorKind::ResourceNotFoundException(inner) => inner.fmt(f),
            StopBuildErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for StopBuildError {
    fn code(&self) -> Option<&str> {
        StopBuildError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl StopBuildError {
    pub fn new(kind: StopBuildErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: StopBuildErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: StopBuildErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, StopBuildErrorKind::InvalidInputException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, StopBuildErrorKind::ResourceNotFoundException(_))
    }
}
impl std::error::Error for StopBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            StopBuildErrorKind::InvalidInputException(inner) => Some(inner),
            StopBuildErrorKind::ResourceNotFoundException(inner) => Some(inner),
            StopBuildErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateProject` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateProjectError {
    pub kind: UpdateProjectErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UpdateProject` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateProjectErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateProjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateProjectErrorKind::InvalidInputException(inner) => inner.fmt(f),
            UpdateProjectErrorKind::ResourceNotFoundException(inner) => inner.fmt(f),
            UpdateProjectErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for UpdateProjectError {
    fn code(&self) -> Option<&str> {
        UpdateProjectError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl UpdateProjectError {
    pub fn new(kind: UpdateProjectErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateProjectErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateProjectErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, UpdateProjectErrorKind::InvalidInputException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, UpdateProjectErrorKind::ResourceNotFoundException(_))
    }
}
impl std::error::Error for UpdateProjectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateProjectErrorKind::InvalidInputException(inner) => Some(inner),
            UpdateProjectErrorKind::ResourceNotFoundException(inner) => Some(inner),
            UpdateProjectErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateReportGroup` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateReportGroupError {
    pub kind: UpdateReportGroupErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UpdateReportGroup` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateReportGroupErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateReportGroupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateReportGroupErrorKind::InvalidInputException(inner) => inner.fmt(f),
            UpdateReportGroupErrorKind::ResourceNotFoundException(inner) => inner.fmt(f),
            UpdateReportGroupErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for UpdateReportGroupError {
    fn code(&self) -> Option<&str> {
        UpdateReportGroupError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl UpdateReportGroupError {
    pub fn new(kind: UpdateReportGroupErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateReportGroupErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateReportGroupErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, UpdateReportGroupErrorKind::InvalidInputException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, UpdateReportGroupErrorKind::ResourceNotFoundException(_))
    }
}
impl std::error::Error for UpdateReportGroupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateReportGroupErrorKind::InvalidInputException(inner) => Some(inner),
            UpdateReportGroupErrorKind::ResourceNotFoundException(inner) => Some(inner),
            UpdateReportGroupErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateWebhook` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateWebhookError {
    pub kind: UpdateWebhookErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UpdateWebhook` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateWebhookErrorKind {
    InvalidInputException(crate::error::InvalidInputException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    OAuthProviderException(crate::error::OAuthProviderException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateWebhookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateWebhookErrorKind::InvalidInputException(inner) => inner.fmt(f),
            UpdateWebhookErrorKind::ResourceNotFoundException(inner) => inner.fmt(f),
            UpdateWebhookErrorKind::OAuthProviderException(inner) => inner.fmt(f),
            UpdateWebhookErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for UpdateWebhookError {
    fn code(&self) -> Option<&str> {
        UpdateWebhookError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl UpdateWebhookError {
    pub fn new(kind: UpdateWebhookErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateWebhookErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateWebhookErrorKind::Unhandled(err.into()),
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
    pub fn is_invalid_input_exception(&self) -> bool {
        matches!(&self.kind, UpdateWebhookErrorKind::InvalidInputException(_))
    }
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, UpdateWebhookErrorKind::ResourceNotFoundException(_))
    }
    pub fn is_o_auth_provider_exception(&self) -> bool {
        matches!(&self.kind, UpdateWebhookErrorKind::OAuthProviderException(_))
    }
}
impl std::error::Error for UpdateWebhookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateWebhookErrorKind::InvalidInputException(inner) => Some(inner),
            UpdateWebhookErrorKind::ResourceNotFoundException(inner) => Some(inner),
            UpdateWebhookErrorKind::OAuthProviderException(inner) => Some(inner),
            UpdateWebhookErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// An AWS service limit was exceeded for the calling AWS account.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct AccountLimitExceededException {
    pub message: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for AccountLimitExceededException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AccountLimitExceededException");
        formatter.field("message", &self.message);
        formatter.finish()
    }
}
impl AccountLimitExceededException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for AccountLimitExceededException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AccountLimitExceededException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for AccountLimitExceededException {}
/// See [`AccountLimitExceededException`](crate::error::AccountLimitExceededException)
pub mod account_limit_exceeded_exception {
    /// A builder for [`AccountLimitExceededException`](crate::error::AccountLimitExceededException)
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
        /// Consumes the builder and constructs a [`AccountLimitExceededException`](crate::error::AccountLimitExceededException)
        pub fn build(self) -> crate::error::AccountLimitExceededException {
            crate::error::AccountLimitExceededException {
                message: self.message,
            }
        }
    }
}
impl AccountLimitExceededException {
    /// Creates a new builder-style object to manufacture [`AccountLimitExceededException`](crate::error::AccountLimitExceededException)
    pub fn builder() -> crate::error::account_limit_exceeded_exception::Builder {
        crate::error::account_limit_exceeded_exception::Builder::default()
    }
}

/// The input value that was provided is not valid.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct InvalidInputException {
    pub message: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for InvalidInputException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InvalidInputException");
        formatter.field("message", &self.message);
        formatter.finish()
    }
}
impl InvalidInputException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for InvalidInputException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidInputException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidInputException {}
/// See [`InvalidInputException`](crate::error::InvalidInputException)
pub mod invalid_input_exception {
    /// A builder for [`InvalidInputException`](crate::error::InvalidInputException)
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
        /// Consumes the builder and constructs a [`InvalidInputException`](crate::error::InvalidInputException)
        pub fn build(self) -> crate::error::InvalidInputException {
            crate::error::InvalidInputException {
                message: self.message,
            }
        }
    }
}
impl InvalidInputException {
    /// Creates a new builder-style object to manufacture [`InvalidInputException`](crate::error::InvalidInputException)
    pub fn builder() -> crate::error::invalid_input_exception::Builder {
        crate::error::invalid_input_exception::Builder::default()
    }
}

/// There was a problem with the underlying OAuth provider.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct OAuthProviderException {
    pub message: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for OAuthProviderException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("OAuthProviderException");
        formatter.field("message", &self.message);
        formatter.finish()
    }
}
impl OAuthProviderException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for OAuthProviderException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OAuthProviderException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for OAuthProviderException {}
/// See [`OAuthProviderException`](crate::error::OAuthProviderException)
pub mod o_auth_provider_exception {
    /// A builder for [`OAuthProviderException`](crate::error::OAuthProviderException)
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
        /// Consumes the builder and constructs a [`OAuthProviderException`](crate::error::OAuthProviderException)
        pub fn build(self) -> crate::error::OAuthProviderException {
            crate::error::OAuthProviderException {
                message: self.message,
            }
        }
    }
}
impl OAuthProviderException {
    /// Creates a new builder-style object to manufacture [`OAuthProviderException`](crate::error::OAuthProviderException)
    pub fn builder() -> crate::error::o_auth_provider_exception::Builder {
        crate::error::o_auth_provider_exception::Builder::default()
    }
}

/// The specified AWS resource cannot be created, because an AWS resource with the same settings already exists.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ResourceAlreadyExistsException {
    pub message: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ResourceAlreadyExistsException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ResourceAlreadyExistsException");
        formatter.field("message", &self.message);
        formatter.finish()
    }
}
impl ResourceAlreadyExistsException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for ResourceAlreadyExistsException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResourceAlreadyExistsException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for ResourceAlreadyExistsException {}
/// See [`ResourceAlreadyExistsException`](crate::error::ResourceAlreadyExistsException)
pub mod resource_already_exists_exception {
    /// A builder for [`ResourceAlreadyExistsException`](crate::error::ResourceAlreadyExistsException)
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
        /// Consumes the builder and constructs a [`ResourceAlreadyExistsException`](crate::error::ResourceAlreadyExistsException)
        pub fn build(self) -> crate::error::ResourceAlreadyExistsException {
            crate::error::ResourceAlreadyExistsException {
                message: self.message,
            }
        }
    }
}
impl ResourceAlreadyExistsException {
    /// Creates a new builder-style object to manufacture [`ResourceAlreadyExistsException`](crate::error::ResourceAlreadyExistsException)
    pub fn builder() -> crate::error::resource_already_exists_exception::Builder {
        crate::error::resource_already_exists_exception::Builder::default()
    }
}

/// The specified AWS resource cannot be found.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ResourceNotFoundException {
    pub message: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ResourceNotFoundException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ResourceNotFoundException");
        formatter.field("message", &self.message);
        formatter.finish()
    }
}
impl ResourceNotFoundException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for ResourceNotFoundException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResourceNotFoundException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for ResourceNotFoundException {}
/// See [`ResourceNotFoundException`](crate::error::ResourceNotFoundException)
pub mod resource_not_found_exception {
    /// A builder for [`ResourceNotFoundException`](crate::error::ResourceNotFoundException)
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
        /// Consumes the builder and constructs a [`ResourceNotFoundException`](crate::error::ResourceNotFoundException)
        pub fn build(self) -> crate::error::ResourceNotFoundException {
            crate::error::ResourceNotFoundException {
                message: self.message,
            }
        }
    }
}
impl ResourceNotFoundException {
    /// Creates a new builder-style object to manufacture [`ResourceNotFoundException`](crate::error::ResourceNotFoundException)
    pub fn builder() -> crate::error::resource_not_found_exception::Builder {
        crate::error::resource_not_found_exception::Builder::default()
    }
}
