/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#![allow(clippy::module_inception)]
#![allow(clippy::large_enum_variant)]
//! AWS CodeBuild
//!
//! A fully managed build service in the cloud. CodeBuild compiles source code, runs unit tests
//! and produces artifacts that are ready to deploy.
//!
//! Requests use the AWS JSON 1.1 protocol: every operation is a `POST /` whose `X-Amz-Target`
//! header is `CodeBuild_20161006.<Operation>`.
//!
//! ```no_run
//! # async fn list() -> Result<(), codebuild::Error> {
//! let client = codebuild::Client::from_env();
//! let projects = client.list_projects().send().await?;
//! for name in projects.projects.unwrap_or_default() {
//!     println!("{}", name);
//! }
//! # Ok(())
//! # }
//! ```

pub use config::Config;
pub use error_meta::Error;

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod error;
mod error_meta;
pub mod input;
mod json_deser;
mod json_errors;
mod json_ser;
pub mod model;
pub mod operation;
mod operation_deser;
mod operation_ser;
pub mod output;
#[cfg(test)]
mod protocol_tests;

pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix of the `X-Amz-Target` header, followed by `.` and the operation name
pub const TARGET_PREFIX: &str = "CodeBuild_20161006";

/// Endpoint prefix, also used as the SigV4 signing name
pub const ENDPOINT_PREFIX: &str = "codebuild";

pub(crate) const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

pub(crate) static API_METADATA: aws_http::user_agent::ApiMetadata =
    aws_http::user_agent::ApiMetadata::new("codebuild", env!("CARGO_PKG_VERSION"));

pub use aws_auth::Credentials;
pub use aws_types::region::Region;
#[cfg(feature = "client")]
pub use aws_hyper::SdkError;
#[cfg(feature = "client")]
pub use client::Client;
pub use smithy_http::endpoint::Endpoint;
pub use smithy_types::{Blob, Instant};
