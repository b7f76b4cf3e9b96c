/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#![allow(clippy::module_inception)]
#![allow(clippy::large_enum_variant)]
//! AWS Direct Connect
//!
//! Links an internal network to an AWS Direct Connect location over a standard Ethernet fiber-optic
//! cable. One end of the cable is connected to your router, the other to an AWS Direct Connect router.
//!
//! Requests use the AWS JSON 1.1 protocol: every operation is a `POST /` whose `X-Amz-Target`
//! header is `OvertureService.<Operation>`.
//!
//! ```no_run
//! # async fn locations() -> Result<(), directconnect::Error> {
//! let client = directconnect::Client::from_env();
//! let resp = client.describe_locations().send().await?;
//! for location in resp.locations.unwrap_or_default() {
//!     println!("{:?} {:?}", location.location_code, location.location_name);
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
pub const TARGET_PREFIX: &str = "OvertureService";

/// Endpoint prefix, also used as the SigV4 signing name
pub const ENDPOINT_PREFIX: &str = "directconnect";

pub(crate) const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

pub(crate) static API_METADATA: aws_http::user_agent::ApiMetadata =
    aws_http::user_agent::ApiMetadata::new("directconnect", env!("CARGO_PKG_VERSION"));

pub use aws_auth::Credentials;
pub use aws_types::region::Region;
#[cfg(feature = "client")]
pub use aws_hyper::SdkError;
#[cfg(feature = "client")]
pub use client::Client;
pub use smithy_http::endpoint::Endpoint;
pub use smithy_types::{Blob, Instant};
