/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::uri::{PathAndQuery, Uri};
use std::str::FromStr;

/// API Endpoint
///
/// The scheme, authority and base path that requests are sent to. Operations are built with a
/// relative URI (`/` for AWS JSON protocols) which is merged with the endpoint during dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    uri: http::Uri,

    /// If true, the endpoint was set explicitly by the user and must be used as-is
    immutable: bool,
}

impl Endpoint {
    /// Create a new endpoint from a URI
    pub fn mutable(uri: Uri) -> Self {
        Endpoint {
            uri,
            immutable: false,
        }
    }

    /// Create a new immutable endpoint from a URI
    ///
    /// ```rust
    /// # use smithy_http::endpoint::Endpoint;
    /// use http::Uri;
    /// let endpoint = Endpoint::immutable(Uri::from_static("http://localhost:8000"));
    /// ```
    pub fn immutable(uri: Uri) -> Self {
        Endpoint {
            uri,
            immutable: true,
        }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    /// Sets the endpoint on `uri`, preserving the path and query of the original request
    pub fn set_endpoint(&self, uri: &mut http::Uri) {
        let path = merge_paths(&self.uri, uri);
        let mut parts = uri.clone().into_parts();
        parts.scheme = self.uri.scheme().cloned();
        parts.authority = self.uri.authority().cloned();
        parts.path_and_query = Some(path);
        // every component was taken from an existing, valid URI
        if let Ok(updated) = Uri::from_parts(parts) {
            *uri = updated;
        }
    }
}

fn merge_paths(endpoint: &Uri, uri: &Uri) -> PathAndQuery {
    let base = endpoint.path().trim_end_matches('/');
    if base.is_empty() {
        return uri
            .path_and_query()
            .cloned()
            .unwrap_or_else(|| PathAndQuery::from_static("/"));
    }
    let suffix = uri
        .path_and_query()
        .map(|path| path.as_str())
        .unwrap_or("/");
    PathAndQuery::from_str(&format!("{}{}", base, suffix))
        .unwrap_or_else(|_| PathAndQuery::from_static("/"))
}

#[cfg(test)]
mod test {
    use crate::endpoint::Endpoint;
    use http::Uri;

    #[test]
    fn endpoint_replaces_authority() {
        let mut uri = Uri::from_static("/");
        let endpoint = Endpoint::mutable(Uri::from_static(
            "https://directconnect.us-west-2.amazonaws.com",
        ));
        endpoint.set_endpoint(&mut uri);
        assert_eq!(
            uri,
            Uri::from_static("https://directconnect.us-west-2.amazonaws.com/")
        );
    }

    #[test]
    fn endpoint_with_base_path() {
        let mut uri = Uri::from_static("/?x=1");
        let endpoint = Endpoint::immutable(Uri::from_static("http://localhost:8000/proxy/"));
        endpoint.set_endpoint(&mut uri);
        assert_eq!(uri, Uri::from_static("http://localhost:8000/proxy/?x=1"));
        assert!(endpoint.is_immutable());
    }
}
