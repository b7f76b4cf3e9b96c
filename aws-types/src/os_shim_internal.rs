/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Process environment shim
//!
//! Region, credential and user agent lookups read `AWS_*` variables through [`Env`] so tests can
//! supply their own values instead of mutating the global process environment.

use std::collections::HashMap;
use std::env::VarError;
use std::sync::Arc;

/// Source of environment variables: either the running process or a fixed map.
///
/// Cloning is cheap. A fixed map is shared behind an `Arc`.
#[derive(Clone)]
pub struct Env(Arc<Source>);

enum Source {
    Process,
    Fixed(HashMap<String, String>),
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}

impl Env {
    /// Looks up `key`, failing with [`VarError::NotPresent`] when it is unset.
    pub fn get(&self, key: &str) -> Result<String, VarError> {
        match self.0.as_ref() {
            Source::Process => std::env::var(key),
            Source::Fixed(vars) => vars.get(key).cloned().ok_or(VarError::NotPresent),
        }
    }

    /// Builds a fixed environment from `(name, value)` pairs.
    ///
    /// ```rust
    /// use aws_types::os_shim_internal::Env;
    /// let env = Env::from_slice(&[("AWS_REGION", "eu-west-1")]);
    /// assert_eq!(env.get("AWS_REGION").as_deref(), Ok("eu-west-1"));
    /// ```
    pub fn from_slice(vars: &[(&str, &str)]) -> Self {
        vars.iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect::<HashMap<_, _>>()
            .into()
    }

    /// Reads from the environment of the running process.
    pub fn real() -> Self {
        Self(Arc::new(Source::Process))
    }
}

impl From<HashMap<String, String>> for Env {
    fn from(vars: HashMap<String, String>) -> Self {
        Self(Arc::new(Source::Fixed(vars)))
    }
}

#[cfg(test)]
mod test {
    use crate::os_shim_internal::Env;
    use std::env::VarError;

    #[test]
    fn fixed_environment_only_sees_its_own_vars() {
        let env = Env::from_slice(&[("AWS_DEFAULT_REGION", "ap-south-1")]);
        assert_eq!(env.get("AWS_DEFAULT_REGION").as_deref(), Ok("ap-south-1"));
        assert_eq!(env.get("AWS_REGION"), Err(VarError::NotPresent));
    }
}
