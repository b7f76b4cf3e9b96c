/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! HTTP specific retry behaviors
//!
//! For protocol agnostic retries, see `smithy_types::Retry`.

use smithy_types::retry::RetryKind;

/// Classify an operation outcome into a [`RetryKind`]
///
/// `T` is the successful response type and `E` is the error type. Implementations are attached
/// to an [`Operation`](crate::operation::Operation) as its retry policy and consulted by the
/// retry layer after every attempt.
pub trait ClassifyResponse<T, E>: Clone {
    fn classify(&self, response: Result<&T, &E>) -> RetryKind;
}

impl<T, E> ClassifyResponse<T, E> for () {
    fn classify(&self, _: Result<&T, &E>) -> RetryKind {
        RetryKind::NotRetryable
    }
}

#[cfg(test)]
mod test {
    use crate::retry::ClassifyResponse;
    use smithy_types::retry::RetryKind;

    #[test]
    fn unit_policy_never_retries() {
        let policy = ();
        assert_eq!(
            ClassifyResponse::<(), &str>::classify(&policy, Err(&"boom")),
            RetryKind::NotRetryable
        );
        assert_eq!(
            ClassifyResponse::<(), &str>::classify(&policy, Ok(&())),
            RetryKind::NotRetryable
        );
    }
}
