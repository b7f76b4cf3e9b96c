/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A typemap used to carry per-request configuration through the middleware stack.
//!
//! Each type may be stored at most once. Middleware look up what they need by type, for
//! example the `Region` or the credentials provider.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasherDefault, Hasher};

type AnyMap = HashMap<TypeId, Box<dyn Any + Send + Sync>, BuildHasherDefault<IdHasher>>;

// TypeIds are already hashed, so skip hashing them again
#[derive(Default)]
struct IdHasher(u64);

impl Hasher for IdHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, _: &[u8]) {
        unreachable!("TypeId calls write_u64");
    }

    #[inline]
    fn write_u64(&mut self, id: u64) {
        self.0 = id;
    }
}

/// A type map of request properties.
#[derive(Default)]
pub struct PropertyBag {
    map: AnyMap,
}

impl PropertyBag {
    /// Create an empty `PropertyBag`.
    #[inline]
    pub fn new() -> PropertyBag {
        PropertyBag {
            map: AnyMap::default(),
        }
    }

    /// Insert a type into this `PropertyBag`.
    ///
    /// If a value of this type already existed, it will be returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use smithy_http::property_bag::PropertyBag;
    /// let mut props = PropertyBag::new();
    /// assert!(props.insert(5i32).is_none());
    /// assert_eq!(props.insert(9i32), Some(5i32));
    /// ```
    pub fn insert<T: Send + Sync + 'static>(&mut self, val: T) -> Option<T> {
        self.map
            .insert(TypeId::of::<T>(), Box::new(val))
            .and_then(|boxed| boxed.downcast().ok().map(|boxed: Box<T>| *boxed))
    }

    /// Get a reference to a type previously inserted on this `PropertyBag`.
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref())
    }

    /// Get a mutable reference to a type previously inserted on this `PropertyBag`.
    pub fn get_mut<T: Send + Sync + 'static>(&mut self) -> Option<&mut T> {
        self.map
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut())
    }

    /// Remove a type from this `PropertyBag`.
    ///
    /// If a value of this type existed, it will be returned.
    pub fn remove<T: Send + Sync + 'static>(&mut self) -> Option<T> {
        self.map
            .remove(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast().ok().map(|boxed: Box<T>| *boxed))
    }

    /// Clear the `PropertyBag` of all inserted extensions.
    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl fmt::Debug for PropertyBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyBag")
            .field("len", &self.map.len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::PropertyBag;

    #[derive(Debug, PartialEq)]
    struct SigningService(&'static str);

    #[test]
    fn stores_one_value_per_type() {
        let mut props = PropertyBag::new();
        assert!(props.is_empty());
        props.insert(5i32);
        props.insert("hello");
        props.insert(SigningService("codebuild"));

        assert_eq!(props.get::<i32>(), Some(&5i32));
        assert_eq!(props.get::<&'static str>(), Some(&"hello"));
        assert_eq!(props.get::<i64>(), None);
        assert_eq!(props.len(), 3);

        if let Some(service) = props.get_mut::<SigningService>() {
            service.0 = "directconnect";
        }
        assert_eq!(
            props.remove::<SigningService>(),
            Some(SigningService("directconnect"))
        );
        assert!(props.get::<SigningService>().is_none());

        props.clear();
        assert!(props.is_empty());
    }
}
