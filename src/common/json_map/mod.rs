/*
 * Copyright (c) 2022 The NAMIB Project Developers.
 * Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
 * https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
 * <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
 * option. This file may not be copied, modified, or distributed
 * except according to those terms.
 *
 * SPDX-License-Identifier: MIT OR Apache-2.0
 */

//! Contains [`JsonFields`], an ordered set of JSON object members, and the [`ToJsonMap`] trait
//! implemented by every response shape.
//!
//! Members are written in insertion order. Members whose value is absent are left out of the
//! object entirely instead of being written as `null`.

use std::borrow::Cow;

use erased_serde::Serialize as ErasedSerialize;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::RenderError;

#[cfg(test)]
mod tests;

macro_rules! json_map_vec {
    ($($key:expr => $val:expr),* $(,)*) => {
         vec![$(
             (
                 $key,
                 $val.map(|x| {
                         let a_box: Box<dyn ErasedSerialize + '_> = Box::new(x);
                         a_box
                     })
             )
         ),*]
     };
}

#[rustfmt::skip]
pub(crate) use json_map_vec;

/// Provides the members of a response shape as a list of JSON object entries.
///
/// This trait is sealed; it is only implemented by the response shapes of this crate.
pub trait ToJsonMap: private::Sealed {
    /// Returns the members of this value in the order they shall be written.
    ///
    /// An entry with a value of `None` will be omitted from the resulting object.
    fn to_json_map(&self) -> Vec<(&'static str, Option<Box<dyn ErasedSerialize + '_>>)>;

    /// Serializes this value as a compact JSON object.
    ///
    /// # Errors
    /// If a member could not be serialized.
    fn to_json_vec(&self) -> Result<Vec<u8>, RenderError>
    where
        Self: Sized,
    {
        JsonFields::from_map(self).to_json_vec()
    }
}

/// An ordered list of members of a single JSON object which has not been written yet.
///
/// Response augmenters receive this to append their own members after the core ones.
/// Names are unique: inserting a member whose name is already present fails, so members
/// which were added earlier can never be overwritten or moved.
///
/// # Example
/// ```
/// # use oauth2_response::common::json_map::JsonFields;
/// # use oauth2_response::error::RenderError;
/// let mut fields = JsonFields::new();
/// fields.insert("scope", "openid")?;
/// fields.insert("expires_in", 60)?;
/// assert!(fields.insert("scope", "profile").is_err());
/// assert_eq!(fields.to_json_vec()?, br#"{"scope":"openid","expires_in":60}"#);
/// # Ok::<(), RenderError>(())
/// ```
#[derive(Default)]
pub struct JsonFields<'a> {
    entries: Vec<(Cow<'a, str>, Box<dyn ErasedSerialize + 'a>)>,
}

impl<'a> JsonFields<'a> {
    /// Creates an empty list of members.
    #[must_use]
    pub fn new() -> JsonFields<'a> {
        JsonFields {
            entries: Vec::new(),
        }
    }

    /// Creates a list of members from the present entries of `value`.
    pub fn from_map<T>(value: &'a T) -> JsonFields<'a>
    where
        T: ToJsonMap,
    {
        let entries = value
            .to_json_map()
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (Cow::Borrowed(name), v)))
            .collect();
        JsonFields { entries }
    }

    /// Appends a member with the given `name` and `value`.
    ///
    /// # Errors
    /// If a member called `name` is already present.
    pub fn insert<K, V>(&mut self, name: K, value: V) -> Result<(), RenderError>
    where
        K: Into<Cow<'a, str>>,
        V: Serialize + 'a,
    {
        let name = name.into();
        if self.contains(&name) {
            return Err(RenderError::DuplicateField(name.into_owned()));
        }
        self.entries.push((name, Box::new(value)));
        Ok(())
    }

    /// Whether a member called `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Returns the member names in the order they will be written.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_ref())
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no members at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the members as a single compact JSON object.
    ///
    /// The object is built in memory; nothing is returned unless every member was
    /// serialized successfully.
    ///
    /// # Errors
    /// If a member could not be serialized.
    pub fn to_json_vec(&self) -> Result<Vec<u8>, RenderError> {
        serde_json::to_vec(self).map_err(RenderError::from)
    }
}

impl Serialize for JsonFields<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name.as_ref(), value)?;
        }
        map.end()
    }
}

impl core::fmt::Debug for JsonFields<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

mod private {
    use crate::endpoints::token_resp::{BearerTokenResponse, DeviceCodeResponse};

    /// Sealed trait according to C-SEALED.
    pub trait Sealed {}

    impl Sealed for BearerTokenResponse<'_> {}

    impl Sealed for DeviceCodeResponse<'_> {}
}
