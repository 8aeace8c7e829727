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

//! Contains the [`ResponseType`] enumeration of the OAuth 2.0 flows a response can be rendered for.
//!
//! A response type carries no rendering logic of its own; it is merely the discriminator the
//! [`ResponseRenderer`](crate::ResponseRenderer) uses to pick a response shape.

use core::fmt::{Display, Formatter};
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

use crate::error::InvalidResponseTypeError;


/// The response type requested on the authorization request, as described in
/// [section 3.1.1 of RFC 6749](https://www.rfc-editor.org/rfc/rfc6749.html#section-3.1.1).
///
/// Each variant maps to exactly one wire value, available through [`ResponseType::as_str`]
/// and the [`Display`] implementation.
///
/// # Example
/// ```
/// # use oauth2_response::ResponseType;
/// # use oauth2_response::error::InvalidResponseTypeError;
/// let response_type: ResponseType = "id_token token".parse()?;
/// assert_eq!(response_type, ResponseType::IdTokenToken);
/// assert_eq!(ResponseType::DeviceCode.as_str(), "device_code");
/// assert!("id_token".parse::<ResponseType>().is_err());
/// # Ok::<(), InvalidResponseTypeError>(())
/// ```
#[derive(
    Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize, IntoStaticStr, EnumIter,
)]
pub enum ResponseType {
    /// Authorization code grant.
    ///
    /// Not rendered as a token response directly, but rendered like [`ResponseType::Token`]
    /// should it ever reach the renderer.
    #[serde(rename = "code")]
    #[strum(serialize = "code")]
    Code,

    /// Implicit grant, rendered as a bearer token response.
    #[serde(rename = "token")]
    #[strum(serialize = "token")]
    Token,

    /// Device authorization grant as defined in [RFC 8628](https://www.rfc-editor.org/rfc/rfc8628.html).
    #[serde(rename = "device_code")]
    #[strum(serialize = "device_code")]
    DeviceCode,

    /// Hybrid OpenID Connect flow, rendered as a bearer token response which may
    /// additionally carry an identity token.
    #[serde(rename = "id_token token")]
    #[strum(serialize = "id_token token")]
    IdTokenToken,
}

impl ResponseType {
    /// Returns the wire value of this response type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl Display for ResponseType {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseType {
    type Err = InvalidResponseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResponseType::iter()
            .find(|x| x.as_str() == s)
            .ok_or_else(|| InvalidResponseTypeError::new(s))
    }
}
