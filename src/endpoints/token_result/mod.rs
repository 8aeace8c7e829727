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

//! Contains the [`TokenGenerationResult`], which bundles the token material issued for a
//! single request, along with the opaque [`AccessToken`] and [`RefreshToken`] handles.

use core::fmt::{Debug, Formatter};

use serde::{Serialize, Serializer};


/// An access token minted by the issuing component, identified by its textual id.
///
/// The internal structure of the token is never inspected. Its [`Debug`] output does not
/// reveal the id.
#[derive(PartialEq, Eq, Clone, Hash)]
pub struct AccessToken(String);

/// A refresh token minted by the issuing component, identified by its textual id.
///
/// Like [`AccessToken`], its [`Debug`] output does not reveal the id.
#[derive(PartialEq, Eq, Clone, Hash)]
pub struct RefreshToken(String);

macro_rules! token_handle {
    ($name:ident) => {
        impl $name {
            /// Returns the textual id of this token.
            #[must_use]
            pub fn id(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name(value.to_string())
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
                f.write_str(concat!(stringify!($name), "(..)"))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.id())
            }
        }
    };
}

token_handle!(AccessToken);
token_handle!(RefreshToken);

/// Token material issued for the current request, ready to be rendered.
///
/// A result has one of two shapes: an access token (optionally accompanied by a
/// refresh token) for bearer token responses, or a device code together with a user code
/// for device authorization responses. The builder refuses results mixing both shapes.
/// Whether the fields required by a specific [`ResponseType`](crate::ResponseType) are
/// present is only checked when rendering.
///
/// Use the [`TokenGenerationResultBuilder`] (which you can access using the
/// [`TokenGenerationResult::builder()`] method) to create an instance of this struct.
///
/// # Example
/// ```
/// # use oauth2_response::TokenGenerationResult;
/// # use oauth2_response::endpoints::token_result::TokenGenerationResultBuilderError;
/// let result = TokenGenerationResult::builder()
///     .access_token("AT-1")
///     .refresh_token("RT-9")
///     .build()?;
/// assert_eq!(result.access_token().map(|x| x.id()), Some("AT-1"));
/// assert!(result.device_code().is_none());
///
/// let mixed = TokenGenerationResult::builder()
///     .access_token("AT-1")
///     .device_code("DEV-999")
///     .build();
/// assert!(mixed.is_err());
/// # Ok::<(), TokenGenerationResultBuilderError>(())
/// ```
#[derive(Debug, Default, PartialEq, Eq, Clone, Builder)]
#[builder(
    setter(into, strip_option),
    derive(Debug, PartialEq),
    build_fn(validate = "Self::validate")
)]
pub struct TokenGenerationResult {
    #[builder(default)]
    access_token: Option<AccessToken>,

    #[builder(default)]
    refresh_token: Option<RefreshToken>,

    #[builder(default)]
    device_code: Option<String>,

    #[builder(default)]
    user_code: Option<String>,
}

impl TokenGenerationResult {
    /// Initializes and returns a new [`TokenGenerationResultBuilder`].
    #[must_use]
    pub fn builder() -> TokenGenerationResultBuilder {
        TokenGenerationResultBuilder::default()
    }

    /// The issued access token, if any.
    #[must_use]
    pub fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// The issued refresh token, if any.
    #[must_use]
    pub fn refresh_token(&self) -> Option<&RefreshToken> {
        self.refresh_token.as_ref()
    }

    /// The opaque device code the device polls with, if any.
    #[must_use]
    pub fn device_code(&self) -> Option<&str> {
        self.device_code.as_deref()
    }

    /// The code the user enters at the verification URI, if any.
    #[must_use]
    pub fn user_code(&self) -> Option<&str> {
        self.user_code.as_deref()
    }
}

#[allow(clippy::unused_self, clippy::unnecessary_wraps)]
mod builder {
    use super::*;

    impl TokenGenerationResultBuilder {
        pub(crate) fn validate(&self) -> Result<(), TokenGenerationResultBuilderError> {
            let bearer = matches!(self.access_token, Some(Some(_)))
                || matches!(self.refresh_token, Some(Some(_)));
            let device = matches!(self.device_code, Some(Some(_)))
                || matches!(self.user_code, Some(Some(_)));
            if bearer && device {
                Err(TokenGenerationResultBuilderError::ValidationError(
                    "bearer token material and device codes must not be combined".to_string(),
                ))
            } else {
                Ok(())
            }
        }
    }
}
