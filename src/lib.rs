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

//! Rendering of OAuth 2.0 token endpoint responses.
//!
//! This crate writes the JSON body of a successful token endpoint response once the tokens
//! themselves have already been issued. Two response shapes are supported:
//! - The bearer token response of [RFC 6749, section 5.1](https://www.rfc-editor.org/rfc/rfc6749.html#section-5.1),
//!   used for the `token`, `id_token token` (and, should it ever get here, `code`) response types.
//! - The device authorization response of [RFC 8628, section 3.2](https://www.rfc-editor.org/rfc/rfc8628.html#section-3.2),
//!   used for the `device_code` response type.
//!
//! Authenticating clients, validating grants, minting and storing tokens as well as routing
//! requests to the right endpoint are *out of scope* for this crate. These are expected to
//! happen upstream, which then hands a [`TokenGenerationResult`] and a [`ResponseType`] to the
//! [`ResponseRenderer`].
//!
//! # Example
//! ```
//! # use std::error::Error;
//! use oauth2_response::{
//!     BufferedResponse, RegisteredService, RequestContext, ResponseRenderer, ResponseType,
//!     Service, ServerSettings, TokenGenerationResult,
//! };
//!
//! let renderer = ResponseRenderer::new(ServerSettings::new("https://idp.example.org/cas"));
//! let result = TokenGenerationResult::builder()
//!     .device_code("DEV-999")
//!     .user_code("ABCD-1234")
//!     .build()?;
//! let mut response = BufferedResponse::new();
//! renderer.generate(
//!     &mut response,
//!     &RequestContext::new(),
//!     &RegisteredService::new(1, "tv-app", "TV App"),
//!     &Service::new("https://tv.example.org"),
//!     &result,
//!     0,
//!     ResponseType::DeviceCode,
//! )?;
//! assert_eq!(
//!     response.body_str(),
//!     Some(concat!(
//!         r#"{"verification_uri":"https://idp.example.org/cas/oauth2.0/device_authz","#,
//!         r#""user_code":"ABCD-1234","device_code":"DEV-999","interval":15}"#
//!     ))
//! );
//! # Ok::<(), Box<dyn Error>>(())
//! ```
//!
//! # Extending bearer token responses
//! Additional members (for example an identity token for the hybrid OpenID Connect flow) can be
//! added by registering a [`ResponseAugmenter`] on the renderer. Augmenters run after the
//! core members have been collected and may only append new members.
//! [`IdTokenAugmenter`] is provided for the `id_token token` response type.
//!
//! # Failures
//! Responses are encoded in memory before anything is written, so a failed render never
//! leaves a partial JSON object on the connection. All failures are reported as a
//! [`RenderError`]; none of them carry details meant for the client.

#![deny(rustdoc::broken_intra_doc_links, clippy::pedantic)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]
// These ones are a little too eager
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::wildcard_imports
)]
#[macro_use]
extern crate derive_builder;

#[doc(inline)]
pub use common::constants;
#[doc(inline)]
pub use common::json_map::JsonFields;
#[doc(inline)]
pub use common::response_type::ResponseType;
#[doc(inline)]
pub use common::service::{RegisteredService, RequestContext, Service};
#[doc(inline)]
pub use config::{ServerSettings, Settings};
#[doc(inline)]
pub use endpoints::token_resp::{
    BearerTokenResponse, BufferedResponse, DeviceCodeResponse, IdTokenAugmenter, IdTokenIssuer,
    RenderContext, ResponseAugmenter, ResponseRenderer, ResponseSink,
};
#[doc(inline)]
pub use endpoints::token_result::{AccessToken, RefreshToken, TokenGenerationResult};
#[doc(inline)]
pub use error::RenderError;

pub mod common;
pub mod config;
pub mod endpoints;
pub mod error;
