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

use crate::common::constants::fields::ID_TOKEN;
use crate::common::json_map::JsonFields;
use crate::common::response_type::ResponseType;
use crate::common::service::{RegisteredService, RequestContext, Service};
use crate::endpoints::token_result::TokenGenerationResult;
use crate::error::RenderError;

/// Everything known about the response currently being rendered.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// The inbound request.
    pub request: &'a RequestContext,

    /// The client the response is rendered for.
    pub registered_service: &'a RegisteredService,

    /// The relying-party service the tokens were issued for.
    pub service: &'a Service,

    /// The issued token material.
    pub result: &'a TokenGenerationResult,

    /// Lifetime of the access token in seconds.
    pub timeout: u64,

    /// The response type the request was classified as.
    pub response_type: ResponseType,
}

/// Adds members to a bearer token response after its core members were written.
///
/// Augmenters are registered on a [`ResponseRenderer`](super::ResponseRenderer) and run in
/// registration order. They can only append members; an attempt to add a member that is
/// already present fails with [`RenderError::DuplicateField`] and aborts the response.
///
/// # Example
/// ```
/// # use oauth2_response::{JsonFields, RenderContext, RenderError, ResponseAugmenter};
/// struct ScopeAugmenter;
///
/// impl ResponseAugmenter for ScopeAugmenter {
///     fn augment<'a>(
///         &self,
///         _context: &RenderContext<'a>,
///         fields: &mut JsonFields<'a>,
///     ) -> Result<(), RenderError> {
///         fields.insert("scope", "openid profile")
///     }
/// }
/// ```
pub trait ResponseAugmenter: Send + Sync {
    /// Appends members for the response described by `context` to `fields`.
    ///
    /// # Errors
    /// If the members could not be determined or one of them is already present.
    fn augment<'a>(
        &self,
        context: &RenderContext<'a>,
        fields: &mut JsonFields<'a>,
    ) -> Result<(), RenderError>;
}

/// Creates OpenID Connect identity tokens.
pub trait IdTokenIssuer: Send + Sync {
    /// Creates an encoded identity token for the response described by `context`.
    ///
    /// # Errors
    /// If no identity token could be created.
    fn issue_id_token(&self, context: &RenderContext<'_>) -> Result<String, RenderError>;
}

/// Adds an `id_token` member to responses rendered for [`ResponseType::IdTokenToken`].
///
/// Responses for any other response type are left untouched.
#[derive(Debug, Clone)]
pub struct IdTokenAugmenter<I> {
    issuer: I,
}

impl<I> IdTokenAugmenter<I>
where
    I: IdTokenIssuer,
{
    /// Creates a new augmenter which obtains identity tokens from `issuer`.
    pub fn new(issuer: I) -> IdTokenAugmenter<I> {
        IdTokenAugmenter { issuer }
    }
}

impl<I> ResponseAugmenter for IdTokenAugmenter<I>
where
    I: IdTokenIssuer,
{
    fn augment<'a>(
        &self,
        context: &RenderContext<'a>,
        fields: &mut JsonFields<'a>,
    ) -> Result<(), RenderError> {
        if context.response_type != ResponseType::IdTokenToken {
            return Ok(());
        }
        let id_token = self.issuer.issue_id_token(context)?;
        fields.insert(ID_TOKEN, id_token)
    }
}
