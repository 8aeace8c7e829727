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

//! Contains the [`ResponseRenderer`], which writes the JSON body of a token endpoint response,
//! along with the two response shapes it can produce:
//! - [`BearerTokenResponse`], as described in [section 5.1 of RFC 6749](https://www.rfc-editor.org/rfc/rfc6749.html#section-5.1).
//! - [`DeviceCodeResponse`], as described in [section 3.2 of RFC 8628](https://www.rfc-editor.org/rfc/rfc8628.html#section-3.2).
//!
//! A response is always encoded completely in memory before anything reaches the
//! [`ResponseSink`], so a failing render never leaves a truncated JSON object behind.

use erased_serde::Serialize as ErasedSerialize;
use tracing::{debug, error, trace};

use crate::common::constants::fields::{
    ACCESS_TOKEN, DEVICE_CODE, EXPIRES_IN, INTERVAL, REFRESH_TOKEN, TOKEN_TYPE, USER_CODE,
    VERIFICATION_URI,
};
use crate::common::constants::token_types::BEARER;
use crate::common::constants::{APPLICATION_JSON, DEVICE_REQUEST_INTERVAL};
use crate::common::json_map::{json_map_vec, JsonFields, ToJsonMap};
use crate::common::response_type::ResponseType;
use crate::common::service::{RegisteredService, RequestContext, Service};
use crate::config::ServerSettings;
use crate::endpoints::token_result::{AccessToken, RefreshToken, TokenGenerationResult};
use crate::error::RenderError;

pub use augment::{IdTokenAugmenter, IdTokenIssuer, RenderContext, ResponseAugmenter};
pub use sink::{BufferedResponse, ResponseSink};

mod augment;
mod sink;


/// Response to a successful token request for a bearer token.
///
/// # Example
/// For the access token `AT-1`, the refresh token `RT-9` and a lifetime of an hour,
/// the rendered object is:
/// ```text
/// {"access_token":"AT-1","token_type":"Bearer","expires_in":3600,"refresh_token":"RT-9"}
/// ```
/// Without a refresh token, the `refresh_token` member is left out entirely.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BearerTokenResponse<'a> {
    /// The issued access token.
    pub access_token: &'a AccessToken,

    /// Lifetime of the access token in seconds.
    pub expires_in: u64,

    /// The issued refresh token, if any.
    pub refresh_token: Option<&'a RefreshToken>,
}

impl<'a> BearerTokenResponse<'a> {
    /// Creates the response for the given `result` and `expires_in` lifetime.
    ///
    /// # Errors
    /// If `result` carries no access token.
    pub fn from_result(
        result: &'a TokenGenerationResult,
        expires_in: u64,
        response_type: ResponseType,
    ) -> Result<BearerTokenResponse<'a>, RenderError> {
        let access_token = result
            .access_token()
            .ok_or_else(|| RenderError::missing_field(response_type, ACCESS_TOKEN))?;
        Ok(BearerTokenResponse {
            access_token,
            expires_in,
            refresh_token: result.refresh_token(),
        })
    }
}

/// Response to a device authorization request.
///
/// The `interval` member is always [`DEVICE_REQUEST_INTERVAL`].
///
/// # Example
/// ```text
/// {"verification_uri":"https://idp.example.org/cas/oauth2.0/device_authz","user_code":"ABCD-1234","device_code":"DEV-999","interval":15}
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DeviceCodeResponse<'a> {
    /// Where the user enters the [`user_code`](DeviceCodeResponse::user_code).
    pub verification_uri: String,

    /// The code the user has to enter.
    pub user_code: &'a str,

    /// The code the device polls the token endpoint with.
    pub device_code: &'a str,
}

impl<'a> DeviceCodeResponse<'a> {
    /// Creates the response for the given `result`, pointing users to the server described
    /// by `settings`.
    ///
    /// # Errors
    /// If `result` lacks either the user code or the device code.
    pub fn from_result(
        result: &'a TokenGenerationResult,
        settings: &ServerSettings,
    ) -> Result<DeviceCodeResponse<'a>, RenderError> {
        let user_code = result
            .user_code()
            .ok_or_else(|| RenderError::missing_field(ResponseType::DeviceCode, USER_CODE))?;
        let device_code = result
            .device_code()
            .ok_or_else(|| RenderError::missing_field(ResponseType::DeviceCode, DEVICE_CODE))?;
        Ok(DeviceCodeResponse {
            verification_uri: settings.verification_uri(),
            user_code,
            device_code,
        })
    }
}

impl ToJsonMap for BearerTokenResponse<'_> {
    fn to_json_map(&self) -> Vec<(&'static str, Option<Box<dyn ErasedSerialize + '_>>)> {
        json_map_vec! {
            ACCESS_TOKEN => Some(self.access_token),
            TOKEN_TYPE => Some(BEARER),
            EXPIRES_IN => Some(self.expires_in),
            REFRESH_TOKEN => self.refresh_token
        }
    }
}

impl ToJsonMap for DeviceCodeResponse<'_> {
    fn to_json_map(&self) -> Vec<(&'static str, Option<Box<dyn ErasedSerialize + '_>>)> {
        json_map_vec! {
            VERIFICATION_URI => Some(&self.verification_uri),
            USER_CODE => Some(self.user_code),
            DEVICE_CODE => Some(self.device_code),
            INTERVAL => Some(DEVICE_REQUEST_INTERVAL)
        }
    }
}

/// Renders the JSON body of token endpoint responses.
///
/// A renderer holds no per-request state. Build it once at startup and share it (e.g. in an
/// [`Arc`](std::sync::Arc)) between all request handlers.
///
/// # Example
/// ```
/// # use oauth2_response::{
/// #     BufferedResponse, RegisteredService, RequestContext, ResponseRenderer, ResponseType,
/// #     Service, ServerSettings, TokenGenerationResult,
/// # };
/// # use std::error::Error;
/// let renderer = ResponseRenderer::new(ServerSettings::new("https://idp.example.org/cas"));
/// let result = TokenGenerationResult::builder().access_token("AT-123").build()?;
/// let mut response = BufferedResponse::new();
/// renderer.generate(
///     &mut response,
///     &RequestContext::new(),
///     &RegisteredService::new(1, "client", "Client"),
///     &Service::new("https://app.example.org"),
///     &result,
///     7200,
///     ResponseType::Token,
/// )?;
/// assert_eq!(response.content_type(), Some("application/json"));
/// assert_eq!(
///     response.body_str(),
///     Some(r#"{"access_token":"AT-123","token_type":"Bearer","expires_in":7200}"#)
/// );
/// # Ok::<(), Box<dyn Error>>(())
/// ```
pub struct ResponseRenderer {
    settings: ServerSettings,
    augmenters: Vec<Box<dyn ResponseAugmenter>>,
}

impl ResponseRenderer {
    /// Creates a renderer for the server described by `settings`, without any augmenters.
    #[must_use]
    pub fn new(settings: ServerSettings) -> ResponseRenderer {
        ResponseRenderer {
            settings,
            augmenters: Vec::new(),
        }
    }

    /// Registers `augmenter` to run after all previously registered ones.
    #[must_use]
    pub fn with_augmenter<A>(mut self, augmenter: A) -> ResponseRenderer
    where
        A: ResponseAugmenter + 'static,
    {
        self.augmenters.push(Box::new(augmenter));
        self
    }

    /// The settings this renderer was created with.
    #[must_use]
    pub fn settings(&self) -> &ServerSettings {
        &self.settings
    }

    /// Writes the response for `result` to `sink`.
    ///
    /// For [`ResponseType::DeviceCode`], a [`DeviceCodeResponse`] is written. Every other
    /// response type results in a [`BearerTokenResponse`] with an `expires_in` of `timeout`,
    /// extended by the registered augmenters.
    ///
    /// The content type of `sink` is set to `application/json` before the body is written.
    /// If this returns an error other than [`RenderError::Transport`], `sink` has not been
    /// touched at all.
    ///
    /// # Errors
    /// - [`RenderError::MissingField`] if `result` lacks material the response type requires.
    /// - [`RenderError::DuplicateField`] or [`RenderError::Augmenter`] if an augmenter failed.
    /// - [`RenderError::Serialization`] if the response could not be encoded.
    /// - [`RenderError::Transport`] if writing to `sink` failed.
    #[allow(clippy::too_many_arguments)]
    pub fn generate<S>(
        &self,
        sink: &mut S,
        request: &RequestContext,
        registered_service: &RegisteredService,
        service: &Service,
        result: &TokenGenerationResult,
        timeout: u64,
        response_type: ResponseType,
    ) -> Result<(), RenderError>
    where
        S: ResponseSink + ?Sized,
    {
        let context = RenderContext {
            request,
            registered_service,
            service,
            result,
            timeout,
            response_type,
        };
        let body = self.render(&context).map_err(|e| {
            error!(
                %response_type,
                client_id = %registered_service.client_id,
                request_id = request.request_id.as_deref(),
                "couldn't render token response: {e}"
            );
            e
        })?;
        sink.set_content_type(APPLICATION_JSON);
        sink.write_all(&body)
            .and_then(|()| sink.flush())
            .map_err(|e| {
                error!(
                    %response_type,
                    request_id = request.request_id.as_deref(),
                    "couldn't write token response: {e}"
                );
                RenderError::Transport(e)
            })?;
        trace!(bytes = body.len(), "token response written");
        Ok(())
    }

    fn render(&self, context: &RenderContext<'_>) -> Result<Vec<u8>, RenderError> {
        if context.response_type == ResponseType::DeviceCode {
            debug!(
                client_id = %context.registered_service.client_id,
                "rendering device authorization response"
            );
            self.render_device_code(context)
        } else {
            debug!(
                response_type = %context.response_type,
                client_id = %context.registered_service.client_id,
                "rendering bearer token response"
            );
            self.render_bearer_token(context)
        }
    }

    fn render_device_code(&self, context: &RenderContext<'_>) -> Result<Vec<u8>, RenderError> {
        DeviceCodeResponse::from_result(context.result, &self.settings)?.to_json_vec()
    }

    fn render_bearer_token(&self, context: &RenderContext<'_>) -> Result<Vec<u8>, RenderError> {
        let response =
            BearerTokenResponse::from_result(context.result, context.timeout, context.response_type)?;
        let mut fields = JsonFields::from_map(&response);
        for augmenter in &self.augmenters {
            augmenter.augment(context, &mut fields)?;
        }
        fields.to_json_vec()
    }
}

impl core::fmt::Debug for ResponseRenderer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResponseRenderer")
            .field("settings", &self.settings)
            .field("augmenters", &self.augmenters.len())
            .finish()
    }
}
