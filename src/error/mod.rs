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

//! This module contains common error types used across this crate.

use core::fmt::{Display, Formatter};

use crate::common::response_type::ResponseType;

/// Error type used when a string can't be parsed into a [`ResponseType`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct InvalidResponseTypeError {
    /// The value which was not a known response type.
    value: String,
}

impl Display for InvalidResponseTypeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "'{}' is not a supported response type", self.value)
    }
}

impl InvalidResponseTypeError {
    /// Creates a new error for the given unparseable `value`.
    pub fn new<T>(value: T) -> InvalidResponseTypeError
    where
        T: Into<String>,
    {
        InvalidResponseTypeError {
            value: value.into(),
        }
    }

    /// Returns the value which could not be parsed.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Error type used when the server settings could not be loaded.
#[derive(Debug)]
pub enum ConfigError {
    /// The settings document is not valid TOML or does not match the expected layout.
    Parse(toml::de::Error),
    /// The settings were parsed, but contain an unusable value.
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "couldn't parse settings: {e}"),
            ConfigError::Invalid(s) => write!(f, "invalid settings: {s}"),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parse(value)
    }
}

/// Error type used when rendering a token endpoint response failed.
///
/// None of these errors are meant to be shown to the client. Callers should answer
/// with a generic internal server error; see [`RenderError::is_client_visible`].
#[derive(Debug)]
pub enum RenderError {
    /// The token generation result lacks a field which the selected response type requires.
    ///
    /// This indicates a bug in the issuing component, not a bad client request.
    MissingField {
        /// Response type which was being rendered.
        response_type: ResponseType,
        /// Name of the missing field.
        field: &'static str,
    },

    /// An augmenter tried to add a field which is already part of the response.
    DuplicateField(String),

    /// The response could not be encoded as JSON.
    Serialization(serde_json::Error),

    /// Writing the response to the sink failed, e.g. because the client disconnected.
    Transport(std::io::Error),

    /// An augmenter (or a collaborator it uses) failed, with a message describing why.
    Augmenter(String),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            RenderError::MissingField {
                response_type,
                field,
            } => write!(
                f,
                "token generation result for response type '{response_type}' is missing {field}"
            ),
            RenderError::DuplicateField(name) => {
                write!(f, "field {name} is already present in the response")
            }
            RenderError::Serialization(e) => write!(f, "couldn't serialize response: {e}"),
            RenderError::Transport(e) => write!(f, "couldn't write response: {e}"),
            RenderError::Augmenter(s) => write!(f, "response augmentation failed: {s}"),
        }
    }
}

impl RenderError {
    /// Creates a new contract violation error for the given `response_type` and missing `field`.
    #[must_use]
    pub fn missing_field(response_type: ResponseType, field: &'static str) -> RenderError {
        RenderError::MissingField {
            response_type,
            field,
        }
    }

    /// Creates a new augmenter error with the given `message`.
    pub fn augmenter<T>(message: T) -> RenderError
    where
        T: Into<String>,
    {
        RenderError::Augmenter(message.into())
    }

    /// Whether details of this error may be included in the response body.
    ///
    /// Always `false`: every render failure is reported to the client as a generic
    /// internal error.
    #[must_use]
    pub fn is_client_visible(&self) -> bool {
        false
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(value: serde_json::Error) -> Self {
        RenderError::Serialization(value)
    }
}

impl From<std::io::Error> for RenderError {
    fn from(value: std::io::Error) -> Self {
        RenderError::Transport(value)
    }
}

mod std_error {
    use std::error::Error;

    use super::*;

    impl Error for InvalidResponseTypeError {}

    impl Error for ConfigError {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            match self {
                ConfigError::Parse(e) => Some(e),
                ConfigError::Invalid(_) => None,
            }
        }
    }

    impl Error for RenderError {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            match self {
                RenderError::Serialization(e) => Some(e),
                RenderError::Transport(e) => Some(e),
                _ => None,
            }
        }
    }
}
