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

//! Server settings consumed by the response renderers.
//!
//! Settings can be constructed directly or loaded from a TOML document:
//! ```
//! # use oauth2_response::config::Settings;
//! # use oauth2_response::error::ConfigError;
//! let settings = Settings::from_toml_str(r#"
//!     [server]
//!     prefix = "https://idp.example.org/cas"
//! "#)?;
//! assert_eq!(settings.server.prefix, "https://idp.example.org/cas");
//! # Ok::<(), ConfigError>(())
//! ```

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::constants::paths::{BASE_OAUTH20_URL, DEVICE_AUTHZ_URL};
use crate::error::ConfigError;

#[cfg(test)]
mod tests;

/// Settings describing where the server is reachable.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Base URL of the server, e.g. `https://idp.example.org/cas`.
    ///
    /// A trailing slash is allowed and ignored when building URLs.
    pub prefix: String,
}

impl ServerSettings {
    /// Creates new settings for a server reachable at `prefix`.
    pub fn new<T>(prefix: T) -> ServerSettings
    where
        T: Into<String>,
    {
        ServerSettings {
            prefix: prefix.into(),
        }
    }

    /// Returns the URI users visit to enter their user code during the device
    /// authorization grant.
    ///
    /// # Example
    /// ```
    /// # use oauth2_response::config::ServerSettings;
    /// let settings = ServerSettings::new("https://idp.example.org/cas/");
    /// assert_eq!(settings.verification_uri(), "https://idp.example.org/cas/oauth2.0/device_authz");
    /// ```
    #[must_use]
    pub fn verification_uri(&self) -> String {
        format!(
            "{}{BASE_OAUTH20_URL}/{DEVICE_AUTHZ_URL}",
            self.prefix.trim_end_matches('/')
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.trim().is_empty() {
            Err(ConfigError::Invalid("server prefix must not be empty".to_string()))
        } else if self.prefix.chars().any(char::is_whitespace) {
            Err(ConfigError::Invalid(
                "server prefix must not contain whitespace".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

/// Root of the settings document.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// The `[server]` table.
    pub server: ServerSettings,
}

impl Settings {
    /// Parses and validates settings from the TOML document `source`.
    ///
    /// # Errors
    /// If `source` is not valid TOML, lacks the `[server]` table, or has an empty prefix.
    pub fn from_toml_str(source: &str) -> Result<Settings, ConfigError> {
        let settings: Settings = toml::from_str(source)?;
        settings.server.validate()?;
        Ok(settings)
    }
}

impl FromStr for Settings {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Settings::from_toml_str(s)
    }
}
