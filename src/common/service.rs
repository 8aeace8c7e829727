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

//! Read-only context about the client, the relying party and the request a response is
//! rendered for.
//!
//! The base renderer only uses these for logging; response augmenters may use them to
//! customize the response per client.

use serde::{Deserialize, Serialize};

/// An OAuth 2.0 client as registered with the server.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
pub struct RegisteredService {
    /// Numeric identifier of the registration.
    pub id: i64,

    /// The client identifier as described in section 2.2 of
    /// [RFC 6749](https://www.rfc-editor.org/rfc/rfc6749.html).
    pub client_id: String,

    /// Human-readable name of the client.
    pub name: String,
}

impl RegisteredService {
    /// Creates a new registration with the given `id`, `client_id` and `name`.
    pub fn new<C, N>(id: i64, client_id: C, name: N) -> RegisteredService
    where
        C: Into<String>,
        N: Into<String>,
    {
        RegisteredService {
            id,
            client_id: client_id.into(),
            name: name.into(),
        }
    }
}

/// The relying-party service a token is issued for.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
pub struct Service {
    /// Identifier of the service, usually its URL.
    pub id: String,
}

impl Service {
    /// Creates a new service identified by `id`.
    pub fn new<T>(id: T) -> Service
    where
        T: Into<String>,
    {
        Service { id: id.into() }
    }
}

/// Information about the inbound HTTP request.
///
/// The request body is never available here.
#[derive(Debug, PartialEq, Eq, Clone, Default, Hash)]
pub struct RequestContext {
    /// Identifier used to correlate log entries belonging to the same request.
    pub request_id: Option<String>,

    /// Address of the remote peer.
    pub remote_addr: Option<String>,
}

impl RequestContext {
    /// Creates a context without any information.
    #[must_use]
    pub fn new() -> RequestContext {
        RequestContext::default()
    }

    /// Sets the request identifier.
    #[must_use]
    pub fn with_request_id<T>(mut self, request_id: T) -> RequestContext
    where
        T: Into<String>,
    {
        self.request_id = Some(request_id.into());
        self
    }

    /// Sets the remote address.
    #[must_use]
    pub fn with_remote_addr<T>(mut self, remote_addr: T) -> RequestContext
    where
        T: Into<String>,
    {
        self.remote_addr = Some(remote_addr.into());
        self
    }
}
