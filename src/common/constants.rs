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

//! Contains various constants used in OAuth 2.0 token endpoint responses.

/// Names of the JSON members written into token endpoint responses.
pub mod fields {
    /// See section 5.1 of [RFC 6749](https://www.rfc-editor.org/rfc/rfc6749.html).
    pub const ACCESS_TOKEN: &str = "access_token";

    /// See section 5.1 of [RFC 6749](https://www.rfc-editor.org/rfc/rfc6749.html).
    pub const TOKEN_TYPE: &str = "token_type";

    /// See section 5.1 of [RFC 6749](https://www.rfc-editor.org/rfc/rfc6749.html).
    pub const EXPIRES_IN: &str = "expires_in";

    /// See section 5.1 of [RFC 6749](https://www.rfc-editor.org/rfc/rfc6749.html).
    pub const REFRESH_TOKEN: &str = "refresh_token";

    /// See section 3.2.2.5 of [OpenID Connect Core 1.0](https://openid.net/specs/openid-connect-core-1_0.html).
    pub const ID_TOKEN: &str = "id_token";

    /// See section 3.2 of [RFC 8628](https://www.rfc-editor.org/rfc/rfc8628.html).
    pub const VERIFICATION_URI: &str = "verification_uri";

    /// See section 3.2 of [RFC 8628](https://www.rfc-editor.org/rfc/rfc8628.html).
    pub const USER_CODE: &str = "user_code";

    /// See section 3.2 of [RFC 8628](https://www.rfc-editor.org/rfc/rfc8628.html).
    pub const DEVICE_CODE: &str = "device_code";

    /// See section 3.2 of [RFC 8628](https://www.rfc-editor.org/rfc/rfc8628.html).
    pub const INTERVAL: &str = "interval";
}

/// Path segments of the OAuth 2.0 endpoints exposed by the server.
pub mod paths {
    /// Base path under which all OAuth 2.0 endpoints live, relative to the server prefix.
    pub const BASE_OAUTH20_URL: &str = "/oauth2.0";

    /// Device authorization endpoint, relative to [`BASE_OAUTH20_URL`].
    pub const DEVICE_AUTHZ_URL: &str = "device_authz";
}

/// Token types, as registered in section 11.1 of [RFC 6749](https://www.rfc-editor.org/rfc/rfc6749.html#section-11.1).
pub mod token_types {
    /// Bearer token type as defined in [RFC 6750](https://www.rfc-editor.org/rfc/rfc6750).
    pub const BEARER: &str = "Bearer";
}

/// Minimum number of seconds a device has to wait between polling requests.
///
/// See section 3.2 of [RFC 8628](https://www.rfc-editor.org/rfc/rfc8628.html).
pub const DEVICE_REQUEST_INTERVAL: u32 = 15;

/// Content type of every response rendered by this crate.
pub const APPLICATION_JSON: &str = "application/json";
