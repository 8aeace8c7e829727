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

use rstest::rstest;

use super::*;

#[rstest]
#[case("https://idp.example.org/cas")]
#[case("https://idp.example.org/cas/")]
#[case("https://idp.example.org/cas//")]
fn test_verification_uri_slashes(#[case] prefix: &str) {
    assert_eq!(
        ServerSettings::new(prefix).verification_uri(),
        "https://idp.example.org/cas/oauth2.0/device_authz"
    );
}

#[test]
fn test_verification_uri_bare_host() {
    assert_eq!(
        ServerSettings::new("http://localhost:8443").verification_uri(),
        "http://localhost:8443/oauth2.0/device_authz"
    );
}

#[test]
fn test_load_from_toml() -> Result<(), String> {
    let settings: Settings = "[server]\nprefix = \"https://sso.example.com\"\n"
        .parse()
        .map_err(|x: ConfigError| x.to_string())?;
    assert_eq!(settings.server, ServerSettings::new("https://sso.example.com"));
    Ok(())
}

#[rstest]
#[case("")]
#[case("[server]\n")]
#[case("[server]\nprefix = \"\"\n")]
#[case("[server]\nprefix = \"https://a b\"\n")]
#[case("[server]\nprefix = 42\n")]
fn test_invalid_settings(#[case] source: &str) {
    assert!(Settings::from_toml_str(source).is_err());
}
