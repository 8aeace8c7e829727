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

//! Contains a few helper functions intended purely for tests.
//! Not intended to be used outside of this crate.

use core::fmt::Debug;

use crate::common::json_map::ToJsonMap;
use crate::common::service::{RegisteredService, RequestContext, Service};

/// Helper function for tests which ensures that [`value`] serializes to exactly [`expected_json`]
/// and that the result is a JSON object.
///
/// # Errors
/// This will return an error message if any of the following is true:
/// - Serialization of [`value`] failed.
/// - The serialized [`value`] is not valid UTF-8 or not a JSON object.
///
/// # Panics
/// If the serialized [`value`] differs from [`expected_json`].
pub(crate) fn expect_json<T>(value: &T, expected_json: &str) -> Result<(), String>
where
    T: ToJsonMap + Debug,
{
    let result = value.to_json_vec().map_err(|x| x.to_string())?;
    let result = String::from_utf8(result).map_err(|x| x.to_string())?;
    println!("Result: {result}, Original: {value:?}");
    let parsed: serde_json::Value = serde_json::from_str(&result).map_err(|x| x.to_string())?;
    if !parsed.is_object() {
        return Err("Invalid value: Not a JSON object!".to_string());
    }
    assert_eq!(result, expected_json);
    Ok(())
}

/// Returns the request and client context used by most renderer tests.
pub(crate) fn test_context() -> (RequestContext, RegisteredService, Service) {
    (
        RequestContext::new().with_request_id("req-1"),
        RegisteredService::new(1, "test_client", "Test Client"),
        Service::new("https://rp.example.org/app"),
    )
}
