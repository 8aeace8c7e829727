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

use serde::ser::Error as _;

use super::*;

struct Unserializable;

impl Serialize for Unserializable {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Err(S::Error::custom("refusing to serialize"))
    }
}

#[test]
fn test_insertion_order_is_kept() -> Result<(), String> {
    let mut fields = JsonFields::new();
    fields.insert("zeta", 1).map_err(|x| x.to_string())?;
    fields.insert("alpha", "a").map_err(|x| x.to_string())?;
    fields.insert(String::from("mid"), true).map_err(|x| x.to_string())?;
    assert_eq!(fields.names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    let encoded = fields.to_json_vec().map_err(|x| x.to_string())?;
    assert_eq!(
        String::from_utf8(encoded).map_err(|x| x.to_string())?,
        r#"{"zeta":1,"alpha":"a","mid":true}"#
    );
    Ok(())
}

#[test]
fn test_duplicate_rejected() -> Result<(), String> {
    let mut fields = JsonFields::new();
    fields.insert("access_token", "first").map_err(|x| x.to_string())?;
    let error = fields.insert("access_token", "second");
    assert!(matches!(error, Err(RenderError::DuplicateField(ref name)) if name == "access_token"));
    assert_eq!(fields.len(), 1);
    Ok(())
}

#[test]
fn test_empty_object() -> Result<(), String> {
    let fields = JsonFields::new();
    assert!(fields.is_empty());
    assert_eq!(fields.to_json_vec().map_err(|x| x.to_string())?, b"{}");
    Ok(())
}

#[test]
fn test_serialization_failure_yields_nothing() {
    let mut fields = JsonFields::new();
    fields.insert("ok", "value").expect("first insert failed");
    fields.insert("broken", Unserializable).expect("second insert failed");
    assert!(matches!(
        fields.to_json_vec(),
        Err(RenderError::Serialization(_))
    ));
}

#[test]
fn test_strings_are_escaped() -> Result<(), String> {
    let mut fields = JsonFields::new();
    fields
        .insert("user_code", "AB\"CD\\12\n")
        .map_err(|x| x.to_string())?;
    let encoded = fields.to_json_vec().map_err(|x| x.to_string())?;
    let parsed: serde_json::Value = serde_json::from_slice(&encoded).map_err(|x| x.to_string())?;
    assert_eq!(parsed["user_code"], "AB\"CD\\12\n");
    Ok(())
}
