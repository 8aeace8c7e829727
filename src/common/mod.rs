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

//! Contains data types and constants shared by the response renderers.
//!
//! # Layout
//! - [`constants`]: JSON member names, endpoint paths and other fixed protocol values.
//! - [`json_map`]: The ordered JSON object representation responses are serialized from.
//! - [`response_type`]: The [`ResponseType`](response_type::ResponseType) discriminator.
//! - [`service`]: Read-only client, service and request context.

pub mod constants;
pub mod json_map;
pub mod response_type;
pub mod service;

#[cfg(test)]
pub(crate) mod test_helper;
