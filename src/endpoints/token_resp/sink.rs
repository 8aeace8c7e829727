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

use std::io::Write;

/// The writable side of an HTTP response.
///
/// Implement this for the response type of your HTTP transport. Write errors (e.g. caused by
/// a client disconnecting) are passed on to the caller of
/// [`ResponseRenderer::generate`](super::ResponseRenderer::generate).
pub trait ResponseSink: Write {
    /// Sets the `Content-Type` of the response.
    fn set_content_type(&mut self, content_type: &str);
}

/// A response kept entirely in memory.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct BufferedResponse {
    content_type: Option<String>,
    body: Vec<u8>,
}

impl BufferedResponse {
    /// Creates an empty response without a content type.
    #[must_use]
    pub fn new() -> BufferedResponse {
        BufferedResponse::default()
    }

    /// The content type set so far, if any.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// The bytes written so far.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The bytes written so far, if they are valid UTF-8.
    #[must_use]
    pub fn body_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.body).ok()
    }

    /// Consumes this response, returning its body.
    #[must_use]
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

impl Write for BufferedResponse {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl ResponseSink for BufferedResponse {
    fn set_content_type(&mut self, content_type: &str) {
        self.content_type = Some(content_type.to_string());
    }
}
