//! Contains the data types and the renderer for token endpoint responses.
//!
//! These responses are described in section 5.1 of
//! [RFC 6749](https://www.rfc-editor.org/rfc/rfc6749.html#section-5.1) and section 3.2 of
//! [RFC 8628](https://www.rfc-editor.org/rfc/rfc8628.html#section-3.2).
//!
//! # Layout
//! - [`token_result`]: Contains the token material handed to the renderer.
//! - [`token_resp`]: Contains the renderer and the response shapes it produces.

pub mod token_resp;
pub mod token_result;
