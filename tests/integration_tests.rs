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

use std::io::{Error, ErrorKind, Write};
use std::sync::Arc;
use std::thread;

use oauth2_response::{
    BufferedResponse, IdTokenAugmenter, IdTokenIssuer, RegisteredService, RenderContext,
    RenderError, RequestContext, ResponseRenderer, ResponseSink, ResponseType, Service, Settings,
    TokenGenerationResult,
};

/// Sink which behaves like a connection whose peer went away.
#[derive(Default)]
struct DisconnectedSink {
    content_type: Option<String>,
    attempted: usize,
}

impl Write for DisconnectedSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.attempted += buf.len();
        Err(Error::new(ErrorKind::BrokenPipe, "client disconnected"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl ResponseSink for DisconnectedSink {
    fn set_content_type(&mut self, content_type: &str) {
        self.content_type = Some(content_type.to_string());
    }
}

struct SubjectIssuer;

impl IdTokenIssuer for SubjectIssuer {
    fn issue_id_token(&self, context: &RenderContext<'_>) -> Result<String, RenderError> {
        Ok(format!("idt-for-{}", context.service.id))
    }
}

fn renderer_from_settings() -> Result<ResponseRenderer, String> {
    let settings: Settings = "[server]\nprefix = \"https://idp.example.org/cas/\"\n"
        .parse()
        .map_err(|x: oauth2_response::error::ConfigError| x.to_string())?;
    Ok(ResponseRenderer::new(settings.server).with_augmenter(IdTokenAugmenter::new(SubjectIssuer)))
}

fn generate(
    renderer: &ResponseRenderer,
    result: &TokenGenerationResult,
    timeout: u64,
    response_type: ResponseType,
) -> Result<BufferedResponse, RenderError> {
    let mut response = BufferedResponse::new();
    renderer.generate(
        &mut response,
        &RequestContext::new()
            .with_request_id("4711")
            .with_remote_addr("192.0.2.1"),
        &RegisteredService::new(42, "myclient", "My Client"),
        &Service::new("https://app.example.org"),
        result,
        timeout,
        response_type,
    )?;
    Ok(response)
}

#[test]
fn test_implicit_token_response() -> Result<(), String> {
    let renderer = renderer_from_settings()?;
    let result = TokenGenerationResult::builder()
        .access_token("AT-123")
        .build()
        .map_err(|x| x.to_string())?;
    let response = generate(&renderer, &result, 7200, ResponseType::Token).map_err(|x| x.to_string())?;
    assert_eq!(response.content_type(), Some("application/json"));
    assert_eq!(
        response.body_str(),
        Some(r#"{"access_token":"AT-123","token_type":"Bearer","expires_in":7200}"#)
    );
    Ok(())
}

#[test]
fn test_hybrid_token_response() -> Result<(), String> {
    let renderer = renderer_from_settings()?;
    let result = TokenGenerationResult::builder()
        .access_token("AT-1")
        .refresh_token("RT-9")
        .build()
        .map_err(|x| x.to_string())?;
    let response =
        generate(&renderer, &result, 3600, ResponseType::IdTokenToken).map_err(|x| x.to_string())?;
    assert_eq!(
        response.body_str(),
        Some(r#"{"access_token":"AT-1","token_type":"Bearer","expires_in":3600,"refresh_token":"RT-9","id_token":"idt-for-https://app.example.org"}"#)
    );
    Ok(())
}

#[test]
fn test_device_response_with_trailing_slash_prefix() -> Result<(), String> {
    let renderer = renderer_from_settings()?;
    let result = TokenGenerationResult::builder()
        .device_code("DEV-999")
        .user_code("ABCD-1234")
        .build()
        .map_err(|x| x.to_string())?;
    let response =
        generate(&renderer, &result, 7200, ResponseType::DeviceCode).map_err(|x| x.to_string())?;
    assert_eq!(
        response.body_str(),
        Some(r#"{"verification_uri":"https://idp.example.org/cas/oauth2.0/device_authz","user_code":"ABCD-1234","device_code":"DEV-999","interval":15}"#)
    );
    Ok(())
}

#[test]
fn test_device_response_without_user_code() -> Result<(), String> {
    let renderer = renderer_from_settings()?;
    let result = TokenGenerationResult::builder()
        .device_code("DEV-999")
        .build()
        .map_err(|x| x.to_string())?;
    let error = generate(&renderer, &result, 7200, ResponseType::DeviceCode)
        .expect_err("rendered a device response without user code");
    assert!(matches!(
        error,
        RenderError::MissingField {
            response_type: ResponseType::DeviceCode,
            field: "user_code"
        }
    ));
    assert!(!error.is_client_visible());
    Ok(())
}

#[test]
fn test_disconnected_client_surfaces_transport_error() -> Result<(), String> {
    let renderer = renderer_from_settings()?;
    let result = TokenGenerationResult::builder()
        .access_token("AT-1")
        .build()
        .map_err(|x| x.to_string())?;
    let mut sink = DisconnectedSink::default();
    let error = renderer
        .generate(
            &mut sink,
            &RequestContext::new(),
            &RegisteredService::new(42, "myclient", "My Client"),
            &Service::new("https://app.example.org"),
            &result,
            60,
            ResponseType::Token,
        )
        .expect_err("write to a disconnected client succeeded");
    assert!(matches!(&error, RenderError::Transport(e) if e.kind() == ErrorKind::BrokenPipe));
    assert_eq!(sink.content_type.as_deref(), Some("application/json"));
    assert!(sink.attempted > 0);
    Ok(())
}

#[test]
fn test_renderer_shared_between_threads() -> Result<(), String> {
    let renderer = Arc::new(renderer_from_settings()?);
    let handles: Vec<_> = (0..8u64)
        .map(|i| {
            let renderer = Arc::clone(&renderer);
            thread::spawn(move || -> Result<(), String> {
                let result = TokenGenerationResult::builder()
                    .access_token(format!("AT-{i}"))
                    .build()
                    .map_err(|x| x.to_string())?;
                let response = generate(&renderer, &result, i, ResponseType::Token)
                    .map_err(|x| x.to_string())?;
                let expected =
                    format!(r#"{{"access_token":"AT-{i}","token_type":"Bearer","expires_in":{i}}}"#);
                if response.body_str() == Some(expected.as_str()) {
                    Ok(())
                } else {
                    Err(format!("unexpected body {:?}", response.body_str()))
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().map_err(|_| "thread panicked".to_string())??;
    }
    Ok(())
}
