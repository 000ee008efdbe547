// ABOUTME: HTTP middleware configuration shared by all routes
// ABOUTME: Currently holds the CORS layer setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// CORS configuration for the HTTP API
pub mod cors;
