//! ocpu-http — blocking HTTP transport for the ocpu invocation engine.
//!
//! # Quick start
//! ```rust,no_run
//! use std::sync::Arc;
//! use ocpu_core::{RpcEngine, RuntimeConfig};
//! use ocpu_http::HttpTransport;
//!
//! let runtime = RuntimeConfig::parse("http://localhost:9999/ocpu").unwrap();
//! let engine = RpcEngine::new(runtime, Arc::new(HttpTransport::with_defaults().unwrap()));
//! let out = engine.invoke("stats", "rnorm", r#"{"n":3}"#);
//! ```

pub mod client;

pub use client::{BuildError, HttpClientConfig, HttpTransport};
