//! ocpu-core — invocation engine for remote OpenCPU functions.
//!
//! # Overview
//!
//! An OpenCPU server exposes R functions over HTTP: a `POST` of a JSON body to
//! `{base}/library/{package}/R/{function}/json?digits=6` runs the function and
//! answers with its JSON-encoded result. This crate defines:
//!
//! - [`RuntimeConfig`] — validated, immutable base address
//! - [`endpoint`] module — the path templates of the OpenCPU API
//! - [`Transport`] — the blocking HTTP seam (implemented in `ocpu-http`)
//! - [`classify`] module — status code → outcome table
//! - [`RpcEngine`] — `invoke(package, function, input) -> output`
//! - [`RpcError`] / [`ErrorKind`] — the failure taxonomy

pub mod classify;
pub mod endpoint;
pub mod engine;
pub mod error;
pub mod runtime;
pub mod transport;

pub use endpoint::{PackageResource, PackageSource};
pub use engine::RpcEngine;
pub use error::{ConfigError, ErrorKind, RpcError, TransportError};
pub use runtime::RuntimeConfig;
pub use transport::{RawResponse, Transport};
