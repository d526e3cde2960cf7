//! ocpu-program — run remote R functions as local programs.
//!
//! A [`Program`] consumes a [`Problem`] and produces a [`Solution`].
//! [`RpcProgram`] implements it by calling one function on an OpenCPU server
//! through an [`RpcEngine`](ocpu_core::RpcEngine). All failures surface as a
//! single [`ProgramError`] whose message is the one reported by the RPC layer.
//!
//! # Quick start
//! ```rust,no_run
//! use std::sync::Arc;
//! use ocpu_core::{RpcEngine, RuntimeConfig};
//! use ocpu_http::HttpTransport;
//! use ocpu_program::{Program, RpcProgram};
//! use serde_json::json;
//!
//! let engine = RpcEngine::new(
//!     RuntimeConfig::default(),
//!     Arc::new(HttpTransport::with_defaults().unwrap()),
//! );
//! let rnorm = RpcProgram::new(engine, "stats", "rnorm").unwrap();
//! let solution = rnorm.compute(&json!({"n": 3})).unwrap();
//! println!("{}", solution.to_json());
//! ```

pub mod error;
pub mod handle;
pub mod problem;
pub mod program;
pub mod solution;
pub mod value;

pub use error::ProgramError;
pub use handle::ComputeHandle;
pub use problem::{Arguments, Problem};
pub use program::{Program, RpcProgram};
pub use solution::{ProgramWarning, Solution};
pub use value::Value;
