//! The RPC invocation engine: resolve → execute → classify.

use std::sync::Arc;

use tracing::Span;

use crate::classify::classify;
use crate::endpoint::{self, PackageSource};
use crate::error::RpcError;
use crate::runtime::RuntimeConfig;
use crate::transport::Transport;

/// Invokes remote functions on one RPC service.
///
/// Holds only immutable configuration; cloning is cheap and clones share the
/// transport.
#[derive(Clone)]
pub struct RpcEngine {
    runtime: RuntimeConfig,
    transport: Arc<dyn Transport>,
    span: Span,
}

impl RpcEngine {
    pub fn new(runtime: RuntimeConfig, transport: Arc<dyn Transport>) -> Self {
        let span = tracing::info_span!("ocpu_rpc", base = %runtime.redacted_base());
        Self {
            runtime,
            transport,
            span,
        }
    }

    /// Emit this engine's events under `span` instead of the default
    /// `ocpu_rpc` span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn runtime(&self) -> &RuntimeConfig {
        &self.runtime
    }

    /// Call `function` from the globally installed `package` with a JSON
    /// input, returning the server's JSON output verbatim.
    pub fn invoke(&self, package: &str, function: &str, input: &str) -> Result<String, RpcError> {
        self.invoke_from(&PackageSource::Library, package, function, input)
    }

    /// Same as [`invoke`](Self::invoke) for a package under `source`.
    pub fn invoke_from(
        &self,
        source: &PackageSource,
        package: &str,
        function: &str,
        input: &str,
    ) -> Result<String, RpcError> {
        let _entered = self.span.enter();
        let url = endpoint::resolve_from(&self.runtime, source, package, function);
        let shown = url.replacen(self.runtime.base(), self.runtime.redacted_base(), 1);

        tracing::info!(url = %shown, transport = self.transport.name(), "sending request to RPC server");

        let outcome = self
            .transport
            .execute(&url, input)
            .map_err(|e| {
                tracing::error!(url = %shown, error = %e, "cannot execute the HTTP request");
                RpcError::from(e)
            })
            .and_then(|response| {
                let status = response.status;
                classify(response).map_err(|e| {
                    tracing::error!(url = %shown, status, kind = %e.kind(), error = %e, "RPC call failed");
                    e
                })
            });

        if let Ok(body) = &outcome {
            tracing::info!(url = %shown, bytes = body.len(), "response received successfully");
        }
        outcome
    }
}

impl std::fmt::Debug for RpcEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcEngine")
            .field("runtime", &self.runtime)
            .field("transport", &self.transport.name())
            .finish()
    }
}
