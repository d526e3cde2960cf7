//! Programs backed by a remote function.

use ocpu_core::endpoint::validate_name;
use ocpu_core::{ConfigError, PackageSource, RpcEngine, RpcError};

use crate::error::ProgramError;
use crate::handle::ComputeHandle;
use crate::problem::Problem;
use crate::solution::Solution;
use crate::value::Value;

/// Turns a [`Problem`] into a [`Solution`].
pub trait Program: Send + Sync {
    fn compute(&self, problem: &dyn Problem) -> Result<Solution, ProgramError>;
}

/// A [`Program`] that runs one function of one package on an RPC server.
///
/// Configuration is fixed at construction; clones share the engine.
#[derive(Debug, Clone)]
pub struct RpcProgram {
    engine: RpcEngine,
    source: PackageSource,
    package: String,
    function: String,
}

impl RpcProgram {
    /// Bind `function` of the globally installed `package`.
    pub fn new(
        engine: RpcEngine,
        package: impl Into<String>,
        function: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::with_source(engine, PackageSource::Library, package, function)
    }

    /// Bind `function` of `package` installed under `source`.
    pub fn with_source(
        engine: RpcEngine,
        source: PackageSource,
        package: impl Into<String>,
        function: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let package = package.into();
        let function = function.into();
        validate_name("package", &package)?;
        validate_name("function", &function)?;
        source.validate()?;

        Ok(Self {
            engine,
            source,
            package,
            function,
        })
    }

    pub fn engine(&self) -> &RpcEngine {
        &self.engine
    }

    pub fn source(&self) -> &PackageSource {
        &self.source
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    /// Run the computation on a blocking worker of the current Tokio runtime.
    ///
    /// The problem is serialized before this returns. Without a running
    /// runtime the handle resolves to an error immediately.
    pub fn compute_async(&self, problem: &dyn Problem) -> ComputeHandle {
        let input = match encode(problem) {
            Ok(input) => input,
            Err(err) => return ComputeHandle::failed(err.into()),
        };
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            return ComputeHandle::failed(ProgramError::new(
                "No async runtime is available to run the computation.",
            ));
        };

        let program = self.clone();
        ComputeHandle::spawned(runtime.spawn_blocking(move || program.run(&input)))
    }

    fn run(&self, input: &str) -> Result<Solution, ProgramError> {
        let data = self
            .engine
            .invoke_from(&self.source, &self.package, &self.function, input)?;
        tracing::debug!(
            package = %self.package,
            function = %self.function,
            output = %data,
            "remote computation finished"
        );

        let value = Value::from_json(&data).map_err(|e| {
            tracing::error!(package = %self.package, function = %self.function, error = %e, "unparseable output");
            ProgramError::new(format!("Cannot parse the computed value: {e}"))
        })?;
        Ok(Solution::new(value))
    }
}

impl Program for RpcProgram {
    fn compute(&self, problem: &dyn Problem) -> Result<Solution, ProgramError> {
        let input = encode(problem)?;
        self.run(&input)
    }
}

fn encode(problem: &dyn Problem) -> Result<String, RpcError> {
    problem.to_json().map_err(|e| {
        tracing::error!(error = %e, "problem could not be serialized");
        RpcError::RequestMalformed("The encoding of the input is not supported.".into())
    })
}
