//! ocpu CLI — call remote OpenCPU functions from the terminal.
//!
//! Usage:
//! ```bash
//! # Call stats::rnorm on a local server
//! ocpu call --url http://localhost:9999/ocpu --package stats --function rnorm --input '{"n":3}'
//!
//! # Print the endpoints a package/function resolves to
//! ocpu endpoint --url http://localhost:9999/ocpu --package stats --function rnorm
//! ```

use std::env;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ocpu_core::endpoint::{self, PackageResource};
use ocpu_core::{PackageSource, RpcEngine, RuntimeConfig};
use ocpu_http::{HttpClientConfig, HttpTransport};
use ocpu_program::{Program, RpcProgram};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }
    init_tracing(args.iter().any(|a| a == "--json-logs"));

    let result = match args[1].as_str() {
        "call" => cmd_call(&args[2..]),
        "endpoint" => cmd_endpoint(&args[2..]),
        "version" | "--version" | "-V" => {
            println!("ocpu {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Log level comes from `RUST_LOG`, defaulting to `warn`.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

fn print_usage() {
    println!("ocpu {}", env!("CARGO_PKG_VERSION"));
    println!("Call R functions on an OpenCPU server\n");
    println!("USAGE:");
    println!("    ocpu <COMMAND>\n");
    println!("COMMANDS:");
    println!("    call       Invoke a remote function and print its JSON result");
    println!("    endpoint   Print the URLs a package/function resolves to");
    println!("    version    Print version");
    println!("    help       Print this help\n");
    println!("FLAGS:");
    println!("    --url <URL>          Base address      [default: http://localhost:9999/ocpu]");
    println!("    --package <NAME>     R package         [required]");
    println!("    --function <NAME>    R function        [required for call]");
    println!("    --input <JSON>       Arguments object  [default: {{}}]");
    println!("    --source <SOURCE>    library | cran | bioc | user:<name> | github:<name>");
    println!("    --timeout-ms <MS>    Request timeout   [default: none]");
    println!("    --session <KEY>      Also print the session output URL (endpoint)");
    println!("    --gist-user <USER>   Also print the gist URL (endpoint)");
    println!("    --json-logs          Emit logs as JSON on stderr");
}

fn runtime_from(args: &[String]) -> Result<RuntimeConfig> {
    match parse_flag(args, "--url") {
        Some(url) => RuntimeConfig::parse(&url).context("invalid --url"),
        None => Ok(RuntimeConfig::default()),
    }
}

fn source_from(args: &[String]) -> Result<PackageSource> {
    match parse_flag(args, "--source") {
        Some(source) => source.parse().context("invalid --source"),
        None => Ok(PackageSource::Library),
    }
}

fn cmd_call(args: &[String]) -> Result<()> {
    let runtime = runtime_from(args)?;
    let source = source_from(args)?;
    let package = parse_flag(args, "--package").ok_or_else(|| anyhow!("--package is required"))?;
    let function =
        parse_flag(args, "--function").ok_or_else(|| anyhow!("--function is required"))?;
    let input = parse_flag(args, "--input").unwrap_or_else(|| "{}".to_string());
    let problem: serde_json::Value =
        serde_json::from_str(&input).context("--input is not valid JSON")?;

    let request_timeout = parse_flag(args, "--timeout-ms")
        .map(|ms| ms.parse::<u64>().map(Duration::from_millis))
        .transpose()
        .context("invalid --timeout-ms")?;
    let transport = HttpTransport::new(HttpClientConfig {
        request_timeout,
        ..Default::default()
    })?;

    let engine = RpcEngine::new(runtime, Arc::new(transport));
    let program = RpcProgram::with_source(engine, source, package, function)?;
    tracing::info!(
        package = program.package(),
        function = program.function(),
        source = %program.source(),
        "calling remote function"
    );
    let solution = program.compute(&problem)?;

    println!("{}", serde_json::to_string_pretty(solution.value().as_json())?);
    Ok(())
}

fn cmd_endpoint(args: &[String]) -> Result<()> {
    let runtime = runtime_from(args)?;
    let source = source_from(args)?;
    let package = parse_flag(args, "--package").ok_or_else(|| anyhow!("--package is required"))?;
    endpoint::validate_name("package", &package)?;

    if let Some(function) = parse_flag(args, "--function") {
        endpoint::validate_name("function", &function)?;
        println!("call:  {}", endpoint::resolve_from(&runtime, &source, &package, &function));
    }
    for (label, resource) in [
        ("info", PackageResource::Info),
        ("R", PackageResource::Object),
        ("data", PackageResource::Data),
        ("man", PackageResource::Man),
    ] {
        println!(
            "{label:<5}  {}",
            endpoint::package_resource(&runtime, &source, &package, resource)
        );
    }
    if let Some(key) = parse_flag(args, "--session") {
        endpoint::validate_name("session key", &key)?;
        println!("tmp:   {}", endpoint::session_output(&runtime, &key));
    }
    if let Some(user) = parse_flag(args, "--gist-user") {
        endpoint::validate_name("user", &user)?;
        println!("gist:  {}", endpoint::gist(&runtime, &user));
    }
    Ok(())
}

fn parse_flag(args: &[String], flag: &str) -> Option<String> {
    let pos = args.iter().position(|a| a == flag)?;
    args.get(pos + 1).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_flag_reads_following_value() {
        let a = args(&["--package", "stats", "--function", "rnorm"]);
        assert_eq!(parse_flag(&a, "--function").as_deref(), Some("rnorm"));
        assert_eq!(parse_flag(&a, "--input"), None);
        assert_eq!(parse_flag(&args(&["--url"]), "--url"), None);
    }

    #[test]
    fn defaults_when_flags_missing() {
        let a = args(&[]);
        assert_eq!(runtime_from(&a).unwrap().base(), "http://localhost:9999/ocpu");
        assert_eq!(source_from(&a).unwrap(), PackageSource::Library);
    }

    #[test]
    fn bad_flags_are_rejected() {
        assert!(runtime_from(&args(&["--url", "localhost"])).is_err());
        assert!(source_from(&args(&["--source", "svn"])).is_err());
        assert!(cmd_call(&args(&["--package", "stats"])).is_err());
        assert!(cmd_call(&args(&["--package", "stats", "--function", "f", "--input", "{"])).is_err());
    }
}
