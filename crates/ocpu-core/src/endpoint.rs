//! OpenCPU endpoint templates.
//!
//! Every remote function is addressed as
//! `{base}{package path}/R/{function}/json?digits=6`, where the package path
//! depends on where the package is installed or fetched from.

use crate::error::ConfigError;
use crate::runtime::RuntimeConfig;

/// Query suffix of every JSON RPC call. Controls the numeric precision of
/// the server's JSON serialization and is not configurable.
pub const JSON_RPC_SUFFIX: &str = "/json?digits=6";

/// Where the package hosting a function lives on the server.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PackageSource {
    /// Globally installed library: `/library/{package}`.
    #[default]
    Library,
    /// A user's private library: `/user/{user}/library/{package}`.
    User(String),
    /// CRAN: `/cran/{package}`.
    Cran,
    /// Bioconductor: `/bioc/{package}`.
    Bioconductor,
    /// A GitHub repository: `/github/{user}/{package}`.
    Github(String),
}

impl PackageSource {
    /// Path of `package` under this source, relative to the base address.
    pub fn package_path(&self, package: &str) -> String {
        match self {
            Self::Library => format!("/library/{package}"),
            Self::User(user) => format!("/user/{user}/library/{package}"),
            Self::Cran => format!("/cran/{package}"),
            Self::Bioconductor => format!("/bioc/{package}"),
            Self::Github(user) => format!("/github/{user}/{package}"),
        }
    }

    /// Reject user names that cannot be placed in a path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::User(user) | Self::Github(user) => validate_name("user", user),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for PackageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Library => write!(f, "library"),
            Self::User(user) => write!(f, "user:{user}"),
            Self::Cran => write!(f, "cran"),
            Self::Bioconductor => write!(f, "bioc"),
            Self::Github(user) => write!(f, "github:{user}"),
        }
    }
}

impl std::str::FromStr for PackageSource {
    type Err = ConfigError;

    /// Parses `library`, `cran`, `bioc`, `user:<name>` or `github:<name>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let source = match s.split_once(':') {
            None if s == "library" => Self::Library,
            None if s == "cran" => Self::Cran,
            None if s == "bioc" => Self::Bioconductor,
            Some(("user", name)) => Self::User(name.to_string()),
            Some(("github", name)) => Self::Github(name.to_string()),
            _ => {
                return Err(ConfigError::InvalidName {
                    field: "package source",
                    value: s.to_string(),
                })
            }
        };
        source.validate()?;
        Ok(source)
    }
}

/// Sub-resources exposed under every package path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageResource {
    Info,
    Object,
    Data,
    Man,
}

impl PackageResource {
    pub fn path(self) -> &'static str {
        match self {
            Self::Info => "/info",
            Self::Object => "/R",
            Self::Data => "/data",
            Self::Man => "/man",
        }
    }
}

/// The fully-qualified URL of `function` in the globally installed `package`.
pub fn resolve(runtime: &RuntimeConfig, package: &str, function: &str) -> String {
    resolve_from(runtime, &PackageSource::Library, package, function)
}

/// The fully-qualified URL of `function` in `package` under `source`.
pub fn resolve_from(
    runtime: &RuntimeConfig,
    source: &PackageSource,
    package: &str,
    function: &str,
) -> String {
    format!(
        "{}{}{}/{function}{JSON_RPC_SUFFIX}",
        runtime.base(),
        source.package_path(package),
        PackageResource::Object.path(),
    )
}

/// URL of a package sub-resource, e.g. `{base}/library/stats/info`.
pub fn package_resource(
    runtime: &RuntimeConfig,
    source: &PackageSource,
    package: &str,
    resource: PackageResource,
) -> String {
    format!("{}{}{}", runtime.base(), source.package_path(package), resource.path())
}

/// URL of a stored session object: `{base}/tmp/{key}`.
pub fn session_output(runtime: &RuntimeConfig, key: &str) -> String {
    format!("{}/tmp/{key}", runtime.base())
}

/// URL of a user's gists: `{base}/gist/{user}`.
pub fn gist(runtime: &RuntimeConfig, user: &str) -> String {
    format!("{}/gist/{user}", runtime.base())
}

/// Names are substituted into paths verbatim, so they must be non-empty and
/// free of path, query and fragment delimiters.
pub fn validate_name(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let bad = value.is_empty()
        || value
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace() || c.is_control());
    if bad {
        return Err(ConfigError::InvalidName {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local() -> RuntimeConfig {
        RuntimeConfig::parse("http://localhost:9999/ocpu").unwrap()
    }

    #[test]
    fn resolve_global_library_function() {
        assert_eq!(
            resolve(&local(), "stats", "rnorm"),
            "http://localhost:9999/ocpu/library/stats/R/rnorm/json?digits=6"
        );
    }

    #[test]
    fn resolve_is_plain_concatenation() {
        let rt = RuntimeConfig::parse("https://cloud.opencpu.org/ocpu").unwrap();
        for (pkg, func) in [("base", "sum"), ("MASS", "fitdistr"), ("data.table", "fread")] {
            let expected = format!("{}/library/{pkg}/R/{func}/json?digits=6", rt.base());
            assert_eq!(resolve(&rt, pkg, func), expected);
        }
    }

    #[test]
    fn package_sources() {
        let rt = local();
        let cases = [
            (PackageSource::User("jeroen".into()), "/user/jeroen/library/pkg"),
            (PackageSource::Cran, "/cran/pkg"),
            (PackageSource::Bioconductor, "/bioc/pkg"),
            (PackageSource::Github("opencpu".into()), "/github/opencpu/pkg"),
        ];
        for (source, path) in cases {
            assert_eq!(
                resolve_from(&rt, &source, "pkg", "f"),
                format!("http://localhost:9999/ocpu{path}/R/f/json?digits=6")
            );
        }
    }

    #[test]
    fn auxiliary_templates() {
        let rt = local();
        assert_eq!(
            package_resource(&rt, &PackageSource::Library, "stats", PackageResource::Info),
            "http://localhost:9999/ocpu/library/stats/info"
        );
        assert_eq!(
            package_resource(&rt, &PackageSource::Cran, "MASS", PackageResource::Data),
            "http://localhost:9999/ocpu/cran/MASS/data"
        );
        assert_eq!(
            package_resource(&rt, &PackageSource::Library, "stats", PackageResource::Man),
            "http://localhost:9999/ocpu/library/stats/man"
        );
        assert_eq!(session_output(&rt, "x0a1b2c"), "http://localhost:9999/ocpu/tmp/x0a1b2c");
        assert_eq!(gist(&rt, "octocat"), "http://localhost:9999/ocpu/gist/octocat");
    }

    #[test]
    fn source_parsing() {
        assert_eq!("library".parse::<PackageSource>().unwrap(), PackageSource::Library);
        assert_eq!("bioc".parse::<PackageSource>().unwrap(), PackageSource::Bioconductor);
        assert_eq!(
            "github:opencpu".parse::<PackageSource>().unwrap(),
            PackageSource::Github("opencpu".into())
        );
        assert!("svn".parse::<PackageSource>().is_err());
        assert!("user:".parse::<PackageSource>().is_err());
        assert!("user:a/b".parse::<PackageSource>().is_err());
    }

    #[test]
    fn name_validation() {
        assert!(validate_name("package", "stats").is_ok());
        assert!(validate_name("function", "is.na").is_ok());
        assert!(validate_name("package", "").is_err());
        assert!(validate_name("function", "a/b").is_err());
        assert!(validate_name("function", "f?x=1").is_err());
        assert!(validate_name("function", "two words").is_err());
    }
}
