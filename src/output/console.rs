//! Console output utilities.

use std::path::PathBuf;

use console::style;
use serde::Serialize;

use crate::config::Environment;
use crate::fs::DataPathResolver;

/// Machine-readable view of the decided environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentReport {
    pub environment: Environment,
    pub running_in_hosted_notebook: bool,
    pub project_root: Option<PathBuf>,
    pub default_root: PathBuf,
}

impl From<&DataPathResolver> for EnvironmentReport {
    fn from(resolver: &DataPathResolver) -> Self {
        Self {
            environment: resolver.environment(),
            running_in_hosted_notebook: resolver.environment().running_in_hosted_notebook(),
            project_root: resolver.project_root().map(PathBuf::from),
            default_root: resolver.default_root().to_path_buf(),
        }
    }
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the decided environment and the roots data paths are built from.
pub fn print_environment_summary(report: &EnvironmentReport) {
    let project_root = report
        .project_root
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(unset)".to_string());

    println!();
    println!("{}", style("Environment:").bold());
    println!("  Running in: {}", report.environment);
    println!("  Project root: {}", project_root);
    println!("  Default root: {}", report.default_root.display());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_json() {
        let resolver = DataPathResolver::new(Environment::HostedNotebook)
            .with_project_root(Some(PathBuf::from("/srv")))
            .with_default_root(PathBuf::from("/work"));

        let json = serde_json::to_value(EnvironmentReport::from(&resolver)).unwrap();
        assert_eq!(json["environment"], "hosted_notebook");
        assert_eq!(json["running_in_hosted_notebook"], true);
        assert_eq!(json["project_root"], "/srv");
        assert_eq!(json["default_root"], "/work");
    }
}
