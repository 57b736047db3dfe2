//! Output module for console output.
//!
//! Provides:
//! - Colored console messages
//! - Environment summary

pub mod console;

pub use console::{
    print_environment_summary, print_error, print_info, print_success, print_warning,
    EnvironmentReport,
};
