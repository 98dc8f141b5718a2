//! Leave policy configuration.
//!
//! This module provides the [`LeavePolicy`] type, loaded from a YAML file,
//! which carries the default per-category entitlements applied to newly
//! created employees.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::LeavePolicy;
//!
//! let policy = LeavePolicy::load("./config/leave_policy.yaml").unwrap();
//! assert_eq!(policy.annual_entitlement, 30);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{DEFAULT_ANNUAL_ENTITLEMENT, DEFAULT_EXCEPTIONAL_ENTITLEMENT};

/// Default per-category entitlements applied when registering an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePolicy {
    /// Annual leave days allotted per year to a new employee.
    #[serde(default = "default_annual")]
    pub annual_entitlement: u32,
    /// Exceptional leave days allotted per year to a new employee.
    #[serde(default = "default_exceptional")]
    pub exceptional_entitlement: u32,
}

fn default_annual() -> u32 {
    DEFAULT_ANNUAL_ENTITLEMENT
}

fn default_exceptional() -> u32 {
    DEFAULT_EXCEPTIONAL_ENTITLEMENT
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            annual_entitlement: DEFAULT_ANNUAL_ENTITLEMENT,
            exceptional_entitlement: DEFAULT_EXCEPTIONAL_ENTITLEMENT,
        }
    }
}

impl LeavePolicy {
    /// Loads the policy from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file is missing and
    /// [`EngineError::ConfigParseError`] when it contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;
        serde_yaml::from_str(&contents).map_err(|err| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }
}
