//! Reconciliation threshold configuration.
//!
//! The two times that drive punch classification are compiled in with the
//! company defaults and can be overridden from a YAML file:
//!
//! ```yaml
//! work_off_time: "18:30:00"
//! overnight_time: "07:00:00"
//! ```

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{FormatterError, FormatterResult};

/// Thresholds used to classify a punch that opens a day.
///
/// # Example
///
/// ```
/// use attendance_formatter::config::ReconcileConfig;
/// use chrono::NaiveTime;
///
/// let config = ReconcileConfig::default();
/// assert_eq!(config.work_off_time, NaiveTime::from_hms_opt(18, 30, 0).unwrap());
/// assert_eq!(config.overnight_time, NaiveTime::from_hms_opt(7, 0, 0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// Punches at or after this time with no prior check-in that day are
    /// treated as a check-out with the check-in missing.
    pub work_off_time: NaiveTime,
    /// Punches before this time with no prior check-in that day are treated
    /// as the previous day's overnight check-out.
    pub overnight_time: NaiveTime,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            work_off_time: NaiveTime::from_hms_opt(18, 30, 0).expect("valid threshold time"),
            overnight_time: NaiveTime::from_hms_opt(7, 0, 0).expect("valid threshold time"),
        }
    }
}

impl ReconcileConfig {
    /// Loads threshold overrides from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration, or an error if the file is missing
    /// or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> FormatterResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| FormatterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| FormatterError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }
}
