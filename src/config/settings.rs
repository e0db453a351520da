use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

pub const PYTHON_ENV: &str = "CF_PYTHON";
pub const PLOT_MODULE_ENV: &str = "CF_PLOT_MODULE";
pub const VERBOSE_ENV: &str = "CF_VERBOSE";

pub const DEFAULT_PYTHON: &str = "python";
pub const DEFAULT_PLOT_MODULE: &str = "ngi_visualizations.plot_complexity_curves";

/// How to reach the external plotting package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSettings {
    pub python: String,
    pub plot_module: String,
    pub verbose: bool,
}

impl Default for ModuleSettings {
    fn default() -> Self {
        Self {
            python: DEFAULT_PYTHON.to_string(),
            plot_module: DEFAULT_PLOT_MODULE.to_string(),
            verbose: false,
        }
    }
}

impl ModuleSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key lookup; unset or blank keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            python: get(PYTHON_ENV).unwrap_or(defaults.python),
            plot_module: get(PLOT_MODULE_ENV).unwrap_or(defaults.plot_module),
            verbose: get(VERBOSE_ENV)
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}

impl Validate for ModuleSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("python", &self.python)?;
        validation::validate_python_module("plot_module", &self.plot_module)?;
        Ok(())
    }
}
