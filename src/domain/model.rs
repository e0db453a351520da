use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::time::Duration;

/// Previous job id marking the first module of a pipeline.
pub const NULL_JOB_ID: &str = "null";

/// Everything the run-file loader extracted for this module invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunfileParams {
    pub files: Vec<String>,
    pub runfile: String,
    pub job_id: Option<String>,
    pub prev_job_id: Option<String>,
    pub cores: Option<String>,
    pub mem: Option<String>,
    pub parameters: Vec<String>,
    pub config_files: Vec<String>,
    pub config: HashMap<String, String>,
}

/// What this module asks of the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceRequirements {
    pub cores: &'static str,
    pub mem: &'static str,
    pub modules: &'static [&'static str],
}

pub const REQUIREMENTS: ResourceRequirements = ResourceRequirements {
    cores: "1",
    mem: "3G",
    modules: &[],
};

#[derive(Debug, Clone, PartialEq)]
pub enum ModuleOutcome {
    Cores,
    Memory,
    Modules,
    Help,
    Plotted {
        started_at: DateTime<Local>,
        elapsed: Duration,
        files: usize,
    },
}
