use crate::config::ModuleArgs;
use crate::domain::model::{RunfileParams, NULL_JOB_ID};
use crate::domain::ports::RunfileLoader;
use crate::utils::error::{PlotError, Result};
use crate::utils::validation;
use async_trait::async_trait;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Separator for list-valued positional parameters.
const LIST_SEPARATOR: &str = "::";

/// Job id prefix of the pipeline's raw input records.
const START_JOB_PREFIX: &str = "start_";

fn config_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^@([^\t]+)(?:\t(.*))?$").expect("valid config line regex"))
}

/// Loads module parameters from a Cluster Flow run file.
///
/// Positionals are `runfile job_id prev_job_id cores mem parameters config_files`.
/// With `--runfn` the run file comes from the flag and positionals start at `job_id`.
#[derive(Debug, Clone, Default)]
pub struct ClusterFlowRunfileLoader;

impl ClusterFlowRunfileLoader {
    pub fn new() -> Self {
        Self
    }

    /// Splits CLI input into the run-file path and a params skeleton with
    /// everything except `files` and `config` filled in.
    pub fn invocation_params(args: &ModuleArgs) -> Result<RunfileParams> {
        let mut positionals = args.parameters.iter().cloned();

        let runfile = match &args.runfn {
            Some(path) => Some(path.clone()),
            None => positionals.next(),
        };
        let runfile = validation::validate_required_field("runfn", &runfile)?.clone();
        validation::validate_path("runfn", &runfile)?;

        let mut next = || positionals.next().filter(|s| !s.is_empty());
        let job_id = next();
        let prev_job_id = next();
        let cores = next();
        let mem = next();
        let parameters = split_list(next());
        let config_files = split_list(next());

        Ok(RunfileParams {
            files: Vec::new(),
            runfile,
            job_id,
            prev_job_id,
            cores,
            mem,
            parameters,
            config_files,
            config: HashMap::new(),
        })
    }
}

fn split_list(value: Option<String>) -> Vec<String> {
    value
        .map(|v| {
            v.split(LIST_SEPARATOR)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Run-file body contents relevant to one module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunfileContents {
    pub files: Vec<String>,
    pub config: HashMap<String, String>,
}

/// Parses a run file. `prev_job_id` of `None` takes every output record
/// except the pipeline's raw inputs.
pub fn parse_runfile(content: &str, prev_job_id: Option<&str>) -> RunfileContents {
    let mut contents = RunfileContents::default();
    let mut comment_block = false;

    for raw in content.lines() {
        let line = raw.trim();

        if line.starts_with("/*") {
            comment_block = true;
            continue;
        }
        if line.starts_with("*/") {
            comment_block = false;
            continue;
        }
        if comment_block || line.is_empty() {
            continue;
        }

        if let Some(caps) = config_line_regex().captures(line) {
            let key = caps[1].to_string();
            let value = caps
                .get(2)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            contents.config.insert(key, value);
            continue;
        }

        let Some((job, path)) = line.split_once('\t') else {
            continue;
        };
        let wanted = match prev_job_id {
            Some(prev) => job == prev,
            None => !job.starts_with(START_JOB_PREFIX),
        };
        if wanted && !path.is_empty() {
            contents.files.push(path.to_string());
        }
    }

    contents
}

#[async_trait]
impl RunfileLoader for ClusterFlowRunfileLoader {
    async fn load(&self, args: &ModuleArgs) -> Result<RunfileParams> {
        let mut params = Self::invocation_params(args)?;

        let content = tokio::fs::read_to_string(&params.runfile)
            .await
            .map_err(|source| PlotError::RunfileError {
                path: params.runfile.clone(),
                source,
            })?;

        let contents = parse_runfile(&content, params.prev_job_id.as_deref());
        tracing::debug!(
            "Parsed run file {}: {} input files, {} config directives",
            params.runfile,
            contents.files.len(),
            contents.config.len()
        );

        if contents.files.is_empty() {
            match params.prev_job_id.as_deref() {
                Some(NULL_JOB_ID) => {
                    tracing::warn!(
                        "⚠️ No previous job, nothing to plot from {}",
                        params.runfile
                    )
                }
                Some(prev) => {
                    return Err(PlotError::NoInputFiles {
                        runfile: params.runfile.clone(),
                        prev_job_id: prev.to_string(),
                    })
                }
                None => tracing::warn!("⚠️ Run file {} lists no output files", params.runfile),
            }
        }

        params.files = contents.files;
        params.config = contents.config;
        Ok(params)
    }
}
