use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Can't read run file {path}: {source}")]
    RunfileError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No file names found from job {prev_job_id} in {runfile}")]
    NoInputFiles { runfile: String, prev_job_id: String },

    #[error("Plotting failed: {message}")]
    PlotterFailed { message: String },
}

impl PlotError {
    /// Configuration faults are the caller's to fix; everything else comes
    /// from the run file or the plotting package.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            PlotError::MissingConfigError { .. } | PlotError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;
