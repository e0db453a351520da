use crate::config::ModuleArgs;
use crate::domain::model::RunfileParams;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait RunfileLoader: Send + Sync {
    async fn load(&self, args: &ModuleArgs) -> Result<RunfileParams>;
}

#[async_trait]
pub trait ComplexityPlotter: Send + Sync {
    /// Renders complexity curves for `files`; output naming is the plotter's business.
    async fn plot(&self, files: &[String], output_name: &str) -> Result<()>;
}
