pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{ClusterFlowRunfileLoader, NgiVisualizationsPlotter};
pub use crate::config::{ModuleArgs, ModuleSettings};
pub use crate::core::module::{PreseqModule, MODULE_HELP};
pub use crate::domain::model::{ModuleOutcome, RunfileParams};
pub use crate::utils::error::{PlotError, Result};
