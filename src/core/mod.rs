pub mod module;

pub use crate::domain::model::{ModuleOutcome, RunfileParams, REQUIREMENTS};
pub use crate::domain::ports::{ComplexityPlotter, RunfileLoader};
pub use crate::utils::error::Result;
