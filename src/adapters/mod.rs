// Adapters layer: concrete implementations of the domain ports.

pub mod plotter;
pub mod runfile;

pub use plotter::NgiVisualizationsPlotter;
pub use runfile::ClusterFlowRunfileLoader;
