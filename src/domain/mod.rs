// Domain layer: run-file model, module outcomes and the ports the entry point talks through.

pub mod model;
pub mod ports;
