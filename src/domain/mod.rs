// Domain layer: core models and ports (interfaces). No external dependencies beyond serde/async-trait.

pub mod model;
pub mod ports;
