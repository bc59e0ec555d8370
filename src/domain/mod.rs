// Domain layer: response models and the port the runner depends on.

pub mod model;
pub mod ports;
