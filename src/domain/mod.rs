// Domain layer: content models and ports (interfaces). No rendering or IO here.

pub mod model;
pub mod ports;
