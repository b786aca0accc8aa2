// Domain layer: lesson report model and the Lesson port.

pub mod model;
pub mod ports;
