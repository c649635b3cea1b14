// Domain layer: the bounded store, scenario/catalog models and ports (interfaces).

pub mod catalog;
pub mod model;
pub mod ports;
pub mod store;
