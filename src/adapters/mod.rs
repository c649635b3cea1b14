// Adapters layer: concrete implementations of the domain ports (console output, file storage, reports, in-memory catalog).

pub mod console;
pub mod memory;
pub mod report;
pub mod storage;
