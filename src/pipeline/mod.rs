pub mod processor;
pub mod stages;

pub use processor::DataProcessor;
pub use stages::{filter, transform};
