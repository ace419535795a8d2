pub mod json;

pub use json::JsonReporter;
