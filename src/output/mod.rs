// Output writers

pub mod chart;
pub mod json;

pub use chart::ChartRenderer;
pub use json::JsonWriter;
