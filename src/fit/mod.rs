/// Regression layer: least squares fitting and the filter-and-fit pipeline.

pub mod pipeline;
pub mod regression;
