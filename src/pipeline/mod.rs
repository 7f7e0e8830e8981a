pub mod pipeline;

pub use pipeline::{IndicatorSeries, PredictionOutput, RegressionPipeline};
