pub mod algorithm;
pub mod api;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod params;
pub mod pipeline;

pub use algorithm::AlgorithmKind;
pub use api::{PredictRequest, PredictResponse};
pub use error::PipelineError;
pub use evaluation::{FitMetrics, ModelEvaluator};
pub use models::{ForestWrapper, IModel, ModelFactory, PolyWrapper, SvrWrapper, TreeWrapper};
pub use pipeline::{IndicatorSeries, PredictionOutput, RegressionPipeline};
