use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::evaluation::FitMetrics;
use crate::pipeline::PredictionOutput;

/// Tvar požiadavky na /predict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub country: String,
    pub parameters: Vec<String>,
    pub algorithm: String,
}

/// Tvar odpovede pre /predict: roky, predikcie a metriky podľa indikátora
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub years: Vec<i32>,
    pub predictions: HashMap<String, Vec<f64>>,
    pub metrics: HashMap<String, FitMetrics>,
    /// Indikátory vynechané kvôli chybe (meno -> dôvod)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub errors: HashMap<String, String>,
}

impl PredictResponse {
    pub fn from_output(output: PredictionOutput) -> Self {
        Self {
            years: output.years,
            predictions: output.predictions,
            metrics: output.metrics,
            errors: output.failures,
        }
    }
}

impl From<PredictionOutput> for PredictResponse {
    fn from(output: PredictionOutput) -> Self {
        Self::from_output(output)
    }
}
