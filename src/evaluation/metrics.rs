use serde::{Deserialize, Serialize};

/// Metriky kvality fitu pre jeden indikátor (in-sample, train = test)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitMetrics {
    pub r2: f64,
    pub mae: f64,
    pub rmse: f64,
}
