use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::IModel;
use crate::error::PipelineError;

/// Náhodný les: priemer predikcií 100 regresných stromov.
///
/// Bagging používa náhodnosť; voliteľný seed ju robí reprodukovateľnou.
pub struct ForestWrapper
{
    seed: Option<u64>,
}

impl ForestWrapper
{
    pub fn new(seed: Option<u64>) -> Self
    {
        Self { seed }
    }
}

impl IModel for ForestWrapper
{
    fn get_name(&self) -> &str
    {
        "Random Forest"
    }

    fn fit_predict(&self, x: &DenseMatrix<f64>, y: &[f64]) -> Result<Vec<f64>, PipelineError>
    {
        // Počet stromov je fixný, nie je konfigurovateľný per request.
        // Prediktor je jediný (rok), takže každý strom vidí celý feature
        // priestor.
        let mut params = RandomForestRegressorParameters::default()
            .with_n_trees(100)
            .with_m(1);
        if let Some(seed) = self.seed
        {
            params = params.with_seed(seed);
        }

        let y_train = y.to_vec();
        let model = RandomForestRegressor::fit(x, &y_train, params)
            .map_err(|e| PipelineError::Training(e.to_string()))?;

        model
            .predict(x)
            .map_err(|e| PipelineError::Training(e.to_string()))
    }
}
