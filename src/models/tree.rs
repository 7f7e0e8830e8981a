use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::tree::decision_tree_regressor::{
    DecisionTreeRegressor, DecisionTreeRegressorParameters,
};

use super::IModel;
use crate::error::PipelineError;

/// Rozhodovací strom s default split kritériami a bez obmedzenia hĺbky
pub struct TreeWrapper;

impl TreeWrapper
{
    pub fn new() -> Self
    {
        Self
    }
}

impl IModel for TreeWrapper
{
    fn get_name(&self) -> &str
    {
        "Decision Tree"
    }

    fn fit_predict(&self, x: &DenseMatrix<f64>, y: &[f64]) -> Result<Vec<f64>, PipelineError>
    {
        let y_train = y.to_vec();
        let params = DecisionTreeRegressorParameters::default();

        let model = DecisionTreeRegressor::fit(x, &y_train, params)
            .map_err(|e| PipelineError::Training(e.to_string()))?;

        model
            .predict(x)
            .map_err(|e| PipelineError::Training(e.to_string()))
    }
}

impl Default for TreeWrapper
{
    fn default() -> Self
    {
        Self::new()
    }
}
