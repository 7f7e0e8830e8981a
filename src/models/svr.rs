use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::svm::svr::{SVRParameters, SVR};
use smartcore::svm::Kernels;

use super::IModel;
use crate::error::PipelineError;

/// Support Vector Regression s RBF kernelom a default C/epsilon
pub struct SvrWrapper;

impl SvrWrapper
{
    pub fn new() -> Self
    {
        Self
    }

    /// Gamma podľa "scale" heuristiky: 1 / (n_features * var(x)).
    /// smartcore nemá default gammu, musí byť nastavená explicitne.
    fn scale_gamma(x: &DenseMatrix<f64>) -> f64
    {
        let (rows, cols) = x.shape();
        let n = (rows * cols) as f64;
        if n == 0.0
        {
            return 1.0;
        }

        let mut mean = 0.0;
        for i in 0..rows
        {
            for j in 0..cols
            {
                mean += *x.get((i, j));
            }
        }
        mean /= n;

        let mut var = 0.0;
        for i in 0..rows
        {
            for j in 0..cols
            {
                var += (*x.get((i, j)) - mean).powi(2);
            }
        }
        var /= n;

        if var > 0.0
        {
            1.0 / (cols as f64 * var)
        }
        else
        {
            1.0
        }
    }
}

impl IModel for SvrWrapper
{
    fn get_name(&self) -> &str
    {
        "Support Vector Regression"
    }

    fn fit_predict(&self, x: &DenseMatrix<f64>, y: &[f64]) -> Result<Vec<f64>, PipelineError>
    {
        let gamma = Self::scale_gamma(x);
        let params = SVRParameters::default().with_kernel(Kernels::rbf().with_gamma(gamma));

        // SVR drží referencie na trénovacie dáta, preto fit aj predikcia
        // prebehnú v rámci jedného volania
        let y_train = y.to_vec();
        let model = SVR::fit(x, &y_train, &params)
            .map_err(|e| PipelineError::Training(e.to_string()))?;

        model
            .predict(x)
            .map_err(|e| PipelineError::Training(e.to_string()))
    }
}

impl Default for SvrWrapper
{
    fn default() -> Self
    {
        Self::new()
    }
}
