use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::{
    LinearRegression, LinearRegressionParameters, LinearRegressionSolverName,
};

use super::IModel;
use crate::error::PipelineError;

/// Polynomiálna regresia 3. stupňa: power basis roku + OLS
pub struct PolyWrapper
{
    degree: usize,
}

impl PolyWrapper
{
    pub fn new() -> Self
    {
        // Stupeň je fixný, nie je konfigurovateľný per request
        Self { degree: 3 }
    }

    /// Expanzia roku t na [t, t^2, t^3]; intercept dodá LinearRegression.
    /// S jediným vstupným feature neexistujú interakčné členy, takže je to
    /// presne štandardná polynomiálna expanzia.
    fn expand(&self, x: &DenseMatrix<f64>) -> Result<DenseMatrix<f64>, PipelineError>
    {
        let (rows, _) = x.shape();
        let mut expanded = Vec::with_capacity(rows);

        for i in 0..rows
        {
            let t = *x.get((i, 0));
            let mut row = Vec::with_capacity(self.degree);
            for d in 1..=self.degree
            {
                row.push(t.powi(d as i32));
            }
            expanded.push(row);
        }

        DenseMatrix::from_2d_vec(&expanded).map_err(|e| PipelineError::Training(e.to_string()))
    }
}

impl IModel for PolyWrapper
{
    fn get_name(&self) -> &str
    {
        "Polynomial Regression"
    }

    fn min_samples(&self) -> usize
    {
        // Stupeň 3 + intercept: menej unikátnych bodov je podurčený systém
        self.degree + 1
    }

    fn fit_predict(&self, x: &DenseMatrix<f64>, y: &[f64]) -> Result<Vec<f64>, PipelineError>
    {
        let x_poly = self.expand(x)?;

        let mut params = LinearRegressionParameters::default();
        params.solver = LinearRegressionSolverName::SVD;

        let y_train = y.to_vec();
        let model = LinearRegression::fit(&x_poly, &y_train, params)
            .map_err(|e| PipelineError::Training(e.to_string()))?;

        model
            .predict(&x_poly)
            .map_err(|e| PipelineError::Training(e.to_string()))
    }
}

impl Default for PolyWrapper
{
    fn default() -> Self
    {
        Self::new()
    }
}
