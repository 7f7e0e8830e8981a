use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::PipelineError;

/// Spoločné rozhranie regresných modelov.
///
/// Každé volanie `fit_predict` vytvorí čerstvý smartcore model, natrénuje
/// ho na celej vzorke a predikuje na tej istej matici (in-sample).
/// Natrénovaný model sa nikdy neprenáša medzi požiadavkami.
pub trait IModel {
    fn get_name(&self) -> &str;

    /// Najmenší počet unikátnych rokov potrebný pre zmysluplný fit
    fn min_samples(&self) -> usize {
        1
    }

    fn fit_predict(&self, x: &DenseMatrix<f64>, y: &[f64]) -> Result<Vec<f64>, PipelineError>;
}

pub mod factory;
pub mod forest;
pub mod poly;
pub mod svr;
pub mod tree;

pub use factory::ModelFactory;
pub use forest::ForestWrapper;
pub use poly::PolyWrapper;
pub use svr::SvrWrapper;
pub use tree::TreeWrapper;
