use std::collections::HashMap;

use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::algorithm::AlgorithmKind;
use crate::error::PipelineError;
use crate::evaluation::{FitMetrics, ModelEvaluator};
use crate::models::{IModel, ModelFactory};

/// Jedna časová rada indikátora, hodnoty zarovnané 1:1 s osou rokov
#[derive(Debug, Clone)]
pub struct IndicatorSeries {
    pub name: String,
    pub values: Vec<f64>,
}

impl IndicatorSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Výsledok jedného behu pipeline
#[derive(Debug, Clone)]
pub struct PredictionOutput {
    pub years: Vec<i32>,
    pub predictions: HashMap<String, Vec<f64>>,
    pub metrics: HashMap<String, FitMetrics>,
    /// Indikátory vynechané kvôli chybe fitu (meno -> poznámka).
    /// Jeden zlyhaný indikátor neblokuje ostatné.
    pub failures: HashMap<String, String>,
}

/// Facade pre celý regresný pipeline: výber modelu podľa algoritmu,
/// fit, in-sample predikcia a metriky pre každý indikátor.
///
/// Pipeline je bezstavová funkcia per volanie; medzi požiadavkami sa
/// nezdieľa žiadny natrénovaný model ani cache.
pub struct RegressionPipeline {
    seed: Option<u64>,
}

impl RegressionPipeline {
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Explicitná kontrola náhodnosti (bagging v random forest),
    /// aby boli testy deterministické
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Spustí pipeline pre všetky indikátory, v poradí vstupu.
    ///
    /// Preconditions sa kontrolujú pred akýmkoľvek fitom: neprázdne roky,
    /// zhodné dĺžky sérií a dostatok unikátnych rokov pre zvolený model.
    pub fn run(
        &self,
        years: &[i32],
        series: &[IndicatorSeries],
        algorithm: AlgorithmKind,
    ) -> Result<PredictionOutput, PipelineError> {
        if years.is_empty() {
            return Err(PipelineError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }

        for s in series {
            if s.values.len() != years.len() {
                return Err(PipelineError::DimensionMismatch {
                    indicator: s.name.clone(),
                    years: years.len(),
                    values: s.values.len(),
                });
            }
        }

        let model = ModelFactory::create(algorithm, self.seed);

        // Os rokov je spoločná pre všetky indikátory, takže podurčený fit
        // je precondition celej požiadavky, nie jedného indikátora
        let distinct = Self::distinct_years(years);
        if distinct < model.min_samples() {
            return Err(PipelineError::InsufficientData {
                required: model.min_samples(),
                actual: distinct,
            });
        }

        tracing::debug!(
            algorithm = %algorithm,
            indicators = series.len(),
            samples = years.len(),
            "running regression pipeline"
        );

        // Prediktor: jediný feature (rok), jeden riadok na vzorku
        let rows: Vec<Vec<f64>> = years.iter().map(|y| vec![f64::from(*y)]).collect();
        let x = DenseMatrix::from_2d_vec(&rows).map_err(|e| PipelineError::Training(e.to_string()))?;

        let mut predictions = HashMap::new();
        let mut metrics = HashMap::new();
        let mut failures = HashMap::new();

        for s in series {
            match Self::fit_indicator(model.as_ref(), &x, &s.values) {
                Ok((y_pred, m)) => {
                    predictions.insert(s.name.clone(), y_pred);
                    metrics.insert(s.name.clone(), m);
                }
                Err(e) => {
                    tracing::warn!(indicator = %s.name, error = %e, "indicator dropped");
                    failures.insert(s.name.clone(), e.to_string());
                }
            }
        }

        Ok(PredictionOutput {
            years: years.to_vec(),
            predictions,
            metrics,
            failures,
        })
    }

    /// Fit + in-sample predikcia + metriky pre jeden indikátor
    fn fit_indicator(
        model: &dyn IModel,
        x: &DenseMatrix<f64>,
        values: &[f64],
    ) -> Result<(Vec<f64>, FitMetrics), PipelineError> {
        let y_pred = model.fit_predict(x, values)?;

        // Upstream čistenie garantuje konečné vstupy; výstup kontrolujeme,
        // NaN/Infinity sa nesmie dostať do odpovede
        if y_pred.iter().any(|v| !v.is_finite()) {
            return Err(PipelineError::Numerical("non-finite prediction".to_string()));
        }

        let m = ModelEvaluator::evaluate_regression(values, &y_pred);
        if !(m.r2.is_finite() && m.mae.is_finite() && m.rmse.is_finite()) {
            return Err(PipelineError::Numerical("non-finite metric".to_string()));
        }

        Ok((y_pred, m))
    }

    fn distinct_years(years: &[i32]) -> usize {
        let mut sorted = years.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        sorted.len()
    }
}

impl Default for RegressionPipeline {
    fn default() -> Self {
        Self::new()
    }
}
