use smartcore::metrics::{mean_absolute_error, mean_squared_error};

use super::metrics::FitMetrics;

pub struct ModelEvaluator;

impl ModelEvaluator {
    /// Vypočíta metriky pre regresné modely.
    ///
    /// Metriky sú počítané in-sample (rovnaké dáta pre fit aj evaluáciu),
    /// merajú kvalitu fitu, nie generalizáciu.
    pub fn evaluate_regression(y_true: &[f64], y_pred: &[f64]) -> FitMetrics {
        if y_true.is_empty() {
            return FitMetrics { r2: 0.0, mae: 0.0, rmse: 0.0 };
        }

        let y_true_vec: Vec<f64> = y_true.to_vec();
        let y_pred_vec: Vec<f64> = y_pred.to_vec();

        let mse = mean_squared_error(&y_true_vec, &y_pred_vec);

        FitMetrics {
            r2: Self::r2_score(y_true, y_pred),
            mae: mean_absolute_error(&y_true_vec, &y_pred_vec),
            // RMSE - v rovnakých jednotkách ako y
            rmse: mse.sqrt(),
        }
    }

    /// R^2 = 1 - SS_res / SS_tot.
    /// Pri konštantnej sérii (SS_tot == 0) je R^2 nedefinované; vraciame
    /// 0.0 ako konvenciu, nikdy NaN.
    fn r2_score(y_true: &[f64], y_pred: &[f64]) -> f64 {
        let n = y_true.len() as f64;
        if n == 0.0 { return 0.0; }

        let mean_y = y_true.iter().sum::<f64>() / n;
        let ss_res: f64 = y_true.iter().zip(y_pred.iter())
            .map(|(t, p)| (t - p).powi(2))
            .sum();
        let ss_tot: f64 = y_true.iter()
            .map(|t| (t - mean_y).powi(2))
            .sum();

        if ss_tot == 0.0 { return 0.0; }
        1.0 - ss_res / ss_tot
    }
}
