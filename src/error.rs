//! Chybové typy pipeline.

use thiserror::Error;

/// Chyby regresného pipeline.
///
/// Všetky chyby sú viazané na jednu požiadavku: vracajú sa volajúcemu ako
/// hodnoty a proces beží ďalej. Nič sa neopakuje.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Identifikátor algoritmu mimo podporovanej množiny.
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Menej unikátnych bodov, než zvolený model potrebuje.
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Os rokov a hodnoty indikátora majú rôznu dĺžku; porušenie
    /// kontraktu kolaborátora, fatálne pre celú požiadavku.
    #[error("Dimension mismatch for '{indicator}': {years} years vs {values} values")]
    DimensionMismatch {
        indicator: String,
        years: usize,
        values: usize,
    },

    /// Fit alebo predikcia zlyhali v smartcore.
    #[error("Model fitting failed: {0}")]
    Training(String),

    /// Predikcia alebo metrika vyšla nekonečná alebo NaN.
    #[error("Numerical error: {0}")]
    Numerical(String),
}
