use std::fmt;
use std::str::FromStr;

use crate::error::PipelineError;

/// Podporované regresné algoritmy (uzavretá množina)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    DecisionTree,
    RandomForest,
    SupportVector,
    Polynomial,
}

impl AlgorithmKind {
    /// Kanonický identifikátor algoritmu
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmKind::DecisionTree => "decision_tree",
            AlgorithmKind::RandomForest => "random_forest",
            AlgorithmKind::SupportVector => "svm",
            AlgorithmKind::Polynomial => "polynomial_reg",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmKind {
    type Err = PipelineError;

    /// Všetky aliasy sa mapujú na rovnaký variant, teda aj na rovnaký
    /// kód fitu. Neznámy názov je odmietnutý skôr, než vznikne model.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "decision_tree" => Ok(AlgorithmKind::DecisionTree),
            "random_forest" => Ok(AlgorithmKind::RandomForest),
            "svm" | "support_vector" => Ok(AlgorithmKind::SupportVector),
            "polynomial_reg" | "poly_regression" | "polynomial" => Ok(AlgorithmKind::Polynomial),
            _ => Err(PipelineError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}
