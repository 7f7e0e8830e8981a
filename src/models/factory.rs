use super::{ForestWrapper, IModel, PolyWrapper, SvrWrapper, TreeWrapper};
use crate::algorithm::AlgorithmKind;

/// Factory pre vytváranie modelov podľa algoritmu
pub struct ModelFactory;

impl ModelFactory {
    /// Vytvorí model na základe zvoleného algoritmu.
    /// Seed používa iba random forest (bagging); ostatné modely sú
    /// deterministické.
    pub fn create(kind: AlgorithmKind, seed: Option<u64>) -> Box<dyn IModel> {
        match kind {
            AlgorithmKind::DecisionTree => Box::new(TreeWrapper::new()),
            AlgorithmKind::RandomForest => Box::new(ForestWrapper::new(seed)),
            AlgorithmKind::SupportVector => Box::new(SvrWrapper::new()),
            AlgorithmKind::Polynomial => Box::new(PolyWrapper::new()),
        }
    }

    /// Vráti zoznam všetkých dostupných algoritmov
    pub fn available_algorithms() -> Vec<&'static str> {
        vec!["decision_tree", "random_forest", "svm", "polynomial_reg"]
    }

    /// Vráti popis algoritmu
    pub fn get_description(kind: AlgorithmKind) -> &'static str {
        match kind {
            AlgorithmKind::DecisionTree => "Rozhodovací strom - regresia bez obmedzenia hĺbky",
            AlgorithmKind::RandomForest => "Náhodný les - priemer 100 stromov",
            AlgorithmKind::SupportVector => "Support Vector Regression - RBF kernel",
            AlgorithmKind::Polynomial => "Polynomiálna regresia 3. stupňa",
        }
    }
}
