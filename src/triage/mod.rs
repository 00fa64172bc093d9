//! Garment triage: classify an image, recommend what to do with the item
//!
//! The pipeline is classify -> argmax per head -> label lookup -> ordered
//! recommendation rules. The model sits behind the [`GarmentClassifier`]
//! trait so everything after the seam runs without a real model in tests.

pub mod classifier;
pub mod image;
pub mod labels;
pub mod model;
pub mod recommend;

use std::path::Path;

use crate::errors::Result;

pub use classifier::{argmax, GarmentClassifier, Prediction};
pub use model::{CandleClassifier, ModelConfig};
pub use recommend::recommend;

/// Result of one triage run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageOutcome {
    pub category: &'static str,
    pub condition: &'static str,
    pub advice: &'static str,
}

/// Run the full pipeline for one image
pub fn run(classifier: &dyn GarmentClassifier, image_path: &Path) -> Result<TriageOutcome> {
    let prediction = classifier.classify(image_path)?;

    let category = prediction
        .category_index()
        .map(labels::category_label)
        .unwrap_or("unknown");
    let condition = prediction
        .condition_index()
        .map(labels::condition_label)
        .unwrap_or("unknown");

    Ok(TriageOutcome {
        category,
        condition,
        advice: recommend(category, condition),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EcobuddyError;

    /// Stub classifier returning fixed distributions
    struct StubClassifier {
        prediction: Prediction,
    }

    impl GarmentClassifier for StubClassifier {
        fn classify(&self, _image_path: &Path) -> Result<Prediction> {
            Ok(self.prediction.clone())
        }
    }

    struct FailingClassifier;

    impl GarmentClassifier for FailingClassifier {
        fn classify(&self, _image_path: &Path) -> Result<Prediction> {
            Err(EcobuddyError::ModelLoad("stub failure".to_string()))
        }
    }

    #[test]
    fn test_run_good_tshirt() {
        let stub = StubClassifier {
            prediction: Prediction {
                // t-shirt wins, "good" wins
                category_scores: vec![0.9, 0.0, 0.0, 0.0, 0.1],
                condition_scores: vec![0.8, 0.1, 0.1],
            },
        };
        let outcome = run(&stub, Path::new("ignored.jpg")).unwrap();
        assert_eq!(outcome.category, "t-shirt");
        assert_eq!(outcome.condition, "good");
        assert_eq!(outcome.advice, recommend::DONATE);
    }

    #[test]
    fn test_run_torn_jacket() {
        let stub = StubClassifier {
            prediction: Prediction {
                category_scores: vec![0.0, 0.0, 0.0, 0.9, 0.0],
                condition_scores: vec![0.1, 0.8, 0.1],
            },
        };
        let outcome = run(&stub, Path::new("ignored.jpg")).unwrap();
        assert_eq!(outcome.category, "jacket");
        assert_eq!(outcome.advice, recommend::REPAIR);
    }

    #[test]
    fn test_run_empty_distribution_falls_back() {
        let stub = StubClassifier {
            prediction: Prediction {
                category_scores: vec![],
                condition_scores: vec![],
            },
        };
        let outcome = run(&stub, Path::new("ignored.jpg")).unwrap();
        assert_eq!(outcome.category, "unknown");
        assert_eq!(outcome.advice, recommend::FALLBACK);
    }

    #[test]
    fn test_run_propagates_classifier_failure() {
        let result = run(&FailingClassifier, Path::new("ignored.jpg"));
        assert!(result.is_err());
    }
}
