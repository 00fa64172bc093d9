//! Classifier seam for the triage pipeline
//!
//! The recommendation logic only ever sees this narrow interface: an image
//! path in, two indexable prediction distributions out. Anything that
//! satisfies it (a real model, a stub in tests) can sit behind the seam.

use std::path::Path;

use crate::errors::Result;

/// Raw output of one classification: a score distribution per head
#[derive(Debug, Clone)]
pub struct Prediction {
    pub category_scores: Vec<f32>,
    pub condition_scores: Vec<f32>,
}

impl Prediction {
    /// Index of the highest-scoring category, first on ties
    pub fn category_index(&self) -> Option<usize> {
        argmax(&self.category_scores)
    }

    /// Index of the highest-scoring condition, first on ties
    pub fn condition_index(&self) -> Option<usize> {
        argmax(&self.condition_scores)
    }
}

/// First-maximum-wins argmax over a score slice
pub fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &score) in scores.iter().enumerate() {
        match best {
            None => best = Some((i, score)),
            Some((_, best_score)) if score > best_score => best = Some((i, score)),
            _ => {}
        }
    }
    best.map(|(i, _)| i)
}

/// A garment classification model
pub trait GarmentClassifier {
    /// Classify the image at `image_path`
    fn classify(&self, image_path: &Path) -> Result<Prediction>;
}
