//! Candle-backed garment classifier
//!
//! Loads a local artifact directory: `config.json` describing the input
//! size and head widths, and `model.safetensors` with the weights. The
//! network is a small conv trunk with one linear head per prediction.

use std::fs;
use std::path::{Path, PathBuf};

use candle_core::{DType, Device, Tensor, D};
use candle_nn::{conv2d, linear, Conv2d, Conv2dConfig, Linear, Module, VarBuilder};
use serde::{Deserialize, Serialize};

use crate::errors::{EcobuddyError, Result};
use crate::triage::classifier::{GarmentClassifier, Prediction};
use crate::triage::image::preprocess;
use crate::triage::labels::{CATEGORY_LABELS, CONDITION_LABELS};

const TRUNK_CHANNELS: usize = 32;

/// Model artifact description, read from `config.json` next to the weights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_image_size")]
    pub image_size: usize,
    #[serde(default = "default_num_categories")]
    pub num_categories: usize,
    #[serde(default = "default_num_conditions")]
    pub num_conditions: usize,
}

fn default_image_size() -> usize {
    224
}

fn default_num_categories() -> usize {
    CATEGORY_LABELS.len()
}

fn default_num_conditions() -> usize {
    CONDITION_LABELS.len()
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            image_size: default_image_size(),
            num_categories: default_num_categories(),
            num_conditions: default_num_conditions(),
        }
    }
}

/// Conv trunk with two linear heads
#[derive(Debug)]
struct GarmentNet {
    conv1: Conv2d,
    conv2: Conv2d,
    category_head: Linear,
    condition_head: Linear,
}

impl GarmentNet {
    fn load(vb: VarBuilder, config: &ModelConfig) -> Result<Self> {
        let conv_cfg = Conv2dConfig {
            padding: 1,
            ..Default::default()
        };
        let conv1 = conv2d(3, 16, 3, conv_cfg, vb.pp("conv1"))?;
        let conv2 = conv2d(16, TRUNK_CHANNELS, 3, conv_cfg, vb.pp("conv2"))?;
        let category_head = linear(TRUNK_CHANNELS, config.num_categories, vb.pp("category_head"))?;
        let condition_head =
            linear(TRUNK_CHANNELS, config.num_conditions, vb.pp("condition_head"))?;

        Ok(GarmentNet {
            conv1,
            conv2,
            category_head,
            condition_head,
        })
    }

    /// Forward pass: (batch, 3, size, size) -> per-head logits
    fn forward(&self, batch: &Tensor) -> candle_core::Result<(Tensor, Tensor)> {
        let features = self.conv1.forward(batch)?.relu()?.max_pool2d(2)?;
        let features = self.conv2.forward(&features)?.relu()?.max_pool2d(2)?;
        // global average pool over both spatial dims -> (batch, channels)
        let pooled = features.mean(D::Minus1)?.mean(D::Minus1)?;

        let category = self.category_head.forward(&pooled)?;
        let condition = self.condition_head.forward(&pooled)?;
        Ok((category, condition))
    }
}

/// Garment classifier backed by a local candle model artifact
#[derive(Debug)]
pub struct CandleClassifier {
    net: GarmentNet,
    config: ModelConfig,
    device: Device,
}

impl CandleClassifier {
    /// Load the artifact at `model_dir`
    pub fn load(model_dir: &Path) -> Result<Self> {
        let device = Device::Cpu;
        let config = Self::read_config(model_dir)?;

        let weights_path = model_dir.join("model.safetensors");
        if !weights_path.exists() {
            return Err(EcobuddyError::ModelLoad(format!(
                "missing weights at {}",
                weights_path.display()
            )));
        }

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device)?
        };
        let net = GarmentNet::load(vb, &config)?;

        Ok(CandleClassifier {
            net,
            config,
            device,
        })
    }

    fn read_config(model_dir: &Path) -> Result<ModelConfig> {
        let config_path = model_dir.join("config.json");
        if !config_path.exists() {
            return Ok(ModelConfig::default());
        }
        let contents = fs::read_to_string(&config_path)?;
        let config: ModelConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Default artifact location: `~/.ecobuddy/models/garment`
    pub fn default_model_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".ecobuddy").join("models").join("garment"))
    }
}

impl GarmentClassifier for CandleClassifier {
    fn classify(&self, image_path: &Path) -> Result<Prediction> {
        let batch = preprocess(image_path, self.config.image_size, &self.device)?;
        let (category, condition) = self.net.forward(&batch)?;

        let category_scores = category.squeeze(0)?.to_vec1::<f32>()?;
        let condition_scores = condition.squeeze(0)?.to_vec1::<f32>()?;

        if category_scores.len() != CATEGORY_LABELS.len() {
            return Err(EcobuddyError::ShapeMismatch {
                head: "category".to_string(),
                expected: CATEGORY_LABELS.len(),
                actual: category_scores.len(),
            });
        }
        if condition_scores.len() != CONDITION_LABELS.len() {
            return Err(EcobuddyError::ShapeMismatch {
                head: "condition".to_string(),
                expected: CONDITION_LABELS.len(),
                actual: condition_scores.len(),
            });
        }

        Ok(Prediction {
            category_scores,
            condition_scores,
        })
    }
}
