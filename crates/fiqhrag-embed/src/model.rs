//! Local BERT-family Arabic sentence embedder built on candle.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config as BertConfig};
use tokenizers::Tokenizer;

use fiqhrag_core::config::EmbeddingConfig;
use fiqhrag_core::traits::Embedder;

use crate::device::select_device;
use crate::pooling::masked_mean_l2;
use crate::tokenize::encode_padded;

const MAX_SEQ_LEN: usize = 256;

pub struct CandleEmbedder {
    model: BertModel,
    tokenizer: Tokenizer,
    device: Device,
    dim: usize,
}

impl CandleEmbedder {
    /// Loads tokenizer.json, config.json and model weights from the resolved
    /// model directory. Any failure here aborts startup.
    pub fn load(config: &EmbeddingConfig) -> Result<Self> {
        let device = select_device(&config.device);
        let model_dir = resolve_model_dir(config)?;
        tracing::info!(model = %config.model_name, dir = %model_dir.display(), "loading embedding model");

        let tokenizer_path = model_dir.join("tokenizer.json");
        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| anyhow!("failed to load tokenizer from {}: {e}", tokenizer_path.display()))?;

        let config_path = model_dir.join("config.json");
        let bert_config: BertConfig = serde_json::from_str(
            &std::fs::read_to_string(&config_path)
                .with_context(|| format!("reading {}", config_path.display()))?,
        )?;
        let dim = bert_config.hidden_size;

        let vb = load_weights(&model_dir, &device)?;
        let model = BertModel::load(vb, &bert_config)?;
        tracing::info!(dim, "embedding model ready");
        Ok(Self { model, tokenizer, device, dim })
    }
}

impl Embedder for CandleEmbedder {
    fn dim(&self) -> usize {
        self.dim
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let (input_ids, attention_mask) =
            encode_padded(&self.tokenizer, text, MAX_SEQ_LEN, &self.device)?;
        let token_type_ids = input_ids.zeros_like()?;
        let hidden = self.model.forward(&input_ids, &token_type_ids, Some(&attention_mask))?;
        let pooled = masked_mean_l2(&hidden, &attention_mask)?;
        let out: Vec<f32> = pooled.to_device(&Device::Cpu)?.squeeze(0)?.to_vec1()?;
        Ok(out)
    }
}

fn load_weights(model_dir: &Path, device: &Device) -> Result<VarBuilder<'static>> {
    let safetensors = model_dir.join("model.safetensors");
    if safetensors.exists() {
        // Sound as long as the weight file is not modified while mapped.
        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[safetensors], DType::F32, device)? };
        return Ok(vb);
    }
    let pickled = model_dir.join("pytorch_model.bin");
    let tensors = candle_core::pickle::read_all(&pickled)
        .with_context(|| format!("reading weights from {}", pickled.display()))?;
    let map: HashMap<String, Tensor> = tensors.into_iter().collect();
    Ok(VarBuilder::from_tensors(map, DType::F32, device))
}

fn resolve_model_dir(config: &EmbeddingConfig) -> Result<PathBuf> {
    if let Some(dir) = &config.model_dir {
        let p = fiqhrag_core::config::expand_path(dir);
        if p.exists() {
            return Ok(p);
        }
        return Err(anyhow!("configured model_dir {} does not exist", p.display()));
    }
    if let Ok(dir) = std::env::var("MODEL_DIR") {
        let p = PathBuf::from(&dir);
        if p.exists() {
            return Ok(p);
        }
    }
    // Fall back to models/<last path segment of the model name>
    let name = config.model_name.rsplit('/').next().unwrap_or(&config.model_name);
    let local = Path::new("models").join(name);
    if local.exists() {
        return Ok(local);
    }
    Err(anyhow!("could not locate model directory for {}", config.model_name))
}
