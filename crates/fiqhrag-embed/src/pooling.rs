use anyhow::Result;
use candle_core::{DType, Tensor};

/// Attention-masked mean pooling over token embeddings followed by L2
/// normalization. `hidden` is `[B, T, H]`, `attention_mask` is `[B, T]`.
pub fn masked_mean_l2(hidden: &Tensor, attention_mask: &Tensor) -> Result<Tensor> {
    let mask = attention_mask.to_device(hidden.device())?.to_dtype(hidden.dtype())?;
    let mask_3d = mask.unsqueeze(2)?.broadcast_as(hidden.shape())?;
    let summed = (hidden * &mask_3d)?.sum(1)?;
    let lengths = mask.sum(1)?.unsqueeze(1)?.to_dtype(summed.dtype())?;
    let mut mean = summed.broadcast_div(&lengths)?;

    let eps_val = match hidden.dtype() {
        DType::F16 => 1e-6f32,
        _ => 1e-12f32,
    };
    let eps = Tensor::new(&[eps_val], hidden.device())?.to_dtype(hidden.dtype())?.unsqueeze(0)?;
    let norm = mean.sqr()?.sum_keepdim(1)?.sqrt()?.broadcast_add(&eps)?;
    mean = mean.broadcast_div(&norm)?;
    Ok(mean)
}
