use candle_core::Device;

/// Device selection honoring the configured preference, with CPU fallback.
pub fn select_device(preference: &str) -> Device {
    #[cfg(feature = "metal")]
    if matches!(preference, "metal" | "gpu") {
        match Device::new_metal(0) {
            Ok(dev) => {
                tracing::info!("device: metal");
                return dev;
            }
            Err(e) => tracing::warn!("metal requested but unavailable ({e}), using cpu"),
        }
    }
    #[cfg(not(feature = "metal"))]
    if matches!(preference, "metal" | "gpu") {
        tracing::warn!("built without metal support, using cpu");
    }
    tracing::info!("device: cpu");
    Device::Cpu
}
