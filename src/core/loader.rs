use super::constants::MODEL_TARGET_SIZE;
use glam::Vec3;
use std::future::Future;

/// Result of a successful candidate load.
#[derive(Debug)]
pub struct Loaded<T> {
    pub index: usize,
    pub source: String,
    pub value: T,
}

/// Try `candidates` in priority order and keep the first one that loads.
///
/// Failures are logged and skipped; `None` means every candidate failed.
pub async fn load_first<T, F, Fut>(candidates: &[&str], mut load: F) -> Option<Loaded<T>>
where
    F: FnMut(&str) -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    for (index, source) in candidates.iter().enumerate() {
        match load(source).await {
            Ok(value) => {
                log::info!("[loader] loaded {} (candidate {})", source, index);
                return Some(Loaded {
                    index,
                    source: (*source).to_string(),
                    value,
                });
            }
            Err(e) => log::warn!("[loader] {} failed: {:?}", source, e),
        }
    }
    log::warn!("[loader] all {} candidates failed", candidates.len());
    None
}

/// Uniform scale that makes the largest bounding dimension `MODEL_TARGET_SIZE`.
pub fn normalized_scale(size: Vec3) -> f32 {
    let max_dim = size.max_element();
    let max_dim = if max_dim.is_finite() && max_dim > 0.0 {
        max_dim
    } else {
        1.0
    };
    MODEL_TARGET_SIZE / max_dim
}
