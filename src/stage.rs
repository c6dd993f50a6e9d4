use crate::constants::STAGE_GLOBAL;
use crate::core::Pose;
use glam::Vec3;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

// The page owns the three.js scene, camera, lights and GLTF loader and
// exposes them as `window.skylineStage`. Everything here is a thin call-through.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = skylineStage, js_name = load)]
    fn stage_load(url: &str) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = skylineStage, js_name = boundingSize)]
    fn stage_bounding_size() -> Result<js_sys::Float32Array, JsValue>;

    #[wasm_bindgen(catch, js_namespace = skylineStage, js_name = setScale)]
    fn stage_set_scale(scale: f32) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = skylineStage, js_name = setPose)]
    fn stage_set_pose(
        px: f32,
        py: f32,
        pz: f32,
        rx: f32,
        ry: f32,
        rz: f32,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = skylineStage, js_name = render)]
    fn stage_render(dt_sec: f32) -> Result<(), JsValue>;
}

/// True when the page has installed the stage global.
pub fn is_available() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str(STAGE_GLOBAL)).unwrap_or(false)
}

/// Load one model source; resolves once it has been added to the scene.
pub async fn load_model(url: String) -> anyhow::Result<()> {
    let promise = stage_load(&url).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

/// Axis-aligned bounding box size of the loaded model.
pub fn bounding_size() -> anyhow::Result<Vec3> {
    let raw = stage_bounding_size()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .to_vec();
    match raw.as_slice() {
        [x, y, z, ..] => Ok(Vec3::new(*x, *y, *z)),
        _ => anyhow::bail!("boundingSize returned {} values", raw.len()),
    }
}

pub fn set_scale(scale: f32) -> anyhow::Result<()> {
    stage_set_scale(scale).map_err(|e| anyhow::anyhow!("{:?}", e))
}

pub fn apply_pose(pose: &Pose) -> anyhow::Result<()> {
    let (p, r) = (pose.position, pose.rotation);
    stage_set_pose(p.x, p.y, p.z, r.x, r.y, r.z).map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Draw one frame. The stage also advances the model's own first animation
/// clip (propellers and the like) by `dt_sec` here.
pub fn render(dt_sec: f32) -> anyhow::Result<()> {
    stage_render(dt_sec).map_err(|e| anyhow::anyhow!("{:?}", e))
}
