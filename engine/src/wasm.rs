//! Browser bindings.
//!
//! A thin `wasm-bindgen` wrapper around [`Level`]. Vectors cross the boundary
//! as plain numbers and reports come back as JSON strings, so the host page
//! only needs `JSON.parse`.

use wasm_bindgen::prelude::*;

use crate::game::{Level, LevelConfig};
use crate::input::DriveKeys;
use crate::physics::Vec3;

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct WasmLevel {
    level: Level,
}

#[wasm_bindgen]
impl WasmLevel {
    /// Build the level. `config_json` may be empty for the default tuning.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmLevel, JsValue> {
        console_error_panic_hook::set_once();

        let config = if config_json.trim().is_empty() {
            LevelConfig::default()
        } else {
            LevelConfig::from_json_str(config_json).map_err(to_js_error)?
        };
        let level = Level::new(config).map_err(to_js_error)?;
        Ok(WasmLevel { level })
    }

    /// Advance one frame with the current WASD state; returns the frame
    /// report as JSON.
    pub fn update(
        &mut self,
        delta: f32,
        w: bool,
        a: bool,
        s: bool,
        d: bool,
    ) -> Result<String, JsValue> {
        let keys = DriveKeys::from_wasd(w, a, s, d);
        let report = self.level.update(delta, &keys);
        serde_json::to_string(&report).map_err(to_js_error)
    }

    /// Car pose as JSON without stepping.
    #[wasm_bindgen(js_name = carState)]
    pub fn car_state(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.level.car_state()).map_err(to_js_error)
    }

    /// Walls, platforms and ramps as JSON for building meshes.
    #[wasm_bindgen(js_name = layoutJson)]
    pub fn layout_json(&self) -> Result<String, JsValue> {
        self.level.layout().to_json().map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = spawnCollectible)]
    pub fn spawn_collectible(&mut self, x: f32, y: f32, z: f32) -> u32 {
        self.level.spawn_collectible(Vec3::new(x, y, z))
    }

    /// Throws if the id is unknown or already removed.
    #[wasm_bindgen(js_name = removeCollectible)]
    pub fn remove_collectible(&mut self, id: u32) -> Result<(), JsValue> {
        self.level.remove_collectible(id).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = spawnSphere)]
    pub fn spawn_sphere(&mut self, x: f32, y: f32, z: f32, vx: f32, vy: f32, vz: f32) -> u32 {
        self.level.spawn_sphere(Vec3::new(x, y, z), Vec3::new(vx, vy, vz))
    }
}
