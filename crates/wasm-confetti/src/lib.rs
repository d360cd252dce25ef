//! WASM Confetti
//!
//! Thin bindings to `window.confetti` from the canvas-confetti script.
//! Every call reports a missing or failing script as `Err` so callers can
//! decide to ignore it.

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = window, js_name = confetti)]
    fn confetti_js(options: &JsValue) -> Result<JsValue, JsValue>;
}

/// Length of the finale in milliseconds
const FINALE_DURATION_MS: u32 = 3000;
/// Pause between two finale bursts
const FINALE_INTERVAL_MS: u32 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

/// Options understood by canvas-confetti
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BurstOptions {
    pub particle_count: u32,
    pub spread: u32,
    pub angle: u32,
    pub start_velocity: u32,
    pub origin: Origin,
    pub colors: Vec<String>,
}

impl BurstOptions {
    /// One burst from the lower middle of the screen
    pub fn single(color: &str) -> Self {
        Self {
            particle_count: 100,
            spread: 70,
            angle: 90,
            start_velocity: 45,
            origin: Origin { x: 0.5, y: 0.6 },
            colors: palette(color),
        }
    }

    /// A smaller burst shot from the left or right edge
    pub fn side(color: &str, from_left: bool, height: f64) -> Self {
        Self {
            particle_count: 30,
            spread: 55,
            angle: if from_left { 60 } else { 120 },
            start_velocity: 55,
            origin: Origin { x: if from_left { 0.0 } else { 1.0 }, y: height.clamp(0.1, 0.9) },
            colors: palette(color),
        }
    }
}

/// Accent color plus white and gold so light accents stay visible
fn palette(color: &str) -> Vec<String> {
    let mut colors = Vec::with_capacity(3);
    if !color.is_empty() {
        colors.push(color.to_string());
    }
    colors.push("#ffffff".to_string());
    colors.push("#facc15".to_string());
    colors
}

/// Number of side bursts the finale fires after its opening burst
pub fn finale_rounds() -> u32 {
    FINALE_DURATION_MS / FINALE_INTERVAL_MS
}

fn fire(options: &BurstOptions) -> Result<(), JsValue> {
    let js_options = serde_wasm_bindgen::to_value(options).map_err(JsValue::from)?;
    confetti_js(&js_options).map(|_| ())
}

/// Single burst in the accent color
pub fn burst(color: &str) -> Result<(), JsValue> {
    fire(&BurstOptions::single(color))
}

/// Opening burst, then alternating side bursts for a few seconds
///
/// The opening burst runs synchronously so a missing script surfaces as
/// an error; the remaining bursts are best effort.
pub fn finale(color: &str) -> Result<(), JsValue> {
    fire(&BurstOptions::single(color))?;

    let color = color.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        for _ in 0..finale_rounds() {
            TimeoutFuture::new(FINALE_INTERVAL_MS).await;
            let height = 0.3 + js_sys::Math::random() * 0.4;
            let _ = fire(&BurstOptions::side(&color, true, height));
            let _ = fire(&BurstOptions::side(&color, false, height));
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_leads_with_accent() {
        let options = BurstOptions::single("#ef4444");
        assert_eq!(options.colors[0], "#ef4444");
        assert_eq!(options.colors.len(), 3);
        assert_eq!(BurstOptions::single("").colors.len(), 2);
    }

    #[test]
    fn test_side_bursts_aim_inward() {
        let left = BurstOptions::side("#3b82f6", true, 2.0);
        let right = BurstOptions::side("#3b82f6", false, 0.5);
        assert_eq!(left.origin, Origin { x: 0.0, y: 0.9 });
        assert!(left.angle < 90 && right.angle > 90);
        assert_eq!(right.origin.x, 1.0);
    }

    #[test]
    fn test_finale_rounds() {
        assert_eq!(finale_rounds(), 12);
    }
}
