//! Confetti Celebration
//!
//! `Notifier` backed by the canvas-confetti script.

use mission_core::{Celebration, Intensity, MissionError, MissionResult, Notifier};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConfettiNotifier;

impl Notifier for ConfettiNotifier {
    fn celebrate(&self, celebration: &Celebration) -> MissionResult<()> {
        let color = celebration.accent_color.as_str();
        let result = match celebration.intensity() {
            Intensity::Burst => wasm_confetti::burst(color),
            Intensity::Finale => wasm_confetti::finale(color),
        };
        result.map_err(|e| MissionError::Notify(format!("{:?}", e)))
    }
}
