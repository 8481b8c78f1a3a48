//! Player preferences.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Tr,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub language: Language,
    /// Volumes are in `[0, 1]`.
    pub music_volume: f32,
    pub sfx_volume: f32,
    pub pet_sound_volume: f32,
    pub music_enabled: bool,
    pub sfx_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::Tr,
            music_volume: 0.8,
            sfx_volume: 1.0,
            pet_sound_volume: 0.6,
            music_enabled: true,
            sfx_enabled: true,
        }
    }
}

fn clamp_volume(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

impl Settings {
    /// Copy with every volume forced into range.
    pub fn sanitized(self) -> Self {
        Self {
            music_volume: clamp_volume(self.music_volume),
            sfx_volume: clamp_volume(self.sfx_volume),
            pet_sound_volume: clamp_volume(self.pet_sound_volume),
            ..self
        }
    }
}
