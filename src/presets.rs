use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tools::DEFAULT_STICKER_SIZE;

/// Storage key the custom preset blob lives under
pub const STORAGE_KEY: &str = "custom_stickers";

/// A sticker the panel can turn into an active tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerPreset {
    pub glyph: String,
    pub size: f32,
}

impl StickerPreset {
    pub fn new(glyph: impl Into<String>, size: f32) -> Self {
        Self {
            glyph: glyph.into(),
            size,
        }
    }
}

/// Errors that can occur while decoding the stored preset blob
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("failed to decode sticker presets: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("sticker glyph must not be empty")]
    EmptyGlyph,

    #[error("sticker size must be positive, got {0}")]
    InvalidSize(f32),
}

/// The stickers every session starts with
pub fn builtin_presets() -> Vec<StickerPreset> {
    ["🎃", "⭐", "❤"]
        .into_iter()
        .map(|glyph| StickerPreset::new(glyph, DEFAULT_STICKER_SIZE))
        .collect()
}

/// Validate a single preset before it is offered in the panel
pub fn validate(preset: &StickerPreset) -> Result<(), PresetError> {
    if preset.glyph.trim().is_empty() {
        return Err(PresetError::EmptyGlyph);
    }
    if preset.size <= 0.0 {
        return Err(PresetError::InvalidSize(preset.size));
    }
    Ok(())
}

/// Decode a stored blob into an ordered preset list
pub fn decode(blob: &str) -> Result<Vec<StickerPreset>, PresetError> {
    let presets: Vec<StickerPreset> = serde_json::from_str(blob)?;
    for preset in &presets {
        validate(preset)?;
    }
    Ok(presets)
}

/// Encode the custom preset list for storage
pub fn encode(presets: &[StickerPreset]) -> Result<String, PresetError> {
    Ok(serde_json::to_string(presets)?)
}

/// Decode the stored blob, substituting an empty list if it is missing or
/// malformed. The drawing core never sees bad data.
pub fn load_or_default(blob: Option<String>) -> Vec<StickerPreset> {
    match blob {
        None => Vec::new(),
        Some(blob) => decode(&blob).unwrap_or_else(|err| {
            log::warn!("ignoring stored sticker presets: {err}");
            Vec::new()
        }),
    }
}
