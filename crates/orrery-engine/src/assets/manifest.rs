use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Texture manifest: named surface images addressed by path.
/// Loaded from a JSON file by the host and handed over at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureManifest {
    /// Texture name → relative path (e.g. "earth" → "textures/earth.jpg").
    #[serde(default)]
    pub textures: HashMap<String, String>,
}

impl TextureManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
