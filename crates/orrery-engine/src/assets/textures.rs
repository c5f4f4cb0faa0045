use crate::assets::manifest::TextureManifest;

/// Handle to a texture slot in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Lifecycle of one texture resource.
///
/// Every slot starts `Pending`; the host reports the load outcome. The render
/// step tolerates pending and failed slots every frame: the mesh simply
/// draws untextured until (unless) the image arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureState {
    Pending,
    Ready,
    Failed,
}

#[derive(Debug, Clone)]
struct TextureSlot {
    name: String,
    path: String,
    state: TextureState,
}

/// Registry of texture slots, indexed by `TextureId`.
///
/// Slots are allocated by name on demand, so scene construction never waits
/// on (or fails because of) the manifest or the image loads.
pub struct TextureRegistry {
    slots: Vec<TextureSlot>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Look up a slot by name, allocating a pending one if missing.
    pub fn slot_for(&mut self, name: &str) -> TextureId {
        if let Some(index) = self.slots.iter().position(|s| s.name == name) {
            return TextureId(index as u32);
        }
        self.slots.push(TextureSlot {
            name: name.to_string(),
            path: String::new(),
            state: TextureState::Pending,
        });
        TextureId(self.slots.len() as u32 - 1)
    }

    /// Fill in source paths from a manifest, allocating slots for any names
    /// the scene has not referenced yet.
    pub fn apply_manifest(&mut self, manifest: &TextureManifest) {
        for (name, path) in &manifest.textures {
            let id = self.slot_for(name);
            self.slots[id.0 as usize].path = path.clone();
        }
    }

    /// Mark a slot's image as loaded.
    pub fn mark_ready(&mut self, id: TextureId) {
        if let Some(slot) = self.slots.get_mut(id.0 as usize) {
            slot.state = TextureState::Ready;
        }
    }

    /// Mark a slot's image load as failed. Non-fatal: the diagnostic names
    /// the resource and the mesh keeps rendering untextured.
    pub fn mark_failed(&mut self, id: TextureId) {
        if let Some(slot) = self.slots.get_mut(id.0 as usize) {
            slot.state = TextureState::Failed;
            log::warn!(
                "texture '{}' failed to load ({}); rendering untextured",
                slot.name,
                if slot.path.is_empty() { "no source path" } else { &slot.path },
            );
        }
    }

    pub fn state(&self, id: TextureId) -> TextureState {
        self.slots
            .get(id.0 as usize)
            .map(|s| s.state)
            .unwrap_or(TextureState::Failed)
    }

    /// Slot index for the wire format: the id once the texture is ready,
    /// -1.0 while pending or failed.
    pub fn render_index(&self, id: Option<TextureId>) -> f32 {
        match id {
            Some(id) if self.state(id) == TextureState::Ready => id.0 as f32,
            _ => -1.0,
        }
    }

    /// (slot index, source path) pairs for the host image loader.
    pub fn sources(&self) -> Vec<(u32, String)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.path.is_empty())
            .map(|(i, s)| (i as u32, s.path.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_for_is_idempotent() {
        let mut reg = TextureRegistry::new();
        let a = reg.slot_for("earth");
        let b = reg.slot_for("earth");
        assert_eq!(a, b);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn slots_start_pending_and_render_untextured() {
        let mut reg = TextureRegistry::new();
        let id = reg.slot_for("mars");
        assert_eq!(reg.state(id), TextureState::Pending);
        assert_eq!(reg.render_index(Some(id)), -1.0);
    }

    #[test]
    fn ready_slot_reports_its_index() {
        let mut reg = TextureRegistry::new();
        let _ = reg.slot_for("sun");
        let id = reg.slot_for("venus");
        reg.mark_ready(id);
        assert_eq!(reg.render_index(Some(id)), 1.0);
    }

    #[test]
    fn failed_slot_stays_untextured() {
        let mut reg = TextureRegistry::new();
        let id = reg.slot_for("jupiter");
        reg.mark_failed(id);
        assert_eq!(reg.state(id), TextureState::Failed);
        assert_eq!(reg.render_index(Some(id)), -1.0);
    }

    #[test]
    fn manifest_fills_paths_for_existing_slots() {
        let mut reg = TextureRegistry::new();
        let id = reg.slot_for("earth");

        let manifest = TextureManifest::from_json(
            r#"{ "textures": { "earth": "textures/earth.jpg" } }"#,
        )
        .unwrap();
        reg.apply_manifest(&manifest);

        let sources = reg.sources();
        assert_eq!(sources, vec![(id.0, "textures/earth.jpg".to_string())]);
    }

    #[test]
    fn pathless_slots_are_not_load_sources() {
        let mut reg = TextureRegistry::new();
        let _ = reg.slot_for("unlisted");
        assert!(reg.sources().is_empty());
    }
}
