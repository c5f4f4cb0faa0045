use crate::assets::textures::TextureId;

/// RGB tint applied to a mesh (also the fallback surface color while its
/// texture is still pending).
#[derive(Debug, Clone, Copy)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0.8, g: 0.8, b: 0.8 }
    }
}

/// Renderable primitive.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    /// Sphere of the given radius.
    Sphere { radius: f32 },
    /// Flat annulus in the local XY plane (orbit paths, planetary rings).
    /// Rendered double-sided.
    Ring { inner: f32, outer: f32 },
}

/// Component for rendered meshes.
#[derive(Debug, Clone, Copy)]
pub struct MeshComponent {
    pub shape: Shape,
    pub color: Color,
    /// Surface texture slot; `None` renders the flat tint.
    pub texture: Option<TextureId>,
    /// 1.0 = opaque; lower values are drawn in the translucent pass.
    pub opacity: f32,
    /// Phong specular exponent (default: 32.0).
    pub shininess: f32,
    /// Self-luminance multiplier. Anything > 0 renders unlit (the sun);
    /// 0 means the surface reacts to scene lighting.
    pub emissive: f32,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self {
            shape: Shape::Sphere { radius: 1.0 },
            color: Color::default(),
            texture: None,
            opacity: 1.0,
            shininess: 32.0,
            emissive: 0.0,
        }
    }
}

impl MeshComponent {
    pub fn sphere(radius: f32, color: Color) -> Self {
        Self {
            shape: Shape::Sphere { radius },
            color,
            ..Default::default()
        }
    }

    pub fn ring(inner: f32, outer: f32, color: Color) -> Self {
        Self {
            shape: Shape::Ring { inner, outer },
            color,
            ..Default::default()
        }
    }

    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    /// Whether this mesh belongs in the translucent render pass.
    pub fn is_translucent(&self) -> bool {
        self.opacity < 1.0
    }
}
