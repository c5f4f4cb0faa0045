/// Celestial body registry: fixed visual and motion parameters.
///
/// Speeds are hand-tuned radians-per-step constants chosen for readability,
/// not derived from real orbital periods. Orbit radii are scene units from
/// the sun; textures are manifest keys resolved at scene build time.

/// Declarative ring capability: any body can carry a ring system.
#[derive(Debug, Clone, Copy)]
pub struct RingSystem {
    /// Inner/outer ring radius as multiples of the body radius.
    pub inner_factor: f32,
    pub outer_factor: f32,
    /// Axial tilt in radians.
    pub tilt: f32,
    pub opacity: f32,
    /// Manifest key of the ring texture.
    pub texture: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CelestialBody {
    /// Unique display name.
    pub name: &'static str,
    /// Sphere radius in scene units.
    pub radius: f32,
    /// Manifest key of the surface texture.
    pub texture: &'static str,
    /// Distance from the origin; 0 only for the sun.
    pub orbit_radius: f32,
    /// Spin advance per animation step (radians).
    pub rotation_speed: f32,
    /// Orbit advance per animation step (radians); 0 for the sun.
    pub orbit_speed: f32,
    /// Fallback tint while the texture is pending.
    pub color: (f32, f32, f32),
    pub ring: Option<RingSystem>,
}

pub const SUN: usize = 0;
pub const BODY_COUNT: usize = 9;

/// Saturn's axial tilt in degrees.
const SATURN_TILT_DEG: f32 = 26.7;

/// The sun and the eight planets, in picking tie-break order.
pub fn registry() -> [CelestialBody; BODY_COUNT] {
    let saturn_ring = RingSystem {
        inner_factor: 1.5,
        outer_factor: 2.5,
        tilt: SATURN_TILT_DEG.to_radians(),
        opacity: 0.8,
        texture: "saturn_ring",
    };

    [
        CelestialBody {
            name: "Sun",
            radius: 5.0,
            texture: "sun",
            orbit_radius: 0.0,
            rotation_speed: 0.004,
            orbit_speed: 0.0,
            color: (1.0, 0.9, 0.5),
            ring: None,
        },
        CelestialBody {
            name: "Mercury",
            radius: 0.8,
            texture: "mercury",
            orbit_radius: 10.0,
            rotation_speed: 0.004,
            orbit_speed: 0.04,
            color: (0.60, 0.55, 0.50),
            ring: None,
        },
        CelestialBody {
            name: "Venus",
            radius: 1.2,
            texture: "venus",
            orbit_radius: 15.0,
            rotation_speed: 0.002,
            orbit_speed: 0.015,
            color: (0.90, 0.75, 0.40),
            ring: None,
        },
        CelestialBody {
            name: "Earth",
            radius: 1.5,
            texture: "earth",
            orbit_radius: 20.0,
            rotation_speed: 0.02,
            orbit_speed: 0.01,
            color: (0.20, 0.40, 0.80),
            ring: None,
        },
        CelestialBody {
            name: "Mars",
            radius: 1.2,
            texture: "mars",
            orbit_radius: 25.0,
            rotation_speed: 0.018,
            orbit_speed: 0.008,
            color: (0.80, 0.30, 0.15),
            ring: None,
        },
        CelestialBody {
            name: "Jupiter",
            radius: 3.0,
            texture: "jupiter",
            orbit_radius: 35.0,
            rotation_speed: 0.04,
            orbit_speed: 0.002,
            color: (0.80, 0.70, 0.50),
            ring: None,
        },
        CelestialBody {
            name: "Saturn",
            radius: 2.5,
            texture: "saturn",
            orbit_radius: 45.0,
            rotation_speed: 0.038,
            orbit_speed: 0.0009,
            color: (0.85, 0.75, 0.50),
            ring: Some(saturn_ring),
        },
        CelestialBody {
            name: "Uranus",
            radius: 2.0,
            texture: "uranus",
            orbit_radius: 55.0,
            rotation_speed: 0.03,
            orbit_speed: 0.0004,
            color: (0.50, 0.75, 0.85),
            ring: None,
        },
        CelestialBody {
            name: "Neptune",
            radius: 2.0,
            texture: "neptune",
            orbit_radius: 65.0,
            rotation_speed: 0.032,
            orbit_speed: 0.0001,
            color: (0.25, 0.35, 0.80),
            ring: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = registry().iter().map(|b| b.name).collect();
        assert_eq!(names.len(), BODY_COUNT);
    }

    #[test]
    fn exactly_one_anchor_body() {
        let bodies = registry();
        let anchors: Vec<_> = bodies.iter().filter(|b| b.orbit_radius == 0.0).collect();
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].name, "Sun");
        assert_eq!(anchors[0].orbit_speed, 0.0);
    }

    #[test]
    fn orbiting_bodies_have_positive_radius_and_speed() {
        for body in registry().iter().skip(1) {
            assert!(body.orbit_radius > 0.0, "{} has no orbit radius", body.name);
            assert!(body.orbit_speed > 0.0, "{} has no orbit speed", body.name);
        }
    }

    #[test]
    fn only_saturn_carries_rings() {
        let ringed: Vec<_> = registry()
            .iter()
            .filter(|b| b.ring.is_some())
            .map(|b| b.name)
            .collect();
        assert_eq!(ringed, vec!["Saturn"]);
    }

    #[test]
    fn orbit_radii_increase_outward() {
        let bodies = registry();
        for pair in bodies.windows(2) {
            assert!(pair[0].orbit_radius < pair[1].orbit_radius);
        }
    }
}
