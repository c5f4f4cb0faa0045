/// Starfield backdrop: points hashed uniformly into a cube around the origin.
///
/// Deterministic integer hashing instead of an RNG crate, so the field is
/// identical every run and the buffer never needs regeneration.

/// Avalanche hash over a 32-bit seed.
pub fn star_hash(seed: u32) -> u32 {
    let mut n = seed;
    n = n.wrapping_mul(2654435761);
    n ^= n >> 16;
    n = n.wrapping_mul(2246822519);
    n ^= n >> 13;
    n
}

/// Flat xyz vertex buffer for the host's point renderer.
pub struct Starfield {
    positions: Vec<f32>,
}

impl Starfield {
    pub fn empty() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    /// Generate `count` stars inside a cube of side `extent` centered on the
    /// origin.
    pub fn generate(count: usize, extent: f32, seed: u32) -> Self {
        let mut positions = Vec::with_capacity(count * 3);
        let frac = |h: u32| (h as f32) / (u32::MAX as f32);

        for i in 0..count as u32 {
            let base = seed.wrapping_add(i.wrapping_mul(3));
            let x = (frac(star_hash(base)) - 0.5) * extent;
            let y = (frac(star_hash(base.wrapping_add(1))) - 0.5) * extent;
            let z = (frac(star_hash(base.wrapping_add(2))) - 0.5) * extent;
            positions.extend_from_slice(&[x, y, z]);
        }

        Self { positions }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Raw pointer to the position data for host reads.
    pub fn positions_ptr(&self) -> *const f32 {
        self.positions.as_ptr()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(star_hash(42), star_hash(42));
        assert_ne!(star_hash(0), star_hash(1));
    }

    #[test]
    fn generates_requested_count() {
        let field = Starfield::generate(1000, 2000.0, 7);
        assert_eq!(field.vertex_count(), 1000);
    }

    #[test]
    fn stars_stay_inside_the_cube() {
        let extent = 2000.0;
        let field = Starfield::generate(500, extent, 7);
        for chunk in field.positions.chunks(3) {
            for &coord in chunk {
                assert!(coord.abs() <= extent / 2.0, "star out of bounds: {coord}");
            }
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = Starfield::generate(64, 100.0, 3);
        let b = Starfield::generate(64, 100.0, 3);
        assert_eq!(a.positions, b.positions);
    }
}
