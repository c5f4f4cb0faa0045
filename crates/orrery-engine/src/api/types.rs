/// Unique identifier for a node in the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// Stable index of a celestial body in its registry.
///
/// Render nodes carry this as a back-reference so the picking service can
/// resolve an intersected node to its body without an identity-keyed side map.
pub type BodyId = usize;
