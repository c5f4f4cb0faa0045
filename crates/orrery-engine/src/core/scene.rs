use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::api::types::{BodyId, NodeId};
use crate::components::mesh::MeshComponent;

/// Local TRS transform of a scene node.
///
/// Rotation is stored as Euler XYZ angles in radians rather than a quaternion:
/// the animation contract accumulates per-axis angles every step, and angles
/// must stay readable (spin = sum of increments) after arbitrarily many steps.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Compose the local matrix (scale, then rotate XYZ, then translate).
    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.translation)
    }
}

/// A node in the scene graph: a transform plus an optional renderable mesh.
///
/// Bodies nest their sphere mesh inside an orbit-group node; rotating the
/// group about +Y sweeps the mesh around the origin.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,
    /// Display name (tooltip text for pickable nodes).
    pub tag: String,
    /// Invisible nodes are skipped by the render pass but still propagate.
    pub visible: bool,
    /// Transform relative to the parent (or world, for roots).
    pub local: Transform,
    /// World matrix, valid after the last `propagate` call.
    pub world: Mat4,
    /// Renderable mesh (optional; pure grouping nodes have none).
    pub mesh: Option<MeshComponent>,
    /// Registry back-reference; `Some` makes this node pickable.
    pub body: Option<BodyId>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            tag: String::new(),
            visible: true,
            local: Transform::default(),
            world: Mat4::IDENTITY,
            mesh: None,
            body: None,
            parent: None,
            children: Vec::new(),
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_local(mut self, local: Transform) -> Self {
        self.local = local;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_body(mut self, body: BodyId) -> Self {
        self.body = Some(body);
        self
    }

    /// World-space position, valid after propagation.
    pub fn world_translation(&self) -> Vec3 {
        self.world.w_axis.truncate()
    }

    /// Approximate world-space uniform scale (length of the world X basis).
    pub fn world_scale(&self) -> f32 {
        self.world.x_axis.truncate().length()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Scene graph with flat `Vec` storage and explicit parent/child links.
/// Designed for tens of nodes (one solar system), not millions.
pub struct SceneGraph {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(64),
            roots: Vec::new(),
        }
    }

    /// Attach a node to the world root.
    pub fn spawn(&mut self, node: Node) -> NodeId {
        let id = node.id;
        self.nodes.push(node);
        self.roots.push(id);
        id
    }

    /// Attach a node as a child of `parent`.
    /// Falls back to a root attachment if the parent does not exist.
    pub fn spawn_child(&mut self, mut node: Node, parent: NodeId) -> NodeId {
        let id = node.id;
        if self.index_of(parent).is_some() {
            node.parent = Some(parent);
            self.nodes.push(node);
            if let Some(parent_node) = self.get_mut(parent) {
                parent_node.children.push(id);
            }
        } else {
            self.nodes.push(node);
            self.roots.push(id);
        }
        id
    }

    /// Get a reference to a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Get a mutable reference to a node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Find the first node with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.tag == tag)
    }

    /// Iterate over all nodes in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Recompute world matrices for every node, roots first.
    ///
    /// Called once per frame after all transform mutations for the step, so a
    /// frame never observes a half-updated hierarchy.
    pub fn propagate(&mut self) {
        let roots = self.roots.clone();
        for root in roots {
            self.propagate_node(root, Mat4::IDENTITY);
        }
    }

    fn propagate_node(&mut self, id: NodeId, parent_world: Mat4) {
        let Some(index) = self.index_of(id) else { return };
        let world = parent_world * self.nodes[index].local.matrix();
        self.nodes[index].world = world;

        let children = self.nodes[index].children.clone();
        for child in children {
            self.propagate_node(child, world);
        }
    }

    fn index_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn spawn_and_get() {
        let mut scene = SceneGraph::new();
        let id = NodeId(1);
        scene.spawn(Node::new(id).with_local(Transform::new().with_translation(Vec3::new(10.0, 20.0, 30.0))));
        let node = scene.get(id).unwrap();
        assert_eq!(node.local.translation, Vec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn find_by_tag() {
        let mut scene = SceneGraph::new();
        scene.spawn(Node::new(NodeId(1)).with_tag("Earth"));
        scene.spawn(Node::new(NodeId(2)).with_tag("Mars"));
        assert_eq!(scene.find_by_tag("Mars").unwrap().id, NodeId(2));
    }

    #[test]
    fn child_records_parent() {
        let mut scene = SceneGraph::new();
        let parent = scene.spawn(Node::new(NodeId(1)));
        let child = scene.spawn_child(Node::new(NodeId(2)), parent);
        assert_eq!(scene.get(child).unwrap().parent(), Some(parent));
        assert_eq!(scene.get(parent).unwrap().children(), &[child]);
    }

    #[test]
    fn propagate_offsets_child_by_parent() {
        let mut scene = SceneGraph::new();
        let parent = scene.spawn(
            Node::new(NodeId(1))
                .with_local(Transform::new().with_translation(Vec3::new(100.0, 0.0, 0.0))),
        );
        scene.spawn_child(
            Node::new(NodeId(2))
                .with_local(Transform::new().with_translation(Vec3::new(50.0, 0.0, 0.0))),
            parent,
        );

        scene.propagate();

        let child = scene.get(NodeId(2)).unwrap();
        assert!((child.world_translation() - Vec3::new(150.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn parent_yaw_sweeps_child_around_origin() {
        // A mesh offset +X inside a group rotated PI about +Y ends up at -X.
        let mut scene = SceneGraph::new();
        let group = scene.spawn(
            Node::new(NodeId(1)).with_local(Transform::new().with_rotation(Vec3::new(0.0, PI, 0.0))),
        );
        scene.spawn_child(
            Node::new(NodeId(2))
                .with_local(Transform::new().with_translation(Vec3::new(20.0, 0.0, 0.0))),
            group,
        );

        scene.propagate();

        let child = scene.get(NodeId(2)).unwrap();
        assert!((child.world_translation() - Vec3::new(-20.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn propagate_preserves_scale() {
        let mut scene = SceneGraph::new();
        let parent = scene.spawn(
            Node::new(NodeId(1)).with_local(Transform::new().with_scale(Vec3::splat(2.0))),
        );
        scene.spawn_child(Node::new(NodeId(2)), parent);

        scene.propagate();

        assert!((scene.get(NodeId(2)).unwrap().world_scale() - 2.0).abs() < 1e-5);
    }
}
