//! In-memory scene backend
//!
//! Keeps every node in a slot map and hands out shared handles, the way a
//! scene-graph binding would. Nothing is drawn; the recorded state can be
//! inspected by tests and logged by the demo.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};

use super::backend::{
    CameraDesc, LightDesc, MaterialDesc, SceneBackend, SceneError, Spatial, SphereOptions,
};
use crate::foundation::math::Vec3;

new_key_type! {
    /// Key of a mesh node
    pub struct NodeId;

    /// Key of a material
    pub struct MaterialId;
}

/// Geometry recorded for a node
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A single sphere
    Sphere(SphereOptions),
    /// Several meshes baked together; the parts keep the transform they had
    /// when they were merged
    Merged(Vec<Node>),
}

/// State of a mesh node
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Node name
    pub name: String,
    /// Geometry
    pub kind: NodeKind,
    /// Position
    pub position: Vec3,
    /// Euler rotation (pitch, yaw, roll)
    pub rotation: Vec3,
    /// Scale factors
    pub scaling: Vec3,
    /// Materials, one per merged part
    pub materials: Vec<MaterialId>,
}

impl Node {
    fn new(name: &str, kind: NodeKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scaling: Vec3::new(1.0, 1.0, 1.0),
            materials: Vec::new(),
        }
    }
}

/// Handle to a node of a [`HeadlessScene`]
#[derive(Debug, Clone)]
pub struct HeadlessEntity {
    id: NodeId,
    node: Rc<RefCell<Node>>,
}

impl HeadlessEntity {
    /// Scene key of this entity
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Node name
    pub fn name(&self) -> String {
        self.node.borrow().name.clone()
    }

    /// Copy of the current node state
    pub fn snapshot(&self) -> Node {
        self.node.borrow().clone()
    }
}

impl Spatial for HeadlessEntity {
    fn position(&self) -> Vec3 {
        self.node.borrow().position
    }

    fn set_position(&mut self, position: Vec3) {
        self.node.borrow_mut().position = position;
    }

    fn rotation(&self) -> Vec3 {
        self.node.borrow().rotation
    }

    fn set_rotation(&mut self, rotation: Vec3) {
        self.node.borrow_mut().rotation = rotation;
    }

    fn scaling(&self) -> Vec3 {
        self.node.borrow().scaling
    }

    fn set_scaling(&mut self, scaling: Vec3) {
        self.node.borrow_mut().scaling = scaling;
    }
}

/// Scene backend that only records what it is asked to build
#[derive(Debug, Default)]
pub struct HeadlessScene {
    nodes: SlotMap<NodeId, Rc<RefCell<Node>>>,
    materials: SlotMap<MaterialId, MaterialDesc>,
    cameras: Vec<CameraDesc>,
    lights: Vec<LightDesc>,
}

impl HeadlessScene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live mesh nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Copy of a node's state, `None` once disposed
    pub fn node(&self, id: NodeId) -> Option<Node> {
        self.nodes.get(id).map(|node| node.borrow().clone())
    }

    /// Live nodes with their keys
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, Node)> + '_ {
        self.nodes.iter().map(|(id, node)| (id, node.borrow().clone()))
    }

    /// Look up a material
    pub fn material(&self, id: MaterialId) -> Option<&MaterialDesc> {
        self.materials.get(id)
    }

    /// Number of created materials
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Cameras in creation order
    pub fn cameras(&self) -> &[CameraDesc] {
        &self.cameras
    }

    /// Lights in creation order
    pub fn lights(&self) -> &[LightDesc] {
        &self.lights
    }

    fn check_owned(&self, entity: &HeadlessEntity) -> Result<(), SceneError> {
        match self.nodes.get(entity.id) {
            Some(node) if Rc::ptr_eq(node, &entity.node) => Ok(()),
            _ => Err(SceneError::UnknownEntity(entity.name())),
        }
    }

    fn insert(&mut self, node: Node) -> HeadlessEntity {
        let node = Rc::new(RefCell::new(node));
        let id = self.nodes.insert(Rc::clone(&node));
        HeadlessEntity { id, node }
    }
}

impl SceneBackend for HeadlessScene {
    type Entity = HeadlessEntity;
    type Material = MaterialId;

    fn create_sphere(
        &mut self,
        name: &str,
        options: &SphereOptions,
    ) -> Result<HeadlessEntity, SceneError> {
        options.validate()?;
        log::trace!(
            "Creating sphere '{}' (diameter {}, {} segments)",
            name,
            options.diameter,
            options.segments
        );
        Ok(self.insert(Node::new(name, NodeKind::Sphere(*options))))
    }

    fn create_material(&mut self, desc: &MaterialDesc) -> Result<MaterialId, SceneError> {
        desc.validate()?;
        Ok(self.materials.insert(desc.clone()))
    }

    fn set_material(
        &mut self,
        entity: &HeadlessEntity,
        material: &MaterialId,
    ) -> Result<(), SceneError> {
        self.check_owned(entity)?;
        if !self.materials.contains_key(*material) {
            return Err(SceneError::InvalidDescriptor(format!(
                "material {material:?} does not exist"
            )));
        }
        entity.node.borrow_mut().materials = vec![*material];
        Ok(())
    }

    fn merge_meshes(&mut self, parts: Vec<HeadlessEntity>) -> Result<HeadlessEntity, SceneError> {
        let Some(first) = parts.first() else {
            return Err(SceneError::EmptyMerge);
        };
        let mut seen = HashSet::with_capacity(parts.len());
        for part in &parts {
            self.check_owned(part)?;
            if !seen.insert(part.id) {
                return Err(SceneError::InvalidDescriptor(format!(
                    "mesh '{}' listed twice in one merge",
                    part.name()
                )));
            }
        }

        let name = first.name();
        let mut baked = Vec::with_capacity(parts.len());
        let mut materials = Vec::new();
        for part in parts {
            self.nodes.remove(part.id);
            let node = part.snapshot();
            materials.extend(node.materials.iter().copied());
            baked.push(node);
        }

        log::trace!("Merged {} meshes into '{}'", baked.len(), name);
        let mut merged = Node::new(&name, NodeKind::Merged(baked));
        merged.materials = materials;
        Ok(self.insert(merged))
    }

    fn add_camera(&mut self, desc: &CameraDesc) -> Result<(), SceneError> {
        if desc.position == desc.target {
            return Err(SceneError::InvalidDescriptor(format!(
                "camera '{}' targets its own position",
                desc.name
            )));
        }
        self.cameras.push(desc.clone());
        Ok(())
    }

    fn add_light(&mut self, desc: &LightDesc) -> Result<(), SceneError> {
        desc.validate()?;
        self.lights.push(desc.clone());
        Ok(())
    }
}
