//! Retained in-memory drawable tree.
//!
//! [`Scene`] implements every backend port by recording: elements become
//! nodes in an arena, animation requests and drop shadows are stored on the
//! node they target. Nothing is interpolated; the tree describes the final
//! frame plus the transitions leading to it, ready to be serialized or
//! inspected.

use super::backend::{
    Animator, AttrValue, Attributes, CellLabel, LabelPlacer, ShadowFilter, Surface,
};
use super::matrix::CellIndex;
use super::options::{DataLabelOptions, DropShadow};
use super::rect::Rect;
use super::transition::AnimationIntent;
use heatgrid_core::Color;

/// Handle to a node in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in creation order.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// What a node draws.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A container.
    Group,
    /// A rounded rectangle.
    Rect { rect: Rect, radius: f64 },
    /// A text label.
    Label(CellLabel),
}

/// One element of the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub attributes: Attributes,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    /// Animations requested for this node, in request order.
    pub animations: Vec<AnimationIntent>,
    pub shadow: Option<DropShadow>,
}

impl Node {
    fn new(kind: NodeKind, attributes: Attributes) -> Self {
        Self {
            kind,
            attributes,
            children: Vec::new(),
            parent: None,
            animations: Vec::new(),
            shadow: None,
        }
    }

    /// Look up an attribute.
    pub fn attribute(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// The `fill` attribute, if it holds a color.
    pub fn fill(&self) -> Option<Color> {
        match self.attribute("fill")? {
            AttrValue::Color(color) => Some(*color),
            AttrValue::Text(text) => text.parse().ok(),
            _ => None,
        }
    }

    /// The cell a rect node was drawn for, from its `i`/`j` attributes.
    pub fn cell(&self) -> Option<CellIndex> {
        match (self.attribute("i")?, self.attribute("j")?) {
            (AttrValue::Index(series), AttrValue::Index(point)) => {
                Some(CellIndex::new(*series, *point))
            }
            _ => None,
        }
    }

    /// Whether this node is a rectangle.
    pub fn is_rect(&self) -> bool {
        matches!(self.kind, NodeKind::Rect { .. })
    }
}

/// An arena of drawable nodes.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<Node>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Get a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    /// Nodes without a parent.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(id, _)| id)
    }

    /// Children of a node, in insertion order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// Every rect under `id` in document (depth-first) order.
    pub fn rects_under(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.node(current) {
                if node.is_rect() {
                    out.push(current);
                }
                stack.extend(node.children.iter().rev());
            }
        }
        out
    }

    /// The rect node drawn for `cell` under `id`.
    pub fn find_cell(&self, id: NodeId, cell: CellIndex) -> Option<NodeId> {
        self.rects_under(id)
            .into_iter()
            .find(|&rect| self.node(rect).and_then(Node::cell) == Some(cell))
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }
}

impl Surface for Scene {
    type Element = NodeId;

    fn create_group(&mut self, attributes: Attributes) -> NodeId {
        self.push(Node::new(NodeKind::Group, attributes))
    }

    fn create_rounded_rect(&mut self, rect: Rect, radius: f64) -> NodeId {
        self.push(Node::new(NodeKind::Rect { rect, radius }, Attributes::new()))
    }

    fn apply_attributes(&mut self, element: &NodeId, attributes: Attributes) {
        if let Some(node) = self.node_mut(*element) {
            node.attributes.extend(attributes);
        }
    }

    fn add_child(&mut self, group: &NodeId, child: &NodeId) {
        if group.0 >= self.nodes.len() || child.0 >= self.nodes.len() {
            tracing::warn!(?group, ?child, "add_child with unknown node");
            return;
        }
        self.nodes[group.0].children.push(*child);
        self.nodes[child.0].parent = Some(*group);
    }
}

impl Animator for Scene {
    fn animate_rect(&mut self, element: &NodeId, from: Rect, to: Rect, duration: u32) {
        if let Some(node) = self.node_mut(*element) {
            node.animations
                .push(AnimationIntent::Entrance { from, to, duration });
        }
    }

    fn animate_color(&mut self, element: &NodeId, from: Color, to: Color, duration: u32) {
        if let Some(node) = self.node_mut(*element) {
            node.animations
                .push(AnimationIntent::ColorTransition { from, to, duration });
        }
    }
}

impl LabelPlacer for Scene {
    fn place_label(&mut self, label: &CellLabel, group: &NodeId, options: &DataLabelOptions) {
        let attributes = crate::attrs! {
            "x" => label.anchor.x,
            "y" => label.anchor.y,
            "text-anchor" => "middle",
            "font-size" => options.style.font_size,
            "fill" => options.style.color,
        };
        let id = self.push(Node::new(NodeKind::Label(label.clone()), attributes));
        self.add_child(group, &id);
    }
}

impl ShadowFilter for Scene {
    fn drop_shadow(&mut self, group: &NodeId, shadow: &DropShadow) {
        if let Some(node) = self.node_mut(*group) {
            node.shadow = Some(*shadow);
        }
    }
}
