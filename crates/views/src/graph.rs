//! Knowledge-graph viewer state: layout, pan/zoom, selection and type filter

use ekos_core::{CoreError, GraphEdge, GraphNode, NodeType};
use rand::Rng;
use std::collections::{BTreeMap, HashSet};

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 2.0;
pub const ZOOM_STEP: f64 = 0.1;

/// Circle layout parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub center: (f64, f64),
    pub radius: f64,
    /// Max absolute random offset added to each coordinate
    pub jitter: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            center: (400.0, 300.0),
            radius: 250.0,
            jitter: 40.0,
        }
    }
}

impl Layout {
    /// Place nodes without a position evenly around the circle, jittered.
    /// Nodes that already have both coordinates are left alone.
    pub fn apply<R: Rng + ?Sized>(&self, nodes: &mut [GraphNode], rng: &mut R) {
        let count = nodes.len().max(1) as f64;
        for (i, node) in nodes.iter_mut().enumerate() {
            if node.x.is_some() && node.y.is_some() {
                continue;
            }
            let angle = std::f64::consts::TAU * i as f64 / count;
            let x = self.center.0 + self.radius * angle.cos() + self.jitter(rng);
            let y = self.center.1 + self.radius * angle.sin() + self.jitter(rng);
            node.x = Some(x);
            node.y = Some(y);
        }
    }

    fn jitter<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.jitter > 0.0 {
            rng.gen_range(-self.jitter..=self.jitter)
        } else {
            0.0
        }
    }
}

/// Interactive state of the graph page
#[derive(Debug, Clone)]
pub struct GraphView {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    zoom: f64,
    offset: (f64, f64),
    selected: Option<String>,
    type_filter: Option<NodeType>,
}

impl GraphView {
    /// Lay out `nodes` with the default circle and a thread-local RNG
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        Self::with_layout(nodes, edges, Layout::default(), &mut rand::thread_rng())
    }

    pub fn with_layout<R: Rng + ?Sized>(
        mut nodes: Vec<GraphNode>,
        edges: Vec<GraphEdge>,
        layout: Layout,
        rng: &mut R,
    ) -> Self {
        layout.apply(&mut nodes, rng);
        Self {
            nodes,
            edges,
            zoom: 1.0,
            offset: (0.0, 0.0),
            selected: None,
            type_filter: None,
        }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Layout position in graph space
    pub fn position(&self, id: &str) -> Option<(f64, f64)> {
        let node = self.node(id)?;
        Some((node.x?, node.y?))
    }

    /// Position after zoom and pan
    pub fn screen_position(&self, id: &str) -> Option<(f64, f64)> {
        let (x, y) = self.position(id)?;
        Some((x * self.zoom + self.offset.0, y * self.zoom + self.offset.1))
    }

    // ---- pan / zoom ----

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set zoom, clamped to `[MIN_ZOOM, MAX_ZOOM]`. Values are kept to two
    /// decimals so repeated steps do not drift.
    pub fn set_zoom(&mut self, zoom: f64) {
        let zoom = if zoom.is_finite() { zoom } else { 1.0 };
        self.zoom = ((zoom * 100.0).round() / 100.0).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    pub fn offset(&self) -> (f64, f64) {
        self.offset
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset.0 += dx;
        self.offset.1 += dy;
    }

    pub fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.offset = (0.0, 0.0);
    }

    // ---- selection ----

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Select a node; selecting the current selection again clears it.
    /// Returns the selection after the change.
    pub fn select(&mut self, id: &str) -> Result<Option<&str>, CoreError> {
        if self.node(id).is_none() {
            return Err(CoreError::NodeNotFound(id.to_string()));
        }
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
        Ok(self.selected.as_deref())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// One-hop neighbours of `id`, ignoring edge direction, in edge order
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.edges
            .iter()
            .filter_map(|edge| edge.other_end(id))
            .filter(|other| *other != id && seen.insert(*other))
            .collect()
    }

    /// The selected node and its direct neighbours
    pub fn is_highlighted(&self, id: &str) -> bool {
        match self.selected.as_deref() {
            Some(selected) if selected == id => true,
            Some(selected) => self
                .edges
                .iter()
                .any(|edge| edge.touches(selected) && edge.touches(id)),
            None => false,
        }
    }

    // ---- filtering ----

    pub fn type_filter(&self) -> Option<NodeType> {
        self.type_filter
    }

    pub fn set_type_filter(&mut self, filter: Option<NodeType>) {
        self.type_filter = filter;
    }

    /// Nodes and edges currently on screen.
    ///
    /// With a type filter `T`, the edges are those touching a node of type
    /// `T`, and the nodes are exactly the endpoints of those edges.
    pub fn visible(&self) -> (Vec<&GraphNode>, Vec<&GraphEdge>) {
        let Some(filter) = self.type_filter else {
            return (self.nodes.iter().collect(), self.edges.iter().collect());
        };

        let typed: HashSet<&str> = self
            .nodes
            .iter()
            .filter(|n| n.node_type == filter)
            .map(|n| n.id.as_str())
            .collect();

        let edges: Vec<&GraphEdge> = self
            .edges
            .iter()
            .filter(|e| typed.contains(e.source.as_str()) || typed.contains(e.target.as_str()))
            .collect();

        let endpoints: HashSet<&str> = edges
            .iter()
            .flat_map(|e| [e.source.as_str(), e.target.as_str()])
            .collect();

        let nodes = self
            .nodes
            .iter()
            .filter(|n| endpoints.contains(n.id.as_str()))
            .collect();

        (nodes, edges)
    }

    /// Node count per type, for the legend
    pub fn type_counts(&self) -> BTreeMap<NodeType, usize> {
        let mut counts = BTreeMap::new();
        for node in &self.nodes {
            *counts.entry(node.node_type).or_insert(0) += 1;
        }
        counts
    }
}
