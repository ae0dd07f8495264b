//! Scene trees
//!
//! A scene is a tree of constrained nodes loaded from TOML. Resolving it walks
//! the tree top-down, handing each level the [`ConstraintContext`] derived
//! from its parent and building a free-space pool for every node that
//! distributes its children.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::SceneError;
use crate::layout::{
    constraints_enabled, resolve, Axis, ConstraintContext, ConstraintSpec, Dimension,
    FreeSpacePool, LayoutProperties, ParentSize, Rect, ResolveConfig, Sibling, Size,
    WithFractionOfFreeSpace,
};

/// A tree of constrained nodes inside a root frame
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    /// Root frame width; the root size is unknown unless both are given
    pub width: Option<f64>,
    pub height: Option<f64>,
    #[serde(default)]
    pub pixel_align: bool,
    pub viewport: Option<Size>,
    /// Free-space axis for the top-level nodes
    pub distribute: Option<Axis>,
    #[serde(default)]
    pub gap: f64,
    #[serde(default)]
    pub nodes: Vec<SceneNode>,
}

/// One element of a scene
#[derive(Debug, Clone, Deserialize)]
pub struct SceneNode {
    pub id: String,
    #[serde(flatten)]
    pub properties: LayoutProperties,
    /// External measurement used for `auto` dimensions
    pub measured: Option<Size>,
    /// Free-space axis shared by this node's children
    pub distribute: Option<Axis>,
    #[serde(default)]
    pub gap: f64,
    /// Switch constraint resolution off for the immediate children only
    #[serde(default)]
    pub disable_children: bool,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

/// What resolution produced for a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeOutcome {
    Resolved(Rect),
    /// Some required size was not available
    Indeterminate,
    /// Constraint layout is off for this node
    Disabled,
}

impl fmt::Display for NodeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeOutcome::Resolved(r) => write!(
                f,
                "x={:.1} y={:.1} w={:.1} h={:.1}",
                r.x, r.y, r.width, r.height
            ),
            NodeOutcome::Indeterminate => f.write_str("indeterminate"),
            NodeOutcome::Disabled => f.write_str("disabled"),
        }
    }
}

/// A node's outcome, in depth-first order
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedNode {
    pub id: String,
    pub depth: usize,
    pub outcome: NodeOutcome,
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a scene from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        let scene: Scene = toml::from_str(content)?;
        scene.validate()?;
        Ok(scene)
    }

    fn validate(&self) -> Result<(), SceneError> {
        fn visit<'a>(nodes: &'a [SceneNode], seen: &mut HashSet<&'a str>) -> Result<(), SceneError> {
            for node in nodes {
                if !seen.insert(node.id.as_str()) {
                    return Err(SceneError::DuplicateId {
                        id: node.id.clone(),
                    });
                }
                visit(&node.children, seen)?;
            }
            Ok(())
        }
        visit(&self.nodes, &mut HashSet::new())
    }

    /// Context the top-level nodes resolve in
    pub fn root_context(&self, config: &ResolveConfig) -> ConstraintContext {
        let root = match (self.width, self.height) {
            (Some(width), Some(height)) => ParentSize::Size(Size::new(width, height)),
            _ => ParentSize::UNKNOWN,
        };
        ConstraintContext::new(root, config.viewport_size.or(self.viewport))
    }

    /// Resolve every node, depth first.
    ///
    /// Settings in `config` take precedence over the ones in the scene.
    #[tracing::instrument(skip_all, fields(nodes = self.nodes.len()))]
    pub fn resolve(&self, config: &ResolveConfig) -> Vec<ResolvedNode> {
        let mut walk = Walk {
            pixel_align: config.pixel_align || self.pixel_align,
            out: Vec::new(),
        };
        walk.group(
            &self.nodes,
            &self.root_context(config),
            self.distribute,
            self.gap,
            0,
        );
        walk.out
    }
}

struct Walk {
    pixel_align: bool,
    out: Vec<ResolvedNode>,
}

impl Walk {
    fn group(
        &mut self,
        nodes: &[SceneNode],
        context: &ConstraintContext,
        distribute: Option<Axis>,
        gap: f64,
        depth: usize,
    ) {
        let specs: Vec<ConstraintSpec> = nodes
            .iter()
            .map(|n| n.properties.clone().into_spec())
            .collect();

        let free_space = distribute.and_then(|axis| {
            let siblings = specs
                .iter()
                .zip(nodes)
                .map(|(spec, node)| Sibling::new(spec, node.measured));
            FreeSpacePool::build(siblings, axis, context, gap)
                .map(|pool| WithFractionOfFreeSpace::along(axis, pool))
        });

        for (node, spec) in nodes.iter().zip(&specs) {
            let outcome = self.node_outcome(node, spec, context, distribute, free_space.as_ref());
            tracing::trace!(id = %node.id, %outcome, "resolved node");

            let child_context = if !constraints_enabled(&node.properties) {
                ConstraintContext {
                    parent_size: ParentSize::DISABLED,
                    ..*context
                }
            } else if node.disable_children {
                context.for_children_disabled_level()
            } else {
                match outcome {
                    NodeOutcome::Resolved(rect) => context.for_children(Some(rect.size())),
                    NodeOutcome::Disabled => context.for_children(node.measured),
                    NodeOutcome::Indeterminate => context.for_children(None),
                }
            };

            self.out.push(ResolvedNode {
                id: node.id.clone(),
                depth,
                outcome,
            });
            self.group(
                &node.children,
                &child_context,
                node.distribute,
                node.gap,
                depth + 1,
            );
        }
    }

    fn node_outcome(
        &self,
        node: &SceneNode,
        spec: &ConstraintSpec,
        context: &ConstraintContext,
        distribute: Option<Axis>,
        free_space: Option<&WithFractionOfFreeSpace>,
    ) -> NodeOutcome {
        if !constraints_enabled(&node.properties) || !context.parent_size.is_enabled() {
            return NodeOutcome::Disabled;
        }

        // A distributing parent whose pool could not be built cannot size its
        // fraction children either.
        if let (Some(axis), None) = (distribute, free_space) {
            if let Some(Dimension::FractionOfFreeSpace(_)) =
                spec.axis(axis).size.map(Dimension::from_value)
            {
                return NodeOutcome::Indeterminate;
            }
        }

        match resolve(spec, context, node.measured, free_space, self.pixel_align) {
            Some(rect) => NodeOutcome::Resolved(rect),
            None => NodeOutcome::Indeterminate,
        }
    }
}

/// Render resolved nodes as an indented, one-line-per-node report
pub fn render_report(nodes: &[ResolvedNode]) -> String {
    let mut report = String::new();
    for node in nodes {
        let indent = "  ".repeat(node.depth);
        report.push_str(&format!("{}[{}] {}\n", indent, node.id, node.outcome));
    }
    report
}
