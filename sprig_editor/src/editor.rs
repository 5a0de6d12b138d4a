// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use kurbo::{Point, Vec2};
use log::{debug, trace, warn};
use sprig_tree::{Node, NodeId, NodeKind, Tree, hit_test, layout};

use crate::input::{FrameInput, PointerButtons};
use crate::render::{RenderAdapter, draw_tree};
use crate::{EditorCommand, EditorConfig};

/// What the pointer is doing to the tree right now.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Interaction {
    /// Nothing under the pointer, nothing held.
    Idle,
    /// The pointer is over a node.
    Hovering(NodeId),
    /// A node's subtree follows the pointer.
    Dragging {
        /// The node being dragged.
        node: NodeId,
        /// Node position minus pointer position at the moment the drag began.
        offset: Vec2,
    },
}

#[derive(Copy, Clone, Debug)]
struct Drag {
    node: NodeId,
    offset: Vec2,
}

/// Owns a decision tree and turns per-frame input into edits on it.
///
/// The editor holds three non-owning references into its tree: the selected
/// node, the hovered node, and the drag target. All three are generational
/// handles, and every structural edit made through the editor clears the ones
/// it invalidates before returning.
#[derive(Debug)]
pub struct Editor {
    tree: Tree,
    selected: Option<NodeId>,
    hovered: Option<NodeId>,
    drag: Option<Drag>,
    config: EditorConfig,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// An editor over the starter tree, with the stock configuration.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// An editor over the starter tree, laid out with `config.initial_layout`.
    ///
    /// The starter tree is:
    ///
    /// ```text
    /// Start
    /// └── Is Ready? (condition)
    ///     ├── Yes: Do It
    ///     └── No:  Wait
    /// ```
    pub fn with_config(config: EditorConfig) -> Self {
        let mut tree = Tree::new(Node::new("Start", NodeKind::Start));
        let root = tree.root();
        let built = tree
            .attach_branch(root, Node::new("Is Ready?", NodeKind::Condition))
            .and_then(|check| {
                tree.attach_branch(check, Node::new("Do It", NodeKind::Action))?;
                tree.attach_branch(check, Node::new("Wait", NodeKind::Action))
            });
        if let Err(err) = built {
            warn!("starter tree incomplete: {err}");
        }
        config.initial_layout.apply(&mut tree, root);
        Self::from_tree(tree, config)
    }

    /// An editor over an existing tree. Positions are used as they are.
    pub fn from_tree(tree: Tree, config: EditorConfig) -> Self {
        Self {
            tree,
            selected: None,
            hovered: None,
            drag: None,
            config,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The tree being edited.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The root node. Always live.
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// The selected node, if any.
    pub fn selected(&self) -> Option<NodeId> {
        self.selected.filter(|&id| self.tree.is_alive(id))
    }

    /// The node under the pointer as of the last update, if any.
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered.filter(|&id| self.tree.is_alive(id))
    }

    /// Returns `true` while a node is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The current interaction state.
    pub fn interaction(&self) -> Interaction {
        if let Some(Drag { node, offset }) = self.drag {
            Interaction::Dragging { node, offset }
        } else if let Some(node) = self.hovered() {
            Interaction::Hovering(node)
        } else {
            Interaction::Idle
        }
    }

    /// Advance one frame.
    ///
    /// Hover and scale easing always run. Everything else is skipped when
    /// `input_captured` is set, meaning some other UI layer has claimed the input.
    /// The editor eases by a fixed factor per call, so `_delta_time` is not used.
    pub fn update(&mut self, _delta_time: f64, input: &FrameInput, input_captured: bool) {
        self.refresh_hover(input.pointer);
        self.tree.step_scales(self.config.scale_easing);

        if input_captured {
            return;
        }

        if input.was_pressed(PointerButtons::PRIMARY) {
            self.select(self.hovered);
            self.drag = self.selected.and_then(|node| {
                let pos = self.tree.get(node)?.position;
                Some(Drag {
                    node,
                    offset: pos - input.pointer,
                })
            });
        }

        if let Some(drag) = self.drag {
            let moved = input.is_down(PointerButtons::PRIMARY)
                && self
                    .tree
                    .move_subtree_to(drag.node, input.pointer + drag.offset)
                    .is_some();
            if !moved {
                trace!("drag of {:?} ended", drag.node);
                self.drag = None;
            }
        }

        if input.was_pressed(PointerButtons::SECONDARY)
            && let Some(parent) = self.hovered
        {
            self.spawn_child(parent, NodeKind::Action, self.config.pointer_placement);
        }

        if input.delete_pressed() {
            self.delete_selected();
        }
    }

    /// Recompute the hovered node for `pointer` and retarget node scales.
    ///
    /// Calling this repeatedly with the same pointer and tree gives the same result.
    pub fn refresh_hover(&mut self, pointer: Point) -> Option<NodeId> {
        let hovered = hit_test::hit_test(
            &self.tree,
            self.tree.root(),
            pointer,
            self.config.hit_half_size,
        );
        if hovered != self.hovered {
            trace!("hover {:?} -> {:?}", self.hovered, hovered);
        }
        self.hovered = hovered;
        self.tree
            .set_hover_targets(hovered, self.config.hover_scale, self.config.rest_scale);
        hovered
    }

    /// Add a node of `kind` under the selected node (or the root when nothing
    /// is selected) and select it.
    pub fn create_node(&mut self, kind: NodeKind) -> Option<NodeId> {
        let parent = self.selected().unwrap_or_else(|| self.tree.root());
        let id = self.spawn_child(parent, kind, self.config.command_placement)?;
        self.select(Some(id));
        Some(id)
    }

    fn spawn_child(&mut self, parent: NodeId, kind: NodeKind, offset: Vec2) -> Option<NodeId> {
        let at = layout::place_child(self.tree.get(parent)?.position, offset);
        let node = Node::new(kind.default_label(), kind).at(at);
        match self.tree.attach_branch(parent, node) {
            Ok(id) => {
                debug!("created {kind:?} {id:?} under {parent:?}");
                Some(id)
            }
            Err(err) => {
                warn!("create under {parent:?} failed: {err}");
                None
            }
        }
    }

    /// Remove the selected node and its subtree.
    ///
    /// Does nothing when nothing is selected or the root is selected. On success
    /// the selection, hover and drag state are all cleared.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selected() else {
            return false;
        };
        if id == self.tree.root() {
            return false;
        }
        match self.tree.remove(id) {
            Ok(count) => {
                debug!("deleted {id:?} ({count} nodes)");
                self.selected = None;
                self.hovered = None;
                self.drag = None;
                true
            }
            Err(err) => {
                warn!("delete of {id:?} failed: {err}");
                false
            }
        }
    }

    /// Replace the selection. Stale handles select nothing.
    pub fn select(&mut self, id: Option<NodeId>) {
        let id = id.filter(|&n| self.tree.is_alive(n));
        if id != self.selected {
            debug!("selection {:?} -> {:?}", self.selected, id);
        }
        self.selected = id;
    }

    /// Label of the selected node.
    pub fn selected_label(&self) -> Option<&str> {
        let node = self.tree.get(self.selected?)?;
        Some(&node.label)
    }

    /// Relabel the selected node. Returns `false` when nothing is selected.
    pub fn set_selected_label(&mut self, label: impl Into<String>) -> bool {
        let Some(node) = self.selected.and_then(|id| self.tree.get_mut(id)) else {
            return false;
        };
        node.label = label.into();
        true
    }

    /// Run a host command.
    pub fn apply(&mut self, command: EditorCommand) {
        match command {
            EditorCommand::CreateNode(kind) => {
                self.create_node(kind);
            }
            EditorCommand::DeleteSelected => {
                self.delete_selected();
            }
            EditorCommand::SetSelectedLabel(label) => {
                self.set_selected_label(label);
            }
        }
    }

    /// Issue draw requests for the current state. See [`render`](crate::render)
    /// for the request order.
    pub fn draw<A: RenderAdapter + ?Sized>(&self, adapter: &mut A) {
        draw_tree(&self.tree, self.selected(), &self.config, adapter);
    }
}
