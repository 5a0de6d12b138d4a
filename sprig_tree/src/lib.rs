// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sprig_tree --heading-base-level=0

//! Sprig Tree: an exclusively owned decision tree with layout and hit testing.
//!
//! Sprig Tree is the data model underneath the Sprig flow-chart editor.
//!
//! - Represents a strict tree of typed nodes joined by labeled, ordered connections.
//! - Addresses nodes through generational [`NodeId`] handles so that references held
//!   elsewhere (selection, hover, drag) can never alias a different live node.
//! - Provides a one-shot [initial layout](layout::initial_layout) and a
//!   pre-order [point hit test](hit_test::hit_test).
//!
//! ## Ownership model
//!
//! Every node except the root is owned by exactly one [`Connection`] in its parent.
//! The [`Tree`] stores nodes in slots; removing a node releases its whole subtree
//! (children first) and detaches it from its parent in one step.
//! Handles to released nodes become stale: [`Tree::get`] returns `None` for them,
//! including after the slot has been reused for a new node.
//!
//! ## Not an incremental layout engine
//!
//! [`layout::initial_layout`] fans children out beneath their parent, halving the
//! horizontal spacing at each depth. It is meant to run once over a freshly built
//! tree. Nodes inserted later are placed at a fixed offset from their parent (see
//! [`layout::place_child`]) and nothing else moves.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use sprig_tree::{Node, NodeKind, Tree, hit_test, layout};
//!
//! let mut tree = Tree::new(Node::new("Start", NodeKind::Start));
//! let root = tree.root();
//! let check = tree
//!     .attach_branch(root, Node::new("Ready?", NodeKind::Condition))
//!     .unwrap();
//! let yes = tree.attach_branch(check, Node::new("Go", NodeKind::Action)).unwrap();
//! assert_eq!(tree.connections(check)[0].label, "Yes");
//!
//! layout::initial_layout(&mut tree, root, Point::new(600.0, 100.0), 300.0, 150.0);
//! let go = tree.get(yes).unwrap().position;
//! assert_eq!(hit_test::hit_test(&tree, root, go, 30.0), Some(yes));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod layout;
mod tree;
mod types;

pub use tree::{Connection, Node, PreOrder, Tree, TreeError};
pub use types::{NodeId, NodeKind, NodeStyle, Shape};
