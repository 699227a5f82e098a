//! Planar layout engine for molecule diagrams
//!
//! This module takes a resolved [`Molecule`](crate::molecule::Molecule) and
//! rescales its raw 2D coordinates into a padded view frame, producing a
//! [`LayoutResult`]. Bond strands and per-atom decorations are derived from
//! the layout at draw time by [`bond_segments`], [`lone_pair_markers`] and
//! [`charge_badge`].

pub mod bonds;
pub mod config;
pub mod decoration;
pub mod engine;
pub mod types;

pub use bonds::bond_segments;
pub use config::{LayoutConfig, MIN_FRAME_MARGIN};
pub use decoration::{charge_badge, lone_pair_markers};
pub use engine::{compute, mean_bond_length, scale_factor, MAX_COORDINATE};
pub use types::*;
