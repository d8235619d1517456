//! Mesh-Erzeugung aus zwei Arc-Length-Indizes.

pub mod blender;

pub use blender::{BlendOptions, MeshBlender};
