//! Decoder for the VRM 1.0 family of glTF extensions (unofficial).
//!
//! Decodes `VRMC_vrm`, `VRMC_springBone`, `VRMC_node_constraint` and
//! `VRMC_materials_mtoon` blocks into typed records, then resolves the node /
//! material / image indices they carry into bounds-checked references against
//! the host document. This crate does not parse glTF itself; the caller hands
//! over the raw extension spans and host collection sizes through
//! [`HostDocument`].
//!
//! ```
//! use vrm1::{HostDocument, RawExtension, VrmData, VRMC_VRM};
//!
//! let core_json = r#"{ "specVersion": "1.0", "humanoid": { "humanBones": {} } }"#;
//! let host = HostDocument {
//!     extensions: vec![RawExtension { name: VRMC_VRM, json: core_json }],
//!     nodes: vec![Vec::new(); 2],
//!     materials: Vec::new(),
//!     image_count: 0,
//! };
//! let vrm = VrmData::from_host(&host)?;
//! # Ok::<(), vrm1::Error>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod host;
mod json;
mod model;
mod refs;
mod resolve;

pub use error::*;
pub use host::*;
pub use model::*;
pub use refs::*;

#[cfg(test)]
mod json_core_tests;



#[cfg(test)]
mod resolve_tests;
