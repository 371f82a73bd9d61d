/// Document-level extension carrying the core avatar profile.
pub const VRMC_VRM: &str = "VRMC_vrm";
/// Document-level extension carrying secondary (spring-bone) physics.
pub const VRMC_SPRING_BONE: &str = "VRMC_springBone";
/// Per-node extension constraining a node's transform to a source node.
pub const VRMC_NODE_CONSTRAINT: &str = "VRMC_node_constraint";
/// Per-material extension carrying MToon toon-shading parameters.
pub const VRMC_MATERIALS_MTOON: &str = "VRMC_materials_mtoon";

/// A named extension block as it appears on the host document, a node, or a
/// material: the raw JSON span, still undecoded.
#[derive(Copy, Clone, Debug)]
pub struct RawExtension<'a> {
    pub name: &'a str,
    pub json: &'a str,
}

/// The boundary with the host glTF decoder.
///
/// Only the pieces VRM decoding needs cross this boundary: the three
/// extension-lookup surfaces and the host collection sizes that bound the
/// reference fixup. `nodes` and `materials` must have one entry per host node
/// and material, in document order, with an empty list where an entity carries
/// no extensions.
#[derive(Clone, Debug, Default)]
pub struct HostDocument<'a> {
    /// Document-level extensions (`gltf.extensions`).
    pub extensions: Vec<RawExtension<'a>>,
    /// Per-node extension lists, one per host node.
    pub nodes: Vec<Vec<RawExtension<'a>>>,
    /// Per-material extension lists, one per host material.
    pub materials: Vec<Vec<RawExtension<'a>>>,
    /// Number of images in the host document.
    pub image_count: usize,
}

impl HostDocument<'_> {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }
}

/// Linear scan by exact name. Extension lists are short, so no index is built.
pub(crate) fn find<'a>(extensions: &[RawExtension<'a>], name: &str) -> Option<&'a str> {
    extensions
        .iter()
        .find(|ext| ext.name == name)
        .map(|ext| ext.json)
}
