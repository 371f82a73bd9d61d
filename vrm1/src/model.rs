use crate::{ImageRef, MaterialRef, NodeRef};

/// Everything decoded from the VRM extensions of one host document.
///
/// `node_constraints` and `mtoon_materials` are dense side tables: one slot
/// per host node / material, in document order, `None` where the entity does
/// not carry the extension.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VrmData {
    pub core: VrmCore,
    pub spring_bone: Option<SpringBone>,
    pub node_constraints: Vec<Option<NodeConstraint>>,
    pub mtoon_materials: Vec<Option<Mtoon>>,
}

/// The `VRMC_vrm` document extension.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VrmCore {
    pub spec_version: SpecVersion,
    pub humanoid: Humanoid,
    pub meta: Meta,
    pub first_person: Option<FirstPerson>,
    pub expressions: Option<Expressions>,
    pub look_at: Option<LookAt>,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum SpecVersion {
    #[default]
    V1_0,
    Unrecognized,
}

impl SpecVersion {
    pub(crate) fn from_name(name: &str) -> Self {
        match name {
            "1.0" => Self::V1_0,
            _ => Self::Unrecognized,
        }
    }
}

/* -- VRMC_vrm.humanoid -- */

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Humanoid {
    /// One entry per `humanBones` key, in file order. The name is the bone
    /// slot (`"hips"`, `"leftUpperArm"`, ...); unknown names are kept as-is
    /// rather than filtered, since old readers must not act on new data but
    /// must not drop it on the floor either.
    pub human_bones: Vec<HumanBone>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HumanBone {
    pub name: String,
    pub node: NodeRef,
}

/* -- VRMC_vrm.meta -- */

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Meta {
    pub name: Option<String>,
    pub version: Option<String>,
    pub authors: Vec<String>,

    pub copyright_information: Option<String>,
    pub contact_information: Option<String>,
    pub references: Vec<String>,
    pub third_party_licenses: Option<String>,
    pub license_url: Option<String>,
    pub other_license_url: Option<String>,

    pub thumbnail_image: ImageRef,

    pub avatar_permission: AvatarPermission,
    pub commercial_usage: CommercialUsage,
    pub credit_notation: CreditNotation,
    pub modification: Modification,

    pub allow_antisocial_or_hate_usage: bool,
    pub allow_excessively_sexual_usage: bool,
    pub allow_excessively_violent_usage: bool,
    pub allow_political_or_religious_usage: bool,
    pub allow_redistribution: bool,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum AvatarPermission {
    #[default]
    OnlyAuthor,
    OnlySeparatelyLicensedPerson,
    Everyone,
    Unrecognized,
}

impl AvatarPermission {
    pub(crate) fn from_name(name: &str) -> Self {
        match name {
            "onlyAuthor" => Self::OnlyAuthor,
            "onlySeparatelyLicensedPerson" => Self::OnlySeparatelyLicensedPerson,
            "everyone" => Self::Everyone,
            _ => Self::Unrecognized,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum CommercialUsage {
    #[default]
    PersonalNonProfit,
    PersonalProfit,
    Corporation,
    Unrecognized,
}

impl CommercialUsage {
    pub(crate) fn from_name(name: &str) -> Self {
        match name {
            "personalNonProfit" => Self::PersonalNonProfit,
            "personalProfit" => Self::PersonalProfit,
            "corporation" => Self::Corporation,
            _ => Self::Unrecognized,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum CreditNotation {
    #[default]
    Required,
    Unnecessary,
    Unrecognized,
}

impl CreditNotation {
    pub(crate) fn from_name(name: &str) -> Self {
        match name {
            "required" => Self::Required,
            "unnecessary" => Self::Unnecessary,
            _ => Self::Unrecognized,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Modification {
    #[default]
    Prohibited,
    AllowModification,
    AllowModificationRedistribution,
    Unrecognized,
}

impl Modification {
    pub(crate) fn from_name(name: &str) -> Self {
        match name {
            "prohibited" => Self::Prohibited,
            "allowModification" => Self::AllowModification,
            "allowModificationRedistribution" => Self::AllowModificationRedistribution,
            _ => Self::Unrecognized,
        }
    }
}

/* -- VRMC_vrm.firstPerson -- */

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FirstPerson {
    pub mesh_annotations: Vec<MeshAnnotation>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeshAnnotation {
    pub node: NodeRef,
    pub annotation_type: MeshAnnotationType,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum MeshAnnotationType {
    #[default]
    Auto,
    FirstPersonOnly,
    ThirdPersonOnly,
    Both,
    Unrecognized,
}

impl MeshAnnotationType {
    pub(crate) fn from_name(name: &str) -> Self {
        match name {
            "auto" => Self::Auto,
            "firstPersonOnly" => Self::FirstPersonOnly,
            "thirdPersonOnly" => Self::ThirdPersonOnly,
            "both" => Self::Both,
            _ => Self::Unrecognized,
        }
    }
}

/* -- VRMC_vrm.expressions -- */

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Expressions {
    pub preset: Vec<Expression>,
    pub custom: Vec<Expression>,
}

/// One `preset`/`custom` entry. The name comes from the dictionary key; the
/// decoder keeps file order and does not merge duplicate names.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Expression {
    pub name: String,
    pub is_binary: bool,

    pub morph_target_binds: Vec<MorphTargetBind>,
    pub material_color_binds: Vec<MaterialColorBind>,
    pub texture_transform_binds: Vec<TextureTransformBind>,

    pub override_blink: ExpressionOverride,
    pub override_look_at: ExpressionOverride,
    pub override_mouth: ExpressionOverride,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MorphTargetBind {
    pub node: NodeRef,
    /// Morph target position within the node's mesh. Not a host index; the
    /// fixup pass leaves it alone.
    pub index: i32,
    pub weight: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MaterialColorBind {
    pub material: MaterialRef,
    pub bind_type: MaterialColorBindType,
    pub target_value: [f32; 4],
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum MaterialColorBindType {
    #[default]
    Color,
    EmissionColor,
    ShadeColor,
    MatcapColor,
    RimColor,
    OutlineColor,
    Unrecognized,
}

impl MaterialColorBindType {
    pub(crate) fn from_name(name: &str) -> Self {
        match name {
            "color" => Self::Color,
            "emissionColor" => Self::EmissionColor,
            "shadeColor" => Self::ShadeColor,
            "matcapColor" => Self::MatcapColor,
            "rimColor" => Self::RimColor,
            "outlineColor" => Self::OutlineColor,
            _ => Self::Unrecognized,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextureTransformBind {
    pub material: MaterialRef,
    pub scale: [f32; 2],
    pub offset: [f32; 2],
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ExpressionOverride {
    #[default]
    None,
    Block,
    Blend,
    Unrecognized,
}

impl ExpressionOverride {
    pub(crate) fn from_name(name: &str) -> Self {
        match name {
            "none" => Self::None,
            "block" => Self::Block,
            "blend" => Self::Blend,
            _ => Self::Unrecognized,
        }
    }
}

/* -- VRMC_vrm.lookAt -- */

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LookAt {
    pub look_at_type: LookAtType,
    pub offset_from_head_bone: [f32; 3],
    pub range_map_horizontal_inner: RangeMap,
    pub range_map_horizontal_outer: RangeMap,
    pub range_map_vertical_up: RangeMap,
    pub range_map_vertical_down: RangeMap,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum LookAtType {
    #[default]
    Bone,
    Expression,
    Unrecognized,
}

impl LookAtType {
    pub(crate) fn from_name(name: &str) -> Self {
        match name {
            "bone" => Self::Bone,
            "expression" => Self::Expression,
            _ => Self::Unrecognized,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RangeMap {
    pub input_max_value: f32,
    pub output_scale: f32,
}

/* -- VRMC_springBone -- */

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpringBone {
    pub spec_version: SpecVersion,
    pub colliders: Vec<Collider>,
    pub collider_groups: Vec<ColliderGroup>,
    pub springs: Vec<Spring>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Collider {
    pub node: NodeRef,
    pub shape: ColliderShape,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColliderShape {
    Sphere {
        offset: [f32; 3],
        radius: f32,
    },
    Capsule {
        offset: [f32; 3],
        radius: f32,
        tail: [f32; 3],
    },
    /// The `shape` object carried no recognized kind.
    Unrecognized,
}

impl Default for ColliderShape {
    fn default() -> Self {
        Self::Sphere {
            offset: [0.0; 3],
            radius: 0.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColliderGroup {
    pub name: Option<String>,
    /// Positions into [`SpringBone::colliders`]. Local to this record; never
    /// rewritten by the host fixup pass.
    pub colliders: Vec<usize>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spring {
    pub name: Option<String>,
    /// Joints from root to tail.
    pub joints: Vec<SpringJoint>,
    /// Positions into [`SpringBone::collider_groups`]. Local indices.
    pub collider_groups: Vec<usize>,
    pub center: NodeRef,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpringJoint {
    pub node: NodeRef,
    pub hit_radius: f32,
    pub stiffness: f32,
    pub gravity_power: f32,
    pub gravity_dir: [f32; 3],
    pub drag_force: f32,
}

/* -- VRMC_node_constraint -- */

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeConstraint {
    pub spec_version: SpecVersion,
    pub constraint: Constraint,
}

/// The constraint kind and its payload. The wire format tags the kind with a
/// single object key (`roll` / `aim` / `rotation`); an unknown key leaves the
/// whole constraint `Unrecognized` so that new kinds are skipped, not errors.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Constraint {
    Roll {
        source: NodeRef,
        roll_axis: RollAxis,
        weight: f32,
    },
    Aim {
        source: NodeRef,
        aim_axis: AimAxis,
        weight: f32,
    },
    Rotation {
        source: NodeRef,
        weight: f32,
    },
    #[default]
    Unrecognized,
}

impl Constraint {
    /// The constrained-to source node, for any recognized kind.
    pub fn source(&self) -> Option<NodeRef> {
        match *self {
            Self::Roll { source, .. } | Self::Aim { source, .. } | Self::Rotation { source, .. } => {
                Some(source)
            }
            Self::Unrecognized => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum RollAxis {
    #[default]
    X,
    Y,
    Z,
    Unrecognized,
}

impl RollAxis {
    pub(crate) fn from_name(name: &str) -> Self {
        match name {
            "X" => Self::X,
            "Y" => Self::Y,
            "Z" => Self::Z,
            _ => Self::Unrecognized,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum AimAxis {
    #[default]
    PositiveX,
    NegativeX,
    PositiveY,
    NegativeY,
    PositiveZ,
    NegativeZ,
    Unrecognized,
}

impl AimAxis {
    pub(crate) fn from_name(name: &str) -> Self {
        match name {
            "PositiveX" => Self::PositiveX,
            "NegativeX" => Self::NegativeX,
            "PositiveY" => Self::PositiveY,
            "NegativeY" => Self::NegativeY,
            "PositiveZ" => Self::PositiveZ,
            "NegativeZ" => Self::NegativeZ,
            _ => Self::Unrecognized,
        }
    }
}

/* -- VRMC_materials_mtoon -- */

/// Texture slot reference. `index` points into the host texture collection;
/// textures are outside the node/material/image fixup scope, so it stays a
/// raw integer.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TextureInfo {
    pub index: i32,
    pub tex_coord: i32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ShadingShiftTextureInfo {
    pub index: i32,
    pub tex_coord: i32,
    pub scale: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mtoon {
    pub spec_version: SpecVersion,

    // Rendering
    pub transparent_with_z_write: bool,
    pub render_queue_offset_number: i32,

    // Shade color
    pub shade_color_factor: [f32; 3],
    pub shade_multiply_texture: Option<TextureInfo>,
    pub shading_shift_factor: f32,
    pub shading_shift_texture: Option<ShadingShiftTextureInfo>,
    pub shading_toony_factor: f32,

    // Global illumination
    pub gi_equalization_factor: f32,

    // Rim lighting
    pub matcap_factor: [f32; 3],
    pub matcap_texture: Option<TextureInfo>,
    pub parametric_rim_color_factor: [f32; 3],
    pub parametric_rim_fresnel_power_factor: f32,
    pub parametric_rim_lift_factor: f32,
    pub rim_multiply_texture: Option<TextureInfo>,
    pub rim_lighting_mix_factor: f32,

    // Outline
    pub outline_width_mode: OutlineWidthMode,
    pub outline_width_factor: f32,
    pub outline_width_multiply_texture: Option<TextureInfo>,
    pub outline_color_factor: [f32; 3],
    pub outline_lighting_mix_factor: f32,

    // UV animation
    pub uv_animation_mask_texture: Option<TextureInfo>,
    pub uv_animation_scroll_x_speed_factor: f32,
    pub uv_animation_scroll_y_speed_factor: f32,
    pub uv_animation_rotation_speed_factor: f32,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum OutlineWidthMode {
    #[default]
    None,
    WorldCoordinates,
    ScreenCoordinates,
    Unrecognized,
}

impl OutlineWidthMode {
    pub(crate) fn from_name(name: &str) -> Self {
        match name {
            "none" => Self::None,
            "worldCoordinates" => Self::WorldCoordinates,
            "screenCoordinates" => Self::ScreenCoordinates,
            _ => Self::Unrecognized,
        }
    }
}
