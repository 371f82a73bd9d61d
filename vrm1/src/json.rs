use crate::host::{self, VRMC_MATERIALS_MTOON, VRMC_NODE_CONSTRAINT, VRMC_SPRING_BONE, VRMC_VRM};
use crate::{
    AimAxis, AvatarPermission, Collider, ColliderGroup, ColliderShape, CommercialUsage,
    Constraint, CreditNotation, Error, Expression, ExpressionOverride, Expressions, FirstPerson,
    HostDocument, HumanBone, Humanoid, ImageRef, LookAt, LookAtType, MaterialColorBind,
    MaterialColorBindType, MaterialRef, MeshAnnotation, MeshAnnotationType, Meta, Modification,
    MorphTargetBind, Mtoon, NodeConstraint, NodeRef, OutlineWidthMode, RangeMap, RollAxis,
    ShadingShiftTextureInfo, SpecVersion, Spring, SpringBone, SpringJoint, TextureInfo,
    TextureTransformBind, VrmCore, VrmData,
};
use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::marker::PhantomData;

impl VrmData {
    /// Decodes every VRM extension the host document carries.
    ///
    /// Surfaces are scanned in a fixed order (document, nodes, materials) and
    /// the host-reference fixup runs strictly last, once every block has
    /// decoded. Any failure aborts the whole decode; the caller never sees a
    /// partially resolved aggregate.
    pub fn from_host(host: &HostDocument<'_>) -> Result<Self, Error> {
        let mut vrm = VrmData {
            core: VrmCore::default(),
            spring_bone: None,
            node_constraints: vec![None; host.node_count()],
            mtoon_materials: vec![None; host.material_count()],
        };

        if let Some(json) = host::find(&host.extensions, VRMC_VRM) {
            vrm.core = decode_core(json)?;
        }
        if let Some(json) = host::find(&host.extensions, VRMC_SPRING_BONE) {
            vrm.spring_bone = Some(decode_spring_bone(json)?);
        }

        for (slot, extensions) in vrm.node_constraints.iter_mut().zip(&host.nodes) {
            if let Some(json) = host::find(extensions, VRMC_NODE_CONSTRAINT) {
                *slot = Some(decode_node_constraint(json)?);
            }
        }

        for (slot, extensions) in vrm.mtoon_materials.iter_mut().zip(&host.materials) {
            if let Some(json) = host::find(extensions, VRMC_MATERIALS_MTOON) {
                *slot = Some(decode_mtoon(json)?);
            }
        }

        crate::resolve::resolve_host_refs(&mut vrm, host)?;
        Ok(vrm)
    }
}

fn decode<T: DeserializeOwned>(extension: &str, json: &str) -> Result<T, Error> {
    serde_json::from_str(json).map_err(|e| match e.classify() {
        serde_json::error::Category::Data => Error::InvalidData {
            extension: extension.to_string(),
            message: e.to_string(),
        },
        _ => Error::InvalidJson {
            extension: extension.to_string(),
            message: e.to_string(),
        },
    })
}

/// JSON object decoded as an ordered sequence of (key, record) pairs.
///
/// `humanBones` and the expression `preset`/`custom` dictionaries key each
/// record by its name. A serde map type would reorder entries and merge
/// duplicate keys; the wire order and duplicates are kept on purpose.
#[derive(Debug)]
struct NamedSeq<T>(Vec<(String, T)>);

impl<T> Default for NamedSeq<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for NamedSeq<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NamedSeqVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for NamedSeqVisitor<T> {
            type Value = NamedSeq<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of named records")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, T>()? {
                    entries.push(entry);
                }
                Ok(NamedSeq(entries))
            }
        }

        deserializer.deserialize_map(NamedSeqVisitor(PhantomData))
    }
}

fn spec_version(name: Option<String>) -> SpecVersion {
    name.as_deref().map(SpecVersion::from_name).unwrap_or_default()
}

/* ----------- VRMC_vrm ----------- */

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CoreDef {
    spec_version: Option<String>,
    humanoid: Option<HumanoidDef>,
    meta: Option<MetaDef>,
    first_person: Option<FirstPersonDef>,
    expressions: Option<ExpressionsDef>,
    look_at: Option<LookAtDef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HumanoidDef {
    human_bones: Option<NamedSeq<HumanBoneDef>>,
}

#[derive(Debug, Deserialize)]
struct HumanBoneDef {
    node: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetaDef {
    name: Option<String>,
    version: Option<String>,
    authors: Option<Vec<String>>,
    copyright_information: Option<String>,
    contact_information: Option<String>,
    references: Option<Vec<String>>,
    third_party_licenses: Option<String>,
    license_url: Option<String>,
    other_license_url: Option<String>,
    thumbnail_image: Option<i64>,
    avatar_permission: Option<String>,
    commercial_usage: Option<String>,
    credit_notation: Option<String>,
    modification: Option<String>,
    allow_antisocial_or_hate_usage: Option<bool>,
    allow_excessively_sexual_usage: Option<bool>,
    allow_excessively_violent_usage: Option<bool>,
    allow_political_or_religious_usage: Option<bool>,
    allow_redistribution: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FirstPersonDef {
    mesh_annotations: Option<Vec<MeshAnnotationDef>>,
}

#[derive(Debug, Deserialize)]
struct MeshAnnotationDef {
    node: Option<i64>,
    #[serde(rename = "type")]
    annotation_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExpressionsDef {
    preset: Option<NamedSeq<ExpressionDef>>,
    custom: Option<NamedSeq<ExpressionDef>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpressionDef {
    is_binary: Option<bool>,
    morph_target_binds: Option<Vec<MorphTargetBindDef>>,
    material_color_binds: Option<Vec<MaterialColorBindDef>>,
    texture_transform_binds: Option<Vec<TextureTransformBindDef>>,
    override_blink: Option<String>,
    override_look_at: Option<String>,
    override_mouth: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MorphTargetBindDef {
    node: Option<i64>,
    index: Option<i64>,
    weight: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MaterialColorBindDef {
    material: Option<i64>,
    #[serde(rename = "type")]
    bind_type: Option<String>,
    target_value: Option<[f32; 4]>,
}

#[derive(Debug, Deserialize)]
struct TextureTransformBindDef {
    material: Option<i64>,
    scale: Option<[f32; 2]>,
    offset: Option<[f32; 2]>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookAtDef {
    #[serde(rename = "type")]
    look_at_type: Option<String>,
    offset_from_head_bone: Option<[f32; 3]>,
    range_map_horizontal_inner: Option<RangeMapDef>,
    range_map_horizontal_outer: Option<RangeMapDef>,
    range_map_vertical_up: Option<RangeMapDef>,
    range_map_vertical_down: Option<RangeMapDef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RangeMapDef {
    input_max_value: Option<f32>,
    output_scale: Option<f32>,
}

pub(crate) fn decode_core(json: &str) -> Result<VrmCore, Error> {
    let def: CoreDef = decode(VRMC_VRM, json)?;

    Ok(VrmCore {
        spec_version: spec_version(def.spec_version),
        humanoid: def.humanoid.map(convert_humanoid).unwrap_or_default(),
        meta: def.meta.map(convert_meta).unwrap_or_default(),
        first_person: def.first_person.map(convert_first_person),
        expressions: def.expressions.map(convert_expressions),
        look_at: def.look_at.map(convert_look_at),
    })
}

fn convert_humanoid(def: HumanoidDef) -> Humanoid {
    Humanoid {
        human_bones: def
            .human_bones
            .unwrap_or_default()
            .0
            .into_iter()
            .map(|(name, bone)| HumanBone {
                name,
                node: NodeRef::from_index(bone.node),
            })
            .collect(),
    }
}

fn convert_meta(def: MetaDef) -> Meta {
    Meta {
        name: def.name,
        version: def.version,
        authors: def.authors.unwrap_or_default(),
        copyright_information: def.copyright_information,
        contact_information: def.contact_information,
        references: def.references.unwrap_or_default(),
        third_party_licenses: def.third_party_licenses,
        license_url: def.license_url,
        other_license_url: def.other_license_url,
        thumbnail_image: ImageRef::from_index(def.thumbnail_image),
        avatar_permission: def
            .avatar_permission
            .as_deref()
            .map(AvatarPermission::from_name)
            .unwrap_or_default(),
        commercial_usage: def
            .commercial_usage
            .as_deref()
            .map(CommercialUsage::from_name)
            .unwrap_or_default(),
        credit_notation: def
            .credit_notation
            .as_deref()
            .map(CreditNotation::from_name)
            .unwrap_or_default(),
        modification: def
            .modification
            .as_deref()
            .map(Modification::from_name)
            .unwrap_or_default(),
        allow_antisocial_or_hate_usage: def.allow_antisocial_or_hate_usage.unwrap_or_default(),
        allow_excessively_sexual_usage: def.allow_excessively_sexual_usage.unwrap_or_default(),
        allow_excessively_violent_usage: def.allow_excessively_violent_usage.unwrap_or_default(),
        allow_political_or_religious_usage: def
            .allow_political_or_religious_usage
            .unwrap_or_default(),
        allow_redistribution: def.allow_redistribution.unwrap_or_default(),
    }
}

fn convert_first_person(def: FirstPersonDef) -> FirstPerson {
    FirstPerson {
        mesh_annotations: def
            .mesh_annotations
            .unwrap_or_default()
            .into_iter()
            .map(|a| MeshAnnotation {
                node: NodeRef::from_index(a.node),
                annotation_type: a
                    .annotation_type
                    .as_deref()
                    .map(MeshAnnotationType::from_name)
                    .unwrap_or_default(),
            })
            .collect(),
    }
}

fn convert_expressions(def: ExpressionsDef) -> Expressions {
    fn convert_dict(dict: Option<NamedSeq<ExpressionDef>>) -> Vec<Expression> {
        dict.unwrap_or_default()
            .0
            .into_iter()
            .map(|(name, e)| Expression {
                name,
                is_binary: e.is_binary.unwrap_or_default(),
                morph_target_binds: e
                    .morph_target_binds
                    .unwrap_or_default()
                    .into_iter()
                    .map(|b| MorphTargetBind {
                        node: NodeRef::from_index(b.node),
                        index: b.index.unwrap_or_default() as i32,
                        weight: b.weight.unwrap_or_default(),
                    })
                    .collect(),
                material_color_binds: e
                    .material_color_binds
                    .unwrap_or_default()
                    .into_iter()
                    .map(|b| MaterialColorBind {
                        material: MaterialRef::from_index(b.material),
                        bind_type: b
                            .bind_type
                            .as_deref()
                            .map(MaterialColorBindType::from_name)
                            .unwrap_or_default(),
                        target_value: b.target_value.unwrap_or_default(),
                    })
                    .collect(),
                texture_transform_binds: e
                    .texture_transform_binds
                    .unwrap_or_default()
                    .into_iter()
                    .map(|b| TextureTransformBind {
                        material: MaterialRef::from_index(b.material),
                        // Identity transform when absent.
                        scale: b.scale.unwrap_or([1.0, 1.0]),
                        offset: b.offset.unwrap_or_default(),
                    })
                    .collect(),
                override_blink: expression_override(e.override_blink),
                override_look_at: expression_override(e.override_look_at),
                override_mouth: expression_override(e.override_mouth),
            })
            .collect()
    }

    Expressions {
        preset: convert_dict(def.preset),
        custom: convert_dict(def.custom),
    }
}

fn expression_override(name: Option<String>) -> ExpressionOverride {
    name.as_deref()
        .map(ExpressionOverride::from_name)
        .unwrap_or_default()
}

fn convert_look_at(def: LookAtDef) -> LookAt {
    fn convert_range_map(def: Option<RangeMapDef>) -> RangeMap {
        let def = match def {
            Some(def) => def,
            None => return RangeMap::default(),
        };
        RangeMap {
            input_max_value: def.input_max_value.unwrap_or_default(),
            output_scale: def.output_scale.unwrap_or_default(),
        }
    }

    LookAt {
        look_at_type: def
            .look_at_type
            .as_deref()
            .map(LookAtType::from_name)
            .unwrap_or_default(),
        offset_from_head_bone: def.offset_from_head_bone.unwrap_or_default(),
        range_map_horizontal_inner: convert_range_map(def.range_map_horizontal_inner),
        range_map_horizontal_outer: convert_range_map(def.range_map_horizontal_outer),
        range_map_vertical_up: convert_range_map(def.range_map_vertical_up),
        range_map_vertical_down: convert_range_map(def.range_map_vertical_down),
    }
}

/* ----------- VRMC_springBone ----------- */

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpringBoneDef {
    spec_version: Option<String>,
    colliders: Option<Vec<ColliderDef>>,
    collider_groups: Option<Vec<ColliderGroupDef>>,
    springs: Option<Vec<SpringDef>>,
}

#[derive(Debug, Deserialize)]
struct ColliderDef {
    node: Option<i64>,
    shape: Option<ShapeDef>,
}

#[derive(Debug, Deserialize)]
struct ShapeDef {
    sphere: Option<SphereShapeDef>,
    capsule: Option<CapsuleShapeDef>,
}

#[derive(Debug, Deserialize)]
struct SphereShapeDef {
    offset: Option<[f32; 3]>,
    radius: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct CapsuleShapeDef {
    offset: Option<[f32; 3]>,
    radius: Option<f32>,
    tail: Option<[f32; 3]>,
}

#[derive(Debug, Deserialize)]
struct ColliderGroupDef {
    name: Option<String>,
    colliders: Option<Vec<u64>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpringDef {
    name: Option<String>,
    joints: Option<Vec<SpringJointDef>>,
    collider_groups: Option<Vec<u64>>,
    center: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpringJointDef {
    node: Option<i64>,
    hit_radius: Option<f32>,
    stiffness: Option<f32>,
    gravity_power: Option<f32>,
    gravity_dir: Option<[f32; 3]>,
    drag_force: Option<f32>,
}

pub(crate) fn decode_spring_bone(json: &str) -> Result<SpringBone, Error> {
    let def: SpringBoneDef = decode(VRMC_SPRING_BONE, json)?;

    Ok(SpringBone {
        spec_version: spec_version(def.spec_version),
        colliders: def
            .colliders
            .unwrap_or_default()
            .into_iter()
            .map(convert_collider)
            .collect(),
        collider_groups: def
            .collider_groups
            .unwrap_or_default()
            .into_iter()
            .map(|g| ColliderGroup {
                name: g.name,
                colliders: local_indices(g.colliders),
            })
            .collect(),
        springs: def
            .springs
            .unwrap_or_default()
            .into_iter()
            .map(convert_spring)
            .collect(),
    })
}

fn local_indices(indices: Option<Vec<u64>>) -> Vec<usize> {
    indices
        .unwrap_or_default()
        .into_iter()
        .map(|i| i as usize)
        .collect()
}

fn convert_collider(def: ColliderDef) -> Collider {
    // The shape object carries exactly one kind key; anything else is a shape
    // this reader does not know about.
    let shape = match def.shape {
        None => ColliderShape::default(),
        Some(ShapeDef {
            sphere: Some(sphere),
            ..
        }) => ColliderShape::Sphere {
            offset: sphere.offset.unwrap_or_default(),
            radius: sphere.radius.unwrap_or_default(),
        },
        Some(ShapeDef {
            capsule: Some(capsule),
            ..
        }) => ColliderShape::Capsule {
            offset: capsule.offset.unwrap_or_default(),
            radius: capsule.radius.unwrap_or_default(),
            tail: capsule.tail.unwrap_or_default(),
        },
        Some(_) => ColliderShape::Unrecognized,
    };

    Collider {
        node: NodeRef::from_index(def.node),
        shape,
    }
}

fn convert_spring(def: SpringDef) -> Spring {
    Spring {
        name: def.name,
        joints: def
            .joints
            .unwrap_or_default()
            .into_iter()
            .map(|j| SpringJoint {
                node: NodeRef::from_index(j.node),
                hit_radius: j.hit_radius.unwrap_or_default(),
                stiffness: j.stiffness.unwrap_or_default(),
                gravity_power: j.gravity_power.unwrap_or_default(),
                gravity_dir: j.gravity_dir.unwrap_or_default(),
                drag_force: j.drag_force.unwrap_or_default(),
            })
            .collect(),
        collider_groups: local_indices(def.collider_groups),
        center: NodeRef::from_index(def.center),
    }
}

/* ----------- VRMC_node_constraint ----------- */

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NodeConstraintDef {
    spec_version: Option<String>,
    constraint: Option<ConstraintDef>,
}

#[derive(Debug, Deserialize)]
struct ConstraintDef {
    roll: Option<RollConstraintDef>,
    aim: Option<AimConstraintDef>,
    rotation: Option<RotationConstraintDef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RollConstraintDef {
    source: Option<i64>,
    roll_axis: Option<String>,
    weight: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AimConstraintDef {
    source: Option<i64>,
    aim_axis: Option<String>,
    weight: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct RotationConstraintDef {
    source: Option<i64>,
    weight: Option<f32>,
}

pub(crate) fn decode_node_constraint(json: &str) -> Result<NodeConstraint, Error> {
    let def: NodeConstraintDef = decode(VRMC_NODE_CONSTRAINT, json)?;

    let constraint = match def.constraint {
        Some(ConstraintDef {
            roll: Some(roll), ..
        }) => Constraint::Roll {
            source: NodeRef::from_index(roll.source),
            roll_axis: roll
                .roll_axis
                .as_deref()
                .map(RollAxis::from_name)
                .unwrap_or_default(),
            weight: roll.weight.unwrap_or_default(),
        },
        Some(ConstraintDef { aim: Some(aim), .. }) => Constraint::Aim {
            source: NodeRef::from_index(aim.source),
            aim_axis: aim
                .aim_axis
                .as_deref()
                .map(AimAxis::from_name)
                .unwrap_or_default(),
            weight: aim.weight.unwrap_or_default(),
        },
        Some(ConstraintDef {
            rotation: Some(rotation),
            ..
        }) => Constraint::Rotation {
            source: NodeRef::from_index(rotation.source),
            weight: rotation.weight.unwrap_or_default(),
        },
        _ => Constraint::Unrecognized,
    };

    Ok(NodeConstraint {
        spec_version: spec_version(def.spec_version),
        constraint,
    })
}

/* ----------- VRMC_materials_mtoon ----------- */

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextureInfoDef {
    index: Option<i64>,
    tex_coord: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShadingShiftTextureInfoDef {
    index: Option<i64>,
    tex_coord: Option<i64>,
    scale: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MtoonDef {
    spec_version: Option<String>,
    transparent_with_z_write: Option<bool>,
    render_queue_offset_number: Option<i64>,
    shade_color_factor: Option<[f32; 3]>,
    shade_multiply_texture: Option<TextureInfoDef>,
    shading_shift_factor: Option<f32>,
    shading_shift_texture: Option<ShadingShiftTextureInfoDef>,
    shading_toony_factor: Option<f32>,
    gi_equalization_factor: Option<f32>,
    matcap_factor: Option<[f32; 3]>,
    matcap_texture: Option<TextureInfoDef>,
    parametric_rim_color_factor: Option<[f32; 3]>,
    parametric_rim_fresnel_power_factor: Option<f32>,
    parametric_rim_lift_factor: Option<f32>,
    rim_multiply_texture: Option<TextureInfoDef>,
    rim_lighting_mix_factor: Option<f32>,
    outline_width_mode: Option<String>,
    outline_width_factor: Option<f32>,
    outline_width_multiply_texture: Option<TextureInfoDef>,
    outline_color_factor: Option<[f32; 3]>,
    outline_lighting_mix_factor: Option<f32>,
    uv_animation_mask_texture: Option<TextureInfoDef>,
    uv_animation_scroll_x_speed_factor: Option<f32>,
    uv_animation_scroll_y_speed_factor: Option<f32>,
    uv_animation_rotation_speed_factor: Option<f32>,
}

fn texture_info(def: Option<TextureInfoDef>) -> Option<TextureInfo> {
    def.map(|t| TextureInfo {
        index: t.index.unwrap_or_default() as i32,
        tex_coord: t.tex_coord.unwrap_or_default() as i32,
    })
}

pub(crate) fn decode_mtoon(json: &str) -> Result<Mtoon, Error> {
    let def: MtoonDef = decode(VRMC_MATERIALS_MTOON, json)?;

    Ok(Mtoon {
        spec_version: spec_version(def.spec_version),
        transparent_with_z_write: def.transparent_with_z_write.unwrap_or_default(),
        render_queue_offset_number: def.render_queue_offset_number.unwrap_or_default() as i32,
        shade_color_factor: def.shade_color_factor.unwrap_or_default(),
        shade_multiply_texture: texture_info(def.shade_multiply_texture),
        shading_shift_factor: def.shading_shift_factor.unwrap_or_default(),
        shading_shift_texture: def.shading_shift_texture.map(|t| ShadingShiftTextureInfo {
            index: t.index.unwrap_or_default() as i32,
            tex_coord: t.tex_coord.unwrap_or_default() as i32,
            scale: t.scale.unwrap_or_default(),
        }),
        shading_toony_factor: def.shading_toony_factor.unwrap_or_default(),
        gi_equalization_factor: def.gi_equalization_factor.unwrap_or_default(),
        matcap_factor: def.matcap_factor.unwrap_or_default(),
        matcap_texture: texture_info(def.matcap_texture),
        parametric_rim_color_factor: def.parametric_rim_color_factor.unwrap_or_default(),
        parametric_rim_fresnel_power_factor: def
            .parametric_rim_fresnel_power_factor
            .unwrap_or_default(),
        parametric_rim_lift_factor: def.parametric_rim_lift_factor.unwrap_or_default(),
        rim_multiply_texture: texture_info(def.rim_multiply_texture),
        rim_lighting_mix_factor: def.rim_lighting_mix_factor.unwrap_or_default(),
        outline_width_mode: def
            .outline_width_mode
            .as_deref()
            .map(OutlineWidthMode::from_name)
            .unwrap_or_default(),
        outline_width_factor: def.outline_width_factor.unwrap_or_default(),
        outline_width_multiply_texture: texture_info(def.outline_width_multiply_texture),
        outline_color_factor: def.outline_color_factor.unwrap_or_default(),
        outline_lighting_mix_factor: def.outline_lighting_mix_factor.unwrap_or_default(),
        uv_animation_mask_texture: texture_info(def.uv_animation_mask_texture),
        uv_animation_scroll_x_speed_factor: def
            .uv_animation_scroll_x_speed_factor
            .unwrap_or_default(),
        uv_animation_scroll_y_speed_factor: def
            .uv_animation_scroll_y_speed_factor
            .unwrap_or_default(),
        uv_animation_rotation_speed_factor: def
            .uv_animation_rotation_speed_factor
            .unwrap_or_default(),
    })
}
