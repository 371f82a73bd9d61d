use crate::{
    AvatarPermission, CommercialUsage, ExpressionOverride, HostDocument, ImageRef,
    LookAtType, MaterialColorBindType, MaterialRef, MeshAnnotationType, Modification, NodeRef,
    RawExtension, SpecVersion, VrmData, VRMC_VRM,
};

fn host_with_core(json: &str, node_count: usize, image_count: usize) -> HostDocument<'_> {
    HostDocument {
        extensions: vec![RawExtension {
            name: VRMC_VRM,
            json,
        }],
        nodes: vec![Vec::new(); node_count],
        materials: Vec::new(),
        image_count,
    }
}

#[test]
fn core_decodes_humanoid_and_meta() {
    let json = r#"
{
  "specVersion": "1.0",
  "humanoid": {
    "humanBones": {
      "hips": { "node": 0 },
      "head": { "node": 1 }
    }
  },
  "meta": {
    "name": "Test Avatar",
    "version": "1.2",
    "authors": ["a", "b"],
    "licenseUrl": "https://vrm.dev/licenses/1.0/",
    "thumbnailImage": 0,
    "avatarPermission": "everyone",
    "commercialUsage": "personalProfit",
    "modification": "allowModification",
    "allowRedistribution": true,
    "allowExcessivelyViolentUsage": true
  }
}
"#;

    let vrm = VrmData::from_host(&host_with_core(json, 2, 1)).expect("decode");
    let core = &vrm.core;

    assert_eq!(core.spec_version, SpecVersion::V1_0);

    // humanBones keep file order; both refs resolved by fixup.
    let bones = &core.humanoid.human_bones;
    assert_eq!(bones.len(), 2);
    assert_eq!(bones[0].name, "hips");
    assert_eq!(bones[0].node, NodeRef::Node(0));
    assert_eq!(bones[1].name, "head");
    assert_eq!(bones[1].node, NodeRef::Node(1));

    let meta = &core.meta;
    assert_eq!(meta.name.as_deref(), Some("Test Avatar"));
    assert_eq!(meta.version.as_deref(), Some("1.2"));
    assert_eq!(meta.authors, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(meta.license_url.as_deref(), Some("https://vrm.dev/licenses/1.0/"));
    assert_eq!(meta.thumbnail_image, ImageRef::Image(0));
    assert_eq!(meta.avatar_permission, AvatarPermission::Everyone);
    assert_eq!(meta.commercial_usage, CommercialUsage::PersonalProfit);
    assert_eq!(meta.modification, Modification::AllowModification);
    assert!(meta.allow_redistribution);
    assert!(meta.allow_excessively_violent_usage);
    assert!(!meta.allow_excessively_sexual_usage);

    // Absent optional blocks stay absent.
    assert!(core.first_person.is_none());
    assert!(core.expressions.is_none());
    assert!(core.look_at.is_none());
}

#[test]
fn unknown_keys_are_skipped_at_any_depth() {
    let plain = r#"
{
  "specVersion": "1.0",
  "humanoid": { "humanBones": { "hips": { "node": 0 } } }
}
"#;
    let with_extras = r#"
{
  "specVersion": "1.0",
  "futureExtension": { "nested": { "deep": [1, 2, { "x": true }] } },
  "humanoid": {
    "humanBones": { "hips": { "node": 0, "futureHint": "soft" } },
    "futureBoneMap": [0, 1, 2]
  }
}
"#;

    let a = VrmData::from_host(&host_with_core(plain, 1, 0)).expect("decode plain");
    let b = VrmData::from_host(&host_with_core(with_extras, 1, 0)).expect("decode with extras");
    assert_eq!(a, b);
}

#[test]
fn unrecognized_enum_text_maps_to_reserved_member() {
    let json = r#"
{
  "specVersion": "2.0",
  "meta": { "avatarPermission": "holdersOfTheSacredKey" },
  "firstPerson": {
    "meshAnnotations": [ { "node": 0, "type": "fourthPersonOnly" } ]
  },
  "lookAt": { "type": "hologram" }
}
"#;

    let vrm = VrmData::from_host(&host_with_core(json, 1, 0)).expect("decode");
    assert_eq!(vrm.core.spec_version, SpecVersion::Unrecognized);
    assert_eq!(
        vrm.core.meta.avatar_permission,
        AvatarPermission::Unrecognized
    );

    let first_person = vrm.core.first_person.as_ref().expect("first person");
    assert_eq!(
        first_person.mesh_annotations[0].annotation_type,
        MeshAnnotationType::Unrecognized
    );

    let look_at = vrm.core.look_at.as_ref().expect("look at");
    assert_eq!(look_at.look_at_type, LookAtType::Unrecognized);
}

#[test]
fn expressions_decode_binds_and_overrides() {
    let json = r#"
{
  "specVersion": "1.0",
  "expressions": {
    "preset": {
      "happy": {
        "isBinary": true,
        "morphTargetBinds": [ { "node": 1, "index": 3, "weight": 0.75 } ],
        "materialColorBinds": [
          { "material": 0, "type": "shadeColor", "targetValue": [0.1, 0.2, 0.3, 1.0] }
        ],
        "textureTransformBinds": [ { "material": 0, "offset": [0.5, 0.25] } ],
        "overrideBlink": "block",
        "overrideLookAt": "blend"
      }
    }
  }
}
"#;

    let host = HostDocument {
        extensions: vec![RawExtension {
            name: VRMC_VRM,
            json,
        }],
        nodes: vec![Vec::new(); 2],
        materials: vec![Vec::new(); 1],
        image_count: 0,
    };
    let vrm = VrmData::from_host(&host).expect("decode");

    let expressions = vrm.core.expressions.as_ref().expect("expressions");
    assert_eq!(expressions.preset.len(), 1);
    assert!(expressions.custom.is_empty());

    let happy = &expressions.preset[0];
    assert_eq!(happy.name, "happy");
    assert!(happy.is_binary);
    assert_eq!(happy.override_blink, ExpressionOverride::Block);
    assert_eq!(happy.override_look_at, ExpressionOverride::Blend);
    assert_eq!(happy.override_mouth, ExpressionOverride::None);

    let morph = &happy.morph_target_binds[0];
    assert_eq!(morph.node, NodeRef::Node(1));
    assert_eq!(morph.index, 3);
    assert!((morph.weight - 0.75).abs() < 1e-6);

    let color = &happy.material_color_binds[0];
    assert_eq!(color.material, MaterialRef::Material(0));
    assert_eq!(color.bind_type, MaterialColorBindType::ShadeColor);
    assert!((color.target_value[2] - 0.3).abs() < 1e-6);

    // Absent scale is the identity transform.
    let transform = &happy.texture_transform_binds[0];
    assert_eq!(transform.material, MaterialRef::Material(0));
    assert!((transform.scale[0] - 1.0).abs() < 1e-6);
    assert!((transform.scale[1] - 1.0).abs() < 1e-6);
    assert!((transform.offset[0] - 0.5).abs() < 1e-6);
}

#[test]
fn duplicate_custom_expression_names_decode_independently() {
    let json = r#"
{
  "expressions": {
    "custom": {
      "wink": { "isBinary": true },
      "wink": { "isBinary": false }
    }
  }
}
"#;

    let vrm = VrmData::from_host(&host_with_core(json, 0, 0)).expect("decode");
    let custom = &vrm.core.expressions.as_ref().expect("expressions").custom;

    assert_eq!(custom.len(), 2);
    assert_eq!(custom[0].name, "wink");
    assert_eq!(custom[1].name, "wink");
    assert!(custom[0].is_binary);
    assert!(!custom[1].is_binary);
}

#[test]
fn look_at_decodes_range_maps() {
    let json = r#"
{
  "lookAt": {
    "type": "expression",
    "offsetFromHeadBone": [0.0, 0.06, 0.0],
    "rangeMapHorizontalInner": { "inputMaxValue": 90.0, "outputScale": 10.0 },
    "rangeMapVerticalDown": { "inputMaxValue": 80.0, "outputScale": 8.5 }
  }
}
"#;

    let vrm = VrmData::from_host(&host_with_core(json, 0, 0)).expect("decode");
    let look_at = vrm.core.look_at.as_ref().expect("look at");

    assert_eq!(look_at.look_at_type, LookAtType::Expression);
    assert!((look_at.offset_from_head_bone[1] - 0.06).abs() < 1e-6);
    assert!((look_at.range_map_horizontal_inner.input_max_value - 90.0).abs() < 1e-6);
    assert!((look_at.range_map_horizontal_inner.output_scale - 10.0).abs() < 1e-6);
    assert!((look_at.range_map_vertical_down.output_scale - 8.5).abs() < 1e-6);
    // Absent range maps stay zeroed.
    assert!((look_at.range_map_vertical_up.input_max_value - 0.0).abs() < 1e-6);
}
