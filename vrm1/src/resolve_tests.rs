use crate::{
    Error, HostDocument, ImageRef, NodeRef, RawExtension, VrmData, VRMC_NODE_CONSTRAINT,
    VRMC_SPRING_BONE, VRMC_VRM,
};

#[test]
fn humanoid_bone_and_spring_center_resolve_to_document_positions() {
    // Two host nodes; the humanoid bone points at node 1 and the spring
    // center at node 0.
    let core = r#"{ "humanoid": { "humanBones": { "hips": { "node": 1 } } } }"#;
    let spring_bone = r#"{ "springs": [ { "center": 0, "joints": [ { "node": 1 } ] } ] }"#;

    let host = HostDocument {
        extensions: vec![
            RawExtension {
                name: VRMC_VRM,
                json: core,
            },
            RawExtension {
                name: VRMC_SPRING_BONE,
                json: spring_bone,
            },
        ],
        nodes: vec![Vec::new(); 2],
        materials: Vec::new(),
        image_count: 0,
    };

    let vrm = VrmData::from_host(&host).expect("decode");

    assert_eq!(vrm.core.humanoid.human_bones[0].node, NodeRef::Node(1));
    assert_eq!(vrm.core.humanoid.human_bones[0].node.get(), Some(1));

    let spring = &vrm.spring_bone.as_ref().expect("spring bone").springs[0];
    assert_eq!(spring.center, NodeRef::Node(0));
    assert_eq!(spring.joints[0].node, NodeRef::Node(1));
}

#[test]
fn out_of_range_constraint_source_fails_the_whole_decode() {
    // Source index 5 in a three-node document.
    let constraint = r#"{ "constraint": { "rotation": { "source": 5 } } }"#;

    let host = HostDocument {
        extensions: Vec::new(),
        nodes: vec![
            vec![RawExtension {
                name: VRMC_NODE_CONSTRAINT,
                json: constraint,
            }],
            Vec::new(),
            Vec::new(),
        ],
        materials: Vec::new(),
        image_count: 0,
    };

    match VrmData::from_host(&host) {
        Err(Error::NodeIndexOutOfRange { index, count, .. }) => {
            assert_eq!(index, 5);
            assert_eq!(count, 3);
        }
        other => panic!("expected NodeIndexOutOfRange, got {other:?}"),
    }
}

#[test]
fn out_of_range_thumbnail_image_fails_the_whole_decode() {
    let core = r#"{ "meta": { "thumbnailImage": 2 } }"#;

    let host = HostDocument {
        extensions: vec![RawExtension {
            name: VRMC_VRM,
            json: core,
        }],
        nodes: Vec::new(),
        materials: Vec::new(),
        image_count: 1,
    };

    match VrmData::from_host(&host) {
        Err(Error::ImageIndexOutOfRange { index, count, .. }) => {
            assert_eq!(index, 2);
            assert_eq!(count, 1);
        }
        other => panic!("expected ImageIndexOutOfRange, got {other:?}"),
    }
}

#[test]
fn out_of_range_material_bind_fails_the_whole_decode() {
    let core = r#"
{
  "expressions": {
    "preset": {
      "happy": {
        "materialColorBinds": [ { "material": 3, "type": "color", "targetValue": [1, 1, 1, 1] } ]
      }
    }
  }
}
"#;

    let host = HostDocument {
        extensions: vec![RawExtension {
            name: VRMC_VRM,
            json: core,
        }],
        nodes: Vec::new(),
        materials: vec![Vec::new(); 2],
        image_count: 0,
    };

    match VrmData::from_host(&host) {
        Err(Error::MaterialIndexOutOfRange { index, count, .. }) => {
            assert_eq!(index, 3);
            assert_eq!(count, 2);
        }
        other => panic!("expected MaterialIndexOutOfRange, got {other:?}"),
    }
}

#[test]
fn negative_index_is_the_unset_sentinel() {
    let core = r#"
{
  "humanoid": { "humanBones": { "hips": { "node": -1 } } },
  "meta": { "thumbnailImage": -1 }
}
"#;

    let host = HostDocument {
        extensions: vec![RawExtension {
            name: VRMC_VRM,
            json: core,
        }],
        nodes: vec![Vec::new(); 1],
        materials: Vec::new(),
        image_count: 0,
    };

    // Unset refs are skipped by fixup even when the bound collection is empty.
    let vrm = VrmData::from_host(&host).expect("decode");
    assert_eq!(vrm.core.humanoid.human_bones[0].node, NodeRef::Unset);
    assert_eq!(vrm.core.meta.thumbnail_image, ImageRef::Unset);
}

#[test]
fn fixup_resolves_every_collected_index() {
    // Every host-index field kind at once; all in bounds, so every reference
    // must come out resolved to the position it named.
    let core = r#"
{
  "humanoid": { "humanBones": { "hips": { "node": 0 } } },
  "meta": { "thumbnailImage": 0 },
  "firstPerson": { "meshAnnotations": [ { "node": 2, "type": "both" } ] },
  "expressions": {
    "custom": {
      "pout": { "morphTargetBinds": [ { "node": 1, "index": 0, "weight": 1.0 } ] }
    }
  }
}
"#;
    let spring_bone = r#"
{
  "colliders": [ { "node": 2 } ],
  "springs": [ { "center": 0, "joints": [ { "node": 1 }, { "node": 2 } ] } ]
}
"#;
    let constraint = r#"{ "constraint": { "aim": { "source": 2, "aimAxis": "PositiveY" } } }"#;

    let host = HostDocument {
        extensions: vec![
            RawExtension {
                name: VRMC_VRM,
                json: core,
            },
            RawExtension {
                name: VRMC_SPRING_BONE,
                json: spring_bone,
            },
        ],
        nodes: vec![
            vec![RawExtension {
                name: VRMC_NODE_CONSTRAINT,
                json: constraint,
            }],
            Vec::new(),
            Vec::new(),
        ],
        materials: Vec::new(),
        image_count: 1,
    };

    let vrm = VrmData::from_host(&host).expect("decode");

    assert_eq!(vrm.core.humanoid.human_bones[0].node, NodeRef::Node(0));
    assert_eq!(vrm.core.meta.thumbnail_image, ImageRef::Image(0));
    assert_eq!(
        vrm.core.first_person.as_ref().expect("first person").mesh_annotations[0].node,
        NodeRef::Node(2)
    );
    assert_eq!(
        vrm.core.expressions.as_ref().expect("expressions").custom[0].morph_target_binds[0].node,
        NodeRef::Node(1)
    );

    let spring_bone = vrm.spring_bone.as_ref().expect("spring bone");
    assert_eq!(spring_bone.colliders[0].node, NodeRef::Node(2));
    assert_eq!(spring_bone.springs[0].center, NodeRef::Node(0));
    assert_eq!(spring_bone.springs[0].joints[1].node, NodeRef::Node(2));

    let constraint = vrm.node_constraints[0].as_ref().expect("constraint");
    assert_eq!(constraint.constraint.source(), Some(NodeRef::Node(2)));
}
