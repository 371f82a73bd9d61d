//! Host-reference fixup, the second phase of the decode.
//!
//! Block decoders collect host-entity indices as `Unresolved`; this pass runs
//! once every block across every surface has decoded, bounds-checks each index
//! against the host collections, and rewrites it into a resolved reference.
//! The first out-of-range index fails the whole decode. Local indices
//! (collider group to collider, spring to collider group) bind collections
//! inside the same aggregate and are deliberately left untouched.

use crate::{Constraint, Error, HostDocument, VrmData};

pub(crate) fn resolve_host_refs(vrm: &mut VrmData, host: &HostDocument<'_>) -> Result<(), Error> {
    let nodes = host.node_count();
    let materials = host.material_count();
    let images = host.image_count;

    for bone in &mut vrm.core.humanoid.human_bones {
        bone.node.resolve(nodes, "humanoid human bone")?;
    }

    vrm.core.meta.thumbnail_image.resolve(images, "meta thumbnail")?;

    if let Some(first_person) = &mut vrm.core.first_person {
        for annotation in &mut first_person.mesh_annotations {
            annotation.node.resolve(nodes, "first-person mesh annotation")?;
        }
    }

    if let Some(expressions) = &mut vrm.core.expressions {
        for expression in expressions.preset.iter_mut().chain(&mut expressions.custom) {
            for bind in &mut expression.morph_target_binds {
                bind.node.resolve(nodes, "expression morph target bind")?;
            }
            for bind in &mut expression.material_color_binds {
                bind.material
                    .resolve(materials, "expression material color bind")?;
            }
            for bind in &mut expression.texture_transform_binds {
                bind.material
                    .resolve(materials, "expression texture transform bind")?;
            }
        }
    }

    if let Some(spring_bone) = &mut vrm.spring_bone {
        for collider in &mut spring_bone.colliders {
            collider.node.resolve(nodes, "spring-bone collider")?;
        }
        for spring in &mut spring_bone.springs {
            spring.center.resolve(nodes, "spring-bone spring center")?;
            for joint in &mut spring.joints {
                joint.node.resolve(nodes, "spring-bone joint")?;
            }
        }
    }

    for constraint in vrm.node_constraints.iter_mut().flatten() {
        match &mut constraint.constraint {
            Constraint::Roll { source, .. }
            | Constraint::Aim { source, .. }
            | Constraint::Rotation { source, .. } => {
                source.resolve(nodes, "node constraint source")?;
            }
            Constraint::Unrecognized => {}
        }
    }

    Ok(())
}
