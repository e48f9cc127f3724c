use serde::Serialize;

use super::PlaygroundCore;

/// One body's pose at a point in time.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyPose {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

/// Immutable per-frame snapshot: the only simulation-to-render channel.
/// Each call to `sample` returns a fresh value; consumers may keep or
/// mutate old ones freely without touching the world.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoseSnapshot {
    pub frame: u64,
    pub poses: Vec<BodyPose>,
}

pub(super) fn sample(core: &PlaygroundCore) -> PoseSnapshot {
    let mut poses = Vec::with_capacity(core.content.len());
    for body in core.bodies() {
        let Some(index) = body.descriptor_index else {
            continue; // boundary body
        };
        if let Some(descriptor) = core.content.get(index) {
            poses.push(BodyPose {
                id: descriptor.id.clone(),
                x: body.pos.x,
                y: body.pos.y,
                angle: body.angle,
            });
        }
    }
    PoseSnapshot {
        frame: core.frame,
        poses,
    }
}

pub(super) fn sample_json(core: &PlaygroundCore) -> String {
    serde_json::to_string(&sample(core)).unwrap_or_else(|_| "{}".to_string())
}

pub(super) fn query(core: &PlaygroundCore, body_id: &str) -> Option<BodyPose> {
    let index = core.content.index_of(body_id)?;
    let body = core
        .bodies()
        .iter()
        .find(|b| b.descriptor_index == Some(index))?;
    Some(BodyPose {
        id: body_id.to_string(),
        x: body.pos.x,
        y: body.pos.y,
        angle: body.angle,
    })
}

/// Refill the f32 transfer buffer as [x, y, angle] per dynamic body in
/// catalog order (the order `manifest_json` publishes).
pub(super) fn fill_pose_buffer(core: &mut PlaygroundCore) -> usize {
    core.pose_buffer.clear();
    let mut triples: Vec<(usize, f32, f32, f32)> = core
        .bodies
        .iter()
        .filter_map(|b| {
            b.descriptor_index
                .map(|i| (i, b.pos.x, b.pos.y, b.angle))
        })
        .collect();
    triples.sort_by_key(|t| t.0);
    for (_, x, y, angle) in triples {
        core.pose_buffer.push(x);
        core.pose_buffer.push(y);
        core.pose_buffer.push(angle);
    }
    core.pose_buffer.len()
}
