/*
Read-only view of the colliders living in the physics world.

Rapier hands back a `&dyn Shape`; this turns it into a plain enum so the
debug overlay can `match` on it instead of probing with `as_ball()`,
`as_cuboid()` and friends at every draw call.

All coordinates are world space, in meters.
*/

use rapier2d::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum FixtureShape {
    Circle { center: Point<Real>, radius: Real },
    /// Convex outline (boxes included), vertices in winding order
    Polygon { vertices: Vec<Point<Real>> },
    /// Polyline; `closed` when a segment joins the last vertex back to the first
    Chain { vertices: Vec<Point<Real>>, closed: bool },
    Edge { a: Point<Real>, b: Point<Real> },
}

impl FixtureShape {
    /// Snapshot a collider's geometry in world space.
    /// Returns `None` for shape kinds the sandbox never creates (capsules, heightfields...).
    pub fn from_collider(collider: &Collider) -> Option<Self> {
        let pos = collider.position();
        let shape = collider.shape();

        if let Some(ball) = shape.as_ball() {
            return Some(FixtureShape::Circle {
                center: pos.translation.vector.into(),
                radius: ball.radius,
            });
        }

        if let Some(cuboid) = shape.as_cuboid() {
            // Corners counter-clockwise starting bottom-left (in local space)
            let hx = cuboid.half_extents.x;
            let hy = cuboid.half_extents.y;
            let corners = [
                point![-hx, -hy],
                point![hx, -hy],
                point![hx, hy],
                point![-hx, hy],
            ];
            return Some(FixtureShape::Polygon {
                vertices: corners.iter().map(|p| pos.transform_point(p)).collect(),
            });
        }

        if let Some(polygon) = shape.as_convex_polygon() {
            return Some(FixtureShape::Polygon {
                vertices: polygon.points().iter().map(|p| pos.transform_point(p)).collect(),
            });
        }

        if let Some(polyline) = shape.as_polyline() {
            return Some(FixtureShape::Chain {
                vertices: polyline.vertices().iter().map(|p| pos.transform_point(p)).collect(),
                closed: is_closed(polyline.indices()),
            });
        }

        if let Some(segment) = shape.as_segment() {
            return Some(FixtureShape::Edge {
                a: pos.transform_point(&segment.a),
                b: pos.transform_point(&segment.b),
            });
        }

        None
    }

    /// Short name used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            FixtureShape::Circle { .. } => "circle",
            FixtureShape::Polygon { .. } => "polygon",
            FixtureShape::Chain { closed: true, .. } => "loop",
            FixtureShape::Chain { closed: false, .. } => "chain",
            FixtureShape::Edge { .. } => "edge",
        }
    }
}

/// Segment index list for a polyline through `count` vertices.
/// A closed list has one extra segment from the last vertex back to the first.
pub fn polyline_indices(count: usize, closed: bool) -> Vec<[u32; 2]> {
    let count = count as u32;
    let mut indices: Vec<[u32; 2]> = (1..count).map(|i| [i - 1, i]).collect();
    if closed && count > 2 {
        indices.push([count - 1, 0]);
    }
    indices
}

/// True when the last segment ends where the first one starts
pub fn is_closed(indices: &[[u32; 2]]) -> bool {
    match (indices.first(), indices.last()) {
        (Some(first), Some(last)) => indices.len() > 1 && last[1] == first[0],
        _ => false,
    }
}
