// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Impulse-based collision response.
//!
//! Body/body: contacts come from the triangle-soup intersection of the two
//! bodies' collision meshes. The contact normal is the line between centers
//! (not the surface normal), so the response is symmetric and cheap. Each
//! body gets an equal and opposite whole-body velocity change; the control
//! points nearest each contact get an extra local kick that dents the
//! surfaces, which the springs then relax.
//!
//! Body/boundary: the body's box is intersected with the static boundary
//! box; faces of the boundary the overlap reaches are contacts. The
//! whole-body velocity is reflected about the averaged inward normal.

use squish_geom::{detect_contacts, Aabb};
use squish_math::{Vec3, EPSILON};
use tracing::{debug, trace};

use crate::body::FfdBody;
use crate::lattice::CONTROL_POINTS;
use crate::params::PhysicsParams;

/// What [`resolve_collision`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionOutcome {
    /// No intersecting triangles (including disjoint boxes).
    NoContact,
    /// Contacts exist but the centers coincide, so no normal is defined.
    DegenerateNormal,
    /// Contacts exist but the bodies are already moving apart.
    Separating {
        /// Clustered contact count.
        contacts: usize,
    },
    /// Impulses were applied.
    Resolved {
        /// Clustered world-space contact points.
        contacts: Vec<Vec3>,
        /// Unit normal pointing from B toward A.
        normal: Vec3,
        /// Whole-body velocity change applied to B (A received the negation).
        impulse: Vec3,
    },
}

impl CollisionOutcome {
    /// `true` when impulses were applied.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    /// Number of clustered contacts behind this outcome.
    pub fn contact_count(&self) -> usize {
        match self {
            Self::NoContact | Self::DegenerateNormal => 0,
            Self::Separating { contacts } => *contacts,
            Self::Resolved { contacts, .. } => contacts.len(),
        }
    }
}

/// What [`resolve_collision_interior`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryOutcome {
    /// The body's box does not overlap the boundary at all.
    Outside,
    /// The body is inside without touching any face.
    NoContact,
    /// Opposite faces were touched and their normals cancel.
    DegenerateNormal,
    /// Touching, but already moving inward.
    Separating,
    /// Velocity reflected and control points pushed inward.
    Resolved {
        /// Contact points on the touched faces.
        contacts: Vec<Vec3>,
        /// Averaged inward unit normal.
        normal: Vec3,
    },
}

impl BoundaryOutcome {
    /// `true` when the velocity was reflected.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}

/// Resolves a collision between two bodies.
///
/// When the bodies approach (`(vA − vB)·n < 0`, `n = normalize(cA − cB)`):
/// - `vA −= J·(1 + e)·share` and `vB += J·(1 + e)·share`, with `J = ((vA − vB)·n)·n`;
///   with the default share of ½ equal bodies exchange normal velocity
///   scaled by `e`;
/// - the centers move apart by `separation` each along `±n`;
/// - for every contact the nearest control point of each body receives
///   `∓(J·e·local_multiplier/contacts + n·((cpA − cpB)·n)/27)`.
///
/// Total whole-body momentum (equal masses) is unchanged.
pub fn resolve_collision(a: &mut FfdBody, b: &mut FfdBody, params: &PhysicsParams) -> CollisionOutcome {
    let report = detect_contacts(a.physx_triangles(), &a.world_box(), b.physx_triangles(), &b.world_box());
    let contacts = report.contact_points(params.contact_radius);
    if contacts.is_empty() {
        return CollisionOutcome::NoContact;
    }

    let axis = a.center() - b.center();
    if axis.length_squared() <= EPSILON * EPSILON {
        debug!(contacts = contacts.len(), "coincident centers; skipping collision");
        return CollisionOutcome::DegenerateNormal;
    }
    let normal = axis.normalize();
    let vn = (a.velocity() - b.velocity()).dot(&normal);
    if vn >= 0.0 {
        trace!(vn, contacts = contacts.len(), "bodies separating");
        return CollisionOutcome::Separating {
            contacts: contacts.len(),
        };
    }

    // Pick control points before moving anything so both bodies see the
    // same contact geometry.
    let pairs: Vec<(usize, usize)> = contacts
        .iter()
        .map(|c| (a.closest_control_point(c), b.closest_control_point(c)))
        .collect();

    let j = normal.scale(vn);
    let impulse = j.scale((1.0 + params.restitution) * params.body_impulse_share);
    a.apply_velocity_change(-impulse);
    b.apply_velocity_change(impulse);
    a.translate(normal.scale(params.separation));
    b.translate(normal.scale(-params.separation));

    let local = j.scale(params.restitution * params.local_impulse_multiplier / pairs.len() as f32);
    for &(ia, ib) in &pairs {
        let rel = a.control_velocity(ia) - b.control_velocity(ib);
        let kick = local + normal.scale(rel.dot(&normal) / CONTROL_POINTS as f32);
        a.apply_control_velocity_change(ia, -kick);
        b.apply_control_velocity_change(ib, kick);
    }

    debug!(
        contacts = contacts.len(),
        segments = report.segments.len(),
        vn,
        normal = ?normal.to_array(),
        "body collision resolved"
    );
    CollisionOutcome::Resolved {
        contacts,
        normal,
        impulse,
    }
}

/// Resolves a body against the inside of a static boundary box.
///
/// A boundary face is touched when the overlap of the body's world box and
/// the boundary reaches that face within `face_tolerance`. The contact for a
/// face is the body center projected onto it. If the body moves against
/// the averaged inward normal its velocity is reflected (speed preserved),
/// it is nudged inward by `wall_separation`, and the control point nearest
/// each contact gets an inward velocity kick.
pub fn resolve_collision_interior(body: &mut FfdBody, boundary: &Aabb, params: &PhysicsParams) -> BoundaryOutcome {
    let Some(overlap) = body.world_box().intersection(boundary) else {
        return BoundaryOutcome::Outside;
    };

    let center = body.center();
    let tol = params.face_tolerance;
    let mut contacts = Vec::new();
    let mut inward = Vec3::ZERO;
    for axis in 0..3 {
        let unit = Vec3::ZERO.with_component(axis, 1.0);
        let lo = boundary.min().component(axis);
        let hi = boundary.max().component(axis);
        if (overlap.min().component(axis) - lo).abs() <= tol {
            contacts.push(center.with_component(axis, lo));
            inward += unit;
        }
        if (overlap.max().component(axis) - hi).abs() <= tol {
            contacts.push(center.with_component(axis, hi));
            inward -= unit;
        }
    }
    if contacts.is_empty() {
        return BoundaryOutcome::NoContact;
    }

    let normal = inward.normalize();
    if normal == Vec3::ZERO {
        debug!(contacts = contacts.len(), "opposing boundary faces; skipping");
        return BoundaryOutcome::DegenerateNormal;
    }
    let velocity = body.velocity();
    let vn = velocity.dot(&normal);
    if vn >= 0.0 {
        return BoundaryOutcome::Separating;
    }

    body.set_velocity(velocity - normal.scale(2.0 * vn));
    body.translate(normal.scale(params.wall_separation));
    let push = normal.scale(-vn * params.wall_impulse_multiplier / contacts.len() as f32);
    for contact in &contacts {
        let idx = body.closest_control_point(contact);
        body.apply_control_velocity_change(idx, push);
    }

    debug!(
        contacts = contacts.len(),
        vn,
        normal = ?normal.to_array(),
        "boundary collision resolved"
    );
    BoundaryOutcome::Resolved { contacts, normal }
}
