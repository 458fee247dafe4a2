//! Layout nodes and container shapes.
//!
//! Coordinates are centered on the container: the origin is the geometric
//! center of the cross-section and +y points down (screen convention), so
//! "gravity" pulls toward +y. Units are whatever the caller scales to —
//! typically pixels, with `scale` converting catalog millimeters.

use nalgebra::Vector2;
use raceway_core::Cable;

use crate::rng::Lcg;

/// Visual copper radius from nominal section: r = √(A/π), widened 10% for
/// the cordage air gap of flexible conductors.
pub const CORDAGE_ALLOWANCE: f64 = 1.1;

/// Initial placement jitter half-range (units), breaking symmetry so stacked
/// nodes don't stall separation.
pub const JITTER_HALF: f64 = 10.0;

/// Bounded cross-section the nodes must stay inside, centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Container {
    /// Rectangular tray interior.
    Rect { width: f64, height: f64 },
    /// Circular conduit interior.
    Circle { radius: f64 },
}

impl Container {
    /// Hard containment clamp, applied after forces every tick.
    ///
    /// A node too large for the container rests centered against the
    /// limiting boundary; that is a visual approximation, not an error.
    pub fn clamp(&self, node: &mut LayoutNode) {
        match *self {
            Container::Rect { width, height } => {
                node.position.x = clamp_span(node.position.x, width / 2.0, node.radius);
                node.position.y = clamp_span(node.position.y, height / 2.0, node.radius);
            }
            Container::Circle { radius } => {
                let max_dist = (radius - node.radius).max(0.0);
                let dist = node.position.norm();
                if dist > max_dist {
                    // Project back onto the limit along the same angle.
                    node.position *= max_dist / dist;
                }
            }
        }
    }

    /// Whether a circle of `radius` at `position` satisfies the boundary,
    /// within `tol`. Used by tests and sanity checks.
    pub fn contains(&self, position: Vector2<f64>, radius: f64, tol: f64) -> bool {
        match *self {
            Container::Rect { width, height } => {
                let lim_x = (width / 2.0 - radius).max(0.0);
                let lim_y = (height / 2.0 - radius).max(0.0);
                position.x.abs() <= lim_x + tol && position.y.abs() <= lim_y + tol
            }
            Container::Circle { radius: r } => {
                position.norm() <= (r - radius).max(0.0) + tol
            }
        }
    }
}

/// Clamp a coordinate so the circle stays within ±half. Collapses to the
/// centerline when the circle is wider than the span.
fn clamp_span(v: f64, half: f64, radius: f64) -> f64 {
    let lim = half - radius;
    if lim <= 0.0 {
        0.0
    } else {
        v.clamp(-lim, lim)
    }
}

/// One simulated circle per individual conductor.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    /// Originating cable (group key).
    pub cable_id: u32,
    /// Conductor index within the cable (0..quantity).
    pub index: u32,
    /// Visual outer radius: insulation included.
    pub radius: f64,
    /// Visual copper radius.
    pub inner_radius: f64,
    /// Insulation color (section color).
    pub color: &'static str,
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
}

/// Expand the bill of materials into per-conductor nodes: a cable of
/// quantity N yields N nodes sharing radii and color, independently placed
/// near the container center with small random jitter.
///
/// Nodes are created fresh on every structural change; there is no
/// incremental re-layout.
pub fn expand_cables(cables: &[Cable], scale: f64, rng: &mut Lcg) -> Vec<LayoutNode> {
    let mut nodes = Vec::new();
    for cable in cables {
        let radius = cable.diameter / 2.0 * scale;
        let inner_radius = (cable.section / std::f64::consts::PI).sqrt() * CORDAGE_ALLOWANCE * scale;
        for index in 0..cable.quantity {
            nodes.push(LayoutNode {
                cable_id: cable.id,
                index,
                radius,
                inner_radius,
                color: cable.color,
                position: Vector2::new(rng.symmetric(JITTER_HALF), rng.symmetric(JITTER_HALF)),
                velocity: Vector2::zeros(),
            });
        }
    }
    nodes
}
