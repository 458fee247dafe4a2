//! Tick-based force relaxation.
//!
//! Each tick applies weak directional biases to velocities, resolves pairwise
//! overlaps over a few positional passes, integrates with strong velocity
//! decay, then hard-clamps every node to the container. Force strengths are
//! scaled by a cooling factor (alpha) so the arrangement settles instead of
//! oscillating; collision resolution is not cooled, non-overlap is a hard
//! goal.
//!
//! The engine owns its node list exclusively for the duration of a run. A
//! structural change (cable list, raceway size or type) means building a new
//! `LayoutSim` from fresh initial placement — state is never migrated.

use nalgebra::Vector2;

use crate::node::{Container, LayoutNode};
use crate::rng::Lcg;

/// Fraction of velocity lost per tick (friction).
pub const VELOCITY_DECAY: f64 = 0.6;
/// Separation margin added to the sum of radii when resolving overlap.
pub const COLLIDE_PADDING: f64 = 0.5;
/// Positional relaxation passes per tick. One pair's correction can
/// reintroduce overlap with a third node, so a single pass is not enough.
pub const COLLIDE_PASSES: usize = 4;
/// Pull toward the bottom of the container (settling bias).
pub const GRAVITY_STRENGTH: f64 = 0.08;
/// Horizontal pull toward the tray's vertical centerline.
pub const CENTERLINE_STRENGTH: f64 = 0.01;
/// Pull toward the conduit center, keeping circles off the wall.
pub const CENTER_STRENGTH: f64 = 0.05;

/// Cooling: alpha decays from 1 toward zero each tick.
pub const ALPHA_DECAY: f64 = 0.0228;
/// Below this the layout is considered settled.
pub const ALPHA_MIN: f64 = 0.001;

/// One relaxation run over a fixed node set and container.
#[derive(Debug, Clone)]
pub struct LayoutSim {
    container: Container,
    nodes: Vec<LayoutNode>,
    alpha: f64,
    rng: Lcg,
}

impl LayoutSim {
    /// Start a run over freshly placed nodes. `seed` feeds the jiggle used
    /// to separate exactly coincident centers.
    pub fn new(container: Container, nodes: Vec<LayoutNode>, seed: u64) -> Self {
        Self {
            container,
            nodes,
            alpha: 1.0,
            rng: Lcg::new(seed),
        }
    }

    pub fn container(&self) -> Container {
        self.container
    }

    pub fn nodes(&self) -> &[LayoutNode] {
        &self.nodes
    }

    /// Whether the system has cooled enough to stop stepping.
    pub fn settled(&self) -> bool {
        self.alpha < ALPHA_MIN
    }

    /// Advance one tick. Safe to stop calling at any tick boundary; there is
    /// no cleanup beyond dropping the sim.
    pub fn step(&mut self) {
        self.alpha += (0.0 - self.alpha) * ALPHA_DECAY;
        self.apply_bias();
        self.resolve_collisions();
        self.integrate();
        for node in &mut self.nodes {
            self.container.clamp(node);
        }
    }

    /// Run a fixed number of ticks (headless/static use).
    pub fn run(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.step();
        }
    }

    /// Per-tick output for rendering: (cable id, conductor index, x, y).
    pub fn positions(&self) -> impl Iterator<Item = (u32, u32, f64, f64)> + '_ {
        self.nodes
            .iter()
            .map(|n| (n.cable_id, n.index, n.position.x, n.position.y))
    }

    /// Directional settling biases, scaled by alpha.
    fn apply_bias(&mut self) {
        let alpha = self.alpha;
        match self.container {
            Container::Rect { height, .. } => {
                let floor_y = height / 2.0;
                for node in &mut self.nodes {
                    node.velocity.y += (floor_y - node.position.y) * GRAVITY_STRENGTH * alpha;
                    node.velocity.x += (0.0 - node.position.x) * CENTERLINE_STRENGTH * alpha;
                }
            }
            Container::Circle { radius } => {
                for node in &mut self.nodes {
                    node.velocity.y += (radius - node.position.y) * GRAVITY_STRENGTH * alpha;
                    node.velocity += (Vector2::zeros() - node.position) * CENTER_STRENGTH * alpha;
                }
            }
        }
    }

    /// Pairwise positional separation: any two circles closer than the sum
    /// of their radii plus the padding are pushed apart, the lighter (by
    /// r²) node moving further.
    fn resolve_collisions(&mut self) {
        let n = self.nodes.len();
        for _ in 0..COLLIDE_PASSES {
            for i in 0..n {
                for j in (i + 1)..n {
                    let (head, tail) = self.nodes.split_at_mut(j);
                    let a = &mut head[i];
                    let b = &mut tail[0];

                    let min_dist = a.radius + b.radius + COLLIDE_PADDING;
                    let mut delta = b.position - a.position;
                    let mut dist = delta.norm();
                    if dist >= min_dist {
                        continue;
                    }
                    if dist < 1e-9 {
                        delta = Vector2::new(self.rng.jiggle(), self.rng.jiggle());
                        dist = delta.norm().max(1e-12);
                    }
                    let dir = delta / dist;
                    let overlap = min_dist - dist;
                    let wa = b.radius * b.radius;
                    let wb = a.radius * a.radius;
                    let total = wa + wb;
                    a.position -= dir * (overlap * wa / total);
                    b.position += dir * (overlap * wb / total);
                }
            }
        }
    }

    fn integrate(&mut self) {
        for node in &mut self.nodes {
            node.velocity *= 1.0 - VELOCITY_DECAY;
            node.position += node.velocity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::expand_cables;
    use raceway_core::Cable;

    fn cable(id: u32, quantity: u32, diameter: f64) -> Cable {
        Cable {
            id,
            name: format!("cable {}", id),
            quantity,
            section: 2.5,
            diameter,
            color: "#ef4444",
            category_id: "cabo_uni_750v",
            category_label: "Cabo Flexível (Superastic Flex 750V)",
        }
    }

    fn sim_with(container: Container, cables: &[Cable], seed: u64) -> LayoutSim {
        let mut rng = Lcg::new(seed);
        let nodes = expand_cables(cables, 1.0, &mut rng);
        LayoutSim::new(container, nodes, seed)
    }

    fn assert_no_overlap(sim: &LayoutSim, tol: f64) {
        let nodes = sim.nodes();
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let dist = (nodes[i].position - nodes[j].position).norm();
                let min = nodes[i].radius + nodes[j].radius;
                assert!(
                    dist >= min - tol,
                    "nodes {} and {} overlap: dist {:.3} < {:.3}",
                    i,
                    j,
                    dist,
                    min
                );
            }
        }
    }

    #[test]
    fn test_rect_no_overlap_and_containment() {
        let cables = vec![cable(0, 5, 20.0), cable(1, 3, 12.0)];
        let mut sim = sim_with(Container::Rect { width: 200.0, height: 100.0 }, &cables, 42);
        for _ in 0..400 {
            sim.step();
            // Containment is a hard clamp: must hold after every tick.
            for node in sim.nodes() {
                assert!(
                    sim.container().contains(node.position, node.radius, 1e-9),
                    "node escaped the tray at {:?}",
                    node.position
                );
            }
        }
        assert_no_overlap(&sim, COLLIDE_PADDING);
        assert!(sim.settled());
    }

    #[test]
    fn test_circle_no_overlap_and_containment() {
        let cables = vec![cable(0, 6, 16.0)];
        let mut sim = sim_with(Container::Circle { radius: 60.0 }, &cables, 7);
        for _ in 0..400 {
            sim.step();
            for node in sim.nodes() {
                assert!(
                    sim.container().contains(node.position, node.radius, 1e-9),
                    "node escaped the conduit at {:?}",
                    node.position
                );
            }
        }
        assert_no_overlap(&sim, COLLIDE_PADDING);
    }

    #[test]
    fn test_gravity_settles_nodes_low() {
        let cables = vec![cable(0, 4, 16.0)];
        let mut sim = sim_with(Container::Rect { width: 200.0, height: 100.0 }, &cables, 3);
        sim.run(400);
        // All four fit in one layer on the floor: centers in the lower half.
        for node in sim.nodes() {
            assert!(
                node.position.y > 0.0,
                "node did not settle downward: y = {:.2}",
                node.position.y
            );
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let cables = vec![cable(0, 5, 14.0)];
        let container = Container::Circle { radius: 70.0 };
        let mut a = sim_with(container, &cables, 11);
        let mut b = sim_with(container, &cables, 11);
        a.run(250);
        b.run(250);
        for (na, nb) in a.nodes().iter().zip(b.nodes()) {
            assert_eq!(na.position, nb.position);
        }
    }

    #[test]
    fn test_coincident_centers_separate() {
        // All nodes exactly at the origin: the jiggle must break symmetry.
        let cables = vec![cable(0, 3, 10.0)];
        let mut rng = Lcg::new(1);
        let mut nodes = expand_cables(&cables, 1.0, &mut rng);
        for node in &mut nodes {
            node.position = Vector2::zeros();
        }
        let mut sim = LayoutSim::new(Container::Rect { width: 200.0, height: 100.0 }, nodes, 5);
        sim.run(300);
        assert_no_overlap(&sim, COLLIDE_PADDING);
    }

    #[test]
    fn test_oversized_node_stays_clamped() {
        let cables = vec![cable(0, 1, 200.0)]; // radius 100 in a 60-radius duct
        let mut sim = sim_with(Container::Circle { radius: 60.0 }, &cables, 2);
        sim.run(50);
        let node = &sim.nodes()[0];
        assert_eq!(node.position, Vector2::zeros());
    }

    #[test]
    fn test_positions_iterator_matches_nodes() {
        let cables = vec![cable(4, 2, 10.0)];
        let mut sim = sim_with(Container::Rect { width: 100.0, height: 100.0 }, &cables, 1);
        sim.run(10);
        let out: Vec<_> = sim.positions().collect();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].0, 4);
        assert_eq!(out[1].1, 1);
        assert_eq!(out[0].2, sim.nodes()[0].position.x);
    }
}
