//! Layout engine: settles one circle per conductor inside a raceway
//! cross-section by iterative force relaxation.
//!
//! The simulation is frame-driven and externally scheduled: callers invoke
//! [`sim::LayoutSim::step`] once per animation frame (or a fixed number of
//! times for a static result). There is no timer inside the engine.

pub mod node;
pub mod rng;
pub mod sim;

pub use node::{expand_cables, Container, LayoutNode};
pub use rng::Lcg;
pub use sim::LayoutSim;
