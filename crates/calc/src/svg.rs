//! SVG export of a settled layout: the raceway outline with one two-layer
//! circle per conductor (insulation in the section color, copper core).
//!
//! Viewport geometry matches the interactive drawing this replaces: 600×400
//! units, 40-unit padding, uniform scale fitting the raceway's real
//! millimeter dimensions.

use raceway_core::{CommercialSize, RacewayDims};
use raceway_layout::{Container, LayoutSim};

pub const VIEW_W: f64 = 600.0;
pub const VIEW_H: f64 = 400.0;
pub const PADDING: f64 = 40.0;

const OUTLINE_FILL: &str = "#f8fafc";
const OUTLINE_STROKE: &str = "#475569";
const COPPER_FILL: &str = "#b87333";
const COPPER_STROKE: &str = "#78350f";
const LABEL_STYLE: &str = "font-family:monospace;font-size:11px;fill:#64748b";

/// Drawing width/height of a raceway cross-section in millimeters. A conduit
/// occupies a square of its internal diameter.
pub fn dims_mm(dims: &RacewayDims) -> (f64, f64) {
    match *dims {
        RacewayDims::Tray { width, height } => (width, height),
        RacewayDims::Conduit { internal_diameter } => (internal_diameter, internal_diameter),
    }
}

/// Uniform pixels-per-millimeter scale fitting the section into the padded
/// viewport.
pub fn fit_scale(dims: &RacewayDims) -> f64 {
    let (w_mm, h_mm) = dims_mm(dims);
    let scale_x = (VIEW_W - PADDING * 2.0) / w_mm;
    let scale_y = (VIEW_H - PADDING * 2.0) / h_mm;
    scale_x.min(scale_y)
}

/// Layout container for a commercial size at the given scale.
pub fn container_for(dims: &RacewayDims, scale: f64) -> Container {
    match *dims {
        RacewayDims::Tray { width, height } => Container::Rect {
            width: width * scale,
            height: height * scale,
        },
        RacewayDims::Conduit { internal_diameter } => Container::Circle {
            radius: internal_diameter / 2.0 * scale,
        },
    }
}

/// Render the current node positions as a standalone SVG document.
pub fn render(sim: &LayoutSim, size: &CommercialSize) -> String {
    let cx = VIEW_W / 2.0;
    let cy = VIEW_H / 2.0;
    let mut out = String::new();

    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">\n",
        VIEW_W, VIEW_H
    ));

    match sim.container() {
        Container::Rect { width, height } => {
            out.push_str(&format!(
                "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"4\" \
                 fill=\"{}\" stroke=\"{}\" stroke-width=\"3\"/>\n",
                cx - width / 2.0,
                cy - height / 2.0,
                width,
                height,
                OUTLINE_FILL,
                OUTLINE_STROKE
            ));
            if let RacewayDims::Tray { width: w_mm, height: h_mm } = size.dims {
                out.push_str(&format!(
                    "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" style=\"{}\">{}mm</text>\n",
                    cx,
                    cy + height / 2.0 + 20.0,
                    LABEL_STYLE,
                    w_mm
                ));
                out.push_str(&format!(
                    "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" style=\"{}\">{}mm</text>\n",
                    cx - width / 2.0 - 10.0,
                    cy,
                    LABEL_STYLE,
                    h_mm
                ));
            }
        }
        Container::Circle { radius } => {
            out.push_str(&format!(
                "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" \
                 fill=\"{}\" stroke=\"{}\" stroke-width=\"3\"/>\n",
                cx, cy, radius, OUTLINE_FILL, OUTLINE_STROKE
            ));
            if let RacewayDims::Conduit { internal_diameter } = size.dims {
                out.push_str(&format!(
                    "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" style=\"{}\">Ø {:.1}mm (Int)</text>\n",
                    cx,
                    cy + radius + 25.0,
                    LABEL_STYLE,
                    internal_diameter
                ));
            }
        }
    }

    for node in sim.nodes() {
        let x = cx + node.position.x;
        let y = cy + node.position.y;
        out.push_str(&format!("  <g transform=\"translate({:.2},{:.2})\">\n", x, y));
        // Insulation/jacket layer.
        out.push_str(&format!(
            "    <circle r=\"{:.2}\" fill=\"{}\" fill-opacity=\"0.4\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            node.radius, node.color, node.color
        ));
        // Copper core.
        out.push_str(&format!(
            "    <circle r=\"{:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"0.5\"/>\n",
            node.inner_radius, COPPER_FILL, COPPER_STROKE
        ));
        out.push_str("  </g>\n");
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use raceway_catalog::size_by_id;
    use raceway_core::{Cable, RacewayType};
    use raceway_layout::{expand_cables, Lcg, LayoutSim};

    fn cable(quantity: u32) -> Cable {
        Cable {
            id: 0,
            name: "test".into(),
            quantity,
            section: 2.5,
            diameter: 6.0,
            color: "#ef4444",
            category_id: "cabo_uni_750v",
            category_label: "Cabo Flexível (Superastic Flex 750V)",
        }
    }

    #[test]
    fn test_fit_scale_tray() {
        // 100x50 tray: x allows 5.2 px/mm, y allows 6.4; x governs.
        let size = size_by_id(RacewayType::Tray, "cke_100_50").unwrap();
        assert!((fit_scale(&size.dims) - 5.2).abs() < 1e-12);
    }

    #[test]
    fn test_fit_scale_conduit_square() {
        // DN 25: 27mm square fit → (400-80)/27 governs.
        let size = size_by_id(RacewayType::Conduit, "dn_25").unwrap();
        assert!((fit_scale(&size.dims) - 320.0 / 27.0).abs() < 1e-12);
    }

    #[test]
    fn test_render_structure() {
        let size = size_by_id(RacewayType::Conduit, "dn_50").unwrap();
        let scale = fit_scale(&size.dims);
        let container = container_for(&size.dims, scale);
        let mut rng = Lcg::new(1);
        let nodes = expand_cables(&[cable(3)], scale, &mut rng);
        let mut sim = LayoutSim::new(container, nodes, 1);
        sim.run(100);

        let svg = render(&sim, size);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Ø 53.0mm (Int)"));
        // Outline + 3 insulation + 3 copper circles.
        assert_eq!(svg.matches("<circle").count(), 7);
        assert_eq!(svg.matches("<g transform").count(), 3);
    }

    #[test]
    fn test_render_tray_labels() {
        let size = size_by_id(RacewayType::Tray, "cke_200_100").unwrap();
        let scale = fit_scale(&size.dims);
        let container = container_for(&size.dims, scale);
        let mut rng = Lcg::new(1);
        let nodes = expand_cables(&[cable(1)], scale, &mut rng);
        let sim = LayoutSim::new(container, nodes, 1);

        let svg = render(&sim, size);
        assert!(svg.contains("<rect"));
        assert!(svg.contains(">200mm</text>"));
        assert!(svg.contains(">100mm</text>"));
    }
}
