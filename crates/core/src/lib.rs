//! Shared data model for the raceway sizing pipeline.
//!
//! Types here are consumed by the catalog tables, the sizing engine, and the
//! layout engine. Catalog entries use `&'static str` fields so the tables can
//! live as const data.

use std::fmt;

/// Raceway family per NBR 5410: open rectangular tray (eletrocalha) or
/// circular rigid conduit (eletroduto).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RacewayType {
    Tray,
    Conduit,
}

impl RacewayType {
    /// Display label (Portuguese, as on drawings).
    pub fn label(&self) -> &'static str {
        match self {
            RacewayType::Tray => "Eletrocalha",
            RacewayType::Conduit => "Eletroduto",
        }
    }

    /// Parse a CLI/config key ("tray" / "conduit").
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "tray" | "eletrocalha" => Some(RacewayType::Tray),
            "conduit" | "eletroduto" => Some(RacewayType::Conduit),
            _ => None,
        }
    }
}

/// Catalog row: nominal section with its standard outer diameter and area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CablePreset {
    /// Nominal conductor section (mm²).
    pub section: f64,
    /// Standard external diameter (mm).
    pub diameter: f64,
    /// External cross-sectional area (mm²).
    pub area: f64,
}

/// Cable family from the manufacturer catalog (one insulation construction,
/// presets ascending by section).
#[derive(Debug, Clone, Copy)]
pub struct CableCategory {
    pub id: &'static str,
    pub label: &'static str,
    /// Rated voltage, e.g. "450/750V".
    pub voltage: &'static str,
    pub insulation: &'static str,
    pub items: &'static [CablePreset],
}

impl CableCategory {
    /// Find the preset for a nominal section, if this family offers it.
    pub fn preset_for(&self, section: f64) -> Option<&'static CablePreset> {
        self.items.iter().find(|p| (p.section - section).abs() < 1e-9)
    }
}

/// Shape-specific dimensions of a commercial raceway size (mm).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RacewayDims {
    Tray { width: f64, height: f64 },
    Conduit { internal_diameter: f64 },
}

/// A manufacturer-standard raceway size. Catalog entries are immutable and
/// pre-sorted ascending by usable area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommercialSize {
    pub id: &'static str,
    pub label: &'static str,
    /// Manufacturer reference code, e.g. "CKE 500".
    pub ref_code: Option<&'static str>,
    pub dims: RacewayDims,
    /// Usable cross-sectional area (mm²).
    pub area: f64,
}

/// One entry in the bill of materials: `quantity` identical conductors.
///
/// Never mutated after construction; removal from the list is the only
/// lifecycle event.
#[derive(Debug, Clone)]
pub struct Cable {
    /// List-assigned identifier.
    pub id: u32,
    /// Display name, e.g. "Cabo Flexível (Superastic Flex 750V) - 2.5mm²".
    pub name: String,
    pub quantity: u32,
    /// Nominal conductor section (mm²).
    pub section: f64,
    /// External diameter (mm); catalog-standard or user override.
    pub diameter: f64,
    /// Insulation color derived from the section, shared by table and render.
    pub color: &'static str,
    pub category_id: &'static str,
    pub category_label: &'static str,
}

/// A cable submission before the list has validated it and assigned an id.
#[derive(Debug, Clone)]
pub struct CableDraft {
    pub name: String,
    pub quantity: u32,
    pub section: f64,
    pub diameter: f64,
    pub color: &'static str,
    pub category_id: &'static str,
    pub category_label: &'static str,
}

/// Rejected cable submissions. Validation happens once, at the list boundary;
/// downstream code assumes quantity ≥ 1 and diameter > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CableError {
    ZeroQuantity,
    NonPositiveDiameter,
}

impl fmt::Display for CableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CableError::ZeroQuantity => write!(f, "cable quantity must be at least 1"),
            CableError::NonPositiveDiameter => write!(f, "cable diameter must be positive"),
        }
    }
}

impl std::error::Error for CableError {}

/// Exclusive owner of the active bill of materials.
#[derive(Debug, Default, Clone)]
pub struct CableList {
    cables: Vec<Cable>,
    next_id: u32,
}

impl CableList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a draft, assign it an id, and append it. Returns the id.
    pub fn add(&mut self, draft: CableDraft) -> Result<u32, CableError> {
        if draft.quantity == 0 {
            return Err(CableError::ZeroQuantity);
        }
        if !(draft.diameter > 0.0) || !draft.diameter.is_finite() {
            return Err(CableError::NonPositiveDiameter);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.cables.push(Cable {
            id,
            name: draft.name,
            quantity: draft.quantity,
            section: draft.section,
            diameter: draft.diameter,
            color: draft.color,
            category_id: draft.category_id,
            category_label: draft.category_label,
        });
        Ok(id)
    }

    /// Remove a cable by id. Returns true if an entry was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.cables.len();
        self.cables.retain(|c| c.id != id);
        self.cables.len() != before
    }

    pub fn cables(&self) -> &[Cable] {
        &self.cables
    }

    pub fn is_empty(&self) -> bool {
        self.cables.is_empty()
    }
}

/// Derived sizing figures, recomputed from scratch whenever the cable list,
/// reserve, or raceway type changes. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    /// Σ π(dᵢ/2)²·qᵢ over all cables (mm²).
    pub total_cable_area: f64,
    /// Σ qᵢ — individual conductors, not list entries.
    pub total_cable_count: u32,
    /// Maximum occupation fraction per NBR 5410 (0.53 / 0.31 / 0.40).
    pub fill_rate_limit: f64,
    /// Minimum usable raceway area (mm²), reserve included. Zero when the
    /// list is empty.
    pub min_required_area: f64,
}

impl CalculationResult {
    /// Minimum internal diameter for a circular conduit meeting
    /// `min_required_area`: d = 2·√(A/π).
    pub fn min_required_diameter(&self) -> f64 {
        2.0 * (self.min_required_area / std::f64::consts::PI).sqrt()
    }
}
