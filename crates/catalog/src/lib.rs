//! Static catalogs: cable presets per family, commercial raceway sizes, and
//! the section→color table.
//!
//! Cable data follows the Prysmian/Pirelli technical catalog
//! (Sintenax/Afumex/Superastic). Tray sizes are a partial CKE line; conduit
//! sizes are rigid PVC/steel (NBR 6150 / NBR 5597). All tables are const,
//! loaded nowhere, mutated never: callers share them by reference.
//!
//! Ordering invariants the sizing engine relies on:
//! - every category's presets ascend by section;
//! - `TRAY_SIZES` and `CONDUIT_SIZES` ascend by usable area.

use raceway_core::{
    CableCategory, CableDraft, CablePreset, CommercialSize, RacewayDims, RacewayType,
};

/// Insulation color per nominal section (mm²), for consistent visual
/// identification across table and drawing.
pub const SECTION_COLORS: &[(f64, &str)] = &[
    (1.5, "#94a3b8"),   // slate
    (2.5, "#ef4444"),   // red
    (4.0, "#f59e0b"),   // amber
    (6.0, "#84cc16"),   // lime
    (10.0, "#10b981"),  // emerald
    (16.0, "#06b6d4"),  // cyan
    (25.0, "#3b82f6"),  // blue
    (35.0, "#6366f1"),  // indigo
    (50.0, "#a855f7"),  // purple
    (70.0, "#d946ef"),  // fuchsia
    (95.0, "#ec4899"),  // pink
    (120.0, "#8b5cf6"), // violet
    (150.0, "#0ea5e9"), // sky
    (185.0, "#f97316"), // orange
    (240.0, "#64748b"), // slate-500
];

/// Fallback color for sections absent from the table.
pub const DEFAULT_SECTION_COLOR: &str = "#94a3b8";

/// Color assigned to a nominal section.
pub fn color_for_section(section: f64) -> &'static str {
    SECTION_COLORS
        .iter()
        .find(|(s, _)| (s - section).abs() < 1e-9)
        .map(|(_, c)| *c)
        .unwrap_or(DEFAULT_SECTION_COLOR)
}

const FIO_SOLIDO_750V: &[CablePreset] = &[
    CablePreset { section: 1.5, diameter: 2.8, area: 6.15 },
    CablePreset { section: 2.5, diameter: 3.4, area: 9.07 },
    CablePreset { section: 4.0, diameter: 3.9, area: 11.9 },
    CablePreset { section: 6.0, diameter: 4.4, area: 15.2 },
    CablePreset { section: 10.0, diameter: 5.6, area: 24.6 },
];

const CABO_UNI_750V: &[CablePreset] = &[
    CablePreset { section: 1.5, diameter: 3.0, area: 7.07 },
    CablePreset { section: 2.5, diameter: 3.6, area: 10.18 },
    CablePreset { section: 4.0, diameter: 4.1, area: 13.2 },
    CablePreset { section: 6.0, diameter: 4.7, area: 17.35 },
    CablePreset { section: 10.0, diameter: 6.1, area: 29.22 },
    CablePreset { section: 16.0, diameter: 7.2, area: 40.72 },
    CablePreset { section: 25.0, diameter: 8.9, area: 62.21 },
    CablePreset { section: 35.0, diameter: 10.1, area: 80.12 },
    CablePreset { section: 50.0, diameter: 11.9, area: 111.2 },
    CablePreset { section: 70.0, diameter: 13.8, area: 149.6 },
    CablePreset { section: 95.0, diameter: 16.0, area: 201.1 },
    CablePreset { section: 120.0, diameter: 17.9, area: 251.6 },
    CablePreset { section: 150.0, diameter: 19.9, area: 311.0 },
    CablePreset { section: 185.0, diameter: 22.3, area: 390.6 },
    CablePreset { section: 240.0, diameter: 25.1, area: 494.8 },
];

const CABO_UNI_1KV: &[CablePreset] = &[
    CablePreset { section: 1.5, diameter: 5.6, area: 24.6 },
    CablePreset { section: 2.5, diameter: 6.0, area: 28.2 },
    CablePreset { section: 4.0, diameter: 6.5, area: 33.1 },
    CablePreset { section: 6.0, diameter: 7.0, area: 38.4 },
    CablePreset { section: 10.0, diameter: 7.9, area: 49.0 },
    CablePreset { section: 16.0, diameter: 8.9, area: 62.2 },
    CablePreset { section: 25.0, diameter: 10.6, area: 88.2 },
    CablePreset { section: 35.0, diameter: 11.7, area: 107.5 },
    CablePreset { section: 50.0, diameter: 13.2, area: 136.8 },
    CablePreset { section: 70.0, diameter: 14.9, area: 174.3 },
    CablePreset { section: 95.0, diameter: 16.9, area: 224.3 },
    CablePreset { section: 120.0, diameter: 18.6, area: 271.7 },
    CablePreset { section: 150.0, diameter: 20.7, area: 336.5 },
    CablePreset { section: 185.0, diameter: 22.9, area: 411.8 },
    CablePreset { section: 240.0, diameter: 25.6, area: 514.7 },
];

const CABO_MULTI_1KV: &[CablePreset] = &[
    CablePreset { section: 1.5, diameter: 11.0, area: 95.0 },
    CablePreset { section: 2.5, diameter: 12.0, area: 113.0 },
    CablePreset { section: 4.0, diameter: 13.2, area: 136.8 },
    CablePreset { section: 6.0, diameter: 14.5, area: 165.1 },
    CablePreset { section: 10.0, diameter: 16.5, area: 213.8 },
    CablePreset { section: 16.0, diameter: 18.8, area: 277.5 },
    CablePreset { section: 25.0, diameter: 22.5, area: 397.6 },
    CablePreset { section: 35.0, diameter: 24.9, area: 486.9 },
    CablePreset { section: 50.0, diameter: 28.5, area: 637.9 },
    CablePreset { section: 70.0, diameter: 32.5, area: 829.5 },
    CablePreset { section: 95.0, diameter: 36.8, area: 1063.6 },
    CablePreset { section: 120.0, diameter: 41.0, area: 1320.2 },
    CablePreset { section: 150.0, diameter: 45.5, area: 1625.9 },
    CablePreset { section: 185.0, diameter: 50.0, area: 1963.5 },
    CablePreset { section: 240.0, diameter: 56.5, area: 2507.2 },
];

/// All cable families, in catalog order.
pub const CABLE_CATALOG: &[CableCategory] = &[
    CableCategory {
        id: "fio_solido_750v",
        label: "Fio Sólido (Superastic 750V)",
        voltage: "450/750V",
        insulation: "PVC (Sem Cobertura)",
        items: FIO_SOLIDO_750V,
    },
    CableCategory {
        id: "cabo_uni_750v",
        label: "Cabo Flexível (Superastic Flex 750V)",
        voltage: "450/750V",
        insulation: "PVC (Sem Cobertura)",
        items: CABO_UNI_750V,
    },
    CableCategory {
        id: "cabo_uni_1kv",
        label: "Cabo Unipolar (Sintenax 0,6/1kV)",
        voltage: "0,6/1kV",
        insulation: "HEPR + PVC (Com Cobertura)",
        items: CABO_UNI_1KV,
    },
    CableCategory {
        id: "cabo_multi_1kv",
        label: "Cabo Multipolar 4 cond. (Sintenax 1kV)",
        voltage: "0,6/1kV",
        insulation: "HEPR + PVC (Multipol)",
        items: CABO_MULTI_1KV,
    },
];

/// Commercial tray sizes (partial CKE line), ascending by area.
pub const TRAY_SIZES: &[CommercialSize] = &[
    CommercialSize { id: "cke_50_50", label: "50x50 mm", ref_code: Some("CKE 500"), dims: RacewayDims::Tray { width: 50.0, height: 50.0 }, area: 2500.0 },
    CommercialSize { id: "cke_100_50", label: "100x50 mm", ref_code: Some("CKE 500"), dims: RacewayDims::Tray { width: 100.0, height: 50.0 }, area: 5000.0 },
    CommercialSize { id: "cke_200_50", label: "200x50 mm", ref_code: Some("CKE 500"), dims: RacewayDims::Tray { width: 200.0, height: 50.0 }, area: 10000.0 },
    CommercialSize { id: "cke_100_100", label: "100x100 mm", ref_code: Some("CKE 500"), dims: RacewayDims::Tray { width: 100.0, height: 100.0 }, area: 10000.0 },
    CommercialSize { id: "cke_300_50", label: "300x50 mm", ref_code: Some("CKE 500"), dims: RacewayDims::Tray { width: 300.0, height: 50.0 }, area: 15000.0 },
    CommercialSize { id: "cke_400_50", label: "400x50 mm", ref_code: Some("CKE 500"), dims: RacewayDims::Tray { width: 400.0, height: 50.0 }, area: 20000.0 },
    CommercialSize { id: "cke_200_100", label: "200x100 mm", ref_code: Some("CKE 500"), dims: RacewayDims::Tray { width: 200.0, height: 100.0 }, area: 20000.0 },
    CommercialSize { id: "cke_300_100", label: "300x100 mm", ref_code: Some("CKE 500"), dims: RacewayDims::Tray { width: 300.0, height: 100.0 }, area: 30000.0 },
    CommercialSize { id: "cke_400_100", label: "400x100 mm", ref_code: Some("CKE 500"), dims: RacewayDims::Tray { width: 400.0, height: 100.0 }, area: 40000.0 },
    CommercialSize { id: "cke_500_100", label: "500x100 mm", ref_code: Some("CKE 500"), dims: RacewayDims::Tray { width: 500.0, height: 100.0 }, area: 50000.0 },
    CommercialSize { id: "cke_600_100", label: "600x100 mm", ref_code: Some("CKE 500"), dims: RacewayDims::Tray { width: 600.0, height: 100.0 }, area: 60000.0 },
];

/// Rigid conduit sizes (PVC NBR 6150 / steel NBR 5597), ascending by area.
pub const CONDUIT_SIZES: &[CommercialSize] = &[
    CommercialSize { id: "dn_15", label: "1/2\" (DN 15)", ref_code: None, dims: RacewayDims::Conduit { internal_diameter: 16.0 }, area: 201.06 },
    CommercialSize { id: "dn_20", label: "3/4\" (DN 20)", ref_code: None, dims: RacewayDims::Conduit { internal_diameter: 21.0 }, area: 346.36 },
    CommercialSize { id: "dn_25", label: "1\" (DN 25)", ref_code: None, dims: RacewayDims::Conduit { internal_diameter: 27.0 }, area: 572.55 },
    CommercialSize { id: "dn_32", label: "1 1/4\" (DN 32)", ref_code: None, dims: RacewayDims::Conduit { internal_diameter: 35.0 }, area: 962.11 },
    CommercialSize { id: "dn_40", label: "1 1/2\" (DN 40)", ref_code: None, dims: RacewayDims::Conduit { internal_diameter: 41.0 }, area: 1320.25 },
    CommercialSize { id: "dn_50", label: "2\" (DN 50)", ref_code: None, dims: RacewayDims::Conduit { internal_diameter: 53.0 }, area: 2206.18 },
    CommercialSize { id: "dn_65", label: "2 1/2\" (DN 65)", ref_code: None, dims: RacewayDims::Conduit { internal_diameter: 63.0 }, area: 3117.24 },
    CommercialSize { id: "dn_80", label: "3\" (DN 80)", ref_code: None, dims: RacewayDims::Conduit { internal_diameter: 78.0 }, area: 4778.36 },
    CommercialSize { id: "dn_100", label: "4\" (DN 100)", ref_code: None, dims: RacewayDims::Conduit { internal_diameter: 103.0 }, area: 8332.28 },
];

/// Size catalog for a raceway type.
pub fn sizes_for(ty: RacewayType) -> &'static [CommercialSize] {
    match ty {
        RacewayType::Tray => TRAY_SIZES,
        RacewayType::Conduit => CONDUIT_SIZES,
    }
}

/// Look up a commercial size by id within a type's catalog (manual override
/// path: the presentation layer sends back a catalog id).
pub fn size_by_id(ty: RacewayType, id: &str) -> Option<&'static CommercialSize> {
    sizes_for(ty).iter().find(|s| s.id == id)
}

/// Look up a cable family by id.
pub fn category_by_id(id: &str) -> Option<&'static CableCategory> {
    CABLE_CATALOG.iter().find(|c| c.id == id)
}

/// Assemble a cable draft from a catalog family: resolves the standard
/// diameter for the section (unless overridden), assigns the section color,
/// and formats the display name. Returns None if the family has no preset
/// for the requested section.
pub fn draft_cable(
    category: &'static CableCategory,
    section: f64,
    quantity: u32,
    custom_diameter: Option<f64>,
) -> Option<CableDraft> {
    let preset = category.preset_for(section)?;
    let diameter = custom_diameter.unwrap_or(preset.diameter);
    Some(CableDraft {
        name: format!("{} - {}mm²", category.label, section),
        quantity,
        section,
        diameter,
        color: color_for_section(section),
        category_id: category.id,
        category_label: category.label,
    })
}
