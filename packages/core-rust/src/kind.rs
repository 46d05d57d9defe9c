//! Identifiers for the six reference tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which reference table a store, record type, or error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableKind {
    /// Steels, titanium and aluminium alloys for motor cases (lecture 3, table 1).
    StructuralMaterials,
    /// Wound composite shells (lecture 3, table 2).
    Composites,
    /// Flange and frame materials (lecture 3, table 3).
    FlangeFrameMaterials,
    /// Thermal protection coatings (lecture 3, table 4).
    ThermalProtection,
    /// Mixed (composite) solid propellants, keyed by name.
    MixedPropellants,
    /// Double-base (ballistic) propellants, keyed by serial number.
    BallisticPropellants,
}

impl TableKind {
    /// Every table, in the order they are listed to users.
    pub const ALL: [TableKind; 6] = [
        TableKind::StructuralMaterials,
        TableKind::Composites,
        TableKind::FlangeFrameMaterials,
        TableKind::ThermalProtection,
        TableKind::MixedPropellants,
        TableKind::BallisticPropellants,
    ];

    /// Resource path relative to the data directory.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            TableKind::StructuralMaterials => "materials/structural.csv",
            TableKind::Composites => "materials/composites.csv",
            TableKind::FlangeFrameMaterials => "materials/flange_frame.csv",
            TableKind::ThermalProtection => "materials/thermal_protection.csv",
            TableKind::MixedPropellants => "propellants/mixed.csv",
            TableKind::BallisticPropellants => "propellants/ballistic.csv",
        }
    }

    /// Copy of the bundled resource compiled into the crate.
    ///
    /// Used when the bundled `data/` directory is no longer on disk, e.g.
    /// for an installed binary whose source checkout was moved.
    #[must_use]
    pub fn bundled_text(self) -> &'static str {
        match self {
            TableKind::StructuralMaterials => include_str!("../data/materials/structural.csv"),
            TableKind::Composites => include_str!("../data/materials/composites.csv"),
            TableKind::FlangeFrameMaterials => include_str!("../data/materials/flange_frame.csv"),
            TableKind::ThermalProtection => {
                include_str!("../data/materials/thermal_protection.csv")
            }
            TableKind::MixedPropellants => include_str!("../data/propellants/mixed.csv"),
            TableKind::BallisticPropellants => include_str!("../data/propellants/ballistic.csv"),
        }
    }

    /// Stable kebab-case identifier, identical to the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TableKind::StructuralMaterials => "structural-materials",
            TableKind::Composites => "composites",
            TableKind::FlangeFrameMaterials => "flange-frame-materials",
            TableKind::ThermalProtection => "thermal-protection",
            TableKind::MixedPropellants => "mixed-propellants",
            TableKind::BallisticPropellants => "ballistic-propellants",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableKind::StructuralMaterials => "structural materials",
            TableKind::Composites => "composites",
            TableKind::FlangeFrameMaterials => "flange/frame materials",
            TableKind::ThermalProtection => "thermal protection",
            TableKind::MixedPropellants => "mixed propellants",
            TableKind::BallisticPropellants => "ballistic propellants",
        };
        f.write_str(name)
    }
}
