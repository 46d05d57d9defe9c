//! Structural, composite, flange/frame, and thermal protection materials.

use serde::{Deserialize, Serialize};

use super::TableRecord;
use crate::error::LoadError;
use crate::kind::TableKind;
use crate::table::Row;

/// Case material: steel, titanium or aluminium alloy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralMaterial {
    /// Alloy grade, also the table key.
    pub material: String,
    /// Density, kg/m³.
    pub rho: f64,
    /// Yield stress, Pa.
    pub sigma_02: f64,
    /// Ultimate tensile strength, Pa.
    pub sigma_v: f64,
    /// Relative elongation, dimensionless.
    pub delta: f64,
    /// Specific strength, m.
    pub sigma_v_rho: f64,
    /// Recommended use.
    #[serde(rename = "use")]
    pub recommended_use: String,
}

impl TableRecord for StructuralMaterial {
    const KIND: TableKind = TableKind::StructuralMaterials;
    const FIELD_COUNT: usize = 7;
    const LIST_FN: &'static str = "material_names()";

    fn from_row(row: &Row<'_>) -> Result<Self, LoadError> {
        Ok(Self {
            material: row.raw(0).to_string(),
            rho: row.number(1, "rho")?,
            sigma_02: row.number(2, "sigma_02")?,
            sigma_v: row.number(3, "sigma_v")?,
            delta: row.number(4, "delta")?,
            sigma_v_rho: row.number(5, "sigma_v_rho")?,
            recommended_use: row.text(6).to_string(),
        })
    }
}

/// Wound composite shell material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composite {
    pub material: String,
    /// Density, kg/m³.
    pub rho: f64,
    /// Tensile strength, Pa.
    pub sigma_r: f64,
    /// Elastic modulus, Pa.
    #[serde(rename = "E")]
    pub modulus: f64,
}

impl TableRecord for Composite {
    const KIND: TableKind = TableKind::Composites;
    const FIELD_COUNT: usize = 4;
    const LIST_FN: &'static str = "composite_names()";

    fn from_row(row: &Row<'_>) -> Result<Self, LoadError> {
        Ok(Self {
            material: row.raw(0).to_string(),
            rho: row.number(1, "rho")?,
            sigma_r: row.number(2, "sigma_r")?,
            modulus: row.number(3, "E")?,
        })
    }
}

/// Thermal protection coating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalProtection {
    pub material: String,
    /// Density, kg/m³.
    pub rho: f64,
    /// Elongation at break, dimensionless.
    pub delta_razr: f64,
    /// Breaking strength, Pa.
    pub sigma_razr: f64,
    /// Thermal conductivity, W/(m·K).
    pub lambda_t: f64,
    /// Specific heat, J/(kg·K).
    pub c_p: f64,
}

impl TableRecord for ThermalProtection {
    const KIND: TableKind = TableKind::ThermalProtection;
    const FIELD_COUNT: usize = 6;
    const LIST_FN: &'static str = "tzp_names()";

    fn from_row(row: &Row<'_>) -> Result<Self, LoadError> {
        Ok(Self {
            material: row.raw(0).to_string(),
            rho: row.number(1, "rho")?,
            delta_razr: row.number(2, "delta_razr")?,
            sigma_razr: row.number(3, "sigma_razr")?,
            lambda_t: row.number(4, "lambda_t")?,
            c_p: row.number(5, "c_p")?,
        })
    }
}

/// Material for flanges and frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlangeMaterial {
    pub material: String,
    /// Density, kg/m³.
    pub rho: f64,
    /// Ultimate tensile strength, Pa.
    pub sigma_v: f64,
    /// Specific strength, m.
    pub sigma_v_rho: f64,
    #[serde(rename = "use")]
    pub recommended_use: String,
}

impl TableRecord for FlangeMaterial {
    const KIND: TableKind = TableKind::FlangeFrameMaterials;
    const FIELD_COUNT: usize = 5;
    const LIST_FN: &'static str = "flange_material_names()";

    fn from_row(row: &Row<'_>) -> Result<Self, LoadError> {
        Ok(Self {
            material: row.raw(0).to_string(),
            rho: row.number(1, "rho")?,
            sigma_v: row.number(2, "sigma_v")?,
            sigma_v_rho: row.number(3, "sigma_v_rho")?,
            recommended_use: row.text(4).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use serde_json::json;

    use super::*;

    fn row<'a>(text: &'a str, expected: usize) -> Row<'a> {
        Row::split(Path::new("t.csv"), 2, text, expected).unwrap()
    }

    #[test]
    fn structural_material_serializes_with_table_field_names() {
        let record = StructuralMaterial::from_row(&row(
            "12Х18Н10Т;7900;200000000;500000000;0.4;6.33e-5;корпус",
            StructuralMaterial::FIELD_COUNT,
        ))
        .unwrap();
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "material": "12Х18Н10Т",
                "rho": 7900.0,
                "sigma_02": 2e8,
                "sigma_v": 5e8,
                "delta": 0.4,
                "sigma_v_rho": 6.33e-5,
                "use": "корпус",
            })
        );
    }

    #[test]
    fn composite_modulus_is_serialized_as_e() {
        let record = Composite::from_row(&row("Углепластик;1550;1.2e9;1.4e11", 4)).unwrap();
        assert_eq!(record.modulus, 1.4e11);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["E"], json!(1.4e11));
    }

    #[test]
    fn thermal_protection_parses_all_fields() {
        let record =
            ThermalProtection::from_row(&row("Асботекстолит;1700;0.01;8e7;0.35;1200", 6)).unwrap();
        assert_eq!(record.material, "Асботекстолит");
        assert_eq!(record.sigma_razr, 8e7);
        assert_eq!(record.c_p, 1200.0);
    }

    #[test]
    fn flange_material_trims_use_text() {
        let record = FlangeMaterial::from_row(&row("АК4-1;2800;4.2e8;15291;шпангоуты  ", 5)).unwrap();
        assert_eq!(record.recommended_use, "шпангоуты");
        assert_eq!(record.sigma_v_rho, 15291.0);
    }

    #[test]
    fn numeric_error_names_the_field() {
        let err = Composite::from_row(&row("X;1;2;abc", 4)).unwrap_err();
        assert!(matches!(err, LoadError::Number { field: "E", .. }));
    }

    #[test]
    fn deserializes_from_table_field_names() {
        let record: FlangeMaterial = serde_json::from_value(json!({
            "material": "ВТ6",
            "rho": 4430.0,
            "sigma_v": 9.5e8,
            "sigma_v_rho": 21860.0,
            "use": "фланцы",
        }))
        .unwrap();
        assert_eq!(record.recommended_use, "фланцы");
    }
}
