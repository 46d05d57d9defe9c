//! Solid propellant tables.
//!
//! Both tables share the combustion parameters used in internal ballistics:
//! `u = u_1 * p^nu` with `p` in MPa.

use serde::{Deserialize, Serialize};

use super::TableRecord;
use crate::error::LoadError;
use crate::kind::TableKind;
use crate::table::Row;

/// Mixed (composite) propellant.
///
/// The propellant name is the table key and is not repeated as a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixedPropellant {
    /// Serial number in the source table, kept as written.
    #[serde(rename = "Number")]
    pub number: String,
    /// Specific impulse, m/s.
    #[serde(rename = "I_ud")]
    pub i_ud: f64,
    /// Propellant density, kg/m³.
    #[serde(rename = "rho_т")]
    pub rho_t: f64,
    /// Gas constant of combustion products, J/(kg·K).
    #[serde(rename = "R_г")]
    pub r_g: f64,
    /// Adiabatic index of combustion products.
    pub k: f64,
    /// Stagnation temperature, K.
    #[serde(rename = "T_0")]
    pub t_0: f64,
    /// Burn-rate pressure exponent.
    pub nu: f64,
    /// Unit burn rate, m/s at 1 MPa.
    pub u_1: f64,
    /// Temperature sensitivity of burn rate, 1/K.
    #[serde(rename = "D_t")]
    pub d_t: f64,
    /// Minimum pressure for stable combustion, Pa.
    pub p_min: f64,
}

impl TableRecord for MixedPropellant {
    const KIND: TableKind = TableKind::MixedPropellants;
    const FIELD_COUNT: usize = 11;
    const LIST_FN: &'static str = "mixed_propellant_names()";

    fn from_row(row: &Row<'_>) -> Result<Self, LoadError> {
        Ok(Self {
            number: row.raw(1).to_string(),
            i_ud: row.number(2, "I_ud")?,
            rho_t: row.number(3, "rho_т")?,
            r_g: row.number(4, "R_г")?,
            k: row.number(5, "k")?,
            t_0: row.number(6, "T_0")?,
            nu: row.number(7, "nu")?,
            u_1: row.number(8, "u_1")?,
            d_t: row.number(9, "D_t")?,
            p_min: row.number(10, "p_min")?,
        })
    }
}

/// Double-base (ballistic) propellant from the propellant bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallisticPropellant {
    /// Serial number, also the table key.
    #[serde(rename = "Number")]
    pub number: String,
    /// Specific impulse, m/s.
    ///
    /// Parsed as a number like every other physical quantity here. Older
    /// loaders of this table kept it as raw text, so a non-numeric value
    /// that they accepted fails the load instead.
    #[serde(rename = "I_ud")]
    pub i_ud: f64,
    /// Propellant density, kg/m³.
    #[serde(rename = "rho_т")]
    pub rho_t: f64,
    /// Gas constant of combustion products, J/(kg·K).
    #[serde(rename = "R_г")]
    pub r_g: f64,
    pub k: f64,
    /// Stagnation temperature, K.
    #[serde(rename = "T_0")]
    pub t_0: f64,
    pub nu: f64,
    /// Unit burn rate, m/s at 1 MPa.
    pub u_1: f64,
    /// Temperature coefficient, K.
    #[serde(rename = "B_т")]
    pub b_t: f64,
    /// Calorific value, MJ/kg.
    #[serde(rename = "Q")]
    pub q: f64,
    /// Minimum pressure for stable combustion, Pa.
    pub p_min: f64,
}

impl TableRecord for BallisticPropellant {
    const KIND: TableKind = TableKind::BallisticPropellants;
    const FIELD_COUNT: usize = 11;
    const LIST_FN: &'static str = "ballistic_propellant_names()";

    fn from_row(row: &Row<'_>) -> Result<Self, LoadError> {
        Ok(Self {
            number: row.raw(0).to_string(),
            i_ud: row.number(1, "I_ud")?,
            rho_t: row.number(2, "rho_т")?,
            r_g: row.number(3, "R_г")?,
            k: row.number(4, "k")?,
            t_0: row.number(5, "T_0")?,
            nu: row.number(6, "nu")?,
            u_1: row.number(7, "u_1")?,
            b_t: row.number(8, "B_т")?,
            q: row.number(9, "Q")?,
            p_min: row.number(10, "p_min")?,
        })
    }
}
