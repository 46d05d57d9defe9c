//! Reference tables for solid rocket motor design coursework.
//!
//! Six semicolon-delimited resources (structural materials, composites,
//! flange/frame materials, thermal protection, mixed and ballistic
//! propellants) are each parsed into a typed, read-only [`Table`] the first
//! time they are queried. Every table offers two lookups: one record by
//! key, and the list of keys in file order.
//!
//! ```no_run
//! use matprop_core::{Catalog, CatalogConfig};
//!
//! let catalog = Catalog::new(&CatalogConfig::default());
//! let steel = catalog.get_material("12Х18Н10Т")?;
//! println!("density: {} kg/m^3", steel.rho);
//! # Ok::<(), matprop_core::TableError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod kind;
pub mod records;
pub mod table;

pub use catalog::{
    ballistic_propellant_names, composite_names, flange_material_names, get_ballistic_propellant,
    get_composite, get_flange_material, get_material, get_mixed_propellant, get_tzp,
    material_names, mixed_propellant_names, tzp_names, Catalog,
};
pub use config::{bundled_data_dir, CatalogConfig, DATA_DIR_ENV};
pub use error::{LoadError, TableError, TableResult};
pub use kind::TableKind;
pub use records::{
    BallisticPropellant, Composite, FlangeMaterial, MixedPropellant, StructuralMaterial,
    TableRecord, ThermalProtection,
};
pub use table::{Row, Table, TableStore};
