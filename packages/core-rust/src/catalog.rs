//! The six reference tables bundled together.
//!
//! [`Catalog`] is the explicit handle: build one from a [`CatalogConfig`]
//! and pass it to whatever needs the tables. The free functions at the
//! bottom of this module go through [`Catalog::global`], a process-wide
//! instance configured from the environment on first use.

use std::path::Path;
use std::sync::OnceLock;

use tracing::debug;

use crate::config::{bundled_data_dir, CatalogConfig};
use crate::error::TableResult;
use crate::kind::TableKind;
use crate::records::{
    BallisticPropellant, Composite, FlangeMaterial, MixedPropellant, StructuralMaterial,
    ThermalProtection, TableRecord,
};
use crate::table::TableStore;

/// One lazily loaded [`TableStore`] per reference table.
#[derive(Debug)]
pub struct Catalog {
    materials: TableStore<StructuralMaterial>,
    composites: TableStore<Composite>,
    thermal_protection: TableStore<ThermalProtection>,
    flange_materials: TableStore<FlangeMaterial>,
    mixed_propellants: TableStore<MixedPropellant>,
    ballistic_propellants: TableStore<BallisticPropellant>,
}

fn store<R: TableRecord>(config: &CatalogConfig) -> TableStore<R> {
    store_with_fallback(config, &bundled_data_dir())
}

/// File-backed store, or the compiled-in copy when `config` points at the
/// bundled directory and the file is gone.
fn store_with_fallback<R: TableRecord>(config: &CatalogConfig, bundled: &Path) -> TableStore<R> {
    let path = config.path_for(R::KIND);
    if config.data_dir.as_path() == bundled && !path.is_file() {
        debug!(table = %R::KIND, path = %path.display(), "bundled resource missing, using embedded copy");
        return TableStore::embedded(path, R::KIND.bundled_text());
    }
    TableStore::new(path)
}

impl Catalog {
    /// Creates a catalog whose tables load from `config.data_dir` on first access.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            materials: store(config),
            composites: store(config),
            thermal_protection: store(config),
            flange_materials: store(config),
            mixed_propellants: store(config),
            ballistic_propellants: store(config),
        }
    }

    /// Process-wide catalog configured by [`CatalogConfig::from_env`].
    pub fn global() -> &'static Catalog {
        static GLOBAL: OnceLock<Catalog> = OnceLock::new();
        GLOBAL.get_or_init(|| Catalog::new(&CatalogConfig::from_env()))
    }

    /// Resource path of each table, in [`TableKind::ALL`] order.
    #[must_use]
    pub fn sources(&self) -> Vec<(TableKind, &Path)> {
        TableKind::ALL
            .iter()
            .map(|&kind| (kind, self.source(kind)))
            .collect()
    }

    /// Resource path of one table.
    #[must_use]
    pub fn source(&self, kind: TableKind) -> &Path {
        match kind {
            TableKind::StructuralMaterials => self.materials.source(),
            TableKind::Composites => self.composites.source(),
            TableKind::FlangeFrameMaterials => self.flange_materials.source(),
            TableKind::ThermalProtection => self.thermal_protection.source(),
            TableKind::MixedPropellants => self.mixed_propellants.source(),
            TableKind::BallisticPropellants => self.ballistic_propellants.source(),
        }
    }

    /// Keys of any table, selected at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Load`](crate::TableError::Load) if the table cannot be loaded.
    pub fn list_keys(&self, kind: TableKind) -> TableResult<Vec<&str>> {
        match kind {
            TableKind::StructuralMaterials => self.materials.list_keys(),
            TableKind::Composites => self.composites.list_keys(),
            TableKind::FlangeFrameMaterials => self.flange_materials.list_keys(),
            TableKind::ThermalProtection => self.thermal_protection.list_keys(),
            TableKind::MixedPropellants => self.mixed_propellants.list_keys(),
            TableKind::BallisticPropellants => self.ballistic_propellants.list_keys(),
        }
    }

    #[must_use]
    pub fn materials(&self) -> &TableStore<StructuralMaterial> {
        &self.materials
    }

    #[must_use]
    pub fn composites(&self) -> &TableStore<Composite> {
        &self.composites
    }

    #[must_use]
    pub fn thermal_protection(&self) -> &TableStore<ThermalProtection> {
        &self.thermal_protection
    }

    #[must_use]
    pub fn flange_materials(&self) -> &TableStore<FlangeMaterial> {
        &self.flange_materials
    }

    #[must_use]
    pub fn mixed_propellants(&self) -> &TableStore<MixedPropellant> {
        &self.mixed_propellants
    }

    #[must_use]
    pub fn ballistic_propellants(&self) -> &TableStore<BallisticPropellant> {
        &self.ballistic_propellants
    }

    // --- Per-table lookups ---
    //
    // Every `get_*` fails with `TableError::NotFound` for an unknown key and
    // every lookup fails with `TableError::Load` if its resource is broken.

    /// Steel, titanium or aluminium alloy by grade.
    ///
    /// # Errors
    ///
    /// See the note above the per-table lookups.
    pub fn get_material(&self, material: &str) -> TableResult<&StructuralMaterial> {
        self.materials.get(material)
    }

    /// # Errors
    ///
    /// Returns [`TableError::Load`](crate::TableError::Load) if the table cannot be loaded.
    pub fn material_names(&self) -> TableResult<Vec<&str>> {
        self.materials.list_keys()
    }

    /// # Errors
    ///
    /// See the note above the per-table lookups.
    pub fn get_composite(&self, composite: &str) -> TableResult<&Composite> {
        self.composites.get(composite)
    }

    /// # Errors
    ///
    /// Returns [`TableError::Load`](crate::TableError::Load) if the table cannot be loaded.
    pub fn composite_names(&self) -> TableResult<Vec<&str>> {
        self.composites.list_keys()
    }

    /// Thermal protection coating by name.
    ///
    /// # Errors
    ///
    /// See the note above the per-table lookups.
    pub fn get_tzp(&self, tzp: &str) -> TableResult<&ThermalProtection> {
        self.thermal_protection.get(tzp)
    }

    /// # Errors
    ///
    /// Returns [`TableError::Load`](crate::TableError::Load) if the table cannot be loaded.
    pub fn tzp_names(&self) -> TableResult<Vec<&str>> {
        self.thermal_protection.list_keys()
    }

    /// # Errors
    ///
    /// See the note above the per-table lookups.
    pub fn get_flange_material(&self, material: &str) -> TableResult<&FlangeMaterial> {
        self.flange_materials.get(material)
    }

    /// # Errors
    ///
    /// Returns [`TableError::Load`](crate::TableError::Load) if the table cannot be loaded.
    pub fn flange_material_names(&self) -> TableResult<Vec<&str>> {
        self.flange_materials.list_keys()
    }

    /// Mixed propellant by name.
    ///
    /// # Errors
    ///
    /// See the note above the per-table lookups.
    pub fn get_mixed_propellant(&self, name: &str) -> TableResult<&MixedPropellant> {
        self.mixed_propellants.get(name)
    }

    /// # Errors
    ///
    /// Returns [`TableError::Load`](crate::TableError::Load) if the table cannot be loaded.
    pub fn mixed_propellant_names(&self) -> TableResult<Vec<&str>> {
        self.mixed_propellants.list_keys()
    }

    /// Ballistic propellant by serial number, e.g. `"3"`.
    ///
    /// # Errors
    ///
    /// See the note above the per-table lookups.
    pub fn get_ballistic_propellant(&self, number: &str) -> TableResult<&BallisticPropellant> {
        self.ballistic_propellants.get(number)
    }

    /// # Errors
    ///
    /// Returns [`TableError::Load`](crate::TableError::Load) if the table cannot be loaded.
    pub fn ballistic_propellant_names(&self) -> TableResult<Vec<&str>> {
        self.ballistic_propellants.list_keys()
    }
}

// ---------------------------------------------------------------------------
// Process-wide lookups
// ---------------------------------------------------------------------------

/// [`Catalog::get_material`] on the global catalog.
///
/// # Errors
///
/// `NotFound` for an unknown grade, `Load` for a broken resource.
pub fn get_material(material: &str) -> TableResult<&'static StructuralMaterial> {
    Catalog::global().get_material(material)
}

/// # Errors
///
/// `Load` for a broken resource.
pub fn material_names() -> TableResult<Vec<&'static str>> {
    Catalog::global().material_names()
}

/// # Errors
///
/// `NotFound` for an unknown composite, `Load` for a broken resource.
pub fn get_composite(composite: &str) -> TableResult<&'static Composite> {
    Catalog::global().get_composite(composite)
}

/// # Errors
///
/// `Load` for a broken resource.
pub fn composite_names() -> TableResult<Vec<&'static str>> {
    Catalog::global().composite_names()
}

/// # Errors
///
/// `NotFound` for an unknown coating, `Load` for a broken resource.
pub fn get_tzp(tzp: &str) -> TableResult<&'static ThermalProtection> {
    Catalog::global().get_tzp(tzp)
}

/// # Errors
///
/// `Load` for a broken resource.
pub fn tzp_names() -> TableResult<Vec<&'static str>> {
    Catalog::global().tzp_names()
}

/// # Errors
///
/// `NotFound` for an unknown material, `Load` for a broken resource.
pub fn get_flange_material(material: &str) -> TableResult<&'static FlangeMaterial> {
    Catalog::global().get_flange_material(material)
}

/// # Errors
///
/// `Load` for a broken resource.
pub fn flange_material_names() -> TableResult<Vec<&'static str>> {
    Catalog::global().flange_material_names()
}

/// # Errors
///
/// `NotFound` for an unknown propellant, `Load` for a broken resource.
pub fn get_mixed_propellant(name: &str) -> TableResult<&'static MixedPropellant> {
    Catalog::global().get_mixed_propellant(name)
}

/// # Errors
///
/// `Load` for a broken resource.
pub fn mixed_propellant_names() -> TableResult<Vec<&'static str>> {
    Catalog::global().mixed_propellant_names()
}

/// # Errors
///
/// `NotFound` for an unknown serial number, `Load` for a broken resource.
pub fn get_ballistic_propellant(number: &str) -> TableResult<&'static BallisticPropellant> {
    Catalog::global().get_ballistic_propellant(number)
}

/// # Errors
///
/// `Load` for a broken resource.
pub fn ballistic_propellant_names() -> TableResult<Vec<&'static str>> {
    Catalog::global().ballistic_propellant_names()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::error::TableError;

    fn bundled() -> Catalog {
        Catalog::new(&CatalogConfig::default())
    }

    #[test]
    fn bundled_tables_resolve_every_listed_key() {
        let catalog = bundled();

        for key in catalog.material_names().unwrap() {
            assert_eq!(catalog.get_material(key).unwrap().material, key);
        }
        for key in catalog.composite_names().unwrap() {
            assert_eq!(catalog.get_composite(key).unwrap().material, key);
        }
        for key in catalog.tzp_names().unwrap() {
            assert_eq!(catalog.get_tzp(key).unwrap().material, key);
        }
        for key in catalog.flange_material_names().unwrap() {
            assert_eq!(catalog.get_flange_material(key).unwrap().material, key);
        }
        for key in catalog.mixed_propellant_names().unwrap() {
            assert!(catalog.get_mixed_propellant(key).is_ok());
        }
        for key in catalog.ballistic_propellant_names().unwrap() {
            assert_eq!(catalog.get_ballistic_propellant(key).unwrap().number, key);
        }
    }

    #[test]
    fn bundled_tables_are_not_empty() {
        let catalog = bundled();
        for kind in TableKind::ALL {
            assert!(!catalog.list_keys(kind).unwrap().is_empty(), "{kind} is empty");
        }
    }

    #[test]
    fn bundled_values_match_resource() {
        let catalog = bundled();
        let steel = catalog.get_material("12Х18Н10Т").unwrap();
        assert_eq!(steel.rho, 7900.0);
        assert_eq!(steel.sigma_v, 5e8);

        let first = catalog.ballistic_propellant_names().unwrap()[0];
        assert_eq!(first, "1");
    }

    #[test]
    fn unknown_keys_are_not_found_per_table() {
        let catalog = bundled();
        let cases = [
            (catalog.get_material("Unobtainium").unwrap_err(), "material_names()"),
            (catalog.get_composite("Unobtainium").unwrap_err(), "composite_names()"),
            (catalog.get_tzp("Unobtainium").unwrap_err(), "tzp_names()"),
            (
                catalog.get_flange_material("Unobtainium").unwrap_err(),
                "flange_material_names()",
            ),
            (
                catalog.get_mixed_propellant("Unobtainium").unwrap_err(),
                "mixed_propellant_names()",
            ),
            (
                catalog.get_ballistic_propellant("999").unwrap_err(),
                "ballistic_propellant_names()",
            ),
        ];
        for (err, list_fn) in cases {
            assert!(err.is_not_found());
            assert!(err.to_string().contains(list_fn), "{err}");
        }
    }

    #[test]
    fn tables_load_independently() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::new(&CatalogConfig::with_data_dir(dir.path()));

        assert!(matches!(
            catalog.get_composite("x"),
            Err(TableError::Load {
                table: TableKind::Composites,
                ..
            })
        ));
        assert!(catalog.composites().is_initialized());
        assert!(!catalog.materials().is_initialized());
    }

    #[test]
    fn missing_bundled_directory_falls_back_to_embedded_tables() {
        let dir = TempDir::new().unwrap();
        let moved = dir.path().join("data");
        let config = CatalogConfig::with_data_dir(&moved);

        let store: TableStore<StructuralMaterial> = store_with_fallback(&config, &moved);
        assert!(store.is_embedded());
        assert_eq!(store.get("12Х18Н10Т").unwrap().rho, 7900.0);

        let mixed: TableStore<MixedPropellant> = store_with_fallback(&config, &moved);
        assert!(!mixed.list_keys().unwrap().is_empty());
    }

    #[test]
    fn custom_data_dir_never_falls_back() {
        let dir = TempDir::new().unwrap();
        let config = CatalogConfig::with_data_dir(dir.path());
        let store: TableStore<Composite> = store_with_fallback(&config, &bundled_data_dir());
        assert!(!store.is_embedded());
        assert!(matches!(store.list_keys(), Err(TableError::Load { .. })));
    }

    #[test]
    fn bundled_catalog_reads_files_on_disk() {
        let catalog = bundled();
        assert!(!catalog.materials().is_embedded());
    }

    #[test]
    fn sources_follow_config() {
        let catalog = Catalog::new(&CatalogConfig::with_data_dir("/srv/tables"));
        let sources = catalog.sources();
        assert_eq!(sources.len(), 6);
        assert_eq!(
            catalog.source(TableKind::ThermalProtection),
            Path::new("/srv/tables/materials/thermal_protection.csv")
        );
    }

    #[test]
    fn global_lookups_use_the_shared_catalog() {
        let names = material_names().unwrap();
        let first = get_material(names[0]).unwrap();
        assert!(std::ptr::eq(first, get_material(names[0]).unwrap()));
        assert!(get_tzp("Unobtainium").unwrap_err().is_not_found());
    }
}
