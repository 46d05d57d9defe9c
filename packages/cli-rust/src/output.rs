//! Rendering catalog contents for the terminal.

use std::io::Write;

use matprop_core::{Catalog, TableKind};
use serde_json::Value;

/// Writes one line per table: CLI-facing name, description, resource path.
pub fn write_tables(out: &mut impl Write, catalog: &Catalog) -> anyhow::Result<()> {
    for (kind, path) in catalog.sources() {
        writeln!(out, "{:<24} {:<24} {}", kind.as_str(), kind, path.display())?;
    }
    Ok(())
}

/// Looks up `key` in `kind` and serializes the record.
pub fn record_value(catalog: &Catalog, kind: TableKind, key: &str) -> anyhow::Result<Value> {
    let value = match kind {
        TableKind::StructuralMaterials => serde_json::to_value(catalog.get_material(key)?)?,
        TableKind::Composites => serde_json::to_value(catalog.get_composite(key)?)?,
        TableKind::FlangeFrameMaterials => {
            serde_json::to_value(catalog.get_flange_material(key)?)?
        }
        TableKind::ThermalProtection => serde_json::to_value(catalog.get_tzp(key)?)?,
        TableKind::MixedPropellants => serde_json::to_value(catalog.get_mixed_propellant(key)?)?,
        TableKind::BallisticPropellants => {
            serde_json::to_value(catalog.get_ballistic_propellant(key)?)?
        }
    };
    Ok(value)
}

/// Writes the record as pretty JSON or as a `[table] key` header followed
/// by `field = value` lines in declaration order.
pub fn write_record(
    out: &mut impl Write,
    catalog: &Catalog,
    kind: TableKind,
    key: &str,
    json: bool,
) -> anyhow::Result<()> {
    let value = record_value(catalog, kind, key)?;
    if json {
        serde_json::to_writer_pretty(&mut *out, &value)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "[{kind}] {key}")?;
    if let Value::Object(fields) = &value {
        for (name, field) in fields {
            match field {
                Value::String(text) => writeln!(out, "{name} = {text}")?,
                other => writeln!(out, "{name} = {other}")?,
            }
        }
    }
    Ok(())
}
