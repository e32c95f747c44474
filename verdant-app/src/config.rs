use anyhow::{Context, Result};
use verdant_core::catalog::SubstanceCatalog;

/// Loads the full substance catalog from a directory of YAML files.
pub fn load_catalog(dir: &str) -> Result<SubstanceCatalog> {
    println!("Loading substance catalog from '{}'...", dir);
    let catalog = SubstanceCatalog::load_dir(dir)
        .with_context(|| format!("Failed to load substance catalog from '{}'", dir))?;
    let restricted = catalog.iter().filter(|s| s.regulatory.annex_xvii).count();
    println!(
        "Catalog loaded: {} substances ({} under Annex XVII restriction).",
        catalog.len(),
        restricted
    );
    Ok(catalog)
}
