use std::fs;
use std::path::Path;

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::models::FoodItem;

/// Save a catalog as pretty-printed JSON.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &FoodCatalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog.items())?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a catalog from a JSON file written by [`save_catalog`].
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let content = fs::read_to_string(path)?;
    let items: Vec<FoodItem> = serde_json::from_str(&content)?;
    Ok(FoodCatalog::from_items(items))
}

/// Export the catalog as CSV, one row per food item.
pub fn export_csv<P: AsRef<Path>>(path: P, catalog: &FoodCatalog) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for item in catalog.items() {
        writer.serialize(item)?;
    }
    writer.flush()?;
    Ok(())
}
