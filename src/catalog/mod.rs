mod generator;
mod persistence;

pub use generator::{CatalogConfig, FoodCatalog, NAME_POOL};
pub use persistence::{export_csv, load_catalog, save_catalog};
