//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `pokedex_core` linkage without the Flutter runtime.
//! - Load the bundled catalog and print one deterministic line per record.
//!
//! Usage: `pokedex_cli [asset_root]`. Without an argument the asset root comes
//! from `POKEDEX_ASSET_ROOT` (default `assets`).

use pokedex_core::{load_catalog, AppPaths, ListItem};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("pokedex_core ping={}", pokedex_core::ping());
    println!("pokedex_core version={}", pokedex_core::core_version());

    let mut paths = AppPaths::from_env();
    if let Some(root) = std::env::args().nth(1) {
        paths.asset_root = root.into();
    }

    let catalog_path = paths.catalog_path();
    match load_catalog(&catalog_path) {
        Ok(catalog) => {
            println!(
                "catalog path={} records={}",
                catalog_path.display(),
                catalog.len()
            );
            for item in catalog.iter().map(ListItem::from_record) {
                println!("{} {} [{}]", item.number_label, item.name, item.types.join(", "));
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("catalog error_code={} error={err}", err.kind().code());
            ExitCode::FAILURE
        }
    }
}
