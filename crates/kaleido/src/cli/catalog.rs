//! The `kaleido catalog` command: list the transform catalog.

use kaleido_core::Catalog;

/// Execute the catalog command.
pub fn execute() -> anyhow::Result<()> {
    let catalog = Catalog::standard();
    println!("Transform catalog ({} entries, applied in order):", catalog.len());
    for transform in catalog.iter() {
        println!("  {:<24} {}", transform.name(), transform.parameter_range());
    }
    Ok(())
}
