//! Table validation command.

use crate::CheckArgs;
use anyhow::Result;
use tracing::info;

/// Parses each table, stopping at the first that fails.
pub fn run(args: CheckArgs, verbose: bool) -> Result<()> {
    for path in &args.input {
        let table = super::load_table(path)?;
        println!("{}: {} formats", path.display(), table.len());

        if verbose {
            let arrays = table.iter().filter(|f| f.is_array()).count();
            let zs = table.iter().filter(|f| f.is_depth_or_stencil()).count();
            let compressed = table.iter().filter(|f| f.is_compressed()).count();
            info!(arrays, zs, compressed, "table summary");
            println!("  array:         {arrays}");
            println!("  depth/stencil: {zs}");
            println!("  compressed:    {compressed}");
        }
    }
    Ok(())
}
