//! Format listing command.

use crate::ListArgs;
use anyhow::Result;
use pixfmt_core::Layout;

/// Prints one line per format in table order.
pub fn run(args: ListArgs) -> Result<()> {
    let table = super::load_table(&args.input)?;
    let layout = args.layout.as_deref().map(Layout::from_tag);

    for fmt in table.iter().filter(|f| layout.as_ref().is_none_or(|l| f.layout() == l)) {
        println!(
            "{:<32} {:<10} {}x{} {:>4} bits",
            fmt.short_name(),
            fmt.layout(),
            fmt.block_width(),
            fmt.block_height(),
            fmt.block_size()
        );
    }
    Ok(())
}
