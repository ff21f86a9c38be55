use std::path::Path;

use anyhow::Result;

use folio_core::Page;

pub fn run(file: &Path) -> Result<()> {
    let page = Page::load(file)?;
    let blocks: usize = page.sections.iter().map(|s| s.blocks.len()).sum();
    println!(
        "{}: {} sections, {} blocks",
        file.display(),
        page.sections.len(),
        blocks
    );
    Ok(())
}
