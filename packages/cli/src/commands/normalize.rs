use super::read_project;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use folio_document::{Page, Project};
use folio_layout::resolve_in_place;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Project file to normalize
    pub file: PathBuf,

    /// Write the result here instead of overwriting the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn normalize(args: NormalizeArgs, _cwd: &Path) -> Result<()> {
    let mut project = read_project(&args.file)?;
    let moved = normalize_project(&mut project);

    let target = args.output.as_ref().unwrap_or(&args.file);
    fs::write(target, project.to_json()?)?;

    if moved == 0 {
        println!("{} No overlapping elements", "✓".green());
    } else {
        println!("{} Moved {} element(s)", "✓".green(), moved);
    }
    println!("   Output: {}", target.display());
    Ok(())
}

/// Resolve collisions on every page. Returns how many elements moved.
pub(crate) fn normalize_project(project: &mut Project) -> usize {
    let mut total = 0;
    for page in &mut project.pages {
        let moved = normalize_page(page);
        if moved > 0 {
            info!(page_id = %page.id, moved, "Resolved overlaps");
            total += moved;
        }
    }
    if total > 0 {
        project.touch();
    }
    total
}

fn normalize_page(page: &mut Page) -> usize {
    resolve_in_place(&mut page.elements)
}
