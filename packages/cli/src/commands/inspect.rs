use super::read_project;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use folio_document::Project;
use folio_editor::{derive_structure, Structure};
use serde_json::json;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Project file to inspect
    pub file: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn inspect(args: InspectArgs, _cwd: &Path) -> Result<()> {
    let project = read_project(&args.file)?;
    let structure = derive_structure(&project.pages);

    match args.format.as_str() {
        "text" => print_text(&project, &structure),
        "json" => println!("{}", to_json(&project, &structure)?),
        other => bail!("Unknown format: {}. Use: text or json", other),
    }
    Ok(())
}

fn print_text(project: &Project, structure: &Structure) {
    println!("📖 {} ({})", project.name.bold(), project.id.dimmed());
    println!();

    for (index, page) in project.pages.iter().enumerate() {
        let number = structure
            .page_number(&page.id)
            .map(|n| format!("p.{n}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "   {:>3}  {:<12} {:<6} {} element(s)",
            index + 1,
            format!("{:?}", page.kind),
            number,
            page.elements.len()
        );
    }

    println!();
    if structure.toc.is_empty() {
        println!("   {}", "No sequence or part titles".dimmed());
        return;
    }
    println!("   {}", "Contents".bold());
    for entry in &structure.toc {
        println!(
            "   {:<12} {:<40} {}",
            entry.label.cyan(),
            entry.title,
            format!("p.{}", entry.page_num).dimmed()
        );
    }
}

fn to_json(project: &Project, structure: &Structure) -> Result<String> {
    let pages: Vec<_> = project
        .pages
        .iter()
        .map(|page| {
            json!({
                "id": page.id,
                "type": page.kind,
                "elements": page.elements.len(),
                "pageNumber": structure.page_number(&page.id),
            })
        })
        .collect();

    Ok(serde_json::to_string_pretty(&json!({
        "id": project.id,
        "name": project.name,
        "version": project.version,
        "pages": pages,
        "structure": structure,
    }))?)
}
