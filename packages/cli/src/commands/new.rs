use crate::config;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use folio_document::{Project, UuidIds};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project file to create
    pub file: PathBuf,

    /// Project name
    #[arg(short, long, default_value = "Nouveau projet")]
    pub name: String,

    /// Force overwrite an existing file
    #[arg(short, long)]
    pub force: bool,

    /// Fill the project with the sample workbook
    #[arg(long)]
    pub demo: bool,
}

pub fn new(args: NewArgs, cwd: &Path) -> Result<()> {
    if args.file.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.file.display()
        );
    }

    let project = if args.demo {
        Project::demo(&mut UuidIds)
    } else {
        let config = config::load(cwd)?;
        let mut project = Project::starter(&mut UuidIds, &config.default_page);
        project.name = args.name;
        project
    };

    fs::write(&args.file, project.to_json()?)?;

    println!("{} Created {}", "✓".green(), args.file.display());
    for page in &project.pages {
        println!("   {} {}", format!("{:?}", page.kind).dimmed(), page.id);
    }
    Ok(())
}
