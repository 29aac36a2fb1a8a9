use super::read_project;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Project file to check
    pub file: PathBuf,
}

pub fn validate(args: ValidateArgs, _cwd: &Path) -> Result<()> {
    let project = read_project(&args.file)?;

    println!("{} {} is valid", "✓".green(), args.file.display());
    println!("   Version:  {}", project.version);
    println!("   Pages:    {}", project.pages.len());
    println!("   Elements: {}", project.element_count());
    Ok(())
}
