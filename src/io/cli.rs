//! Command-line interface for batch solving of jigsaw puzzle files

use crate::algorithm::assembler::Assembler;
use crate::io::configuration::{OUTPUT_SUFFIX, PUZZLE_EXTENSION};
use crate::io::error::{AssemblyError, Result, file_error};
use crate::io::progress::ProgressManager;
use crate::io::puzzle::{grid_width, load_puzzle, orientation_sets};
use crate::spatial::Grid;
use clap::Parser;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "tilefit")]
#[command(
    author,
    version,
    about = "Assemble edge-matched jigsaw tiles with backtracking search"
)]
/// Command-line arguments for the assembly solver
pub struct Cli {
    /// Input puzzle file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch solving of puzzle files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Solve every collected puzzle file
    ///
    /// A puzzle with no valid assembly is reported and skipped, not treated
    /// as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, puzzle parsing, or solution
    /// writing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            Self::process_file(
                file,
                self.progress_manager.as_ref(),
                self.cli.should_show_progress(),
            )?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some(PUZZLE_EXTENSION) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(AssemblyError::InvalidTarget {
                    path: self.cli.target.clone(),
                    reason: "target file must be a .txt puzzle",
                })
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some(PUZZLE_EXTENSION)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(AssemblyError::InvalidTarget {
                path: self.cli.target.clone(),
                reason: "target must be a puzzle file or directory",
            })
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for user feedback when a puzzle has no assembly
    #[allow(clippy::print_stderr)]
    fn process_file(
        input_path: &Path,
        progress_manager: Option<&ProgressManager>,
        verbose: bool,
    ) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);

        let tiles = load_puzzle(input_path)?;
        let width = grid_width(tiles.len())?;
        debug!(
            "{}: {} tiles, width {width}",
            input_path.display(),
            tiles.len()
        );

        let sets = orientation_sets(tiles);
        let mut assembler = Assembler::new(sets, width)?;

        if let Some(pm) = progress_manager {
            assembler.attach_progress(pm.start_file(input_path));
        }

        let outcome = assembler.solve();
        info!(
            "{}: {} placements in {:.2?}",
            input_path.display(),
            outcome.attempts,
            start_time.elapsed()
        );

        if let Some(grid) = outcome.grid {
            std::fs::write(&output_path, render_id_grid(&grid))
                .map_err(|source| file_error(&output_path, "write", source))?;
        } else if verbose {
            eprintln!(
                "No assembly exists for {} ({} placements tried)",
                input_path.display(),
                outcome.attempts
            );
        }

        if let Some(pm) = progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Render an assembled grid as rows of aligned tile identifiers
pub fn render_id_grid(grid: &Grid) -> String {
    let id_width = grid
        .placements()
        .iter()
        .map(|(id, _)| id.to_string().len())
        .max()
        .unwrap_or(1);

    let mut output = String::new();
    for row in 0..grid.width() {
        let line: Vec<String> = grid
            .placements()
            .iter()
            .skip(row * grid.width())
            .take(grid.width())
            .map(|(id, _)| format!("{id:>id_width$}"))
            .collect();
        output.push_str(&line.join(" "));
        output.push('\n');
    }
    output
}
