use crate::scanner::Sizer;
use crate::types::{ReportStats, SizeConfig};
use crate::utils::format_size;
use anyhow::Result;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::PathBuf;

pub struct Reporter {
    config: SizeConfig,
}

impl Reporter {
    pub fn new(config: SizeConfig) -> Self {
        Self { config }
    }

    /// Measure each path in order, writing one line per path and a final total.
    ///
    /// A path that fails to measure is reported and contributes nothing.
    /// Only write errors on `out` are returned.
    pub fn run<W: Write>(&self, paths: &[PathBuf], out: &mut W) -> Result<ReportStats> {
        let mut stats = ReportStats::default();

        for path in paths {
            // Spinner only when verbose output isn't already on stderr
            let pb = if !self.config.verbose {
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.green} {msg} [{pos} files]")?,
                );
                pb.set_message(format!("Measuring {}", path.display()));
                Some(pb)
            } else {
                None
            };

            let mut sizer = Sizer::new(self.config.recursive);
            if let Some(ref pb) = pb {
                sizer = sizer.with_progress(pb.clone());
            }

            let result = sizer.measure(path);

            if let Some(pb) = pb {
                pb.finish_and_clear();
            }

            match result {
                Ok(measurement) => {
                    writeln!(
                        out,
                        "{}: {}",
                        measurement.path.display(),
                        format_size(measurement.size, self.config.human_readable)
                    )?;

                    if self.config.verbose {
                        eprintln!(
                            "  {} {}: {} files",
                            "•".cyan(),
                            measurement.path.display(),
                            measurement.file_count.to_string().yellow()
                        );
                    }

                    stats.add_measurement(&measurement);
                }
                Err(e) => {
                    writeln!(out, "Error processing {}: {:#}", path.display(), e)?;
                    stats.add_failed();
                }
            }
        }

        writeln!(
            out,
            "Total: {}",
            format_size(stats.total_size, self.config.human_readable)
        )?;

        if self.config.verbose {
            eprintln!(
                "Measured {} paths ({} files)",
                stats.measured_paths.to_string().green().bold(),
                stats.total_files.to_string().yellow().bold()
            );
            if stats.failed_paths > 0 {
                eprintln!(
                    "{} {} of {} paths could not be measured",
                    "⚠️ ".yellow(),
                    stats.failed_paths.to_string().red().bold(),
                    paths.len()
                );
            }
        }

        Ok(stats)
    }
}
