use std::path::PathBuf;

/// Run configuration, fixed once arguments are parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeConfig {
    pub human_readable: bool,
    pub recursive: bool,
    pub verbose: bool,
}

impl SizeConfig {
    pub fn new(human_readable: bool, recursive: bool) -> Self {
        Self {
            human_readable,
            recursive,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Result of measuring one root path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub path: PathBuf,
    pub size: u64,
    pub file_count: usize,
}

impl Measurement {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            size: 0,
            file_count: 0,
        }
    }
}

/// Totals across every path of a run
#[derive(Debug, Default)]
pub struct ReportStats {
    pub total_size: u64,
    pub total_files: usize,
    pub measured_paths: usize,
    pub failed_paths: usize,
}

impl ReportStats {
    pub fn add_measurement(&mut self, measurement: &Measurement) {
        self.total_size = self.total_size.saturating_add(measurement.size);
        self.total_files += measurement.file_count;
        self.measured_paths += 1;
    }

    pub fn add_failed(&mut self) {
        self.failed_paths += 1;
    }
}
