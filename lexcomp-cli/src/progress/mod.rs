//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Progress reporter for source file reading
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for source files
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet || total_files == 0 {
            return;
        }

        let pb = ProgressBar::new(total_files);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} sources {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }

        self.progress_bar = Some(pb);
    }

    /// Update progress for a source file that has been read
    pub fn file_read(&self, path: &Path) {
        if let Some(pb) = &self.progress_bar {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            pb.set_message(format!("Read: {name}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }
}
