//! Progress display while reading title files

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

const TEMPLATE: &str = "{spinner} {pos}/{len} files, {msg}";

/// Counts titles as input files are read, drawing a bar on stderr
pub struct TitleProgress {
    bar: ProgressBar,
    titles: usize,
}

impl TitleProgress {
    /// Start tracking `files` input files; nothing is drawn when `quiet`
    pub fn start(files: usize, quiet: bool) -> Self {
        let bar = if quiet || files == 0 {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(files as u64);
            if let Ok(style) = ProgressStyle::default_spinner().template(TEMPLATE) {
                bar.set_style(style);
            }
            bar.enable_steady_tick(Duration::from_millis(120));
            bar
        };
        bar.set_length(files as u64);

        Self { bar, titles: 0 }
    }

    /// Record one file and the number of titles it held
    pub fn file_read(&mut self, path: &Path, titles: usize) {
        self.titles += titles;
        log::debug!("{}: {titles} title(s)", path.display());

        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        self.bar
            .set_message(format!("{} titles (last: {name})", self.titles));
        self.bar.inc(1);
    }

    /// Titles read so far
    pub fn titles(&self) -> usize {
        self.titles
    }

    /// Clear the bar and return the title count
    pub fn finish(self) -> usize {
        self.bar.finish_and_clear();
        log::info!(
            "Read {} title(s) from {} file(s)",
            self.titles,
            self.bar.position()
        );
        self.titles
    }
}
