use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use crate::foundation::error::{AssemblerError, AssemblerResult};

/// Icon sizes looked for on disk, largest first.
///
/// Order matters: the first available size becomes the base image and the
/// container entries are written in this order.
pub const DEFAULT_SIZES: [u32; 6] = [256, 128, 64, 48, 32, 16];

/// Largest edge an ICO directory entry can describe.
pub const MAX_ICO_SIZE: u32 = 256;

/// Naming convention for the input PNGs and the output container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconLayout {
    /// Directory holding the pre-rendered inputs.
    pub assets_dir: PathBuf,
    /// File stem shared by every input, e.g. `app` for `app-256.png`.
    pub base_name: String,
    /// Input file extension without the dot.
    pub extension: String,
    /// Container path to write.
    pub output: PathBuf,
    /// Candidate sizes, largest first.
    pub sizes: Vec<u32>,
}

impl Default for IconLayout {
    fn default() -> Self {
        Self::for_dir("assets")
    }
}

impl IconLayout {
    /// Default convention rooted at `dir`, writing `<dir>/app.ico`.
    pub fn for_dir(dir: impl Into<PathBuf>) -> Self {
        let assets_dir = dir.into();
        let base_name = "app".to_string();
        let output = assets_dir.join(format!("{base_name}.ico"));
        Self {
            assets_dir,
            base_name,
            extension: "png".to_string(),
            output,
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }

    /// Path of the input image for `size`.
    pub fn candidate_path(&self, size: u32) -> PathBuf {
        self.assets_dir
            .join(format!("{}-{size}.{}", self.base_name, self.extension))
    }

    /// Every configured size paired with its input path, in configured order.
    pub fn candidates(&self) -> Vec<(u32, PathBuf)> {
        self.sizes
            .iter()
            .map(|&size| (size, self.candidate_path(size)))
            .collect()
    }

    /// Candidates whose input file currently exists, order preserved.
    pub fn available(&self) -> Vec<(u32, PathBuf)> {
        self.candidates()
            .into_iter()
            .filter(|(size, path)| {
                let found = path.is_file();
                tracing::debug!(size, path = %path.display(), found, "candidate");
                found
            })
            .collect()
    }

    /// File name pattern shown to operators, e.g. `app-<size>.png`.
    pub fn input_pattern(&self) -> String {
        format!("{}-<size>.{}", self.base_name, self.extension)
    }

    /// Check that every size fits in an ICO entry and none repeats.
    pub fn validate(&self) -> AssemblerResult<()> {
        if self.sizes.is_empty() {
            return Err(AssemblerError::config("no icon sizes configured"));
        }
        if self.base_name.is_empty() {
            return Err(AssemblerError::config("base name must not be empty"));
        }

        let mut seen = BTreeSet::new();
        for &size in &self.sizes {
            if size == 0 || size > MAX_ICO_SIZE {
                return Err(AssemblerError::config(format!(
                    "icon size {size} is outside 1..={MAX_ICO_SIZE}"
                )));
            }
            if !seen.insert(size) {
                return Err(AssemblerError::config(format!(
                    "icon size {size} listed more than once"
                )));
            }
        }
        Ok(())
    }

    /// Directory the output container lands in.
    pub fn output_dir(&self) -> &Path {
        self.output.parent().unwrap_or_else(|| Path::new("."))
    }
}

#[cfg(test)]
#[path = "../tests/unit/layout.rs"]
mod tests;
