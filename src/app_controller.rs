use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::chapter_mapper::map_chapters;
use crate::chapter_writer::{render_chapters, write_chapters};
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::ohms_index::OhmsIndex;

// @module: Application controller for index conversion

/// Main application controller: index in, chapters file out
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Output path for `input_file`, unless one was given explicitly
    pub fn output_path_for(&self, input_file: &Path, output_file: Option<&Path>) -> PathBuf {
        match output_file {
            Some(path) => path.to_path_buf(),
            None => FileManager::default_output_path(input_file, &self.config.output_suffix),
        }
    }

    /// Convert a parsed index into a rendered chapters document
    pub fn convert_index(&self, index: &OhmsIndex) -> Result<String, AppError> {
        let chapters = map_chapters(index, self.config.lang_alt_reverse)?;
        debug!("Mapped {} chapter(s)", chapters.len());
        Ok(render_chapters(&chapters))
    }

    /// Convert index XML text into a rendered chapters document
    pub fn convert_str(&self, source: &str) -> Result<String, AppError> {
        let index = OhmsIndex::parse(source)?;
        self.convert_index(&index)
    }

    /// Run one conversion and return the path that was written
    ///
    /// Nothing is written unless reading and mapping both succeed.
    pub fn run(&self, input_file: &Path, output_file: Option<&Path>) -> Result<PathBuf, AppError> {
        let output_path = self.output_path_for(input_file, output_file);
        info!("Converting {} -> {}", input_file.display(), output_path.display());

        let index = OhmsIndex::from_file(input_file)?;
        let document = self.convert_index(&index)?;
        write_chapters(&output_path, &document)?;

        info!("Success: {}", output_path.display());
        Ok(output_path)
    }
}
