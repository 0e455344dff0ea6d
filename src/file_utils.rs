use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

// @module: File and path utilities

/// Suffix appended to derived output file names
pub const DEFAULT_OUTPUT_SUFFIX: &str = "-MKV-Chapters.xml";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @generates: Output path for the chapters file
    // @params: input_file, suffix
    /// A trailing `.xml` (any case) is replaced by `suffix`; other names
    /// get `suffix` appended.
    pub fn default_output_path<P: AsRef<Path>>(input_file: P, suffix: &str) -> PathBuf {
        let input = input_file.as_ref().to_string_lossy();

        let has_xml_extension = input.len() >= 4
            && input.is_char_boundary(input.len() - 4)
            && input[input.len() - 4..].eq_ignore_ascii_case(".xml");
        let stem = if has_xml_extension {
            &input[..input.len() - 4]
        } else {
            &input[..]
        };

        PathBuf::from(format!("{}{}", stem, suffix))
    }

    /// Write a string to a file through a temporary sibling file
    ///
    /// The content is fully written before the temporary file is renamed
    /// over `path`, so readers never observe a partial document.
    pub fn write_atomically<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        Self::ensure_dir(parent)?;

        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(content.as_bytes())?;
        temp.flush()?;
        temp.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}
