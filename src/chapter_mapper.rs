use std::fmt;

use log::debug;

use crate::errors::MappingError;
use crate::language_utils;
use crate::ohms_index::{OhmsIndex, XmlElement};

// @module: OHMS point to Matroska chapter mapping

const TIME_TAG: &str = "time";
const TITLE_TAG: &str = "title";
const TITLE_ALT_TAG: &str = "title_alt";

/// Format whole seconds as a Matroska chapter timestamp (HH:MM:SS.nnnnnnnnn)
///
/// OHMS indexes carry no sub-second resolution, so the nanosecond field
/// is always zero. Hours grow beyond two digits rather than wrapping.
pub fn format_time_start(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}:{:02}.{:09}", hours, minutes, seconds, 0)
}

/// Language codes shared by every chapter of one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    // @field: Code for the main title display
    pub primary: String,

    // @field: Code for the alternate title display
    pub alt: String,
}

impl LanguagePair {
    /// Resolve both language names, swapping their roles when `reverse` is set
    pub fn resolve(primary_name: Option<&str>, alt_name: Option<&str>, reverse: bool) -> Self {
        let (primary_name, alt_name) = if reverse {
            (alt_name, primary_name)
        } else {
            (primary_name, alt_name)
        };

        let pair = Self {
            primary: language_utils::language_code_or_undetermined(primary_name),
            alt: language_utils::language_code_or_undetermined(alt_name),
        };
        debug!(
            "Chapter languages: primary={} alt={} (reversed: {})",
            pair.primary, pair.alt, reverse
        );
        pair
    }

    /// Resolve the pair declared by an index document
    pub fn from_index(index: &OhmsIndex, reverse: bool) -> Self {
        Self::resolve(
            index.primary_language_name(),
            index.alternate_language_name(),
            reverse,
        )
    }
}

// @struct: Localized chapter title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterDisplay {
    // @field: Display text
    pub text: String,

    // @field: ISO 639-3 language code
    pub language: String,
}

// @struct: One Matroska chapter atom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRecord {
    // @field: 1-based chapter UID, in document order
    pub uid: usize,

    // @field: Start timestamp (HH:MM:SS.nnnnnnnnn)
    pub time_start: String,

    // @field: Hidden flag
    pub hidden: bool,

    // @field: Enabled flag
    pub enabled: bool,

    // @field: Title displays, primary first
    pub displays: Vec<ChapterDisplay>,
}

impl ChapterRecord {
    /// Build the chapter for one index point
    ///
    /// `position` is the 1-based place of the point in the document and
    /// becomes the chapter UID.
    pub fn from_point(
        point: &XmlElement,
        position: usize,
        languages: &LanguagePair,
    ) -> Result<Self, MappingError> {
        let raw_time = point.child_text(TIME_TAG).ok_or(MappingError::MissingField {
            field: TIME_TAG,
            point: position,
        })?;
        let seconds: u64 = raw_time.parse().map_err(|_| MappingError::InvalidField {
            field: TIME_TAG,
            point: position,
            value: raw_time.to_string(),
        })?;

        let title = point.child_text(TITLE_TAG).ok_or(MappingError::MissingField {
            field: TITLE_TAG,
            point: position,
        })?;

        let mut displays = vec![ChapterDisplay {
            text: title.to_string(),
            language: languages.primary.clone(),
        }];

        if let Some(title_alt) = point.child_text(TITLE_ALT_TAG).filter(|t| !t.is_empty()) {
            displays.push(ChapterDisplay {
                text: title_alt.to_string(),
                language: languages.alt.clone(),
            });
        }

        Ok(Self {
            uid: position,
            time_start: format_time_start(seconds),
            hidden: false,
            enabled: true,
            displays,
        })
    }
}

impl fmt::Display for ChapterRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{} {}", self.uid, self.time_start)?;
        if let Some(display) = self.displays.first() {
            write!(f, " [{}] {}", display.language, display.text)?;
        }
        Ok(())
    }
}

/// Map every point of an index to a chapter, in document order
///
/// Languages are resolved once up front and shared by all chapters.
/// The first invalid point aborts the mapping.
pub fn map_chapters(index: &OhmsIndex, reverse: bool) -> Result<Vec<ChapterRecord>, MappingError> {
    let languages = LanguagePair::from_index(index, reverse);

    let chapters = index
        .points()
        .into_iter()
        .enumerate()
        .map(|(i, point)| ChapterRecord::from_point(point, i + 1, &languages))
        .collect::<Result<Vec<_>, _>>()?;

    for chapter in &chapters {
        debug!("Mapped chapter {}", chapter);
    }

    Ok(chapters)
}
