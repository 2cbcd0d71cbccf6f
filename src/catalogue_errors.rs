//! # Catalogue Error Types Module
//!
//! This module defines the error types raised while loading and validating
//! the entry catalogue, plus the error returned when a category, method,
//! doneness or unit tag fails to parse.
//!
//! Queries over a loaded catalogue never fail: missing matches are `None`
//! or an empty `Vec`, so nothing here is returned from the query surface.

/// Errors raised while building a catalogue
#[derive(Debug)]
pub enum CatalogueError {
    /// A source file could not be read
    Io(std::io::Error),
    /// A source is not valid catalogue JSON
    Parse {
        /// Source name, e.g. "beef"
        source_name: String,
        message: String,
    },
    /// Two entries share an id
    DuplicateId(String),
    /// An id is not a snake_case identifier
    InvalidId(String),
    /// An entry lists the same doneness level twice
    DuplicateDoneness { id: String, level: String },
    /// A time range has min greater than max
    InvalidTimeRange { id: String, portion: String },
    /// An entry has a blank name
    EmptyName(String),
}

impl std::fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogueError::Io(err) => write!(f, "I/O error: {err}"),
            CatalogueError::Parse {
                source_name,
                message,
            } => write!(f, "Parse error in '{source_name}': {message}"),
            CatalogueError::DuplicateId(id) => write!(f, "Duplicate entry id: {id}"),
            CatalogueError::InvalidId(id) => write!(f, "Invalid entry id: '{id}'"),
            CatalogueError::DuplicateDoneness { id, level } => {
                write!(f, "Entry {id} defines doneness level {level} more than once")
            }
            CatalogueError::InvalidTimeRange { id, portion } => {
                write!(f, "Entry {id} has an inverted time range for portion '{portion}'")
            }
            CatalogueError::EmptyName(id) => write!(f, "Entry {id} has an empty name"),
        }
    }
}

impl std::error::Error for CatalogueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogueError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CatalogueError {
    fn from(err: std::io::Error) -> Self {
        CatalogueError::Io(err)
    }
}

/// A tag string that names no variant of a closed enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag {
    /// What was being parsed (e.g., "cooking method")
    pub kind: &'static str,
    /// The tag as given
    pub tag: String,
}

impl UnknownTag {
    /// Record a tag that failed to parse as `kind`
    pub fn new(kind: &'static str, tag: &str) -> Self {
        Self {
            kind,
            tag: tag.to_string(),
        }
    }
}

impl std::fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown {}: '{}'", self.kind, self.tag)
    }
}

impl std::error::Error for UnknownTag {}
