//! Formatter options and builder.
//!
//! [`FormatterOptions`] selects which constructs of the chat dialect are
//! recognised. Anything switched off is emitted as plain text.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::DATABASE_MARKER;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatterOptions {
    /// Recognise `_italic_` and `*italic*` spans.
    pub italic: bool,
    /// Classify numbered and bullet lines.
    pub lists: bool,
    /// Emit database indicators for attribution markers.
    pub database_indicators: bool,
    /// Attribution markers, matched ASCII-case-insensitively.
    pub database_markers: Vec<String>,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            italic: true,
            lists: true,
            database_indicators: true,
            database_markers: vec![DATABASE_MARKER.to_string()],
        }
    }
}

impl FormatterOptions {
    pub fn builder() -> FormatterOptionsBuilder {
        FormatterOptionsBuilder::new()
    }

    /// Load options from JSON. Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::JsonDecode`] for malformed JSON and
    /// [`Error::InvalidOptions`] if the decoded options fail validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Check that the options describe a usable formatter.
    pub fn validate(&self) -> Result<()> {
        if !self.database_indicators {
            return Ok(());
        }
        if self.database_markers.is_empty() {
            return Err(Error::InvalidOptions(
                "database indicators are enabled but no markers are configured".to_string(),
            ));
        }
        if let Some(pos) = self
            .database_markers
            .iter()
            .position(|m| m.trim().is_empty())
        {
            return Err(Error::InvalidOptions(format!(
                "database marker #{} is blank",
                pos
            )));
        }
        Ok(())
    }
}

/// Builder for [`FormatterOptions`].
pub struct FormatterOptionsBuilder {
    options: FormatterOptions,
}

impl FormatterOptionsBuilder {
    pub fn new() -> Self {
        Self {
            options: FormatterOptions::default(),
        }
    }

    pub fn italic(mut self, enabled: bool) -> Self {
        self.options.italic = enabled;
        self
    }

    pub fn lists(mut self, enabled: bool) -> Self {
        self.options.lists = enabled;
        self
    }

    pub fn database_indicators(mut self, enabled: bool) -> Self {
        self.options.database_indicators = enabled;
        self
    }

    /// Replace the attribution markers.
    pub fn database_markers(mut self, markers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.options.database_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Add one attribution marker to the configured set.
    pub fn database_marker(mut self, marker: impl Into<String>) -> Self {
        self.options.database_markers.push(marker.into());
        self
    }

    pub fn build(self) -> FormatterOptions {
        self.options
    }
}

impl Default for FormatterOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_recognise_everything() {
        let options = FormatterOptions::default();
        assert!(options.italic);
        assert!(options.lists);
        assert!(options.database_indicators);
        assert_eq!(options.database_markers, vec!["(from our database)"]);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_blank_marker_rejected() {
        let options = FormatterOptions::builder().database_marker("  ").build();
        let err = options.validate().unwrap_err();
        assert!(err.to_string().contains("#1 is blank"));
    }

    #[test]
    fn test_no_markers_allowed_when_indicators_disabled() {
        let options = FormatterOptions::builder()
            .database_indicators(false)
            .database_markers(Vec::<String>::new())
            .build();
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let options = FormatterOptions::from_json(r#"{"italic": false}"#).unwrap();
        assert!(!options.italic);
        assert!(options.lists);
        assert_eq!(options.database_markers.len(), 1);
    }
}
