use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// MIME-like format identifier reported by a paste/drop payload
/// (e.g. `text/plain`, `image/png`, `Files`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FormatTag(pub String);

impl FormatTag {
    /// Placeholder used for file entries whose declared type is empty.
    pub fn unknown() -> Self {
        Self("unknown".into())
    }

    pub fn text_plain() -> Self {
        Self("text/plain".into())
    }

    /// Whether the identifier names a textual representation.
    /// Substring match, mirroring how payload sources report types
    /// (`text/plain`, `text/html`, `vscode-editor-data` do not all parse
    /// as structured MIME).
    pub fn is_text(&self) -> bool {
        self.0.contains("text")
    }

    pub fn is_image(&self) -> bool {
        self.0.contains("image")
    }

    /// The part before the first `/`, used as a compact preview label.
    pub fn major_type(&self) -> &str {
        self.0.split('/').next().unwrap_or(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FormatTag {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FormatTag(s.to_string()))
    }
}

impl From<&str> for FormatTag {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FormatTag {
    fn from(s: String) -> Self {
        Self(s)
    }
}
