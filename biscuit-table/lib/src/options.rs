use serde::{Deserialize, Serialize};

/// Whether rendered cells carry ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Plain text; formatters are ignored.
    #[default]
    Plain,
    /// Each cell's lines are wrapped in its resolved style's escape codes.
    Ansi,
}

/// Settings which shape how a table is laid out and rendered.
///
/// Every field has a default, so a partial config deserializes cleanly:
///
/// ```
/// use biscuit_table::{OutputMode, RenderOptions};
///
/// let options: RenderOptions = serde_json::from_str(r#"{ "output": "ansi" }"#).unwrap();
/// assert_eq!(options.output, OutputMode::Ansi);
/// assert_eq!(options.fill, ' ');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RenderOptions {
    /// Character used to pad cells out to their column width.
    pub fill: char,
    /// Plain text or ANSI styled output.
    pub output: OutputMode,
    /// Caps every column at this many characters, wrapping longer content.
    ///
    /// A column never gets narrower than its longest word.
    pub max_column_width: Option<usize>,
    /// Caps the whole table (columns plus delimiters), usually at the
    /// terminal's width. Wider columns are narrowed first.
    pub max_width: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            fill: ' ',
            output: OutputMode::Plain,
            max_column_width: None,
            max_width: None,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    pub fn with_max_column_width(mut self, width: usize) -> Self {
        self.max_column_width = Some(width);
        self
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn is_styled(&self) -> bool {
        self.output == OutputMode::Ansi
    }
}
