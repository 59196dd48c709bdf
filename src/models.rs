use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub file_path: String,
    pub line_number: u32,
    pub annotation: String,
}

impl Annotation {
    pub fn new(file_path: impl Into<String>, line_number: u32, annotation: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            line_number,
            annotation: annotation.into(),
        }
    }

    pub fn reference(&self) -> AnnotationRef {
        AnnotationRef {
            file_path: self.file_path.clone(),
            line_number: self.line_number,
        }
    }

    pub fn matches(&self, file_path: &str, line_number: u32) -> bool {
        self.file_path == file_path && self.line_number == line_number
    }
}

/// Identifies a record by the `(filePath, lineNumber)` pair; the first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationRef {
    pub file_path: String,
    pub line_number: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRange {
    pub start: Position,
    pub end: Position,
}

impl LineRange {
    pub fn whole_line(line: u32, length: u32) -> Self {
        Self {
            start: Position { line, character: 0 },
            end: Position {
                line,
                character: length,
            },
        }
    }
}

/// Snapshot of the focused editor as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveEditor {
    pub document_path: String,
    /// Zero-based caret line.
    pub caret_line: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverviewRulerLane {
    Left,
    Center,
    Right,
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemedBorder {
    pub border_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecorationStyle {
    pub border_width: String,
    pub border_style: String,
    pub overview_ruler_color: String,
    pub overview_ruler_lane: OverviewRulerLane,
    pub light: ThemedBorder,
    pub dark: ThemedBorder,
}

impl Default for DecorationStyle {
    fn default() -> Self {
        Self {
            border_width: "1px".to_string(),
            border_style: "solid".to_string(),
            overview_ruler_color: "red".to_string(),
            overview_ruler_lane: OverviewRulerLane::Right,
            light: ThemedBorder {
                border_color: "darkred".to_string(),
            },
            dark: ThemedBorder {
                border_color: "lightcoral".to_string(),
            },
        }
    }
}

/// Opaque id handed out by the host for a registered decoration type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecorationHandle(pub u64);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputBoxOptions {
    pub prompt: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewColumn {
    One,
    Two,
    Three,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelContent {
    pub view_type: String,
    pub title: String,
    pub column: ViewColumn,
    pub html: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollapsibleState {
    None,
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandInvocation {
    pub command: String,
    pub title: String,
    pub arguments: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeItem {
    pub label: String,
    pub description: Option<String>,
    pub tooltip: Option<String>,
    pub collapsible_state: CollapsibleState,
    pub context_value: String,
    pub command: Option<CommandInvocation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtensionSettings {
    pub store_file_name: String,
    pub decoration: DecorationStyle,
    pub log_filter: String,
}

impl Default for ExtensionSettings {
    fn default() -> Self {
        Self {
            store_file_name: ".annotations.json".to_string(),
            decoration: DecorationStyle::default(),
            log_filter: "info".to_string(),
        }
    }
}

/// Everything the host hands over at activation; nothing is read from ambient globals.
#[derive(Debug, Clone)]
pub struct ExtensionContext {
    pub workspace_root: PathBuf,
    pub log_dir: Option<PathBuf>,
    pub settings: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse {
    pub changed: bool,
    pub annotation: Option<Annotation>,
}

impl MutationResponse {
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            annotation: None,
        }
    }

    pub fn changed(annotation: Annotation) -> Self {
        Self {
            changed: true,
            annotation: Some(annotation),
        }
    }
}
