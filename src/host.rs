use crate::errors::AppResult;
use crate::models::{ActiveEditor, DecorationHandle, DecorationStyle, InputBoxOptions, LineRange, PanelContent};
use async_trait::async_trait;

/// The editor embedding this add-on. Every UI effect goes through here so the
/// store, the decoration updater and the tree can run without a live editor.
#[async_trait]
pub trait EditorHost: Send + Sync {
    fn active_editor(&self) -> Option<ActiveEditor>;

    /// Full range of a zero-based line; hosts reject lines past the end of the document.
    fn line_range(&self, document_path: &str, line: u32) -> AppResult<LineRange>;

    fn create_decoration_type(&self, style: &DecorationStyle) -> DecorationHandle;

    fn set_decorations(&self, handle: DecorationHandle, document_path: &str, ranges: &[LineRange]) -> AppResult<()>;

    /// Resolves to `None` when the prompt is dismissed.
    async fn show_input_box(&self, options: InputBoxOptions) -> Option<String>;

    fn register_tree_view(&self, view_id: &str) -> AppResult<()>;

    fn refresh_tree_view(&self, view_id: &str);

    fn reveal_location(&self, file_path: &str, line: u32) -> AppResult<()>;

    fn show_panel(&self, panel: PanelContent) -> AppResult<()>;
}
