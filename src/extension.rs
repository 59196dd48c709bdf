use crate::decorations;
use crate::errors::{AppError, AppResult};
use crate::host::EditorHost;
use crate::models::{
    Annotation, AnnotationRef, BooleanResponse, DecorationHandle, ExtensionSettings, InputBoxOptions,
    MutationResponse, TreeItem,
};
use crate::panel;
use crate::store::AnnotationStore;
use crate::tree::{self, TreeNode};
use std::path::Path;
use std::sync::Arc;

const CREATE_PROMPT: &str = "Enter your annotation";
const EDIT_PROMPT: &str = "Edit your annotation";

pub struct AnnotationExtension {
    host: Arc<dyn EditorHost>,
    store: AnnotationStore,
    settings: ExtensionSettings,
    decoration: DecorationHandle,
}

impl AnnotationExtension {
    pub fn new(host: Arc<dyn EditorHost>, workspace_root: &Path, settings: ExtensionSettings) -> AppResult<Arc<Self>> {
        if !workspace_root.is_dir() {
            return Err(AppError::InvalidArgument(format!(
                "Workspace root is not a directory: {}",
                workspace_root.to_string_lossy()
            )));
        }
        let store = AnnotationStore::for_workspace(workspace_root, &settings.store_file_name);
        let decoration = host.create_decoration_type(&settings.decoration);
        host.register_tree_view(tree::VIEW_ID)?;

        Ok(Arc::new(Self {
            host,
            store,
            settings,
            decoration,
        }))
    }

    pub fn settings(&self) -> &ExtensionSettings {
        &self.settings
    }

    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    pub fn annotations(&self) -> AppResult<Vec<Annotation>> {
        self.store.load()
    }

    pub async fn create_annotation(&self) -> AppResult<MutationResponse> {
        let Some(editor) = self.host.active_editor() else {
            return Ok(MutationResponse::unchanged());
        };
        let line_number = editor.caret_line.saturating_add(1);

        let input = self
            .host
            .show_input_box(InputBoxOptions {
                prompt: CREATE_PROMPT.to_string(),
                value: None,
            })
            .await;
        let Some(text) = input.filter(|text| !text.is_empty()) else {
            return Ok(MutationResponse::unchanged());
        };

        let created = self
            .store
            .append(Annotation::new(editor.document_path, line_number, text))
            .await?;
        tracing::info!(
            file_path = %created.file_path,
            line_number = created.line_number,
            "annotation created"
        );

        self.refresh_views()?;
        Ok(MutationResponse::changed(created))
    }

    /// Without a target the caret line of the focused document is edited.
    pub async fn edit_annotation(&self, target: Option<AnnotationRef>) -> AppResult<MutationResponse> {
        let target = match target {
            Some(target) => target,
            None => {
                let Some(editor) = self.host.active_editor() else {
                    return Ok(MutationResponse::unchanged());
                };
                AnnotationRef {
                    file_path: editor.document_path,
                    line_number: editor.caret_line.saturating_add(1),
                }
            }
        };

        let current = self
            .store
            .find(&target.file_path, target.line_number)?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No annotation at {}:{}",
                    target.file_path, target.line_number
                ))
            })?;

        let input = self
            .host
            .show_input_box(InputBoxOptions {
                prompt: EDIT_PROMPT.to_string(),
                value: Some(current.annotation),
            })
            .await;
        // An empty string is a legitimate new value; only dismissal aborts.
        let Some(text) = input else {
            return Ok(MutationResponse::unchanged());
        };

        let updated = self
            .store
            .update_text(&target.file_path, target.line_number, text)
            .await?;
        tracing::info!(
            file_path = %updated.file_path,
            line_number = updated.line_number,
            "annotation edited"
        );

        self.refresh_views()?;
        Ok(MutationResponse::changed(updated))
    }

    pub fn show_annotations(&self) -> AppResult<BooleanResponse> {
        let annotations = self.store.load()?;
        self.host.show_panel(panel::render(&annotations))?;
        Ok(BooleanResponse { success: true })
    }

    pub fn jump_to_annotation(&self, target: AnnotationRef) -> AppResult<BooleanResponse> {
        let line = target.line_number.checked_sub(1).ok_or_else(|| {
            AppError::InvalidArgument(format!("{} has line number 0", target.file_path))
        })?;
        self.host.reveal_location(&target.file_path, line)?;
        Ok(BooleanResponse { success: true })
    }

    pub fn refresh(&self) -> AppResult<BooleanResponse> {
        self.refresh_views()?;
        Ok(BooleanResponse { success: true })
    }

    pub fn update_decorations(&self) -> AppResult<usize> {
        decorations::update(self.host.as_ref(), &self.store, self.decoration)
    }

    pub fn tree_children(&self, parent: Option<&TreeNode>) -> AppResult<Vec<TreeNode>> {
        let annotations = self.store.load()?;
        Ok(tree::children(&annotations, parent))
    }

    pub fn tree_item(&self, node: &TreeNode) -> TreeItem {
        tree::tree_item(node)
    }

    fn refresh_views(&self) -> AppResult<()> {
        self.host.refresh_tree_view(tree::VIEW_ID);
        self.update_decorations()?;
        Ok(())
    }
}
