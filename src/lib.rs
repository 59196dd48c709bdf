mod commands;
mod decorations;
mod errors;
mod extension;
mod host;
mod models;
mod panel;
mod settings;
mod store;
mod tree;

pub use crate::commands::{
    CommandHandler, CommandRegistry, CREATE_ANNOTATION, EDIT_ANNOTATION, JUMP_TO_ANNOTATION, REFRESH,
    SHOW_ANNOTATIONS,
};
pub use crate::errors::{AppError, AppResult};
pub use crate::extension::AnnotationExtension;
pub use crate::host::EditorHost;
pub use crate::models::{
    ActiveEditor, Annotation, AnnotationRef, BooleanResponse, CollapsibleState, CommandInvocation,
    DecorationHandle, DecorationStyle, ExtensionContext, ExtensionSettings, InputBoxOptions, LineRange,
    MutationResponse, OverviewRulerLane, PanelContent, Position, ThemedBorder, TreeItem, ViewColumn,
};
pub use crate::store::AnnotationStore;
pub use crate::tree::{group_by_file, FileGroup, TreeNode, VIEW_ID};

use crate::commands::CommandFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;

static LOG_GUARD: std::sync::OnceLock<WorkerGuard> = std::sync::OnceLock::new();

/// Live add-on: the core plus the command table the host dispatches into.
pub struct AppState {
    extension: Arc<AnnotationExtension>,
    commands: CommandRegistry,
}

impl AppState {
    pub fn extension(&self) -> &AnnotationExtension {
        &self.extension
    }

    pub fn command_ids(&self) -> Vec<&'static str> {
        self.commands.ids()
    }

    pub async fn execute_command(&self, command: &str, arguments: Vec<Value>) -> Result<Value, String> {
        self.commands
            .dispatch(&self.extension, command, arguments)
            .await
    }

    pub fn on_active_editor_changed(&self) {
        if let Err(error) = self.extension.update_decorations() {
            tracing::warn!(error = %error, "decoration update after editor change failed");
        }
    }

    pub fn on_document_changed(&self) {
        if let Err(error) = self.extension.update_decorations() {
            tracing::warn!(error = %error, "decoration update after document change failed");
        }
    }
}

fn create_annotation(extension: &AnnotationExtension, _arguments: Vec<Value>) -> CommandFuture<'_> {
    Box::pin(async move {
        let response = extension.create_annotation().await.map_err(to_client_error)?;
        to_client_value(response)
    })
}

fn edit_annotation(extension: &AnnotationExtension, arguments: Vec<Value>) -> CommandFuture<'_> {
    Box::pin(async move {
        let target = optional_argument::<AnnotationRef>(arguments).map_err(to_client_error)?;
        let response = extension
            .edit_annotation(target)
            .await
            .map_err(to_client_error)?;
        to_client_value(response)
    })
}

fn show_annotations(extension: &AnnotationExtension, _arguments: Vec<Value>) -> CommandFuture<'_> {
    Box::pin(async move {
        let response = extension.show_annotations().map_err(to_client_error)?;
        to_client_value(response)
    })
}

fn jump_to_annotation(extension: &AnnotationExtension, arguments: Vec<Value>) -> CommandFuture<'_> {
    Box::pin(async move {
        let target = required_argument::<AnnotationRef>(arguments).map_err(to_client_error)?;
        let response = extension
            .jump_to_annotation(target)
            .map_err(to_client_error)?;
        to_client_value(response)
    })
}

fn refresh(extension: &AnnotationExtension, _arguments: Vec<Value>) -> CommandFuture<'_> {
    Box::pin(async move {
        let response = extension.refresh().map_err(to_client_error)?;
        to_client_value(response)
    })
}

fn command_table() -> CommandRegistry {
    CommandRegistry::new([
        (CREATE_ANNOTATION, create_annotation as CommandHandler),
        (EDIT_ANNOTATION, edit_annotation as CommandHandler),
        (SHOW_ANNOTATIONS, show_annotations as CommandHandler),
        (JUMP_TO_ANNOTATION, jump_to_annotation as CommandHandler),
        (REFRESH, refresh as CommandHandler),
    ])
}

pub fn activate(host: Arc<dyn EditorHost>, context: ExtensionContext) -> AppResult<AppState> {
    let settings = settings::from_host_value(&context.settings)?;
    if let Some(log_dir) = context.log_dir.as_deref() {
        if let Err(error) = init_tracing(log_dir, &settings.log_filter) {
            tracing::warn!(error = %error, "log file setup skipped");
        }
    }

    let extension = AnnotationExtension::new(host, &context.workspace_root, settings)?;
    let state = AppState {
        extension,
        commands: command_table(),
    };

    if let Err(error) = state.extension.update_decorations() {
        tracing::warn!(error = %error, "initial decoration update failed");
    }
    tracing::info!(
        store = %state.extension.store().path().to_string_lossy(),
        "annotation extension is now active"
    );
    Ok(state)
}

pub fn deactivate(state: AppState) {
    drop(state);
    tracing::info!("annotation extension is now deactivated");
}

fn init_tracing(log_dir: &Path, default_filter: &str) -> Result<(), String> {
    std::fs::create_dir_all(log_dir).map_err(|error| error.to_string())?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "annotations.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(default_filter))
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .json()
        .with_writer(non_blocking)
        .try_init()
        .map_err(|error| error.to_string())?;

    let _ = LOG_GUARD.set(guard);
    Ok(())
}

fn optional_argument<T: DeserializeOwned>(arguments: Vec<Value>) -> AppResult<Option<T>> {
    match arguments.into_iter().next() {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|error| AppError::InvalidArgument(error.to_string())),
    }
}

fn required_argument<T: DeserializeOwned>(arguments: Vec<Value>) -> AppResult<T> {
    optional_argument(arguments)?
        .ok_or_else(|| AppError::InvalidArgument("Missing command argument".to_string()))
}

fn to_client_value(value: impl Serialize) -> Result<Value, String> {
    serde_json::to_value(value).map_err(to_client_error)
}

fn to_client_error(error: impl std::fmt::Display) -> String {
    error.to_string()
}
