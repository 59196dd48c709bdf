use crate::errors::AppError;
use crate::extension::AnnotationExtension;
use serde_json::Value;
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

pub const CREATE_ANNOTATION: &str = "annotations.createAnnotation";
pub const EDIT_ANNOTATION: &str = "annotations.editAnnotation";
pub const SHOW_ANNOTATIONS: &str = "annotations.showAnnotations";
pub const JUMP_TO_ANNOTATION: &str = "annotations.jumpToAnnotation";
pub const REFRESH: &str = "annotations.refresh";

pub type CommandFuture<'a> = Pin<Box<dyn Future<Output = Result<Value, String>> + Send + 'a>>;
pub type CommandHandler = for<'a> fn(&'a AnnotationExtension, Vec<Value>) -> CommandFuture<'a>;

/// Command id to handler, fixed once activation has built it.
pub struct CommandRegistry {
    handlers: BTreeMap<&'static str, CommandHandler>,
}

impl CommandRegistry {
    pub fn new(entries: impl IntoIterator<Item = (&'static str, CommandHandler)>) -> Self {
        Self {
            handlers: entries.into_iter().collect(),
        }
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.handlers.keys().copied().collect()
    }

    pub fn contains(&self, command: &str) -> bool {
        self.handlers.contains_key(command)
    }

    pub async fn dispatch(
        &self,
        extension: &AnnotationExtension,
        command: &str,
        arguments: Vec<Value>,
    ) -> Result<Value, String> {
        let Some(handler) = self.handlers.get(command) else {
            return Err(AppError::UnknownCommand(command.to_string()).to_string());
        };

        let result = handler(extension, arguments).await;
        if let Err(error) = &result {
            tracing::warn!(command = %command, error = %error, "command failed");
        }
        result
    }
}
