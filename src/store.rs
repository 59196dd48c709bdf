use crate::errors::{AppError, AppResult};
use crate::models::Annotation;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

const JSON_INDENT: &[u8] = b"    ";

/// The workspace's backing file. Mutations are serialized through `write_lock`
/// so two overlapping commands cannot drop each other's records.
#[derive(Debug)]
pub struct AnnotationStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl AnnotationStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn for_workspace(workspace_root: &Path, file_name: &str) -> Self {
        Self::new(workspace_root.join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> AppResult<Vec<Annotation>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(AppError::Io(error.to_string())),
        };
        serde_json::from_slice(&bytes).map_err(|error| {
            AppError::StoreCorrupt(format!("{}: {}", self.path.to_string_lossy(), error))
        })
    }

    pub fn save(&self, annotations: &[Annotation]) -> AppResult<()> {
        let bytes = encode_pretty(annotations)?;
        let temp = self.temp_path();
        fs::write(&temp, bytes).map_err(|error| AppError::Io(error.to_string()))?;
        if let Err(error) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(AppError::Io(error.to_string()));
        }
        tracing::debug!(
            path = %self.path.to_string_lossy(),
            count = annotations.len(),
            "annotation store written"
        );
        Ok(())
    }

    pub async fn append(&self, annotation: Annotation) -> AppResult<Annotation> {
        let _guard = self.write_lock.lock().await;
        let mut annotations = self.load()?;
        annotations.push(annotation.clone());
        self.save(&annotations)?;
        Ok(annotation)
    }

    pub async fn update_text(&self, file_path: &str, line_number: u32, text: String) -> AppResult<Annotation> {
        let _guard = self.write_lock.lock().await;
        let mut annotations = self.load()?;
        let Some(record) = annotations
            .iter_mut()
            .find(|record| record.matches(file_path, line_number))
        else {
            return Err(AppError::NotFound(format!(
                "No annotation at {}:{}",
                file_path, line_number
            )));
        };
        record.annotation = text;
        let updated = record.clone();
        self.save(&annotations)?;
        Ok(updated)
    }

    pub fn find(&self, file_path: &str, line_number: u32) -> AppResult<Option<Annotation>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|record| record.matches(file_path, line_number)))
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "annotations".to_string());
        self.path
            .with_file_name(format!("{}.{}.tmp", name, std::process::id()))
    }
}

fn encode_pretty(annotations: &[Annotation]) -> AppResult<Vec<u8>> {
    let mut bytes = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
    annotations.serialize(&mut serializer)?;
    Ok(bytes)
}
