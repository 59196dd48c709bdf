use crate::errors::{AppError, AppResult};
use crate::host::EditorHost;
use crate::models::{Annotation, DecorationHandle, LineRange};
use crate::store::AnnotationStore;

/// Zero-based lines to highlight in `document_path`, in store order.
pub fn lines_for_document(annotations: &[Annotation], document_path: &str) -> AppResult<Vec<u32>> {
    annotations
        .iter()
        .filter(|record| record.file_path == document_path)
        .map(|record| {
            record.line_number.checked_sub(1).ok_or_else(|| {
                AppError::InvalidRecord(format!("{} has line number 0", record.file_path))
            })
        })
        .collect()
}

/// Re-applies highlights to the focused document. Without a focused document
/// this does nothing; stale line numbers surface as the host's rejection.
pub fn update(host: &dyn EditorHost, store: &AnnotationStore, handle: DecorationHandle) -> AppResult<usize> {
    let Some(editor) = host.active_editor() else {
        return Ok(0);
    };

    let annotations = store.load()?;
    let ranges = lines_for_document(&annotations, &editor.document_path)?
        .into_iter()
        .map(|line| host.line_range(&editor.document_path, line))
        .collect::<AppResult<Vec<LineRange>>>()?;

    host.set_decorations(handle, &editor.document_path, &ranges)?;
    Ok(ranges.len())
}
