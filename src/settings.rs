use crate::errors::{AppError, AppResult};
use crate::models::ExtensionSettings;
use serde_json::Value;

/// Reads the host's configuration section. Absent keys fall back to defaults.
pub fn from_host_value(value: &Value) -> AppResult<ExtensionSettings> {
    if value.is_null() {
        return Ok(ExtensionSettings::default());
    }
    let settings: ExtensionSettings = serde_json::from_value(value.clone())
        .map_err(|error| AppError::InvalidArgument(format!("Invalid settings: {}", error)))?;
    validate(&settings)?;
    Ok(settings)
}

fn validate(settings: &ExtensionSettings) -> AppResult<()> {
    let name = settings.store_file_name.trim();
    if name.is_empty() || name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(AppError::InvalidArgument(format!(
            "storeFileName must be a plain file name, got '{}'",
            settings.store_file_name
        )));
    }
    Ok(())
}
