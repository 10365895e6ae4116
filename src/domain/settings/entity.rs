use crate::domain::version::VersionStyle;
use crate::error::AppResult;
use serde::{Deserialize, Serialize};

/// Default export folder name (Chinese editing convention)
const DEFAULT_EXPORT_FOLDER_NAME: &str = "导出";
const DEFAULT_VERSION_PREFIX: &str = "V";
const DEFAULT_ARCHIVE_FOLDER_TEMPLATE: &str = "YYYY|MM|DD_项目名称";

/// How new version strings are labelled, as persisted by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionMode {
    Numeric,
    Chinese,
}

impl std::fmt::Display for VersionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionMode::Numeric => write!(f, "numeric"),
            VersionMode::Chinese => write!(f, "chinese"),
        }
    }
}

/// The settings document the host persists for this panel.
/// The engine never owns these as global state; callers read a document,
/// derive the per-call configuration from it, and pass that into the
/// resolvers explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportSettings {
    /// Name of the export folder scanned for existing versions
    pub export_folder_name: String,

    /// Version label scheme
    pub version_mode: VersionMode,

    /// Prefix for numeric version labels (V1, V2, ...)
    pub version_prefix: String,

    /// Whether finished exports are archived
    pub archive_enabled: bool,

    /// Root folder the archive hierarchy is created under
    pub archive_base_path: String,

    /// Folder-level template resolved by the archive template service
    pub archive_folder_template: String,

    /// Back up the sequence before exporting
    pub backup_sequence_before_export: bool,

    /// Back up the project file before exporting
    pub backup_project_before_export: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            export_folder_name: DEFAULT_EXPORT_FOLDER_NAME.to_string(),
            version_mode: VersionMode::Numeric,
            version_prefix: DEFAULT_VERSION_PREFIX.to_string(),
            archive_enabled: false,
            archive_base_path: String::new(),
            archive_folder_template: DEFAULT_ARCHIVE_FOLDER_TEMPLATE.to_string(),
            backup_sequence_before_export: false,
            backup_project_before_export: false,
        }
    }
}

impl ExportSettings {
    /// Loads a settings document from its persisted JSON form.
    /// Missing fields fall back to defaults; empty strings for fields that
    /// must carry a value also fall back, matching the host's historical
    /// load behavior.
    pub fn from_json(content: &str) -> AppResult<Self> {
        let mut settings: ExportSettings = serde_json::from_str(content)?;

        if settings.export_folder_name.trim().is_empty() {
            settings.export_folder_name = DEFAULT_EXPORT_FOLDER_NAME.to_string();
        }
        if settings.version_prefix.is_empty() {
            settings.version_prefix = DEFAULT_VERSION_PREFIX.to_string();
        }
        if settings.archive_folder_template.is_empty() {
            settings.archive_folder_template = DEFAULT_ARCHIVE_FOLDER_TEMPLATE.to_string();
        }

        Ok(settings)
    }

    /// Serializes the document the way the host persists it
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The per-call version rendering configuration for the resolver
    pub fn version_style(&self) -> VersionStyle {
        match self.version_mode {
            VersionMode::Numeric => VersionStyle::numeric(self.version_prefix.clone()),
            VersionMode::Chinese => VersionStyle::chinese(),
        }
    }
}
