//! Fixed user-facing text.

/// Widget title.
pub const TITLE: &str = "サイゼリヤロゴチャレンジャー";

/// Shown in place of the display sequence until the glyphs are extracted.
pub const LOADING_PLACEHOLDER: &str = "読み込み中...";

/// Label of the regenerate action.
pub const REGENERATE_LABEL: &str = "再チャレンジ！";

/// Label of the download action.
pub const DOWNLOAD_LABEL: &str = "PNG画像としてダウンロード";

/// File name the exported composition is saved under.
pub const EXPORT_FILE_NAME: &str = "saizeriya-logo.png";
