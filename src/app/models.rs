use crate::app::error::CombineError;
use std::path::{Path, PathBuf};

pub const DEFAULT_COMMENT_SYMBOL: &str = "#";
pub const DEFAULT_OUTPUT_FILE: &str = "combined.txt";

/// Represents the final configuration after defaults and CLI overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub root_dir: PathBuf,
    pub comment_symbol: String,
    pub patterns: Vec<PathPattern>,
    pub output_file: PathBuf,
}

impl RuntimeConfig {
    /// Exclusion prefixes in configuration order, with the leading `!` stripped.
    pub fn exclude_prefixes(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter_map(|p| match p {
                PathPattern::Exclude(prefix) => Some(prefix.clone()),
                _ => None,
            })
            .collect()
    }
}

/// One entry of the configured `paths` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// `!prefix`: root-relative paths starting with `prefix` are never included.
    Exclude(String),
    /// Contains `*`: walk the pattern's directory, keep files with its extension.
    Glob(String),
    /// A single file, resolved against the root directory.
    Literal(String),
}

impl PathPattern {
    pub fn parse(raw: &str) -> Self {
        if let Some(prefix) = raw.strip_prefix('!') {
            PathPattern::Exclude(prefix.to_string())
        } else if raw.contains('*') {
            PathPattern::Glob(raw.to_string())
        } else {
            PathPattern::Literal(raw.to_string())
        }
    }
}

/// A glob pattern reduced to what matching actually uses: the directory
/// to walk and the extension suffix a file must end with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobPattern {
    pub base_dir: PathBuf,
    /// Text from the last `.` of the final segment; empty matches every file.
    pub extension: String,
}

impl GlobPattern {
    pub fn from_full_path(full_path: &Path) -> Self {
        let base_dir = full_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        let last_segment = full_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let extension = last_segment
            .rfind('.')
            .map(|idx| last_segment[idx..].to_string())
            .unwrap_or_default();

        Self {
            base_dir,
            extension,
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.to_string_lossy().ends_with(&self.extension)
    }
}

/// A file selected for the combined output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub relative_path: String,
}

/// What a combine run produced. Errors have already been logged when they occurred.
#[derive(Debug)]
pub struct CombineSummary {
    pub output_file: PathBuf,
    pub included: Vec<String>,
    pub errors: Vec<CombineError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_classifies_patterns() {
        assert_eq!(
            PathPattern::parse("!sub/"),
            PathPattern::Exclude("sub/".to_string())
        );
        assert_eq!(
            PathPattern::parse("src/*.go"),
            PathPattern::Glob("src/*.go".to_string())
        );
        assert_eq!(
            PathPattern::parse("main.go"),
            PathPattern::Literal("main.go".to_string())
        );
        // Exclusion wins even when the prefix contains a wildcard
        assert_eq!(
            PathPattern::parse("!gen/*"),
            PathPattern::Exclude("gen/*".to_string())
        );
    }

    #[test]
    fn glob_splits_directory_and_extension() {
        let glob = GlobPattern::from_full_path(Path::new("proj/src/*.go"));
        assert_eq!(glob.base_dir, PathBuf::from("proj/src"));
        assert_eq!(glob.extension, ".go");

        let bare = GlobPattern::from_full_path(Path::new("*.rs"));
        assert_eq!(bare.base_dir, PathBuf::from("."));
        assert_eq!(bare.extension, ".rs");
    }

    #[test]
    fn glob_without_extension_matches_everything() {
        let glob = GlobPattern::from_full_path(Path::new("proj/docs/*"));
        assert_eq!(glob.extension, "");
        assert!(glob.matches(Path::new("proj/docs/README")));
        assert!(glob.matches(Path::new("proj/docs/guide.md")));
    }

    #[test]
    fn glob_extension_is_a_suffix_test() {
        let glob = GlobPattern::from_full_path(Path::new("proj/*.go"));
        assert!(glob.matches(Path::new("proj/a.go")));
        assert!(glob.matches(Path::new("proj/nested/b.go")));
        assert!(!glob.matches(Path::new("proj/a.go.bak")));
        assert!(!glob.matches(Path::new("proj/ago")));
    }

    #[test]
    fn exclude_prefixes_keep_order() {
        let config = RuntimeConfig {
            root_dir: PathBuf::from("."),
            comment_symbol: DEFAULT_COMMENT_SYMBOL.to_string(),
            patterns: ["!b", "a.rs", "!a"].iter().map(|p| PathPattern::parse(p)).collect(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        };
        assert_eq!(config.exclude_prefixes(), vec!["b", "a"]);
    }
}
