use crate::app::error::CombineError;
use crate::app::models::FileEntry;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Accumulates file blocks for one run and writes them out at the end.
pub struct OutputGenerator {
    comment_symbol: String,
    buffer: String,
}

impl OutputGenerator {
    pub fn new(comment_symbol: &str) -> Self {
        Self {
            comment_symbol: comment_symbol.to_string(),
            buffer: String::new(),
        }
    }

    pub fn format_block(comment_symbol: &str, relative_path: &str, content: &str) -> String {
        format!("{} {}\n{}\n\n", comment_symbol, relative_path, content)
    }

    /// Reads the entry and appends its block. Nothing is appended on failure.
    ///
    /// Content that is not valid UTF-8 counts as a read failure; the output is UTF-8 text.
    pub fn push_file(&mut self, entry: &FileEntry) -> Result<(), CombineError> {
        let content = fs::read_to_string(&entry.path).map_err(|source| CombineError::Read {
            path: entry.path.clone(),
            source,
        })?;

        self.buffer.push_str(&Self::format_block(
            &self.comment_symbol,
            &entry.relative_path,
            &content,
        ));
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Truncates and overwrites `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.buffer)
            .context(format!("Error writing combined file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn block_header_is_symbol_space_path() {
        assert_eq!(
            OutputGenerator::format_block("//", "src/lib.rs", "fn x() {}"),
            "// src/lib.rs\nfn x() {}\n\n"
        );
    }

    #[test]
    fn push_file_appends_in_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "A").unwrap();
        fs::write(dir.path().join("b.txt"), "B\n").unwrap();

        let mut out = OutputGenerator::new("#");
        for name in ["b.txt", "a.txt"] {
            out.push_file(&FileEntry {
                path: dir.path().join(name),
                relative_path: name.to_string(),
            })
            .unwrap();
        }

        assert_eq!(out.as_str(), "# b.txt\nB\n\n\n# a.txt\nA\n\n");
    }

    #[test]
    fn unreadable_file_leaves_buffer_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let binary = dir.path().join("blob.bin");
        fs::write(&binary, [0xff, 0xfe, 0x00]).unwrap();

        let mut out = OutputGenerator::new("#");
        for path in [dir.path().join("gone.txt"), binary.clone()] {
            let err = out
                .push_file(&FileEntry {
                    path: path.clone(),
                    relative_path: "x".to_string(),
                })
                .unwrap_err();
            assert_eq!(err.path(), &path);
        }
        assert_eq!(out.as_str(), "");
    }

    #[test]
    fn write_overwrites_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("combined.txt");
        fs::write(&target, "stale content that is longer").unwrap();

        let out = OutputGenerator::new("#");
        out.write_to(&target).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let target: PathBuf = dir.path().join("no").join("such").join("out.txt");
        assert!(OutputGenerator::new("#").write_to(&target).is_err());
    }
}
