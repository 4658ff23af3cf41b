use crate::app::error::CombineError;
use crate::app::models::{FileEntry, GlobPattern, PathPattern, RuntimeConfig};
use ignore::WalkBuilder;
use pathdiff::diff_paths;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Scanner {
    root: PathBuf,
    exclude_prefixes: Vec<String>,
    output_file: Option<PathBuf>,
}

impl Scanner {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            root: config.root_dir.clone(),
            exclude_prefixes: config.exclude_prefixes(),
            // Only resolvable once a previous run has written it.
            output_file: fs::canonicalize(&config.output_file).ok(),
        }
    }

    /// Expands one pattern into entries, appended in traversal order.
    ///
    /// A walk error abandons the rest of that glob; entries found before it stay in `entries`.
    pub fn expand(
        &self,
        pattern: &PathPattern,
        entries: &mut Vec<FileEntry>,
    ) -> Result<(), CombineError> {
        match pattern {
            PathPattern::Exclude(_) => Ok(()),
            PathPattern::Literal(path) => {
                entries.extend(self.candidate(&self.full_path(path)));
                Ok(())
            }
            PathPattern::Glob(path) => {
                let glob = GlobPattern::from_full_path(&self.full_path(path));
                self.walk_glob(&glob, entries)
            }
        }
    }

    /// Path relative to the root, as written in headers and tested against exclusions.
    pub fn relative_path(&self, path: &Path) -> String {
        diff_paths(path, &self.root)
            .unwrap_or_else(|| path.to_path_buf())
            .to_string_lossy()
            .into_owned()
    }

    /// Plain string prefix test: `src` also excludes `srcfoo/file`.
    pub fn is_excluded(&self, relative: &str) -> bool {
        self.exclude_prefixes
            .iter()
            .any(|prefix| relative.starts_with(prefix.as_str()))
    }

    fn full_path(&self, pattern: &str) -> PathBuf {
        // Patterns are always relative to the root, even with a leading slash.
        self.root.join(pattern.trim_start_matches('/'))
    }

    fn walk_glob(
        &self,
        glob: &GlobPattern,
        entries: &mut Vec<FileEntry>,
    ) -> Result<(), CombineError> {
        let walker = WalkBuilder::new(&glob.base_dir)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for result in walker {
            let entry = result.map_err(|source| CombineError::Walk {
                path: glob.base_dir.clone(),
                source,
            })?;

            let is_dir = entry.file_type().map_or(true, |ft| ft.is_dir());
            if is_dir || !glob.matches(entry.path()) {
                continue;
            }

            entries.extend(self.candidate(entry.path()));
        }

        Ok(())
    }

    fn candidate(&self, path: &Path) -> Option<FileEntry> {
        let relative_path = self.relative_path(path);

        if self.is_excluded(&relative_path) {
            log::debug!("Excluded {}", relative_path);
            return None;
        }

        if let Some(output) = &self.output_file {
            if fs::canonicalize(path).ok().as_ref() == Some(output) {
                log::debug!("Skipping output file {}", relative_path);
                return None;
            }
        }

        Some(FileEntry {
            path: path.to_path_buf(),
            relative_path,
        })
    }
}
