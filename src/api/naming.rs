//! Candidate naming for numbered temporary files.

use std::path::{Component, Path, PathBuf};

/// How candidate names are numbered.
///
/// A candidate is `dir/<prefix><index><suffix>` with the index zero-padded
/// to at least `min_width` digits. Indices wider than `min_width` are
/// written in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingScheme {
    /// First index probed (default: 1)
    pub first_index: u32,

    /// Last index probed, inclusive (default: 9999)
    pub last_index: u32,

    /// Minimum number of digits (default: 3)
    pub min_width: usize,
}

impl NamingScheme {
    /// The default scheme: `001` through `9999`.
    pub const DEFAULT: NamingScheme = NamingScheme {
        first_index: 1,
        last_index: 9999,
        min_width: 3,
    };

    /// Builder pattern: limit the probe to `first..=last`.
    pub fn with_range(mut self, first: u32, last: u32) -> Self {
        self.first_index = first;
        self.last_index = last;
        self
    }

    /// Builder pattern: set the minimum digit count.
    pub fn with_min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    /// Indices in probe order.
    pub fn indices(&self) -> std::ops::RangeInclusive<u32> {
        self.first_index..=self.last_index
    }

    /// Number of candidates this scheme can produce.
    pub fn capacity(&self) -> u64 {
        if self.last_index < self.first_index {
            0
        } else {
            u64::from(self.last_index - self.first_index) + 1
        }
    }

    /// File name for `index`, without the directory.
    pub fn file_name(&self, prefix: &str, index: u32, suffix: &str) -> String {
        format!("{}{:0width$}{}", prefix, index, suffix, width = self.min_width)
    }

    /// Full candidate path for `index`.
    ///
    /// The name always lands under `dir`: root and drive components in
    /// the prefix or suffix are dropped rather than replacing `dir`.
    pub fn candidate(&self, dir: &Path, prefix: &str, index: u32, suffix: &str) -> PathBuf {
        let name = self.file_name(prefix, index, suffix);
        let mut path = dir.to_path_buf();
        for component in Path::new(&name).components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {}
                other => path.push(other),
            }
        }
        path
    }

    /// Name of the first candidate, used to describe the whole pattern.
    pub fn pattern(&self, prefix: &str, suffix: &str) -> String {
        self.file_name(prefix, self.first_index, suffix)
    }
}

impl Default for NamingScheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scheme() {
        let scheme = NamingScheme::default();
        assert_eq!(scheme.first_index, 1);
        assert_eq!(scheme.last_index, 9999);
        assert_eq!(scheme.capacity(), 9999);
    }

    #[test]
    fn test_zero_padding() {
        let scheme = NamingScheme::default();
        assert_eq!(scheme.file_name("profile", 1, ".pb"), "profile001.pb");
        assert_eq!(scheme.file_name("profile", 42, ".pb"), "profile042.pb");
        assert_eq!(scheme.file_name("profile", 999, ".pb"), "profile999.pb");
        // Wider than the minimum is not truncated
        assert_eq!(scheme.file_name("profile", 1000, ".pb"), "profile1000.pb");
        assert_eq!(scheme.file_name("", 7, ""), "007");
    }

    #[test]
    fn test_candidate_joins_dir() {
        let scheme = NamingScheme::default();
        let path = scheme.candidate(Path::new("/tmp/x"), "profile", 2, ".pb");
        assert_eq!(path, PathBuf::from("/tmp/x/profile002.pb"));
    }

    #[test]
    fn test_absolute_prefix_stays_under_dir() {
        let scheme = NamingScheme::default();
        assert_eq!(
            scheme.candidate(Path::new("/tmp/x"), "/abs", 1, ""),
            PathBuf::from("/tmp/x/abs001")
        );
        assert_eq!(
            scheme.candidate(Path::new("/tmp/x"), "//tmp/foo_", 7, ".pb"),
            PathBuf::from("/tmp/x/tmp/foo_007.pb")
        );
    }

    #[test]
    fn test_nested_prefix() {
        let scheme = NamingScheme::default();
        let path = scheme.candidate(Path::new("/tmp/x"), "sub/run", 3, ".log");
        assert_eq!(path, PathBuf::from("/tmp/x/sub/run003.log"));
    }

    #[test]
    fn test_custom_range() {
        let scheme = NamingScheme::default().with_range(5, 7).with_min_width(1);
        assert_eq!(scheme.indices().collect::<Vec<_>>(), vec![5, 6, 7]);
        assert_eq!(scheme.capacity(), 3);
        assert_eq!(scheme.pattern("a", ".b"), "a5.b");

        let empty = NamingScheme::default().with_range(3, 2);
        assert_eq!(empty.capacity(), 0);
        assert_eq!(empty.indices().count(), 0);
    }
}
