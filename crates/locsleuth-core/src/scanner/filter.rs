//! Exclusion rules applied to every candidate before it is read.
//!
//! Four independent checks; the first one that matches wins:
//! 1. a path component equals a build-output directory name (`target`),
//! 2. a path component equals a test directory name (`test`),
//! 3. the file name contains the test marker (`test.rs`),
//! 4. the file name equals a generated-bindings name (`bindings.rs`).
//!
//! Directory rules look at every component of the path they are given. The
//! scanner passes the canonical absolute path, so components above the scan
//! root count too.

use std::path::Path;

/// Which rule excluded a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    BuildOutputDir,
    TestDir,
    TestFileName,
    GeneratedBindings,
}

impl Exclusion {
    pub fn label(self) -> &'static str {
        match self {
            Self::BuildOutputDir => "build output directory",
            Self::TestDir => "test directory",
            Self::TestFileName => "test file name",
            Self::GeneratedBindings => "generated bindings",
        }
    }
}

/// The rule set. `Default` gives the fixed rules for `.rs` sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRules {
    pub build_output_dir: String,
    pub test_dir: String,
    /// Substring of the file name marking a test file, e.g. `test.rs`.
    pub test_file_marker: String,
    pub generated_bindings: String,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self::for_suffix("rs")
    }
}

impl ExclusionRules {
    /// Default rules with the file-name checks built for `suffix`.
    pub fn for_suffix(suffix: &str) -> Self {
        Self {
            build_output_dir: "target".to_owned(),
            test_dir: "test".to_owned(),
            test_file_marker: format!("test.{suffix}"),
            generated_bindings: format!("bindings.{suffix}"),
        }
    }

    /// Return the rule that excludes `path`, or `None` if it is kept.
    pub fn check(&self, path: &Path) -> Option<Exclusion> {
        let has_component = |name: &str| path.iter().any(|c| c == name);

        if has_component(self.build_output_dir.as_str()) {
            return Some(Exclusion::BuildOutputDir);
        }
        if has_component(self.test_dir.as_str()) {
            return Some(Exclusion::TestDir);
        }

        let file_name = path.file_name()?.to_string_lossy();
        if file_name.contains(self.test_file_marker.as_str()) {
            Some(Exclusion::TestFileName)
        } else if file_name == self.generated_bindings.as_str() {
            Some(Exclusion::GeneratedBindings)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> ExclusionRules {
        ExclusionRules::default()
    }

    #[test]
    fn plain_source_is_kept() {
        assert_eq!(rules().check(Path::new("/repo/src/main.rs")), None);
        assert_eq!(rules().check(Path::new("/repo/crates/a/src/lib.rs")), None);
    }

    #[test]
    fn target_component_at_any_depth() {
        let r = rules();
        for p in [
            "/repo/target/debug/build/out.rs",
            "/repo/crates/x/target/gen.rs",
            "/target/lib.rs",
        ] {
            assert_eq!(r.check(Path::new(p)), Some(Exclusion::BuildOutputDir), "{p}");
        }
    }

    #[test]
    fn target_must_match_whole_component() {
        let r = rules();
        assert_eq!(r.check(Path::new("/repo/targets/lib.rs")), None);
        assert_eq!(r.check(Path::new("/repo/my_target/lib.rs")), None);
        assert_eq!(r.check(Path::new("/repo/src/target.rs")), None);
    }

    #[test]
    fn test_component_at_any_depth() {
        let r = rules();
        assert_eq!(
            r.check(Path::new("/repo/test/fixtures/big.rs")),
            Some(Exclusion::TestDir)
        );
        assert_eq!(
            r.check(Path::new("/repo/crates/a/src/test/mod.rs")),
            Some(Exclusion::TestDir)
        );
        // `tests/` is a different name and is not excluded by this rule.
        assert_eq!(r.check(Path::new("/repo/tests/e2e.rs")), None);
    }

    #[test]
    fn test_file_name_outside_test_dirs() {
        let r = rules();
        assert_eq!(
            r.check(Path::new("/repo/src/parser_test.rs")),
            Some(Exclusion::TestFileName)
        );
        assert_eq!(
            r.check(Path::new("/repo/src/test.rs")),
            Some(Exclusion::TestFileName)
        );
        // Substring match: anything ending in "test" before the extension.
        assert_eq!(
            r.check(Path::new("/repo/src/latest.rs")),
            Some(Exclusion::TestFileName)
        );
        assert_eq!(r.check(Path::new("/repo/src/tests.rs")), None);
        assert_eq!(r.check(Path::new("/repo/src/test_utils.rs")), None);
    }

    #[test]
    fn generated_bindings_exact_name() {
        let r = rules();
        assert_eq!(
            r.check(Path::new("/repo/src/ffi/bindings.rs")),
            Some(Exclusion::GeneratedBindings)
        );
        assert_eq!(r.check(Path::new("/repo/src/my_bindings.rs")), None);
        assert_eq!(r.check(Path::new("/repo/src/bindings.rs.bak")), None);
    }

    #[test]
    fn rules_follow_suffix() {
        let r = ExclusionRules::for_suffix("py");
        assert_eq!(r.test_file_marker, "test.py");
        assert_eq!(r.generated_bindings, "bindings.py");
        assert!(r.check(Path::new("/repo/unit_test.py")).is_some());
        assert!(r.check(Path::new("/repo/unit_test.rs")).is_none());
    }

    #[test]
    fn labels_are_distinct() {
        let all = [
            Exclusion::BuildOutputDir,
            Exclusion::TestDir,
            Exclusion::TestFileName,
            Exclusion::GeneratedBindings,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
