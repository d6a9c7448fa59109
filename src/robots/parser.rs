//! Robots.txt parser implementation
//!
//! This module parses robots.txt content into a list of disallowed path
//! prefixes and matches candidate paths against them.

/// Parsed robots.txt rules for one host
///
/// Only `Disallow:` directives are honored; the directive name is matched
/// case-sensitively. A path is disallowed iff it starts with any collected
/// prefix. Blank `Disallow:` values are skipped, since an empty disallow
/// means allow-all in robots.txt and an empty prefix would match every path.
#[derive(Debug, Clone, Default)]
pub struct RobotsRules {
    disallow: Vec<String>,
}

impl RobotsRules {
    /// Parses robots.txt content into a set of disallowed path prefixes
    pub fn parse(content: &str) -> Self {
        let disallow = content
            .lines()
            .filter_map(|line| line.trim_start().strip_prefix("Disallow:"))
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(str::to_string)
            .collect();

        Self { disallow }
    }

    /// Creates a permissive rule set that allows everything
    ///
    /// Used when robots.txt cannot be fetched or yields no rules (fail-open).
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Checks whether a URL path is allowed
    pub fn is_allowed(&self, path: &str) -> bool {
        !self.disallow.iter().any(|prefix| path.starts_with(prefix))
    }

    /// Returns the number of disallow rules
    pub fn rule_count(&self) -> usize {
        self.disallow.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_all() {
        let rules = RobotsRules::allow_all();
        assert!(rules.is_allowed("/any/path"));
        assert!(rules.is_allowed("/admin"));
    }

    #[test]
    fn test_disallow_prefix_blocks_subtree() {
        let rules = RobotsRules::parse("User-agent: *\nDisallow: /private");
        assert!(!rules.is_allowed("/private"));
        assert!(!rules.is_allowed("/private/x"));
        assert!(rules.is_allowed("/public/x"));
    }

    #[test]
    fn test_disallow_root_blocks_everything() {
        let rules = RobotsRules::parse("User-agent: *\nDisallow: /");
        assert!(!rules.is_allowed("/"));
        assert!(!rules.is_allowed("/page"));
    }

    #[test]
    fn test_multiple_disallow_rules() {
        let rules = RobotsRules::parse("Disallow: /admin\nDisallow: /tmp");
        assert_eq!(rules.rule_count(), 2);
        assert!(!rules.is_allowed("/admin/users"));
        assert!(!rules.is_allowed("/tmp/file"));
        assert!(rules.is_allowed("/page"));
    }

    #[test]
    fn test_directive_name_is_case_sensitive() {
        let rules = RobotsRules::parse("disallow: /private\nDISALLOW: /tmp");
        assert_eq!(rules.rule_count(), 0);
        assert!(rules.is_allowed("/private"));
        assert!(rules.is_allowed("/tmp"));
    }

    #[test]
    fn test_empty_disallow_value_is_skipped() {
        let rules = RobotsRules::parse("User-agent: *\nDisallow:\nDisallow:   ");
        assert_eq!(rules.rule_count(), 0);
        assert!(rules.is_allowed("/anything"));
    }

    #[test]
    fn test_malformed_content_allows_everything() {
        let rules = RobotsRules::parse("This is not valid robots.txt {{{");
        assert!(rules.is_allowed("/any/path"));
    }

    #[test]
    fn test_empty_content_allows_everything() {
        let rules = RobotsRules::parse("");
        assert!(rules.is_allowed("/any/path"));
    }

    #[test]
    fn test_prefix_match_is_literal() {
        let rules = RobotsRules::parse("Disallow: /private");
        // Prefix matching is on the raw path string, not path segments.
        assert!(!rules.is_allowed("/privateer"));
    }
}
