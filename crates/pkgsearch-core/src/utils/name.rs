//! Package name helpers.

/// Extract the short package name from a repository slug.
///
/// `owner/name` and `owner/name@version` both yield `name`. A slug with no
/// separator, or one that would leave an empty name, is returned unchanged.
pub fn parse_name(repo: &str) -> String {
    let without_version = repo.split_once('@').map_or(repo, |(base, _)| base);
    let short = without_version
        .rsplit_once('/')
        .map_or(without_version, |(_, name)| name);

    if short.is_empty() {
        repo.to_string()
    } else {
        short.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_and_name() {
        assert_eq!(parse_name("clibs/list"), "list");
        assert_eq!(parse_name("foo/bar"), "bar");
    }

    #[test]
    fn test_bare_name_is_unchanged() {
        assert_eq!(parse_name("list"), "list");
        assert_eq!(parse_name(""), "");
    }

    #[test]
    fn test_version_suffix_is_stripped() {
        assert_eq!(parse_name("stephenmathieson/trim.c@0.0.2"), "trim.c");
        assert_eq!(parse_name("bar@1.2.3"), "bar");
    }

    #[test]
    fn test_degenerate_slugs_fall_back_to_input() {
        assert_eq!(parse_name("owner/"), "owner/");
        assert_eq!(parse_name("@1.0.0"), "@1.0.0");
    }

    #[test]
    fn test_nested_path_takes_last_segment() {
        assert_eq!(parse_name("group/sub/pkg"), "pkg");
    }
}
