use crate::bom_graph::domain::{OriginDescriptor, PackageCoordinate};
use std::collections::HashMap;

/// Maps tracker origin descriptors onto package coordinates.
///
/// The tracker labels origins with its own ecosystem namespaces, some of
/// which differ from the coordinate type vocabulary. The resolver carries
/// that translation table and splits the raw identifier into namespace,
/// name and version tokens.
pub struct CoordinateResolver {
    type_mapping: HashMap<String, String>,
}

impl Default for CoordinateResolver {
    fn default() -> Self {
        let type_mapping = [
            ("", "generic"),
            ("long_tail", "generic"),
            ("centos", "rpm"),
            ("debian", "deb"),
            ("npmjs", "npm"),
            ("alpine", "alpine"),
            ("bitbucket", "bitbucket"),
            ("cargo", "cargo"),
            ("composer", "composer"),
            ("docker", "docker"),
            ("gem", "gem"),
            ("github", "github"),
            ("golang", "golang"),
            ("hex", "hex"),
            ("maven", "maven"),
            ("nuget", "nuget"),
            ("pypi", "pypi"),
        ]
        .into_iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect();

        Self { type_mapping }
    }
}

impl CoordinateResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves an origin descriptor into a package coordinate.
    ///
    /// Resolution is total: identifiers with missing tokens resolve to a
    /// coordinate with empty fields rather than failing, leaving the
    /// caller to judge whether the result is usable.
    pub fn resolve(&self, origin: &OriginDescriptor) -> PackageCoordinate {
        let ptype = self
            .type_mapping
            .get(&origin.ecosystem_namespace)
            .map(String::as_str)
            .unwrap_or("generic");

        let separator = match origin.ecosystem_namespace.as_str() {
            "maven" | "github" => ':',
            _ => '/',
        };

        let tokens: Vec<&str> = origin.raw_identifier.split(separator).collect();
        let (namespace, name, version) = split_identifier(&tokens);

        PackageCoordinate::new(ptype, namespace, name, version)
    }
}

/// Splits identifier tokens counting from the end: the last token is the
/// version, the one before it the name, and whatever remains forms the
/// namespace. Missing positions become empty strings.
fn split_identifier<'a>(tokens: &'a [&'a str]) -> (String, &'a str, &'a str) {
    let version = tokens.last().copied().unwrap_or("");
    let name = tokens
        .len()
        .checked_sub(2)
        .and_then(|i| tokens.get(i).copied())
        .unwrap_or("");
    let namespace = if tokens.len() > 2 {
        tokens[..tokens.len() - 2].join("/")
    } else {
        String::new()
    };
    (namespace, name, version)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(namespace: &str, identifier: &str) -> PackageCoordinate {
        CoordinateResolver::new().resolve(&OriginDescriptor::new(namespace, identifier))
    }

    // ========== ecosystem mapping tests ==========

    #[test]
    fn test_maps_known_ecosystems_to_coordinate_types() {
        assert_eq!(resolve("npmjs", "lodash/4.17.21").to_string(), "pkg:npm/lodash@4.17.21");
        assert_eq!(resolve("debian", "bash/5.1").to_string(), "pkg:deb/bash@5.1");
        assert_eq!(resolve("centos", "glibc/2.34").to_string(), "pkg:rpm/glibc@2.34");
        assert_eq!(resolve("long_tail", "thing/1.0").to_string(), "pkg:generic/thing@1.0");
    }

    #[test]
    fn test_known_ecosystems_keep_their_type() {
        assert_eq!(resolve("pypi", "requests/2.31.0").to_string(), "pkg:pypi/requests@2.31.0");
        assert_eq!(resolve("cargo", "serde/1.0.0").to_string(), "pkg:cargo/serde@1.0.0");
    }

    #[test]
    fn test_empty_ecosystem_becomes_generic() {
        assert_eq!(resolve("", "mystery/0.1").to_string(), "pkg:generic/mystery@0.1");
    }

    #[test]
    fn test_unknown_ecosystem_becomes_generic() {
        assert_eq!(
            resolve("somefuture", "thing/1.0").to_string(),
            "pkg:generic/thing@1.0"
        );
    }

    // ========== identifier splitting tests ==========

    #[test]
    fn test_maven_uses_colon_separator() {
        let coordinate = resolve("maven", "org.apache.commons:commons-lang3:3.12.0");
        assert_eq!(
            coordinate.to_string(),
            "pkg:maven/org.apache.commons/commons-lang3@3.12.0"
        );
    }

    #[test]
    fn test_github_uses_colon_separator() {
        let coordinate = resolve("github", "rust-lang:cargo:0.70.0");
        assert_eq!(coordinate.to_string(), "pkg:github/rust-lang/cargo@0.70.0");
    }

    #[test]
    fn test_deep_namespace_joins_remaining_tokens() {
        let coordinate = resolve("golang", "github.com/stretchr/testify/v1.8.0");
        assert_eq!(coordinate.namespace(), "github.com/stretchr");
        assert_eq!(coordinate.name(), "testify");
        assert_eq!(coordinate.version(), "v1.8.0");
    }

    #[test]
    fn test_short_identifiers_leave_fields_empty() {
        let coordinate = resolve("npmjs", "4.17.21");
        assert_eq!(coordinate.name(), "");
        assert_eq!(coordinate.version(), "4.17.21");

        let coordinate = resolve("npmjs", "");
        assert_eq!(coordinate.name(), "");
        assert_eq!(coordinate.version(), "");
    }
}
