//! README rendering context.
//!
//! ## Built-in Variables
//!
//! | Variable      | Example                  | Source                   |
//! |---------------|--------------------------|--------------------------|
//! | `NAME`        | "WIDGET"                 | `name`, upper-cased      |
//! | `NAME_RAW`    | "widget"                 | `name`                   |
//! | `VERSION`     | "1.2.0-rc.1"             | `version`, formatted     |
//! | `DESCRIPTION` | "Makes widgets"          | `description`            |
//! | `TENANT`      | "acme"                   | `tenant`                 |
//! | `REPO`        | "https://…/widget"       | `repo`                   |
//! | `ICON`        | "assets/icon.png"        | prompt or configuration  |
//! | `ARCH`        | "linux_amd64, windows"   | `arch`, or `local`       |

use std::collections::HashMap;

use crate::domain::package::PackageInfo;

/// Variable map for `{{KEY}}` substitution.
#[derive(Debug, Clone, Default)]
pub struct ReadmeContext {
    variables: HashMap<String, String>,
}

impl ReadmeContext {
    /// Derive the standard variables from a package and icon path.
    pub fn new(info: &PackageInfo, icon: impl Into<String>) -> Self {
        let arch = if info.arch().is_empty() {
            "local".to_owned()
        } else {
            info.arch().join(", ")
        };

        Self::default()
            .with_variable("NAME", info.name().to_uppercase())
            .with_variable("NAME_RAW", info.name())
            .with_variable("VERSION", info.version().to_string())
            .with_variable("DESCRIPTION", info.description())
            .with_variable("TENANT", info.tenant())
            .with_variable("REPO", info.repo())
            .with_variable("ICON", icon)
            .with_variable("ARCH", arch)
    }

    /// Add or override a variable.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{KEY}}` placeholder in a single left-to-right pass.
    ///
    /// - `{{UNKNOWN}}` stays as literal `{{UNKNOWN}}`
    /// - substituted values are never re-scanned
    /// - an unterminated `{{` is copied through
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let Some(end) = after.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            let key = &after[..end];
            match self.get(key.trim()) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str("{{");
                    out.push_str(key);
                    out.push_str("}}");
                }
            }
            rest = &after[end + 2..];
        }

        out.push_str(rest);
        out
    }

    /// Placeholder keys in `template` that have no variable, in order of
    /// first appearance.
    pub fn unresolved<'t>(&self, template: &'t str) -> Vec<&'t str> {
        let mut missing: Vec<&str> = Vec::new();
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else { break };

            let key = after[..end].trim();
            if self.get(key).is_none() && !missing.contains(&key) {
                missing.push(key);
            }
            rest = &after[end + 2..];
        }

        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::version::SemanticVersion;

    fn info(arch: Vec<String>) -> PackageInfo {
        PackageInfo::builder()
            .name("widget")
            .version(SemanticVersion::must_parse("v1.2-rc.1"))
            .description("Makes widgets")
            .tenant("acme")
            .repo("https://example.com/widget")
            .arch(arch)
            .build()
            .unwrap()
    }

    #[test]
    fn standard_variables() {
        let ctx = ReadmeContext::new(&info(vec![]), "img/logo.svg");

        assert_eq!(ctx.get("NAME"), Some("WIDGET"));
        assert_eq!(ctx.get("NAME_RAW"), Some("widget"));
        assert_eq!(ctx.get("VERSION"), Some("1.2.0-rc.1"));
        assert_eq!(ctx.get("DESCRIPTION"), Some("Makes widgets"));
        assert_eq!(ctx.get("TENANT"), Some("acme"));
        assert_eq!(ctx.get("REPO"), Some("https://example.com/widget"));
        assert_eq!(ctx.get("ICON"), Some("img/logo.svg"));
        assert_eq!(ctx.get("ARCH"), Some("local"));
    }

    #[test]
    fn arch_is_comma_joined() {
        let ctx = ReadmeContext::new(&info(vec!["linux_amd64".into(), "windows".into()]), "");
        assert_eq!(ctx.get("ARCH"), Some("linux_amd64, windows"));
    }

    #[test]
    fn renders_placeholders() {
        let ctx = ReadmeContext::new(&info(vec![]), "icon.png");
        let out = ctx.render("# {{NAME}} v{{VERSION}}\n![icon]({{ICON}})");
        assert_eq!(out, "# WIDGET v1.2.0-rc.1\n![icon](icon.png)");
    }

    #[test]
    fn unknown_placeholder_stays_literal() {
        let ctx = ReadmeContext::default().with_variable("A", "1");
        assert_eq!(ctx.render("{{A}} {{B}}"), "1 {{B}}");
    }

    #[test]
    fn repeated_and_padded_placeholders() {
        let ctx = ReadmeContext::default().with_variable("A", "x");
        assert_eq!(ctx.render("{{A}}{{A}}{{ A }}"), "xxx");
    }

    #[test]
    fn values_are_not_rescanned() {
        let ctx = ReadmeContext::default()
            .with_variable("A", "{{B}}")
            .with_variable("B", "oops");
        assert_eq!(ctx.render("{{A}}"), "{{B}}");
    }

    #[test]
    fn unterminated_placeholder_is_copied() {
        let ctx = ReadmeContext::default().with_variable("A", "x");
        assert_eq!(ctx.render("{{A}} and {{A"), "x and {{A");
    }

    #[test]
    fn unresolved_lists_unknown_keys_once() {
        let ctx = ReadmeContext::default().with_variable("A", "x");
        assert_eq!(ctx.unresolved("{{A}} {{B}} {{ C }} {{B}}"), ["B", "C"]);
        assert!(ctx.unresolved("{{A}} plain").is_empty());
    }

    #[test]
    fn custom_variable_overrides() {
        let ctx = ReadmeContext::new(&info(vec![]), "").with_variable("NAME", "Custom");
        assert_eq!(ctx.render("{{NAME}}"), "Custom");
    }
}
