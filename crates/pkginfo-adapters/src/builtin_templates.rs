//! README templates that ship with pkginfo.
//!
//! Templates use `{{KEY}}` placeholders; see `pkginfo_core::domain::readme`
//! for the variable table. A user template passed with `--template` replaces
//! these entirely.

use std::fmt;
use std::str::FromStr;

const STANDARD: &str = r#"<p align="center">
  <img src="{{ICON}}" alt="{{NAME_RAW}} icon" width="128" />
</p>

# {{NAME}}

![version](https://img.shields.io/badge/version-{{VERSION}}-blue)

{{DESCRIPTION}}

## Package

| Field         | Value        |
|---------------|--------------|
| Tenant        | {{TENANT}}   |
| Version       | {{VERSION}}  |
| Architectures | {{ARCH}}     |
| Repository    | {{REPO}}     |

## Installation

```sh
git clone {{REPO}}
```

---

© {{YEAR}} {{TENANT}}
"#;

const MINIMAL: &str = r#"# {{NAME}} {{VERSION}}

{{DESCRIPTION}}
"#;

/// Built-in README layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuiltinTemplate {
    #[default]
    Standard,
    Minimal,
}

impl BuiltinTemplate {
    pub const ALL: [Self; 2] = [Self::Standard, Self::Minimal];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Minimal => "minimal",
        }
    }

    pub const fn content(&self) -> &'static str {
        match self {
            Self::Standard => STANDARD,
            Self::Minimal => MINIMAL,
        }
    }
}

impl fmt::Display for BuiltinTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuiltinTemplate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|t| t.name()).collect();
                format!("unknown README template '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkginfo_core::domain::ReadmeContext;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Minimal".parse::<BuiltinTemplate>(), Ok(BuiltinTemplate::Minimal));
        assert_eq!(" standard ".parse::<BuiltinTemplate>(), Ok(BuiltinTemplate::Standard));
        assert!("fancy".parse::<BuiltinTemplate>().unwrap_err().contains("standard, minimal"));
    }

    #[test]
    fn builtin_templates_only_use_known_variables() {
        let ctx = ["NAME", "NAME_RAW", "VERSION", "DESCRIPTION", "TENANT", "REPO", "ICON", "ARCH", "YEAR"]
            .into_iter()
            .fold(ReadmeContext::default(), |ctx, key| ctx.with_variable(key, "x"));

        for template in BuiltinTemplate::ALL {
            assert!(
                ctx.unresolved(template.content()).is_empty(),
                "{template} uses unknown placeholders"
            );
        }
    }
}
