use serde::{Deserialize, Deserializer};
use std::{fmt, str::FromStr};

/// Behavior when a directive type is declared more than once in the same registry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RedeclarationPolicy {
    /// The second declaration fails.
    #[default]
    Reject,
    /// The second declaration replaces the first one. Last write wins.
    Replace,
}

impl RedeclarationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RedeclarationPolicy::Reject => "reject",
            RedeclarationPolicy::Replace => "replace",
        }
    }
}

impl fmt::Display for RedeclarationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RedeclarationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const VALUES: &[(&str, RedeclarationPolicy)] = &[
            ("reject", RedeclarationPolicy::Reject),
            ("replace", RedeclarationPolicy::Replace),
        ];

        VALUES
            .iter()
            .find(|(string, _policy)| string.eq_ignore_ascii_case(s))
            .map(|(_, policy)| *policy)
            .ok_or_else(|| {
                format!(
                    r#""{s}" is not a valid redeclaration policy (expected one of {})."#,
                    VALUES
                        .iter()
                        .map(|(string, _policy)| *string)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

impl<'de> Deserialize<'de> for RedeclarationPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_from_string_any_case() {
        assert_eq!(RedeclarationPolicy::from_str("reject"), Ok(RedeclarationPolicy::Reject));
        assert_eq!(RedeclarationPolicy::from_str("REPLACE"), Ok(RedeclarationPolicy::Replace));
        assert_eq!(RedeclarationPolicy::from_str("RePlAcE"), Ok(RedeclarationPolicy::Replace));
    }

    #[test]
    fn policy_from_invalid_string() {
        assert_eq!(
            RedeclarationPolicy::from_str("merge"),
            Err(r#""merge" is not a valid redeclaration policy (expected one of reject, replace)."#.to_owned())
        );
    }

    #[test]
    fn policy_display_round_trips() {
        for policy in [RedeclarationPolicy::Reject, RedeclarationPolicy::Replace] {
            assert_eq!(policy.to_string().parse::<RedeclarationPolicy>(), Ok(policy));
        }
    }
}
