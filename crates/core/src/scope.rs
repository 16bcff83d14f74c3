use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which slice of an application's resources an operation targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceScope {
    #[default]
    All,
    K8s,
    Platform,
}

impl ResourceScope {
    /// Parse the optional positional scope argument of a command.
    ///
    /// Zero tokens default to [`ResourceScope::All`]; anything beyond the
    /// first token is rejected before any platform work begins.
    pub fn from_args(args: &[String]) -> Result<Self> {
        if args.len() > 1 {
            return Err(Error::UnexpectedArguments(args[1..].to_vec()));
        }
        match args.first() {
            Some(token) => token.parse(),
            None => Ok(ResourceScope::All),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceScope::All => "all",
            ResourceScope::K8s => "k8s",
            ResourceScope::Platform => "platform",
        }
    }

    /// Whether kubernetes resources fall inside this scope
    pub fn includes_k8s(&self) -> bool {
        matches!(self, ResourceScope::All | ResourceScope::K8s)
    }

    /// Whether platform infrastructure falls inside this scope
    pub fn includes_platform(&self) -> bool {
        matches!(self, ResourceScope::All | ResourceScope::Platform)
    }
}

impl FromStr for ResourceScope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(ResourceScope::All),
            "k8s" => Ok(ResourceScope::K8s),
            "platform" => Ok(ResourceScope::Platform),
            other => Err(Error::UnrecognizedScope(other.to_string())),
        }
    }
}

impl fmt::Display for ResourceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_no_args_defaults_to_all() {
        assert_eq!(ResourceScope::from_args(&[]).unwrap(), ResourceScope::All);
    }

    #[test]
    fn test_known_tokens() {
        assert_eq!(
            ResourceScope::from_args(&args(&["all"])).unwrap(),
            ResourceScope::All
        );
        assert_eq!(
            ResourceScope::from_args(&args(&["k8s"])).unwrap(),
            ResourceScope::K8s
        );
        assert_eq!(
            ResourceScope::from_args(&args(&["platform"])).unwrap(),
            ResourceScope::Platform
        );
    }

    #[test]
    fn test_unknown_token_is_named() {
        let err = ResourceScope::from_args(&args(&["cluster"])).unwrap_err();
        match err {
            Error::UnrecognizedScope(token) => assert_eq!(token, "cluster"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extra_args_are_listed() {
        let err = ResourceScope::from_args(&args(&["all", "k8s", "bogus"])).unwrap_err();
        match err {
            Error::UnexpectedArguments(extra) => {
                assert_eq!(extra, args(&["k8s", "bogus"]));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_scope_inclusion() {
        assert!(ResourceScope::All.includes_k8s());
        assert!(ResourceScope::All.includes_platform());
        assert!(ResourceScope::K8s.includes_k8s());
        assert!(!ResourceScope::K8s.includes_platform());
        assert!(ResourceScope::Platform.includes_platform());
        assert!(!ResourceScope::Platform.includes_k8s());
    }
}
