pub mod dispatcher;

pub use dispatcher::Dispatcher;

/// Named collection of checks. Unknown selectors deliberately fall back to
/// the full suite so a typo in a deploy pipeline runs more validation, not
/// less.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suite {
    Health,
    Security,
    Performance,
    Full,
}

impl Suite {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "health" => Suite::Health,
            "security" => Suite::Security,
            "performance" => Suite::Performance,
            _ => Suite::Full,
        }
    }
}

impl std::fmt::Display for Suite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Suite::Health => write!(f, "health"),
            Suite::Security => write!(f, "security"),
            Suite::Performance => write!(f, "performance"),
            Suite::Full => write!(f, "full"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_selectors() {
        assert_eq!(Suite::parse("health"), Suite::Health);
        assert_eq!(Suite::parse("SECURITY"), Suite::Security);
        assert_eq!(Suite::parse(" performance "), Suite::Performance);
        assert_eq!(Suite::parse("full"), Suite::Full);
    }

    #[test]
    fn test_unknown_selector_defaults_to_full() {
        assert_eq!(Suite::parse("smoke"), Suite::Full);
        assert_eq!(Suite::parse(""), Suite::Full);
    }
}
