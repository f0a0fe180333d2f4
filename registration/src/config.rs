use std::env;

/// Default `tracing` filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "info,student_registration=debug";

/// What an in-memory store does when asked to add an id it already holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Refuse the add with `DomainError::AlreadyExists`
    #[default]
    Reject,
    /// Replace the stored student in place
    Overwrite,
}

impl std::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuplicatePolicy::Reject => write!(f, "reject"),
            DuplicatePolicy::Overwrite => write!(f, "overwrite"),
        }
    }
}

impl std::str::FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(DuplicatePolicy::Reject),
            "overwrite" => Ok(DuplicatePolicy::Overwrite),
            _ => Err(format!("Unknown duplicate policy: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing` filter directive, used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Duplicate-id handling for the in-memory repository
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(
            env::var("REGISTRATION_LOG_FILTER").ok(),
            env::var("REGISTRATION_DUPLICATE_POLICY").ok(),
        )
    }

    fn from_vars(log_filter: Option<String>, duplicate_policy: Option<String>) -> Self {
        let duplicate_policy = match duplicate_policy {
            Some(raw) => raw.parse::<DuplicatePolicy>().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default duplicate policy");
                DuplicatePolicy::default()
            }),
            None => DuplicatePolicy::default(),
        };

        Self {
            log_filter: log_filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            duplicate_policy,
        }
    }
}
