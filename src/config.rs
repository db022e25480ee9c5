use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// What the review endpoint does when a submission fails validation.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InvalidReviewPolicy {
    /// Redirect to the product page as if the review had been stored.
    Discard,
    /// Render the product page again with the errors and the submitted values.
    #[default]
    Rerender,
}

/// Server settings, read from flags with environment fallbacks.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address the HTTP server binds to.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3004")]
    pub addr: String,

    /// SQLite database file.
    #[arg(long, env = "DATABASE_PATH", default_value = "bookstore.db")]
    pub database: String,

    /// Reaction to a review that fails validation.
    #[arg(long, env = "INVALID_REVIEW_POLICY", value_enum, default_value_t = InvalidReviewPolicy::Rerender)]
    pub invalid_review_policy: InvalidReviewPolicy,

    /// Log level for the access log (error, warn, info, debug, trace).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn load() -> Self {
        Config::parse()
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
