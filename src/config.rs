//! Endpoint Configuration
//!
//! The FaunaDB secret is baked in at build time, like a bundler env var.

pub const FAUNA_DB_URI: &str = "https://graphql.fauna.com/graphql";

pub const FAUNA_DB_SECRET: &str = match option_env!("FAUNA_DB_SECRET") {
    Some(secret) => secret,
    None => "",
};
