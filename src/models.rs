//! Frontend Models
//!
//! Data structures matching the GraphQL backend.

use serde::{Deserialize, Serialize};

/// A single to-do record as stored by the backend.
///
/// `id` and `ts` are assigned by the store; `ts` is a version marker the
/// client treats as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_ts")]
    pub ts: i64,
    pub body: String,
    pub done: bool,
}

/// Mutation payload for create/update. Always carries both fields; the
/// caller merges the changed field with the current value of the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoInput {
    pub body: String,
    pub done: bool,
}
