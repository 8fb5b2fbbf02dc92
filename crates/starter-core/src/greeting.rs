//! The `ping` round-trip payload

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetResponse {
    pub greeting: String,
    pub name: String,
}

pub fn greet(name: impl Into<String>) -> GreetResponse {
    let name = name.into();
    GreetResponse {
        greeting: format!("Hello, {name}! You've been greeted from Rust!"),
        name,
    }
}
