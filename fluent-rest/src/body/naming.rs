//! Property naming policies for JSON bodies.

use serde::{Deserialize, Serialize};

/// How object keys are renamed when a JSON body is written.
///
/// Rust fields are snake_case, so `SnakeCase` and `AsIs` produce the same
/// output for derived types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingPolicy {
    /// Keys are written exactly as serialized.
    #[default]
    AsIs,
    /// `user_id` becomes `userId`.
    CamelCase,
    /// `user_id` becomes `UserId`.
    PascalCase,
    /// `userId` becomes `user_id`.
    SnakeCase,
    /// `user_id` becomes `user-id`.
    KebabCase,
}

impl NamingPolicy {
    /// Applies the policy to a single key.
    pub fn rename(&self, key: &str) -> String {
        match self {
            Self::AsIs => key.to_string(),
            Self::SnakeCase => to_snake_case(key),
            Self::KebabCase => to_snake_case(key).replace('_', "-"),
            Self::CamelCase => join_words(key, false),
            Self::PascalCase => join_words(key, true),
        }
    }
}

/// Splits `key` into lowercase words at case boundaries and separators.
fn words(key: &str) -> Vec<String> {
    let chars: Vec<char> = key.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            // "userId" splits before 'I'; "HTTPServer" splits before 'S'
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn join_words(key: &str, capitalize_first: bool) -> String {
    let mut out = String::with_capacity(key.len());
    for (i, word) in words(key).iter().enumerate() {
        if i == 0 && !capitalize_first {
            out.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Converts any common key style to snake_case.
fn to_snake_case(key: &str) -> String {
    words(key).join("_")
}
