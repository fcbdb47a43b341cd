//! Lenient field matching for JSON decoding.
//!
//! [`FieldMatching`] wraps a parsed [`Value`] and deserializes it like
//! `serde_json` would, except that object keys in struct positions are
//! matched against the target's declared field names ignoring case and word
//! separators. Map keys and other data are passed through untouched.

use serde::de::value::{MapDeserializer, SeqDeserializer};
use serde::de::{Deserializer, IntoDeserializer, Visitor};
use serde_json::{Map, Value};

pub(crate) struct FieldMatching(Value);

impl FieldMatching {
    pub(crate) fn new(value: Value) -> Self {
        Self(value)
    }
}

/// Lowercases `key` and drops everything but letters and digits, so that
/// `userId`, `UserID`, `user_id` and `user-id` all fold to `userid`.
fn fold(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Renames each key of `object` to the declared field it matches.
///
/// Exact names take precedence; a folded match never displaces a field that
/// was already present. Keys matching no field are kept as they are.
fn match_fields(object: Map<String, Value>, fields: &[&str]) -> Map<String, Value> {
    let (exact, loose): (Vec<_>, Vec<_>) = object
        .into_iter()
        .partition(|(key, _)| fields.iter().any(|field| *field == key.as_str()));

    let mut matched: Map<String, Value> = exact.into_iter().collect();
    for (key, value) in loose {
        let folded = fold(&key);
        let target = match fields.iter().find(|field| fold(field) == folded) {
            Some(field) => (*field).to_string(),
            None => key,
        };
        if !matched.contains_key(&target) {
            matched.insert(target, value);
        }
    }
    matched
}

fn entries(object: Map<String, Value>) -> impl Iterator<Item = (String, FieldMatching)> {
    object.into_iter().map(|(key, value)| (key, FieldMatching(value)))
}

impl<'de> IntoDeserializer<'de, serde_json::Error> for FieldMatching {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self {
        self
    }
}

impl<'de> Deserializer<'de> for FieldMatching {
    type Error = serde_json::Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::Array(items) => {
                SeqDeserializer::new(items.into_iter().map(FieldMatching)).deserialize_any(visitor)
            }
            Value::Object(object) => MapDeserializer::new(entries(object)).deserialize_any(visitor),
            other => other.deserialize_any(visitor),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        if self.0.is_null() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_struct<V>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::Object(object) => {
                MapDeserializer::new(entries(match_fields(object, fields))).deserialize_any(visitor)
            }
            Value::Array(items) => {
                SeqDeserializer::new(items.into_iter().map(FieldMatching)).deserialize_any(visitor)
            }
            other => other.deserialize_struct(name, fields, visitor),
        }
    }

    // Enum payloads are decoded strictly.
    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.0.deserialize_enum(name, variants, visitor)
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map identifier
        ignored_any
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashMap;

    fn from_json<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, serde_json::Error> {
        let tree: Value = serde_json::from_str(json)?;
        T::deserialize(FieldMatching::new(tree))
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Account {
        account_id: u64,
        display_name: String,
        nickname: Option<String>,
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold("userId"), "userid");
        assert_eq!(fold("USER_ID"), "userid");
        assert_eq!(fold("user-id"), "userid");
    }

    #[test]
    fn test_matches_any_key_style() {
        for json in [
            r#"{"account_id":1,"display_name":"a"}"#,
            r#"{"accountId":1,"displayName":"a"}"#,
            r#"{"AccountId":1,"DisplayName":"a"}"#,
            r#"{"ACCOUNT-ID":1,"display-name":"a"}"#,
        ] {
            let account: Account = from_json(json).unwrap();
            assert_eq!(account.account_id, 1, "{json}");
            assert_eq!(account.display_name, "a");
            assert!(account.nickname.is_none());
        }
    }

    #[test]
    fn test_serde_renames_are_targets() {
        #[derive(Debug, PartialEq, Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Renamed {
            user_id: u64,
            #[serde(rename = "label")]
            display_name: String,
        }

        let exact: Renamed = from_json(r#"{"userId":3,"label":"x"}"#).unwrap();
        let folded: Renamed = from_json(r#"{"USERID":3,"Label":"x"}"#).unwrap();
        assert_eq!(exact, folded);
        assert_eq!(exact.user_id, 3);
    }

    #[test]
    fn test_map_keys_untouched() {
        #[derive(Debug, Deserialize)]
        struct Stats {
            counts: HashMap<String, u32>,
        }

        let stats: Stats = from_json(r#"{"Counts":{"FooBar":1,"baz_qux":2}}"#).unwrap();
        let mut keys: Vec<_> = stats.counts.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["FooBar", "baz_qux"]);
    }

    #[test]
    fn test_nested_structs_and_sequences() {
        #[derive(Debug, Deserialize)]
        struct Team {
            members: Vec<Account>,
            lead: Option<Account>,
        }

        let team: Team = from_json(
            r#"{"Members":[{"AccountId":1,"DisplayName":"a"}],"LEAD":{"accountId":2,"displayName":"b","Nickname":"bee"}}"#,
        )
        .unwrap();
        assert_eq!(team.members[0].account_id, 1);
        assert_eq!(
            team.lead.and_then(|l| l.nickname).as_deref(),
            Some("bee")
        );
    }

    #[test]
    fn test_exact_key_wins_over_folded() {
        #[derive(Debug, Deserialize)]
        struct Single {
            id: u32,
        }

        let single: Single = from_json(r#"{"ID":1,"id":2}"#).unwrap();
        assert_eq!(single.id, 2);
    }

    #[test]
    fn test_type_errors_still_reported() {
        let result: Result<Account, _> = from_json(r#"{"accountId":"one","displayName":"a"}"#);
        assert!(result.is_err());
    }
}
