//! Forgiving field deserializers.
//!
//! Real exports carry quirks: numbers where strings belong, `null` value
//! lists, alias targets that are not objects. A wrong-typed field becomes
//! absent instead of failing the whole document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{AliasTarget, RecordType, ResourceRecord};

pub(crate) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

pub(crate) fn record_type<'de, D>(deserializer: D) -> Result<Option<RecordType>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string(deserializer)?.map(RecordType::from))
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn ttl<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    })
}

/// Keep only values that would count as "set": `null`, `false`, `0` and
/// the empty string are dropped.
pub(crate) fn truthy<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let set = match &value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => true,
    };
    Ok(set.then_some(value))
}

pub(crate) fn records<'de, D>(deserializer: D) -> Result<Option<Vec<ResourceRecord>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| ResourceRecord {
                    value: item.get("Value").and_then(Value::as_str).map(str::to_string),
                })
                .collect(),
        ),
        _ => None,
    })
}

pub(crate) fn alias<'de, D>(deserializer: D) -> Result<Option<AliasTarget>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

pub(crate) fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_bool())
}
