use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A counting stat that keeps the numeric type the provider sent.
/// Integer cells sum as integers; anything touching a float becomes a float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Int(i64),
    Float(f64),
}

impl Default for StatValue {
    fn default() -> Self {
        StatValue::Int(0)
    }
}

impl StatValue {
    pub fn as_f64(self) -> f64 {
        match self {
            StatValue::Int(v) => v as f64,
            StatValue::Float(v) => v,
        }
    }

    /// Coerce a raw provider cell. Accepts JSON numbers and numeric strings;
    /// returns None for null, booleans, arrays, objects and unparsable text.
    pub fn coerce(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(StatValue::Int)
                .or_else(|| n.as_f64().map(StatValue::Float)),
            serde_json::Value::String(s) => {
                let s = s.trim();
                if let Ok(v) = s.parse::<i64>() {
                    Some(StatValue::Int(v))
                } else {
                    s.parse::<f64>().ok().filter(|v| v.is_finite()).map(StatValue::Float)
                }
            }
            _ => None,
        }
    }
}

impl Add for StatValue {
    type Output = StatValue;

    fn add(self, rhs: StatValue) -> StatValue {
        match (self, rhs) {
            // Overflowing integer sums fall back to float instead of wrapping
            (StatValue::Int(a), StatValue::Int(b)) => a
                .checked_add(b)
                .map(StatValue::Int)
                .unwrap_or_else(|| StatValue::Float(a as f64 + b as f64)),
            (a, b) => StatValue::Float(a.as_f64() + b.as_f64()),
        }
    }
}
