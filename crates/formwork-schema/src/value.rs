//! Form value trees

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::path::{FieldPath, Segment};

/// Supported value types in a form's value tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(HashMap<String, Value>),
}

impl Value {
    /// Empty object, the usual root of a form's value tree.
    pub fn empty_object() -> Self {
        Value::Object(HashMap::new())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Convert value to string for display
    pub fn display_string(&self) -> String {
        match self {
            Value::Null => "".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => {
                // Format number nicely (remove .0 for integers)
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Value::String(s) => s.clone(),
            Value::Array(arr) => {
                let items: Vec<String> = arr.iter().map(|v| v.display_string()).collect();
                format!("[{}]", items.join(", "))
            }
            Value::Object(_) => "[Object]".to_string(),
        }
    }

    /// Read the value at a path, if the tree has that shape.
    pub fn at(&self, path: &FieldPath) -> Option<&Value> {
        let mut node = self;
        for segment in path.segments() {
            node = match (segment, node) {
                (Segment::Key(k), Value::Object(map)) => map.get(k)?,
                (Segment::Index(i), Value::Array(items)) => items.get(*i)?,
                _ => return None,
            };
        }
        Some(node)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(obj: HashMap<String, Value>) -> Self {
        Value::Object(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_tree() -> Value {
        let mut entry = HashMap::new();
        entry.insert("title".to_string(), Value::from("rust"));
        entry.insert("knowledge".to_string(), Value::from(80));
        let mut root = HashMap::new();
        root.insert("techs".to_string(), Value::Array(vec![Value::from(entry)]));
        Value::from(root)
    }

    #[test]
    fn test_at_walks_keys_and_indices() {
        let tree = sample_tree();
        let title = tree.at(&FieldPath::from("techs.0.title"));
        assert_eq!(title, Some(&Value::from("rust")));
        assert_eq!(tree.at(&FieldPath::from("techs.1.title")), None);
        assert_eq!(tree.at(&FieldPath::from("missing")), None);
    }

    #[test]
    fn test_at_root_is_identity() {
        let tree = sample_tree();
        assert_eq!(tree.at(&FieldPath::root()), Some(&tree));
    }

    #[test]
    fn test_display_string() {
        assert_eq!(Value::Number(42.0).display_string(), "42");
        assert_eq!(Value::Number(1.5).display_string(), "1.5");
        assert_eq!(Value::Null.display_string(), "");
        assert_eq!(Value::from("hi").display_string(), "hi");
    }

    #[test]
    fn test_serializes_to_plain_json() {
        let tree = sample_tree();
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["techs"][0]["title"], "rust");
        assert_eq!(json["techs"][0]["knowledge"], 80.0);
    }

    #[test]
    fn test_deserializes_from_plain_json() {
        let value: Value = serde_json::from_str(r#"{"name": "ana", "score": 10}"#).unwrap();
        assert_eq!(value.at(&FieldPath::from("name")), Some(&Value::from("ana")));
        assert_eq!(value.at(&FieldPath::from("score")), Some(&Value::from(10)));
    }
}
