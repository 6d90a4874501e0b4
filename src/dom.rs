//! The DOM produced by a parse: a tree of [JsonValue]s

/// A complete in-memory representation of a parsed JSON document.
///
/// Object members are stored in source order and duplicate keys are allowed; the derived
/// equality is therefore structural (ordered element-wise comparison, numbers compared as
/// IEEE-754 doubles).
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<JsonValue>),
    Object(Vec<(String, JsonValue)>),
}

/// Enumeration of the six JSON value kinds
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonValue {
    /// The [JsonKind] of this value
    pub fn kind(&self) -> JsonKind {
        match self {
            JsonValue::Null => JsonKind::Null,
            JsonValue::Bool(_) => JsonKind::Bool,
            JsonValue::Number(_) => JsonKind::Number,
            JsonValue::String(_) => JsonKind::String,
            JsonValue::Array(_) => JsonKind::Array,
            JsonValue::Object(_) => JsonKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Get the underlying boolean. Calling this on any other kind is a programmer error.
    pub fn as_bool(&self) -> bool {
        match self {
            JsonValue::Bool(value) => *value,
            other => panic!("expected a bool, found {:?}", other.kind()),
        }
    }

    /// Get the underlying double. Calling this on any other kind is a programmer error.
    pub fn as_number(&self) -> f64 {
        match self {
            JsonValue::Number(value) => *value,
            other => panic!("expected a number, found {:?}", other.kind()),
        }
    }

    /// Get the underlying text. Calling this on any other kind is a programmer error.
    pub fn as_string(&self) -> &str {
        match self {
            JsonValue::String(value) => value,
            other => panic!("expected a string, found {:?}", other.kind()),
        }
    }

    /// Get the underlying elements. Calling this on any other kind is a programmer error.
    pub fn as_array(&self) -> &[JsonValue] {
        match self {
            JsonValue::Array(values) => values,
            other => panic!("expected an array, found {:?}", other.kind()),
        }
    }

    /// Get the underlying members in source order. Calling this on any other kind is a
    /// programmer error.
    pub fn as_object(&self) -> &[(String, JsonValue)] {
        match self {
            JsonValue::Object(pairs) => pairs,
            other => panic!("expected an object, found {:?}", other.kind()),
        }
    }
}

impl Drop for JsonValue {
    /// Release the tree without recursing: children are detached onto an explicit
    /// worklist first, so each value the worklist drops is already a leaf or an empty
    /// composite. Default drop glue would otherwise recurse once per nesting level.
    fn drop(&mut self) {
        let mut worklist: Vec<JsonValue> = Vec::new();
        match self {
            JsonValue::Array(values) => worklist.append(values),
            JsonValue::Object(pairs) => worklist.extend(pairs.drain(..).map(|(_, value)| value)),
            _ => return,
        }
        while let Some(mut value) = worklist.pop() {
            match &mut value {
                JsonValue::Array(values) => worklist.append(values),
                JsonValue::Object(pairs) => {
                    worklist.extend(pairs.drain(..).map(|(_, value)| value))
                }
                _ => (),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonKind, JsonValue};

    #[test]
    fn should_report_kinds() {
        assert_eq!(JsonValue::Null.kind(), JsonKind::Null);
        assert_eq!(JsonValue::Bool(true).kind(), JsonKind::Bool);
        assert_eq!(JsonValue::Number(1.0).kind(), JsonKind::Number);
        assert_eq!(JsonValue::String(String::new()).kind(), JsonKind::String);
        assert_eq!(JsonValue::Array(vec![]).kind(), JsonKind::Array);
        assert_eq!(JsonValue::Object(vec![]).kind(), JsonKind::Object);
        assert!(JsonValue::Null.is_null());
        assert!(!JsonValue::Bool(false).is_null());
    }

    #[test]
    fn should_access_underlying_payloads() {
        assert!(JsonValue::Bool(true).as_bool());
        assert_eq!(JsonValue::Number(2.5).as_number(), 2.5);
        assert_eq!(JsonValue::String(String::from("x")).as_string(), "x");
        assert_eq!(
            JsonValue::Array(vec![JsonValue::Null]).as_array(),
            &[JsonValue::Null]
        );
        let object = JsonValue::Object(vec![(String::from("k"), JsonValue::Null)]);
        assert_eq!(object.as_object().len(), 1);
    }

    #[test]
    #[should_panic(expected = "expected a bool")]
    fn should_panic_on_mismatched_accessor() {
        JsonValue::Null.as_bool();
    }

    #[test]
    fn should_compare_structurally() {
        let a = JsonValue::Object(vec![
            (String::from("k"), JsonValue::Number(1.0)),
            (String::from("k"), JsonValue::Number(2.0)),
        ]);
        let b = JsonValue::Object(vec![
            (String::from("k"), JsonValue::Number(1.0)),
            (String::from("k"), JsonValue::Number(2.0)),
        ]);
        let reordered = JsonValue::Object(vec![
            (String::from("k"), JsonValue::Number(2.0)),
            (String::from("k"), JsonValue::Number(1.0)),
        ]);
        assert_eq!(a, b);
        assert_ne!(a, reordered);
    }

    #[test]
    fn should_drop_deep_trees_iteratively() {
        let mut value = JsonValue::Null;
        for _ in 0..100_000 {
            value = JsonValue::Array(vec![value]);
        }
        drop(value);
    }
}
