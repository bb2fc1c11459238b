/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Leaves that are not `null`, `true`, `false`, an array or an object go
/// through `Value::from`, so any type with a `From` impl can appear there.
///
/// ```rust
/// use sparql_literal::{value, Iri, Value};
///
/// let v = value!({
///     "name": "Alice",
///     "homepage": (Iri::new("http://alice.example/")),
///     "tags": ["a", "b"]
/// });
/// assert!(v.as_object().is_some());
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::ValueMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ValueMap::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Kind, PrefixedName, Value, ValueMap};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(42), Value::Signed(42));
        assert_eq!(value!(3.5).kind(), Kind::Float);
        assert_eq!(value!("hello"), Value::Text("hello".to_string()));
    }

    #[test]
    fn test_value_macro_arrays() {
        assert_eq!(value!([]), Value::Array(vec![]));

        match value!([1, "two", null]) {
            Value::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], Value::Signed(1));
                assert_eq!(vec[1], Value::from("two"));
                assert_eq!(vec[2], Value::Null);
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_value_macro_objects() {
        assert_eq!(value!({}), Value::Object(ValueMap::new()));

        let obj = value!({
            "name": "Alice",
            "type": (PrefixedName::new("foaf:Person"))
        });

        match obj {
            Value::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::from("Alice")));
                assert_eq!(map.get("type").map(Value::kind), Some(Kind::Identifier));
            }
            _ => panic!("Expected object"),
        }
    }
}
