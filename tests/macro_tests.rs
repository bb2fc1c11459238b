use sparql_literal::{to_literal, value, Float, Iri, Kind, Literal, Value, ValueMap};

#[test]
fn test_value_macro_null() {
    assert_eq!(value!(null), Value::Null);
    assert_eq!(to_literal(&value!(null)), r#""""null""""#);
}

#[test]
fn test_value_macro_booleans() {
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
}

#[test]
fn test_value_macro_numbers() {
    assert_eq!(value!(42), Value::Signed(42));
    assert_eq!(value!(42u8), Value::Unsigned(42));
    assert_eq!(value!(3.5), Value::Float(Float::Double(3.5)));
    assert_eq!(value!(-123), Value::Signed(-123));
    assert_eq!(to_literal(&value!(-123)), "-123");
}

#[test]
fn test_value_macro_strings() {
    assert_eq!(value!("hello world"), Value::from("hello world"));
    assert_eq!(value!(""), Value::Text(String::new()));
}

#[test]
fn test_value_macro_expressions() {
    let iri = value!(Iri::new("http://example.org/"));
    assert_eq!(iri.kind(), Kind::Identifier);
    assert_eq!(to_literal(&iri), "<http://example.org/>");

    let lit = value!(Literal::lang("bonjour", "fr"));
    assert_eq!(to_literal(&lit), r#""""bonjour"""@fr"#);
}

#[test]
fn test_value_macro_arrays() {
    let arr = value!([1, "two", true, null]);
    assert_eq!(arr.as_array().map(Vec::len), Some(4));
    assert_eq!(to_literal(&arr), r#""""[1,"two",true,null]""""#);
}

#[test]
fn test_value_macro_nested() {
    let obj = value!({
        "name": "Alice",
        "tags": ["a", "b"],
        "address": {
            "city": "Paris"
        }
    });

    let map = obj.as_object().unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(
        map.get("address"),
        Some(&Value::Object(
            vec![("city".to_string(), Value::from("Paris"))]
                .into_iter()
                .collect::<ValueMap>()
        ))
    );
    assert_eq!(
        to_literal(&obj),
        r#""""{"name":"Alice","tags":["a","b"],"address":{"city":"Paris"}}""""#
    );
}
