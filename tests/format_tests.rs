use ini_roundtrip::{from_str, save, Document, Error, Number, Value};

#[test]
fn test_header_must_span_whole_line() {
    let result = from_str(" [A]\n[B] \n[C];x\n[D]");
    println!("Warnings:\n{:#?}", result.warning_messages());

    assert_eq!(result.warnings.len(), 3);
    let names: Vec<_> = result.document.section_names().map(String::as_str).collect();
    assert_eq!(names, vec!["D"]);
}

#[test]
fn test_header_name_keeps_inner_text_verbatim() {
    let result = from_str("[ spaced name ]\nk=v\n[a.b-c]\nk=w");
    assert!(result.document.contains_section(" spaced name "));
    assert!(result.document.contains_section("a.b-c"));
    assert_eq!(
        result.save().unwrap(),
        "[ spaced name ]\nk=v\n\n[a.b-c]\nk=w\n"
    );
}

#[test]
fn test_empty_header_and_nested_brackets_are_invalid() {
    let result = from_str("[]\n[a[b]]\n[[x]]");
    assert_eq!(result.warnings.len(), 3);
    assert!(result.document.is_empty());
}

#[test]
fn test_key_alphabet() {
    let result = from_str("[A]\nsnake_case=1\nCamel9=2\nwith-dash=3\nwith space=4\n  indented=5");
    println!("Warnings:\n{:#?}", result.warning_messages());

    let keys: Vec<_> = result
        .document
        .section("A")
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["snake_case", "Camel9"]);
    assert_eq!(result.warnings.len(), 3);
}

#[test]
fn test_empty_value_is_invalid() {
    let result = from_str("[A]\nkey=\nkey2 =   ");
    // `key2 =   ` keeps its last space as the value
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.document.get("A", "key2"), Some(&Value::from(" ")));
}

#[test]
fn test_only_first_equals_splits() {
    let result = from_str("[A]\nurl=https://host/?a=1&b=2\nexpr = x == y");
    assert_eq!(
        result.document.get("A", "url"),
        Some(&Value::from("https://host/?a=1&b=2"))
    );
    assert_eq!(result.document.get("A", "expr"), Some(&Value::from("x == y")));
}

#[test]
fn test_number_forms() {
    let result = from_str("[N]\nint=-42\nhex=0xff\nexp=1e3\nlead=007\nword=1st\ninf=inf");
    let get = |key| result.document.get("N", key).cloned();

    assert_eq!(get("int"), Some(Value::Number(Number::Integer(-42))));
    assert_eq!(get("hex"), Some(Value::Number(Number::Integer(255))));
    assert_eq!(get("exp"), Some(Value::Number(Number::Float(1000.0))));
    assert_eq!(get("lead"), Some(Value::Number(Number::Integer(7))));
    assert_eq!(get("word"), Some(Value::from("1st")));
    assert_eq!(get("inf"), Some(Value::from("inf")));
}

#[test]
fn test_numbers_are_written_in_canonical_form() {
    let result = from_str("[N]\nhex=0xff\nlead=007\nwhole=2.0\nexp=1e3");
    assert_eq!(
        result.save().unwrap(),
        "[N]\nhex=255\nlead=7\nwhole=2.0\nexp=1000.0\n"
    );
}

#[test]
fn test_boolean_is_case_sensitive() {
    let result = from_str("[B]\na=true\nb=TRUE\nc=False");
    assert_eq!(result.document.get("B", "a"), Some(&Value::Bool(true)));
    assert_eq!(result.document.get("B", "b"), Some(&Value::from("TRUE")));
    assert_eq!(result.document.get("B", "c"), Some(&Value::from("False")));
}

#[test]
fn test_comment_text_is_verbatim() {
    let text = "[A]\n;  two leading spaces  \n;;double\nk=v\n";
    let result = from_str(text);
    assert_eq!(
        result.metadata.section_comments("A"),
        ["  two leading spaces  ".to_string(), ";double".to_string()]
    );
    assert_eq!(result.save().unwrap(), text);
}

#[test]
fn test_crlf_input() {
    let result = from_str("[A]\r\nx=1\r\ny=two\r\n");
    assert!(result.warnings.is_empty());
    assert_eq!(result.document.get("A", "y"), Some(&Value::from("two")));
    assert_eq!(result.save().unwrap(), "[A]\nx=1\ny=two\n");
}

#[test]
fn test_unwritable_document_is_rejected() {
    let mut doc = Document::new();
    doc.set("", "k", 1);
    let err = save(&doc, None).unwrap_err();
    println!("Error: {}", err);
    assert!(matches!(err, Error::InvalidSection { .. }));
}
