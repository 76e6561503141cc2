use ini_roundtrip::{
    from_str, from_str_with_options, load, save, store, CommentOwner, Document, Error, FileStore,
    IniOptions, NoSection, Number, Value, IMPLICIT_SECTION,
};

const BASIC: &str = "\
[Test]
Value=some=data
Value1=true
Value2=false
Count=12
";

#[test]
fn test_well_formed_input_round_trips() {
    let result = from_str(BASIC);
    assert!(result.warnings.is_empty());
    assert_eq!(result.save().unwrap(), BASIC);
}

#[test]
#[allow(clippy::approx_constant)]
fn test_value_coercion() {
    let result = from_str("[Test]\nValue=3.14\nValue1=true\nValue2=false\nValue3=some=data");
    let doc = &result.document;

    assert_eq!(doc.get("Test", "Value"), Some(&Value::Number(Number::Float(3.14))));
    assert_eq!(doc.get("Test", "Value1"), Some(&Value::Bool(true)));
    assert_eq!(doc.get("Test", "Value2"), Some(&Value::Bool(false)));
    assert_eq!(doc.get("Test", "Value3"), Some(&Value::from("some=data")));
}

#[test]
fn test_spaces_around_equals_are_trimmed() {
    let result = from_str("[A]\nname  =  hello world \nnum = 5");
    assert_eq!(
        result.document.get("A", "name"),
        Some(&Value::from("hello world "))
    );
    assert_eq!(result.document.get("A", "num"), Some(&Value::from(5)));
    assert_eq!(result.save().unwrap(), "[A]\nname=hello world \nnum=5\n");
}

#[test]
fn test_reopened_section_merges_content_but_keeps_layout() {
    let text = "[Test1]\nA=1\n[Test2]\nB=2\n[Test1]\nC=3";
    let result = from_str(text);

    let test1 = result.document.section("Test1").unwrap();
    let keys: Vec<_> = test1.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["A", "C"]);

    let names: Vec<_> = result
        .metadata
        .section_order()
        .iter()
        .map(|record| record.name.as_str())
        .collect();
    assert_eq!(names, vec!["Test1", "Test2", "Test1"]);

    assert_eq!(
        result.save().unwrap(),
        "[Test1]\nA=1\n\n[Test2]\nB=2\n\n[Test1]\nC=3\n"
    );
}

#[test]
fn test_removed_key_is_omitted() {
    let mut result = from_str("[Section]\nD=1\nC=2\nB=3\nA=4");
    result.document.remove("Section", "B");
    assert_eq!(result.save().unwrap(), "[Section]\nD=1\nC=2\nA=4\n");
}

#[test]
fn test_removed_section_drops_whole_block() {
    let mut result = from_str("[A]\n;about A\nx=1\n\n[B]\n;about B\ny=2\n\n[C]\nz=3\n");
    result.document.remove_section("B");
    assert_eq!(
        result.save().unwrap(),
        "[A]\n;about A\nx=1\n\n[C]\nz=3\n"
    );
}

#[test]
fn test_new_key_stays_inside_its_section() {
    let mut result = from_str("[A]\nx=1\n\n[B]\ny=2\n");
    result.document.set("A", "added", "yes");
    result.document.set("A", "more", 2);
    assert_eq!(
        result.save().unwrap(),
        "[A]\nx=1\nadded=yes\nmore=2\n\n[B]\ny=2\n"
    );
}

#[test]
fn test_new_section_is_appended_last() {
    let mut result = from_str("[B]\ny=2\n\n[A]\nx=1\n");
    result.document.set("New", "k", true);
    assert_eq!(
        result.save().unwrap(),
        "[B]\ny=2\n\n[A]\nx=1\n\n[New]\nk=true\n"
    );
}

#[test]
fn test_modified_value_keeps_its_line() {
    let mut result = from_str("[A]\nfirst=1\nsecond=2\nthird=3");
    result.document.set("A", "second", "changed");
    assert_eq!(
        result.save().unwrap(),
        "[A]\nfirst=1\nsecond=changed\nthird=3\n"
    );
}

#[test]
fn test_interleaved_comments_move_to_section_top() {
    let result = from_str("[A]\nx=1\n;between\ny=2\n;after\n");
    assert!(result.warnings.is_empty());
    assert_eq!(
        result.metadata.comments(&CommentOwner::Section("A".to_string())),
        ["between".to_string(), "after".to_string()]
    );
    assert_eq!(result.save().unwrap(), "[A]\n;between\n;after\nx=1\ny=2\n");
}

#[test]
fn test_pre_section_comments_come_first() {
    let text = ";generated file\n; do not edit\n\n[A]\nx=1\n";
    let result = from_str(text);

    assert_eq!(
        result.metadata.pre_section_comments(),
        ["generated file".to_string(), " do not edit".to_string()]
    );
    assert_eq!(result.save().unwrap(), text);
}

#[test]
fn test_invalid_lines_become_warnings() {
    let result = from_str("orphan=1\n[A]\n\nnot a pair\nx=1\n[broken\n;\n");

    assert_eq!(
        result.warning_messages(),
        vec![
            "Line 1: Invalid data found 'orphan=1'",
            "Line 3: Invalid data found ''",
            "Line 4: Invalid data found 'not a pair'",
            "Line 6: Invalid data found '[broken'",
            "Line 7: Invalid data found ';'",
        ]
    );
    assert_eq!(result.document.get("A", "x"), Some(&Value::from(1)));
    assert_eq!(result.document.len(), 1);
}

#[test]
fn test_saved_output_parses_to_same_document() {
    let mut result = from_str(";top\n[A]\n;c\nx=1\ny=two\n[B]\nz=false\n[A]\nw=0.5");
    result.document.set("C", "k", "v");
    result.document.remove("A", "y");

    let saved = result.save().unwrap();
    let reparsed = from_str(&saved);
    assert_eq!(reparsed.document, result.document);
    assert_eq!(reparsed.save().unwrap(), saved);
}

#[test]
fn test_metadata_is_not_updated_by_edits() {
    let mut result = from_str("[A]\n;about A\nx=1\n\n[B]\ny=2\n");
    result.document.remove_section("A");
    result.document.set("A", "fresh", 1);

    // The re-created section takes the recorded slot and its recorded comments.
    assert_eq!(result.metadata.section_order()[0].keys, vec!["x"]);
    assert_eq!(
        result.save().unwrap(),
        "[A]\n;about A\nfresh=1\n\n[B]\ny=2\n"
    );
}

#[test]
fn test_implicit_section_mode() {
    let options = IniOptions::new().with_no_section(NoSection::Implicit);
    let text = "name=demo\nverbose=true\n\n[Server]\nport=80\n";
    let result = from_str_with_options(text, &options);

    assert_eq!(result.warnings.len(), 1);
    assert_eq!(
        result.document.get(IMPLICIT_SECTION, "name"),
        Some(&Value::from("demo"))
    );
    assert_eq!(result.save().unwrap(), text);

    let strict = from_str(text);
    assert_eq!(strict.warnings.len(), 3);
    assert!(!strict.document.contains_section(IMPLICIT_SECTION));
}

#[test]
fn test_implicit_section_comments_save_stably() {
    let options = IniOptions::new().with_no_section(NoSection::Implicit);
    let result = from_str_with_options("x=1\n;c\n[A]\ny=2\n", &options);
    assert!(result.warnings.is_empty());

    let first = result.save().unwrap();
    assert_eq!(first, ";c\n\nx=1\n\n[A]\ny=2\n");

    let reparsed = from_str_with_options(&first, &options);
    assert_eq!(reparsed.document, result.document);
    assert_eq!(reparsed.save().unwrap(), first);
}

#[test]
fn test_empty_value_is_not_saved() {
    let mut doc = Document::new();
    doc.set("A", "k", "");
    assert!(matches!(
        save(&doc, None),
        Err(Error::InvalidValue { ref section, ref key }) if section == "A" && key == "k"
    ));
}

#[test]
fn test_save_without_metadata() {
    let result = from_str(";c\n[B]\nb=1\n[A]\na=2");
    assert_eq!(
        save(&result.document, None).unwrap(),
        "[B]\nb=1\n\n[A]\na=2\n"
    );
}

#[test]
fn test_file_store_edit_cycle() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("app.ini"),
        "; app settings\n\n[Window]\nwidth=800\nheight=600\n",
    )
    .unwrap();

    let mut files = FileStore::with_root(dir.path());
    let options = IniOptions::new();
    let mut result = load(&files, "app.ini", &options).unwrap();
    result.document.set("Window", "width", 1024);
    result.document.set("Window", "maximized", false);
    store(
        &mut files,
        "app.ini",
        &result.document,
        Some(&result.metadata),
        &options,
    )
    .unwrap();

    let written = std::fs::read_to_string(dir.path().join("app.ini")).unwrap();
    assert_eq!(
        written,
        "; app settings\n\n[Window]\nwidth=1024\nheight=600\nmaximized=false\n"
    );
}

#[test]
fn test_load_missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let files = FileStore::with_root(dir.path());
    assert!(load(&files, "missing.ini", &IniOptions::new()).is_err());
}
