/// Builds a [`Document`](crate::Document) from a literal.
///
/// Sections and keys keep the order they are written in. Values go through
/// [`Value::from`](crate::Value), so any number, `bool`, `&str`, `String` or
/// [`Value`](crate::Value) works.
///
/// # Examples
///
/// ```rust
/// use ini_roundtrip::{ini, save, Value};
///
/// let doc = ini! {
///     "Server" => {
///         "host" => "localhost",
///         "port" => 8080,
///     },
///     "Empty" => {},
/// };
///
/// assert_eq!(doc.get("Server", "port"), Some(&Value::from(8080)));
/// assert_eq!(save(&doc, None).unwrap(), "[Server]\nhost=localhost\nport=8080\n\n[Empty]\n");
/// ```
#[macro_export]
macro_rules! ini {
    () => {
        $crate::Document::new()
    };

    ($( $section:expr => { $( $key:expr => $value:expr ),* $(,)? } ),+ $(,)?) => {{
        let mut document = $crate::Document::new();
        $(
            #[allow(unused_variables)]
            let section = document.ensure_section($section);
            $(
                section.insert($key, $crate::Value::from($value));
            )*
        )+
        document
    }};
}
