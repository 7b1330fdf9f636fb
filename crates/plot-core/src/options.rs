// File: crates/plot-core/src/options.rs
// Summary: Global plot options and their translation to `set`/`unset` statements.

/// Keys whose string value is wrapped in double quotes.
pub const QUOTED_KEYS: &[&str] = &[
    "title", "xlabel", "ylabel", "zlabel", "x2label", "y2label", "cblabel",
    "format", "output", "decimalsign", "timefmt",
];

/// Tick-format keys and the axis each one targets: `xformat` -> `set format x "..."`.
pub const FORMAT_KEYS: &[(&str, &str)] = &[
    ("xformat", "x"),
    ("yformat", "y"),
    ("zformat", "z"),
    ("x2format", "x2"),
    ("y2format", "y2"),
    ("cbformat", "cb"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionValue {
    /// Emitted verbatim unless the key is a quoted or tick-format key.
    Text(String),
    /// Always emitted in double quotes.
    Quoted(String),
    /// `set <key>` when true, `unset <key>` when false.
    Flag(bool),
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self { OptionValue::Text(v.to_string()) }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self { OptionValue::Text(v) }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self { OptionValue::Flag(v) }
}

pub fn is_quoted_key(key: &str) -> bool {
    QUOTED_KEYS.contains(&key)
}

pub fn format_axis(key: &str) -> Option<&'static str> {
    FORMAT_KEYS.iter().find(|(k, _)| *k == key).map(|(_, axis)| *axis)
}

/// Wrap in double quotes. Embedded quotes are not escaped.
pub fn quote(s: &str) -> String {
    format!("\"{s}\"")
}

/// One script statement for `key = value`.
pub fn statement(key: &str, value: &OptionValue) -> String {
    match value {
        OptionValue::Flag(true) => format!("set {key}"),
        OptionValue::Flag(false) => format!("unset {key}"),
        OptionValue::Text(v) | OptionValue::Quoted(v) => {
            if let Some(axis) = format_axis(key) {
                format!("set format {axis} {}", quote(v))
            } else if is_quoted_key(key) || matches!(value, OptionValue::Quoted(_)) {
                format!("set {key} {}", quote(v))
            } else {
                format!("set {key} {v}")
            }
        }
    }
}
