/// Documents whose string leaves can be flattened into one text blob
pub trait TextTree {
    fn append_text(&self, out: &mut String);
}

/// Concatenate every string leaf of a document, each followed by a space.
/// Sequences are walked in order, mappings by value; keys never contribute.
pub fn extract_text<T: TextTree + ?Sized>(node: &T) -> String {
    let mut out = String::new();
    node.append_text(&mut out);
    out
}

impl TextTree for serde_json::Value {
    fn append_text(&self, out: &mut String) {
        match self {
            serde_json::Value::String(text) => {
                out.push_str(text);
                out.push(' ');
            }
            serde_json::Value::Array(items) => items.iter().for_each(|item| item.append_text(out)),
            serde_json::Value::Object(map) => map.values().for_each(|value| value.append_text(out)),
            serde_json::Value::Null | serde_json::Value::Bool(_) | serde_json::Value::Number(_) => {}
        }
    }
}

impl TextTree for serde_yaml::Value {
    fn append_text(&self, out: &mut String) {
        match self {
            serde_yaml::Value::String(text) => {
                out.push_str(text);
                out.push(' ');
            }
            serde_yaml::Value::Sequence(items) => {
                items.iter().for_each(|item| item.append_text(out))
            }
            serde_yaml::Value::Mapping(map) => map.values().for_each(|value| value.append_text(out)),
            serde_yaml::Value::Tagged(tagged) => tagged.value.append_text(out),
            serde_yaml::Value::Null | serde_yaml::Value::Bool(_) | serde_yaml::Value::Number(_) => {}
        }
    }
}
