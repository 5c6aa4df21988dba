//! Conversions between TOML values and raw nodes.

use crate::domain::RawNode;

/// Read a TOML value as a raw node. Datetimes are read as their string form.
pub fn raw_from_toml(value: &toml::Value) -> RawNode {
    match value {
        toml::Value::Boolean(b) => RawNode::Bool(*b),
        toml::Value::Integer(i) => RawNode::Int(*i),
        toml::Value::Float(f) => RawNode::Float(*f),
        toml::Value::String(s) => RawNode::String(s.clone()),
        toml::Value::Datetime(dt) => RawNode::String(dt.to_string()),
        toml::Value::Array(items) => RawNode::List(items.iter().map(raw_from_toml).collect()),
        toml::Value::Table(table) => RawNode::Table(
            table
                .iter()
                .map(|(key, value)| (key.clone(), raw_from_toml(value)))
                .collect(),
        ),
    }
}

/// Encode a raw node as a TOML value.
pub fn toml_from_raw(node: &RawNode) -> toml::Value {
    match node {
        RawNode::Bool(b) => toml::Value::Boolean(*b),
        RawNode::Int(i) => toml::Value::Integer(*i),
        RawNode::Float(f) => toml::Value::Float(*f),
        RawNode::String(s) => toml::Value::String(s.clone()),
        RawNode::List(items) => toml::Value::Array(items.iter().map(toml_from_raw).collect()),
        RawNode::Table(entries) => toml::Value::Table(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), toml_from_raw(value)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_convert_both_ways() {
        let node = RawNode::List(vec![
            RawNode::Bool(true),
            RawNode::Int(3),
            RawNode::Float(1.5),
            RawNode::from("x"),
        ]);
        assert_eq!(raw_from_toml(&toml_from_raw(&node)), node);
    }

    #[test]
    fn test_datetime_reads_as_string() {
        let table: toml::Table = toml::from_str("at = 1979-05-27T07:32:00Z").unwrap();
        assert_eq!(
            raw_from_toml(&table["at"]),
            RawNode::from("1979-05-27T07:32:00Z")
        );
    }

    #[test]
    fn test_table_reads_as_table() {
        let table: toml::Table = toml::from_str("[server]\nport = 1").unwrap();
        match raw_from_toml(&table["server"]) {
            RawNode::Table(entries) => assert_eq!(entries["port"], RawNode::Int(1)),
            other => panic!("expected table, got {other:?}"),
        }
    }
}
