use sdstatus_common::status::InstanceStatus;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Renders the collected results as a JSON array indented with tabs.
pub fn to_json_pretty(results: &[InstanceStatus]) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    results.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}
