use crate::ast::{Watch, WatchFile};
use crate::options::serialize_options;

/// Serialize a watch file document back to its textual form.
///
/// The rendering is canonical: one `opts=` line per global option before
/// any entry, and one line per entry with its local options leading.
/// Comments, physical line wrapping and the original quoting style are
/// not reproduced.
pub fn serialize(wf: &WatchFile) -> String {
    let mut output = String::new();

    output.push_str("version=");
    output.push_str(&wf.version.to_string());
    output.push('\n');

    for option in &wf.options {
        output.push_str("opts=");
        output.push_str(option);
        output.push('\n');
    }

    for entry in &wf.entries {
        serialize_entry(entry, &mut output);
        output.push('\n');
    }

    output
}

fn serialize_entry(entry: &Watch, output: &mut String) {
    if let Some(opts) = &entry.options {
        if !opts.is_empty() {
            output.push_str("opts=");
            output.push_str(&serialize_options(opts));
            output.push(' ');
        }
    }
    output.push_str(&entry.url);
    if let Some(pattern) = &entry.matching_pattern {
        output.push(' ');
        output.push_str(pattern);
    }
    if let Some(policy) = &entry.version_policy {
        output.push(' ');
        output.push_str(policy);
    }
    if let Some(script) = &entry.script {
        output.push(' ');
        output.push_str(script);
    }
}
