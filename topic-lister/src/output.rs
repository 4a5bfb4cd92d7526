use std::io::{self, Write};

use crate::config::OutputFormat;
use crate::topic::TopicId;

#[derive(Serialize)]
struct TopicRecord<'a> {
    project: &'a str,
    topic: &'a TopicId,
}

/// Writes one newline-terminated line for `topic`.
pub fn write_topic<W: Write>(
    out: &mut W,
    format: OutputFormat,
    project_id: &str,
    topic: &TopicId,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "Topic Name: {}", topic),
        OutputFormat::Json => {
            let record = TopicRecord {
                project: project_id,
                topic,
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)
        }
    }
}
