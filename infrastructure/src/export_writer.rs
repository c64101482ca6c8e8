use domain::export::ChatExport;
use domain::format::format_message;
use domain::message::Sender;
use shared::types::Result;
use std::fs;
use std::path::PathBuf;

/// Writes conversation exports into a directory.
pub struct ExportWriter {
    dir: PathBuf,
}

impl ExportWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn write_json(&self, export: &ChatExport) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(export.file_name());
        fs::write(&path, export.to_json()?)?;
        Ok(path)
    }

    /// Standalone HTML transcript, messages rendered as chat markup.
    pub fn write_html(&self, export: &ChatExport) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(export.file_name()).with_extension("html");
        fs::write(&path, render_html(export))?;
        Ok(path)
    }
}

pub fn render_html(export: &ChatExport) -> String {
    let mut body = String::new();
    for message in &export.messages {
        let sender = match message.sender {
            Sender::User => "user",
            Sender::Bot => "bot",
        };
        body.push_str(&format!(
            "<div class=\"message {sender}-message\">\n  \
             <div class=\"message-text\">{}</div>\n  \
             <div class=\"message-time\">{}</div>\n</div>\n",
            format_message(&message.text),
            message.timestamp.format("%H:%M:%S"),
        ));
    }
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Conversation {}</title></head>\n\
         <body>\n{}</body>\n</html>\n",
        export.timestamp.format("%Y-%m-%d"),
        body
    )
}
