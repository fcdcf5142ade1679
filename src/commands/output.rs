use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::har::SnippetDocument;

fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(io::stdout().lock()));
    }
    Ok(Box::new(BufWriter::new(File::create(path)?)))
}

/// Write `document` to `output` (stdout when `None` or `-`).
pub fn write_document(
    document: &SnippetDocument,
    output: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let output_path = output.unwrap_or_else(|| Path::new("-"));

    let mut writer = open_output(output_path)?;
    if pretty {
        serde_json::to_writer_pretty(&mut writer, document)?;
    } else {
        serde_json::to_writer(&mut writer, document)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;

    if output_path != Path::new("-") {
        println!(
            "Wrote {} entries to {}",
            document.log.entries.len(),
            output_path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_document;
    use crate::har::SnippetDocument;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn writes_pretty_utf8_to_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.json");
        let doc = SnippetDocument::new(vec![json!({"request": {"url": "https://例え.jp/click"}})]);

        write_document(&doc, Some(&path), true).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("https://例え.jp/click"));
        assert!(written.starts_with("{\n  \"log\": {\n    \"entries\": ["));
        assert!(written.ends_with("}\n"));
    }

    #[test]
    fn writes_compact_to_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.json");

        write_document(&SnippetDocument::default(), Some(&path), false).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\"log\":{\"entries\":[]}}\n");
    }
}
