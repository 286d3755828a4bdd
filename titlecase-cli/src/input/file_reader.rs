//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::BufRead;
use std::path::Path;

use super::TitleInput;

/// Reads titles, one per line
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read the titles in a file, one per non-blank line
    pub fn read_titles(path: &Path) -> Result<Vec<TitleInput>> {
        let content = Self::read_text(path)?;
        Ok(Self::parse_titles(&content, &path.display().to_string()))
    }

    /// Read titles from any buffered reader (e.g. stdin)
    pub fn read_titles_from<R: BufRead>(reader: R, source: &str) -> Result<Vec<TitleInput>> {
        let mut content = String::new();
        for line in reader.lines() {
            let line = line.with_context(|| format!("Failed to read from {source}"))?;
            content.push_str(&line);
            content.push('\n');
        }
        Ok(Self::parse_titles(&content, source))
    }

    /// Split text into titles. Leading and trailing spaces are kept so that
    /// spacing defects survive; only line terminators are stripped.
    pub fn parse_titles(content: &str, source: &str) -> Vec<TitleInput> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                TitleInput::new(
                    format!("{source}:{}", index + 1),
                    line.strip_suffix('\r').unwrap_or(line),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_titles() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("titles.txt");
        fs::write(
            &file_path,
            "The Wrong Capitalization\n\n A Leading Space\nTrailing Space \n",
        )
        .unwrap();

        let titles = FileReader::read_titles(&file_path).unwrap();
        assert_eq!(titles.len(), 3);
        assert_eq!(titles[0].title, "The Wrong Capitalization");
        assert!(titles[0].source.ends_with("titles.txt:1"));
        assert_eq!(titles[1].title, " A Leading Space");
        assert!(titles[1].source.ends_with("titles.txt:3"));
        assert_eq!(titles[2].title, "Trailing Space ");
    }

    #[test]
    fn test_crlf_line_endings() {
        let titles = FileReader::parse_titles("First Title\r\nSecond Title\r\n", "win.txt");
        assert_eq!(titles[0].title, "First Title");
        assert_eq!(titles[1].title, "Second Title");
    }

    #[test]
    fn test_read_titles_from_reader() {
        let input = std::io::Cursor::new("One Title\n   \nTwo Titles\n");
        let titles = FileReader::read_titles_from(input, "stdin").unwrap();
        assert_eq!(
            titles,
            vec![
                TitleInput::new("stdin:1", "One Title"),
                TitleInput::new("stdin:3", "Two Titles"),
            ]
        );
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let result = FileReader::read_text(Path::new("/nonexistent/file.txt"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read file"));
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        fs::File::create(&file_path).unwrap();

        assert!(FileReader::read_titles(&file_path).unwrap().is_empty());
    }
}
