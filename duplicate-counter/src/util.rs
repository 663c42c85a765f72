use contact_tools::error::ToolError;
use contact_tools::util::read_text_file;
use std::path::Path;

pub fn pull_numbers(path: &Path) -> Result<Vec<String>, ToolError> {
    let content = read_text_file(path)?;
    Ok(parse_numbers(&content))
}

/// Trimmed, non-blank lines in file order. `\n`, `\r\n` and a lone `\r` all end
/// a line. No normalization is applied.
pub fn parse_numbers(content: &str) -> Vec<String> {
    content
        .split(|c: char| c == '\n' || c == '\r')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
