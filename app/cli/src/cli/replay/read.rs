use eyre::{Result, WrapErr};
use mapping::dispatch::Primitive;

/// Parses one JSON Lines entry. Blank lines yield `None`.
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<Primitive>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line)
        .map(Some)
        .wrap_err_with(|| format!("line {line_number}: invalid primitive"))
}
