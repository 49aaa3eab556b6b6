use crate::ConfigError;

/// Splits a `Name: value` argument at the first colon and trims both halves.
pub fn parse_header(raw: &str) -> Result<(String, String), ConfigError> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| ConfigError::MalformedHeader(raw.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(ConfigError::MalformedHeader(raw.to_string()));
    }
    Ok((name.to_string(), value.trim().to_string()))
}
