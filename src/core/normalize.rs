use crate::utils::error::ParseError;

pub const SHORT_LEN: usize = 10;
pub const LONG_LEN: usize = 12;

/// Keeps only ASCII digits. Separators such as `-` and `+` are dropped here;
/// the century marker is read from the raw input later.
pub fn normalize(raw: &str) -> Result<String, ParseError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        SHORT_LEN | LONG_LEN => Ok(digits),
        n => Err(ParseError::Format { digits: n }),
    }
}
