//! 바이트 코드 ↔ 16진수 문자열 (CLI 입출력용)

use crate::core::error::InvalidInputError;

/// 바이트열 → 소문자 16진수 (접두사 없음)
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// 16진수 문자열 → 바이트열
///
/// 앞뒤 공백과 `0x`/`0X` 접두사 하나를 허용한다. 자릿수는 짝수여야 한다.
pub fn from_hex(raw: &str) -> Result<Vec<u8>, InvalidInputError> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() || digits.len() % 2 != 0 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(InvalidInputError::InvalidHex(raw.to_string()));
    }

    Ok(digits
        .as_bytes()
        .chunks(2)
        .map(|pair| (hex_digit(pair[0]) << 4) | hex_digit(pair[1]))
        .collect())
}

fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    }
}
