//! 버킷 번호 ↔ 빅엔디언 바이트열 변환

use crate::core::error::InvalidInputError;

/// 버킷 번호를 표현하는 데 필요한 최소 바이트 수 (0도 1바이트).
pub fn minimal_byte_len(bucket: u64) -> usize {
    let bits = 64 - bucket.leading_zeros() as usize;
    bits.div_ceil(8).max(1)
}

/// 버킷 번호 → 빅엔디언 바이트열
///
/// 최소 표현을 만든 뒤 길이가 `width`가 될 때까지 앞쪽에 0 바이트를 채운다.
/// `width`가 최소 표현보다 작으면 잘라내지 않고 최소 표현을 그대로 반환한다.
pub fn bucket_to_bytes(bucket: u64, width: usize) -> Vec<u8> {
    let len = minimal_byte_len(bucket);
    let be = bucket.to_be_bytes();

    let mut bytes = vec![0u8; width.saturating_sub(len)];
    bytes.extend_from_slice(&be[be.len() - len..]);
    bytes
}

/// 빅엔디언 바이트열 → 버킷 번호
///
/// 앞쪽의 0 바이트는 몇 개든 허용한다. 유효 바이트가 8개를 넘으면 오류.
pub fn bytes_to_bucket(bytes: &[u8]) -> Result<u64, InvalidInputError> {
    if bytes.is_empty() {
        return Err(InvalidInputError::EmptyBytes);
    }

    let first_nonzero = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first_nonzero..];
    if significant.len() > 8 {
        return Err(InvalidInputError::BucketOverflow(significant.len()));
    }

    Ok(significant
        .iter()
        .fold(0u64, |acc, &byte| (acc << 8) | byte as u64))
}
