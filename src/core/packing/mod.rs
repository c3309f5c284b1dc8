//! # 비트 패킹
//!
//! 값 도메인과 무관한 순수 정수 ↔ 바이트 변환

pub mod bucket_bytes;
pub mod hex;


pub use bucket_bytes::{bucket_to_bytes, bytes_to_bucket, minimal_byte_len};
pub use hex::{from_hex, to_hex};
