//! # 이산화기 오류 타입
//!
//! 생성 시점 오류(`ConfigurationError`)와 호출 시점 입력 오류(`InvalidInputError`)를 구분한다.

use thiserror::Error;

/// 잘못된 생성 파라미터. 생성 시점에만 발생하며 복구 불가능하다.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("byte width must be in 1..=7, got {0} (use a 64-bit float for 8 bytes)")]
    ByteWidthOutOfRange(usize),

    #[error("value bounds must be finite, got min={min}, max={max}")]
    NonFiniteBound { min: f64, max: f64 },

    #[error("value max must be greater than min, got min={min}, max={max}")]
    InvertedRange { min: f64, max: f64 },

    #[error("sigmoid sharpness must be finite and > 0, got {0}")]
    InvalidSharpness(f64),

    #[error("sigmoid mapping requires a sharpness")]
    MissingSharpness,

    #[error("{0} mapping does not take a sharpness")]
    UnexpectedSharpness(String),

    #[error("unknown mapping `{0}` (expected linear, cube-root or sigmoid)")]
    UnknownMapping(String),
}

/// 잘못된 런타임 입력.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidInputError {
    #[error("value must be finite, got {0}")]
    NonFiniteValue(f64),

    #[error("bucket number {bucket} exceeds maximum {max_bucket}")]
    BucketOutOfRange { bucket: u64, max_bucket: u64 },

    #[error("expected {expected} bytes, got {actual}")]
    ByteLength { expected: usize, actual: usize },

    #[error("byte sequence is empty")]
    EmptyBytes,

    #[error("{0} significant bytes do not fit in a 64-bit bucket number")]
    BucketOverflow(usize),

    #[error("invalid hex code `{0}` (expected an even number of hex digits)")]
    InvalidHex(String),
}
