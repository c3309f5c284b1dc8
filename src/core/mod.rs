//! # 이산화기 핵심 모듈
//!
//! 양자화 엔진, 비트 패킹, 매핑 전략

pub mod error;
pub mod packing;
pub mod mapping;
pub mod discretizer;

// 주요 타입들 재수출
pub use error::{ConfigurationError, InvalidInputError};
pub use packing::{bucket_to_bytes, bytes_to_bucket, from_hex, minimal_byte_len, to_hex};
pub use mapping::{Mapping, MappingKind, SigmoidShape};
pub use discretizer::{Discretizer, DiscretizerConfig, MappingConfig, MAX_BYTE_WIDTH};
