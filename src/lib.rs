//! 버킷 이산화기 라이브러리
//!
//! 유계 실수를 고정 폭 부호 없는 정수 코드(버킷 번호)로 양자화하고 다시 복원한다.
//! 선형, 세제곱근, 시그모이드 매핑으로 값 범위 안의 정밀도 분포를 조절한다.
//!
//! ```
//! use discretizer::Discretizer;
//!
//! let d = Discretizer::linear(1, -10.0, 20.0).unwrap();
//! assert_eq!(d.encode(5.0).unwrap(), vec![128]);
//! assert!((d.decode(&[255]).unwrap() - 20.0).abs() < 1e-12);
//! ```

pub mod core;

// 핵심 타입 재수출
pub use crate::core::{
    bucket_to_bytes, bytes_to_bucket, from_hex, minimal_byte_len, to_hex,
    ConfigurationError, InvalidInputError,
    Discretizer, DiscretizerConfig, MappingConfig, MAX_BYTE_WIDTH,
    Mapping, MappingKind, SigmoidShape,
};
