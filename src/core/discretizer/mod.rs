//! # 이산화기 모듈
//!
//! 구성 검증, 값 ↔ 버킷 정규화, 바이트 인코딩을 묶은 공개 진입점

pub mod config;
pub mod discretizer;


pub use config::{DiscretizerConfig, MappingConfig};
pub use discretizer::{Discretizer, MAX_BYTE_WIDTH};
