//! 양자화 엔진
//!
//! 값 → 정규화 → 매핑 → 반올림/클램프 → 빅엔디언 바이트열, 그리고 그 역과정.

use log::{debug, trace};

use crate::core::error::{ConfigurationError, InvalidInputError};
use crate::core::mapping::Mapping;
use crate::core::packing::{bucket_to_bytes, bytes_to_bucket};

/// 8바이트는 64비트 부동소수점 인코딩 몫으로 남겨둔다
pub const MAX_BYTE_WIDTH: usize = 7;

/// 고정 폭 버킷 이산화기
///
/// 생성 후 불변이므로 잠금 없이 여러 스레드에서 공유할 수 있다.
#[derive(Debug, Clone, PartialEq)]
pub struct Discretizer {
    byte_width: usize,
    value_min: f64,
    value_max: f64,
    value_range: f64,
    bucket_count: u64,
    max_bucket: u64,
    max_bucket_float: f64,
    mapping: Mapping,
}

impl Discretizer {
    /// 파라미터를 검증하고 파생 상수를 계산한다
    pub fn new(
        byte_width: usize,
        value_min: f64,
        value_max: f64,
        mapping: Mapping,
    ) -> Result<Self, ConfigurationError> {
        if byte_width == 0 || byte_width > MAX_BYTE_WIDTH {
            return Err(ConfigurationError::ByteWidthOutOfRange(byte_width));
        }
        if !value_min.is_finite() || !value_max.is_finite() {
            return Err(ConfigurationError::NonFiniteBound {
                min: value_min,
                max: value_max,
            });
        }
        if value_max <= value_min {
            return Err(ConfigurationError::InvertedRange {
                min: value_min,
                max: value_max,
            });
        }

        // 범위가 f64를 넘치면 (예: -MAX..MAX) 정규화가 불가능하다
        let value_range = value_max - value_min;
        if !value_range.is_finite() {
            return Err(ConfigurationError::NonFiniteBound {
                min: value_min,
                max: value_max,
            });
        }

        let bucket_count = 1u64 << (8 * byte_width);
        let max_bucket = bucket_count - 1;

        debug!(
            "discretizer configured: {} byte(s), [{}, {}], {} buckets, mapping={}",
            byte_width, value_min, value_max, bucket_count, mapping
        );

        Ok(Self {
            byte_width,
            value_min,
            value_max,
            value_range,
            bucket_count,
            max_bucket,
            max_bucket_float: max_bucket as f64,
            mapping,
        })
    }

    pub fn linear(byte_width: usize, value_min: f64, value_max: f64) -> Result<Self, ConfigurationError> {
        Self::new(byte_width, value_min, value_max, Mapping::Linear)
    }

    pub fn cube_root(byte_width: usize, value_min: f64, value_max: f64) -> Result<Self, ConfigurationError> {
        Self::new(byte_width, value_min, value_max, Mapping::CubeRoot)
    }

    pub fn sigmoid(
        byte_width: usize,
        value_min: f64,
        value_max: f64,
        sharpness: f64,
    ) -> Result<Self, ConfigurationError> {
        let mapping = Mapping::sigmoid(sharpness)?;
        Self::new(byte_width, value_min, value_max, mapping)
    }

    pub fn byte_width(&self) -> usize {
        self.byte_width
    }

    pub fn bucket_count(&self) -> u64 {
        self.bucket_count
    }

    pub fn max_bucket(&self) -> u64 {
        self.max_bucket
    }

    pub fn max_bucket_float(&self) -> f64 {
        self.max_bucket_float
    }

    pub fn value_min(&self) -> f64 {
        self.value_min
    }

    pub fn value_max(&self) -> f64 {
        self.value_max
    }

    pub fn value_range(&self) -> f64 {
        self.value_range
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// 정규화된 값 `v ∈ [0, 1]`에 순방향 형태 함수 적용
    pub fn map_encoder(&self, v: f64) -> f64 {
        self.mapping.encode_shape(v)
    }

    /// 정규화된 버킷 `b ∈ [0, 1]`에 역방향 형태 함수 적용
    pub fn map_decoder(&self, b: f64) -> f64 {
        self.mapping.decode_shape(b)
    }

    /// 값 → `byte_width` 바이트 빅엔디언 코드
    pub fn encode(&self, value: f64) -> Result<Vec<u8>, InvalidInputError> {
        let bucket = self.value_to_bucket(value)?;
        Ok(bucket_to_bytes(bucket, self.byte_width))
    }

    /// `byte_width` 바이트 코드 → 값
    pub fn decode(&self, bytes: &[u8]) -> Result<f64, InvalidInputError> {
        if bytes.len() != self.byte_width {
            return Err(InvalidInputError::ByteLength {
                expected: self.byte_width,
                actual: bytes.len(),
            });
        }
        let bucket = bytes_to_bucket(bytes)?;
        self.bucket_to_value(bucket)
    }

    /// 값 → 버킷 번호
    ///
    /// 범위 밖의 유한한 값은 오류가 아니라 가장 가까운 경계 버킷으로 포화된다.
    pub fn value_to_bucket(&self, value: f64) -> Result<u64, InvalidInputError> {
        if !value.is_finite() {
            return Err(InvalidInputError::NonFiniteValue(value));
        }

        let v = (value - self.value_min) / self.value_range;
        // 경계에서는 형태 함수를 호출하지 않는다
        if v <= 0.0 {
            if v < 0.0 {
                trace!("value {} below {}, saturating to bucket 0", value, self.value_min);
            }
            return Ok(0);
        }
        if v >= 1.0 {
            if v > 1.0 {
                trace!(
                    "value {} above {}, saturating to bucket {}",
                    value, self.value_max, self.max_bucket
                );
            }
            return Ok(self.max_bucket);
        }

        let b = self.mapping.encode_shape(v);

        // f64::round는 0에서 먼 쪽으로 반올림한다 (half away from zero)
        let n = (b * self.max_bucket_float).round();
        if n.is_nan() || n <= 0.0 {
            Ok(0)
        } else if n >= self.max_bucket_float {
            Ok(self.max_bucket)
        } else {
            Ok((n as u64).min(self.max_bucket))
        }
    }

    /// 버킷 번호 → 값
    pub fn bucket_to_value(&self, bucket: u64) -> Result<f64, InvalidInputError> {
        if bucket > self.max_bucket {
            return Err(InvalidInputError::BucketOutOfRange {
                bucket,
                max_bucket: self.max_bucket,
            });
        }

        let b = bucket as f64 / self.max_bucket_float;
        if b <= 0.0 {
            return Ok(self.value_min);
        }
        if b >= 1.0 {
            return Ok(self.value_max);
        }

        let v = self.mapping.decode_shape(b);
        if v.is_nan() || v <= 0.0 {
            Ok(self.value_min)
        } else if v >= 1.0 {
            Ok(self.value_max)
        } else {
            Ok(self.value_min + v * self.value_range)
        }
    }
}
