//! 시그모이드 매핑
//!
//! 날카로움(sharpness) `k`가 클수록 `v = 0.5` 부근에 정밀도가 집중된다.
//! 정규화 상수 `S = 2 / (e^(k/2) - 1)`는 `b(0) = 0`, `b(1) = 1`을 맞춘다.

use crate::core::error::ConfigurationError;

/// 검증된 sharpness와 파생 상수들
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SigmoidShape {
    k: f64,
    inv_k: f64,
    s: f64,
    one_plus_s: f64,
    half_s: f64,
}

impl SigmoidShape {
    pub fn new(sharpness: f64) -> Result<Self, ConfigurationError> {
        if !sharpness.is_finite() || sharpness <= 0.0 {
            return Err(ConfigurationError::InvalidSharpness(sharpness));
        }

        let s = 2.0 / ((0.5 * sharpness).exp() - 1.0);
        // k가 너무 작으면 e^(k/2) - 1이 0으로 떨어져 S가 발산한다
        if !s.is_finite() {
            return Err(ConfigurationError::InvalidSharpness(sharpness));
        }

        Ok(Self {
            k: sharpness,
            inv_k: 1.0 / sharpness,
            s,
            one_plus_s: 1.0 + s,
            half_s: 0.5 * s,
        })
    }

    pub fn sharpness(&self) -> f64 {
        self.k
    }

    /// 정규화 상수 `S`
    pub fn normalization(&self) -> f64 {
        self.s
    }

    /// 순방향: `b = (1+S) / (1 + e^(k(0.5-v))) - S/2`
    #[inline]
    pub fn encode_shape(&self, v: f64) -> f64 {
        let f = 1.0 + (self.k * (0.5 - v)).exp();
        self.one_plus_s / f - self.half_s
    }

    /// 역방향: `v = 0.5 - (1/k)·ln((1+S) / (b + S/2) - 1)`
    ///
    /// `b`가 1에 매우 가까워 로그 인자가 0 이하로 떨어지면 `+inf`가 되어
    /// 호출 측 클램프에서 1로 포화된다.
    #[inline]
    pub fn decode_shape(&self, b: f64) -> f64 {
        let f = (self.one_plus_s / (b + self.half_s) - 1.0).max(0.0);
        0.5 - self.inv_k * f.ln()
    }
}
