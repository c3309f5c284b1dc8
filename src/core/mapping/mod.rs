//! # 매핑 전략
//!
//! 정규화된 값 공간 `[0, 1]`을 정규화된 버킷 공간 `[0, 1]`로 휘게 하는 형태 함수 쌍.
//! 전략 집합은 닫혀 있으므로 열거형 하나로 표현하고 엔진은 여기서만 분기한다.
//!
//! 형태 함수는 엔진이 경계를 먼저 처리한 뒤 열린 구간 `(0, 1)`에서만 호출된다.

pub mod linear;
pub mod cube_root;
pub mod sigmoid;


use std::fmt;
use std::str::FromStr;

use crate::core::error::ConfigurationError;

pub use sigmoid::SigmoidShape;

/// 매핑 전략 (파라미터 포함)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Mapping {
    #[default]
    Linear,
    CubeRoot,
    Sigmoid(SigmoidShape),
}

impl Mapping {
    /// sharpness를 검증하고 시그모이드 매핑을 만든다
    pub fn sigmoid(sharpness: f64) -> Result<Self, ConfigurationError> {
        SigmoidShape::new(sharpness).map(Mapping::Sigmoid)
    }

    pub fn kind(&self) -> MappingKind {
        match self {
            Mapping::Linear => MappingKind::Linear,
            Mapping::CubeRoot => MappingKind::CubeRoot,
            Mapping::Sigmoid(_) => MappingKind::Sigmoid,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// 시그모이드가 아니면 `None`
    pub fn sharpness(&self) -> Option<f64> {
        match self {
            Mapping::Sigmoid(shape) => Some(shape.sharpness()),
            _ => None,
        }
    }

    /// 순방향 형태 함수 (값 → 버킷 공간)
    #[inline]
    pub fn encode_shape(&self, v: f64) -> f64 {
        match self {
            Mapping::Linear => linear::encode_shape(v),
            Mapping::CubeRoot => cube_root::encode_shape(v),
            Mapping::Sigmoid(shape) => shape.encode_shape(v),
        }
    }

    /// 역방향 형태 함수 (버킷 → 값 공간)
    #[inline]
    pub fn decode_shape(&self, b: f64) -> f64 {
        match self {
            Mapping::Linear => linear::decode_shape(b),
            Mapping::CubeRoot => cube_root::decode_shape(b),
            Mapping::Sigmoid(shape) => shape.decode_shape(b),
        }
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mapping::Sigmoid(shape) => write!(f, "sigmoid(k={})", shape.sharpness()),
            other => f.write_str(other.name()),
        }
    }
}

/// 파라미터 없는 매핑 종류 태그 (CLI 인자 파싱용)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingKind {
    Linear,
    CubeRoot,
    Sigmoid,
}

impl MappingKind {
    pub fn name(&self) -> &'static str {
        match self {
            MappingKind::Linear => "linear",
            MappingKind::CubeRoot => "cube-root",
            MappingKind::Sigmoid => "sigmoid",
        }
    }

    /// 종류와 선택적 sharpness로 매핑을 만든다.
    /// 시그모이드는 sharpness 필수, 나머지는 sharpness를 받지 않는다.
    pub fn with_sharpness(self, sharpness: Option<f64>) -> Result<Mapping, ConfigurationError> {
        match (self, sharpness) {
            (MappingKind::Sigmoid, Some(k)) => Mapping::sigmoid(k),
            (MappingKind::Sigmoid, None) => Err(ConfigurationError::MissingSharpness),
            (kind, Some(_)) => Err(ConfigurationError::UnexpectedSharpness(kind.name().to_string())),
            (MappingKind::Linear, None) => Ok(Mapping::Linear),
            (MappingKind::CubeRoot, None) => Ok(Mapping::CubeRoot),
        }
    }
}

impl FromStr for MappingKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(MappingKind::Linear),
            "cube-root" | "cube_root" | "cuberoot" => Ok(MappingKind::CubeRoot),
            "sigmoid" => Ok(MappingKind::Sigmoid),
            other => Err(ConfigurationError::UnknownMapping(other.to_string())),
        }
    }
}

impl fmt::Display for MappingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
