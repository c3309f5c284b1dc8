//! # 이산화기 구성 설정
//!
//! 직렬화 가능한 구성 값. `build()`로 검증된 [`Discretizer`]를 만든다.

use serde::{Deserialize, Serialize};

use super::discretizer::Discretizer;
use crate::core::error::ConfigurationError;
use crate::core::mapping::Mapping;

/// 매핑 전략 설정
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MappingConfig {
    #[default]
    Linear,
    CubeRoot,
    Sigmoid {
        /// 시그모이드 날카로움 (> 0)
        sharpness: f64,
    },
}

impl MappingConfig {
    pub fn build(&self) -> Result<Mapping, ConfigurationError> {
        match *self {
            MappingConfig::Linear => Ok(Mapping::Linear),
            MappingConfig::CubeRoot => Ok(Mapping::CubeRoot),
            MappingConfig::Sigmoid { sharpness } => Mapping::sigmoid(sharpness),
        }
    }
}

impl From<&Mapping> for MappingConfig {
    fn from(mapping: &Mapping) -> Self {
        match mapping {
            Mapping::Linear => MappingConfig::Linear,
            Mapping::CubeRoot => MappingConfig::CubeRoot,
            Mapping::Sigmoid(shape) => MappingConfig::Sigmoid {
                sharpness: shape.sharpness(),
            },
        }
    }
}

/// 이산화기 구성
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscretizerConfig {
    /// 코드 바이트 수 (1-7)
    pub byte_width: usize,
    /// 값 하한
    pub value_min: f64,
    /// 값 상한 (> 하한)
    pub value_max: f64,
    /// 매핑 전략
    #[serde(default)]
    pub mapping: MappingConfig,
}

impl Default for DiscretizerConfig {
    fn default() -> Self {
        Self {
            byte_width: 1,
            value_min: 0.0,
            value_max: 1.0,
            mapping: MappingConfig::Linear,
        }
    }
}

impl DiscretizerConfig {
    pub fn build(&self) -> Result<Discretizer, ConfigurationError> {
        let mapping = self.mapping.build()?;
        Discretizer::new(self.byte_width, self.value_min, self.value_max, mapping)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Discretizer {
    /// 이 이산화기를 다시 만들 수 있는 구성
    pub fn config(&self) -> DiscretizerConfig {
        DiscretizerConfig {
            byte_width: self.byte_width(),
            value_min: self.value_min(),
            value_max: self.value_max(),
            mapping: MappingConfig::from(self.mapping()),
        }
    }
}
