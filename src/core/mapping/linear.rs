//! 선형 매핑 (항등 함수, 균일 정밀도)

#[inline]
pub fn encode_shape(v: f64) -> f64 {
    v
}

#[inline]
pub fn decode_shape(b: f64) -> f64 {
    b
}
