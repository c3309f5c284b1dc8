//! 세제곱근 매핑
//!
//! 값 범위의 중앙 부근에 정밀도를 집중시킨다.
//! 순방향은 부호를 보존하는 실수 세제곱근, 역방향은 세제곱이다.

const ONE_THIRD: f64 = 1.0 / 3.0;

/// 순방향: `x = (v - 0.5) / 4`, `b = sign(x)·|x|^(1/3) + 0.5`
#[inline]
pub fn encode_shape(v: f64) -> f64 {
    let x = (v - 0.5) * 0.25;
    let root = x.abs().powf(ONE_THIRD);
    // cbrt 대신 powf 사용: 기존 인코딩 데이터와 비트 단위 호환
    let root = if x < 0.0 { -root } else { root };
    root + 0.5
}

/// 역방향: `v = 4·(b - 0.5)^3 + 0.5`
#[inline]
pub fn decode_shape(b: f64) -> f64 {
    4.0 * (b - 0.5).powf(3.0) + 0.5
}
