/// 두 시점 값과 기간 수로 연평균 복합 성장률(CAGR)을 계산한다.
///
/// 시작값이 0이거나 기간이 0이면 0을 반환한다. 하류 예측이 0 나눗셈 결과에
/// 끌려가지 않도록 오류 대신 "성장 없음"으로 취급한다.
pub fn cagr(start_value: f64, end_value: f64, periods: u32) -> f64 {
    if start_value == 0.0 || periods == 0 {
        return 0.0;
    }
    let rate = (end_value / start_value).powf(1.0 / periods as f64) - 1.0;
    if rate.is_finite() {
        rate
    } else {
        0.0
    }
}

/// 성장률을 적용한 n년 후 값.
pub fn compound(value: f64, rate: f64, years: u32) -> f64 {
    value * (1.0 + rate).powi(years as i32)
}
