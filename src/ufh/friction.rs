/// 층류/난류 전환 레이놀즈수. 이 값에서 보간 없이 식이 바뀐다.
pub const LAMINAR_LIMIT_REYNOLDS: f64 = 2000.0;

/// Darcy 마찰계수를 계산한다.
///
/// - `Re <= 0` 또는 `D <= 0`: 0 (유동 없음, 압력손실 없음으로 취급)
/// - `Re < 2000`: 64/Re
/// - 그 외: Swamee–Jain 근사
///
/// Re=2000 에서 층류값(≈0.032)에서 난류값으로 불연속적으로 뛰어오른다. 천이 구간 보간은 하지 않는다.
pub fn friction_factor(reynolds: f64, roughness_m: f64, diameter_m: f64) -> f64 {
    if reynolds <= 0.0 || diameter_m <= 0.0 {
        return 0.0;
    }
    if reynolds < LAMINAR_LIMIT_REYNOLDS {
        return 64.0 / reynolds;
    }
    let term = roughness_m / (3.7 * diameter_m) + 5.74 / reynolds.powf(0.9);
    0.25 / term.log10().powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flow_gives_zero() {
        assert_eq!(friction_factor(0.0, 7e-6, 0.016), 0.0);
        assert_eq!(friction_factor(-5.0, 7e-6, 0.016), 0.0);
        assert_eq!(friction_factor(3000.0, 7e-6, 0.0), 0.0);
        assert_eq!(friction_factor(3000.0, 7e-6, -0.01), 0.0);
    }

    #[test]
    fn laminar_below_threshold() {
        assert_eq!(friction_factor(1999.0, 7e-6, 0.016), 64.0 / 1999.0);
        assert_eq!(friction_factor(100.0, 1e-3, 0.016), 0.64);
    }

    #[test]
    fn swamee_jain_from_threshold_up() {
        let eps = 7e-6;
        let d = 0.016;
        let term = eps / (3.7 * d) + 5.74 / 2000f64.powf(0.9);
        let expected = 0.25 / term.log10().powi(2);
        assert_eq!(friction_factor(2000.0, eps, d), expected);
        // 불연속: 난류식 값이 층류식 값보다 크다
        assert!(friction_factor(2000.0, eps, d) > friction_factor(1999.0, eps, d));
    }

    #[test]
    fn rougher_pipe_has_more_friction() {
        let smooth = friction_factor(10_000.0, 1e-6, 0.016);
        let rough = friction_factor(10_000.0, 1e-4, 0.016);
        assert!(rough > smooth);
    }
}
