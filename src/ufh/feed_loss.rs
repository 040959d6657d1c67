use std::f64::consts::PI;

use super::input::InsulationSpec;

/// 공급관 벽 두께 [m]
pub const PIPE_WALL_THICKNESS_M: f64 = 0.002;
/// PE/PEX/PE-RT 관 열전도율 [W/(m·K)]
pub const PIPE_CONDUCTIVITY_W_PER_M_K: f64 = 0.40;
/// 단열재 외표면 대류 열전달계수 [W/(m²·K)]
pub const OUTSIDE_FILM_COEFF_W_PER_M2_K: f64 = 8.0;
/// 내반경 하한 [m]
pub const MIN_INNER_RADIUS_M: f64 = 0.0015;

/// 단열된 공급관 열손실 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct FeedLossInput {
    /// 관 내경 [m]
    pub diameter_m: f64,
    /// 열매체 평균 온도 [°C]
    pub fluid_mean_temp_c: f64,
    /// 주위 공기 온도 [°C]
    pub air_temp_c: f64,
    pub insulation: InsulationSpec,
    /// 공급관 길이 [m]
    pub feed_length_m: f64,
}

/// 공급관 열손실 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedLossResult {
    /// 관 벽 열저항 [m·K/W]
    pub wall_resistance: f64,
    /// 단열재 열저항 [m·K/W]
    pub insulation_resistance: f64,
    /// 외표면 대류 열저항 [m·K/W]
    pub outside_resistance: f64,
    /// 단위 길이당 열손실 q' [W/m]
    pub loss_w_per_m: f64,
    /// 전체 공급관 열손실 [W]
    pub total_loss_w: f64,
}

impl FeedLossResult {
    pub fn total_resistance(&self) -> f64 {
        self.wall_resistance + self.insulation_resistance + self.outside_resistance
    }
}

/// 동심 원통 정상상태 전도 + 외부 대류 모델로 공급관 열손실을 계산한다.
///
/// q' = ΔT / (R벽 + R단열 + R외부), ΔT = max(T평균 − T공기, 0)
///
/// 공기보다 차가운 공급관은 열 획득이 아니라 손실 0으로 본다.
pub fn feed_loss(input: FeedLossInput) -> FeedLossResult {
    let r_i = (input.diameter_m / 2.0).max(MIN_INNER_RADIUS_M);
    let r1 = r_i + PIPE_WALL_THICKNESS_M;
    let r2 = r1 + input.insulation.thickness_m;
    let delta_t = (input.fluid_mean_temp_c - input.air_temp_c).max(0.0);

    if !(r2 > r_i) {
        return FeedLossResult {
            wall_resistance: 0.0,
            insulation_resistance: 0.0,
            outside_resistance: 0.0,
            loss_w_per_m: 0.0,
            total_loss_w: 0.0,
        };
    }

    let wall = (r1 / r_i).ln() / (2.0 * PI * PIPE_CONDUCTIVITY_W_PER_M_K);
    let insulation =
        (r2 / r1).ln() / (2.0 * PI * input.insulation.conductivity_w_per_m_k);
    let outside = 1.0 / (OUTSIDE_FILM_COEFF_W_PER_M2_K * 2.0 * PI * r2);
    let total = wall + insulation + outside;
    let loss_w_per_m = if total > 0.0 { delta_t / total } else { 0.0 };

    FeedLossResult {
        wall_resistance: wall,
        insulation_resistance: insulation,
        outside_resistance: outside,
        loss_w_per_m,
        total_loss_w: loss_w_per_m * input.feed_length_m,
    }
}
