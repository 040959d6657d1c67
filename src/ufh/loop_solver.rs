use std::f64::consts::PI;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use super::feed_loss::FeedLossResult;
use super::fluid_props::FluidProperties;
use super::friction::friction_factor;
use super::input::CalculationInput;

/// 브래킷 확장 상한 [m]. 시공 한계가 아니라 수치 탐색 안전장치다.
pub const MAX_SEARCH_LENGTH_M: f64 = 1_000_000.0;
/// 이분법 최대 반복 횟수
pub const MAX_BISECTION_ITERATIONS: usize = 60;
/// 목표 압력손실 허용 오차 [Pa]
pub const PRESSURE_TOLERANCE_PA: f64 = 1.0;

/// 해당 관경의 결과를 결정한 제약 조건.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindingConstraint {
    /// 필요 열량이 0 이하라 코일 길이가 0으로 수렴
    Heat,
    /// 허용 압력손실에 도달
    Hydraulic,
}

impl BindingConstraint {
    pub fn code(&self) -> &'static str {
        match self {
            BindingConstraint::Heat => "heat",
            BindingConstraint::Hydraulic => "hydraulic",
        }
    }
}

/// 관경 하나에 대한 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiameterResult {
    /// 내경 [mm]
    pub diameter_mm: f64,
    /// 코일 길이 [m]
    pub loop_length_m: f64,
    /// 코일 + 공급관 길이 [m]
    pub total_length_m: f64,
    /// 유량 [L/min]
    pub flow_l_per_min: f64,
    /// 바닥 방열량 [W]
    pub loop_power_w: f64,
    /// 공급관 단위 길이당 열손실 [W/m]
    pub feed_loss_w_per_m: f64,
    /// 공급관 열손실 [W]
    pub feed_power_w: f64,
    /// 전체 열량 [W]
    pub total_power_w: f64,
    /// 담당 바닥 면적 [m²]
    pub area_m2: f64,
    /// 평균 유속 [m/s]
    pub velocity_m_per_s: f64,
    pub reynolds: f64,
    /// 압력손실 [kPa]
    pub pressure_drop_kpa: f64,
    pub binding: BindingConstraint,
}

/// 특정 코일 길이에서의 운전점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// 바닥 방열량 [W]
    pub loop_power_w: f64,
    /// 공급관 손실 포함 전체 열량 [W]
    pub total_power_w: f64,
    /// 체적 유량 [m³/s]
    pub flow_m3_per_s: f64,
    pub velocity_m_per_s: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    /// 코일 + 공급관 전체 압력손실 [Pa]
    pub pressure_drop_pa: f64,
}

/// 관경 하나에 대해 코일 길이 → 압력손실 관계를 평가한다.
///
/// 공급관은 열량 측면에서는 추가 손실, 수력 측면에서는 같은 관경의 직관 길이로 더해진다.
/// 양의 유량에서 압력손실은 길이에 대해 단조 비감소이며 이분법은 이 성질에 의존한다.
#[derive(Debug, Clone, Copy)]
pub struct LoopHydraulics {
    diameter_m: f64,
    power_per_meter_w_per_m: f64,
    feed_power_w: f64,
    feed_length_m: f64,
    carrier_delta_t_k: f64,
    roughness_m: f64,
    fluid: FluidProperties,
}

impl LoopHydraulics {
    pub fn new(
        diameter_mm: f64,
        input: &CalculationInput,
        fluid: &FluidProperties,
        feed: &FeedLossResult,
    ) -> Self {
        Self {
            diameter_m: diameter_mm / 1000.0,
            power_per_meter_w_per_m: input.power_per_meter_w_per_m(),
            feed_power_w: feed.total_loss_w,
            feed_length_m: input.feed_length_m,
            carrier_delta_t_k: input.carrier_delta_t_k,
            roughness_m: input.roughness_m(),
            fluid: *fluid,
        }
    }

    /// 코일 길이 `loop_length_m` 에서의 유량, 유속, 레이놀즈수, 압력손실을 계산한다.
    pub fn operating_point(&self, loop_length_m: f64) -> OperatingPoint {
        let rho = self.fluid.density_kg_per_m3;
        let mu = self.fluid.dynamic_viscosity_pa_s;
        let cp = self.fluid.specific_heat_j_per_kg_k;
        let d = self.diameter_m;

        let loop_power = self.power_per_meter_w_per_m * loop_length_m;
        let total_power = loop_power + self.feed_power_w;
        let flow = if total_power <= 0.0 {
            0.0
        } else {
            total_power / (rho * cp * self.carrier_delta_t_k)
        };
        let area = PI * d * d / 4.0;
        let velocity = if area > 0.0 { flow / area } else { 0.0 };
        let reynolds = rho * velocity * d / mu;
        let f = friction_factor(reynolds, self.roughness_m, d);

        // f=0 이면 유동이 없는 것으로 보고 압력손실도 0
        let dp_per_m = if f > 0.0 {
            f * (rho * velocity * velocity / 2.0) / d
        } else {
            0.0
        };
        let hydraulic_length = loop_length_m + self.feed_length_m;

        OperatingPoint {
            loop_power_w: loop_power,
            total_power_w: total_power,
            flow_m3_per_s: flow,
            velocity_m_per_s: velocity,
            reynolds,
            friction_factor: f,
            pressure_drop_pa: dp_per_m * hydraulic_length,
        }
    }

    /// 코일 길이에 대한 전체 압력손실 [Pa].
    pub fn pressure_drop_pa(&self, loop_length_m: f64) -> f64 {
        self.operating_point(loop_length_m).pressure_drop_pa
    }

    /// 압력손실이 `target_pa` 가 되는 코일 길이를 찾는다.
    ///
    /// [0, 1] 에서 시작해 상한을 두 배씩 늘려 브래킷을 잡은 뒤 최대 60회 이분한다.
    /// 잔차가 1 Pa 이내면 즉시 종료한다. 결과는 `MAX_SEARCH_LENGTH_M` 을 넘지 않는다.
    pub fn solve_length(&self, target_pa: f64) -> f64 {
        let mut lo = 0.0;
        let mut hi = 1.0;
        while self.pressure_drop_pa(hi) < target_pa && hi < MAX_SEARCH_LENGTH_M {
            hi *= 2.0;
        }
        if hi >= MAX_SEARCH_LENGTH_M && self.pressure_drop_pa(hi) < target_pa {
            warn!(
                "D={:.1} mm: {:.0} m 에서도 목표 압력손실 {:.0} Pa 에 도달하지 못함",
                self.diameter_m * 1000.0,
                hi,
                target_pa
            );
        }

        for i in 0..MAX_BISECTION_ITERATIONS {
            let mid = 0.5 * (lo + hi);
            let dp = self.pressure_drop_pa(mid);
            if (dp - target_pa).abs() < PRESSURE_TOLERANCE_PA {
                trace!("bisection converged after {} iterations at L={mid:.3} m", i + 1);
                lo = mid;
                hi = mid;
                break;
            }
            if dp > target_pa {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        trace!("bisection bracket [{lo}, {hi}]");
        hi.min(MAX_SEARCH_LENGTH_M)
    }
}

/// 관경 하나에 대해 허용 압력손실을 만족하는 최대 코일 길이와 결과값을 계산한다.
pub fn solve_max_length(
    diameter_mm: f64,
    input: &CalculationInput,
    fluid: &FluidProperties,
    feed: &FeedLossResult,
) -> DiameterResult {
    let hydraulics = LoopHydraulics::new(diameter_mm, input, fluid, feed);

    if !(input.power_per_meter_w_per_m() > 0.0) {
        debug!("D={diameter_mm} mm: 필요 열량이 없어 코일 길이 0");
        return DiameterResult {
            diameter_mm,
            loop_length_m: 0.0,
            total_length_m: input.feed_length_m,
            flow_l_per_min: 0.0,
            loop_power_w: 0.0,
            feed_loss_w_per_m: feed.loss_w_per_m,
            feed_power_w: feed.total_loss_w,
            total_power_w: feed.total_loss_w,
            area_m2: 0.0,
            velocity_m_per_s: 0.0,
            reynolds: 0.0,
            pressure_drop_kpa: 0.0,
            binding: BindingConstraint::Heat,
        };
    }

    let loop_length = hydraulics.solve_length(input.target_pressure_drop_pa());
    let op = hydraulics.operating_point(loop_length);
    debug!(
        "D={diameter_mm} mm: L={loop_length:.2} m, v={:.3} m/s, Re={:.0}, dp={:.1} Pa",
        op.velocity_m_per_s, op.reynolds, op.pressure_drop_pa
    );

    DiameterResult {
        diameter_mm,
        loop_length_m: loop_length,
        total_length_m: loop_length + input.feed_length_m,
        flow_l_per_min: op.flow_m3_per_s * 60.0 * 1000.0,
        loop_power_w: op.loop_power_w,
        feed_loss_w_per_m: feed.loss_w_per_m,
        feed_power_w: feed.total_loss_w,
        total_power_w: op.total_power_w,
        area_m2: loop_length * input.laying_step_m(),
        velocity_m_per_s: op.velocity_m_per_s,
        reynolds: op.reynolds,
        pressure_drop_kpa: op.pressure_drop_pa / 1000.0,
        binding: BindingConstraint::Hydraulic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ufh::feed_loss::{feed_loss, FeedLossInput};

    fn setup(diameter_mm: f64, input: &CalculationInput) -> (FluidProperties, FeedLossResult) {
        let fluid = input.fluid_properties();
        let feed = feed_loss(FeedLossInput {
            diameter_m: diameter_mm / 1000.0,
            fluid_mean_temp_c: input.fluid_mean_temp_c,
            air_temp_c: input.air_temp_c,
            insulation: input.insulation_spec(),
            feed_length_m: input.feed_length_m,
        });
        (fluid, feed)
    }

    #[test]
    fn zero_length_still_carries_feed_flow() {
        let input = CalculationInput::default();
        let (fluid, feed) = setup(16.0, &input);
        let h = LoopHydraulics::new(16.0, &input, &fluid, &feed);
        let op = h.operating_point(0.0);
        assert_eq!(op.loop_power_w, 0.0);
        assert!(op.flow_m3_per_s > 0.0);
        assert!(op.pressure_drop_pa > 0.0);
    }

    #[test]
    fn no_power_means_no_pressure_drop() {
        let input = CalculationInput {
            fluid_mean_temp_c: 20.0,
            surface_temp_c: 22.0,
            ..Default::default()
        };
        let (fluid, feed) = setup(16.0, &input);
        assert_eq!(feed.total_loss_w, 0.0);
        let h = LoopHydraulics::new(16.0, &input, &fluid, &feed);
        let op = h.operating_point(50.0);
        assert_eq!(op.flow_m3_per_s, 0.0);
        assert_eq!(op.reynolds, 0.0);
        assert_eq!(op.pressure_drop_pa, 0.0);
    }

    #[test]
    fn solved_length_hits_target_within_tolerance() {
        let input = CalculationInput::default();
        let (fluid, feed) = setup(16.0, &input);
        let res = solve_max_length(16.0, &input, &fluid, &feed);
        assert_eq!(res.binding, BindingConstraint::Hydraulic);
        assert!((res.pressure_drop_kpa * 1000.0 - 20_000.0).abs() <= PRESSURE_TOLERANCE_PA);
        assert!(res.loop_length_m > 50.0 && res.loop_length_m < 300.0, "L={}", res.loop_length_m);
        assert!((res.total_length_m - res.loop_length_m - 10.0).abs() < 1e-9);
        assert!((res.area_m2 - res.loop_length_m * 0.15).abs() < 1e-9);
        assert!((res.total_power_w - res.loop_power_w - res.feed_power_w).abs() < 1e-6);
    }

    #[test]
    fn heat_limited_short_circuits() {
        let input = CalculationInput {
            surface_temp_c: 22.0,
            ..Default::default()
        };
        let (fluid, feed) = setup(12.0, &input);
        let res = solve_max_length(12.0, &input, &fluid, &feed);
        assert_eq!(res.binding, BindingConstraint::Heat);
        assert_eq!(res.loop_length_m, 0.0);
        assert_eq!(res.total_length_m, 10.0);
        assert_eq!(res.velocity_m_per_s, 0.0);
        assert_eq!(res.reynolds, 0.0);
        assert_eq!(res.pressure_drop_kpa, 0.0);
        assert_eq!(res.total_power_w, feed.total_loss_w);
    }

    #[test]
    fn unreachable_target_is_capped() {
        // 관경 0: 마찰계수 0 → 압력손실 0, 목표에 도달할 수 없음
        let input = CalculationInput::default();
        let (fluid, feed) = setup(0.0, &input);
        let res = solve_max_length(0.0, &input, &fluid, &feed);
        assert_eq!(res.loop_length_m, MAX_SEARCH_LENGTH_M);
        assert_eq!(res.pressure_drop_kpa, 0.0);
    }
}
