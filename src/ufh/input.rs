use serde::{Deserialize, Serialize};

use super::fluid_props::{self, FluidKind, FluidProperties};

/// 사용자 지정 단열재 열전도율 하한 [W/(m·K)]
pub const MIN_INSULATION_CONDUCTIVITY_W_PER_M_K: f64 = 0.005;
/// 사용자 지정 단열재 두께 하한 [mm]
pub const MIN_INSULATION_THICKNESS_MM: f64 = 0.1;
/// 화면에서 바로 고를 수 있는 배관 간격 [mm]
pub const LAYING_STEP_CHOICES_MM: [f64; 5] = [100.0, 150.0, 200.0, 250.0, 300.0];

const FOAM_PE_CONDUCTIVITY_W_PER_M_K: f64 = 0.035;

/// 필요 열유속을 정하는 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatMode {
    /// q = h·(T표면 − T실내)
    DeltaT,
    /// 사용자가 입력한 q [W/m²]
    Flux,
}

/// 공급관 단열재 선택.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsulationPreset {
    /// 발포 PE 6 mm
    Pe6,
    /// 발포 PE 9 mm
    Pe9,
    /// 발포 PE 13 mm
    Pe13,
    /// 사용자 지정 λ/두께
    Custom,
}

impl InsulationPreset {
    pub fn code(&self) -> &'static str {
        match self {
            InsulationPreset::Pe6 => "pe6",
            InsulationPreset::Pe9 => "pe9",
            InsulationPreset::Pe13 => "pe13",
            InsulationPreset::Custom => "custom",
        }
    }

    /// 고정 프리셋의 단열 사양. `Custom` 은 None.
    pub fn spec(&self) -> Option<InsulationSpec> {
        let thickness_m = match self {
            InsulationPreset::Pe6 => 0.006,
            InsulationPreset::Pe9 => 0.009,
            InsulationPreset::Pe13 => 0.013,
            InsulationPreset::Custom => return None,
        };
        Some(InsulationSpec {
            conductivity_w_per_m_k: FOAM_PE_CONDUCTIVITY_W_PER_M_K,
            thickness_m,
        })
    }
}

/// 단열재 열전도율과 반경 방향 두께.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsulationSpec {
    /// λ [W/(m·K)]
    pub conductivity_w_per_m_k: f64,
    /// 두께 [m]
    pub thickness_m: f64,
}

impl InsulationSpec {
    /// 사용자 입력값(λ, 두께 mm)으로 사양을 만든다. 두 값 모두 하한으로 보정한다.
    pub fn custom(conductivity_w_per_m_k: f64, thickness_mm: f64) -> Self {
        Self {
            conductivity_w_per_m_k: conductivity_w_per_m_k.max(MIN_INSULATION_CONDUCTIVITY_W_PER_M_K),
            thickness_m: thickness_mm.max(MIN_INSULATION_THICKNESS_MM) / 1000.0,
        }
    }
}

/// 한 번의 계산에 쓰이는 전체 입력값.
///
/// `heat_mode` 가 `DeltaT` 이면 표면/실내 온도와 열전달계수가, `Flux` 이면 `flux_w_per_m2` 가
/// 필요 열유속을 결정한다. 나머지 필드는 두 방식 모두에서 쓰인다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationInput {
    /// 바닥 표면 온도 [°C]
    pub surface_temp_c: f64,
    /// 실내 공기 온도 [°C]
    pub air_temp_c: f64,
    /// 배관 간격 [mm]
    pub laying_step_mm: f64,
    /// 공급/환수 온도차 [K]
    pub carrier_delta_t_k: f64,
    /// 바닥 열전달계수 h [W/(m²·K)]
    pub floor_heat_transfer_w_per_m2_k: f64,
    /// 코일당 허용 압력손실 [kPa]
    pub max_pressure_drop_kpa: f64,
    /// 공급관(왕복) 길이 [m]
    pub feed_length_m: f64,
    pub fluid: FluidKind,
    /// 열매체 평균 온도 [°C]
    pub fluid_mean_temp_c: f64,
    /// 관 내면 거칠기 ε [mm]
    pub roughness_mm: f64,
    pub insulation: InsulationPreset,
    /// `Custom` 단열재 λ [W/(m·K)]
    pub custom_insulation_conductivity_w_per_m_k: f64,
    /// `Custom` 단열재 두께 [mm]
    pub custom_insulation_thickness_mm: f64,
    pub heat_mode: HeatMode,
    /// `Flux` 모드에서 쓰는 열유속 [W/m²]
    pub flux_w_per_m2: f64,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            surface_temp_c: 29.0,
            air_temp_c: 22.0,
            laying_step_mm: 150.0,
            carrier_delta_t_k: 5.0,
            floor_heat_transfer_w_per_m2_k: 10.0,
            max_pressure_drop_kpa: 20.0,
            feed_length_m: 10.0,
            fluid: FluidKind::Water,
            fluid_mean_temp_c: 35.0,
            roughness_mm: 0.007,
            insulation: InsulationPreset::Pe9,
            custom_insulation_conductivity_w_per_m_k: 0.035,
            custom_insulation_thickness_mm: 9.0,
            heat_mode: HeatMode::DeltaT,
            flux_w_per_m2: 60.0,
        }
    }
}

impl CalculationInput {
    /// 필요 열유속 q [W/m²]. 음수는 0으로 처리한다.
    pub fn required_flux_w_per_m2(&self) -> f64 {
        match self.heat_mode {
            HeatMode::Flux => self.flux_w_per_m2.max(0.0),
            HeatMode::DeltaT => {
                let dt = (self.surface_temp_c - self.air_temp_c).max(0.0);
                (self.floor_heat_transfer_w_per_m2_k * dt).max(0.0)
            }
        }
    }

    pub fn laying_step_m(&self) -> f64 {
        self.laying_step_mm / 1000.0
    }

    /// 바닥 매설관 1 m 당 필요 열량 [W/m] = q·간격
    pub fn power_per_meter_w_per_m(&self) -> f64 {
        self.required_flux_w_per_m2() * self.laying_step_m()
    }

    pub fn target_pressure_drop_pa(&self) -> f64 {
        self.max_pressure_drop_kpa * 1000.0
    }

    pub fn roughness_m(&self) -> f64 {
        self.roughness_mm / 1000.0
    }

    /// 현재 선택된 단열 사양.
    pub fn insulation_spec(&self) -> InsulationSpec {
        self.insulation.spec().unwrap_or_else(|| {
            InsulationSpec::custom(
                self.custom_insulation_conductivity_w_per_m_k,
                self.custom_insulation_thickness_mm,
            )
        })
    }

    pub fn fluid_properties(&self) -> FluidProperties {
        fluid_props::resolve(self.fluid, self.fluid_mean_temp_c)
    }
}

/// 결과표 위에 표시하는 열량 요약.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatDemandSummary {
    /// 배관 간격 [m]
    pub laying_step_m: f64,
    /// 필요 열유속 q [W/m²]
    pub required_flux_w_per_m2: f64,
    /// 배관 1 m 당 열량 [W/m]
    pub power_per_meter_w_per_m: f64,
}

/// 입력값에서 열량 요약을 만든다.
pub fn summarize(input: &CalculationInput) -> HeatDemandSummary {
    HeatDemandSummary {
        laying_step_m: input.laying_step_m(),
        required_flux_w_per_m2: input.required_flux_w_per_m2(),
        power_per_meter_w_per_m: input.power_per_meter_w_per_m(),
    }
}
