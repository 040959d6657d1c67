use serde::{Deserialize, Serialize};

/// 물의 비열 [J/(kg·K)]
pub const WATER_SPECIFIC_HEAT_J_PER_KG_K: f64 = 4180.0;
/// 고온에서 다항식 점도가 0 근처로 떨어지는 것을 막는 하한 [Pa·s]
pub const MIN_WATER_VISCOSITY_PA_S: f64 = 0.00035;

const PG30_DENSITY_KG_PER_M3: f64 = 1030.0;
const PG30_SPECIFIC_HEAT_J_PER_KG_K: f64 = 3800.0;
const PG30_VISCOSITY_PA_S: f64 = 0.0023;

/// 열매체 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FluidKind {
    /// 물 (평균온도에 따라 밀도/점도 변화)
    Water,
    /// 프로필렌글리콜 30% 수용액 (고정 물성)
    PropyleneGlycol30,
}

impl FluidKind {
    pub fn code(&self) -> &'static str {
        match self {
            FluidKind::Water => "water",
            FluidKind::PropyleneGlycol30 => "pg30",
        }
    }

    /// 평균온도에서의 물성을 계산한다.
    pub fn properties(self, mean_temp_c: f64) -> FluidProperties {
        resolve(self, mean_temp_c)
    }
}

/// 평균온도 기준 열매체 물성.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluidProperties {
    /// 밀도 [kg/m³]
    pub density_kg_per_m3: f64,
    /// 점성계수 [Pa·s]
    pub dynamic_viscosity_pa_s: f64,
    /// 비열 [J/(kg·K)]
    pub specific_heat_j_per_kg_k: f64,
}

/// 열매체 종류와 평균온도(°C)로 물성을 구한다.
///
/// 물은 저차 다항식 근사를 쓰며 점도는 `MIN_WATER_VISCOSITY_PA_S` 로 하한을 둔다.
/// 글리콜 혼합액은 온도와 무관한 상수값이다.
pub fn resolve(kind: FluidKind, mean_temp_c: f64) -> FluidProperties {
    match kind {
        FluidKind::PropyleneGlycol30 => FluidProperties {
            density_kg_per_m3: PG30_DENSITY_KG_PER_M3,
            dynamic_viscosity_pa_s: PG30_VISCOSITY_PA_S,
            specific_heat_j_per_kg_k: PG30_SPECIFIC_HEAT_J_PER_KG_K,
        },
        FluidKind::Water => {
            let t = mean_temp_c;
            let density = 1000.0 - 0.3 * (t - 4.0);
            let mu = 0.00179 - 1.3e-5 * t - 1.7e-7 * t * t;
            FluidProperties {
                density_kg_per_m3: density,
                dynamic_viscosity_pa_s: mu.max(MIN_WATER_VISCOSITY_PA_S),
                specific_heat_j_per_kg_k: WATER_SPECIFIC_HEAT_J_PER_KG_K,
            }
        }
    }
}
