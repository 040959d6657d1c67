use serde::{Deserialize, Serialize};

/// 압력손실(차압) 표시 단위. 내부 기준은 kPa이며 게이지/절대 구분이 없다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    Bar,
    MilliBar,
    /// 수주 미터(mWC). 펌프 양정과 비교할 때 쓴다.
    MeterWaterColumn,
    Psi,
}

const PA_PER_MWC: f64 = 9_806.65;
const PA_PER_PSI: f64 = 6_894.757;

impl PressureUnit {
    pub const ALL: [PressureUnit; 6] = [
        PressureUnit::KiloPascal,
        PressureUnit::Pascal,
        PressureUnit::Bar,
        PressureUnit::MilliBar,
        PressureUnit::MeterWaterColumn,
        PressureUnit::Psi,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::Bar => "bar",
            PressureUnit::MilliBar => "mbar",
            PressureUnit::MeterWaterColumn => "mWC",
            PressureUnit::Psi => "psi",
        }
    }
}

fn to_pa(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value * 1000.0,
        PressureUnit::Bar => value * 100_000.0,
        PressureUnit::MilliBar => value * 100.0,
        PressureUnit::MeterWaterColumn => value * PA_PER_MWC,
        PressureUnit::Psi => value * PA_PER_PSI,
    }
}

fn from_pa(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_pa,
        PressureUnit::KiloPascal => value_pa / 1000.0,
        PressureUnit::Bar => value_pa / 100_000.0,
        PressureUnit::MilliBar => value_pa / 100.0,
        PressureUnit::MeterWaterColumn => value_pa / PA_PER_MWC,
        PressureUnit::Psi => value_pa / PA_PER_PSI,
    }
}

/// 차압을 다른 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_pa(to_pa(value, from), to)
}
