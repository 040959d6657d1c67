use serde::{Deserialize, Serialize};

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    FootPerSecond,
}

impl VelocityUnit {
    pub const ALL: [VelocityUnit; 2] = [VelocityUnit::MeterPerSecond, VelocityUnit::FootPerSecond];

    pub fn label(&self) -> &'static str {
        match self {
            VelocityUnit::MeterPerSecond => "m/s",
            VelocityUnit::FootPerSecond => "ft/s",
        }
    }
}

/// 속도를 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    let mps = match from {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::FootPerSecond => value * 0.3048,
    };
    match to {
        VelocityUnit::MeterPerSecond => mps,
        VelocityUnit::FootPerSecond => mps / 0.3048,
    }
}
