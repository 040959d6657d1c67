use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Foot,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 2] = [LengthUnit::Meter, LengthUnit::Foot];

    pub fn label(&self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Foot => "ft",
        }
    }
}

fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value,
        LengthUnit::Foot => value * 0.3048,
    }
}

fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value_m,
        LengthUnit::Foot => value_m / 0.3048,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    from_meter(to_meter(value, from), to)
}
