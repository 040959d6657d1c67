use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 L/min이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    LiterPerMinute,
    LiterPerHour,
    CubicMeterPerHour,
    /// US gal/min
    UsGpm,
}

const LITERS_PER_US_GALLON: f64 = 3.785_411_784;

impl FlowUnit {
    pub const ALL: [FlowUnit; 4] = [
        FlowUnit::LiterPerMinute,
        FlowUnit::LiterPerHour,
        FlowUnit::CubicMeterPerHour,
        FlowUnit::UsGpm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FlowUnit::LiterPerMinute => "l/min",
            FlowUnit::LiterPerHour => "l/h",
            FlowUnit::CubicMeterPerHour => "m3/h",
            FlowUnit::UsGpm => "gpm",
        }
    }
}

fn to_l_per_min(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::LiterPerMinute => value,
        FlowUnit::LiterPerHour => value / 60.0,
        FlowUnit::CubicMeterPerHour => value * 1000.0 / 60.0,
        FlowUnit::UsGpm => value * LITERS_PER_US_GALLON,
    }
}

fn from_l_per_min(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::LiterPerMinute => value,
        FlowUnit::LiterPerHour => value * 60.0,
        FlowUnit::CubicMeterPerHour => value * 60.0 / 1000.0,
        FlowUnit::UsGpm => value / LITERS_PER_US_GALLON,
    }
}

/// 유량을 다른 단위로 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    from_l_per_min(to_l_per_min(value, from), to)
}
