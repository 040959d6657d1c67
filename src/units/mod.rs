//! 결과표 표시 단위 정의 및 변환 모듈 모음.
//! 계산은 항상 kPa, L/min, m, m/s, m² 로 하고 변환은 표시 단계에서만 한다.

pub mod area;
pub mod flow;
pub mod length;
pub mod pressure;
pub mod velocity;

pub use area::{convert_area, AreaUnit};
pub use flow::{convert_flow, FlowUnit};
pub use length::{convert_length, LengthUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use velocity::{convert_velocity, VelocityUnit};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pressure_drop_to_water_column() {
        let mwc = convert_pressure(20.0, PressureUnit::KiloPascal, PressureUnit::MeterWaterColumn);
        assert_relative_eq!(mwc, 2.0394, epsilon = 1e-4);
        let mbar = convert_pressure(20.0, PressureUnit::KiloPascal, PressureUnit::MilliBar);
        assert_relative_eq!(mbar, 200.0, epsilon = 1e-9);
    }

    #[test]
    fn flow_l_min_to_m3_h() {
        let m3h = convert_flow(2.0, FlowUnit::LiterPerMinute, FlowUnit::CubicMeterPerHour);
        assert_relative_eq!(m3h, 0.12, epsilon = 1e-12);
        let lh = convert_flow(2.0, FlowUnit::LiterPerMinute, FlowUnit::LiterPerHour);
        assert_relative_eq!(lh, 120.0, epsilon = 1e-12);
    }

    #[test]
    fn imperial_lengths_and_areas() {
        assert_relative_eq!(convert_length(100.0, LengthUnit::Meter, LengthUnit::Foot), 328.084, epsilon = 1e-3);
        assert_relative_eq!(convert_area(10.0, AreaUnit::SquareMeter, AreaUnit::SquareFoot), 107.639, epsilon = 1e-3);
        assert_relative_eq!(
            convert_velocity(0.3048, VelocityUnit::MeterPerSecond, VelocityUnit::FootPerSecond),
            1.0,
            epsilon = 1e-12
        );
    }
}
