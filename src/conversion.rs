use thiserror::Error;

use crate::ufh::{FluidKind, HeatMode, InsulationPreset};
use crate::units::*;

/// 문자열 → 단위/선택지 변환 시 발생 가능한 오류.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 알 수 없는 선택지(열매체, 단열재, 계산 방식)
    #[error("알 수 없는 {kind}: {value}")]
    UnknownChoice { kind: &'static str, value: String },
}

fn unknown(kind: &'static str, s: &str) -> ConversionError {
    ConversionError::UnknownChoice {
        kind,
        value: s.to_string(),
    }
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "bar" => Ok(PressureUnit::Bar),
        "mbar" | "millibar" => Ok(PressureUnit::MilliBar),
        "mwc" | "mh2o" | "mvs" => Ok(PressureUnit::MeterWaterColumn),
        "psi" => Ok(PressureUnit::Psi),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_flow_unit(s: &str) -> Result<FlowUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "l/min" | "lpm" => Ok(FlowUnit::LiterPerMinute),
        "l/h" | "lph" => Ok(FlowUnit::LiterPerHour),
        "m3/h" | "m^3/h" => Ok(FlowUnit::CubicMeterPerHour),
        "gpm" => Ok(FlowUnit::UsGpm),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "ft" | "foot" | "feet" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_velocity_unit(s: &str) -> Result<VelocityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m/s" | "mps" => Ok(VelocityUnit::MeterPerSecond),
        "ft/s" | "fps" => Ok(VelocityUnit::FootPerSecond),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m2" | "m^2" | "sqm" => Ok(AreaUnit::SquareMeter),
        "ft2" | "ft^2" | "sqft" => Ok(AreaUnit::SquareFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_fluid_kind(s: &str) -> Result<FluidKind, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "water" | "w" => Ok(FluidKind::Water),
        "pg30" | "glycol" | "pg" => Ok(FluidKind::PropyleneGlycol30),
        _ => Err(unknown("열매체", s)),
    }
}

pub fn parse_insulation(s: &str) -> Result<InsulationPreset, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "pe6" => Ok(InsulationPreset::Pe6),
        "pe9" => Ok(InsulationPreset::Pe9),
        "pe13" => Ok(InsulationPreset::Pe13),
        "custom" => Ok(InsulationPreset::Custom),
        _ => Err(unknown("단열재", s)),
    }
}

pub fn parse_heat_mode(s: &str) -> Result<HeatMode, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "dt" | "delta-t" | "deltat" => Ok(HeatMode::DeltaT),
        "q" | "flux" => Ok(HeatMode::Flux),
        _ => Err(unknown("계산 방식", s)),
    }
}
