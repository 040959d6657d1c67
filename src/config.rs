use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::ufh::{CalculationInput, DEFAULT_DIAMETERS_MM};
use crate::units::*;

/// 기본 설정 파일 경로
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 결과표 표시 단위. 계산에는 영향을 주지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayUnits {
    pub pressure_drop: PressureUnit,
    pub flow: FlowUnit,
    pub length: LengthUnit,
    pub velocity: VelocityUnit,
    pub area: AreaUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            pressure_drop: PressureUnit::KiloPascal,
            flow: FlowUnit::LiterPerMinute,
            length: LengthUnit::Meter,
            velocity: VelocityUnit::MeterPerSecond,
            area: AreaUnit::SquareMeter,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en)
    pub language: String,
    /// 언어팩 디렉터리 (없으면 locales/)
    pub language_pack_dir: Option<String>,
    /// 계산할 내경 후보 [mm]
    pub diameters_mm: Vec<f64>,
    pub display_units: DisplayUnits,
    /// 기본 입력값
    pub input: CalculationInput,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            diameters_mm: DEFAULT_DIAMETERS_MM.to_vec(),
            display_units: DisplayUnits::default(),
            input: CalculationInput::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = parse(&content)?;
        info!("설정 로드: {}", path.display());
        if cfg.diameters_mm.iter().all(|d| !(*d > 0.0)) {
            warn!("{}: 유효한 내경이 없어 결과표가 비어 있게 됩니다", path.display());
        }
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        info!("기본 설정 생성: {}", path.display());
        Ok(cfg)
    }
}

/// TOML 문자열에서 설정을 읽는다. 빠진 항목은 기본값으로 채운다.
pub fn parse(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ufh::{FluidKind, HeatMode};

    #[test]
    fn default_roundtrips_through_toml() {
        let cfg = Config::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(parse(&text).unwrap(), cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let cfg = parse(
            r#"
language = "en"
diameters_mm = [12.0, 16.0]

[display_units]
pressure_drop = "MeterWaterColumn"

[input]
fluid = "PropyleneGlycol30"
heat_mode = "Flux"
flux_w_per_m2 = 55.0
"#,
        )
        .unwrap();
        assert_eq!(cfg.language, "en");
        assert_eq!(cfg.diameters_mm, vec![12.0, 16.0]);
        assert_eq!(cfg.display_units.pressure_drop, PressureUnit::MeterWaterColumn);
        assert_eq!(cfg.display_units.flow, FlowUnit::LiterPerMinute);
        assert_eq!(cfg.input.fluid, FluidKind::PropyleneGlycol30);
        assert_eq!(cfg.input.heat_mode, HeatMode::Flux);
        assert_eq!(cfg.input.flux_w_per_m2, 55.0);
        assert_eq!(cfg.input.laying_step_mm, 150.0);
    }

    #[test]
    fn broken_file_is_a_parse_error() {
        let err = parse("language = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
