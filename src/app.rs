use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

use crate::config::{self, Config, ConfigError, DEFAULT_CONFIG_PATH};
use crate::conversion::{
    parse_flow_unit, parse_fluid_kind, parse_heat_mode, parse_insulation, parse_length_unit,
    parse_pressure_unit,
};
use crate::i18n::{self, keys, Translator};
use crate::report;
use crate::ufh::{
    self, CalculationInput, DiameterResult, FluidKind, HeatDemandSummary, HeatMode, InsulationPreset,
};
use crate::ui_cli::{self, Console, MenuChoice};
use crate::units::{FlowUnit, LengthUnit, PressureUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 터미널/파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 결과 직렬화 오류
    #[error("결과 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 바닥난방 코일 길이 계산기 CLI.
#[derive(Debug, Parser)]
#[command(name = "ufh_loop_toolbox_cli", version, about)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// 언어 (auto/ko/en)
    #[arg(long, short = 'L', global = true)]
    pub lang: Option<String>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 설정된 입력값으로 계산하고 결과표를 출력한다 (기본 동작)
    Calc(CalcArgs),
    /// 메뉴 방식으로 입력값을 고치며 계산한다
    Interactive,
    /// 기본 설정 파일을 만든다
    InitConfig {
        /// 이미 있는 파일을 덮어쓴다
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Toml,
}

#[derive(Debug, Default, Args)]
pub struct CalcArgs {
    #[command(flatten)]
    pub overrides: InputOverrides,
    /// 내경 후보 [mm], 쉼표로 구분
    #[arg(long, value_delimiter = ',')]
    pub diameters: Option<Vec<f64>>,
    /// 압력손실 표시 단위
    #[arg(long, value_parser = parse_pressure_unit)]
    pub dp_unit: Option<PressureUnit>,
    /// 유량 표시 단위
    #[arg(long, value_parser = parse_flow_unit)]
    pub flow_unit: Option<FlowUnit>,
    /// 길이 표시 단위
    #[arg(long, value_parser = parse_length_unit)]
    pub length_unit: Option<LengthUnit>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// 설정 파일의 입력값을 덮어쓰는 플래그 모음.
#[derive(Debug, Default, Clone, Args)]
pub struct InputOverrides {
    /// 계산 방식 (dt / flux)
    #[arg(long, value_parser = parse_heat_mode)]
    pub mode: Option<HeatMode>,
    /// 열유속 q [W/m²] (flux 방식)
    #[arg(long, allow_negative_numbers = true)]
    pub flux: Option<f64>,
    /// 바닥 표면 온도 [°C]
    #[arg(long, allow_negative_numbers = true)]
    pub t_surf: Option<f64>,
    /// 실내 공기 온도 [°C]
    #[arg(long, allow_negative_numbers = true)]
    pub t_air: Option<f64>,
    /// 배관 간격 [mm]
    #[arg(long)]
    pub step: Option<f64>,
    /// 열매체 온도차 [K]
    #[arg(long)]
    pub dt: Option<f64>,
    /// 바닥 열전달계수 [W/(m²·K)]
    #[arg(long)]
    pub h: Option<f64>,
    /// 허용 압력손실 [kPa]
    #[arg(long)]
    pub dp: Option<f64>,
    /// 공급관 길이 [m]
    #[arg(long)]
    pub feed: Option<f64>,
    /// 열매체 (water / pg30)
    #[arg(long, value_parser = parse_fluid_kind)]
    pub fluid: Option<FluidKind>,
    /// 열매체 평균 온도 [°C]
    #[arg(long, allow_negative_numbers = true)]
    pub t_mean: Option<f64>,
    /// 거칠기 [mm]
    #[arg(long)]
    pub roughness: Option<f64>,
    /// 단열재 (pe6 / pe9 / pe13 / custom)
    #[arg(long, value_parser = parse_insulation)]
    pub insulation: Option<InsulationPreset>,
    /// 사용자 지정 단열재 λ [W/(m·K)]
    #[arg(long)]
    pub ins_lambda: Option<f64>,
    /// 사용자 지정 단열재 두께 [mm]
    #[arg(long)]
    pub ins_thk: Option<f64>,
}

impl InputOverrides {
    /// 지정된 항목만 입력값에 덮어쓴다.
    pub fn apply(&self, input: &mut CalculationInput) {
        fn set<T: Copy>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }
        set(&mut input.heat_mode, self.mode);
        set(&mut input.flux_w_per_m2, self.flux);
        set(&mut input.surface_temp_c, self.t_surf);
        set(&mut input.air_temp_c, self.t_air);
        set(&mut input.laying_step_mm, self.step);
        set(&mut input.carrier_delta_t_k, self.dt);
        set(&mut input.floor_heat_transfer_w_per_m2_k, self.h);
        set(&mut input.max_pressure_drop_kpa, self.dp);
        set(&mut input.feed_length_m, self.feed);
        set(&mut input.fluid, self.fluid);
        set(&mut input.fluid_mean_temp_c, self.t_mean);
        set(&mut input.roughness_mm, self.roughness);
        set(&mut input.insulation, self.insulation);
        set(&mut input.custom_insulation_conductivity_w_per_m_k, self.ins_lambda);
        set(&mut input.custom_insulation_thickness_mm, self.ins_thk);
    }
}

#[derive(Serialize)]
struct TomlReport<'a> {
    summary: &'a HeatDemandSummary,
    results: &'a [DiameterResult],
}

/// 설정과 플래그로 계산하고 결과를 `out` 에 쓴다.
pub fn calc<W: Write>(
    config: &Config,
    tr: &Translator,
    args: &CalcArgs,
    out: &mut W,
) -> Result<(), AppError> {
    let mut input = config.input.clone();
    args.overrides.apply(&mut input);
    let diameters = args.diameters.as_deref().unwrap_or(&config.diameters_mm);
    let mut units = config.display_units;
    if let Some(u) = args.dp_unit {
        units.pressure_drop = u;
    }
    if let Some(u) = args.flow_unit {
        units.flow = u;
    }
    if let Some(u) = args.length_unit {
        units.length = u;
    }

    let summary = ufh::summarize(&input);
    let results = ufh::evaluate(diameters, &input);
    match args.format {
        OutputFormat::Table => {
            writeln!(out, "-- {} --", tr.t(keys::SUMMARY_HEADING))?;
            writeln!(out, "{}", report::render_summary(&summary, &results, tr))?;
            writeln!(out, "\n-- {} --", tr.t(keys::RESULTS_HEADING))?;
            writeln!(out, "{}", report::render_results(&results, tr, &units))?;
        }
        OutputFormat::Toml => {
            let doc = TomlReport {
                summary: &summary,
                results: &results,
            };
            write!(out, "{}", toml::to_string_pretty(&doc)?)?;
        }
    }
    Ok(())
}

/// 메뉴 루프를 실행한다. 종료 시 설정을 저장하는 것은 호출자 몫이다.
pub fn interactive<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &mut Config,
    tr: &Translator,
) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(console, tr)? {
            MenuChoice::EditInputs => ui_cli::handle_edit_inputs(console, tr, &mut config.input)?,
            MenuChoice::Diameters => ui_cli::handle_diameters(console, tr, &mut config.diameters_mm)?,
            MenuChoice::Calculate => ui_cli::handle_calculate(console, tr, config)?,
            MenuChoice::Settings => ui_cli::handle_settings(console, tr, config)?,
            MenuChoice::Exit => {
                console.say(&tr.t(keys::APP_EXIT))?;
                break;
            }
        }
    }
    Ok(())
}

/// CLI 애플리케이션을 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    if let Some(Command::InitConfig { force }) = cli.command {
        if cli.config.exists() && !force {
            println!("{} (--force)", cli.config.display());
            return Ok(());
        }
        Config::default().save(&cli.config)?;
        info!("기본 설정 저장: {}", cli.config.display());
        return Ok(());
    }

    let mut config = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(config.language.as_str()));
    let tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());

    match cli.command {
        Some(Command::Interactive) => {
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout());
            interactive(&mut console, &mut config, &tr)?;
            config.save(&cli.config)?;
            console.say(&tr.t(keys::SETTINGS_SAVED))?;
        }
        Some(Command::Calc(args)) => calc(&config, &tr, &args, &mut io::stdout().lock())?,
        Some(Command::InitConfig { .. }) | None => {
            calc(&config, &tr, &CalcArgs::default(), &mut io::stdout().lock())?
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_of(args: &CalcArgs) -> String {
        let mut buf = Vec::new();
        calc(&Config::default(), &Translator::new("en"), args, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn flags_parse_into_overrides() {
        let cli = Cli::parse_from([
            "ufh",
            "calc",
            "--mode",
            "flux",
            "--flux",
            "55",
            "--t-air",
            "-5",
            "--diameters",
            "16,12",
            "--dp-unit",
            "mWC",
            "--fluid",
            "pg30",
        ]);
        let Some(Command::Calc(args)) = cli.command else {
            panic!("expected calc");
        };
        assert_eq!(args.overrides.mode, Some(HeatMode::Flux));
        assert_eq!(args.overrides.flux, Some(55.0));
        assert_eq!(args.overrides.t_air, Some(-5.0));
        assert_eq!(args.diameters, Some(vec![16.0, 12.0]));
        assert_eq!(args.dp_unit, Some(PressureUnit::MeterWaterColumn));
        assert_eq!(args.overrides.fluid, Some(FluidKind::PropyleneGlycol30));
    }

    #[test]
    fn unknown_unit_is_rejected_by_parser() {
        let res = Cli::try_parse_from(["ufh", "calc", "--flow-unit", "bucket"]);
        assert!(res.is_err());
    }

    #[test]
    fn overrides_only_touch_given_fields() {
        let mut input = CalculationInput::default();
        InputOverrides {
            dp: Some(25.0),
            insulation: Some(InsulationPreset::Pe13),
            ..Default::default()
        }
        .apply(&mut input);
        assert_eq!(input.max_pressure_drop_kpa, 25.0);
        assert_eq!(input.insulation, InsulationPreset::Pe13);
        assert_eq!(input.surface_temp_c, 29.0);
    }

    #[test]
    fn table_output_lists_each_diameter() {
        let text = output_of(&CalcArgs {
            diameters: Some(vec![13.0, 10.0]),
            ..Default::default()
        });
        assert!(text.contains("Results by diameter"));
        assert_eq!(text.matches("hydraulic").count(), 2, "{text}");
    }

    #[test]
    fn toml_output_is_machine_readable() {
        let text = output_of(&CalcArgs {
            diameters: Some(vec![16.0]),
            format: OutputFormat::Toml,
            ..Default::default()
        });
        let value: toml::Value = toml::from_str(&text).unwrap();
        let results = value["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["binding"].as_str(), Some("Hydraulic"));
        assert_eq!(results[0]["diameter_mm"].as_float(), Some(16.0));
    }
}
