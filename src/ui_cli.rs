use std::io::{BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::report;
use crate::ufh::{self, CalculationInput, FluidKind, HeatMode, InsulationPreset};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EditInputs,
    Diameters,
    Calculate,
    Settings,
    Exit,
}

/// 줄 단위 입출력 래퍼. 표준 입출력 대신 버퍼를 넣어 시험할 수 있다.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝나면 `None`.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// 숫자를 읽는다. 빈 줄이나 입력 끝이면 현재 값을 유지한다.
    fn read_f64_or(&mut self, tr: &Translator, label: &str, current: f64) -> Result<f64, AppError> {
        let prompt = format!("{label} [{current}]: ");
        loop {
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(current);
            };
            if line.is_empty() {
                return Ok(current);
            }
            match line.parse::<f64>() {
                Ok(v) => return Ok(v),
                Err(_) => self.say(&tr.t(keys::ERROR_INVALID_NUMBER))?,
            }
        }
    }

    /// 번호 목록에서 하나를 고른다. 반환값은 0부터 시작하는 위치.
    fn read_choice_or(
        &mut self,
        tr: &Translator,
        label: &str,
        options: &[String],
        current: usize,
    ) -> Result<usize, AppError> {
        self.say(label)?;
        for (i, opt) in options.iter().enumerate() {
            self.say(&format!("  {}) {opt}", i + 1))?;
        }
        let prompt = format!("[{}]: ", current + 1);
        loop {
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(current);
            };
            if line.is_empty() {
                return Ok(current);
            }
            match line.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                _ => self.say(&tr.t(keys::INVALID_SELECTION_RETRY))?,
            }
        }
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_EDIT,
        keys::MAIN_MENU_DIAMETERS,
        keys::MAIN_MENU_CALCULATE,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        console.say(&tr.t(key))?;
    }
    loop {
        let Some(sel) = console.read_line(&tr.t(keys::PROMPT_MENU_SELECT))? else {
            return Ok(MenuChoice::Exit);
        };
        match sel.as_str() {
            "1" => return Ok(MenuChoice::EditInputs),
            "2" => return Ok(MenuChoice::Diameters),
            "3" => return Ok(MenuChoice::Calculate),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => console.say(&tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    }
}

const MODES: [HeatMode; 2] = [HeatMode::DeltaT, HeatMode::Flux];
const FLUIDS: [FluidKind; 2] = [FluidKind::Water, FluidKind::PropyleneGlycol30];
const INSULATIONS: [InsulationPreset; 4] = [
    InsulationPreset::Pe6,
    InsulationPreset::Pe9,
    InsulationPreset::Pe13,
    InsulationPreset::Custom,
];

fn position<T: PartialEq>(items: &[T], value: &T) -> usize {
    items.iter().position(|v| v == value).unwrap_or(0)
}

/// 입력값 편집. 모든 항목은 엔터로 현재 값을 유지할 수 있다.
pub fn handle_edit_inputs<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
    input: &mut CalculationInput,
) -> Result<(), AppError> {
    console.say(&format!("\n-- {} --", tr.t(keys::INPUT_HEADING)))?;
    console.say(&tr.t(keys::PROMPT_KEEP_HINT))?;

    let modes = [tr.t(keys::MODE_DELTA_T), tr.t(keys::MODE_FLUX)];
    let idx = console.read_choice_or(tr, &tr.t(keys::INPUT_MODE), &modes, position(&MODES, &input.heat_mode))?;
    input.heat_mode = MODES[idx];

    match input.heat_mode {
        HeatMode::DeltaT => {
            input.surface_temp_c =
                console.read_f64_or(tr, &tr.t(keys::INPUT_SURFACE_TEMP), input.surface_temp_c)?;
            input.air_temp_c = console.read_f64_or(tr, &tr.t(keys::INPUT_AIR_TEMP), input.air_temp_c)?;
            console.say(&tr.t(keys::INPUT_FLOOR_H_HINT))?;
            input.floor_heat_transfer_w_per_m2_k = console.read_f64_or(
                tr,
                &tr.t(keys::INPUT_FLOOR_H),
                input.floor_heat_transfer_w_per_m2_k,
            )?;
        }
        HeatMode::Flux => {
            console.say(&tr.t(keys::INPUT_FLUX_HINT))?;
            input.flux_w_per_m2 = console.read_f64_or(tr, &tr.t(keys::INPUT_FLUX), input.flux_w_per_m2)?;
            // 공급관 손실 계산에는 실내 온도가 계속 쓰인다.
            input.air_temp_c = console.read_f64_or(tr, &tr.t(keys::INPUT_AIR_TEMP), input.air_temp_c)?;
        }
    }
    input.laying_step_mm = console.read_f64_or(tr, &tr.t(keys::INPUT_STEP), input.laying_step_mm)?;
    input.carrier_delta_t_k =
        console.read_f64_or(tr, &tr.t(keys::INPUT_CARRIER_DT), input.carrier_delta_t_k)?;
    input.max_pressure_drop_kpa =
        console.read_f64_or(tr, &tr.t(keys::INPUT_MAX_DP), input.max_pressure_drop_kpa)?;

    console.say(&format!("\n-- {} --", tr.t(keys::FLUID_HEADING)))?;
    let fluids = [tr.t(keys::FLUID_WATER), tr.t(keys::FLUID_PG30)];
    let idx = console.read_choice_or(tr, &tr.t(keys::INPUT_FLUID), &fluids, position(&FLUIDS, &input.fluid))?;
    input.fluid = FLUIDS[idx];
    input.fluid_mean_temp_c =
        console.read_f64_or(tr, &tr.t(keys::INPUT_MEAN_TEMP), input.fluid_mean_temp_c)?;
    input.roughness_mm = console.read_f64_or(tr, &tr.t(keys::INPUT_ROUGHNESS), input.roughness_mm)?;

    console.say(&format!("\n-- {} --", tr.t(keys::FEED_HEADING)))?;
    let insulations = [
        tr.t(keys::INSULATION_PE6),
        tr.t(keys::INSULATION_PE9),
        tr.t(keys::INSULATION_PE13),
        tr.t(keys::INSULATION_CUSTOM),
    ];
    let idx = console.read_choice_or(
        tr,
        &tr.t(keys::INPUT_INSULATION),
        &insulations,
        position(&INSULATIONS, &input.insulation),
    )?;
    input.insulation = INSULATIONS[idx];
    if input.insulation == InsulationPreset::Custom {
        input.custom_insulation_conductivity_w_per_m_k = console.read_f64_or(
            tr,
            &tr.t(keys::INPUT_INS_LAMBDA),
            input.custom_insulation_conductivity_w_per_m_k,
        )?;
        input.custom_insulation_thickness_mm = console.read_f64_or(
            tr,
            &tr.t(keys::INPUT_INS_THICKNESS),
            input.custom_insulation_thickness_mm,
        )?;
    }
    input.feed_length_m = console.read_f64_or(tr, &tr.t(keys::INPUT_FEED_LENGTH), input.feed_length_m)?;
    Ok(())
}

/// 입력한 내경이 목록에 있으면 빼고 없으면 더한다.
pub fn toggle_diameter(diameters: &mut Vec<f64>, diameter_mm: f64) {
    if let Some(i) = diameters.iter().position(|d| *d == diameter_mm) {
        diameters.remove(i);
    } else {
        diameters.push(diameter_mm);
    }
}

fn diameter_list(diameters: &[f64]) -> String {
    let mut sorted = diameters.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// 내경 후보를 하나씩 추가/제거한다. 빈 줄로 끝낸다.
pub fn handle_diameters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
    diameters: &mut Vec<f64>,
) -> Result<(), AppError> {
    console.say(&format!("\n-- {} --", tr.t(keys::DIAMETERS_HEADING)))?;
    let offered = ufh::OFFERED_DIAMETERS_MM
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" / ");
    console.say(&offered)?;
    loop {
        console.say(&format!("{} {}", tr.t(keys::DIAMETERS_CURRENT), diameter_list(diameters)))?;
        let Some(line) = console.read_line(&tr.t(keys::DIAMETERS_PROMPT_TOGGLE))? else {
            return Ok(());
        };
        if line.is_empty() {
            return Ok(());
        }
        match line.parse::<f64>() {
            Ok(d) if d > 0.0 && d.is_finite() => toggle_diameter(diameters, d),
            _ => console.say(&tr.t(keys::ERROR_INVALID_NUMBER))?,
        }
    }
}

/// 현재 설정으로 계산해 요약과 결과표를 출력한다.
pub fn handle_calculate<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
    config: &Config,
) -> Result<(), AppError> {
    let summary = ufh::summarize(&config.input);
    let results = ufh::evaluate(&config.diameters_mm, &config.input);
    console.say(&format!("\n-- {} --", tr.t(keys::SUMMARY_HEADING)))?;
    console.say(&report::render_summary(&summary, &results, tr))?;
    console.say(&format!("\n-- {} --", tr.t(keys::RESULTS_HEADING)))?;
    console.say(&report::render_results(&results, tr, &config.display_units))?;
    Ok(())
}

/// 언어와 표시 단위를 바꾼다. 잘못된 값은 무시한다.
pub fn handle_settings<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
    config: &mut Config,
) -> Result<(), AppError> {
    console.say(&tr.t(keys::SETTINGS_HEADING))?;
    console.say(&tr.t(keys::PROMPT_KEEP_HINT))?;

    if let Some(lang) = console.read_line(&tr.t(keys::SETTINGS_LANGUAGE))? {
        match lang.to_lowercase().as_str() {
            "" => {}
            "auto" | "ko" | "en" => config.language = lang.to_lowercase(),
            _ => console.say(&tr.t(keys::SETTINGS_INVALID))?,
        }
    }
    if let Some(s) = console.read_line(&tr.t(keys::SETTINGS_PRESSURE_UNIT))? {
        if !s.is_empty() {
            match conversion::parse_pressure_unit(&s) {
                Ok(u) => config.display_units.pressure_drop = u,
                Err(_) => console.say(&tr.t(keys::SETTINGS_INVALID))?,
            }
        }
    }
    if let Some(s) = console.read_line(&tr.t(keys::SETTINGS_FLOW_UNIT))? {
        if !s.is_empty() {
            match conversion::parse_flow_unit(&s) {
                Ok(u) => config.display_units.flow = u,
                Err(_) => console.say(&tr.t(keys::SETTINGS_INVALID))?,
            }
        }
    }
    if let Some(s) = console.read_line(&tr.t(keys::SETTINGS_LENGTH_UNIT))? {
        if !s.is_empty() {
            match conversion::parse_length_unit(&s) {
                Ok(u) => config.display_units.length = u,
                Err(_) => console.say(&tr.t(keys::SETTINGS_INVALID))?,
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app;
    use crate::units::{FlowUnit, PressureUnit};
    use std::io::Cursor;

    fn session(script: &str, config: &mut Config) -> String {
        let tr = Translator::new("en");
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        app::interactive(&mut console, config, &tr).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn menu_calculate_then_exit() {
        let mut config = Config::default();
        let out = session("3\n0\n", &mut config);
        assert!(out.contains("Results by diameter"));
        assert!(out.contains("hydraulic"));
        assert!(out.contains("Exiting."));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let mut config = Config::default();
        let out = session("", &mut config);
        assert!(out.contains("Exiting."));
    }

    #[test]
    fn edit_switches_to_flux_mode() {
        let mut config = Config::default();
        session("1\n2\n45\n-2\n\n\n\n\n\n\n\n\n0\n", &mut config);
        assert_eq!(config.input.heat_mode, HeatMode::Flux);
        assert_eq!(config.input.flux_w_per_m2, 45.0);
        assert_eq!(config.input.air_temp_c, -2.0);
        assert_eq!(config.input.laying_step_mm, 150.0);
    }

    #[test]
    fn invalid_number_is_retried() {
        let mut config = Config::default();
        let out = session("1\n\nabc\n31\n\n\n\n\n\n\n\n\n\n\n\n0\n", &mut config);
        assert!(out.contains("Please enter a number."));
        assert_eq!(config.input.surface_temp_c, 31.0);
    }

    #[test]
    fn diameters_toggle_in_and_out() {
        let mut config = Config::default();
        session("2\n14\n10\nx\n\n0\n", &mut config);
        let mut got = config.diameters_mm.clone();
        got.sort_by(f64::total_cmp);
        assert_eq!(got, vec![12.0, 13.0, 14.0, 16.0]);
    }

    #[test]
    fn settings_accept_units_and_reject_garbage() {
        let mut config = Config::default();
        let out = session("4\nen\nmbar\nfurlong\n\n0\n", &mut config);
        assert_eq!(config.language, "en");
        assert_eq!(config.display_units.pressure_drop, PressureUnit::MilliBar);
        assert_eq!(config.display_units.flow, FlowUnit::LiterPerMinute);
        assert!(out.contains("Invalid input; unchanged."));
    }

    #[test]
    fn toggle_diameter_is_symmetric() {
        let mut d = vec![10.0, 16.0];
        toggle_diameter(&mut d, 12.0);
        toggle_diameter(&mut d, 12.0);
        assert_eq!(d, vec![10.0, 16.0]);
    }
}
