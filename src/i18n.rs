use log::warn;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_TITLE: &str = "general.app_title";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_EDIT: &str = "main_menu.edit";
    pub const MAIN_MENU_DIAMETERS: &str = "main_menu.diameters";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_KEEP_HINT: &str = "prompt.keep_hint";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const INPUT_HEADING: &str = "input.heading";
    pub const INPUT_MODE: &str = "input.mode";
    pub const MODE_DELTA_T: &str = "input.mode_delta_t";
    pub const MODE_FLUX: &str = "input.mode_flux";
    pub const INPUT_SURFACE_TEMP: &str = "input.surface_temp";
    pub const INPUT_AIR_TEMP: &str = "input.air_temp";
    pub const INPUT_STEP: &str = "input.step";
    pub const INPUT_CARRIER_DT: &str = "input.carrier_dt";
    pub const INPUT_FLOOR_H: &str = "input.floor_h";
    pub const INPUT_FLOOR_H_HINT: &str = "input.floor_h_hint";
    pub const INPUT_FLUX: &str = "input.flux";
    pub const INPUT_FLUX_HINT: &str = "input.flux_hint";
    pub const INPUT_MAX_DP: &str = "input.max_dp";

    pub const FLUID_HEADING: &str = "fluid.heading";
    pub const INPUT_FLUID: &str = "fluid.kind";
    pub const FLUID_WATER: &str = "fluid.water";
    pub const FLUID_PG30: &str = "fluid.pg30";
    pub const INPUT_MEAN_TEMP: &str = "fluid.mean_temp";
    pub const INPUT_ROUGHNESS: &str = "fluid.roughness";
    pub const FLUID_HINT: &str = "fluid.hint";

    pub const FEED_HEADING: &str = "feed.heading";
    pub const INPUT_INSULATION: &str = "feed.insulation";
    pub const INSULATION_PE6: &str = "feed.insulation_pe6";
    pub const INSULATION_PE9: &str = "feed.insulation_pe9";
    pub const INSULATION_PE13: &str = "feed.insulation_pe13";
    pub const INSULATION_CUSTOM: &str = "feed.insulation_custom";
    pub const INPUT_FEED_LENGTH: &str = "feed.length";
    pub const INPUT_INS_LAMBDA: &str = "feed.ins_lambda";
    pub const INPUT_INS_THICKNESS: &str = "feed.ins_thickness";
    pub const FEED_HINT: &str = "feed.hint";

    pub const SUMMARY_HEADING: &str = "summary.heading";
    pub const SUMMARY_FLUX: &str = "summary.flux";
    pub const SUMMARY_POWER_PER_M: &str = "summary.power_per_m";
    pub const SUMMARY_STEP: &str = "summary.step";
    pub const SUMMARY_FEED_LOSS_PER_M: &str = "summary.feed_loss_per_m";
    pub const SUMMARY_FEED_POWER: &str = "summary.feed_power";

    pub const DIAMETERS_HEADING: &str = "diameters.heading";
    pub const DIAMETERS_CURRENT: &str = "diameters.current";
    pub const DIAMETERS_PROMPT_TOGGLE: &str = "diameters.prompt_toggle";

    pub const RESULTS_HEADING: &str = "results.heading";
    pub const RESULTS_EMPTY: &str = "results.empty";
    pub const COL_DIAMETER: &str = "results.col_diameter";
    pub const COL_LOOP_LENGTH: &str = "results.col_loop_length";
    pub const COL_TOTAL_LENGTH: &str = "results.col_total_length";
    pub const COL_FLOW: &str = "results.col_flow";
    pub const COL_LOOP_POWER: &str = "results.col_loop_power";
    pub const COL_AREA: &str = "results.col_area";
    pub const COL_FEED_POWER: &str = "results.col_feed_power";
    pub const COL_TOTAL_POWER: &str = "results.col_total_power";
    pub const COL_VELOCITY: &str = "results.col_velocity";
    pub const COL_REYNOLDS: &str = "results.col_reynolds";
    pub const COL_PRESSURE_DROP: &str = "results.col_pressure_drop";
    pub const COL_BINDING: &str = "results.col_binding";
    pub const BINDING_HEAT: &str = "results.binding_heat";
    pub const BINDING_HYDRAULIC: &str = "results.binding_hydraulic";

    pub const NOTES_HEADING: &str = "notes.heading";
    pub const NOTE_HEAT_MODES: &str = "notes.heat_modes";
    pub const NOTE_POWER_PER_M: &str = "notes.power_per_m";
    pub const NOTE_FEED: &str = "notes.feed";
    pub const NOTE_HYDRAULICS: &str = "notes.hydraulics";
    pub const NOTE_NO_INSTALL_LIMIT: &str = "notes.no_install_limit";
    pub const NOTE_FLUID: &str = "notes.fluid";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_LANGUAGE: &str = "settings.language";
    pub const SETTINGS_PRESSURE_UNIT: &str = "settings.pressure_unit";
    pub const SETTINGS_FLOW_UNIT: &str = "settings.flow_unit";
    pub const SETTINGS_LENGTH_UNIT: &str = "settings.length_unit";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const GUI_SETTINGS: &str = "gui.settings";
    pub const GUI_UNITS: &str = "gui.units";
    pub const GUI_SAVE: &str = "gui.save";
    pub const GUI_FONT: &str = "gui.font";
    pub const GUI_FONT_PICK: &str = "gui.font_pick";
    pub const GUI_FONT_MISSING: &str = "gui.font_missing";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 locales/ 를 찾고, 그마저 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 → 키 순서로 폴백한다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.clone();
        }
        let built_in = match self.lang {
            Language::En => en(key),
            Language::Ko => ko(key).or_else(|| en(key)),
        };
        built_in.map(str::to_string).unwrap_or_else(|| key.to_string())
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        other => {
            warn!("지원하지 않는 언어 코드 '{other}', 자동 감지로 대체");
            None
        }
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(&path).ok()?;
    let map = parse_toml_to_map(&content);
    if map.is_none() {
        warn!("언어팩을 읽을 수 없어 무시함: {}", path.display());
    }
    map
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_TITLE => "바닥난방 코일 길이 계산기",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 바닥난방 코일 길이 계산기 ===",
        MAIN_MENU_EDIT => "1) 입력값 수정",
        MAIN_MENU_DIAMETERS => "2) 내경 선택",
        MAIN_MENU_CALCULATE => "3) 계산",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_KEEP_HINT => "(엔터: 현재값 유지)",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        INPUT_HEADING => "입력값",
        INPUT_MODE => "계산 방식",
        MODE_DELTA_T => "ΔT 기준",
        MODE_FLUX => "W/m² 직접 입력",
        INPUT_SURFACE_TEMP => "바닥 표면 온도 [°C]",
        INPUT_AIR_TEMP => "실내 공기 온도 [°C]",
        INPUT_STEP => "배관 간격 [mm]",
        INPUT_CARRIER_DT => "열매체 온도차 ΔT [K]",
        INPUT_FLOOR_H => "바닥 열전달계수 h [W/m²·K]",
        INPUT_FLOOR_H_HINT => "일반적으로 8–11 W/m²·K (대류/복사에 따라 다름).",
        INPUT_FLUX => "바닥 열유속 q [W/m²]",
        INPUT_FLUX_HINT => "일반적으로 40–80 W/m² (마감재와 ΔT에 따라 다름).",
        INPUT_MAX_DP => "코일당 허용 압력손실 [kPa]",
        FLUID_HEADING => "열매체와 물성",
        INPUT_FLUID => "열매체",
        FLUID_WATER => "물",
        FLUID_PG30 => "프로필렌글리콜 30%",
        INPUT_MEAN_TEMP => "열매체 평균 온도 [°C]",
        INPUT_ROUGHNESS => "거칠기 ε [mm]",
        FLUID_HINT => "물 cp≈4180 J/(kg·K). PG 30%: cp≈3800 J/(kg·K), ρ≈1030 kg/m³, μ≈2.3 mPa·s.",
        FEED_HEADING => "공급관과 단열",
        INPUT_INSULATION => "단열재",
        INSULATION_PE6 => "발포 PE 6 mm (λ=0.035)",
        INSULATION_PE9 => "발포 PE 9 mm (λ=0.035)",
        INSULATION_PE13 => "발포 PE 13 mm (λ=0.035)",
        INSULATION_CUSTOM => "사용자 지정",
        INPUT_FEED_LENGTH => "공급관 길이 [m]",
        INPUT_INS_LAMBDA => "단열재 λ [W/(m·K)]",
        INPUT_INS_THICKNESS => "단열재 두께 [mm]",
        FEED_HINT => "공급관 열손실은 코일 필요 열량에 더해져 유량을 늘린다. q' = ΔT / (R벽 + R단열 + R외부).",
        SUMMARY_HEADING => "열량 및 유량 요약",
        SUMMARY_FLUX => "바닥 열유속 q",
        SUMMARY_POWER_PER_M => "배관 1 m 당 열량",
        SUMMARY_STEP => "배관 간격",
        SUMMARY_FEED_LOSS_PER_M => "공급관 손실 q'",
        SUMMARY_FEED_POWER => "공급관 손실 합계",
        DIAMETERS_HEADING => "내경 선택 [mm]",
        DIAMETERS_CURRENT => "선택된 내경:",
        DIAMETERS_PROMPT_TOGGLE => "추가/제거할 내경 [mm] (엔터: 완료): ",
        RESULTS_HEADING => "내경별 결과",
        RESULTS_EMPTY => "선택된 내경이 없습니다.",
        COL_DIAMETER => "내경",
        COL_LOOP_LENGTH => "코일 길이",
        COL_TOTAL_LENGTH => "전체 길이",
        COL_FLOW => "유량",
        COL_LOOP_POWER => "코일 열량",
        COL_AREA => "면적",
        COL_FEED_POWER => "공급관 손실",
        COL_TOTAL_POWER => "전체 열량",
        COL_VELOCITY => "유속",
        COL_REYNOLDS => "Re",
        COL_PRESSURE_DROP => "Δp",
        COL_BINDING => "제약",
        BINDING_HEAT => "열량",
        BINDING_HYDRAULIC => "수력",
        NOTES_HEADING => "참고 및 가정",
        NOTE_HEAT_MODES => "두 가지 방식: ΔT 기준 (q = h·(T표면−T실내)) 또는 열유속 q [W/m²] 직접 입력.",
        NOTE_POWER_PER_M => "배관 1 m 당 열량 p = q·간격, 담당 면적 A ≈ L·간격.",
        NOTE_FEED => "공급관은 관벽·단열재·외부 대류 열저항 직렬 모델. 손실은 필요 열량에 더해지고 수력 계산에서는 추가 길이로 취급한다.",
        NOTE_HYDRAULICS => "Darcy–Weisbach. 마찰계수: 64/Re (층류), Swamee–Jain (난류). PEX/PE-RT 기본 거칠기 ε≈0.007 mm.",
        NOTE_NO_INSTALL_LIMIT => "시공 길이 제한은 없고 허용 압력손실만 제약이다.",
        NOTE_FLUID => "물성은 평균 온도 기준. 글리콜은 점도가 높아 저항과 필요 유량이 커진다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_LANGUAGE => "언어 (auto/ko/en): ",
        SETTINGS_PRESSURE_UNIT => "압력손실 단위 (kPa/Pa/bar/mbar/mWC/psi): ",
        SETTINGS_FLOW_UNIT => "유량 단위 (l/min, l/h, m3/h, gpm): ",
        SETTINGS_LENGTH_UNIT => "길이 단위 (m/ft): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        GUI_SETTINGS => "설정",
        GUI_UNITS => "표시 단위",
        GUI_SAVE => "설정 저장",
        GUI_FONT => "글꼴",
        GUI_FONT_PICK => "글꼴 파일 선택…",
        GUI_FONT_MISSING => "한글 글꼴을 찾지 못했습니다. 설정에서 글꼴 파일을 지정하세요.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_TITLE => "Underfloor heating loop length",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Underfloor heating loop length ===",
        MAIN_MENU_EDIT => "1) Edit inputs",
        MAIN_MENU_DIAMETERS => "2) Select diameters",
        MAIN_MENU_CALCULATE => "3) Calculate",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_KEEP_HINT => "(enter keeps current value)",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        INPUT_HEADING => "Inputs",
        INPUT_MODE => "Mode",
        MODE_DELTA_T => "By ΔT",
        MODE_FLUX => "By W/m²",
        INPUT_SURFACE_TEMP => "Floor surface temperature [°C]",
        INPUT_AIR_TEMP => "Room air temperature [°C]",
        INPUT_STEP => "Laying step [mm]",
        INPUT_CARRIER_DT => "Carrier ΔT [K]",
        INPUT_FLOOR_H => "Floor heat-transfer coefficient h [W/m²·K]",
        INPUT_FLOOR_H_HINT => "Usually 8–11 W/m²·K (depends on convection/radiation).",
        INPUT_FLUX => "Floor heat flux q [W/m²]",
        INPUT_FLUX_HINT => "Typical 40–80 W/m² (depends on covering and ΔT).",
        INPUT_MAX_DP => "Allowed Δp per loop [kPa]",
        FLUID_HEADING => "Fluid and properties",
        INPUT_FLUID => "Fluid",
        FLUID_WATER => "Water",
        FLUID_PG30 => "Propylene glycol 30%",
        INPUT_MEAN_TEMP => "Fluid mean temperature [°C]",
        INPUT_ROUGHNESS => "Roughness ε [mm]",
        FLUID_HINT => "Water cp≈4180 J/(kg·K). PG 30%: cp≈3800 J/(kg·K), ρ≈1030 kg/m³, μ≈2.3 mPa·s.",
        FEED_HEADING => "Feed pipes and insulation",
        INPUT_INSULATION => "Insulation",
        INSULATION_PE6 => "PE foam 6 mm (λ=0.035)",
        INSULATION_PE9 => "PE foam 9 mm (λ=0.035)",
        INSULATION_PE13 => "PE foam 13 mm (λ=0.035)",
        INSULATION_CUSTOM => "Custom",
        INPUT_FEED_LENGTH => "Feed length [m]",
        INPUT_INS_LAMBDA => "Insulation λ [W/(m·K)]",
        INPUT_INS_THICKNESS => "Insulation thickness [mm]",
        FEED_HINT => "Feed losses are added to the loop's required power and raise the design flow. q' = ΔT / (Rwall + Rins + Rout).",
        SUMMARY_HEADING => "Heat and flow summary",
        SUMMARY_FLUX => "Floor heat flux q",
        SUMMARY_POWER_PER_M => "Power per pipe meter",
        SUMMARY_STEP => "Step",
        SUMMARY_FEED_LOSS_PER_M => "Feed loss q'",
        SUMMARY_FEED_POWER => "Feed loss total",
        DIAMETERS_HEADING => "Inner diameters [mm]",
        DIAMETERS_CURRENT => "Selected diameters:",
        DIAMETERS_PROMPT_TOGGLE => "Diameter to add/remove [mm] (enter to finish): ",
        RESULTS_HEADING => "Results by diameter",
        RESULTS_EMPTY => "No diameters selected.",
        COL_DIAMETER => "D",
        COL_LOOP_LENGTH => "L loop",
        COL_TOTAL_LENGTH => "L total",
        COL_FLOW => "Flow",
        COL_LOOP_POWER => "P loop",
        COL_AREA => "Area",
        COL_FEED_POWER => "P feed",
        COL_TOTAL_POWER => "P total",
        COL_VELOCITY => "v",
        COL_REYNOLDS => "Re",
        COL_PRESSURE_DROP => "Δp",
        COL_BINDING => "Limit",
        BINDING_HEAT => "heat",
        BINDING_HYDRAULIC => "hydraulic",
        NOTES_HEADING => "Notes and assumptions",
        NOTE_HEAT_MODES => "Two modes: by ΔT (q = h·(Tsurf−Tair)) or by a given flux q [W/m²].",
        NOTE_POWER_PER_M => "Power per pipe meter p = q·step; served area A ≈ L·step.",
        NOTE_FEED => "Feed pipes: wall, insulation and outer film resistances in series. Losses add to the required power; hydraulically the feed is extra length.",
        NOTE_HYDRAULICS => "Darcy–Weisbach. Friction: 64/Re (laminar), Swamee–Jain (turbulent). Default PEX/PE-RT roughness ε≈0.007 mm.",
        NOTE_NO_INSTALL_LIMIT => "No installation length limit; only the allowed Δp constrains the loop.",
        NOTE_FLUID => "Properties at mean temperature; glycol's higher viscosity raises resistance and required flow.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_LANGUAGE => "Language (auto/ko/en): ",
        SETTINGS_PRESSURE_UNIT => "Pressure-drop unit (kPa/Pa/bar/mbar/mWC/psi): ",
        SETTINGS_FLOW_UNIT => "Flow unit (l/min, l/h, m3/h, gpm): ",
        SETTINGS_LENGTH_UNIT => "Length unit (m/ft): ",
        SETTINGS_INVALID => "Invalid input; unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        GUI_SETTINGS => "Settings",
        GUI_UNITS => "Display units",
        GUI_SAVE => "Save settings",
        GUI_FONT => "Font",
        GUI_FONT_PICK => "Choose font file…",
        GUI_FONT_MISSING => "No Korean font found. Pick a font file in settings.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_strings_per_language() {
        let ko = Translator::new("ko-KR");
        let en = Translator::new("en");
        assert_eq!(ko.language(), Language::Ko);
        assert_eq!(ko.t(keys::BINDING_HYDRAULIC), "수력");
        assert_eq!(en.t(keys::BINDING_HYDRAULIC), "hydraulic");
        assert_eq!(en.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn explicit_language_wins() {
        assert_eq!(resolve_language(Some("ko"), Some("en")), "ko");
        assert_eq!(resolve_language(Some("auto"), Some("en-US")), "en");
    }

    #[test]
    fn nested_pack_keys_are_flattened() {
        let map = parse_toml_to_map(
            r#"
[results]
binding_heat = "тепло"
"#,
        )
        .unwrap();
        assert_eq!(map.get(keys::BINDING_HEAT).map(String::as_str), Some("тепло"));
    }

    #[test]
    fn locale_strings_normalize() {
        assert_eq!(normalize_locale_string("ko_KR.UTF-8").as_deref(), Some("ko"));
        assert_eq!(normalize_locale_string("en-GB").as_deref(), Some("en"));
        assert_eq!(normalize_locale_string("ru_RU"), None);
    }
}
