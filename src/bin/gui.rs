#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use log::{info, warn};
use rfd::FileDialog;
use std::ops::RangeInclusive;
use std::{env, fs, path::Path, path::PathBuf};
use ufh_loop_toolbox::{
    config::{self, Config, DEFAULT_CONFIG_PATH},
    i18n::{self, keys, Translator},
    report,
    ufh::{
        self, CalculationInput, FluidKind, HeatMode, InsulationPreset, LAYING_STEP_CHOICES_MM,
        OFFERED_DIAMETERS_MM,
    },
    units::{AreaUnit, FlowUnit, LengthUnit, PressureUnit, VelocityUnit},
};

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli_lang = lang_from_args(env::args().skip(1));

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1200.0, 760.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    let app_cfg = config::load_or_default(&config_path).unwrap_or_else(|e| {
        warn!("설정 로드 실패, 기본값 사용: {e}");
        Config::default()
    });
    eframe::run_native(
        "UFH Loop Toolbox",
        options,
        Box::new(move |cc| {
            let mut app = GuiApp::new(app_cfg, config_path, cli_lang.as_deref());
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("{e}");
                app.font_status = Some(app.tr.t(keys::GUI_FONT_MISSING));
            }
            Box::new(app)
        }),
    )
}

/// `--lang xx`, `-L xx`, `--lang=xx` 를 찾는다.
fn lang_from_args(args: impl IntoIterator<Item = String>) -> Option<String> {
    let mut lang = None;
    let mut iter = args.into_iter();
    while let Some(a) = iter.next() {
        if let Some(val) = a.strip_prefix("--lang=") {
            lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            lang = iter.next().or(lang);
        }
    }
    lang
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 글꼴 바이트를 egui 기본 글꼴 앞에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_string(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, name.to_string());
    }
    ctx.set_fonts(fonts);
}

/// 한글 표시용 글꼴을 찾는다.
/// 1) assets/fonts/ 2) 운영체제 기본 한글 글꼴. 모두 없으면 Err.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates = vec![
        PathBuf::from("assets/fonts/malgun.ttf"),
        PathBuf::from("assets/fonts/NanumGothic.ttf"),
        PathBuf::from("/usr/share/fonts/truetype/nanum/NanumGothic.ttf"),
        PathBuf::from("/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc"),
        PathBuf::from("/System/Library/Fonts/AppleSDGothicNeo.ttc"),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.insert(0, fonts.join("malgun.ttf"));
        candidates.push(fonts.join("gulim.ttc"));
    }
    let path = candidates
        .iter()
        .find(|p| p.exists())
        .ok_or_else(|| "한글 글꼴을 찾지 못했습니다".to_string())?;
    load_font_file(ctx, path)
}

fn load_font_file(ctx: &egui::Context, path: &Path) -> Result<(), String> {
    let bytes = fs::read(path).map_err(|e| format!("글꼴 읽기 실패 ({}): {e}", path.display()))?;
    apply_font_bytes(ctx, bytes, "korean_font");
    info!("글꼴 적용: {}", path.display());
    Ok(())
}

/// 내경 체크박스 상태를 목록에 반영한다.
fn set_diameter(diameters: &mut Vec<f64>, diameter_mm: f64, selected: bool) {
    let present = diameters.contains(&diameter_mm);
    if selected && !present {
        diameters.push(diameter_mm);
    } else if !selected && present {
        diameters.retain(|d| *d != diameter_mm);
    }
}

fn fluid_label(tr: &Translator, fluid: FluidKind) -> String {
    match fluid {
        FluidKind::Water => tr.t(keys::FLUID_WATER),
        FluidKind::PropyleneGlycol30 => tr.t(keys::FLUID_PG30),
    }
}

fn insulation_label(tr: &Translator, preset: InsulationPreset) -> String {
    match preset {
        InsulationPreset::Pe6 => tr.t(keys::INSULATION_PE6),
        InsulationPreset::Pe9 => tr.t(keys::INSULATION_PE9),
        InsulationPreset::Pe13 => tr.t(keys::INSULATION_PE13),
        InsulationPreset::Custom => tr.t(keys::INSULATION_CUSTOM),
    }
}

fn drag_row(
    ui: &mut egui::Ui,
    label: String,
    value: &mut f64,
    speed: f64,
    range: RangeInclusive<f64>,
    suffix: &str,
) {
    ui.label(label);
    ui.add(
        egui::DragValue::new(value)
            .speed(speed)
            .clamp_range(range)
            .suffix(suffix),
    );
    ui.end_row();
}

fn unit_combo<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id: &str,
    value: &mut T,
    all: &[T],
    label: fn(&T) -> &'static str,
) {
    egui::ComboBox::from_id_source(id)
        .selected_text(label(&*value))
        .show_ui(ui, |ui| {
            for u in all {
                ui.selectable_value(value, *u, label(u));
            }
        });
}

struct GuiApp {
    config: Config,
    config_path: PathBuf,
    tr: Translator,
    lang_input: String,
    show_settings: bool,
    status: Option<String>,
    font_status: Option<String>,
}

impl GuiApp {
    fn new(config: Config, config_path: PathBuf, cli_lang: Option<&str>) -> Self {
        let resolved = i18n::resolve_language(cli_lang, Some(config.language.as_str()));
        let tr = Translator::new_with_pack(&resolved, config.language_pack_dir.as_deref());
        Self {
            lang_input: config.language.clone(),
            config,
            config_path,
            tr,
            show_settings: false,
            status: None,
            font_status: None,
        }
    }

    fn save_settings(&mut self) {
        self.config.language = self.lang_input.clone();
        let resolved = i18n::resolve_language(None, Some(self.config.language.as_str()));
        self.tr = Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        self.status = Some(match self.config.save(&self.config_path) {
            Ok(()) => self.tr.t(keys::SETTINGS_SAVED),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }

    fn ui_settings(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.label(tr.t(keys::SETTINGS_LANGUAGE).trim_end_matches([':', ' ']).to_string());
        egui::ComboBox::from_id_source("lang_choice")
            .selected_text(&self.lang_input)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.lang_input, "auto".into(), "auto");
                ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
                ui.selectable_value(&mut self.lang_input, "en".into(), "English");
            });
        ui.separator();
        ui.strong(tr.t(keys::GUI_UNITS));
        let units = &mut self.config.display_units;
        egui::Grid::new("unit_grid").num_columns(2).show(ui, |ui| {
            ui.label(tr.t(keys::COL_PRESSURE_DROP));
            unit_combo(ui, "unit_dp", &mut units.pressure_drop, &PressureUnit::ALL, PressureUnit::label);
            ui.end_row();
            ui.label(tr.t(keys::COL_FLOW));
            unit_combo(ui, "unit_flow", &mut units.flow, &FlowUnit::ALL, FlowUnit::label);
            ui.end_row();
            ui.label(tr.t(keys::COL_LOOP_LENGTH));
            unit_combo(ui, "unit_len", &mut units.length, &LengthUnit::ALL, LengthUnit::label);
            ui.end_row();
            ui.label(tr.t(keys::COL_VELOCITY));
            unit_combo(ui, "unit_v", &mut units.velocity, &VelocityUnit::ALL, VelocityUnit::label);
            ui.end_row();
            ui.label(tr.t(keys::COL_AREA));
            unit_combo(ui, "unit_area", &mut units.area, &AreaUnit::ALL, AreaUnit::label);
            ui.end_row();
        });
        ui.separator();
        ui.strong(tr.t(keys::GUI_FONT));
        if ui.button(tr.t(keys::GUI_FONT_PICK)).clicked() {
            if let Some(path) = FileDialog::new()
                .add_filter("font", &["ttf", "ttc", "otf"])
                .pick_file()
            {
                self.font_status = load_font_file(ctx, &path).err();
            }
        }
        if let Some(msg) = &self.font_status {
            ui.colored_label(egui::Color32::from_rgb(200, 120, 0), msg);
        }
        ui.separator();
        if ui.button(tr.t(keys::GUI_SAVE)).clicked() {
            self.save_settings();
        }
        if let Some(msg) = &self.status {
            ui.label(msg);
        }
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        let input: &mut CalculationInput = &mut self.config.input;

        ui.heading(tr.t(keys::INPUT_HEADING));
        egui::Grid::new("inputs_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label(tr.t(keys::INPUT_MODE));
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut input.heat_mode, HeatMode::DeltaT, tr.t(keys::MODE_DELTA_T));
                    ui.selectable_value(&mut input.heat_mode, HeatMode::Flux, tr.t(keys::MODE_FLUX));
                });
                ui.end_row();
                match input.heat_mode {
                    HeatMode::DeltaT => {
                        drag_row(ui, tr.t(keys::INPUT_SURFACE_TEMP), &mut input.surface_temp_c, 0.5, -20.0..=60.0, " °C");
                        drag_row(ui, tr.t(keys::INPUT_AIR_TEMP), &mut input.air_temp_c, 0.5, -30.0..=40.0, " °C");
                        ui.label(tr.t(keys::INPUT_FLOOR_H))
                            .on_hover_text(tr.t(keys::INPUT_FLOOR_H_HINT));
                        ui.add(
                            egui::DragValue::new(&mut input.floor_heat_transfer_w_per_m2_k)
                                .speed(0.1)
                                .clamp_range(0.0..=30.0),
                        );
                        ui.end_row();
                    }
                    HeatMode::Flux => {
                        ui.label(tr.t(keys::INPUT_FLUX)).on_hover_text(tr.t(keys::INPUT_FLUX_HINT));
                        ui.add(
                            egui::DragValue::new(&mut input.flux_w_per_m2)
                                .speed(1.0)
                                .clamp_range(0.0..=300.0),
                        );
                        ui.end_row();
                        drag_row(ui, tr.t(keys::INPUT_AIR_TEMP), &mut input.air_temp_c, 0.5, -30.0..=40.0, " °C");
                    }
                }
                drag_row(ui, tr.t(keys::INPUT_STEP), &mut input.laying_step_mm, 5.0, 0.0..=500.0, " mm");
                ui.label("");
                ui.horizontal(|ui| {
                    for step in LAYING_STEP_CHOICES_MM {
                        ui.selectable_value(&mut input.laying_step_mm, step, format!("{step}"));
                    }
                });
                ui.end_row();
                drag_row(ui, tr.t(keys::INPUT_CARRIER_DT), &mut input.carrier_delta_t_k, 0.5, 0.0..=40.0, " K");
                drag_row(ui, tr.t(keys::INPUT_MAX_DP), &mut input.max_pressure_drop_kpa, 0.5, 0.0..=200.0, " kPa");
            });

        ui.separator();
        ui.heading(tr.t(keys::FLUID_HEADING)).on_hover_text(tr.t(keys::FLUID_HINT));
        egui::Grid::new("fluid_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label(tr.t(keys::INPUT_FLUID));
                egui::ComboBox::from_id_source("fluid")
                    .selected_text(fluid_label(tr, input.fluid))
                    .show_ui(ui, |ui| {
                        for f in [FluidKind::Water, FluidKind::PropyleneGlycol30] {
                            ui.selectable_value(&mut input.fluid, f, fluid_label(tr, f));
                        }
                    });
                ui.end_row();
                drag_row(ui, tr.t(keys::INPUT_MEAN_TEMP), &mut input.fluid_mean_temp_c, 0.5, 0.0..=90.0, " °C");
                drag_row(ui, tr.t(keys::INPUT_ROUGHNESS), &mut input.roughness_mm, 0.001, 0.0..=1.0, " mm");
            });

        ui.separator();
        ui.heading(tr.t(keys::FEED_HEADING)).on_hover_text(tr.t(keys::FEED_HINT));
        egui::Grid::new("feed_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label(tr.t(keys::INPUT_INSULATION));
                egui::ComboBox::from_id_source("insulation")
                    .selected_text(insulation_label(tr, input.insulation))
                    .show_ui(ui, |ui| {
                        for p in [
                            InsulationPreset::Pe6,
                            InsulationPreset::Pe9,
                            InsulationPreset::Pe13,
                            InsulationPreset::Custom,
                        ] {
                            ui.selectable_value(&mut input.insulation, p, insulation_label(tr, p));
                        }
                    });
                ui.end_row();
                if input.insulation == InsulationPreset::Custom {
                    drag_row(
                        ui,
                        tr.t(keys::INPUT_INS_LAMBDA),
                        &mut input.custom_insulation_conductivity_w_per_m_k,
                        0.001,
                        0.0..=1.0,
                        "",
                    );
                    drag_row(
                        ui,
                        tr.t(keys::INPUT_INS_THICKNESS),
                        &mut input.custom_insulation_thickness_mm,
                        0.5,
                        0.0..=100.0,
                        " mm",
                    );
                }
                drag_row(ui, tr.t(keys::INPUT_FEED_LENGTH), &mut input.feed_length_m, 0.5, 0.0..=200.0, " m");
            });
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        let summary = ufh::summarize(&self.config.input);
        let results = ufh::evaluate(&self.config.diameters_mm, &self.config.input);

        ui.heading(tr.t(keys::SUMMARY_HEADING));
        for line in report::render_summary(&summary, &results, tr).lines() {
            ui.label(line);
        }

        ui.separator();
        ui.heading(tr.t(keys::DIAMETERS_HEADING));
        ui.horizontal_wrapped(|ui| {
            for d in OFFERED_DIAMETERS_MM {
                let mut on = self.config.diameters_mm.contains(&d);
                if ui.checkbox(&mut on, format!("{d} mm")).changed() {
                    set_diameter(&mut self.config.diameters_mm, d, on);
                }
            }
        });

        ui.separator();
        ui.heading(tr.t(keys::RESULTS_HEADING));
        if results.is_empty() {
            ui.label(tr.t(keys::RESULTS_EMPTY));
        } else {
            let units = self.config.display_units;
            egui::Grid::new("results_grid")
                .striped(true)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for h in report::column_headers(tr, &units) {
                        ui.strong(h);
                    }
                    ui.end_row();
                    for r in &results {
                        for cell in report::row(r, tr, &units) {
                            ui.label(cell);
                        }
                        ui.end_row();
                    }
                });
        }

        ui.separator();
        egui::CollapsingHeader::new(tr.t(keys::NOTES_HEADING)).show(ui, |ui| {
            for key in [
                keys::NOTE_HEAT_MODES,
                keys::NOTE_POWER_PER_M,
                keys::NOTE_FEED,
                keys::NOTE_HYDRAULICS,
                keys::NOTE_NO_INSTALL_LIMIT,
                keys::NOTE_FLUID,
            ] {
                ui.label(format!("• {}", tr.t(key)));
            }
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.tr.t(keys::APP_TITLE));
                ui.separator();
                if ui.button(self.tr.t(keys::GUI_SETTINGS)).clicked() {
                    self.show_settings = true;
                }
            });
        });

        if self.show_settings {
            let mut open = self.show_settings;
            egui::Window::new(self.tr.t(keys::GUI_SETTINGS))
                .collapsible(false)
                .resizable(true)
                .open(&mut open)
                .show(ctx, |ui| self.ui_settings(ctx, ui));
            self.show_settings = open;
        }

        egui::SidePanel::left("inputs")
            .resizable(true)
            .min_width(280.0)
            .default_width(360.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.ui_inputs(ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .auto_shrink([false; 2])
                .show(ui, |ui| self.ui_results(ui));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn lang_flag_forms_are_recognised() {
        assert_eq!(lang_from_args(args(&["--lang", "en"])), Some("en".into()));
        assert_eq!(lang_from_args(args(&["-L", "ko"])), Some("ko".into()));
        assert_eq!(lang_from_args(args(&["--lang=ko"])), Some("ko".into()));
        assert_eq!(lang_from_args(args(&["--lang"])), None);
        assert_eq!(lang_from_args(args(&[])), None);
    }

    #[test]
    fn checkbox_state_maps_onto_diameter_list() {
        let mut d = vec![10.0, 16.0];
        set_diameter(&mut d, 12.0, true);
        set_diameter(&mut d, 12.0, true);
        set_diameter(&mut d, 10.0, false);
        assert_eq!(d, vec![16.0, 12.0]);
    }
}
