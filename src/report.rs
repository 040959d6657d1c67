//! 계산 결과를 표시 단위로 바꿔 표 형태의 문자열로 만든다.
//! CLI와 GUI가 같은 행/열 정의를 공유한다.

use crate::config::DisplayUnits;
use crate::i18n::{keys, Translator};
use crate::ufh::{BindingConstraint, DiameterResult, HeatDemandSummary};
use crate::units::*;

/// 계산할 수 없는 값(NaN, ∞) 표시
pub const UNAVAILABLE: &str = "—";

/// 유한한 값만 소수점 `digits` 자리로 표시한다.
pub fn number(value: f64, digits: usize) -> String {
    if value.is_finite() {
        format!("{value:.digits$}")
    } else {
        UNAVAILABLE.to_string()
    }
}

/// 결과표 머리글. 단위가 있는 열은 `이름 [단위]` 형식이다.
pub fn column_headers(tr: &Translator, units: &DisplayUnits) -> Vec<String> {
    let with_unit = |key: &str, unit: &str| format!("{} [{unit}]", tr.t(key));
    vec![
        with_unit(keys::COL_DIAMETER, "mm"),
        with_unit(keys::COL_LOOP_LENGTH, units.length.label()),
        with_unit(keys::COL_TOTAL_LENGTH, units.length.label()),
        with_unit(keys::COL_FLOW, units.flow.label()),
        with_unit(keys::COL_LOOP_POWER, "W"),
        with_unit(keys::COL_AREA, units.area.label()),
        with_unit(keys::COL_FEED_POWER, "W"),
        with_unit(keys::COL_TOTAL_POWER, "W"),
        with_unit(keys::COL_VELOCITY, units.velocity.label()),
        tr.t(keys::COL_REYNOLDS),
        with_unit(keys::COL_PRESSURE_DROP, units.pressure_drop.label()),
        tr.t(keys::COL_BINDING),
    ]
}

pub fn binding_label(tr: &Translator, binding: BindingConstraint) -> String {
    match binding {
        BindingConstraint::Heat => tr.t(keys::BINDING_HEAT),
        BindingConstraint::Hydraulic => tr.t(keys::BINDING_HYDRAULIC),
    }
}

/// 결과 한 행을 표시 단위 문자열로 만든다.
pub fn row(r: &DiameterResult, tr: &Translator, units: &DisplayUnits) -> Vec<String> {
    let length = |v| convert_length(v, LengthUnit::Meter, units.length);
    vec![
        format!("{}", r.diameter_mm),
        number(length(r.loop_length_m), 1),
        number(length(r.total_length_m), 1),
        number(convert_flow(r.flow_l_per_min, FlowUnit::LiterPerMinute, units.flow), 2),
        number(r.loop_power_w, 0),
        number(convert_area(r.area_m2, AreaUnit::SquareMeter, units.area), 2),
        number(r.feed_power_w, 0),
        number(r.total_power_w, 0),
        number(
            convert_velocity(r.velocity_m_per_s, VelocityUnit::MeterPerSecond, units.velocity),
            3,
        ),
        number(r.reynolds, 0),
        number(
            convert_pressure(r.pressure_drop_kpa, PressureUnit::KiloPascal, units.pressure_drop),
            2,
        ),
        binding_label(tr, r.binding),
    ]
}

/// 고정폭 텍스트 표를 만든다.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let cols = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for r in rows {
        for (w, cell) in widths.iter_mut().zip(r.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let fmt_line = |cells: &[String]| {
        cells
            .iter()
            .take(cols)
            .zip(widths.iter())
            .map(|(c, &w)| format!("{c:>w$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let mut out = fmt_line(headers);
    out.push('\n');
    let total: usize = widths.iter().sum::<usize>() + 2 * cols.saturating_sub(1);
    out.push_str(&"-".repeat(total));
    for r in rows {
        out.push('\n');
        out.push_str(&fmt_line(r));
    }
    out
}

/// 결과 전체를 텍스트 표로 만든다.
pub fn render_results(results: &[DiameterResult], tr: &Translator, units: &DisplayUnits) -> String {
    if results.is_empty() {
        return tr.t(keys::RESULTS_EMPTY);
    }
    let headers = column_headers(tr, units);
    let rows: Vec<Vec<String>> = results.iter().map(|r| row(r, tr, units)).collect();
    render_table(&headers, &rows)
}

/// 열량 요약과 공급관 손실(첫 번째 내경 기준)을 여러 줄 문자열로 만든다.
pub fn render_summary(
    summary: &HeatDemandSummary,
    results: &[DiameterResult],
    tr: &Translator,
) -> String {
    let mut lines = vec![
        format!(
            "{}: {} W/m²",
            tr.t(keys::SUMMARY_FLUX),
            number(summary.required_flux_w_per_m2, 1)
        ),
        format!(
            "{}: {} W/m",
            tr.t(keys::SUMMARY_POWER_PER_M),
            number(summary.power_per_meter_w_per_m, 1)
        ),
        format!(
            "{}: {} m",
            tr.t(keys::SUMMARY_STEP),
            number(summary.laying_step_m, 3)
        ),
    ];
    if let Some(first) = results.first() {
        lines.push(format!(
            "{}: {} W/m (D={} mm)",
            tr.t(keys::SUMMARY_FEED_LOSS_PER_M),
            number(first.feed_loss_w_per_m, 2),
            first.diameter_mm
        ));
        lines.push(format!(
            "{}: {} W",
            tr.t(keys::SUMMARY_FEED_POWER),
            number(first.feed_power_w, 0)
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ufh::{evaluate, summarize, CalculationInput};

    #[test]
    fn non_finite_values_render_as_marker() {
        assert_eq!(number(f64::NAN, 2), UNAVAILABLE);
        assert_eq!(number(f64::INFINITY, 0), UNAVAILABLE);
        assert_eq!(number(1.23456, 2), "1.23");
    }

    #[test]
    fn table_has_one_line_per_result() {
        let tr = Translator::new("en");
        let input = CalculationInput::default();
        let results = evaluate(&[16.0, 12.0], &input);
        let text = render_results(&results, &tr, &DisplayUnits::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Δp [kPa]"));
        assert!(lines[2].trim_start().starts_with("12"));
        assert!(lines[3].contains("hydraulic"));
    }

    #[test]
    fn display_units_convert_cells() {
        let tr = Translator::new("en");
        let input = CalculationInput::default();
        let results = evaluate(&[16.0], &input);
        let units = DisplayUnits {
            pressure_drop: PressureUnit::Bar,
            ..DisplayUnits::default()
        };
        let cells = row(&results[0], &tr, &units);
        assert_eq!(cells[10], "0.20");
    }

    #[test]
    fn summary_mentions_feed_loss() {
        let tr = Translator::new("en");
        let input = CalculationInput::default();
        let results = evaluate(&[16.0], &input);
        let text = render_summary(&summarize(&input), &results, &tr);
        assert!(text.contains("70.0 W/m²"));
        assert!(text.contains("10.5 W/m"));
        assert!(text.contains("Feed loss q'"));
    }

    #[test]
    fn empty_results_show_message() {
        let tr = Translator::new("en");
        assert_eq!(
            render_results(&[], &tr, &DisplayUnits::default()),
            "No diameters selected."
        );
    }
}
