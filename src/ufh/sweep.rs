use log::debug;

use super::feed_loss::{feed_loss, FeedLossInput};
use super::input::CalculationInput;
use super::loop_solver::{solve_max_length, DiameterResult};

/// 화면에서 고를 수 있는 내경 후보 [mm]
pub const OFFERED_DIAMETERS_MM: [f64; 6] = [10.0, 12.0, 13.0, 14.0, 16.0, 18.0];
/// 기본 선택 내경 [mm]
pub const DEFAULT_DIAMETERS_MM: [f64; 4] = [10.0, 12.0, 13.0, 16.0];

/// 후보 내경마다 코일 길이를 계산해 내경 오름차순으로 돌려준다.
///
/// 입력의 순수 함수다. 같은 내경이 여러 번 주어지면 한 번만 계산한다.
pub fn evaluate(candidate_diameters_mm: &[f64], input: &CalculationInput) -> Vec<DiameterResult> {
    let mut diameters = candidate_diameters_mm.to_vec();
    diameters.sort_by(f64::total_cmp);
    diameters.dedup_by(|a, b| a.total_cmp(b).is_eq());

    let fluid = input.fluid_properties();
    let insulation = input.insulation_spec();
    debug!(
        "sweep over {} diameters: rho={:.1}, mu={:.6}, cp={:.0}",
        diameters.len(),
        fluid.density_kg_per_m3,
        fluid.dynamic_viscosity_pa_s,
        fluid.specific_heat_j_per_kg_k
    );

    diameters
        .into_iter()
        .map(|d_mm| {
            let feed = feed_loss(FeedLossInput {
                diameter_m: d_mm / 1000.0,
                fluid_mean_temp_c: input.fluid_mean_temp_c,
                air_temp_c: input.air_temp_c,
                insulation,
                feed_length_m: input.feed_length_m,
            });
            solve_max_length(d_mm, input, &fluid, &feed)
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::ufh::fluid_props::FluidKind;
    use crate::ufh::input::{HeatMode, InsulationPreset};
    use proptest::prelude::*;

    fn any_input() -> impl Strategy<Value = CalculationInput> {
        (
            any::<f64>(),
            any::<f64>(),
            any::<f64>(),
            any::<f64>(),
            any::<f64>(),
            any::<f64>(),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(t_surf, t_air, step, dt, dp, feed, glycol, flux_mode)| CalculationInput {
                surface_temp_c: t_surf,
                air_temp_c: t_air,
                laying_step_mm: step,
                carrier_delta_t_k: dt,
                max_pressure_drop_kpa: dp,
                feed_length_m: feed,
                fluid: if glycol {
                    FluidKind::PropyleneGlycol30
                } else {
                    FluidKind::Water
                },
                insulation: InsulationPreset::Custom,
                custom_insulation_thickness_mm: step,
                heat_mode: if flux_mode { HeatMode::Flux } else { HeatMode::DeltaT },
                flux_w_per_m2: t_surf,
                ..Default::default()
            })
    }

    proptest! {
        #[test]
        fn output_is_sorted_for_any_order(ds in prop::collection::vec(1.0_f64..40.0, 0..8)) {
            let res = evaluate(&ds, &CalculationInput::default());
            prop_assert!(res.windows(2).all(|w| w[0].diameter_mm < w[1].diameter_mm));
            prop_assert!(res.len() <= ds.len());
        }

        #[test]
        fn malformed_input_never_panics(input in any_input(), d in any::<f64>()) {
            let res = evaluate(&[d, 16.0], &input);
            prop_assert!(!res.is_empty());
        }
    }
}
