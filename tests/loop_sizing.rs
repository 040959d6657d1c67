use approx::assert_relative_eq;
use proptest::prelude::*;
use ufh_loop_toolbox::ufh::{
    self, feed_loss, friction_factor, BindingConstraint, CalculationInput, DiameterResult,
    FeedLossInput, FluidKind, HeatMode, InsulationPreset, LoopHydraulics, DEFAULT_DIAMETERS_MM,
};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

fn hydraulics_for(diameter_mm: f64, input: &CalculationInput) -> LoopHydraulics {
    let feed = feed_loss(FeedLossInput {
        diameter_m: diameter_mm / 1000.0,
        fluid_mean_temp_c: input.fluid_mean_temp_c,
        air_temp_c: input.air_temp_c,
        insulation: input.insulation_spec(),
        feed_length_m: input.feed_length_m,
    });
    LoopHydraulics::new(diameter_mm, input, &input.fluid_properties(), &feed)
}

fn single(diameter_mm: f64, input: &CalculationInput) -> DiameterResult {
    let mut results = ufh::evaluate(&[diameter_mm], input);
    assert_eq!(results.len(), 1);
    results.remove(0)
}

#[test]
fn default_loops_hit_the_allowed_pressure_drop() {
    let input = CalculationInput::default();
    let results = ufh::evaluate(&DEFAULT_DIAMETERS_MM, &input);
    assert_eq!(results.len(), DEFAULT_DIAMETERS_MM.len());
    for r in &results {
        assert_eq!(r.binding, BindingConstraint::Hydraulic);
        assert_close(r.pressure_drop_kpa, 20.0, 0.001);
        assert_relative_eq!(r.total_length_m, r.loop_length_m + 10.0, epsilon = 1e-9);
        assert_relative_eq!(r.area_m2, r.loop_length_m * 0.15, epsilon = 1e-9);
        assert_relative_eq!(r.loop_power_w, 10.5 * r.loop_length_m, max_relative = 1e-9);
    }
}

#[test]
fn sixteen_millimetre_loop_is_in_the_usual_range() {
    let r = single(16.0, &CalculationInput::default());
    assert!(r.loop_length_m > 50.0 && r.loop_length_m < 300.0, "L={}", r.loop_length_m);
    assert!(r.reynolds > 2000.0, "Re={}", r.reynolds);
    assert!(r.feed_loss_w_per_m > 1.0 && r.feed_loss_w_per_m < 6.0);
    assert_relative_eq!(r.feed_power_w, r.feed_loss_w_per_m * 10.0, max_relative = 1e-9);
    assert_relative_eq!(r.total_power_w, r.loop_power_w + r.feed_power_w, max_relative = 1e-9);
}

#[test]
fn wider_pipe_allows_a_longer_loop() {
    let results = ufh::evaluate(&DEFAULT_DIAMETERS_MM, &CalculationInput::default());
    for pair in results.windows(2) {
        assert!(pair[0].diameter_mm < pair[1].diameter_mm);
        assert!(
            pair[0].loop_length_m < pair[1].loop_length_m,
            "{} mm: {} m vs {} mm: {} m",
            pair[0].diameter_mm,
            pair[0].loop_length_m,
            pair[1].diameter_mm,
            pair[1].loop_length_m
        );
    }
}

#[test]
fn narrower_pipe_runs_faster_at_equal_length() {
    let input = CalculationInput::default();
    let narrow = hydraulics_for(12.0, &input).operating_point(100.0);
    let wide = hydraulics_for(16.0, &input).operating_point(100.0);
    assert!(narrow.velocity_m_per_s > wide.velocity_m_per_s);
    assert!(narrow.reynolds > wide.reynolds);
    assert!(narrow.pressure_drop_pa > wide.pressure_drop_pa);
}

#[test]
fn friction_switches_regime_at_two_thousand() {
    let eps = 0.007e-3;
    let d = 0.016;
    assert_relative_eq!(friction_factor(1999.0, eps, d), 64.0 / 1999.0);
    assert!(friction_factor(2000.0, eps, d) > 64.0 / 2000.0);
    assert_eq!(friction_factor(0.0, eps, d), 0.0);
    assert_eq!(friction_factor(3000.0, eps, 0.0), 0.0);
}

#[test]
fn no_heat_demand_gives_empty_loops() {
    let input = CalculationInput {
        surface_temp_c: 22.0,
        air_temp_c: 22.0,
        ..Default::default()
    };
    for r in ufh::evaluate(&DEFAULT_DIAMETERS_MM, &input) {
        assert_eq!(r.binding, BindingConstraint::Heat);
        assert_eq!(r.loop_length_m, 0.0);
        assert_close(r.total_length_m, 10.0, 0.0);
        assert_eq!(r.flow_l_per_min, 0.0);
        assert_eq!(r.pressure_drop_kpa, 0.0);
    }
}

#[test]
fn flux_mode_uses_the_given_flux() {
    let input = CalculationInput {
        heat_mode: HeatMode::Flux,
        flux_w_per_m2: 60.0,
        ..Default::default()
    };
    let summary = ufh::summarize(&input);
    assert_relative_eq!(summary.required_flux_w_per_m2, 60.0);
    assert_relative_eq!(summary.power_per_meter_w_per_m, 9.0, max_relative = 1e-12);
    let r = single(16.0, &input);
    assert_relative_eq!(r.loop_power_w, 9.0 * r.loop_length_m, max_relative = 1e-9);
}

#[test]
fn thicker_insulation_loses_less_and_allows_more_loop() {
    let with = |insulation| {
        single(
            16.0,
            &CalculationInput {
                insulation,
                ..Default::default()
            },
        )
    };
    let pe6 = with(InsulationPreset::Pe6);
    let pe9 = with(InsulationPreset::Pe9);
    let pe13 = with(InsulationPreset::Pe13);
    assert!(pe6.feed_loss_w_per_m > pe9.feed_loss_w_per_m);
    assert!(pe9.feed_loss_w_per_m > pe13.feed_loss_w_per_m);
    assert!(pe13.loop_length_m > pe6.loop_length_m);
}

#[test]
fn longer_feed_costs_power_and_loop_length() {
    let short = single(16.0, &CalculationInput::default());
    let long = single(
        16.0,
        &CalculationInput {
            feed_length_m: 30.0,
            ..Default::default()
        },
    );
    assert!(long.feed_power_w > short.feed_power_w);
    assert!(long.loop_length_m < short.loop_length_m);
}

#[test]
fn glycol_shortens_the_loop() {
    let water = single(16.0, &CalculationInput::default());
    let glycol = single(
        16.0,
        &CalculationInput {
            fluid: FluidKind::PropyleneGlycol30,
            ..Default::default()
        },
    );
    assert!(glycol.loop_length_m < water.loop_length_m);
}

#[test]
fn zero_diameter_is_capped_not_hung() {
    let r = single(0.0, &CalculationInput::default());
    assert_eq!(r.loop_length_m, 1e6);
    assert_eq!(r.velocity_m_per_s, 0.0);
}

proptest! {
    #[test]
    fn pressure_drop_grows_with_length(
        d_idx in 0usize..DEFAULT_DIAMETERS_MM.len(),
        flux in 10.0f64..150.0,
        l1 in 0.0f64..2000.0,
        delta in 0.5f64..500.0,
    ) {
        let input = CalculationInput {
            heat_mode: HeatMode::Flux,
            flux_w_per_m2: flux,
            ..Default::default()
        };
        let h = hydraulics_for(DEFAULT_DIAMETERS_MM[d_idx], &input);
        prop_assert!(h.pressure_drop_pa(l1 + delta) >= h.pressure_drop_pa(l1));
    }
}
