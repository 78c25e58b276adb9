//! Integration tests for the control surface.
//!
//! Tests drive the simulator through Apply and Reset the way the window does
//! and check the state, the status indicator, the readout and the chart.

use glucose_simulator::{
    ControlAction, GlucoseStatus, InputError, InputField, InputForm, Readout, Simulator,
};

const EPS: f64 = 1e-9;

#[test]
fn test_apply_with_defaults() {
    let mut sim = Simulator::new();
    let level = sim.apply().expect("default inputs are valid");

    assert!((level - 7.0).abs() < EPS);
    assert_eq!(sim.state.len(), 2);
    assert_eq!(sim.state.time, 1);
    assert_eq!(sim.status(), GlucoseStatus::InRange);
    assert_eq!(sim.readout().text(), "Glucose level: 7.0 mmol/L");
}

#[test]
fn test_second_apply_goes_out_of_range() {
    let mut sim = Simulator::new();
    sim.dispatch(ControlAction::Apply);
    sim.dispatch(ControlAction::Apply);

    assert!((sim.state.glucose_level - 8.5).abs() < EPS);
    assert_eq!(sim.status(), GlucoseStatus::OutOfRange);
    assert_eq!(sim.view().points().len(), 3);
}

#[test]
fn test_zero_inputs_keep_status() {
    let mut sim = Simulator::new();
    sim.form = InputForm {
        insulin: "0".to_string(),
        carbs: "0".to_string(),
        glycemic_load: "0".to_string(),
        activity_minutes: 0,
    };
    sim.apply().unwrap();
    assert_eq!(sim.state.glucose_level, 5.5);
    assert_eq!(sim.status(), GlucoseStatus::InRange);
}

#[test]
fn test_invalid_input_does_not_mutate() {
    for field in [InputField::Insulin, InputField::Carbs, InputField::GlycemicLoad] {
        let mut sim = Simulator::new();
        sim.dispatch(ControlAction::Apply);
        sim.dispatch(ControlAction::Apply);
        assert_eq!(sim.status(), GlucoseStatus::OutOfRange);

        let state_before = sim.state.clone();
        let redraws_before = sim.view().redraw_count();
        let points_before = sim.view().points().to_vec();

        match field {
            InputField::Insulin => sim.form.insulin = "abc".to_string(),
            InputField::Carbs => sim.form.carbs = "abc".to_string(),
            InputField::GlycemicLoad => sim.form.glycemic_load = "abc".to_string(),
        }

        let err = sim.apply().unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidNumber {
                field,
                text: "abc".to_string(),
            }
        );

        assert_eq!(sim.state, state_before);
        assert_eq!(sim.readout(), Readout::InputError);
        assert_eq!(sim.readout().text(), "Input error!");
        // Indicator and chart keep their previous contents
        assert_eq!(sim.status(), GlucoseStatus::OutOfRange);
        assert_eq!(sim.view().redraw_count(), redraws_before);
        assert_eq!(sim.view().points(), points_before.as_slice());
    }
}

#[test]
fn test_recovery_after_input_error() {
    let mut sim = Simulator::new();
    sim.form.carbs = "sixty".to_string();
    sim.dispatch(ControlAction::Apply);
    assert_eq!(sim.readout(), Readout::InputError);

    sim.form.carbs = "60".to_string();
    sim.dispatch(ControlAction::Apply);
    assert_eq!(sim.state.len(), 2);
    assert_eq!(sim.readout(), Readout::Level(sim.state.glucose_level));
}

#[test]
fn test_reset_restores_everything() {
    let mut sim = Simulator::new();
    sim.form.insulin = "1".to_string();
    sim.form.carbs = "200".to_string();
    sim.form.glycemic_load = "40".to_string();
    sim.form.set_activity_minutes(120);
    for _ in 0..5 {
        sim.dispatch(ControlAction::Apply);
    }
    assert_eq!(sim.status(), GlucoseStatus::OutOfRange);
    let redraws = sim.view().redraw_count();

    sim.dispatch(ControlAction::Reset);

    assert_eq!(sim.state.glucose_history(), &[5.5]);
    assert_eq!(sim.state.time_history(), &[0]);
    assert_eq!(sim.state.time, 0);
    assert_eq!(sim.form.insulin, "10");
    assert_eq!(sim.form.carbs, "60");
    assert_eq!(sim.form.glycemic_load, "20");
    assert_eq!(sim.form.activity_minutes, 30);
    assert_eq!(sim.status(), GlucoseStatus::InRange);
    assert_eq!(sim.readout().text(), "Glucose level: 5.5 mmol/L");
    assert_eq!(sim.view().redraw_count(), redraws + 1);
    assert_eq!(sim.view().points(), &[[0.0, 5.5]]);
}

#[test]
fn test_reset_clears_input_error() {
    let mut sim = Simulator::new();
    sim.form.glycemic_load = "?".to_string();
    sim.dispatch(ControlAction::Apply);
    sim.dispatch(ControlAction::Reset);
    assert_eq!(sim.readout(), Readout::Level(5.5));
    assert!(sim.form.parse().is_ok());
}
