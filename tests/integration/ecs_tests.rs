//! Threshold and regulation tests for the ECS against mock collaborators.
//!
//! Fixture: lower = 25, upper = 28.

use crate::mock_hw::{HeaterCall, MockHeater, MockWindow, StubSensor, WindowCall};

use ecs::{Ecs, ThresholdError};

type Uut = Ecs<StubSensor, MockHeater, MockWindow>;

fn make_uut(temperature: i32) -> Uut {
    Ecs::new(
        StubSensor::returning(temperature),
        MockHeater::new(),
        MockWindow::new(),
        25,
        28,
    )
    .unwrap()
}

fn regulate_at(temperature: i32) -> Uut {
    let mut uut = make_uut(temperature);
    uut.regulate();
    uut
}

// ── Thresholds ────────────────────────────────────────────────

#[test]
fn thresholds_valid_upper_set_succeeds() {
    let mut uut = make_uut(0);
    assert!(uut.set_upper_threshold(27).is_ok());
    assert_eq!(uut.upper_threshold(), 27);
}

#[test]
fn thresholds_valid_lower_set_succeeds() {
    let mut uut = make_uut(0);
    assert!(uut.set_lower_threshold(26).is_ok());
    assert_eq!(uut.lower_threshold(), 26);
}

#[test]
fn thresholds_upper_set_to_lower_succeeds() {
    let mut uut = make_uut(0);
    let lower = uut.lower_threshold();
    assert!(uut.set_upper_threshold(lower).is_ok());
}

#[test]
fn thresholds_lower_set_to_upper_succeeds() {
    let mut uut = make_uut(0);
    let upper = uut.upper_threshold();
    assert!(uut.set_lower_threshold(upper).is_ok());
}

#[test]
fn thresholds_invalid_upper_is_rejected() {
    let mut uut = make_uut(0);
    assert_eq!(
        uut.set_upper_threshold(24),
        Err(ThresholdError::UpperBelowLower { upper: 24, lower: 25 })
    );
    assert_eq!(uut.upper_threshold(), 28);
}

#[test]
fn thresholds_invalid_lower_is_rejected() {
    let mut uut = make_uut(0);
    assert_eq!(
        uut.set_lower_threshold(29),
        Err(ThresholdError::LowerAboveUpper { lower: 29, upper: 28 })
    );
    assert_eq!(uut.lower_threshold(), 25);
}

#[test]
fn thresholds_setters_do_not_touch_actuators() {
    let mut uut = make_uut(0);
    uut.set_upper_threshold(30).unwrap();
    uut.set_lower_threshold(20).unwrap();
    let _ = uut.set_lower_threshold(99);
    assert!(uut.heater().calls.is_empty());
    assert!(uut.window().calls.is_empty());
    assert_eq!(uut.sensor().reads, 0);
}

// ── T < lower ─────────────────────────────────────────────────

#[test]
fn regulate_temp_is_low_heater_is_turned_on() {
    let uut = regulate_at(24);
    assert_eq!(uut.heater().received(HeaterCall::TurnOn), 1);
    assert_eq!(uut.heater().received(HeaterCall::TurnOff), 0);
}

#[test]
fn regulate_temp_is_low_window_is_closed() {
    let uut = regulate_at(24);
    assert_eq!(uut.window().received(WindowCall::Close), 1);
    assert_eq!(uut.window().received(WindowCall::Open), 0);
}

// ── T == lower ────────────────────────────────────────────────

#[test]
fn regulate_temp_at_lower_threshold_heater_is_turned_off() {
    let uut = regulate_at(25);
    assert_eq!(uut.heater().received(HeaterCall::TurnOff), 1);
    assert_eq!(uut.heater().received(HeaterCall::TurnOn), 0);
}

#[test]
fn regulate_temp_at_lower_threshold_window_is_closed() {
    let uut = regulate_at(25);
    assert_eq!(uut.window().received(WindowCall::Close), 1);
}

// ── lower < T < upper ─────────────────────────────────────────

#[test]
fn regulate_temp_between_thresholds_heater_is_turned_off() {
    for t in [26, 27] {
        let uut = regulate_at(t);
        assert_eq!(uut.heater().received(HeaterCall::TurnOn), 0, "T={t}");
        assert_eq!(uut.heater().received(HeaterCall::TurnOff), 1, "T={t}");
    }
}

#[test]
fn regulate_temp_between_thresholds_window_is_closed() {
    let uut = regulate_at(27);
    assert_eq!(uut.window().received(WindowCall::Close), 1);
}

// ── T == upper ────────────────────────────────────────────────

#[test]
fn regulate_temp_at_upper_threshold_heater_is_turned_off() {
    let uut = regulate_at(28);
    assert_eq!(uut.heater().received(HeaterCall::TurnOn), 0);
    assert_eq!(uut.heater().received(HeaterCall::TurnOff), 1);
}

#[test]
fn regulate_temp_at_upper_threshold_window_is_closed() {
    let uut = regulate_at(28);
    assert_eq!(uut.window().received(WindowCall::Close), 1);
    assert_eq!(uut.window().received(WindowCall::Open), 0);
}

// ── T > upper ─────────────────────────────────────────────────

#[test]
fn regulate_temp_above_upper_threshold_heater_is_turned_off() {
    let uut = regulate_at(29);
    assert_eq!(uut.heater().received(HeaterCall::TurnOff), 1);
}

#[test]
fn regulate_temp_above_upper_threshold_window_is_opened() {
    let uut = regulate_at(29);
    assert_eq!(uut.window().received(WindowCall::Open), 1);
    assert_eq!(uut.window().received(WindowCall::Close), 0);
}

// ── Per-cycle contract ────────────────────────────────────────

#[test]
fn regulate_reads_sensor_once_and_commands_each_actuator_once() {
    for t in [i32::MIN, 0, 24, 25, 26, 27, 28, 29, i32::MAX] {
        let uut = regulate_at(t);
        assert_eq!(uut.sensor().reads, 1, "T={t}");
        assert_eq!(uut.heater().calls.len(), 1, "T={t}");
        assert_eq!(uut.window().calls.len(), 1, "T={t}");
    }
}

#[test]
fn regulate_does_not_suppress_redundant_commands() {
    let mut uut = make_uut(29);
    for _ in 0..5 {
        uut.regulate();
    }
    assert_eq!(uut.window().received(WindowCall::Open), 5);
    assert_eq!(uut.heater().received(HeaterCall::TurnOff), 5);
}

#[test]
fn borrowed_collaborators_can_be_inspected_after_release() {
    let mut sensor = StubSensor::returning(24);
    let mut heater = MockHeater::new();
    let mut window = MockWindow::new();
    {
        let mut uut = Ecs::new(&mut sensor, &mut heater, &mut window, 25, 28).unwrap();
        uut.regulate();
    }
    assert_eq!(heater.calls, vec![HeaterCall::TurnOn]);
    assert_eq!(window.calls, vec![WindowCall::Close]);
}
