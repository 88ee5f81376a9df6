//! Arming changes → alarm status and sensor reset.

use crate::mock_repo::{MockRepository, RepoCall, ScriptedAnalyzer, active, house};

use catpoint::app::service::AlarmDecisionEngine;
use catpoint::fsm::{AlarmStatus, ArmingStatus};

type Engine = AlarmDecisionEngine<MockRepository, ScriptedAnalyzer>;

fn make_engine(alarm: AlarmStatus, arming: ArmingStatus, verdicts: &[bool]) -> Engine {
    let sensors = house().into_iter().map(active);
    let repo = MockRepository::new(alarm, arming).with_sensors(sensors);
    AlarmDecisionEngine::new(repo, ScriptedAnalyzer::new(verdicts.iter().copied()))
}

#[test]
fn disarm_always_clears_the_alarm() {
    for status in [
        AlarmStatus::NoAlarm,
        AlarmStatus::PendingAlarm,
        AlarmStatus::Alarm,
    ] {
        let mut engine = make_engine(status, ArmingStatus::ArmedAway, &[]);

        engine.set_arming_status(ArmingStatus::Disarmed);

        assert_eq!(engine.alarm_status(), AlarmStatus::NoAlarm);
        assert_eq!(engine.arming_status(), ArmingStatus::Disarmed);
        assert_eq!(engine.repository().times_set(AlarmStatus::NoAlarm), 1);
    }
}

#[test]
fn disarm_leaves_sensors_untouched() {
    let mut engine = make_engine(AlarmStatus::Alarm, ArmingStatus::ArmedHome, &[]);

    engine.set_arming_status(ArmingStatus::Disarmed);

    assert!(engine.repository().updated_ids().is_empty());
    assert!(engine.sensors_state());
}

#[test]
fn arming_deactivates_every_sensor_once() {
    for arming in [ArmingStatus::ArmedHome, ArmingStatus::ArmedAway] {
        let mut engine = make_engine(AlarmStatus::NoAlarm, ArmingStatus::Disarmed, &[]);

        engine.set_arming_status(arming);

        let mut ids = engine.repository().updated_ids();
        ids.sort();
        let expected: Vec<_> = house().iter().map(|s| s.id()).collect();
        assert_eq!(ids, expected, "each sensor reset exactly once");
        assert!(engine.sensors().iter().all(|s| !s.is_active()));
        assert!(!engine.sensors_state());
    }
}

#[test]
fn arming_while_pending_settles_to_quiet() {
    // The first active sensor to be reset clears the pending alarm.
    let mut engine = make_engine(AlarmStatus::PendingAlarm, ArmingStatus::Disarmed, &[]);

    engine.set_arming_status(ArmingStatus::ArmedAway);

    assert_eq!(engine.repository().alarm_writes(), vec![AlarmStatus::NoAlarm]);
}

#[test]
fn arming_after_cat_seen_forces_alarm() {
    let mut engine = make_engine(AlarmStatus::NoAlarm, ArmingStatus::Disarmed, &[true]);
    engine.process_image(&[0u8; 16]);
    assert!(engine.cat_detected());

    engine.set_arming_status(ArmingStatus::ArmedHome);

    assert_eq!(engine.alarm_status(), AlarmStatus::Alarm);
    // Sensor resets cannot unlatch the alarm.
    assert!(engine.sensors().iter().all(|s| !s.is_active()));
}

#[test]
fn arming_away_after_cat_seen_also_forces_alarm() {
    let mut engine = make_engine(AlarmStatus::NoAlarm, ArmingStatus::Disarmed, &[true]);
    engine.process_image(&[0u8; 16]);

    engine.set_arming_status(ArmingStatus::ArmedAway);

    assert_eq!(engine.alarm_status(), AlarmStatus::Alarm);
}

#[test]
fn arming_status_persisted_after_sensor_reset() {
    let mut engine = make_engine(AlarmStatus::NoAlarm, ArmingStatus::Disarmed, &[]);

    engine.set_arming_status(ArmingStatus::ArmedAway);

    let calls = &engine.repository().calls;
    assert_eq!(
        calls.last(),
        Some(&RepoCall::SetArming(ArmingStatus::ArmedAway))
    );
    let arming_writes = calls
        .iter()
        .filter(|c| matches!(c, RepoCall::SetArming(_)))
        .count();
    assert_eq!(arming_writes, 1);
}

#[test]
fn switching_armed_modes_with_active_sensors_stays_quiet() {
    // Resetting an active sensor while NoAlarm is a plain deactivation.
    let mut engine = make_engine(AlarmStatus::NoAlarm, ArmingStatus::ArmedHome, &[]);

    engine.set_arming_status(ArmingStatus::ArmedAway);

    assert!(engine.repository().alarm_writes().is_empty());
    assert_eq!(engine.arming_status(), ArmingStatus::ArmedAway);
}
