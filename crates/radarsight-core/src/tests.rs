#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::commands::SessionCommand;
    use crate::config::*;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::{ConfigurationError, SessionLoadError};
    use crate::events::SimEvent;
    use crate::session::Session;
    use crate::types::{Position, SimTime};

    // ---- Position ----

    #[test]
    fn test_position_magnitude() {
        let pos = Position::new(10.0, 8.0, 15.0);
        assert_abs_diff_eq!(pos.magnitude(), 389.0_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(pos.magnitude(), 19.72, epsilon = 0.01);
    }

    #[test]
    fn test_position_magnitude_does_not_overflow() {
        let pos = Position::new(1e200, 0.0, 1e200);
        assert!(pos.magnitude().is_finite());
        assert_abs_diff_eq!(pos.magnitude() / 1e200, 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_bearing_convention() {
        // 0° along +z, 90° along +x
        assert_abs_diff_eq!(Position::new(0.0, 0.0, 10.0).bearing_deg(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Position::new(10.0, 0.0, 0.0).bearing_deg(), 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Position::new(-10.0, 0.0, 0.0).bearing_deg(), -90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Position::new(50.0, 8.0, 50.0).bearing_deg(), 45.0, epsilon = 1e-12);
        // Altitude does not affect bearing
        assert_abs_diff_eq!(
            Position::new(5.0, 1000.0, 5.0).bearing_deg(),
            Position::new(5.0, 0.0, 5.0).bearing_deg(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(0.25);
        time.advance(0.5);
        assert_eq!(time.tick, 2);
        assert_abs_diff_eq!(time.elapsed_secs, 0.75, epsilon = 1e-12);
    }

    // ---- Validation ----

    #[test]
    fn test_default_configs_are_valid() {
        assert!(AircraftConfig::default().validate().is_ok());
        assert!(RadarConfig::default().validate().is_ok());
        assert!(AircraftConfig::optimal_stealth(Position::new(1.0, 2.0, 3.0))
            .validate()
            .is_ok());
    }

    #[test]
    fn test_absorption_of_one_rejected() {
        let aircraft = AircraftConfig {
            absorption_coefficient: 1.0,
            ..Default::default()
        };
        assert_eq!(
            aircraft.validate(),
            Err(ConfigurationError::OutOfRange {
                field: "absorption_coefficient",
                value: 1.0,
                min: 0.0,
                max: 1.0,
            })
        );
    }

    #[test]
    fn test_non_positive_cross_section_rejected() {
        for value in [0.0, -1.0] {
            let aircraft = AircraftConfig {
                base_cross_section: value,
                ..Default::default()
            };
            assert!(matches!(
                aircraft.validate(),
                Err(ConfigurationError::NonPositive {
                    field: "base_cross_section",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_non_finite_position_rejected() {
        let aircraft = AircraftConfig {
            position: Position::new(0.0, f64::NAN, 1.0),
            ..Default::default()
        };
        assert!(matches!(
            aircraft.validate(),
            Err(ConfigurationError::NonFinite {
                field: "position.y",
                ..
            })
        ));
    }

    #[test]
    fn test_angle_must_be_wrapped() {
        let aircraft = AircraftConfig {
            angle_to_radar_deg: 360.0,
            ..Default::default()
        };
        assert!(aircraft.validate().is_err());
    }

    #[test]
    fn test_radar_validation() {
        let cases = [
            RadarConfig {
                frequency_ghz: 0.0,
                ..Default::default()
            },
            RadarConfig {
                power_kw: -5.0,
                ..Default::default()
            },
            RadarConfig {
                range_km: f64::INFINITY,
                ..Default::default()
            },
            RadarConfig {
                sensitivity_dbm: f64::NAN,
                ..Default::default()
            },
        ];
        for radar in &cases {
            assert!(radar.validate().is_err(), "{radar:?} should be rejected");
        }
        // Positive sensitivity is unusual but computable.
        let loud = RadarConfig {
            sensitivity_dbm: 5.0,
            ..Default::default()
        };
        assert!(loud.validate().is_ok());
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let err = RadarConfig {
            power_kw: 0.0,
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "power_kw must be positive, got 0");

        let err = crate::error::require_above("advance_period", 0.0, 1e-9).unwrap_err();
        assert_eq!(err.to_string(), "advance_period must exceed 0.000000001, got 0");
    }

    // ---- Canonical stealth ----

    #[test]
    fn test_optimal_stealth_fields() {
        let pos = Position::new(10.0, 8.0, 15.0);
        let stealth = AircraftConfig::optimal_stealth(pos);
        assert_eq!(stealth.base_cross_section, STEALTH_MIN_CROSS_SECTION);
        assert_eq!(stealth.absorption_coefficient, STEALTH_MAX_ABSORPTION);
        assert_eq!(stealth.geometry, GeometryClass::Stealth);
        assert_eq!(stealth.angle_to_radar_deg, 0.0);
        assert_eq!(stealth.position, pos);
        assert!(is_optimal_stealth_config(&stealth));
    }

    #[test]
    fn test_optimal_stealth_ignores_position() {
        let mut stealth = AircraftConfig::optimal_stealth(Position::new(1.0, 1.0, 1.0));
        stealth.position = Position::new(-400.0, 20.0, 900.0);
        assert!(stealth.is_optimal_stealth());
    }

    #[test]
    fn test_any_field_edit_breaks_optimal_stealth() {
        let base = AircraftConfig::optimal_stealth(Position::new(10.0, 8.0, 15.0));
        let edits: Vec<Box<dyn Fn(&mut AircraftConfig)>> = vec![
            Box::new(|a: &mut AircraftConfig| a.base_cross_section = 0.002),
            Box::new(|a: &mut AircraftConfig| a.absorption_coefficient = 0.9),
            Box::new(|a: &mut AircraftConfig| a.geometry = GeometryClass::Fighter),
            Box::new(|a: &mut AircraftConfig| a.angle_to_radar_deg = 1.0),
        ];
        for edit in edits {
            let mut aircraft = base;
            edit(&mut aircraft);
            assert!(!is_optimal_stealth_config(&aircraft));
        }
    }

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle_deg(0.0), 0.0);
        assert_abs_diff_eq!(normalize_angle_deg(370.0), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_angle_deg(-90.0), 270.0, epsilon = 1e-12);
        assert_eq!(normalize_angle_deg(360.0), 0.0);
        let tiny = normalize_angle_deg(-1e-20);
        assert!((0.0..360.0).contains(&tiny));
    }

    // ---- Session ----

    #[test]
    fn test_session_rejects_invalid_and_keeps_previous() {
        let mut session = Session::default();
        let before = *session.aircraft();

        let result = session.update_aircraft(|a| a.absorption_coefficient = 1.5);
        assert!(result.is_err());
        assert_eq!(*session.aircraft(), before);

        session
            .update_aircraft(|a| a.geometry = GeometryClass::Conventional)
            .unwrap();
        assert_eq!(session.aircraft().geometry, GeometryClass::Conventional);
    }

    #[test]
    fn test_session_radar_update() {
        let mut session = Session::default();
        session.update_radar(|r| r.range_km = 250.0).unwrap();
        assert_eq!(session.radar().range_m(), 250_000.0);
        assert!(session.update_radar(|r| r.frequency_ghz = -1.0).is_err());
        assert_eq!(session.radar().frequency_ghz, 10.0);
    }

    #[test]
    fn test_session_json_round_trip() {
        let session = Session::new(
            AircraftConfig::optimal_stealth(Position::new(3.0, 4.0, 5.0)),
            RadarConfig::default(),
        )
        .unwrap();
        let json = session.to_json().unwrap();
        let back = Session::from_json(&json).unwrap();
        assert_eq!(session, back);
    }

    #[test]
    fn test_session_from_json_validates() {
        let mut session = Session::default();
        session.update_radar(|r| r.power_kw = 123.0).unwrap();
        let json = session.to_json().unwrap().replace("123.0", "-123.0");
        assert!(matches!(
            Session::from_json(&json),
            Err(SessionLoadError::Invalid(ConfigurationError::NonPositive {
                field: "power_kw",
                ..
            }))
        ));
        assert!(matches!(
            Session::from_json("{\"aircraft\": 3}"),
            Err(SessionLoadError::Malformed(_))
        ));
    }

    // ---- Wire format ----

    /// Commands are internally tagged for the host's IPC layer.
    #[test]
    fn test_command_wire_format() {
        let json = serde_json::to_string(&SessionCommand::SetAngle { degrees: 45.0 }).unwrap();
        assert_eq!(json, r#"{"type":"SetAngle","degrees":45.0}"#);

        let parsed: SessionCommand =
            serde_json::from_str(r#"{"type":"SetGeometry","geometry":"Stealth"}"#).unwrap();
        assert!(matches!(
            parsed,
            SessionCommand::SetGeometry {
                geometry: GeometryClass::Stealth
            }
        ));

        let parsed: SessionCommand = serde_json::from_str(r#"{"type":"EnterStealth"}"#).unwrap();
        assert!(matches!(parsed, SessionCommand::EnterStealth));
    }

    #[test]
    fn test_event_wire_format() {
        let event = SimEvent::PulseRetired {
            id: 7,
            reason: RetireReason::RoundTripComplete,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"type":"PulseRetired","id":7,"reason":"RoundTripComplete"}"#
        );
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);

        let skipped = SimEvent::PulsesSkipped {
            first_id: 0,
            count: 96,
        };
        assert_eq!(
            serde_json::to_string(&skipped).unwrap(),
            r#"{"type":"PulsesSkipped","first_id":0,"count":96}"#
        );
    }
}
