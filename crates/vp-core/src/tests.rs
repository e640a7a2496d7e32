//! Unit tests for vp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AircraftId, PassengerId};

    #[test]
    fn ordering() {
        assert!(AircraftId(0) < AircraftId(1));
        assert!(PassengerId(100) > PassengerId(99));
    }

    #[test]
    fn display() {
        assert_eq!(AircraftId(7).to_string(), "Aircraft_7");
        assert_eq!(PassengerId(0).to_string(), "Passenger_0");
    }
}

#[cfg(test)]
mod time {
    use crate::SimTime;

    #[test]
    fn after_and_since() {
        let t = SimTime::from_hours(1.5);
        let later = t.after(0.25);
        assert_eq!(later, SimTime(1.75));
        assert!((later.since(t) - 0.25).abs() < 1e-12);
        assert!((later - t - 0.25).abs() < 1e-12);
    }

    #[test]
    fn total_ordering() {
        let mut v = vec![SimTime(3.0), SimTime(0.5), SimTime(2.0), SimTime::ZERO];
        v.sort();
        assert_eq!(v, vec![SimTime::ZERO, SimTime(0.5), SimTime(2.0), SimTime(3.0)]);
    }

    #[test]
    fn display_renders_offset() {
        // 1 day, 2 h, 3 min, 4.5 s
        let hours = 26.0 + 3.0 / 60.0 + 4.5 / 3600.0;
        assert_eq!(SimTime(hours).to_string(), "T+1d 02:03:04.500");
        assert_eq!(SimTime::ZERO.to_string(), "T+0d 00:00:00.000");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..100 {
            assert_eq!(a.exponential(0.5).to_bits(), b.exponential(0.5).to_bits());
        }
    }

    #[test]
    fn exponential_is_positive_with_roughly_right_mean() {
        let mut rng = SimRng::new(7);
        let n = 20_000;
        let mut sum = 0.0;
        for _ in 0..n {
            let x = rng.exponential(2.0);
            assert!(x >= 0.0);
            sum += x;
        }
        let mean = sum / n as f64;
        assert!((mean - 2.0).abs() < 0.1, "sample mean {mean}");
    }

    #[test]
    fn deterministic_duration_is_the_mean() {
        let mut rng = SimRng::new(1);
        assert_eq!(rng.duration(0.25, false), 0.25);
    }

    #[test]
    fn deterministic_duration_leaves_stream_untouched() {
        let mut a = SimRng::new(3);
        let mut b = SimRng::new(3);
        let _ = a.duration(1.0, false);
        assert_eq!(a.exponential(1.0).to_bits(), b.exponential(1.0).to_bits());
    }
}

#[cfg(test)]
mod supply {
    use crate::{AircraftId, IdSupply};

    #[test]
    fn hands_out_sequential_ids_then_exhausts() {
        let mut s: IdSupply<AircraftId> = IdSupply::new(3);
        assert_eq!(s.next_id(), Some(AircraftId(0)));
        assert_eq!(s.next_id(), Some(AircraftId(1)));
        assert!(!s.is_exhausted());
        assert_eq!(s.next_id(), Some(AircraftId(2)));
        assert!(s.is_exhausted());
        assert_eq!(s.next_id(), None);
        assert_eq!(s.consumed(), 3);
    }

    #[test]
    fn empty_supply() {
        let mut s: IdSupply<AircraftId> = IdSupply::new(0);
        assert!(s.is_exhausted());
        assert_eq!(s.next_id(), None);
    }
}

#[cfg(test)]
mod config {
    use crate::{BufferCapacity, CoreError, VertiportConfig};

    #[test]
    fn from_rates_converts_units() {
        let c = VertiportConfig::from_rates(20.0, 120.0, 15.0, 1.5);
        assert!((c.aircraft_mean_interarrival - 0.05).abs() < 1e-12);
        assert!((c.passenger_mean_interarrival - 1.0 / 120.0).abs() < 1e-12);
        assert!((c.charge_mean_service - 0.25).abs() < 1e-12);
        assert!((c.landing_mean_service - 0.025).abs() < 1e-12);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn effective_charge_mean_divides_by_bays() {
        let mut c = VertiportConfig::default();
        c.charge_mean_service = 0.6;
        c.num_park = 3;
        assert!((c.effective_charge_mean() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_positive_mean() {
        let mut c = VertiportConfig::default();
        c.landing_mean_service = 0.0;
        assert!(matches!(
            c.validate(),
            Err(CoreError::InvalidDuration { what: "landing_mean_service", .. })
        ));
    }

    #[test]
    fn rejects_nan_interarrival() {
        let mut c = VertiportConfig::default();
        c.aircraft_mean_interarrival = f64::NAN;
        assert!(c.validate().is_err());
    }

    #[test]
    fn passenger_mean_ignored_without_passengers() {
        let mut c = VertiportConfig::default();
        c.passenger_arrivals = false;
        c.passenger_mean_interarrival = f64::INFINITY;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_zero_bays_and_seats() {
        let mut c = VertiportConfig::default();
        c.num_park = 0;
        assert!(matches!(c.validate(), Err(CoreError::Config(_))));
        let mut c = VertiportConfig::default();
        c.seat_capacity = 0;
        assert!(matches!(c.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn buffer_capacity_helpers() {
        assert!(BufferCapacity::Bounded(0).is_bounded());
        assert_eq!(BufferCapacity::Bounded(5).limit(), Some(5));
        assert_eq!(BufferCapacity::Unbounded.limit(), None);
        assert!(!BufferCapacity::Unbounded.is_bounded());
    }
}
