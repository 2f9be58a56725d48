// ABOUTME: Synthetic record generator for users, workers and appointments
// ABOUTME: Every field is sampled independently from fixed tables and uniform ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Record Generator
//!
//! Produces schema-shaped records for the registration and appointment
//! endpoints. No cross-field consistency is enforced: a worker's experience is
//! drawn independently of their age, so a 25 year old with 30 years of
//! experience is a possible output.
//!
//! The generator owns a seedable RNG, so a run started with the same seed and
//! settings produces the same records.

/// Location sampling strategies
pub mod location;
/// Phone number formats
pub mod phone;

pub use location::LocationMode;
pub use phone::PhoneFormat;

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Duration, NaiveDateTime, NaiveTime};
use dycare_core::constants::geography::{FIRST_NAMES, LAST_NAMES};
use dycare_core::constants::ranges;
use dycare_core::models::{
    AppointmentRecord, Gender, Location, Shift, UserRecord, WorkerRecord, WorkerRole,
    WorkerSchedule,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::{Builder, Uuid};

/// Inclusive age bounds for generated users
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    /// Youngest age
    pub min: u32,
    /// Oldest age
    pub max: u32,
}

impl AgeRange {
    /// Ages used when seeding registrations
    pub const REGISTRATION: Self = Self {
        min: ranges::USER_AGE.0,
        max: ranges::USER_AGE.1,
    };

    /// Ages used when seeding appointments
    pub const APPOINTMENT: Self = Self {
        min: ranges::APPOINTMENT_USER_AGE.0,
        max: ranges::APPOINTMENT_USER_AGE.1,
    };
}

/// Knobs that change the shape of generated records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeneratorSettings {
    /// Phone number digit count
    pub phone: PhoneFormat,
    /// Coordinate sampling strategy
    pub location_mode: LocationMode,
}

/// Seed for a run: the explicit one, or the current Unix time in seconds
///
/// Runs log the returned value so any run can be replayed with `--seed`.
#[must_use]
pub fn resolve_seed(explicit: Option<u64>) -> u64 {
    explicit.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(12345)
    })
}

/// Random record factory
pub struct RecordGenerator {
    rng: StdRng,
    settings: GeneratorSettings,
}

impl RecordGenerator {
    /// Generator seeded from OS entropy
    #[must_use]
    pub fn new(settings: GeneratorSettings) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            settings,
        }
    }

    /// Generator with a fixed seed, for reproducible runs
    #[must_use]
    pub fn from_seed(seed: u64, settings: GeneratorSettings) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            settings,
        }
    }

    /// "First Last" display name
    pub fn name(&mut self) -> String {
        let first = self.pick(FIRST_NAMES);
        let last = self.pick(LAST_NAMES);
        format!("{first} {last}")
    }

    /// Phone number in the configured format
    pub fn phone(&mut self) -> String {
        self.settings.phone.generate(&mut self.rng)
    }

    /// Location drawn with the configured strategy
    pub fn location(&mut self) -> Location {
        self.settings.location_mode.sample(&mut self.rng)
    }

    /// User record without an identity; the server assigns one
    pub fn user(&mut self, ages: AgeRange) -> UserRecord {
        let gender = if self.rng.gen_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        };
        let preferred_type = WorkerRole::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(WorkerRole::Nurse);

        UserRecord {
            id: None,
            name: self.name(),
            age: self.rng.gen_range(ages.min..=ages.max),
            location: self.location(),
            phone: self.phone(),
            backup_phone: self.phone(),
            gender,
            preferred_type,
        }
    }

    /// User record carrying a client-assigned v4 identity
    pub fn user_with_id(&mut self, ages: AgeRange) -> UserRecord {
        let id = self.uuid();
        UserRecord {
            id: Some(id),
            ..self.user(ages)
        }
    }

    /// Worker record for the given role
    pub fn worker(&mut self, role: WorkerRole) -> WorkerRecord {
        let (min_age, max_age) = ranges::WORKER_AGE;
        let (min_exp, max_exp) = ranges::WORKER_EXPERIENCE;

        let name = self.name();
        let age = self.rng.gen_range(min_age..=max_age);
        let experience = self.rng.gen_range(min_exp..=max_exp);
        let education = self.pick(role.education_levels());
        let specialization = role.specializations().map(|options| self.pick(options));

        WorkerRecord {
            name,
            age,
            experience,
            education,
            profile_picture: String::new(),
            specialization,
            phone: self.phone(),
            location: self.location(),
            schedule: WorkerSchedule::default(),
        }
    }

    /// Appointment on a whole hour between 08:00 and 17:00, 1 to 30 days after `now`
    pub fn appointment(
        &mut self,
        user_id: &str,
        worker_id: &str,
        now: NaiveDateTime,
    ) -> AppointmentRecord {
        let (min_days, max_days) = ranges::APPOINTMENT_DAYS_AHEAD;
        let (min_hour, max_hour) = ranges::APPOINTMENT_HOUR;

        let day = (now + Duration::days(self.rng.gen_range(min_days..=max_days))).date();
        let hour = self.rng.gen_range(min_hour..=max_hour);
        let time = NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN);
        let shift = Shift::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Shift::Morning);

        AppointmentRecord {
            date: day.and_time(time),
            user_id: user_id.to_owned(),
            worker_id: worker_id.to_owned(),
            shift,
            status: false,
            notified: false,
        }
    }

    fn uuid(&mut self) -> Uuid {
        Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }

    fn pick(&mut self, options: &[&str]) -> String {
        options
            .choose(&mut self.rng)
            .map_or_else(String::new, |s| (*s).to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn generator() -> RecordGenerator {
        RecordGenerator::from_seed(2024, GeneratorSettings::default())
    }

    #[test]
    fn test_same_seed_same_records() {
        let mut a = generator();
        let mut b = generator();
        assert_eq!(
            a.user(AgeRange::REGISTRATION),
            b.user(AgeRange::REGISTRATION)
        );
        assert_eq!(a.worker(WorkerRole::Nurse), b.worker(WorkerRole::Nurse));
    }

    #[test]
    fn test_resolve_seed() {
        assert_eq!(resolve_seed(Some(42)), 42);
        // 2020-01-01T00:00:00Z
        assert!(resolve_seed(None) > 1_577_836_800);
    }

    #[test]
    fn test_worker_fields_come_from_role_tables() {
        let mut gen = generator();
        for role in WorkerRole::ALL {
            for _ in 0..50 {
                let worker = gen.worker(role);
                assert!(role.education_levels().contains(&worker.education.as_str()));
                match (role.specializations(), worker.specialization.as_deref()) {
                    (Some(options), Some(spec)) => assert!(options.contains(&spec)),
                    (None, None) => {}
                    other => panic!("specialization mismatch for {role}: {other:?}"),
                }
                assert!((25..=60).contains(&worker.age));
                assert!((1..=30).contains(&worker.experience));
                assert!(worker.schedule.available.is_empty());
                assert!(worker.schedule.booked.is_empty());
            }
        }
    }

    #[test]
    fn test_user_with_id_is_v4() {
        let mut gen = generator();
        let user = gen.user_with_id(AgeRange::APPOINTMENT);
        let id = user.id.unwrap();
        assert_eq!(id.get_version_num(), 4);
        assert!((25..=80).contains(&user.age));
    }

    #[test]
    fn test_appointment_window() {
        let mut gen = generator();
        let now = NaiveDate::from_ymd_opt(2026, 1, 31)
            .and_then(|d| d.and_hms_opt(22, 15, 7))
            .unwrap();
        for _ in 0..200 {
            let appt = gen.appointment("u", "w", now);
            let days_ahead = (appt.date.date() - now.date()).num_days();
            assert!((1..=30).contains(&days_ahead));
            assert!((8..=17).contains(&appt.date.hour()));
            assert_eq!(appt.date.minute(), 0);
            assert_eq!(appt.date.second(), 0);
            assert!(!appt.status);
            assert!(!appt.notified);
        }
    }
}
