/// Property tests for the generator invariants.
///
/// Uses proptest for deterministic seeds, reproducible failures, and
/// shrinking to minimal failing cases.
use jiff::civil::DateTime;
use jiff::{SignedDuration, Span};
use proptest::prelude::*;

use suitegen::number::format_float;
use suitegen::timestamp::{format_iso, parse_iso, shift_days, shift_seconds};
use suitegen::{ActivityGenerator, ActivityTemplate, GeneratorConfig, LineEnding};

const BASE: &str = "2020-12-11T07:30:06.955000";

fn generator(seed: u64) -> ActivityGenerator {
    ActivityGenerator::new(ActivityTemplate::default(), GeneratorConfig { seed: Some(seed) })
        .unwrap()
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(config())]

    /// `from` is exactly `day_offset` days after the base.
    #[test]
    fn from_is_base_plus_days(seed in any::<u64>(), day_offset in 0i64..200_000) {
        let record = generator(seed).generate_activity(day_offset).unwrap();
        let base: DateTime = BASE.parse().unwrap();
        let from = parse_iso(&record.from).unwrap();
        prop_assert_eq!(from, base.checked_add(Span::new().days(day_offset)).unwrap());
        prop_assert_eq!(from.time(), base.time());
    }

    /// `to` is exactly one second after `from`.
    #[test]
    fn to_is_from_plus_one_second(seed in any::<u64>(), day_offset in -100_000i64..100_000) {
        let record = generator(seed).generate_activity(day_offset).unwrap();
        let from = parse_iso(&record.from).unwrap();
        let to = parse_iso(&record.to).unwrap();
        prop_assert_eq!(to.duration_since(from), SignedDuration::from_secs(1));
    }

    #[test]
    fn probability_in_unit_interval(seed in any::<u64>()) {
        let mut g = generator(seed);
        for _ in 0..32 {
            let p = g.generate_probability();
            prop_assert!((0.0..1.0).contains(&p));
        }
    }

    /// The rendered probability reads back as the same float.
    #[test]
    fn probability_text_round_trips(f in 0.0f64..1.0) {
        let s = format_float(f);
        prop_assert_eq!(s.parse::<f64>().unwrap(), f);
    }

    #[test]
    fn float_text_round_trips(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        prop_assert_eq!(format_float(f).parse::<f64>().unwrap(), f);
    }

    #[test]
    fn ids_are_v4_uuids(seed in any::<u64>()) {
        let id = generator(seed).generate_id();
        let tail = id.strip_prefix("suite:activity_").unwrap();
        let uuid = uuid::Uuid::parse_str(tail).unwrap();
        prop_assert_eq!(uuid.get_version_num(), 4);
        prop_assert_eq!(tail.len(), 36);
    }

    /// Day shifts compose: shifting by a then b equals shifting by a + b.
    #[test]
    fn day_shifts_compose(a in -50_000i64..50_000, b in -50_000i64..50_000) {
        let stepwise = shift_days(&shift_days(BASE, a).unwrap(), b).unwrap();
        prop_assert_eq!(stepwise, shift_days(BASE, a + b).unwrap());
    }

    /// Shifting by seconds then back restores the input.
    #[test]
    fn second_shift_inverts(secs in -10_000_000i64..10_000_000) {
        let there = shift_seconds(BASE, secs).unwrap();
        prop_assert_eq!(shift_seconds(&there, -secs).unwrap(), BASE);
    }

    /// Rendering then parsing keeps microsecond precision.
    #[test]
    fn iso_text_round_trips(
        days in 0i64..100_000,
        micros in 0i64..1_000_000,
    ) {
        let dt: DateTime = "1970-01-01T00:00:00".parse().unwrap();
        let dt = dt
            .checked_add(Span::new().days(days).microseconds(micros))
            .unwrap();
        prop_assert_eq!(parse_iso(&format_iso(dt)).unwrap(), dt);
    }

    /// A batch bound of n yields max(n - 1, 0) records.
    #[test]
    fn batch_record_count(seed in any::<u64>(), n in -5i64..40) {
        let mut buf = Vec::new();
        let written = suitegen::write_batch(&mut buf, &mut generator(seed), n, LineEnding::Lf)
            .unwrap();
        let expected = (n - 1).max(0) as u64;
        prop_assert_eq!(written, expected);
        let text = String::from_utf8(buf).unwrap();
        prop_assert_eq!(text.matches(" rdf:type suite:Activity .").count() as u64, expected);
    }
}
