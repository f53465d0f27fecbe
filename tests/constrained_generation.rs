use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{SeedableRng, TryCryptoRng, TryRngCore};
use random_values::charset::class::{LOWER_CHARS, NUMERIC_CHARS, SPECIAL_CHARS, UPPER_CHARS};
use random_values::{
    generate, generate_string, CharacterClass, Error, GenerationSpec, SecureSource,
    SpecificationError, StringOptions,
};
use std::collections::HashSet;
use std::io;

fn count_in(result: &str, charset: &str) -> usize {
    result.chars().filter(|c| charset.contains(*c)).count()
}

fn os_string(options: &StringOptions) -> Result<String, Error> {
    generate_string(options, &mut SecureSource::os()).map(|s| s.into_string())
}

#[test]
fn default_options_produce_exact_length() {
    for length in [1, 2, 16, 64, 257] {
        let result = os_string(&StringOptions::with_length(length)).unwrap();
        assert_eq!(result.chars().count(), length);
    }
}

#[test]
fn every_minimum_is_met() {
    let options = StringOptions {
        min_upper: 3,
        min_lower: 4,
        min_numeric: 5,
        min_special: 2,
        ..StringOptions::with_length(14)
    };
    for _ in 0..50 {
        let result = os_string(&options).unwrap();
        assert_eq!(result.chars().count(), 14);
        assert!(count_in(&result, UPPER_CHARS) >= 3, "{result}");
        assert!(count_in(&result, LOWER_CHARS) >= 4, "{result}");
        assert!(count_in(&result, NUMERIC_CHARS) >= 5, "{result}");
        assert!(count_in(&result, SPECIAL_CHARS) >= 2, "{result}");
    }
}

#[test]
fn length_below_minimums_is_rejected() {
    let options = StringOptions {
        min_upper: 10,
        min_lower: 12,
        ..StringOptions::with_length(16)
    };
    match os_string(&options) {
        Err(Error::Specification(SpecificationError::LengthBelowMinimums { length, required })) => {
            assert_eq!((length, required), (16, 22));
        }
        other => panic!("expected a specification error, got {other:?}"),
    }
}

#[test]
fn overflowing_minimum_sum_is_rejected() {
    let options = StringOptions {
        min_upper: usize::MAX,
        min_lower: 1,
        ..StringOptions::with_length(4)
    };
    assert!(matches!(
        os_string(&options),
        Err(Error::Specification(SpecificationError::MinimumsOverflow))
    ));
}

#[test]
fn maximal_single_minimum_is_a_length_error() {
    let options = StringOptions {
        min_special: usize::MAX,
        ..StringOptions::with_length(4)
    };
    match os_string(&options) {
        Err(Error::Specification(SpecificationError::LengthBelowMinimums { length, required })) => {
            assert_eq!((length, required), (4, usize::MAX));
        }
        other => panic!("expected a length error, got {other:?}"),
    }
}

#[test]
fn huge_length_without_characters_fails_before_allocating() {
    let options = StringOptions {
        upper: false,
        lower: false,
        numeric: false,
        special: false,
        ..StringOptions::with_length(usize::MAX)
    };
    assert!(matches!(
        os_string(&options),
        Err(Error::Specification(SpecificationError::EmptyPool { length: usize::MAX }))
    ));
}

#[test]
fn disabled_class_minimums_still_bound_the_length() {
    let options = StringOptions {
        upper: false,
        min_upper: 10,
        ..StringOptions::with_length(4)
    };
    match os_string(&options) {
        Err(Error::Specification(SpecificationError::LengthBelowMinimums { length, required })) => {
            assert_eq!((length, required), (4, 10));
        }
        other => panic!("expected a length error, got {other:?}"),
    }

    let options = StringOptions {
        upper: false,
        min_upper: 3,
        min_numeric: 1,
        ..StringOptions::with_length(4)
    };
    for _ in 0..20 {
        let result = os_string(&options).unwrap();
        assert_eq!(result.chars().count(), 4);
        assert_eq!(count_in(&result, UPPER_CHARS), 0, "{result}");
        assert!(count_in(&result, NUMERIC_CHARS) >= 1, "{result}");
    }
}

#[test]
fn length_equal_to_minimums_is_accepted() {
    let options = StringOptions {
        min_upper: 8,
        min_lower: 8,
        ..StringOptions::with_length(16)
    };
    let result = os_string(&options).unwrap();
    assert_eq!(count_in(&result, UPPER_CHARS), 8);
    assert_eq!(count_in(&result, LOWER_CHARS), 8);
}

#[test]
fn zero_length_is_empty_not_an_error() {
    let result = generate(&GenerationSpec::new(0), &mut SecureSource::os()).unwrap();
    assert!(result.is_empty());
    assert_eq!(os_string(&StringOptions::with_length(0)).unwrap(), "");
}

#[test]
fn nothing_enabled_cannot_fill_a_positive_length() {
    let options = StringOptions {
        upper: false,
        lower: false,
        numeric: false,
        special: false,
        ..StringOptions::with_length(4)
    };
    assert!(matches!(
        os_string(&options),
        Err(Error::Specification(SpecificationError::EmptyPool { length: 4 }))
    ));
}

#[test]
fn zero_minimum_classes_still_feed_the_pool() {
    let spec = GenerationSpec::new(200)
        .with_class(CharacterClass::Upper, "A", 1)
        .with_class(CharacterClass::Numeric, "7", 0);
    let result = generate(&spec, &mut SecureSource::os()).unwrap();
    assert!(result.as_str().contains('A'));
    assert!(result.as_str().contains('7'));
    assert_eq!(result.len(), 200);
}

#[test]
fn override_special_replaces_the_default_set() {
    let options = StringOptions {
        upper: false,
        lower: false,
        numeric: false,
        min_special: 3,
        override_special: Some("#~".to_string()),
        ..StringOptions::with_length(32)
    };
    let result = os_string(&options).unwrap();
    assert!(result.chars().all(|c| c == '#' || c == '~'), "{result}");
}

#[test]
fn empty_override_disables_special_characters() {
    let options = StringOptions {
        override_special: Some(String::new()),
        ..StringOptions::with_length(128)
    };
    let result = os_string(&options).unwrap();
    assert_eq!(count_in(&result, SPECIAL_CHARS), 0, "{result}");
}

#[test]
fn multibyte_overrides_count_characters() {
    let options = StringOptions {
        upper: false,
        lower: false,
        numeric: false,
        min_special: 2,
        override_special: Some("ßø€".to_string()),
        ..StringOptions::with_length(10)
    };
    let result = generate_string(&options, &mut SecureSource::os()).unwrap();
    assert_eq!(result.len(), 10);
    assert!(result.as_str().len() > 10);
}

#[test]
fn required_characters_are_not_placed_first() {
    let options = StringOptions {
        numeric: false,
        special: false,
        min_upper: 4,
        ..StringOptions::with_length(8)
    };
    let mut prefixes = HashSet::new();
    let mut upper_first = 0;
    for _ in 0..50 {
        let result = os_string(&options).unwrap();
        let prefix: String = result.chars().take(4).collect();
        if count_in(&prefix, UPPER_CHARS) == 4 {
            upper_first += 1;
        }
        prefixes.insert(prefix);
    }
    assert!(prefixes.len() > 1);
    assert!(upper_first < 50, "minimum characters always led the result");
}

#[test]
fn seeded_secure_generator_is_reproducible() {
    let options = StringOptions {
        min_numeric: 2,
        ..StringOptions::with_length(20)
    };
    let first = generate_string(&options, &mut SecureSource::new(StdRng::seed_from_u64(9))).unwrap();
    let second = generate_string(&options, &mut SecureSource::new(StdRng::seed_from_u64(9))).unwrap();
    assert_eq!(first, second);
}

struct ExhaustedRng;

impl TryRngCore for ExhaustedRng {
    type Error = io::Error;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        Err(io::Error::new(io::ErrorKind::Other, "entropy exhausted"))
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        Err(io::Error::new(io::ErrorKind::Other, "entropy exhausted"))
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), Self::Error> {
        Err(io::Error::new(io::ErrorKind::Other, "entropy exhausted"))
    }
}

impl TryCryptoRng for ExhaustedRng {}

#[test]
fn entropy_failures_surface_as_errors() {
    let err = generate_string(
        &StringOptions::with_length(8),
        &mut SecureSource::new(ExhaustedRng),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Entropy(ref msg) if msg.contains("exhausted")));
    assert!(err.is_retryable());
}

#[test]
fn specification_errors_are_not_retryable() {
    let err = os_string(&StringOptions {
        min_lower: 5,
        ..StringOptions::with_length(1)
    })
    .unwrap_err();
    assert!(!err.is_retryable());
}

#[test]
fn invalid_specifications_consume_no_entropy() {
    let options = StringOptions {
        min_upper: 3,
        ..StringOptions::with_length(2)
    };
    let err = generate_string(&options, &mut SecureSource::new(ExhaustedRng)).unwrap_err();
    assert!(matches!(err, Error::Specification(_)));
}

proptest! {
    #[test]
    fn length_and_minimums_hold(
        seed in any::<u64>(),
        flags in (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()),
        mins in (0usize..5, 0usize..5, 0usize..5, 0usize..5),
        extra in 0usize..12,
    ) {
        let (upper, lower, numeric, special) = flags;
        prop_assume!(upper || lower || numeric || special);
        let effective = |enabled: bool, min: usize| if enabled { min } else { 0 };
        let required = mins.0 + mins.1 + mins.2 + mins.3;
        let options = StringOptions {
            length: required + extra,
            upper,
            lower,
            numeric,
            special,
            min_upper: mins.0,
            min_lower: mins.1,
            min_numeric: mins.2,
            min_special: mins.3,
            override_special: None,
        };

        let result = generate_string(&options, &mut SecureSource::new(StdRng::seed_from_u64(seed)))
            .unwrap()
            .into_string();

        prop_assert_eq!(result.chars().count(), required + extra);
        prop_assert!(count_in(&result, UPPER_CHARS) >= effective(upper, mins.0));
        prop_assert!(count_in(&result, LOWER_CHARS) >= effective(lower, mins.1));
        prop_assert!(count_in(&result, NUMERIC_CHARS) >= effective(numeric, mins.2));
        prop_assert!(count_in(&result, SPECIAL_CHARS) >= effective(special, mins.3));
        if !upper { prop_assert_eq!(count_in(&result, UPPER_CHARS), 0); }
        if !lower { prop_assert_eq!(count_in(&result, LOWER_CHARS), 0); }
        if !numeric { prop_assert_eq!(count_in(&result, NUMERIC_CHARS), 0); }
        if !special { prop_assert_eq!(count_in(&result, SPECIAL_CHARS), 0); }
    }

    #[test]
    fn short_lengths_always_fail(seed in any::<u64>(), min in 1usize..20, short in 0usize..20) {
        prop_assume!(short < min);
        let options = StringOptions {
            min_numeric: min,
            ..StringOptions::with_length(short)
        };
        let outcome = generate_string(&options, &mut SecureSource::new(StdRng::seed_from_u64(seed)));
        let is_length_error = matches!(
            outcome,
            Err(Error::Specification(SpecificationError::LengthBelowMinimums { .. }))
        );
        prop_assert!(is_length_error);
    }
}
