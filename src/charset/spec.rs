use crate::charset::class::CharacterClass;
use crate::error::SpecificationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRule {
    pub charset: Vec<char>,
    pub min: usize,
}

impl ClassRule {
    pub fn new(charset: &str, min: usize) -> Self {
        ClassRule {
            charset: charset.chars().collect(),
            min,
        }
    }
}

/// Exact output length plus the enabled classes and their minimums.
///
/// Classes are keyed by [`CharacterClass`], never by their content, so two
/// classes with identical (or empty) character sets stay distinct. Minimums
/// given for disabled classes still count against the length but are never
/// drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSpec {
    length: usize,
    classes: BTreeMap<CharacterClass, ClassRule>,
    disabled: BTreeMap<CharacterClass, usize>,
}

impl GenerationSpec {
    pub fn new(length: usize) -> Self {
        GenerationSpec {
            length,
            classes: BTreeMap::new(),
            disabled: BTreeMap::new(),
        }
    }

    pub fn with_class(mut self, class: CharacterClass, charset: &str, min: usize) -> Self {
        self.disabled.remove(&class);
        self.classes.insert(class, ClassRule::new(charset, min));
        self
    }

    /// Records a minimum for a class that contributes no characters.
    pub fn with_disabled_class(mut self, class: CharacterClass, min: usize) -> Self {
        self.classes.remove(&class);
        self.disabled.insert(class, min);
        self
    }

    pub fn from_options(options: &StringOptions) -> Self {
        let mut spec = GenerationSpec::new(options.length);
        for class in CharacterClass::ALL {
            if !options.enabled(class) {
                spec = spec.with_disabled_class(class, options.min(class));
                continue;
            }
            let charset = match (class, options.override_special.as_deref()) {
                (CharacterClass::Special, Some(custom)) => custom,
                _ => class.default_charset(),
            };
            spec = spec.with_class(class, charset, options.min(class));
        }
        spec
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> impl Iterator<Item = (CharacterClass, &ClassRule)> {
        self.classes.iter().map(|(class, rule)| (*class, rule))
    }

    pub fn rule(&self, class: CharacterClass) -> Option<&ClassRule> {
        self.classes.get(&class)
    }

    /// Sum of every class minimum, enabled or not; `None` if it overflows.
    pub fn required(&self) -> Option<usize> {
        self.classes
            .values()
            .map(|rule| rule.min)
            .chain(self.disabled.values().copied())
            .try_fold(0usize, |sum, min| sum.checked_add(min))
    }

    // Bounded by `required`, so only call once that is known to fit.
    fn drawn_minimums(&self) -> usize {
        self.classes.values().map(|rule| rule.min).sum()
    }

    /// Every enabled class's characters, in class order, duplicates kept.
    pub fn pool(&self) -> Vec<char> {
        self.classes
            .values()
            .flat_map(|rule| rule.charset.iter().copied())
            .collect()
    }

    pub fn validate(&self) -> Result<(), SpecificationError> {
        let required = self.required().ok_or(SpecificationError::MinimumsOverflow)?;
        if self.length < required {
            return Err(SpecificationError::LengthBelowMinimums {
                length: self.length,
                required,
            });
        }
        for (class, rule) in self.classes() {
            if rule.min > 0 && rule.charset.is_empty() {
                return Err(SpecificationError::EmptyClass {
                    class,
                    min: rule.min,
                });
            }
        }
        let remainder = self.length - self.drawn_minimums();
        if remainder > 0 && self.classes.values().all(|rule| rule.charset.is_empty()) {
            return Err(SpecificationError::EmptyPool { length: remainder });
        }
        Ok(())
    }
}

/// Caller-facing switches for a constrained string.
///
/// Minimums of disabled classes still count toward the length check but
/// produce no characters. `override_special` replaces the
/// special set verbatim; `Some("")` leaves the class with nothing to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringOptions {
    pub length: usize,
    pub upper: bool,
    pub lower: bool,
    pub numeric: bool,
    pub special: bool,
    pub min_upper: usize,
    pub min_lower: usize,
    pub min_numeric: usize,
    pub min_special: usize,
    pub override_special: Option<String>,
}

impl Default for StringOptions {
    fn default() -> Self {
        StringOptions {
            length: 16,
            upper: true,
            lower: true,
            numeric: true,
            special: true,
            min_upper: 0,
            min_lower: 0,
            min_numeric: 0,
            min_special: 0,
            override_special: None,
        }
    }
}

impl StringOptions {
    pub fn with_length(length: usize) -> Self {
        StringOptions {
            length,
            ..StringOptions::default()
        }
    }

    pub fn enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Upper => self.upper,
            CharacterClass::Lower => self.lower,
            CharacterClass::Numeric => self.numeric,
            CharacterClass::Special => self.special,
        }
    }

    pub fn min(&self, class: CharacterClass) -> usize {
        match class {
            CharacterClass::Upper => self.min_upper,
            CharacterClass::Lower => self.min_lower,
            CharacterClass::Numeric => self.min_numeric,
            CharacterClass::Special => self.min_special,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_follows_class_order() {
        let spec = GenerationSpec::new(4)
            .with_class(CharacterClass::Numeric, "01", 0)
            .with_class(CharacterClass::Upper, "AB", 0);
        assert_eq!(spec.pool(), vec!['A', 'B', '0', '1']);
    }

    #[test]
    fn identical_charsets_remain_separate_classes() {
        let options = StringOptions {
            override_special: Some(String::new()),
            numeric: false,
            ..StringOptions::with_length(8)
        };
        let spec = GenerationSpec::from_options(&options);
        assert!(spec.rule(CharacterClass::Numeric).is_none());
        assert_eq!(spec.rule(CharacterClass::Special).map(|r| r.charset.len()), Some(0));
        assert_eq!(spec.classes().count(), 3);
    }

    #[test]
    fn disabled_class_minimums_count_toward_length() {
        let options = StringOptions {
            upper: false,
            min_upper: 10,
            ..StringOptions::with_length(4)
        };
        let spec = GenerationSpec::from_options(&options);
        assert!(spec.rule(CharacterClass::Upper).is_none());
        assert_eq!(spec.required(), Some(10));
        assert_eq!(
            spec.validate(),
            Err(SpecificationError::LengthBelowMinimums {
                length: 4,
                required: 10
            })
        );
    }

    #[test]
    fn disabled_class_minimum_within_length_draws_from_enabled_pool() {
        let spec = GenerationSpec::new(4)
            .with_class(CharacterClass::Lower, "ab", 1)
            .with_disabled_class(CharacterClass::Upper, 3);
        assert_eq!(spec.required(), Some(4));
        assert_eq!(spec.drawn_minimums(), 1);
        assert_eq!(spec.pool(), vec!['a', 'b']);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn overflowing_minimums_are_rejected() {
        let spec = GenerationSpec::new(4)
            .with_class(CharacterClass::Upper, "A", usize::MAX)
            .with_class(CharacterClass::Lower, "a", 1);
        assert_eq!(spec.required(), None);
        assert_eq!(spec.validate(), Err(SpecificationError::MinimumsOverflow));
    }

    #[test]
    fn empty_override_with_minimum_is_rejected() {
        let options = StringOptions {
            override_special: Some(String::new()),
            min_special: 1,
            ..StringOptions::with_length(4)
        };
        assert_eq!(
            GenerationSpec::from_options(&options).validate(),
            Err(SpecificationError::EmptyClass {
                class: CharacterClass::Special,
                min: 1
            })
        );
    }
}
