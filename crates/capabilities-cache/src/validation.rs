//! Input guards run by every mutator before it touches the store.
//!
//! Rust has no null references, so "null" means *absent*: an empty
//! identifier, a `None`, an empty locale. Absent values raise
//! [`CacheError::NullArgument`]; present but malformed values raise
//! [`CacheError::InvalidArgument`].

use sos_common::{CacheError, CacheResult, Envelope, Locale, MultilingualString};

/// Values that can be absent.
pub trait Absent {
    fn is_absent(&self) -> bool;
}

impl Absent for str {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl Absent for String {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl Absent for &str {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl Absent for Locale {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Absent for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

pub fn greater_zero(name: &str, value: i32) -> CacheResult<()> {
    if value <= 0 {
        return Err(CacheError::invalid_argument(
            name,
            format!("must be greater than zero, got {}", value),
        ));
    }
    Ok(())
}

pub fn not_null<T: Absent + ?Sized>(name: &str, value: &T) -> CacheResult<()> {
    if value.is_absent() {
        return Err(CacheError::null_argument(name));
    }
    Ok(())
}

pub fn not_null_or_empty(name: &str, value: &str) -> CacheResult<()> {
    not_null(name, value)?;
    if value.trim().is_empty() {
        return Err(CacheError::invalid_argument(name, "must not be blank"));
    }
    Ok(())
}

pub fn no_null_values<T: Absent>(name: &str, values: &[T]) -> CacheResult<()> {
    if values.iter().any(Absent::is_absent) {
        return Err(CacheError::null_argument(format!("{} element", name)));
    }
    Ok(())
}

pub fn no_null_or_empty_values<S: AsRef<str>>(name: &str, values: &[S]) -> CacheResult<()> {
    for value in values {
        not_null_or_empty(name, value.as_ref()).map_err(|err| match err {
            CacheError::NullArgument { .. } => {
                CacheError::null_argument(format!("{} element", name))
            }
            other => other,
        })?;
    }
    Ok(())
}

/// A positive EPSG code and, when a box is present, finite ordered corners.
pub fn valid_envelope(envelope: &Envelope) -> CacheResult<()> {
    greater_zero("envelope srid", envelope.srid)?;
    if let Some(bbox) = envelope.bbox {
        if !bbox.is_valid() {
            return Err(CacheError::invalid_argument(
                "envelope",
                format!(
                    "bounding box [{}, {}, {}, {}] is inverted or not finite",
                    bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y
                ),
            ));
        }
    }
    Ok(())
}

/// Neither locales nor values of a multilingual string may be absent.
pub fn no_null_map_values(name: &str, values: &MultilingualString) -> CacheResult<()> {
    for (locale, value) in values.iter() {
        if locale.is_absent() {
            return Err(CacheError::null_argument(format!("{} locale", name)));
        }
        if value.is_absent() {
            return Err(CacheError::null_argument(format!("{} value for {}", name, locale)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greater_zero() {
        assert!(greater_zero("epsg", 4326).is_ok());
        assert!(matches!(
            greater_zero("epsg", 0),
            Err(CacheError::InvalidArgument { .. })
        ));
        assert!(greater_zero("epsg", -1).is_err());
    }

    #[test]
    fn test_not_null_or_empty_discriminates() {
        assert!(not_null_or_empty("offering", "o1").is_ok());
        assert_eq!(
            not_null_or_empty("offering", ""),
            Err(CacheError::null_argument("offering"))
        );
        assert!(matches!(
            not_null_or_empty("offering", "   "),
            Err(CacheError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_collection_guards() {
        let ok = vec!["a".to_string(), "b".to_string()];
        let with_null = vec!["a".to_string(), String::new()];
        let with_blank = vec!["a".to_string(), " ".to_string()];

        assert!(no_null_values("features", &ok).is_ok());
        assert!(matches!(
            no_null_values("features", &with_null),
            Err(CacheError::NullArgument { .. })
        ));
        assert!(no_null_values("features", &with_blank).is_ok());

        assert!(matches!(
            no_null_or_empty_values("features", &with_null),
            Err(CacheError::NullArgument { .. })
        ));
        assert!(matches!(
            no_null_or_empty_values("features", &with_blank),
            Err(CacheError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_option_values() {
        assert!(no_null_values("times", &[Some(1), Some(2)]).is_ok());
        assert!(no_null_values("times", &[Some(1), None]).is_err());
    }

    #[test]
    fn test_envelope_guard() {
        use sos_common::BoundingBox;

        assert!(valid_envelope(&Envelope::new(BoundingBox::point(1.0, 1.0), 4326)).is_ok());
        assert!(valid_envelope(&Envelope::empty(31467)).is_ok());
        assert!(matches!(
            valid_envelope(&Envelope::new(BoundingBox::point(1.0, 1.0), 0)),
            Err(CacheError::InvalidArgument { .. })
        ));
        assert!(
            valid_envelope(&Envelope::new(BoundingBox::new(2.0, 0.0, 1.0, 1.0), 4326)).is_err()
        );
        assert!(valid_envelope(&Envelope::new(BoundingBox::point(f64::NAN, 0.0), 4326)).is_err());
    }

    #[test]
    fn test_map_values() {
        let ok = MultilingualString::new().with("eng", "Gauge");
        let empty_value = MultilingualString::new().with("eng", "");
        let empty_locale = MultilingualString::new().with("", "Gauge");

        assert!(no_null_map_values("name", &ok).is_ok());
        assert!(no_null_map_values("name", &empty_value).is_err());
        assert!(no_null_map_values("name", &empty_locale).is_err());
    }
}
