use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

///
/// Absential
///
/// A closed slot holding either a concrete value or absence. `Absent`
/// carries no payload, so every absent slot of a given instantiation is the
/// same value; no singleton bookkeeping is needed in typed positions. Use
/// this as a parameter type wherever "caller did not supply this" must stay
/// distinguishable from "caller supplied null/none".
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Absential<T> {
    Present(T),
    Absent,
}

impl<T> Absential<T> {
    /// True when the slot holds a concrete value.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// True when the slot was never supplied. The logical negation of
    /// [`is_present`](Self::is_present); never both.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Bridge from nullable form: `None` becomes `Absent`.
    #[must_use]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Bridge to nullable form: `Absent` becomes `None`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    #[must_use]
    pub const fn as_ref(&self) -> Absential<&T> {
        match self {
            Self::Present(value) => Absential::Present(value),
            Self::Absent => Absential::Absent,
        }
    }

    /// Partial-update helper: overwrite `target` with the supplied value and
    /// report true, or leave it untouched and report false.
    pub fn merge_into(self, target: &mut T) -> bool {
        match self {
            Self::Present(value) => {
                *target = value;
                true
            }
            Self::Absent => false,
        }
    }
}

impl<T> Default for Absential<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: fmt::Display> fmt::Display for Absential<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => value.fmt(f),
            Self::Absent => f.write_str("absent"),
        }
    }
}

impl<T> From<T> for Absential<T> {
    fn from(value: T) -> Self {
        Self::Present(value)
    }
}

// A present slot serializes transparently as its value. An absent slot
// refuses: absence never crosses a process boundary, the documented bridge
// there is `into_option` / `from_option`.
impl<T: Serialize> Serialize for Absential<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Present(value) => value.serialize(serializer),
            Self::Absent => Err(serde::ser::Error::custom(Error::invalid_operation(
                "serialize",
            ))),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Absential<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::Present)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_absent() {
        let slot: Absential<String> = Absential::default();

        assert!(slot.is_absent());
        assert!(!slot.is_present());
    }

    #[test]
    fn discriminators_are_exclusive() {
        let present = Absential::Present(5);
        let absent: Absential<i32> = Absential::Absent;

        assert!(present.is_present() && !present.is_absent());
        assert!(absent.is_absent() && !absent.is_present());
    }

    #[test]
    fn option_round_trips() {
        assert_eq!(Absential::from_option(Some(7)).into_option(), Some(7));
        assert_eq!(Absential::<i32>::from_option(None).into_option(), None);
        assert_eq!(Absential::from(9), Absential::Present(9));
    }

    #[test]
    fn as_ref_preserves_the_case() {
        let present = Absential::Present("hi".to_string());
        let absent: Absential<String> = Absential::Absent;

        assert_eq!(present.as_ref(), Absential::Present(&"hi".to_string()));
        assert_eq!(absent.as_ref(), Absential::Absent);
    }

    #[test]
    fn merge_into_overwrites_only_when_present() {
        let mut tags = vec!["a".to_string()];

        assert!(!Absential::Absent.merge_into(&mut tags));
        assert_eq!(tags, vec!["a".to_string()]);

        assert!(Absential::Present(vec!["b".to_string()]).merge_into(&mut tags));
        assert_eq!(tags, vec!["b".to_string()]);
    }

    #[test]
    fn display_renders_value_or_absent() {
        assert_eq!(Absential::Present(42).to_string(), "42");
        assert_eq!(Absential::<i32>::Absent.to_string(), "absent");
    }

    #[test]
    fn present_serializes_transparently() {
        let json = serde_json::to_string(&Absential::Present(42)).unwrap();
        assert_eq!(json, "42");

        let slot: Absential<i32> = serde_json::from_str("42").unwrap();
        assert_eq!(slot, Absential::Present(42));
    }

    #[test]
    fn absent_refuses_to_serialize() {
        let err = serde_json::to_string(&Absential::<i32>::Absent).unwrap_err();
        assert!(
            err.to_string()
                .contains("operation 'serialize' is not valid on this object")
        );
    }
}
