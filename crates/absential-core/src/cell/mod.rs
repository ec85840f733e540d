
use crate::{absential::Absential, error::Error};
use derive_more::Deref;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt,
    hash::{Hash, Hasher},
};

///
/// Cell
///
/// An immutable optional-value container: one [`Absential`] slot plus the
/// combinator algebra over it. A cell is either occupied or empty, never
/// both; every transformation consumes the receiver and produces a new
/// cell, there is no in-place transition between the two states.
///

#[derive(Clone, Copy, Deref, Eq, PartialEq)]
#[repr(transparent)]
pub struct Cell<T>(Absential<T>);

impl<T> Cell<T> {
    /// An occupied cell holding `value`.
    #[must_use]
    pub const fn of(value: T) -> Self {
        Self(Absential::Present(value))
    }

    /// An empty cell.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Absential::Absent)
    }

    /// A cell over a raw slot, occupied iff the slot is present.
    #[must_use]
    pub const fn new(slot: Absential<T>) -> Self {
        Self(slot)
    }

    /// Bridge from nullable form, reading `None` as "not supplied":
    /// `None` yields an empty cell, `Some` an occupied one.
    #[must_use]
    pub fn from_option(value: Option<T>) -> Self {
        Self(Absential::from_option(value))
    }

    /// Bridge from nullable form, reading `None` as a legitimate concrete
    /// value: the cell is occupied either way and typed to hold the null.
    /// Use this at call sites that must keep "explicitly null" apart from
    /// "not supplied".
    #[must_use]
    pub const fn of_nullable(value: Option<T>) -> Cell<Option<T>> {
        Cell(Absential::Present(value))
    }

    /// True when the cell is empty.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.0.is_absent()
    }

    /// True when the cell holds a value. The logical negation of
    /// [`is_absent`](Self::is_absent).
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.0.is_present()
    }

    /// Take the contained value, or [`Error::EmptyCell`] when empty. Never
    /// silently defaulted; callers wanting a fallback use [`extract_or`]
    /// or [`extract_or_else`].
    ///
    /// [`extract_or`]: Self::extract_or
    /// [`extract_or_else`]: Self::extract_or_else
    pub fn extract(self) -> Result<T, Error> {
        match self.0 {
            Absential::Present(value) => Ok(value),
            Absential::Absent => Err(Error::EmptyCell),
        }
    }

    /// Take the contained value, or `default` when empty.
    #[must_use]
    pub fn extract_or(self, default: T) -> T {
        match self.0 {
            Absential::Present(value) => value,
            Absential::Absent => default,
        }
    }

    /// Take the contained value, or manufacture one. `factory` is invoked
    /// at most once, and only when the cell is empty.
    #[must_use]
    pub fn extract_or_else(self, factory: impl FnOnce() -> T) -> T {
        match self.0 {
            Absential::Present(value) => value,
            Absential::Absent => factory(),
        }
    }

    /// Apply `func` to the contained value, or produce `default` when
    /// empty. `func` is never invoked on an empty cell.
    #[must_use]
    pub fn evaluate_or<U>(self, default: U, func: impl FnOnce(T) -> U) -> U {
        match self.0 {
            Absential::Present(value) => func(value),
            Absential::Absent => default,
        }
    }

    /// [`evaluate_or`](Self::evaluate_or) with the default fixed to `true`,
    /// for "no constraint means pass" checks.
    #[must_use]
    pub fn evaluate_or_true(self, predicate: impl FnOnce(T) -> bool) -> bool {
        self.evaluate_or(true, predicate)
    }

    /// [`evaluate_or`](Self::evaluate_or) with the default fixed to `false`.
    #[must_use]
    pub fn evaluate_or_false(self, predicate: impl FnOnce(T) -> bool) -> bool {
        self.evaluate_or(false, predicate)
    }

    /// Transform the contained value; an empty cell stays empty.
    #[must_use]
    pub fn map<U>(self, func: impl FnOnce(T) -> U) -> Cell<U> {
        match self.0 {
            Absential::Present(value) => Cell::of(func(value)),
            Absential::Absent => Cell::empty(),
        }
    }

    /// Transform the contained value with a function that itself yields a
    /// cell, flattening one level; an empty cell stays empty.
    #[must_use]
    pub fn flat_map<U>(self, func: impl FnOnce(T) -> Cell<U>) -> Cell<U> {
        match self.0 {
            Absential::Present(value) => func(value),
            Absential::Absent => Cell::empty(),
        }
    }

    /// Keep the cell unchanged when it is occupied and `predicate` holds
    /// for the contained value; otherwise yield an empty cell.
    #[must_use]
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        if let Absential::Present(value) = self.0 {
            if predicate(&value) {
                return Self::of(value);
            }
        }

        Self::empty()
    }

    /// This cell when occupied, otherwise `alternative`.
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        match self.0 {
            Absential::Present(_) => self,
            Absential::Absent => alternative,
        }
    }

    /// This cell when occupied, otherwise the factory's cell. `factory` is
    /// invoked only on absence.
    #[must_use]
    pub fn or_else(self, factory: impl FnOnce() -> Self) -> Self {
        match self.0 {
            Absential::Present(_) => self,
            Absential::Absent => factory(),
        }
    }

    /// Bridge to nullable form; the exact inverse of
    /// [`from_option`](Self::from_option).
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.0.into_option()
    }

    /// Borrow-preserving bridge, so a chain need not consume the cell.
    #[must_use]
    pub const fn as_ref(&self) -> Cell<&T> {
        Cell(self.0.as_ref())
    }

    /// The raw slot, borrowed.
    #[must_use]
    pub const fn as_absential(&self) -> &Absential<T> {
        &self.0
    }

    /// The raw slot, owned.
    #[must_use]
    pub fn into_absential(self) -> Absential<T> {
        self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Cell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Absential::Present(value) => f.debug_tuple("Cell").field(value).finish(),
            Absential::Absent => f.write_str("Cell(absent)"),
        }
    }
}

impl<T> Default for Cell<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Absential<T>> for Cell<T> {
    fn from(slot: Absential<T>) -> Self {
        Self(slot)
    }
}

// occupancy coercion, the container counterpart of the marker's falsiness
impl<T> From<&Cell<T>> for bool {
    fn from(cell: &Cell<T>) -> Self {
        cell.is_occupied()
    }
}

// Empty cells all hash one fixed byte string; an occupied cell hashes
// exactly as its contained value does, with no discriminant mixed in.
impl<T: Hash> Hash for Cell<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.0 {
            Absential::Present(value) => value.hash(state),
            Absential::Absent => state.write(b"absent"),
        }
    }
}

impl<T: Serialize> Serialize for Cell<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Cell<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Absential::deserialize(deserializer).map(Self)
    }
}
