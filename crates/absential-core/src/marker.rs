use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    any::Any,
    fmt,
    hash::{Hash, Hasher},
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

/// Token reserved for the canonical marker. Factory-made markers draw
/// strictly greater tokens, so the canonical identity can never collide.
const CANONICAL_TOKEN: u64 = 0;

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(CANONICAL_TOKEN + 1);

///
/// ABSENT
///
/// The canonical absence marker. This is the single process-wide instance
/// every "was this supplied?" comparison resolves against; clones of it are
/// aliases, not new markers.
///

pub static ABSENT: Marker = Marker {
    token: CANONICAL_TOKEN,
    display: None,
};

///
/// MarkerDisplay
///
/// Formatting capability attached to a marker at construction time and
/// immutable afterward. Both methods default to the built-in rendering, so
/// an implementation may override either independently.
///

pub trait MarkerDisplay: Send + Sync {
    fn fmt_display(&self, marker: &Marker, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        default_display(marker, f)
    }

    fn fmt_debug(&self, marker: &Marker, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        default_debug(marker, f)
    }
}

fn default_display(_: &Marker, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("absent")
}

fn default_debug(marker: &Marker, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if marker.is_canonical() {
        f.write_str("Marker(canonical)")
    } else {
        write!(f, "Marker(#{})", marker.token)
    }
}

///
/// Marker
///
/// A value meaning "not supplied", distinct from null or empty. Identity is
/// a numeric token: equality and hashing compare tokens, never structure,
/// and `Clone` copies the token so a clone is another handle to the same
/// logical instance.
///

#[derive(Clone)]
pub struct Marker {
    token: u64,
    display: Option<Arc<dyn MarkerDisplay>>,
}

impl Marker {
    /// Construct a fresh marker, independent of and never equal to the
    /// canonical instance or any other marker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: NEXT_TOKEN.fetch_add(1, Ordering::Relaxed),
            display: None,
        }
    }

    /// Construct a fresh marker carrying a custom formatting capability.
    #[must_use]
    pub fn with_display(hook: impl MarkerDisplay + 'static) -> Self {
        Self {
            token: NEXT_TOKEN.fetch_add(1, Ordering::Relaxed),
            display: Some(Arc::new(hook)),
        }
    }

    /// The canonical instance, identical to [`ABSENT`].
    #[must_use]
    pub const fn canonical() -> &'static Self {
        &ABSENT
    }

    /// True only for the canonical instance. This is an identity check on
    /// the token, not a type check; see [`is_marker`] for the latter.
    #[must_use]
    pub const fn is_canonical(&self) -> bool {
        self.token == CANONICAL_TOKEN
    }

    /// Numeric identity of this marker.
    #[must_use]
    pub const fn token(&self) -> u64 {
        self.token
    }
}

impl fmt::Debug for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display {
            Some(hook) => hook.fmt_debug(self, f),
            None => default_debug(self, f),
        }
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display {
            Some(hook) => hook.fmt_display(self, f),
            None => default_display(self, f),
        }
    }
}

// every marker is falsy, like the absence it stands for
impl From<&Marker> for bool {
    fn from(_: &Marker) -> Self {
        false
    }
}

impl Hash for Marker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.token.hash(state);
    }
}

impl PartialEq for Marker {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for Marker {}

// Markers never cross a process boundary. A generic deserializer could
// otherwise mint a counterfeit canonical instance and break the identity
// invariant, so both directions refuse with a named operation.
impl Serialize for Marker {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Err(serde::ser::Error::custom(Error::invalid_operation(
            "serialize",
        )))
    }
}

impl<'de> Deserialize<'de> for Marker {
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Err(serde::de::Error::custom(Error::invalid_operation(
            "deserialize",
        )))
    }
}

/// Structural-type check over an erased value: true iff the value is any
/// [`Marker`] instance, canonical or factory-made. Typed positions get this
/// from the compiler; the bridge exists for type-erased registries and
/// diagnostics.
#[must_use]
pub fn is_marker(value: &dyn Any) -> bool {
    value.is::<Marker>()
}

///
/// TESTS
///
