use crate::{Absential, Marker};
use std::{
    collections::HashMap,
    sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// Name the canonical sentinel is bound under when none is supplied.
pub const DEFAULT_SENTINEL_NAME: &str = "Absent";

/// Name the canonical-absence predicate is bound under when none is
/// supplied.
pub const DEFAULT_PREDICATE_NAME: &str = "isabsent";

/// Signature of an installed predicate.
pub type MarkerPredicate = fn(&Marker) -> bool;

///
/// Binding
///
/// What a registry name resolves to.
///

#[derive(Clone, Copy)]
enum Binding {
    Sentinel(&'static Marker),
    Predicate(MarkerPredicate),
}

///
/// BINDINGS
/// the process-global name table
///

static BINDINGS: LazyLock<RwLock<HashMap<String, Binding>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

fn bindings_write() -> RwLockWriteGuard<'static, HashMap<String, Binding>> {
    BINDINGS
        .write()
        .expect("binding RwLock poisoned while acquiring write lock")
}

fn bindings_read() -> RwLockReadGuard<'static, HashMap<String, Binding>> {
    BINDINGS
        .read()
        .expect("binding RwLock poisoned while acquiring read lock")
}

fn bind(
    bindings: &mut HashMap<String, Binding>,
    name: Absential<Option<&str>>,
    default_name: &str,
    binding: Binding,
) {
    match name {
        Absential::Absent => {
            bindings.insert(default_name.to_string(), binding);
        }
        Absential::Present(Some(name)) => {
            bindings.insert(name.to_string(), binding);
        }
        Absential::Present(None) => {}
    }
}

/// Bind the canonical sentinel and the canonical-absence predicate into the
/// registry. Each name parameter uses the library's own three-way
/// distinction: absent means "bind under the default name", an explicit
/// null means "skip this binding", and a supplied string binds under that
/// string. Rebinding a name overwrites it.
pub fn install(sentinel_name: Absential<Option<&str>>, predicate_name: Absential<Option<&str>>) {
    let mut bindings = bindings_write();

    bind(
        &mut bindings,
        sentinel_name,
        DEFAULT_SENTINEL_NAME,
        Binding::Sentinel(Marker::canonical()),
    );
    bind(
        &mut bindings,
        predicate_name,
        DEFAULT_PREDICATE_NAME,
        Binding::Predicate(Marker::is_canonical),
    );
}

/// Resolve a sentinel binding. The returned reference is the canonical
/// instance itself, never a copy.
#[must_use]
pub fn sentinel(name: &str) -> Option<&'static Marker> {
    match bindings_read().get(name) {
        Some(Binding::Sentinel(marker)) => Some(*marker),
        _ => None,
    }
}

/// Resolve a predicate binding.
#[must_use]
pub fn predicate(name: &str) -> Option<MarkerPredicate> {
    match bindings_read().get(name) {
        Some(Binding::Predicate(predicate)) => Some(*predicate),
        _ => None,
    }
}

///
/// TESTS
///
/// Each test uses names disjoint from every other test; the registry is
/// process-global and the harness runs tests concurrently.
///
