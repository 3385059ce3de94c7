//! Scoped symbol table.
//!
//! Symbols map identifier names to caller-supplied values. Each scope is an
//! independent namespace identified by a `u32`; scope 0 is the default.
//! Within a scope, symbols keep their insertion order so iteration is
//! deterministic.

use std::borrow::Cow;
use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHasher};

type ScopeMap<V> = IndexMap<String, V, BuildHasherDefault<FxHasher>>;

/// Symbols of every scope.
#[derive(Debug, Clone)]
pub struct SymbolTable<V> {
    scopes: FxHashMap<u32, ScopeMap<V>>,
    case_sensitive: bool,
}

impl<V> SymbolTable<V> {
    /// Creates an empty table. Unless `case_sensitive`, names are compared
    /// after lowercasing.
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            scopes: FxHashMap::default(),
            case_sensitive,
        }
    }

    /// Whether names are compared case-sensitively.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn key<'n>(&self, name: &'n str) -> Cow<'n, str> {
        if self.case_sensitive || !name.chars().any(char::is_uppercase) {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(name.to_lowercase())
        }
    }

    /// Adds or replaces `name` in `scope`, returning the previous value.
    ///
    /// A replaced symbol keeps its original position in iteration order.
    pub fn insert(&mut self, scope: u32, name: &str, value: V) -> Option<V> {
        let key = self.key(name).into_owned();
        self.scopes.entry(scope).or_default().insert(key, value)
    }

    /// Looks `name` up in `scope` only.
    pub fn get(&self, scope: u32, name: &str) -> Option<&V> {
        self.scopes.get(&scope)?.get(self.key(name).as_ref())
    }

    /// Looks `name` up in `scope`, then in scope 0 if `fallback` is set.
    pub fn resolve(&self, scope: u32, name: &str, fallback: bool) -> Option<&V> {
        match self.get(scope, name) {
            Some(value) => Some(value),
            None if fallback && scope != 0 => self.get(0, name),
            None => None,
        }
    }

    /// Removes `name` from `scope`, returning its value. Later symbols keep
    /// their relative order.
    pub fn remove(&mut self, scope: u32, name: &str) -> Option<V> {
        let key = self.key(name);
        let symbols = self.scopes.get_mut(&scope)?;
        let removed = symbols.shift_remove(key.as_ref());
        if symbols.is_empty() {
            self.scopes.remove(&scope);
        }
        removed
    }

    /// Iterates over the symbols of `scope` in insertion order. Names are
    /// reported in their stored (case-folded) form.
    pub fn iter(&self, scope: u32) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.scopes
            .get(&scope)
            .into_iter()
            .flat_map(|symbols| symbols.iter().map(|(name, value)| (name.as_str(), value)))
    }

    /// Number of symbols in `scope`.
    pub fn len(&self, scope: u32) -> usize {
        self.scopes.get(&scope).map_or(0, IndexMap::len)
    }

    /// Returns `true` if no scope holds any symbol.
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl<V> Default for SymbolTable<V> {
    fn default() -> Self {
        Self::new(false)
    }
}
