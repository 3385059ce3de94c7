//! Symbol table access and scopes.
//!
//! The unprefixed operations (`add_symbol`, `lookup_symbol`,
//! `remove_symbol`) work on the active scope; the `scope_*` variants name the
//! scope explicitly.

use tracing::debug;

use crate::symbol::SymbolTable;
use crate::Scanner;

impl<'a, V> Scanner<'a, V> {
    /// Makes `scope` the active scope and returns the previous one.
    pub fn set_scope(&mut self, scope: u32) -> u32 {
        let previous = std::mem::replace(&mut self.scope_id, scope);
        debug!(from = previous, to = scope, "changed symbol scope");
        previous
    }

    /// The active scope.
    pub fn scope(&self) -> u32 {
        self.scope_id
    }

    /// Registers `name` in the active scope, replacing any previous value.
    pub fn add_symbol(&mut self, name: &str, value: V) -> Option<V> {
        self.scope_add_symbol(self.scope_id, name, value)
    }

    /// Looks `name` up in the active scope.
    pub fn lookup_symbol(&self, name: &str) -> Option<&V> {
        self.scope_lookup_symbol(self.scope_id, name)
    }

    /// Removes `name` from the active scope.
    pub fn remove_symbol(&mut self, name: &str) -> Option<V> {
        self.scope_remove_symbol(self.scope_id, name)
    }

    /// Registers `name` in `scope`.
    pub fn scope_add_symbol(&mut self, scope: u32, name: &str, value: V) -> Option<V> {
        self.symbols.insert(scope, name, value)
    }

    /// Looks `name` up in `scope` only, without falling back to scope 0.
    pub fn scope_lookup_symbol(&self, scope: u32, name: &str) -> Option<&V> {
        self.symbols.get(scope, name)
    }

    /// Removes `name` from `scope`.
    pub fn scope_remove_symbol(&mut self, scope: u32, name: &str) -> Option<V> {
        self.symbols.remove(scope, name)
    }

    /// Calls `f` for every symbol of `scope` in insertion order.
    pub fn scope_foreach_symbol<F>(&self, scope: u32, mut f: F)
    where
        F: FnMut(&str, &V),
    {
        for (name, value) in self.symbols.iter(scope) {
            f(name, value);
        }
    }

    /// The whole symbol table.
    pub fn symbols(&self) -> &SymbolTable<V> {
        &self.symbols
    }
}
