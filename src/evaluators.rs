//! Named evaluation functions.
//!
//! Agents pick their evaluation function by name at construction time, so a
//! game registers the functions it offers once and every agent looks them up.

use crate::error::{Error, Result};
use crate::interface::{DynEvaluator, Evaluation, Evaluator, Game};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// An `Evaluator` backed by a plain function or closure.
pub struct FnEvaluator<G, F> {
    f: F,
    _game: PhantomData<fn() -> G>,
}

impl<G: Game, F: Fn(&G::S) -> Evaluation> Evaluator for FnEvaluator<G, F> {
    type G = G;
    fn evaluate(&self, s: &G::S) -> Evaluation {
        (self.f)(s)
    }
}

/// Wrap a function scoring states of `G` as an `Evaluator`.
pub fn from_fn<G: Game, F: Fn(&G::S) -> Evaluation>(f: F) -> FnEvaluator<G, F> {
    FnEvaluator { f, _game: PhantomData }
}

/// Evaluation functions of one game, by name.
pub struct Registry<G: Game> {
    entries: Vec<(String, DynEvaluator<G>)>,
}

impl<G: Game> Default for Registry<G> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<G: Game> Registry<G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an evaluator under `name`, replacing any previous one.
    pub fn register<E>(&mut self, name: impl Into<String>, eval: E) -> &mut Self
    where
        E: Evaluator<G = G> + 'static,
    {
        let name = name.into();
        let eval: DynEvaluator<G> = Arc::new(eval);
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = eval,
            None => self.entries.push((name, eval)),
        }
        self
    }

    /// Builder pattern: `register` by value.
    pub fn with<E>(mut self, name: impl Into<String>, eval: E) -> Self
    where
        E: Evaluator<G = G> + 'static,
    {
        self.register(name, eval);
        self
    }

    /// Look up an evaluator by name.
    pub fn get(&self, name: &str) -> Result<DynEvaluator<G>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, e)| Arc::clone(e))
            .ok_or_else(|| Error::UnknownEvaluator {
                name: name.to_string(),
                expected: self.names().collect::<Vec<_>>().join(", "),
            })
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl<G: Game> fmt::Debug for Registry<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Spec, Tree};

    #[test]
    fn lookup_by_name() {
        let registry = Registry::<Tree>::new()
            .with("value", from_fn::<Tree, _>(|s| s.value()))
            .with("double", from_fn::<Tree, _>(|s| 2.0 * s.value()));
        let state = Spec::Leaf(3.0).build(2);
        assert_eq!(registry.get("value").unwrap().evaluate(&state), 3.0);
        assert_eq!(registry.get("double").unwrap().evaluate(&state), 6.0);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["value", "double"]);
    }

    #[test]
    fn unknown_name_lists_known_ones() {
        let registry = Registry::<Tree>::new().with("value", from_fn::<Tree, _>(|s| s.value()));
        match registry.get("better") {
            Err(Error::UnknownEvaluator { name, expected }) => {
                assert_eq!(name, "better");
                assert_eq!(expected, "value");
            }
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn register_replaces() {
        let mut registry = Registry::<Tree>::new();
        registry.register("v", from_fn::<Tree, _>(|_| 1.0));
        registry.register("v", from_fn::<Tree, _>(|_| 2.0));
        let state = Spec::Leaf(0.0).build(1);
        assert_eq!(registry.get("v").unwrap().evaluate(&state), 2.0);
        assert_eq!(registry.names().count(), 1);
    }
}
