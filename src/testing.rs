/// Test doubles for the storage, network and randomness seams
use crate::question::Question;
use crate::random::RandomSource;
use crate::source::{FetchError, QuestionSource};
use crate::storage::{SelectedCategories, SelectionStore};
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::HashMap;

/// Replays a fixed list of draws (each reduced modulo the requested bound)
pub struct SequenceRng {
    values: Vec<usize>,
    next: usize,
    bounds: Vec<usize>,
}

impl SequenceRng {
    pub fn new(values: Vec<usize>) -> Self {
        SequenceRng {
            values,
            next: 0,
            bounds: Vec::new(),
        }
    }

    /// Bounds passed to `below`, in call order
    pub fn bounds(&self) -> Vec<usize> {
        self.bounds.clone()
    }
}

impl RandomSource for SequenceRng {
    fn below(&mut self, bound: usize) -> usize {
        self.bounds.push(bound);
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        if bound == 0 { 0 } else { value % bound }
    }
}

/// Canned per-category responses; unknown categories fail with a 404
#[derive(Default)]
pub struct FakeSource {
    responses: HashMap<String, Result<Vec<Question>, FetchError>>,
    calls: RefCell<Vec<String>>,
    held: RefCell<Option<(String, oneshot::Receiver<()>)>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: &str, response: Result<Vec<Question>, FetchError>) -> Self {
        self.responses.insert(category.to_string(), response);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Keep the next request for `category` pending until the returned sender fires
    pub fn hold(&self, category: &str) -> oneshot::Sender<()> {
        let (release, held) = oneshot::channel();
        *self.held.borrow_mut() = Some((category.to_string(), held));
        release
    }
}

impl QuestionSource for FakeSource {
    async fn fetch_category(&self, category: &str) -> Result<Vec<Question>, FetchError> {
        self.calls.borrow_mut().push(category.to_string());

        let is_held = self.held.borrow().as_ref().is_some_and(|(held, _)| held == category);
        let held = if is_held { self.held.borrow_mut().take() } else { None };
        if let Some((_, released)) = held {
            let _ = released.await;
        }

        self.responses
            .get(category)
            .cloned()
            .unwrap_or(Err(FetchError::Status(404)))
    }
}

/// In-memory selection store that records every save
#[derive(Default)]
pub struct MemoryStore {
    value: RefCell<Option<SelectedCategories>>,
    saves: RefCell<Vec<SelectedCategories>>,
    broken: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holding(categories: &[&str]) -> Self {
        let store = Self::default();
        *store.value.borrow_mut() = Some(categories.iter().map(|c| c.to_string()).collect());
        store
    }

    /// A store whose reads fail, like an unparseable stored value
    pub fn broken() -> Self {
        MemoryStore {
            broken: true,
            ..Self::default()
        }
    }

    pub fn saves(&self) -> Vec<SelectedCategories> {
        self.saves.borrow().clone()
    }

    pub fn stored(&self) -> Option<SelectedCategories> {
        self.value.borrow().clone()
    }
}

impl SelectionStore for MemoryStore {
    fn load(&self) -> Result<Option<SelectedCategories>, String> {
        if self.broken {
            return Err("Failed to parse stored categories".to_string());
        }
        Ok(self.value.borrow().clone())
    }

    fn save(&self, selection: &SelectedCategories) -> Result<(), String> {
        self.saves.borrow_mut().push(selection.clone());
        *self.value.borrow_mut() = Some(selection.clone());
        Ok(())
    }
}
