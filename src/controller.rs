/// Quiz popup controller: category selection, fetching, and question display
use crate::question::QuestionPool;
use crate::random::RandomSource;
use crate::source::{QuestionSource, fetch_all};
use crate::storage::{Category, SelectedCategories, SelectionStore};
use crate::view::{QuizView, Region, TextSlot};
use std::cell::{Cell, RefCell};

pub const SELECT_CATEGORY_MESSAGE: &str = "Please select at least one category.";

pub const NO_QUESTIONS_MESSAGE: &str = "No questions available. If you are signed in to more \
than one Google account, sign out of the others or use a window with a single account, \
then reopen the popup.";

/// What the popup is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Idle,
    Loading,
    QuestionShown,
    AnswerShown,
    NoQuestions,
}

/// Owns the question pool and drives the view
///
/// Every operation takes `&self` so one controller can be shared by the
/// popup's event handlers. Interior borrows are never held across an
/// `.await`, which lets overlapping fetch cycles run to completion
/// side by side; the one that finishes last decides what is shown.
pub struct QuizController<V, S, K, R> {
    view: V,
    source: S,
    store: K,
    rng: RefCell<R>,
    default_category: Category,
    pool: RefCell<QuestionPool>,
    selection: RefCell<SelectedCategories>,
    state: Cell<DisplayState>,
}

impl<V, S, K, R> QuizController<V, S, K, R>
where
    V: QuizView,
    S: QuestionSource,
    K: SelectionStore,
    R: RandomSource,
{
    pub fn new(view: V, source: S, store: K, rng: R, default_category: &str) -> Self {
        QuizController {
            view,
            source,
            store,
            rng: RefCell::new(rng),
            default_category: default_category.to_string(),
            pool: RefCell::new(QuestionPool::new()),
            selection: RefCell::new(SelectedCategories::new()),
            state: Cell::new(DisplayState::Idle),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn state(&self) -> DisplayState {
        self.state.get()
    }

    pub fn pool_len(&self) -> usize {
        self.pool.borrow().len()
    }

    #[cfg(test)]
    fn questions(&self) -> Vec<crate::question::Question> {
        self.pool.borrow().questions().to_vec()
    }

    /// Selection used by the last completed fetch
    pub fn selection(&self) -> SelectedCategories {
        self.selection.borrow().clone()
    }

    /// Restore the saved selection onto the checkboxes and run the first fetch
    pub async fn initialize(&self) {
        let selection = self.restore_selection();

        for category in self.view.categories() {
            self.view.set_checked(&category, selection.contains(&category));
        }
        self.view.hide(Region::ShowAnswerButton);
        self.view.hide(Region::NextQuestionButton);

        self.fetch_questions(&selection).await;
    }

    /// Persist the checked categories and re-fetch
    pub async fn save_selection(&self) {
        let selection: SelectedCategories = self.view.selected_categories().into_iter().collect();

        if let Err(e) = self.store.save(&selection) {
            log::warn!("Could not save selected categories: {}", e);
        }

        self.fetch_questions(&selection).await;
    }

    /// Rebuild the pool from every category in `categories`, then show a question
    pub async fn fetch_questions(&self, categories: &SelectedCategories) {
        if categories.is_empty() {
            self.pool.borrow_mut().clear();
            *self.selection.borrow_mut() = categories.clone();
            self.view.set_text(TextSlot::Question, SELECT_CATEGORY_MESSAGE);
            self.hide_question_controls();
            self.state.set(DisplayState::NoQuestions);
            return;
        }

        self.pool.borrow_mut().clear();
        self.view.show(Region::LoadingSpinner);
        self.hide_question_controls();
        self.state.set(DisplayState::Loading);

        log::info!("Fetching questions for {} categories", categories.len());
        let questions = fetch_all(&self.source, categories).await;

        let mut pool = QuestionPool::from(questions);
        pool.shuffle(&mut *self.rng.borrow_mut());
        log::info!("Loaded {} questions", pool.len());

        *self.pool.borrow_mut() = pool;
        *self.selection.borrow_mut() = categories.clone();

        self.view.hide(Region::LoadingSpinner);
        self.display_next_question();
    }

    /// Show a random question from the pool, or the guidance message when it is empty
    pub fn display_next_question(&self) {
        let picked = {
            let pool = self.pool.borrow();
            let mut rng = self.rng.borrow_mut();
            pool.pick(&mut *rng).cloned()
        };

        match picked {
            Some(question) => {
                self.view.set_text(TextSlot::Question, &question.question);
                self.view.set_text(TextSlot::Answer, &question.answer);
                self.view.hide(Region::AnswerText);
                self.view.show(Region::ShowAnswerButton);
                self.view.show(Region::NextQuestionButton);
                self.state.set(DisplayState::QuestionShown);
            }
            None => {
                self.view.set_text(TextSlot::Question, NO_QUESTIONS_MESSAGE);
                self.view.set_text(TextSlot::Answer, "");
                self.hide_question_controls();
                self.state.set(DisplayState::NoQuestions);
            }
        }
    }

    pub fn toggle_answer_visibility(&self) {
        if self.view.is_visible(Region::AnswerText) {
            self.view.hide(Region::AnswerText);
            if self.state.get() == DisplayState::AnswerShown {
                self.state.set(DisplayState::QuestionShown);
            }
        } else {
            self.view.show(Region::AnswerText);
            if self.state.get() == DisplayState::QuestionShown {
                self.state.set(DisplayState::AnswerShown);
            }
        }
    }

    /// Move on to another question from the current pool without re-fetching
    pub fn advance_question(&self) {
        self.view.hide(Region::AnswerText);
        self.display_next_question();
    }

    fn restore_selection(&self) -> SelectedCategories {
        let stored = self.store.load().unwrap_or_else(|e| {
            log::warn!("Could not read saved categories: {}", e);
            None
        });

        match stored {
            Some(selection) if !selection.is_empty() => selection,
            _ => {
                let selection: SelectedCategories =
                    std::iter::once(self.default_category.clone()).collect();
                if let Err(e) = self.store.save(&selection) {
                    log::warn!("Could not save default categories: {}", e);
                }
                selection
            }
        }
    }

    fn hide_question_controls(&self) {
        self.view.hide(Region::AnswerText);
        self.view.hide(Region::ShowAnswerButton);
        self.view.hide(Region::NextQuestionButton);
    }
}
