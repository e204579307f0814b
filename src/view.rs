/// View seam between the quiz controller and the rendered popup
use crate::storage::Category;
use std::cell::RefCell;
use std::rc::Rc;

/// Popup regions that can be shown or hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    ShowAnswerButton,
    NextQuestionButton,
    AnswerText,
    LoadingSpinner,
}

impl Region {
    /// DOM id of the element rendering this region
    pub fn element_id(self) -> &'static str {
        match self {
            Region::ShowAnswerButton => "show-answer-btn",
            Region::NextQuestionButton => "next-question-btn",
            Region::AnswerText => "answer-text",
            Region::LoadingSpinner => "loading-spinner",
        }
    }
}

/// Popup regions holding text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSlot {
    Question,
    Answer,
}

impl TextSlot {
    pub fn element_id(self) -> &'static str {
        match self {
            TextSlot::Question => "question-text",
            TextSlot::Answer => "answer-text",
        }
    }
}

/// What the controller needs from the popup
///
/// Methods take `&self`: like the DOM, a view is a shared handle that is
/// mutated in place.
pub trait QuizView {
    /// Every selectable category, in display order
    fn categories(&self) -> Vec<Category>;

    fn is_checked(&self, category: &str) -> bool;

    fn set_checked(&self, category: &str, checked: bool);

    fn show(&self, region: Region);

    fn hide(&self, region: Region);

    fn is_visible(&self, region: Region) -> bool;

    fn set_text(&self, slot: TextSlot, text: &str);

    /// Currently checked categories, in display order
    fn selected_categories(&self) -> Vec<Category> {
        self.categories()
            .into_iter()
            .filter(|category| self.is_checked(category))
            .collect()
    }
}

/// One category checkbox
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryOption {
    pub value: Category,
    pub checked: bool,
}

/// Everything the popup renders
#[derive(Debug, Clone, PartialEq)]
pub struct PopupModel {
    pub categories: Vec<CategoryOption>,
    pub question_text: String,
    pub answer_text: String,
    pub answer_visible: bool,
    pub show_answer_visible: bool,
    pub next_question_visible: bool,
    pub loading_visible: bool,
}

impl PopupModel {
    /// Unchecked checkboxes for `categories`, every region hidden
    pub fn new(categories: &[Category]) -> Self {
        PopupModel {
            categories: categories
                .iter()
                .map(|value| CategoryOption {
                    value: value.clone(),
                    checked: false,
                })
                .collect(),
            question_text: String::new(),
            answer_text: String::new(),
            answer_visible: false,
            show_answer_visible: false,
            next_question_visible: false,
            loading_visible: false,
        }
    }

    fn visibility_mut(&mut self, region: Region) -> &mut bool {
        match region {
            Region::ShowAnswerButton => &mut self.show_answer_visible,
            Region::NextQuestionButton => &mut self.next_question_visible,
            Region::AnswerText => &mut self.answer_visible,
            Region::LoadingSpinner => &mut self.loading_visible,
        }
    }

    pub fn is_visible(&self, region: Region) -> bool {
        match region {
            Region::ShowAnswerButton => self.show_answer_visible,
            Region::NextQuestionButton => self.next_question_visible,
            Region::AnswerText => self.answer_visible,
            Region::LoadingSpinner => self.loading_visible,
        }
    }
}

/// Shared handle to a `PopupModel` that asks the renderer to redraw on every change
#[derive(Clone)]
pub struct SharedView {
    model: Rc<RefCell<PopupModel>>,
    redraw: Rc<dyn Fn()>,
}

impl SharedView {
    pub fn new(model: PopupModel) -> Self {
        SharedView {
            model: Rc::new(RefCell::new(model)),
            redraw: Rc::new(|| ()),
        }
    }

    pub fn with_redraw(mut self, redraw: impl Fn() + 'static) -> Self {
        self.redraw = Rc::new(redraw);
        self
    }

    pub fn snapshot(&self) -> PopupModel {
        self.model.borrow().clone()
    }

    fn update(&self, change: impl FnOnce(&mut PopupModel)) {
        change(&mut self.model.borrow_mut());
        (self.redraw)();
    }
}

impl QuizView for SharedView {
    fn categories(&self) -> Vec<Category> {
        self.model
            .borrow()
            .categories
            .iter()
            .map(|option| option.value.clone())
            .collect()
    }

    fn is_checked(&self, category: &str) -> bool {
        self.model
            .borrow()
            .categories
            .iter()
            .any(|option| option.value == category && option.checked)
    }

    fn set_checked(&self, category: &str, checked: bool) {
        self.update(|model| {
            if let Some(option) = model.categories.iter_mut().find(|o| o.value == category) {
                option.checked = checked;
            }
        });
    }

    fn show(&self, region: Region) {
        self.update(|model| *model.visibility_mut(region) = true);
    }

    fn hide(&self, region: Region) {
        self.update(|model| *model.visibility_mut(region) = false);
    }

    fn is_visible(&self, region: Region) -> bool {
        self.model.borrow().is_visible(region)
    }

    fn set_text(&self, slot: TextSlot, text: &str) {
        self.update(|model| match slot {
            TextSlot::Question => model.question_text = text.to_string(),
            TextSlot::Answer => model.answer_text = text.to_string(),
        });
    }
}
