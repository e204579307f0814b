/// Presentational components for the popup

use yew::prelude::*;
use web_sys::HtmlInputElement;
use patternfly_yew::prelude::*;
use crate::storage::Category;
use crate::view::{CategoryOption, Region, TextSlot};

#[derive(Properties, PartialEq)]
pub struct CategoryListProps {
    pub options: Vec<CategoryOption>,
    /// Fired with the category and its new checked state
    pub on_toggle: Callback<(Category, bool)>,
}

#[function_component(CategoryList)]
pub fn category_list(props: &CategoryListProps) -> Html {
    html! {
        <fieldset class="category-list">
            <legend class="category-legend">{"Categories"}</legend>
            {for props.options.iter().map(|option| {
                let value = option.value.clone();
                let on_toggle = props.on_toggle.clone();
                let onchange = Callback::from(move |e: Event| {
                    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                        on_toggle.emit((value.clone(), input.checked()));
                    }
                });

                html! {
                    <label key={option.value.clone()} class="category-item">
                        <input
                            type="checkbox"
                            class="category-checkbox"
                            value={option.value.clone()}
                            checked={option.checked}
                            {onchange}
                        />
                        <span class="category-name">{&option.value}</span>
                    </label>
                }
            })}
        </fieldset>
    }
}

#[derive(Properties, PartialEq)]
pub struct QuestionCardProps {
    pub question: String,
    pub answer: String,
    pub answer_visible: bool,
    pub loading: bool,
}

#[function_component(QuestionCard)]
pub fn question_card(props: &QuestionCardProps) -> Html {
    html! {
        <div class="question-card">
            <div id={Region::LoadingSpinner.element_id()} class="loading-text-center" hidden={!props.loading}>
                <Spinner />
                <p class="loading-text">{"Loading questions..."}</p>
            </div>
            <p id={TextSlot::Question.element_id()} class="question-text">{&props.question}</p>
            <p id={TextSlot::Answer.element_id()} class="answer-text" hidden={!props.answer_visible}>
                {&props.answer}
            </p>
        </div>
    }
}
