/// Popup UI for the quiz extension

use std::rc::Rc;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::config::QuizConfig;
use crate::controller::QuizController;
use crate::random::BrowserRng;
use crate::source::HttpQuestionSource;
use crate::storage::{Category, LocalStorageStore};
use crate::ui::components::{CategoryList, QuestionCard};
use crate::view::{PopupModel, QuizView, Region, SharedView};

/// Controller wired to the browser: rendered view, HTTP, localStorage, crypto RNG
pub type PopupController =
    QuizController<SharedView, HttpQuestionSource, LocalStorageStore, BrowserRng>;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: QuizConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let redraw = use_force_update();

    let controller = {
        let config = props.config.clone();
        use_state(move || {
            let view = SharedView::new(PopupModel::new(&config.categories))
                .with_redraw(move || redraw.force_update());
            Rc::new(PopupController::new(
                view,
                HttpQuestionSource::new(config.endpoint.clone()),
                LocalStorageStore::new(&config.storage_key),
                BrowserRng::new(),
                &config.default_category,
            ))
        })
    };

    // Restore the saved selection and load the first batch on mount
    {
        let controller = (*controller).clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                controller.initialize().await;
            });
            || ()
        });
    }

    let on_toggle = {
        let controller = (*controller).clone();
        Callback::from(move |(category, checked): (Category, bool)| {
            controller.view().set_checked(&category, checked);
            let controller = controller.clone();
            spawn_local(async move {
                controller.save_selection().await;
            });
        })
    };

    let on_show_answer = {
        let controller = (*controller).clone();
        Callback::from(move |_: MouseEvent| controller.toggle_answer_visibility())
    };

    let on_next_question = {
        let controller = (*controller).clone();
        Callback::from(move |_: MouseEvent| controller.advance_question())
    };

    let model = controller.view().snapshot();
    let pool_len = controller.pool_len();

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Quiz Time"}</h1>

            <CategoryList options={model.categories.clone()} {on_toggle} />

            <QuestionCard
                question={model.question_text.clone()}
                answer={model.answer_text.clone()}
                answer_visible={model.answer_visible}
                loading={model.loading_visible}
            />

            <div class="flex-column-gap">
                <button
                    id={Region::ShowAnswerButton.element_id()}
                    class="pf-v5-c-button pf-m-primary pf-m-block"
                    hidden={!model.show_answer_visible}
                    onclick={on_show_answer}
                >
                    {"Show Answer"}
                </button>
                <button
                    id={Region::NextQuestionButton.element_id()}
                    class="pf-v5-c-button pf-m-secondary pf-m-block"
                    hidden={!model.next_question_visible}
                    onclick={on_next_question}
                >
                    {"Next Question"}
                </button>
            </div>

            <p class="footer-popup">
                {format!("{} questions loaded", pool_len)}
            </p>
        </div>
    }
}
