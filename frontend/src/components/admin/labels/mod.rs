//! Label vocabulary manager: list, add, and bulk-delete labels. Every
//! successful mutation is followed by a full refetch of the vocabulary.

use gloo_console::error;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::label::Label;

use crate::api;
use crate::error::UiError;

mod state;

pub use state::LabelManagerComponent;

pub enum Msg {
    Refresh,
    Loaded(Vec<Label>),
    LoadFailed(UiError),
    SetNewLabel(String),
    Add,
    Toggle(String),
    DeleteSelected,
    MutationDone(Result<(), UiError>),
    DismissError,
}

impl Component for LabelManagerComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        LabelManagerComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Refresh => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::list_labels().await {
                        Ok(labels) => link.send_message(Msg::Loaded(labels)),
                        Err(err) => link.send_message(Msg::LoadFailed(err)),
                    }
                });
                false
            }
            Msg::Loaded(labels) => {
                self.replace_labels(labels);
                true
            }
            Msg::LoadFailed(err) => {
                error!(format!("label fetch failed: {err}"));
                self.error = Some("Error fetching labels. Please try again.".to_string());
                true
            }
            Msg::SetNewLabel(value) => {
                self.new_label = value;
                false
            }
            Msg::Add => {
                if self.busy {
                    return false;
                }
                match self.validate_add() {
                    Ok(text) => {
                        self.busy = true;
                        self.error = None;
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            link.send_message(Msg::MutationDone(api::create_label(text).await));
                        });
                        self.new_label.clear();
                        true
                    }
                    Err(err) => {
                        self.error = Some(err.to_string());
                        true
                    }
                }
            }
            Msg::Toggle(id) => {
                self.toggle(&id);
                true
            }
            Msg::DeleteSelected => {
                if self.busy {
                    return false;
                }
                match self.validate_delete() {
                    Ok(ids) => {
                        self.busy = true;
                        self.error = None;
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            link.send_message(Msg::MutationDone(api::delete_labels(ids).await));
                        });
                        true
                    }
                    Err(err) => {
                        self.error = Some(err.to_string());
                        true
                    }
                }
            }
            Msg::MutationDone(result) => {
                self.busy = false;
                match result {
                    Ok(()) => {
                        ctx.link().send_message(Msg::Refresh);
                    }
                    Err(err) => {
                        error!(format!("label mutation failed: {err}"));
                        self.error = Some(err.to_string());
                    }
                }
                true
            }
            Msg::DismissError => {
                self.error = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let oninput = link.callback(|e: InputEvent| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            Msg::SetNewLabel(input.value())
        });

        html! {
            <div class="label-manager">
                <button class="refresh-btn" onclick={link.callback(|_| Msg::Refresh)}>
                    {"Refresh Labels"}
                </button>

                {
                    match &self.error {
                        Some(message) => html! {
                            <div class="error-banner">
                                <span>{ message }</span>
                                <button onclick={link.callback(|_| Msg::DismissError)}>{"Dismiss"}</button>
                            </div>
                        },
                        None => html! {},
                    }
                }

                <div class="add-row">
                    <input
                        type="text"
                        placeholder="Add new label"
                        value={self.new_label.clone()}
                        {oninput}
                    />
                    <button onclick={link.callback(|_| Msg::Add)} disabled={self.busy}>
                        {"Add Label"}
                    </button>
                    {
                        if self.selected_ids().is_empty() {
                            html! {}
                        } else {
                            html! {
                                <button onclick={link.callback(|_| Msg::DeleteSelected)} disabled={self.busy}>
                                    {"Delete Selected Labels"}
                                </button>
                            }
                        }
                    }
                </div>

                <ul class="label-list">
                    { for self.labels.iter().map(|label| {
                        let toggle = {
                            let id = label.id.clone();
                            link.callback(move |_| Msg::Toggle(id.clone()))
                        };
                        html! {
                            <li
                                class={classes!(label.selected.then_some("selected"))}
                                onclick={toggle}
                            >
                                { &label.text }
                            </li>
                        }
                    }) }
                </ul>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Refresh);
        }
    }
}
