//! Admin dashboard: a two-pane page switching between the label vocabulary
//! manager and the image set manager. Only reachable with an admin session.

use yew::html::Scope;
use yew::prelude::*;

use common::model::session::Session;

pub mod images;
pub mod labels;

use images::ImageManagerComponent;
use labels::LabelManagerComponent;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Labels,
    Images,
}

#[derive(Properties, PartialEq, Clone)]
pub struct AdminProps {
    pub session: Session,
    pub on_logout: Callback<()>,
}

pub enum Msg {
    ShowPane(Pane),
}

pub struct AdminDashboard {
    pane: Pane,
}

impl Component for AdminDashboard {
    type Message = Msg;
    type Properties = AdminProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { pane: Pane::Labels }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ShowPane(pane) => {
                self.pane = pane;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="admin-root">
                <header class="top-bar">
                    <h1>{"Admin Dashboard"}</h1>
                    <span class="user-email">{ format!("user: {}", ctx.props().session.email) }</span>
                    <button onclick={ctx.props().on_logout.reform(|_: MouseEvent| ())}>
                        {"Logout"}
                    </button>
                </header>

                <div class="layout">
                    <nav class="side-nav">
                        { self.pane_button(link, Pane::Labels, "Manage Labels") }
                        { self.pane_button(link, Pane::Images, "Manage Images") }
                    </nav>
                    <section class="pane">
                        {
                            match self.pane {
                                Pane::Labels => html! { <LabelManagerComponent /> },
                                Pane::Images => html! { <ImageManagerComponent /> },
                            }
                        }
                    </section>
                </div>
            </div>
        }
    }
}

impl AdminDashboard {
    fn pane_button(&self, link: &Scope<Self>, pane: Pane, label: &'static str) -> Html {
        html! {
            <button
                class={classes!("nav-btn", (self.pane == pane).then_some("active"))}
                onclick={link.callback(move |_| Msg::ShowPane(pane))}
            >
                { label }
            </button>
        }
    }
}
