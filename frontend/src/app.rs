//! Root component. Owns the session for the lifetime of the browser visit
//! and injects it into the page components via props: login produces it,
//! logout destroys it, nothing else may touch it.

use yew::{html, Component, Context, Html};

use common::model::session::Session;

use crate::components::admin::AdminDashboard;
use crate::components::auth::LoginComponent;
use crate::components::gallery::GalleryComponent;

pub enum Msg {
    LoggedIn(Session),
    LoggedOut,
}

pub struct App {
    session: Option<Session>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { session: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LoggedIn(session) => {
                self.session = Some(session);
                true
            }
            Msg::LoggedOut => {
                self.session = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_logout = ctx.link().callback(|_: ()| Msg::LoggedOut);

        match &self.session {
            None => html! {
                <LoginComponent on_login={ctx.link().callback(Msg::LoggedIn)} />
            },
            Some(session) if session.is_admin => html! {
                <AdminDashboard session={session.clone()} {on_logout} />
            },
            Some(session) => html! {
                <GalleryComponent session={session.clone()} {on_logout} />
            },
        }
    }
}
