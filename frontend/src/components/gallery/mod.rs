//! End-user dashboard: the paged image gallery with label association.
//!
//! Root module wiring the Yew `Component` implementation with submodules for
//! state, update logic, view rendering, and props. The first render kicks off
//! the initial fetch; everything after that is message-driven.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::GalleryProps;
pub use state::GalleryComponent;

impl Component for GalleryComponent {
    type Message = Msg;
    type Properties = GalleryProps;

    fn create(_ctx: &Context<Self>) -> Self {
        GalleryComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Refresh);
        }
    }
}
