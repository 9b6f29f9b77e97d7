//! Login / sign-up page. Exchanges credentials for a `Session` via the auth
//! collaborator and hands it to the root component through `on_login`.
//! Missing fields are rejected locally; a rejected exchange is surfaced as a
//! dismissible banner and never touches an established session.

use gloo_console::error;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::session::Session;

use crate::api;
use crate::error::UiError;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginProps {
    pub on_login: Callback<Session>,
}

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    SetAdminId(String),
    ToggleSignup,
    ToggleAdmin(bool),
    Submit,
    Finished(Result<Session, UiError>),
    DismissError,
}

pub struct LoginComponent {
    email: String,
    password: String,
    admin_id: String,
    signup: bool,
    admin_check: bool,
    loading: bool,
    error: Option<String>,
}

impl Component for LoginComponent {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            admin_id: String::new(),
            signup: false,
            admin_check: false,
            loading: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(value) => {
                self.email = value;
                false
            }
            Msg::SetPassword(value) => {
                self.password = value;
                false
            }
            Msg::SetAdminId(value) => {
                self.admin_id = value;
                false
            }
            Msg::ToggleSignup => {
                // Switching modes starts a fresh form.
                self.signup = !self.signup;
                self.email.clear();
                self.password.clear();
                self.admin_id.clear();
                self.admin_check = false;
                self.error = None;
                true
            }
            Msg::ToggleAdmin(checked) => {
                self.admin_check = checked;
                true
            }
            Msg::Submit => {
                if self.loading {
                    return false;
                }
                if self.email.is_empty() || self.password.is_empty() {
                    self.error =
                        Some(UiError::Validation("Please fill all the fields".to_string())
                            .to_string());
                    return true;
                }

                self.loading = true;
                self.error = None;

                let email = self.email.clone();
                let password = self.password.clone();
                let admin_id = self.admin_id.clone();
                let signup = self.signup;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = if signup {
                        api::register(email, password, admin_id).await
                    } else {
                        api::login(email, password).await
                    };
                    link.send_message(Msg::Finished(result));
                });
                true
            }
            Msg::Finished(Ok(session)) => {
                self.loading = false;
                ctx.props().on_login.emit(session);
                false
            }
            Msg::Finished(Err(err)) => {
                self.loading = false;
                error!(format!("auth exchange failed: {err}"));
                self.error = Some(err.to_string());
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
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="login-root">
                <h1>{ if self.signup { "Sign up" } else { "Sign in" } }</h1>

                <form {onsubmit}>
                    { text_input("email", "Email Address", &self.email, link.callback(Msg::SetEmail)) }
                    { text_input("password", "Password", &self.password, link.callback(Msg::SetPassword)) }

                    {
                        if self.signup {
                            html! {
                                <label class="admin-check">
                                    <input
                                        type="checkbox"
                                        checked={self.admin_check}
                                        onchange={link.callback(|e: Event| {
                                            let input = e.target_unchecked_into::<HtmlInputElement>();
                                            Msg::ToggleAdmin(input.checked())
                                        })}
                                    />
                                    {"Admin"}
                                </label>
                            }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if self.signup && self.admin_check {
                            text_input("text", "Admin ID", &self.admin_id, link.callback(Msg::SetAdminId))
                        } else {
                            html! {}
                        }
                    }

                    <button type="submit" disabled={self.loading}>
                        { match (self.loading, self.signup) {
                            (true, _) => "Loading...",
                            (false, true) => "Sign Up",
                            (false, false) => "Login",
                        } }
                    </button>
                </form>

                <p>
                    { if self.signup { "Already have an account? " } else { "Don't have an account? " } }
                    <button class="link-btn" onclick={link.callback(|_| Msg::ToggleSignup)}>
                        { if self.signup { "Sign in" } else { "Sign Up" } }
                    </button>
                </p>

                {
                    match &self.error {
                        Some(message) => html! {
                            <div class="snackbar">
                                <span>{ message }</span>
                                <button onclick={link.callback(|_| Msg::DismissError)}>{"Close"}</button>
                            </div>
                        },
                        None => html! {},
                    }
                }
            </div>
        }
    }
}

fn text_input(
    kind: &'static str,
    placeholder: &'static str,
    value: &str,
    on_change: Callback<String>,
) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        if let Some(input) = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        {
            on_change.emit(input.value());
        }
    });

    html! {
        <input type={kind} {placeholder} value={value.to_string()} {oninput} />
    }
}
