/// Base URL of the label/image backend. Overridable at compile time with
/// `LABELBOARD_API_BASE`; defaults to the development server.
pub fn api_base() -> &'static str {
    option_env!("LABELBOARD_API_BASE").unwrap_or("http://localhost:5000")
}
