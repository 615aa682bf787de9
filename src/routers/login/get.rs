use askama::Template;
use askama_web::WebTemplate;

/// Login page with the `role` radio group.
///
/// When `alert` is set the page shows it inline and raises it as a
/// browser alert on load.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginPage<'a> {
    pub alert: Option<&'a str>,
}

pub async fn login_form() -> LoginPage<'static> {
    LoginPage { alert: None }
}
