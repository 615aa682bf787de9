use tableside::role_router::UnknownRolePolicy;

use crate::helper::{assert_is_redirect_to, spawn_app, spawn_app_with};

const SELECT_ROLE: &str = "Please select a role.";

#[tokio::test]
async fn login_page_offers_both_roles() {
    let app = spawn_app().await;

    let response = app.get_login_page().await;
    assert_eq!(response.status().as_u16(), 200);

    let html = response.text().await.unwrap();
    assert!(html.contains(r#"name="role" value="customer""#));
    assert!(html.contains(r#"name="role" value="merchant""#));
    assert!(!html.contains(SELECT_ROLE));
}

#[tokio::test]
async fn customer_is_redirected_to_the_menu() {
    let app = spawn_app().await;

    let response = app.post_login(&[("role", "customer")]).await;

    assert_is_redirect_to(&response, "menu_customer.html");
    let html = response.text().await.unwrap();
    assert!(!html.contains(SELECT_ROLE));
}

#[tokio::test]
async fn merchant_is_redirected_to_the_dashboard() {
    let app = spawn_app().await;

    let response = app.post_login(&[("role", "merchant")]).await;

    assert_is_redirect_to(&response, "merchant_dashboard.html");
}

#[tokio::test]
async fn missing_role_shows_the_alert_once_and_stays() {
    let app = spawn_app().await;

    let response = app.post_login(&Vec::<(&str, &str)>::new()).await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers().get("Location").is_none());
    let html = response.text().await.unwrap();
    assert_eq!(html.matches(SELECT_ROLE).count(), 1);
}

#[tokio::test]
async fn empty_role_counts_as_missing() {
    let app = spawn_app().await;

    let response = app.post_login(&[("role", "")]).await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().contains(SELECT_ROLE));
}

#[tokio::test]
async fn repeated_role_field_is_handled_as_no_selection() {
    let app = spawn_app().await;

    let response = app
        .post_login(&[("role", "customer"), ("role", "merchant")])
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers().get("Location").is_none());
    let html = response.text().await.unwrap();
    assert_eq!(html.matches(SELECT_ROLE).count(), 1);
}

#[tokio::test]
async fn submit_without_form_content_type_shows_the_alert() {
    let app = spawn_app().await;

    let response = app.post_login_without_form().await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers().get("Location").is_none());
    assert!(response.text().await.unwrap().contains(SELECT_ROLE));
}

#[tokio::test]
async fn submitting_the_same_role_twice_lands_on_the_same_page() {
    let app = spawn_app().await;

    let first = app.post_login(&[("role", "merchant")]).await;
    let second = app.post_login(&[("role", "merchant")]).await;

    assert_eq!(first.headers()["Location"], second.headers()["Location"]);
}

#[tokio::test]
async fn unrecognized_role_does_nothing_by_default() {
    let app = spawn_app().await;

    let response = app.post_login(&[("role", "admin")]).await;

    assert_eq!(response.status().as_u16(), 204);
    assert!(response.headers().get("Location").is_none());
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn unrecognized_role_alerts_when_configured() {
    let app = spawn_app_with(|settings| {
        settings.routing.unknown_role_policy = UnknownRolePolicy::Alert;
    })
    .await;

    let response = app.post_login(&[("role", "admin")]).await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers().get("Location").is_none());
    assert!(response.text().await.unwrap().contains(SELECT_ROLE));
}

#[tokio::test]
async fn rejected_role_is_escaped_in_the_page() {
    let app = spawn_app_with(|settings| {
        settings.routing.unknown_role_policy = UnknownRolePolicy::Reject;
    })
    .await;

    let response = app
        .post_login(&[("role", "<script>steal()</script>")])
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains("Unrecognized role: &"));
    assert!(!html.contains("<script>steal()"));
}

#[tokio::test]
async fn destination_pages_are_served() {
    let app = spawn_app().await;

    for page in ["menu_customer.html", "merchant_dashboard.html"] {
        let response = app.get_page(page).await;
        assert_eq!(
            response.status().as_u16(),
            200,
            "{page} was not served"
        );
    }
}
