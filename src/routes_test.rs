use super::*;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    format!("http://{addr}")
}

// =============================================================================
// healthz
// =============================================================================

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_served_over_http() {
    let base = serve(base_routes()).await;
    let res = reqwest::get(format!("{base}/healthz")).await.expect("request");
    assert_eq!(res.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let base = serve(base_routes()).await;
    let res = reqwest::get(format!("{base}/nope")).await.expect("request");
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
}

// =============================================================================
// SSR
// =============================================================================

#[tokio::test]
async fn root_renders_landing_page() {
    let options = LeptosOptions::builder().output_name("briefly").build();
    let base = serve(app(options)).await;

    let res = reqwest::get(format!("{base}/")).await.expect("request");
    assert_eq!(res.status(), reqwest::StatusCode::OK);

    let body = res.text().await.expect("body");
    assert!(body.contains("clear briefs"), "landing hero missing");
    assert!(body.contains("Get Started - It&#x27;s Free") || body.contains("Get Started - It's Free"));
    assert!(body.contains("toast-host"), "toast host missing");
}

#[test]
fn dashboard_renders_filter_and_share_controls() {
    use client::net::provider::DataProvider;
    use client::net::types::ServiceId;
    use client::pages::dashboard::DashboardPage;
    use leptos::reactive::owner::Owner;

    let owner = Owner::new();
    let html = owner.with(|| {
        provide_context(DataProvider::default());
        view! {
            <DashboardPage connected=vec![ServiceId::Slack] on_create_brief=Callback::new(|()| ())/>
        }
        .to_html()
    });

    assert!(html.contains("Recent Briefs"));
    assert!(html.contains("Filter"));
    assert!(html.contains("aria-label=\"Share brief\""));
    assert!(html.contains("Search briefs..."));
}
