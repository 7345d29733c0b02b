//! HTTP tests for the site server using axum-test
//!
//! Test categories:
//! - Route table coverage (every registered path, unknown paths)
//! - Page content end to end (terms, not-found)
//! - Health and static asset serving

#[cfg(test)]
mod http_tests {
    use std::fs;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use site_core::routes::{self, ROUTES};
    use site_core::SiteContent;

    use crate::app::build_router;
    use crate::state::AppState;

    /// Server plus the fixture directory it serves files from
    struct TestSite {
        server: TestServer,
        fixtures: TempDir,
    }

    fn fixture_dirs() -> TempDir {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("assets")).unwrap();
        fs::create_dir_all(root.path().join("pkg")).unwrap();
        fs::write(root.path().join("assets/site.css"), "body { margin: 0; }").unwrap();
        fs::write(
            root.path().join("pkg/site_web.js"),
            "export default function init() {}",
        )
        .unwrap();
        root
    }

    /// Create a test server with the full router
    fn create_test_server() -> TestSite {
        create_test_server_with(&SiteContent::default())
    }

    fn create_test_server_with(content: &SiteContent) -> TestSite {
        let fixtures = fixture_dirs();
        let app = build_router(
            AppState::new(content),
            &fixtures.path().join("assets"),
            &fixtures.path().join("pkg"),
        );
        TestSite {
            server: TestServer::new(app).unwrap(),
            fixtures: fixtures,
        }
    }

    #[tokio::test]
    async fn test_health_returns_200() {
        let site = create_test_server();
        let server = &site.server;
        let response = server.get("/health").await;
        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "site-server");
    }

    #[tokio::test]
    async fn test_every_route_returns_200() {
        let site = create_test_server();
        let server = &site.server;
        for route in ROUTES {
            let response = server.get(route.path).await;
            response.assert_status_ok();
            assert!(
                response.text().contains(route.page.title()),
                "{} should render {:?}",
                route.path,
                route.page
            );
        }
    }

    #[tokio::test]
    async fn test_terms_page_links_disclaimer() {
        let site = create_test_server();
        let server = &site.server;
        let response = server.get("/terms").await;
        response.assert_status_ok();

        let body = response.text();
        assert!(body.contains("<h1 class=\"legal__title\">Terms of Use</h1>"));
        assert!(body.contains("href=\"/disclaimer\""));
    }

    #[tokio::test]
    async fn test_legal_notice_alias_matches_terms() {
        let site = create_test_server();
        let server = &site.server;
        let terms = server.get("/terms").await.text();
        let alias = server.get("/legal-notice").await.text();
        assert_eq!(terms, alias);
    }

    #[tokio::test]
    async fn test_unknown_path_returns_not_found_page() {
        let site = create_test_server();
        let server = &site.server;
        let response = server.get("/nonexistent-page").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("404 Page Not Found"));
    }

    #[tokio::test]
    async fn test_trailing_slash_is_not_a_route() {
        let site = create_test_server();
        let server = &site.server;
        server
            .get("/terms/")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_query_string_is_ignored() {
        let site = create_test_server();
        let server = &site.server;
        let response = server.get("/privacy?utm_source=mail").await;
        response.assert_status_ok();
        assert!(response.text().contains("Privacy Policy"));
    }

    #[tokio::test]
    async fn test_pages_are_html() {
        let site = create_test_server();
        let server = &site.server;
        let response = server.get("/").await;
        let content_type = response.header("content-type");
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_home_page_has_all_sections() {
        let site = create_test_server();
        let server = &site.server;
        let body = server.get("/").await.text();
        for id in SiteContent::default().section_ids() {
            assert!(body.contains(&format!("id=\"{}\"", id)), "missing section {}", id);
        }
    }

    #[tokio::test]
    async fn test_serves_stylesheet() {
        let site = create_test_server();
        let css = site.server.get("/assets/site.css").await;
        css.assert_status_ok();
        assert!(css.text().contains("margin"));
    }

    #[tokio::test]
    async fn test_serves_browser_bundle() {
        let site = create_test_server();
        let bundle = site.fixtures.path().join("pkg/site_web.js");
        assert!(bundle.is_file(), "fixture missing: {}", bundle.display());

        let js = site.server.get(site_core::render::layout::SCRIPT_PATH).await;
        js.assert_status_ok();
        assert!(js.text().contains("export default function init"));
        let content_type = js.header("content-type");
        assert!(content_type.to_str().unwrap().contains("javascript"));
    }

    #[tokio::test]
    async fn test_missing_bundle_file_is_404() {
        let site = create_test_server();
        site.server
            .get("/pkg/missing.js")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_default_content_images_are_shipped() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../public/assets");
        let fixtures = fixture_dirs();
        let app = build_router(
            AppState::new(&SiteContent::default()),
            &public,
            &fixtures.path().join("pkg"),
        );
        let server = TestServer::new(app).unwrap();

        let content = SiteContent::default();
        for path in [
            content.firm.logo_path.as_str(),
            content.hero.image.src.as_str(),
            site_core::render::layout::STYLESHEET_PATH,
        ] {
            let status = server.get(path).await.status_code();
            assert_eq!(status, StatusCode::OK, "{}", path);
        }
    }

    #[tokio::test]
    async fn test_custom_content_is_rendered() {
        let mut content = SiteContent::default();
        content.services.heading = "What We Do".to_string();
        let site = create_test_server_with(&content);
        let server = &site.server;
        assert!(server.get("/").await.text().contains("What We Do"));
    }

    #[tokio::test]
    async fn test_registered_paths_and_table_agree() {
        let site = create_test_server();
        let server = &site.server;
        for path in routes::paths() {
            let status = server.get(path).await.status_code();
            assert_eq!(status, StatusCode::OK, "{}", path);
        }
    }
}

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use site_core::routes::{paths, resolve};
    use site_core::Page;

    proptest! {
        /// Property: the status code for any path is 200 exactly when it is registered
        #[test]
        fn status_follows_route_table(path in "/[a-z-]{0,20}") {
            let page = resolve(&path);
            let registered = paths().any(|p| p == path);
            prop_assert_eq!(page.http_status() == 200, registered);
            prop_assert_eq!(page == Page::NotFound, !registered);
        }
    }
}
