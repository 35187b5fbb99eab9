use scsa_website::{DisplayMode, Shell, ShellProps};
use yew::{AttrValue, ServerRenderer};

async fn render(mode: DisplayMode, path: &'static str) -> String {
    ServerRenderer::<Shell>::with_props(move || ShellProps {
        initial_mode: mode,
        initial_path: AttrValue::from(path),
    })
    .hydratable(false)
    .render()
    .await
}

const PAGES: [&str; 4] = ["home", "aboutus", "events", "notfound"];

fn rendered_pages(html: &str) -> Vec<&'static str> {
    PAGES
        .iter()
        .copied()
        .filter(|p| html.contains(&format!("data-page=\"{p}\"")))
        .collect()
}

#[tokio::test]
async fn about_route_renders_only_about_body() {
    let html = render(DisplayMode::Light, "/aboutus").await;
    assert_eq!(rendered_pages(&html), vec!["aboutus"]);
    assert!(html.contains("About Us Page"));
    assert!(!html.contains("Events Section"));
    assert!(!html.contains("Our Mission"));
}

#[tokio::test]
async fn each_known_route_renders_its_page() {
    for (path, page) in [("/", "home"), ("/aboutus", "aboutus"), ("/events", "events")] {
        let html = render(DisplayMode::Dark, path).await;
        assert_eq!(rendered_pages(&html), vec![page], "{path}");
    }
}

#[tokio::test]
async fn home_renders_images_and_mission() {
    let html = render(DisplayMode::Light, "/").await;
    assert!(html.contains("/assets/banner.png"));
    assert!(html.contains("/assets/group-photo.jpg"));
    let mission = html.split("class=\"mission\"").nth(1).unwrap();
    let mission = mission.split("</section>").next().unwrap();
    assert_eq!(mission.matches("<p>").count(), 2);
}

#[tokio::test]
async fn active_link_is_highlighted_in_light_mode() {
    let html = render(DisplayMode::Light, "/events").await;
    assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
    assert_eq!(html.matches("color: #000000; font-weight: 700").count(), 1);
    assert_eq!(html.matches("color: #ffffff; font-weight: 400").count(), 2);
}

#[tokio::test]
async fn active_link_is_highlighted_in_dark_mode() {
    let html = render(DisplayMode::Dark, "/").await;
    assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
    assert_eq!(html.matches("color: #ffffff; font-weight: 700").count(), 1);
    assert_eq!(html.matches("color: #000000; font-weight: 400").count(), 2);
}

#[tokio::test]
async fn unknown_path_renders_not_found_without_active_link() {
    let html = render(DisplayMode::Light, "/contact").await;
    assert_eq!(rendered_pages(&html), vec!["notfound"]);
    assert!(html.contains("Back to Home"));
    assert!(!html.contains("aria-current"));
    assert!(!html.contains("font-weight: 700"));
}

#[tokio::test]
async fn shell_reflects_initial_mode() {
    let light = render(DisplayMode::Light, "/").await;
    assert!(light.contains("data-mode=\"light\""));
    assert!(light.contains("☾"));

    let dark = render(DisplayMode::Dark, "/").await;
    assert!(dark.contains("data-mode=\"dark\""));
    assert!(dark.contains("☀"));
    assert!(dark.contains("background: #121212"));
}

#[tokio::test]
async fn header_has_brand_links_and_toggle() {
    let html = render(DisplayMode::Light, "/aboutus").await;
    assert!(html.contains("Swinburne Cambodian Student Association (SCSA)"));
    for href in ["href=\"/aboutus\"", "href=\"/events\""] {
        assert!(html.contains(href), "{href}");
    }
    // Brand mark and Home link both point at "/".
    assert_eq!(html.matches("href=\"/\"").count(), 2);
    assert!(html.contains("aria-label=\"toggle dark mode\""));
}
