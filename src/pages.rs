use yew::prelude::*;

use crate::config::{BANNER_IMAGE, BRAND_FULL, GROUP_PHOTO};
use crate::header::route_click;
use crate::route::Route;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <main class="container" data-page="home">
            <img class="banner" src={BANNER_IMAGE} alt={format!("{BRAND_FULL} banner")} />
            <h1 class="page-title">{ "Home Page" }</h1>

            <section class="mission">
                <h2>{ "Our Mission" }</h2>
                <p>
                    { "The Swinburne Cambodian Student Association brings together Cambodian \
                       students and friends of Cambodia at Swinburne. We are a home away from \
                       home: a place to meet people, find support, and share our culture." }
                </p>
                <p>
                    { "Through cultural celebrations, social events, and academic and career \
                       support, we aim to help every member thrive at university and to \
                       share Khmer heritage with the wider Swinburne community." }
                </p>
            </section>

            <img class="group-photo" src={GROUP_PHOTO} alt="SCSA members group photo" />
        </main>
    }
}

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <main class="container" data-page="aboutus">
            <h1 class="page-title">{ "About Us Page" }</h1>
            <p class="text-secondary">{ "Coming soon…" }</p>
        </main>
    }
}

#[function_component(EventsPage)]
pub fn events_page() -> Html {
    html! {
        <main class="container" data-page="events">
            <h1 class="page-title">{ "Events Section" }</h1>
            <p class="text-secondary">{ "Coming soon…" }</p>
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(props: &NotFoundProps) -> Html {
    let go_home = route_click(Route::Home, props.on_navigate.clone());

    html! {
        <main class="container" data-page="notfound">
            <h1 class="page-title">{ "Page Not Found" }</h1>
            <p class="text-secondary">{ "There is nothing at this address." }</p>
            <a class="home-link" href={Route::Home.path()} onclick={go_home}>{ "Back to Home" }</a>
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageViewProps {
    pub route: Route,
    pub on_navigate: Callback<Route>,
}

/// Renders exactly one page for the current route.
#[function_component(PageView)]
pub fn page_view(props: &PageViewProps) -> Html {
    match props.route {
        Route::Home => html! { <HomePage /> },
        Route::AboutUs => html! { <AboutPage /> },
        Route::Events => html! { <EventsPage /> },
        Route::NotFound => html! { <NotFoundPage on_navigate={props.on_navigate.clone()} /> },
    }
}
