use yew::prelude::*;

use crate::config::{BRAND_FULL, BRAND_SHORT};
use crate::route::Route;
use crate::theme::{compute_style, DisplayMode, Palette};

/// Primary button with no modifier. Anything else (new tab, new window,
/// download) belongs to the browser.
pub fn is_plain_click(button: i16, ctrl: bool, meta: bool, shift: bool, alt: bool) -> bool {
    button == 0 && !(ctrl || meta || shift || alt)
}

/// Click handler for an in-app anchor: plain clicks are routed in place.
pub(crate) fn route_click(route: Route, on_navigate: Callback<Route>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if !is_plain_click(e.button(), e.ctrl_key(), e.meta_key(), e.shift_key(), e.alt_key()) {
            return;
        }
        e.prevent_default();
        on_navigate.emit(route);
    })
}

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub route: Route,
    pub current: Route,
    pub mode: DisplayMode,
    pub on_navigate: Callback<Route>,
}

#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let active = props.route.is_active(props.current);
    let style = compute_style(props.mode, active);

    html! {
        <a
            class={classes!("nav-link", active.then_some("active"))}
            href={props.route.path()}
            style={style.to_css()}
            aria-current={active.then_some("page")}
            onclick={route_click(props.route, props.on_navigate.clone())}
        >
            { props.route.label() }
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderNavProps {
    pub mode: DisplayMode,
    pub current: Route,
    pub on_toggle: Callback<()>,
    pub on_navigate: Callback<Route>,
}

#[function_component(HeaderNav)]
pub fn header_nav(props: &HeaderNavProps) -> Html {
    let palette = Palette::for_mode(props.mode);
    // Brand takes the inactive link color so it reads on the header background.
    let brand_style = compute_style(props.mode, false);

    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    // Moon offers dark mode, sun offers light mode.
    let toggle_icon = match props.mode {
        DisplayMode::Light => "☾",
        DisplayMode::Dark => "☀",
    };

    html! {
        <header class="header" style={format!("background: {};", palette.header_background)}>
            <nav class="toolbar" aria-label="Main navigation">
                <a
                    class="brand"
                    href={Route::Home.path()}
                    style={format!("color: {};", brand_style.color)}
                    onclick={route_click(Route::Home, props.on_navigate.clone())}
                >
                    <span class="logo">{ BRAND_SHORT }</span>
                    <span class="brand-name">{ format!("{} ({})", BRAND_FULL, BRAND_SHORT) }</span>
                </a>

                <div class="spacer"></div>

                { for Route::NAV.iter().map(|route| html! {
                    <NavLink
                        route={*route}
                        current={props.current}
                        mode={props.mode}
                        on_navigate={props.on_navigate.clone()}
                    />
                }) }

                <button
                    class="mode-toggle"
                    type="button"
                    aria-label="toggle dark mode"
                    style={format!("color: {};", brand_style.color)}
                    onclick={on_toggle}
                >
                    { toggle_icon }
                </button>
            </nav>
        </header>
    }
}
