use std::rc::Rc;

use gloo::console::log;
use yew::prelude::*;

use crate::browser;
use crate::header::HeaderNav;
use crate::pages::PageView;
use crate::route::Route;
use crate::theme::{DisplayMode, ThemeController};

/// Initial configuration the shell is mounted with. `main` fills this from the
/// browser; tests pass it directly.
#[derive(Properties, PartialEq, Clone)]
pub struct ShellProps {
    pub initial_mode: DisplayMode,
    pub initial_path: AttrValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    Toggle,
    /// In-app link click; the path is already pushed.
    Navigate(Route),
    /// History changed underneath us (back/forward, or any push).
    PathChanged(String),
}

/// Everything the tree renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellState {
    pub theme: ThemeController,
    pub route: Route,
}

impl ShellState {
    pub fn new(initial_mode: DisplayMode, initial_path: &str) -> Self {
        Self {
            theme: ThemeController::new(initial_mode),
            route: Route::recognize(initial_path),
        }
    }
}

impl Reducible for ShellState {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: ShellAction) -> Rc<Self> {
        let mut next = *self;
        match action {
            ShellAction::Toggle => next.theme.toggle(),
            ShellAction::Navigate(route) => next.route = route,
            ShellAction::PathChanged(path) => next.route = Route::recognize(&path),
        }
        Rc::new(next)
    }
}

#[function_component(Shell)]
pub fn shell(props: &ShellProps) -> Html {
    let state = use_reducer_eq(|| ShellState::new(props.initial_mode, &props.initial_path));
    let mode = state.theme.mode();
    let route = state.route;

    // Mode drives the body attribute so styles outside the tree follow along.
    use_effect_with(mode, move |mode| {
        browser::set_body_mode(*mode);
        || ()
    });

    // Title fires once per route change.
    use_effect_with(route, move |route| {
        browser::set_title(&route.title());
        || ()
    });

    // Back/forward and pushes from anywhere land here.
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let listener = browser::listen_path(move |path| {
                log!(format!("route: {path}"));
                dispatcher.dispatch(ShellAction::PathChanged(path));
            });
            move || drop(listener)
        });
    }

    let on_toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| {
            log!("display mode toggled");
            dispatcher.dispatch(ShellAction::Toggle);
        })
    };

    let on_navigate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |target: Route| {
            browser::push_path(target.path());
            dispatcher.dispatch(ShellAction::Navigate(target));
        })
    };

    let palette = state.theme.palette();

    html! {
        <div class="shell" data-mode={mode.as_str()} style={palette.page_css()}>
            <HeaderNav
                {mode}
                current={route}
                on_toggle={on_toggle}
                on_navigate={on_navigate.clone()}
            />
            <PageView {route} {on_navigate} />
        </div>
    }
}
