use scsa_website::{browser, DisplayMode, Shell, ShellProps};

fn main() {
    let props = ShellProps {
        initial_mode: DisplayMode::from_prefers_dark(browser::prefers_dark()),
        initial_path: browser::current_path().into(),
    };
    yew::Renderer::<Shell>::with_props(props).render();
}
