//! Website shell for the Swinburne Cambodian Student Association: a header
//! with navigation and a light/dark toggle over three static pages.
//!
//! Only [`browser`] touches the DOM. Everything else renders the same in
//! the browser and under Yew's server renderer.

pub mod browser;
pub mod config;
pub mod header;
pub mod pages;
pub mod route;
pub mod shell;
pub mod theme;

pub use route::Route;
pub use shell::{Shell, ShellAction, ShellProps, ShellState};
pub use theme::{compute_style, DisplayMode, StyleAttributes, ThemeController};
