use yew::prelude::*;
use yew_hooks::use_mount;

#[hook]
pub fn use_scroll_to_top() {
    use_mount(|| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });
}
