use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;

use crate::config;
use crate::hooks::{scroll_to_top_then, use_scrolled_past};
use crate::web::page;
use crate::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled_past(config::NAV_SCROLLED_THRESHOLD);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let open = !*menu_open;
            page::lock_body_scroll(open);
            menu_open.set(open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| {
            page::lock_body_scroll(false);
            menu_open.set(false);
        })
    };

    let to_top = scroll_to_top_then(close_menu.clone());
    let close_on_click = {
        let close_menu = close_menu.clone();
        Callback::from(move |_: MouseEvent| close_menu.emit(()))
    };

    let menu_class = if *menu_open {
        "mobile-menu open"
    } else {
        "mobile-menu"
    };

    html! {
        <header class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo" aria-label="Step Genie" onclick={to_top.clone()}>
                    <img src="/logo.svg" alt="Step Genie Logo" class="nav-logo-img" />
                </a>

                <nav class="nav-links">
                    <a href="#" class="nav-link" onclick={to_top.clone()}>{"Home"}</a>
                    <a href="#features" class="nav-link">{"Features"}</a>
                    <Link<Route> to={Route::Privacy} classes="nav-link">
                        {"Privacy"}
                    </Link<Route>>
                </nav>

                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div class={menu_class}>
                <nav class="mobile-menu-links">
                    <a href="#" class="mobile-menu-link" onclick={to_top}>{"Home"}</a>
                    <a href="#features" class="mobile-menu-link" onclick={close_on_click.clone()}>{"Features"}</a>
                    <div onclick={close_on_click}>
                        <Link<Route> to={Route::Privacy} classes="mobile-menu-link">
                            {"Privacy"}
                        </Link<Route>>
                    </div>
                </nav>
            </div>
        </header>
    }
}
