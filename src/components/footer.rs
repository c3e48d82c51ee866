use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="section-container">
                <p>
                    {"1412, Market Street"}<br />
                    {"San Francisco 94103, US"}
                </p>
                <p>{format!("© {} Step Genie. All rights reserved.", year)}</p>
                <div class="footer-links">
                    <Link<Route> to={Route::Privacy} classes="footer-link">
                        {"Privacy Policy"}
                    </Link<Route>>
                </div>
            </div>
        </footer>
    }
}
