use yew::prelude::*;

use crate::components::{
    features::Features, footer::Footer, hero::Hero, navbar::Navbar, stack_section::StackSection,
};
use crate::config;
use crate::hooks::{use_anchor_scroll, use_reveal_all};

const MOTION_STYLES: &str = r#"
    .opacity-0 { opacity: 0; }

    .animate-fade-in {
        animation: fadeIn 0.8s ease-out forwards;
    }

    @keyframes fadeIn {
        from { opacity: 0; transform: translateY(12px); }
        to { opacity: 1; transform: translateY(0); }
    }

    .parallax {
        transform: translateY(var(--parallax-y, 0px));
        will-change: transform;
    }

    .stack-pinned {
        position: sticky;
        top: 0;
        height: 100vh;
        overflow: hidden;
    }

    .stack-cards {
        position: relative;
        flex: 1;
        perspective: 1000px;
    }

    .stack-card {
        position: absolute;
        inset: 0;
        height: 60vh;
        max-height: 600px;
        border-radius: 20px;
        overflow: hidden;
        transition: transform 0.5s cubic-bezier(0.19, 1, 0.22, 1), opacity 0.5s cubic-bezier(0.19, 1, 0.22, 1);
        will-change: transform, opacity;
    }

    .animate-card-enter {
        animation: cardEnter 0.6s ease-out;
    }

    @keyframes cardEnter {
        from { opacity: 0; transform: translateY(20px) scale(0.95); }
        to { opacity: 1; transform: translateY(0) scale(1); }
    }
"#;

#[function_component(Home)]
pub fn home() -> Html {
    use_reveal_all(config::SCROLL_REVEAL_SELECTOR);
    use_anchor_scroll();

    html! {
        <div class="landing-page">
            <style>{MOTION_STYLES}</style>
            <Navbar />
            <main class="landing-main">
                <Hero />
                <Features />
                <StackSection />
            </main>
            <Footer />
        </div>
    }
}
