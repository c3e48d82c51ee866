use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::config;
use crate::hooks::{use_parallax, use_tilt};
use crate::referral::ReferralParams;
use crate::web::page;

#[function_component(Hero)]
pub fn hero() -> Html {
    let (width, _height) = use_window_size();
    let is_mobile = page::is_mobile(width);
    use_parallax(!is_mobile);

    let container_ref = use_node_ref();
    let image_ref = use_node_ref();
    use_tilt(container_ref.clone(), image_ref.clone(), !is_mobile);

    let signup_url = use_memo(
        |_| ReferralParams::current().append_to(&format!("{}/waitlist", config::get_app_url())),
        (),
    );

    html! {
        <section class="hero" id="hero">
            <div class="hero-glow parallax" data-speed="0.05"></div>
            <div class="hero-orbs">
                <div class="hero-orb orb-one parallax" data-speed="0.15"></div>
                <div class="hero-orb orb-two parallax" data-speed="0.1"></div>
                <div class="hero-orb orb-three parallax" data-speed="0.2"></div>
            </div>

            <div class="hero-container" ref={container_ref}>
                <div class="hero-copy">
                    <div class="hero-badge opacity-0 animate-fade-in" style="animation-delay: 0.2s">
                        <span>{"✨ AI-Powered Learning"}</span>
                    </div>
                    <h1 class="hero-title opacity-0 animate-fade-in" style="animation-delay: 0.3s">
                        {"🎓 Step Genie: Your "}
                        <span class="gradient-text">{"AI-powered"}</span>
                        {" USMLE Tutor"}
                    </h1>
                    <p class="hero-subtitle opacity-0 animate-fade-in" style="animation-delay: 0.4s">
                        {"Talk through your questions. Master every concept. Ace your USMLE."}
                    </p>

                    <div class="hero-pills opacity-0 animate-fade-in" style="animation-delay: 0.5s">
                        <span class="hero-pill">{"💬 Voice Tutoring"}</span>
                        <span class="hero-pill">{"🧠 Deep Learning"}</span>
                        <span class="hero-pill">{"✨ 24/7 Available"}</span>
                    </div>

                    <div class="hero-cta opacity-0 animate-fade-in" style="animation-delay: 0.7s">
                        <a class="hero-cta-button" href={(*signup_url).clone()}>
                            {"Join Waitlist →"}
                        </a>
                    </div>
                </div>

                <div class="hero-visual opacity-0 animate-fade-in" style="animation-delay: 0.9s">
                    <img
                        ref={image_ref}
                        src="/1.png"
                        alt="Step Genie AI Tutor Interface"
                        class="hero-image"
                        loading="eager"
                    />
                </div>
            </div>
        </section>
    }
}
