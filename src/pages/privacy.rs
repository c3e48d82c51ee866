use yew::prelude::*;

use crate::components::footer::Footer;

struct PolicySection {
    title: &'static str,
    intro: Option<&'static str>,
    items: &'static [&'static str],
}

const SECTIONS: &[PolicySection] = &[
    PolicySection {
        title: "1) Quick Summary",
        intro: None,
        items: &[
            "We collect: account details (name, email), study activity, content you submit (questions, audio, notes), device and usage data, and limited payment metadata via trusted processors.",
            "We use data to run StepGenie, personalize learning, improve quality, fight abuse, and (with consent) send product updates.",
            "We share with service providers (hosting, analytics, payment), affiliates, and when required by law. We don't sell your personal information.",
            "You can access, correct, download, or delete your data, and opt out of marketing and certain analytics.",
            "No PHI, please. We're not a HIPAA-covered entity.",
            "StepGenie is not for children under 13 (or under 16 in some regions).",
            "We do not use your identifiable content to train third-party foundation models without your consent.",
        ],
    },
    PolicySection {
        title: "2) Scope",
        intro: Some("This Policy explains how we handle personal data when you:"),
        items: &[
            "Visit our websites, web apps, or mobile apps",
            "Create an account or use StepGenie features (voice, chat, QBank, study plans)",
            "Interact with us (support, feedback, surveys)",
            "Receive emails or notifications from us",
        ],
    },
    PolicySection {
        title: "3) What We Collect",
        intro: None,
        items: &[
            "Data you provide: account details, content you submit, and support messages.",
            "Data we get automatically: device, browser, and usage information, plus cookies and similar technologies.",
            "Data from others: sign-in providers, payment processors, and referral partners.",
        ],
    },
    PolicySection {
        title: "4) How We Use Data",
        intro: None,
        items: &[
            "Provide and secure the service",
            "Personalize study plans and feedback",
            "Measure and improve product quality",
            "Communicate with you about your account and, with consent, product news",
        ],
    },
    PolicySection {
        title: "5) Your Rights & Choices",
        intro: Some("Depending on where you live (EEA/UK, California, other U.S. states, India) you may:"),
        items: &[
            "Access, correct, or delete your personal data",
            "Export your data in a portable format",
            "Object to or restrict certain processing",
            "Withdraw consent at any time",
        ],
    },
    PolicySection {
        title: "6) Children's Privacy",
        intro: Some("StepGenie is not directed to children, and we do not knowingly collect their data."),
        items: &[],
    },
    PolicySection {
        title: "7) Changes to This Policy",
        intro: Some("We will post updates here and change the effective date. Material changes are announced by email or in-app."),
        items: &[],
    },
    PolicySection {
        title: "8) Contact Us",
        intro: Some("Questions or requests: manav@stepgenie.ai"),
        items: &[],
    },
];

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <>
            <div class="legal-content privacy-policy">
                <header>
                    <h1>{"StepGenie Privacy Policy"}</h1>
                    <p><strong>{"Effective date: "}</strong>{"August 15, 2025"}</p>
                    <p><strong>{"Entity: "}</strong>{"MAKAI HEALTH CORP, doing business as StepGenie"}</p>
                    <p><strong>{"Registered address: "}</strong>{"1412, Market Street, San Francisco - 94102"}</p>
                </header>

                <div class="legal-notice">
                    {"StepGenie helps learners prepare for the USMLE through AI-powered study tools. We're an education product, not a healthcare provider. Please don't upload real patient data."}
                </div>

                {
                    SECTIONS.iter().map(|section| html! {
                        <section key={section.title}>
                            <h2>{section.title}</h2>
                            {
                                if let Some(intro) = section.intro {
                                    html! { <p>{intro}</p> }
                                } else {
                                    html! {}
                                }
                            }
                            {
                                if section.items.is_empty() {
                                    html! {}
                                } else {
                                    html! {
                                        <ul>
                                            { section.items.iter().map(|item| html! { <li>{*item}</li> }).collect::<Html>() }
                                        </ul>
                                    }
                                }
                            }
                        </section>
                    }).collect::<Html>()
                }
            </div>
            <Footer />
        </>
    }
}
