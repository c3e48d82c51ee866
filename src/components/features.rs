use yew::prelude::*;

use crate::hooks::use_reveal;
use crate::motion::RevealMode;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub index: usize,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let card_ref = use_node_ref();
    use_reveal(card_ref.clone(), RevealMode::Single);

    html! {
        <div
            ref={card_ref}
            class="feature-card glass-card opacity-0"
            style={format!("animation-delay: {:.1}s", 0.1 * props.index as f64)}
        >
            <div class="feature-icon">{props.icon}</div>
            <h3>{props.title}</h3>
            <p>{props.description}</p>
        </div>
    }
}

const FEATURES: [(&str, &str, &str); 6] = [
    (
        "✅",
        "Real-time Claim Scrubbing",
        "Catch errors instantly with payer-specific rules, clinical accuracy checks, and dynamic policy updates before submission.",
    ),
    (
        "🧾",
        "Automated Billing & Coding",
        "AI-driven CPT, ICD-10 and HCPCS coding assistance, optimized for compliance and reimbursement.",
    ),
    (
        "📨",
        "Intelligent Prior Authorizations",
        "Agentic AI handles pre-authorization submissions, tracking, and follow-ups hands-free.",
    ),
    (
        "🛡️",
        "Denial Management & Resolution",
        "Identifies and prevents denials before submission and resolves common payer rejections.",
    ),
    (
        "🚀",
        "Effortless Claim Submissions",
        "EMR and clearinghouse integration for accurate, rapid claim submissions with minimal manual work.",
    ),
    (
        "📈",
        "Revenue Performance Analytics",
        "Track first-pass rates, denial trends, and cash flow in one place.",
    ),
];

const METRICS: [(&str, &str); 5] = [
    ("95%+", "First-Pass Approval Rate"),
    ("80%", "Reduction in Denials"),
    ("70%", "Faster Billing Cycles"),
    ("99.2%", "Accuracy on USMLE"),
    ("$100-200K+", "Annual Revenue Increase / provider"),
];

#[function_component(Features)]
pub fn features() -> Html {
    let section_ref = use_node_ref();
    use_reveal(section_ref.clone(), RevealMode::Staggered);

    html! {
        <section class="features" id="features" ref={section_ref}>
            <div class="section-container">
                <div class="features-header">
                    <div class="pulse-chip opacity-0 fade-in-element">
                        <span>{"💡 Features"}</span>
                    </div>
                    <h2 class="section-title opacity-0 fade-in-element">
                        {"Automate Your Billing with Confidence"}
                    </h2>
                    <p class="section-subtitle opacity-0 fade-in-element">
                        {"Empower your billing team with intelligent, proactive support that delivers measurable results."}
                    </p>
                </div>

                <div class="features-grid">
                    {
                        FEATURES.iter().enumerate().map(|(index, (icon, title, description))| html! {
                            <FeatureCard
                                key={*title}
                                icon={*icon}
                                title={*title}
                                description={*description}
                                {index}
                            />
                        }).collect::<Html>()
                    }
                </div>

                <div class="metrics-panel animate-on-scroll opacity-0">
                    <h3>{"📊 Supercharge Your Revenue Performance"}</h3>
                    <p>{"Outcomes that significantly boost your bottom line"}</p>
                    <div class="metrics-grid">
                        {
                            METRICS.iter().map(|(value, label)| html! {
                                <div class="metric" key={*label}>
                                    <div class="metric-value">{*value}</div>
                                    <div class="metric-label">{*label}</div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}
