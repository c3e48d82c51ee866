use yew::prelude::*;

use crate::hooks::use_scroll_stack;
use crate::motion::{card_visual_state, CardVisualState, CARD_COUNT, SECTION_HEIGHT_VIEWPORTS};

struct StackCard {
    badge: &'static str,
    points: &'static [(&'static str, &'static str)],
    theme: &'static str,
}

const CARDS: [StackCard; CARD_COUNT] = [
    StackCard {
        badge: "💡 Automate Your Billing with Confidence",
        points: &[
            ("Real-time Claim Scrubbing:", "Catch errors instantly with payer-specific rules, clinical accuracy checks, and dynamic policy updates."),
            ("Automated Billing & Coding:", "AI-driven CPT, ICD-10, HCPCS coding assistance, optimized for maximum compliance and reimbursement."),
            ("Intelligent Prior Authorizations:", "Agentic AI handles pre-authorization submissions, tracking, and follow-ups."),
            ("Denial Management & Resolution:", "Identifies and prevents denials before submission, and resolves common payer rejections."),
            ("Effortless Claim Submissions:", "Seamless EMR and clearinghouse integration with minimal manual intervention."),
        ],
        theme: "stack-card-sunrise",
    },
    StackCard {
        badge: "📊 Supercharge Your Revenue Performance",
        points: &[
            ("95%+", "First-Pass Approval Rate"),
            ("80%", "Reduction in Denials & Rejections"),
            ("70%", "Faster Billing Cycles"),
            ("$100-200K+", "Annual Revenue Increase per Provider"),
            ("Adaptive Learning:", "Automatically incorporates changing payer guidelines and billing policies."),
        ],
        theme: "stack-card-ember",
    },
    StackCard {
        badge: "🔐 Secure, Scalable, Compliant",
        points: &[
            ("HIPAA-Compliant & Secure:", "Advanced data security measures ensure compliance and peace of mind."),
            ("EMR and PMS Integration:", "Compatible with leading EMRs and billing software."),
            ("Scalable Architecture:", "Designed to grow seamlessly with your practice."),
        ],
        theme: "stack-card-dusk",
    },
];

fn card_style(visual: &CardVisualState) -> String {
    format!(
        "z-index: {}; transform: translateY({}px) scale({}); opacity: {}; pointer-events: {};",
        visual.z_index,
        visual.translate_y,
        visual.scale,
        visual.opacity,
        if visual.visible { "auto" } else { "none" },
    )
}

#[function_component(StackSection)]
pub fn stack_section() -> Html {
    let section_ref = use_node_ref();
    let state = use_scroll_stack(section_ref.clone());

    html! {
        <div
            ref={section_ref}
            class="stack-host"
            style={format!("height: {}vh", SECTION_HEIGHT_VIEWPORTS * 100)}
        >
            <section class="stack-pinned" id="why-ai-rcm">
                <div class="stack-container">
                    <div class="stack-header">
                        <div class="pulse-chip opacity-0 animate-fade-in" style="animation-delay: 0.1s">
                            <span class="chip-number">{"02"}</span>
                            <span>{"AI-Powered RCM"}</span>
                        </div>
                        <h2 class="section-title">{"Why AI-Powered Revenue Cycle Management?"}</h2>
                    </div>

                    <div class="stack-cards">
                        {
                            CARDS.iter().enumerate().map(|(index, card)| {
                                let visual = card_visual_state(index, &state);
                                html! {
                                    <div
                                        key={index}
                                        class={classes!("stack-card", card.theme, visual.visible.then(|| "animate-card-enter"))}
                                        style={card_style(&visual)}
                                    >
                                        <div class="stack-card-badge">{card.badge}</div>
                                        <ul class="stack-card-points">
                                            {
                                                card.points.iter().map(|(lead, rest)| html! {
                                                    <li><b>{*lead}</b>{" "}{*rest}</li>
                                                }).collect::<Html>()
                                            }
                                        </ul>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::StackState;

    #[test]
    fn hidden_card_ignores_pointer() {
        let style = card_style(&card_visual_state(1, &StackState::default()));
        assert!(style.contains("pointer-events: none"));
        assert!(style.contains("opacity: 0"));
        assert!(style.contains("translateY(200px)"));
    }

    #[test]
    fn visible_card_style() {
        let state = StackState { active_index: 2, revealed_through: 2, intersecting: true };
        let style = card_style(&card_visual_state(2, &state));
        assert_eq!(
            style,
            "z-index: 30; transform: translateY(15px) scale(1); opacity: 1; pointer-events: auto;"
        );
    }
}
