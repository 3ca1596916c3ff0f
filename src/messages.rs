//! Waiting messages shown on the spinner while a generation call is in
//! flight.

use crate::ui::rgb::{AMBER, ELECTRIC_BLUE, MINT, VIOLET};
use rand::seq::IndexedRandom;
use std::sync::LazyLock;

#[derive(Clone)]
pub struct ColoredMessage {
    pub text: String,
    pub color: (u8, u8, u8),
}

static WAITING_MESSAGES: LazyLock<Vec<ColoredMessage>> = LazyLock::new(|| {
    vec![
        ColoredMessage {
            text: "📋 Convening the product council...".to_string(),
            color: ELECTRIC_BLUE,
        },
        ColoredMessage {
            text: "🎯 Aligning stakeholders on scope...".to_string(),
            color: VIOLET,
        },
        ColoredMessage {
            text: "🗺️ Charting the user journey...".to_string(),
            color: MINT,
        },
        ColoredMessage {
            text: "📈 Consulting the KPI dashboards...".to_string(),
            color: AMBER,
        },
        ColoredMessage {
            text: "🧪 Running requirements past QA...".to_string(),
            color: VIOLET,
        },
        ColoredMessage {
            text: "🏗️ Sketching the architecture diagrams...".to_string(),
            color: ELECTRIC_BLUE,
        },
        ColoredMessage {
            text: "✍️ Drafting crisp acceptance criteria...".to_string(),
            color: MINT,
        },
        ColoredMessage {
            text: "🔍 Interviewing imaginary users...".to_string(),
            color: AMBER,
        },
        ColoredMessage {
            text: "📊 Estimating story points...".to_string(),
            color: ELECTRIC_BLUE,
        },
        ColoredMessage {
            text: "🚢 Preparing the release checklist...".to_string(),
            color: MINT,
        },
        ColoredMessage {
            text: "🧭 Prioritizing the backlog...".to_string(),
            color: VIOLET,
        },
        ColoredMessage {
            text: "🤝 Syncing the agent standup...".to_string(),
            color: AMBER,
        },
    ]
});

pub fn get_waiting_message() -> ColoredMessage {
    let mut rng = rand::rng();
    WAITING_MESSAGES
        .choose(&mut rng)
        .cloned()
        .unwrap_or_else(|| ColoredMessage {
            text: "Processing your request...".to_string(),
            color: AMBER,
        })
}
