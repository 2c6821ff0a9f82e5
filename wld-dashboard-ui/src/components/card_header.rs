//! Card header with title, optional headline figure and disclaimer.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CardHeaderProps {
    /// Card title
    pub title: String,
    /// Headline line under the title (e.g., the days-without-losses counter)
    #[props(default = String::new())]
    pub subtitle: String,
    /// Small print (e.g., "Strictly showing reported losses")
    #[props(default = String::new())]
    pub note: String,
}

/// Header for dashboard cards.
#[component]
pub fn CardHeader(props: CardHeaderProps) -> Element {
    rsx! {
        div {
            class: "card-header",
            style: "margin-bottom: 8px;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 20px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0 0 4px 0;",
                    "{props.subtitle}"
                }
            }
            if !props.note.is_empty() {
                small {
                    style: "color: #666;",
                    "{props.note}"
                }
            }
        }
    }
}
