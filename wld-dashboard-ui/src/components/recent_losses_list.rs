//! Clickable list of losses from the last week.

use dioxus::prelude::*;
use wld_feed::LossRecord;
use wld_view::present::ListItem;

#[derive(Props, Clone, PartialEq)]
pub struct RecentLossesListProps {
    /// Recent losses in feed order
    pub records: Vec<LossRecord>,
    /// Fired with the clicked record
    pub on_select: EventHandler<LossRecord>,
}

#[component]
pub fn RecentLossesList(props: RecentLossesListProps) -> Element {
    let items: Vec<(String, LossRecord, ListItem)> = props
        .records
        .iter()
        .map(|r| (r.id.to_string(), r.clone(), ListItem::from_record(r)))
        .collect();
    let on_select = props.on_select;

    rsx! {
        div {
            class: "recent-losses",
            h3 { u { "Most Recent Losses (Last 7 Days)" } ":" }
            if items.is_empty() {
                p {
                    style: "color: #666;",
                    "No losses reported in the last 7 days."
                }
            }
            ul {
                class: "recent-losses-list",
                style: "list-style: none; padding: 0;",
                for (key, record, item) in items {
                    li {
                        key: "{key}",
                        style: "cursor: pointer; padding: 6px 0; border-bottom: 1px solid #eee;",
                        onclick: move |_| on_select.call(record.clone()),
                        strong { "{item.headline}" }
                        br {}
                        small { "{item.subline}" }
                    }
                }
            }
        }
    }
}
