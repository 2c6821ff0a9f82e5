//! Aggregated counts by status and by equipment type, in feed order.

use dioxus::prelude::*;
use wld_view::present::{status_rows, type_rows, TYPE_TABLE_HEADERS};

use super::{CardHeader, ErrorDisplay, LoadingSpinner};
use crate::state::AppState;

#[component]
pub fn StatsCard() -> Element {
    let state = use_context::<AppState>();

    if let Some(err) = (state.stats_error)() {
        return rsx! {
            div {
                class: "card",
                CardHeader { title: "Russian Losses Statistics".to_string() }
                ErrorDisplay { what: "war stats".to_string(), message: err }
            }
        };
    }

    let (statuses, types) = match &*state.stats.read() {
        Some(stats) => {
            let statuses: Vec<(String, String)> = status_rows(stats)
                .iter()
                .map(|row| (row.status.clone(), row.label()))
                .collect();
            (statuses, type_rows(stats))
        }
        None => return rsx! { LoadingSpinner {} },
    };

    rsx! {
        div {
            class: "card",
            CardHeader { title: "Russian Losses Statistics".to_string() }
            div {
                class: "card-body",
                h3 { "Counts by Status" }
                ul {
                    for (status, label) in statuses {
                        li {
                            key: "{status}",
                            "{label}"
                        }
                    }
                }
                h3 { "Counts by Type" }
                table {
                    style: "border-collapse: collapse; width: 100%;",
                    thead {
                        tr {
                            for header in TYPE_TABLE_HEADERS {
                                th {
                                    style: "text-align: left; border-bottom: 2px solid #E0E0E0; padding: 4px 8px;",
                                    "{header}"
                                }
                            }
                        }
                    }
                    tbody {
                        // Type names may repeat, so rows are keyed by position.
                        for (index, row) in types.into_iter().enumerate() {
                            tr {
                                key: "{index}",
                                for cell in row.cells() {
                                    td {
                                        style: "border-bottom: 1px solid #EEE; padding: 4px 8px;",
                                        "{cell}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
