//! Loading placeholder component.

use dioxus::prelude::*;

/// Shown until a feed has been fetched.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading..."
        }
    }
}
