//! Fixed-height container Leaflet renders into.

use dioxus::prelude::*;

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id for the map container (Leaflet will render into this)
    pub id: String,
    #[props(default = 500)]
    pub height: u32,
}

/// An empty div owned by Leaflet; Dioxus never renders children into it.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!("height: {}px; width: 100%;", props.height);

    rsx! {
        div {
            id: "{props.id}",
            class: "map-container",
            style: "{style}",
        }
    }
}
