//! A set of reusable, lifetime-free layout components.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

#[derive(Props, PartialEq, Clone)]
pub struct CardProps {
    children: Element,
    /// Adds inner padding; charts and tables manage their own.
    #[props(default = true)]
    padding: bool,
}

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
pub fn Card(props: CardProps) -> Element {
    let class = if props.padding { "card padded" } else { "card" };
    rsx! { article { class: "{class}", {props.children} } }
}
