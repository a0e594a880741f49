use crate::config::REVEAL_THRESHOLD;
use crate::components::use_seen_once;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealFrom {
    Below,
    Right,
}

impl RevealFrom {
    fn hidden_transform(self) -> &'static str {
        match self {
            RevealFrom::Below => "translateY(40px)",
            RevealFrom::Right => "translateX(50px)",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(RevealFrom::Below)]
    pub from: RevealFrom,
    #[prop_or(800)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub delay_ms: u32,
}

pub fn reveal_style(shown: bool, from: RevealFrom, duration_ms: u32, delay_ms: u32) -> String {
    let (opacity, transform) = if shown {
        (1, "none")
    } else {
        (0, from.hidden_transform())
    };
    format!(
        "opacity: {}; transform: {}; transition: opacity {}ms ease {}ms, transform {}ms ease {}ms;",
        opacity, transform, duration_ms, delay_ms, duration_ms, delay_ms
    )
}

/// Fades its children in the first time 30% of it is on screen.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let shown = use_seen_once(node.clone(), REVEAL_THRESHOLD);

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={reveal_style(shown, props.from, props.duration_ms, props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
