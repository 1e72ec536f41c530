use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::REVEAL_TRIGGER;

/// A section is in view once its top crosses the trigger line of the viewport.
pub fn is_revealed(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * REVEAL_TRIGGER
}

/// Tracks whether `node` has scrolled into view. Scrolling back above the
/// trigger hides it again so the entrance replays.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let (_, scroll_y) = use_window_scroll();
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let viewport = web_sys::window()
                    .and_then(|w| w.inner_height().ok())
                    .and_then(|h| h.as_f64());
                if let (Some(element), Some(viewport)) = (node.cast::<Element>(), viewport) {
                    let top = element.get_bounding_client_rect().top();
                    revealed.set(is_revealed(top, viewport));
                }
                || ()
            },
            scroll_y as i64,
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// `<section>` whose content fades up when scrolled into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!(props.class.clone(), "reveal", revealed.then(|| "revealed"))}
        >
            { for props.children.iter() }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_past_eighty_percent() {
        assert!(!is_revealed(900.0, 1000.0));
        assert!(!is_revealed(800.0, 1000.0));
        assert!(is_revealed(799.0, 1000.0));
        assert!(is_revealed(-300.0, 1000.0));
    }
}
