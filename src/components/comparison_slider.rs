use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config::INITIAL_SPLIT;

/// Converts a pointer x coordinate into a split percentage of the container.
///
/// Points left or right of the container pin to 0 or 100. A container with
/// no width yet (not laid out) gives `None`.
pub fn split_percent(client_x: f64, left: f64, width: f64) -> Option<f64> {
    if width <= 0.0 {
        return None;
    }
    Some(((client_x - left) / width * 100.0).clamp(0.0, 100.0))
}

/// Split position and drag flag of a before/after slider.
///
/// Mouse and touch moves are gated the same way: only a drag that began on
/// the handle moves the split. The position stays wherever the last drag
/// left it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitState {
    position: f64,
    dragging: bool,
}

impl Default for SplitState {
    fn default() -> Self {
        Self {
            position: INITIAL_SPLIT,
            dragging: false,
        }
    }
}

impl SplitState {
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Follows the pointer while a drag is active; ignored otherwise.
    pub fn update_position(&mut self, client_x: f64, left: f64, width: f64) {
        if !self.dragging {
            return;
        }
        if let Some(position) = split_percent(client_x, left, width) {
            self.position = position;
        }
    }

    /// Right-hand inset that clips the "before" layer down to the split.
    pub fn before_clip(&self) -> String {
        format!("clip-path: inset(0 {}% 0 0);", 100.0 - self.position)
    }

    pub fn handle_style(&self) -> String {
        format!("left: {}%;", self.position)
    }
}

pub enum SplitAction {
    Begin,
    Move { client_x: f64, left: f64, width: f64 },
    End,
}

impl Reducible for SplitState {
    type Action = SplitAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            SplitAction::Begin => next.begin_drag(),
            SplitAction::Move { client_x, left, width } => next.update_position(client_x, left, width),
            SplitAction::End => next.end_drag(),
        }
        if next == *self {
            return self;
        }
        if next.dragging != self.dragging {
            debug!("comparison drag {} at {:.1}%", if next.dragging { "started" } else { "released" }, next.position);
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ComparisonSliderProps {
    pub before: AttrValue,
    pub after: AttrValue,
    #[prop_or(AttrValue::Static("Before"))]
    pub before_label: AttrValue,
    #[prop_or(AttrValue::Static("After"))]
    pub after_label: AttrValue,
}

#[function_component(ComparisonSlider)]
pub fn comparison_slider(props: &ComparisonSliderProps) -> Html {
    let split = use_reducer(SplitState::default);
    let container_ref = use_node_ref();

    // A release anywhere on the page ends the drag, not just inside the container.
    {
        let split = split.dispatcher();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let release = Closure::wrap(Box::new(move || {
                split.dispatch(SplitAction::End);
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                for event in ["mouseup", "touchend"] {
                    if window.add_event_listener_with_callback(event, release.as_ref().unchecked_ref()).is_err() {
                        warn!("could not listen for window {}", event);
                    }
                }
            }

            move || {
                if let Some(window) = window {
                    for event in ["mouseup", "touchend"] {
                        let _ = window.remove_event_listener_with_callback(event, release.as_ref().unchecked_ref());
                    }
                }
            }
        }, ());
    }

    let move_to = {
        let split = split.dispatcher();
        let container_ref = container_ref.clone();
        Callback::from(move |client_x: f64| {
            if let Some(container) = container_ref.cast::<Element>() {
                let rect = container.get_bounding_client_rect();
                split.dispatch(SplitAction::Move {
                    client_x,
                    left: rect.left(),
                    width: rect.width(),
                });
            }
        })
    };

    let begin = {
        let split = split.dispatcher();
        Callback::from(move |_: ()| split.dispatch(SplitAction::Begin))
    };
    let end = {
        let split = split.dispatcher();
        Callback::from(move |_: ()| split.dispatch(SplitAction::End))
    };

    let onmousedown = {
        let begin = begin.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            begin.emit(());
        })
    };
    let ontouchstart = {
        let begin = begin.clone();
        Callback::from(move |_: TouchEvent| begin.emit(()))
    };
    let onmousemove = {
        let move_to = move_to.clone();
        Callback::from(move |e: MouseEvent| move_to.emit(e.client_x() as f64))
    };
    let ontouchmove = {
        let move_to = move_to.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                move_to.emit(touch.client_x() as f64);
            }
        })
    };
    let onmouseup = {
        let end = end.clone();
        Callback::from(move |_: MouseEvent| end.emit(()))
    };
    let ontouchend = Callback::from(move |_: TouchEvent| end.emit(()));

    html! {
        <div
            ref={container_ref}
            class={classes!("comparison", split.is_dragging().then(|| "dragging"))}
            {onmousemove}
            {ontouchmove}
            {onmouseup}
            {ontouchend}
        >
            <style>
                {r#"
                .comparison {
                    position: relative;
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    overflow: hidden;
                    border-radius: 16px;
                    user-select: none;
                    box-shadow: 0 12px 32px rgba(30, 42, 59, 0.15);
                }
                .comparison.dragging {
                    cursor: ew-resize;
                }
                .comparison img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    pointer-events: none;
                }
                .comparison-label {
                    position: absolute;
                    top: 1rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: rgba(30, 42, 59, 0.75);
                    color: #fff;
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }
                .comparison-label.before { left: 1rem; }
                .comparison-label.after { right: 1rem; }
                .comparison-before {
                    position: absolute;
                    inset: 0;
                }
                .comparison-handle {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 4px;
                    margin-left: -2px;
                    background: #fff;
                    cursor: ew-resize;
                    touch-action: none;
                }
                .comparison-handle span {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 44px;
                    height: 44px;
                    transform: translate(-50%, -50%);
                    border-radius: 50%;
                    background: #C94A4A;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1rem;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
                }
                "#}
            </style>
            <img src={props.after.clone()} alt={props.after_label.clone()} draggable="false" />
            <span class="comparison-label after">{&props.after_label}</span>
            <div class="comparison-before" style={split.before_clip()}>
                <img src={props.before.clone()} alt={props.before_label.clone()} draggable="false" />
                <span class="comparison-label before">{&props.before_label}</span>
            </div>
            <div class="comparison-handle" style={split.handle_style()} {onmousedown} {ontouchstart}>
                <span>{"⇔"}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragging() -> SplitState {
        let mut state = SplitState::default();
        state.begin_drag();
        state
    }

    #[test]
    fn starts_at_midpoint_idle() {
        let state = SplitState::default();
        assert_eq!(state.position(), 50.0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn pointer_outside_container_pins_to_edges() {
        let mut state = dragging();
        state.update_position(-50.0, 0.0, 400.0);
        assert_eq!(state.position(), 0.0);
        state.update_position(450.0, 0.0, 400.0);
        assert_eq!(state.position(), 100.0);
        state.update_position(200.0, 0.0, 400.0);
        assert_eq!(state.position(), 50.0);
    }

    #[test]
    fn offset_container_is_measured_from_its_left_edge() {
        let mut state = dragging();
        state.update_position(200.0, 100.0, 400.0);
        assert_eq!(state.position(), 25.0);
    }

    #[test]
    fn moves_without_drag_are_ignored() {
        let mut state = SplitState::default();
        state.update_position(0.0, 0.0, 400.0);
        assert_eq!(state.position(), 50.0);
    }

    #[test]
    fn unmeasured_container_keeps_position() {
        let mut state = dragging();
        state.update_position(300.0, 0.0, 0.0);
        assert_eq!(state.position(), 50.0);
        assert_eq!(split_percent(10.0, 0.0, -5.0), None);
    }

    #[test]
    fn position_freezes_after_release() {
        let mut state = dragging();
        state.update_position(100.0, 0.0, 400.0);
        state.end_drag();
        state.update_position(380.0, 0.0, 400.0);
        assert_eq!(state.position(), 25.0);
    }

    #[test]
    fn end_action_releases_drag() {
        let state = Rc::new(SplitState::default());
        let state = state.reduce(SplitAction::Begin);
        assert!(state.is_dragging());
        let state = state.reduce(SplitAction::End);
        assert!(!state.is_dragging());
    }

    #[test]
    fn ending_twice_is_harmless() {
        let state = Rc::new(dragging());
        let once = state.reduce(SplitAction::End);
        assert!(!once.is_dragging());
        let twice = once.clone().reduce(SplitAction::End);
        assert!(!twice.is_dragging());
        assert!(Rc::ptr_eq(&once, &twice));
    }

    #[test]
    fn clip_and_handle_follow_split() {
        let mut state = dragging();
        state.update_position(100.0, 0.0, 400.0);
        assert_eq!(state.before_clip(), "clip-path: inset(0 75% 0 0);");
        assert_eq!(state.handle_style(), "left: 25%;");
    }
}
