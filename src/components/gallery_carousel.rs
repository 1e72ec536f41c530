use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::config::{MIN_SWIPE_DISTANCE, SLIDE_GAP_PX, VISIBLE_ITEMS};

/// Paging position of a carousel over a fixed, ordered set of items.
///
/// `current_index` is the first visible item and always stays in
/// `0..=max_index()`, so the viewport never scrolls past the last full page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paging {
    item_count: usize,
    visible_count: usize,
    current_index: usize,
}

impl Paging {
    pub fn new(item_count: usize, visible_count: usize) -> Self {
        Self {
            item_count,
            // Zero would divide the track by nothing; treat it as one slide.
            visible_count: visible_count.max(1),
            current_index: 0,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.visible_count)
    }

    pub fn can_advance(&self) -> bool {
        self.current_index < self.max_index()
    }

    pub fn can_retreat(&self) -> bool {
        self.current_index > 0
    }

    pub fn advance(&mut self) {
        self.current_index = (self.current_index + 1).min(self.max_index());
    }

    pub fn retreat(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// Jump straight to a page, e.g. from a position dot.
    pub fn select(&mut self, index: usize) {
        self.current_index = index.min(self.max_index());
    }

    /// One dot per reachable page.
    pub fn indicator_count(&self) -> usize {
        self.item_count.min(self.max_index() + 1)
    }

    pub fn indicator_weight(&self, index: usize) -> DotWeight {
        match index.abs_diff(self.current_index) {
            0 => DotWeight::Active,
            1 => DotWeight::Adjacent,
            _ => DotWeight::Neutral,
        }
    }

    fn slide_percent(&self) -> f64 {
        100.0 / self.visible_count as f64
    }

    /// CSS transform for the item track: one step is a slide plus its share of the gap.
    pub fn track_transform(&self, gap_px: f64) -> String {
        format!(
            "translateX(calc(-{} * ({}% + {}px)))",
            self.current_index,
            self.slide_percent(),
            gap_px / self.visible_count as f64
        )
    }

    /// Flex basis that fits exactly `visible_count` slides and their gaps in the viewport.
    pub fn slide_basis(&self, gap_px: f64) -> String {
        let shrink = gap_px * (self.visible_count as f64 - 1.0) / self.visible_count as f64;
        format!("flex: 0 0 calc({}% - {}px);", self.slide_percent(), shrink)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DotWeight {
    Active,
    Adjacent,
    Neutral,
}

impl DotWeight {
    fn class(self) -> Option<&'static str> {
        match self {
            DotWeight::Active => Some("active"),
            DotWeight::Adjacent => Some("adjacent"),
            DotWeight::Neutral => None,
        }
    }
}

/// What a finished gesture turned out to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    Next,
    Previous,
    Tap,
}

/// Classifies a horizontal gesture by how far it travelled.
///
/// Moving left (start greater than end) pages forward.
pub fn classify_swipe(start: f64, end: f64, min_distance: f64) -> Swipe {
    let distance = start - end;
    if distance > min_distance {
        Swipe::Next
    } else if distance < -min_distance {
        Swipe::Previous
    } else {
        Swipe::Tap
    }
}

/// Transient pointer/touch bookkeeping for one gesture at a time.
///
/// Nothing moves while the gesture is in flight; the page changes only once
/// it ends. A gesture that ended as a swipe also swallows the click the
/// browser fires right after it, so dragging across an image never opens it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<f64>,
    current: Option<f64>,
    swallow_click: bool,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start = Some(x);
        self.current = None;
        self.swallow_click = false;
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn track(&mut self, x: f64) {
        if self.start.is_some() {
            self.current = Some(x);
        }
    }

    /// Ends the gesture and resets the tracker whatever the outcome.
    pub fn finish(&mut self, min_distance: f64) -> Swipe {
        let swipe = match (self.start.take(), self.current.take()) {
            (Some(start), Some(end)) => classify_swipe(start, end, min_distance),
            _ => Swipe::Tap,
        };
        self.swallow_click = swipe != Swipe::Tap;
        swipe
    }

    /// Drops an abandoned gesture without committing anything.
    pub fn cancel(&mut self) {
        self.start = None;
        self.current = None;
    }

    /// True once if the last gesture was a swipe.
    pub fn take_swallowed_click(&mut self) -> bool {
        std::mem::take(&mut self.swallow_click)
    }
}

pub enum PagingAction {
    Advance,
    Retreat,
    Select(usize),
    Swipe(Swipe),
}

impl Reducible for Paging {
    type Action = PagingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            PagingAction::Advance | PagingAction::Swipe(Swipe::Next) => next.advance(),
            PagingAction::Retreat | PagingAction::Swipe(Swipe::Previous) => next.retreat(),
            PagingAction::Select(index) => next.select(index),
            PagingAction::Swipe(Swipe::Tap) => {}
        }
        if next == *self {
            return self;
        }
        debug!("carousel page {} -> {}", self.current_index, next.current_index);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryCarouselProps {
    pub title: AttrValue,
    pub images: Vec<AttrValue>,
    /// Fired with the image that was tapped, never for a swipe.
    pub on_image_click: Callback<AttrValue>,
}

#[function_component(GalleryCarousel)]
pub fn gallery_carousel(props: &GalleryCarouselProps) -> Html {
    let paging = use_reducer({
        let count = props.images.len();
        move || Paging::new(count, VISIBLE_ITEMS)
    });
    let tracker = use_mut_ref(SwipeTracker::default);

    let on_prev = {
        let paging = paging.dispatcher();
        Callback::from(move |_: MouseEvent| paging.dispatch(PagingAction::Retreat))
    };
    let on_next = {
        let paging = paging.dispatcher();
        Callback::from(move |_: MouseEvent| paging.dispatch(PagingAction::Advance))
    };

    let finish_gesture = {
        let paging = paging.dispatcher();
        let tracker = tracker.clone();
        Callback::from(move |_: ()| {
            let swipe = tracker.borrow_mut().finish(MIN_SWIPE_DISTANCE);
            debug!("carousel gesture ended as {:?}", swipe);
            paging.dispatch(PagingAction::Swipe(swipe));
        })
    };

    let ontouchstart = {
        let tracker = tracker.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.target_touches().get(0) {
                tracker.borrow_mut().begin(touch.client_x() as f64);
            }
        })
    };
    let ontouchmove = {
        let tracker = tracker.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.target_touches().get(0) {
                tracker.borrow_mut().track(touch.client_x() as f64);
            }
        })
    };
    let ontouchend = {
        let finish_gesture = finish_gesture.clone();
        Callback::from(move |_: TouchEvent| finish_gesture.emit(()))
    };

    let onmousedown = {
        let tracker = tracker.clone();
        Callback::from(move |e: MouseEvent| {
            if e.button() == 0 {
                tracker.borrow_mut().begin(e.client_x() as f64);
            }
        })
    };
    let onmousemove = {
        let tracker = tracker.clone();
        Callback::from(move |e: MouseEvent| {
            tracker.borrow_mut().track(e.client_x() as f64);
        })
    };
    let onmouseup = {
        let tracker = tracker.clone();
        Callback::from(move |_: MouseEvent| {
            if tracker.borrow().is_tracking() {
                finish_gesture.emit(());
            }
        })
    };
    let onmouseleave = {
        let tracker = tracker.clone();
        Callback::from(move |_: MouseEvent| tracker.borrow_mut().cancel())
    };

    let slide_style = paging.slide_basis(SLIDE_GAP_PX);
    let title = props.title.clone();

    html! {
        <div class="gallery-block">
            <style>
                {r#"
                .gallery-block {
                    margin-bottom: 3rem;
                }
                .gallery-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 1rem;
                }
                .gallery-header h3 {
                    font-family: 'Bebas Neue', sans-serif;
                    font-size: 1.25rem;
                    color: #1E2A3B;
                }
                .gallery-arrows {
                    display: flex;
                    gap: 0.5rem;
                }
                .gallery-arrow {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    background: #fff;
                    border: 1px solid #E5E7EB;
                    color: #1E2A3B;
                    font-size: 1.1rem;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .gallery-arrow:hover:not(:disabled) {
                    background: #FAF8F5;
                }
                .gallery-arrow:disabled {
                    opacity: 0.4;
                    cursor: not-allowed;
                }
                .gallery-carousel {
                    overflow: hidden;
                    user-select: none;
                    touch-action: pan-y;
                }
                .gallery-track {
                    display: flex;
                    gap: 16px;
                    transition: transform 0.4s ease;
                }
                .gallery-slide {
                    aspect-ratio: 1 / 1;
                    border-radius: 12px;
                    overflow: hidden;
                    cursor: pointer;
                }
                .gallery-slide img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.3s ease;
                    pointer-events: none;
                }
                .gallery-slide:hover img {
                    transform: scale(1.05);
                }
                .carousel-dots {
                    display: flex;
                    justify-content: center;
                    gap: 6px;
                    margin-top: 1rem;
                }
                .carousel-dot {
                    width: 6px;
                    height: 6px;
                    padding: 0;
                    border: none;
                    border-radius: 50%;
                    background: #1E2A3B;
                    opacity: 0.2;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .carousel-dot.adjacent {
                    opacity: 0.5;
                }
                .carousel-dot.active {
                    width: 8px;
                    height: 8px;
                    opacity: 1;
                    background: #C94A4A;
                }
                @media (max-width: 768px) {
                    .gallery-arrows {
                        display: none;
                    }
                }
                "#}
            </style>
            <div class="gallery-header">
                <h3>{&props.title}</h3>
                <div class="gallery-arrows">
                    <button class="gallery-arrow" onclick={on_prev} disabled={!paging.can_retreat()} aria-label="Previous">
                        {"‹"}
                    </button>
                    <button class="gallery-arrow" onclick={on_next} disabled={!paging.can_advance()} aria-label="Next">
                        {"›"}
                    </button>
                </div>
            </div>

            <div
                class="gallery-carousel"
                {ontouchstart}
                {ontouchmove}
                {ontouchend}
                {onmousedown}
                {onmousemove}
                {onmouseup}
                {onmouseleave}
            >
                <div class="gallery-track" style={format!("transform: {};", paging.track_transform(SLIDE_GAP_PX))}>
                    {
                        props.images.iter().enumerate().map(|(i, image)| {
                            let onclick = {
                                let tracker = tracker.clone();
                                let on_image_click = props.on_image_click.clone();
                                let image = image.clone();
                                Callback::from(move |_: MouseEvent| {
                                    if tracker.borrow_mut().take_swallowed_click() {
                                        return;
                                    }
                                    on_image_click.emit(image.clone());
                                })
                            };
                            html! {
                                <div key={i} class="gallery-slide" style={slide_style.clone()} {onclick}>
                                    <img
                                        src={image.clone()}
                                        alt={format!("{} project {}", title, i + 1)}
                                        loading="lazy"
                                        draggable="false"
                                    />
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <div class="carousel-dots">
                {
                    (0..paging.indicator_count()).map(|i| {
                        let onclick = {
                            let paging = paging.dispatcher();
                            Callback::from(move |_: MouseEvent| paging.dispatch(PagingAction::Select(i)))
                        };
                        html! {
                            <button
                                key={i}
                                class={classes!("carousel-dot", paging.indicator_weight(i).class())}
                                {onclick}
                                aria-label={format!("Go to slide {}", i + 1)}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_stays_within_reachable_pages() {
        let mut paging = Paging::new(10, 5);
        assert_eq!(paging.max_index(), 5);
        for _ in 0..20 {
            paging.advance();
            assert!(paging.current_index() <= paging.max_index());
        }
        assert_eq!(paging.current_index(), 5);
        assert!(!paging.can_advance());
        for _ in 0..20 {
            paging.retreat();
        }
        assert_eq!(paging.current_index(), 0);
        assert!(!paging.can_retreat());
    }

    #[test]
    fn mixed_paging_never_escapes_range() {
        let mut paging = Paging::new(7, 3);
        let moves = [true, true, false, true, true, true, true, false, false, false, false, true];
        for forward in moves {
            if forward {
                paging.advance();
            } else {
                paging.retreat();
            }
            assert!(paging.current_index() <= 4);
        }
    }

    #[test]
    fn full_viewport_disables_paging() {
        let mut paging = Paging::new(5, 5);
        assert_eq!(paging.max_index(), 0);
        for _ in 0..3 {
            paging.advance();
            paging.retreat();
        }
        paging.advance();
        assert_eq!(paging.current_index(), 0);
        assert!(!paging.can_advance());
        assert!(!paging.can_retreat());
        assert_eq!(paging.indicator_count(), 1);
    }

    #[test]
    fn dots_cover_reachable_pages_only() {
        let paging = Paging::new(3, 5);
        assert_eq!(paging.max_index(), 0);
        assert_eq!(paging.indicator_count(), 1);
        let paging = Paging::new(10, 5);
        assert_eq!(paging.indicator_count(), 6);
    }

    #[test]
    fn empty_gallery_has_no_dots() {
        let paging = Paging::new(0, 5);
        assert_eq!(paging.indicator_count(), 0);
        assert!(!paging.can_advance());
        assert!(!paging.can_retreat());
    }

    #[test]
    fn dot_weight_decays_with_distance() {
        let mut paging = Paging::new(12, 5);
        paging.select(3);
        assert_eq!(paging.indicator_weight(3), DotWeight::Active);
        assert_eq!(paging.indicator_weight(2), DotWeight::Adjacent);
        assert_eq!(paging.indicator_weight(4), DotWeight::Adjacent);
        for i in [0, 1, 5, 6, 7] {
            assert_eq!(paging.indicator_weight(i), DotWeight::Neutral);
        }
    }

    #[test]
    fn select_clamps_to_last_page() {
        let mut paging = Paging::new(10, 5);
        paging.select(9);
        assert_eq!(paging.current_index(), 5);
    }

    #[test]
    fn swipe_needs_more_than_threshold() {
        assert_eq!(classify_swipe(200.0, 140.0, 50.0), Swipe::Next);
        assert_eq!(classify_swipe(200.0, 160.0, 50.0), Swipe::Tap);
        assert_eq!(classify_swipe(200.0, 150.0, 50.0), Swipe::Tap);
        assert_eq!(classify_swipe(140.0, 200.0, 50.0), Swipe::Previous);
    }

    #[test]
    fn finished_swipe_advances_once_and_resets() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(200.0);
        tracker.track(180.0);
        tracker.track(140.0);
        assert_eq!(tracker.finish(MIN_SWIPE_DISTANCE), Swipe::Next);
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.finish(MIN_SWIPE_DISTANCE), Swipe::Tap);

        let paging = Rc::new(Paging::new(10, 5));
        let paging = paging.reduce(PagingAction::Swipe(Swipe::Next));
        assert_eq!(paging.current_index(), 1);
    }

    #[test]
    fn short_drag_is_a_tap() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(200.0);
        tracker.track(160.0);
        assert_eq!(tracker.finish(MIN_SWIPE_DISTANCE), Swipe::Tap);
        assert!(!tracker.take_swallowed_click());
    }

    #[test]
    fn press_without_move_is_a_tap() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(0.0);
        assert_eq!(tracker.finish(MIN_SWIPE_DISTANCE), Swipe::Tap);
    }

    #[test]
    fn swipe_swallows_exactly_one_click() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(100.0);
        tracker.track(300.0);
        assert_eq!(tracker.finish(MIN_SWIPE_DISTANCE), Swipe::Previous);
        assert!(tracker.take_swallowed_click());
        assert!(!tracker.take_swallowed_click());
    }

    #[test]
    fn new_gesture_clears_stale_swallow() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(300.0);
        tracker.track(100.0);
        tracker.finish(MIN_SWIPE_DISTANCE);
        tracker.begin(50.0);
        assert!(!tracker.take_swallowed_click());
    }

    #[test]
    fn moves_are_ignored_outside_a_gesture() {
        let mut tracker = SwipeTracker::default();
        tracker.track(400.0);
        tracker.begin(300.0);
        assert_eq!(tracker.finish(MIN_SWIPE_DISTANCE), Swipe::Tap);
    }

    #[test]
    fn cancelled_gesture_commits_nothing() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(300.0);
        tracker.track(10.0);
        tracker.cancel();
        assert_eq!(tracker.finish(MIN_SWIPE_DISTANCE), Swipe::Tap);
    }

    #[test]
    fn reducer_keeps_state_when_nothing_changes() {
        let paging = Rc::new(Paging::new(5, 5));
        let next = paging.clone().reduce(PagingAction::Advance);
        assert!(Rc::ptr_eq(&paging, &next));
    }

    #[test]
    fn track_moves_by_slide_plus_gap_share() {
        let mut paging = Paging::new(10, 5);
        paging.advance();
        paging.advance();
        assert_eq!(paging.track_transform(16.0), "translateX(calc(-2 * (20% + 3.2px)))");
        assert_eq!(paging.slide_basis(16.0), "flex: 0 0 calc(20% - 12.8px);");
    }
}
