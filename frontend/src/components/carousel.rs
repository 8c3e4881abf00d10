use log::warn;
use yew::prelude::*;

use crate::config;
use crate::timer::{BrowserScheduler, Scheduler};

/// Only the slide-in animation reads this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotator {
    index: usize,
    len: usize,
    direction: Direction,
}

impl Rotator {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            direction: Direction::Forward,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.direction = Direction::Forward;
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.direction = Direction::Backward;
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Out of range targets leave the position alone.
    pub fn go_to(&mut self, target: usize) -> bool {
        if target >= self.len {
            warn!("Carousel slide {} out of range (len {})", target, self.len);
            return false;
        }
        self.direction = if target > self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.index = target;
        true
    }

    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }
}

pub fn should_tick(auto_play: bool, paused: bool, len: usize) -> bool {
    auto_play && !paused && len > 1
}

// One pending step at a time. Every restart drops the previous countdown, so a
// manual step is never followed straight away by an automatic one.
pub struct AutoAdvance<S: Scheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> AutoAdvance<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    pub fn restart(&mut self, active: bool, interval_ms: u32, step: impl FnOnce() + 'static) {
        self.pending = None;
        if active {
            self.pending = Some(self.scheduler.schedule(interval_ms, Box::new(step)));
        }
    }

    pub fn stop(&mut self) {
        self.pending = None;
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }
}

pub enum CarouselMsg {
    Next,
    Previous,
    GoTo(usize),
    Pause,
    Resume,
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub children: Children,
    #[prop_or_default]
    pub auto_play: bool,
    #[prop_or(config::CAROUSEL_INTERVAL_MS)]
    pub interval_ms: u32,
    #[prop_or_default]
    pub label: AttrValue,
}

pub struct Carousel {
    rotator: Rotator,
    paused: bool,
    ticker: AutoAdvance<BrowserScheduler>,
}

impl Carousel {
    fn restart_ticker(&mut self, ctx: &Context<Self>) {
        let props = ctx.props();
        let link = ctx.link().clone();
        self.ticker.restart(
            should_tick(props.auto_play, self.paused, self.rotator.len()),
            props.interval_ms,
            move || link.send_message(CarouselMsg::Next),
        );
    }
}

impl Component for Carousel {
    type Message = CarouselMsg;
    type Properties = CarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut carousel = Self {
            rotator: Rotator::new(ctx.props().children.len()),
            paused: false,
            ticker: AutoAdvance::new(BrowserScheduler),
        };
        carousel.restart_ticker(ctx);
        carousel
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CarouselMsg::Next => self.rotator.next(),
            CarouselMsg::Previous => self.rotator.previous(),
            CarouselMsg::GoTo(index) => {
                if !self.rotator.go_to(index) {
                    return false;
                }
            }
            CarouselMsg::Pause => {
                if self.paused {
                    return false;
                }
                self.paused = true;
            }
            CarouselMsg::Resume => {
                if !self.paused {
                    return false;
                }
                self.paused = false;
            }
        }
        self.restart_ticker(ctx);
        true
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.rotator.resize(ctx.props().children.len());
        self.restart_ticker(ctx);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        let current = self.rotator.index();
        let slide_class = match self.rotator.direction() {
            Direction::Forward => "carousel__slide slide-in-forward",
            Direction::Backward => "carousel__slide slide-in-backward",
        };

        html! {
            <div
                class="carousel"
                aria-roledescription="carousel"
                aria-label={props.label.clone()}
                onmouseenter={link.callback(|_: MouseEvent| CarouselMsg::Pause)}
                onmouseleave={link.callback(|_: MouseEvent| CarouselMsg::Resume)}
                onfocusin={link.callback(|_: FocusEvent| CarouselMsg::Pause)}
                onfocusout={link.callback(|_: FocusEvent| CarouselMsg::Resume)}
            >
                <div class="carousel__viewport" aria-live={if self.ticker.is_running() { "off" } else { "polite" }}>
                    <button class="carousel__arrow carousel__arrow--prev" aria-label="Previous Slide"
                        onclick={link.callback(|_: MouseEvent| CarouselMsg::Previous)}>
                        {"‹"}
                    </button>
                    { for props.children.iter().nth(current).map(|slide| html! {
                        <div key={current} class={slide_class}>{ slide }</div>
                    }) }
                    <button class="carousel__arrow carousel__arrow--next" aria-label="Next Slide"
                        onclick={link.callback(|_: MouseEvent| CarouselMsg::Next)}>
                        {"›"}
                    </button>
                </div>
                <div class="carousel__dots">
                    { for (0..self.rotator.len()).map(|i| html! {
                        <button
                            key={i}
                            class={classes!("carousel__dot", (i == current).then(|| "active"))}
                            aria-label={format!("Go to slide {}", i + 1)}
                            onclick={link.callback(move |_: MouseEvent| CarouselMsg::GoTo(i))}
                        />
                    }) }
                </div>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.ticker.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::manual::ManualScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    // Mirrors the component: each automatic step advances the ring and re-arms.
    fn arm(ticker: &Rc<RefCell<AutoAdvance<ManualScheduler>>>, rotator: &Rc<RefCell<Rotator>>, paused: bool) {
        let active = should_tick(true, paused, rotator.borrow().len());
        let next_ticker = ticker.clone();
        let next_rotator = rotator.clone();
        ticker.borrow_mut().restart(active, 5_000, move || {
            next_rotator.borrow_mut().next();
            arm(&next_ticker, &next_rotator, false);
        });
    }

    fn ring(len: usize) -> (ManualScheduler, Rc<RefCell<AutoAdvance<ManualScheduler>>>, Rc<RefCell<Rotator>>) {
        let clock = ManualScheduler::new();
        let ticker = Rc::new(RefCell::new(AutoAdvance::new(clock.clone())));
        let rotator = Rc::new(RefCell::new(Rotator::new(len)));
        (clock, ticker, rotator)
    }

    #[test]
    fn ticks_only_when_enabled_unpaused_and_worth_rotating() {
        assert!(should_tick(true, false, 2));
        assert!(!should_tick(false, false, 5));
        assert!(!should_tick(true, true, 5));
        assert!(!should_tick(true, false, 1));
        assert!(!should_tick(true, false, 0));
    }

    #[test]
    fn auto_advance_steps_every_interval() {
        let (clock, ticker, rotator) = ring(3);
        arm(&ticker, &rotator, false);

        clock.advance(4_999);
        assert_eq!(rotator.borrow().index(), 0);
        clock.advance(1);
        assert_eq!(rotator.borrow().index(), 1);
        clock.advance(10_000);
        assert_eq!(rotator.borrow().index(), 0);
    }

    #[test]
    fn manual_step_restarts_the_countdown() {
        let (clock, ticker, rotator) = ring(4);
        arm(&ticker, &rotator, false);

        clock.advance(4_000);
        rotator.borrow_mut().go_to(2);
        arm(&ticker, &rotator, false);
        clock.advance(4_000);
        assert_eq!(rotator.borrow().index(), 2);
        clock.advance(1_000);
        assert_eq!(rotator.borrow().index(), 3);
    }

    #[test]
    fn pausing_cancels_the_pending_step() {
        let (clock, ticker, rotator) = ring(3);
        arm(&ticker, &rotator, false);
        arm(&ticker, &rotator, true);

        assert!(!ticker.borrow().is_running());
        assert_eq!(clock.pending(), 0);
        clock.advance(20_000);
        assert_eq!(rotator.borrow().index(), 0);

        arm(&ticker, &rotator, false);
        clock.advance(5_000);
        assert_eq!(rotator.borrow().index(), 1);
    }

    #[test]
    fn stopping_on_teardown_drops_the_timer() {
        let (clock, ticker, rotator) = ring(3);
        arm(&ticker, &rotator, false);
        assert_eq!(clock.pending(), 1);

        ticker.borrow_mut().stop();
        assert_eq!(clock.pending(), 0);
        clock.advance(60_000);
        assert_eq!(rotator.borrow().index(), 0);
    }

    #[test]
    fn n_steps_forward_return_to_start() {
        for len in 1..6 {
            let mut rotator = Rotator::new(len);
            rotator.go_to(len / 2);
            let start = rotator.index();
            for _ in 0..len {
                rotator.next();
            }
            assert_eq!(rotator.index(), start, "len {}", len);
        }
    }

    #[test]
    fn previous_undoes_next() {
        let mut rotator = Rotator::new(4);
        for start in 0..4 {
            rotator.go_to(start);
            rotator.next();
            rotator.previous();
            assert_eq!(rotator.index(), start);
        }
    }

    #[test]
    fn wraps_in_both_directions() {
        let mut rotator = Rotator::new(3);
        rotator.previous();
        assert_eq!(rotator.index(), 2);
        assert_eq!(rotator.direction(), Direction::Backward);
        rotator.next();
        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.direction(), Direction::Forward);
    }

    #[test]
    fn go_to_sets_direction_and_rejects_out_of_range() {
        let mut rotator = Rotator::new(5);
        assert!(rotator.go_to(3));
        assert_eq!(rotator.direction(), Direction::Forward);
        assert!(rotator.go_to(1));
        assert_eq!(rotator.direction(), Direction::Backward);

        assert!(!rotator.go_to(5));
        assert_eq!(rotator.index(), 1);
    }

    #[test]
    fn empty_ring_stays_put() {
        let mut rotator = Rotator::new(0);
        rotator.next();
        rotator.previous();
        assert_eq!(rotator.index(), 0);
        assert!(!rotator.go_to(0));
    }

    #[test]
    fn shrinking_resets_a_stale_index() {
        let mut rotator = Rotator::new(6);
        rotator.go_to(5);
        rotator.resize(3);
        assert_eq!(rotator.index(), 0);
        rotator.resize(8);
        assert_eq!(rotator.index(), 0);
    }
}
