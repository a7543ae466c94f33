//! Scroll-triggered reveal of page regions.
//!
//! A [`RevealCoordinator`] hides the children of every configured
//! [`WatchRegion`] up front, then watches each region's container. The first
//! time a container crosses its visibility threshold the children are
//! revealed one after another, `stagger_ms` apart in document order, and the
//! region's subscription is cancelled so later scrolling never replays it.
//!
//! The coordinator only talks to the page through three seams:
//! - [`Dom`] for element lookup and inline style / class mutation
//! - [`IntersectionSource`] for viewport-intersection subscriptions
//! - [`Scheduler`] for delayed, cancellable callbacks
//!
//! `browser` implements them on top of `web_sys` and `gloo_timers`; the
//! `testing` module implements them in memory.

mod browser;
#[cfg(test)]
pub mod testing;

pub use browser::{start, BrowserDom};

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, info, warn};
use serde::Deserialize;

use crate::error::SiteError;

/// Float rounding slack only; a ratio visibly below the threshold never fires.
const RATIO_EPSILON: f64 = 1e-6;

pub trait Dom: Clone + 'static {
    type Element: Clone + 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Descendants of `within` matching `selector`, in document order.
    fn query_all(&self, within: &Self::Element, selector: &str) -> Vec<Self::Element>;

    fn query_document(&self, selector: &str) -> Vec<Self::Element>;

    fn set_style(&self, element: &Self::Element, property: &str, value: &str) -> Result<(), SiteError>;

    fn add_class(&self, element: &Self::Element, class: &str) -> Result<(), SiteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObserveOptions {
    pub threshold: f64,
    pub root_margin: Option<String>,
}

impl ObserveOptions {
    pub fn threshold(threshold: f64) -> Self {
        Self { threshold, root_margin: None }
    }
}

#[derive(Debug, Clone)]
pub struct IntersectionEntry<E> {
    pub target: E,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl<E> IntersectionEntry<E> {
    pub fn satisfies(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio + RATIO_EPSILON >= threshold
    }
}

pub type IntersectionCallback<E> = Box<dyn FnMut(Vec<IntersectionEntry<E>>)>;

pub trait IntersectionSource<E> {
    fn observe(
        &self,
        targets: &[E],
        options: &ObserveOptions,
        callback: IntersectionCallback<E>,
    ) -> Result<Box<dyn Subscription>, SiteError>;
}

pub trait Subscription {
    /// Stops delivery of further entries. Safe to call from inside the
    /// subscription's own callback and safe to call twice.
    fn cancel(&mut self);

    fn is_active(&self) -> bool;
}

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> Box<dyn TimerHandle>;
}

pub trait TimerHandle {
    fn cancel(&mut self);
}

/// Inline style declarations applied together as one visual state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisualState {
    declarations: Vec<(&'static str, String)>,
}

impl VisualState {
    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.declarations.push((property, value.into()));
        self
    }

    pub fn declarations(&self) -> &[(&'static str, String)] {
        &self.declarations
    }

    pub fn apply<D: Dom>(&self, dom: &D, element: &D::Element) -> Result<(), SiteError> {
        for (property, value) in self.declarations() {
            dom.set_style(element, property, value)?;
        }
        Ok(())
    }
}

fn default_revealed_transform() -> String {
    "translateY(0)".to_string()
}

fn default_transition() -> String {
    "all 0.6s cubic-bezier(0.4, 0, 0.2, 1)".to_string()
}

/// A container whose children cascade into view the first time it is seen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WatchRegion {
    /// Element id of the container.
    pub container: String,
    /// Selector for the children to reveal, relative to the container.
    pub children: String,
    /// Fraction of the container that must be on screen, `0.0..=1.0`.
    pub threshold: f64,
    pub stagger_ms: u32,
    pub hidden_transform: String,
    #[serde(default = "default_revealed_transform")]
    pub revealed_transform: String,
    #[serde(default = "default_transition")]
    pub transition: String,
}

impl WatchRegion {
    pub fn new(
        container: impl Into<String>,
        children: impl Into<String>,
        threshold: f64,
        stagger_ms: u32,
        hidden_transform: impl Into<String>,
    ) -> Self {
        Self {
            container: container.into(),
            children: children.into(),
            threshold,
            stagger_ms,
            hidden_transform: hidden_transform.into(),
            revealed_transform: default_revealed_transform(),
            transition: default_transition(),
        }
    }

    pub fn revealed_transform(mut self, transform: impl Into<String>) -> Self {
        self.revealed_transform = transform.into();
        self
    }

    pub fn transition(mut self, transition: impl Into<String>) -> Self {
        self.transition = transition.into();
        self
    }

    pub fn hidden_state(&self) -> VisualState {
        VisualState::default()
            .with("opacity", "0")
            .with("transform", self.hidden_transform.as_str())
            .with("transition", self.transition.as_str())
    }

    pub fn revealed_state(&self) -> VisualState {
        VisualState::default()
            .with("opacity", "1")
            .with("transform", self.revealed_transform.as_str())
    }
}

/// Elements that get a class once they scroll into view.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassReveal {
    pub selector: String,
    pub class: String,
    pub threshold: f64,
    #[serde(default)]
    pub root_margin: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionPhase {
    /// Subscribed, waiting for the first qualifying crossing.
    Watching,
    /// Reveals scheduled and the subscription cancelled.
    Fired,
    /// Released by [`RevealCoordinator::teardown`].
    Disconnected,
}

struct Watcher<E> {
    region: WatchRegion,
    container: E,
    phase: RegionPhase,
    subscription: Option<Box<dyn Subscription>>,
    pending: Vec<Box<dyn TimerHandle>>,
}

impl<E> Watcher<E> {
    fn cancel_subscription(&mut self) {
        if let Some(subscription) = self.subscription.as_mut().filter(|s| s.is_active()) {
            subscription.cancel();
        }
    }
}

pub struct RevealCoordinator<D: Dom> {
    dom: D,
    intersections: Rc<dyn IntersectionSource<D::Element>>,
    scheduler: Rc<dyn Scheduler>,
    watchers: Vec<Rc<RefCell<Watcher<D::Element>>>>,
    class_reveals: Vec<Box<dyn Subscription>>,
}

impl<D: Dom> RevealCoordinator<D> {
    pub fn new(
        dom: D,
        intersections: Rc<dyn IntersectionSource<D::Element>>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self {
            dom,
            intersections,
            scheduler,
            watchers: Vec::new(),
            class_reveals: Vec::new(),
        }
    }

    pub fn setup(&mut self, regions: &[WatchRegion]) {
        for region in regions {
            if let Err(err) = self.watch(region) {
                warn!("Could not watch #{}: {}", region.container, err);
            }
        }
        info!("Reveal coordinator watching {} region(s)", self.watcher_count());
    }

    fn watch(&mut self, region: &WatchRegion) -> Result<(), SiteError> {
        let Some(container) = self.dom.element_by_id(&region.container) else {
            debug!("Skipping #{}: not in the document", region.container);
            return Ok(());
        };

        // Hide before subscribing so nothing flashes in its final state.
        let hidden = region.hidden_state();
        for child in self.dom.query_all(&container, &region.children) {
            if let Err(err) = hidden.apply(&self.dom, &child) {
                warn!("Failed to hide child of #{}: {}", region.container, err);
            }
        }

        let watcher = Rc::new(RefCell::new(Watcher {
            region: region.clone(),
            container: container.clone(),
            phase: RegionPhase::Watching,
            subscription: None,
            pending: Vec::new(),
        }));

        let callback = {
            let watcher: Weak<RefCell<Watcher<D::Element>>> = Rc::downgrade(&watcher);
            let dom = self.dom.clone();
            let scheduler = Rc::clone(&self.scheduler);
            Box::new(move |entries: Vec<IntersectionEntry<D::Element>>| {
                let Some(watcher) = watcher.upgrade() else {
                    return;
                };
                let threshold = watcher.borrow().region.threshold;
                if entries.iter().any(|entry| entry.satisfies(threshold)) {
                    fire(&watcher, &dom, scheduler.as_ref());
                }
            }) as IntersectionCallback<D::Element>
        };

        let subscription = self.intersections.observe(
            std::slice::from_ref(&container),
            &ObserveOptions::threshold(region.threshold),
            callback,
        )?;

        {
            let mut watcher = watcher.borrow_mut();
            watcher.subscription = Some(subscription);
            if watcher.phase != RegionPhase::Watching {
                // Fired synchronously while observe() was still running.
                watcher.cancel_subscription();
            }
        }
        self.watchers.push(watcher);
        Ok(())
    }

    /// Adds `reveal.class` to each matching element as it scrolls into view.
    pub fn observe_class_reveals(&mut self, reveal: &ClassReveal) {
        let targets = self.dom.query_document(&reveal.selector);
        if targets.is_empty() {
            debug!("No elements match {}", reveal.selector);
            return;
        }

        let dom = self.dom.clone();
        let class = reveal.class.clone();
        let callback = Box::new(move |entries: Vec<IntersectionEntry<D::Element>>| {
            for entry in entries.iter().filter(|entry| entry.is_intersecting) {
                if let Err(err) = dom.add_class(&entry.target, &class) {
                    warn!("Failed to add class {}: {}", class, err);
                }
            }
        }) as IntersectionCallback<D::Element>;

        let options = ObserveOptions {
            threshold: reveal.threshold,
            root_margin: reveal.root_margin.clone(),
        };
        match self.intersections.observe(&targets, &options, callback) {
            Ok(subscription) => self.class_reveals.push(subscription),
            Err(err) => warn!("Could not observe {}: {}", reveal.selector, err),
        }
    }

    pub fn phase(&self, container: &str) -> Option<RegionPhase> {
        self.watchers
            .iter()
            .map(|watcher| watcher.borrow())
            .find(|watcher| watcher.region.container == container)
            .map(|watcher| watcher.phase)
    }

    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }

    /// Releases every subscription and cancels reveals that have not run yet.
    pub fn teardown(&mut self) {
        for watcher in self.watchers.drain(..) {
            let mut watcher = watcher.borrow_mut();
            watcher.cancel_subscription();
            watcher.subscription = None;
            for mut timer in watcher.pending.drain(..) {
                timer.cancel();
            }
            watcher.phase = RegionPhase::Disconnected;
        }
        for mut subscription in self.class_reveals.drain(..) {
            subscription.cancel();
        }
        debug!("Reveal coordinator torn down");
    }
}

fn fire<D: Dom>(watcher: &Rc<RefCell<Watcher<D::Element>>>, dom: &D, scheduler: &dyn Scheduler) {
    let mut watcher = watcher.borrow_mut();
    if watcher.phase != RegionPhase::Watching {
        return;
    }

    let children = dom.query_all(&watcher.container, &watcher.region.children);
    let revealed = watcher.region.revealed_state();
    let stagger_ms = watcher.region.stagger_ms;
    info!("Revealing #{} ({} children)", watcher.region.container, children.len());

    for (index, child) in children.into_iter().enumerate() {
        let delay_ms = stagger_ms.saturating_mul(index as u32);
        let dom = dom.clone();
        let revealed = revealed.clone();
        let timer = scheduler.schedule(
            delay_ms,
            Box::new(move || {
                if let Err(err) = revealed.apply(&dom, &child) {
                    warn!("Failed to reveal element: {}", err);
                }
            }),
        );
        watcher.pending.push(timer);
    }

    watcher.phase = RegionPhase::Fired;
    watcher.cancel_subscription();
}
