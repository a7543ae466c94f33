//! In-memory stand-ins for the browser seams, driven by hand from tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{
    Dom, IntersectionCallback, IntersectionEntry, IntersectionSource, ObserveOptions, Scheduler,
    Subscription, Task, TimerHandle,
};
use crate::error::SiteError;

struct Node {
    tag: String,
    id: Option<String>,
    classes: RefCell<Vec<String>>,
    style: RefCell<Vec<(String, String)>>,
    children: RefCell<Vec<FakeElement>>,
    attached: Cell<bool>,
}

/// A tiny DOM node. Equality is identity.
#[derive(Clone)]
pub struct FakeElement(Rc<Node>);

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}", self.0.tag)?;
        if let Some(id) = &self.0.id {
            write!(f, " id={}", id)?;
        }
        write!(f, " class={:?}>", self.0.classes.borrow())
    }
}

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        FakeElement(Rc::new(Node {
            tag: tag.to_string(),
            id: None,
            classes: RefCell::new(Vec::new()),
            style: RefCell::new(Vec::new()),
            children: RefCell::new(Vec::new()),
            attached: Cell::new(true),
        }))
    }

    pub fn with_id(self, id: &str) -> Self {
        let node = Rc::try_unwrap(self.0).unwrap_or_else(|_| panic!("with_id on a shared element"));
        FakeElement(Rc::new(Node { id: Some(id.to_string()), ..node }))
    }

    pub fn with_class(self, class: &str) -> Self {
        self.0.classes.borrow_mut().push(class.to_string());
        self
    }

    pub fn append(&self, child: &FakeElement) {
        self.0.children.borrow_mut().push(child.clone());
    }

    /// Simulates removal from the document; later style writes fail.
    pub fn detach(&self) {
        self.0.attached.set(false);
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0
            .style
            .borrow()
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.clone())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().iter().any(|c| c == class)
    }

    fn matches(&self, selector: &str) -> bool {
        selector.split(',').map(str::trim).any(|simple| {
            if let Some(class) = simple.strip_prefix('.') {
                self.has_class(class)
            } else if let Some(id) = simple.strip_prefix('#') {
                self.0.id.as_deref() == Some(id)
            } else {
                self.0.tag == simple
            }
        })
    }

    fn descendants(&self, out: &mut Vec<FakeElement>) {
        for child in self.0.children.borrow().iter() {
            out.push(child.clone());
            child.descendants(out);
        }
    }
}

#[derive(Clone)]
pub struct FakeDom {
    root: FakeElement,
}

impl FakeDom {
    pub fn new(root: FakeElement) -> Self {
        Self { root }
    }
}

impl Dom for FakeDom {
    type Element = FakeElement;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        let mut all = Vec::new();
        self.root.descendants(&mut all);
        all.into_iter()
            .find(|element| element.0.attached.get() && element.0.id.as_deref() == Some(id))
    }

    fn query_all(&self, within: &FakeElement, selector: &str) -> Vec<FakeElement> {
        let mut all = Vec::new();
        within.descendants(&mut all);
        all.retain(|element| element.matches(selector));
        all
    }

    fn query_document(&self, selector: &str) -> Vec<FakeElement> {
        self.query_all(&self.root, selector)
    }

    fn set_style(&self, element: &FakeElement, property: &str, value: &str) -> Result<(), SiteError> {
        if !element.0.attached.get() {
            return Err(SiteError::Js(format!("{:?} is detached", element)));
        }
        let mut style = element.0.style.borrow_mut();
        match style.iter_mut().find(|(name, _)| name == property) {
            Some(entry) => entry.1 = value.to_string(),
            None => style.push((property.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn add_class(&self, element: &FakeElement, class: &str) -> Result<(), SiteError> {
        if !element.has_class(class) {
            element.0.classes.borrow_mut().push(class.to_string());
        }
        Ok(())
    }
}

struct Observation {
    targets: Vec<FakeElement>,
    options: ObserveOptions,
    callback: Rc<RefCell<IntersectionCallback<FakeElement>>>,
    active: Rc<Cell<bool>>,
}

/// Records subscriptions and lets tests deliver entries to them.
#[derive(Clone, Default)]
pub struct FakeIntersectionSource {
    observations: Rc<RefCell<Vec<Observation>>>,
    on_observe: Option<f64>,
}

struct FakeSubscription {
    active: Rc<Cell<bool>>,
}

impl Subscription for FakeSubscription {
    fn cancel(&mut self) {
        self.active.set(false);
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl FakeIntersectionSource {
    /// A source that reports every target at `ratio` before `observe`
    /// returns, the way a browser may for elements already on screen.
    pub fn delivering_on_observe(ratio: f64) -> Self {
        Self {
            on_observe: Some(ratio),
            ..Self::default()
        }
    }

    pub fn emit(&self, target: &FakeElement, ratio: f64) {
        self.deliver(target, ratio > 0.0, ratio);
    }

    pub fn emit_leaving(&self, target: &FakeElement) {
        self.deliver(target, false, 0.0);
    }

    fn deliver(&self, target: &FakeElement, is_intersecting: bool, ratio: f64) {
        // Release the borrow before calling out: callbacks cancel subscriptions.
        let callbacks: Vec<_> = self
            .observations
            .borrow()
            .iter()
            .filter(|observation| observation.active.get() && observation.targets.contains(target))
            .map(|observation| (Rc::clone(&observation.callback), Rc::clone(&observation.active)))
            .collect();

        for (callback, active) in callbacks {
            if active.get() {
                let entry = IntersectionEntry {
                    target: target.clone(),
                    is_intersecting,
                    ratio,
                };
                let mut callback = callback.borrow_mut();
                (*callback)(vec![entry]);
            }
        }
    }

    pub fn active_count(&self) -> usize {
        self.observations
            .borrow()
            .iter()
            .filter(|observation| observation.active.get())
            .count()
    }

    pub fn observed_thresholds(&self) -> Vec<f64> {
        self.observations
            .borrow()
            .iter()
            .map(|observation| observation.options.threshold)
            .collect()
    }

    pub fn observed_root_margins(&self) -> Vec<Option<String>> {
        self.observations
            .borrow()
            .iter()
            .map(|observation| observation.options.root_margin.clone())
            .collect()
    }
}

impl IntersectionSource<FakeElement> for FakeIntersectionSource {
    fn observe(
        &self,
        targets: &[FakeElement],
        options: &ObserveOptions,
        callback: IntersectionCallback<FakeElement>,
    ) -> Result<Box<dyn Subscription>, SiteError> {
        let active = Rc::new(Cell::new(true));
        self.observations.borrow_mut().push(Observation {
            targets: targets.to_vec(),
            options: options.clone(),
            callback: Rc::new(RefCell::new(callback)),
            active: Rc::clone(&active),
        });
        if let Some(ratio) = self.on_observe {
            for target in targets {
                self.emit(target, ratio);
            }
        }
        Ok(Box::new(FakeSubscription { active }))
    }
}

struct Pending {
    due: u64,
    seq: u64,
    task: Option<Task>,
    cancelled: Rc<Cell<bool>>,
}

#[derive(Default)]
struct Clock {
    now: u64,
    next_seq: u64,
    delays: Vec<u32>,
    pending: Vec<Pending>,
}

/// Virtual-time scheduler. Nothing runs until [`FakeScheduler::advance`].
#[derive(Clone, Default)]
pub struct FakeScheduler {
    clock: Rc<RefCell<Clock>>,
}

struct FakeTimer {
    cancelled: Rc<Cell<bool>>,
}

impl TimerHandle for FakeTimer {
    fn cancel(&mut self) {
        self.cancelled.set(true);
    }
}

impl FakeScheduler {
    /// Every delay ever passed to `schedule`, in call order.
    pub fn scheduled_delays(&self) -> Vec<u32> {
        self.clock.borrow().delays.clone()
    }

    /// Moves virtual time forward, running due tasks in (due, scheduled) order.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let candidate = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, pending)| pending.due <= target)
                    .min_by_key(|(_, pending)| (pending.due, pending.seq))
                    .map(|(index, _)| index);
                candidate.map(|index| {
                    let pending = clock.pending.remove(index);
                    clock.now = pending.due;
                    pending
                })
            };
            let Some(mut pending) = next else { break };
            if !pending.cancelled.get() {
                if let Some(task) = pending.task.take() {
                    task();
                }
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Scheduler for FakeScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> Box<dyn TimerHandle> {
        let cancelled = Rc::new(Cell::new(false));
        let mut clock = self.clock.borrow_mut();
        let seq = clock.next_seq;
        clock.next_seq += 1;
        let due = clock.now + u64::from(delay_ms);
        clock.delays.push(delay_ms);
        clock.pending.push(Pending {
            due,
            seq,
            task: Some(task),
            cancelled: Rc::clone(&cancelled),
        });
        Box::new(FakeTimer { cancelled })
    }
}
