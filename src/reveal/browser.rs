use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList,
};

use super::{
    Dom, IntersectionCallback, IntersectionEntry, IntersectionSource, ObserveOptions,
    RevealCoordinator, Scheduler, Subscription, Task, TimerHandle,
};
use crate::config::RevealConfig;
use crate::error::{self, SiteError};

#[derive(Clone)]
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn from_window() -> Result<Self, SiteError> {
        Ok(Self::new(error::document()?))
    }
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl Dom for BrowserDom {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, within: &Element, selector: &str) -> Vec<Element> {
        match within.query_selector_all(selector) {
            Ok(list) => elements(list),
            Err(err) => {
                warn!("Bad selector {}: {}", selector, SiteError::from(err));
                Vec::new()
            }
        }
    }

    fn query_document(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => elements(list),
            Err(err) => {
                warn!("Bad selector {}: {}", selector, SiteError::from(err));
                Vec::new()
            }
        }
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) -> Result<(), SiteError> {
        let html = element
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| SiteError::Js(format!("<{}> has no inline style", element.tag_name())))?;
        html.style().set_property(property, value)?;
        Ok(())
    }

    fn add_class(&self, element: &Element, class: &str) -> Result<(), SiteError> {
        element.class_list().add_1(class)?;
        Ok(())
    }
}

#[derive(Clone, Copy, Default)]
pub struct BrowserIntersectionSource;

struct ObserverSubscription {
    observer: IntersectionObserver,
    // Owned here so the JS side can keep calling it until disconnect.
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    active: bool,
}

impl Subscription for ObserverSubscription {
    fn cancel(&mut self) {
        if self.active {
            self.observer.disconnect();
            self.active = false;
        }
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl IntersectionSource<Element> for BrowserIntersectionSource {
    fn observe(
        &self,
        targets: &[Element],
        options: &ObserveOptions,
        mut callback: IntersectionCallback<Element>,
    ) -> Result<Box<dyn Subscription>, SiteError> {
        let closure = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| IntersectionEntry {
                    target: entry.target(),
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                })
                .collect();
            callback(entries);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        if let Some(margin) = &options.root_margin {
            init.set_root_margin(margin);
        }

        let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
        for target in targets {
            observer.observe(target);
        }

        Ok(Box::new(ObserverSubscription {
            observer,
            _callback: closure,
            active: true,
        }))
    }
}

#[derive(Clone, Copy, Default)]
pub struct TimeoutScheduler;

struct TimeoutHandle(Option<Timeout>);

impl TimerHandle for TimeoutHandle {
    fn cancel(&mut self) {
        if let Some(timeout) = self.0.take() {
            let _ = timeout.cancel();
        }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> Box<dyn TimerHandle> {
        Box::new(TimeoutHandle(Some(Timeout::new(delay_ms, task))))
    }
}

/// Builds a coordinator for the live document and starts watching.
pub fn start() -> Result<RevealCoordinator<BrowserDom>, SiteError> {
    let document = error::document()?;
    let config = RevealConfig::load(&document);
    let mut coordinator = RevealCoordinator::new(
        BrowserDom::new(document),
        Rc::new(BrowserIntersectionSource),
        Rc::new(TimeoutScheduler),
    );
    coordinator.setup(&config.regions);
    coordinator.observe_class_reveals(&config.fade_in);
    for region in &config.regions {
        debug!("#{}: {:?}", region.container, coordinator.phase(&region.container));
    }
    Ok(coordinator)
}
