pub trait Clock {
    fn now_ms(&self) -> f64;
}

#[derive(Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        web_sys::js_sys::Date::now()
    }
}

/// Admits at most one call per `interval_ms`. Calls arriving too soon after
/// the last admitted one are dropped, not deferred.
pub struct Throttle<C: Clock> {
    clock: C,
    interval_ms: f64,
    last_admitted: Option<f64>,
}

impl<C: Clock> Throttle<C> {
    pub fn new(interval_ms: f64, clock: C) -> Self {
        Self {
            clock,
            interval_ms,
            last_admitted: None,
        }
    }

    pub fn admit(&mut self) -> bool {
        let now = self.clock.now_ms();
        match self.last_admitted {
            Some(last) if now - last < self.interval_ms => false,
            _ => {
                self.last_admitted = Some(now);
                true
            }
        }
    }
}

pub fn throttle<A, F, C>(mut callback: F, interval_ms: f64, clock: C) -> impl FnMut(A)
where
    F: FnMut(A),
    C: Clock,
{
    let mut gate = Throttle::new(interval_ms, clock);
    move |arg| {
        if gate.admit() {
            callback(arg);
        }
    }
}
