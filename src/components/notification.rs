use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{TOAST_EXIT_MS, TOAST_LIFETIME_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn background(self) -> &'static str {
        match self {
            ToastKind::Success => "hsl(120, 70%, 50%)",
            ToastKind::Error => "hsl(0, 70%, 60%)",
            ToastKind::Info => "hsl(var(--accent-primary))",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "fas fa-check-circle",
            ToastKind::Error => "fas fa-exclamation-circle",
            ToastKind::Info => "fas fa-info-circle",
        }
    }

    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "notification-success",
            ToastKind::Error => "notification-error",
            ToastKind::Info => "notification-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
    pub leaving: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(ToastKind, String),
    /// Starts the exit transition.
    Dismiss(u32),
    Remove(u32),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();
        match action {
            ToastAction::Push(kind, message) => {
                state.toasts.push(Toast {
                    id: state.next_id,
                    kind,
                    message,
                    leaving: false,
                });
                state.next_id += 1;
            }
            ToastAction::Dismiss(id) => {
                match state.toasts.iter_mut().find(|toast| toast.id == id && !toast.leaving) {
                    Some(toast) => toast.leaving = true,
                    None => return self,
                }
            }
            ToastAction::Remove(id) => {
                let before = state.toasts.len();
                state.toasts.retain(|toast| toast.id != id);
                if state.toasts.len() == before {
                    return self;
                }
            }
        }
        Rc::new(state)
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

pub fn notify(toasts: &ToastContext, kind: ToastKind, message: impl Into<String>) {
    toasts.dispatch(ToastAction::Push(kind, message.into()));
}

fn toast_style(kind: ToastKind, leaving: bool) -> String {
    let (opacity, offset) = if leaving { (0, "100%") } else { (1, "0") };
    format!(
        "background: {}; opacity: {}; transform: translateX({});",
        kind.background(),
        opacity,
        offset
    )
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    toasts: ToastContext,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;
    let kind = props.toast.kind;
    let leaving = props.toast.leaving;

    // Auto-dismiss, then drop from the list once the exit transition is over.
    {
        let toasts = props.toasts.clone();
        use_effect_with_deps(
            move |leaving| {
                let timeout = if *leaving {
                    Timeout::new(TOAST_EXIT_MS, move || toasts.dispatch(ToastAction::Remove(id)))
                } else {
                    Timeout::new(TOAST_LIFETIME_MS, move || toasts.dispatch(ToastAction::Dismiss(id)))
                };
                move || drop(timeout)
            },
            leaving,
        );
    }

    let onclick = {
        let toasts = props.toasts.clone();
        Callback::from(move |_: MouseEvent| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class={classes!("notification", kind.class())} style={toast_style(kind, leaving)} {onclick}>
            <div class="notification-body">
                <i class={kind.icon()}></i>
                <span>{ &props.toast.message }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toasts.clone()}>
            <style>
                {r#"
                    @keyframes toastIn {
                        from { opacity: 0; transform: translateX(100%); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    .notification-stack {
                        position: fixed;
                        top: 20px;
                        right: 20px;
                        z-index: 10000;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .notification {
                        padding: 1rem 1.5rem;
                        border-radius: 8px;
                        color: white;
                        font-weight: 500;
                        max-width: 400px;
                        cursor: pointer;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);
                        transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
                        animation: toastIn 0.3s cubic-bezier(0.4, 0, 0.2, 1);
                    }
                    .notification-body {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                "#}
            </style>
            { props.children.clone() }
            <div class="notification-stack">
                { for toasts.toasts.iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} toasts={toasts.clone()} />
                }) }
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: Rc<ToastState>, action: ToastAction) -> Rc<ToastState> {
        state.reduce(action)
    }

    #[test]
    fn test_push_assigns_increasing_ids() {
        let state = Rc::new(ToastState::default());
        let state = reduce(state, ToastAction::Push(ToastKind::Success, "sent".to_string()));
        let state = reduce(state, ToastAction::Push(ToastKind::Error, "failed".to_string()));

        let ids: Vec<u32> = state.toasts.iter().map(|toast| toast.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert!(state.toasts.iter().all(|toast| !toast.leaving));
    }

    #[test]
    fn test_dismiss_then_remove() {
        let state = Rc::new(ToastState::default());
        let state = reduce(state, ToastAction::Push(ToastKind::Info, "hello".to_string()));

        let state = reduce(state, ToastAction::Dismiss(0));
        assert!(state.toasts[0].leaving);

        let state = reduce(state, ToastAction::Remove(0));
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn test_repeat_dismiss_and_unknown_ids_are_no_ops() {
        let state = Rc::new(ToastState::default());
        let state = reduce(state, ToastAction::Push(ToastKind::Info, "hello".to_string()));
        let dismissed = reduce(state, ToastAction::Dismiss(0));

        let again = reduce(Rc::clone(&dismissed), ToastAction::Dismiss(0));
        assert!(Rc::ptr_eq(&dismissed, &again));

        let unknown = reduce(Rc::clone(&dismissed), ToastAction::Remove(42));
        assert!(Rc::ptr_eq(&dismissed, &unknown));
    }

    #[test]
    fn test_toast_style_for_leaving() {
        assert_eq!(
            toast_style(ToastKind::Error, true),
            "background: hsl(0, 70%, 60%); opacity: 0; transform: translateX(100%);"
        );
        assert_eq!(
            toast_style(ToastKind::Success, false),
            "background: hsl(120, 70%, 50%); opacity: 1; transform: translateX(0);"
        );
    }
}
