use std::rc::Rc;
use yew::prelude::*;
use crate::settings;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "alert-success",
            ToastKind::Error => "alert-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "fas fa-check-circle",
            ToastKind::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub kind: ToastKind,
}

pub enum ToastAction {
    Show(Toast),
    Dismiss(usize),
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStack {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    // Every action applies to the latest stack, so an expiring toast never
    // takes newer ones with it.
    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Show(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|toast| toast.id != id),
        }
        Rc::new(ToastStack { toasts })
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    show: Callback<(String, ToastKind)>,
}

impl ToastContext {
    pub fn show_success(&self, message: String) {
        self.show.emit((message, ToastKind::Success));
    }

    pub fn show_error(&self, message: String) {
        self.show.emit((message, ToastKind::Error));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let stack = use_reducer(ToastStack::default);
    let next_id = use_mut_ref(|| 0usize);

    let show = {
        let dispatcher = stack.dispatcher();
        let next_id = next_id.clone();

        Callback::from(move |(message, kind): (String, ToastKind)| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                *next_id += 1;
                *next_id
            };
            log::trace!("Showing toast {}: {}", id, message);
            dispatcher.dispatch(ToastAction::Show(Toast { id, message, kind }));

            let dispatcher = dispatcher.clone();
            let duration = settings::get_settings().toast_duration_ms;
            gloo_timers::callback::Timeout::new(duration, move || {
                dispatcher.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        })
    };

    html! {
        <ContextProvider<ToastContext> context={ToastContext { show }}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                { for stack.toasts.iter().map(|toast| {
                    let on_close = {
                        let dispatcher = stack.dispatcher();
                        let id = toast.id;
                        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ToastAction::Dismiss(id)))
                    };

                    html! {
                        <div key={toast.id} class={classes!("alert", toast.kind.alert_class(), "shadow-lg")}>
                            <i class={toast.kind.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<ToastContext>>
    }
}
