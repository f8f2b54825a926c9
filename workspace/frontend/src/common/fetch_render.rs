use yew::prelude::*;
use crate::hooks::FetchState;
use super::loading::{Loading, LoadingSize};
use super::error::ErrorDisplay;

/// Callbacks compare by identity, so a parent that rebuilds `on_retry` with
/// fresh captures hands the new one down.
#[derive(Properties, PartialEq)]
pub struct FetchRenderProps<T: Clone + PartialEq + 'static> {
    pub state: FetchState<T>,
    pub render: Callback<T, Html>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_default]
    pub loading_text: Option<String>,
}

/// Component that handles rendering based on FetchState
/// - NotStarted: renders nothing
/// - Loading: shows loading spinner
/// - Error: shows error display with optional retry
/// - Success: calls render callback with data
#[function_component(FetchRender)]
pub fn fetch_render<T>(props: &FetchRenderProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    match &props.state {
        FetchState::NotStarted => html! {},
        FetchState::Loading => html! {
            <Loading size={LoadingSize::Large} text={props.loading_text.clone()} />
        },
        FetchState::Error(err) => {
            html! {
                <ErrorDisplay
                    message={err.clone()}
                    on_retry={props.on_retry.clone()}
                />
            }
        }
        FetchState::Success(data) => props.render.emit(data.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(on_retry: Option<Callback<()>>) -> FetchRenderProps<u32> {
        FetchRenderProps {
            state: FetchState::Error("Could not reach the prediction service.".to_string()),
            render: Callback::from(|value: u32| html! { {value.to_string()} }),
            on_retry,
            loading_text: None,
        }
    }

    #[test]
    fn test_new_retry_callback_changes_props() {
        let render = Callback::from(|value: u32| html! { {value.to_string()} });
        let first_retry = Callback::from(|_: ()| ());
        let second_retry = Callback::from(|_: ()| ());

        let before = FetchRenderProps { render: render.clone(), ..props(Some(first_retry.clone())) };
        let same = FetchRenderProps { render: render.clone(), ..props(Some(first_retry)) };
        let after = FetchRenderProps { render, ..props(Some(second_retry)) };

        assert!(before == same);
        assert!(before != after);
    }

    #[test]
    fn test_dropping_retry_changes_props() {
        let render = Callback::from(|value: u32| html! { {value.to_string()} });
        let with_retry = FetchRenderProps { render: render.clone(), ..props(Some(Callback::from(|_: ()| ()))) };
        let without_retry = FetchRenderProps { render, ..props(None) };

        assert!(with_retry != without_retry);
    }
}
