use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub size: LoadingSize,
    #[prop_or_default]
    pub text: Option<String>,
}

#[derive(Clone, PartialEq, Default)]
pub enum LoadingSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LoadingSize {
    fn class(&self) -> &'static str {
        match self {
            LoadingSize::Small => "h-4 w-4",
            LoadingSize::Medium => "h-8 w-8",
            LoadingSize::Large => "h-12 w-12",
        }
    }
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-12 gap-4">
            <div class={classes!("animate-spin", "rounded-full", "border-b-2", "border-blue-400", props.size.class())}></div>
            {if let Some(text) = &props.text {
                html! { <p class="text-slate-400">{text}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}

/// Inline spinner for buttons
#[function_component(ButtonSpinner)]
pub fn button_spinner() -> Html {
    html! {
        <span class="loading loading-spinner loading-sm mr-2"></span>
    }
}
