use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OptionSelectProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub placeholder: AttrValue,
    /// `(value, label)` pairs
    pub options: Vec<(String, String)>,
    pub selected: String,
    pub onchange: Callback<Event>,
}

#[function_component(OptionSelect)]
pub fn option_select(props: &OptionSelectProps) -> Html {
    html! {
        <div class="form-control space-y-2">
            <label class="label" for={props.id.clone()}>
                <span class="label-text text-slate-300">{&props.label}</span>
            </label>
            <select
                id={props.id.clone()}
                name={props.id.clone()}
                class="select select-bordered w-full bg-slate-700 border-slate-600 text-white"
                onchange={props.onchange.clone()}
            >
                <option value="" disabled={true} selected={props.selected.is_empty()}>
                    {&props.placeholder}
                </option>
                { for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={*value == props.selected}>
                        {label}
                    </option>
                }) }
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SeveritySliderProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: u8,
    pub oninput: Callback<InputEvent>,
}

/// 1-5 range input that shows its current value in the label.
#[function_component(SeveritySlider)]
pub fn severity_slider(props: &SeveritySliderProps) -> Html {
    html! {
        <div class="form-control space-y-2">
            <label class="label" for={props.id.clone()}>
                <span class="label-text text-slate-300">{format!("{}: {}", props.label, props.value)}</span>
            </label>
            <input
                id={props.id.clone()}
                type="range"
                min="1"
                max="5"
                step="1"
                class="range range-primary range-sm w-full"
                value={props.value.to_string()}
                oninput={props.oninput.clone()}
            />
        </div>
    }
}
