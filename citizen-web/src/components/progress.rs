use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ProgressBarProps {
    pub value: u8,
    #[prop_or_default]
    pub class: Classes,
}

#[must_use]
pub fn clamp_pct(value: u8) -> u8 {
    value.min(100)
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let value = clamp_pct(props.value);
    let mut class = classes!("progress-track", "rounded-full", "bg-base-300", "h-2", "w-full");
    class.push(props.class.clone());
    html! {
        <div
            class={class}
            role="progressbar"
            aria-valuenow={value.to_string()}
            aria-valuemin="0"
            aria-valuemax="100"
        >
            <div
                class="progress-fill h-2 rounded-full bg-primary"
                style={format!("width: {value}%")}
            ></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::clamp_pct;

    #[test]
    fn percentages_are_clamped_to_100() {
        assert_eq!(clamp_pct(0), 0);
        assert_eq!(clamp_pct(76), 76);
        assert_eq!(clamp_pct(250), 100);
    }
}
