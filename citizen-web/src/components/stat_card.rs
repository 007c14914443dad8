use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub glyph: AttrValue,
    /// Accent utility class, e.g. `text-success`.
    #[prop_or_default]
    pub accent: AttrValue,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="card bg-base-200 border border-base-300 stat-card">
            <div class="card-body flex-row items-center justify-between p-4">
                <div>
                    <p class="text-sm opacity-70">{ props.label.clone() }</p>
                    <p class={classes!("text-2xl", "font-bold", props.accent.to_string())}>
                        { props.value.clone() }
                    </p>
                </div>
                { if props.glyph.is_empty() {
                    Html::default()
                } else {
                    html! { <span class="text-2xl" aria-hidden="true">{ props.glyph.clone() }</span> }
                }}
            </div>
        </div>
    }
}
