use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct TabStripItem {
    pub id: AttrValue,
    pub label: AttrValue,
}

#[derive(Properties, Clone, PartialEq)]
pub struct TabStripProps {
    pub tabs: Vec<TabStripItem>,
    pub active: AttrValue,
    pub on_select: Callback<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

/// Tab headers only; the active pane is rendered by the owning page so the
/// strip stays agnostic of page content.
#[function_component(TabStrip)]
pub fn tab_strip(props: &TabStripProps) -> Html {
    let mut class = classes!("tabs", "tabs-box");
    class.push(props.class.clone());
    html! {
        <div class={class} role="tablist">
            { for props.tabs.iter().map(|tab| {
                let active = tab.id == props.active;
                let mut tab_class = classes!("tab");
                if active {
                    tab_class.push("tab-active");
                }
                let on_click = {
                    let on_select = props.on_select.clone();
                    let id = tab.id.clone();
                    Callback::from(move |_| on_select.emit(id.clone()))
                };
                html! {
                    <button
                        class={tab_class}
                        role="tab"
                        aria-selected={active.to_string()}
                        data-testid={format!("tab-{}", tab.id)}
                        onclick={on_click}
                    >
                        { tab.label.clone() }
                    </button>
                }
            })}
        </div>
    }
}
