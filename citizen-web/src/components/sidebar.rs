use crate::app::page::Page;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SidebarProps {
    pub current: Page,
    pub collapsed: bool,
    pub mobile: bool,
    pub impact_count: u32,
    pub on_navigate: Callback<Page>,
    pub on_collapse: Callback<bool>,
}

fn item_class(page: Page, current: Page) -> Classes {
    let mut class = classes!("btn", "w-full", "justify-start", "nav-item");
    if page == current {
        class.push("btn-primary");
        class.push("nav-item-active");
    } else if page.is_highlight() {
        class.push("btn-outline");
        class.push("btn-error");
        class.push("nav-item-sos");
    } else {
        class.push("btn-ghost");
    }
    class
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let close_overlay = {
        let cb = props.on_collapse.clone();
        Callback::from(move |_| cb.emit(true))
    };
    let toggle = {
        let cb = props.on_collapse.clone();
        let collapsed = props.collapsed;
        Callback::from(move |_| cb.emit(!collapsed))
    };

    let overlay = if props.mobile && !props.collapsed {
        html! {
            <div
                class="sidebar-overlay fixed inset-0 bg-black/50 z-40"
                role="presentation"
                data-testid="sidebar-overlay"
                onclick={close_overlay}
            ></div>
        }
    } else {
        Html::default()
    };

    let width_class = if props.collapsed { "w-16" } else { "w-64" };

    html! {
        <>
            { overlay }
            <aside
                class={classes!("sidebar", "fixed", "left-0", "top-16", "bottom-0", "z-50", "bg-base-100", "border-r", "border-base-300", width_class)}
                data-collapsed={props.collapsed.to_string()}
                aria-label="Primary navigation"
            >
                <div class="p-2 border-b border-base-300">
                    <button
                        class="btn btn-ghost w-full justify-center"
                        aria-label={if props.collapsed { "Expand navigation" } else { "Collapse navigation" }}
                        data-testid="sidebar-collapse"
                        onclick={toggle}
                    >
                        { if props.collapsed { "☰" } else { "✕" } }
                    </button>
                </div>

                <nav class="p-2 space-y-1" aria-label="Pages">
                    { for Page::ALL.into_iter().map(|page| {
                        let on_click = {
                            let on_navigate = props.on_navigate.clone();
                            Callback::from(move |_| on_navigate.emit(page))
                        };
                        html! {
                            <button
                                class={item_class(page, props.current)}
                                data-testid={format!("nav-{}", page.id())}
                                aria-current={if page == props.current { Some("page") } else { None }}
                                onclick={on_click}
                            >
                                <span aria-hidden="true">{ page.glyph() }</span>
                                { if props.collapsed {
                                    Html::default()
                                } else {
                                    html! { <span class="truncate">{ page.label() }</span> }
                                }}
                            </button>
                        }
                    })}
                </nav>

                { if props.collapsed {
                    Html::default()
                } else {
                    html! {
                        <div class="absolute bottom-4 left-4 right-4 p-4 rounded-lg bg-base-200 border border-base-300 text-center" data-testid="impact-footer">
                            <p class="text-sm font-medium text-primary">{ "Your Impact" }</p>
                            <p class="text-2xl font-bold">{ props.impact_count }</p>
                            <p class="text-xs opacity-60">{ "Issues Reported" }</p>
                        </div>
                    }
                }}
            </aside>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_and_sos_items_get_distinct_classes() {
        let active = item_class(Page::Dashboard, Page::Dashboard).to_string();
        assert!(active.contains("nav-item-active"));

        let sos = item_class(Page::Sos, Page::Dashboard).to_string();
        assert!(sos.contains("nav-item-sos"));

        let plain = item_class(Page::Rewards, Page::Dashboard).to_string();
        assert!(plain.contains("btn-ghost"));
    }
}
