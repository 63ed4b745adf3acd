/// Reusable UI components

use crate::countdown::countdown;
use crate::dnd::{CardRect, DragSource, DropContainer, Point};
use crate::domain::{card_icon, site_label};
use crate::form::{ItemForm, NO_URL};
use crate::metadata::{Item, ItemKind};
use crate::tab_data::{TabInfo, TopSite};
use patternfly_yew::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Value of the input or textarea an event came from
fn event_value(e: InputEvent) -> String {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn mark_drag(e: &DragEvent, key: &str) {
    if let Some(transfer) = e.data_transfer() {
        if let Err(err) = transfer.set_data("text/plain", key) {
            log::warn!("Could not set drag data for {}: {:?}", key, err);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownBadgeProps {
    pub deadline: String,
    pub now_ms: i64,
}

#[function_component(CountdownBadge)]
pub fn countdown_badge(props: &CountdownBadgeProps) -> Html {
    match countdown(&props.deadline, props.now_ms) {
        Some(countdown) => html! {
            <span class={classes!("countdown", countdown.state.css_class())}>{countdown.label}</span>
        },
        None => html! {
            <span class="countdown countdown-unknown">{"No deadline"}</span>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ItemCardProps {
    pub item: Item,
    pub now_ms: i64,
    pub on_edit: Callback<Item>,
    pub on_delete: Callback<String>,
    /// `None` makes the card fixed in place
    #[prop_or_default]
    pub on_drag_start: Option<Callback<DragSource>>,
    #[prop_or_default]
    pub on_drag_end: Callback<()>,
}

#[function_component(ItemCard)]
pub fn item_card(props: &ItemCardProps) -> Html {
    let item = &props.item;
    let link = item.url.as_deref().filter(|url| *url != NO_URL);
    let icon = link.and_then(|url| card_icon(None, url));
    let site = link.and_then(site_label);

    let ondragstart = props.on_drag_start.clone().map(|on_drag_start| {
        let item = item.clone();
        Callback::from(move |e: DragEvent| {
            mark_drag(&e, &item.id);
            on_drag_start.emit(DragSource::Bookmark(item.clone()));
        })
    });
    let ondragend = props.on_drag_end.reform(|_: DragEvent| ());

    html! {
        <div
            class={classes!("card", format!("card-{}", item.kind.key()))}
            data-card-key={item.id.clone()}
            draggable={if props.on_drag_start.is_some() { "true" } else { "false" }}
            {ondragstart}
            {ondragend}
        >
            <div class="card-header">
                if let Some(icon) = icon {
                    <img class="card-icon" src={icon} alt="" />
                }
                if let Some(link) = link {
                    <a class="card-title" href={link.to_string()}>{&item.title}</a>
                } else {
                    <span class="card-title">{&item.title}</span>
                }
            </div>

            if let Some(site) = site {
                <p class="card-site">{site}</p>
            }
            if let Some(description) = &item.description {
                <p class="card-description">{description}</p>
            }
            if item.kind == ItemKind::Reminder {
                <CountdownBadge deadline={item.deadline.clone().unwrap_or_default()} now_ms={props.now_ms} />
            }

            <div class="card-actions">
                <Button
                    variant={ButtonVariant::Plain}
                    onclick={props.on_edit.reform({
                        let item = item.clone();
                        move |_| item.clone()
                    })}
                >
                    {"✏️"}
                </Button>
                <Button
                    variant={ButtonVariant::Plain}
                    onclick={props.on_delete.reform({
                        let id = item.id.clone();
                        move |_| id.clone()
                    })}
                >
                    {"🗑️"}
                </Button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabCardProps {
    pub tab: TabInfo,
    pub on_activate: Callback<i32>,
    pub on_close: Callback<i32>,
    pub on_drag_start: Callback<DragSource>,
    #[prop_or_default]
    pub on_drag_end: Callback<()>,
}

#[function_component(TabCard)]
pub fn tab_card(props: &TabCardProps) -> Html {
    let tab = &props.tab;
    let key = tab.card_key();
    let icon = card_icon(tab.fav_icon_url.as_deref(), &tab.url);

    let ondragstart = {
        let tab = tab.clone();
        let on_drag_start = props.on_drag_start.clone();
        Callback::from(move |e: DragEvent| {
            mark_drag(&e, &tab.card_key());
            on_drag_start.emit(DragSource::Tab(tab.clone()));
        })
    };
    let tab_id = tab.id;

    html! {
        <div
            class={classes!("card", "card-tab", tab.pinned.then_some("pinned"))}
            data-card-key={key}
            draggable="true"
            {ondragstart}
            ondragend={props.on_drag_end.reform(|_: DragEvent| ())}
        >
            <div class="card-header" onclick={props.on_activate.reform(move |_: MouseEvent| tab_id)}>
                if let Some(icon) = icon {
                    <img class="card-icon" src={icon} alt="" />
                }
                <span class="card-title">{&tab.title}</span>
            </div>
            if let Some(site) = site_label(&tab.url) {
                <p class="card-site">{site}</p>
            }
            <div class="card-actions">
                <Button variant={ButtonVariant::Plain} onclick={props.on_close.reform(move |_| tab_id)}>
                    {"✕"}
                </Button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TopSiteCardProps {
    pub site: TopSite,
}

#[function_component(TopSiteCard)]
pub fn top_site_card(props: &TopSiteCardProps) -> Html {
    let site = &props.site;

    html! {
        <a class="card card-top-site" href={site.url.clone()} draggable="false">
            if let Some(icon) = card_icon(None, &site.url) {
                <img class="card-icon" src={icon} alt="" />
            }
            <span class="card-title">{&site.title}</span>
        </a>
    }
}

/// Bounding boxes of the cards rendered inside a drop container
fn card_rects(zone: &Element) -> Vec<CardRect> {
    let Ok(nodes) = zone.query_selector_all("[data-card-key]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|element| {
            let key = element.get_attribute("data-card-key")?;
            let rect = element.get_bounding_client_rect();
            Some(CardRect {
                key,
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            })
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct DropZoneProps {
    pub container: DropContainer,
    /// Receives the container, the pointer and the card boxes at drop time
    pub on_drop: Callback<(DropContainer, Point, Vec<CardRect>)>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DropZone)]
pub fn drop_zone(props: &DropZoneProps) -> Html {
    let zone = use_node_ref();
    let droppable = props.container != DropContainer::External;

    // Only a cancelled dragover lets the drop event fire
    let ondragover = Callback::from(move |e: DragEvent| {
        if droppable {
            e.prevent_default();
        }
    });

    let ondrop = {
        let zone = zone.clone();
        let container = props.container.clone();
        let on_drop = props.on_drop.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            let pointer = Point {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            };
            let cards = zone.cast::<Element>().map(|el| card_rects(&el)).unwrap_or_default();
            on_drop.emit((container.clone(), pointer, cards));
        })
    };

    html! {
        <div
            ref={zone}
            class={classes!("drop-zone", (!droppable).then_some("external"), props.class.clone())}
            {ondragover}
            {ondrop}
        >
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CollapsibleSectionProps {
    pub id: String,
    pub title: String,
    pub count: usize,
    pub collapsed: bool,
    pub on_toggle: Callback<String>,
    #[prop_or_default]
    pub actions: Option<Html>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CollapsibleSection)]
pub fn collapsible_section(props: &CollapsibleSectionProps) -> Html {
    let on_toggle = props.on_toggle.reform({
        let id = props.id.clone();
        move |_: MouseEvent| id.clone()
    });

    html! {
        <section class={classes!("board-section", props.collapsed.then_some("collapsed"))}>
            <header class="section-header">
                <button class="section-toggle" onclick={on_toggle}>
                    <span class="section-caret">{if props.collapsed { "▶" } else { "▼" }}</span>
                    <h2 class="section-title">{&props.title}</h2>
                    <span class="section-count">{props.count}</span>
                </button>
                if let Some(actions) = props.actions.clone() {
                    <div class="section-actions">{actions}</div>
                }
            </header>
            if !props.collapsed {
                {props.children.clone()}
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorScreenProps {
    pub message: String,
    pub on_reload: Callback<()>,
}

/// Full-page fallback when the dashboard cannot load
#[function_component(ErrorScreen)]
pub fn error_screen(props: &ErrorScreenProps) -> Html {
    html! {
        <div class="error-screen">
            <Alert r#type={AlertType::Danger} title={"The dashboard could not be loaded"} inline={true}>
                {props.message.clone()}
            </Alert>
            <Button variant={ButtonVariant::Primary} onclick={props.on_reload.reform(|_| ())}>
                {"Reload"}
            </Button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EditModalProps {
    pub form: ItemForm,
    /// Editing an existing item; the type can only be picked on create
    pub editing: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_change: Callback<ItemForm>,
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
}

fn field_callback(
    form: &ItemForm,
    on_change: &Callback<ItemForm>,
    apply: fn(&mut ItemForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    let on_change = on_change.clone();
    Callback::from(move |e: InputEvent| {
        let mut form = form.clone();
        apply(&mut form, event_value(e));
        on_change.emit(form);
    })
}

#[function_component(EditModal)]
pub fn edit_modal(props: &EditModalProps) -> Html {
    let form = &props.form;
    let kind = form.kind;

    let on_title = field_callback(form, &props.on_change, |form, value| form.title = value);
    let on_url = field_callback(form, &props.on_change, |form, value| form.url = value);
    let on_description = field_callback(form, &props.on_change, |form, value| form.description = value);
    let on_deadline = field_callback(form, &props.on_change, |form, value| form.deadline = value);

    let on_kind = {
        let form = form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let picked = e
                .target_dyn_into::<HtmlSelectElement>()
                .and_then(|select| ItemKind::from_key(&select.value()));
            if let Some(kind) = picked {
                on_change.emit(ItemForm { kind, ..form.clone() });
            }
        })
    };

    let onsubmit = {
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit(());
        })
    };

    let heading = format!("{} {}", if props.editing { "Edit" } else { "New" }, kind.label().to_lowercase());

    html! {
        <div class="pf-v5-c-backdrop">
            <div class="pf-v5-l-bullseye">
                <div class="pf-v5-c-modal-box pf-m-sm edit-modal" role="dialog" aria-modal="true">
                    <header class="pf-v5-c-modal-box__header">
                        <h1 class="pf-v5-c-modal-box__title">{heading}</h1>
                    </header>

                    <form class="pf-v5-c-form pf-v5-c-modal-box__body" {onsubmit}>
                        if let Some(error) = &props.error {
                            <Alert r#type={AlertType::Danger} title={error.clone()} inline={true} />
                        }

                        if !props.editing {
                            <label class="pf-v5-c-form__label">
                                {"Type"}
                                <select class="pf-v5-c-form-control" onchange={on_kind}>
                                    { for ItemKind::ALL.iter().map(|option| html! {
                                        <option value={option.key()} selected={*option == kind}>{option.label()}</option>
                                    }) }
                                </select>
                            </label>
                        }

                        <label class="pf-v5-c-form__label">
                            {"Title"}
                            <input class="pf-v5-c-form-control" type="text" value={form.title.clone()} oninput={on_title} />
                        </label>

                        if matches!(kind, ItemKind::Bookmark | ItemKind::Reminder) {
                            <label class="pf-v5-c-form__label">
                                {if kind == ItemKind::Reminder { "URL (optional)" } else { "URL" }}
                                <input class="pf-v5-c-form-control" type="text" value={form.url.clone()} oninput={on_url} />
                            </label>
                        }

                        if kind != ItemKind::Folder {
                            <label class="pf-v5-c-form__label">
                                {"Description"}
                                <textarea class="pf-v5-c-form-control" value={form.description.clone()} oninput={on_description} />
                            </label>
                        }

                        if kind == ItemKind::Reminder {
                            <label class="pf-v5-c-form__label">
                                {"Deadline"}
                                <input class="pf-v5-c-form-control" type="datetime-local" value={form.deadline.clone()} oninput={on_deadline} />
                            </label>
                        }

                        <footer class="pf-v5-c-modal-box__footer">
                            <button class="pf-v5-c-button pf-m-primary" type="submit">{"Save"}</button>
                            <Button variant={ButtonVariant::Link} onclick={props.on_cancel.reform(|_| ())}>
                                {"Cancel"}
                            </Button>
                        </footer>
                    </form>
                </div>
            </div>
        </div>
    }
}
