/// New-tab dashboard page

use crate::board::DEFAULT_BOARD_ID;
use crate::bridge::{subscribe_storage_changes, ChromeApi};
use crate::commands::CommandQueue;
use crate::dashboard::Dashboard;
use crate::dnd::{resolve_drop_position, CardRect, DragSource, DragState, DropContainer, Point};
use crate::error::Result;
use crate::form::ItemForm;
use crate::metadata::{Item, ItemKind};
use crate::projection::filter_items;
use crate::storage::{Settings, SidebarTarget, Theme, ViewMode, METADATA_KEY, SETTINGS_KEY};
use crate::tab_data::TabInfo;
use crate::ui::components::{
    CollapsibleSection, DropZone, EditModal, ErrorScreen, ItemCard, TabCard, TopSiteCard,
};
use futures::FutureExt;
use patternfly_yew::prelude::*;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const RELOAD_STORAGE: &str = "Reload storage";

#[derive(Clone, PartialEq)]
enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, PartialEq)]
struct ModalState {
    form: ItemForm,
    editing: Option<String>,
    error: Option<String>,
}

/// Shared handle on the dashboard state for callbacks and async commands
#[derive(Clone)]
struct Session {
    queue: Rc<CommandQueue<ChromeApi>>,
    redraw: UseForceUpdateHandle,
    alert: UseStateHandle<Option<String>>,
}

impl Session {
    fn snapshot(&self) -> Dashboard {
        self.queue.dashboard().borrow().clone()
    }

    /// Queue a command behind any that are still running
    fn run<F, Fut>(&self, name: &'static str, command: F)
    where
        F: FnOnce(Dashboard, Rc<ChromeApi>) -> Fut + 'static,
        Fut: Future<Output = (Dashboard, Result<()>)> + 'static,
    {
        if !self.queue.push(name, move |dashboard, api| command(dashboard, api).boxed_local()) {
            return;
        }
        let session = self.clone();
        spawn_local(async move {
            session
                .queue
                .drain(|_, result| {
                    if let Err(e) = result {
                        session.alert.set(Some(e.to_string()));
                    }
                    session.redraw.force_update();
                })
                .await;
        });
    }

    fn update_settings(&self, change: impl FnOnce(&mut Settings) + 'static) {
        self.run("Update settings", move |mut dashboard, api| async move {
            let result = dashboard.update_settings(&*api, change).await;
            (dashboard, result)
        });
    }
}

/// Callbacks shared by the card lists
#[derive(Clone)]
struct Handlers {
    now_ms: i64,
    settings: Rc<Settings>,
    on_edit: Callback<Item>,
    on_delete: Callback<String>,
    on_activate_tab: Callback<i32>,
    on_close_tab: Callback<i32>,
    on_drag_start: Callback<DragSource>,
    on_drag_end: Callback<()>,
    on_drop: Callback<(DropContainer, Point, Vec<CardRect>)>,
    on_toggle_section: Callback<String>,
}

fn now() -> i64 {
    js_sys::Date::now() as i64
}

fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("Reload failed: {:?}", e);
        }
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn prompt(message: &str, current: &str) -> Option<String> {
    web_sys::window()
        .and_then(|window| window.prompt_with_message_and_default(message, current).ok())
        .flatten()
}

#[function_component(App)]
pub fn app() -> Html {
    let load = use_state(|| LoadState::Loading);
    let alert = use_state(|| None::<String>);
    let modal = use_state(|| None::<ModalState>);
    let search = use_state(String::new);
    let new_board = use_state(String::new);
    let now_ms = use_state(now);
    let drag = use_mut_ref(DragState::default);
    let queue = use_memo((), |_| CommandQueue::new(ChromeApi, Rc::new(RefCell::new(Dashboard::default()))));
    let redraw = use_force_update();

    let session = Session {
        queue,
        redraw,
        alert: alert.clone(),
    };

    // Load everything on mount
    {
        let session = session.clone();
        let load = load.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match Dashboard::load(&ChromeApi).await {
                    Ok(dashboard) => {
                        log::info!(
                            "Loaded {} bookmarks and {} tabs",
                            dashboard.view.all_bookmarks.len(),
                            dashboard.tabs.len()
                        );
                        *session.queue.dashboard().borrow_mut() = dashboard;
                        load.set(LoadState::Ready);
                    }
                    Err(e) => {
                        log::error!("Initial load failed: {}", e);
                        load.set(LoadState::Failed(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    // Pick up settings and metadata written by other dashboard instances.
    // Our own writes echo back here too; the reload queues behind them.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            let subscription = subscribe_storage_changes(move |keys| {
                let relevant = keys.iter().any(|key| key == SETTINGS_KEY || key == METADATA_KEY);
                if relevant && !session.queue.is_queued(RELOAD_STORAGE) {
                    session.run(RELOAD_STORAGE, |mut dashboard, api| async move {
                        let result = dashboard.reload_storage(&*api).await;
                        (dashboard, result)
                    });
                }
            });
            move || drop(subscription)
        });
    }

    // Countdown tick
    {
        let now_ms = now_ms.clone();
        use_effect_with((), move |_| {
            let tick = Closure::wrap(Box::new(move || now_ms.set(now())) as Box<dyn Fn()>);
            let window = web_sys::window();
            let interval = window.as_ref().and_then(|window| {
                window
                    .set_interval_with_callback_and_timeout_and_arguments_0(tick.as_ref().unchecked_ref(), 1000)
                    .ok()
            });
            move || {
                if let (Some(window), Some(interval)) = (window, interval) {
                    window.clear_interval_with_handle(interval);
                }
                drop(tick);
            }
        });
    }

    match &*load {
        LoadState::Loading => {
            return html! {
                <div class="loading-text-center">
                    <Spinner />
                </div>
            };
        }
        LoadState::Failed(message) => {
            return html! {
                <ErrorScreen message={message.clone()} on_reload={Callback::from(|_: ()| reload_page())} />
            };
        }
        LoadState::Ready => {}
    }

    let dashboard = session.snapshot();
    let settings = &dashboard.settings;
    let board_id = dashboard.board_id();
    let query = (*search).clone();

    // Settings
    let on_toggle_theme = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.update_settings(|s| s.toggle_theme()))
    };

    let on_toggle_sidebar = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.update_settings(|s| s.toggle_sidebar()))
    };

    let on_view_mode = {
        let session = session.clone();
        move |mode: ViewMode| {
            let session = session.clone();
            Callback::from(move |_: MouseEvent| session.update_settings(move |s| s.view_mode = mode))
        }
    };

    let on_select_target = {
        let session = session.clone();
        Callback::from(move |target: SidebarTarget| {
            session.update_settings(move |s| s.active_sidebar_target = target)
        })
    };

    let on_toggle_section = {
        let session = session.clone();
        Callback::from(move |section_id: String| {
            session.update_settings(move |s| {
                s.toggle_section(&section_id);
            })
        })
    };

    // Boards
    let on_switch_board = {
        let session = session.clone();
        Callback::from(move |id: String| {
            session.run("Switch board", move |mut dashboard, api| async move {
                let result = dashboard.switch_board(&*api, &id).await;
                (dashboard, result)
            })
        })
    };

    let on_new_board_input = {
        let new_board = new_board.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                new_board.set(input.value());
            }
        })
    };

    let on_create_board = {
        let session = session.clone();
        let new_board = new_board.clone();
        Callback::from(move |_: MouseEvent| {
            let name = (*new_board).clone();
            new_board.set(String::new());
            session.run("Create board", move |mut dashboard, api| async move {
                let result = dashboard.create_board(&*api, &name).await.map(|_| ());
                (dashboard, result)
            })
        })
    };

    let on_rename_board = {
        let session = session.clone();
        let board_id = board_id.clone();
        let current = dashboard.board_name();
        Callback::from(move |_: MouseEvent| {
            let Some(name) = prompt("Rename board", &current) else {
                return;
            };
            let board_id = board_id.clone();
            session.run("Rename board", move |mut dashboard, api| async move {
                let result = dashboard.rename_board(&*api, &board_id, &name).await;
                (dashboard, result)
            })
        })
    };

    let on_delete_board = {
        let session = session.clone();
        let board_id = board_id.clone();
        Callback::from(move |_: MouseEvent| {
            if !confirm("Delete this board and every bookmark in it?") {
                return;
            }
            let board_id = board_id.clone();
            session.run("Delete board", move |mut dashboard, api| async move {
                let result = dashboard.delete_board(&*api, &board_id).await;
                (dashboard, result)
            })
        })
    };

    // Edit modal
    let on_add = {
        let modal = modal.clone();
        move |kind: ItemKind| {
            let modal = modal.clone();
            Callback::from(move |_: MouseEvent| {
                modal.set(Some(ModalState {
                    form: ItemForm::new(kind),
                    editing: None,
                    error: None,
                }))
            })
        }
    };

    let on_edit = {
        let modal = modal.clone();
        Callback::from(move |item: Item| {
            modal.set(Some(ModalState {
                form: ItemForm::from_item(&item),
                editing: Some(item.id),
                error: None,
            }))
        })
    };

    let on_form_change = {
        let modal = modal.clone();
        Callback::from(move |form: ItemForm| {
            if let Some(state) = (*modal).clone() {
                modal.set(Some(ModalState { form, ..state }));
            }
        })
    };

    let on_save = {
        let modal = modal.clone();
        let session = session.clone();
        Callback::from(move |_: ()| {
            let Some(state) = (*modal).clone() else {
                return;
            };
            // Invalid forms keep the modal open
            if let Err(e) = state.form.validate() {
                modal.set(Some(ModalState {
                    error: Some(e.to_string()),
                    ..state
                }));
                return;
            }
            modal.set(None);
            session.run("Save item", move |mut dashboard, api| async move {
                let result = dashboard
                    .save_item(&*api, &state.form, state.editing.as_deref())
                    .await
                    .map(|_| ());
                (dashboard, result)
            })
        })
    };

    let on_cancel = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(None))
    };

    let on_delete = {
        let session = session.clone();
        Callback::from(move |id: String| {
            if !confirm("Delete this item?") {
                return;
            }
            session.run("Delete item", move |mut dashboard, api| async move {
                let result = dashboard.delete_item(&*api, &id).await;
                (dashboard, result)
            })
        })
    };

    // Tabs
    let on_activate_tab = {
        let session = session.clone();
        Callback::from(move |tab_id: i32| {
            session.run("Activate tab", move |dashboard, api| async move {
                let result = dashboard.activate_tab(&*api, tab_id).await;
                (dashboard, result)
            })
        })
    };

    let on_close_tab = {
        let session = session.clone();
        Callback::from(move |tab_id: i32| {
            session.run("Close tab", move |mut dashboard, api| async move {
                let result = dashboard.close_tab(&*api, tab_id).await;
                (dashboard, result)
            })
        })
    };

    // Drag and drop
    let on_drag_start = {
        let drag = drag.clone();
        Callback::from(move |source: DragSource| drag.borrow_mut().begin(source))
    };

    let on_drag_end = {
        let drag = drag.clone();
        Callback::from(move |_: ()| {
            drag.borrow_mut().finish();
        })
    };

    let on_drop = {
        let session = session.clone();
        Callback::from(move |(container, pointer, cards): (DropContainer, Point, Vec<CardRect>)| {
            let Some(source) = drag.borrow_mut().finish() else {
                return;
            };
            let position = resolve_drop_position(pointer, &cards, &source.card_key());

            // Behind a running command the drop is queued whole, without the local preview
            if !session.queue.is_idle() {
                session.run("Drop", move |mut dashboard, api| async move {
                    let result = dashboard
                        .drop_on(&*api, &source, &container, &position)
                        .await
                        .map(|_| ());
                    (dashboard, result)
                });
                return;
            }

            let pending = session
                .queue
                .dashboard()
                .borrow_mut()
                .begin_drop(&source, &container, &position);

            match pending {
                Ok(Some(pending)) => {
                    session.redraw.force_update();
                    session.run("Drop", move |mut dashboard, api| async move {
                        let result = dashboard.commit_drop(&*api, pending).await;
                        (dashboard, result)
                    });
                }
                Ok(None) => log::debug!("Ignoring drop of {} onto {:?}", source.card_key(), container),
                Err(e) => log::warn!("Drop rejected: {}", e),
            }
        })
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                search.set(input.value());
            }
        })
    };

    let on_dismiss_alert = {
        let alert = alert.clone();
        Callback::from(move |_: MouseEvent| alert.set(None))
    };

    let handlers = Handlers {
        now_ms: *now_ms,
        settings: Rc::new(settings.clone()),
        on_edit,
        on_delete,
        on_activate_tab,
        on_close_tab,
        on_drag_start,
        on_drag_end,
        on_drop,
        on_toggle_section,
    };

    let theme_class = match settings.theme {
        Theme::Light => "theme-light",
        Theme::Dark => "theme-dark",
    };

    let content = match settings.view_mode {
        ViewMode::Feed => render_feed(&dashboard, &board_id, &query, &handlers),
        ViewMode::Tabs => render_tabs_view(&dashboard, &board_id, &query, &handlers, &on_select_target),
    };

    html! {
        <div class={classes!("tabstack", theme_class, settings.sidebar_collapsed.then_some("sidebar-collapsed"))}>
            <aside class="sidebar">
                <Button variant={ButtonVariant::Plain} onclick={on_toggle_sidebar}>
                    {if settings.sidebar_collapsed { "»" } else { "«" }}
                </Button>

                if !settings.sidebar_collapsed {
                    <nav class="board-list">
                        <h2 class="sidebar-title">{"Boards"}</h2>
                        { for settings.boards.iter().map(|board| {
                            let id = board.id.clone();
                            html! {
                                <button
                                    key={board.id.clone()}
                                    class={classes!("board-link", (board.id == board_id).then_some("active"))}
                                    onclick={on_switch_board.reform(move |_| id.clone())}
                                >
                                    {&board.name}
                                </button>
                            }
                        }) }
                        <div class="board-create">
                            <input
                                type="text"
                                placeholder="New board"
                                value={(*new_board).clone()}
                                oninput={on_new_board_input}
                                class="pf-v5-c-form-control"
                            />
                            <Button variant={ButtonVariant::Secondary} onclick={on_create_board}>{"+"}</Button>
                        </div>
                    </nav>

                    <nav class="target-list">
                        <h2 class="sidebar-title">{"Add to"}</h2>
                        { sidebar_target("Tabs", SidebarTarget::Tabs, &settings.active_sidebar_target, &on_select_target) }
                        { sidebar_target("Reminders", SidebarTarget::Reminders, &settings.active_sidebar_target, &on_select_target) }
                        { sidebar_target("Notes", SidebarTarget::Notes, &settings.active_sidebar_target, &on_select_target) }
                        { for dashboard.view.flat_folders.iter().map(|folder| sidebar_target(
                            &folder.folder.title,
                            SidebarTarget::Folder(folder.folder.id.clone()),
                            &settings.active_sidebar_target,
                            &on_select_target,
                        )) }
                    </nav>
                }
            </aside>

            <main class="dashboard">
                <header class="dashboard-header">
                    <h1 class="board-title">{dashboard.board_name()}</h1>
                    <div class="board-actions">
                        <Button variant={ButtonVariant::Link} onclick={on_rename_board}>{"Rename"}</Button>
                        if board_id != DEFAULT_BOARD_ID {
                            <Button variant={ButtonVariant::Link} onclick={on_delete_board}>{"Delete"}</Button>
                        }
                    </div>

                    <input
                        type="search"
                        placeholder="Search"
                        value={query.clone()}
                        oninput={on_search}
                        class="pf-v5-c-form-control search-input"
                    />

                    <div class="add-buttons">
                        { for ItemKind::ALL.iter().map(|kind| html! {
                            <Button key={kind.key()} variant={ButtonVariant::Secondary} onclick={on_add(*kind)}>
                                {format!("+ {}", kind.label())}
                            </Button>
                        }) }
                    </div>

                    <div class="view-toggle">
                        <Button
                            variant={if settings.view_mode == ViewMode::Feed { ButtonVariant::Primary } else { ButtonVariant::Secondary }}
                            onclick={on_view_mode(ViewMode::Feed)}
                        >
                            {"Feed"}
                        </Button>
                        <Button
                            variant={if settings.view_mode == ViewMode::Tabs { ButtonVariant::Primary } else { ButtonVariant::Secondary }}
                            onclick={on_view_mode(ViewMode::Tabs)}
                        >
                            {"Tabs"}
                        </Button>
                    </div>

                    <Button variant={ButtonVariant::Plain} onclick={on_toggle_theme}>
                        {if settings.theme == Theme::Dark { "☀️" } else { "🌙" }}
                    </Button>
                </header>

                if let Some(message) = (*alert).clone() {
                    <Alert r#type={AlertType::Danger} title={"Something went wrong"} inline={true}>
                        <>
                            {message}
                            <Button variant={ButtonVariant::Link} onclick={on_dismiss_alert}>{"Dismiss"}</Button>
                        </>
                    </Alert>
                }

                {content}
            </main>

            if let Some(state) = (*modal).clone() {
                <EditModal
                    form={state.form}
                    editing={state.editing.is_some()}
                    error={state.error}
                    on_change={on_form_change}
                    on_save={on_save}
                    on_cancel={on_cancel}
                />
            }
        </div>
    }
}

fn sidebar_target(
    label: &str,
    target: SidebarTarget,
    active: &SidebarTarget,
    on_select: &Callback<SidebarTarget>,
) -> Html {
    let class = classes!("target-link", (&target == active).then_some("active"));
    let key = String::from(target.clone());
    html! {
        <button key={key} class={class} onclick={on_select.reform(move |_| target.clone())}>
            {label.to_string()}
        </button>
    }
}

fn section(id: &str, title: &str, count: usize, handlers: &Handlers, body: Html) -> Html {
    html! {
        <CollapsibleSection
            key={id.to_string()}
            id={id.to_string()}
            title={title.to_string()}
            count={count}
            collapsed={handlers.settings.is_collapsed(id)}
            on_toggle={handlers.on_toggle_section.clone()}
        >
            {body}
        </CollapsibleSection>
    }
}

fn tab_cards(tabs: &[TabInfo], handlers: &Handlers) -> Html {
    html! {
        <DropZone container={DropContainer::Tabs} on_drop={handlers.on_drop.clone()} class={classes!("card-grid")}>
            { for tabs.iter().map(|tab| html! {
                <TabCard
                    key={tab.card_key()}
                    tab={tab.clone()}
                    on_activate={handlers.on_activate_tab.clone()}
                    on_close={handlers.on_close_tab.clone()}
                    on_drag_start={handlers.on_drag_start.clone()}
                    on_drag_end={handlers.on_drag_end.clone()}
                />
            }) }
        </DropZone>
    }
}

fn item_cards(container: DropContainer, items: &[Item], draggable: bool, handlers: &Handlers) -> Html {
    html! {
        <DropZone container={container} on_drop={handlers.on_drop.clone()} class={classes!("card-grid")}>
            { for items.iter().map(|item| html! {
                <ItemCard
                    key={item.id.clone()}
                    item={item.clone()}
                    now_ms={handlers.now_ms}
                    on_edit={handlers.on_edit.clone()}
                    on_delete={handlers.on_delete.clone()}
                    on_drag_start={draggable.then(|| handlers.on_drag_start.clone())}
                    on_drag_end={handlers.on_drag_end.clone()}
                />
            }) }
        </DropZone>
    }
}

fn render_feed(dashboard: &Dashboard, board_id: &str, query: &str, handlers: &Handlers) -> Html {
    let view = &dashboard.view;
    let reminders = filter_items(&dashboard.reminders, query);
    let notes = filter_items(&dashboard.notes, query);
    let loose = filter_items(&view.loose_bookmarks, query);

    html! {
        <div class="feed">
            { section("tabs", "Open tabs", dashboard.tabs.len(), handlers, tab_cards(&dashboard.tabs, handlers)) }

            if !dashboard.top_sites.is_empty() {
                { section("top-sites", "Top sites", dashboard.top_sites.len(), handlers, html! {
                    <DropZone container={DropContainer::External} on_drop={handlers.on_drop.clone()} class={classes!("card-grid")}>
                        { for dashboard.top_sites.iter().map(|site| html! {
                            <TopSiteCard key={site.url.clone()} site={site.clone()} />
                        }) }
                    </DropZone>
                }) }
            }

            if !reminders.is_empty() {
                { section("reminders", "Reminders", reminders.len(), handlers,
                    item_cards(DropContainer::External, &reminders, true, handlers)) }
            }

            if !notes.is_empty() {
                { section("notes", "Notes", notes.len(), handlers,
                    item_cards(DropContainer::External, &notes, false, handlers)) }
            }

            { section("bookmarks", "Bookmarks", loose.len(), handlers,
                item_cards(DropContainer::Folder(board_id.to_string()), &loose, true, handlers)) }

            { for view.flat_folders.iter().map(|folder| {
                let items = filter_items(&folder.items, query);
                let actions = html! {
                    <>
                        <Button
                            variant={ButtonVariant::Plain}
                            onclick={handlers.on_edit.reform({
                                let item = folder.folder.clone();
                                move |_| item.clone()
                            })}
                        >
                            {"✏️"}
                        </Button>
                        <Button
                            variant={ButtonVariant::Plain}
                            onclick={handlers.on_delete.reform({
                                let id = folder.folder.id.clone();
                                move |_| id.clone()
                            })}
                        >
                            {"🗑️"}
                        </Button>
                    </>
                };
                html! {
                    <CollapsibleSection
                        key={folder.folder.id.clone()}
                        id={folder.folder.id.clone()}
                        title={folder.folder.title.clone()}
                        count={items.len()}
                        collapsed={handlers.settings.is_collapsed(&folder.folder.id)}
                        on_toggle={handlers.on_toggle_section.clone()}
                        actions={actions}
                    >
                        { item_cards(DropContainer::Folder(folder.folder.id.clone()), &items, true, handlers) }
                    </CollapsibleSection>
                }
            }) }
        </div>
    }
}

/// One collection at a time, picked with chips
fn render_tabs_view(
    dashboard: &Dashboard,
    board_id: &str,
    query: &str,
    handlers: &Handlers,
    on_select: &Callback<SidebarTarget>,
) -> Html {
    let active = &dashboard.settings.active_sidebar_target;

    let body = match active {
        SidebarTarget::Tabs => tab_cards(&dashboard.tabs, handlers),
        SidebarTarget::Reminders => item_cards(
            DropContainer::External,
            &filter_items(&dashboard.reminders, query),
            true,
            handlers,
        ),
        SidebarTarget::Notes => item_cards(
            DropContainer::External,
            &filter_items(&dashboard.notes, query),
            false,
            handlers,
        ),
        SidebarTarget::Folder(id) => match dashboard.view.folder(id) {
            Some(folder) => item_cards(
                DropContainer::Folder(id.clone()),
                &filter_items(&folder.items, query),
                true,
                handlers,
            ),
            None => item_cards(
                DropContainer::Folder(board_id.to_string()),
                &filter_items(&dashboard.view.loose_bookmarks, query),
                true,
                handlers,
            ),
        },
    };

    html! {
        <div class="tabs-view">
            <div class="pf-v5-c-tabs chip-row">
                <ul class="pf-v5-c-tabs__list">
                    { chip("Tabs", SidebarTarget::Tabs, active, on_select) }
                    { chip("Reminders", SidebarTarget::Reminders, active, on_select) }
                    { chip("Notes", SidebarTarget::Notes, active, on_select) }
                    { chip("Bookmarks", SidebarTarget::Folder(board_id.to_string()), active, on_select) }
                    { for dashboard.view.flat_folders.iter().map(|folder| chip(
                        &folder.folder.title,
                        SidebarTarget::Folder(folder.folder.id.clone()),
                        active,
                        on_select,
                    )) }
                </ul>
            </div>
            <div class="tab-pane-content">{body}</div>
        </div>
    }
}

fn chip(label: &str, target: SidebarTarget, active: &SidebarTarget, on_select: &Callback<SidebarTarget>) -> Html {
    let class = if &target == active {
        "pf-v5-c-tabs__item pf-m-current"
    } else {
        "pf-v5-c-tabs__item"
    };
    let key = String::from(target.clone());
    html! {
        <li key={key} class={class}>
            <button class="pf-v5-c-tabs__link" onclick={on_select.reform(move |_| target.clone())}>
                <span class="pf-v5-c-tabs__item-text">{label.to_string()}</span>
            </button>
        </li>
    }
}
