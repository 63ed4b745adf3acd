/// Application state and the commands that change it.
///
/// `Dashboard` owns the settings and metadata blobs, the last bookmark tree
/// and tab snapshots, and the view derived from them. Each command performs
/// its host mutations, persists the blob it touched and refreshes from the
/// host, so the view is always re-derived from browser state.
use crate::api::BrowserApi;
use crate::board::{self, board_parent_id, prune_boards, Board, DEFAULT_BOARD_ID};
use crate::bookmark::BookmarkNode;
use crate::dnd::{
    insert_item, plan_drop, reorder_tabs, DragSource, DropContainer, DropOperation, DropPosition, DropTarget,
};
use crate::error::{DashboardError, FormError, Result};
use crate::form::{plan_save, resolve_parent, ItemForm, SaveRequest};
use crate::metadata::{Item, ItemKind, MetadataEntry, MetadataMap};
use crate::projection::{get_notes, get_reminders};
use crate::storage::{decode_blob, encode_blob, Settings, SidebarTarget, METADATA_KEY, SETTINGS_KEY};
use crate::tab_data::{cap_top_sites, TabInfo, TopSite};
use crate::tree::{find_node, find_notes_folder, process_bookmarks, BoardView, NOTES_FOLDER_TITLE};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub settings: Settings,
    pub metadata: MetadataMap,
    pub tree: Vec<BookmarkNode>,
    pub tabs: Vec<TabInfo>,
    pub top_sites: Vec<TopSite>,
    pub view: BoardView,
    pub reminders: Vec<Item>,
    pub notes: Vec<Item>,
}

/// A drop already shown in the local view, waiting for the host to confirm
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDrop {
    pub operation: DropOperation,
    view: BoardView,
    tabs: Vec<TabInfo>,
}

impl Dashboard {
    /// Read both storage blobs, then fetch tree, tabs and top sites
    pub async fn load(api: &impl BrowserApi) -> Result<Dashboard> {
        let mut dashboard = Dashboard::default();
        dashboard.reload_storage(api).await?;
        dashboard.refresh(api).await?;
        Ok(dashboard)
    }

    /// Re-read settings and metadata, e.g. after another instance wrote them
    pub async fn reload_storage(&mut self, api: &impl BrowserApi) -> Result<()> {
        self.settings = decode_blob(api.get_storage(SETTINGS_KEY).await?)?;
        self.metadata = decode_blob(api.get_storage(METADATA_KEY).await?)?;
        self.recompute();
        Ok(())
    }

    /// Re-fetch host state, prune boards whose folder is gone and re-derive the view
    pub async fn refresh(&mut self, api: &impl BrowserApi) -> Result<()> {
        self.tree = api.get_tree().await?;
        self.tabs = api.query_tabs().await?;
        self.top_sites = match api.top_sites().await {
            Ok(sites) => cap_top_sites(sites),
            Err(e) => {
                log::warn!("Top sites unavailable: {}", e);
                Vec::new()
            }
        };

        let pruned = prune_boards(&self.settings.boards, &self.tree);
        if pruned != self.settings.boards {
            let active_gone = !pruned.iter().any(|b| b.id == self.settings.active_board_id)
                && self.settings.boards.iter().any(|b| b.id == self.settings.active_board_id);
            log::info!(
                "Pruning {} board(s) whose folder no longer exists",
                self.settings.boards.len().saturating_sub(pruned.len())
            );
            self.settings.boards = pruned;
            if active_gone {
                self.settings.set_active_board(DEFAULT_BOARD_ID);
            }
            self.persist_settings(api).await?;
        }

        self.recompute();
        Ok(())
    }

    /// Re-derive the view collections from the current snapshots
    pub fn recompute(&mut self) {
        self.view = process_bookmarks(&self.tree, &self.settings.active_board_id, &self.metadata);
        self.reminders = get_reminders(&self.view, &self.metadata);
        self.notes = get_notes(&self.tree, &self.metadata);
    }

    /// The board actually projected, after fallback
    pub fn board_id(&self) -> String {
        self.view
            .board_id
            .clone()
            .unwrap_or_else(|| DEFAULT_BOARD_ID.to_string())
    }

    pub fn board_name(&self) -> String {
        let board_id = self.board_id();
        self.settings
            .board_name(&board_id)
            .map(str::to_string)
            .or_else(|| find_node(&self.tree, &board_id).map(|node| node.title.clone()))
            .unwrap_or_default()
    }

    async fn persist_settings(&self, api: &impl BrowserApi) -> Result<()> {
        api.set_storage(SETTINGS_KEY, encode_blob(&self.settings)?).await?;
        Ok(())
    }

    /// Apply a settings change and persist the whole blob
    pub async fn update_settings(&mut self, api: &impl BrowserApi, change: impl FnOnce(&mut Settings)) -> Result<()> {
        change(&mut self.settings);
        self.persist_settings(api).await?;
        self.recompute();
        Ok(())
    }

    /// Upsert (or with `None`, drop) one metadata entry. The stored blob is
    /// re-read first so entries other instances wrote since our last load are
    /// kept; the write itself still replaces the whole map.
    async fn write_metadata(&mut self, api: &impl BrowserApi, id: &str, entry: Option<MetadataEntry>) -> Result<()> {
        let mut stored: MetadataMap = decode_blob(api.get_storage(METADATA_KEY).await?)?;
        match entry {
            Some(entry) => stored.upsert(id, entry),
            None => {
                if stored.remove(id).is_none() {
                    self.metadata = stored;
                    return Ok(());
                }
            }
        }
        api.set_storage(METADATA_KEY, encode_blob(&stored)?).await?;
        self.metadata = stored;
        Ok(())
    }

    async fn ensure_notes_folder(&self, api: &impl BrowserApi) -> Result<String> {
        if let Some(folder) = find_notes_folder(&self.tree) {
            return Ok(folder.id.clone());
        }
        log::info!("Creating the {} folder", NOTES_FOLDER_TITLE);
        let folder = api
            .create_bookmark(&self.board_id(), NOTES_FOLDER_TITLE, None, None)
            .await?;
        Ok(folder.id)
    }

    /// Validate the modal, write the bookmark, then its metadata. Returns the item id.
    /// A validation error issues no host call.
    pub async fn save_item(&mut self, api: &impl BrowserApi, form: &ItemForm, editing: Option<&str>) -> Result<String> {
        let item = form.validate()?;

        let parent_id = match (editing, item.kind) {
            (None, ItemKind::Note) => self.ensure_notes_folder(api).await?,
            _ => resolve_parent(&self.settings.active_sidebar_target, &self.tree, &self.board_id()),
        };

        let id = match plan_save(&item, editing, &parent_id) {
            SaveRequest::Create { parent_id, title, url } => {
                api.create_bookmark(&parent_id, &title, url.as_deref(), None)
                    .await?
                    .id
            }
            SaveRequest::Update { id, title, url } => {
                api.update_bookmark(&id, &title, url.as_deref()).await?;
                id
            }
        };

        self.write_metadata(api, &id, Some(item.metadata())).await?;
        log::info!("Saved {} {}", item.kind.label().to_lowercase(), id);

        self.refresh(api).await?;
        Ok(id)
    }

    /// Delete a bookmark or a whole folder along with its metadata
    pub async fn delete_item(&mut self, api: &impl BrowserApi, id: &str) -> Result<()> {
        if id == DEFAULT_BOARD_ID {
            return Err(DashboardError::ProtectedBoard);
        }
        let node = find_node(&self.tree, id).ok_or_else(|| DashboardError::NotFound(id.to_string()))?;

        if node.is_folder() {
            api.remove_tree(id).await?;
        } else {
            api.remove_bookmark(id).await?;
        }
        self.write_metadata(api, id, None).await?;

        if self.settings.active_sidebar_target == SidebarTarget::Folder(id.to_string()) {
            self.settings.active_sidebar_target = SidebarTarget::Tabs;
            self.persist_settings(api).await?;
        }

        self.refresh(api).await
    }

    /// Plan a drop and show it locally. `None` when the drop is a no-op.
    pub fn begin_drop(
        &mut self,
        source: &DragSource,
        container: &DropContainer,
        position: &DropPosition,
    ) -> Result<Option<PendingDrop>> {
        if !container.accepts(source) {
            return Ok(None);
        }

        let target = match container {
            DropContainer::Tabs => DropTarget::Tabs(&self.tabs),
            DropContainer::Folder(id) => DropTarget::Folder {
                id,
                items: self
                    .view
                    .container_items(id)
                    .ok_or(DashboardError::UnknownDropTarget)?,
            },
            DropContainer::External => DropTarget::External,
        };
        let Some(operation) = plan_drop(source, target, position) else {
            return Ok(None);
        };

        let pending = PendingDrop {
            operation,
            view: self.view.clone(),
            tabs: self.tabs.clone(),
        };
        self.apply_locally(source, container, position);
        Ok(Some(pending))
    }

    fn apply_locally(&mut self, source: &DragSource, container: &DropContainer, position: &DropPosition) {
        match (source, container) {
            (DragSource::Tab(tab), DropContainer::Tabs) => {
                reorder_tabs(&mut self.tabs, tab.id, position);
            }
            (DragSource::Tab(tab), DropContainer::Folder(folder_id)) => {
                let placeholder = Item {
                    id: format!("pending-{}", Uuid::new_v4()),
                    parent_id: Some(folder_id.clone()),
                    index: None,
                    title: tab.title.clone(),
                    url: Some(tab.url.clone()),
                    kind: ItemKind::Bookmark,
                    description: None,
                    deadline: None,
                    date_added: None,
                };
                if let Some(items) = self.view.container_items_mut(folder_id) {
                    insert_item(items, placeholder, position);
                }
            }
            (DragSource::Bookmark(item), DropContainer::Folder(folder_id)) => {
                self.view.loose_bookmarks.retain(|i| i.id != item.id);
                for folder in self.view.flat_folders.iter_mut() {
                    folder.items.retain(|i| i.id != item.id);
                }
                let moved = Item {
                    parent_id: Some(folder_id.clone()),
                    ..item.clone()
                };
                if let Some(items) = self.view.container_items_mut(folder_id) {
                    insert_item(items, moved, position);
                }
            }
            _ => {}
        }
    }

    /// Send a pending drop to the host. On failure the local view is rolled
    /// back to how it was before the drop; on success it is refreshed.
    pub async fn commit_drop(&mut self, api: &impl BrowserApi, pending: PendingDrop) -> Result<()> {
        let result = match &pending.operation {
            DropOperation::CreateBookmark {
                parent_id,
                index,
                title,
                url,
            } => api
                .create_bookmark(parent_id, title, Some(url), *index)
                .await
                .map(|_| ()),
            DropOperation::MoveBookmark { id, parent_id, index } => {
                api.move_bookmark(id, parent_id, *index).await.map(|_| ())
            }
            DropOperation::MoveTab { tab_id, index } => api.move_tab(*tab_id, *index).await,
        };

        if let Err(e) = result {
            log::error!("Drop failed, rolling back: {}", e);
            self.view = pending.view;
            self.tabs = pending.tabs;
            return Err(e.into());
        }

        self.refresh(api).await
    }

    /// Plan, apply and commit a drop in one go. Returns whether anything happened.
    pub async fn drop_on(
        &mut self,
        api: &impl BrowserApi,
        source: &DragSource,
        container: &DropContainer,
        position: &DropPosition,
    ) -> Result<bool> {
        match self.begin_drop(source, container, position)? {
            Some(pending) => {
                self.commit_drop(api, pending).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn activate_tab(&self, api: &impl BrowserApi, tab_id: i32) -> Result<()> {
        api.activate_tab(tab_id).await?;
        Ok(())
    }

    pub async fn close_tab(&mut self, api: &impl BrowserApi, tab_id: i32) -> Result<()> {
        api.close_tab(tab_id).await?;
        self.tabs = api.query_tabs().await?;
        Ok(())
    }

    /// Create a board folder and switch to it. Returns the new board id.
    pub async fn create_board(&mut self, api: &impl BrowserApi, name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FormError::MissingTitle.into());
        }

        let folder = api
            .create_bookmark(board_parent_id(&self.tree), name, None, None)
            .await?;
        self.settings.boards.push(Board::new(&folder.id, name));
        self.settings.set_active_board(&folder.id);
        self.persist_settings(api).await?;
        log::info!("Created board {} ({})", name, folder.id);

        self.refresh(api).await?;
        Ok(folder.id)
    }

    /// Rename a board. The default board keeps its browser folder title.
    pub async fn rename_board(&mut self, api: &impl BrowserApi, board_id: &str, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FormError::MissingTitle.into());
        }
        if !self.settings.boards.iter().any(|board| board.id == board_id) {
            return Err(DashboardError::NotFound(board_id.to_string()));
        }
        if board_id != DEFAULT_BOARD_ID {
            api.update_bookmark(board_id, name, None).await?;
        }
        board::rename_board(&mut self.settings.boards, board_id, name);
        self.persist_settings(api).await?;
        self.refresh(api).await
    }

    /// Remove a board and its folder tree. The default board is refused.
    pub async fn delete_board(&mut self, api: &impl BrowserApi, board_id: &str) -> Result<()> {
        if board_id == DEFAULT_BOARD_ID {
            return Err(DashboardError::ProtectedBoard);
        }
        if find_node(&self.tree, board_id).is_some() {
            api.remove_tree(board_id).await?;
        }
        board::remove_board(&mut self.settings.boards, board_id);
        if self.settings.active_board_id == board_id {
            self.settings.set_active_board(DEFAULT_BOARD_ID);
        }
        self.persist_settings(api).await?;
        log::info!("Deleted board {}", board_id);

        self.refresh(api).await
    }

    pub async fn switch_board(&mut self, api: &impl BrowserApi, board_id: &str) -> Result<()> {
        self.update_settings(api, |settings| settings.set_active_board(board_id))
            .await
    }
}
