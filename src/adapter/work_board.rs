use crate::{
    backend::{BoardBackend, Card, Lane},
    domain::{
        correlate,
        work_item::{WorkItem, WorkItemStatus},
    },
    error::{Result, SyncError},
};
use std::collections::HashMap;

/// Work item CRUD over a kanban-like collaborator.
///
/// The lane set is fetched once at construction and cached by name; lanes
/// created on the board afterwards are invisible to this instance. Card
/// contents are never cached.
pub struct WorkBoard<B> {
    board: B,
    lanes: HashMap<String, Lane>,
}

impl<B: BoardBackend> WorkBoard<B> {
    /// Connects to the board and caches its lanes.
    pub async fn connect(board: B) -> Result<Self> {
        let lanes: HashMap<String, Lane> = board
            .list_lanes()
            .await?
            .into_iter()
            .map(|lane| (lane.name.clone(), lane))
            .collect();

        tracing::info!(lanes = lanes.len(), "connected to work board");
        Ok(Self { board, lanes })
    }

    /// Fetches every open work item across all cached lanes.
    ///
    /// Lane traversal order is collaborator-defined and not meaningful.
    pub async fn list_work_items(&self) -> Result<Vec<WorkItem>> {
        let mut items = Vec::new();
        for lane in self.lanes.values() {
            let status = correlate::status_for_lane(&lane.name);
            for card in self.board.list_cards(&lane.id).await? {
                items.push(work_item(card, Some(lane.name.clone()), status));
            }
        }

        tracing::debug!(count = items.len(), "retrieved work items");
        Ok(items)
    }

    /// Looks up a single work item. Absence is `Ok(None)`, not a fault.
    ///
    /// The card only carries a lane id, so the holding lane's name is
    /// recovered by a second scan over the cached lanes; a lane outside the
    /// cache leaves the item with no lane and status `Unknown`.
    pub async fn get_work_item(&self, item_id: &str) -> Result<Option<WorkItem>> {
        let Some(card) = self.board.get_card(item_id).await? else {
            tracing::warn!(id = %item_id, "work item not found");
            return Ok(None);
        };

        let lane_name = self
            .lanes
            .values()
            .find(|lane| lane.id == card.lane_id)
            .map(|lane| lane.name.clone());
        let status = lane_name
            .as_deref()
            .map_or(WorkItemStatus::Unknown, correlate::status_for_lane);

        Ok(Some(work_item(card, lane_name, status)))
    }

    /// Creates a work item in the `TODO` lane, embedding the originating
    /// lead's id in the description, and returns the new item's id.
    pub async fn create_work_item(
        &self,
        title: &str,
        lead_id: &str,
        description: &str,
    ) -> Result<String> {
        let todo = self.lane(correlate::TODO_LANE)?;

        let description = correlate::build_description(lead_id, description);
        let id = self.board.create_card(&todo.id, title, &description).await?;

        tracing::info!(id = %id, lead_id = %lead_id, "created work item");
        Ok(id)
    }

    /// Moves the item to the lane mapped from `new_status`.
    ///
    /// A status with no board representation is a no-op returning
    /// `Ok(false)`, as is a missing item. A mapped status whose lane is
    /// absent from the board is a configuration fault.
    pub async fn update_work_item_status(&self, item_id: &str, new_status: &str) -> Result<bool> {
        let Some(lane_name) = correlate::lane_for_status(new_status) else {
            tracing::debug!(status = %new_status, "status has no target lane");
            return Ok(false);
        };
        let target = self.lane(lane_name)?;

        let moved = self.board.move_card(item_id, &target.id).await?;
        if moved {
            tracing::info!(id = %item_id, lane = %lane_name, "moved work item");
        } else {
            tracing::warn!(id = %item_id, "work item not found for move");
        }
        Ok(moved)
    }

    /// Closes the item on the board. Returns `Ok(false)` when the item is
    /// missing; other faults propagate. The originating lead's link is left
    /// untouched.
    pub async fn archive_work_item(&self, item_id: &str) -> Result<bool> {
        let closed = self.board.close_card(item_id).await?;
        if closed {
            tracing::info!(id = %item_id, "archived work item");
        } else {
            tracing::warn!(id = %item_id, "work item not found for archive");
        }
        Ok(closed)
    }

    fn lane(&self, name: &str) -> Result<&Lane> {
        self.lanes.get(name).ok_or_else(|| {
            SyncError::Configuration(format!("lane '{name}' not found on work board"))
        })
    }
}

fn work_item(card: Card, lane: Option<String>, status: WorkItemStatus) -> WorkItem {
    WorkItem {
        id: card.id,
        title: card.name,
        status,
        lane,
        linked_lead_id: correlate::extract_lead_id(&card.description),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::memory::InMemoryBoard;

    const ALL_LANES: [&str; 4] = ["TODO", "IN_PROGRESS", "DONE", "LOST"];

    async fn connected(lanes: &[&str]) -> WorkBoard<InMemoryBoard> {
        WorkBoard::connect(InMemoryBoard::new(lanes.iter().copied()))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get_work_item() {
        let board = connected(&ALL_LANES).await;

        let id = board
            .create_work_item("Call Ada", "7", "call back")
            .await
            .unwrap();

        let item = board.get_work_item(&id).await.unwrap().unwrap();
        assert_eq!(item.title, "Call Ada");
        assert_eq!(item.status, WorkItemStatus::New);
        assert_eq!(item.lane.as_deref(), Some("TODO"));
        assert_eq!(item.linked_lead_id.as_deref(), Some("7"));
    }

    #[tokio::test]
    async fn test_create_requires_todo_lane() {
        let board = connected(&["IN_PROGRESS", "DONE"]).await;

        assert!(matches!(
            board.create_work_item("Call Ada", "7", "").await,
            Err(SyncError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_get_missing_work_item() {
        let board = connected(&ALL_LANES).await;
        assert!(board.get_work_item("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_status_moves_item() {
        let board = connected(&ALL_LANES).await;
        let id = board.create_work_item("Call Ada", "7", "").await.unwrap();

        assert!(board.update_work_item_status(&id, "QUALIFIED").await.unwrap());

        let item = board.get_work_item(&id).await.unwrap().unwrap();
        assert_eq!(item.lane.as_deref(), Some("DONE"));
        assert_eq!(item.status, WorkItemStatus::Qualified);
    }

    #[tokio::test]
    async fn test_update_status_without_target_lane_is_noop() {
        let board = connected(&ALL_LANES).await;
        let id = board.create_work_item("Call Ada", "7", "").await.unwrap();

        assert!(!board.update_work_item_status(&id, "ARCHIVED").await.unwrap());
        assert!(!board.update_work_item_status(&id, "").await.unwrap());

        let item = board.get_work_item(&id).await.unwrap().unwrap();
        assert_eq!(item.lane.as_deref(), Some("TODO"));
    }

    #[tokio::test]
    async fn test_update_status_missing_lane_is_configuration_error() {
        let board = connected(&["TODO", "IN_PROGRESS", "DONE"]).await;
        let id = board.create_work_item("Call Ada", "7", "").await.unwrap();

        assert!(matches!(
            board.update_work_item_status(&id, "LOST").await,
            Err(SyncError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_update_status_missing_item_returns_false() {
        let board = connected(&ALL_LANES).await;
        assert!(!board.update_work_item_status("nope", "NEW").await.unwrap());
    }

    #[tokio::test]
    async fn test_archive_work_item() {
        let board = connected(&ALL_LANES).await;
        let id = board.create_work_item("Call Ada", "7", "").await.unwrap();

        assert!(board.archive_work_item(&id).await.unwrap());
        assert!(board.list_work_items().await.unwrap().is_empty());

        assert!(!board.archive_work_item("nope").await.unwrap());
    }

    #[tokio::test]
    async fn test_list_work_items_derives_status_per_lane() {
        let board = connected(&ALL_LANES).await;
        let first = board.create_work_item("First", "1", "").await.unwrap();
        board.create_work_item("Second", "2", "").await.unwrap();
        board
            .update_work_item_status(&first, "CONTACTED")
            .await
            .unwrap();

        let items = board.list_work_items().await.unwrap();
        assert_eq!(items.len(), 2);

        let first_item = items.iter().find(|i| i.id == first).unwrap();
        assert_eq!(first_item.status, WorkItemStatus::Contacted);
        assert_eq!(first_item.lane.as_deref(), Some("IN_PROGRESS"));
        assert_eq!(first_item.linked_lead_id.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_unmapped_lane_yields_unknown_status() {
        let board = connected(&["TODO", "ARCHIVE"]).await;
        let id = board.create_work_item("Old", "3", "").await.unwrap();

        // Move the card into the unmapped lane through the backend directly.
        let archive_id = board
            .board
            .list_lanes()
            .await
            .unwrap()
            .into_iter()
            .find(|lane| lane.name == "ARCHIVE")
            .unwrap()
            .id;
        board.board.move_card(&id, &archive_id).await.unwrap();

        let item = board.get_work_item(&id).await.unwrap().unwrap();
        assert_eq!(item.status, WorkItemStatus::Unknown);
        assert_eq!(item.lane.as_deref(), Some("ARCHIVE"));

        let listed = board.list_work_items().await.unwrap();
        assert_eq!(listed[0].status, WorkItemStatus::Unknown);
    }
}
