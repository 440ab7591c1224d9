use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod memory;

/// A named lane (list/column) on the work board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    pub id: String,
    pub name: String,
}

/// A raw card as the board collaborator reports it.
///
/// The card exposes only the holding lane's identifier; resolving it to a
/// lane name is the adapter's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub description: String,
    pub lane_id: String,
}

/// Spreadsheet-like collaborator backing the lead store.
///
/// Rows carry cells in the fixed column order
/// `id, name, email, status, source, linked_work_item_id`; any deviation is
/// a configuration fault of the external sheet, not handled defensively
/// here. Cell coordinates are 1-based with the header in row 1, so the
/// first data row is row 2.
#[async_trait]
pub trait SheetBackend: Send + Sync {
    /// Reads every data row, in sheet order, header excluded.
    async fn read_all_rows(&self) -> Result<Vec<Vec<String>>>;

    /// Appends a data row after the last existing one.
    async fn append_row(&self, cells: &[String]) -> Result<()>;

    /// Writes a single cell at 1-based sheet coordinates.
    async fn write_cell(&self, row: u32, col: u32, value: &str) -> Result<()>;
}

/// Kanban-like collaborator backing the work board.
///
/// Absence of a card is a normal outcome (`None` / `false`), never an
/// error; implementations reserve errors for transport and configuration
/// faults.
#[async_trait]
pub trait BoardBackend: Send + Sync {
    /// Lists the board's lanes.
    async fn list_lanes(&self) -> Result<Vec<Lane>>;

    /// Lists the open cards in a lane.
    async fn list_cards(&self, lane_id: &str) -> Result<Vec<Card>>;

    /// Looks up a single card by id.
    async fn get_card(&self, card_id: &str) -> Result<Option<Card>>;

    /// Creates a card in the given lane and returns its id.
    async fn create_card(&self, lane_id: &str, name: &str, description: &str) -> Result<String>;

    /// Moves a card to another lane. Returns `false` when the card is
    /// unavailable.
    async fn move_card(&self, card_id: &str, target_lane_id: &str) -> Result<bool>;

    /// Closes (archives) a card. Returns `false` when the card is
    /// unavailable.
    async fn close_card(&self, card_id: &str) -> Result<bool>;
}
