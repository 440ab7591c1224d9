use crate::{
    backend::{BoardBackend, Card, Lane, SheetBackend},
    error::Result,
};
use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

/// In-memory sheet backend for tests and embedding.
///
/// Stores data rows only; the header row exists purely as the coordinate
/// offset in [`SheetBackend::write_cell`].
#[derive(Default)]
pub struct InMemorySheet {
    rows: Mutex<Vec<Vec<String>>>,
}

impl InMemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sheet pre-populated with the given data rows.
    pub fn with_rows(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

#[async_trait]
impl SheetBackend for InMemorySheet {
    async fn read_all_rows(&self) -> Result<Vec<Vec<String>>> {
        Ok(self.rows.lock().await.clone())
    }

    async fn append_row(&self, cells: &[String]) -> Result<()> {
        self.rows.lock().await.push(cells.to_vec());
        Ok(())
    }

    async fn write_cell(&self, row: u32, col: u32, value: &str) -> Result<()> {
        if row < 2 || col < 1 {
            return Err(anyhow!("cell ({row}, {col}) is out of range").into());
        }

        let mut rows = self.rows.lock().await;
        let cell = rows
            .get_mut(row as usize - 2)
            .and_then(|cells| cells.get_mut(col as usize - 1))
            .ok_or_else(|| anyhow!("cell ({row}, {col}) is out of range"))?;
        *cell = value.to_string();
        Ok(())
    }
}

struct StoredCard {
    card: Card,
    closed: bool,
}

/// In-memory board backend with named lanes and board-assigned card ids.
pub struct InMemoryBoard {
    lanes: Vec<Lane>,
    cards: Mutex<Vec<StoredCard>>,
}

impl InMemoryBoard {
    /// Creates a board with one lane per name, in the given order.
    pub fn new<I, S>(lane_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lanes = lane_names
            .into_iter()
            .map(|name| Lane {
                id: Uuid::new_v4().to_string(),
                name: name.into(),
            })
            .collect();

        Self {
            lanes,
            cards: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl BoardBackend for InMemoryBoard {
    async fn list_lanes(&self) -> Result<Vec<Lane>> {
        Ok(self.lanes.clone())
    }

    async fn list_cards(&self, lane_id: &str) -> Result<Vec<Card>> {
        let cards = self.cards.lock().await;
        Ok(cards
            .iter()
            .filter(|stored| !stored.closed && stored.card.lane_id == lane_id)
            .map(|stored| stored.card.clone())
            .collect())
    }

    async fn get_card(&self, card_id: &str) -> Result<Option<Card>> {
        let cards = self.cards.lock().await;
        Ok(cards
            .iter()
            .find(|stored| stored.card.id == card_id)
            .map(|stored| stored.card.clone()))
    }

    async fn create_card(&self, lane_id: &str, name: &str, description: &str) -> Result<String> {
        if !self.lanes.iter().any(|lane| lane.id == lane_id) {
            return Err(anyhow!("lane {lane_id} does not exist").into());
        }

        let card = Card {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            lane_id: lane_id.to_string(),
        };
        let id = card.id.clone();

        self.cards
            .lock()
            .await
            .push(StoredCard { card, closed: false });
        Ok(id)
    }

    async fn move_card(&self, card_id: &str, target_lane_id: &str) -> Result<bool> {
        if !self.lanes.iter().any(|lane| lane.id == target_lane_id) {
            return Err(anyhow!("lane {target_lane_id} does not exist").into());
        }

        let mut cards = self.cards.lock().await;
        match cards.iter_mut().find(|stored| stored.card.id == card_id) {
            Some(stored) => {
                stored.card.lane_id = target_lane_id.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn close_card(&self, card_id: &str) -> Result<bool> {
        let mut cards = self.cards.lock().await;
        match cards.iter_mut().find(|stored| stored.card.id == card_id) {
            Some(stored) => {
                stored.closed = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
