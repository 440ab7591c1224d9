use crate::{
    backend::SheetBackend,
    domain::lead::{Lead, LeadPatch, NewLead},
    error::{Result, SyncError},
};

/// 0-based cell offsets within a data row. Sheet coordinates passed to the
/// backend are 1-based with the header in row 1.
mod columns {
    pub const ID: usize = 0;
    pub const NAME: usize = 1;
    pub const EMAIL: usize = 2;
    pub const STATUS: usize = 3;
    pub const SOURCE: usize = 4;
    pub const LINKED_WORK_ITEM_ID: usize = 5;

    pub const COUNT: usize = 6;
}

/// Row number of a data row at the given scan position.
fn row_number(index: usize) -> u32 {
    index as u32 + 2
}

/// 1-based sheet column for a cell offset.
fn column_number(offset: usize) -> u32 {
    offset as u32 + 1
}

/// Lead record CRUD over a spreadsheet-like collaborator.
///
/// Every read is a full scan of the remote rows; nothing is cached. Lookup
/// matches on the stringified id, and absence is reported as a sentinel
/// value rather than an error.
pub struct LeadStore<S> {
    sheet: S,
}

impl<S: SheetBackend> LeadStore<S> {
    pub fn new(sheet: S) -> Self {
        Self { sheet }
    }

    /// Fetches all leads, in sheet order.
    ///
    /// A row with missing cells or an unrecognized status token is a
    /// contract mismatch with the external sheet and fails the whole scan.
    pub async fn list_leads(&self) -> Result<Vec<Lead>> {
        let rows = self.sheet.read_all_rows().await?;
        let leads = rows
            .iter()
            .map(|cells| parse_lead(cells))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(count = leads.len(), "retrieved leads");
        Ok(leads)
    }

    /// Finds a lead by id. Absence is `Ok(None)`, not a fault.
    pub async fn get_lead(&self, id: &str) -> Result<Option<Lead>> {
        let lead = self.list_leads().await?.into_iter().find(|l| l.id == id);
        if lead.is_none() {
            tracing::warn!(id = %id, "lead not found");
        }
        Ok(lead)
    }

    /// Creates a lead and returns its newly assigned id.
    ///
    /// The id derives from the current row count, so concurrent writers can
    /// collide; the store assumes a single writer. The linked work-item
    /// cell starts out empty.
    pub async fn create_lead(&self, lead: &NewLead) -> Result<String> {
        if lead.name.trim().is_empty() {
            return Err(SyncError::MissingField("name"));
        }
        if lead.email.trim().is_empty() {
            return Err(SyncError::MissingField("email"));
        }

        let rows = self.sheet.read_all_rows().await?;
        let id = (rows.len() + 1).to_string();

        let row = vec![
            id.clone(),
            lead.name.clone(),
            lead.email.clone(),
            lead.status.as_str().to_string(),
            lead.source.clone(),
            String::new(),
        ];
        self.sheet.append_row(&row).await?;

        tracing::info!(id = %id, name = %lead.name, "created lead");
        Ok(id)
    }

    /// Applies a field-level update to the lead with the given id.
    ///
    /// Returns `Ok(false)` when no row carries the id; not-found never
    /// raises.
    pub async fn update_lead(&self, id: &str, patch: &LeadPatch) -> Result<bool> {
        let rows = self.sheet.read_all_rows().await?;
        let Some(index) = rows
            .iter()
            .position(|cells| cells.get(columns::ID).map(String::as_str) == Some(id))
        else {
            tracing::warn!(id = %id, "lead not found for update");
            return Ok(false);
        };

        let row = row_number(index);
        if let Some(name) = &patch.name {
            self.write_field(row, columns::NAME, name).await?;
        }
        if let Some(email) = &patch.email {
            self.write_field(row, columns::EMAIL, email).await?;
        }
        if let Some(status) = &patch.status {
            self.write_field(row, columns::STATUS, status.as_str()).await?;
        }
        if let Some(source) = &patch.source {
            self.write_field(row, columns::SOURCE, source).await?;
        }
        if let Some(link) = &patch.linked_work_item_id {
            self.write_field(row, columns::LINKED_WORK_ITEM_ID, link)
                .await?;
        }

        tracing::info!(id = %id, "updated lead");
        Ok(true)
    }

    async fn write_field(&self, row: u32, offset: usize, value: &str) -> Result<()> {
        self.sheet
            .write_cell(row, column_number(offset), value)
            .await
    }
}

fn parse_lead(cells: &[String]) -> Result<Lead> {
    if cells.len() < columns::COUNT {
        return Err(SyncError::Configuration(format!(
            "sheet row has {} cells, expected {}",
            cells.len(),
            columns::COUNT
        )));
    }

    let linked = &cells[columns::LINKED_WORK_ITEM_ID];
    Ok(Lead {
        id: cells[columns::ID].clone(),
        name: cells[columns::NAME].clone(),
        email: cells[columns::EMAIL].clone(),
        status: cells[columns::STATUS].parse()?,
        source: cells[columns::SOURCE].clone(),
        linked_work_item_id: (!linked.is_empty()).then(|| linked.clone()),
    })
}
