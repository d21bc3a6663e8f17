//! Read/write access to the readings table.
//!
//! The service stores exactly what it is given. Range checks belong to the
//! caller (see [`crate::validate`]).

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, PaginatorTrait, QueryOrder,
    QuerySelect, Set,
};

use crate::entity::readings;
use crate::pagination::{PageRequest, PagedResult};

/// Fields a caller may supply for a new reading. `id` and the timestamp are
/// always assigned on insert.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewReading {
    pub temperature_c: f64,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl NewReading {
    #[must_use]
    pub fn new(temperature_c: f64) -> Self {
        Self {
            temperature_c,
            ..Self::default()
        }
    }
}

#[derive(Clone)]
pub struct ReadingService {
    db: DatabaseConnection,
}

impl ReadingService {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List one page of readings, newest first.
    ///
    /// Ties on `created_at_utc` are broken by `id` descending, so the most
    /// recently inserted row wins. Pages past the end come back empty with
    /// the real counts.
    ///
    /// # Errors
    ///
    /// Returns `DbErr` if either the count or the page query fails.
    pub async fn list(&self, request: PageRequest) -> Result<PagedResult<readings::Model>, DbErr> {
        let total_count = readings::Entity::find().count(&self.db).await?;

        let items = if request.offset() >= total_count {
            Vec::new()
        } else {
            readings::Entity::find()
                .order_by_desc(readings::Column::CreatedAtUtc)
                .order_by_desc(readings::Column::Id)
                .offset(request.offset())
                .limit(request.page_size())
                .all(&self.db)
                .await?
        };

        Ok(PagedResult::new(items, request, total_count))
    }

    /// Persist a new reading stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `DbErr` if the insert fails; nothing is written in that case.
    pub async fn create(&self, draft: NewReading) -> Result<readings::Model, DbErr> {
        self.create_at(draft, Utc::now()).await
    }

    /// Persist a new reading with an explicit creation time.
    ///
    /// # Errors
    ///
    /// Returns `DbErr` if the insert fails; nothing is written in that case.
    pub async fn create_at(
        &self,
        draft: NewReading,
        created_at_utc: DateTime<Utc>,
    ) -> Result<readings::Model, DbErr> {
        let reading = readings::ActiveModel {
            id: NotSet,
            temperature_c: Set(draft.temperature_c),
            created_at_utc: Set(created_at_utc),
            location: Set(draft.location),
            notes: Set(draft.notes),
        }
        .insert(&self.db)
        .await?;

        tracing::debug!(
            id = reading.id,
            temperature_c = reading.temperature_c,
            "Reading persisted"
        );

        Ok(reading)
    }
}
