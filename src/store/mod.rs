//! Storage boundary: a capability trait plus the in-process implementation.
//!
//! Handlers own the access policy; the store is a partitioned append log
//! with no security awareness of its own. A durable backend can be swapped
//! in behind the same trait without touching any handler.

mod memory;
mod types;

pub use memory::MemStore;
pub use types::{
    Account, FinanceDraft, FinanceRecord, InjuryDraft, InjuryRecord, MetricDraft, NewAccount,
    NutritionDraft, NutritionRecord, PerformanceRecord,
};

use async_trait::async_trait;

#[async_trait]
pub trait Store: Send + Sync {
    async fn get_account(&self, id: i64) -> anyhow::Result<Option<Account>>;
    async fn get_account_by_username(&self, username: &str) -> anyhow::Result<Option<Account>>;
    /// Fails if the username is already taken.
    async fn create_account(&self, new: NewAccount) -> anyhow::Result<Account>;

    async fn append_metric(&self, draft: MetricDraft) -> anyhow::Result<PerformanceRecord>;
    async fn metrics_for(&self, owner: i64) -> anyhow::Result<Vec<PerformanceRecord>>;

    async fn append_nutrition(&self, draft: NutritionDraft) -> anyhow::Result<NutritionRecord>;
    async fn nutrition_for(&self, owner: i64) -> anyhow::Result<Vec<NutritionRecord>>;

    async fn append_injury(&self, draft: InjuryDraft) -> anyhow::Result<InjuryRecord>;
    async fn injuries_for(&self, owner: i64) -> anyhow::Result<Vec<InjuryRecord>>;

    async fn append_finance(&self, draft: FinanceDraft) -> anyhow::Result<FinanceRecord>;
    async fn finances_for(&self, owner: i64) -> anyhow::Result<Vec<FinanceRecord>>;
}
