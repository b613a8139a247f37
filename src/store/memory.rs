use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use anyhow::bail;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::types::{
    Account, FinanceDraft, FinanceRecord, InjuryDraft, InjuryRecord, MetricDraft, NewAccount,
    NutritionDraft, NutritionRecord, PerformanceRecord,
};
use super::Store;

#[derive(Default)]
struct Inner {
    accounts: HashMap<i64, Account>,
    metrics: HashMap<i64, Vec<PerformanceRecord>>,
    nutrition: HashMap<i64, Vec<NutritionRecord>>,
    injuries: HashMap<i64, Vec<InjuryRecord>>,
    finances: HashMap<i64, Vec<FinanceRecord>>,
}

/// Transient in-process store. Every mutation happens under the write
/// lock; ids come from one counter shared across all entity kinds, so two
/// concurrent creations can never collide.
pub struct MemStore {
    next_id: AtomicI64,
    inner: RwLock<Inner>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            inner: RwLock::new(Inner::default()),
        }
    }

    fn alloc_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemStore {
    async fn get_account(&self, id: i64) -> anyhow::Result<Option<Account>> {
        let inner = self.inner.read().await;
        Ok(inner.accounts.get(&id).cloned())
    }

    async fn get_account_by_username(&self, username: &str) -> anyhow::Result<Option<Account>> {
        let inner = self.inner.read().await;
        Ok(inner
            .accounts
            .values()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn create_account(&self, new: NewAccount) -> anyhow::Result<Account> {
        let mut inner = self.inner.write().await;
        if inner.accounts.values().any(|a| a.username == new.username) {
            bail!("username already exists: {}", new.username);
        }
        let account = Account {
            id: self.alloc_id(),
            username: new.username,
            password_hash: new.password_hash,
            name: new.name,
            role: new.role,
            weight: new.weight,
            daily_calorie_goal: new.daily_calorie_goal,
            height_cm: new.height_cm,
            age: new.age,
            gender: new.gender,
            activity_level: new.activity_level,
            state: new.state,
            sport: new.sport,
            academy_affiliation: new.academy_affiliation,
            national_level: new.national_level,
        };
        inner.accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn append_metric(&self, draft: MetricDraft) -> anyhow::Result<PerformanceRecord> {
        let record = PerformanceRecord {
            id: self.alloc_id(),
            user_id: draft.user_id,
            date: draft.date,
            metric_type: draft.metric_type,
            value: draft.value,
            unit: draft.unit,
            notes: draft.notes,
        };
        let mut inner = self.inner.write().await;
        inner
            .metrics
            .entry(record.user_id)
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn metrics_for(&self, owner: i64) -> anyhow::Result<Vec<PerformanceRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.metrics.get(&owner).cloned().unwrap_or_default())
    }

    async fn append_nutrition(&self, draft: NutritionDraft) -> anyhow::Result<NutritionRecord> {
        let record = NutritionRecord {
            id: self.alloc_id(),
            user_id: draft.user_id,
            date: draft.date,
            meal_type: draft.meal_type,
            food_items: draft.food_items,
            calories: draft.calories,
            protein: draft.protein,
            notes: draft.notes,
        };
        let mut inner = self.inner.write().await;
        inner
            .nutrition
            .entry(record.user_id)
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn nutrition_for(&self, owner: i64) -> anyhow::Result<Vec<NutritionRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.nutrition.get(&owner).cloned().unwrap_or_default())
    }

    async fn append_injury(&self, draft: InjuryDraft) -> anyhow::Result<InjuryRecord> {
        let record = InjuryRecord {
            id: self.alloc_id(),
            user_id: draft.user_id,
            injury_type: draft.injury_type,
            body_part: draft.body_part,
            date_occurred: draft.date_occurred,
            status: draft.status,
            severity: draft.severity,
            notes: draft.notes,
        };
        let mut inner = self.inner.write().await;
        inner
            .injuries
            .entry(record.user_id)
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn injuries_for(&self, owner: i64) -> anyhow::Result<Vec<InjuryRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.injuries.get(&owner).cloned().unwrap_or_default())
    }

    async fn append_finance(&self, draft: FinanceDraft) -> anyhow::Result<FinanceRecord> {
        let record = FinanceRecord {
            id: self.alloc_id(),
            user_id: draft.user_id,
            date: draft.date,
            category: draft.category,
            amount: draft.amount,
            description: draft.description,
            is_income: draft.is_income,
        };
        let mut inner = self.inner.write().await;
        inner
            .finances
            .entry(record.user_id)
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn finances_for(&self, owner: i64) -> anyhow::Result<Vec<FinanceRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.finances.get(&owner).cloned().unwrap_or_default())
    }
}
