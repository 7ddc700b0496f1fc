//! In-memory `CrudClient` for tests.
//!
//! Behaves like a small items server and lets tests inject failures,
//! server-side title normalization and held responses.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::{ApiError, ApiResult, CrudClient};
use crate::models::{Item, ItemDraft, ItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Create,
    Update,
    Delete,
    Fetch,
}

#[derive(Default)]
struct FakeState {
    items: Vec<Item>,
    next_id: u64,
    trim_titles: bool,
    failures: HashMap<Op, VecDeque<ApiError>>,
    gates: HashMap<Op, VecDeque<oneshot::Receiver<()>>>,
    calls: HashMap<Op, usize>,
}

pub struct FakeClient {
    state: Mutex<FakeState>,
}

impl FakeClient {
    pub fn with_items(items: Vec<Item>) -> Self {
        let next_id = items
            .iter()
            .filter_map(|i| match i.id {
                ItemId::Num(n) => Some(n),
                ItemId::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            state: Mutex::new(FakeState {
                items,
                next_id,
                ..Default::default()
            }),
        }
    }

    /// The next call of `op` fails with `err`
    pub fn fail_next(&self, op: Op, err: ApiError) {
        self.state.lock().unwrap().failures.entry(op).or_default().push_back(err);
    }

    /// Trim titles like a normalizing server would
    pub fn trim_titles(&self) {
        self.state.lock().unwrap().trim_titles = true;
    }

    /// The next call of `op` waits until the returned sender fires (or drops)
    pub fn hold_next(&self, op: Op) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.state.lock().unwrap().gates.entry(op).or_default().push_back(rx);
        tx
    }

    pub fn calls(&self, op: Op) -> usize {
        self.state.lock().unwrap().calls.get(&op).copied().unwrap_or(0)
    }

    pub fn server_items(&self) -> Vec<Item> {
        self.state.lock().unwrap().items.clone()
    }

    /// Record the call and wait on its gate, then take any injected failure
    async fn enter(&self, op: Op) -> ApiResult<()> {
        let gate = {
            let mut state = self.state.lock().unwrap();
            *state.calls.entry(op).or_default() += 1;
            state.gates.get_mut(&op).and_then(|q| q.pop_front())
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        let mut state = self.state.lock().unwrap();
        match state.failures.get_mut(&op).and_then(|q| q.pop_front()) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn normalize(&self, draft: &ItemDraft) -> ItemDraft {
        if self.state.lock().unwrap().trim_titles {
            ItemDraft::new(draft.title.trim(), draft.body.clone())
        } else {
            draft.clone()
        }
    }
}

#[async_trait(?Send)]
impl CrudClient for FakeClient {
    async fn create_item(&self, draft: &ItemDraft) -> ApiResult<Item> {
        self.enter(Op::Create).await?;
        let draft = self.normalize(draft);
        if draft.title.is_empty() {
            return Err(ApiError::validation("title is required"));
        }
        let mut state = self.state.lock().unwrap();
        let item = Item::new(state.next_id, draft.title, draft.body);
        state.next_id += 1;
        state.items.push(item.clone());
        Ok(item)
    }

    async fn update_item(&self, id: &ItemId, draft: &ItemDraft) -> ApiResult<Item> {
        self.enter(Op::Update).await?;
        let draft = self.normalize(draft);
        let mut state = self.state.lock().unwrap();
        let slot = state
            .items
            .iter_mut()
            .find(|i| &i.id == id)
            .ok_or_else(|| ApiError::not_found(format!("item {}", id)))?;
        slot.title = draft.title;
        slot.body = draft.body;
        Ok(slot.clone())
    }

    async fn delete_item(&self, id: &ItemId) -> ApiResult<()> {
        self.enter(Op::Delete).await?;
        let mut state = self.state.lock().unwrap();
        let before = state.items.len();
        state.items.retain(|i| &i.id != id);
        if state.items.len() == before {
            return Err(ApiError::not_found(format!("item {}", id)));
        }
        Ok(())
    }

    async fn fetch_items(&self) -> ApiResult<Vec<Item>> {
        self.enter(Op::Fetch).await?;
        Ok(self.server_items())
    }
}
