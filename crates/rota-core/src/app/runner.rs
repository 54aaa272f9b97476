//! Runner - 週次割り当ての実行ループ
//!
//! # フロー
//! 1. HouseholdStore::list_chores() — 空なら何もせず正常終了
//! 2. HouseholdStore::list_roomies() — 空ならエラー（割り当て先がない）
//! 3. Rotation::week_offset() + assign() でペアリングを計算
//! 4. ペアごとに TodoDraft を作り、HouseholdStore::create_todo()
//!
//! 1 回の起動で 1 周だけの線形パス。リトライも再開ポイントもありません。
//! 途中で作成に失敗しても残りの chore は処理し、作成済みの to-do は
//! そのまま残します（ロールバックなし）。

use chrono::Days;
use tracing::{Instrument, error, info};

use crate::domain::rotation::{Rotation, assign};
use crate::domain::todo::TodoDraft;
use crate::error::{Result, RotaError};
use crate::ports::{Clock, HouseholdStore, IdGenerator};

use super::report::RunReport;

/// Executes one week's assignment against a [`HouseholdStore`].
pub struct Runner<S, C, I> {
    store: S,
    clock: C,
    ids: I,
    rotation: Rotation,
}

impl<S, C, I> Runner<S, C, I>
where
    S: HouseholdStore,
    C: Clock,
    I: IdGenerator,
{
    pub fn new(store: S, clock: C, ids: I, rotation: Rotation) -> Self {
        Self {
            store,
            clock,
            ids,
            rotation,
        }
    }

    /// Run one invocation end to end.
    ///
    /// # Errors
    /// - [`RotaError::NoRoomies`] when the roomies collection is empty.
    /// - [`RotaError::Api`] when a read fails.
    /// - [`RotaError::Partial`] when some (or all) create calls failed;
    ///   to-dos created before the failure remain.
    pub async fn run(&self) -> Result<RunReport> {
        let run_id = self.ids.run_id();
        let span = tracing::info_span!("rotation_run", %run_id);
        self.run_once().instrument(span).await
    }

    async fn run_once(&self) -> Result<RunReport> {
        let chores = self.store.list_chores().await?;
        if chores.is_empty() {
            info!("no chores found; nothing to do");
            return Ok(RunReport::default());
        }

        let roomies = self.store.list_roomies().await?;
        if roomies.is_empty() {
            return Err(RotaError::NoRoomies);
        }

        let today = self.clock.now().date_naive();
        let week_offset = self.rotation.week_offset(today);
        // Due a calendar week from today. NaiveDate + 7 days cannot overflow
        // for any date this system will ever see.
        let due = today
            .checked_add_days(Days::new(7))
            .ok_or_else(|| RotaError::Config(format!("due date out of range from {today}")))?;

        info!(
            chores = chores.len(),
            roomies = roomies.len(),
            week_offset,
            %due,
            "starting weekly assignment"
        );

        let mut created = 0usize;
        let mut failed = 0usize;

        for pair in assign(&chores, &roomies, week_offset) {
            let draft = TodoDraft::for_assignment(pair.chore, pair.roomie, due);
            match self.store.create_todo(&draft).await {
                Ok(todo_id) => {
                    created += 1;
                    info!(
                        todo = %todo_id,
                        chore = %pair.chore.name,
                        roomie = %pair.roomie.name,
                        "created task"
                    );
                }
                Err(e) => {
                    failed += 1;
                    error!(
                        chore = %pair.chore.name,
                        roomie = %pair.roomie.name,
                        error = %e,
                        "failed to create task"
                    );
                }
            }
        }

        info!(created, failed, total = chores.len(), "run complete");

        if failed > 0 {
            return Err(RotaError::Partial { created, failed });
        }

        Ok(RunReport {
            chores: chores.len(),
            roomies: roomies.len(),
            created,
            failed,
        })
    }
}
