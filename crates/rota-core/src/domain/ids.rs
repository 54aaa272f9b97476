//! Domain identifiers (strongly-typed IDs).
//!
//! # Notion のページ ID + Phantom Type パターン
//! roomie / chore / to-do はすべて Notion 上の「ページ」で、ID は Notion が
//! 発行する不透明な文字列です。こちらで採番はしません。
//!
//! `PageId<T>` というジェネリック型で共通実装を提供しつつ、`T` は実行時には
//! 使わない（PhantomData）マーカー型として、コンパイル時の型安全性を提供
//! します。RoomieId を ChoreId のリレーションに入れる、といった取り違えは
//! コンパイルエラーになります。
//!
//! # RunId
//! 1 回の起動を表す ID だけはこちらで採番するので、ULID を使います
//! （時刻でソート可能、調整なしで生成できる）。ログの相関にのみ使います。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// IdMarker は各ページ ID 型のマーカー trait
///
/// Display で使うプレフィックス（"roomie-", "chore-", "todo-"）を提供します。
pub trait IdMarker: Send + Sync + 'static {
    /// Display で使うプレフィックス（例: "roomie-"）
    fn prefix() -> &'static str;
}

/// ジェネリックなページ ID 型
///
/// `T` は PhantomData で、実行時にはメモリを消費しませんが、
/// コンパイル時に型安全性を提供します。
///
/// # 例
/// ```ignore
/// let roomie: RoomieId = PageId::new("1f2a...");
/// let chore: ChoreId = PageId::new("9c04...");
/// // roomie と chore は異なる型なので、混同できない
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId<T: IdMarker> {
    value: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> PageId<T> {
    /// Notion が返した ID 文字列から PageId を作成
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    /// 生の ID 文字列（API リクエストで使う形）
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T: IdMarker> fmt::Display for PageId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.value)
    }
}

// ========================================
// マーカー型の定義
// ========================================

/// Roomie ページのマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoomiePage {}

impl IdMarker for RoomiePage {
    fn prefix() -> &'static str {
        "roomie-"
    }
}

/// Chore ページのマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChorePage {}

impl IdMarker for ChorePage {
    fn prefix() -> &'static str {
        "chore-"
    }
}

/// To-do ページのマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TodoPage {}

impl IdMarker for TodoPage {
    fn prefix() -> &'static str {
        "todo-"
    }
}

// ========================================
// Type Alias（使いやすさのため）
// ========================================

/// Identifier of a Roomie page (read from the roomies collection).
pub type RoomieId = PageId<RoomiePage>;

/// Identifier of a Chore page (read from the chores collection).
pub type ChoreId = PageId<ChorePage>;

/// Identifier of a created to-do page.
pub type TodoId = PageId<TodoPage>;

/// Identifier of one runner invocation (log correlation only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(Ulid);

impl RunId {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl From<Ulid> for RunId {
    fn from(ulid: Ulid) -> Self {
        Self(ulid)
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_are_distinct_types() {
        let roomie = RoomieId::new("aaa");
        let chore = ChoreId::new("bbb");
        let todo = TodoId::new("ccc");

        assert_eq!(roomie.as_str(), "aaa");
        assert_eq!(chore.as_str(), "bbb");
        assert_eq!(todo.as_str(), "ccc");

        // Display のプレフィックスが正しいことを確認
        assert_eq!(roomie.to_string(), "roomie-aaa");
        assert_eq!(chore.to_string(), "chore-bbb");
        assert_eq!(todo.to_string(), "todo-ccc");

        // The whole point: you can't accidentally mix these types.
        // (This is a compile-time property, so we just keep it as a comment.)
        // let _: RoomieId = chore; // <- does not compile
    }

    #[test]
    fn page_id_serializes_as_plain_string() {
        let id = ChoreId::new("9c04f00d");
        let s = serde_json::to_string(&id).unwrap();
        assert_eq!(s, "\"9c04f00d\"");

        let back: ChoreId = serde_json::from_str(&s).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn run_id_displays_with_prefix() {
        let ulid = Ulid::new();
        let run = RunId::from_ulid(ulid);
        assert_eq!(run.to_string(), format!("run-{ulid}"));
        assert_eq!(run.as_ulid(), ulid);
    }

    #[test]
    fn run_ids_are_sortable() {
        // ULID は時刻ベースなので、生成順序でソート可能
        let id1 = RunId::from_ulid(Ulid::new());
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = RunId::from_ulid(Ulid::new());

        assert!(id1 < id2);
    }
}
