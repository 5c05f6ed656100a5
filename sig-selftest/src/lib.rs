//! 簽名 scheme 一致性自測工具
//!
//! 本 crate 對一個固定三操作合約（密鑰對生成、簽名、驗證）的
//! 簽名 scheme 實現執行機械化的一致性與回歸檢查:
//! 1. 簽名-驗證往返必須恢復原始消息
//! 2. 單字節篡改後的信封必須被拒絕
//! 3. 在不相關公鑰下的簽名必須被拒絕
//! 4. 對各操作做粗粒度牆鐘計時
//!
//! # 架構
//!
//! ```text
//! ┌──────────────┐
//! │   Reporter   │  ← run_all: fail-fast 循環 + 計時彙總
//! └──────┬───────┘
//!        │
//!   ┌────┴─────┬────────────┐
//!   ▼          ▼            ▼
//! Trial     Corruption   SignatureScheme
//! Runner    Strategy     (pqc-scheme)
//! ```
//!
//! # 示例用法
//!
//! ```no_run
//! use pqc_scheme::MlDsa65Scheme;
//! use rand::rngs::OsRng;
//! use sig_selftest::{print_summary, run_all, NTESTS};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut rng = OsRng;
//!     let summary = run_all::<MlDsa65Scheme, _>(NTESTS, &mut rng)?;
//!     print_summary(&summary);
//!     Ok(())
//! }
//! ```

// 公開模塊
pub mod corrupt;
pub mod error;
pub mod report;
pub mod trial;

// Re-export 常用類型
pub use corrupt::{select_corruption, Corruption};
pub use error::{HarnessError, Result};
pub use report::{print_summary, run_all, PhaseAverages, RunSummary, TimingAccumulator};
pub use trial::{run_cross_key_trial, run_trial, PhaseTimings};

/// 每次運行的獨立試驗次數
pub const NTESTS: u32 = 30;

/// 每條隨機消息的字節長度
pub const MLEN: usize = 59;

/// Context 字符串的字節長度（本工具中恆為全零）
pub const CTXLEN: usize = 14;
