//! 自測工具統一錯誤類型定義
//!
//! 本模塊定義了簽名自測過程中可能檢測到的所有合約違規，
//! 使用 thiserror crate 提供良好的錯誤鏈和上下文信息。
//! 每個變體都攜帶定位問題所需的診斷字段（長度、原始字節）。

use pqc_scheme::SchemeError;
use thiserror::Error;

/// 自測合約違規類型
///
/// 涵蓋所有致命的檢測結果：
/// - 信封 / 恢復消息長度錯誤
/// - 有效信封驗證失敗
/// - 往返消息不一致
/// - 篡改信封被接受（trivial forgery）
/// - 錯誤公鑰下驗證通過
#[derive(Error, Debug)]
pub enum HarnessError {
    /// 簽名信封長度錯誤
    ///
    /// 附加簽名操作必須返回 message 長度加固定簽名開銷的信封
    #[error("Signed envelope length wrong: expected {expected} bytes, got {actual}")]
    EnvelopeLength { expected: usize, actual: usize },

    /// 恢復消息長度錯誤
    #[error("Recovered message length wrong: expected {expected} bytes, got {actual}")]
    RecoveredLength { expected: usize, actual: usize },

    /// 未篡改的信封驗證失敗
    ///
    /// 攜帶簽名與消息的十六進制轉儲以供離線分析
    #[error("Verification failed on untampered envelope\nsig = {signature_hex}\nm = {message_hex}")]
    VerifyRejected {
        signature_hex: String,
        message_hex: String,
    },

    /// 恢復的消息與原始消息不一致
    #[error("Messages don't match\nexpected = {expected_hex}\nrecovered = {recovered_hex}")]
    RoundTripMismatch {
        expected_hex: String,
        recovered_hex: String,
    },

    /// 篡改後的信封仍然驗證通過
    ///
    /// 這是簽名 scheme 的嚴重正確性缺陷
    #[error("Trivial forgery possible: byte {index} perturbed by {delta:#04x} still verifies")]
    TrivialForgery { index: usize, delta: u8 },

    /// 簽名在不匹配的公鑰下驗證通過
    #[error("Signature did verify correctly under wrong public key")]
    CrossKeyAcceptance,

    /// 簽名 scheme 本身返回了意外錯誤
    #[error("Signature scheme error: {0}")]
    Scheme(#[from] SchemeError),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
