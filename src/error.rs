use thiserror::Error;

/// SNI 嗅探失败的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SniffError {
    /// TLS 记录尚未抓取完整，调用方可以补充更多字节后重试
    #[error("incomplete TLS record, more bytes required")]
    Incomplete,

    /// 结构性错误，该连接不是可识别的 TLS ClientHello
    #[error("malformed TLS ClientHello: {0}")]
    Malformed(&'static str),
}
