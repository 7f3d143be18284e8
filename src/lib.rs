//! # sni-lite
//!
//! 从抓取到的 TLS 握手字节中提取 SNI (Server Name Indication) 主机名。
//!
//! 输入是从 TCP 流中截获的原始字节缓冲区 (至少包含 TLS 记录的开头)，
//! 解码器逐层下钻: 记录层 → Handshake → ClientHello → 扩展块 →
//! server_name 扩展 → host_name 条目。每一层都有自己的长度字段和
//! 截断检查，任何越界在读取前就被拒绝。
//!
//! 纯函数、无状态、零堆分配，可在多线程中对独立缓冲区并发调用。
//!
//! ```
//! use sni_lite::{sniff_tls_sni, SniffError};
//!
//! // 不足一个记录头
//! assert_eq!(sniff_tls_sni(&[0x16, 0x03]), Err(SniffError::Incomplete));
//! ```

mod cursor;
mod error;
mod extensions;
mod handshake;
mod hostname;
mod record;
mod server_name;

pub use error::SniffError;
pub use hostname::{Hostname, FQDN_MAX};

use tracing::trace;

/// 尝试从数据包中嗅探 TLS SNI (Server Name Indication)
///
/// 返回值:
/// - `Ok(Some(hostname))` — 找到 host_name，超过 [`FQDN_MAX`] 的部分被截断
/// - `Ok(None)` — 是合法的 ClientHello，但没有可用的 server_name
/// - `Err(SniffError::Incomplete)` — 记录未抓取完整，补充字节后可重试
/// - `Err(SniffError::Malformed(_))` — 结构不合法，包括 SSLv2 兼容格式
pub fn sniff_tls_sni(data: &[u8]) -> Result<Option<Hostname>, SniffError> {
    // 1. Record Layer
    let rec = record::decode(data)?;

    // 2. ClientHello Layer
    let exts = match handshake::decode(rec.fragment, rec.version_major, rec.version_minor)? {
        Some(exts) => exts,
        None => return Ok(None),
    };

    // 3. Extensions
    let value = match extensions::find_server_name(exts)? {
        Some(value) => value,
        None => return Ok(None),
    };

    // 4. ServerNameList
    let hostname = server_name::extract_host_name(value);
    if let Some(h) = &hostname {
        trace!(host = %h, "sniffed SNI");
    }
    Ok(hostname)
}
