use tracing::trace;

use crate::cursor::Cursor;
use crate::error::SniffError;

pub(crate) const TLS_HANDSHAKE_TYPE_CLIENT_HELLO: u8 = 0x01;

/// 解码 ClientHello 握手消息，定位扩展块
///
/// 固定字段直接跳过，变长字段按长度前缀跳过。返回 `Ok(None)` 表示
/// 该握手合法但没有扩展块 (SSL 3.0 的情形)，对应 NotFound。
pub(crate) fn decode(
    fragment: &[u8],
    version_major: u8,
    version_minor: u8,
) -> Result<Option<&[u8]>, SniffError> {
    let mut cur = Cursor::new(fragment);

    match cur.take_u8() {
        Some(TLS_HANDSHAKE_TYPE_CLIENT_HELLO) => {}
        Some(_) => return Err(SniffError::Malformed("not a client hello")),
        None => return Err(SniffError::Incomplete),
    }

    // Skip past fixed length fields:
    //   3  Length
    //   2  Version (again)
    //   32 Random
    cur.skip(37).ok_or(SniffError::Incomplete)?;

    // Session ID, Cipher Suites, Compression Methods
    cur.skip_vec_u8().ok_or(SniffError::Incomplete)?;
    cur.skip_vec_u16().ok_or(SniffError::Incomplete)?;
    cur.skip_vec_u8().ok_or(SniffError::Incomplete)?;

    // SSL 3.0 的 ClientHello 可以在压缩方法后直接结束，没有扩展块
    if cur.is_empty() && version_major == 3 && version_minor == 0 {
        trace!("SSL 3.0 client hello without extensions");
        return Ok(None);
    }

    let ext_len = cur.take_u16().ok_or(SniffError::Incomplete)? as usize;
    trace!(ext_len, "extensions block located");

    // 记录本身已完整，扩展块声明长度超出剩余空间属于结构错误
    let exts = cur
        .take(ext_len)
        .ok_or(SniffError::Malformed("extensions overrun record"))?;
    Ok(Some(exts))
}
