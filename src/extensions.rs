use tracing::trace;

use crate::cursor::Cursor;
use crate::error::SniffError;

pub(crate) const EXTENSION_TYPE_SERVER_NAME: u16 = 0x0000;

/// 在扩展块中查找 server_name 扩展
///
/// 协议规定每种扩展最多出现一次，命中即停止扫描。其余扩展只按
/// 声明长度跳过，不解析内容。
pub(crate) fn find_server_name(exts: &[u8]) -> Result<Option<&[u8]>, SniffError> {
    let mut cur = Cursor::new(exts);

    // 每个扩展头 4 字节: type(2) + length(2)
    loop {
        let ext_type = match cur.take_u16() {
            Some(t) => t,
            None => return Ok(None),
        };
        let len = match cur.take_u16() {
            Some(l) => l as usize,
            None => return Ok(None),
        };

        if ext_type == EXTENSION_TYPE_SERVER_NAME {
            trace!(len, "server_name extension matched");
            let value = cur
                .take(len)
                .ok_or(SniffError::Malformed("server_name extension overruns block"))?;
            return Ok(Some(value));
        }

        // 跳过无关扩展。跳过量也做边界校验：越界说明长度字段不可信，
        // 后续不可能再凑出完整扩展头，结束扫描
        if cur.skip(len).is_none() {
            return Ok(None);
        }
    }
}
