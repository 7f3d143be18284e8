use tracing::trace;

use crate::cursor::Cursor;
use crate::hostname::Hostname;

pub(crate) const NAME_TYPE_HOST_NAME: u8 = 0x00;

/// 遍历 server_name 扩展值里的名称列表，取出 host_name 条目
///
/// 列表总长度字段只跳过不校验 (与上层扩展长度冗余)。条目长度
/// 超出缓冲区时放弃整个扫描，返回 None。
pub(crate) fn extract_host_name(value: &[u8]) -> Option<Hostname> {
    let mut cur = Cursor::new(value);

    // ServerNameList length
    cur.skip(2)?;

    // 每个条目: name_type(1) + length(2) + name
    loop {
        let name_type = cur.take_u8()?;
        let len = cur.take_u16()? as usize;
        let name = cur.take(len)?;

        if name_type == NAME_TYPE_HOST_NAME {
            trace!(len, "host_name entry found");
            return Some(Hostname::from_bytes(name));
        }
    }
}
