/// 对字节切片的安全读取游标
///
/// 所有读取操作都先检查边界再移动位置，越界一律返回 `None`，
/// 保证解析不可信数据时绝不读出切片之外。
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Cursor { data, pos: 0 }
    }

    /// 剩余未读字节数
    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pos == self.data.len()
    }

    /// 取出 n 个字节，不足则返回 None 且不移动位置
    pub(crate) fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        if n > self.remaining() {
            return None;
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Some(slice)
    }

    /// 跳过 n 个字节
    pub(crate) fn skip(&mut self, n: usize) -> Option<()> {
        self.take(n).map(|_| ())
    }

    pub(crate) fn take_u8(&mut self) -> Option<u8> {
        let b = self.take(1)?;
        Some(b[0])
    }

    /// 大端序 u16
    pub(crate) fn take_u16(&mut self) -> Option<u16> {
        let b = self.take(2)?;
        Some(u16::from_be_bytes([b[0], b[1]]))
    }

    /// 跳过一个 u8 长度前缀的变长字段 (长度字节 + 负载)
    pub(crate) fn skip_vec_u8(&mut self) -> Option<()> {
        let len = self.take_u8()? as usize;
        self.skip(len)
    }

    /// 跳过一个 u16 长度前缀的变长字段
    pub(crate) fn skip_vec_u16(&mut self) -> Option<()> {
        let len = self.take_u16()? as usize;
        self.skip(len)
    }
}
