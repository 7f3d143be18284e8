use std::fmt;

/// FQDN 的最大长度 (来自 DNS 的历史限制)
pub const FQDN_MAX: usize = 255;

/// 固定容量的主机名缓冲区
///
/// 内联持有最多 `FQDN_MAX` 字节的名称和一个显式的 0 终止符，
/// 解码过程中不产生任何堆分配。超长名称被截断到 `FQDN_MAX`。
#[derive(Clone, PartialEq, Eq)]
pub struct Hostname {
    buf: [u8; FQDN_MAX + 1],
    len: usize,
}

impl Hostname {
    /// 从原始名称字节构造，超过 `FQDN_MAX` 的部分被丢弃
    pub(crate) fn from_bytes(name: &[u8]) -> Self {
        let len = name.len().min(FQDN_MAX);
        let mut buf = [0u8; FQDN_MAX + 1];
        buf[..len].copy_from_slice(&name[..len]);
        // buf[len] 保持为 0，即终止符
        Hostname { buf, len }
    }

    /// 名称字节，不含终止符
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// 名称字节加上末尾的 0 终止符
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..self.len + 1]
    }

    /// 按 UTF-8 解释名称，协议不保证编码，失败时返回 None
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Hostname")
            .field(&String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}
