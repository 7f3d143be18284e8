use crate::error::SniffError;

pub(crate) const TLS_HEADER_LEN: usize = 5;
pub(crate) const TLS_HANDSHAKE_CONTENT_TYPE: u8 = 0x16;

/// 一条已验证的 TLS 记录
///
/// `fragment` 是记录负载 (Handshake 消息)，记录层版本号随之返回，
/// 供握手层判断 SSL 3.0 无扩展块的特殊情况。
#[derive(Debug)]
pub(crate) struct Record<'a> {
    pub version_major: u8,
    pub version_minor: u8,
    pub fragment: &'a [u8],
}

/// 解码 TLS 记录层外壳
///
/// 校验内容类型、版本和记录长度，拒绝 SSLv2 兼容格式的 ClientHello。
pub(crate) fn decode(data: &[u8]) -> Result<Record<'_>, SniffError> {
    // Record header: ContentType(1), Version(2), Length(2)
    if data.len() < TLS_HEADER_LEN {
        return Err(SniffError::Incomplete);
    }

    // SSL 2.0 compatible Client Hello: high bit of the length byte set
    // and the message type is Client Hello (RFC 5246 Appendix E.2)
    if data[0] & 0x80 != 0 && data[2] == 1 {
        return Err(SniffError::Malformed("SSLv2 compatible client hello"));
    }

    if data[0] != TLS_HANDSHAKE_CONTENT_TYPE {
        return Err(SniffError::Malformed("not a handshake record"));
    }

    let version_major = data[1];
    let version_minor = data[2];
    if version_major < 3 {
        return Err(SniffError::Malformed("unsupported record version"));
    }

    // 声明的记录总长 = 负载长度 + 记录头
    let declared = u16::from_be_bytes([data[3], data[4]]) as usize + TLS_HEADER_LEN;
    if data.len() < declared {
        // 记录未抓取完整
        return Err(SniffError::Incomplete);
    }

    Ok(Record {
        version_major,
        version_minor,
        fragment: &data[TLS_HEADER_LEN..declared],
    })
}
