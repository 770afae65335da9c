//! DWG 文件头签名分析
//!
//! 读取文件前 32 字节，前 6 字节为版本签名（如 `AC1014`），
//! 与已知 AutoCAD 格式版本表比对。

use crate::error::FileError;
use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

/// 读取的文件头长度
pub const HEADER_LEN: usize = 32;

/// 版本签名长度
pub const SIGNATURE_LEN: usize = 6;

/// 已知的 DWG 版本签名
static VERSION_SIGNATURES: LazyLock<HashMap<&'static [u8], &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (&b"AC1027"[..], "AutoCAD 2013"),
        (&b"AC1024"[..], "AutoCAD 2010"),
        (&b"AC1021"[..], "AutoCAD 2007"),
        (&b"AC1018"[..], "AutoCAD 2004"),
        (&b"AC1015"[..], "AutoCAD 2000"),
        (&b"AC1014"[..], "AutoCAD R14"),
        (&b"AC1012"[..], "AutoCAD R13"),
        (&b"AC1009"[..], "AutoCAD R12"),
        (&b"AC1006"[..], "AutoCAD R10"),
        (&b"AC1004"[..], "AutoCAD R9"),
        (&b"AC1002"[..], "AutoCAD R2.6"),
        (&b"AC1001"[..], "AutoCAD R2.5"),
    ])
});

/// 文件签名分析结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileSignature {
    pub is_dwg: bool,
    /// 可读版本名，未知时为 `Unknown (<签名>)`
    pub version: String,
    /// 签名原始字节（按 ASCII 尽力解码）
    pub version_code: String,
    pub file_size: u64,
    /// 文件头十六进制
    pub header_hex: String,
}

impl FileSignature {
    /// 从文件头字节解析
    pub fn from_header(header: &[u8], file_size: u64) -> Result<Self, FileError> {
        if header.len() < SIGNATURE_LEN {
            return Err(FileError::MalformedFile(
                "File too small to be a valid DWG file".to_string(),
            ));
        }

        let signature = &header[..SIGNATURE_LEN];
        let version_code = decode_ascii(signature);
        let version = match lookup_version(signature) {
            Some(name) => name.to_string(),
            None => format!("Unknown ({})", version_code),
        };

        Ok(Self {
            is_dwg: true,
            version,
            version_code,
            file_size,
            header_hex: hex::encode(&header[..header.len().min(HEADER_LEN)]),
        })
    }

    /// 是否为版本表中的已知版本
    pub fn is_known_version(&self) -> bool {
        lookup_version(self.version_code.as_bytes()).is_some()
    }

    /// `"<version> (<size> bytes)"`
    pub fn describe(&self) -> String {
        format!("{} ({} bytes)", self.version, self.file_size)
    }
}

/// 查询版本签名
pub fn lookup_version(signature: &[u8]) -> Option<&'static str> {
    VERSION_SIGNATURES.get(signature).copied()
}

/// 分析文件签名
pub fn analyze(path: &Path) -> Result<FileSignature, FileError> {
    let file = File::open(path)?;
    let file_size = file.metadata()?.len();

    let mut header = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64).read_to_end(&mut header)?;

    FileSignature::from_header(&header, file_size)
}

/// ASCII 尽力解码，丢弃非 ASCII 字节
fn decode_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| b as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(bytes).expect("Failed to write");
        file.flush().expect("Failed to flush");
        file
    }

    #[test]
    fn test_r14_header() {
        let mut bytes = b"AC1014".to_vec();
        bytes.extend_from_slice(&[0u8; 58]);
        let file = write_temp(&bytes);

        let sig = analyze(file.path()).expect("Failed to analyze");
        assert!(sig.is_dwg);
        assert_eq!(sig.version, "AutoCAD R14");
        assert_eq!(sig.version_code, "AC1014");
        assert_eq!(sig.file_size, 64);
        assert_eq!(sig.header_hex.len(), HEADER_LEN * 2);
        assert!(sig.header_hex.starts_with("414331303134"));
        assert!(sig.is_known_version());
    }

    #[test]
    fn test_exact_signature_only() {
        let file = write_temp(b"AC1014");
        let sig = analyze(file.path()).expect("Failed to analyze");
        assert_eq!(sig.version, "AutoCAD R14");
        assert_eq!(sig.header_hex, "414331303134");
        assert_eq!(sig.describe(), "AutoCAD R14 (6 bytes)");
    }

    #[test]
    fn test_unknown_signature() {
        let file = write_temp(b"XYZ123 and some more bytes");
        let sig = analyze(file.path()).expect("Failed to analyze");
        assert!(sig.version.starts_with("Unknown ("));
        assert_eq!(sig.version, "Unknown (XYZ123)");
        assert!(!sig.is_known_version());
    }

    #[test]
    fn test_unknown_signature_drops_non_ascii() {
        let sig = FileSignature::from_header(&[b'A', 0xFF, b'C', 0x80, b'1', b'2'], 6)
            .expect("Failed to parse");
        assert_eq!(sig.version_code, "AC12");
        assert_eq!(sig.version, "Unknown (AC12)");
    }

    #[test]
    fn test_short_header_is_malformed() {
        let file = write_temp(b"AC10");
        let result = analyze(file.path());
        assert!(matches!(result, Err(FileError::MalformedFile(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = analyze(&dir.path().join("missing.dwg"));
        assert!(matches!(result, Err(FileError::Io(_))));
    }

    #[test]
    fn test_all_known_versions() {
        for (code, name) in [
            ("AC1027", "AutoCAD 2013"),
            ("AC1024", "AutoCAD 2010"),
            ("AC1021", "AutoCAD 2007"),
            ("AC1018", "AutoCAD 2004"),
            ("AC1015", "AutoCAD 2000"),
            ("AC1012", "AutoCAD R13"),
            ("AC1009", "AutoCAD R12"),
            ("AC1006", "AutoCAD R10"),
            ("AC1004", "AutoCAD R9"),
            ("AC1002", "AutoCAD R2.6"),
            ("AC1001", "AutoCAD R2.5"),
        ] {
            assert_eq!(lookup_version(code.as_bytes()), Some(name));
        }
    }

    #[test]
    fn test_default_is_empty_analysis() {
        let sig = FileSignature::default();
        assert!(!sig.is_dwg);
        assert_eq!(sig.describe(), " (0 bytes)");
    }
}
