use serde::{Deserialize, Serialize};

/// Media file extensions the storage enumerator is expected to deliver.
/// Everything else is invisible to version resolution.
pub const MEDIA_EXTENSIONS: [&str; 5] = ["mp4", "mov", "avi", "mkv", "mxf"];

/// A filename observed in the export location.
/// Candidates are plain names, never paths and never open handles; the
/// resolver inspects them and forgets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFile {
    /// Filename including its extension
    pub name: String,
}

impl CandidateFile {
    /// Create a new candidate from a filename
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The filename with its final extension removed.
    /// A name without a recognizable extension is returned unchanged.
    pub fn stem(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => {
                let ext = &self.name[idx + 1..];
                if ext.is_empty() || ext.contains('/') {
                    &self.name
                } else {
                    &self.name[..idx]
                }
            }
            None => &self.name,
        }
    }

    /// The final extension, lowercased, without the dot
    pub fn extension(&self) -> Option<String> {
        match self.name.rfind('.') {
            Some(idx) if idx + 1 < self.name.len() => {
                Some(self.name[idx + 1..].to_lowercase())
            }
            _ => None,
        }
    }

    /// Whether the name carries one of the known media extensions.
    /// The resolver assumes its input is already filtered; this check is the
    /// contract the storage enumerator has to satisfy.
    pub fn has_media_extension(&self) -> bool {
        match self.extension() {
            Some(ext) => MEDIA_EXTENSIONS.contains(&ext.as_str()),
            None => false,
        }
    }
}

impl std::fmt::Display for CandidateFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Encoder preset the new filename is generated for.
/// The preset decides both the codec tag embedded in the filename and the
/// container extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CodecKind {
    /// H.264 delivery at a fixed bitrate (e.g. 10 or 48 Mbps)
    H264 { bitrate_mbps: u32 },

    /// Apple ProRes 422 master
    ProRes422,

    /// Apple ProRes 4444 master
    ProRes444,
}

impl CodecKind {
    /// Parse a settings-store preset identifier ("10mbps", "48mbps",
    /// "prores422", "prores444")
    pub fn from_preset(preset: &str) -> crate::domain::DomainResult<Self> {
        match preset {
            "prores422" => Ok(CodecKind::ProRes422),
            "prores444" => Ok(CodecKind::ProRes444),
            other => match other.strip_suffix("mbps").and_then(|n| n.parse::<u32>().ok()) {
                Some(bitrate_mbps) => Ok(CodecKind::H264 { bitrate_mbps }),
                None => Err(crate::domain::DomainError::UnknownCodecPreset(
                    other.to_string(),
                )),
            },
        }
    }

    /// The codec tag embedded in generated filenames
    pub fn tag(&self) -> String {
        match self {
            CodecKind::H264 { bitrate_mbps } => format!("{}mbps", bitrate_mbps),
            CodecKind::ProRes422 => "prores422".to_string(),
            CodecKind::ProRes444 => "prores444".to_string(),
        }
    }

    /// Container extension for the generated file.
    /// ProRes masters go into .mov, H.264 delivery into .mp4.
    pub fn extension(&self) -> &'static str {
        match self {
            CodecKind::ProRes422 | CodecKind::ProRes444 => ".mov",
            CodecKind::H264 { .. } => ".mp4",
        }
    }
}

impl std::fmt::Display for CodecKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_strips_final_extension() {
        assert_eq!(CandidateFile::new("clip_V2.mp4").stem(), "clip_V2");
        assert_eq!(CandidateFile::new("archive.tar.mov").stem(), "archive.tar");
        assert_eq!(CandidateFile::new("no_extension").stem(), "no_extension");
        assert_eq!(CandidateFile::new("trailing.").stem(), "trailing.");
    }

    #[test]
    fn test_media_extension_check() {
        assert!(CandidateFile::new("clip.mp4").has_media_extension());
        assert!(CandidateFile::new("CLIP.MOV").has_media_extension());
        assert!(CandidateFile::new("master.mxf").has_media_extension());
        assert!(!CandidateFile::new("notes.txt").has_media_extension());
        assert!(!CandidateFile::new("no_extension").has_media_extension());
    }

    #[test]
    fn test_codec_preset_parsing() {
        assert_eq!(
            CodecKind::from_preset("10mbps").unwrap(),
            CodecKind::H264 { bitrate_mbps: 10 }
        );
        assert_eq!(
            CodecKind::from_preset("48mbps").unwrap(),
            CodecKind::H264 { bitrate_mbps: 48 }
        );
        assert_eq!(CodecKind::from_preset("prores422").unwrap(), CodecKind::ProRes422);
        assert_eq!(CodecKind::from_preset("prores444").unwrap(), CodecKind::ProRes444);
        assert!(CodecKind::from_preset("dnxhd").is_err());
    }

    #[test]
    fn test_codec_tag_and_extension() {
        let h264 = CodecKind::H264 { bitrate_mbps: 10 };
        assert_eq!(h264.tag(), "10mbps");
        assert_eq!(h264.extension(), ".mp4");

        assert_eq!(CodecKind::ProRes422.tag(), "prores422");
        assert_eq!(CodecKind::ProRes422.extension(), ".mov");
        assert_eq!(CodecKind::ProRes444.extension(), ".mov");
    }
}
