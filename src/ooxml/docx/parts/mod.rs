//! Story part capability for Word documents.
//!
//! A story part is the document subdivision (main body, header, footer,
//! footnotes, ...) that owns a run. The run model never touches the package
//! directly; it asks its story part to resolve styles and to register
//! images, through the [`StoryPart`] trait defined here.
use std::path::{Path, PathBuf};

use crate::common::style::Length;
use crate::ooxml::docx::enums::WdStyleType;
use crate::ooxml::docx::styles::{BaseStyle, StyleRef};
use crate::ooxml::error::Result;
use crate::ooxml::oxml::Element;

/// Operations a run needs from the part that contains it.
///
/// Implementers typically wrap a document, header or footer part and its
/// styles part. [`new_pic_inline`](crate::ooxml::docx::shape::new_pic_inline)
/// builds the DrawingML subtree once the image has been related to the part.
pub trait StoryPart {
    /// Resolve a style by id, falling back to the default style of
    /// `style_type` when `style_id` is `None` or does not match.
    fn get_style(&self, style_id: Option<&str>, style_type: WdStyleType) -> Result<BaseStyle>;

    /// Style id to store for `style`, or `None` when the default style of
    /// `style_type` is meant (the reference is then removed).
    fn get_style_id(&self, style: Option<StyleRef<'_>>, style_type: WdStyleType) -> Result<Option<String>>;

    /// Register `image` with the part and return a new `wp:inline` element
    /// sized to `width`/`height`; a missing dimension is derived from the
    /// image's native size.
    fn new_pic_inline(&self, image: &ImageSource, width: Option<Length>, height: Option<Length>) -> Result<Element>;
}

/// Image format recognized from a file signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
}

impl ImageFormat {
    /// Detect image format from byte signature.
    pub fn detect_from_bytes(data: &[u8]) -> Option<Self> {
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some(Self::Png);
        }
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }
        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Some(Self::Gif);
        }
        if data.starts_with(b"BM") {
            return Some(Self::Bmp);
        }
        if data.starts_with(&[0x49, 0x49, 0x2A, 0x00]) || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A]) {
            return Some(Self::Tiff);
        }
        None
    }

    /// Get file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
        }
    }
}

/// Where the bytes of a picture come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// An image file on disk
    Path(PathBuf),
    /// In-memory image data
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Read the image data, loading it from disk for [`ImageSource::Path`].
    pub fn load(&self) -> Result<Vec<u8>> {
        match self {
            Self::Path(path) => Ok(std::fs::read(path)?),
            Self::Bytes(data) => Ok(data.clone()),
        }
    }

    /// File name recorded in the picture's `descr`/`name` attributes.
    ///
    /// In-memory images get a generic `image.<ext>` name.
    pub fn filename(&self) -> String {
        match self {
            Self::Path(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            Self::Bytes(data) => {
                let ext = ImageFormat::detect_from_bytes(data).map_or("bin", |format| format.extension());
                format!("image.{}", ext)
            },
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(data: Vec<u8>) -> Self {
        Self::Bytes(data)
    }
}
