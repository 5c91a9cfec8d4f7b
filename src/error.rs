//! 错误类型

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// 配置无法解析，或包含未知的配置项
    #[error("invalid widget configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// 配置引用了资源包中不存在的图片
    #[error("asset `{0}` is not in the asset bundle")]
    MissingAsset(String),

    #[error("failed to load image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("font error: {0}")]
    Font(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
