// Adapters layer: concrete implementations of the domain ports (content sources, storage, images, links).

pub mod image;
pub mod navigation;
pub mod source;
pub mod storage;
