pub mod art_pipeline;
pub mod file_scanner;
pub mod source_loader;

pub use art_pipeline::{ArtPipeline, BatchReport, RenderOptions, RenderedFile};
pub use file_scanner::{discover_inputs, output_path};
pub use source_loader::SourceData;
