//! Webstash engine: the link-discovery-to-saved-document pipeline.
mod batch;
mod classify;
mod config;
mod convert;
mod decode;
mod extract;
mod fetch;
mod frontmatter;
mod index;
mod links;
mod paths;
mod persist;
mod types;

pub use batch::{batch_save, DEFAULT_CONCURRENCY};
pub use classify::LinkFilter;
pub use config::{OutputPathResolver, OUTPUT_PATH_VAR};
pub use convert::{Converter, Html2MdConverter};
pub use decode::{decode_page, DecodeError, DecodedPage};
pub use extract::{page_summary, PageSummary};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use frontmatter::{build_document, DocumentMeta};
pub use index::build_index;
pub use links::{collect_links, map_links, scan_links};
pub use paths::{authority, create_unique, derive_path, DerivedPath};
pub use persist::{ensure_output_dir, write_document, PersistError, ReplacingFileWriter};
pub use types::{
    BatchInput, BatchResult, FailureKind, FetchError, FetchMetadata, FetchOutput, InputError,
    MapLinksResult, PageError, SaveOutcome, SaveStatus,
};
