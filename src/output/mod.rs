// src/output/mod.rs
// =============================================================================
// Everything that ends up on disk.
//
// Submodules:
// - csv: output directory, file names and CSV writing
// - dedup: merging categories into one duplicate-free list
// =============================================================================

mod csv;
mod dedup;

pub use self::csv::{category_file_name, ensure_output_dir, save_to_csv, MERGED_FILE_NAME};
pub use dedup::deduplicate_products;
