// src/output/csv.rs
// =============================================================================
// CSV output.
//
// Every file has the same columns, in this order:
//   name,url,category,price
// The header row is written even when there are no products.
// =============================================================================

use crate::error::{Result, ScrapeError};
use crate::model::Product;
use std::fs;
use std::path::Path;

pub const MERGED_FILE_NAME: &str = "all_products.csv";

const HEADER: [&str; 4] = ["name", "url", "category", "price"];

/// Creates the output directory (and its parents) if it does not exist.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| ScrapeError::Io {
        path: dir.display().to_string(),
        source,
    })
}

/// File name for a category: "SKIN CARE & BATH" -> "SKIN_CARE_AND_BATH.csv"
///
/// A category that would land on the merged file gets a `_category` suffix.
pub fn category_file_name(category: &str) -> String {
    let stem: String = category
        .trim()
        .replace(' ', "_")
        .replace('&', "AND")
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
        .collect();

    let file_name = format!("{}.csv", stem);
    if file_name.eq_ignore_ascii_case(MERGED_FILE_NAME) {
        format!("{}_category.csv", stem)
    } else {
        file_name
    }
}

/// Writes products to `path`, replacing any existing file.
pub fn save_to_csv(products: &[Product], path: &Path) -> Result<()> {
    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(HEADER)?;
    for product in products {
        writer.serialize(product)?;
    }

    writer.flush().map_err(|source| ScrapeError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn product(name: &str, url: &str) -> Product {
        Product {
            name: name.to_string(),
            url: url.to_string(),
            category: "HAIR".to_string(),
            price: "Rs. 1,250".to_string(),
        }
    }

    #[test]
    fn test_category_file_name() {
        assert_eq!(category_file_name("HAIR"), "HAIR.csv");
        assert_eq!(category_file_name("SKIN CARE & BATH"), "SKIN_CARE_AND_BATH.csv");
        assert_eq!(category_file_name("a/b"), "a_b.csv");
    }

    #[test]
    fn test_category_file_name_never_clobbers_merged_file() {
        assert_eq!(category_file_name("all_products"), "all_products_category.csv");
        assert_eq!(category_file_name("ALL PRODUCTS"), "ALL_PRODUCTS_category.csv");
        assert_ne!(category_file_name("all products"), MERGED_FILE_NAME);
    }

    #[test]
    fn test_ensure_output_dir_creates_parents() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("out").join("run-1");
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Existing directory is fine
        ensure_output_dir(&nested).unwrap();
    }

    #[test]
    fn test_save_to_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("HAIR.csv");
        let products = vec![
            product("Comb", "https://shop.example.com/details/comb/1/"),
            product("Oil, 200ml", "https://shop.example.com/details/oil/2/"),
        ];

        save_to_csv(&products, &path).unwrap();

        let mut reader = ::csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers, ::csv::StringRecord::from(HEADER.to_vec()));

        let rows: Vec<Product> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows, products);
    }

    #[test]
    fn test_save_empty_writes_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        save_to_csv(&[], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "name,url,category,price\n");
    }
}
