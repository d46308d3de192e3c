pub mod artifact;
pub mod brand;
pub mod error;
pub mod items;
pub mod next_data;
pub mod scan;
mod text;

pub use brand::{extract_brand_file, extract_brand_items, BrandOptions};
pub use error::ExtractError;
pub use items::{parse_items, parse_items_file};
pub use next_data::{extract_next_data, extract_next_data_file, DEFAULT_NEXT_DATA_MARKER};
pub use scan::{
    drop_iteratively, render_finding, scan_json_file, scan_json_tree, Heuristic, JsonPath,
    ScanFinding, DEFAULT_SAMPLE_SIZE,
};
