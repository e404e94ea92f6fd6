//! Route path helpers for hash-routed documentation sites.
//!
//! Document paths often contain characters that are not safe inside a URL
//! fragment (spaces, parentheses, ampersands). This crate provides:
//!
//! - [`normalize_path`]: percent-encode the reserved characters
//! - [`is_valid_path`]: cheap sanity check before resolution
//! - [`suggested_paths`]: alternative candidates for a failed lookup
//! - [`AliasTable`]: first-match-wins rewriting of logical paths to on-disk paths
//!
//! All functions are pure and never fail.
//!
//! # Example
//!
//! ```
//! use docsite_paths::{AliasRule, AliasTable, normalize_path, suggested_paths};
//!
//! assert_eq!(normalize_path("/01_Java/04_JVM&JDK/"), "/01_Java/04_JVM%26JDK/");
//! assert_eq!(suggested_paths(Some("A B")), vec!["A%20B", "AB", "a b"]);
//!
//! let table = AliasTable::new(vec![AliasRule::new(
//!     "/02_db/02_ElasticSearch/(.*)",
//!     "/02_db/02_Elastic%20Search/$1",
//! )])
//! .unwrap();
//! assert_eq!(
//!     table.resolve("/02_db/02_ElasticSearch/intro.md"),
//!     "/02_db/02_Elastic%20Search/intro.md"
//! );
//! ```

mod alias;
mod normalize;

pub use alias::{AliasError, AliasRule, AliasTable};
pub use normalize::{is_valid_path, needs_encoding, normalize_path, suggested_paths};
