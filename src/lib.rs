//! A rope over a splay tree of characters.
//!
//! The document is fixed at construction; the only edit is relocating a
//! substring with [`Rope::process`], which is built from rank-based
//! `split` and `merge` on the underlying [`tree::Forest`].
//!
//! ```
//! use splay_rope::Rope;
//!
//! let mut rope: Rope = "hlelowrold".chars().collect();
//! rope.process(1, 2, 2).unwrap();
//! assert_eq!(rope.to_string(), "hlleowrold");
//! ```

pub mod error;
pub mod rope;
pub mod script;
pub mod tree;
pub mod util;

pub use self::error::{RopeError, SplitError};
pub use self::rope::{CutPaste, Rope};
