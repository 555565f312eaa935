//! Foundation types for FOLIO.
//!
//! Holds everything the terminal engine and the app both need: the styled
//! output line type, the read-only resume content payload, and the error
//! enum. No rendering or dispatch logic lives here.

pub mod content;
pub mod error;
pub mod line;

pub use content::Content;
pub use error::{FolioError, Result};
pub use line::{OutputLine, Style};
