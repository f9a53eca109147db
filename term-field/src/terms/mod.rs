//! Term conversion service.
//!
//! Converts between typed values and their textual representation under a
//! culture and an optional format. Field controls use it to turn retrieved
//! content into values and values into text to write.
//!
//! ## Formats
//!
//! | Format | Meaning |
//! |--------|---------|
//! | `N2` | grouped number with 2 decimals (`1,234.50`) |
//! | `F1` | fixed number with 1 decimal (`1234.5`) |
//! | `D4` | zero-padded integer (`0042`) |
//! | `%d.%m.%Y` | strftime pattern for dates and times |
//! | `{0} USD` | template; the value replaces `{0}` |
//! | `Total: {0:N2}` | template with a value spec |

mod case;
mod convert;
mod culture;
mod format;
mod number;
mod options;
mod resolver;

pub use case::TermCase;
pub use convert::{enum_from_term, enum_to_term, TermConvert, TermEnum};
pub use culture::Culture;
pub use options::TermOptions;
pub use resolver::TermResolver;
