//! FSC (Funebra Screen Code) v1 text format.
//!
//! ```text
//! FSC1;cols=32;rows=18;thr=0.5
//! bn0,12,5,1
//! bn1,13,5,1
//! ```
//!
//! - **Header**: `FSC1` followed by `;key=value` pairs; `cols`, `rows`, `thr`
//!   are always written, further keys are carried through
//! - **Point lines**: `<id>,<x>,<y>,<v>` with ids carrying the `bn` prefix
//! - **Numbers**: integers without a decimal point, otherwise at most four
//!   decimals with trailing zeros removed

pub mod decode;
pub mod encode;
pub mod header;
pub mod number;

pub use decode::{decode, FscDocument, Skip};
pub use encode::encode;
pub use header::{FscMeta, MetaValue, FSC_MAGIC};
pub use number::{parse_number, trim_num};
