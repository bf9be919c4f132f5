// Decodes the attr tables attached to pod type and slot definitions. Only
// the attrs we understand are parsed into fields; everything else is skipped
// over by its declared byte length.

mod attrs;
mod buf;
mod error;
mod input;

pub use attrs::{
    FAttrs, FacetValue, ERR_TABLE_ATTR, FACETS_ATTR, LEGACY_FACETS_VERSION, LINE_NUMBERS_ATTR,
    LINE_NUMBER_ATTR, OLD_FACETS_ATTR, SOURCE_FILE_ATTR,
};
pub use buf::FBuf;
pub use error::FcodeError;
pub use input::{Input, PodInput};

pub type Result<T, E = FcodeError> = std::result::Result<T, E>;
