use std::{
    collections::HashMap,
    sync::{Arc, OnceLock},
};

use log::warn;

use crate::{FBuf, FcodeError, Input, Result};

pub const ERR_TABLE_ATTR: &str = "ErrTable";
pub const FACETS_ATTR: &str = "Facets";
pub const LINE_NUMBER_ATTR: &str = "LineNumber";
pub const LINE_NUMBERS_ATTR: &str = "LineNumbers";
pub const OLD_FACETS_ATTR: &str = "OldFacets";
pub const SOURCE_FILE_ATTR: &str = "SourceFile";

/// The fcode version whose pods still carry facets under the current attr
/// name. See the migration note in [`FAttrs::read`].
pub const LEGACY_FACETS_VERSION: u32 = 0x0100_0045;

/// Facet initial-value in its parsed literal form, produced by the input's
/// `init_val` hook. Evaluation belongs to the runtime; this crate only
/// carries it between the pod and the reflection layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetValue(String);
impl FacetValue {
    pub fn new(literal: impl Into<String>) -> Self {
        Self(literal.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Closed set of attr kinds this decoder understands. Anything else falls
/// through to the declared-length skip.
#[derive(Debug, PartialEq)]
enum AttrKind {
    ErrTable,
    LineNumber,
    LineNumbers,
    SourceFile,
    Unknown,
}
impl AttrKind {
    fn from_name(name: &str) -> Self {
        match name {
            ERR_TABLE_ATTR => AttrKind::ErrTable,
            LINE_NUMBER_ATTR => AttrKind::LineNumber,
            LINE_NUMBERS_ATTR => AttrKind::LineNumbers,
            SOURCE_FILE_ATTR => AttrKind::SourceFile,
            _ => AttrKind::Unknown,
        }
    }
}

/// Decoded attr table for one type or slot definition. Built once by
/// [`FAttrs::read`] and read-only afterwards; a declaration with no attrs
/// shares the single instance behind [`FAttrs::none`].
#[derive(Debug, Default)]
pub struct FAttrs {
    pub err_table: Option<FBuf>,
    pub facets: HashMap<String, FacetValue>,
    pub line_num: u16,
    pub line_nums: Option<FBuf>,
    pub source_file: Option<String>,
}

impl FAttrs {
    /// The shared empty attr table.
    pub fn none() -> Arc<FAttrs> {
        static NONE: OnceLock<Arc<FAttrs>> = OnceLock::new();
        NONE.get_or_init(|| Arc::new(FAttrs::default())).clone()
    }

    pub fn facet(&self, qname: &str) -> Option<&FacetValue> {
        self.facets.get(qname)
    }

    /// Reads a u2-count-prefixed attr table. Attrs we don't recognize are
    /// skipped over by their declared length; a skip that comes up short is
    /// a corrupt stream and fails the whole table.
    pub fn read<I: Input>(input: &mut I) -> Result<Arc<FAttrs>> {
        let n = input.u2()?;
        if n == 0 {
            return Ok(FAttrs::none());
        }
        let mut attrs = FAttrs::default();
        for _ in 0..n {
            let name = input.name()?;

            // One-time migration bridge: pods at LEGACY_FACETS_VERSION wrote
            // facets under the current name, newer pods write the migrated
            // spelling "OldFacets". Remove once such pods are gone.
            if (input.fcode_version() == LEGACY_FACETS_VERSION && name == FACETS_ATTR)
                || name == OLD_FACETS_ATTR
            {
                attrs.facets(input)?;
                continue;
            }

            match AttrKind::from_name(&name) {
                AttrKind::ErrTable => attrs.err_table(input)?,
                AttrKind::LineNumber => attrs.line_number(input)?,
                AttrKind::LineNumbers => attrs.line_numbers(input)?,
                AttrKind::SourceFile => attrs.source_file(input)?,
                AttrKind::Unknown => {
                    if name.starts_with('F') {
                        // TODO: decode the new facets format once it lands
                        warn!("unrecognized facets attr: {}", name);
                    }
                    let declared = input.u2()?;
                    let skipped = input.skip(declared)?;
                    if skipped != declared {
                        return Err(FcodeError::TruncatedAttr {
                            name,
                            declared,
                            skipped,
                        });
                    }
                }
            }
        }
        Ok(Arc::new(attrs))
    }

    fn err_table<I: Input>(&mut self, input: &mut I) -> Result<()> {
        self.err_table = FBuf::read(input)?;
        Ok(())
    }

    fn facets<I: Input>(&mut self, input: &mut I) -> Result<()> {
        input.u2()?; // length, framing only
        let n = input.u2()?;
        for _ in 0..n {
            let index = input.u2()?;
            let qname = input.symbol_qname(index)?;
            let literal = input.utf()?;
            let val = input.init_val(literal)?;
            self.facets.insert(qname, val);
        }
        Ok(())
    }

    fn line_number<I: Input>(&mut self, input: &mut I) -> Result<()> {
        input.u2()?;
        self.line_num = input.u2()?;
        Ok(())
    }

    fn line_numbers<I: Input>(&mut self, input: &mut I) -> Result<()> {
        self.line_nums = FBuf::read(input)?;
        Ok(())
    }

    fn source_file<I: Input>(&mut self, input: &mut I) -> Result<()> {
        input.u2()?;
        self.source_file = Some(input.utf()?);
        Ok(())
    }
}

#[cfg(test)]
mod attr_kind_tests {
    use super::*;

    #[test]
    fn it_should_map_known_names() {
        assert_eq!(AttrKind::from_name("ErrTable"), AttrKind::ErrTable);
        assert_eq!(AttrKind::from_name("LineNumber"), AttrKind::LineNumber);
        assert_eq!(AttrKind::from_name("LineNumbers"), AttrKind::LineNumbers);
        assert_eq!(AttrKind::from_name("SourceFile"), AttrKind::SourceFile);
    }

    #[test]
    fn it_should_not_match_on_prefix() {
        assert_eq!(AttrKind::from_name("LineNumberX"), AttrKind::Unknown);
        assert_eq!(AttrKind::from_name("Line"), AttrKind::Unknown);
        // facets routing is version-gated and handled before kind dispatch
        assert_eq!(AttrKind::from_name("Facets"), AttrKind::Unknown);
    }
}

#[cfg(test)]
mod none_tests {
    use super::*;
    use crate::PodInput;

    #[test]
    fn it_should_share_one_empty_instance() {
        assert!(Arc::ptr_eq(&FAttrs::none(), &FAttrs::none()));
    }

    #[test]
    fn it_should_return_the_shared_instance_for_a_zero_count() {
        let mut input = PodInput::new(&[0x00, 0x00], 0);
        let attrs = FAttrs::read(&mut input).unwrap();
        assert!(Arc::ptr_eq(&attrs, &FAttrs::none()));
    }
}
