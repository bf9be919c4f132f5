use crate::{Input, Result};

/// Opaque length-prefixed byte buffer. The payload's internal structure is
/// defined by whoever wrote it (error tables, line number tables); this
/// crate only carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FBuf {
    pub buf: Vec<u8>,
}
impl FBuf {
    /// Reads a u2 length then that many raw bytes. A zero length means the
    /// buffer was never recorded and yields `None`.
    pub fn read<I: Input>(input: &mut I) -> Result<Option<FBuf>> {
        let len = input.u2()?;
        if len == 0 {
            return Ok(None);
        }
        Ok(Some(FBuf {
            buf: input.bytes(len)?,
        }))
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[cfg(test)]
mod read_tests {
    use super::*;
    use crate::PodInput;

    #[test]
    fn it_should_read_a_length_prefixed_buffer() {
        let mut input = PodInput::new(&[0x00, 0x03, 0x01, 0x02, 0x03], 0);
        let buf = FBuf::read(&mut input).unwrap().unwrap();
        assert_eq!(buf.buf, vec![0x01, 0x02, 0x03]);
    }

    #[test]
    fn it_should_yield_none_for_a_zero_length() {
        let mut input = PodInput::new(&[0x00, 0x00], 0);
        assert_eq!(FBuf::read(&mut input).unwrap(), None);
    }

    #[test]
    fn it_should_fail_if_the_payload_is_truncated() {
        let mut input = PodInput::new(&[0x00, 0x04, 0x01], 0);
        assert!(FBuf::read(&mut input).is_err());
    }
}
