//! Compact binary frames of glyphs, postcard encoded and COBS framed, so that each frame ends in a zero byte

/// Lets postcard's COBS flavour write straight into a caller's `Vec`, so the buffer can be reused between frames
struct FrameBuffer<'a>(&'a mut Vec<u8>);

impl postcard::ser_flavors::Flavor for FrameBuffer<'_> {
    type Output = ();

    fn try_push(&mut self, byte: u8) -> postcard::Result<()> {
        self.0.push(byte);
        Ok(())
    }

    fn try_extend(&mut self, bytes: &[u8]) -> postcard::Result<()> {
        self.0.extend_from_slice(bytes);
        Ok(())
    }

    fn finalize(self) -> postcard::Result<()> {
        Ok(())
    }
}

// The COBS flavour patches earlier bytes once each run of non-zero bytes is known
impl std::ops::Index<usize> for FrameBuffer<'_> {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl std::ops::IndexMut<usize> for FrameBuffer<'_> {
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.0[index]
    }
}

/// Encode `value` as a single frame, replacing the contents of `buffer`
pub fn encode_value<'a, T: serde::Serialize>(
    value: &T,
    buffer: &'a mut Vec<u8>,
) -> postcard::Result<&'a [u8]> {
    buffer.clear();

    postcard::serialize_with_flavor(
        value,
        postcard::ser_flavors::Cobs::try_new(FrameBuffer(&mut *buffer))?,
    )?;

    Ok(buffer)
}

/// Decode a single frame. The frame is decoded in place, so `buffer` is overwritten
pub fn decode_value<'de, T: serde::Deserialize<'de>>(buffer: &'de mut [u8]) -> postcard::Result<T> {
    postcard::from_bytes_cobs(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bitmap, Glyph, GLYPHS, POUND_CHAR};

    #[test]
    fn pound_char_round_trip() {
        let mut buffer = Vec::new();
        let mut frame = encode_value(POUND_CHAR.rows(), &mut buffer).unwrap().to_vec();

        let rows: [u8; 8] = decode_value(&mut frame).unwrap();

        assert_eq!(
            rows,
            [0b00111, 0b01100, 0b01000, 0b11110, 0b01000, 0b01000, 0b11111, 0b00000]
        );
    }

    #[test]
    fn frames_end_in_a_single_zero() {
        let mut buffer = Vec::new();

        for glyph in GLYPHS.iter() {
            let frame = encode_value(glyph, &mut buffer).unwrap();

            assert_eq!(frame.last(), Some(&0));
            assert!(!frame[..frame.len() - 1].contains(&0), "{}", glyph.name);
        }
    }

    #[test]
    fn each_frame_replaces_the_last() {
        let mut buffer = Vec::new();

        let first = encode_value(&POUND_CHAR, &mut buffer).unwrap().len();
        let second = encode_value(&POUND_CHAR, &mut buffer).unwrap().len();

        assert_eq!(first, second);
        assert_eq!(buffer.len(), first);
    }

    #[test]
    fn glyphs_round_trip() {
        let mut buffer = Vec::new();

        for glyph in GLYPHS.iter() {
            let mut frame = encode_value(glyph, &mut buffer).unwrap().to_vec();
            let decoded: Glyph<String> = decode_value(&mut frame).unwrap();

            assert_eq!(decoded, glyph.to_owned_name());
        }
    }

    #[test]
    fn decoding_rejects_bad_bitmaps() {
        let mut buffer = Vec::new();
        let mut frame = encode_value(&vec![0u8, 0, 0, 0, 0b100000, 0, 0, 0], &mut buffer)
            .unwrap()
            .to_vec();

        assert!(decode_value::<Bitmap>(&mut frame).is_err());
    }
}
