// This is a part of rust-charmap.
// Copyright (c) 2013, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Macros for testing.
//!
//! Every macro checks both the text and the buffer variant of a conversion,
//! which should always agree.

macro_rules! assert_decode_ok(
    ($this:expr, $input:expr, $output:expr) => ({
        use $crate::types::Codec as _;
        let input: &[u8] = &$input;
        let output: &str = &$output;
        let (buf, err) = $this.decode(input);
        assert!(err.is_none(), "decode should succeed, but instead returned {:?}", err);
        assert!(output == buf, "decode should push {:?}, but instead pushed {:?}", output, buf);
        let (bytes, err) = $this.decode_to_buffer(input);
        assert!(err.is_none(), "decode_to_buffer should succeed, but instead returned {:?}", err);
        assert!(output.as_bytes() == &bytes[..],
                "decode_to_buffer should push {:?}, but instead pushed {:?}", output.as_bytes(), bytes);
    })
);

macro_rules! assert_decode_err(
    ($this:expr, $input:expr, $output:expr) => ({
        use $crate::types::Codec as _;
        let input: &[u8] = &$input;
        let output: &str = &$output;
        let (buf, err) = $this.decode(input);
        assert!(err == Some($crate::types::Error::InvalidCodepoint),
                "decode should return InvalidCodepoint, but instead returned {:?}", err);
        assert!(output == buf, "decode should push {:?}, but instead pushed {:?}", output, buf);
        let (bytes, err) = $this.decode_to_buffer(input);
        assert!(err == Some($crate::types::Error::InvalidCodepoint),
                "decode_to_buffer should return InvalidCodepoint, but instead returned {:?}", err);
        assert!(output.as_bytes() == &bytes[..],
                "decode_to_buffer should push {:?}, but instead pushed {:?}", output.as_bytes(), bytes);
    })
);

macro_rules! assert_encode_ok(
    ($this:expr, $input:expr, $output:expr) => ({
        use $crate::types::Codec as _;
        let input: &str = &$input;
        let output: &[u8] = &$output;
        let (buf, err) = $this.encode(input);
        assert!(err.is_none(), "encode should succeed, but instead returned {:?}", err);
        assert!(output == &buf[..], "encode should push {:?}, but instead pushed {:?}", output, buf);
        let (buf, err) = $this.encode_to_buffer(input.as_bytes());
        assert!(err.is_none(), "encode_to_buffer should succeed, but instead returned {:?}", err);
        assert!(output == &buf[..],
                "encode_to_buffer should push {:?}, but instead pushed {:?}", output, buf);
    })
);

macro_rules! assert_encode_err(
    ($this:expr, $input:expr, $output:expr) => ({
        use $crate::types::Codec as _;
        let input: &str = &$input;
        let output: &[u8] = &$output;
        let (buf, err) = $this.encode(input);
        assert!(err == Some($crate::types::Error::InvalidCodepoint),
                "encode should return InvalidCodepoint, but instead returned {:?}", err);
        assert!(output == &buf[..], "encode should push {:?}, but instead pushed {:?}", output, buf);
        let (buf, err) = $this.encode_to_buffer(input.as_bytes());
        assert!(err == Some($crate::types::Error::InvalidCodepoint),
                "encode_to_buffer should return InvalidCodepoint, but instead returned {:?}", err);
        assert!(output == &buf[..],
                "encode_to_buffer should push {:?}, but instead pushed {:?}", output, buf);
    })
);
