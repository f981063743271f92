//! test data shared between the font-blob crates.

/// A font source with every glyph in [`glyphs::ALL`], in order.
pub static SOURCE_8X8: &str = include_str!("../test_data/font8x8.toml");

/// The translation table declared in [`SOURCE_8X8`].
pub static SOURCE_8X8_XLAT: &[u8] = &[0, 5, 1, 2, 3, 4];

pub mod glyphs {
    //! 8x8 glyphs, one byte per row, leftmost pixel in bit 7.

    pub const BLANK: [u8; 8] = [0x00; 8];

    #[rustfmt::skip]
    pub const LATIN_A: [u8; 8] = [
        0b0001_1000,
        0b0011_1100,
        0b0110_0110,
        0b0110_0110,
        0b0111_1110,
        0b0110_0110,
        0b0110_0110,
        0b0000_0000,
    ];

    #[rustfmt::skip]
    pub const LATIN_F: [u8; 8] = [
        0b0111_1110,
        0b0110_0000,
        0b0110_0000,
        0b0111_1100,
        0b0110_0000,
        0b0110_0000,
        0b0110_0000,
        0b0000_0000,
    ];

    #[rustfmt::skip]
    pub const SMILEY: [u8; 8] = [
        0b0011_1100,
        0b0100_0010,
        0b1010_0101,
        0b1000_0001,
        0b1010_0101,
        0b1001_1001,
        0b0100_0010,
        0b0011_1100,
    ];

    pub const CHECKERBOARD: [u8; 8] = [0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55];

    pub const SOLID: [u8; 8] = [0xFF; 8];

    pub static ALL: &[[u8; 8]] = &[BLANK, LATIN_A, LATIN_F, SMILEY, CHECKERBOARD, SOLID];
}
