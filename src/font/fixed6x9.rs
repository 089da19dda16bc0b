//! Built-in 6x9 ASCII font
//!
//! Printable ASCII only, 5x8 glyph cells plus one column and one row of
//! spacing. `?` stands in for characters the font does not cover.

use super::Font;

pub static FIXED_6X9: Font = Font {
    name: "fixed6x9",
    height: 9,
    index_mask: 0x3f,
    default_char: Some('?' as u32),
    offset: &OFFSET,
    index: &INDEX,
    content: &CONTENT,
};

static OFFSET: [u32; 64] = [
    0, 3, 6, 9, 12, 15, 18, 21, 24, 27, 30, 33, 36, 39, 42, 45,
    48, 51, 54, 57, 60, 63, 66, 69, 72, 75, 78, 81, 84, 87, 90, 93,
    96, 101, 106, 111, 116, 121, 126, 131, 136, 141, 146, 151, 156, 161, 166, 171,
    176, 181, 186, 191, 196, 201, 206, 211, 216, 221, 226, 231, 236, 241, 246, 251,
];

static INDEX: [u32; 254] = [
    70, 288, 0, 70, 297, 0, 70, 306, 0, 70,
    315, 0, 70, 324, 0, 70, 333, 0, 70, 342,
    0, 70, 351, 0, 70, 360, 0, 70, 369, 0,
    70, 378, 0, 70, 387, 0, 70, 396, 0, 70,
    405, 0, 70, 414, 0, 70, 423, 0, 70, 432,
    0, 70, 441, 0, 70, 450, 0, 70, 459, 0,
    70, 468, 0, 70, 477, 0, 70, 486, 0, 70,
    495, 0, 70, 504, 0, 70, 513, 0, 70, 522,
    0, 70, 531, 0, 70, 540, 0, 70, 549, 0,
    70, 558, 0, 70, 567, 0, 6, 0, 70, 576,
    0, 6, 9, 70, 585, 0, 6, 18, 70, 594,
    0, 6, 27, 70, 603, 0, 6, 36, 70, 612,
    0, 6, 45, 70, 621, 0, 6, 54, 70, 630,
    0, 6, 63, 70, 639, 0, 6, 72, 70, 648,
    0, 6, 81, 70, 657, 0, 6, 90, 70, 666,
    0, 6, 99, 70, 675, 0, 6, 108, 70, 684,
    0, 6, 117, 70, 693, 0, 6, 126, 70, 702,
    0, 6, 135, 70, 711, 0, 6, 144, 70, 720,
    0, 6, 153, 70, 729, 0, 6, 162, 70, 738,
    0, 6, 171, 70, 747, 0, 6, 180, 70, 756,
    0, 6, 189, 70, 765, 0, 6, 198, 70, 774,
    0, 6, 207, 70, 783, 0, 6, 216, 70, 792,
    0, 6, 225, 70, 801, 0, 6, 234, 70, 810,
    0, 6, 243, 70, 819, 0, 6, 252, 70, 828,
    0, 6, 261, 70, 837, 0, 6, 270, 70, 846,
    0, 6, 279, 0,
];

static CONTENT: [u32; 855] = [
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000, 0x20000000, 0x00000000, 0x20000000, 0x00000000, 0x00000000,
    0x50000000, 0x50000000, 0x50000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x50000000, 0x50000000, 0xf8000000, 0x50000000, 0xf8000000, 0x50000000, 0x50000000, 0x00000000, 0x00000000,
    0x20000000, 0x78000000, 0xa0000000, 0x70000000, 0x28000000, 0xf0000000, 0x20000000, 0x00000000, 0x00000000,
    0xc0000000, 0xc8000000, 0x10000000, 0x20000000, 0x40000000, 0x98000000, 0x18000000, 0x00000000, 0x00000000,
    0x40000000, 0xa0000000, 0xa0000000, 0x40000000, 0xa8000000, 0x90000000, 0x68000000, 0x00000000, 0x00000000,
    0x30000000, 0x30000000, 0x20000000, 0x40000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x10000000, 0x20000000, 0x40000000, 0x40000000, 0x40000000, 0x20000000, 0x10000000, 0x00000000, 0x00000000,
    0x40000000, 0x20000000, 0x10000000, 0x10000000, 0x10000000, 0x20000000, 0x40000000, 0x00000000, 0x00000000,
    0x20000000, 0xa8000000, 0x70000000, 0xf8000000, 0x70000000, 0xa8000000, 0x20000000, 0x00000000, 0x00000000,
    0x00000000, 0x20000000, 0x20000000, 0xf8000000, 0x20000000, 0x20000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x30000000, 0x30000000, 0x20000000, 0x40000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0xf8000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x30000000, 0x30000000, 0x00000000, 0x00000000,
    0x00000000, 0x08000000, 0x10000000, 0x20000000, 0x40000000, 0x80000000, 0x00000000, 0x00000000, 0x00000000,
    0x70000000, 0x88000000, 0x98000000, 0xa8000000, 0xc8000000, 0x88000000, 0x70000000, 0x00000000, 0x00000000,
    0x20000000, 0x60000000, 0x20000000, 0x20000000, 0x20000000, 0x20000000, 0x70000000, 0x00000000, 0x00000000,
    0x70000000, 0x88000000, 0x08000000, 0x70000000, 0x80000000, 0x80000000, 0xf8000000, 0x00000000, 0x00000000,
    0xf8000000, 0x08000000, 0x10000000, 0x30000000, 0x08000000, 0x88000000, 0x70000000, 0x00000000, 0x00000000,
    0x10000000, 0x30000000, 0x50000000, 0x90000000, 0xf8000000, 0x10000000, 0x10000000, 0x00000000, 0x00000000,
    0xf8000000, 0x80000000, 0xf0000000, 0x08000000, 0x08000000, 0x88000000, 0x70000000, 0x00000000, 0x00000000,
    0x38000000, 0x40000000, 0x80000000, 0xf0000000, 0x88000000, 0x88000000, 0x70000000, 0x00000000, 0x00000000,
    0xf8000000, 0x08000000, 0x08000000, 0x10000000, 0x20000000, 0x40000000, 0x80000000, 0x00000000, 0x00000000,
    0x70000000, 0x88000000, 0x88000000, 0x70000000, 0x88000000, 0x88000000, 0x70000000, 0x00000000, 0x00000000,
    0x70000000, 0x88000000, 0x88000000, 0x78000000, 0x08000000, 0x10000000, 0xe0000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x20000000, 0x00000000, 0x20000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x20000000, 0x00000000, 0x20000000, 0x20000000, 0x40000000, 0x00000000, 0x00000000,
    0x08000000, 0x10000000, 0x20000000, 0x40000000, 0x20000000, 0x10000000, 0x08000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xf8000000, 0x00000000, 0xf8000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x40000000, 0x20000000, 0x10000000, 0x08000000, 0x10000000, 0x20000000, 0x40000000, 0x00000000, 0x00000000,
    0x70000000, 0x88000000, 0x08000000, 0x30000000, 0x20000000, 0x00000000, 0x20000000, 0x00000000, 0x00000000,
    0x70000000, 0x88000000, 0xa8000000, 0xb8000000, 0xb0000000, 0x80000000, 0x78000000, 0x00000000, 0x00000000,
    0x20000000, 0x50000000, 0x88000000, 0x88000000, 0xf8000000, 0x88000000, 0x88000000, 0x00000000, 0x00000000,
    0xf0000000, 0x88000000, 0x88000000, 0xf0000000, 0x88000000, 0x88000000, 0xf0000000, 0x00000000, 0x00000000,
    0x70000000, 0x88000000, 0x80000000, 0x80000000, 0x80000000, 0x88000000, 0x70000000, 0x00000000, 0x00000000,
    0xf0000000, 0x88000000, 0x88000000, 0x88000000, 0x88000000, 0x88000000, 0xf0000000, 0x00000000, 0x00000000,
    0xf8000000, 0x80000000, 0x80000000, 0xf0000000, 0x80000000, 0x80000000, 0xf8000000, 0x00000000, 0x00000000,
    0xf8000000, 0x80000000, 0x80000000, 0xf0000000, 0x80000000, 0x80000000, 0x80000000, 0x00000000, 0x00000000,
    0x78000000, 0x88000000, 0x80000000, 0x80000000, 0x98000000, 0x88000000, 0x78000000, 0x00000000, 0x00000000,
    0x88000000, 0x88000000, 0x88000000, 0xf8000000, 0x88000000, 0x88000000, 0x88000000, 0x00000000, 0x00000000,
    0x70000000, 0x20000000, 0x20000000, 0x20000000, 0x20000000, 0x20000000, 0x70000000, 0x00000000, 0x00000000,
    0x38000000, 0x10000000, 0x10000000, 0x10000000, 0x10000000, 0x90000000, 0x60000000, 0x00000000, 0x00000000,
    0x88000000, 0x90000000, 0xa0000000, 0xc0000000, 0xa0000000, 0x90000000, 0x88000000, 0x00000000, 0x00000000,
    0x80000000, 0x80000000, 0x80000000, 0x80000000, 0x80000000, 0x80000000, 0xf8000000, 0x00000000, 0x00000000,
    0x88000000, 0xd8000000, 0xa8000000, 0xa8000000, 0xa8000000, 0x88000000, 0x88000000, 0x00000000, 0x00000000,
    0x88000000, 0x88000000, 0xc8000000, 0xa8000000, 0x98000000, 0x88000000, 0x88000000, 0x00000000, 0x00000000,
    0x70000000, 0x88000000, 0x88000000, 0x88000000, 0x88000000, 0x88000000, 0x70000000, 0x00000000, 0x00000000,
    0xf0000000, 0x88000000, 0x88000000, 0xf0000000, 0x80000000, 0x80000000, 0x80000000, 0x00000000, 0x00000000,
    0x70000000, 0x88000000, 0x88000000, 0x88000000, 0xa8000000, 0x90000000, 0x68000000, 0x00000000, 0x00000000,
    0xf0000000, 0x88000000, 0x88000000, 0xf0000000, 0xa0000000, 0x90000000, 0x88000000, 0x00000000, 0x00000000,
    0x70000000, 0x88000000, 0x80000000, 0x70000000, 0x08000000, 0x88000000, 0x70000000, 0x00000000, 0x00000000,
    0xf8000000, 0xa8000000, 0x20000000, 0x20000000, 0x20000000, 0x20000000, 0x20000000, 0x00000000, 0x00000000,
    0x88000000, 0x88000000, 0x88000000, 0x88000000, 0x88000000, 0x88000000, 0x70000000, 0x00000000, 0x00000000,
    0x88000000, 0x88000000, 0x88000000, 0x88000000, 0x88000000, 0x50000000, 0x20000000, 0x00000000, 0x00000000,
    0x88000000, 0x88000000, 0x88000000, 0xa8000000, 0xa8000000, 0xa8000000, 0x50000000, 0x00000000, 0x00000000,
    0x88000000, 0x88000000, 0x50000000, 0x20000000, 0x50000000, 0x88000000, 0x88000000, 0x00000000, 0x00000000,
    0x88000000, 0x88000000, 0x50000000, 0x20000000, 0x20000000, 0x20000000, 0x20000000, 0x00000000, 0x00000000,
    0xf8000000, 0x08000000, 0x10000000, 0x70000000, 0x40000000, 0x80000000, 0xf8000000, 0x00000000, 0x00000000,
    0x78000000, 0x40000000, 0x40000000, 0x40000000, 0x40000000, 0x40000000, 0x78000000, 0x00000000, 0x00000000,
    0x00000000, 0x80000000, 0x40000000, 0x20000000, 0x10000000, 0x08000000, 0x00000000, 0x00000000, 0x00000000,
    0x78000000, 0x08000000, 0x08000000, 0x08000000, 0x08000000, 0x08000000, 0x78000000, 0x00000000, 0x00000000,
    0x20000000, 0x50000000, 0x88000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xf8000000, 0x00000000, 0x00000000,
    0x60000000, 0x60000000, 0x20000000, 0x10000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x60000000, 0x10000000, 0x70000000, 0x90000000, 0x78000000, 0x00000000, 0x00000000,
    0x80000000, 0x80000000, 0xb0000000, 0xc8000000, 0x88000000, 0xc8000000, 0xb0000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x70000000, 0x88000000, 0x80000000, 0x88000000, 0x70000000, 0x00000000, 0x00000000,
    0x08000000, 0x08000000, 0x68000000, 0x98000000, 0x88000000, 0x98000000, 0x68000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x70000000, 0x88000000, 0xf8000000, 0x80000000, 0x70000000, 0x00000000, 0x00000000,
    0x10000000, 0x28000000, 0x20000000, 0x70000000, 0x20000000, 0x20000000, 0x20000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x70000000, 0x98000000, 0x98000000, 0x68000000, 0x08000000, 0x70000000, 0x00000000,
    0x80000000, 0x80000000, 0xb0000000, 0xc8000000, 0x88000000, 0x88000000, 0x88000000, 0x00000000, 0x00000000,
    0x20000000, 0x00000000, 0x60000000, 0x20000000, 0x20000000, 0x20000000, 0x70000000, 0x00000000, 0x00000000,
    0x10000000, 0x00000000, 0x10000000, 0x10000000, 0x10000000, 0x90000000, 0x60000000, 0x00000000, 0x00000000,
    0x80000000, 0x80000000, 0x90000000, 0xa0000000, 0xc0000000, 0xa0000000, 0x90000000, 0x00000000, 0x00000000,
    0x60000000, 0x20000000, 0x20000000, 0x20000000, 0x20000000, 0x20000000, 0x70000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xd0000000, 0xa8000000, 0xa8000000, 0xa8000000, 0xa8000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xb0000000, 0xc8000000, 0x88000000, 0x88000000, 0x88000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x70000000, 0x88000000, 0x88000000, 0x88000000, 0x70000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xb0000000, 0xc8000000, 0xc8000000, 0xb0000000, 0x80000000, 0x80000000, 0x00000000,
    0x00000000, 0x00000000, 0x68000000, 0x98000000, 0x98000000, 0x68000000, 0x08000000, 0x08000000, 0x00000000,
    0x00000000, 0x00000000, 0xb0000000, 0xc8000000, 0x80000000, 0x80000000, 0x80000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x78000000, 0x80000000, 0x70000000, 0x08000000, 0xf0000000, 0x00000000, 0x00000000,
    0x20000000, 0x20000000, 0xf8000000, 0x20000000, 0x20000000, 0x28000000, 0x10000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x88000000, 0x88000000, 0x88000000, 0x98000000, 0x68000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x88000000, 0x88000000, 0x88000000, 0x50000000, 0x20000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x88000000, 0x88000000, 0xa8000000, 0xa8000000, 0x50000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x88000000, 0x50000000, 0x20000000, 0x50000000, 0x88000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x88000000, 0x88000000, 0x78000000, 0x08000000, 0x88000000, 0x70000000, 0x00000000,
    0x00000000, 0x00000000, 0xf8000000, 0x10000000, 0x20000000, 0x40000000, 0xf8000000, 0x00000000, 0x00000000,
    0x10000000, 0x20000000, 0x20000000, 0x40000000, 0x20000000, 0x20000000, 0x10000000, 0x00000000, 0x00000000,
    0x20000000, 0x20000000, 0x20000000, 0x00000000, 0x20000000, 0x20000000, 0x20000000, 0x00000000, 0x00000000,
    0x40000000, 0x20000000, 0x20000000, 0x10000000, 0x20000000, 0x20000000, 0x40000000, 0x00000000, 0x00000000,
    0x40000000, 0xa8000000, 0x10000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
];
