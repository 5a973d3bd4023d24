// greek_data.rs - Literal Greek upper-casing tables.
//
// Reproduced bit-for-bit from ustrcase.cpp's `data0370`/`data1F00`/`data2126`
// (see greek.rs and spec.md section 9's "Greek static data" design note:
// "must be reproduced bit-for-bit ... embed the literal tables"). Included
// directly into greek.rs via `include!` rather than declared as its own
// module, matching how the C original keeps the tables as file-local
// statics next to the functions that consume them.

const DATA_0370: [u32; 144] = [
    0x0370, 0x0370, 0x0372, 0x0372,
    0, 0, 0x0376, 0x0376,
    0, 0, 0x037A, 0x03FD,
    0x03FE, 0x03FF, 0, 0x037F,
    0, 0, 0, 0,
    0, 0, 0x0391 | HAS_VOWEL | HAS_ACCENT, 0,
    0x0395 | HAS_VOWEL | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_ACCENT, 0x0399 | HAS_VOWEL | HAS_ACCENT, 0,
    0x039F | HAS_VOWEL | HAS_ACCENT, 0, 0x03A5 | HAS_VOWEL | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_ACCENT,
    0x0399 | HAS_VOWEL | HAS_ACCENT | HAS_DIALYTIKA, 0x0391 | HAS_VOWEL, 0x0392, 0x0393,
    0x0394, 0x0395 | HAS_VOWEL, 0x0396, 0x0397 | HAS_VOWEL,
    0x0398, 0x0399 | HAS_VOWEL, 0x039A, 0x039B,
    0x039C, 0x039D, 0x039E, 0x039F | HAS_VOWEL,
    0x03A0, 0x03A1, 0, 0x03A3,
    0x03A4, 0x03A5 | HAS_VOWEL, 0x03A6, 0x03A7,
    0x03A8, 0x03A9 | HAS_VOWEL, 0x0399 | HAS_VOWEL | HAS_DIALYTIKA, 0x03A5 | HAS_VOWEL | HAS_DIALYTIKA,
    0x0391 | HAS_VOWEL | HAS_ACCENT, 0x0395 | HAS_VOWEL | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_ACCENT, 0x0399 | HAS_VOWEL | HAS_ACCENT,
    0x03A5 | HAS_VOWEL | HAS_ACCENT | HAS_DIALYTIKA, 0x0391 | HAS_VOWEL, 0x0392, 0x0393,
    0x0394, 0x0395 | HAS_VOWEL, 0x0396, 0x0397 | HAS_VOWEL,
    0x0398, 0x0399 | HAS_VOWEL, 0x039A, 0x039B,
    0x039C, 0x039D, 0x039E, 0x039F | HAS_VOWEL,
    0x03A0, 0x03A1, 0x03A3, 0x03A3,
    0x03A4, 0x03A5 | HAS_VOWEL, 0x03A6, 0x03A7,
    0x03A8, 0x03A9 | HAS_VOWEL, 0x0399 | HAS_VOWEL | HAS_DIALYTIKA, 0x03A5 | HAS_VOWEL | HAS_DIALYTIKA,
    0x039F | HAS_VOWEL | HAS_ACCENT, 0x03A5 | HAS_VOWEL | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_ACCENT, 0x03CF,
    0x0392, 0x0398, 0x03D2, 0x03D2 | HAS_ACCENT,
    0x03D2 | HAS_DIALYTIKA, 0x03A6, 0x03A0, 0x03CF,
    0x03D8, 0x03D8, 0x03DA, 0x03DA,
    0x03DC, 0x03DC, 0x03DE, 0x03DE,
    0x03E0, 0x03E0, 0, 0,
    0, 0, 0, 0,
    0, 0, 0, 0,
    0, 0, 0, 0,
    0x039A, 0x03A1, 0x03F9, 0x037F,
    0x03F4, 0x0395 | HAS_VOWEL, 0, 0x03F7,
    0x03F7, 0x03F9, 0x03FA, 0x03FA,
    0x03FC, 0x03FD, 0x03FE, 0x03FF,
];

const DATA_1F00: [u32; 256] = [
    0x0391 | HAS_VOWEL, 0x0391 | HAS_VOWEL, 0x0391 | HAS_VOWEL | HAS_ACCENT, 0x0391 | HAS_VOWEL | HAS_ACCENT,
    0x0391 | HAS_VOWEL | HAS_ACCENT, 0x0391 | HAS_VOWEL | HAS_ACCENT, 0x0391 | HAS_VOWEL | HAS_ACCENT, 0x0391 | HAS_VOWEL | HAS_ACCENT,
    0x0391 | HAS_VOWEL, 0x0391 | HAS_VOWEL, 0x0391 | HAS_VOWEL | HAS_ACCENT, 0x0391 | HAS_VOWEL | HAS_ACCENT,
    0x0391 | HAS_VOWEL | HAS_ACCENT, 0x0391 | HAS_VOWEL | HAS_ACCENT, 0x0391 | HAS_VOWEL | HAS_ACCENT, 0x0391 | HAS_VOWEL | HAS_ACCENT,
    0x0395 | HAS_VOWEL, 0x0395 | HAS_VOWEL, 0x0395 | HAS_VOWEL | HAS_ACCENT, 0x0395 | HAS_VOWEL | HAS_ACCENT,
    0x0395 | HAS_VOWEL | HAS_ACCENT, 0x0395 | HAS_VOWEL | HAS_ACCENT, 0, 0,
    0x0395 | HAS_VOWEL, 0x0395 | HAS_VOWEL, 0x0395 | HAS_VOWEL | HAS_ACCENT, 0x0395 | HAS_VOWEL | HAS_ACCENT,
    0x0395 | HAS_VOWEL | HAS_ACCENT, 0x0395 | HAS_VOWEL | HAS_ACCENT, 0, 0,
    0x0397 | HAS_VOWEL, 0x0397 | HAS_VOWEL, 0x0397 | HAS_VOWEL | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_ACCENT,
    0x0397 | HAS_VOWEL | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_ACCENT,
    0x0397 | HAS_VOWEL, 0x0397 | HAS_VOWEL, 0x0397 | HAS_VOWEL | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_ACCENT,
    0x0397 | HAS_VOWEL | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_ACCENT,
    0x0399 | HAS_VOWEL, 0x0399 | HAS_VOWEL, 0x0399 | HAS_VOWEL | HAS_ACCENT, 0x0399 | HAS_VOWEL | HAS_ACCENT,
    0x0399 | HAS_VOWEL | HAS_ACCENT, 0x0399 | HAS_VOWEL | HAS_ACCENT, 0x0399 | HAS_VOWEL | HAS_ACCENT, 0x0399 | HAS_VOWEL | HAS_ACCENT,
    0x0399 | HAS_VOWEL, 0x0399 | HAS_VOWEL, 0x0399 | HAS_VOWEL | HAS_ACCENT, 0x0399 | HAS_VOWEL | HAS_ACCENT,
    0x0399 | HAS_VOWEL | HAS_ACCENT, 0x0399 | HAS_VOWEL | HAS_ACCENT, 0x0399 | HAS_VOWEL | HAS_ACCENT, 0x0399 | HAS_VOWEL | HAS_ACCENT,
    0x039F | HAS_VOWEL, 0x039F | HAS_VOWEL, 0x039F | HAS_VOWEL | HAS_ACCENT, 0x039F | HAS_VOWEL | HAS_ACCENT,
    0x039F | HAS_VOWEL | HAS_ACCENT, 0x039F | HAS_VOWEL | HAS_ACCENT, 0, 0,
    0x039F | HAS_VOWEL, 0x039F | HAS_VOWEL, 0x039F | HAS_VOWEL | HAS_ACCENT, 0x039F | HAS_VOWEL | HAS_ACCENT,
    0x039F | HAS_VOWEL | HAS_ACCENT, 0x039F | HAS_VOWEL | HAS_ACCENT, 0, 0,
    0x03A5 | HAS_VOWEL, 0x03A5 | HAS_VOWEL, 0x03A5 | HAS_VOWEL | HAS_ACCENT, 0x03A5 | HAS_VOWEL | HAS_ACCENT,
    0x03A5 | HAS_VOWEL | HAS_ACCENT, 0x03A5 | HAS_VOWEL | HAS_ACCENT, 0x03A5 | HAS_VOWEL | HAS_ACCENT, 0x03A5 | HAS_VOWEL | HAS_ACCENT,
    0, 0x03A5 | HAS_VOWEL, 0, 0x03A5 | HAS_VOWEL | HAS_ACCENT,
    0, 0x03A5 | HAS_VOWEL | HAS_ACCENT, 0, 0x03A5 | HAS_VOWEL | HAS_ACCENT,
    0x03A9 | HAS_VOWEL, 0x03A9 | HAS_VOWEL, 0x03A9 | HAS_VOWEL | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_ACCENT,
    0x03A9 | HAS_VOWEL | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_ACCENT,
    0x03A9 | HAS_VOWEL, 0x03A9 | HAS_VOWEL, 0x03A9 | HAS_VOWEL | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_ACCENT,
    0x03A9 | HAS_VOWEL | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_ACCENT,
    0x0391 | HAS_VOWEL | HAS_ACCENT, 0x0391 | HAS_VOWEL | HAS_ACCENT, 0x0395 | HAS_VOWEL | HAS_ACCENT, 0x0395 | HAS_VOWEL | HAS_ACCENT,
    0x0397 | HAS_VOWEL | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_ACCENT, 0x0399 | HAS_VOWEL | HAS_ACCENT, 0x0399 | HAS_VOWEL | HAS_ACCENT,
    0x039F | HAS_VOWEL | HAS_ACCENT, 0x039F | HAS_VOWEL | HAS_ACCENT, 0x03A5 | HAS_VOWEL | HAS_ACCENT, 0x03A5 | HAS_VOWEL | HAS_ACCENT,
    0x03A9 | HAS_VOWEL | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_ACCENT, 0, 0,
    0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI, 0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI, 0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT,
    0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT,
    0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI, 0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI, 0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT,
    0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT,
    0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI, 0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI, 0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT,
    0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT,
    0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI, 0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI, 0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT,
    0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT,
    0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI, 0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI, 0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT,
    0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT,
    0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI, 0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI, 0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT,
    0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT,
    0x0391 | HAS_VOWEL, 0x0391 | HAS_VOWEL, 0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI,
    0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0, 0x0391 | HAS_VOWEL | HAS_ACCENT, 0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT,
    0x0391 | HAS_VOWEL, 0x0391 | HAS_VOWEL, 0x0391 | HAS_VOWEL | HAS_ACCENT, 0x0391 | HAS_VOWEL | HAS_ACCENT,
    0x0391 | HAS_VOWEL | HAS_YPOGEGRAMMENI, 0, 0x0399 | HAS_VOWEL, 0,
    0, 0, 0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI,
    0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0, 0x0397 | HAS_VOWEL | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT,
    0x0395 | HAS_VOWEL | HAS_ACCENT, 0x0395 | HAS_VOWEL | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_ACCENT, 0x0397 | HAS_VOWEL | HAS_ACCENT,
    0x0397 | HAS_VOWEL | HAS_YPOGEGRAMMENI, 0, 0, 0,
    0x0399 | HAS_VOWEL, 0x0399 | HAS_VOWEL, 0x0399 | HAS_VOWEL | HAS_ACCENT | HAS_DIALYTIKA, 0x0399 | HAS_VOWEL | HAS_ACCENT | HAS_DIALYTIKA,
    0, 0, 0x0399 | HAS_VOWEL | HAS_ACCENT, 0x0399 | HAS_VOWEL | HAS_ACCENT | HAS_DIALYTIKA,
    0x0399 | HAS_VOWEL, 0x0399 | HAS_VOWEL, 0x0399 | HAS_VOWEL | HAS_ACCENT, 0x0399 | HAS_VOWEL | HAS_ACCENT,
    0, 0, 0, 0,
    0x03A5 | HAS_VOWEL, 0x03A5 | HAS_VOWEL, 0x03A5 | HAS_VOWEL | HAS_ACCENT | HAS_DIALYTIKA, 0x03A5 | HAS_VOWEL | HAS_ACCENT | HAS_DIALYTIKA,
    0x03A1, 0x03A1, 0x03A5 | HAS_VOWEL | HAS_ACCENT, 0x03A5 | HAS_VOWEL | HAS_ACCENT | HAS_DIALYTIKA,
    0x03A5 | HAS_VOWEL, 0x03A5 | HAS_VOWEL, 0x03A5 | HAS_VOWEL | HAS_ACCENT, 0x03A5 | HAS_VOWEL | HAS_ACCENT,
    0x03A1, 0, 0, 0,
    0, 0, 0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI,
    0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT, 0, 0x03A9 | HAS_VOWEL | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI | HAS_ACCENT,
    0x039F | HAS_VOWEL | HAS_ACCENT, 0x039F | HAS_VOWEL | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_ACCENT, 0x03A9 | HAS_VOWEL | HAS_ACCENT,
    0x03A9 | HAS_VOWEL | HAS_YPOGEGRAMMENI, 0, 0, 0,
];

const DATA_2126: u32 = 0x03A9 | HAS_VOWEL;
