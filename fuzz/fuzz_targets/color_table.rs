#![no_main]

//! Fuzz the color table and cell parsers: arbitrary text must never panic,
//! only parse or error.

use libfuzzer_sys::fuzz_target;

use stint_colors::{quad_colors, single_colors, ColorTable};
use stint_core::Rgb;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let _ = text.parse::<Rgb>();

    let Ok(table) = ColorTable::parse(text) else {
        return;
    };
    let _ = single_colors(&table);
    let _ = quad_colors(&table);
});
