#![no_main]

use crmath::{
    RoundingMode, cbrtf_with, clear_exceptions, powf_with, sinf_with, take_math_error,
};
use libfuzzer_sys::fuzz_target;

fn same(a: f32, b: f32) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

fn ordered(down: f32, near: f32, up: f32) -> bool {
    if down.is_nan() || near.is_nan() || up.is_nan() {
        return down.is_nan() && near.is_nan() && up.is_nan();
    }
    down <= near && near <= up
}

fuzz_target!(|data: u64| {
    let lo = data.to_ne_bytes();

    let x = f32::from_bits(u32::from_ne_bytes([lo[0], lo[1], lo[2], lo[3]]));
    let y = f32::from_bits(u32::from_ne_bytes([lo[4], lo[5], lo[6], lo[7]]));

    for mode in RoundingMode::ALL {
        let mirrored = match mode {
            RoundingMode::Upward => RoundingMode::Downward,
            RoundingMode::Downward => RoundingMode::Upward,
            m => m,
        };
        assert!(same(cbrtf_with(-x, mode), -cbrtf_with(x, mirrored)));
        assert!(same(sinf_with(-x, mode), -sinf_with(x, mirrored)));
        assert!(same(powf_with(x, 1.0, mode), x));
    }

    let down = cbrtf_with(x, RoundingMode::Downward);
    let near = cbrtf_with(x, RoundingMode::Nearest);
    let up = cbrtf_with(x, RoundingMode::Upward);
    assert!(ordered(down, near, up));

    let down = sinf_with(x, RoundingMode::Downward);
    let near = sinf_with(x, RoundingMode::Nearest);
    let up = sinf_with(x, RoundingMode::Upward);
    assert!(ordered(down, near, up));

    let down = powf_with(x, y, RoundingMode::Downward);
    let near = powf_with(x, y, RoundingMode::Nearest);
    let up = powf_with(x, y, RoundingMode::Upward);
    assert!(ordered(down, near, up));

    clear_exceptions();
    _ = take_math_error();
});
