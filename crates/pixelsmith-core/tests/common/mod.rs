use pixelsmith_core::{Color, PixelBuffer};

/// Deterministic pseudo-random buffers covering odd sizes, edge strips and
/// saturated values.
pub fn fixture_buffers() -> Vec<PixelBuffer> {
    let sizes = [(0, 0), (1, 1), (1, 7), (7, 1), (2, 2), (3, 3), (4, 4), (5, 3), (16, 9)];
    sizes
        .iter()
        .enumerate()
        .map(|(i, &(w, h))| noise(w, h, 0x9E37_79B9 ^ i as u32))
        .chain([saturated(6, 5)])
        .collect()
}

/// xorshift noise, stable across runs.
pub fn noise(width: u32, height: u32, seed: u32) -> PixelBuffer {
    let mut state = seed.max(1);
    PixelBuffer::from_fn(width, height, |_, _| {
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        };
        Color::new(next(), next(), next())
    })
    .expect("fixture dimensions are small")
}

/// Checkerboard of pure black and pure white.
pub fn saturated(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 { Color::WHITE } else { Color::BLACK }
    })
    .expect("fixture dimensions are small")
}
