/// Map a possibly negative index onto a closed loop of length `n`.
pub fn wrap_index(i: isize, n: usize) -> usize {
    i.rem_euclid(n as isize) as usize
}

/// The RGB colour for `hsl(hue, 100%, 50%)`, with `hue` in degrees.
pub fn hue_to_rgb(hue: u16) -> (u8, u8, u8) {
    let h = f64::from(hue % 360) / 60.0;
    // Full saturation at half lightness gives chroma 1 and no offset.
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    let (r, g, b) = match h as u8 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    let channel = |c: f64| (c * 255.0).round() as u8;
    (channel(r), channel(g), channel(b))
}
