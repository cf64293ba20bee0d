use crate::foundation::{
    core::Layer,
    error::{BirdcardError, BirdcardResult},
};

const PASSES: u32 = 3;

/// Gaussian blur with standard deviation `radius`, approximated by three extended box passes
/// per axis.
///
/// Channels (alpha included) are blurred independently and edges are clamped. `radius == 0`
/// returns the input unchanged.
pub fn gaussian_blur(layer: Layer, radius: f32) -> BirdcardResult<Layer> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(BirdcardError::validation("blur radius must be finite and >= 0"));
    }
    let (width, height) = layer.dimensions();
    if radius == 0.0 || width == 0 || height == 0 {
        return Ok(layer);
    }

    let box_r = extended_box_radius(radius, PASSES);
    let (w, h) = (width as usize, height as usize);
    let mut planes = split_planes(&layer);

    let mut line = Vec::new();
    let mut scratch = BoxScratch::default();
    for plane in &mut planes {
        for _ in 0..PASSES {
            horizontal_pass(plane, w, h, box_r, &mut line, &mut scratch);
        }
        for _ in 0..PASSES {
            vertical_pass(plane, w, h, box_r, &mut line, &mut scratch);
        }
    }

    Ok(merge_planes(&planes, width, height))
}

/// Fractional box radius whose `passes`-fold convolution has variance `sigma^2`.
fn extended_box_radius(sigma: f32, passes: u32) -> f32 {
    let sigma2 = f64::from(sigma) * f64::from(sigma) / f64::from(passes);
    let l_ideal = (12.0 * sigma2 + 1.0).sqrt();
    let l = ((l_ideal - 1.0) / 2.0).floor();
    let a = (2.0 * l + 1.0) * (l * (l + 1.0) - 3.0 * sigma2);
    let a = a / (6.0 * (sigma2 - (l + 1.0) * (l + 1.0)));
    (l + a) as f32
}

#[derive(Default)]
struct BoxScratch {
    padded: Vec<f32>,
    prefix: Vec<f64>,
}

/// One box pass over `src` into `dst` (same length), edge pixels clamped.
fn box_line(src: &[f32], dst: &mut [f32], radius: f32, scratch: &mut BoxScratch) {
    let len = src.len();
    let ri = radius.floor() as usize;
    let frac = radius - ri as f32;
    let ext = ri + 1;
    let last = len - 1;

    scratch.padded.clear();
    scratch
        .padded
        .extend((0..len + 2 * ext).map(|i| src[i.saturating_sub(ext).min(last)]));

    scratch.prefix.clear();
    scratch.prefix.push(0.0);
    let mut acc = 0.0f64;
    for &v in &scratch.padded {
        acc += f64::from(v);
        scratch.prefix.push(acc);
    }

    let norm = 1.0 / (2.0 * radius + 1.0);
    for (x, out) in dst.iter_mut().enumerate() {
        let c = x + ext;
        let core = (scratch.prefix[c + ri + 1] - scratch.prefix[c - ri]) as f32;
        let edges = scratch.padded[c - ri - 1] + scratch.padded[c + ri + 1];
        *out = (core + frac * edges) * norm;
    }
}

fn horizontal_pass(
    plane: &mut [f32],
    w: usize,
    h: usize,
    radius: f32,
    line: &mut Vec<f32>,
    scratch: &mut BoxScratch,
) {
    line.resize(w, 0.0);
    for y in 0..h {
        let row = &mut plane[y * w..(y + 1) * w];
        line.copy_from_slice(row);
        box_line(line, row, radius, scratch);
    }
}

fn vertical_pass(
    plane: &mut [f32],
    w: usize,
    h: usize,
    radius: f32,
    line: &mut Vec<f32>,
    scratch: &mut BoxScratch,
) {
    let mut col = vec![0.0f32; h];
    line.resize(h, 0.0);
    for x in 0..w {
        for y in 0..h {
            line[y] = plane[y * w + x];
        }
        box_line(line, &mut col, radius, scratch);
        for y in 0..h {
            plane[y * w + x] = col[y];
        }
    }
}

fn split_planes(layer: &Layer) -> [Vec<f32>; 4] {
    let n = (layer.width() as usize) * (layer.height() as usize);
    let mut planes: [Vec<f32>; 4] = std::array::from_fn(|_| Vec::with_capacity(n));
    for px in layer.pixels() {
        for (c, plane) in planes.iter_mut().enumerate() {
            plane.push(f32::from(px.0[c]));
        }
    }
    planes
}

fn merge_planes(planes: &[Vec<f32>; 4], width: u32, height: u32) -> Layer {
    let mut out = Layer::new(width, height);
    for (i, px) in out.pixels_mut().enumerate() {
        for c in 0..4 {
            px.0[c] = planes[c][i].round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
