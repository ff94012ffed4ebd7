use std::io::Cursor;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};

use crate::rink::{X_EXTENT, Y_EXTENT};
use crate::shots::{ShotEvent, ShotReport};

/// Gaussian kernel bandwidth in rink feet.
const BANDWIDTH: f64 = 7.0;

/// Kernel contributions beyond this many bandwidths are dropped.
const KERNEL_REACH: f64 = 4.0;

/// Fraction of the peak density below which pixels stay transparent,
/// so the heat layer fades out instead of tinting the whole rink.
const SHADE_FLOOR: f64 = 0.08;

/// Opacity of the heat layer at the density peak.
const MAX_ALPHA: f64 = 0.9;

// Home chances shade in reds, away chances in blues.
const HOME_SHADE: [f64; 3] = [178.0, 24.0, 43.0];
const AWAY_SHADE: [f64; 3] = [33.0, 102.0, 172.0];

/// Composite a kernel-density heat layer for each side onto the rink
/// template. Sides with no shot attempts contribute no layer, so an
/// empty report reproduces the bare rink.
pub fn shotmap(rink: &RgbaImage, report: &ShotReport) -> RgbaImage {
    let mut canvas = rink.clone();
    overlay_density(&mut canvas, &report.away, AWAY_SHADE);
    overlay_density(&mut canvas, &report.home, HOME_SHADE);
    canvas
}

pub fn encode_png(shotmap: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    shotmap
        .write_to(&mut buffer, ImageFormat::Png)
        .context("encoding shotmap to png")?;
    Ok(buffer.into_inner())
}

fn overlay_density(canvas: &mut RgbaImage, shots: &[ShotEvent], shade: [f64; 3]) {
    if shots.is_empty() {
        return;
    }

    let (width, height) = canvas.dimensions();
    let densities = density_grid(width, height, shots);

    let peak = densities.iter().cloned().fold(0.0_f64, f64::max);
    if peak <= 0.0 {
        return;
    }

    for (index, density) in densities.iter().enumerate() {
        let level = density / peak;
        if level < SHADE_FLOOR {
            continue;
        }

        let px = (index as u32) % width;
        let py = (index as u32) / width;
        let alpha = level * MAX_ALPHA;

        let pixel = canvas.get_pixel_mut(px, py);
        for channel in 0..3 {
            let base = f64::from(pixel.0[channel]);
            let blended = base * (1.0 - alpha) + shade[channel] * alpha;
            pixel.0[channel] = blended.round().clamp(0.0, 255.0) as u8;
        }
    }
}

/// Evaluate the Gaussian kernel-density estimate at every pixel centre
/// of the rink coordinate space. Row-major, matching the image layout.
fn density_grid(width: u32, height: u32, shots: &[ShotEvent]) -> Vec<f64> {
    let x_step = 2.0 * X_EXTENT / f64::from(width);
    let y_step = 2.0 * Y_EXTENT / f64::from(height);
    let variance = 2.0 * BANDWIDTH * BANDWIDTH;
    let reach_squared = (KERNEL_REACH * BANDWIDTH).powi(2);

    let mut densities = vec![0.0; (width * height) as usize];
    for py in 0..height {
        let y = Y_EXTENT - (f64::from(py) + 0.5) * y_step;
        for px in 0..width {
            let x = -X_EXTENT + (f64::from(px) + 0.5) * x_step;

            let mut density = 0.0;
            for shot in shots {
                let dx = x - shot.x;
                let dy = y - shot.y;
                let distance_squared = dx * dx + dy * dy;
                if distance_squared > reach_squared {
                    continue;
                }
                density += (-distance_squared / variance).exp();
            }
            densities[(py * width + px) as usize] = density;
        }
    }

    densities
}
