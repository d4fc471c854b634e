//! `monoglyph-spin` demo: a shaded square, a circle and a caption spinning
//! about the canvas center.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::core::{colorize, Canvas, CanvasConfig};
use crate::types::Rgb;

#[derive(Debug, Clone, PartialEq)]
pub struct SpinConfig {
    pub canvas: CanvasConfig,
    /// Stop after this many frames; `None` runs until a quit key.
    pub frames: Option<u64>,
    pub fps: u32,
    pub degrees_per_frame: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::new(60, 30, ' '),
            frames: None,
            fps: 30,
            degrees_per_frame: 3.0,
        }
    }
}

pub fn parse_spin_args(args: &[String]) -> Result<SpinConfig> {
    let mut cfg = SpinConfig::default();
    let mut config_path: Option<PathBuf> = None;
    let mut width: Option<u16> = None;
    let mut height: Option<u16> = None;
    let mut fill: Option<char> = None;

    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = || {
            args.get(i + 1)
                .ok_or_else(|| anyhow!("spin: missing value for {}", flag))
        };
        match flag {
            "--config" => config_path = Some(PathBuf::from(value()?)),
            "--width" => width = Some(parse_num(flag, value()?)?),
            "--height" => height = Some(parse_num(flag, value()?)?),
            "--frames" => cfg.frames = Some(parse_num(flag, value()?)?),
            "--fps" => cfg.fps = parse_num::<u32>(flag, value()?)?.max(1),
            "--speed" => cfg.degrees_per_frame = parse_num(flag, value()?)?,
            "--fill" => {
                let v = value()?;
                let mut chars = v.chars();
                fill = match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => return Err(anyhow!("spin: --fill expects one character, got {:?}", v)),
                };
            }
            other => return Err(anyhow!("spin: unknown argument: {}", other)),
        }
        i += 2;
    }

    // Explicit flags override the config file.
    if let Some(path) = config_path {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("spin: reading {}", path.display()))?;
        cfg.canvas = CanvasConfig::from_json_str(&text)?;
    }
    if let Some(w) = width {
        cfg.canvas.width = w;
    }
    if let Some(h) = height {
        cfg.canvas.height = h;
    }
    if let Some(c) = fill {
        cfg.canvas.default_cell = c;
    }
    Ok(cfg)
}

fn parse_num<T: std::str::FromStr>(flag: &str, v: &str) -> Result<T> {
    v.parse::<T>()
        .map_err(|_| anyhow!("spin: invalid {} value: {}", flag, v))
}

/// Render one frame of the demo at `angle_degrees` into `canvas`.
pub fn draw_spin_frame(canvas: &mut Canvas, angle_degrees: f64) {
    canvas.clear();

    let w = i32::from(canvas.width());
    let h = i32::from(canvas.height());
    let (cx, cy) = (w / 2, h / 2);
    let size = (w.min(h) / 2).max(2);

    canvas.reset_rotation();
    canvas.draw_rect((0, 0), w, h, colorize('#', 90, 90, 110));

    canvas.set_rotation(angle_degrees, cx, cy);

    // Density follows the angle so the shading visibly cycles.
    let phase = (angle_degrees.to_radians().sin() + 1.0) / 2.0;
    let shade = canvas.shade_for_intensity(0.2 + 0.8 * phase);
    canvas.fill_rect((cx - size / 2, cy - size / 2), size, size, shade);
    canvas.draw_rect((cx - size / 2, cy - size / 2), size, size, colorize('@', 255, 180, 60));

    canvas.draw_circle((cx + size, cy), (size / 4).max(1), colorize('o', 120, 255, 210));
    canvas.draw_text((cx - 4, cy - size), "monoglyph", Some(Rgb::new(200, 200, 255)));

    canvas.reset_rotation();
}
