use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;
use instant::Instant;
use waves_core::{
    Palette, Raster, Rgb, WaveEvent, WaveParams, WaveState, WavesError, INITIAL_SEED, NUM_LINES,
};

#[derive(Parser, Debug)]
#[command(name = "waves-native", version, about = "Render one waves frame to a PNG")]
struct Cli {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Viewport height the canvas is sized from (pixels).
    #[arg(long, default_value_t = 1000.0)]
    viewport_height: f64,

    /// Noise seed.
    #[arg(long, default_value_t = INITIAL_SEED)]
    seed: u32,

    /// Pointer position in canvas pixels, as `X,Y`. Defaults to the
    /// synthetic first-frame position.
    #[arg(long, value_parser = parse_pointer)]
    pointer: Option<(f32, f32)>,

    /// Number of bands.
    #[arg(long, default_value_t = NUM_LINES)]
    lines: usize,

    /// Comma-separated `#RRGGBB` band colors.
    #[arg(long)]
    palette: Option<String>,

    /// Simulated taps applied before rendering (each advances the seed and
    /// shuffles the palette).
    #[arg(long, default_value_t = 0)]
    taps: u32,

    /// Seed for the grain and palette shuffles; random when omitted.
    #[arg(long)]
    rng_seed: Option<u64>,
}

fn parse_pointer(s: &str) -> Result<(f32, f32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse::<f32>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f32>().map_err(|e| e.to_string())?;
    Ok((x, y))
}

fn parse_palette(s: &str) -> Result<Palette, WavesError> {
    let colors = s
        .split(',')
        .map(Rgb::from_hex)
        .collect::<Result<Vec<_>, _>>()?;
    Palette::new(colors)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let mut params = WaveParams {
        num_lines: cli.lines,
        initial_seed: cli.seed,
        ..WaveParams::default()
    };
    if let Some(p) = &cli.palette {
        params.palette = parse_palette(p).context("parsing --palette")?;
    }

    let mut state = match cli.rng_seed {
        Some(s) => WaveState::with_rng_seed(params, cli.viewport_height, s),
        None => WaveState::new(params, cli.viewport_height),
    };

    let t0 = Instant::now();
    for i in 0..cli.taps {
        let at = t0 + Duration::from_millis(u64::from(i) * 500);
        state.apply(WaveEvent::PointerPressed { at });
        state.apply(WaveEvent::PointerReleased {
            at: at + Duration::from_millis(10),
        });
    }
    if let Some((x, y)) = cli.pointer {
        state.apply(WaveEvent::PointerMoved { x, y });
    }

    let frame = state.frame();
    let raster = Raster::render_frame(&frame, state.grain()).context("rasterising frame")?;
    let (w, h) = (raster.width(), raster.height());
    let img = image::RgbaImage::from_raw(w, h, raster.into_rgba8())
        .ok_or_else(|| anyhow::anyhow!("raster buffer does not match {w}x{h}"))?;
    img.save(&cli.out)
        .with_context(|| format!("writing {}", cli.out.display()))?;

    log::info!(
        "[native] wrote {} ({}x{}, seed={}, pointer=({:.1},{:.1}))",
        cli.out.display(),
        w,
        h,
        state.seed(),
        state.pointer().x,
        state.pointer().y
    );
    Ok(())
}
