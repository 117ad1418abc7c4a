use anyhow::Context as _;
use cairo::{Context, Format, ImageSurface};
use clap::{Args, Parser, Subcommand, ValueEnum};
use snakespin::geometry::VIEWBOX_SIZE;
use snakespin::params::{DEFAULT_COLOR, DEFAULT_LENGTH, DEFAULT_SIZE, DEFAULT_SPEED};
use snakespin::{Color, Indicator, Params, Pattern, paint};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "snakespin", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Print one frame as SVG to stdout.
    Frame {
        /// Number of ticks to advance before rendering
        #[arg(short, long, default_value_t = 0)]
        tick: u32,

        #[command(flatten)]
        params: ParamArgs,
    },
    /// Write consecutive frames to a directory.
    Frames {
        /// How many frames to write (one per 16ms tick)
        #[arg(short = 'n', long, default_value_t = 60)]
        count: u32,

        /// Output directory, created if missing
        #[arg(short, long)]
        out: PathBuf,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
        format: OutputFormat,

        #[command(flatten)]
        params: ParamArgs,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

#[derive(Args, Debug, Clone)]
struct ParamArgs {
    /// Rendered size in pixels
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: f64,

    /// Rotation speed multiplier
    #[arg(long, default_value_t = DEFAULT_SPEED, allow_negative_numbers = true)]
    speed: f64,

    /// Stroke and fill color (#rrggbb)
    #[arg(long, default_value = DEFAULT_COLOR)]
    color: Color,

    /// Target arc length, 0 to 0.9
    #[arg(long, default_value_t = DEFAULT_LENGTH)]
    length: f64,

    /// Decorative pattern: scales, dots or zigzag
    #[arg(long, default_value_t = Pattern::Scales)]
    pattern: Pattern,
}

impl From<ParamArgs> for Params {
    fn from(args: ParamArgs) -> Self {
        Self {
            size: args.size,
            color: args.color,
            speed: args.speed,
            length: args.length,
            pattern: args.pattern,
            ..Params::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Frame { tick, params } => print_frame(params.into(), tick),
        Commands::Frames {
            count,
            out,
            format,
            params,
        } => write_frames(params.into(), count, &out, format),
    }
}

fn print_frame(params: Params, tick: u32) -> anyhow::Result<()> {
    let mut indicator = Indicator::new(params);
    for _ in 0..tick {
        indicator.tick();
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(indicator.to_svg().as_bytes())?;
    Ok(())
}

fn frame_file_name(index: u32, format: OutputFormat) -> String {
    format!("frame-{:04}.{}", index, format.extension())
}

fn write_frames(
    params: Params,
    count: u32,
    out: &Path,
    format: OutputFormat,
) -> anyhow::Result<()> {
    fs_err::create_dir_all(out)?;

    let mut indicator = Indicator::new(params);
    for i in 0..count {
        let path = out.join(frame_file_name(i, format));
        match format {
            OutputFormat::Svg => fs_err::write(&path, indicator.to_svg())?,
            OutputFormat::Png => write_png(&indicator, &path)
                .with_context(|| format!("Failed to render {}", path.display()))?,
        }
        indicator.tick();
    }

    log::info!("Wrote {} frames to {}", count, out.display());
    Ok(())
}

fn write_png(indicator: &Indicator, path: &Path) -> anyhow::Result<()> {
    let params = indicator.params();
    let side = params.size.round().max(1.0) as i32;
    let surface = ImageSurface::create(Format::ARgb32, side, side)?;
    {
        let cr = Context::new(&surface)?;
        let scale = side as f64 / VIEWBOX_SIZE;
        cr.scale(scale, scale);
        paint::paint(&cr, &indicator.frame(), params)?;
    }

    let mut file = fs_err::File::create(path)?;
    surface.write_to_png(&mut file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("snakespin-{}-{}", name, std::process::id()));
        let _ = fs_err::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_frame_file_name() {
        assert_eq!(frame_file_name(0, OutputFormat::Svg), "frame-0000.svg");
        assert_eq!(frame_file_name(42, OutputFormat::Png), "frame-0042.png");
        assert_eq!(frame_file_name(12345, OutputFormat::Svg), "frame-12345.svg");
    }

    #[test]
    fn test_write_frames_renders_before_ticking() {
        let dir = scratch_dir("svg");
        let params = Params {
            length: 0.5,
            ..Params::default()
        };
        write_frames(params.clone(), 3, &dir, OutputFormat::Svg).unwrap();

        let mut indicator = Indicator::new(params);
        for i in 0..3 {
            let written = fs_err::read_to_string(dir.join(frame_file_name(i, OutputFormat::Svg)))
                .unwrap();
            assert_eq!(written, indicator.to_svg());
            indicator.tick();
        }
        assert!(!dir.join(frame_file_name(3, OutputFormat::Svg)).exists());

        fs_err::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_png_uses_rounded_size() {
        let dir = scratch_dir("png");
        fs_err::create_dir_all(&dir).unwrap();
        let path = dir.join(frame_file_name(0, OutputFormat::Png));
        let indicator = Indicator::new(Params {
            size: 99.6,
            ..Params::default()
        });
        write_png(&indicator, &path).unwrap();

        let mut file = fs_err::File::open(&path).unwrap();
        let surface = ImageSurface::create_from_png(&mut file).unwrap();
        assert_eq!((surface.width(), surface.height()), (100, 100));

        fs_err::remove_dir_all(&dir).unwrap();
    }
}
