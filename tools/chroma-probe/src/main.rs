// Render an image as seen in one color model and read back a pixel
//
// Usage: chroma-probe <input> <model> [--adjust ch=delta,...] [--out path] [--at x,y]
//
// <input> is an image path, or a single `#rrggbb` color to read directly.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chroma::{Adjustment, ColorModel, Rgb, TransformOptions};
use log::info;

const USAGE: &str =
    "usage: chroma-probe <input> <model> [--adjust ch=delta,...] [--out path] [--at x,y]";

#[derive(Debug, PartialEq)]
enum Source {
    Image(PathBuf),
    Color(Rgb),
}

impl Source {
    fn parse(input: &str) -> Result<Self> {
        if input.starts_with('#') {
            Ok(Source::Color(Rgb::from_hex(input)?))
        } else {
            Ok(Source::Image(PathBuf::from(input)))
        }
    }
}

#[derive(Debug)]
struct Args {
    source: Source,
    model: ColorModel,
    adjustment: Option<Adjustment>,
    out: Option<PathBuf>,
    at: (i64, i64),
}

fn parse_adjustment(model: ColorModel, spec: &str) -> Result<Adjustment> {
    let mut adjustment = Adjustment::zero(model);
    for pair in spec.split(',').filter(|p| !p.trim().is_empty()) {
        let (channel, delta) = pair
            .split_once('=')
            .with_context(|| format!("expected ch=delta, got {pair:?}"))?;
        let delta: i32 = delta
            .trim()
            .parse()
            .with_context(|| format!("bad delta for {channel:?}"))?;
        adjustment.set_channel(&channel.trim().to_ascii_lowercase(), delta)?;
    }
    Ok(adjustment.clamped_to_input_range())
}

fn parse_point(spec: &str) -> Result<(i64, i64)> {
    let (x, y) = spec
        .split_once(',')
        .with_context(|| format!("expected x,y, got {spec:?}"))?;
    Ok((x.trim().parse()?, y.trim().parse()?))
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args> {
    let mut positional = Vec::new();
    let mut adjust = None;
    let mut out = None;
    let mut at = None;

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--adjust" => adjust = Some(argv.next().context("--adjust needs a value")?),
            "--out" => out = Some(PathBuf::from(argv.next().context("--out needs a path")?)),
            "--at" => at = Some(parse_point(&argv.next().context("--at needs x,y")?)?),
            "-h" | "--help" => bail!(USAGE),
            flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
            _ => positional.push(arg),
        }
    }

    let [input, model] = <[String; 2]>::try_from(positional)
        .map_err(|_| anyhow::anyhow!(USAGE))?;
    let model: ColorModel = model.parse()?;
    let adjustment = adjust
        .map(|spec| parse_adjustment(model, &spec))
        .transpose()?;

    Ok(Args {
        source: Source::parse(&input)?,
        model,
        adjustment,
        out,
        at: at.unwrap_or((0, 0)),
    })
}

/// Print `rgb` read in `model`, after the adjustment and before the view remap
fn print_readout(rgb: Rgb, args: &Args) {
    let adjusted = match &args.adjustment {
        Some(adjustment) => adjustment.apply(rgb),
        None => rgb,
    };
    println!("  {}", chroma::format(adjusted, args.model));
}

fn read_color(rgb: Rgb, args: &Args) {
    println!("color {}: {}", rgb.to_hex(), rgb);
    print_readout(rgb, args);
    let shown = chroma::transform_pixel(rgb, args.model, args.adjustment.as_ref());
    println!("  displayed as {shown} ({})", shown.to_hex());
}

fn read_image(path: &Path, args: &Args) -> Result<()> {
    let image = chroma::load_image(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    info!("loaded {} ({}x{})", path.display(), image.width(), image.height());

    let rendered = chroma::transform(
        &image,
        args.model,
        args.adjustment.as_ref(),
        &TransformOptions::default(),
    );

    if let Some(out) = &args.out {
        chroma::save_image(&rendered, out)
            .with_context(|| format!("cannot write {}", out.display()))?;
        println!("wrote {}", out.display());
    }

    let (x, y) = args.at;
    match chroma::sample(&image, x, y) {
        Some(rgb) => {
            println!("pixel ({x}, {y}): {} {}", rgb.to_hex(), rgb);
            print_readout(rgb, args);
            if let Some(shown) = chroma::sample(&rendered, x, y) {
                println!("  displayed as {shown}");
            }
        }
        None => println!(
            "pixel ({x}, {y}) is outside the {}x{} image",
            image.width(),
            image.height()
        ),
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args(std::env::args().skip(1))?;
    match &args.source {
        Source::Color(rgb) => {
            if args.out.is_some() {
                bail!("--out needs an image input");
            }
            read_color(*rgb, &args);
            Ok(())
        }
        Source::Image(path) => read_image(path, &args),
    }
}
