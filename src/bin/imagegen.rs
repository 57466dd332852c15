use std::path::PathBuf;

use structopt::StructOpt;

use mandelzoom::coord::{Axis, Viewport};
use mandelzoom::painter::{Banded, Greyscale};
use mandelzoom::Mandelbrot;

#[derive(StructOpt)]
#[structopt(name = "mandelzoom-imagegen", about = "Render a Mandelbrot still to PNG")]
struct Opt {
    #[structopt(long, default_value = "600")]
    width: u32,

    #[structopt(long, default_value = "600")]
    height: u32,

    #[structopt(short = "i", long, default_value = "1000")]
    iterations: i32,

    #[structopt(long, default_value = "-2.2", allow_hyphen_values = true)]
    x_min: f64,

    #[structopt(long, default_value = "2.2", allow_hyphen_values = true)]
    x_max: f64,

    #[structopt(long, default_value = "-2.2", allow_hyphen_values = true)]
    y_min: f64,

    #[structopt(long, default_value = "2.2", allow_hyphen_values = true)]
    y_max: f64,

    #[structopt(long)]
    greyscale: bool,

    #[structopt(short, long, default_value = "out.png", parse(from_os_str))]
    output: PathBuf,
}

fn main() {
    let opt = Opt::from_args();
    let viewport = Viewport::new(
        Axis::new(opt.x_min, opt.x_max),
        Axis::new(opt.y_min, opt.y_max),
    );

    let img = if opt.greyscale {
        let palette = Greyscale::new(opt.iterations as f64);
        Mandelbrot::initialize(viewport, opt.iterations, palette).render(opt.width, opt.height)
    } else {
        Mandelbrot::initialize(viewport, opt.iterations, Banded).render(opt.width, opt.height)
    };
    img.save(&opt.output).expect("failed to save image");
}
