//! Pick colors from a generated photo and print the palette for every shade
//! and display mode.
//!
//! Usage: `huepick-swatch [x,y]...`. Points are in canvas coordinates. With
//! no points the center of the canvas is picked.

use std::error::Error;

use euclid::default::Point2D;
use huepick::{
    Component, DisplayMode, Picker, PickerOptions, PixelBuffer, PixelFormat, ShadeKind,
};
use image::{Rgba, RgbaImage};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_filled_rect_mut},
    rect::Rect,
};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

/// A landscape picture: a gray ramp from left to right with a few colored
/// shapes on top.
fn photo() -> RgbaImage {
    let mut img = RgbaImage::new(WIDTH, HEIGHT);

    img.enumerate_pixels_mut().for_each(|(x, _, pixel)| {
        let v = (x as f32 / WIDTH as f32 * 255.0).round() as u8;
        *pixel = Rgba([v, v, v, 255]);
    });

    draw_filled_rect_mut(
        &mut img,
        Rect::at(200, 120).of_size(240, 240),
        Rgba([210, 105, 30, 255]),
    );
    draw_filled_rect_mut(
        &mut img,
        Rect::at(40, 40).of_size(120, 80),
        Rgba([30, 144, 255, 255]),
    );
    draw_filled_circle_mut(&mut img, (320, 240), 40, Rgba([255, 0, 0, 255]));

    img
}

fn parse_point(arg: &str) -> Result<Point2D<Component>, Box<dyn Error>> {
    let (x, y) = arg
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {arg:?}"))?;
    Ok(Point2D::new(x.trim().parse()?, y.trim().parse()?))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let img = photo();
    let (width, height) = img.dimensions();
    let source = PixelBuffer::packed(width, height, PixelFormat::RGBA8, img.into_raw())?;
    let picker = Picker::new(&source, PickerOptions::default())?;
    log::info!(
        "resampled {width}x{height} photo onto a {}x{} canvas",
        picker.canvas().width(),
        picker.canvas().height()
    );

    let points = std::env::args()
        .skip(1)
        .map(|arg| parse_point(&arg))
        .collect::<Result<Vec<_>, _>>()?;

    let picks = if points.is_empty() {
        vec![picker.pick_default()]
    } else {
        points.into_iter().map(|p| picker.pick(p)).collect()
    };

    for pick in picks {
        println!(
            "{},{}: {} (secondary {})",
            pick.point.x, pick.point.y, pick.hex, pick.secondary
        );

        for shade in ShadeKind::ALL {
            let line = DisplayMode::ALL
                .iter()
                .map(|&mode| {
                    let hexes = pick
                        .display_colors(shade, mode)
                        .iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>();
                    format!("{:>8} {}", mode.title(), hexes.join(" -> "))
                })
                .collect::<Vec<_>>()
                .join("  ");
            println!("  {:<11} {line}", shade.title());
        }
    }

    Ok(())
}
