//! Render every palette, a truncation and a segmentation to
//! `swatches.html` for visual inspection.

use std::{
    error::Error,
    fs::File,
    io::{BufWriter, Write},
};

use figstyle::{palette, segment, to_css, to_gray, truncate, ColorScale, Rgba};

type Err = Box<dyn Error>;

fn table_of_colors(
    fh: &mut impl Write,
    colors: &[Rgba],
    width: u32,
    comment: &str,
) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(
            fh,
            "  <td style=\"width: {width}px; height: 30px; \
             background-color: {}\"></td>",
            to_css(c)
        )?;
    }
    writeln!(
        fh,
        "<td rowspan=\"2\" style=\"padding-left: 7px\">{comment}</td></tr><tr>"
    )?;
    for &c in colors {
        writeln!(
            fh,
            "  <td style=\"width: {width}px; height: 12px; \
             background-color: {}\"></td>",
            to_css(to_gray(c))
        )?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn scale_row(
    fh: &mut impl Write,
    scale: &impl ColorScale,
    n: usize,
    width: u32,
    comment: &str,
) -> Result<(), Err> {
    table_of_colors(fh, &scale.sample(n), width, comment)
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(
        fh,
        "<html>\n<head>\n<title>figstyle palettes</title>\n</head>\n<body>"
    )?;

    writeln!(fh, "<h3>Palettes</h3>")?;
    for name in ["viridis", "magma", "inferno", "plasma", "rdbu"] {
        let p = palette(name)?;
        table_of_colors(&mut fh, &p.colors(), 40, &format!("{} (anchors)", name))?;
        scale_row(&mut fh, &p.scale(), 150, 1, &format!("{} (interpolated)", name))?;
    }

    writeln!(fh, "<h3>Truncation</h3>")?;
    let viridis = palette("viridis")?.scale();
    let cool = truncate(&viridis, 0.0, 0.66, 128)?;
    scale_row(&mut fh, &cool, 128, 1, "viridis[0, 0.66]")?;
    let warm = truncate(&viridis, 0.5, 1.0, 128)?;
    scale_row(&mut fh, &warm, 128, 1, "viridis[0.5, 1]")?;

    writeln!(fh, "<h3>Segmentation</h3>")?;
    let seg = segment(&viridis, &[1., 2., 3., 4., 5.], 1.)?;
    table_of_colors(&mut fh, &seg.colors, 40, "5 values + overflow bin")?;

    writeln!(fh, "</body>\n</html>")?;
    Ok(())
}
