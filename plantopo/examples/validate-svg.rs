use std::path::PathBuf;

use clap::Parser;
use kurbo::DEFAULT_ACCURACY;
use plantopo::{Coord, Geometry, IsValidOp, LinearRing, Polygon, ValidOptions};
use usvg::tiny_skia_path::PathSegment;

/// Reads each path of an SVG file as a polygon (the first closed subpath is
/// the shell, the rest are holes), checks the lot for validity and draws it
/// with the problem marked.
#[derive(Parser)]
struct Args {
    input: PathBuf,
    output: PathBuf,

    #[arg(long)]
    allow_self_touching_rings: bool,
}

fn pt(p: usvg::tiny_skia_path::Point) -> kurbo::Point {
    kurbo::Point::new(p.x as f64, p.y as f64)
}

fn path_to_polygon(path: &usvg::Path) -> Option<Polygon> {
    let kurbo_els = path.data().segments().map(|seg| match seg {
        PathSegment::MoveTo(p) => kurbo::PathEl::MoveTo(pt(p)),
        PathSegment::LineTo(p) => kurbo::PathEl::LineTo(pt(p)),
        PathSegment::QuadTo(p0, p1) => kurbo::PathEl::QuadTo(pt(p0), pt(p1)),
        PathSegment::CubicTo(p0, p1, p2) => kurbo::PathEl::CurveTo(pt(p0), pt(p1), pt(p2)),
        PathSegment::Close => kurbo::PathEl::ClosePath,
    });

    let mut rings = Vec::<LinearRing>::new();
    let mut points = Vec::<Coord>::new();
    kurbo::flatten(kurbo_els, DEFAULT_ACCURACY, |el| match el {
        kurbo::PathEl::MoveTo(p) => {
            points.clear();
            points.push(Coord::new(p.x, p.y));
        }
        kurbo::PathEl::LineTo(p) => points.push(Coord::new(p.x, p.y)),
        kurbo::PathEl::ClosePath => {
            if let Some(&first) = points.first() {
                points.push(first);
                rings.push(LinearRing(std::mem::take(&mut points)));
            }
        }
        kurbo::PathEl::QuadTo(..) | kurbo::PathEl::CurveTo(..) => unreachable!(),
    });

    let mut rings = rings.into_iter();
    let shell = rings.next()?;
    Some(Polygon::new(shell, rings.collect()))
}

fn add_group(group: &usvg::Group, ret: &mut Vec<Polygon>) {
    for child in group.children() {
        match child {
            usvg::Node::Group(group) => add_group(group, ret),
            usvg::Node::Path(path) => ret.extend(path_to_polygon(path)),
            _ => {}
        }
    }
}

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let input = std::fs::read_to_string(&args.input)?;
    let tree = usvg::Tree::from_str(&input, &usvg::Options::default())?;
    let mut polygons = Vec::new();
    add_group(tree.root(), &mut polygons);
    let geom = Geometry::MultiPolygon(polygons);

    let options = ValidOptions::default()
        .self_touching_ring_forming_hole_valid(args.allow_self_touching_rings);
    let error = IsValidOp::with_options(&geom, options).validation_error()?;
    match &error {
        Some(e) => println!("{e}"),
        None => println!("valid"),
    }

    let env = geom.envelope();
    if env.is_null() {
        anyhow::bail!("no closed paths in {}", args.input.display());
    }
    let pad = 1.0;
    let stroke_width = env.width().max(env.height()) / 1024.0;
    let mut document = svg::Document::new().set(
        "viewBox",
        (
            env.min_x - pad,
            env.min_y - pad,
            env.width() + 2.0 * pad,
            env.height() + 2.0 * pad,
        ),
    );

    for poly in geom.polygons() {
        let mut data = svg::node::element::path::Data::new();
        for ring in poly.rings() {
            let Some((first, rest)) = ring.coords().split_first() else {
                continue;
            };
            data = data.move_to((first.x, first.y));
            for p in rest {
                data = data.line_to((p.x, p.y));
            }
            data = data.close();
        }
        let path = svg::node::element::Path::new()
            .set("stroke", "black")
            .set("stroke-width", stroke_width)
            .set("fill", "grey")
            .set("fill-opacity", 0.3)
            .set("fill-rule", "evenodd")
            .set("d", data);
        document = document.add(path);
    }

    if let Some(e) = error {
        let c = svg::node::element::Circle::new()
            .set("r", stroke_width * 4.0)
            .set("cx", e.coord.x)
            .set("cy", e.coord.y)
            .set("fill", "red");
        document = document.add(c);
    }

    svg::save(&args.output, &document)?;

    Ok(())
}
