use std::path::PathBuf;

use clap::Parser;
use kurbo::DEFAULT_ACCURACY;
use plantopo::{
    noding::{
        FastNodingValidator, IntersectionAdder, McIndexNoder, NodedSegmentString, Noder,
        ScaledNoder, SegmentString, SimpleSnapRounder,
    },
    Coord, Envelope,
};
use usvg::tiny_skia_path::PathSegment;

/// Nodes the paths of an SVG file and draws the pieces, with a dot at
/// every node.
#[derive(Parser)]
struct Args {
    input: PathBuf,
    output: PathBuf,

    /// Snap round to a grid with this many cells per unit.
    #[arg(long)]
    snap_scale: Option<f64>,
}

fn pt(p: usvg::tiny_skia_path::Point) -> kurbo::Point {
    kurbo::Point::new(p.x as f64, p.y as f64)
}

/// Flattens every path into polylines, one per subpath.
fn svg_to_polylines(tree: &usvg::Tree) -> Vec<Vec<Coord>> {
    let mut ret = Vec::new();

    fn add_group(group: &usvg::Group, ret: &mut Vec<Vec<Coord>>) {
        for child in group.children() {
            match child {
                usvg::Node::Group(group) => add_group(group, ret),
                usvg::Node::Path(path) => {
                    let kurbo_els = path.data().segments().map(|seg| match seg {
                        PathSegment::MoveTo(p) => kurbo::PathEl::MoveTo(pt(p)),
                        PathSegment::LineTo(p) => kurbo::PathEl::LineTo(pt(p)),
                        PathSegment::QuadTo(p0, p1) => kurbo::PathEl::QuadTo(pt(p0), pt(p1)),
                        PathSegment::CubicTo(p0, p1, p2) => {
                            kurbo::PathEl::CurveTo(pt(p0), pt(p1), pt(p2))
                        }
                        PathSegment::Close => kurbo::PathEl::ClosePath,
                    });

                    let mut points = Vec::<Coord>::new();
                    kurbo::flatten(kurbo_els, DEFAULT_ACCURACY, |el| match el {
                        kurbo::PathEl::MoveTo(p) => {
                            if points.len() > 1 {
                                ret.push(std::mem::take(&mut points));
                            }
                            points.clear();
                            points.push(Coord::new(p.x, p.y));
                        }
                        kurbo::PathEl::LineTo(p) => points.push(Coord::new(p.x, p.y)),
                        kurbo::PathEl::ClosePath => {
                            if let Some(&first) = points.first() {
                                points.push(first);
                                ret.push(std::mem::take(&mut points));
                                points.push(first);
                            }
                        }
                        kurbo::PathEl::QuadTo(..) | kurbo::PathEl::CurveTo(..) => unreachable!(),
                    });

                    if points.len() > 1 {
                        ret.push(points);
                    }
                }
                _ => {}
            }
        }
    }

    add_group(tree.root(), &mut ret);
    ret
}

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let input = std::fs::read_to_string(&args.input)?;
    let tree = usvg::Tree::from_str(&input, &usvg::Options::default())?;
    let strings: Vec<NodedSegmentString<usize>> = svg_to_polylines(&tree)
        .into_iter()
        .enumerate()
        .map(|(i, pts)| NodedSegmentString::new(pts, i))
        .collect();

    let mut noder: Box<dyn Noder<usize>> = match args.snap_scale {
        Some(scale) => Box::new(ScaledNoder::new(SimpleSnapRounder::new(1.0), scale)),
        None => Box::new(McIndexNoder::new(IntersectionAdder::default())),
    };
    let noded = noder.node(strings);
    if let Err(e) = FastNodingValidator::new().check_valid(&noded) {
        eprintln!("warning: {e}");
    }

    let env = Envelope::of_points(noded.iter().flat_map(|s| s.coordinates()));
    if env.is_null() {
        anyhow::bail!("no paths in {}", args.input.display());
    }
    let pad = 1.0;
    let stroke_width = env.width().max(env.height()) / 1024.0;
    let dot_radius = stroke_width * 1.5;
    let mut document = svg::Document::new().set(
        "viewBox",
        (
            env.min_x - pad,
            env.min_y - pad,
            env.width() + 2.0 * pad,
            env.height() + 2.0 * pad,
        ),
    );

    // Alternate colours so that neighbouring pieces can be told apart.
    for (i, s) in noded.iter().enumerate() {
        let pts = s.coordinates();
        let Some(first) = pts.first() else {
            continue;
        };
        let mut data = svg::node::element::path::Data::new().move_to((first.x, first.y));
        for p in &pts[1..] {
            data = data.line_to((p.x, p.y));
        }
        let colour = if i % 2 == 0 { "black" } else { "blue" };
        let path = svg::node::element::Path::new()
            .set("stroke", colour)
            .set("stroke-width", stroke_width)
            .set("fill", "none")
            .set("d", data);
        document = document.add(path);

        for end in [pts[0], pts[pts.len() - 1]] {
            let c = svg::node::element::Circle::new()
                .set("r", dot_radius)
                .set("cx", end.x)
                .set("cy", end.y)
                .set("opacity", 0.5)
                .set("fill", "red");
            document = document.add(c);
        }
    }

    svg::save(&args.output, &document)?;

    Ok(())
}
