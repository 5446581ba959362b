use serde::{Deserialize, Serialize};

use super::{Coord, Envelope};

/// A single point, possibly empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point(pub Option<Coord>);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineString(pub Vec<Coord>);

/// A line string that is meant to be closed. Nothing is checked on
/// construction; closure is a validity question.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinearRing(pub Vec<Coord>);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub shell: LinearRing,
    #[serde(default)]
    pub holes: Vec<LinearRing>,
}

/// The simple-features geometry kinds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    LinearRing(LinearRing),
    Polygon(Polygon),
    MultiPoint(Vec<Point>),
    MultiLineString(Vec<LineString>),
    MultiPolygon(Vec<Polygon>),
    GeometryCollection(Vec<Geometry>),
}

impl Point {
    pub fn new(c: impl Into<Coord>) -> Self {
        Point(Some(c.into()))
    }
}

impl<P: Into<Coord>> FromIterator<P> for LineString {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        LineString(iter.into_iter().map(Into::into).collect())
    }
}

impl<P: Into<Coord>> FromIterator<P> for LinearRing {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        LinearRing(iter.into_iter().map(Into::into).collect())
    }
}

impl LinearRing {
    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => first.equals_2d(last),
            _ => true,
        }
    }

    pub fn envelope(&self) -> Envelope {
        Envelope::of_points(&self.0)
    }
}

impl Polygon {
    pub fn new(shell: LinearRing, holes: Vec<LinearRing>) -> Self {
        Polygon { shell, holes }
    }

    pub fn is_empty(&self) -> bool {
        self.shell.is_empty()
    }

    /// The shell followed by the holes.
    pub fn rings(&self) -> impl Iterator<Item = &LinearRing> {
        std::iter::once(&self.shell).chain(&self.holes)
    }
}

impl Geometry {
    /// The topological dimension: 0 for points, 1 for lines, 2 for areas.
    /// Collections take the largest dimension of their elements.
    pub fn dimension(&self) -> i32 {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => 0,
            Geometry::LineString(_) | Geometry::LinearRing(_) | Geometry::MultiLineString(_) => 1,
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) => 2,
            Geometry::GeometryCollection(gs) => {
                gs.iter().map(Geometry::dimension).max().unwrap_or(-1)
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(p) => p.0.is_none(),
            Geometry::LineString(l) => l.0.is_empty(),
            Geometry::LinearRing(r) => r.is_empty(),
            Geometry::Polygon(p) => p.is_empty(),
            Geometry::MultiPoint(ps) => ps.iter().all(|p| p.0.is_none()),
            Geometry::MultiLineString(ls) => ls.iter().all(|l| l.0.is_empty()),
            Geometry::MultiPolygon(ps) => ps.iter().all(Polygon::is_empty),
            Geometry::GeometryCollection(gs) => gs.iter().all(Geometry::is_empty),
        }
    }

    /// All coordinates, in storage order.
    pub fn coords(&self) -> Vec<Coord> {
        let mut ret = Vec::new();
        self.visit_coords(&mut |c| ret.push(*c));
        ret
    }

    fn visit_coords(&self, f: &mut impl FnMut(&Coord)) {
        match self {
            Geometry::Point(p) => p.0.iter().for_each(f),
            Geometry::LineString(l) => l.0.iter().for_each(f),
            Geometry::LinearRing(r) => r.0.iter().for_each(f),
            Geometry::Polygon(p) => p.rings().flat_map(|r| &r.0).for_each(f),
            Geometry::MultiPoint(ps) => ps.iter().flat_map(|p| &p.0).for_each(f),
            Geometry::MultiLineString(ls) => ls.iter().flat_map(|l| &l.0).for_each(f),
            Geometry::MultiPolygon(ps) => {
                ps.iter().flat_map(Polygon::rings).flat_map(|r| &r.0).for_each(f)
            }
            Geometry::GeometryCollection(gs) => {
                for g in gs {
                    g.visit_coords(f);
                }
            }
        }
    }

    pub fn envelope(&self) -> Envelope {
        let mut env = Envelope::null();
        self.visit_coords(&mut |c| env.expand_to_include(*c));
        env
    }

    /// The polygons of a `Polygon` or `MultiPolygon`, in order.
    pub fn polygons(&self) -> Vec<&Polygon> {
        match self {
            Geometry::Polygon(p) => vec![p],
            Geometry::MultiPolygon(ps) => ps.iter().collect(),
            _ => Vec::new(),
        }
    }
}

impl From<Polygon> for Geometry {
    fn from(p: Polygon) -> Self {
        Geometry::Polygon(p)
    }
}

impl From<LineString> for Geometry {
    fn from(l: LineString) -> Self {
        Geometry::LineString(l)
    }
}

impl From<LinearRing> for Geometry {
    fn from(r: LinearRing) -> Self {
        Geometry::LinearRing(r)
    }
}
