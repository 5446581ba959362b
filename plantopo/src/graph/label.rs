use serde::{Deserialize, Serialize};

/// Where a point lies relative to a geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Not yet known.
    #[default]
    None,
    Exterior,
    Boundary,
    Interior,
}

impl Location {
    pub fn symbol(self) -> char {
        match self {
            Location::None => '-',
            Location::Exterior => 'e',
            Location::Boundary => 'b',
            Location::Interior => 'i',
        }
    }
}

/// A side of a directed edge, or the edge itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    On,
    Left,
    Right,
}

impl Position {
    /// Swaps left and right; `On` stays put.
    pub fn opposite(self) -> Position {
        match self {
            Position::On => Position::On,
            Position::Left => Position::Right,
            Position::Right => Position::Left,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Position::On => 0,
            Position::Left => 1,
            Position::Right => 2,
        }
    }
}

/// The locations of an edge (and, for area edges, of its two sides)
/// relative to one geometry.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TopologyLocation {
    locs: [Location; 3],
    area: bool,
}

impl TopologyLocation {
    pub fn line(on: Location) -> Self {
        TopologyLocation {
            locs: [on, Location::None, Location::None],
            area: false,
        }
    }

    pub fn area(on: Location, left: Location, right: Location) -> Self {
        TopologyLocation {
            locs: [on, left, right],
            area: true,
        }
    }

    /// The location at `pos`. Line locations only have an `On` location; the
    /// sides of a line are `Location::None`.
    pub fn get(&self, pos: Position) -> Location {
        self.locs[pos.index()]
    }

    /// Sets the location at `pos`. Setting a side of a line location
    /// promotes it to an area location.
    pub fn set(&mut self, pos: Position, loc: Location) {
        if pos != Position::On {
            self.area = true;
        }
        self.locs[pos.index()] = loc;
    }

    pub fn set_all(&mut self, loc: Location) {
        let n = self.len();
        for l in &mut self.locs[..n] {
            *l = loc;
        }
    }

    pub fn set_all_if_none(&mut self, loc: Location) {
        let n = self.len();
        for l in &mut self.locs[..n] {
            if *l == Location::None {
                *l = loc;
            }
        }
    }

    pub fn flip(&mut self) {
        if self.area {
            self.locs.swap(1, 2);
        }
    }

    /// Fills in the unknown locations of `self` from `other`.
    pub fn merge(&mut self, other: &TopologyLocation) {
        if other.area && !self.area {
            self.area = true;
            self.locs[1] = Location::None;
            self.locs[2] = Location::None;
        }
        for i in 0..self.len().min(other.len()) {
            if self.locs[i] == Location::None {
                self.locs[i] = other.locs[i];
            }
        }
    }

    pub fn is_null(&self) -> bool {
        self.locs[..self.len()].iter().all(|l| *l == Location::None)
    }

    pub fn is_any_null(&self) -> bool {
        self.locs[..self.len()].iter().any(|l| *l == Location::None)
    }

    pub fn is_area(&self) -> bool {
        self.area
    }

    pub fn is_line(&self) -> bool {
        !self.area
    }

    pub fn all_positions_equal(&self, loc: Location) -> bool {
        self.locs[..self.len()].iter().all(|l| *l == loc)
    }

    fn len(&self) -> usize {
        if self.area {
            3
        } else {
            1
        }
    }
}

impl std::fmt::Debug for TopologyLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.area {
            write!(
                f,
                "{}{}{}",
                self.locs[1].symbol(),
                self.locs[0].symbol(),
                self.locs[2].symbol()
            )
        } else {
            write!(f, "{}", self.locs[0].symbol())
        }
    }
}

/// The topological relationship of an edge or node to the two input
/// geometries (operands 0 and 1).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label {
    elt: [TopologyLocation; 2],
}

impl Default for Label {
    fn default() -> Self {
        Label::line(Location::None)
    }
}

impl Label {
    /// A line label with the same location for both operands.
    pub fn line(on: Location) -> Self {
        Label {
            elt: [TopologyLocation::line(on); 2],
        }
    }

    /// A line label that only knows about operand `geom`.
    pub fn on_geom(geom: usize, on: Location) -> Self {
        let mut label = Label::line(Location::None);
        label.elt[geom] = TopologyLocation::line(on);
        label
    }

    pub fn area(on: Location, left: Location, right: Location) -> Self {
        Label {
            elt: [TopologyLocation::area(on, left, right); 2],
        }
    }

    /// An area label that only knows about operand `geom`.
    pub fn area_on_geom(geom: usize, on: Location, left: Location, right: Location) -> Self {
        let none = TopologyLocation::area(Location::None, Location::None, Location::None);
        let mut label = Label { elt: [none; 2] };
        label.elt[geom] = TopologyLocation::area(on, left, right);
        label
    }

    pub fn location(&self, geom: usize, pos: Position) -> Location {
        self.elt[geom].get(pos)
    }

    pub fn on_location(&self, geom: usize) -> Location {
        self.elt[geom].get(Position::On)
    }

    pub fn set_location(&mut self, geom: usize, pos: Position, loc: Location) {
        self.elt[geom].set(pos, loc);
    }

    pub fn set_all_locations(&mut self, geom: usize, loc: Location) {
        self.elt[geom].set_all(loc);
    }

    pub fn set_all_locations_if_none(&mut self, geom: usize, loc: Location) {
        self.elt[geom].set_all_if_none(loc);
    }

    pub fn topology_location(&self, geom: usize) -> &TopologyLocation {
        &self.elt[geom]
    }

    pub fn flip(&mut self) {
        self.elt[0].flip();
        self.elt[1].flip();
    }

    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }

    pub fn merge(&mut self, other: &Label) {
        self.elt[0].merge(&other.elt[0]);
        self.elt[1].merge(&other.elt[1]);
    }

    pub fn is_area(&self) -> bool {
        self.elt[0].is_area() || self.elt[1].is_area()
    }

    pub fn is_area_of(&self, geom: usize) -> bool {
        self.elt[geom].is_area()
    }

    pub fn is_line(&self, geom: usize) -> bool {
        self.elt[geom].is_line()
    }

    pub fn is_null(&self, geom: usize) -> bool {
        self.elt[geom].is_null()
    }

    pub fn is_any_null(&self, geom: usize) -> bool {
        self.elt[geom].is_any_null()
    }

    /// Demotes operand `geom` to a line label, keeping its `On` location.
    pub fn to_line(&mut self, geom: usize) {
        if self.elt[geom].is_area() {
            self.elt[geom] = TopologyLocation::line(self.elt[geom].get(Position::On));
        }
    }

    pub fn all_positions_equal(&self, geom: usize, loc: Location) -> bool {
        self.elt[geom].all_positions_equal(loc)
    }

    pub fn geometry_count(&self) -> usize {
        self.elt.iter().filter(|e| !e.is_null()).count()
    }
}

impl std::fmt::Debug for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "A:{:?} B:{:?}", self.elt[0], self.elt[1])
    }
}
