use crate::geom::Coord;

/// An internal-consistency failure of the topology graph.
///
/// These indicate a bug or a numerical robustness failure, never an invalid
/// input geometry (that is reported as a [`ValidationError`](crate::ValidationError)).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}{}", at_coord(.coord))]
pub struct TopologyError {
    pub message: String,
    pub coord: Option<Coord>,
}

impl TopologyError {
    pub fn new(message: impl Into<String>) -> Self {
        TopologyError {
            message: message.into(),
            coord: None,
        }
    }

    pub fn at(message: impl Into<String>, coord: Coord) -> Self {
        TopologyError {
            message: message.into(),
            coord: Some(coord),
        }
    }
}

fn at_coord(coord: &Option<Coord>) -> String {
    coord.map(|c| format!(" [ {c} ]")).unwrap_or_default()
}

fn path(pts: &[Coord]) -> String {
    pts.iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" - ")
}

pub type Result<T> = std::result::Result<T, TopologyError>;

/// A noding validation failure: the segment strings are not fully noded.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum NodingError {
    #[error("found non-noded intersection between {} and {} at {at}", path(.a), path(.b))]
    NonNodedIntersection {
        a: [Coord; 2],
        b: [Coord; 2],
        at: Coord,
    },
    #[error("found non-noded collapse at {} and {}", path(.a), path(.b))]
    NonNodedCollapse { a: [Coord; 2], b: [Coord; 2] },
    #[error(
        "found endpoint/interior vertex intersection at {at} (interior of {})",
        path(.segments)
    )]
    EndpointInteriorIntersection { at: Coord, segments: [Coord; 3] },
}
