use crate::domain::Position;

/// One waypoint of a planned flight, with whether the drone has entered
/// the central area by that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStep {
    pub position: Position,
    pub inside_central: bool,
}

/// A planned flight from origin to destination, hover steps included.
///
/// The first waypoint appears twice (hover before departure) and the last
/// waypoint appears twice (hover after arrival), so a flight always has
/// two more waypoints than the raw search path.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPath {
    steps: Vec<PathStep>,
    nodes_expanded: usize,
}

impl FlightPath {
    /// Build a flight from the raw search path by inserting hover steps.
    ///
    /// Returns `None` for an empty raw path.
    pub fn from_raw(raw: Vec<PathStep>, nodes_expanded: usize) -> Option<Self> {
        let first = *raw.first()?;
        let mut steps = raw;
        steps.insert(1, first);
        let last = *steps.last()?;
        steps.push(last);

        Some(Self {
            steps,
            nodes_expanded,
        })
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn waypoints(&self) -> Vec<Position> {
        self.steps.iter().map(|s| s.position).collect()
    }

    pub fn into_waypoints(self) -> Vec<Position> {
        self.steps.into_iter().map(|s| s.position).collect()
    }

    /// Number of waypoints, hover steps included
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of waypoints the search itself produced
    pub fn raw_len(&self) -> usize {
        self.steps.len() - 2
    }

    /// Number of moves flown, hover steps excluded
    pub fn move_count(&self) -> usize {
        self.raw_len() - 1
    }

    pub fn origin(&self) -> Position {
        self.steps[0].position
    }

    pub fn destination(&self) -> Position {
        self.steps[self.steps.len() - 1].position
    }

    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }
}
